//! # Adapter
//!
//! Makes an incompatible [`Adaptee`] usable through the [`Target`] interface the
//! client already speaks.

use crate::framework::Console;

/// The domain-specific interface used by client code.
pub trait Target {
    fn request(&self) -> String {
        "Target: The default target's behavior.".to_string()
    }
}

/// A target that keeps the default behaviour.
#[derive(Debug, Default)]
pub struct DefaultTarget;

impl Target for DefaultTarget {}

/// Useful behaviour behind an interface the client cannot use directly.
#[derive(Debug, Default)]
pub struct Adaptee;

impl Adaptee {
    pub fn specific_request(&self) -> String {
        ".eetpadA eht fo roivaheb laicepS".to_string()
    }
}

/// Borrows an adaptee and translates its output into the target's terms.
pub struct Adapter<'a> {
    adaptee: &'a Adaptee,
}

impl<'a> Adapter<'a> {
    pub fn new(adaptee: &'a Adaptee) -> Self {
        Self { adaptee }
    }
}

impl Target for Adapter<'_> {
    fn request(&self) -> String {
        let translated: String = self.adaptee.specific_request().chars().rev().collect();
        format!("Adapter: (TRANSLATED) {translated}")
    }
}

pub fn client_code(target: &dyn Target, console: &Console) {
    console.print(target.request());
}

/// Client driver.
pub fn demo(console: &Console) {
    console.line("Client: I can work just fine with the Target objects:");
    client_code(&DefaultTarget, console);
    console.print("\n\n");

    let adaptee = Adaptee;
    console.line("Client: The Adaptee class has a weird interface. See, I don't understand it:");
    console.print(format!("Adaptee: {}", adaptee.specific_request()));
    console.print("\n\n");

    console.line("Client: But I can work with it via the Adapter:");
    client_code(&Adapter::new(&adaptee), console);
    console.blank();
}
