//! # Facade
//!
//! One simple entry point in front of several subsystems. The facade can be handed
//! subsystems the client already built or create the missing ones itself; either
//! way it owns them from then on.

use crate::framework::Console;
use tracing::debug;

#[derive(Debug, Default)]
pub struct Subsystem1;

impl Subsystem1 {
    pub fn operation1(&self) -> String {
        "Subsystem1: Ready!\n".to_string()
    }

    pub fn operation_n(&self) -> String {
        "Subsystem1: Go!\n".to_string()
    }
}

#[derive(Debug, Default)]
pub struct Subsystem2;

impl Subsystem2 {
    pub fn operation1(&self) -> String {
        "Subsystem2: Get ready!\n".to_string()
    }

    pub fn operation_z(&self) -> String {
        "Subsystem2: Fire!\n".to_string()
    }
}

pub struct Facade {
    subsystem1: Subsystem1,
    subsystem2: Subsystem2,
}

impl Facade {
    /// Takes ownership of the given subsystems, creating any that are missing.
    pub fn new(subsystem1: Option<Subsystem1>, subsystem2: Option<Subsystem2>) -> Self {
        debug!(
            created_subsystem1 = subsystem1.is_none(),
            created_subsystem2 = subsystem2.is_none(),
            "Facade assembled"
        );
        Self {
            subsystem1: subsystem1.unwrap_or_default(),
            subsystem2: subsystem2.unwrap_or_default(),
        }
    }

    pub fn operation(&self) -> String {
        let mut result = String::from("Facade initializes subsystems:\n");
        result += &self.subsystem1.operation1();
        result += &self.subsystem2.operation1();
        result += "Facade orders subsystems to perform the action:\n";
        result += &self.subsystem1.operation_n();
        result += &self.subsystem2.operation_z();
        result
    }
}

pub fn client_code(facade: &Facade, console: &Console) {
    console.print(facade.operation());
}

/// Client driver.
pub fn demo(console: &Console) {
    let subsystem1 = Subsystem1;
    let subsystem2 = Subsystem2;
    let facade = Facade::new(Some(subsystem1), Some(subsystem2));
    client_code(&facade, console);
}
