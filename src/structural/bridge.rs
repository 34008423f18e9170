//! # Bridge
//!
//! Splits a concept into two independent hierarchies: the *abstraction* (control
//! layer the client talks to) and the *implementation* (platform-specific work).
//! Either side can grow without touching the other.

use crate::framework::Console;

/// Primitive operations every platform provides.
pub trait Implementation {
    fn operation_implementation(&self) -> String;
}

pub struct ConcreteImplementationA;
pub struct ConcreteImplementationB;

impl Implementation for ConcreteImplementationA {
    fn operation_implementation(&self) -> String {
        "ConcreteImplementationA: Here's the result on the platform A.\n".to_string()
    }
}

impl Implementation for ConcreteImplementationB {
    fn operation_implementation(&self) -> String {
        "ConcreteImplementationB: Here's the result on the platform B.\n".to_string()
    }
}

/// The high-level control interface.
pub trait Abstraction {
    fn operation(&self) -> String;
}

/// Delegates all real work to the implementation it was built with.
pub struct BasicAbstraction {
    implementation: Box<dyn Implementation>,
}

impl BasicAbstraction {
    pub fn new(implementation: Box<dyn Implementation>) -> Self {
        Self { implementation }
    }
}

impl Abstraction for BasicAbstraction {
    fn operation(&self) -> String {
        format!(
            "Abstraction: Base operation with:\n{}",
            self.implementation.operation_implementation()
        )
    }
}

/// Extends the abstraction without changing any implementation.
pub struct ExtendedAbstraction {
    implementation: Box<dyn Implementation>,
}

impl ExtendedAbstraction {
    pub fn new(implementation: Box<dyn Implementation>) -> Self {
        Self { implementation }
    }
}

impl Abstraction for ExtendedAbstraction {
    fn operation(&self) -> String {
        format!(
            "ExtendedAbstraction: Extended operation with:\n{}",
            self.implementation.operation_implementation()
        )
    }
}

pub fn client_code(abstraction: &dyn Abstraction, console: &Console) {
    console.line(abstraction.operation());
}

/// Client driver.
pub fn demo(console: &Console) {
    let abstraction = BasicAbstraction::new(Box::new(ConcreteImplementationA));
    client_code(&abstraction, console);

    let abstraction = ExtendedAbstraction::new(Box::new(ConcreteImplementationB));
    client_code(&abstraction, console);
}
