//! # Factory Method
//!
//! The creator's business logic depends on a product it obtains from an overridable
//! factory method. Concrete creators change the product type without touching that
//! logic.

use crate::framework::Console;

pub trait Product {
    fn operation(&self) -> String;
}

pub struct ConcreteProduct1;
pub struct ConcreteProduct2;

impl Product for ConcreteProduct1 {
    fn operation(&self) -> String {
        "{ConcreteProduct1}".to_string()
    }
}

impl Product for ConcreteProduct2 {
    fn operation(&self) -> String {
        "{ConcreteProduct2}".to_string()
    }
}

/// Declares the factory method and the logic built on top of it.
pub trait Creator {
    /// The factory method.
    fn factory_method(&self) -> Box<dyn Product>;

    /// Core logic; creating products is not the creator's main job.
    fn some_operation(&self) -> String {
        let product = self.factory_method();
        format!(
            "Creator: The same creator's code has just worked with {}",
            product.operation()
        )
    }
}

pub struct ConcreteCreator1;
pub struct ConcreteCreator2;

impl Creator for ConcreteCreator1 {
    fn factory_method(&self) -> Box<dyn Product> {
        Box::new(ConcreteProduct1)
    }
}

impl Creator for ConcreteCreator2 {
    fn factory_method(&self) -> Box<dyn Product> {
        Box::new(ConcreteProduct2)
    }
}

pub fn client_code(creator: &dyn Creator, console: &Console) {
    console.line("Client: I'm not aware of the creator's class, but it still works.");
    console.line(creator.some_operation());
}

/// Client driver.
pub fn demo(console: &Console) {
    console.line("App: Launched with the ConcreteCreator1.");
    client_code(&ConcreteCreator1, console);
    console.blank();
    console.line("App: Launched with the ConcreteCreator2.");
    client_code(&ConcreteCreator2, console);
}
