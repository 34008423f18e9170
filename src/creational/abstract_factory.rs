//! # Abstract Factory
//!
//! A factory produces a whole *family* of related products. Products from the same
//! factory are guaranteed to collaborate; the client never names a concrete product.

use crate::framework::Console;
use tracing::debug;

/// First product of every family.
pub trait AbstractProductA {
    fn use_func_a(&self) -> String;
}

/// Second product of every family. It can work alone or with a product A.
pub trait AbstractProductB {
    fn use_func_b(&self) -> String;

    /// Accepts any product A, but only the one from its own family is a proper match.
    fn another_use_func_b(&self, collaborator: &dyn AbstractProductA) -> String;
}

pub struct ConcreteProductA1;
pub struct ConcreteProductA2;

impl AbstractProductA for ConcreteProductA1 {
    fn use_func_a(&self) -> String {
        "The product A1.".to_string()
    }
}

impl AbstractProductA for ConcreteProductA2 {
    fn use_func_a(&self) -> String {
        "The product A2.".to_string()
    }
}

pub struct ConcreteProductB1;
pub struct ConcreteProductB2;

impl AbstractProductB for ConcreteProductB1 {
    fn use_func_b(&self) -> String {
        "The result of the product B1.".to_string()
    }

    fn another_use_func_b(&self, collaborator: &dyn AbstractProductA) -> String {
        format!(
            "The result of the B1 collaborating with ( {} )",
            collaborator.use_func_a()
        )
    }
}

impl AbstractProductB for ConcreteProductB2 {
    fn use_func_b(&self) -> String {
        "The result of the product B2.".to_string()
    }

    fn another_use_func_b(&self, collaborator: &dyn AbstractProductA) -> String {
        format!(
            "The result of the B2 collaborating with ( {} )",
            collaborator.use_func_a()
        )
    }
}

/// Declares one creation method per product in the family.
pub trait AbstractFactory {
    fn create_product_a(&self) -> Box<dyn AbstractProductA>;
    fn create_product_b(&self) -> Box<dyn AbstractProductB>;
}

/// Produces the `1` family.
pub struct ConcreteFactory1;

/// Produces the `2` family.
pub struct ConcreteFactory2;

impl AbstractFactory for ConcreteFactory1 {
    fn create_product_a(&self) -> Box<dyn AbstractProductA> {
        Box::new(ConcreteProductA1)
    }

    fn create_product_b(&self) -> Box<dyn AbstractProductB> {
        Box::new(ConcreteProductB1)
    }
}

impl AbstractFactory for ConcreteFactory2 {
    fn create_product_a(&self) -> Box<dyn AbstractProductA> {
        Box::new(ConcreteProductA2)
    }

    fn create_product_b(&self) -> Box<dyn AbstractProductB> {
        Box::new(ConcreteProductB2)
    }
}

/// Works with factories and products only through the abstract traits.
pub fn client_code(factory: &dyn AbstractFactory, console: &Console) {
    let product_a = factory.create_product_a();
    let product_b = factory.create_product_b();
    debug!("Family created");
    console.line(product_b.use_func_b());
    console.line(product_b.another_use_func_b(product_a.as_ref()));
}

/// Client driver.
pub fn demo(console: &Console) {
    console.line("Client: Testing client code with the first factory type:");
    client_code(&ConcreteFactory1, console);
    console.blank();
    console.line("Client: Testing the same client code with the second factory type:");
    client_code(&ConcreteFactory2, console);
}
