//! # Decorator
//!
//! Wraps a component in objects that share its interface and alter its result.
//! Decorators own what they wrap, so they nest freely:
//! `ConcreteDecoratorB(ConcreteDecoratorA(ConcreteComponent))`.

use crate::framework::Console;

/// The operation decorators can alter.
pub trait Component {
    fn operation(&self) -> String;
}

#[derive(Debug, Default)]
pub struct ConcreteComponent;

impl Component for ConcreteComponent {
    fn operation(&self) -> String {
        "ConcreteComponent".to_string()
    }
}

pub struct ConcreteDecoratorA {
    component: Box<dyn Component>,
}

impl ConcreteDecoratorA {
    pub fn new(component: Box<dyn Component>) -> Self {
        Self { component }
    }
}

impl Component for ConcreteDecoratorA {
    fn operation(&self) -> String {
        format!("ConcreteDecoratorA({})", self.component.operation())
    }
}

pub struct ConcreteDecoratorB {
    component: Box<dyn Component>,
}

impl ConcreteDecoratorB {
    pub fn new(component: Box<dyn Component>) -> Self {
        Self { component }
    }
}

impl Component for ConcreteDecoratorB {
    fn operation(&self) -> String {
        format!("ConcreteDecoratorB({})", self.component.operation())
    }
}

pub fn client_code(component: &dyn Component, console: &Console) {
    console.print(format!("RESULT: {}", component.operation()));
}

/// Client driver.
pub fn demo(console: &Console) {
    let simple = ConcreteComponent;
    console.line("Client: I've got a simple component:");
    client_code(&simple, console);
    console.print("\n\n");

    let decorated = ConcreteDecoratorB::new(Box::new(ConcreteDecoratorA::new(Box::new(simple))));
    console.line("Client: Now I've got a decorated component:");
    client_code(&decorated, console);
    console.blank();
}
