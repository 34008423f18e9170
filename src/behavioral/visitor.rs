//! # Visitor
//!
//! New operations over a fixed set of component types, without changing those
//! types. Each component's `accept` calls the visitor method matching its own
//! concrete type (double dispatch), so visitors can use type-specific methods.

use crate::framework::Console;

pub trait Visitor {
    fn visit_concrete_component_a(&self, element: &ConcreteComponentA);
    fn visit_concrete_component_b(&self, element: &ConcreteComponentB);
}

pub trait Component {
    fn accept(&self, visitor: &dyn Visitor);
}

#[derive(Debug, Default)]
pub struct ConcreteComponentA;

impl ConcreteComponentA {
    /// Only visitors that know the concrete type can call this.
    pub fn exclusive_method_of_concrete_component_a(&self) -> &'static str {
        "A"
    }
}

impl Component for ConcreteComponentA {
    fn accept(&self, visitor: &dyn Visitor) {
        visitor.visit_concrete_component_a(self);
    }
}

#[derive(Debug, Default)]
pub struct ConcreteComponentB;

impl ConcreteComponentB {
    pub fn special_method_of_concrete_component_b(&self) -> &'static str {
        "B"
    }
}

impl Component for ConcreteComponentB {
    fn accept(&self, visitor: &dyn Visitor) {
        visitor.visit_concrete_component_b(self);
    }
}

pub struct ConcreteVisitor1 {
    console: Console,
}

impl ConcreteVisitor1 {
    pub fn new(console: Console) -> Self {
        Self { console }
    }
}

impl Visitor for ConcreteVisitor1 {
    fn visit_concrete_component_a(&self, element: &ConcreteComponentA) {
        self.console.line(format!(
            "{} + ConcreteVisitor1",
            element.exclusive_method_of_concrete_component_a()
        ));
    }

    fn visit_concrete_component_b(&self, element: &ConcreteComponentB) {
        self.console.line(format!(
            "{} + ConcreteVisitor1",
            element.special_method_of_concrete_component_b()
        ));
    }
}

pub struct ConcreteVisitor2 {
    console: Console,
}

impl ConcreteVisitor2 {
    pub fn new(console: Console) -> Self {
        Self { console }
    }
}

impl Visitor for ConcreteVisitor2 {
    fn visit_concrete_component_a(&self, element: &ConcreteComponentA) {
        self.console.line(format!(
            "{} + ConcreteVisitor2",
            element.exclusive_method_of_concrete_component_a()
        ));
    }

    fn visit_concrete_component_b(&self, element: &ConcreteComponentB) {
        self.console.line(format!(
            "{} + ConcreteVisitor2",
            element.special_method_of_concrete_component_b()
        ));
    }
}

/// Runs `visitor` over every component without knowing their concrete types.
pub fn client_code(components: &[Box<dyn Component>], visitor: &dyn Visitor) {
    for component in components {
        component.accept(visitor);
    }
}

/// Client driver.
pub fn demo(console: &Console) {
    let components: Vec<Box<dyn Component>> =
        vec![Box::new(ConcreteComponentA), Box::new(ConcreteComponentB)];

    console.line("The client code works with all visitors via the base Visitor interface:");
    client_code(&components, &ConcreteVisitor1::new(console.clone()));
    console.blank();

    console.line("It allows the same client code to work with different types of visitors:");
    client_code(&components, &ConcreteVisitor2::new(console.clone()));
}
