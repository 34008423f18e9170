//! # Template Method
//!
//! [`AbstractClass::template_method`] fixes the skeleton of an algorithm. The trait
//! provides the base steps and empty hooks; implementors supply the required steps
//! and may override hooks, but never the skeleton itself.

use crate::framework::Console;

pub trait AbstractClass {
    /// Where implementors print.
    fn console(&self) -> &Console;

    /// The skeleton. Not meant to be overridden.
    fn template_method(&self) {
        self.base_operation1();
        self.required_operation1();
        self.base_operation2();
        self.hook1();
        self.required_operation2();
        self.base_operation3();
        self.hook2();
    }

    fn base_operation1(&self) {
        self.console()
            .line("AbstractClass says: I am doing the bulk of the work");
    }

    fn base_operation2(&self) {
        self.console()
            .line("AbstractClass says: But I let subclasses override some operations");
    }

    fn base_operation3(&self) {
        self.console()
            .line("AbstractClass says: But I am doing the bulk of the work anyway");
    }

    fn required_operation1(&self);

    fn required_operation2(&self);

    fn hook1(&self) {}

    fn hook2(&self) {}
}

pub struct ConcreteClass1 {
    console: Console,
}

impl ConcreteClass1 {
    pub fn new(console: Console) -> Self {
        Self { console }
    }
}

impl AbstractClass for ConcreteClass1 {
    fn console(&self) -> &Console {
        &self.console
    }

    fn required_operation1(&self) {
        self.console.line("ConcreteClass1 says: Implemented Operation1");
    }

    fn required_operation2(&self) {
        self.console.line("ConcreteClass1 says: Implemented Operation2");
    }
}

/// Also overrides the first hook.
pub struct ConcreteClass2 {
    console: Console,
}

impl ConcreteClass2 {
    pub fn new(console: Console) -> Self {
        Self { console }
    }
}

impl AbstractClass for ConcreteClass2 {
    fn console(&self) -> &Console {
        &self.console
    }

    fn required_operation1(&self) {
        self.console.line("ConcreteClass2 says: Implemented Operation1");
    }

    fn required_operation2(&self) {
        self.console.line("ConcreteClass2 says: Implemented Operation2");
    }

    fn hook1(&self) {
        self.console.line("ConcreteClass2 says: Overridden Hook1");
    }
}

pub fn client_code(class: &dyn AbstractClass) {
    class.template_method();
}

/// Client driver.
pub fn demo(console: &Console) {
    console.line("Same client code can work with different subclasses:");
    client_code(&ConcreteClass1::new(console.clone()));
    console.blank();
    console.line("Same client code can work with different subclasses:");
    client_code(&ConcreteClass2::new(console.clone()));
}
