//! # Prototype
//!
//! New objects are made by cloning registered exemplars instead of calling a
//! constructor. A clone is a value-wise deep copy with its own lifetime: mutating it
//! never reaches back into the prototype it came from.
//!
//! ## Architecture Note
//! `Clone` itself is not object safe, so the capability trait exposes
//! [`Prototype::clone_prototype`] returning a `Box<dyn Prototype>`. Each variant
//! implements it with its derived `Clone`, which already deep-copies owned data such
//! as the `String` name.

use crate::framework::Console;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Keys of the prototypes registered in a [`PrototypeFactory`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrototypeKind {
    Prototype1,
    Prototype2,
}

/// Contract for cloneable variants.
pub trait Prototype {
    /// Returns an independent copy of `self`.
    fn clone_prototype(&self) -> Box<dyn Prototype>;

    fn name(&self) -> &str;

    fn field(&self) -> f32;

    /// Stores `field` and reports the call.
    fn method(&mut self, field: f32, console: &Console);
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConcretePrototype1 {
    name: String,
    field: f32,
}

impl ConcretePrototype1 {
    pub fn new(name: impl Into<String>, field: f32) -> Self {
        Self {
            name: name.into(),
            field,
        }
    }
}

impl Prototype for ConcretePrototype1 {
    fn clone_prototype(&self) -> Box<dyn Prototype> {
        Box::new(self.clone())
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn field(&self) -> f32 {
        self.field
    }

    fn method(&mut self, field: f32, console: &Console) {
        self.field = field;
        console.line(format!("Call Method from {} with field : {}", self.name, field));
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConcretePrototype2 {
    name: String,
    field: f32,
}

impl ConcretePrototype2 {
    pub fn new(name: impl Into<String>, field: f32) -> Self {
        Self {
            name: name.into(),
            field,
        }
    }
}

impl Prototype for ConcretePrototype2 {
    fn clone_prototype(&self) -> Box<dyn Prototype> {
        Box::new(self.clone())
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn field(&self) -> f32 {
        self.field
    }

    fn method(&mut self, field: f32, console: &Console) {
        self.field = field;
        console.line(format!("Call Method from {} with field : {}", self.name, field));
    }
}

/// Registry holding one exemplar per [`PrototypeKind`].
pub struct PrototypeFactory {
    prototypes: HashMap<PrototypeKind, Box<dyn Prototype>>,
}

impl Default for PrototypeFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl PrototypeFactory {
    /// Registers `PROTOTYPE_1` (field `50.0`) and `PROTOTYPE_2` (field `60.0`).
    pub fn new() -> Self {
        let mut prototypes: HashMap<PrototypeKind, Box<dyn Prototype>> = HashMap::new();
        prototypes.insert(
            PrototypeKind::Prototype1,
            Box::new(ConcretePrototype1::new("PROTOTYPE_1 ", 50.0)),
        );
        prototypes.insert(
            PrototypeKind::Prototype2,
            Box::new(ConcretePrototype2::new("PROTOTYPE_2 ", 60.0)),
        );
        Self { prototypes }
    }

    /// Clones the exemplar registered under `kind`.
    pub fn create(&self, kind: PrototypeKind) -> Box<dyn Prototype> {
        debug!(?kind, "Cloning prototype");
        self.prototypes[&kind].clone_prototype()
    }

    /// Read access to the registered exemplar (never a copy).
    pub fn exemplar(&self, kind: PrototypeKind) -> &dyn Prototype {
        self.prototypes[&kind].as_ref()
    }
}

/// Client driver.
pub fn demo(console: &Console) {
    let factory = PrototypeFactory::new();

    console.line("Let's create a Prototype 1");
    let mut prototype = factory.create(PrototypeKind::Prototype1);
    prototype.method(90.0, console);
    drop(prototype);

    console.blank();

    console.line("Let's create a Prototype 2 ");
    let mut prototype = factory.create(PrototypeKind::Prototype2);
    prototype.method(10.0, console);
}
