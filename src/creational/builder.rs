//! # Builder
//!
//! Assembles a complex product step by step. The [`Director`] knows *which* steps to
//! run for a given configuration; the [`Builder`] knows *how* each step is done.
//!
//! ## Ownership Note
//! The director does not keep the builder. Each build call borrows it mutably for the
//! duration of the recipe, so the client can take the finished product out of the
//! builder between calls without fighting the borrow checker.

use crate::framework::Console;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The product assembled by [`ConcreteBuilder1`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product1 {
    pub parts: Vec<String>,
}

impl Product1 {
    /// Prints `Product parts: A, B, C` followed by a blank line.
    pub fn list_parts(&self, console: &Console) {
        console.line(format!("Product parts: {}", self.parts.join(", ")));
        console.blank();
    }
}

/// Construction steps shared by every builder.
pub trait Builder {
    fn produce_part_a(&mut self);
    fn produce_part_b(&mut self);
    fn produce_part_c(&mut self);
}

/// Builds [`Product1`] instances.
///
/// A fresh builder holds a blank product; [`ConcreteBuilder1::product`] hands the
/// current product over and starts a new blank one.
#[derive(Debug, Default)]
pub struct ConcreteBuilder1 {
    product: Product1,
}

impl ConcreteBuilder1 {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discards the product under construction.
    pub fn reset(&mut self) {
        self.product = Product1::default();
    }

    /// Takes the finished product and resets the builder.
    pub fn product(&mut self) -> Product1 {
        let product = std::mem::take(&mut self.product);
        debug!(parts = product.parts.len(), "Product handed over");
        product
    }
}

impl Builder for ConcreteBuilder1 {
    fn produce_part_a(&mut self) {
        self.product.parts.push("PartA1".to_string());
    }

    fn produce_part_b(&mut self) {
        self.product.parts.push("PartB1".to_string());
    }

    fn produce_part_c(&mut self) {
        self.product.parts.push("PartC1".to_string());
    }
}

/// Runs the construction steps in a particular order.
#[derive(Debug, Default)]
pub struct Director;

impl Director {
    pub fn build_minimal_viable_product(&self, builder: &mut dyn Builder) {
        builder.produce_part_a();
    }

    pub fn build_full_featured_product(&self, builder: &mut dyn Builder) {
        builder.produce_part_a();
        builder.produce_part_b();
        builder.produce_part_c();
    }
}

/// Client driver.
pub fn demo(console: &Console) {
    let director = Director;
    let mut builder = ConcreteBuilder1::new();

    console.line("Standard basic product:");
    director.build_minimal_viable_product(&mut builder);
    builder.product().list_parts(console);

    console.line("Standard full featured product:");
    director.build_full_featured_product(&mut builder);
    builder.product().list_parts(console);

    // The director is optional; the client can drive the builder directly.
    console.line("Custom product:");
    builder.produce_part_a();
    builder.produce_part_c();
    builder.product().list_parts(console);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_resets_builder() {
        let mut builder = ConcreteBuilder1::new();
        Director.build_full_featured_product(&mut builder);

        let first = builder.product();
        assert_eq!(first.parts, ["PartA1", "PartB1", "PartC1"]);
        assert!(builder.product().parts.is_empty());
    }

    #[test]
    fn test_reset_discards_parts() {
        let mut builder = ConcreteBuilder1::new();
        builder.produce_part_b();
        builder.reset();
        builder.produce_part_c();
        assert_eq!(builder.product().parts, ["PartC1"]);
    }
}
