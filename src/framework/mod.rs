//! Shared plumbing for every recipe.
//!
//! # Main Components
//!
//! - [`Output`] - Trait that text sinks implement
//! - [`Console`] - Clonable handle recipes print through
//! - [`RecipeError`] - Errors raised when selecting recipes
//!
//! # Testing
//!
//! See [`mock`] module for a recording console with expectation tracking.

pub mod core;
pub mod error;
pub mod mock;

// Re-export core types for convenience
pub use self::core::*;
pub use error::RecipeError;
