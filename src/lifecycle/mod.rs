//! Running recipes from the outside.
//!
//! - [`RecipeBook`] - the catalog: names, summaries and drivers of every recipe
//! - [`setup_tracing`] - installs the logging subscriber used by the binary

pub mod recipe_book;
pub mod tracing;

pub use self::recipe_book::*;
pub use self::tracing::*;
