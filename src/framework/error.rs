//! # Framework Errors
//!
//! Recipes never fail: a request nobody handles or a missing strategy is reported
//! as text and the driver carries on. The only failure left is at the edge, when
//! the caller names a recipe the catalog does not have.

/// Errors that can occur when selecting recipes to run.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum RecipeError {
    /// The requested recipe name is not in the catalog.
    #[error("Unknown recipe: {0} (try --list)")]
    UnknownRecipe(String),
}
