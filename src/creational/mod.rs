//! Creational recipes: patterns about *how objects come to exist*.
//!
//! - [`abstract_factory`] - families of compatible products
//! - [`builder`] - step-by-step assembly driven by a director
//! - [`factory_method`] - creation deferred to an overridable method
//! - [`prototype`] - new objects cloned from registered exemplars

pub mod abstract_factory;
pub mod builder;
pub mod factory_method;
pub mod prototype;
