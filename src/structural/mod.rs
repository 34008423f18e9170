//! Structural recipes: patterns about *how objects are composed*.
//!
//! - [`adapter`] - translate one interface into another
//! - [`bridge`] - abstraction and implementation varying independently
//! - [`decorator`] - wrappers that alter a component's result
//! - [`facade`] - one simple entry point over several subsystems
//! - [`proxy`] - access interception in front of a real subject

pub mod adapter;
pub mod bridge;
pub mod decorator;
pub mod facade;
pub mod proxy;
