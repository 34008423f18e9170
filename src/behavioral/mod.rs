//! Behavioral recipes: patterns about *how objects share work*.
//!
//! - [`chain`] - a request travels along handlers until one takes it
//! - [`command`] - requests as objects, triggered by an invoker
//! - [`observer`] - a subject notifying non-owned observers
//! - [`state`] - behaviour switching with an owned state object
//! - [`strategy`] - interchangeable algorithms behind one interface
//! - [`template_method`] - a fixed skeleton with overridable steps
//! - [`visitor`] - operations added through double dispatch

pub mod chain;
pub mod command;
pub mod observer;
pub mod state;
pub mod strategy;
pub mod template_method;
pub mod visitor;
