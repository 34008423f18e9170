//! # Strategy
//!
//! The [`Context`] delegates an algorithm to whichever [`Strategy`] it currently
//! holds. Strategies can be swapped at runtime; the context never learns which one
//! it is talking to.
//!
//! A context without a strategy is valid: it reports "Strategy isn't set" and does
//! nothing else.

use crate::framework::{short_type_name, Console};
use tracing::debug;

/// The input every client driver sorts.
pub const SAMPLE_DATA: &str = "aecbd";

pub trait Strategy {
    fn do_algorithm(&self, data: &str) -> String;
}

/// Sorts characters in ascending order.
#[derive(Debug, Default)]
pub struct AscendingSort;

/// Sorts characters in descending order.
#[derive(Debug, Default)]
pub struct DescendingSort;

impl Strategy for AscendingSort {
    fn do_algorithm(&self, data: &str) -> String {
        let mut chars: Vec<char> = data.chars().collect();
        chars.sort_unstable();
        chars.into_iter().collect()
    }
}

impl Strategy for DescendingSort {
    fn do_algorithm(&self, data: &str) -> String {
        let mut chars: Vec<char> = data.chars().collect();
        chars.sort_unstable_by(|a, b| b.cmp(a));
        chars.into_iter().collect()
    }
}

pub struct Context {
    strategy: Option<Box<dyn Strategy>>,
    console: Console,
}

impl Context {
    pub fn new(strategy: Option<Box<dyn Strategy>>, console: Console) -> Self {
        Self { strategy, console }
    }

    /// Swaps the strategy at runtime.
    pub fn set_strategy<S: Strategy + 'static>(&mut self, strategy: S) {
        debug!(strategy = short_type_name::<S>(), "Strategy replaced");
        self.strategy = Some(Box::new(strategy));
    }

    /// Runs the current strategy on `data`; `None` when no strategy is set.
    pub fn execute(&self, data: &str) -> Option<String> {
        self.strategy.as_ref().map(|strategy| strategy.do_algorithm(data))
    }

    pub fn do_some_business_logic(&self) {
        match self.execute(SAMPLE_DATA) {
            Some(result) => {
                self.console.line(
                    "Context: Sorting data using the strategy (not sure how it'll do it)",
                );
                self.console.line(result);
            }
            None => self.console.line("Context: Strategy isn't set"),
        }
    }
}

/// Client driver.
pub fn demo(console: &Console) {
    let mut context = Context::new(Some(Box::new(AscendingSort)), console.clone());
    console.line("Client: Strategy is set to normal sorting.");
    context.do_some_business_logic();
    console.blank();

    console.line("Client: Strategy is set to reverse sorting.");
    context.set_strategy(DescendingSort);
    context.do_some_business_logic();
}
