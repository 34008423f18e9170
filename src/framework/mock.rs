//! # Mock Console & Testing Guide
//!
//! The `MockConsole` type hands out a real [`Console`] whose sink is an in-memory
//! buffer. Recipes cannot tell the difference, so the exact same client driver that
//! prints to the terminal in `main` can be asserted line by line in tests.
//!
//! ## When to use the Mock vs Stdout
//!
//! | Feature | MockConsole | Console::stdout |
//! |---------|-------------|-----------------|
//! | **Output** | Captured in memory | Written to the terminal |
//! | **Determinism** | 100% Deterministic | Interleaves with other writers |
//! | **Assertions** | `expect_line` + `verify`, `contains`, `is_silent` | None |
//! | **Use Case** | Tests | The `pattern-recipes` binary |
//!
//! ## Testing Strategies
//!
//! <details>
//! <summary><b>Strategy 1: Exact Transcript</b></summary>
//!
//! **When to use**: Pinning down the full output of a client driver.
//!
//! ```rust
//! use pattern_recipes::framework::mock::MockConsole;
//! use pattern_recipes::structural::decorator;
//!
//! let mut mock = MockConsole::new();
//! decorator::demo(&mock.console());
//!
//! mock.expect_line("Client: I've got a simple component:")
//!     .expect_line("RESULT: ConcreteComponent")
//!     .expect_blank()
//!     .expect_line("Client: Now I've got a decorated component:")
//!     .expect_line("RESULT: ConcreteDecoratorB(ConcreteDecoratorA(ConcreteComponent))");
//! mock.verify();
//! ```
//! </details>
//!
//! <details>
//! <summary><b>Strategy 2: Property Checks</b></summary>
//!
//! **When to use**: Asserting that something did *not* happen, e.g. a proxy that
//! denied access must not let the real subject print.
//!
//! ```rust
//! use pattern_recipes::framework::mock::MockConsole;
//! use pattern_recipes::structural::proxy::{Proxy, RealSubject, Subject};
//!
//! let mock = MockConsole::new();
//! let proxy = Proxy::with_access_check(RealSubject::new(mock.console()), || false);
//! proxy.request();
//!
//! assert!(!mock.contains("RealSubject"));
//! assert!(!mock.contains("Logging"));
//! ```
//! </details>

use crate::framework::core::{Console, Output};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

// =============================================================================
// RECORDING SINK
// =============================================================================

/// Sink that appends every fragment to a shared buffer.
struct RecordingOutput {
    buffer: Rc<RefCell<String>>,
}

impl Output for RecordingOutput {
    fn write_str(&mut self, text: &str) {
        self.buffer.borrow_mut().push_str(text);
    }
}

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// A console that records everything written to it, with expectation tracking.
///
/// # Example
/// ```ignore
/// let mut mock = MockConsole::new();
/// mock.expect_line("Client: Who wants a Nut?").expect_line("  Squirrel: I'll eat the Nut.");
///
/// run_driver(&mock.console());
/// mock.verify(); // Panics if the recorded lines differ from the expectations
/// ```
pub struct MockConsole {
    console: Console,
    buffer: Rc<RefCell<String>>,
    expectations: VecDeque<String>,
}

impl Default for MockConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConsole {
    /// Creates a new mock console with an empty transcript and no expectations.
    pub fn new() -> Self {
        let buffer = Rc::new(RefCell::new(String::new()));
        let console = Console::new(RecordingOutput {
            buffer: buffer.clone(),
        });
        Self {
            console,
            buffer,
            expectations: VecDeque::new(),
        }
    }

    /// Returns a console handle for use by the code under test.
    pub fn console(&self) -> Console {
        self.console.clone()
    }

    /// Everything written so far, verbatim.
    pub fn transcript(&self) -> String {
        self.buffer.borrow().clone()
    }

    /// The transcript split into lines (without terminators).
    pub fn lines(&self) -> Vec<String> {
        self.buffer.borrow().lines().map(str::to_owned).collect()
    }

    /// `true` when nothing has been written.
    pub fn is_silent(&self) -> bool {
        self.buffer.borrow().is_empty()
    }

    /// `true` when `text` appears anywhere in the transcript.
    pub fn contains(&self, text: &str) -> bool {
        self.buffer.borrow().contains(text)
    }

    /// Drops everything recorded so far (expectations are kept).
    pub fn clear(&self) {
        self.buffer.borrow_mut().clear();
    }

    /// Expects the next line of the transcript to equal `text`.
    pub fn expect_line(&mut self, text: impl Into<String>) -> &mut Self {
        self.expectations.push_back(text.into());
        self
    }

    /// Expects the next line of the transcript to be empty.
    pub fn expect_blank(&mut self) -> &mut Self {
        self.expect_line("")
    }

    /// Expects each of `lines` in order.
    pub fn expect_lines<I, S>(&mut self, lines: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expectations.extend(lines.into_iter().map(Into::into));
        self
    }

    /// Verifies that the recorded lines match the expectations exactly.
    ///
    /// # Panics
    /// Panics on the first mismatching line, or when either side has lines left over.
    pub fn verify(&self) {
        let actual = self.lines();
        for (index, expected) in self.expectations.iter().enumerate() {
            match actual.get(index) {
                Some(line) if line == expected => {}
                Some(line) => panic!(
                    "Line {} mismatch\n  expected: {:?}\n    actual: {:?}\n\nTranscript:\n{}",
                    index + 1,
                    expected,
                    line,
                    self.transcript()
                ),
                None => panic!(
                    "Not all expectations were met. {} remaining, next: {:?}\n\nTranscript:\n{}",
                    self.expectations.len() - index,
                    expected,
                    self.transcript()
                ),
            }
        }
        if actual.len() > self.expectations.len() {
            panic!(
                "Unexpected output after line {}: {:?}",
                self.expectations.len(),
                &actual[self.expectations.len()..]
            );
        }
    }
}
