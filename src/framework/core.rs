//! # Core Recipe Framework
//!
//! This module defines the output seam every recipe writes through.
//!
//! ## Key Types
//!
//! - [`Output`]: The trait that every text sink must implement.
//! - [`StdoutOutput`]: The production sink that writes to the process stdout.
//! - [`Console`]: The cheap, clonable handle that recipes hold and print through.

use std::cell::RefCell;
use std::fmt;
use std::io::Write;
use std::rc::Rc;

// =============================================================================
// 1. THE ABSTRACTION (Output Sink)
// =============================================================================

/// Trait that any text sink must implement to receive recipe output.
///
/// # Architecture Note
/// Why do we need this trait?
/// Every recipe's only observable effect is the text it prints. By routing all of
/// that text through one contract, the same client driver can print to a terminal
/// in `main` and into an in-memory buffer in tests
/// (see [`MockConsole`](crate::framework::mock::MockConsole)).
///
/// Sinks receive raw fragments, not lines. A recipe may print half a line
/// (`"RESULT: "`) and finish it with a later call.
pub trait Output {
    /// Append a fragment of text to the sink.
    fn write_str(&mut self, text: &str);
}

/// Sink that forwards every fragment to the process stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutOutput;

impl Output for StdoutOutput {
    fn write_str(&mut self, text: &str) {
        let mut stdout = std::io::stdout().lock();
        // A closed stdout (e.g. `| head`) ends the transcript; nothing else to do.
        let _ = stdout.write_all(text.as_bytes());
    }
}

// =============================================================================
// 2. THE SHARED HANDLE
// =============================================================================

/// A clonable handle to a single [`Output`] sink.
///
/// # Concurrency Model
/// Recipes are strictly single-threaded, so the handle is an `Rc<RefCell<_>>`
/// rather than an `Arc<Mutex<_>>`. Each write borrows the sink only for the
/// duration of that write, so objects that print from inside another object's
/// call (an observer inside `notify`, a state inside a transition) never collide.
///
/// Objects that print keep their own clone, which lets `Drop` impls print
/// farewell lines at end of scope.
///
/// # Example
///
/// ```rust
/// use pattern_recipes::framework::Console;
/// use pattern_recipes::framework::mock::MockConsole;
///
/// let mut mock = MockConsole::new();
/// let console: Console = mock.console();
///
/// console.print("RESULT: ");
/// console.line("ConcreteComponent");
/// console.blank();
///
/// mock.expect_line("RESULT: ConcreteComponent").expect_blank();
/// mock.verify();
/// ```
#[derive(Clone)]
pub struct Console {
    output: Rc<RefCell<dyn Output>>,
}

impl Console {
    /// Wraps an arbitrary sink.
    pub fn new(output: impl Output + 'static) -> Self {
        Self {
            output: Rc::new(RefCell::new(output)),
        }
    }

    /// A console that prints to the process stdout.
    pub fn stdout() -> Self {
        Self::new(StdoutOutput)
    }

    /// Writes `text` without a trailing newline.
    pub fn print(&self, text: impl AsRef<str>) {
        self.output.borrow_mut().write_str(text.as_ref());
    }

    /// Writes `text` followed by a newline.
    pub fn line(&self, text: impl AsRef<str>) {
        let mut output = self.output.borrow_mut();
        output.write_str(text.as_ref());
        output.write_str("\n");
    }

    /// Writes an empty line.
    pub fn blank(&self) {
        self.output.borrow_mut().write_str("\n");
    }
}

impl fmt::Debug for Console {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Console")
            .field("handles", &Rc::strong_count(&self.output))
            .finish()
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::stdout()
    }
}

/// Short type name for log fields (e.g. `ConcreteStateA` instead of the full path).
pub(crate) fn short_type_name<T: ?Sized>() -> &'static str {
    std::any::type_name::<T>()
        .rsplit("::")
        .next()
        .unwrap_or("Unknown")
}
