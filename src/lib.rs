//! # Pattern Recipes
//!
//! > **Sixteen classic object-oriented design patterns, written as small runnable Rust recipes.**
//!
//! Every recipe is a self-contained module: a capability trait (or two), a handful of
//! concrete variants, the coordinator that uses them, and a `demo` function that plays
//! the client. Running a demo prints a fixed, deterministic transcript.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Traits at the seams
//! Wherever a pattern says "interface", the recipe defines a trait and the coordinator
//! holds a trait object (`Box<dyn Strategy>`, `Rc<dyn Handler>`, `&dyn Visitor`). One
//! level of dynamic dispatch, never a class hierarchy.
//!
//! ### Ownership says who is in charge
//! - **Owned**: a decorator owns what it wraps, a context owns its state.
//! - **Borrowed**: an adapter borrows its adaptee, a complex command borrows its receiver.
//! - **Weak**: a subject never keeps its observers alive, and observers never keep the subject alive.
//!
//! ### Output is a seam too
//! Recipes never call `println!`. They write through a [`Console`](framework::Console)
//! handle, which is what lets the tests record exact transcripts with
//! [`MockConsole`](framework::mock::MockConsole).
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. No errors inside recipes
//! "Nobody handled this" is an ordinary outcome (`left untouched`, `Strategy isn't set`),
//! printed rather than returned. The only error type, [`RecipeError`](framework::RecipeError),
//! belongs to the catalog.
//!
//! ### 2. Single-threaded by construction
//! Shared handles are `Rc`/`RefCell`, not `Arc`/`Mutex`. Every call sequence is
//! synchronous and driven by one client routine.
//!
//! ### 3. Observability
//! Coordinators emit `tracing` events at their delegation points; logs go to stderr so the
//! stdout transcript stays exact. See the [`lifecycle::tracing`] module.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Plumbing ([`framework`])
//! - **Role**: Output seam, test double and the error type.
//! - **Key items**: [`Console`](framework::Console), [`MockConsole`](framework::mock::MockConsole).
//!
//! ### 2. The Recipes ([`creational`], [`structural`], [`behavioral`])
//! - **Creational**: abstract factory, builder, factory method, prototype.
//! - **Structural**: adapter, bridge, decorator, facade, proxy.
//! - **Behavioral**: chain of responsibility, command, observer, state, strategy,
//!   template method, visitor.
//!
//! ### 3. The Catalog ([`lifecycle`])
//! - **Role**: Names, lists and runs recipes for the binary.
//! - **Key items**: [`RecipeBook`](lifecycle::RecipeBook), [`setup_tracing`](lifecycle::setup_tracing).
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Every recipe, in catalog order
//! cargo run
//!
//! # Just two of them, with delegation logs on stderr
//! RUST_LOG=debug cargo run -- observer state
//!
//! # What is available
//! cargo run -- --list
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod behavioral;
pub mod creational;
pub mod framework;
pub mod lifecycle;
pub mod structural;
