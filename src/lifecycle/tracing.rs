//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the global `tracing` subscriber for the binary.
//!
//! ## Configuration
//!
//! - **Levels** come from the `RUST_LOG` environment variable (nothing is logged
//!   when it is unset).
//! - **Compact format** without the module prefix (`with_target(false)`).
//! - **stderr only**. Recipe transcripts own stdout, so log lines never end up
//!   interleaved with them.
//!
//! ## What Gets Traced
//!
//! - **Catalog**: one `recipe` span per run with an `info!` on entry (`RUST_LOG=info`)
//! - **Coordinators**: delegation points at `debug` level: chain hand-offs,
//!   state transitions, observer attach/detach/prune, proxy access decisions,
//!   strategy swaps
//!
//! ```bash
//! # Which recipes ran
//! RUST_LOG=info cargo run
//!
//! # Every hand-off inside the recipes
//! RUST_LOG=debug cargo run -- chain observer
//!
//! # Only one module
//! RUST_LOG=pattern_recipes::behavioral::state=debug cargo run -- state
//! ```
//!
//! With `RUST_LOG=debug` the `state` recipe logs, on stderr:
//!
//! ```text
//! INFO recipe: Running recipe name="state" family=Behavioral
//! DEBUG recipe: Transition from=None to="ConcreteStateA"
//! DEBUG recipe: Transition from=None to="ConcreteStateB"
//! DEBUG recipe: Transition from=None to="ConcreteStateA"
//! ```
//!
//! `from=None` inside a handler is expected: the running state is out of its slot
//! until the handler returns.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
