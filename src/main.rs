//! # Pattern Recipes
//!
//! Command-line entry point.
//!
//! ```text
//! pattern-recipes              run every recipe
//! pattern-recipes <name>...    run the named recipes, in the given order
//! pattern-recipes --list       list recipe names and summaries
//! ```
//!
//! Logging is controlled by `RUST_LOG` and written to stderr.

use pattern_recipes::framework::Console;
use pattern_recipes::lifecycle::{setup_tracing, RecipeBook};
use tracing::{error, info};

fn main() -> Result<(), String> {
    setup_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let book = RecipeBook::standard(Console::stdout());

    if args.iter().any(|arg| arg == "--list") {
        book.list();
        return Ok(());
    }

    if args.is_empty() {
        info!(count = book.len(), "Running all recipes");
        book.run_all();
    } else {
        info!(?args, "Running selected recipes");
        book.run_selected(&args).map_err(|e| {
            error!(error = %e, "Recipe selection failed");
            e.to_string()
        })?;
    }

    info!("Done");
    Ok(())
}
