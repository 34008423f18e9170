use crate::framework::{Console, RecipeError};
use crate::{behavioral, creational, structural};
use serde::Serialize;
use std::fmt;
use tracing::{debug, info, info_span};

/// A client driver: runs one recipe against a console.
pub type Driver = fn(&Console);

/// The three pattern families, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Family {
    Creational,
    Structural,
    Behavioral,
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Family::Creational => "Creational",
            Family::Structural => "Structural",
            Family::Behavioral => "Behavioral",
        })
    }
}

/// What the catalog knows about a recipe, without its driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeInfo {
    pub name: &'static str,
    pub family: Family,
    pub summary: &'static str,
}

#[derive(Clone)]
pub struct Recipe {
    pub info: RecipeInfo,
    driver: Driver,
}

impl Recipe {
    pub fn new(name: &'static str, family: Family, summary: &'static str, driver: Driver) -> Self {
        Self {
            info: RecipeInfo {
                name,
                family,
                summary,
            },
            driver,
        }
    }

    pub fn name(&self) -> &'static str {
        self.info.name
    }

    /// Runs the driver inside a `recipe` span.
    pub fn run(&self, console: &Console) {
        let span = info_span!("recipe");
        let _guard = span.enter();
        info!(name = self.info.name, family = %self.info.family, "Running recipe");
        (self.driver)(console);
    }
}

impl fmt::Debug for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Recipe").field("info", &self.info).finish()
    }
}

/// The catalog of runnable recipes.
///
/// `RecipeBook` is the only thing the binary talks to:
/// - **Lookup**: recipes are addressed by their module name (`"observer"`, `"abstract_factory"`, ...)
/// - **Running**: one recipe bare, or several with `== name ==` headers between them
/// - **Listing**: names, families and one-line summaries
///
/// # Example
///
/// ```
/// use pattern_recipes::framework::mock::MockConsole;
/// use pattern_recipes::lifecycle::RecipeBook;
///
/// let mock = MockConsole::new();
/// let book = RecipeBook::standard(mock.console());
/// book.run("strategy").unwrap();
/// assert!(mock.contains("abcde"));
/// assert!(book.run("singleton").is_err());
/// ```
#[derive(Debug)]
pub struct RecipeBook {
    recipes: Vec<Recipe>,
    console: Console,
}

impl RecipeBook {
    /// An empty book printing to `console`.
    pub fn new(console: Console) -> Self {
        Self {
            recipes: Vec::new(),
            console,
        }
    }

    /// Every recipe in the crate, grouped by family.
    pub fn standard(console: Console) -> Self {
        use Family::*;

        let mut book = Self::new(console);
        // ===== CREATIONAL =====
        book.register(Recipe::new(
            "abstract_factory",
            Creational,
            "families of related products from one factory",
            creational::abstract_factory::demo,
        ));
        book.register(Recipe::new(
            "builder",
            Creational,
            "step-by-step construction steered by a director",
            creational::builder::demo,
        ));
        book.register(Recipe::new(
            "factory_method",
            Creational,
            "creators decide which product to instantiate",
            creational::factory_method::demo,
        ));
        book.register(Recipe::new(
            "prototype",
            Creational,
            "new objects cloned from registered exemplars",
            creational::prototype::demo,
        ));
        // ===== STRUCTURAL =====
        book.register(Recipe::new(
            "adapter",
            Structural,
            "an incompatible interface wrapped into the expected one",
            structural::adapter::demo,
        ));
        book.register(Recipe::new(
            "bridge",
            Structural,
            "abstractions and implementations varying independently",
            structural::bridge::demo,
        ));
        book.register(Recipe::new(
            "decorator",
            Structural,
            "behaviour stacked onto a component by wrapping",
            structural::decorator::demo,
        ));
        book.register(Recipe::new(
            "facade",
            Structural,
            "one simple entry point over several subsystems",
            structural::facade::demo,
        ));
        book.register(Recipe::new(
            "proxy",
            Structural,
            "access checks and logging around a real subject",
            structural::proxy::demo,
        ));
        // ===== BEHAVIORAL =====
        book.register(Recipe::new(
            "chain",
            Behavioral,
            "a request passed along handlers until one takes it",
            behavioral::chain::demo,
        ));
        book.register(Recipe::new(
            "command",
            Behavioral,
            "requests as objects run by an invoker",
            behavioral::command::demo,
        ));
        book.register(Recipe::new(
            "observer",
            Behavioral,
            "a subject notifying the observers attached to it",
            behavioral::observer::demo,
        ));
        book.register(Recipe::new(
            "state",
            Behavioral,
            "behaviour switched by replacing the current state",
            behavioral::state::demo,
        ));
        book.register(Recipe::new(
            "strategy",
            Behavioral,
            "interchangeable algorithms behind one interface",
            behavioral::strategy::demo,
        ));
        book.register(Recipe::new(
            "template_method",
            Behavioral,
            "a fixed algorithm skeleton with overridable steps",
            behavioral::template_method::demo,
        ));
        book.register(Recipe::new(
            "visitor",
            Behavioral,
            "new operations through double dispatch",
            behavioral::visitor::demo,
        ));
        book
    }

    /// Adds a recipe; a recipe with the same name is replaced in place.
    pub fn register(&mut self, recipe: Recipe) {
        match self.recipes.iter_mut().find(|r| r.name() == recipe.name()) {
            Some(existing) => *existing = recipe,
            None => self.recipes.push(recipe),
        }
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.recipes.iter().map(Recipe::name).collect()
    }

    pub fn infos(&self) -> impl Iterator<Item = &RecipeInfo> {
        self.recipes.iter().map(|recipe| &recipe.info)
    }

    pub fn get(&self, name: &str) -> Result<&Recipe, RecipeError> {
        self.recipes
            .iter()
            .find(|recipe| recipe.name() == name)
            .ok_or_else(|| RecipeError::UnknownRecipe(name.to_string()))
    }

    /// Runs one recipe without a header.
    pub fn run(&self, name: &str) -> Result<(), RecipeError> {
        self.get(name)?.run(&self.console);
        Ok(())
    }

    /// Runs the named recipes in the given order, each under a `== name ==` header.
    ///
    /// All names are resolved first: an unknown name fails the whole call before
    /// anything is printed.
    pub fn run_selected<S: AsRef<str>>(&self, names: &[S]) -> Result<(), RecipeError> {
        let selected = names
            .iter()
            .map(|name| self.get(name.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        debug!(count = selected.len(), "Running selected recipes");
        self.run_with_headers(selected);
        Ok(())
    }

    /// Runs every recipe in catalog order, each under a `== name ==` header.
    pub fn run_all(&self) {
        self.run_with_headers(self.recipes.iter().collect());
    }

    /// Prints one `name  family  summary` line per recipe.
    pub fn list(&self) {
        for info in self.infos() {
            self.console.line(format!(
                "{:<16} {:<10} {}",
                info.name, info.family, info.summary
            ));
        }
    }

    fn run_with_headers(&self, recipes: Vec<&Recipe>) {
        for (i, recipe) in recipes.into_iter().enumerate() {
            if i > 0 {
                self.console.blank();
            }
            self.console.line(format!("== {} ==", recipe.name()));
            recipe.run(&self.console);
        }
    }
}
