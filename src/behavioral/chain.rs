//! # Chain of Responsibility
//!
//! A request travels along a chain of handlers until one of them takes it.
//!
//! ## Chain Contract
//! Each link holds at most one successor. `handle(request)`:
//! 1. If the link's own predicate matches, it returns its result.
//! 2. Otherwise, if a successor exists, the request is passed on.
//! 3. Otherwise the result is `None`: the request went **unhandled**.
//!
//! "Unhandled" is an ordinary outcome, not an error. The client decides how to
//! report it (here: "... was left untouched.").
//!
//! ## Ownership Note
//! Links are shared (`Rc<dyn Handler>`): the chain owns its successors, and the
//! client may also keep handles to enter the chain half way (the "subchain" below).

use crate::framework::{short_type_name, Console};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;

/// Foods offered by the client driver, in order.
pub const FOODS: [&str; 3] = ["Nut", "Banana", "Cup of coffee"];

/// A link in the chain.
pub trait Handler {
    /// Links `next` after this handler and returns it, so calls can be chained:
    /// `monkey.set_next(squirrel).set_next(dog)`.
    fn set_next(&self, next: Rc<dyn Handler>) -> Rc<dyn Handler>;

    /// Handles `request` or passes it along. `None` means nobody took it.
    fn handle(&self, request: &str) -> Option<String>;
}

/// The successor slot every concrete handler embeds.
#[derive(Default)]
pub struct Successor {
    next: RefCell<Option<Rc<dyn Handler>>>,
}

impl Successor {
    /// Replaces the successor (a link points to at most one).
    pub fn set(&self, next: Rc<dyn Handler>) -> Rc<dyn Handler> {
        *self.next.borrow_mut() = Some(next.clone());
        next
    }

    /// Default chain behaviour: delegate to the successor, if any.
    pub fn pass(&self, request: &str) -> Option<String> {
        // Clone the handle so the borrow ends before the successor runs.
        let next = self.next.borrow().clone();
        match next {
            Some(next) => next.handle(request),
            None => {
                debug!(request, "End of chain reached");
                None
            }
        }
    }

    #[cfg(test)]
    fn is_set(&self) -> bool {
        self.next.borrow().is_some()
    }
}

fn eat<H: ?Sized>(animal: &str, food: &str, request: &str, successor: &Successor) -> Option<String> {
    if request == food {
        debug!(handler = short_type_name::<H>(), request, "Handled");
        Some(format!("{animal}: I'll eat the {request}."))
    } else {
        successor.pass(request)
    }
}

#[derive(Default)]
pub struct MonkeyHandler {
    successor: Successor,
}

impl Handler for MonkeyHandler {
    fn set_next(&self, next: Rc<dyn Handler>) -> Rc<dyn Handler> {
        self.successor.set(next)
    }

    fn handle(&self, request: &str) -> Option<String> {
        eat::<Self>("Monkey", "Banana", request, &self.successor)
    }
}

#[derive(Default)]
pub struct SquirrelHandler {
    successor: Successor,
}

impl Handler for SquirrelHandler {
    fn set_next(&self, next: Rc<dyn Handler>) -> Rc<dyn Handler> {
        self.successor.set(next)
    }

    fn handle(&self, request: &str) -> Option<String> {
        eat::<Self>("Squirrel", "Nut", request, &self.successor)
    }
}

#[derive(Default)]
pub struct DogHandler {
    successor: Successor,
}

impl Handler for DogHandler {
    fn set_next(&self, next: Rc<dyn Handler>) -> Rc<dyn Handler> {
        self.successor.set(next)
    }

    fn handle(&self, request: &str) -> Option<String> {
        eat::<Self>("Dog", "MeatBall", request, &self.successor)
    }
}

/// Offers every food in [`FOODS`] to `handler`, which may be any link of a chain.
pub fn client_code(handler: &dyn Handler, console: &Console) {
    for food in FOODS {
        console.line(format!("Client: Who wants a {food}?"));
        match handler.handle(food) {
            Some(result) => console.line(format!("  {result}")),
            None => console.line(format!("  {food} was left untouched.")),
        }
    }
}

/// Client driver.
pub fn demo(console: &Console) {
    let monkey = Rc::new(MonkeyHandler::default());
    let squirrel = Rc::new(SquirrelHandler::default());
    let dog = Rc::new(DogHandler::default());

    let counts = || {
        format!(
            "monkey count: {} squirrel count: {} dog count: {}",
            Rc::strong_count(&monkey),
            Rc::strong_count(&squirrel),
            Rc::strong_count(&dog)
        )
    };

    console.line(counts());
    monkey.set_next(squirrel.clone()).set_next(dog.clone());
    console.line(counts());

    // The client can enter the chain at any link, not just the first one.
    console.line("Chain: Monkey > Squirrel > Dog");
    console.blank();
    client_code(&*monkey, console);
    console.line(counts());
    console.blank();

    console.line("Subchain: Squirrel > Dog");
    console.blank();
    client_code(&*squirrel, console);
    console.line(counts());
}
