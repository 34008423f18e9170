//! # State
//!
//! A [`Context`] delegates its requests to the current [`State`] object. States
//! decide, inside their own handlers, whether the context should move on to another
//! state; there is no transition table declared up front.
//!
//! ## Ownership Note
//! The context exclusively owns exactly one state. A state never stores a pointer
//! back to its context: the context lends itself (`&mut Context`) for the duration
//! of each handler call, which is all a state needs to request a transition.
//!
//! While a handler runs, its state is taken out of the context's slot. When the
//! handler asks for a transition, the new state goes into the slot and the old one
//! is released as soon as the handler returns. Without a transition the old state
//! is put back. Between requests exactly one state instance is alive.

use crate::framework::Console;
use std::fmt;
use tracing::debug;

/// Behaviour that varies with the context's state.
pub trait State {
    /// Display name, e.g. `ConcreteStateA`.
    fn name(&self) -> &'static str;

    fn handle1(&self, context: &mut Context);

    fn handle2(&self, context: &mut Context);
}

pub struct Context {
    state: Option<Box<dyn State>>,
    console: Console,
}

impl Context {
    /// Creates the context and transitions into `initial`.
    pub fn new(initial: Box<dyn State>, console: Console) -> Self {
        let mut context = Self {
            state: None,
            console,
        };
        context.transition_to(initial);
        context
    }

    /// Replaces the current state. Outside a handler the previous state is released
    /// immediately; inside one, as soon as that handler returns.
    pub fn transition_to(&mut self, state: Box<dyn State>) {
        self.console
            .line(format!("Context: Transition to {}.", state.name()));
        debug!(from = ?self.current_state(), to = state.name(), "Transition");
        self.state = Some(state);
    }

    pub fn request1(&mut self) {
        self.dispatch(|state, context| state.handle1(context));
    }

    pub fn request2(&mut self) {
        self.dispatch(|state, context| state.handle2(context));
    }

    /// Name of the active state.
    pub fn current_state(&self) -> Option<&'static str> {
        self.state.as_ref().map(|state| state.name())
    }

    pub fn console(&self) -> &Console {
        &self.console
    }

    fn dispatch(&mut self, handler: impl FnOnce(&dyn State, &mut Context)) {
        // A nested request from inside a handler finds the slot empty and is ignored.
        let Some(state) = self.state.take() else {
            debug!("Request ignored: a handler is already running");
            return;
        };
        handler(state.as_ref(), self);
        if self.state.is_none() {
            self.state = Some(state);
        }
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("state", &self.current_state())
            .finish()
    }
}

#[derive(Debug, Default)]
pub struct ConcreteStateA;

#[derive(Debug, Default)]
pub struct ConcreteStateB;

impl State for ConcreteStateA {
    fn name(&self) -> &'static str {
        "ConcreteStateA"
    }

    fn handle1(&self, context: &mut Context) {
        context.console().line("ConcreteStateA handles request1.");
        context
            .console()
            .line("ConcreteStateA wants to change the state of the context.");
        context.transition_to(Box::new(ConcreteStateB));
    }

    fn handle2(&self, context: &mut Context) {
        context.console().line("ConcreteStateA handles request2.");
    }
}

impl State for ConcreteStateB {
    fn name(&self) -> &'static str {
        "ConcreteStateB"
    }

    fn handle1(&self, context: &mut Context) {
        context.console().line("ConcreteStateB handles request1.");
    }

    fn handle2(&self, context: &mut Context) {
        context.console().line("ConcreteStateB handles request2.");
        context
            .console()
            .line("ConcreteStateB wants to change the state of the context.");
        context.transition_to(Box::new(ConcreteStateA));
    }
}

/// Client driver.
pub fn demo(console: &Console) {
    let mut context = Context::new(Box::new(ConcreteStateA), console.clone());
    context.request1();
    context.request2();
}
