//! # Command
//!
//! Requests become objects. The [`Invoker`] triggers whatever commands it was
//! configured with and never learns what they do or which receiver does the work.

use crate::framework::Console;
use tracing::debug;

pub trait Command {
    fn execute(&self);
}

/// Does its small job by itself.
pub struct SimpleCommand {
    payload: String,
    console: Console,
}

impl SimpleCommand {
    pub fn new(payload: impl Into<String>, console: Console) -> Self {
        Self {
            payload: payload.into(),
            console,
        }
    }
}

impl Command for SimpleCommand {
    fn execute(&self) {
        self.console.line(format!(
            "SimpleCommand: See, I can do simple things like printing ({})",
            self.payload
        ));
    }
}

/// Knows how to carry out the actual business operations.
pub struct Receiver {
    console: Console,
}

impl Receiver {
    pub fn new(console: Console) -> Self {
        Self { console }
    }

    pub fn do_something(&self, a: &str) {
        self.console.line(format!("Receiver: Working on ({a}.)"));
    }

    pub fn do_something_else(&self, b: &str) {
        self.console.line(format!("Receiver: Also working on ({b}.)"));
    }
}

/// Delegates the real work to a borrowed [`Receiver`].
pub struct ComplexCommand<'r> {
    receiver: &'r Receiver,
    a: String,
    b: String,
}

impl<'r> ComplexCommand<'r> {
    pub fn new(receiver: &'r Receiver, a: impl Into<String>, b: impl Into<String>) -> Self {
        Self {
            receiver,
            a: a.into(),
            b: b.into(),
        }
    }
}

impl Command for ComplexCommand<'_> {
    fn execute(&self) {
        self.receiver
            .console
            .line("ComplexCommand: Complex stuff should be done by a receiver object.");
        self.receiver.do_something(&self.a);
        self.receiver.do_something_else(&self.b);
    }
}

/// Owns up to two commands: one run before its work, one after.
pub struct Invoker<'c> {
    on_start: Option<Box<dyn Command + 'c>>,
    on_finish: Option<Box<dyn Command + 'c>>,
    console: Console,
}

impl<'c> Invoker<'c> {
    pub fn new(console: Console) -> Self {
        Self {
            on_start: None,
            on_finish: None,
            console,
        }
    }

    pub fn set_on_start(&mut self, command: impl Command + 'c) {
        self.on_start = Some(Box::new(command));
    }

    pub fn set_on_finish(&mut self, command: impl Command + 'c) {
        self.on_finish = Some(Box::new(command));
    }

    pub fn do_something_important(&self) {
        self.console
            .line("Invoker: Does anybody want something done before I begin?");
        if let Some(command) = &self.on_start {
            debug!("Running on_start command");
            command.execute();
        }
        self.console
            .line("Invoker: ...doing something really important...");
        self.console
            .line("Invoker: Does anybody want something done after I finish?");
        if let Some(command) = &self.on_finish {
            debug!("Running on_finish command");
            command.execute();
        }
    }
}

/// Client driver.
pub fn demo(console: &Console) {
    let receiver = Receiver::new(console.clone());
    let mut invoker = Invoker::new(console.clone());
    invoker.set_on_start(SimpleCommand::new("Say Hi!", console.clone()));
    invoker.set_on_finish(ComplexCommand::new(&receiver, "Send email", "Save report"));
    invoker.do_something_important();
}
