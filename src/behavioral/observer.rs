//! # Observer
//!
//! A [`Subject`] keeps a list of observers and pushes its current message to each of
//! them whenever it changes.
//!
//! ## Ownership Model
//!
//! Neither side owns the other:
//! - The subject's list holds `Weak<dyn Observer>` entries. Attaching never keeps an
//!   observer alive; removing it is the caller's responsibility.
//! - A [`ConcreteObserver`] holds a `Weak<Subject>` back-reference, used only to
//!   detach itself.
//!
//! ## Notification Contract
//!
//! - `attach` appends; the same observer may be attached twice.
//! - `detach` removes the first matching entry; no-op when absent.
//! - `notify` delivers the message to every attached observer, in attachment order,
//!   synchronously. A panicking observer is not contained.
//!
//! ## Mutation During Notify
//!
//! `notify` works on a **snapshot** of the list taken when it starts. An observer
//! may attach or detach (itself or others) from inside `update`; the change is
//! applied to the live list immediately and becomes visible from the *next*
//! notification. The running pass still visits exactly the snapshot. Entries whose
//! observer has already been dropped are pruned and skipped.
//!
//! ## Numbering
//!
//! Observers are numbered by an explicit [`ObserverCounter`] passed to their
//! constructor, never by a hidden global.

use crate::framework::Console;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use tracing::debug;

/// Receives the subject's message.
pub trait Observer {
    fn update(&self, message: &str);
}

/// Hands out observer numbers, starting at 1.
#[derive(Debug, Default)]
pub struct ObserverCounter {
    issued: Cell<u32>,
}

impl ObserverCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues the next number.
    pub fn next_number(&self) -> u32 {
        let number = self.issued.get() + 1;
        self.issued.set(number);
        number
    }

    /// How many numbers have been issued so far.
    pub fn issued(&self) -> u32 {
        self.issued.get()
    }
}

/// Keeps the current message and the non-owning list of observers.
pub struct Subject {
    observers: RefCell<Vec<Weak<dyn Observer>>>,
    message: RefCell<String>,
    console: Console,
}

impl Subject {
    pub fn new(console: Console) -> Rc<Self> {
        Rc::new(Self {
            observers: RefCell::new(Vec::new()),
            message: RefCell::new(String::new()),
            console,
        })
    }

    /// Appends `observer`. Duplicates are allowed.
    pub fn attach(&self, observer: Weak<dyn Observer>) {
        let mut observers = self.observers.borrow_mut();
        observers.push(observer);
        debug!(size = observers.len(), "Observer attached");
    }

    /// Removes the first entry pointing at the same observer as `observer`.
    pub fn detach(&self, observer: &Weak<dyn Observer>) {
        let mut observers = self.observers.borrow_mut();
        match observers.iter().position(|entry| entry.ptr_eq(observer)) {
            Some(index) => {
                observers.remove(index);
                debug!(size = observers.len(), "Observer detached");
            }
            None => debug!("Detach ignored: observer not in the list"),
        }
    }

    /// Delivers the current message to every attached observer.
    pub fn notify(&self) {
        let snapshot = {
            let mut observers = self.observers.borrow_mut();
            observers.retain(|entry| entry.strong_count() > 0);
            observers.clone()
        };
        let message = self.message.borrow().clone();

        self.console.line(format!(
            "There are {} observers in the list.",
            snapshot.len()
        ));
        debug!(size = snapshot.len(), %message, "Notify");
        for entry in snapshot {
            match entry.upgrade() {
                Some(observer) => observer.update(&message),
                None => debug!("Skipping observer dropped during notify"),
            }
        }
    }

    /// Stores `message` and notifies every observer.
    pub fn create_message(&self, message: impl Into<String>) {
        *self.message.borrow_mut() = message.into();
        self.notify();
    }

    pub fn message(&self) -> String {
        self.message.borrow().clone()
    }

    /// Number of entries in the list (duplicates counted).
    pub fn observer_count(&self) -> usize {
        self.observers.borrow().len()
    }
}

impl Drop for Subject {
    fn drop(&mut self) {
        self.console.line("Goodbye, I was the Subject.");
    }
}

/// A numbered observer that attaches itself on construction.
pub struct ConcreteObserver {
    number: u32,
    message_from_subject: RefCell<String>,
    subject: Weak<Subject>,
    me: Weak<dyn Observer>,
    console: Console,
}

impl ConcreteObserver {
    /// Creates observer number `counter.next_number()` and attaches it to `subject`.
    pub fn new(subject: &Rc<Subject>, counter: &ObserverCounter) -> Rc<Self> {
        let number = counter.next_number();
        let console = subject.console.clone();
        console.line(format!("Hi, I'm the Observer \"{number}\"."));

        let observer = Rc::new_cyclic(|me: &Weak<ConcreteObserver>| {
            let me: Weak<dyn Observer> = me.clone();
            Self {
                number,
                message_from_subject: RefCell::new(String::new()),
                subject: Rc::downgrade(subject),
                me,
                console,
            }
        });
        subject.attach(observer.me.clone());
        observer
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    /// The last message delivered to this observer.
    pub fn last_message(&self) -> String {
        self.message_from_subject.borrow().clone()
    }

    /// Detaches from the subject (if it is still alive).
    pub fn remove_me_from_the_list(&self) {
        if let Some(subject) = self.subject.upgrade() {
            subject.detach(&self.me);
        }
        self.console
            .line(format!("Observer \"{}\" removed from the list.", self.number));
    }

    fn print_info(&self) {
        self.console.line(format!(
            "Observer \"{}\": a new message is available --> {}",
            self.number,
            self.message_from_subject.borrow()
        ));
    }
}

impl Observer for ConcreteObserver {
    fn update(&self, message: &str) {
        *self.message_from_subject.borrow_mut() = message.to_string();
        self.print_info();
    }
}

impl Drop for ConcreteObserver {
    fn drop(&mut self) {
        self.console
            .line(format!("Goodbye, I was the Observer \"{}\".", self.number));
    }
}

/// Client driver.
pub fn demo(console: &Console) {
    let counter = ObserverCounter::new();
    let subject = Subject::new(console.clone());

    let observer1 = ConcreteObserver::new(&subject, &counter);
    let observer2 = ConcreteObserver::new(&subject, &counter);
    let observer3 = ConcreteObserver::new(&subject, &counter);

    subject.create_message("Hello World! :D");
    observer3.remove_me_from_the_list();

    subject.create_message("The weather is hot today! :p");
    let observer4 = ConcreteObserver::new(&subject, &counter);

    observer2.remove_me_from_the_list();
    let observer5 = ConcreteObserver::new(&subject, &counter);

    subject.create_message("My new car is great! ;)");
    observer5.remove_me_from_the_list();

    observer4.remove_me_from_the_list();
    observer1.remove_me_from_the_list();

    drop(observer5);
    drop(observer4);
    drop(observer3);
    drop(observer2);
    drop(observer1);
    drop(subject);
}
