use pattern_recipes::behavioral::chain::{
    self, DogHandler, Handler, MonkeyHandler, SquirrelHandler,
};
use pattern_recipes::behavioral::command::{self, ComplexCommand, Invoker, Receiver};
use pattern_recipes::behavioral::observer::{self, ConcreteObserver, ObserverCounter, Subject};
use pattern_recipes::behavioral::state::{self, ConcreteStateA, Context as StateContext};
use pattern_recipes::behavioral::strategy::{
    self, AscendingSort, Context as StrategyContext, DescendingSort, Strategy,
};
use pattern_recipes::behavioral::template_method;
use pattern_recipes::behavioral::visitor::{
    self, Component, ConcreteComponentA, ConcreteComponentB, ConcreteVisitor2,
};
use pattern_recipes::framework::mock::MockConsole;
use std::rc::Rc;

// ===== CHAIN OF RESPONSIBILITY =====

#[test]
fn test_chain_demo_transcript() {
    let mut mock = MockConsole::new();
    chain::demo(&mock.console());

    mock.expect_lines([
        "monkey count: 1 squirrel count: 1 dog count: 1",
        "monkey count: 1 squirrel count: 2 dog count: 2",
        "Chain: Monkey > Squirrel > Dog",
        "",
        "Client: Who wants a Nut?",
        "  Squirrel: I'll eat the Nut.",
        "Client: Who wants a Banana?",
        "  Monkey: I'll eat the Banana.",
        "Client: Who wants a Cup of coffee?",
        "  Cup of coffee was left untouched.",
        "monkey count: 1 squirrel count: 2 dog count: 2",
        "",
        "Subchain: Squirrel > Dog",
        "",
        "Client: Who wants a Nut?",
        "  Squirrel: I'll eat the Nut.",
        "Client: Who wants a Banana?",
        "  Banana was left untouched.",
        "Client: Who wants a Cup of coffee?",
        "  Cup of coffee was left untouched.",
        "monkey count: 1 squirrel count: 2 dog count: 2",
    ]);
    mock.verify();
}

/// The first handler that accepts a request wins; nobody accepting is not an error.
#[test]
fn test_chain_routes_each_food_to_its_eater() {
    let monkey = Rc::new(MonkeyHandler::default());
    let squirrel: Rc<dyn Handler> = Rc::new(SquirrelHandler::default());
    monkey
        .set_next(squirrel.clone())
        .set_next(Rc::new(DogHandler::default()));

    assert_eq!(monkey.handle("Nut").as_deref(), Some("Squirrel: I'll eat the Nut."));
    assert_eq!(monkey.handle("Banana").as_deref(), Some("Monkey: I'll eat the Banana."));
    assert_eq!(monkey.handle("MeatBall").as_deref(), Some("Dog: I'll eat the MeatBall."));
    assert_eq!(monkey.handle("Cup of coffee"), None);

    // Entering mid-chain skips the monkey.
    assert_eq!(squirrel.handle("Banana"), None);
}

// ===== COMMAND =====

#[test]
fn test_command_demo_transcript() {
    let mut mock = MockConsole::new();
    command::demo(&mock.console());

    mock.expect_lines([
        "Invoker: Does anybody want something done before I begin?",
        "SimpleCommand: See, I can do simple things like printing (Say Hi!)",
        "Invoker: ...doing something really important...",
        "Invoker: Does anybody want something done after I finish?",
        "ComplexCommand: Complex stuff should be done by a receiver object.",
        "Receiver: Working on (Send email.)",
        "Receiver: Also working on (Save report.)",
    ]);
    mock.verify();
}

/// An invoker without commands still does its own work.
#[test]
fn test_invoker_commands_are_optional() {
    let mut mock = MockConsole::new();
    let receiver = Receiver::new(mock.console());
    let mut invoker = Invoker::new(mock.console());
    invoker.set_on_start(ComplexCommand::new(&receiver, "a", "b"));
    invoker.do_something_important();

    mock.expect_lines([
        "Invoker: Does anybody want something done before I begin?",
        "ComplexCommand: Complex stuff should be done by a receiver object.",
        "Receiver: Working on (a.)",
        "Receiver: Also working on (b.)",
        "Invoker: ...doing something really important...",
        "Invoker: Does anybody want something done after I finish?",
    ]);
    mock.verify();
}

// ===== OBSERVER =====

#[test]
fn test_observer_demo_transcript() {
    let mut mock = MockConsole::new();
    observer::demo(&mock.console());

    mock.expect_lines([
        "Hi, I'm the Observer \"1\".",
        "Hi, I'm the Observer \"2\".",
        "Hi, I'm the Observer \"3\".",
        "There are 3 observers in the list.",
        "Observer \"1\": a new message is available --> Hello World! :D",
        "Observer \"2\": a new message is available --> Hello World! :D",
        "Observer \"3\": a new message is available --> Hello World! :D",
        "Observer \"3\" removed from the list.",
        "There are 2 observers in the list.",
        "Observer \"1\": a new message is available --> The weather is hot today! :p",
        "Observer \"2\": a new message is available --> The weather is hot today! :p",
        "Hi, I'm the Observer \"4\".",
        "Observer \"2\" removed from the list.",
        "Hi, I'm the Observer \"5\".",
        "There are 3 observers in the list.",
        "Observer \"1\": a new message is available --> My new car is great! ;)",
        "Observer \"4\": a new message is available --> My new car is great! ;)",
        "Observer \"5\": a new message is available --> My new car is great! ;)",
        "Observer \"5\" removed from the list.",
        "Observer \"4\" removed from the list.",
        "Observer \"1\" removed from the list.",
        "Goodbye, I was the Observer \"5\".",
        "Goodbye, I was the Observer \"4\".",
        "Goodbye, I was the Observer \"3\".",
        "Goodbye, I was the Observer \"2\".",
        "Goodbye, I was the Observer \"1\".",
        "Goodbye, I was the Subject.",
    ]);
    mock.verify();
}

/// Attachment order is delivery order; a detached observer misses later messages.
#[test]
fn test_observers_notified_in_attachment_order() {
    let mock = MockConsole::new();
    let counter = ObserverCounter::new();
    let subject = Subject::new(mock.console());
    let first = ConcreteObserver::new(&subject, &counter);
    let second = ConcreteObserver::new(&subject, &counter);
    let third = ConcreteObserver::new(&subject, &counter);

    mock.clear();
    subject.create_message("Hello World! :D");
    let order: Vec<String> = mock.lines().into_iter().skip(1).collect();
    assert_eq!(
        order,
        [
            "Observer \"1\": a new message is available --> Hello World! :D",
            "Observer \"2\": a new message is available --> Hello World! :D",
            "Observer \"3\": a new message is available --> Hello World! :D",
        ]
    );

    second.remove_me_from_the_list();
    subject.create_message("again");
    assert_eq!(first.last_message(), "again");
    assert_eq!(second.last_message(), "Hello World! :D");
    assert_eq!(third.last_message(), "again");
    assert_eq!(subject.observer_count(), 2);
}

/// Observers don't keep the subject alive, and detaching from a dead subject is quiet.
#[test]
fn test_observer_outlives_subject() {
    let mock = MockConsole::new();
    let counter = ObserverCounter::new();
    let subject = Subject::new(mock.console());
    let observer = ConcreteObserver::new(&subject, &counter);

    drop(subject);
    assert!(mock.contains("Goodbye, I was the Subject."));

    observer.remove_me_from_the_list();
    assert_eq!(observer.number(), 1);
    assert!(mock.contains("Observer \"1\" removed from the list."));
}

/// Numbering is per counter, not global.
#[test]
fn test_observer_numbers_come_from_counter() {
    let mock = MockConsole::new();
    let subject = Subject::new(mock.console());
    let a = ConcreteObserver::new(&subject, &ObserverCounter::new());
    let b = ConcreteObserver::new(&subject, &ObserverCounter::new());
    assert_eq!(a.number(), 1);
    assert_eq!(b.number(), 1);
}

// ===== STATE =====

#[test]
fn test_state_demo_transcript() {
    let mut mock = MockConsole::new();
    state::demo(&mock.console());

    mock.expect_lines([
        "Context: Transition to ConcreteStateA.",
        "ConcreteStateA handles request1.",
        "ConcreteStateA wants to change the state of the context.",
        "Context: Transition to ConcreteStateB.",
        "ConcreteStateB handles request2.",
        "ConcreteStateB wants to change the state of the context.",
        "Context: Transition to ConcreteStateA.",
    ]);
    mock.verify();
}

#[test]
fn test_state_round_trip() {
    let mock = MockConsole::new();
    let mut context = StateContext::new(Box::new(ConcreteStateA), mock.console());
    assert_eq!(context.current_state(), Some("ConcreteStateA"));

    context.request1();
    assert_eq!(context.current_state(), Some("ConcreteStateB"));
    context.request1();
    assert_eq!(context.current_state(), Some("ConcreteStateB"));
    context.request2();
    assert_eq!(context.current_state(), Some("ConcreteStateA"));
}

// ===== STRATEGY =====

#[test]
fn test_strategy_demo_transcript() {
    let mut mock = MockConsole::new();
    strategy::demo(&mock.console());

    mock.expect_lines([
        "Client: Strategy is set to normal sorting.",
        "Context: Sorting data using the strategy (not sure how it'll do it)",
        "abcde",
        "",
        "Client: Strategy is set to reverse sorting.",
        "Context: Sorting data using the strategy (not sure how it'll do it)",
        "edcba",
    ]);
    mock.verify();
}

#[test]
fn test_strategies_sort_both_ways() {
    assert_eq!(AscendingSort.do_algorithm("aecbd"), "abcde");
    assert_eq!(DescendingSort.do_algorithm("aecbd"), "edcba");
    assert_eq!(AscendingSort.do_algorithm(""), "");
}

#[test]
fn test_context_without_strategy() {
    let mut mock = MockConsole::new();
    let mut context = StrategyContext::new(None, mock.console());
    assert_eq!(context.execute("cba"), None);
    context.do_some_business_logic();

    context.set_strategy(AscendingSort);
    assert_eq!(context.execute("cba").as_deref(), Some("abc"));

    mock.expect_line("Context: Strategy isn't set");
    mock.verify();
}

// ===== TEMPLATE METHOD =====

#[test]
fn test_template_method_demo_transcript() {
    let mut mock = MockConsole::new();
    template_method::demo(&mock.console());

    mock.expect_lines([
        "Same client code can work with different subclasses:",
        "AbstractClass says: I am doing the bulk of the work",
        "ConcreteClass1 says: Implemented Operation1",
        "AbstractClass says: But I let subclasses override some operations",
        "ConcreteClass1 says: Implemented Operation2",
        "AbstractClass says: But I am doing the bulk of the work anyway",
        "",
        "Same client code can work with different subclasses:",
        "AbstractClass says: I am doing the bulk of the work",
        "ConcreteClass2 says: Implemented Operation1",
        "AbstractClass says: But I let subclasses override some operations",
        "ConcreteClass2 says: Overridden Hook1",
        "ConcreteClass2 says: Implemented Operation2",
        "AbstractClass says: But I am doing the bulk of the work anyway",
    ]);
    mock.verify();
}

// ===== VISITOR =====

#[test]
fn test_visitor_demo_transcript() {
    let mut mock = MockConsole::new();
    visitor::demo(&mock.console());

    mock.expect_lines([
        "The client code works with all visitors via the base Visitor interface:",
        "A + ConcreteVisitor1",
        "B + ConcreteVisitor1",
        "",
        "It allows the same client code to work with different types of visitors:",
        "A + ConcreteVisitor2",
        "B + ConcreteVisitor2",
    ]);
    mock.verify();
}

/// Dispatch follows the component's concrete type, not its position.
#[test]
fn test_visitor_double_dispatch() {
    let mock = MockConsole::new();
    let components: Vec<Box<dyn Component>> = vec![
        Box::new(ConcreteComponentB),
        Box::new(ConcreteComponentA),
        Box::new(ConcreteComponentB),
    ];
    visitor::client_code(&components, &ConcreteVisitor2::new(mock.console()));

    assert_eq!(
        mock.lines(),
        ["B + ConcreteVisitor2", "A + ConcreteVisitor2", "B + ConcreteVisitor2"]
    );
}
