use pattern_recipes::framework::mock::MockConsole;
use pattern_recipes::structural::adapter::{self, Adaptee, Adapter, DefaultTarget, Target};
use pattern_recipes::structural::bridge::{
    self, Abstraction, BasicAbstraction, ConcreteImplementationB,
};
use pattern_recipes::structural::decorator::{
    self, Component, ConcreteComponent, ConcreteDecoratorA, ConcreteDecoratorB,
};
use pattern_recipes::structural::facade::{self, Facade, Subsystem1};
use pattern_recipes::structural::proxy::{self, Proxy, RealSubject, Subject};
use std::cell::Cell;
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

/// Counts every `tracing` event, whatever its level.
struct EventCounter(Arc<AtomicUsize>);

impl<S: tracing::Subscriber> Layer<S> for EventCounter {
    fn on_event(&self, _event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

/// Runs `f` with a subscriber that only counts events; returns how many fired.
fn count_events(f: impl FnOnce()) -> usize {
    let events = Arc::new(AtomicUsize::new(0));
    let subscriber = tracing_subscriber::registry().with(EventCounter(events.clone()));
    tracing::subscriber::with_default(subscriber, f);
    events.load(Ordering::SeqCst)
}

#[test]
fn test_adapter_demo_transcript() {
    let mut mock = MockConsole::new();
    adapter::demo(&mock.console());

    mock.expect_lines([
        "Client: I can work just fine with the Target objects:",
        "Target: The default target's behavior.",
        "",
        "Client: The Adaptee class has a weird interface. See, I don't understand it:",
        "Adaptee: .eetpadA eht fo roivaheb laicepS",
        "",
        "Client: But I can work with it via the Adapter:",
        "Adapter: (TRANSLATED) Special behavior of the Adaptee.",
    ]);
    mock.verify();
}

#[test]
fn test_adapter_only_translates() {
    let adaptee = Adaptee;
    assert_eq!(DefaultTarget.request(), "Target: The default target's behavior.");
    assert_eq!(
        Adapter::new(&adaptee).request(),
        "Adapter: (TRANSLATED) Special behavior of the Adaptee."
    );
}

#[test]
fn test_bridge_demo_transcript() {
    let mut mock = MockConsole::new();
    bridge::demo(&mock.console());

    mock.expect_lines([
        "Abstraction: Base operation with:",
        "ConcreteImplementationA: Here's the result on the platform A.",
        "",
        "ExtendedAbstraction: Extended operation with:",
        "ConcreteImplementationB: Here's the result on the platform B.",
        "",
    ]);
    mock.verify();
}

/// Either side of the bridge can vary without the other.
#[test]
fn test_basic_abstraction_with_platform_b() {
    let abstraction = BasicAbstraction::new(Box::new(ConcreteImplementationB));
    assert_eq!(
        abstraction.operation(),
        "Abstraction: Base operation with:\nConcreteImplementationB: Here's the result on the platform B.\n"
    );
}

#[test]
fn test_decorator_demo_transcript() {
    let mut mock = MockConsole::new();
    decorator::demo(&mock.console());

    mock.expect_line("Client: I've got a simple component:")
        .expect_line("RESULT: ConcreteComponent")
        .expect_blank()
        .expect_line("Client: Now I've got a decorated component:")
        .expect_line("RESULT: ConcreteDecoratorB(ConcreteDecoratorA(ConcreteComponent))");
    mock.verify();
}

/// Wrapping order is visible in the result.
#[test]
fn test_decorators_stack_in_any_order() {
    let a_outside = ConcreteDecoratorA::new(Box::new(ConcreteDecoratorB::new(Box::new(
        ConcreteComponent,
    ))));
    let doubled = ConcreteDecoratorA::new(Box::new(ConcreteDecoratorA::new(Box::new(
        ConcreteComponent,
    ))));

    assert_eq!(
        a_outside.operation(),
        "ConcreteDecoratorA(ConcreteDecoratorB(ConcreteComponent))"
    );
    assert_eq!(
        doubled.operation(),
        "ConcreteDecoratorA(ConcreteDecoratorA(ConcreteComponent))"
    );
}

#[test]
fn test_facade_demo_transcript() {
    let mut mock = MockConsole::new();
    facade::demo(&mock.console());

    mock.expect_lines([
        "Facade initializes subsystems:",
        "Subsystem1: Ready!",
        "Subsystem2: Get ready!",
        "Facade orders subsystems to perform the action:",
        "Subsystem1: Go!",
        "Subsystem2: Fire!",
    ]);
    mock.verify();
}

/// Missing subsystems are created by the facade itself.
#[test]
fn test_facade_creates_missing_subsystems() {
    let partial = Facade::new(Some(Subsystem1), None);
    let empty = Facade::new(None, None);
    assert_eq!(partial.operation(), empty.operation());
    assert_eq!(empty.operation().lines().count(), 6);
}

#[test]
fn test_proxy_demo_transcript() {
    let mut mock = MockConsole::new();
    proxy::demo(&mock.console());

    mock.expect_line("Client: Executing the client code with a real subject:")
        .expect_line("RealSubject: Handling request.")
        .expect_blank()
        .expect_line("Client: Executing the same client code with a proxy:")
        .expect_line("Proxy: Checking access prior to firing a real request.")
        .expect_line("RealSubject: Handling request.")
        .expect_line("Proxy: Logging the time of request.");
    mock.verify();
}

/// A denying policy stops the request before the real subject sees it, and
/// leaves no trace in the logs either.
#[test]
fn test_proxy_denied_access_reaches_nothing() {
    let mut mock = MockConsole::new();
    let proxy = Proxy::with_access_check(RealSubject::new(mock.console()), || false);

    let events = count_events(|| proxy::client_code(&proxy));

    mock.expect_line("Proxy: Checking access prior to firing a real request.");
    mock.verify();
    assert!(!mock.contains("RealSubject"));
    assert!(!mock.contains("Logging"));
    assert_eq!(events, 0, "denied request must not emit log events");
}

/// Only the grant path logs.
#[test]
fn test_proxy_logs_only_when_access_granted() {
    let mock = MockConsole::new();
    let proxy = Proxy::new(RealSubject::new(mock.console()));

    let events = count_events(|| proxy.request());

    assert!(events >= 1);
    assert!(mock.contains("Proxy: Logging the time of request."));
}

/// The policy is consulted on every request, not once.
#[test]
fn test_proxy_checks_access_per_request() {
    let mock = MockConsole::new();
    let calls = Rc::new(Cell::new(0));
    let counter = calls.clone();
    let proxy = Proxy::with_access_check(RealSubject::new(mock.console()), move || {
        counter.set(counter.get() + 1);
        counter.get() % 2 == 1
    });

    proxy.request();
    proxy.request();
    proxy.request();

    assert_eq!(calls.get(), 3);
    let handled = mock
        .lines()
        .iter()
        .filter(|line| *line == "RealSubject: Handling request.")
        .count();
    assert_eq!(handled, 2);
}
