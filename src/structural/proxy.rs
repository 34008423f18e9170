//! # Proxy
//!
//! A stand-in with the same interface as the real subject. The proxy runs its
//! pre-checks first and forwards to the real subject only when every check passes;
//! afterwards it runs its post-actions.
//!
//! ## Access Contract
//! - Check passes: real subject runs, then the access is logged.
//! - Check fails: the real subject is **not** invoked and **nothing** is logged.
//!   Denial is not an error; the request simply has no effect.

use crate::framework::Console;
use std::fmt;
use tracing::debug;

/// Operation shared by the real subject and its proxy.
pub trait Subject {
    fn request(&self);
}

/// Holds the core business logic.
#[derive(Debug, Clone)]
pub struct RealSubject {
    console: Console,
}

impl RealSubject {
    pub fn new(console: Console) -> Self {
        Self { console }
    }
}

impl Subject for RealSubject {
    fn request(&self) {
        self.console.line("RealSubject: Handling request.");
    }
}

/// Decides whether a request may reach the real subject.
pub type AccessCheck = Box<dyn Fn() -> bool>;

/// Guards a [`RealSubject`] it owns.
pub struct Proxy {
    real_subject: RealSubject,
    console: Console,
    access_check: AccessCheck,
}

impl Proxy {
    /// A proxy whose access check always grants access.
    pub fn new(real_subject: RealSubject) -> Self {
        Self::with_access_check(real_subject, || true)
    }

    /// A proxy with a custom access policy.
    pub fn with_access_check(
        real_subject: RealSubject,
        access_check: impl Fn() -> bool + 'static,
    ) -> Self {
        let console = real_subject.console.clone();
        Self {
            real_subject,
            console,
            access_check: Box::new(access_check),
        }
    }

    fn check_access(&self) -> bool {
        self.console
            .line("Proxy: Checking access prior to firing a real request.");
        (self.access_check)()
    }

    fn log_access(&self) {
        self.console.line("Proxy: Logging the time of request.");
    }
}

impl Subject for Proxy {
    fn request(&self) {
        if self.check_access() {
            debug!("Access granted; forwarding to real subject");
            self.real_subject.request();
            self.log_access();
        }
    }
}

impl fmt::Debug for Proxy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Proxy")
            .field("real_subject", &self.real_subject)
            .finish_non_exhaustive()
    }
}

/// Works with real subjects and proxies alike.
pub fn client_code(subject: &dyn Subject) {
    subject.request();
}

/// Client driver.
pub fn demo(console: &Console) {
    console.line("Client: Executing the client code with a real subject:");
    let real_subject = RealSubject::new(console.clone());
    client_code(&real_subject);

    console.blank();
    console.line("Client: Executing the same client code with a proxy:");
    let proxy = Proxy::new(real_subject.clone());
    client_code(&proxy);
}
