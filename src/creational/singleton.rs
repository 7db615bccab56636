//! A process-wide authorizer created on first use.

use std::sync::OnceLock;
use std::time::Instant;

/// The single shared authorizer.
#[derive(Debug)]
pub struct Authorizer {
    created: Instant,
}

static AUTHORIZER: OnceLock<Authorizer> = OnceLock::new();

impl Authorizer {
    /// Get the shared instance, creating it on the first call.
    ///
    /// Safe under concurrent first access: exactly one initialisation runs
    /// and every caller receives the same reference.
    pub fn instance() -> &'static Authorizer {
        AUTHORIZER.get_or_init(|| {
            tracing::debug!("creating authorizer instance");
            Authorizer {
                created: Instant::now(),
            }
        })
    }

    /// When the shared instance was created.
    pub fn created(&self) -> Instant {
        self.created
    }
}
