//! A stand-in that creates the real subject on first request.

use crate::output::LineSink;

/// Something that can serve a request.
pub trait Subject {
    fn request(&mut self, out: &dyn LineSink);
}

/// The expensive object the proxy stands in for.
#[derive(Debug, Default)]
pub struct ActualSubject;

impl Subject for ActualSubject {
    fn request(&mut self, out: &dyn LineSink) {
        out.write_line("Actual subject is called.");
    }
}

/// Forwards requests to an [`ActualSubject`], constructed lazily.
#[derive(Debug, Default)]
pub struct Proxy {
    actual: Option<ActualSubject>,
}

impl Proxy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the real subject has been constructed yet.
    pub fn is_initialized(&self) -> bool {
        self.actual.is_some()
    }
}

impl Subject for Proxy {
    fn request(&mut self, out: &dyn LineSink) {
        let actual = self.actual.get_or_insert_with(|| {
            tracing::debug!("proxy constructing actual subject");
            ActualSubject
        });
        actual.request(out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::MemorySink;

    #[test]
    fn proxy_defers_construction_until_first_request() {
        let out = MemorySink::new();
        let mut proxy = Proxy::new();
        assert!(!proxy.is_initialized());

        proxy.request(&out);
        assert!(proxy.is_initialized());
        proxy.request(&out);

        assert_eq!(
            out.lines(),
            ["Actual subject is called.", "Actual subject is called."]
        );
    }
}
