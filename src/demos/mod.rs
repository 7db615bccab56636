//! Runnable pattern demos.
//!
//! Each demo writes its walkthrough to a [`LineSink`], starting with a title
//! line. [`run_demos`] executes a selection in order.
//!
//! # Usage
//!
//! ```
//! use patterns::demos::{run_demos, DemoKind};
//! use patterns::output::MemorySink;
//! use patterns::Config;
//!
//! let out = MemorySink::new();
//! run_demos(&[DemoKind::Proxy], &out, &Config::default(), |_| Ok(())).unwrap();
//! assert_eq!(out.lines(), ["Proxy:", "Actual subject is called."]);
//! ```

mod behavioral;
mod creational;
mod structural;

use clap::ValueEnum;

use crate::config::Config;
use crate::output::LineSink;

pub use behavioral::{IteratorDemo, ObserverDemo};
pub use creational::{AbstractFactoryDemo, FactoryMethodDemo, SingletonDemo};
pub use structural::{CompositeDemo, ProxyDemo};

/// A self-contained pattern walkthrough.
pub trait Demo {
    fn kind(&self) -> DemoKind;

    /// Run the walkthrough, writing everything to `out`.
    fn execute(&self, out: &dyn LineSink, config: &Config) -> anyhow::Result<()>;
}

/// Every available demo, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum DemoKind {
    AbstractFactory,
    FactoryMethod,
    Singleton,
    Composite,
    Proxy,
    Iterator,
    Observer,
}

impl DemoKind {
    pub const ALL: [DemoKind; 7] = [
        Self::AbstractFactory,
        Self::FactoryMethod,
        Self::Singleton,
        Self::Composite,
        Self::Proxy,
        Self::Iterator,
        Self::Observer,
    ];

    /// Heading printed before the demo output.
    pub fn title(&self) -> &'static str {
        match self {
            Self::AbstractFactory => "AbstractFactory:",
            Self::FactoryMethod => "FactoryMethod:",
            Self::Singleton => "Singleton:",
            Self::Composite => "Composite:",
            Self::Proxy => "Proxy:",
            Self::Iterator => "IteratorPattern:",
            Self::Observer => "Observer:",
        }
    }

    /// One-line description for `list`.
    pub fn summary(&self) -> &'static str {
        match self {
            Self::AbstractFactory => "Couriers build matching origin/destination pairs",
            Self::FactoryMethod => "Teams create their own player rosters",
            Self::Singleton => "One lazily created, process-wide authorizer",
            Self::Composite => "Folder tree printed by recursive descent",
            Self::Proxy => "Stand-in that creates the real subject on demand",
            Self::Iterator => "Playlist walked with a bidirectional cursor",
            Self::Observer => "Speed sensor notifying a threshold alarm",
        }
    }

    pub fn demo(&self) -> Box<dyn Demo> {
        match self {
            Self::AbstractFactory => Box::new(AbstractFactoryDemo),
            Self::FactoryMethod => Box::new(FactoryMethodDemo),
            Self::Singleton => Box::new(SingletonDemo),
            Self::Composite => Box::new(CompositeDemo),
            Self::Proxy => Box::new(ProxyDemo),
            Self::Iterator => Box::new(IteratorDemo),
            Self::Observer => Box::new(ObserverDemo),
        }
    }
}

/// Run `kinds` in order.
///
/// `between` is called after every demo except the last (the console binary
/// uses it to pause). The first failing demo stops the run.
pub fn run_demos(
    kinds: &[DemoKind],
    out: &dyn LineSink,
    config: &Config,
    mut between: impl FnMut(DemoKind) -> anyhow::Result<()>,
) -> anyhow::Result<()> {
    for (i, kind) in kinds.iter().enumerate() {
        let _span = tracing::debug_span!("demo", kind = ?kind).entered();
        tracing::debug!("starting demo");

        let demo = kind.demo();
        out.write_line(kind.title());
        demo.execute(out, config)?;

        if i + 1 < kinds.len() {
            between(*kind)?;
        }
    }
    Ok(())
}
