//! Demos for the structural patterns.

use crate::config::Config;
use crate::output::LineSink;
use crate::structural::composite::FolderNode;
use crate::structural::proxy::{Proxy, Subject};

use super::{Demo, DemoKind};

pub struct CompositeDemo;

impl Demo for CompositeDemo {
    fn kind(&self) -> DemoKind {
        DemoKind::Composite
    }

    fn execute(&self, out: &dyn LineSink, _config: &Config) -> anyhow::Result<()> {
        let mut hidden = FolderNode::folder("This folder is empty");
        hidden.add(FolderNode::file("Suspicious file.zip"))?;
        hidden.add(FolderNode::file("Nothing to see here.jpg"))?;

        let mut root = FolderNode::folder("root");
        root.add(FolderNode::file("track.mp3"))?;
        root.add(FolderNode::file("report.csv"))?;
        root.add(hidden)?;

        root.display(out);

        // Leaves refuse children; report it rather than fail
        let mut leaf = FolderNode::file("track.mp3");
        if let Err(err) = leaf.add(FolderNode::file("cover.jpg")) {
            out.write_line(&err.to_string());
        }
        Ok(())
    }
}

pub struct ProxyDemo;

impl Demo for ProxyDemo {
    fn kind(&self) -> DemoKind {
        DemoKind::Proxy
    }

    fn execute(&self, out: &dyn LineSink, _config: &Config) -> anyhow::Result<()> {
        let mut proxy = Proxy::new();
        proxy.request(out);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::MemorySink;

    #[test]
    fn composite_prints_tree_then_leaf_refusal() {
        let out = MemorySink::new();
        CompositeDemo.execute(&out, &Config::default()).unwrap();

        assert_eq!(
            out.lines(),
            [
                "- Folder: root",
                "-- File: track.mp3",
                "-- File: report.csv",
                "-- Folder: This folder is empty",
                "--- File: Suspicious file.zip",
                "--- File: Nothing to see here.jpg",
                "Operation not supported",
            ]
        );
    }
}
