//! `run` subcommand handler

use anyhow::Result;
use std::io::{self, BufRead, Write};

use patterns::demos::{run_demos, DemoKind};
use patterns::output::StdoutSink;
use patterns::Config;

/// Run the selected demos (all of them when `demos` is empty).
pub fn handle(demos: Vec<DemoKind>, no_pause: bool, config: &Config) -> Result<()> {
    let kinds = if demos.is_empty() {
        DemoKind::ALL.to_vec()
    } else {
        demos
    };

    let pause = should_pause(no_pause, config);
    tracing::debug!(count = kinds.len(), pause, "running demos");

    run_demos(&kinds, &StdoutSink, config, |_| {
        if pause {
            wait_for_enter()?;
        }
        Ok(())
    })
}

/// Pause only when asked to and both ends are an interactive terminal.
fn should_pause(no_pause: bool, config: &Config) -> bool {
    !no_pause
        && config.runner.pause_between_demos
        && atty::is(atty::Stream::Stdin)
        && atty::is(atty::Stream::Stdout)
}

#[cfg(not(tarpaulin_include))]
fn wait_for_enter() -> Result<()> {
    print!("Press Enter to continue...");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;
    println!();
    Ok(())
}
