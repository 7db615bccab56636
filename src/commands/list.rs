//! `list` subcommand handler

use clap::ValueEnum;

use patterns::demos::DemoKind;

/// Print every demo name with a short description.
pub fn handle() {
    for kind in DemoKind::ALL {
        let name = kind
            .to_possible_value()
            .map(|value| value.get_name().to_string())
            .unwrap_or_default();
        println!("{:<18} {}", name, kind.summary());
    }
}
