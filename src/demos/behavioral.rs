//! Demos for the behavioral patterns: playlist traversal and the speed alarm.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Context;

use crate::config::Config;
use crate::observer::{ObservableValue, SpeedAlarm};
use crate::output::LineSink;
use crate::player::{playlist, PlaybackController};

use super::{Demo, DemoKind};

pub struct IteratorDemo;

impl Demo for IteratorDemo {
    fn kind(&self) -> DemoKind {
        DemoKind::Iterator
    }

    fn execute(&self, out: &dyn LineSink, config: &Config) -> anyhow::Result<()> {
        let tracks = playlist(config.iterator.track_count);
        let mut controller = PlaybackController::new(&tracks, out);

        out.write_line("Tracks:");
        while !controller.is_last() {
            controller.play();
        }
        controller.play();

        out.write_line("Play first");
        controller.first().context("playlist is empty")?;
        controller.play();

        out.write_line("Play last");
        controller.last().context("playlist is empty")?;
        controller.play();

        // Anything further only reports the end
        controller.play();
        Ok(())
    }
}

pub struct ObserverDemo;

impl Demo for ObserverDemo {
    fn kind(&self) -> DemoKind {
        DemoKind::Observer
    }

    fn execute(&self, out: &dyn LineSink, config: &Config) -> anyhow::Result<()> {
        let settings = &config.observer;
        let alarm = Rc::new(RefCell::new(SpeedAlarm::with_limit(
            out,
            settings.speed_limit,
        )));

        let mut sensor = ObservableValue::new("SpeedSensor", settings.initial_speed);
        sensor.subscribe(alarm.clone());

        for &reading in &settings.readings {
            sensor.set_value(reading);
        }
        Ok(())
    }
}
