//! A subscriber that warns when a reading crosses a threshold.

use crate::output::LineSink;

use super::observable::ObservableValue;
use super::subscriber::{read_typed, Subscriber};

/// Watches integer speed readings against a limit.
///
/// On each update:
/// - a reading above the limit prints a warning;
/// - otherwise, if the *previously stored* reading was above the limit,
///   prints a back-to-safe message;
/// - the new reading is stored either way.
///
/// Because the back-to-safe check looks at the stored reading, the message
/// is emitted one update late relative to the reading that dropped back.
pub struct SpeedAlarm<W> {
    out: W,
    limit: i64,
    last_speed: i64,
}

impl<W: LineSink> SpeedAlarm<W> {
    pub const MAXIMUM_SPEED: i64 = 100;

    pub const TOO_FAST: &'static str = "Achtung! You are driving too fast!";
    pub const BACK_TO_SAFE: &'static str = "Good job! You are back to safe speed.";

    /// Create an alarm with the default limit of [`Self::MAXIMUM_SPEED`].
    pub fn new(out: W) -> Self {
        Self::with_limit(out, Self::MAXIMUM_SPEED)
    }

    pub fn with_limit(out: W, limit: i64) -> Self {
        Self {
            out,
            limit,
            last_speed: 0,
        }
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// The reading stored by the most recent update (0 before any update).
    pub fn last_speed(&self) -> i64 {
        self.last_speed
    }
}

impl<W: LineSink> Subscriber for SpeedAlarm<W> {
    fn update(&mut self, observable: &ObservableValue<'_>) {
        let new_speed: i64 = read_typed(observable);

        if new_speed > self.limit {
            self.out.write_line(Self::TOO_FAST);
        } else if self.last_speed > self.limit {
            self.out.write_line(Self::BACK_TO_SAFE);
        }

        tracing::trace!(previous = self.last_speed, new_speed, "speed alarm updated");
        self.last_speed = new_speed;
    }
}
