//! Integration tests for observable values and the speed alarm.

use std::cell::RefCell;
use std::rc::Rc;

use patterns::demos::{run_demos, DemoKind};
use patterns::observer::{read_typed, ObservableValue, SpeedAlarm, Subscriber, Value};
use patterns::output::MemorySink;
use patterns::Config;

/// Counts notifications and remembers the last value seen.
#[derive(Default)]
struct Counter {
    calls: usize,
    last: Option<Value>,
}

impl Subscriber for Counter {
    fn update(&mut self, observable: &ObservableValue<'_>) {
        self.calls += 1;
        self.last = Some(observable.value().clone());
    }
}

#[test]
fn threshold_scenario_emits_back_to_safe_on_following_update() {
    let out = MemorySink::new();
    let alarm = Rc::new(RefCell::new(SpeedAlarm::new(&out)));
    let mut sensor = ObservableValue::new("SpeedSensor", 0i64);
    sensor.subscribe(alarm.clone());

    let mut per_reading = Vec::new();
    for reading in [50i64, 90, 110, 90] {
        out.clear();
        sensor.set_value(reading);
        per_reading.push(out.lines());
    }

    assert!(per_reading[0].is_empty());
    assert!(per_reading[1].is_empty());
    assert_eq!(per_reading[2], ["Achtung! You are driving too fast!"]);
    assert_eq!(per_reading[3], ["Good job! You are back to safe speed."]);
}

#[test]
fn unchanged_value_skips_all_subscribers() {
    let counter = Rc::new(RefCell::new(Counter::default()));
    let mut observable = ObservableValue::new("level", "low");
    observable.subscribe(counter.clone());

    assert!(!observable.set_value("low"));
    assert_eq!(counter.borrow().calls, 0);

    assert!(observable.set_value("high"));
    assert_eq!(counter.borrow().calls, 1);
    assert_eq!(counter.borrow().last, Some(Value::Text("high".into())));
}

#[test]
fn mismatched_read_degrades_to_default() {
    let observable = ObservableValue::new("flag", true);
    assert_eq!(read_typed::<i64>(&observable), 0);
    assert!(observable.value().get::<i64>().is_err());
}

#[test]
fn observer_demo_output() {
    let out = MemorySink::new();
    run_demos(&[DemoKind::Observer], &out, &Config::default(), |_| Ok(())).unwrap();

    insta::assert_snapshot!(out.contents(), @r"
    Observer:
    Achtung! You are driving too fast!
    Good job! You are back to safe speed.
    ");
}
