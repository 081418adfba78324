//! Example demonstrating the event convenience layer of `TimeMeter`.
//!
//! An event is a named operation bracketed by `start()` and `end()` calls;
//! `time()` then reports how long the operation took. Under the hood these are
//! ordinary dots named `start_<event>` and `end_<event>`.
//!
//! Run with: `cargo run --example dot_meter_events`.

use std::thread::sleep;
use std::time::Duration;

use dot_meter::TimeMeter;

fn main() {
    let mut meter = TimeMeter::new();

    // Asking for an event measurement before selecting an event is an error.
    if let Err(error) = meter.time() {
        println!("before any event: {error}");
    }

    // Measure a simulated load operation.
    meter.event("load");
    meter.start().expect("event was selected above");
    sleep(Duration::from_millis(40));
    meter.end().expect("event was selected above");

    let load = meter.time().expect("event was selected above");
    println!("load took {load:?}");

    // Selecting another event overwrites the previous selection, but the
    // earlier event's dots remain stamped.
    meter.event("render");
    meter.start().expect("event was selected above");
    sleep(Duration::from_millis(15));
    meter.end().expect("event was selected above");

    let render = meter.time().expect("event was selected above");
    println!("render took {render:?}");

    // Re-selecting the earlier event reads its preserved dots.
    meter.event("load");
    let load_again = meter.time().expect("event was selected above");
    assert_eq!(load, load_again);

    println!("start_load stamped: {}", meter.dot_exists("start_load"));
    println!("end_render stamped: {}", meter.dot_exists("end_render"));
}
