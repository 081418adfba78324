//! Basic example demonstrating dot stamping and duration queries.
//!
//! This example shows how to use `TimeMeter` directly through its dot API:
//! stamp named timestamps around interesting sections of code, then measure
//! the elapsed time between any two of them.
//!
//! Run with: `cargo run --example dot_meter_basic`.

use std::thread::sleep;
use std::time::Duration;

use dot_meter::TimeMeter;

fn main() {
    let mut meter = TimeMeter::new();
    println!("meter created at {}", meter.creation_time());

    // Simulate some setup work.
    sleep(Duration::from_millis(30));
    meter.new_dot("setup_done");

    // Simulate the main workload.
    sleep(Duration::from_millis(70));
    meter.new_dot("work_done");

    let setup = meter
        .time_between(Some("setup_done"), None)
        .expect("dot was stamped above");
    let work = meter
        .time_between(Some("setup_done"), Some("work_done"))
        .expect("dots were stamped above");
    let total = meter
        .time_between(None, None)
        .expect("measuring against now cannot fail");

    println!("setup took {setup:?}");
    println!("work took  {work:?}");
    println!("total      {total:?}");

    // Unknown names are reported as errors instead of panicking.
    if let Err(error) = meter.time_between(Some("no-such-dot"), None) {
        println!("as expected: {error}");
    }
}
