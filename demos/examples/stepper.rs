// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A quantity picker: bounded, stepping by 5, wrapping around.
//!
//! Run:
//! - `cargo run -p understory_demos --example stepper`

use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};
use understory_kbd::Key;
use understory_stepper::{Stepper, StepperConfig};

fn main() {
    if let Ok(log_file) = File::create("stepper.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
    }

    let config = StepperConfig {
        value: 10.0,
        min: Some(0.0),
        max: Some(22.0),
        step: 5.0,
        looping: true,
        ..StepperConfig::default()
    };
    let mut stepper = match Stepper::new(config) {
        Ok(stepper) => stepper,
        Err(err) => {
            eprintln!("invalid stepper: {err}");
            return;
        }
    };
    stepper.subscribe_value(|v| println!("  value -> {v}"));

    for key in [Key::ArrowUp, Key::ArrowUp, Key::ArrowUp, Key::ArrowDown, Key::Home, Key::End] {
        let handled = stepper.handle_key(key);
        println!(
            "{key:?} handled={handled} {:?} prev={:?} next={:?}",
            stepper.spinbutton(),
            stepper.previous(),
            stepper.next()
        );
    }

    stepper.set_disabled(true);
    println!("disabled: increment pressed -> {}", stepper.press_increment());
}
