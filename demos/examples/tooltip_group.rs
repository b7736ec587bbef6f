// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A toolbar whose button tooltips share one group, so only one is visible.
//!
//! Run:
//! - `cargo run -p understory_demos --example tooltip_group`

use std::fs::File;

use kurbo::{Point, Rect};
use simplelog::{Config, LevelFilter, WriteLogger};
use understory_kbd::Key;
use understory_tooltip::{TooltipConfig, TooltipGroup, Tooltips};

fn main() {
    if let Ok(log_file) = File::create("tooltip_group.log") {
        let _ = WriteLogger::init(LevelFilter::Trace, Config::default(), log_file);
    }

    let mut tips = Tooltips::new();
    tips.subscribe(|event| println!("  event: {event:?}"));

    let toolbar = TooltipConfig {
        open_delay: 500,
        close_delay: 100,
        group: TooltipGroup::from("toolbar"),
        ..TooltipConfig::default()
    };
    let buttons: Vec<_> = (0..3_u32)
        .map(|i| {
            let (id, _) = tips.insert(toolbar.clone());
            let x = f64::from(i) * 40.0;
            tips.set_geometry(
                id,
                Rect::new(x, 0.0, x + 32.0, 32.0),
                Rect::new(x, 40.0, x + 120.0, 70.0),
            );
            id
        })
        .collect();

    println!("hover the first button");
    tips.pointer_enter(buttons[0], 0);
    tips.advance(500);

    println!("move down toward its content");
    tips.pointer_leave(buttons[0], Some(Point::new(16.0, 32.0)), 600);
    tips.pointer_move(Point::new(18.0, 36.0), 620);
    tips.content_pointer_enter(buttons[0]);

    println!("tab to the third button");
    tips.content_pointer_leave(buttons[0], 700);
    tips.focus(buttons[2]);
    tips.advance(800);

    println!("escape");
    tips.handle_key(buttons[2], Key::Escape);
    println!("next deadline: {:?}", tips.next_deadline());
}
