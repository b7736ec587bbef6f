// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drive a file-browser tree with a scripted key sequence.
//!
//! Each step prints the visible rows with focus (`>`), selection (`*`) and
//! expansion markers. Engine logs go to `tree_keyboard.log`.
//!
//! Run:
//! - `cargo run -p understory_demos --example tree_keyboard`

use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};
use understory_kbd::Key;
use understory_tree_view::{ItemProps, TreeView, TreeViewConfig};

fn main() {
    if let Ok(log_file) = File::create("tree_keyboard.log") {
        let _ = WriteLogger::init(LevelFilter::Trace, Config::default(), log_file);
    }

    let mut tree = TreeView::new(TreeViewConfig {
        multiple: true,
        expanded: vec!["src"],
        ..TreeViewConfig::default()
    });
    let items = [
        ("Cargo.toml", ItemProps::leaf("Cargo.toml")),
        ("src", ItemProps::group("src")),
        ("src/lib.rs", ItemProps::leaf("lib.rs").in_group("src")),
        ("src/view", ItemProps::group("view").in_group("src")),
        ("src/view/keys.rs", ItemProps::leaf("keys.rs").in_group("src/view")),
        ("src/view/mod.rs", ItemProps::leaf("mod.rs").in_group("src/view")),
        ("tests", ItemProps::group("tests")),
        ("tests/nav.rs", ItemProps::leaf("nav.rs").in_group("tests")),
        ("README.md", ItemProps::leaf("README.md")),
    ];
    for (id, props) in items {
        if let Err(err) = tree.register(id, props) {
            eprintln!("{err}");
        }
    }

    tree.subscribe_first_selected(|first| println!("  first selected: {first:?}"));

    tree.focus("Cargo.toml");
    print_tree(&tree);

    let script = [
        "ArrowDown",
        "ArrowDown",
        "ArrowDown",
        "ArrowRight",
        "ArrowRight",
        " ",
        "ArrowLeft",
        "ArrowLeft",
        "End",
        "t",
        "Enter",
        "Home",
    ];
    let mut now = 0_u64;
    for name in script {
        now += 250;
        let outcome = tree.handle_key(Key::from_name(name), now);
        println!("{name:?} -> {:?}", outcome.action);
        print_tree(&tree);
    }
}

fn print_tree(tree: &TreeView<&'static str>) {
    let registry = tree.registry();
    for id in tree.visible_order().iter() {
        let level = registry.level_of(id).unwrap_or(1);
        let focus = if tree.focused() == Some(id) { '>' } else { ' ' };
        let selected = if tree.is_selected(id) { '*' } else { ' ' };
        let marker = match (registry.is_group(id), tree.is_expanded(id)) {
            (true, true) => "v ",
            (true, false) => "> ",
            (false, _) => "  ",
        };
        let label = registry.label_of(id).unwrap_or_default();
        println!(
            "{focus}{selected} {}{marker}{label}",
            "  ".repeat(level - 1)
        );
    }
    println!();
}
