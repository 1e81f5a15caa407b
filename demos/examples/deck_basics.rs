// Copyright 2025 the Carddeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deck basics.
//!
//! Builds a three-card deck, flings the front card into the upper area, then
//! drags it back down slowly enough that position decides.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p carddeck_demos --example deck_basics`

use carddeck_drag::{DragEvent, Viewport};
use carddeck_sync::CardDeck;
use kurbo::{Point, Vec2};
use tracing_subscriber::EnvFilter;

fn print_areas(label: &str, deck: &mut CardDeck<&str>) {
    println!("== {label} ==");
    println!("  upper: {:?}", deck.upper_indices());
    println!("  lower: {:?}", deck.lower_indices());
    println!("  frontmost: {:?}", deck.frontmost_tag());
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let tags = vec![Some("mercury"), Some("venus"), Some("earth")];
    let viewport = Viewport::from_height(844.0, 47.0, 34.0);
    let mut deck: CardDeck<&str> = CardDeck::default();
    deck.subscribe(|tag| println!("  -> frontmost tag is now {tag:?}"));

    deck.set_items(tags.len(), &tags);
    print_areas("initial", &mut deck);

    // Quick upward flick: momentum alone moves the card.
    let start = Point::new(195.0, 600.0);
    deck.handle_drag(&DragEvent::changed(start, Vec2::new(0.0, -24.0)), &viewport, &tags);
    let end = DragEvent::ended(start, Vec2::new(0.0, -60.0), Vec2::new(0.0, -260.0));
    if let Some(r) = deck.handle_drag(&end, &viewport, &tags) {
        println!(
            "card {} {:?} -> {:?} (velocity {:.0}, settle {:?})",
            r.index, r.from, r.to, r.velocity, r.duration
        );
    }
    print_areas("after fling", &mut deck);

    // Slow pull down past the midline: the upper card comes back.
    let start = Point::new(195.0, 120.0);
    for dy in [20.0, 180.0, 420.0, 520.0] {
        deck.handle_drag(&DragEvent::changed(start, Vec2::new(0.0, dy)), &viewport, &tags);
        println!("  dragging, offset {:?}", deck.state().offset(0));
    }
    let end = DragEvent::ended(start, Vec2::new(0.0, 540.0), Vec2::new(0.0, 560.0));
    if let Some(r) = deck.handle_drag(&end, &viewport, &tags) {
        println!(
            "card {} {:?} -> {:?} (velocity {:.0}, settle {:?})",
            r.index, r.from, r.to, r.velocity, r.duration
        );
    }
    print_areas("after pull", &mut deck);
}
