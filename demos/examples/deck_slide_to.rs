// Copyright 2025 the Carddeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Programmatic navigation.
//!
//! Drives a deck through its position binding under each slide policy and
//! shows how the areas are rearranged. Uses deferred notification, flushing
//! once per simulated event-loop turn.
//!
//! Run:
//! - `RUST_LOG=carddeck_sync=debug cargo run -p carddeck_demos --example deck_slide_to`

use carddeck_sync::{CardDeck, DeckConfig, NotifyMode, SlidePolicy};
use tracing_subscriber::EnvFilter;

#[derive(Copy, Clone, Debug, PartialEq)]
enum Page {
    Home,
    Search,
    Library,
    Settings,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // The last card has no tag; it can be swiped to but not navigated to.
    let tags = vec![
        Some(Page::Home),
        Some(Page::Search),
        Some(Page::Library),
        Some(Page::Settings),
        None,
    ];

    for policy in [SlidePolicy::Reorganize, SlidePolicy::FlipOnly, SlidePolicy::Restack] {
        println!("== {policy:?} ==");
        let mut deck: CardDeck<Page> = CardDeck::new(DeckConfig {
            slide: policy,
            notify: NotifyMode::Deferred,
            ..DeckConfig::default()
        });
        deck.set_items(tags.len(), &tags);
        deck.tick(&tags);

        for target in [Page::Library, Page::Search, Page::Settings, Page::Home] {
            deck.set_position(Some(target), &tags);
            // Nothing is published until the host's next turn.
            deck.tick(&tags);
            let upper = deck.upper_indices().to_vec();
            let lower = deck.lower_indices().to_vec();
            println!(
                "  goto {:<8} upper {upper:?} lower {lower:?} frontmost {:?}",
                format!("{target:?}"),
                deck.frontmost_tag(),
            );
        }
    }
}
