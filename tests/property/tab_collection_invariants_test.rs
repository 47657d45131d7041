//! Property-based tests for the TabCollection store.
//!
//! For any sequence of store operations the collection must keep distinct
//! ids, a valid active pointer that is absent exactly when empty, at most
//! one home tab, and a visible home screen whenever no content is active.

use std::collections::HashSet;

use proptest::prelude::*;

use showcase_browser::managers::tab_collection::TabCollection;
use showcase_browser::types::tab::{Tab, TabKind};

/// Operations that can be performed on the store.
#[derive(Debug, Clone)]
enum StoreOp {
    AddContent(u8),
    AddPlaceholder(TabKind),
    Remove(usize),
    SetActive(usize),
    SetHomeScreen(bool),
    Transform(usize, TabKind, u8),
}

fn arb_kind() -> impl Strategy<Value = TabKind> {
    prop_oneof![
        Just(TabKind::Content),
        Just(TabKind::Home),
        Just(TabKind::New),
    ]
}

fn arb_placeholder_kind() -> impl Strategy<Value = TabKind> {
    prop_oneof![Just(TabKind::Home), Just(TabKind::New)]
}

fn arb_store_ops() -> impl Strategy<Value = Vec<StoreOp>> {
    prop::collection::vec(
        prop_oneof![
            3 => (0..6u8).prop_map(StoreOp::AddContent),
            2 => arb_placeholder_kind().prop_map(StoreOp::AddPlaceholder),
            2 => (0..8usize).prop_map(StoreOp::Remove),
            2 => (0..8usize).prop_map(StoreOp::SetActive),
            1 => any::<bool>().prop_map(StoreOp::SetHomeScreen),
            2 => (0..8usize, arb_kind(), 0..6u8)
                .prop_map(|(i, k, c)| StoreOp::Transform(i, k, c)),
        ],
        1..60,
    )
}

fn content(n: u8) -> Tab {
    Tab::content(format!("c{}", n), format!("Project {}", n), "https://example.dev", None)
}

fn tab_of_kind(kind: TabKind, id: String) -> Tab {
    Tab {
        kind,
        ..Tab::content(id, "placeholder", "about:blank", None)
    }
}

fn apply(store: &mut TabCollection, op: &StoreOp, serial: &mut u32) {
    match op {
        StoreOp::AddContent(n) => store.add_tab(content(*n)),
        StoreOp::AddPlaceholder(kind) => {
            *serial += 1;
            store.add_tab(tab_of_kind(*kind, format!("p{}", serial)));
        }
        StoreOp::Remove(i) => {
            store.remove_tab(*i);
        }
        StoreOp::SetActive(i) => {
            store.set_active(*i);
        }
        StoreOp::SetHomeScreen(visible) => store.set_home_screen(*visible),
        StoreOp::Transform(i, kind, n) => {
            *serial += 1;
            let data = match kind {
                TabKind::Content => content(*n),
                _ => tab_of_kind(*kind, format!("p{}", serial)),
            };
            store.transform(*i, data);
        }
    }
}

fn check_invariants(store: &TabCollection) -> Result<(), TestCaseError> {
    let ids: HashSet<&str> = store.tabs().iter().map(|t| t.id.as_str()).collect();
    prop_assert_eq!(ids.len(), store.len(), "ids must be distinct");

    match store.active_index() {
        None => prop_assert!(store.is_empty(), "no active tab but collection not empty"),
        Some(i) => prop_assert!(i < store.len(), "active index {} out of range", i),
    }

    let homes = store
        .tabs()
        .iter()
        .filter(|t| t.kind == TabKind::Home)
        .count();
    prop_assert!(homes <= 1, "{} home tabs", homes);

    let needs_home_screen = store.active_tab().map_or(true, |t| t.is_placeholder());
    if needs_home_screen {
        prop_assert!(store.home_screen_visible(), "home screen hidden");
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn invariants_hold_after_every_operation(ops in arb_store_ops()) {
        let mut store = TabCollection::new();
        let mut serial = 0;
        check_invariants(&store)?;
        for op in &ops {
            apply(&mut store, op, &mut serial);
            check_invariants(&store)?;
        }
    }

    #[test]
    fn set_active_is_idempotent(ops in arb_store_ops(), index in 0..8usize) {
        let mut store = TabCollection::new();
        let mut serial = 0;
        for op in &ops {
            apply(&mut store, op, &mut serial);
        }

        store.set_active(index);
        let once = store.snapshot();
        store.set_active(index);
        prop_assert_eq!(store.snapshot(), once);
    }

    #[test]
    fn adding_same_id_twice_keeps_length(ops in arb_store_ops(), n in 0..6u8) {
        let mut store = TabCollection::new();
        let mut serial = 0;
        for op in &ops {
            apply(&mut store, op, &mut serial);
        }

        store.add_tab(content(n));
        let len = store.len();
        store.add_tab(content(n));
        prop_assert_eq!(store.len(), len);
        let expected = format!("c{}", n);
        prop_assert_eq!(store.active_id(), Some(expected.as_str()));
    }

    #[test]
    fn remove_shrinks_by_one_or_is_noop(ops in arb_store_ops(), index in 0..10usize) {
        let mut store = TabCollection::new();
        let mut serial = 0;
        for op in &ops {
            apply(&mut store, op, &mut serial);
        }

        let before = store.snapshot();
        let removed = store.remove_tab(index);
        if index < before.tabs.len() {
            prop_assert!(removed.is_some());
            prop_assert_eq!(store.len(), before.tabs.len() - 1);
        } else {
            prop_assert!(removed.is_none());
            prop_assert_eq!(store.snapshot(), before);
        }
    }
}
