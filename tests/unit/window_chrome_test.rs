//! Unit tests for the window chrome lifecycle and host delegation.

use std::cell::Cell;
use std::rc::Rc;

use rstest::rstest;

use showcase_browser::managers::window_chrome::{ChromeHandlers, WindowChrome};
use showcase_browser::types::chrome::{ChromeOutcome, WindowLifecycle};

fn chrome_in(lifecycle: WindowLifecycle) -> WindowChrome {
    let mut chrome = WindowChrome::new();
    match lifecycle {
        WindowLifecycle::Open => {}
        WindowLifecycle::Minimized => {
            chrome.minimize();
        }
        WindowLifecycle::Closed => {
            chrome.close();
        }
    }
    assert_eq!(chrome.lifecycle(), lifecycle);
    chrome
}

#[test]
fn test_starts_open_and_not_maximized() {
    let chrome = WindowChrome::new();
    assert_eq!(chrome.lifecycle(), WindowLifecycle::Open);
    assert!(!chrome.is_maximized());
}

#[rstest]
#[case(WindowLifecycle::Open, ChromeOutcome::Changed, WindowLifecycle::Minimized)]
#[case(WindowLifecycle::Minimized, ChromeOutcome::Unchanged, WindowLifecycle::Minimized)]
#[case(WindowLifecycle::Closed, ChromeOutcome::Unchanged, WindowLifecycle::Closed)]
fn test_minimize(
    #[case] from: WindowLifecycle,
    #[case] outcome: ChromeOutcome,
    #[case] to: WindowLifecycle,
) {
    let mut chrome = chrome_in(from);
    assert_eq!(chrome.minimize(), outcome);
    assert_eq!(chrome.lifecycle(), to);
}

#[rstest]
#[case(WindowLifecycle::Open, ChromeOutcome::Changed, WindowLifecycle::Closed)]
#[case(WindowLifecycle::Minimized, ChromeOutcome::Changed, WindowLifecycle::Closed)]
#[case(WindowLifecycle::Closed, ChromeOutcome::Unchanged, WindowLifecycle::Closed)]
fn test_close(
    #[case] from: WindowLifecycle,
    #[case] outcome: ChromeOutcome,
    #[case] to: WindowLifecycle,
) {
    let mut chrome = chrome_in(from);
    assert_eq!(chrome.close(), outcome);
    assert_eq!(chrome.lifecycle(), to);
}

#[rstest]
#[case(WindowLifecycle::Open, ChromeOutcome::Unchanged)]
#[case(WindowLifecycle::Minimized, ChromeOutcome::Changed)]
#[case(WindowLifecycle::Closed, ChromeOutcome::Changed)]
fn test_restore(#[case] from: WindowLifecycle, #[case] outcome: ChromeOutcome) {
    let mut chrome = chrome_in(from);
    assert_eq!(chrome.restore(), outcome);
    assert_eq!(chrome.lifecycle(), WindowLifecycle::Open);
}

#[test]
fn test_toggle_maximize_while_open() {
    let mut chrome = WindowChrome::new();
    assert_eq!(chrome.toggle_maximize(), ChromeOutcome::Changed);
    assert!(chrome.is_maximized());
    assert_eq!(chrome.toggle_maximize(), ChromeOutcome::Changed);
    assert!(!chrome.is_maximized());
}

#[rstest]
#[case(WindowLifecycle::Minimized)]
#[case(WindowLifecycle::Closed)]
fn test_toggle_maximize_ignored_unless_open(#[case] from: WindowLifecycle) {
    let mut chrome = chrome_in(from);
    assert_eq!(chrome.toggle_maximize(), ChromeOutcome::Unchanged);
    assert!(!chrome.is_maximized());
}

#[test]
fn test_maximized_survives_minimize_and_restore() {
    let mut chrome = WindowChrome::new();
    chrome.toggle_maximize();
    chrome.minimize();
    chrome.restore();
    let snapshot = chrome.snapshot();
    assert_eq!(snapshot.lifecycle, WindowLifecycle::Open);
    assert!(snapshot.maximized);
}

#[test]
fn test_host_handlers_take_over_controls() {
    let calls = Rc::new(Cell::new(0u32));
    let (c1, c2, c3) = (calls.clone(), calls.clone(), calls.clone());
    let mut chrome = WindowChrome::with_handlers(ChromeHandlers {
        close: Some(Box::new(move || c1.set(c1.get() + 1))),
        minimize: Some(Box::new(move || c2.set(c2.get() + 10))),
        maximize: Some(Box::new(move || c3.set(c3.get() + 100))),
    });

    assert_eq!(chrome.close(), ChromeOutcome::Delegated);
    assert_eq!(chrome.minimize(), ChromeOutcome::Delegated);
    assert_eq!(chrome.toggle_maximize(), ChromeOutcome::Delegated);

    assert_eq!(calls.get(), 111);
    assert_eq!(chrome.lifecycle(), WindowLifecycle::Open);
    assert!(!chrome.is_maximized());
}

#[test]
fn test_partial_handlers_only_delegate_their_control() {
    let closed = Rc::new(Cell::new(false));
    let flag = closed.clone();
    let mut chrome = WindowChrome::new();
    chrome.set_handlers(ChromeHandlers {
        close: Some(Box::new(move || flag.set(true))),
        ..ChromeHandlers::default()
    });

    assert_eq!(chrome.minimize(), ChromeOutcome::Changed);
    assert_eq!(chrome.close(), ChromeOutcome::Delegated);
    assert!(closed.get());
    assert_eq!(chrome.lifecycle(), WindowLifecycle::Minimized);
}
