//! Showcase browser — console walkthrough.
//!
//! Drives a browser controller through a typical visit to the project
//! showcase and prints the tab bar after each step.

use showcase_browser::services::browser_controller::{BrowserController, EventQueue};
use showcase_browser::types::catalog::Catalog;
use showcase_browser::types::settings::ShowcaseSettings;
use showcase_browser::types::tab::{ContentRef, Icon, Tab, TabsSnapshot};
use tracing_subscriber::EnvFilter;

fn demo_catalog() -> Catalog {
    Catalog::new(vec![
        Tab::content(
            "terminal",
            "Terminal Portfolio",
            "https://example.dev/terminal",
            Some(ContentRef::new("projects/terminal")),
        )
        .with_icon(Icon::Image("/icons/terminal.png".to_string())),
        Tab::content(
            "guestbook",
            "Guestbook",
            "https://example.dev/guestbook",
            Some(ContentRef::new("projects/guestbook")),
        ),
        Tab::content(
            "playlist",
            "Playlist",
            "https://example.dev/playlist",
            Some(ContentRef::new("projects/playlist")),
        )
        .with_icon(Icon::Renderable(ContentRef::new("icons/music"))),
    ])
}

fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

fn print_tabs(snapshot: &TabsSnapshot) {
    for (i, tab) in snapshot.tabs.iter().enumerate() {
        let marker = if snapshot.active_index == Some(i) { '*' } else { ' ' };
        println!("  {} [{}] {:<20} {:?} ({})", marker, i, tab.title, tab.kind, tab.id);
    }
    if snapshot.tabs.is_empty() {
        println!("  (no tabs)");
    }
    println!("  home screen visible: {}", snapshot.home_screen_visible);
    println!();
}

fn main() {
    let filter = EnvFilter::try_from_env("SHOWCASE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let catalog = demo_catalog();
    let events = EventQueue::new();
    let mut browser = BrowserController::from_settings(&ShowcaseSettings::default(), &catalog)
        .with_events(events.clone());

    section("Startup");
    print_tabs(&browser.snapshot());

    section("Open 'terminal' from the home tab (placeholder keeps its id)");
    browser.open_or_focus("terminal", &catalog);
    print_tabs(&browser.snapshot());

    section("Open 'guestbook' from a content tab");
    browser.open_or_focus("guestbook", &catalog);
    print_tabs(&browser.snapshot());

    section("New tab, then open 'playlist' into it");
    browser.new_tab();
    browser.open_or_focus("playlist", &catalog);
    print_tabs(&browser.snapshot());

    section("Focus 'guestbook' again, close the first tab");
    browser.open_or_focus("guestbook", &catalog);
    browser.close(0);
    print_tabs(&browser.snapshot());

    section("Host selects 'playlist' externally");
    let playlist_id = browser
        .tabs()
        .tabs()
        .iter()
        .find(|t| t.title == "Playlist")
        .map(|t| t.id.clone());
    browser.sync_active(playlist_id.as_deref());
    print_tabs(&browser.snapshot());

    section("Go home");
    browser.go_home();
    print_tabs(&browser.snapshot());

    section("Window chrome");
    println!("  maximize: {:?}", browser.toggle_maximize());
    println!("  minimize: {:?}", browser.minimize());
    println!("  maximize while minimized: {:?}", browser.toggle_maximize());
    println!("  restore:  {:?}", browser.restore());
    println!("  close:    {:?}", browser.close_window());
    println!("  state:    {:?}", browser.chrome_snapshot());
    println!();

    section("Notifications sent to the host");
    for event in events.drain() {
        println!("  {:?}", event);
    }
}
