//! RPC method handler for the showcase browser stdio bridge.
//!
//! Kept apart from `rpc_server.rs` so it can be unit-tested. `handle_method`
//! dispatches a method call to the [`App`] and returns the JSON result.
//! Tab and window methods answer with the fresh snapshot so the host can
//! re-render from a single reply.

use serde_json::{json, Value};

use crate::app::App;
use crate::services::settings_engine::SettingsEngineTrait;
use crate::types::catalog::Catalog;
use crate::types::chrome::ChromeOutcome;
use crate::types::tab::Tab;

fn param_str<'a>(params: &'a Value, key: &str) -> Result<&'a str, String> {
    params
        .get(key)
        .and_then(|v| v.as_str())
        .ok_or_else(|| format!("missing {}", key))
}

fn param_index(params: &Value) -> Result<usize, String> {
    params
        .get("index")
        .and_then(|v| v.as_u64())
        .and_then(|i| usize::try_from(i).ok())
        .ok_or_else(|| "missing index".to_string())
}

fn param_bool(params: &Value, key: &str) -> Result<bool, String> {
    params
        .get(key)
        .and_then(|v| v.as_bool())
        .ok_or_else(|| format!("missing {}", key))
}

fn tabs_snapshot(app: &App) -> Result<Value, String> {
    serde_json::to_value(app.controller.snapshot()).map_err(|e| e.to_string())
}

fn chrome_reply(app: &App, outcome: ChromeOutcome) -> Result<Value, String> {
    let outcome = match outcome {
        ChromeOutcome::Changed => "changed",
        ChromeOutcome::Unchanged => "unchanged",
        ChromeOutcome::Delegated => "delegated",
    };
    let state = serde_json::to_value(app.controller.chrome_snapshot()).map_err(|e| e.to_string())?;
    Ok(json!({"outcome": outcome, "window": state}))
}

/// Dispatch a method call to the appropriate handler.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
pub fn handle_method(app: &mut App, method: &str, params: &Value) -> Result<Value, String> {
    match method {
        "ping" => Ok(json!({"pong": true})),

        // ─── Catalog ───
        "catalog.set" => {
            let tabs = params.get("tabs").cloned().ok_or("missing tabs")?;
            let catalog = Catalog::from_json(&tabs.to_string()).map_err(|e| e.to_string())?;
            app.set_catalog(catalog);
            Ok(json!({"ok": true, "count": app.catalog.len()}))
        }
        "catalog.list" => {
            let tabs: Vec<&Tab> = app.catalog.iter().collect();
            serde_json::to_value(tabs).map_err(|e| e.to_string())
        }

        // ─── Tabs ───
        "tabs.open" => {
            let id = param_str(params, "id")?;
            app.open(id);
            tabs_snapshot(app)
        }
        "tabs.activate" => {
            let index = param_index(params)?;
            app.controller.activate(index);
            tabs_snapshot(app)
        }
        "tabs.close" => {
            let index = param_index(params)?;
            app.controller.close(index);
            tabs_snapshot(app)
        }
        "tabs.close_others" => {
            let index = param_index(params)?;
            app.controller.close_other_tabs(index);
            tabs_snapshot(app)
        }
        "tabs.new" => {
            app.controller.new_tab();
            tabs_snapshot(app)
        }
        "tabs.home" => {
            app.controller.go_home();
            tabs_snapshot(app)
        }
        "tabs.sync" => {
            let desired = params.get("id").and_then(|v| v.as_str());
            app.controller.sync_active(desired);
            tabs_snapshot(app)
        }
        "tabs.pin" => {
            let index = param_index(params)?;
            app.controller.toggle_pinned(index);
            tabs_snapshot(app)
        }
        "tabs.favorite" => {
            let index = param_index(params)?;
            app.controller.toggle_favorited(index);
            tabs_snapshot(app)
        }
        "tabs.unsaved" => {
            let index = param_index(params)?;
            let unsaved = param_bool(params, "unsaved")?;
            app.controller.set_unsaved_changes(index, unsaved);
            tabs_snapshot(app)
        }
        "tabs.disable" => {
            let index = param_index(params)?;
            let disabled = param_bool(params, "disabled")?;
            app.controller.set_disabled(index, disabled);
            tabs_snapshot(app)
        }
        "tabs.snapshot" => tabs_snapshot(app),

        // ─── Window chrome ───
        "window.minimize" => {
            let outcome = app.controller.minimize();
            chrome_reply(app, outcome)
        }
        "window.close" => {
            let outcome = app.controller.close_window();
            chrome_reply(app, outcome)
        }
        "window.restore" => {
            let outcome = app.controller.restore();
            chrome_reply(app, outcome)
        }
        "window.maximize" => {
            let outcome = app.controller.toggle_maximize();
            chrome_reply(app, outcome)
        }
        "window.snapshot" => {
            serde_json::to_value(app.controller.chrome_snapshot()).map_err(|e| e.to_string())
        }

        // ─── Settings ───
        "settings.get" => {
            serde_json::to_value(app.settings_engine.get_settings()).map_err(|e| e.to_string())
        }
        "settings.set" => {
            let key = param_str(params, "key")?;
            let value = params.get("value").cloned().ok_or("missing value")?;
            app.settings_engine
                .set_value(key, value)
                .map_err(|e| e.to_string())?;
            app.apply_settings();
            Ok(json!({"ok": true}))
        }
        "settings.reset" => {
            app.settings_engine.reset().map_err(|e| e.to_string())?;
            app.apply_settings();
            Ok(json!({"ok": true}))
        }

        _ => Err(format!("unknown method: {}", method)),
    }
}
