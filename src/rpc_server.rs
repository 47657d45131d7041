//! Showcase browser RPC server: newline-delimited JSON over stdin/stdout.
//!
//! Request:      {"id":1, "method":"tabs.open", "params":{"id":"proj1"}}
//! Response:     {"id":1, "result":{...}} or {"id":1, "error":"..."}
//! Notification: {"event":"active_changed","id":"proj1"} after the response
//!               of the request that caused it.
//!
//! `SHOWCASE_CATALOG` names a JSON catalog file, `SHOWCASE_SETTINGS` a settings
//! file, `SHOWCASE_LOG` the log filter. Logs go to stderr.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use serde_json::{json, Value};
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

use showcase_browser::app::App;
use showcase_browser::rpc_handler::handle_method;
use showcase_browser::types::catalog::Catalog;

fn init_tracing() {
    let filter = EnvFilter::try_from_env("SHOWCASE_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn write_line(out: &mut impl Write, value: &Value) -> io::Result<()> {
    writeln!(out, "{}", value)?;
    out.flush()
}

fn main() -> ExitCode {
    init_tracing();

    let catalog = match std::env::var("SHOWCASE_CATALOG") {
        Ok(path) => match Catalog::load(&path) {
            Ok(catalog) => catalog,
            Err(e) => {
                error!(path = %path, error = %e, "failed to load catalog");
                return ExitCode::FAILURE;
            }
        },
        Err(_) => Catalog::default(),
    };

    let mut app = match App::new(std::env::var("SHOWCASE_SETTINGS").ok(), catalog) {
        Ok(app) => app,
        Err(e) => {
            error!(error = %e, "failed to initialize");
            return ExitCode::FAILURE;
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let ready = json!({"event": "ready", "version": env!("CARGO_PKG_VERSION")});
    if write_line(&mut out, &ready).is_err() {
        return ExitCode::FAILURE;
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<Value>(&line) {
            Ok(req) => {
                let id = req.get("id").cloned().unwrap_or(Value::Null);
                let method = req.get("method").and_then(|v| v.as_str()).unwrap_or("");
                let params = req.get("params").cloned().unwrap_or(json!({}));

                match handle_method(&mut app, method, &params) {
                    Ok(val) => json!({"id": id, "result": val}),
                    Err(err) => {
                        warn!(method, error = %err, "request failed");
                        json!({"id": id, "error": err})
                    }
                }
            }
            Err(e) => json!({"id": null, "error": format!("parse error: {}", e)}),
        };

        if write_line(&mut out, &response).is_err() {
            break;
        }

        for event in app.drain_events() {
            let Ok(value) = serde_json::to_value(&event) else {
                continue;
            };
            if write_line(&mut out, &value).is_err() {
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
