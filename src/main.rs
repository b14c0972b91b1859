//! Runs one request cycle against an in-memory session and prints the
//! flashed queue as JSON.
//!
//! Usage: `flashnote [CONFIG_PATH | --user-config]`. Without an argument the
//! built-in defaults are used and nothing is written to disk. A path or
//! `--user-config` loads that file, creating it with defaults when missing.

use std::ffi::OsString;

use flashnote_bridge::{FlashConfig, MemorySession};
use flashnote_core::FlashService;

fn main() -> anyhow::Result<()> {
    simple_logger::SimpleLogger::new()
        .with_colors(true)
        .with_local_timestamps()
        .init()?;

    let config = resolve_config(std::env::args_os().nth(1))?;
    let session_key = config.session_key.clone();

    let mut flash = FlashService::with_config(MemorySession::new(), config);
    flash.register_extension("alert", |flash, args| {
        let text = args
            .first()
            .and_then(serde_json::Value::as_str)
            .unwrap_or_default();
        flash.message(text).error().important();
        serde_json::Value::from(flash.messages().len())
    });

    flash.message("Profile updated").success();
    flash.overlay("Thank you for signing up");
    flash.call("alert", &[serde_json::Value::from("Payment method expired")])?;

    let session = flash.into_session();
    log::info!(
        "Session received {} write(s) under '{session_key}'",
        session.flash_count(&session_key)
    );
    let payload = session.get(&session_key).unwrap_or_default();
    println!("{}", serde_json::to_string_pretty(payload)?);

    Ok(())
}

fn resolve_config(arg: Option<OsString>) -> anyhow::Result<FlashConfig> {
    let config = match arg {
        None => FlashConfig::default(),
        Some(arg) if arg == "--user-config" => flashnote_core::config::load_config()?,
        Some(path) => flashnote_core::config::load_config_from(std::path::Path::new(&path))?,
    };
    Ok(config)
}
