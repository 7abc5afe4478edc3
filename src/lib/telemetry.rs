//! Browser logging. `tracing` events are formatted by `tracing-subscriber` and
//! handed to `tracing-web`, which routes each one to the console method for its
//! level; panics go through `console_error_panic_hook`.

use tracing::Level;
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*};
use tracing_web::MakeWebConsoleWriter;

/// Installs the console subscriber. `level` is a `tracing` level name; unknown
/// names fall back to `info`.
pub fn init(level: &str) {
    console_error_panic_hook::set_once();

    let level = level.parse::<Level>().unwrap_or(Level::INFO);
    let console = fmt::layer()
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new());

    let result = tracing_subscriber::registry()
        .with(LevelFilter::from_level(level))
        .with(console)
        .try_init();

    if let Err(err) = result {
        web_sys::console::warn_1(&format!("telemetry already initialized: {err}").into());
    }
}
