//! Browser console logging

use tracing_subscriber::prelude::*;
use tracing_web::MakeWebConsoleWriter;

/// Route panics, `log` records and `tracing` events to the browser console
pub fn init() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new());

    if tracing_subscriber::registry().with(fmt_layer).try_init().is_err() {
        gloo::console::warn!("tracing subscriber already installed");
    }
}
