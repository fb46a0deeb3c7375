//! Astrogeo Client
//!
//! Yew WASM frontend for the geometric solids and solar system viewers.
//!
//! This crate is WASM-only. Use `trunk build` or `cargo check --target wasm32-unknown-unknown`.

#[cfg(not(target_arch = "wasm32"))]
compile_error!(
    "astrogeo-client only supports wasm32 target. Use: cargo check -p astrogeo-client --target wasm32-unknown-unknown"
);

mod app;
mod components;
mod hooks;
mod pages;
mod routes;
mod state;
mod util;

use app::App;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Layer};
use tracing_web::MakeWebConsoleWriter;

fn main() {
    console_error_panic_hook::set_once();

    let filter = EnvFilter::new("info,wgpu=error,naga=warn");

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new())
        .with_filter(filter);

    // No performance layer: Bevy emits hundreds of spans per frame.
    tracing_subscriber::registry().with(fmt_layer).init();

    yew::Renderer::<App>::new().render();
}
