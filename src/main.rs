// The state machines compile on every target so their tests run on the host;
// only the wasm build wires them to the page.
#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

mod carousel;
mod config;
mod contact;
mod content;
mod effects;
mod error;
mod events;
mod motion;
mod portfolio;
mod telemetry;
mod theme;

#[cfg(target_arch = "wasm32")]
mod frontend;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("This project is frontend-only. Run `trunk serve` or `trunk build --release`.");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}
