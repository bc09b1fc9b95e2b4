//! Grocery List Frontend Entry Point

mod app;
mod components;
mod context;
mod download;
mod storage;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
