//! Todo Frontend Entry Point

mod app;
mod components;
mod console_logger;
mod context;
mod storage;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    console_logger::init(log::LevelFilter::Info);
    mount_to_body(App);
}
