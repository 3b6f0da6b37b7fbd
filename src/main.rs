#![allow(warnings)]
//! Place Card Maker Frontend Entry Point

mod app;
mod card;
mod commands;
mod components;
mod config;
mod context;
mod error;
mod models;
mod registry;
mod store;
mod task;
mod wizard;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    mount_to_body(App);
}
