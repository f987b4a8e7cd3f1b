#![allow(warnings)]
//! Campus Portal Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod error;
mod format;
mod models;
mod pages;
mod state;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;
use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_logger::init(LevelFilter::Info) {
        web_sys::console::warn_1(&format!("logger already installed: {}", e).into());
    }
    mount_to_body(App);
}
