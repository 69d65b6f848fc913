#![allow(warnings)]
//! Portfolio Admin Dashboard Entry Point

mod actions;
mod api;
mod app;
mod components;
mod context;
mod markdown;
mod models;
mod projection;
mod query;
mod reorder;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
