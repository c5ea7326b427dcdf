mod app;
mod components;
mod config;
mod models;
mod utils;

use app::App;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();

    // A bad route table must never reach the screen.
    let router = app::build_router()
        .unwrap_or_else(|err| panic!("{}: {}", config::APP_NAME, err));

    web_sys::console::info_1(
        &format!(
            "{}: {} routes, {:?} history",
            config::APP_NAME,
            router.table().len(),
            router.mode().kind()
        )
        .into(),
    );

    let root = document()
        .get_element_by_id(config::MOUNT_ID)
        .expect("Failed to find #app element")
        .unchecked_into::<web_sys::HtmlElement>();

    mount_to(root, move || view! { <App router=router /> }).forget();
}
