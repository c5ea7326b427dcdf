//! Page components.
//!
//! The tool pages are self-contained widgets; the router only decides which
//! one is mounted.

use leptos::prelude::*;

use super::link::RouterLink;
use crate::app::RouterContext;
use crate::config::{APP_NAME, APP_TAGLINE};
use crate::models::ViewId;

stylance::import_crate_style!(css, "src/components/pages.module.css");

/// Mount the page for a view.
pub fn render_view(id: ViewId) -> AnyView {
    match id {
        ViewId::Home => view! { <Home /> }.into_any(),
        tool => view! { <ToolPage id=tool /> }.into_any(),
    }
}

/// Landing page listing every registered tool.
#[component]
pub fn Home() -> impl IntoView {
    let ctx = use_context::<RouterContext>().expect("RouterContext must be provided at root");

    let tools = ctx
        .links()
        .into_iter()
        .filter(|(_, id)| *id != ViewId::Home)
        .map(|(path, id)| {
            view! {
                <li class=css::card>
                    <RouterLink to=path>{id.title()}</RouterLink>
                    <p class=css::summary>{id.summary()}</p>
                </li>
            }
        })
        .collect_view();

    view! {
        <section class=css::page>
            <h1 class=css::title>{APP_NAME}</h1>
            <p class=css::lead>{APP_TAGLINE}</p>
            <ul class=css::cards>{tools}</ul>
        </section>
    }
}

#[component]
pub fn ToolPage(id: ViewId) -> impl IntoView {
    view! {
        <section class=css::page>
            <h1 class=css::title>{id.title()}</h1>
            <p class=css::lead>{id.summary()}</p>
        </section>
    }
}

/// Shown for any path with no registered route.
#[component]
pub fn NotFound(path: String) -> impl IntoView {
    view! {
        <section class=css::page>
            <h1 class=css::title>"Not found"</h1>
            <p class=css::lead>
                "Nothing lives at "
                <span class=css::path>{path}</span>
                "."
            </p>
            <RouterLink to="/">"Back to home"</RouterLink>
        </section>
    }
}
