//! Application router component.
//!
//! Renders the page for the Active Route and keeps it in step with the
//! address bar.
//!
//! # Architecture
//!
//! - **Address bar is the source of truth**: the Active Route is always
//!   `resolve(current_path())`
//! - **Navigation bar never re-renders on navigation**: only `<main>` swaps
//! - **Unmatched paths render the not-found page**, never a blank screen
//! - **hashchange / popstate events**: browser back/forward buttons work
//!   automatically in either history mode

use devflow_core::ActiveRoute;
use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use super::link::RouterLink;
use super::pages::{render_view, NotFound};
use crate::app::RouterContext;
use crate::config::{page_title, APP_NAME};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/router.module.css");

// ============================================================================
// Main Router
// ============================================================================

/// Main application router.
#[component]
pub fn AppRouter() -> impl IntoView {
    let ctx = use_context::<RouterContext>().expect("RouterContext must be provided at root");

    // Listen for history traversal (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            ctx.sync();
        }) as Box<dyn Fn()>);

        if let Some(window) = dom::window() {
            let _ = window.add_event_listener_with_callback(
                ctx.change_event(),
                closure.as_ref().unchecked_ref(),
            );
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    Effect::new(move || {
        let title = match ctx.active.get() {
            ActiveRoute::Matched(route) => route.view().title(),
            ActiveRoute::Unmatched { .. } => "Not found",
        };
        dom::set_title(&page_title(title));
    });

    view! {
        <div class=css::layout>
            <Nav />
            <main class=css::content>
                {move || match ctx.active.get() {
                    ActiveRoute::Matched(route) => render_view(*route.view()),
                    ActiveRoute::Unmatched { path } => view! { <NotFound path=path /> }.into_any(),
                }}
            </main>
        </div>
    }
}

// ============================================================================
// Navigation Bar
// ============================================================================

/// One link per registered route.
#[component]
fn Nav() -> impl IntoView {
    let ctx = use_context::<RouterContext>().expect("RouterContext must be provided at root");

    let links = ctx
        .links()
        .into_iter()
        .map(|(path, id)| view! { <RouterLink to=path>{id.title()}</RouterLink> })
        .collect_view();

    view! {
        <nav class=css::nav>
            <span class=css::brand>{APP_NAME}</span>
            {links}
        </nav>
    }
}
