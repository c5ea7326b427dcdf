//! Links that navigate through the router.

use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::app::RouterContext;

stylance::import_crate_style!(css, "src/components/link.module.css");

/// Anchor to a logical route path.
///
/// `href` is the mode-correct visible address, so the link still works when
/// opened in a new tab or copied. A plain left click is intercepted and
/// handled by the router without a page load.
#[component]
pub fn RouterLink(#[prop(into)] to: String, children: Children) -> impl IntoView {
    let ctx = use_context::<RouterContext>().expect("RouterContext must be provided at root");

    let href = ctx.href(&to);
    let target = to.clone();
    let is_active = Signal::derive(move || ctx.is_active(&target));

    let on_click = move |ev: MouseEvent| {
        if !is_plain_click(&ev) {
            return;
        }
        ev.prevent_default();
        ctx.navigate(&to);
    };

    view! {
        <a
            href=href
            class=move || {
                if is_active.get() {
                    format!("{} {}", css::link, css::active)
                } else {
                    css::link.to_string()
                }
            }
            aria-current=move || is_active.get().then_some("page")
            on:click=on_click
        >
            {children()}
        </a>
    }
}

/// Unmodified primary-button click not already handled elsewhere.
fn is_plain_click(ev: &MouseEvent) -> bool {
    !ev.default_prevented()
        && ev.button() == 0
        && !(ev.meta_key() || ev.ctrl_key() || ev.shift_key() || ev.alt_key())
}
