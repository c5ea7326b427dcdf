//! Root application module.
//!
//! Contains the main App component, the [`RouterContext`] it provides, and
//! router construction from the embedded route configuration.

use devflow_core::{ActiveRoute, AddressBar, ConfigError, Router};
use leptos::prelude::*;

use crate::components::AppRouter;
use crate::config::ROUTES_TOML;
use crate::models::ViewId;
use crate::utils::BrowserHistory;

stylance::import_crate_style!(css, "src/app.module.css");

/// Router over the real browser address bar.
pub type BrowserRouter = Router<ViewId, BrowserHistory>;

/// Build the router from `config/routes.toml`.
///
/// Fails on any duplicate or malformed route; the caller must not start the
/// app in that case.
pub fn build_router() -> Result<BrowserRouter, ConfigError> {
    devflow_core::load_router(ROUTES_TOML, BrowserHistory)
}

// ============================================================================
// RouterContext
// ============================================================================

/// Router access for the component tree.
///
/// Provided once by [`App`] and read with `use_context::<RouterContext>()`.
/// The router itself is stored non-reactively; `active` mirrors its Active
/// Route so views re-render when it changes.
///
/// Generic over the address bar so it can run over
/// [`MemoryHistory`](devflow_core::MemoryHistory) outside a browser; the app
/// uses the [`BrowserHistory`] default.
///
/// # Note
///
/// This struct is `Copy` because both fields are arena handles.
pub struct RouterContext<A = BrowserHistory> {
    router: StoredValue<Router<ViewId, A>>,
    /// Currently rendered route.
    pub active: RwSignal<ActiveRoute<ViewId>>,
}

impl<A> Clone for RouterContext<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A> Copy for RouterContext<A> {}

impl<A> RouterContext<A>
where
    A: AddressBar + Send + Sync + 'static,
{
    pub fn new(router: Router<ViewId, A>) -> Self {
        let active = RwSignal::new(router.active().clone());
        Self {
            router: StoredValue::new(router),
            active,
        }
    }

    /// Push `path` to the address bar and render its route.
    ///
    /// Returns whether the rendered route changed.
    pub fn navigate(&self, path: &str) -> bool {
        self.router.update_value(|router| {
            router.navigate(path);
        });
        self.publish()
    }

    /// Pick up an address change made by the browser (back/forward).
    ///
    /// Returns whether the rendered route changed.
    pub fn sync(&self) -> bool {
        self.router.update_value(|router| {
            router.sync();
        });
        self.publish()
    }

    /// Link target for a logical path.
    pub fn href(&self, path: &str) -> String {
        self.router.with_value(|router| router.href(path))
    }

    /// Whether `path` is the route being rendered. Tracks `active`.
    pub fn is_active(&self, path: &str) -> bool {
        self.active.track();
        self.router.with_value(|router| router.is_active(path))
    }

    /// DOM event that signals history traversal in the configured mode.
    pub fn change_event(&self) -> &'static str {
        self.router.with_value(|router| router.mode().change_event())
    }

    /// `(path, view)` of every route, in registration order.
    pub fn links(&self) -> Vec<(String, ViewId)> {
        self.router.with_value(|router| {
            router
                .routes()
                .map(|route| (route.path().to_string(), *route.view()))
                .collect()
        })
    }

    fn publish(&self) -> bool {
        let next = self.router.with_value(|router| router.active().clone());
        if self.active.with_untracked(|current| *current == next) {
            return false;
        }

        #[cfg(target_arch = "wasm32")]
        if let ActiveRoute::Unmatched { path } = &next {
            web_sys::console::warn_1(&format!("no route matches {}", path).into());
        }
        self.active.set(next);
        true
    }
}

// ============================================================================
// App
// ============================================================================

/// Root application component with error boundary.
///
/// This component:
/// - Provides the [`RouterContext`] built in `main`
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the [`AppRouter`]
#[component]
pub fn App(router: BrowserRouter) -> impl IntoView {
    provide_context(RouterContext::new(router));

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div class=css::fallback>
                    <h1 class=css::fallbackTitle>"Something went wrong"</h1>
                    <p class=css::fallbackText>
                        "An unexpected error occurred. Please try reloading the page."
                    </p>
                    <ul class=css::fallbackErrors>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        class=css::fallbackButton
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <AppRouter />
        </ErrorBoundary>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use devflow_core::MemoryHistory;

    fn context(start: &str) -> RouterContext<MemoryHistory> {
        let router = devflow_core::load_router(ROUTES_TOML, MemoryHistory::new(start))
            .expect("embedded route table is valid");
        RouterContext::new(router)
    }

    fn active_view(ctx: &RouterContext<MemoryHistory>) -> Option<ViewId> {
        ctx.active
            .with_untracked(|active| active.route().map(|route| *route.view()))
    }

    #[test]
    fn test_navigate_publishes_only_changes() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = context("/#/");
            assert_eq!(active_view(&ctx), Some(ViewId::Home));

            assert!(ctx.navigate("/mirror"));
            assert_eq!(active_view(&ctx), Some(ViewId::Mirror));
            assert!(!ctx.navigate("/mirror"));
            assert!(ctx.is_active("/mirror"));
            assert!(!ctx.is_active("/MIRROR"));

            assert!(ctx.navigate("/nope"));
            assert_eq!(
                ctx.active.get_untracked(),
                ActiveRoute::Unmatched {
                    path: "/nope".to_string()
                }
            );
            assert!(!ctx.is_active("/mirror"));
        });
    }

    #[test]
    fn test_sync_follows_history_traversal() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = context("/dev-flow-kit/#/");
            ctx.navigate("/cursor-flow");
            ctx.navigate("/line-remover");

            ctx.router.update_value(|router| router.back());
            assert!(ctx.sync());
            assert_eq!(active_view(&ctx), Some(ViewId::CursorFlow));
            assert!(!ctx.sync());

            let url = ctx
                .router
                .with_value(|router| router.address_bar().address().to_url());
            assert_eq!(url, "/dev-flow-kit/#/cursor-flow");
        });
    }

    #[test]
    fn test_context_reads() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = context("/");
            assert_eq!(ctx.href("/json-cleaner"), "#/json-cleaner");
            assert_eq!(ctx.change_event(), "hashchange");

            let views: Vec<_> = ctx.links().into_iter().map(|(_, view)| view).collect();
            assert_eq!(views, ViewId::ALL);
        });
    }
}
