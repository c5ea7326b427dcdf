//! Browser address bar for the router.

use devflow_core::{Address, AddressBar};
use wasm_bindgen::JsValue;

use super::dom;

/// [`AddressBar`] over `window.location` and `window.history`.
///
/// Stateless: every call goes to the live browser objects, so copies of it
/// always agree. Outside a browser it reads as `/` and ignores writes.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserHistory;

impl AddressBar for BrowserHistory {
    fn address(&self) -> Address {
        let Some(location) = dom::location() else {
            return Address::parse("/");
        };

        Address {
            pathname: location.pathname().unwrap_or_else(|_| "/".to_string()),
            search: location.search().unwrap_or_default(),
            hash: location.hash().unwrap_or_default(),
        }
    }

    fn push(&mut self, url: &str) {
        if let Some(window) = dom::window()
            && let Ok(history) = window.history()
        {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(url));
        }
    }

    fn replace(&mut self, url: &str) {
        if let Some(window) = dom::window()
            && let Ok(history) = window.history()
        {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(url));
        }
    }

    fn go(&mut self, delta: isize) {
        if let Some(window) = dom::window()
            && let Ok(history) = window.history()
        {
            let _ = history.go_with_delta(delta as i32);
        }
    }
}
