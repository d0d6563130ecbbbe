//! Browser location helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes the csr-only `window.location`/`history` glue so session and
//! handoff logic can stay testable. Off the browser every read is `None` and
//! every write is a no-op.

/// `window.location.origin`, e.g. `https://aura.example`.
pub fn current_origin() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        web_sys::window()?.location().origin().ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// `window.location.pathname`, e.g. `/auth/callback`.
pub fn current_path() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        web_sys::window()?.location().pathname().ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// `window.location.hash`, including the leading `#` when present.
pub fn current_fragment() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        web_sys::window()?.location().hash().ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Full-page navigation to an external URL.
pub fn redirect_to(url: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.location().set_href(url) {
                log::error!("redirect to {url} failed: {err:?}");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = url;
    }
}

/// Rewrite the visible URL without its fragment, replacing the history entry.
pub fn clear_fragment() {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let location = window.location();
        let (Ok(path), Ok(search)) = (location.pathname(), location.search()) else {
            return;
        };
        let Ok(history) = window.history() else {
            return;
        };
        let target = format!("{path}{search}");
        if let Err(err) = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&target)) {
            log::warn!("could not clear url fragment: {err:?}");
        }
    }
}

/// The live browser URL as seen by the authentication handoff.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserLocation;

impl crate::state::handoff::HandoffLocation for BrowserLocation {
    fn fragment(&self) -> String {
        current_fragment().unwrap_or_default()
    }

    fn clear_fragment(&self) {
        clear_fragment();
    }
}
