use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use async_trait::async_trait;
use dioxus::prelude::*;

/// Storage keys shared with the server-rendered pages. Do not rename.
pub const THEME_KEY: &str = "theme";
pub const LANG_KEY: &str = "lang";

/// Key-value storage behind the [`Preferences`] service.
///
/// Implementations are best-effort: a failed read is `None` and a failed
/// write is dropped silently. The UI runtime is single-threaded, so
/// backends don't need to be `Send`.
#[async_trait(?Send)]
pub trait PreferenceBackend {
    async fn get(&self, key: &str) -> Option<String>;
    async fn set(&self, key: &str, value: &str);
}

/// `localStorage` through the webview bridge (web + webviews).
struct BrowserStorage;

#[async_trait(?Send)]
impl PreferenceBackend for BrowserStorage {
    async fn get(&self, key: &str) -> Option<String> {
        let js = format!(
            r#"(function(){{
                try {{ return localStorage.getItem("{key}") || ""; }}
                catch(e) {{ return ""; }}
            }})()"#
        );
        let value = document::eval(&js).await.ok()?;
        let value = value.as_str()?.trim();
        if value.is_empty() {
            return None;
        }
        Some(value.to_string())
    }

    async fn set(&self, key: &str, value: &str) {
        let js = format!(
            r#"(function(){{ try {{ localStorage.setItem("{key}","{value}"); }} catch(e) {{}} return ""; }})()"#
        );
        let _ = document::eval(&js).await;
    }
}

/// In-memory store for tests and server-side rendering.
#[derive(Default)]
struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

#[async_trait(?Send)]
impl PreferenceBackend for MemoryStore {
    async fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    async fn set(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

/// Injectable preference service over an abstract storage backend.
///
/// Values are plain strings; callers normalize whatever comes back and
/// fall back to their own default when the stored value doesn't match an
/// expected variant.
#[derive(Clone)]
pub struct Preferences {
    backend: Rc<dyn PreferenceBackend>,
}

impl Preferences {
    /// Service over browser `localStorage`.
    pub fn browser() -> Self {
        Self {
            backend: Rc::new(BrowserStorage),
        }
    }

    /// Service over a process-local map, for tests and SSR.
    pub fn in_memory() -> Self {
        Self {
            backend: Rc::new(MemoryStore::default()),
        }
    }

    /// Service over a custom backend.
    pub fn with_backend(backend: Rc<dyn PreferenceBackend>) -> Self {
        Self { backend }
    }

    pub async fn get(&self, key: &str) -> Option<String> {
        self.backend.get(key).await
    }

    pub async fn set(&self, key: &str, value: &str) {
        self.backend.set(key, value).await;
    }
}

impl PartialEq for Preferences {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.backend, &other.backend)
    }
}

/// Provide a [`Preferences`] service to the component tree. Pass `store`
/// to swap in a non-browser backend.
#[component]
pub fn PreferencesProvider(store: Option<Preferences>, children: Element) -> Element {
    let prefs = store.unwrap_or_else(Preferences::browser);
    use_context_provider(|| prefs);

    rsx! { {children} }
}

pub fn use_preferences() -> Preferences {
    if let Some(prefs) = try_use_context::<Preferences>() {
        return prefs;
    }

    // Fallback for mis-ordered providers to avoid panics in production.
    eprintln!("startup: missing PreferencesProvider context, using browser storage");
    Preferences::browser()
}
