use dioxus::prelude::*;

use crate::icons::{MoonIcon, SunIcon};
use crate::prefs::{use_preferences, Preferences, THEME_KEY};

const THEME_CSS: Asset = asset!("/assets/styling/theme.css");

/// Visual mode. Stylesheet rules key off the root `data-theme` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn code(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Exactly `"dark"` is dark; every other value is light.
    pub fn from_code(code: &str) -> Self {
        if code == "dark" {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Stylesheet for the themed shell.
#[component]
pub fn OpsTheme() -> Element {
    rsx! { document::Link { rel: "stylesheet", href: THEME_CSS } }
}

/// Provide `Signal<Theme>` to the component tree and apply the stored
/// preference (or `default_theme`) once after mount.
#[component]
pub fn ThemeProvider(#[props(default)] default_theme: Theme, children: Element) -> Element {
    let prefs = use_preferences();
    let theme = use_signal(|| default_theme);
    use_context_provider(|| theme);

    use_effect(move || {
        let prefs = prefs.clone();
        spawn(async move {
            let saved = prefs.get(THEME_KEY).await;
            let resolved = saved
                .as_deref()
                .map(Theme::from_code)
                .unwrap_or(default_theme);
            apply(theme, &prefs, resolved).await;
        });
    });

    rsx! { {children} }
}

pub fn use_theme() -> Signal<Theme> {
    if let Some(sig) = try_use_context::<Signal<Theme>>() {
        return sig;
    }

    // Fallback for SSR or mis-ordered providers to avoid panics in production.
    eprintln!("startup: missing ThemeProvider context, using local Theme::Light signal");
    use_signal(|| Theme::Light)
}

pub fn set_theme(theme: Theme) {
    let sig = use_theme();
    let prefs = use_preferences();
    spawn(async move {
        apply(sig, &prefs, theme).await;
    });
}

/// Single apply point: signal, persisted value, and root attribute move
/// together so they can never disagree.
async fn apply(mut sig: Signal<Theme>, prefs: &Preferences, theme: Theme) {
    sig.set(theme);
    prefs.set(THEME_KEY, theme.code()).await;
    crate::dom::set_root_attr("data-theme", theme.code()).await;
}

/// `#themeBtn`: flips between light and dark, swapping the sun/moon icon
/// inside `#themeIconHolder`.
#[component]
pub fn ThemeToggle() -> Element {
    let theme_sig = use_theme();
    let theme = theme_sig();

    rsx! {
        button {
            id: "themeBtn",
            class: "icon_btn",
            "aria-label": "Toggle theme",
            onclick: move |_| set_theme(theme.toggle()),
            span { id: "themeIconHolder", class: "icon_holder",
                match theme {
                    Theme::Dark => rsx! { MoonIcon {} },
                    Theme::Light => rsx! { SunIcon {} },
                }
            }
        }
    }
}
