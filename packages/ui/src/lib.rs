//! This crate contains all shared UI for the workspace.

mod dom;

mod prefs;
pub use prefs::{use_preferences, PreferenceBackend, Preferences, PreferencesProvider, LANG_KEY, THEME_KEY};

mod theme;
pub use theme::{set_theme, use_theme, OpsTheme, Theme, ThemeProvider, ThemeToggle};

mod icons;
pub use icons::{ChevronIcon, MenuIcon, MoonIcon, SunIcon};

mod i18n;
pub use i18n::{set_lang, t, use_lang, Dictionary, Entry, I18nProvider, Lang, LangToggle};

mod menu;
pub use menu::{is_activation_key, AdminMenu, MobileNav};

mod nav;
pub use nav::{is_active, NavLink};
