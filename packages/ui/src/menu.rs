use dioxus::prelude::*;

use crate::icons::{ChevronIcon, MenuIcon};
use crate::{t, use_lang};

/// Keys that activate a menu trigger, matching a plain click.
pub fn is_activation_key(key: &Key) -> bool {
    match key {
        Key::Enter => true,
        Key::Character(c) => c == " ",
        _ => false,
    }
}

/// Admin dropdown in the top bar: `#adminToggle` flips the `open` class
/// on `#adminMenu`. The trigger is not a native button, so Enter/Space
/// are handled explicitly. A backdrop behind the panel closes it on any
/// outside click.
#[component]
pub fn AdminMenu() -> Element {
    let lang_sig = use_lang();
    let lang = lang_sig();
    let mut open = use_signal(|| false);

    rsx! {
        div { class: "admin_menu",
            div {
                id: "adminToggle",
                class: "nav-link admin_toggle",
                role: "button",
                tabindex: "0",
                "aria-haspopup": "true",
                "aria-expanded": "{open()}",
                onclick: move |_| {
                    let next = !open();
                    open.set(next);
                },
                onkeydown: move |evt| {
                    if is_activation_key(&evt.key()) {
                        evt.prevent_default();
                        let next = !open();
                        open.set(next);
                    }
                },
                span { "data-i18n": "admin", {t(lang, "admin")} }
                ChevronIcon {}
            }

            if open() {
                div { class: "menu_backdrop", onclick: move |_| open.set(false) }
            }

            div {
                id: "adminMenu",
                class: if open() { "dropdown open" } else { "dropdown" },
                // Account and sign-out are served outside this app.
                a { class: "dropdown_item", href: "/settings/",
                    span { "data-i18n": "account", {t(lang, "account")} }
                }
                a { class: "dropdown_item danger", href: "/logout/",
                    span { "data-i18n": "logout", {t(lang, "logout")} }
                }
            }
        }
    }
}

/// Collapsible main nav for narrow viewports: `#navToggle` flips the
/// `open` class on `#centerNav`. Clicking a link (or anywhere in the
/// panel) closes it, since client-side navigation keeps the shell
/// mounted.
#[component]
pub fn MobileNav(children: Element) -> Element {
    let lang_sig = use_lang();
    let lang = lang_sig();
    let mut open = use_signal(|| false);

    rsx! {
        button {
            id: "navToggle",
            class: "icon_btn nav_toggle",
            "aria-label": t(lang, "menu"),
            "aria-expanded": "{open()}",
            onclick: move |_| {
                let next = !open();
                open.set(next);
            },
            MenuIcon {}
        }

        if open() {
            div { class: "menu_backdrop", onclick: move |_| open.set(false) }
        }

        nav {
            id: "centerNav",
            class: if open() { "center_nav open" } else { "center_nav" },
            onclick: move |_| open.set(false),
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_and_space_activate() {
        assert!(is_activation_key(&Key::Enter));
        assert!(is_activation_key(&Key::Character(" ".to_string())));
    }

    #[test]
    fn other_keys_do_not() {
        assert!(!is_activation_key(&Key::Escape));
        assert!(!is_activation_key(&Key::Tab));
        assert!(!is_activation_key(&Key::Character("a".to_string())));
    }
}
