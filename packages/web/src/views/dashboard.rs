use dioxus::prelude::*;

#[component]
pub fn Dashboard() -> Element {
    let lang = ui::use_lang()();

    rsx! {
        div { class: "panel",
            h2 { "data-i18n": "dash", {ui::t(lang, "dash")} }
            p { class: "hint", "data-i18n": "subtitle", {ui::t(lang, "subtitle")} }
            div { class: "cta_row",
                a { class: "btn primary", href: "/reports/table-1",
                    span { "data-i18n": "r1", {ui::t(lang, "r1")} }
                }
                a { class: "btn", href: "/reports/table-2",
                    span { "data-i18n": "r2", {ui::t(lang, "r2")} }
                }
                a { class: "btn", href: "/branches",
                    span { "data-i18n": "branches", {ui::t(lang, "branches")} }
                }
            }
        }
    }
}

#[component]
pub fn Home() -> Element {
    rsx! { Dashboard {} }
}
