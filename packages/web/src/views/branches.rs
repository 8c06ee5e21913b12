use dioxus::prelude::*;

#[component]
pub fn Branches() -> Element {
    let lang = ui::use_lang()();

    rsx! {
        div { class: "panel",
            h2 { "data-i18n": "branches", {ui::t(lang, "branches")} }
            p { class: "hint", "data-i18n": "modal_title", {ui::t(lang, "modal_title")} }
            div { class: "status_row",
                span { class: "chip ok", "data-i18n": "sent", {ui::t(lang, "sent")} }
                span { class: "chip warn", "data-i18n": "not_sent", {ui::t(lang, "not_sent")} }
            }
        }
    }
}
