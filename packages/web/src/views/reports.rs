use dioxus::prelude::*;

/// Daily report list. The rows come from the reporting backend, which is
/// served outside this app; the shell renders the table structure and
/// its empty state.
#[component]
pub fn ReportOne() -> Element {
    let lang = ui::use_lang()();

    rsx! {
        div { class: "panel",
            h2 { "data-i18n": "t1_title", {ui::t(lang, "t1_title")} }
            p { class: "hint", "data-i18n": "t1_help", {ui::t(lang, "t1_help")} }
            table { class: "report_table",
                thead {
                    tr {
                        th { "data-i18n": "col_no", {ui::t(lang, "col_no")} }
                        th { "data-i18n": "col_date", {ui::t(lang, "col_date")} }
                        th { "data-i18n": "col_status", {ui::t(lang, "col_status")} }
                        th { "data-i18n": "col_last", {ui::t(lang, "col_last")} }
                        th { "data-i18n": "col_action", {ui::t(lang, "col_action")} }
                    }
                }
                tbody {
                    tr {
                        td { colspan: "5", class: "empty",
                            span { "data-i18n": "empty", {ui::t(lang, "empty")} }
                        }
                    }
                }
            }
            div { class: "pager",
                button { class: "btn", disabled: true,
                    span { "data-i18n": "prev", {ui::t(lang, "prev")} }
                }
                span { class: "hint",
                    span { "data-i18n": "page", {ui::t(lang, "page")} }
                    " 1"
                }
                button { class: "btn", disabled: true,
                    span { "data-i18n": "next", {ui::t(lang, "next")} }
                }
            }
        }
    }
}

#[component]
pub fn ReportTwo() -> Element {
    let lang = ui::use_lang()();

    rsx! {
        div { class: "panel",
            h2 { "data-i18n": "r2", {ui::t(lang, "r2")} }
            table { class: "report_table",
                thead {
                    tr {
                        th { "data-i18n": "col_no", {ui::t(lang, "col_no")} }
                        th { "data-i18n": "col_date", {ui::t(lang, "col_date")} }
                        th { "data-i18n": "col_status", {ui::t(lang, "col_status")} }
                        th { "data-i18n": "col_action", {ui::t(lang, "col_action")} }
                    }
                }
                tbody {
                    tr {
                        td { colspan: "4", class: "empty",
                            span { "data-i18n": "none_sent", {ui::t(lang, "none_sent")} }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Quarterly() -> Element {
    let lang = ui::use_lang()();

    rsx! {
        div { class: "panel",
            h2 { "data-i18n": "q", {ui::t(lang, "q")} }
            div { class: "stat_row",
                div { class: "stat",
                    span { class: "stat_label", "data-i18n": "year", {ui::t(lang, "year")} }
                    span { class: "stat_value", "—" }
                }
                div { class: "stat",
                    span { class: "stat_label", "data-i18n": "month", {ui::t(lang, "month")} }
                    span { class: "stat_value", "—" }
                }
                div { class: "stat",
                    span { class: "stat_label", "data-i18n": "total", {ui::t(lang, "total")} }
                    span { class: "stat_value", "0" }
                }
            }
        }
    }
}
