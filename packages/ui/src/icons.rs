//! Fixed inline icon fragments. The sun/moon pair is part of the page
//! contract: stylesheets target `.icon` inside `#themeIconHolder`.

use dioxus::prelude::*;

#[component]
pub fn SunIcon() -> Element {
    rsx! {
        svg { class: "icon", view_box: "0 0 24 24", fill: "none",
            path {
                d: "M12 18a6 6 0 1 0 0-12 6 6 0 0 0 0 12Z",
                stroke: "currentColor",
                stroke_width: "2",
            }
            path {
                d: "M12 2v2M12 20v2M4.22 4.22l1.42 1.42M18.36 18.36l1.42 1.42M2 12h2M20 12h2M4.22 19.78l1.42-1.42M18.36 5.64l1.42-1.42",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
            }
        }
    }
}

#[component]
pub fn MoonIcon() -> Element {
    rsx! {
        svg { class: "icon", view_box: "0 0 24 24", fill: "none",
            path {
                d: "M21 14.5A8.5 8.5 0 0 1 9.5 3a7 7 0 1 0 11.5 11.5Z",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linejoin: "round",
            }
        }
    }
}

#[component]
pub fn MenuIcon() -> Element {
    rsx! {
        svg { class: "icon", view_box: "0 0 24 24", fill: "none",
            path {
                d: "M4 7h16M4 12h16M4 17h16",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
            }
        }
    }
}

#[component]
pub fn ChevronIcon() -> Element {
    rsx! {
        svg { class: "icon icon_sm", view_box: "0 0 24 24", fill: "none",
            path {
                d: "M6 9l6 6 6-6",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
            }
        }
    }
}
