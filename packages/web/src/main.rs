use dioxus::prelude::*;
use std::env;

use views::{Branches, Dashboard, Home, Quarterly, ReportOne, ReportTwo};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DashNavbar)]
    #[route("/")]
    Home {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/reports/table-1")]
    ReportOne {},
    #[route("/reports/table-2")]
    ReportTwo {},
    #[route("/reports/quarterly")]
    Quarterly {},
    #[route("/branches")]
    Branches {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    install_panic_hook();
    #[cfg(feature = "server")]
    init_tracing();
    log_runtime_config();
    dioxus::launch(App);
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("panic: {info}");
    }));
}

#[cfg(feature = "server")]
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

fn log_runtime_config() {
    let ip = env::var("IP").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    eprintln!("startup: IP={ip} PORT={port}");
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ui::OpsTheme {}
        ui::PreferencesProvider {
            ui::ThemeProvider {
                ui::I18nProvider { default_lang: ui::Lang::Uz,
                    Router::<Route> {}
                }
            }
        }
    }
}

/// Top bar shared by every page: brand block, collapsible main nav,
/// theme and language toggles, and the admin dropdown.
#[component]
fn DashNavbar() -> Element {
    let lang = ui::use_lang()();
    let path = use_route::<Route>().to_string();

    rsx! {
        header { class: "topbar",
            div { class: "topbar_inner",
                a { class: "brand", href: "/dashboard",
                    span { class: "brand_mark" }
                    span { class: "brand_text",
                        span { class: "brand_name", "data-i18n": "brand", {ui::t(lang, "brand")} }
                        span { class: "brand_sub", "data-i18n": "subtitle", {ui::t(lang, "subtitle")} }
                    }
                }

                ui::MobileNav {
                    ui::NavLink { href: "/dashboard", current: path.clone(),
                        span { "data-i18n": "dash", {ui::t(lang, "dash")} }
                    }
                    ui::NavLink { href: "/reports/table-1", current: path.clone(),
                        span { "data-i18n": "r1", {ui::t(lang, "r1")} }
                    }
                    ui::NavLink { href: "/reports/table-2", current: path.clone(),
                        span { "data-i18n": "r2", {ui::t(lang, "r2")} }
                    }
                    ui::NavLink { href: "/reports/quarterly", current: path.clone(),
                        span { "data-i18n": "q", {ui::t(lang, "q")} }
                    }
                    ui::NavLink { href: "/branches", current: path.clone(),
                        span { "data-i18n": "branches", {ui::t(lang, "branches")} }
                    }
                }

                div { class: "topbar_actions",
                    ui::ThemeToggle {}
                    ui::LangToggle {}
                    ui::AdminMenu {}
                }
            }
        }
        main { class: "page route_view", Outlet::<Route> {} }
    }
}
