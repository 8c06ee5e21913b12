use dioxus::prelude::*;

/// Exact-match comparison between a link target and the current path.
/// No trailing-slash or query normalization: `/dashboard/` does not
/// match `/dashboard`.
pub fn is_active(href: &str, current_path: &str) -> bool {
    href == current_path
}

/// A main-nav link carrying the `nav-link` class, plus `active` when its
/// target equals the current route path.
#[component]
pub fn NavLink(href: String, current: String, children: Element) -> Element {
    let class = if is_active(&href, &current) {
        "nav-link active"
    } else {
        "nav-link"
    };

    rsx! {
        a { class: "{class}", href: "{href}", {children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_path_matches() {
        assert!(is_active("/dashboard", "/dashboard"));
    }

    #[test]
    fn other_paths_do_not_match() {
        assert!(!is_active("/dashboard", "/branches"));
        assert!(!is_active("/reports/table-1", "/reports/table-2"));
    }

    #[test]
    fn no_normalization_is_applied() {
        assert!(!is_active("/dashboard", "/dashboard/"));
        assert!(!is_active("/dashboard", "/dashboard?tab=1"));
        assert!(!is_active("/dashboard", "/Dashboard"));
    }
}
