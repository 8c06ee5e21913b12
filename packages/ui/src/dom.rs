use dioxus::prelude::*;

/// Best-effort attribute write on the document root. The root element is
/// outside the rendered tree, so it goes through the webview bridge.
pub(crate) async fn set_root_attr(name: &str, value: &str) {
    let js = format!(
        r#"(function(){{
            try {{ document.documentElement.setAttribute("{name}", "{value}"); }}
            catch(e) {{}}
            return "";
        }})()"#
    );
    let _ = document::eval(&js).await;
}
