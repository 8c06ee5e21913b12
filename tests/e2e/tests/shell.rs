use e2e::{browser::Browser, test_server::TestServer};

#[tokio::test]
async fn test_preference_controls_render() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");

    page.goto(&format!("{}/dashboard", server.url()))
        .expect("Failed to navigate");

    // The preference controls and menu elements pages depend on
    let result = page.find_element("#themeBtn");
    assert!(result.is_ok(), "Theme button should exist");

    let result = page.find_element("#themeIconHolder");
    assert!(result.is_ok(), "Theme icon holder should exist");

    let result = page.find_element("#langBtn");
    assert!(result.is_ok(), "Language button should exist");

    let result = page.find_element("#adminToggle");
    assert!(result.is_ok(), "Admin menu trigger should exist");

    let result = page.find_element("#centerNav");
    assert!(result.is_ok(), "Main nav panel should exist");

    let result = page.find_element(".nav-link");
    assert!(result.is_ok(), "Nav links should exist");
}
