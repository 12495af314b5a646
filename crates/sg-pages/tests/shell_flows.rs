//! Shell-level flows driven through the real HTTP client.

use std::net::TcpListener;

use pretty_assertions::assert_eq;
use sg_client::ApiClient;
use sg_config::{ApiConfig, RefetchPolicy};
use sg_core::enums::FailureKind;
use sg_pages::pages::AUDIT_FAILED;
use sg_pages::{ActivePage, Phase, Route, Shell};

/// A client pointed at a port nothing listens on.
fn unreachable_client() -> ApiClient {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    ApiClient::new(&ApiConfig {
        base_url: format!("http://127.0.0.1:{port}"),
        timeout_secs: Some(5),
        ..ApiConfig::default()
    })
    .unwrap()
}

#[test]
fn every_route_mounts_an_empty_page() {
    let mut shell = Shell::default();
    for route in Route::ALL {
        shell.navigate(route.path().unwrap());
        let page = shell.page().unwrap();
        assert_eq!(page.route(), route);
        assert_eq!(page.phase(), Phase::Idle);
    }

    shell.navigate("/audit");
    assert!(shell.view().is_empty());
    shell.navigate("/consent");
    assert!(shell.view().is_empty());
    shell.navigate("/checklist");
    assert_eq!(shell.view().plain_text(), "Tasks\n-----\n(no tasks)");
}

#[tokio::test]
async fn unreachable_backend_fails_audit_with_network_kind() {
    let api = unreachable_client();
    let mut shell = Shell::default();
    shell.navigate("/audit");

    let Some(ActivePage::Audit(page)) = shell.page_mut() else {
        panic!("audit page should be mounted");
    };
    page.set_business_id("b1");
    page.set_url("https://example.com");
    page.run_audit(&api).await.unwrap();

    let failure = page.result().unwrap().as_ref().unwrap_err();
    assert_eq!(failure.message, AUDIT_FAILED);
    assert_eq!(failure.kind, FailureKind::Network);
    assert_eq!(shell.view().plain_text(), "Audit failed");
}

#[tokio::test]
async fn unreachable_backend_empties_checklist_silently() {
    let api = unreachable_client();
    let mut shell = Shell::new(RefetchPolicy::OnChange);
    shell.navigate("/checklist");

    let Some(ActivePage::Checklist(page)) = shell.page_mut() else {
        panic!("checklist page should be mounted");
    };
    page.change_business_id(&api, "b1").await;

    assert!(page.tasks().is_empty());
    assert!(page.add_result().is_none());
    assert!(!page.is_refreshing());
}
