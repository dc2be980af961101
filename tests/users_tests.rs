mod common;

use common::{ok, setup, user};
use ngo_crm::models::Role;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_directory(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/v1/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok(json!([
            user("u1", "Sita Shrestha", "np", "admin"),
            user("u2", "Ramesh Khatri", "np", "volunteer"),
            user("u3", "Anita Sharma", "in", "volunteer"),
            user("u4", "Kiran Rao", "in", "finance")
        ]))))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/country"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok(json!([
            { "id": "np", "countryName": "Nepal" },
            { "id": "in", "countryName": "India" }
        ]))))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_filters_reduce_to_matching_rows() {
    let (server, crm) = setup().await;
    mount_directory(&server).await;

    let mut page = crm.user_management_page();
    page.load().await;
    assert_eq!(page.visible().len(), 4);
    assert_eq!(page.countries().len(), 2);

    page.filter.country = Some("in".to_string());
    page.filter.role = Some(Role::Volunteer);
    let ids: Vec<&str> = page.visible().iter().map(|u| u.id.as_str()).collect();
    assert_eq!(ids, vec!["u3"]);

    page.filter.country = None;
    assert_eq!(page.visible().len(), 2);

    page.filter.role = Some(Role::Chairman);
    assert!(page.visible().is_empty());
}

#[tokio::test]
async fn test_country_failure_keeps_users() {
    let (server, crm) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/users"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(ok(json!([user("u1", "Sita Shrestha", "np", "admin")]))),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/country"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let mut page = crm.user_management_page();
    page.load().await;
    assert_eq!(page.users().len(), 1);
    assert!(page.countries().is_empty());
    assert!(crm.toasts().is_empty());
}

#[tokio::test]
async fn test_role_change_through_dialog() {
    let (server, crm) = setup().await;
    mount_directory(&server).await;
    Mock::given(method("PUT"))
        .and(path("/api/v1/users/u2/role"))
        .and(body_json(json!({ "role": "hr" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok(json!({}))))
        .expect(1)
        .mount(&server)
        .await;

    let mut page = crm.user_management_page();
    page.load().await;

    // same role: dialog closes, nothing sent
    assert!(page.open_role_change("u2"));
    assert!(!page.save_role(Role::Volunteer).await.unwrap());
    assert!(!page.role_dialog.is_open());

    assert!(page.open_role_change("u2"));
    assert!(page.save_role(Role::Hr).await.unwrap());
    assert_eq!(
        crm.toasts().last().unwrap().message,
        "Role updated successfully"
    );
}

#[tokio::test]
async fn test_delete_through_dialog() {
    let (server, crm) = setup().await;
    mount_directory(&server).await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/users/u4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok(json!({}))))
        .expect(1)
        .mount(&server)
        .await;

    let mut page = crm.user_management_page();
    page.load().await;

    assert!(page.request_delete("u4"));
    assert_eq!(
        page.delete_prompt().as_deref(),
        Some("Are you sure you want to delete Kiran Rao?")
    );
    page.delete_dialog.cancel();
    assert!(!page.confirm_delete().await.unwrap());

    assert!(page.request_delete("u4"));
    assert!(page.confirm_delete().await.unwrap());
    assert_eq!(
        crm.toasts().last().unwrap().message,
        "User deleted successfully"
    );
}
