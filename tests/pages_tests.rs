mod common;

use common::{ok, setup, user};
use ngo_crm::events::EventForm;
use ngo_crm::expenses::ExpenseReview;
use ngo_crm::models::{ApprovalStatus, Channel};
use ngo_crm::projects::{ProjectEdit, ProjectForm};
use ngo_crm::schools::SchoolForm;
use ngo_crm::toast::ToastLevel;
use serde_json::json;
use tokio_test::assert_err;
use wiremock::matchers::{body_json, body_string_contains, method, path};
use wiremock::{Mock, ResponseTemplate};

fn expense(id: &str, status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "amount": 250.0,
        "category": "Travel",
        "status": status,
        "invoiceUrls": ["https://cdn.whv.org/inv-1.pdf"],
        "submittedBy": { "name": "Ramesh Khatri" },
        "project": { "title": "Clean Water" }
    })
}

#[tokio::test]
async fn test_event_without_title_sends_nothing() {
    let (server, crm) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/events"))
        .respond_with(ResponseTemplate::new(201).set_body_json(ok(json!({}))))
        .expect(0)
        .mount(&server)
        .await;

    let mut page = crm.events_page();
    let form = EventForm {
        start_at: "2025-11-01T10:00".to_string(),
        ..Default::default()
    };
    let err = assert_err!(page.create(&form).await);

    assert!(err.is_validation());
    let toast = crm.toasts().last().unwrap();
    assert_eq!(toast.level, ToastLevel::Error);
    assert_eq!(toast.message, "Title and Start Date are required");
}

#[tokio::test]
async fn test_event_create_refreshes_list() {
    let (server, crm) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/events"))
        .and(body_json(json!({
            "title": "Volunteer Orientation",
            "description": "",
            "startAt": "2025-11-01T10:00",
            "endAt": null,
            "location": "Kathmandu",
            "attachments": []
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(ok(json!({ "id": "e1" }))))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok(json!([{
            "id": "e1",
            "title": "Volunteer Orientation",
            "startAt": "2025-11-01T10:00:00Z",
            "location": "Kathmandu",
            "createdAt": "2025-10-01T08:00:00Z"
        }]))))
        .expect(1)
        .mount(&server)
        .await;

    let mut page = crm.events_page();
    let form = EventForm {
        title: "Volunteer Orientation".to_string(),
        start_at: "2025-11-01T10:00".to_string(),
        location: "Kathmandu".to_string(),
        ..Default::default()
    };
    page.create(&form).await.unwrap();

    assert_eq!(page.events.len(), 1);
    assert_eq!(page.events.selected().unwrap().id, "e1");
    assert_eq!(
        crm.toasts().last().unwrap().message,
        "Event created successfully"
    );
}

#[tokio::test]
async fn test_school_create_and_search() {
    let (server, crm) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/schools"))
        .and(body_string_contains("\"countryId\":\"np\""))
        .respond_with(ResponseTemplate::new(201).set_body_json(ok(json!({ "id": "s1" }))))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/schools"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok(json!([
            {
                "id": "s1",
                "name": "Shree Janata School",
                "country": { "id": "np", "countryName": "Nepal" },
                "address": "Bhaktapur",
                "createdAt": "2025-09-01T00:00:00Z"
            },
            {
                "id": "s2",
                "name": "Gita Vidyalaya",
                "address": "Varanasi",
                "createdAt": "2025-09-02T00:00:00Z"
            }
        ]))))
        .mount(&server)
        .await;

    let mut page = crm.schools_page();
    let form = SchoolForm {
        name: "Shree Janata School".to_string(),
        country_id: Some("np".to_string()),
        address: "Bhaktapur".to_string(),
        ..Default::default()
    };
    page.create(&form).await.unwrap();

    assert_eq!(page.schools.len(), 2);
    page.search = "varanasi".to_string();
    let visible = page.visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, "s2");
}

#[tokio::test]
async fn test_notification_create_resets_form() {
    let (server, crm) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/notifications"))
        .and(body_json(json!({
            "title": "Board meeting",
            "body": "Friday 10am",
            "channel": "email"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(ok(json!({}))))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/notifications"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok(json!([{
            "id": "n1",
            "channel": "email",
            "title": "Board meeting",
            "body": "Friday 10am",
            "createdAt": "2025-10-01T08:00:00Z"
        }]))))
        .mount(&server)
        .await;

    let mut page = crm.notifications_page();
    page.form.title = "Board meeting".to_string();
    page.form.body = "Friday 10am".to_string();
    page.form.channel = Channel::Email;
    page.create().await.unwrap();

    assert!(page.form.title.is_empty());
    assert_eq!(page.notifications.len(), 1);
    assert_eq!(page.notifications.items()[0].audience_initial(), 'A');
}

#[tokio::test]
async fn test_expense_review_patches_locally() {
    let (server, crm) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/expenses"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok(json!([
            expense("e1", "pending"),
            expense("e2", "pending"),
            expense("e3", "approved")
        ]))))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/v1/expenses/e1"))
        .and(body_json(json!({ "status": "approved", "notes": "Receipts ok" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok(json!({ "id": "e1" }))))
        .expect(1)
        .mount(&server)
        .await;

    let mut page = crm.expense_review_page();
    page.load().await;
    assert_eq!(page.board.count(ApprovalStatus::Pending), 2);

    let review = ExpenseReview {
        status: ApprovalStatus::Approved,
        notes: "Receipts ok".to_string(),
    };
    assert!(page.review("e1", review).await.unwrap());

    assert_eq!(
        page.board.counts(),
        [
            (ApprovalStatus::Pending, 1),
            (ApprovalStatus::Approved, 2),
            (ApprovalStatus::Rejected, 0)
        ]
    );
    assert_eq!(
        page.board.get("e1").unwrap().notes.as_deref(),
        Some("Receipts ok")
    );
    assert_eq!(
        crm.toasts().last().unwrap().message,
        "Expense e1 successfully moved to APPROVED!"
    );
}

#[tokio::test]
async fn test_expense_review_without_changes_sends_nothing() {
    let (server, crm) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/expenses"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(ok(json!([expense("e1", "pending")]))),
        )
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/v1/expenses/e1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut page = crm.expense_review_page();
    page.load().await;
    let review = ExpenseReview {
        status: ApprovalStatus::Pending,
        notes: String::new(),
    };
    assert!(!page.review("e1", review).await.unwrap());
    assert_eq!(crm.toasts().last().unwrap().message, "No changes to save.");
}

#[tokio::test]
async fn test_expense_review_failure_keeps_state() {
    let (server, crm) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/expenses"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(ok(json!([expense("e1", "pending")]))),
        )
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/v1/expenses/e1"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "success": false,
            "message": "Expense already closed"
        })))
        .mount(&server)
        .await;

    let mut page = crm.expense_review_page();
    page.load().await;
    let review = ExpenseReview {
        status: ApprovalStatus::Rejected,
        notes: "Duplicate".to_string(),
    };
    assert!(page.review("e1", review).await.is_err());

    assert_eq!(page.board.count(ApprovalStatus::Pending), 1);
    assert_eq!(
        crm.toasts().last().unwrap().message,
        "Expense already closed"
    );
}

#[tokio::test]
async fn test_expense_load_failure_sets_page_error() {
    let (server, crm) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/expenses"))
        .respond_with(ResponseTemplate::new(500).set_body_string(""))
        .mount(&server)
        .await;

    let mut page = crm.expense_review_page();
    page.load().await;
    assert_eq!(page.error(), Some("Failed to load expenses"));
    assert!(page.board.is_empty());
}

#[tokio::test]
async fn test_project_approval_and_create() {
    let (server, crm) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok(json!([
            { "id": "p1", "title": "Clean Water", "approved": "pending", "status": "planning" },
            { "id": "p2", "title": "School Roof", "approved": "approved", "status": "active" }
        ]))))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/v1/projects/p1"))
        .and(body_json(json!({ "approved": "rejected" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok(json!({}))))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/project"))
        .and(body_string_contains("name=\"title\""))
        .and(body_string_contains("Temple Restoration"))
        .respond_with(ResponseTemplate::new(201).set_body_json(ok(json!({ "id": "p3" }))))
        .expect(1)
        .mount(&server)
        .await;

    let mut page = crm.project_approval_page();
    page.load().await;
    assert_eq!(page.tab(ApprovalStatus::Pending).len(), 1);

    // unchanged approval sends nothing
    assert!(!page.review("p2", ApprovalStatus::Approved).await.unwrap());
    assert!(page.review("p1", ApprovalStatus::Rejected).await.unwrap());
    assert!(page.tab(ApprovalStatus::Pending).is_empty());
    assert_eq!(page.tab(ApprovalStatus::Rejected)[0].id, "p1");

    let form = ProjectForm {
        title: "Temple Restoration".to_string(),
        budget: "12000".to_string(),
        ..Default::default()
    };
    page.create(form).await.unwrap();
    assert_eq!(
        crm.toasts().last().unwrap().message,
        "Project created successfully"
    );
}

#[tokio::test]
async fn test_project_edit_patches_card() {
    let (server, crm) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok(json!([
            { "id": "p1", "title": "Clean Water", "approved": "approved", "status": "planning", "budget": 5000.0 }
        ]))))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/v1/projects/p1"))
        .and(body_json(json!({
            "title": "Clean Water Phase 2",
            "status": "active",
            "budget": 7500.0,
            "progress": 35.0,
            "newWorker": ""
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok(json!({}))))
        .expect(1)
        .mount(&server)
        .await;

    let mut page = crm.project_approval_page();
    page.load().await;

    let mut edit = ProjectEdit::from(page.tab(ApprovalStatus::Approved)[0]);
    assert_eq!(edit.progress, 0.0);
    edit.title = "Clean Water Phase 2".to_string();
    edit.status = "active".to_string();
    edit.budget = 7500.0;
    edit.progress = 35.0;

    page.edit("p1", edit).await.unwrap();
    let project = page.board.get("p1").unwrap();
    assert_eq!(project.title, "Clean Water Phase 2");
    assert_eq!(project.status, "active");
    assert_eq!(project.budget, Some(7500.0));
    assert_eq!(project.progress, Some(35.0));
    assert_eq!(
        crm.toasts().last().unwrap().message,
        "Project updated successfully!"
    );
}

#[tokio::test]
async fn test_project_edit_failure_keeps_card() {
    let (server, crm) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok(json!([
            { "id": "p1", "title": "Clean Water", "approved": "pending", "status": "planning" }
        ]))))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/v1/projects/p1"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "success": false,
            "message": "Database unavailable"
        })))
        .mount(&server)
        .await;

    let mut page = crm.project_approval_page();
    page.load().await;

    let mut edit = ProjectEdit::from(page.board.get("p1").unwrap());
    edit.title = "Renamed".to_string();
    assert_err!(page.edit("p1", edit).await);

    assert_eq!(page.board.get("p1").unwrap().title, "Clean Water");
    let toast = crm.toasts().last().unwrap();
    assert_eq!(toast.level, ToastLevel::Error);
    assert_eq!(toast.message, "Error updating project");
}

#[tokio::test]
async fn test_finance_dashboard_figures() {
    let (server, crm) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/financedashboard/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok(json!({
            "totalIncome": 600000.0,
            "totalExpenses": 400000.0,
            "netBalance": 200000.0,
            "fundraisingGoal": 1000000.0,
            "goalAchieved": 456000.0,
            "currentMonthIncome": 75000.0,
            "lastMonthIncome": 50000.0,
            "currentMonthExpenses": 30000.0,
            "lastMonthExpenses": 0.0,
            "expenseBreakdown": [
                { "category": "Programs", "amount": 300000.0 },
                { "category": "Admin", "amount": 100000.0 }
            ]
        }))))
        .mount(&server)
        .await;

    let mut page = crm.finance_dashboard_page(2025);
    page.load().await;

    assert_eq!(page.goal_progress(), 46);
    assert_eq!(page.income_change(), Some(50.0));
    assert_eq!(page.expense_change(), None);
    assert_eq!(page.expense_shares()[0], ("Programs".to_string(), 75.0));
    assert!(page.country_ranking().is_empty());
    // no budget configured
    assert_eq!(page.income_budget_progress(), 0);
}

#[tokio::test]
async fn test_user_lookup_by_id() {
    let (server, crm) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/users/u1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(ok(user("u1", "Sita", "np", "finance"))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let fetched = crm.users().get("u1").await.unwrap();
    assert_eq!(fetched.role.home_route(), Some("/finance/dashboard"));
}
