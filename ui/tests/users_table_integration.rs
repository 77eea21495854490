//! Integration tests for the users table against a mocked collection.
//!
//! The app harness runs the full frame loop, so commands enqueued by clicks
//! are flushed at the end of the frame exactly as in production.

mod common;

use crate::common::{TestCtx, sample_users};
use chrono::{TimeDelta, TimeZone, Utc};
use kittest::Queryable;
use usertable_business::{
    LoadUsersCompute, LoadUsersStatus, NotificationCompute, NotificationKind, UserField,
    UserTableState,
};
use usertable_states::Time;
use usertable_ui::widgets::users::table::record_cell_id;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

fn notification_message(state: &usertable_ui::state::State) -> Option<String> {
    state
        .ctx
        .cached::<NotificationCompute>()
        .and_then(NotificationCompute::current)
        .map(|n| n.message.clone())
}

#[tokio::test]
async fn startup_loads_and_renders_table() {
    let mut ctx = TestCtx::new_app(sample_users()).await;
    ctx.wait_for_rows(2).await;

    let harness = ctx.harness_mut();
    assert!(harness.query_by_label_contains("CRUD App").is_some());
    for header in ["ID", "Name", "Email", "Website", "Action"] {
        assert!(
            harness.query_by_label(header).is_some(),
            "Header {header} should be rendered"
        );
    }
    assert_eq!(harness.query_all_by_label("Update").count(), 2);
    assert_eq!(harness.query_all_by_label("Delete").count(), 2);
    assert!(harness.query_by_label("Add User").is_some());

    let users = harness.state().state.ctx.state::<UserTableState>().users().to_vec();
    assert_eq!(users[0].name, "Leanne Graham");
    assert_eq!(users[1].website, "anastasia.net");
    assert_eq!(
        harness
            .state()
            .state
            .ctx
            .cached::<LoadUsersCompute>()
            .map(|c| c.status.clone()),
        Some(LoadUsersStatus::Loaded(2))
    );
}

#[tokio::test]
async fn failed_load_shows_danger_toast() {
    let mut ctx = TestCtx::new_app_with_status(500).await;

    let shown = ctx
        .step_until(|state| notification_message(state).is_some())
        .await;
    assert!(shown, "A notification should appear after the load fails");
    ctx.harness_mut().step();

    let harness = ctx.harness_mut();
    assert!(harness.query_by_label_contains("Failed to fetch users").is_some());
    assert!(harness.query_by_label("No users").is_some());
    assert!(
        harness
            .state()
            .state
            .ctx
            .state::<UserTableState>()
            .is_empty()
    );
}

#[tokio::test]
async fn delete_button_removes_row_after_server_confirms() {
    let mut ctx = TestCtx::new_app(sample_users()).await;
    Mock::given(method("DELETE"))
        .and(path("/users/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(ctx.mock_server())
        .await;
    ctx.wait_for_rows(2).await;

    ctx.harness_mut()
        .query_all_by_label("Delete")
        .next()
        .expect("first row has a Delete button")
        .click();

    let removed = ctx
        .step_until(|state| state.ctx.state::<UserTableState>().len() == 1)
        .await;
    assert!(removed, "Row should be removed once DELETE succeeds");
    ctx.harness_mut().step();

    let harness = ctx.harness_mut();
    let state = &harness.state().state;
    assert_eq!(state.ctx.state::<UserTableState>().users()[0].id, 2);
    assert_eq!(
        state
            .ctx
            .cached::<NotificationCompute>()
            .and_then(NotificationCompute::current)
            .map(|n| n.kind),
        Some(NotificationKind::Danger)
    );
    assert!(
        harness
            .query_by_label_contains("User deleted successfully")
            .is_some()
    );
}

#[tokio::test]
async fn add_user_button_appends_created_record() {
    let mut ctx = TestCtx::new_app(sample_users()).await;
    Mock::given(method("POST"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": 11,
            "name": "Ann",
            "email": "ann@x.io",
            "website": "ann.io"
        })))
        .expect(1)
        .mount(ctx.mock_server())
        .await;
    ctx.wait_for_rows(2).await;

    {
        let mut controller = ctx.state_mut().controller();
        controller.stage_new_record(UserField::Name, "Ann");
        controller.stage_new_record(UserField::Email, "ann@x.io");
        controller.stage_new_record(UserField::Website, "ann.io");
    }
    ctx.harness_mut().step();
    ctx.harness_mut().get_by_label("Add User").click();

    let added = ctx
        .step_until(|state| state.ctx.state::<UserTableState>().len() == 3)
        .await;
    assert!(added, "Created record should be appended");

    let state = ctx.state_mut();
    assert_eq!(state.ctx.state::<UserTableState>().users()[2].id, 11);
    assert_eq!(
        notification_message(state).as_deref(),
        Some("User added successfully")
    );
    assert!(state.controller().draft().is_empty());
}

#[tokio::test]
async fn add_user_with_blank_draft_sends_nothing() {
    let mut ctx = TestCtx::new_app(sample_users()).await;
    ctx.wait_for_rows(2).await;

    ctx.state_mut()
        .controller()
        .stage_new_record(UserField::Name, "only a name");
    ctx.harness_mut().step();
    ctx.harness_mut().get_by_label("Add User").click();

    for _ in 0..5 {
        ctx.harness_mut().step();
        common::yield_wait_for_network(common::DEFAULT_NETWORK_WAIT_MS).await;
    }

    let requests = ctx
        .mock_server()
        .received_requests()
        .await
        .unwrap_or_default();
    assert!(requests.iter().all(|r| r.method.as_str() == "GET"));
    assert_eq!(
        ctx.state_mut().ctx.state::<UserTableState>().len(),
        2,
        "Table must not change"
    );
}

#[tokio::test]
async fn update_button_sends_staged_record() {
    let mut ctx = TestCtx::new_app(sample_users()).await;
    Mock::given(method("PUT"))
        .and(path("/users/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "id": 2 })))
        .expect(1)
        .mount(ctx.mock_server())
        .await;
    ctx.wait_for_rows(2).await;

    ctx.state_mut()
        .controller()
        .edit_field(2, UserField::Email, "x@y.com");
    ctx.harness_mut().step();
    ctx.harness_mut()
        .query_all_by_label("Update")
        .nth(1)
        .expect("second row has an Update button")
        .click();

    let updated = ctx
        .step_until(|state| notification_message(state).is_some())
        .await;
    assert!(updated, "Update should report back");

    let puts: Vec<serde_json::Value> = ctx
        .mock_server()
        .received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .filter(|r| r.method.as_str() == "PUT")
        .map(|r| serde_json::from_slice(&r.body).unwrap_or_default())
        .collect();
    assert_eq!(puts.len(), 1);
    assert_eq!(puts[0]["email"], "x@y.com");
    assert_eq!(
        notification_message(ctx.state_mut()).as_deref(),
        Some("User updated successfully")
    );
}

#[tokio::test]
async fn toast_disappears_after_three_seconds() {
    let mut ctx = TestCtx::new_app_manual_time(sample_users()).await;
    let start = Utc.timestamp_opt(1_000, 0).unwrap();
    ctx.state_mut().ctx.update::<Time>(|t| *t.as_mut() = start);
    ctx.wait_for_rows(2).await;

    Mock::given(method("DELETE"))
        .and(path("/users/2"))
        .respond_with(ResponseTemplate::new(500))
        .mount(ctx.mock_server())
        .await;
    ctx.state_mut().controller().remove_record(2);

    let shown = ctx
        .step_until(|state| {
            state
                .ctx
                .cached::<NotificationCompute>()
                .and_then(NotificationCompute::current)
                .is_some_and(|n| n.shown_at.is_some())
        })
        .await;
    assert!(shown, "Failure notification should be displayed");
    assert_eq!(
        notification_message(ctx.state_mut()).as_deref(),
        Some("Failed to delete user")
    );

    ctx.state_mut()
        .ctx
        .update::<Time>(|t| *t.as_mut() = start + TimeDelta::milliseconds(2_900));
    ctx.harness_mut().step();
    ctx.harness_mut().step();
    assert!(notification_message(ctx.state_mut()).is_some());

    ctx.state_mut()
        .ctx
        .update::<Time>(|t| *t.as_mut() = start + TimeDelta::seconds(3));
    ctx.harness_mut().step();
    ctx.harness_mut().step();
    assert!(notification_message(ctx.state_mut()).is_none());
    assert!(
        ctx.harness_mut()
            .query_by_label_contains("Failed to delete user")
            .is_none()
    );
    assert_eq!(ctx.state_mut().ctx.state::<UserTableState>().len(), 2);
}

#[tokio::test]
async fn focused_cell_follows_its_record_when_a_row_above_is_deleted() {
    let mut ctx = TestCtx::new_app(sample_users()).await;
    Mock::given(method("DELETE"))
        .and(path("/users/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(ctx.mock_server())
        .await;
    ctx.wait_for_rows(2).await;

    let email_of_2 = record_cell_id(2, UserField::Email);
    ctx.harness_mut()
        .ctx
        .memory_mut(|m| m.request_focus(email_of_2));
    ctx.harness_mut().step();
    ctx.harness_mut().step();

    ctx.state_mut().controller().remove_record(1);
    let removed = ctx
        .step_until(|state| state.ctx.state::<UserTableState>().len() == 1)
        .await;
    assert!(removed, "Row 1 should be removed once DELETE succeeds");
    ctx.harness_mut().step();

    assert_eq!(
        ctx.harness_mut().ctx.memory(|m| m.focused()),
        Some(email_of_2)
    );

    ctx.harness_mut()
        .input_mut()
        .events
        .push(egui::Event::Text("z".to_owned()));
    ctx.harness_mut().step();
    ctx.harness_mut().step();

    let users = ctx.state_mut().ctx.state::<UserTableState>().users().to_vec();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, 2);
    assert!(users[0].email.starts_with("Shanna@melissa.tv"));
    assert!(users[0].email.ends_with('z'));
}
