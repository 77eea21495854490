//! Mock-server helpers for driving the table commands end to end.
//!
//! ```ignore
//! let mut t = TestContext::new().await;
//! t.mock_list(vec![sample_user(1)]).await;
//! t.controller().load();
//! t.flush_and_wait().await;
//! assert_eq!(t.controller().users().len(), 1);
//! ```

use std::time::Duration;

use usertable_states::StateCtx;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::{BusinessConfig, UserId, UserRecord, UserTableController, UserTableState};

pub struct TestContext {
    pub mock_server: MockServer,
    pub ctx: StateCtx,
}

impl TestContext {
    pub async fn new() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let mock_server = MockServer::start().await;

        let mut ctx = StateCtx::new();
        UserTableController::register(&mut ctx, BusinessConfig::new(mock_server.uri()));

        Self { mock_server, ctx }
    }

    pub fn controller(&mut self) -> UserTableController<'_> {
        UserTableController::new(&mut self.ctx)
    }

    /// Seed the table without a request.
    pub fn seed(&mut self, users: Vec<UserRecord>) {
        self.ctx.state_mut::<UserTableState>().replace_all(users);
    }

    /// Spawn queued commands and wait until every task has finished, syncing
    /// after each one.
    pub async fn flush_and_wait(&mut self) {
        let finished = tokio::time::timeout(Duration::from_secs(5), self.ctx.flush_and_await())
            .await
            .is_ok();
        assert!(
            finished,
            "Timed out waiting for pending tasks ({} still running)",
            self.ctx.task_count()
        );
    }

    pub async fn mock_list(&self, users: Vec<UserRecord>) {
        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&users))
            .mount(&self.mock_server)
            .await;
    }

    pub async fn mock_status(&self, http_method: &str, at: &str, status: u16) {
        Mock::given(method(http_method))
            .and(path(at))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.mock_server)
            .await;
    }

    pub async fn mock_create(&self, created: UserRecord) {
        Mock::given(method("POST"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(201).set_body_json(&created))
            .mount(&self.mock_server)
            .await;
    }

    pub async fn mock_update(&self, id: UserId) {
        Mock::given(method("PUT"))
            .and(path(format!("/users/{id}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "id": id })))
            .mount(&self.mock_server)
            .await;
    }

    pub async fn mock_delete(&self, id: UserId) {
        Mock::given(method("DELETE"))
            .and(path(format!("/users/{id}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&self.mock_server)
            .await;
    }

    /// Bodies of every request received for `http_method`.
    pub async fn received_bodies(&self, http_method: &str) -> Vec<serde_json::Value> {
        self.mock_server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .filter(|req| req.method.as_str() == http_method)
            .map(|req| serde_json::from_slice(&req.body).unwrap_or(serde_json::Value::Null))
            .collect()
    }

    pub async fn request_count(&self) -> usize {
        self.mock_server
            .received_requests()
            .await
            .map(|reqs| reqs.len())
            .unwrap_or_default()
    }
}

pub fn sample_user(id: UserId) -> UserRecord {
    UserRecord {
        id,
        name: format!("User {id}"),
        email: format!("user{id}@example.com"),
        website: format!("user{id}.example"),
        ..Default::default()
    }
}
