use std::time::Duration;

use egui_kittest::Harness;
use usertable_ui::UserTableApp;
use usertable_ui::state::State;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Time to let spawned requests reach the mock server between frames.
pub const DEFAULT_NETWORK_WAIT_MS: u64 = 20;

/// Upper bound on frames a test waits for a request to land.
pub const MAX_FRAMES: usize = 200;

pub async fn yield_wait_for_network(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

pub fn sample_users() -> serde_json::Value {
    serde_json::json!([
        {
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "website": "hildegard.org"
        },
        {
            "id": 2,
            "name": "Ervin Howell",
            "username": "Antonette",
            "email": "Shanna@melissa.tv",
            "website": "anastasia.net"
        }
    ])
}

pub struct TestCtx<'a> {
    mock_server: MockServer,
    harness: Harness<'a, UserTableApp>,
}

impl<'a> TestCtx<'a> {
    /// App harness whose startup load gets `users` from the mock server.
    pub async fn new_app(users: serde_json::Value) -> Self {
        Self::with_list_response(ResponseTemplate::new(200).set_body_json(users), false).await
    }

    /// App harness whose startup load fails with `status`.
    #[allow(unused)]
    pub async fn new_app_with_status(status: u16) -> Self {
        Self::with_list_response(ResponseTemplate::new(status), false).await
    }

    /// Like [`TestCtx::new_app`], but `Time` only moves when the test moves it.
    #[allow(unused)]
    pub async fn new_app_manual_time(users: serde_json::Value) -> Self {
        Self::with_list_response(ResponseTemplate::new(200).set_body_json(users), true).await
    }

    async fn with_list_response(response: ResponseTemplate, manual_time_control: bool) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(response)
            .mount(&mock_server)
            .await;

        let state = State::test(mock_server.uri());
        let app = UserTableApp::builder()
            .state(state)
            .manual_time_control(manual_time_control)
            .build();
        let harness = Harness::new_eframe(|_| app);

        Self {
            mock_server,
            harness,
        }
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, UserTableApp> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn harness(&self) -> &Harness<'a, UserTableApp> {
        &self.harness
    }

    #[allow(unused)]
    pub fn mock_server(&self) -> &MockServer {
        &self.mock_server
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.harness.state_mut().state
    }

    /// Step frames, yielding to spawned requests in between, until `done` holds.
    pub async fn step_until(&mut self, mut done: impl FnMut(&State) -> bool) -> bool {
        for _ in 0..MAX_FRAMES {
            self.harness.step();
            if done(&self.harness.state().state) {
                return true;
            }
            yield_wait_for_network(DEFAULT_NETWORK_WAIT_MS).await;
        }
        false
    }

    /// Step until the startup load has filled the table with `count` rows.
    pub async fn wait_for_rows(&mut self, count: usize) {
        let loaded = self
            .step_until(|state| {
                state
                    .ctx
                    .state::<usertable_business::UserTableState>()
                    .len()
                    == count
            })
            .await;
        assert!(loaded, "Timed out waiting for {count} rows");
        self.harness.step();
    }
}
