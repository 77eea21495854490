use chrono::TimeDelta;
use usertable_states::State;
use ustr::Ustr;

use crate::UserId;

/// Public demo API the table talks to by default.
pub const DEFAULT_API_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// How long a notification stays on screen, in seconds.
pub const NOTIFICATION_DURATION_SECS: i64 = 3;

#[derive(Debug, Clone)]
pub struct BusinessConfig {
    pub api_base_url: String,
    pub notification_duration: TimeDelta,
}

impl BusinessConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: base_url.into(),
            notification_duration: TimeDelta::seconds(NOTIFICATION_DURATION_SECS),
        }
    }

    /// The users collection, e.g. `https://jsonplaceholder.typicode.com/users`.
    pub fn users_url(&self) -> Ustr {
        ustr::ustr(&format!(
            "{}/users",
            self.api_base_url.trim_end_matches('/')
        ))
    }

    pub fn user_url(&self, id: UserId) -> String {
        format!("{}/{id}", self.users_url())
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

impl State for BusinessConfig {}
