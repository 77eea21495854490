//! Domain layer of the user table: records, local table state, the remote
//! users API and the commands that keep the two in step.

mod action_compute;
pub mod api;
mod config;
mod controller;
mod create_user_compute;
mod draft;
pub mod http;
mod load_users_compute;
pub mod notification;
mod table_state;
mod user;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod test_utils;

pub use action_compute::{DeleteUserCommand, RecordActionInput, UpdateUserCommand};
pub use api::{ApiResult, UsersApiError};
pub use config::{BusinessConfig, DEFAULT_API_BASE_URL, NOTIFICATION_DURATION_SECS};
pub use controller::UserTableController;
pub use create_user_compute::CreateUserCommand;
pub use draft::DraftRecord;
pub use load_users_compute::{LoadUsersCommand, LoadUsersCompute, LoadUsersStatus};
pub use notification::{Notification, NotificationCompute, NotificationKind};
pub use table_state::UserTableState;
pub use user::{NewUserRequest, UserField, UserId, UserRecord};
