mod toast;
pub mod users;

pub use toast::toast;
pub use users::users_panel;
