//! Editable users table.
//!
//! - `panel`: the table frame, loading indicator and action dispatch
//! - `table`: columns, header, record rows and the "add new" row

mod panel;
pub mod table;

pub use panel::users_panel;
