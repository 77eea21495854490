//! Table components for the users table.
//!
//! - `columns`: Column definitions and widths
//! - `header`: Table header rendering
//! - `row`: Record and draft rows, reporting what the user did
//! - `cells`: Cell rendering functions for each column type

mod cells;
pub mod columns;
pub mod header;
pub mod row;

pub use cells::record_cell_id;
