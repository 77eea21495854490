//! egui front end for the user table: app shell, table widgets and entry points.

#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod state;
pub mod utils;
pub mod widgets;

pub use app::UserTableApp;
