//! Application state runtime shared by the business and UI crates.
//!
//! States are plain data owned by [`StateCtx`] on the UI thread. Computes are
//! caches, either derived from states or written by commands. Commands are the
//! only place side effects run; they receive a [`CommandSnapshot`] and report
//! back through an [`Updater`].

mod command;
mod compute;
mod ctx;
mod error;
mod snapshot;
mod state;
mod task;
mod time;
mod updater;

pub use command::{Command, CommandFuture};
pub use compute::{Compute, Dep};
pub use ctx::StateCtx;
pub use error::StateError;
pub use snapshot::CommandSnapshot;
pub use state::State;
pub use task::TaskId;
pub use time::Time;
pub use updater::Updater;
