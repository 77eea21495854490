use std::any::Any;
use std::fmt::Debug;
use std::future::Future;
use std::pin::Pin;

use tokio_util::sync::CancellationToken;

use crate::{CommandSnapshot, Updater};

/// Future returned by [`Command::run`].
///
/// It must be `Send` so native builds can run it on the Tokio runtime; the
/// wasm32 HTTP client bridges its non-`Send` internals through a channel.
pub type CommandFuture = Pin<Box<dyn Future<Output = ()> + Send>>;

/// A manual-only side effect.
///
/// Commands are the only place network IO happens. They read their inputs from
/// the snapshot, never from live state, and report back through the updater.
pub trait Command: Any + Debug + Send + Sync {
    fn run(&self, snap: CommandSnapshot, updater: Updater, cancel: CancellationToken)
    -> CommandFuture;
}
