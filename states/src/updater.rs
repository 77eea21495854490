use std::any::{Any, TypeId, type_name};
use std::fmt::{Debug, Formatter};

use flume::Sender;
use log::warn;

use crate::State;

type Mutation = Box<dyn FnOnce(&mut dyn Any) + Send>;

/// A pending write produced off the UI thread.
pub(crate) enum Update {
    Replace {
        id: TypeId,
        name: &'static str,
        value: Box<dyn Any + Send>,
    },
    Mutate {
        id: TypeId,
        name: &'static str,
        apply: Mutation,
    },
}

impl Update {
    pub(crate) fn id(&self) -> TypeId {
        match self {
            Self::Replace { id, .. } | Self::Mutate { id, .. } => *id,
        }
    }

    pub(crate) fn name(&self) -> &'static str {
        match self {
            Self::Replace { name, .. } | Self::Mutate { name, .. } => name,
        }
    }
}

/// Cloneable handle that commands and computes use to write back into the
/// owning `StateCtx`.
///
/// Nothing is applied until the UI thread calls `StateCtx::sync_computes`, so
/// every write lands on the thread that owns the state.
#[derive(Clone)]
pub struct Updater {
    send: Sender<Update>,
}

impl Debug for Updater {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Updater")
            .field("pending", &self.send.len())
            .finish()
    }
}

impl Updater {
    pub(crate) fn new(send: Sender<Update>) -> Self {
        Self { send }
    }

    /// Replace the registered value of `T` wholesale.
    pub fn set<T: State>(&self, value: T) {
        self.push(Update::Replace {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
            value: Box::new(value),
        });
    }

    /// Apply `f` to whatever value of `T` is current when the update is synced.
    ///
    /// Use this instead of `set` when the write must not clobber changes the
    /// UI made after the command's snapshot was taken.
    pub fn mutate<T: State>(&self, f: impl FnOnce(&mut T) + Send + 'static) {
        let apply: Mutation = Box::new(move |any: &mut dyn Any| {
            if let Some(value) = any.downcast_mut::<T>() {
                f(value);
            }
        });
        self.push(Update::Mutate {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
            apply,
        });
    }

    fn push(&self, update: Update) {
        let name = update.name();
        if self.send.send(update).is_err() {
            warn!("Updater: state context dropped, discarding update for {name}");
        }
    }
}
