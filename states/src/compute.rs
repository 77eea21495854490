use std::any::TypeId;
use std::collections::BTreeMap;

use crate::state::StateSlot;
use crate::{State, Updater};

/// A compute-shaped cache.
///
/// Most computes in this workspace are written by commands through
/// [`Updater::set`] and have no dependencies; the default `compute` is a no-op
/// for them. A compute that derives from states lists them in `deps`, and
/// `StateCtx::run_computed` calls `compute` whenever one of them is dirty.
///
/// `compute` must not perform network IO, since it runs implicitly on every
/// frame a dependency changes. Side effects belong in a [`crate::Command`].
pub trait Compute: State {
    fn deps(&self) -> Vec<TypeId> {
        Vec::new()
    }

    fn compute(&self, _deps: Dep<'_>, _updater: Updater) {}
}

pub(crate) trait ComputeSlot: StateSlot {
    fn as_state_slot_mut(&mut self) -> &mut dyn StateSlot;

    fn deps(&self) -> Vec<TypeId>;

    fn run(&self, deps: Dep<'_>, updater: Updater);
}

impl<T: Compute> ComputeSlot for T {
    fn as_state_slot_mut(&mut self) -> &mut dyn StateSlot {
        self
    }

    fn deps(&self) -> Vec<TypeId> {
        Compute::deps(self)
    }

    fn run(&self, deps: Dep<'_>, updater: Updater) {
        self.compute(deps, updater);
    }
}

/// Read-only view over the registered states, handed to [`Compute::compute`].
pub struct Dep<'a> {
    states: &'a BTreeMap<TypeId, Box<dyn StateSlot>>,
}

impl<'a> Dep<'a> {
    pub(crate) fn new(states: &'a BTreeMap<TypeId, Box<dyn StateSlot>>) -> Self {
        Self { states }
    }

    pub fn try_state<T: State>(&self) -> Option<&'a T> {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|slot| slot.as_any().downcast_ref::<T>())
    }

    /// # Panics
    /// Panics if `T` was never registered with `add_state`.
    pub fn get_state_ref<T: State>(&self) -> &'a T {
        self.try_state::<T>().unwrap_or_else(|| {
            panic!(
                "Dependency {} is not registered",
                std::any::type_name::<T>()
            )
        })
    }
}
