use std::any::{TypeId, type_name};
use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::fmt::{Debug, Formatter};

use flume::{Receiver, Sender};
use log::{debug, error, warn};
use tokio_util::sync::CancellationToken;

use crate::command::CommandFuture;
use crate::compute::{ComputeSlot, Dep};
use crate::state::StateSlot;
use crate::updater::Update;
use crate::{Command, CommandSnapshot, Compute, State, StateError, TaskId, Updater};

struct QueuedCommand {
    id: TaskId,
    snap: CommandSnapshot,
}

/// Owner of all application state.
///
/// `StateCtx` lives on the UI thread. The UI reads and mutates states directly;
/// commands run elsewhere and write back through [`Updater`], and those writes
/// are applied in [`StateCtx::sync_computes`]. Per frame the expected order is:
///
/// 1. `sync_computes` to apply finished command results
/// 2. render, mutating states and enqueueing commands
/// 3. `run_computed` to refresh computes whose dependencies changed
/// 4. `flush_commands` to spawn what was enqueued
pub struct StateCtx {
    states: BTreeMap<TypeId, Box<dyn StateSlot>>,
    computes: BTreeMap<TypeId, Box<dyn ComputeSlot>>,
    commands: BTreeMap<TypeId, Box<dyn Command>>,
    queue: VecDeque<QueuedCommand>,
    dirty: BTreeSet<TypeId>,

    send: Sender<Update>,
    recv: Receiver<Update>,

    cancel: CancellationToken,
    generation: u64,

    #[cfg(not(target_arch = "wasm32"))]
    tasks: tokio::task::JoinSet<TaskId>,
}

impl Default for StateCtx {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for StateCtx {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let states: Vec<&str> = self.states.values().map(|s| s.type_name()).collect();
        let computes: Vec<&str> = self.computes.values().map(|c| c.type_name()).collect();
        f.debug_struct("StateCtx")
            .field("states", &states)
            .field("computes", &computes)
            .field("commands", &self.commands.values().collect::<Vec<_>>())
            .field("queued", &self.queue.len())
            .field("tasks", &self.task_count())
            .finish_non_exhaustive()
    }
}

impl StateCtx {
    pub fn new() -> Self {
        let (send, recv) = flume::unbounded();

        Self {
            states: BTreeMap::new(),
            computes: BTreeMap::new(),
            commands: BTreeMap::new(),
            queue: VecDeque::new(),
            dirty: BTreeSet::new(),
            send,
            recv,
            cancel: CancellationToken::new(),
            generation: 0,
            #[cfg(not(target_arch = "wasm32"))]
            tasks: tokio::task::JoinSet::new(),
        }
    }

    pub fn add_state<T: State>(&mut self, state: T) {
        let id = TypeId::of::<T>();
        self.states.insert(id, Box::new(state));
        self.dirty.insert(id);
    }

    pub fn record_compute<T: Compute>(&mut self, compute: T) {
        let id = TypeId::of::<T>();
        self.computes.insert(id, Box::new(compute));
        self.dirty.insert(id);
    }

    pub fn record_command<C: Command>(&mut self, command: C) {
        self.commands.insert(TypeId::of::<C>(), Box::new(command));
    }

    pub fn try_state<T: State>(&self) -> Result<&T, StateError> {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|slot| slot.as_any().downcast_ref::<T>())
            .ok_or(StateError::StateNotFound {
                type_name: type_name::<T>(),
            })
    }

    /// # Panics
    /// Panics if `T` was never registered with `add_state`.
    pub fn state<T: State>(&self) -> &T {
        match self.try_state::<T>() {
            Ok(state) => state,
            Err(err) => panic!("{err}"),
        }
    }

    /// Mutable access to a state. The state is marked dirty.
    ///
    /// # Panics
    /// Panics if `T` was never registered with `add_state`.
    pub fn state_mut<T: State>(&mut self) -> &mut T {
        let id = TypeId::of::<T>();
        self.dirty.insert(id);
        self.states
            .get_mut(&id)
            .and_then(|slot| slot.as_any_mut().downcast_mut::<T>())
            .unwrap_or_else(|| panic!("State not found: {}", type_name::<T>()))
    }

    pub fn update<T: State>(&mut self, f: impl FnOnce(&mut T)) {
        f(self.state_mut::<T>());
    }

    pub fn try_cached<T: Compute>(&self) -> Result<&T, StateError> {
        self.computes
            .get(&TypeId::of::<T>())
            .and_then(|slot| slot.as_any().downcast_ref::<T>())
            .ok_or(StateError::ComputeNotFound {
                type_name: type_name::<T>(),
            })
    }

    pub fn cached<T: Compute>(&self) -> Option<&T> {
        self.try_cached::<T>().ok()
    }

    pub fn updater(&self) -> Updater {
        Updater::new(self.send.clone())
    }

    fn snapshot(&self) -> CommandSnapshot {
        let mut snap = CommandSnapshot::new();
        for (id, slot) in &self.states {
            snap.insert_cloned(*id, slot.snapshot());
        }
        for (id, slot) in &self.computes {
            snap.insert_cloned(*id, slot.snapshot());
        }
        snap
    }

    /// Queue `C` with a snapshot of the current states and computes.
    ///
    /// Nothing runs until [`StateCtx::flush_commands`].
    pub fn enqueue_command<C: Command>(&mut self) {
        if let Err(err) = self.try_enqueue_command::<C>() {
            error!("enqueue_command: {err}");
        }
    }

    pub fn try_enqueue_command<C: Command>(&mut self) -> Result<TaskId, StateError> {
        let type_id = TypeId::of::<C>();
        if !self.commands.contains_key(&type_id) {
            return Err(StateError::CommandNotFound {
                type_name: type_name::<C>(),
            });
        }

        self.generation += 1;
        let id = TaskId::new(type_id, type_name::<C>(), self.generation);
        let snap = self.snapshot();
        self.queue.push_back(QueuedCommand { id, snap });
        Ok(id)
    }

    /// Spawn every queued command.
    pub fn flush_commands(&mut self) {
        while let Some(QueuedCommand { id, snap }) = self.queue.pop_front() {
            let Some(command) = self.commands.get(&id.type_id()) else {
                continue;
            };
            let future = command.run(snap, self.updater(), self.cancel.child_token());
            self.spawn(id, future);
        }
    }

    /// Enqueue and immediately flush `C`.
    pub fn dispatch<C: Command>(&mut self) {
        self.enqueue_command::<C>();
        self.flush_commands();
    }

    pub fn pending_commands(&self) -> usize {
        self.queue.len()
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn spawn(&mut self, id: TaskId, future: CommandFuture) {
        if tokio::runtime::Handle::try_current().is_err() {
            error!("No Tokio runtime entered, dropping command {id}");
            return;
        }
        debug!("Spawning command {id}");
        self.tasks.spawn(async move {
            future.await;
            id
        });
    }

    #[cfg(target_arch = "wasm32")]
    fn spawn(&mut self, id: TaskId, future: CommandFuture) {
        debug!("Spawning command {id}");
        wasm_bindgen_futures::spawn_local(async move {
            future.await;
            debug!("Command {id} finished");
        });
    }

    /// Apply every write sent through an [`Updater`] since the last call.
    ///
    /// Updated slots are marked dirty so dependent computes rerun.
    pub fn sync_computes(&mut self) {
        let Self {
            states,
            computes,
            dirty,
            recv,
            ..
        } = self;

        for update in recv.try_iter() {
            let id = update.id();
            let name = update.name();
            let slot: &mut dyn StateSlot = if let Some(slot) = states.get_mut(&id) {
                slot.as_mut()
            } else if let Some(slot) = computes.get_mut(&id) {
                slot.as_state_slot_mut()
            } else {
                warn!("sync_computes: {name} is not registered, dropping update");
                continue;
            };

            match update {
                Update::Replace { value, .. } => {
                    if !slot.assign_box(value) {
                        warn!("sync_computes: type mismatch while assigning {name}");
                        continue;
                    }
                }
                Update::Mutate { apply, .. } => apply(slot.as_any_mut()),
            }
            dirty.insert(id);
        }
    }

    /// Run every compute that is dirty itself or depends on a dirty state.
    pub fn run_computed(&mut self) {
        if self.dirty.is_empty() {
            return;
        }

        let dirty = std::mem::take(&mut self.dirty);
        let updater = self.updater();
        for (id, compute) in &self.computes {
            let should_run =
                dirty.contains(id) || compute.deps().iter().any(|dep| dirty.contains(dep));
            if should_run {
                compute.run(Dep::new(&self.states), updater.clone());
            }
        }
    }

    pub fn is_dirty<T: State>(&self) -> bool {
        self.dirty.contains(&TypeId::of::<T>())
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    #[cfg(target_arch = "wasm32")]
    pub fn task_count(&self) -> usize {
        0
    }

    /// Forget tasks that have already finished, without waiting.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn reap_finished(&mut self) {
        while let Some(joined) = self.tasks.try_join_next() {
            match joined {
                Ok(id) => debug!("Command {id} finished"),
                Err(err) => error!("Command task failed: {err}"),
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn reap_finished(&mut self) {}

    /// Flush queued commands and wait for every spawned task, syncing after
    /// each one completes.
    #[cfg(not(target_arch = "wasm32"))]
    pub async fn flush_and_await(&mut self) {
        self.sync_computes();
        self.flush_commands();

        while let Some(joined) = self.tasks.join_next().await {
            match joined {
                Ok(id) => debug!("Command {id} finished"),
                Err(err) => error!("Command task failed: {err}"),
            }
            self.sync_computes();
        }

        self.sync_computes();
    }

    /// Cancel the shared token and abort every in-flight task.
    pub async fn shutdown(&mut self) {
        self.cancel.cancel();
        self.queue.clear();
        #[cfg(not(target_arch = "wasm32"))]
        self.tasks.shutdown().await;
    }
}
