//! Identifiers for spawned command tasks.

use std::any::TypeId;
use std::fmt::{Display, Formatter};

/// Identifies one spawned command run.
///
/// `type_id` names the command type; `generation` increases with every spawn
/// from the same `StateCtx`, so two runs of the same command are told apart in
/// logs even when they overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId {
    type_id: TypeId,
    name: &'static str,
    generation: u64,
}

impl TaskId {
    pub fn new(type_id: TypeId, name: &'static str, generation: u64) -> Self {
        Self {
            type_id,
            name,
            generation,
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let short = self.name.rsplit("::").next().unwrap_or(self.name);
        write!(f, "{short}#{}", self.generation)
    }
}
