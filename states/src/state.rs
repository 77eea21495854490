use std::any::{Any, type_name};
use std::fmt::Debug;

/// A value registered in [`crate::StateCtx`].
///
/// States are plain data: the UI reads them every frame and mutates them
/// through `state_mut` / `update`. Commands only ever see a cloned snapshot,
/// so every state must be `Clone + Send`.
pub trait State: Any + Clone + Debug + Send {}

/// Type-erased storage slot for a registered state or compute.
pub(crate) trait StateSlot {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Clone the value into a `Send` box for a command snapshot.
    fn snapshot(&self) -> Box<dyn Any + Send>;

    /// Replace the value with `new_self`. Returns `false` on a type mismatch.
    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) -> bool;

    fn type_name(&self) -> &'static str;
}

impl<T: State> StateSlot for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Box<dyn Any + Send> {
        Box::new(self.clone())
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) -> bool {
        match new_self.downcast::<T>() {
            Ok(value) => {
                *self = *value;
                true
            }
            Err(_) => false,
        }
    }

    fn type_name(&self) -> &'static str {
        type_name::<T>()
    }
}
