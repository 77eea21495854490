use usertable_business::{BusinessConfig, UserTableController};
use usertable_states::StateCtx;

/// The main application state.
///
/// Owns the [`StateCtx`]; widgets receive it by reference.
pub struct State {
    /// The state context for business logic.
    pub ctx: StateCtx,
}

impl Default for State {
    fn default() -> Self {
        Self::with_config(BusinessConfig::default())
    }
}

impl State {
    /// State wired to a mock server at `base_url`.
    pub fn test(base_url: String) -> Self {
        Self::with_config(BusinessConfig::new(base_url))
    }

    /// Register everything and queue the startup load.
    pub fn with_config(config: BusinessConfig) -> Self {
        let mut ctx = StateCtx::new();
        UserTableController::register(&mut ctx, config);
        UserTableController::new(&mut ctx).load();

        Self { ctx }
    }

    pub fn controller(&mut self) -> UserTableController<'_> {
        UserTableController::new(&mut self.ctx)
    }
}
