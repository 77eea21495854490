use std::time::Duration;

use chrono::Utc;
use usertable_business::{LoadUsersCompute, NotificationCompute};
use usertable_states::Time;

use crate::{state::State, widgets};

/// Polling interval while requests or a notification are pending.
const PENDING_REPAINT: Duration = Duration::from_millis(100);

#[derive(bon::Builder)]
pub struct UserTableApp {
    pub state: State,
    /// When set, `Time` is left alone so tests can drive it.
    #[builder(default)]
    manual_time_control: bool,
}

impl UserTableApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self {
            state,
            manual_time_control: false,
        }
    }

    fn has_pending_work(&self) -> bool {
        let ctx = &self.state.ctx;
        ctx.task_count() > 0
            || ctx.pending_commands() > 0
            || ctx
                .cached::<NotificationCompute>()
                .is_some_and(|n| n.current().is_some())
            || ctx
                .cached::<LoadUsersCompute>()
                .is_some_and(LoadUsersCompute::is_loading)
    }
}

impl eframe::App for UserTableApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.manual_time_control {
            self.state.ctx.update::<Time>(|t| *t.as_mut() = Utc::now());
        }

        // Apply finished command results before rendering.
        self.state.ctx.reap_finished();
        self.state.ctx.sync_computes();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("CRUD App");
            ui.add_space(8.0);
            widgets::toast(&self.state.ctx, ui);
            ui.add_space(8.0);
            widgets::users_panel(&mut self.state.ctx, ui);
        });

        self.state.ctx.run_computed();
        self.state.ctx.flush_commands();

        if self.has_pending_work() {
            ctx.request_repaint_after(PENDING_REPAINT);
        }
    }
}
