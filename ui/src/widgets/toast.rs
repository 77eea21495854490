use egui::{Frame, Margin, Response, RichText, Stroke, Ui};
use usertable_business::NotificationCompute;
use usertable_states::StateCtx;

use crate::utils::colors::notification_color;

/// Renders the current notification as a banner, if there is one.
pub fn toast(state_ctx: &StateCtx, ui: &mut Ui) -> Option<Response> {
    let notification = state_ctx.cached::<NotificationCompute>()?.current()?;
    let color = notification_color(notification.kind);

    let response = Frame::NONE
        .fill(color.gamma_multiply(0.15))
        .stroke(Stroke::new(1.0, color))
        .corner_radius(4.0)
        .inner_margin(Margin::symmetric(12, 8))
        .show(ui, |ui| {
            ui.label(RichText::new(&notification.message).color(color).strong());
        })
        .response;

    Some(response)
}
