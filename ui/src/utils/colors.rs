//! Shared color constants for the UI.

use egui::Color32;
use usertable_business::NotificationKind;

/// Forest green color for success notifications.
pub const COLOR_GREEN: Color32 = Color32::from_rgb(34, 139, 34);

/// Blue color for primary notifications.
pub const COLOR_BLUE: Color32 = Color32::from_rgb(13, 110, 253);

/// Cyan color for informational notifications.
pub const COLOR_CYAN: Color32 = Color32::from_rgb(13, 202, 240);

/// Red color for danger notifications.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Subtle gray for table borders.
pub const TABLE_BORDER_COLOR: Color32 = Color32::from_rgb(200, 200, 200);

pub fn notification_color(kind: NotificationKind) -> Color32 {
    match kind {
        NotificationKind::Success => COLOR_GREEN,
        NotificationKind::Primary => COLOR_BLUE,
        NotificationKind::Info => COLOR_CYAN,
        NotificationKind::Danger => COLOR_RED,
    }
}
