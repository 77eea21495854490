//! Table header rendering for the users table.

use egui::Ui;
use egui_extras::TableRow;
use usertable_business::UserField;

/// Renders ID, the editable field labels and Action as bold, centered labels.
#[inline]
pub fn render_table_header(header: &mut TableRow<'_, '_>) {
    header.col(|ui| render_header_cell(ui, "ID"));
    for field in UserField::ALL {
        header.col(|ui| render_header_cell(ui, field.label()));
    }
    header.col(|ui| render_header_cell(ui, "Action"));
}

#[inline]
fn render_header_cell(ui: &mut Ui, label: &str) {
    ui.centered_and_justified(|ui| {
        ui.strong(label);
    });
}
