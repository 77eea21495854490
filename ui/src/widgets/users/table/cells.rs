//! Cell rendering functions for the users table.

use egui::{Id, RichText, TextEdit, Ui};
use usertable_business::{UserField, UserId};

/// Widget id of a record's editable cell. Independent of the row position, so
/// focus stays on the record when rows above it go away.
pub fn record_cell_id(id: UserId, field: UserField) -> Id {
    Id::new(("users_table_cell", id, field))
}

/// Widget id of a draft cell in the "add new" row.
pub fn draft_cell_id(field: UserField) -> Id {
    Id::new(("users_table_draft", field))
}

#[inline]
pub fn render_id_cell(ui: &mut Ui, id: UserId) {
    ui.centered_and_justified(|ui| {
        ui.label(RichText::new(id.to_string()).monospace());
    });
}

/// Renders an empty ID cell for the "add new" row.
#[inline]
pub fn render_blank_id_cell(ui: &mut Ui) {
    ui.centered_and_justified(|ui| {
        ui.weak("+");
    });
}

/// Single-line edit over `value`. Returns the new text if it changed this frame.
#[inline]
pub fn render_text_cell(ui: &mut Ui, id: Id, value: &str, hint: Option<&str>) -> Option<String> {
    let mut buffer = value.to_owned();
    let mut edit = TextEdit::singleline(&mut buffer)
        .id(id)
        .desired_width(f32::INFINITY);
    if let Some(hint) = hint {
        edit = edit.hint_text(hint);
    }
    let changed = ui.add(edit).changed();
    changed.then_some(buffer)
}

/// Renders the "Update" and "Delete" buttons.
///
/// Returns `(update_clicked, delete_clicked)`.
#[inline]
pub fn render_record_buttons(ui: &mut Ui) -> (bool, bool) {
    ui.horizontal(|ui| {
        let update = ui.button("Update").clicked();
        let delete = ui.button("Delete").clicked();
        (update, delete)
    })
    .inner
}

/// Renders the "Add User" button. Returns `true` if clicked.
#[inline]
pub fn render_add_button(ui: &mut Ui) -> bool {
    ui.button("Add User").clicked()
}
