//! Row rendering for the users table.
//!
//! Rows never touch state directly; they return what the user did and the
//! panel applies it after the table has been drawn.

use egui::{Stroke, Ui};
use egui_extras::TableRow;
use usertable_business::{DraftRecord, UserField, UserId, UserRecord};

use super::cells::{
    draft_cell_id, record_cell_id, render_add_button, render_blank_id_cell, render_id_cell,
    render_record_buttons, render_text_cell,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowAction {
    Edit {
        id: UserId,
        field: UserField,
        value: String,
    },
    Commit(UserId),
    Remove(UserId),
    StageDraft {
        field: UserField,
        value: String,
    },
    SubmitDraft,
}

/// Renders one record: id, the three editable fields, and the row buttons.
#[inline]
pub fn render_user_row(row: &mut TableRow<'_, '_>, user: &UserRecord) -> Vec<RowAction> {
    let mut actions = Vec::new();

    row.col(|ui| {
        render_id_cell(ui, user.id);
        draw_cell_bottom_border(ui);
    });

    for field in UserField::ALL {
        row.col(|ui| {
            let cell_id = record_cell_id(user.id, field);
            if let Some(value) = render_text_cell(ui, cell_id, user.field(field), None) {
                actions.push(RowAction::Edit {
                    id: user.id,
                    field,
                    value,
                });
            }
            draw_cell_bottom_border(ui);
        });
    }

    row.col(|ui| {
        let (update, delete) = render_record_buttons(ui);
        if update {
            actions.push(RowAction::Commit(user.id));
        }
        if delete {
            actions.push(RowAction::Remove(user.id));
        }
        draw_cell_bottom_border(ui);
    });

    actions
}

/// Renders the "add new" row: hinted inputs bound to the draft and "Add User".
#[inline]
pub fn render_draft_row(row: &mut TableRow<'_, '_>, draft: &DraftRecord) -> Vec<RowAction> {
    let mut actions = Vec::new();

    row.col(render_blank_id_cell);

    for field in UserField::ALL {
        row.col(|ui| {
            let hint = Some(field.placeholder());
            if let Some(value) = render_text_cell(ui, draft_cell_id(field), draft.field(field), hint)
            {
                actions.push(RowAction::StageDraft { field, value });
            }
        });
    }

    row.col(|ui| {
        if render_add_button(ui) {
            actions.push(RowAction::SubmitDraft);
        }
    });

    actions
}

#[inline]
fn draw_cell_bottom_border(ui: &mut Ui) {
    let rect = ui.available_rect_before_wrap();
    let border_color = ui.visuals().widgets.noninteractive.bg_stroke.color;
    ui.painter().hline(
        rect.left()..=rect.right(),
        rect.bottom(),
        Stroke::new(1.0, border_color),
    );
}
