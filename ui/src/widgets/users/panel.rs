//! Main panel for the users table.

use egui::{Align, Frame, Layout, Margin, Response, Stroke, Ui};
use egui_extras::TableBuilder;
use usertable_business::{
    DraftRecord, LoadUsersCompute, UserRecord, UserTableController, UserTableState,
};
use usertable_states::StateCtx;

use super::table::columns::{HEADER_HEIGHT, ROW_HEIGHT, table_columns};
use super::table::header::render_table_header;
use super::table::row::{RowAction, render_draft_row, render_user_row};
use crate::utils::colors::TABLE_BORDER_COLOR;

/// Displays the users table with the "add new" row as its last row.
pub fn users_panel(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    // Render from copies so actions can be applied after the table is drawn.
    let users: Vec<UserRecord> = state_ctx.state::<UserTableState>().users().to_vec();
    let draft: DraftRecord = state_ctx.state::<DraftRecord>().clone();
    let loading = state_ctx
        .cached::<LoadUsersCompute>()
        .is_some_and(LoadUsersCompute::is_loading);

    let mut actions: Vec<RowAction> = Vec::new();

    let response = ui
        .vertical(|ui| {
            if loading {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Loading users...");
                });
            }

            Frame::NONE
                .stroke(Stroke::new(1.0, TABLE_BORDER_COLOR))
                .inner_margin(Margin::same(4))
                .show(ui, |ui| {
                    let mut builder = TableBuilder::new(ui)
                        .id_salt("users_table")
                        .striped(true)
                        .cell_layout(Layout::left_to_right(Align::Center));
                    for column in table_columns() {
                        builder = builder.column(column);
                    }

                    builder
                        .header(HEADER_HEIGHT, |mut header| {
                            render_table_header(&mut header);
                        })
                        .body(|mut body| {
                            for user in &users {
                                body.row(ROW_HEIGHT, |mut row| {
                                    actions.extend(render_user_row(&mut row, user));
                                });
                            }
                            body.row(ROW_HEIGHT, |mut row| {
                                actions.extend(render_draft_row(&mut row, &draft));
                            });
                        });
                });

            if users.is_empty() && !loading {
                ui.weak("No users");
            }
        })
        .response;

    apply_actions(state_ctx, actions);

    response
}

fn apply_actions(state_ctx: &mut StateCtx, actions: Vec<RowAction>) {
    let mut controller = UserTableController::new(state_ctx);
    for action in actions {
        match action {
            RowAction::Edit { id, field, value } => controller.edit_field(id, field, value),
            RowAction::Commit(id) => controller.commit_edit(id),
            RowAction::Remove(id) => controller.remove_record(id),
            RowAction::StageDraft { field, value } => controller.stage_new_record(field, value),
            RowAction::SubmitDraft => controller.submit_new_record(),
        }
    }
}
