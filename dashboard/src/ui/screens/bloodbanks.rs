//! # Blood Banks Screen
//!
//! Searchable blood bank directory with inventory, plus the admin
//! registration form.

use crate::app::state::{AppState, Screen};
use crate::ui::theme::Theme;
use crate::ui::widgets::{forms, tables};
use crate::ui::UiAction;
use egui;
use shared::UserRole;

pub fn render(ui: &mut egui::Ui, state: &mut AppState, actions: &mut Vec<UiAction>) {
    let theme = Theme::default();
    let role = state.role();

    ui.horizontal(|ui| {
        ui.heading("Blood Banks");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Refresh").clicked() {
                actions.push(UiAction::LoadScreen(Screen::BloodBanks));
            }
        });
    });
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        let response = forms::render_text_input(
            ui,
            "Search:",
            &mut state.blood_banks.search,
            "Name or city",
            false,
            [220.0, 26.0],
        );
        let submit = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if ui.button("Search").clicked() || submit {
            actions.push(UiAction::BloodBankSearch);
        }
    });
    ui.add_space(8.0);

    if role == Some(UserRole::Admin) {
        render_admin_form(ui, state, actions, &theme);
        ui.add_space(12.0);
        ui.separator();
        ui.add_space(8.0);
    }

    if let Some(error) = &state.blood_banks.error {
        forms::render_error(ui, error, &theme);
    }
    if state.blood_banks.loading && state.blood_banks.items.is_empty() {
        ui.colored_label(theme.dim, "Loading...");
        return;
    }

    tables::list_grid("blood_banks").show(ui, |ui| {
        tables::header_row(ui, &["Name", "Contact", "Address", "Inventory"], &theme);
        if state.blood_banks.items.is_empty() {
            tables::empty_row(ui, "No blood banks found", &theme);
        }
        for bank in &state.blood_banks.items {
            ui.label(&bank.name);
            ui.label(bank.contact_number.as_deref().unwrap_or("-"));
            ui.label(bank.address.as_deref().unwrap_or("-"));
            if bank.inventory.is_empty() {
                ui.colored_label(theme.dim, "-");
            } else {
                let summary = bank
                    .inventory
                    .iter()
                    .map(|item| format!("{} x{}", item.blood_type, item.units_available))
                    .collect::<Vec<_>>()
                    .join(", ");
                ui.label(summary);
            }
            ui.end_row();
        }
    });
}

fn render_admin_form(
    ui: &mut egui::Ui,
    state: &mut AppState,
    actions: &mut Vec<UiAction>,
    theme: &Theme,
) {
    ui.label(
        egui::RichText::new("Register blood bank")
            .strong()
            .color(theme.selected),
    );
    ui.add_space(4.0);
    ui.horizontal(|ui| {
        forms::render_text_input(
            ui,
            "Name:",
            &mut state.blood_banks.form.name,
            "Central Blood Bank",
            false,
            [180.0, 26.0],
        );
        forms::render_text_input(
            ui,
            "Phone:",
            &mut state.blood_banks.form.contact_number,
            "+91...",
            false,
            [130.0, 26.0],
        );
        forms::render_text_input(
            ui,
            "Email:",
            &mut state.blood_banks.form.email,
            "",
            false,
            [160.0, 26.0],
        );
        forms::render_text_input(
            ui,
            "Address:",
            &mut state.blood_banks.form.address,
            "",
            false,
            [200.0, 26.0],
        );
        let label = if state.blood_banks.form.submitting {
            "Saving..."
        } else {
            "Register"
        };
        if forms::render_button(ui, label, Some(theme.selected), None).clicked()
            && !state.blood_banks.form.submitting
        {
            actions.push(UiAction::BloodBankSubmit);
        }
    });
    if let Some(error) = &state.blood_banks.form.error {
        forms::render_error(ui, error, theme);
    }
}
