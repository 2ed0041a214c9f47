//! # Appointments Screen
//!
//! Donation appointment list with the donor's booking form.

use crate::app::state::{AppState, Screen};
use crate::ui::theme::Theme;
use crate::ui::widgets::{forms, tables};
use crate::ui::UiAction;
use egui;
use shared::{AppointmentStatus, UserRole};

pub fn render(ui: &mut egui::Ui, state: &mut AppState, actions: &mut Vec<UiAction>) {
    let theme = Theme::default();
    let role = state.role();

    ui.horizontal(|ui| {
        ui.heading("Appointments");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Refresh").clicked() {
                actions.push(UiAction::LoadScreen(Screen::Appointments));
            }
        });
    });
    ui.add_space(8.0);

    if role == Some(UserRole::Donor) {
        render_booking_form(ui, state, actions, &theme);
        ui.add_space(12.0);
        ui.separator();
        ui.add_space(8.0);
    }

    if let Some(error) = &state.appointments.error {
        forms::render_error(ui, error, &theme);
    }
    if state.appointments.loading && state.appointments.items.is_empty() {
        ui.colored_label(theme.dim, "Loading...");
        return;
    }

    let items = state.appointments.items.clone();
    let busy = state.appointments.busy_appointment.clone();
    tables::list_grid("appointments").show(ui, |ui| {
        tables::header_row(ui, &["When", "Status", "Notes", "Actions"], &theme);
        if items.is_empty() {
            tables::empty_row(ui, "No appointments", &theme);
        }
        for appointment in &items {
            ui.label(
                appointment
                    .scheduled_at
                    .format("%Y-%m-%d %H:%M UTC")
                    .to_string(),
            );
            ui.label(appointment.status.label());
            ui.label(appointment.notes.as_deref().unwrap_or("-"));

            ui.horizontal(|ui| {
                let row_busy = busy.as_deref() == Some(appointment.id.as_str());
                let scheduled = appointment.status == AppointmentStatus::Scheduled;
                if row_busy {
                    ui.colored_label(theme.dim, "...");
                } else if scheduled {
                    if ui.button("Cancel").clicked() {
                        actions.push(UiAction::AppointmentStatus(
                            appointment.id.clone(),
                            AppointmentStatus::Cancelled,
                        ));
                    }
                    // Outcome recording is an admin concern.
                    if role == Some(UserRole::Admin) {
                        if ui.button("Completed").clicked() {
                            actions.push(UiAction::AppointmentStatus(
                                appointment.id.clone(),
                                AppointmentStatus::Completed,
                            ));
                        }
                        if ui.button("No-show").clicked() {
                            actions.push(UiAction::AppointmentStatus(
                                appointment.id.clone(),
                                AppointmentStatus::NoShow,
                            ));
                        }
                    }
                }
            });
            ui.end_row();
        }
    });
}

fn render_booking_form(
    ui: &mut egui::Ui,
    state: &mut AppState,
    actions: &mut Vec<UiAction>,
    theme: &Theme,
) {
    ui.label(
        egui::RichText::new("Book a donation")
            .strong()
            .color(theme.selected),
    );
    ui.add_space(4.0);
    ui.horizontal(|ui| {
        forms::render_text_input(
            ui,
            "Blood bank id:",
            &mut state.appointments.form.blood_bank_id,
            "",
            false,
            [200.0, 26.0],
        );
        forms::render_text_input(
            ui,
            "When (UTC):",
            &mut state.appointments.form.scheduled_at,
            "2026-09-14T10:30:00Z",
            false,
            [180.0, 26.0],
        );
        forms::render_text_input(
            ui,
            "Notes:",
            &mut state.appointments.form.notes,
            "",
            false,
            [160.0, 26.0],
        );
        let label = if state.appointments.form.submitting {
            "Booking..."
        } else {
            "Book"
        };
        if forms::render_button(ui, label, Some(theme.selected), None).clicked()
            && !state.appointments.form.submitting
        {
            actions.push(UiAction::AppointmentSubmit);
        }
    });
    if let Some(error) = &state.appointments.form.error {
        forms::render_error(ui, error, theme);
    }
}
