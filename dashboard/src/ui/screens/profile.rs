//! # Profile Screen
//!
//! Editable profile fields, notification preferences, and the donor
//! health journal.

use crate::app::state::AppState;
use crate::ui::theme::Theme;
use crate::ui::widgets::{forms, tables};
use crate::ui::UiAction;
use egui;
use shared::UserRole;

pub fn render(ui: &mut egui::Ui, state: &mut AppState, actions: &mut Vec<UiAction>) {
    let theme = Theme::default();
    let role = state.role();

    ui.heading("Profile");
    ui.add_space(8.0);

    if let Some(user) = &state.session.user {
        ui.horizontal(|ui| {
            ui.colored_label(theme.dim, &user.email);
            ui.separator();
            ui.colored_label(theme.dim, user.role.label());
            if user.is_verified.unwrap_or(false) {
                ui.separator();
                ui.colored_label(theme.success, "Verified");
            }
        });
        ui.add_space(8.0);
    }

    forms::render_text_input(
        ui,
        "First name:",
        &mut state.profile.first_name,
        "",
        false,
        [260.0, 28.0],
    );
    ui.add_space(4.0);
    forms::render_text_input(
        ui,
        "Last name:",
        &mut state.profile.last_name,
        "",
        false,
        [260.0, 28.0],
    );
    ui.add_space(4.0);
    forms::render_text_input(
        ui,
        "Phone:",
        &mut state.profile.phone_number,
        "+91 98765 43210",
        false,
        [260.0, 28.0],
    );
    ui.add_space(4.0);
    forms::render_text_input(
        ui,
        "Blood type:",
        &mut state.profile.blood_type,
        "O-",
        false,
        [80.0, 28.0],
    );
    ui.add_space(8.0);

    if role == Some(UserRole::Donor) {
        ui.checkbox(&mut state.profile.available, "Available to donate");
        ui.add_space(4.0);
    }

    ui.label(
        egui::RichText::new("Notifications")
            .strong()
            .color(theme.selected),
    );
    ui.checkbox(&mut state.profile.emergency_alerts, "Emergency alerts");
    ui.checkbox(&mut state.profile.email_updates, "Email updates");
    ui.checkbox(&mut state.profile.sms_updates, "SMS updates");
    ui.add_space(8.0);

    if let Some(error) = &state.profile.error {
        forms::render_error(ui, error, &theme);
    }
    if let Some(message) = &state.profile.message {
        forms::render_info(ui, message, &theme);
    }

    let label = if state.profile.submitting {
        "Saving..."
    } else {
        "Save profile"
    };
    if forms::render_button(ui, label, Some(theme.selected), None).clicked()
        && !state.profile.submitting
    {
        actions.push(UiAction::ProfileSave);
    }

    if role == Some(UserRole::Donor) {
        ui.add_space(16.0);
        ui.separator();
        ui.add_space(8.0);
        render_health_journal(ui, state, actions, &theme);
    }
}

/// Self-reported health readings between donations.
fn render_health_journal(
    ui: &mut egui::Ui,
    state: &mut AppState,
    actions: &mut Vec<UiAction>,
    theme: &Theme,
) {
    ui.label(
        egui::RichText::new("Health journal")
            .strong()
            .color(theme.selected),
    );
    ui.add_space(4.0);

    ui.horizontal(|ui| {
        forms::render_text_input(
            ui,
            "Hb (g/dL):",
            &mut state.profile.health_form.hemoglobin,
            "13.5",
            false,
            [60.0, 26.0],
        );
        forms::render_text_input(
            ui,
            "Sys:",
            &mut state.profile.health_form.systolic,
            "120",
            false,
            [50.0, 26.0],
        );
        forms::render_text_input(
            ui,
            "Dia:",
            &mut state.profile.health_form.diastolic,
            "80",
            false,
            [50.0, 26.0],
        );
        forms::render_text_input(
            ui,
            "Pulse:",
            &mut state.profile.health_form.pulse,
            "70",
            false,
            [50.0, 26.0],
        );
        forms::render_text_input(
            ui,
            "Weight (kg):",
            &mut state.profile.health_form.weight,
            "72",
            false,
            [60.0, 26.0],
        );
    });
    ui.horizontal(|ui| {
        forms::render_text_input(
            ui,
            "Notes:",
            &mut state.profile.health_form.notes,
            "",
            false,
            [300.0, 26.0],
        );
        let label = if state.profile.health_form.submitting {
            "Recording..."
        } else {
            "Record"
        };
        if forms::render_button(ui, label, Some(theme.selected), None).clicked()
            && !state.profile.health_form.submitting
        {
            actions.push(UiAction::HealthSubmit);
        }
    });
    if let Some(error) = &state.profile.health_form.error {
        forms::render_error(ui, error, theme);
    }

    ui.add_space(8.0);
    if state.profile.health_loading && state.profile.health.is_empty() {
        ui.colored_label(theme.dim, "Loading...");
        return;
    }
    tables::list_grid("health_journal").show(ui, |ui| {
        tables::header_row(
            ui,
            &["Recorded", "Hb", "BP", "Pulse", "Weight", "Notes"],
            theme,
        );
        if state.profile.health.is_empty() {
            tables::empty_row(ui, "No readings yet", theme);
        }
        for metric in &state.profile.health {
            match metric.recorded_at {
                Some(at) => ui.label(at.format("%Y-%m-%d").to_string()),
                None => ui.label("-"),
            };
            match metric.hemoglobin {
                Some(hb) => ui.label(format!("{:.1}", hb)),
                None => ui.label("-"),
            };
            match (metric.blood_pressure_systolic, metric.blood_pressure_diastolic) {
                (Some(sys), Some(dia)) => ui.label(format!("{:.0}/{:.0}", sys, dia)),
                _ => ui.label("-"),
            };
            match metric.pulse {
                Some(pulse) => ui.label(format!("{:.0}", pulse)),
                None => ui.label("-"),
            };
            match metric.weight {
                Some(weight) => ui.label(format!("{:.1}", weight)),
                None => ui.label("-"),
            };
            ui.label(metric.notes.as_deref().unwrap_or("-"));
            ui.end_row();
        }
    });
}
