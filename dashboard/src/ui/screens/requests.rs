//! # Blood Requests Screen
//!
//! Request list with the matching lifecycle, the recipient's create form,
//! and a nearby-donor side panel for recipients.

use crate::app::state::{AppState, Screen};
use crate::app::RequestAction;
use crate::ui::theme::Theme;
use crate::ui::widgets::{forms, tables};
use crate::ui::UiAction;
use egui;
use shared::{RequestStatus, Urgency, UserRole};

pub fn render(ui: &mut egui::Ui, state: &mut AppState, actions: &mut Vec<UiAction>) {
    let theme = Theme::default();
    let role = state.role();

    ui.horizontal(|ui| {
        ui.heading("Blood Requests");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Refresh").clicked() {
                actions.push(UiAction::LoadScreen(Screen::Requests));
            }
        });
    });
    ui.add_space(8.0);

    if role == Some(UserRole::Recipient) {
        render_create_form(ui, state, actions, &theme);
        ui.add_space(12.0);
        ui.separator();
        ui.add_space(8.0);
    }

    if let Some(error) = &state.requests.error {
        forms::render_error(ui, error, &theme);
    }
    if state.requests.loading && state.requests.items.is_empty() {
        ui.colored_label(theme.dim, "Loading...");
        return;
    }

    let items = state.requests.items.clone();
    let busy = state.requests.busy_request.clone();
    tables::list_grid("requests").show(ui, |ui| {
        tables::header_row(
            ui,
            &["Blood type", "Units", "Urgency", "Status", "Recipient", "Actions"],
            &theme,
        );
        if items.is_empty() {
            tables::empty_row(ui, "No requests", &theme);
        }
        for request in &items {
            ui.label(&request.blood_type);
            ui.label(request.units_needed.to_string());
            ui.colored_label(theme.urgency_color(request.urgency), request.urgency.label());
            ui.label(request.status.label());
            ui.label(request.recipient_id.full_name());

            ui.horizontal(|ui| {
                let row_busy = busy.as_deref() == Some(request.id.as_str());
                if row_busy {
                    ui.colored_label(theme.dim, "...");
                } else {
                    render_row_actions(ui, role, request, actions);
                }
            });
            ui.end_row();
        }
    });

    if role == Some(UserRole::Recipient) {
        render_nearby_panel(ui, state, &theme);
    }
}

/// Lifecycle buttons for one request row, gated by role and status.
fn render_row_actions(
    ui: &mut egui::Ui,
    role: Option<UserRole>,
    request: &shared::BloodRequest,
    actions: &mut Vec<UiAction>,
) {
    let pending = request.status == RequestStatus::Pending;
    let matched = request.status == RequestStatus::Matched;

    if matches!(role, Some(UserRole::Recipient) | Some(UserRole::Admin)) {
        if pending && ui.button("Match").clicked() {
            actions.push(UiAction::RequestAction(
                request.id.clone(),
                RequestAction::Match,
            ));
        }
        if pending
            && request.urgency != Urgency::Critical
            && ui.button("Escalate").clicked()
        {
            actions.push(UiAction::RequestAction(
                request.id.clone(),
                RequestAction::Escalate,
            ));
        }
    }
    if role == Some(UserRole::Donor) && matched {
        if ui.button("Accept").clicked() {
            actions.push(UiAction::RequestAction(
                request.id.clone(),
                RequestAction::Accept,
            ));
        }
        if ui.button("Decline").clicked() {
            actions.push(UiAction::RequestAction(
                request.id.clone(),
                RequestAction::Decline,
            ));
        }
    }
}

fn render_create_form(
    ui: &mut egui::Ui,
    state: &mut AppState,
    actions: &mut Vec<UiAction>,
    theme: &Theme,
) {
    ui.label(
        egui::RichText::new("New request")
            .strong()
            .color(theme.selected),
    );
    ui.add_space(4.0);

    ui.horizontal(|ui| {
        forms::render_text_input(
            ui,
            "Blood type:",
            &mut state.requests.form.blood_type,
            "O-",
            false,
            [60.0, 26.0],
        );
        forms::render_text_input(
            ui,
            "Units:",
            &mut state.requests.form.units,
            "1",
            false,
            [50.0, 26.0],
        );
        ui.label("Urgency:");
        egui::ComboBox::from_id_salt("request_urgency")
            .selected_text(state.requests.form.urgency.label())
            .show_ui(ui, |ui| {
                for urgency in Urgency::all() {
                    ui.selectable_value(
                        &mut state.requests.form.urgency,
                        *urgency,
                        urgency.label(),
                    );
                }
            });
    });
    ui.horizontal(|ui| {
        forms::render_text_input(
            ui,
            "Hospital:",
            &mut state.requests.form.hospital_name,
            "General Hospital",
            false,
            [180.0, 26.0],
        );
        forms::render_text_input(
            ui,
            "Address:",
            &mut state.requests.form.hospital_address,
            "12 Broad St",
            false,
            [220.0, 26.0],
        );
    });
    forms::render_text_input(
        ui,
        "Notes:",
        &mut state.requests.form.notes,
        "",
        false,
        [466.0, 26.0],
    );
    ui.add_space(6.0);

    if let Some(error) = &state.requests.form.error {
        forms::render_error(ui, error, theme);
    }
    let label = if state.requests.form.submitting {
        "Submitting..."
    } else {
        "Submit request"
    };
    if forms::render_button(ui, label, Some(theme.selected), None).clicked()
        && !state.requests.form.submitting
    {
        actions.push(UiAction::RequestSubmit);
    }
}

/// Compatible donors near the recipient, ranked by the backend.
fn render_nearby_panel(ui: &mut egui::Ui, state: &AppState, theme: &Theme) {
    ui.add_space(16.0);
    ui.separator();
    ui.add_space(8.0);
    ui.label(
        egui::RichText::new("Nearby donors")
            .strong()
            .color(theme.selected),
    );

    if state.requests.nearby_loading {
        ui.colored_label(theme.dim, "Searching...");
        return;
    }
    if state.requests.nearby.is_empty() {
        ui.colored_label(theme.dim, "No compatible donors nearby");
        return;
    }

    tables::list_grid("nearby_donors").show(ui, |ui| {
        tables::header_row(ui, &["Donor", "Blood type", "Distance", "Score"], theme);
        for donor in &state.requests.nearby {
            ui.label(donor.user.full_name());
            ui.label(donor.user.blood_type.as_deref().unwrap_or("-"));
            match donor.distance_km {
                Some(km) => ui.label(format!("{:.1} km", km)),
                None => ui.label("-"),
            };
            match donor.compatibility_score {
                Some(score) => ui.label(format!("{:.0}", score)),
                None => ui.label("-"),
            };
            ui.end_row();
        }
    });
}
