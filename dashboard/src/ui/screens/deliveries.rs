//! # Deliveries Screen
//!
//! Delivery list for couriers and admins: courier assignment, status
//! transitions, and the tracking log for the selected delivery.

use crate::app::state::{AppState, Screen};
use crate::ui::theme::Theme;
use crate::ui::widgets::{forms, tables};
use crate::ui::UiAction;
use egui;
use shared::{DeliveryStatus, UserRole};

pub fn render(ui: &mut egui::Ui, state: &mut AppState, actions: &mut Vec<UiAction>) {
    let theme = Theme::default();
    let role = state.role();

    ui.horizontal(|ui| {
        ui.heading("Deliveries");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Refresh").clicked() {
                actions.push(UiAction::LoadScreen(Screen::Deliveries));
            }
        });
    });
    ui.add_space(8.0);

    if role == Some(UserRole::Admin) {
        render_assign_form(ui, state, actions, &theme);
        ui.add_space(12.0);
        ui.separator();
        ui.add_space(8.0);
    }

    if let Some(error) = &state.deliveries.error {
        forms::render_error(ui, error, &theme);
    }
    if state.deliveries.loading && state.deliveries.items.is_empty() {
        ui.colored_label(theme.dim, "Loading...");
        return;
    }

    let items = state.deliveries.items.clone();
    let busy = state.deliveries.busy_delivery.clone();
    let selected = state.deliveries.selected.clone();
    tables::list_grid("deliveries").show(ui, |ui| {
        tables::header_row(
            ui,
            &["Request", "Courier", "Status", "Tracking", "Actions"],
            &theme,
        );
        if items.is_empty() {
            tables::empty_row(ui, "No deliveries", &theme);
        }
        for delivery in &items {
            ui.label(format!(
                "{} x{}",
                delivery.request_id.blood_type, delivery.request_id.units_needed
            ));
            match &delivery.delivery_person_id {
                Some(courier) => ui.label(courier.full_name()),
                None => ui.label("-"),
            };
            ui.label(delivery.status.label());
            ui.label(format!("{} events", delivery.tracking.len()));

            ui.horizontal(|ui| {
                let row_busy = busy.as_deref() == Some(delivery.id.as_str());
                if row_busy {
                    ui.colored_label(theme.dim, "...");
                } else {
                    for next in next_statuses(delivery.status) {
                        if ui.button(next.label()).clicked() {
                            actions.push(UiAction::DeliveryStatus(delivery.id.clone(), *next));
                        }
                    }
                }
                let is_selected = selected.as_deref() == Some(delivery.id.as_str());
                if ui.selectable_label(is_selected, "Log").clicked() {
                    actions.push(UiAction::SelectDelivery(delivery.id.clone()));
                }
            });
            ui.end_row();
        }
    });

    if let Some(selected_id) = &selected {
        if let Some(delivery) = items.iter().find(|d| d.id == *selected_id) {
            render_tracking(ui, state, actions, delivery, &theme);
        }
    }
}

/// Allowed forward transitions from a delivery status.
fn next_statuses(status: DeliveryStatus) -> &'static [DeliveryStatus] {
    match status {
        DeliveryStatus::PendingPickup => {
            &[DeliveryStatus::InTransit, DeliveryStatus::Cancelled]
        }
        DeliveryStatus::InTransit => &[DeliveryStatus::Delivered, DeliveryStatus::Cancelled],
        DeliveryStatus::Delivered | DeliveryStatus::Cancelled => &[],
    }
}

fn render_assign_form(
    ui: &mut egui::Ui,
    state: &mut AppState,
    actions: &mut Vec<UiAction>,
    theme: &Theme,
) {
    ui.label(
        egui::RichText::new("Assign courier")
            .strong()
            .color(theme.selected),
    );
    ui.add_space(4.0);
    ui.horizontal(|ui| {
        forms::render_text_input(
            ui,
            "Request id:",
            &mut state.deliveries.form.request_id,
            "",
            false,
            [200.0, 26.0],
        );
        forms::render_text_input(
            ui,
            "Courier id:",
            &mut state.deliveries.form.courier_id,
            "",
            false,
            [200.0, 26.0],
        );
        let label = if state.deliveries.form.submitting {
            "Assigning..."
        } else {
            "Assign"
        };
        if forms::render_button(ui, label, Some(theme.selected), None).clicked()
            && !state.deliveries.form.submitting
        {
            actions.push(UiAction::DeliverySubmit);
        }
    });
    if let Some(error) = &state.deliveries.form.error {
        forms::render_error(ui, error, theme);
    }
}

/// Tracking log plus the append form for the selected delivery.
fn render_tracking(
    ui: &mut egui::Ui,
    state: &mut AppState,
    actions: &mut Vec<UiAction>,
    delivery: &shared::Delivery,
    theme: &Theme,
) {
    ui.add_space(16.0);
    ui.separator();
    ui.add_space(8.0);
    ui.label(
        egui::RichText::new("Tracking log")
            .strong()
            .color(theme.selected),
    );

    if delivery.tracking.is_empty() {
        ui.colored_label(theme.dim, "No tracking events yet");
    }
    for event in &delivery.tracking {
        ui.horizontal(|ui| {
            ui.colored_label(theme.dim, event.timestamp.format("%Y-%m-%d %H:%M").to_string());
            ui.label(&event.status);
            if let Some(notes) = &event.notes {
                ui.colored_label(theme.dim, notes);
            }
        });
    }

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        forms::render_text_input(
            ui,
            "Status:",
            &mut state.deliveries.tracking.status,
            "Picked up from blood bank",
            false,
            [220.0, 26.0],
        );
        forms::render_text_input(
            ui,
            "Notes:",
            &mut state.deliveries.tracking.notes,
            "",
            false,
            [220.0, 26.0],
        );
        if ui.button("Add event").clicked() {
            actions.push(UiAction::TrackingSubmit);
        }
    });
}
