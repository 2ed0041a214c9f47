//! # Overview Screen
//!
//! Aggregate counts per entity, plus donor pool availability for the
//! roles that consume blood.

use crate::app::state::AppState;
use crate::ui::theme::Theme;
use crate::ui::widgets::tables;
use crate::ui::UiAction;
use egui;
use shared::CountBucket;

pub fn render(ui: &mut egui::Ui, state: &mut AppState, _actions: &mut Vec<UiAction>) {
    let theme = Theme::default();

    ui.heading("Overview");
    ui.add_space(8.0);

    if state.overview.loading && state.overview.overview.is_none() {
        ui.colored_label(theme.dim, "Loading...");
        return;
    }
    if let Some(error) = &state.overview.error {
        ui.colored_label(theme.error, error);
        ui.add_space(6.0);
    }

    let Some(overview) = state.overview.overview.clone() else {
        ui.colored_label(theme.dim, "No data yet");
        return;
    };

    ui.columns(4, |columns| {
        bucket_card(&mut columns[0], "Users", &overview.users, &theme);
        bucket_card(&mut columns[1], "Requests", &overview.requests, &theme);
        bucket_card(&mut columns[2], "Deliveries", &overview.deliveries, &theme);
        bucket_card(&mut columns[3], "Appointments", &overview.appointments, &theme);
    });

    if let Some(availability) = &state.overview.availability {
        ui.add_space(16.0);
        ui.separator();
        ui.add_space(8.0);
        ui.label(
            egui::RichText::new("Donor pool")
                .strong()
                .color(theme.selected),
        );
        ui.horizontal(|ui| {
            ui.colored_label(
                theme.success,
                format!("{} available", availability.availability.available),
            );
            ui.separator();
            ui.colored_label(
                theme.dim,
                format!("{} unavailable", availability.availability.unavailable),
            );
        });

        if !availability.top_donors.is_empty() {
            ui.add_space(8.0);
            tables::list_grid("top_donors").show(ui, |ui| {
                tables::header_row(ui, &["Donor", "Blood type", "Donations"], &theme);
                for donor in &availability.top_donors {
                    ui.label(format!("{} {}", donor.first_name, donor.last_name));
                    ui.label(donor.blood_type.as_deref().unwrap_or("-"));
                    let donations = donor
                        .donor_profile
                        .as_ref()
                        .and_then(|p| p.total_donations)
                        .unwrap_or(0);
                    ui.label(donations.to_string());
                    ui.end_row();
                }
            });
        }
    }
}

/// One card of `{ key: count }` buckets with a total line.
fn bucket_card(ui: &mut egui::Ui, title: &str, buckets: &[CountBucket], theme: &Theme) {
    let total: u64 = buckets.iter().map(|b| b.count).sum();
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.label(egui::RichText::new(title).strong().color(theme.selected));
        ui.label(egui::RichText::new(total.to_string()).heading());
        for bucket in buckets {
            ui.horizontal(|ui| {
                ui.colored_label(theme.dim, &bucket.key);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(bucket.count.to_string());
                });
            });
        }
    });
}
