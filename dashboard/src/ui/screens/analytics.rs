//! # Analytics Screen
//!
//! Admin-only charts and tables: donor leaderboard, recipient success
//! rates, delivery durations, and the user directory.

use crate::app::state::{AppState, Screen};
use crate::ui::theme::Theme;
use crate::ui::widgets::{forms, tables};
use crate::ui::UiAction;
use egui;
use egui_plot::{Bar, BarChart, Plot};

pub fn render(ui: &mut egui::Ui, state: &mut AppState, actions: &mut Vec<UiAction>) {
    let theme = Theme::default();

    ui.horizontal(|ui| {
        ui.heading("Analytics");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Refresh").clicked() {
                actions.push(UiAction::LoadScreen(Screen::Analytics));
            }
        });
    });
    ui.add_space(8.0);

    if let Some(error) = &state.analytics.error {
        forms::render_error(ui, error, &theme);
    }
    if state.analytics.loading && state.analytics.donor_performance.is_none() {
        ui.colored_label(theme.dim, "Loading...");
        return;
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        render_delivery_chart(ui, state, &theme);
        ui.add_space(12.0);
        render_donor_leaderboard(ui, state, &theme);
        ui.add_space(12.0);
        render_recipient_insights(ui, state, &theme);
        ui.add_space(12.0);
        render_user_directory(ui, state, &theme);
    });
}

/// Delivery counts per status as a bar chart.
fn render_delivery_chart(ui: &mut egui::Ui, state: &AppState, theme: &Theme) {
    ui.label(
        egui::RichText::new("Deliveries by status")
            .strong()
            .color(theme.selected),
    );
    if state.analytics.delivery_metrics.is_empty() {
        ui.colored_label(theme.dim, "No delivery data");
        return;
    }

    let bars: Vec<Bar> = state
        .analytics
        .delivery_metrics
        .iter()
        .enumerate()
        .map(|(idx, metric)| {
            Bar::new(idx as f64, metric.count as f64)
                .name(metric.status.clone())
                .width(0.6)
        })
        .collect();

    Plot::new("delivery_metrics")
        .height(160.0)
        .show_axes([false, true])
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new("Deliveries", bars).color(theme.selected));
        });

    tables::list_grid("delivery_metrics_table").show(ui, |ui| {
        tables::header_row(ui, &["Status", "Count", "Avg duration"], theme);
        for metric in &state.analytics.delivery_metrics {
            ui.label(&metric.status);
            ui.label(metric.count.to_string());
            match metric.avg_duration_minutes {
                Some(minutes) => ui.label(format!("{:.0} min", minutes)),
                None => ui.label("-"),
            };
            ui.end_row();
        }
    });
}

fn render_donor_leaderboard(ui: &mut egui::Ui, state: &AppState, theme: &Theme) {
    ui.label(
        egui::RichText::new("Top donors")
            .strong()
            .color(theme.selected),
    );
    let Some(performance) = &state.analytics.donor_performance else {
        ui.colored_label(theme.dim, "No donor data");
        return;
    };

    tables::list_grid("top_donors_analytics").show(ui, |ui| {
        tables::header_row(ui, &["Donor", "Blood type", "Donations", "Last donation"], theme);
        if performance.top_donors.is_empty() {
            tables::empty_row(ui, "No donations recorded", theme);
        }
        for donor in &performance.top_donors {
            ui.label(format!("{} {}", donor.first_name, donor.last_name));
            ui.label(donor.blood_type.as_deref().unwrap_or("-"));
            ui.label(donor.donor_profile.total_donations.to_string());
            match donor.donor_profile.last_donation_date {
                Some(at) => ui.label(at.format("%Y-%m-%d").to_string()),
                None => ui.label("-"),
            };
            ui.end_row();
        }
    });
}

fn render_recipient_insights(ui: &mut egui::Ui, state: &AppState, theme: &Theme) {
    ui.label(
        egui::RichText::new("Recipient success rates")
            .strong()
            .color(theme.selected),
    );
    tables::list_grid("recipient_insights").show(ui, |ui| {
        tables::header_row(ui, &["Recipient", "Requests", "Completed", "Success"], theme);
        if state.analytics.recipient_insights.is_empty() {
            tables::empty_row(ui, "No request history", theme);
        }
        for insight in &state.analytics.recipient_insights {
            ui.label(format!(
                "{} {}",
                insight.recipient.first_name, insight.recipient.last_name
            ));
            ui.label(insight.total_requests.to_string());
            ui.label(insight.completed.to_string());
            let color = if insight.success_rate >= 0.75 {
                theme.success
            } else if insight.success_rate >= 0.4 {
                theme.warning
            } else {
                theme.error
            };
            ui.colored_label(color, format!("{:.0}%", insight.success_rate * 100.0));
            ui.end_row();
        }
    });
}

fn render_user_directory(ui: &mut egui::Ui, state: &AppState, theme: &Theme) {
    ui.label(
        egui::RichText::new("User directory")
            .strong()
            .color(theme.selected),
    );
    tables::list_grid("user_directory").show(ui, |ui| {
        tables::header_row(ui, &["Name", "Email", "Role", "Verified"], theme);
        if state.analytics.users.is_empty() {
            tables::empty_row(ui, "No users", theme);
        }
        for user in &state.analytics.users {
            ui.label(user.full_name());
            ui.label(&user.email);
            ui.label(user.role.label());
            if user.is_verified.unwrap_or(false) {
                ui.colored_label(theme.success, "yes");
            } else {
                ui.colored_label(theme.dim, "no");
            }
            ui.end_row();
        }
    });
    if state.analytics.users_pagination.total > 0 {
        ui.colored_label(
            theme.dim,
            format!(
                "{} of {} users",
                state.analytics.users.len(),
                state.analytics.users_pagination.total
            ),
        );
    }
}
