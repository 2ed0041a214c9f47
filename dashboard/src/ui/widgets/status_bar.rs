//! # Status Bar Widget
//!
//! Bottom status bar showing the session, the notification stream state,
//! and feed freshness.

use crate::app::state::AppState;
use crate::session::SessionStatus;
use crate::ui::theme::Theme;
use egui;

/// Render the status bar at the bottom of the window.
pub fn render(ui: &mut egui::Ui, state: &AppState) {
    let theme = Theme::default();

    ui.horizontal(|ui| {
        // Session
        match (&state.session.status, &state.session.user) {
            (SessionStatus::Authenticated, Some(user)) => {
                ui.colored_label(
                    theme.success,
                    format!("{} {} ({})", user.first_name, user.last_name, user.role.label()),
                );
            }
            (SessionStatus::Loading, _) => {
                ui.colored_label(theme.warning, "Checking session...");
            }
            _ => {
                ui.colored_label(theme.dim, "Signed out");
            }
        }

        ui.separator();

        // Notification stream
        if state.realtime_connected {
            ui.colored_label(theme.success, "● Live");
        } else {
            ui.colored_label(theme.dim, "○ Offline");
        }
        if state.notifications.invalidations > 0 {
            ui.colored_label(
                theme.dim,
                format!("{} signals", state.notifications.invalidations),
            );
        }

        ui.separator();

        // Feed freshness
        if state.notifications.fetching {
            ui.colored_label(theme.warning, "Refreshing feed...");
        } else if let Some(at) = state.notifications.last_fetch {
            let secs = at.elapsed().as_secs();
            let age = if secs < 60 {
                format!("{}s ago", secs)
            } else {
                format!("{}m ago", secs / 60)
            };
            ui.colored_label(theme.dim, format!("Feed: {}", age));
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let unread = state.notifications.unread();
            if unread > 0 {
                ui.colored_label(theme.selected, format!("{} unread", unread));
            }
        });
    });
}
