//! # Notifications Screen
//!
//! The notification feed. The list is REST data; realtime signals only
//! mark it stale, and the refetch happens in the tick loop.

use crate::app::state::AppState;
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;
use crate::ui::UiAction;
use egui;
use shared::NotificationCategory;

pub fn render(ui: &mut egui::Ui, state: &mut AppState, actions: &mut Vec<UiAction>) {
    let theme = Theme::default();

    ui.horizontal(|ui| {
        ui.heading("Notifications");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Mark all read").clicked() {
                actions.push(UiAction::MarkAllRead);
            }
            let unread = state.notifications.unread();
            if unread > 0 {
                ui.colored_label(theme.selected, format!("{} unread", unread));
            }
        });
    });
    ui.add_space(8.0);

    if let Some(error) = &state.notifications.error {
        forms::render_error(ui, error, &theme);
    }
    if state.notifications.fetching && state.notifications.items.is_empty() {
        ui.colored_label(theme.dim, "Loading...");
        return;
    }
    if state.notifications.items.is_empty() {
        ui.colored_label(theme.dim, "Nothing here yet");
        return;
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        for notification in &state.notifications.items {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.horizontal(|ui| {
                    let category_color = match notification.category {
                        NotificationCategory::Alert => theme.error,
                        NotificationCategory::Reminder => theme.warning,
                        NotificationCategory::Update => theme.info,
                        NotificationCategory::Assignment => theme.success,
                    };
                    ui.colored_label(category_color, notification.category.label());
                    let title = if notification.is_read {
                        egui::RichText::new(&notification.title)
                    } else {
                        egui::RichText::new(&notification.title).strong()
                    };
                    ui.label(title);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.colored_label(
                            theme.dim,
                            notification.created_at.format("%Y-%m-%d %H:%M").to_string(),
                        );
                        if !notification.is_read && ui.button("Mark read").clicked() {
                            actions.push(UiAction::MarkRead(notification.id.clone()));
                        }
                    });
                });
                ui.colored_label(theme.dim, &notification.message);
            });
            ui.add_space(4.0);
        }
    });
}
