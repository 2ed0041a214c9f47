//! # Navigation Rail
//!
//! Left-hand navigation filtered by the logged-in user's role.

use crate::app::state::{AppState, Screen};
use crate::ui::theme::Theme;
use crate::ui::UiAction;
use egui;

/// Render the navigation rail. Emits `Navigate` and `Logout` actions.
pub fn render(ui: &mut egui::Ui, state: &AppState, actions: &mut Vec<UiAction>) {
    let theme = Theme::default();
    let Some(role) = state.role() else {
        return;
    };

    ui.add_space(8.0);
    ui.label(
        egui::RichText::new("LIFELINK")
            .heading()
            .strong()
            .color(theme.selected),
    );
    ui.colored_label(theme.dim, role.label());
    ui.add_space(8.0);
    ui.separator();

    for screen in Screen::nav_order() {
        if !screen.visible_for(role) {
            continue;
        }
        let selected = state.current_screen == *screen;
        let mut label = screen.title().to_string();
        // Unread badge on the feed entry.
        if *screen == Screen::Notifications {
            let unread = state.notifications.unread();
            if unread > 0 {
                label = format!("{} ({})", label, unread);
            }
        }
        if ui.selectable_label(selected, label).clicked() && !selected {
            actions.push(UiAction::Navigate(*screen));
        }
    }

    ui.add_space(12.0);
    ui.separator();
    if ui.button("Sign out").clicked() {
        actions.push(UiAction::Logout);
    }
}
