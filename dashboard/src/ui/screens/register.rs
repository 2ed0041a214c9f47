//! # Registration Screen

use crate::app::state::{AppState, Screen};
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;
use crate::ui::UiAction;
use egui;
use shared::UserRole;

/// Roles a visitor can sign up as. Admin accounts are provisioned
/// server-side.
const SIGNUP_ROLES: &[UserRole] = &[UserRole::Donor, UserRole::Recipient, UserRole::Delivery];

pub fn render(ui: &mut egui::Ui, state: &mut AppState, actions: &mut Vec<UiAction>) {
    let theme = Theme::default();

    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        forms::render_form_heading(ui, "CREATE ACCOUNT", &theme);

        forms::render_text_input(
            ui,
            "First name:",
            &mut state.register.first_name,
            "Ada",
            false,
            [260.0, 30.0],
        );
        ui.add_space(6.0);
        forms::render_text_input(
            ui,
            "Last name:",
            &mut state.register.last_name,
            "Okafor",
            false,
            [260.0, 30.0],
        );
        ui.add_space(6.0);
        forms::render_text_input(
            ui,
            "Email:",
            &mut state.register.email,
            "you@example.com",
            false,
            [260.0, 30.0],
        );
        ui.add_space(6.0);
        forms::render_text_input(
            ui,
            "Phone:",
            &mut state.register.phone_number,
            "+91 98765 43210",
            false,
            [260.0, 30.0],
        );
        ui.add_space(6.0);
        forms::render_text_input(
            ui,
            "Password:",
            &mut state.register.password,
            "At least 8 characters",
            true,
            [260.0, 30.0],
        );
        ui.add_space(6.0);

        ui.label("Role:");
        egui::ComboBox::from_id_salt("register_role")
            .selected_text(state.register.role.label())
            .width(260.0)
            .show_ui(ui, |ui| {
                for role in SIGNUP_ROLES {
                    ui.selectable_value(&mut state.register.role, *role, role.label());
                }
            });
        ui.add_space(6.0);

        forms::render_text_input(
            ui,
            "Blood type (optional):",
            &mut state.register.blood_type,
            "O-",
            false,
            [260.0, 30.0],
        );
        ui.add_space(12.0);

        if let Some(error) = &state.register.error {
            forms::render_error(ui, error, &theme);
        }

        ui.horizontal(|ui| {
            ui.set_width(260.0);
            let label = if state.register.submitting {
                "Creating..."
            } else {
                "Create account"
            };
            let clicked = forms::render_button(
                ui,
                label,
                Some(theme.selected),
                Some(egui::vec2(140.0, 32.0)),
            )
            .clicked();
            if clicked && !state.register.submitting {
                actions.push(UiAction::RegisterSubmit);
            }

            ui.add_space(8.0);
            if ui.button("Back to sign in").clicked() {
                actions.push(UiAction::Navigate(Screen::Login));
            }
        });
    });
}
