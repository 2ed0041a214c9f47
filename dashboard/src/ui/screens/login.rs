//! # Login Screen

use crate::app::state::{AppState, Screen};
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;
use crate::ui::UiAction;
use egui;

pub fn render(ui: &mut egui::Ui, state: &mut AppState, actions: &mut Vec<UiAction>) {
    let theme = Theme::default();

    ui.vertical_centered(|ui| {
        ui.add_space(80.0);
        forms::render_form_heading(ui, "SIGN IN", &theme);

        forms::render_text_input(
            ui,
            "Email:",
            &mut state.login.email,
            "you@example.com",
            false,
            [260.0, 30.0],
        );
        ui.add_space(8.0);

        let password_response = forms::render_text_input(
            ui,
            "Password:",
            &mut state.login.password,
            "Enter password",
            true,
            [260.0, 30.0],
        );
        let submit =
            password_response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        ui.add_space(12.0);

        if let Some(error) = &state.login.error {
            forms::render_error(ui, error, &theme);
        }

        ui.horizontal(|ui| {
            ui.set_width(260.0);
            let label = if state.login.submitting {
                "Signing in..."
            } else {
                "Sign in"
            };
            let clicked = forms::render_button(
                ui,
                label,
                Some(theme.selected),
                Some(egui::vec2(110.0, 32.0)),
            )
            .clicked();
            if (clicked || submit) && !state.login.submitting {
                actions.push(UiAction::LoginSubmit);
            }

            ui.add_space(8.0);
            if ui.button("Create account").clicked() {
                actions.push(UiAction::Navigate(Screen::Register));
            }
        });

        ui.add_space(8.0);
        forms::render_hint(ui, "Press <Enter> to sign in", &theme);
    });
}
