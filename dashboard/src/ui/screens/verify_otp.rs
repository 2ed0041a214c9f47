//! # OTP Verification Screen
//!
//! Entered after registration; the backend sends a 6-digit code to the
//! user's phone. In demo deployments the code comes back in the response
//! and is surfaced here as a hint.

use crate::app::state::{AppState, Screen};
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;
use crate::ui::UiAction;
use egui;

pub fn render(ui: &mut egui::Ui, state: &mut AppState, actions: &mut Vec<UiAction>) {
    let theme = Theme::default();

    ui.vertical_centered(|ui| {
        ui.add_space(80.0);
        forms::render_form_heading(ui, "VERIFY YOUR PHONE", &theme);

        if let Some(info) = &state.verify.info {
            forms::render_info(ui, info, &theme);
        }
        if let Some(hint) = &state.session.otp_hint {
            forms::render_hint(ui, &format!("Demo code: {}", hint), &theme);
            ui.add_space(6.0);
        }

        forms::render_text_input(
            ui,
            "Email:",
            &mut state.verify.email,
            "you@example.com",
            false,
            [260.0, 30.0],
        );
        ui.add_space(6.0);

        let code_response = forms::render_text_input(
            ui,
            "Code:",
            &mut state.verify.code,
            "6-digit code",
            false,
            [260.0, 30.0],
        );
        let submit = code_response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        ui.add_space(12.0);

        if let Some(error) = &state.verify.error {
            forms::render_error(ui, error, &theme);
        }

        ui.horizontal(|ui| {
            ui.set_width(260.0);
            let label = if state.verify.submitting {
                "Verifying..."
            } else {
                "Verify"
            };
            let clicked = forms::render_button(
                ui,
                label,
                Some(theme.selected),
                Some(egui::vec2(110.0, 32.0)),
            )
            .clicked();
            if (clicked || submit) && !state.verify.submitting {
                actions.push(UiAction::OtpVerifySubmit);
            }

            ui.add_space(8.0);
            if ui.button("Resend code").clicked() {
                actions.push(UiAction::OtpResend);
            }
        });

        ui.add_space(8.0);
        if ui.button("Back to sign in").clicked() {
            actions.push(UiAction::Navigate(Screen::Login));
        }
    });
}
