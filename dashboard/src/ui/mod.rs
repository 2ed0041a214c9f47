//! # GUI Rendering
//!
//! Frame rendering pipeline. Screens mutate form fields directly through
//! the state lock and report clicks as [`UiAction`]s, which are dispatched
//! to the handlers after the lock is released. Rendering never performs
//! network work itself.

pub mod screens;
pub mod theme;
pub mod widgets;

use crate::app::state::Screen;
use crate::app::{App, RequestAction};
use crate::session::{decide, RouteDecision};
use crate::ui::theme::Theme;
use egui;
use shared::{AppointmentStatus, DeliveryStatus};

/// A click collected during rendering, dispatched once the state lock is
/// released.
#[derive(Debug, Clone)]
pub enum UiAction {
    Navigate(Screen),
    LoadScreen(Screen),
    LoginSubmit,
    RegisterSubmit,
    OtpVerifySubmit,
    OtpResend,
    Logout,
    RequestSubmit,
    RequestAction(String, RequestAction),
    DeliverySubmit,
    DeliveryStatus(String, DeliveryStatus),
    SelectDelivery(String),
    TrackingSubmit,
    AppointmentSubmit,
    AppointmentStatus(String, AppointmentStatus),
    BloodBankSearch,
    BloodBankSubmit,
    MarkRead(String),
    MarkAllRead,
    ProfileSave,
    HealthSubmit,
}

/// Main render function, called every frame.
pub fn render_root(ctx: &egui::Context, app: &App) {
    let decision = decide(&app.state.read().session);
    let mut actions: Vec<UiAction> = Vec::new();

    {
        let mut state = app.state.write();

        // Protected screens wait for the session probe; `on_tick` starts
        // initialization and handles the redirect.
        if state.current_screen.is_protected()
            && !matches!(decision, RouteDecision::Render)
        {
            egui::CentralPanel::default().show(ctx, |ui| {
                let theme = Theme::default();
                ui.vertical_centered(|ui| {
                    ui.add_space(200.0);
                    ui.label(
                        egui::RichText::new("LIFELINK")
                            .heading()
                            .strong()
                            .color(theme.selected),
                    );
                    ui.add_space(12.0);
                    ui.spinner();
                    ui.colored_label(theme.dim, "Checking your session...");
                });
            });
            return;
        }

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            widgets::status_bar::render(ui, &state);
        });

        let show_nav = state.current_screen.is_protected();
        if show_nav {
            egui::SidePanel::left("nav_rail")
                .resizable(false)
                .default_width(160.0)
                .show(ctx, |ui| {
                    widgets::nav_bar::render(ui, &state, &mut actions);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| match state.current_screen {
            Screen::Login => screens::login::render(ui, &mut state, &mut actions),
            Screen::Register => screens::register::render(ui, &mut state, &mut actions),
            Screen::VerifyOtp => screens::verify_otp::render(ui, &mut state, &mut actions),
            Screen::Overview => screens::overview::render(ui, &mut state, &mut actions),
            Screen::Requests => screens::requests::render(ui, &mut state, &mut actions),
            Screen::Deliveries => screens::deliveries::render(ui, &mut state, &mut actions),
            Screen::Appointments => screens::appointments::render(ui, &mut state, &mut actions),
            Screen::BloodBanks => screens::bloodbanks::render(ui, &mut state, &mut actions),
            Screen::Analytics => screens::analytics::render(ui, &mut state, &mut actions),
            Screen::Notifications => screens::notifications::render(ui, &mut state, &mut actions),
            Screen::Profile => screens::profile::render(ui, &mut state, &mut actions),
        });
    }

    for action in actions {
        dispatch(app, action);
    }
}

/// Route one collected action to its handler.
fn dispatch(app: &App, action: UiAction) {
    match action {
        UiAction::Navigate(screen) => app.navigate(screen),
        UiAction::LoadScreen(screen) => app.load_screen(screen),
        UiAction::LoginSubmit => app.login_submit(),
        UiAction::RegisterSubmit => app.register_submit(),
        UiAction::OtpVerifySubmit => app.otp_verify_submit(),
        UiAction::OtpResend => app.otp_resend(),
        UiAction::Logout => app.logout(),
        UiAction::RequestSubmit => app.request_submit(),
        UiAction::RequestAction(id, request_action) => app.request_action(id, request_action),
        UiAction::DeliverySubmit => app.delivery_submit(),
        UiAction::DeliveryStatus(id, status) => app.delivery_status(id, status),
        UiAction::SelectDelivery(id) => {
            let mut state = app.state.write();
            // Clicking the selected row's log button collapses it.
            if state.deliveries.selected.as_deref() == Some(id.as_str()) {
                state.deliveries.selected = None;
            } else {
                state.deliveries.selected = Some(id);
            }
        }
        UiAction::TrackingSubmit => app.tracking_submit(),
        UiAction::AppointmentSubmit => app.appointment_submit(),
        UiAction::AppointmentStatus(id, status) => app.appointment_status(id, status),
        UiAction::BloodBankSearch => app.blood_bank_search(),
        UiAction::BloodBankSubmit => app.blood_bank_submit(),
        UiAction::MarkRead(id) => app.notification_mark_read(id),
        UiAction::MarkAllRead => app.notification_mark_all_read(),
        UiAction::ProfileSave => app.profile_save(),
        UiAction::HealthSubmit => app.health_submit(),
    }
}
