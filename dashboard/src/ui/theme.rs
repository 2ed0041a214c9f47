//! # GUI Theme
//!
//! Dark theme with red, white, and black colors for egui. High contrast
//! with the red accent doing double duty as the blood-service brand color.

use egui::Theme as EguiTheme;
use egui::{Color32, Context, Stroke, Visuals};

/// Application color palette.
#[derive(Clone)]
pub struct Theme {
    /// Near-black background
    pub background: Color32,
    /// Slightly lifted panel fill
    pub panel: Color32,
    /// Normal text color
    pub normal: Color32,
    /// Selected/highlighted items (brand red)
    pub selected: Color32,
    /// Dimmed/secondary text
    pub dim: Color32,
    /// Success/positive
    pub success: Color32,
    /// Error/negative
    pub error: Color32,
    /// Warning/attention
    pub warning: Color32,
    /// Information
    pub info: Color32,
    /// Border color
    pub border: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color32::from_rgb(10, 10, 12),
            panel: Color32::from_rgb(18, 18, 22),
            normal: Color32::from_rgb(235, 235, 235),
            selected: Color32::from_rgb(204, 0, 51),
            dim: Color32::from_rgb(150, 150, 150),
            success: Color32::from_rgb(0, 200, 100),
            error: Color32::from_rgb(255, 60, 60),
            warning: Color32::from_rgb(255, 170, 0),
            info: Color32::from_rgb(100, 150, 255),
            border: Color32::from_rgb(51, 51, 51),
        }
    }
}

impl Theme {
    /// Color for an urgency level badge.
    pub fn urgency_color(&self, urgency: shared::Urgency) -> Color32 {
        match urgency {
            shared::Urgency::Low => self.dim,
            shared::Urgency::Medium => self.info,
            shared::Urgency::High => self.warning,
            shared::Urgency::Critical => self.error,
        }
    }

    /// Build the egui `Visuals` for the dashboard.
    pub fn visuals(&self) -> Visuals {
        let mut visuals = Visuals::dark();

        visuals.override_text_color = Some(self.normal);
        visuals.panel_fill = self.background;
        visuals.window_fill = self.panel;
        visuals.window_stroke = Stroke::new(1.0, self.border);
        visuals.faint_bg_color = self.panel;
        visuals.extreme_bg_color = Color32::from_rgb(5, 5, 6);

        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, self.border);
        visuals.widgets.inactive.bg_fill = self.panel;
        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, self.border);
        visuals.widgets.hovered.bg_fill = Color32::from_rgb(51, 0, 13);
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.5, self.selected);
        visuals.widgets.active.bg_fill = Color32::from_rgb(102, 0, 26);
        visuals.widgets.active.bg_stroke = Stroke::new(1.5, self.selected);

        visuals.selection.bg_fill = Color32::from_rgba_unmultiplied(204, 0, 51, 76);
        visuals.selection.stroke = Stroke::new(1.5, self.selected);
        visuals.hyperlink_color = self.info;

        visuals
    }

    /// Apply the theme to an egui context.
    ///
    /// Uses `style_mut_of`, the safe way to modify styles in egui 0.33.
    pub fn apply(ctx: &Context) {
        let theme = Theme::default();
        let visuals = theme.visuals();
        ctx.style_mut_of(EguiTheme::Dark, |style| {
            style.visuals = visuals.clone();
            style.spacing.item_spacing = egui::Vec2::new(6.0, 4.0);
            style.spacing.button_padding = egui::Vec2::new(10.0, 5.0);
            style.spacing.indent = 12.0;
        });
    }
}
