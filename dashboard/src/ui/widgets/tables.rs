//! # Table Components
//!
//! Grid helpers shared by the list screens.

use crate::ui::theme::Theme;
use egui;

/// Render a header row of column labels inside a grid.
pub fn header_row(ui: &mut egui::Ui, columns: &[&str], theme: &Theme) {
    for column in columns {
        ui.label(
            egui::RichText::new(*column)
                .strong()
                .color(theme.selected),
        );
    }
    ui.end_row();
}

/// Render a placeholder row for an empty list.
pub fn empty_row(ui: &mut egui::Ui, message: &str, theme: &Theme) {
    ui.colored_label(theme.dim, message);
    ui.end_row();
}

/// Striped grid with the standard spacing for list screens.
pub fn list_grid(id: &str) -> egui::Grid {
    egui::Grid::new(id.to_owned())
        .striped(true)
        .spacing([16.0, 6.0])
        .min_col_width(60.0)
}
