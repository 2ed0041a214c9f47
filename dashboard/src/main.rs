//! # LifeLink Dashboard - Entry Point
//!
//! Sets up tracing and the tokio runtime, then hands the window over to
//! eframe. Background tasks spawn onto the runtime entered here; the UI
//! thread stays inside egui's frame loop.

use dashboard::app::App;
use dashboard::ui::{self, theme::Theme};
use tracing_subscriber::EnvFilter;

struct DashboardApp {
    app: App,
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.app.on_tick();
        ui::render_root(ctx, &self.app);
        // Background tasks finish between frames; keep ticking even
        // without input so their events get drained promptly.
        ctx.request_repaint_after(std::time::Duration::from_millis(250));
    }
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let runtime = tokio::runtime::Runtime::new().expect("failed to create tokio runtime");
    // Keep the runtime context entered for the lifetime of the UI thread
    // so handlers can tokio::spawn directly.
    let _guard = runtime.enter();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([960.0, 600.0])
            .with_title("LifeLink Dashboard"),
        ..Default::default()
    };

    eframe::run_native(
        "LifeLink Dashboard",
        options,
        Box::new(|cc| {
            Theme::apply(&cc.egui_ctx);
            Ok(Box::new(DashboardApp { app: App::new() }))
        }),
    )
}
