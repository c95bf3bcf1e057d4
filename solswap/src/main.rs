//! SolSwap entrypoint: native window hosting the swap terminal.

use solswap::app::App;
use solswap::ui;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const WINDOW_TITLE: &str = "SolSwap";
/// Repaint cadence while idle so timers and task events keep flowing
/// even without user input.
const IDLE_REPAINT: Duration = Duration::from_millis(250);

struct SolSwapApp {
    app: App,
}

impl eframe::App for SolSwapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.app.on_tick();
        ui::render(ctx, &mut self.app);
        ctx.request_repaint_after(IDLE_REPAINT);
    }
}

fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([520.0, 760.0])
            .with_min_inner_size([440.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|_cc| {
            let app = App::new().map_err(|e| -> Box<dyn std::error::Error + Send + Sync> {
                format!("failed to initialize: {e}").into()
            })?;
            Ok(Box::new(SolSwapApp { app }))
        }),
    )
}
