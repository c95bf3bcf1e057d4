//! # GUI Rendering
//!
//! Render path: snapshot the display state under a short read lock, then
//! draw without the lock held. Widgets report user actions back through
//! the `App::on_*` methods, which take the write lock themselves.

pub mod settings_window;
pub mod swap_screen;
pub mod theme;

use crate::app::state::{Settings, SwapState};
use crate::app::App;
use lib_solana::prices::PriceQuote;
use std::collections::HashMap;

/// Cheap clone of everything the frame needs to draw.
pub struct Snapshot {
    pub swap: SwapState,
    pub wallet: Option<String>,
    pub balances: HashMap<String, f64>,
    pub prices: HashMap<String, PriceQuote>,
    pub settings: Settings,
    pub show_settings: bool,
    pub swap_error: Option<String>,
}

fn snapshot(app: &App) -> Snapshot {
    let state = app.state().read();
    Snapshot {
        swap: state.swap.clone(),
        wallet: state.wallet.clone(),
        balances: state.balances.clone(),
        prices: state.prices.clone(),
        settings: state.settings.clone(),
        show_settings: state.show_settings,
        swap_error: state.swap_error.clone(),
    }
}

/// Main render function, called every frame.
pub fn render(ctx: &egui::Context, app: &mut App) {
    let snap = snapshot(app);

    egui::CentralPanel::default().show(ctx, |ui| {
        render_header(ui, &snap, app);
        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);
        swap_screen::render(ui, &snap, app);
    });

    if snap.show_settings {
        settings_window::render(ctx, &snap, app);
    }
    if let Some(message) = &snap.swap_error {
        render_error_dialog(ctx, message, app);
    }
}

fn render_header(ui: &mut egui::Ui, snap: &Snapshot, app: &mut App) {
    ui.horizontal(|ui| {
        ui.heading("SolSwap");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("⚙").clicked() {
                app.on_toggle_settings();
            }
            match &snap.wallet {
                Some(pubkey) => {
                    if ui
                        .button(crate::utils::format::short_pubkey(pubkey))
                        .on_hover_text("Disconnect")
                        .clicked()
                    {
                        app.on_disconnect_wallet();
                    }
                }
                None => {
                    if ui.button("Connect Wallet").clicked() {
                        app.on_connect_wallet();
                    }
                }
            }
        });
    });
}

/// Modal-style dialog shown when a swap fails. Nothing else is
/// interactive until it is dismissed.
fn render_error_dialog(ctx: &egui::Context, message: &str, app: &mut App) {
    egui::Window::new("Swap Failed")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.colored_label(theme::NEGATIVE, message);
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                if ui.button("OK").clicked() {
                    app.on_dismiss_error();
                }
            });
        });
}
