//! # Settings Window
//!
//! Slippage, deadline, RPC endpoint, refresh and sound toggles.

use crate::app::state::RpcEndpoint;
use crate::app::App;
use crate::ui::{theme, Snapshot};

const SLIPPAGE_PRESETS: [f64; 3] = [0.1, 0.5, 1.0];

pub fn render(ctx: &egui::Context, snap: &Snapshot, app: &mut App) {
    let mut open = true;
    egui::Window::new("Settings")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            render_slippage(ui, snap, app);
            ui.add_space(8.0);
            render_deadline(ui, snap, app);
            ui.add_space(8.0);
            render_endpoint(ui, snap, app);
            ui.add_space(8.0);
            render_toggles(ui, snap, app);
            ui.add_space(12.0);
            ui.separator();
            if ui.button("Reset to defaults").clicked() {
                app.on_reset_settings();
            }
        });
    if !open {
        app.on_toggle_settings();
    }
}

fn render_slippage(ui: &mut egui::Ui, snap: &Snapshot, app: &mut App) {
    ui.label("Slippage tolerance");
    ui.horizontal(|ui| {
        for preset in SLIPPAGE_PRESETS {
            let selected = (snap.settings.slippage_pct - preset).abs() < f64::EPSILON;
            if ui.selectable_label(selected, format!("{preset}%")).clicked() {
                app.on_set_slippage(preset);
            }
        }
        let mut custom = snap.settings.slippage_pct;
        let response = ui.add(
            egui::DragValue::new(&mut custom)
                .range(0.1..=50.0)
                .speed(0.1)
                .suffix("%"),
        );
        if response.changed() {
            app.on_set_slippage(custom);
        }
    });
    ui.colored_label(
        theme::DIM,
        "Your transaction reverts if the price moves more than this.",
    );
}

fn render_deadline(ui: &mut egui::Ui, snap: &Snapshot, app: &mut App) {
    ui.label("Transaction deadline");
    ui.horizontal(|ui| {
        let mut minutes = snap.settings.deadline_mins;
        let response = ui.add(
            egui::DragValue::new(&mut minutes)
                .range(1..=60)
                .suffix(" min"),
        );
        if response.changed() {
            app.on_set_deadline(minutes);
        }
    });
}

fn render_endpoint(ui: &mut egui::Ui, snap: &Snapshot, app: &mut App) {
    ui.label("RPC endpoint");
    egui::ComboBox::from_id_salt("rpc_endpoint")
        .selected_text(snap.settings.rpc_endpoint.name())
        .show_ui(ui, |ui| {
            for endpoint in RpcEndpoint::all() {
                let selected = snap.settings.rpc_endpoint == *endpoint;
                let label = format!("{} ({})", endpoint.name(), endpoint.speed());
                if ui.selectable_label(selected, label).clicked() {
                    app.on_set_rpc_endpoint(*endpoint);
                }
            }
        });
}

fn render_toggles(ui: &mut egui::Ui, snap: &Snapshot, app: &mut App) {
    let mut auto_refresh = snap.settings.auto_refresh;
    if ui
        .checkbox(&mut auto_refresh, "Auto-refresh balances and prices")
        .changed()
    {
        app.on_toggle_auto_refresh();
    }
    let mut sound = snap.settings.sound_effects;
    if ui.checkbox(&mut sound, "Sound effects").changed() {
        app.on_toggle_sound_effects();
    }
}
