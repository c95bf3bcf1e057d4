//! # Swap Screen
//!
//! Sell/buy panels, pair flip, quote details, and the execute button.

use crate::app::App;
use crate::ui::{theme, Snapshot};
use crate::utils::format;
use lib_solana::tokens::TokenCatalog;

const EXPLORER_URL: &str = "https://solscan.io/tx";

/// Render the swap form.
pub fn render(ui: &mut egui::Ui, snap: &Snapshot, app: &mut App) {
    ui.vertical_centered(|ui| {
        ui.set_max_width(420.0);

        render_sell_panel(ui, snap, app);
        ui.add_space(4.0);
        ui.vertical_centered(|ui| {
            if ui.button("⇅").on_hover_text("Flip pair").clicked() {
                app.on_flip_pair();
            }
        });
        ui.add_space(4.0);
        render_buy_panel(ui, snap, app);

        ui.add_space(8.0);
        render_quote_details(ui, snap);
        ui.add_space(8.0);
        render_swap_button(ui, snap, app);

        if let Some(signature) = &snap.swap.tx_signature {
            ui.add_space(8.0);
            render_signature(ui, signature);
        }

        ui.add_space(16.0);
        ui.separator();
        render_price_strip(ui, snap);
    });
}

/// "≈ $…" line under an amount field. Skipped when the amount does not
/// parse or no price is known.
fn usd_value_line(ui: &mut egui::Ui, snap: &Snapshot, amount: &str, symbol: &str) {
    let Ok(amount) = amount.trim().parse::<f64>() else {
        return;
    };
    let Some(price) = snap.prices.get(symbol) else {
        return;
    };
    ui.colored_label(
        theme::DIM,
        format!("≈ {}", format::format_usd(amount * price.price_usd)),
    );
}

fn balance_line(ui: &mut egui::Ui, snap: &Snapshot, symbol: &str) {
    if snap.wallet.is_some() {
        let balance = snap.balances.get(symbol).copied().unwrap_or(0.0);
        ui.colored_label(
            theme::DIM,
            format!("Balance: {}", format::format_balance(balance)),
        );
    }
}

fn token_selector(
    ui: &mut egui::Ui,
    id_salt: &str,
    selected: &str,
    excluded: &str,
) -> Option<&'static str> {
    let mut picked = None;
    egui::ComboBox::from_id_salt(id_salt)
        .selected_text(selected.to_string())
        .show_ui(ui, |ui| {
            for token in TokenCatalog::all() {
                if token.symbol == excluded {
                    continue;
                }
                if ui
                    .selectable_label(token.symbol == selected, token.symbol)
                    .clicked()
                {
                    picked = Some(token.symbol);
                }
            }
        });
    picked
}

fn render_sell_panel(ui: &mut egui::Ui, snap: &Snapshot, app: &mut App) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.colored_label(theme::DIM, "You pay");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                balance_line(ui, snap, &snap.swap.sell_token);
            });
        });
        ui.horizontal(|ui| {
            let mut amount = snap.swap.sell_amount.clone();
            let response = ui.add(
                egui::TextEdit::singleline(&mut amount)
                    .hint_text("0.0")
                    .desired_width(200.0),
            );
            if response.changed() {
                app.on_sell_amount_changed(amount);
            }
            if snap.wallet.is_some() && ui.small_button("MAX").clicked() {
                app.on_max_clicked();
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if let Some(symbol) =
                    token_selector(ui, "sell_token", &snap.swap.sell_token, &snap.swap.buy_token)
                {
                    app.on_sell_token_selected(symbol);
                }
            });
        });
        usd_value_line(ui, snap, &snap.swap.sell_amount, &snap.swap.sell_token);
    });
}

fn render_buy_panel(ui: &mut egui::Ui, snap: &Snapshot, app: &mut App) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.colored_label(theme::DIM, "You receive");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                balance_line(ui, snap, &snap.swap.buy_token);
            });
        });
        ui.horizontal(|ui| {
            if snap.swap.quote_loading {
                ui.spinner();
                ui.colored_label(theme::DIM, "Fetching quote...");
            } else if snap.swap.buy_amount.is_empty() {
                ui.colored_label(theme::DIM, "0.0");
            } else {
                ui.label(&snap.swap.buy_amount);
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if let Some(symbol) =
                    token_selector(ui, "buy_token", &snap.swap.buy_token, &snap.swap.sell_token)
                {
                    app.on_buy_token_selected(symbol);
                }
            });
        });
        usd_value_line(ui, snap, &snap.swap.buy_amount, &snap.swap.buy_token);
    });
}

fn render_quote_details(ui: &mut egui::Ui, snap: &Snapshot) {
    let Some(quote) = &snap.swap.quote else {
        return;
    };
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        if let Some(rate) = exchange_rate(snap) {
            ui.horizontal(|ui| {
                ui.colored_label(theme::DIM, "Rate");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.colored_label(
                        theme::DIM,
                        format!(
                            "1 {} ≈ {:.6} {}",
                            snap.swap.sell_token, rate, snap.swap.buy_token
                        ),
                    );
                });
            });
        }
        ui.horizontal(|ui| {
            ui.colored_label(theme::DIM, "Price impact");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let impact = quote.price_impact() * 100.0;
                let color = if impact > 1.0 {
                    theme::NEGATIVE
                } else {
                    theme::DIM
                };
                ui.colored_label(color, format!("{:.2}%", impact));
            });
        });
        ui.horizontal(|ui| {
            ui.colored_label(theme::DIM, "Slippage tolerance");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.colored_label(theme::DIM, format!("{}%", snap.settings.slippage_pct));
            });
        });
        if let Some(hops) = quote
            .extra
            .get("routePlan")
            .and_then(|v| v.as_array())
            .map(|plan| plan.len())
        {
            ui.horizontal(|ui| {
                ui.colored_label(theme::DIM, "Route");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.colored_label(theme::DIM, format!("{} hop(s)", hops));
                });
            });
        }
    });
}

/// Buy units per sell unit, from the quote's own amounts.
fn exchange_rate(snap: &Snapshot) -> Option<f64> {
    let quote = snap.swap.quote.as_ref()?;
    let sell = TokenCatalog::by_symbol(&snap.swap.sell_token)?;
    let buy = TokenCatalog::by_symbol(&snap.swap.buy_token)?;
    let in_units: u64 = quote.in_amount.parse().ok()?;
    let out_units = quote.out_amount_units()?;
    if in_units == 0 {
        return None;
    }
    let in_display = lib_solana::tokens::from_base_units(in_units, sell.decimals);
    let out_display = lib_solana::tokens::from_base_units(out_units, buy.decimals);
    Some(out_display / in_display)
}

fn render_swap_button(ui: &mut egui::Ui, snap: &Snapshot, app: &mut App) {
    let (label, enabled) = if snap.wallet.is_none() {
        ("Connect wallet to swap", false)
    } else if snap.swap.swapping {
        ("Swapping...", false)
    } else if snap.swap.quote.is_none() {
        ("Enter an amount", false)
    } else {
        ("Swap", true)
    };

    let button = egui::Button::new(label).min_size(egui::vec2(ui.available_width(), 36.0));
    if ui.add_enabled(enabled, button).clicked() {
        app.on_execute_swap();
    }
}

fn render_signature(ui: &mut egui::Ui, signature: &str) {
    ui.horizontal(|ui| {
        ui.colored_label(theme::POSITIVE, "Swap confirmed:");
        ui.hyperlink_to(
            format::short_pubkey(signature),
            format!("{EXPLORER_URL}/{signature}"),
        );
    });
}

fn render_price_strip(ui: &mut egui::Ui, snap: &Snapshot) {
    ui.horizontal_wrapped(|ui| {
        for token in TokenCatalog::all() {
            let Some(quote) = snap.prices.get(token.symbol) else {
                continue;
            };
            ui.group(|ui| {
                ui.vertical(|ui| {
                    ui.strong(token.symbol);
                    ui.label(format::format_usd(quote.price_usd));
                    ui.colored_label(
                        theme::change_color(quote.change_24h),
                        format::format_change(quote.change_24h),
                    );
                });
            });
        }
    });
}
