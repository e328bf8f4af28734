//! egui renderer for the prediction client.

mod chrome;
mod health_badge;
mod prediction_form;
mod result_panel;
pub mod style;

use std::time::Instant;

use eframe::egui::{self, Frame, Margin, RichText};

use crate::config::AppConfig;
use crate::egui_app::controller::EguiController;

/// Smallest window that still fits the two-column form.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::Vec2::new(560.0, 640.0);

/// Renders the egui UI using the shared controller state.
pub struct EguiApp {
    controller: EguiController,
    visuals_set: bool,
    repaint_hooked: bool,
}

impl EguiApp {
    /// Create the app and start probing the prediction service.
    pub fn new(config: AppConfig) -> Self {
        let mut controller = EguiController::new(config);
        controller.start(Instant::now());
        Self {
            controller,
            visuals_set: false,
            repaint_hooked: false,
        }
    }

    fn prepare_frame(&mut self, ctx: &egui::Context) {
        if !self.visuals_set {
            let mut visuals = egui::Visuals::dark();
            style::apply_visuals(&mut visuals);
            ctx.set_visuals(visuals);
            self.visuals_set = true;
        }
        if !self.repaint_hooked {
            let repaint_ctx = ctx.clone();
            self.controller
                .set_repaint_hook(move || repaint_ctx.request_repaint());
            self.repaint_hooked = true;
        }
    }

    fn render_ui(&mut self, ctx: &egui::Context) {
        self.render_header(ctx);
        self.render_status(ctx);
        let palette = style::palette();
        egui::CentralPanel::default()
            .frame(
                Frame::new()
                    .fill(palette.bg_primary)
                    .inner_margin(Margin::symmetric(24, 16)),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.vertical_centered(|ui| {
                            ui.label(
                                RichText::new("Network Status Prediction")
                                    .size(28.0)
                                    .strong()
                                    .color(palette.text_primary),
                            );
                            ui.label(
                                RichText::new(
                                    "Enter network parameters to predict potential issues using AI",
                                )
                                .color(palette.text_muted),
                            );
                            ui.add_space(10.0);
                            self.render_health_badge(ui);
                        });
                        ui.add_space(18.0);
                        self.render_prediction_form(ui);
                        self.render_result_panel(ui);
                        ui.add_space(24.0);
                        self.render_about(ui);
                    });
            });
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.prepare_frame(ctx);
        let now = Instant::now();
        self.controller.tick(now);
        self.render_ui(ctx);
        if let Some(delay) = self.controller.next_wakeup(now) {
            ctx.request_repaint_after(delay);
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.controller.shutdown();
    }
}
