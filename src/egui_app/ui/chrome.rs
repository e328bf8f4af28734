use super::style;
use super::*;
use crate::telemetry::classify;
use eframe::egui::StrokeKind;

const APP_VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

const FEATURES: [(&str, &str); 3] = [
    (
        "Real-time Analysis",
        "Instant network status prediction using machine learning",
    ),
    (
        "Multi-Protocol Support",
        "TCP, UDP and ICMP traffic with per-device context",
    ),
    (
        "Accurate Predictions",
        "Trained on historical network telemetry",
    ),
];

const HOW_IT_WORKS: [(&str, &str); 3] = [
    (
        "Input Data",
        "Enter network parameters like IP addresses, latency, and error rates",
    ),
    (
        "AI Analysis",
        "The prediction service analyzes patterns in your network data",
    ),
    (
        "Get Results",
        "Receive instant predictions about potential network issues",
    ),
];

/// Issue tokens the service can return, in display order.
const SUPPORTED_ISSUES: [&str; 4] = ["device_failure", "packet_loss", "latency_spike", "none"];

impl EguiApp {
    pub(super) fn render_header(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::top("header")
            .frame(
                Frame::new()
                    .fill(palette.bg_secondary)
                    .stroke(style::section_stroke())
                    .inner_margin(Margin::symmetric(16, 10)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new("NetPredict")
                            .size(20.0)
                            .strong()
                            .color(palette.accent),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let about = &mut self.controller.ui.about_open;
                        let label = if *about { "Hide About" } else { "About" };
                        if ui.selectable_label(*about, label).clicked() {
                            *about = !*about;
                        }
                    });
                });
            });
    }

    pub(super) fn render_about(&mut self, ui: &mut egui::Ui) {
        if !self.controller.ui.about_open {
            return;
        }
        let palette = style::palette();
        Frame::new()
            .fill(palette.bg_secondary)
            .stroke(style::section_stroke())
            .corner_radius(10.0)
            .inner_margin(Margin::same(18))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new("About NetPredict").size(20.0).strong());
                ui.label(
                    RichText::new(
                        "Machine learning predictions of network issues before they disrupt \
                         your operations.",
                    )
                    .color(palette.text_muted),
                );
                ui.add_space(10.0);
                for (title, body) in FEATURES {
                    ui.label(RichText::new(title).strong().color(palette.accent));
                    ui.label(RichText::new(body).color(palette.text_muted));
                    ui.add_space(4.0);
                }
                ui.separator();
                ui.label(RichText::new("How It Works").size(16.0).strong());
                for (step, (title, body)) in HOW_IT_WORKS.into_iter().enumerate() {
                    ui.horizontal_wrapped(|ui| {
                        ui.label(RichText::new(format!("{}.", step + 1)).strong());
                        ui.label(RichText::new(title).strong());
                        ui.label(RichText::new(body).color(palette.text_muted));
                    });
                }
                ui.separator();
                ui.label(RichText::new("Supported Predictions").size(16.0).strong());
                for token in SUPPORTED_ISSUES {
                    let classification = classify(token);
                    let color = style::tone_color(classification.tone);
                    ui.horizontal_wrapped(|ui| {
                        ui.label(RichText::new(classification.icon.glyph()).color(color));
                        ui.label(RichText::new(&classification.label).strong().color(color));
                        ui.label(
                            RichText::new(classification.description).color(palette.text_muted),
                        );
                    });
                }
            });
    }

    pub(super) fn render_status(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::bottom("status_bar")
            .frame(
                Frame::new()
                    .fill(palette.bg_primary)
                    .stroke(style::section_stroke())
                    .inner_margin(Margin::symmetric(8, 4)),
            )
            .show(ctx, |ui| {
                let status = &self.controller.ui.status;
                ui.horizontal(|ui| {
                    ui.add_space(6.0);
                    let (badge_rect, _) =
                        ui.allocate_exact_size(egui::vec2(16.0, 16.0), egui::Sense::hover());
                    ui.painter()
                        .rect_filled(badge_rect, 0.0, style::status_badge_color(status.tone));
                    ui.painter().rect_stroke(
                        badge_rect,
                        0.0,
                        style::inner_border(),
                        StrokeKind::Inside,
                    );
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new(status.tone.badge_label()).color(palette.text_primary),
                    );
                    ui.separator();
                    ui.label(RichText::new(&status.text).color(palette.text_primary));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new(APP_VERSION).color(palette.text_muted));
                    });
                });
            });
    }
}
