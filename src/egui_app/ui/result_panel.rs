use eframe::egui::{self, Color32, Frame, Margin, RichText, Stroke};

use super::EguiApp;
use super::style;
use crate::egui_app::controller::PredictionOutcome;
use crate::telemetry::IssueClassification;

impl EguiApp {
    pub(super) fn render_result_panel(&mut self, ui: &mut egui::Ui) {
        let dismissed = match self.controller.outcome() {
            PredictionOutcome::Succeeded { .. } => self
                .controller
                .classification()
                .is_some_and(|classification| render_classification(ui, &classification)),
            PredictionOutcome::Failed { message } => render_error(ui, message),
            PredictionOutcome::Idle | PredictionOutcome::Pending => false,
        };
        if dismissed {
            self.controller.dismiss_result();
        }
    }
}

fn tinted_frame(color: Color32) -> Frame {
    Frame::new()
        .fill(style::translucent(color, 0.2))
        .stroke(Stroke::new(1.0, style::translucent(color, 0.3)))
        .corner_radius(10.0)
        .inner_margin(Margin::same(16))
}

/// Title row with a dismiss button; returns true when dismissed.
fn title_row(ui: &mut egui::Ui, icon: &str, title: &str, color: Color32) -> bool {
    let mut dismissed = false;
    ui.horizontal(|ui| {
        ui.label(RichText::new(icon).size(20.0).color(color));
        ui.label(RichText::new(title).size(18.0).strong().color(color));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.small_button("✖").on_hover_text("Dismiss").clicked() {
                dismissed = true;
            }
        });
    });
    dismissed
}

fn render_classification(ui: &mut egui::Ui, classification: &IssueClassification) -> bool {
    let color = style::tone_color(classification.tone);
    ui.add_space(16.0);
    tinted_frame(color)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            let dismissed = title_row(ui, classification.icon.glyph(), "Prediction Result", color);
            ui.add_space(6.0);
            ui.horizontal_wrapped(|ui| {
                ui.label(RichText::new("Issue Type:").color(color));
                ui.label(RichText::new(&classification.label).strong().color(color));
            });
            ui.horizontal_wrapped(|ui| {
                ui.label(RichText::new("Description:").color(color));
                ui.label(RichText::new(classification.description).color(color));
            });
            dismissed
        })
        .inner
}

fn render_error(ui: &mut egui::Ui, message: &str) -> bool {
    let color = style::error_color();
    ui.add_space(16.0);
    tinted_frame(color)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            let dismissed = title_row(ui, "⚠", "Prediction Error", color);
            ui.add_space(6.0);
            ui.label(RichText::new(message).color(color));
            dismissed
        })
        .inner
}
