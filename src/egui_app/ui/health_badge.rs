use eframe::egui::{self, Frame, Margin, RichText, Sense, Stroke};

use super::EguiApp;
use super::style;

impl EguiApp {
    pub(super) fn render_health_badge(&self, ui: &mut egui::Ui) {
        let status = self.controller.health_status();
        let color = style::health_color(status);
        Frame::new()
            .fill(style::translucent(color, 0.2))
            .stroke(Stroke::new(1.0, style::translucent(color, 0.3)))
            .corner_radius(12.0)
            .inner_margin(Margin::symmetric(12, 6))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    let (rect, _) = ui.allocate_exact_size(egui::vec2(10.0, 10.0), Sense::hover());
                    ui.painter().circle_filled(rect.center(), 4.0, color);
                    ui.label(
                        RichText::new(format!("API Status: {}", status.label()))
                            .strong()
                            .color(color),
                    );
                });
            })
            .response
            .on_hover_text(self.controller.config().api_base_url.as_str());
    }
}
