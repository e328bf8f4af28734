use eframe::egui::{self, Frame, Margin, RichText};

use super::EguiApp;
use super::style;
use crate::egui_app::controller::HealthStatus;
use crate::telemetry::{DeviceType, Protocol, SampleField};

impl EguiApp {
    pub(super) fn render_prediction_form(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        Frame::new()
            .fill(palette.bg_secondary)
            .stroke(style::section_stroke())
            .corner_radius(10.0)
            .inner_margin(Margin::same(18))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                let column_width = ((ui.available_width() - 24.0) / 2.0).max(180.0);
                egui::Grid::new("prediction_form_grid")
                    .num_columns(2)
                    .spacing([24.0, 12.0])
                    .min_col_width(column_width)
                    .max_col_width(column_width)
                    .show(ui, |ui| {
                        for row in SampleField::ALL.chunks(2) {
                            for &field in row {
                                ui.vertical(|ui| {
                                    ui.label(RichText::new(field.label()).color(palette.text_muted));
                                    self.render_field_input(ui, field);
                                });
                            }
                            ui.end_row();
                        }
                    });
                ui.add_space(18.0);
                self.render_submit_button(ui);
            });
    }

    fn render_field_input(&mut self, ui: &mut egui::Ui, field: SampleField) {
        match field {
            SampleField::Protocol => {
                let options = Protocol::ALL.map(|protocol| (protocol.as_str(), protocol.as_str()));
                self.render_choice(ui, field, &options);
            }
            SampleField::DeviceType => {
                let options = DeviceType::ALL.map(|device| (device.as_str(), device.label()));
                self.render_choice(ui, field, &options);
            }
            _ => {
                let mut text = self.controller.field_input(field).to_string();
                let response = ui.add(
                    egui::TextEdit::singleline(&mut text)
                        .hint_text(field.placeholder())
                        .desired_width(f32::INFINITY),
                );
                if response.changed() {
                    self.controller.update_field(field, &text);
                }
            }
        }
    }

    fn render_choice(
        &mut self,
        ui: &mut egui::Ui,
        field: SampleField,
        options: &[(&'static str, &'static str)],
    ) {
        let current = self.controller.field_input(field).to_string();
        let selected_text = options
            .iter()
            .find(|(value, _)| *value == current)
            .map(|(_, label)| label.to_string())
            .unwrap_or_else(|| current.clone());
        let mut chosen = current.clone();
        egui::ComboBox::from_id_salt(field.name())
            .selected_text(selected_text)
            .width(ui.available_width())
            .show_ui(ui, |ui| {
                for &(value, label) in options {
                    ui.selectable_value(&mut chosen, value.to_string(), label);
                }
            });
        if chosen != current {
            self.controller.update_field(field, &chosen);
        }
    }

    fn render_submit_button(&mut self, ui: &mut egui::Ui) {
        let pending = self.controller.is_pending();
        let label = if pending {
            "Analyzing Network Data..."
        } else {
            "Predict Network Status"
        };
        let button = egui::Button::new(RichText::new(label).size(16.0).strong())
            .min_size(egui::vec2(ui.available_width(), 40.0));
        let mut response = ui.add_enabled(self.controller.can_submit(), button);
        if self.controller.health_status() == HealthStatus::Unhealthy {
            response = response.on_disabled_hover_text("The prediction service is offline");
        }
        if pending {
            ui.add_space(6.0);
            ui.vertical_centered(|ui| {
                ui.spinner();
            });
        }
        if response.clicked() {
            self.controller.submit_prediction();
        }
    }
}
