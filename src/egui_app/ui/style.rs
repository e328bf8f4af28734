use eframe::egui::{Color32, Stroke, Visuals, epaint::CornerRadius, style::WidgetVisuals};

use crate::egui_app::controller::HealthStatus;
use crate::egui_app::state::StatusTone;
use crate::telemetry::IssueTone;

#[derive(Clone, Copy)]
pub struct Palette {
    pub bg_primary: Color32,
    pub bg_secondary: Color32,
    pub bg_tertiary: Color32,
    pub panel_outline: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub accent: Color32,
}

pub fn palette() -> Palette {
    Palette {
        bg_primary: Color32::from_rgb(15, 23, 42),
        bg_secondary: Color32::from_rgb(30, 41, 59),
        bg_tertiary: Color32::from_rgb(51, 65, 85),
        panel_outline: Color32::from_rgb(71, 85, 105),
        text_primary: Color32::from_rgb(226, 232, 240),
        text_muted: Color32::from_rgb(156, 163, 175),
        accent: Color32::from_rgb(96, 165, 250),
    }
}

const RED: Color32 = Color32::from_rgb(248, 113, 113);
const YELLOW: Color32 = Color32::from_rgb(250, 204, 21);
const ORANGE: Color32 = Color32::from_rgb(251, 146, 60);
const GREEN: Color32 = Color32::from_rgb(74, 222, 128);
const BLUE: Color32 = Color32::from_rgb(96, 165, 250);
const GRAY: Color32 = Color32::from_rgb(156, 163, 175);

pub fn apply_visuals(visuals: &mut Visuals) {
    let palette = palette();
    visuals.window_fill = palette.bg_primary;
    visuals.panel_fill = palette.bg_primary;
    visuals.override_text_color = Some(palette.text_primary);
    visuals.hyperlink_color = palette.accent;
    visuals.extreme_bg_color = palette.bg_tertiary;
    visuals.faint_bg_color = palette.bg_secondary;
    visuals.error_fg_color = RED;
    visuals.warn_fg_color = ORANGE;
    visuals.selection.bg_fill = palette.bg_tertiary;
    visuals.selection.stroke = Stroke::new(1.0, palette.accent);
    visuals.widgets.noninteractive.bg_fill = palette.bg_secondary;
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette.text_primary);
    set_rounded(&mut visuals.widgets.inactive, palette);
    set_rounded(&mut visuals.widgets.hovered, palette);
    set_rounded(&mut visuals.widgets.active, palette);
    set_rounded(&mut visuals.widgets.open, palette);
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, palette.accent);
}

fn set_rounded(vis: &mut WidgetVisuals, palette: Palette) {
    vis.corner_radius = CornerRadius::same(6);
    vis.bg_fill = palette.bg_tertiary;
    vis.weak_bg_fill = palette.bg_tertiary;
    vis.bg_stroke = Stroke::new(1.0, palette.panel_outline);
    vis.fg_stroke = Stroke::new(1.0, palette.text_primary);
}

pub fn section_stroke() -> Stroke {
    Stroke::new(1.0, palette().panel_outline)
}

/// `color` at `alpha` (0.0-1.0) opacity, for tinted panel backgrounds.
pub fn translucent(color: Color32, alpha: f32) -> Color32 {
    let alpha = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

pub fn health_color(status: HealthStatus) -> Color32 {
    match status {
        HealthStatus::Healthy => GREEN,
        HealthStatus::Unhealthy => RED,
        HealthStatus::Unknown => GRAY,
    }
}

pub fn tone_color(tone: IssueTone) -> Color32 {
    match tone {
        IssueTone::Critical => RED,
        IssueTone::Warning => YELLOW,
        IssueTone::Elevated => ORANGE,
        IssueTone::Nominal => GREEN,
        IssueTone::Neutral => BLUE,
    }
}

pub fn error_color() -> Color32 {
    RED
}

pub fn status_badge_color(tone: StatusTone) -> Color32 {
    match tone {
        StatusTone::Idle => Color32::from_rgb(42, 42, 42),
        StatusTone::Busy => Color32::from_rgb(31, 139, 255),
        StatusTone::Info => Color32::from_rgb(64, 140, 112),
        StatusTone::Warning => Color32::from_rgb(192, 138, 43),
        StatusTone::Error => Color32::from_rgb(192, 57, 43),
    }
}

pub fn inner_border() -> Stroke {
    Stroke::new(1.0, Color32::from_rgb(12, 16, 28))
}
