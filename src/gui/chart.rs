use egui::{pos2, vec2, Align2, Color32, FontId, Rect, RichText, Sense};

use crate::app::charts::{ChartName, Series};

const BAR_COLORS: [Color32; 3] = [
    Color32::from_rgb(52, 152, 219),
    Color32::from_rgb(46, 204, 113),
    Color32::from_rgb(155, 89, 182),
];

const SPLIT_COLORS: [Color32; 2] = [
    Color32::from_rgb(46, 204, 113),
    Color32::from_rgb(231, 76, 60),
];

pub fn bar_chart(ui: &mut egui::Ui, name: ChartName, series: &Series) {
    ui.label(RichText::new(name.title()).strong());
    let (rect, _) = ui.allocate_exact_size(vec2(ui.available_width(), 220.0), Sense::hover());
    let painter = ui.painter_at(rect);
    let text_color = ui.visuals().text_color();
    let font = FontId::proportional(12.0);

    if series.data.is_empty() {
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            "No votes yet",
            font,
            text_color,
        );
        return;
    }

    let max = series.data.iter().copied().max().unwrap_or(0).max(1) as f32;
    let band = 18.0;
    let plot = Rect::from_min_max(rect.min + vec2(0.0, band), rect.max - vec2(0.0, band));
    let slot = plot.width() / series.data.len() as f32;

    for (i, (&value, label)) in series.data.iter().zip(&series.labels).enumerate() {
        let height = plot.height() * value as f32 / max;
        let left = plot.left() + slot * i as f32 + slot * 0.15;
        let bar = Rect::from_min_max(
            pos2(left, plot.bottom() - height),
            pos2(left + slot * 0.7, plot.bottom()),
        );
        painter.rect_filled(bar, 4.0, BAR_COLORS[i % BAR_COLORS.len()]);
        painter.text(
            pos2(bar.center().x, bar.top() - 2.0),
            Align2::CENTER_BOTTOM,
            value.to_string(),
            font.clone(),
            text_color,
        );
        painter.text(
            pos2(bar.center().x, plot.bottom() + 2.0),
            Align2::CENTER_TOP,
            label,
            font.clone(),
            text_color,
        );
    }
}

/// Proportional strip with a legend underneath.
pub fn split_chart(ui: &mut egui::Ui, name: ChartName, series: &Series) {
    ui.label(RichText::new(name.title()).strong());
    let total: u64 = series.data.iter().sum();
    let (rect, _) = ui.allocate_exact_size(vec2(ui.available_width(), 36.0), Sense::hover());
    let painter = ui.painter_at(rect);

    if total == 0 {
        painter.rect_filled(rect, 6.0, ui.visuals().faint_bg_color);
    } else {
        let mut left = rect.left();
        for (i, &value) in series.data.iter().enumerate() {
            let width = rect.width() * value as f32 / total as f32;
            let part = Rect::from_min_max(pos2(left, rect.top()), pos2(left + width, rect.bottom()));
            painter.rect_filled(part, 0.0, SPLIT_COLORS[i % SPLIT_COLORS.len()]);
            left += width;
        }
    }

    ui.add_space(6.0);
    for (i, (label, &value)) in series.labels.iter().zip(&series.data).enumerate() {
        let share = if total == 0 {
            0.0
        } else {
            value as f64 * 100.0 / total as f64
        };
        ui.horizontal(|ui| {
            let (swatch, _) = ui.allocate_exact_size(vec2(12.0, 12.0), Sense::hover());
            ui.painter()
                .rect_filled(swatch, 2.0, SPLIT_COLORS[i % SPLIT_COLORS.len()]);
            ui.label(format!("{label}: {value} ({share:.1}%)"));
        });
    }
}
