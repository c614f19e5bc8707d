//! Chart Plotter Module
//! Draws chart descriptions with egui / egui_plot.

use egui::{Color32, Pos2, RichText, Shape, Stroke, Vec2};
use egui_plot::{Legend, Plot, Points};
use std::collections::BTreeMap;
use std::f64::consts::TAU;

use super::builder::{ScatterChart, ShareChart};

/// Color palette for slices and booster categories
pub const PALETTE: [Color32; 10] = [
    Color32::from_rgb(52, 152, 219),  // Blue
    Color32::from_rgb(231, 76, 60),   // Red
    Color32::from_rgb(46, 204, 113),  // Green
    Color32::from_rgb(155, 89, 182),  // Purple
    Color32::from_rgb(243, 156, 18),  // Orange
    Color32::from_rgb(26, 188, 156),  // Teal
    Color32::from_rgb(233, 30, 99),   // Pink
    Color32::from_rgb(0, 188, 212),   // Cyan
    Color32::from_rgb(255, 87, 34),   // Deep Orange
    Color32::from_rgb(121, 85, 72),   // Brown
];

/// Angular resolution of pie sector tessellation, radians.
const SECTOR_STEP: f64 = 0.05;

/// Draws the dashboard charts using egui.
pub struct ChartPlotter;

impl ChartPlotter {
    pub fn palette_color(index: usize) -> Color32 {
        PALETTE[index % PALETTE.len()]
    }

    /// Draw a proportional chart as a pie with a legend beside it.
    /// An empty chart (or one whose slices are all zero) renders a
    /// placeholder label instead.
    pub fn draw_share_chart(ui: &mut egui::Ui, chart: &ShareChart, diameter: f32) {
        if chart.is_empty() || chart.total() == 0 {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No Data").size(16.0).color(Color32::GRAY));
            });
            return;
        }

        let total = chart.total() as f64;

        ui.horizontal(|ui| {
            let (rect, _) =
                ui.allocate_exact_size(Vec2::splat(diameter), egui::Sense::hover());
            let painter = ui.painter_at(rect);
            let center = rect.center();
            let radius = diameter / 2.0 - 4.0;

            // Start at 12 o'clock, sweep clockwise.
            let mut angle = -TAU / 4.0;
            for (i, slice) in chart.slices.iter().enumerate() {
                if slice.value == 0 {
                    continue;
                }
                let sweep = slice.value as f64 / total * TAU;
                let color = Self::palette_color(i);
                Self::fill_sector(&painter, center, radius, angle, sweep, color);
                angle += sweep;
            }

            ui.add_space(12.0);

            // Legend: one row per slice, zero-valued slices included.
            ui.vertical(|ui| {
                for (i, slice) in chart.slices.iter().enumerate() {
                    ui.horizontal(|ui| {
                        let (square, _) = ui
                            .allocate_exact_size(Vec2::splat(12.0), egui::Sense::hover());
                        ui.painter()
                            .rect_filled(square, 2.0, Self::palette_color(i));
                        ui.label(
                            RichText::new(format!("{} ({})", slice.label, slice.value))
                                .size(12.0),
                        );
                    });
                }
            });
        });
    }

    /// Fill one pie sector as a fan of small triangles.
    fn fill_sector(
        painter: &egui::Painter,
        center: Pos2,
        radius: f32,
        start: f64,
        sweep: f64,
        color: Color32,
    ) {
        let steps = (sweep / SECTOR_STEP).ceil().max(1.0) as usize;
        let step = sweep / steps as f64;

        let point_at = |angle: f64| {
            center
                + Vec2::new(
                    radius * angle.cos() as f32,
                    radius * angle.sin() as f32,
                )
        };

        for i in 0..steps {
            let a0 = start + i as f64 * step;
            let a1 = a0 + step;
            painter.add(Shape::convex_polygon(
                vec![center, point_at(a0), point_at(a1)],
                color,
                Stroke::NONE,
            ));
        }
    }

    /// Draw the payload/outcome scatter chart, one point series per
    /// booster version category.
    pub fn draw_scatter_chart(ui: &mut egui::Ui, chart: &ScatterChart, height: f32) {
        if chart.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No Data").size(16.0).color(Color32::GRAY));
            });
            return;
        }

        let mut by_booster: BTreeMap<&str, Vec<[f64; 2]>> = BTreeMap::new();
        for point in &chart.points {
            by_booster
                .entry(point.booster_version.as_str())
                .or_default()
                .push([point.payload_mass_kg, point.outcome]);
        }

        Plot::new("payload_scatter")
            .height(height)
            .x_axis_label("Payload Mass (kg)")
            .y_axis_label("Launch Outcome")
            .include_y(-0.25)
            .include_y(1.25)
            .allow_scroll(false)
            .legend(Legend::default())
            .y_axis_formatter(|mark, _range| {
                let v = mark.value;
                if (v - 1.0).abs() < 1e-6 {
                    "Success".to_string()
                } else if v.abs() < 1e-6 {
                    "Failed".to_string()
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                for (i, (booster, points)) in by_booster.into_iter().enumerate() {
                    plot_ui.points(
                        Points::new(points)
                            .radius(4.0)
                            .color(Self::palette_color(i))
                            .name(booster),
                    );
                }
            });
    }
}
