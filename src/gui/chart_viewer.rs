//! Chart Viewer Widget
//! Central panel with the two chart regions, redrawn every frame from the
//! stored chart descriptions.

use egui::{Color32, RichText, ScrollArea};

use crate::charts::{ChartPlotter, ScatterChart, ShareChart};

const PIE_DIAMETER: f32 = 280.0;
const SCATTER_HEIGHT: f32 = 320.0;

/// Holds the most recent chart descriptions; each rebuild replaces the
/// previous one.
pub struct ChartViewer {
    share_chart: Option<ShareChart>,
    scatter_chart: Option<ScatterChart>,
}

impl Default for ChartViewer {
    fn default() -> Self {
        Self {
            share_chart: None,
            scatter_chart: None,
        }
    }
}

impl ChartViewer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_share_chart(&mut self, chart: ShareChart) {
        self.share_chart = Some(chart);
    }

    pub fn set_scatter_chart(&mut self, chart: ScatterChart) {
        self.scatter_chart = Some(chart);
    }

    /// Draw both chart cards, stacked vertically.
    pub fn show(&mut self, ui: &mut egui::Ui) {
        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                if let Some(chart) = &self.share_chart {
                    Self::draw_card(ui, &chart.title, |ui| {
                        ChartPlotter::draw_share_chart(ui, chart, PIE_DIAMETER);
                    });
                    ui.add_space(15.0);
                }

                if let Some(chart) = &self.scatter_chart {
                    Self::draw_card(ui, &chart.title, |ui| {
                        ChartPlotter::draw_scatter_chart(ui, chart, SCATTER_HEIGHT);
                    });
                }
            });
    }

    /// Draw a single chart card with a title header.
    fn draw_card(ui: &mut egui::Ui, title: &str, add_chart: impl FnOnce(&mut egui::Ui)) {
        egui::Frame::none()
            .rounding(8.0)
            .stroke(egui::Stroke::new(1.0, Color32::from_gray(80)))
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width() - 20.0);

                ui.vertical(|ui| {
                    ui.label(RichText::new(title).size(16.0).strong());
                    ui.add_space(8.0);
                    add_chart(ui);
                });
            });
    }
}
