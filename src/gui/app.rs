//! Dashboard Main Application
//! Main window wiring control-panel actions to the chart handlers.

use egui::SidePanel;

use crate::charts::{payload_scatter_chart, success_share_chart};
use crate::data::LaunchTable;
use crate::gui::{ChartViewer, ControlPanel, ControlPanelAction};

/// Main application window. The launch table is loaded before the window
/// opens and stays read-only for the lifetime of the app.
pub struct DashboardApp {
    table: LaunchTable,
    control_panel: ControlPanel,
    chart_viewer: ChartViewer,
}

impl DashboardApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, table: LaunchTable) -> Self {
        let control_panel = ControlPanel::new(&table);
        let mut app = Self {
            table,
            control_panel,
            chart_viewer: ChartViewer::new(),
        };

        // Initial render with the defaults: all sites, full payload span.
        app.rebuild_share_chart();
        app.rebuild_scatter_chart();
        app
    }

    fn rebuild_share_chart(&mut self) {
        let chart = success_share_chart(self.table.records(), &self.control_panel.selection);
        log::debug!(
            "Rebuilt share chart for {:?}: {} slices",
            self.control_panel.selection,
            chart.slices.len()
        );
        self.chart_viewer.set_share_chart(chart);
    }

    fn rebuild_scatter_chart(&mut self) {
        let chart = payload_scatter_chart(
            self.table.records(),
            &self.control_panel.selection,
            &self.control_panel.range,
        );
        log::debug!(
            "Rebuilt scatter chart for {:?} in [{:.0}, {:.0}]: {} points",
            self.control_panel.selection,
            self.control_panel.range.lo,
            self.control_panel.range.hi,
            chart.points.len()
        );
        self.chart_viewer.set_scatter_chart(chart);
    }

    /// Map a control action to the handlers it re-runs: a site change
    /// affects both charts, a range change only the scatter chart.
    fn dispatch(&mut self, action: ControlPanelAction) {
        match action {
            ControlPanelAction::SiteChanged => {
                self.rebuild_share_chart();
                self.rebuild_scatter_chart();
            }
            ControlPanelAction::PayloadRangeChanged => {
                self.rebuild_scatter_chart();
            }
            ControlPanelAction::None => {}
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Left panel - Control Panel
        SidePanel::left("control_panel")
            .min_width(300.0)
            .max_width(350.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let action = self.control_panel.show(ui);
                    self.dispatch(action);
                });
            });

        // Central panel - Chart Viewer
        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_viewer.show(ui);
        });
    }
}
