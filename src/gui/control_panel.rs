//! Control Panel Widget
//! Left side panel with the site selector and the payload range filter.

use egui::{Color32, ComboBox, RichText, Slider};

use crate::data::{LaunchTable, PayloadRange, SiteSelection};

/// Slider step granularity, kilograms.
const PAYLOAD_STEP: f64 = 1000.0;

/// Actions raised by the control panel. The app maps each action to the
/// set of chart handlers it re-runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlPanelAction {
    None,
    SiteChanged,
    PayloadRangeChanged,
}

/// Left side control panel.
pub struct ControlPanel {
    pub selection: SiteSelection,
    pub range: PayloadRange,
    site_options: Vec<SiteSelection>,
    payload_bounds: (f64, f64),
    record_count: usize,
}

impl ControlPanel {
    /// Build the panel from the loaded table: selector options are the
    /// distinct sites behind the "All Sites" sentinel, and the range
    /// defaults to the full observed payload span.
    pub fn new(table: &LaunchTable) -> Self {
        let mut site_options = vec![SiteSelection::AllSites];
        site_options.extend(
            table
                .sites()
                .iter()
                .map(|site| SiteSelection::Site(site.clone())),
        );

        let (min, max) = table.payload_bounds();

        Self {
            selection: SiteSelection::AllSites,
            range: PayloadRange::new(min, max),
            site_options,
            payload_bounds: (min, max),
            record_count: table.len(),
        }
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("🚀 Launch Records")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
            ui.label(
                RichText::new(format!("{} launches loaded", self.record_count))
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Launch Site Section =====
        ui.label(RichText::new("🌍 Launch Site").size(14.0).strong());
        ui.add_space(5.0);

        ComboBox::from_id_salt("site_selector")
            .width(250.0)
            .selected_text(self.selection.label())
            .show_ui(ui, |ui| {
                for option in &self.site_options {
                    if ui
                        .selectable_label(self.selection == *option, option.label())
                        .clicked()
                        && self.selection != *option
                    {
                        self.selection = option.clone();
                        action = ControlPanelAction::SiteChanged;
                    }
                }
            });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Payload Range Section =====
        ui.label(RichText::new("📦 Payload Range (kg)").size(14.0).strong());
        ui.add_space(5.0);

        let (min, max) = self.payload_bounds;

        ui.horizontal(|ui| {
            ui.add_sized([40.0, 20.0], egui::Label::new("Min:"));
            if ui
                .add(
                    Slider::new(&mut self.range.lo, min..=max)
                        .step_by(PAYLOAD_STEP)
                        .fixed_decimals(0),
                )
                .changed()
            {
                // Keep the interval well-formed.
                self.range.hi = self.range.hi.max(self.range.lo);
                action = ControlPanelAction::PayloadRangeChanged;
            }
        });

        ui.horizontal(|ui| {
            ui.add_sized([40.0, 20.0], egui::Label::new("Max:"));
            if ui
                .add(
                    Slider::new(&mut self.range.hi, min..=max)
                        .step_by(PAYLOAD_STEP)
                        .fixed_decimals(0),
                )
                .changed()
            {
                self.range.lo = self.range.lo.min(self.range.hi);
                action = ControlPanelAction::PayloadRangeChanged;
            }
        });

        ui.add_space(5.0);
        ui.label(
            RichText::new(format!(
                "Showing payloads from {:.0} to {:.0} kg",
                self.range.lo, self.range.hi
            ))
            .size(11.0)
            .color(Color32::GRAY),
        );

        action
    }
}
