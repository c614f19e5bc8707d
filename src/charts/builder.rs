//! Chart Builder Module
//! Pure handlers: current control values + launch records in, chart
//! descriptions out. No state is kept between invocations.

use rayon::prelude::*;
use std::collections::BTreeMap;

use crate::data::{LaunchRecord, PayloadRange, SiteSelection};

/// One slice of a proportional chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ShareSlice {
    pub label: String,
    pub value: u64,
}

/// A proportional chart: slice sizes relative to the slice total.
#[derive(Debug, Clone, PartialEq)]
pub struct ShareChart {
    pub title: String,
    pub slices: Vec<ShareSlice>,
}

impl ShareChart {
    pub fn total(&self) -> u64 {
        self.slices.iter().map(|s| s.value).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}

/// One point of the payload/outcome scatter chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub payload_mass_kg: f64,
    /// Launch outcome: 1.0 success, 0.0 failure.
    pub outcome: f64,
    pub booster_version: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterChart {
    pub title: String,
    pub points: Vec<ScatterPoint>,
}

impl ScatterChart {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Build the success-share chart for the current site selection.
///
/// All sites: one slice per site, valued by that site's success count.
/// One site: two slices, success vs. failed counts for that site; a site
/// matching no records yields an empty chart rather than an error.
pub fn success_share_chart(records: &[LaunchRecord], selection: &SiteSelection) -> ShareChart {
    match selection {
        SiteSelection::AllSites => {
            let mut successes_by_site: BTreeMap<&str, u64> = BTreeMap::new();
            for record in records {
                let count = successes_by_site.entry(record.site.as_str()).or_insert(0);
                if record.success {
                    *count += 1;
                }
            }

            ShareChart {
                title: "Successful Launches by Launch Site".to_string(),
                slices: successes_by_site
                    .into_iter()
                    .map(|(site, value)| ShareSlice {
                        label: site.to_string(),
                        value,
                    })
                    .collect(),
            }
        }
        SiteSelection::Site(site) => {
            let (successes, failures) = records
                .par_iter()
                .filter(|r| r.site == *site)
                .map(|r| if r.success { (1u64, 0u64) } else { (0, 1) })
                .reduce(|| (0, 0), |a, b| (a.0 + b.0, a.1 + b.1));

            let slices = if successes + failures == 0 {
                Vec::new()
            } else {
                vec![
                    ShareSlice {
                        label: "Success".to_string(),
                        value: successes,
                    },
                    ShareSlice {
                        label: "Failed".to_string(),
                        value: failures,
                    },
                ]
            };

            ShareChart {
                title: format!("Success vs. Failed Launches for {}", site),
                slices,
            }
        }
    }
}

/// Build the payload/outcome scatter chart for the current selection and
/// payload interval. Both bounds are inclusive; an interval matching no
/// records yields an empty chart.
pub fn payload_scatter_chart(
    records: &[LaunchRecord],
    selection: &SiteSelection,
    range: &PayloadRange,
) -> ScatterChart {
    let points: Vec<ScatterPoint> = records
        .par_iter()
        .filter(|r| range.contains(r.payload_mass_kg) && selection.matches(r))
        .map(|r| ScatterPoint {
            payload_mass_kg: r.payload_mass_kg,
            outcome: if r.success { 1.0 } else { 0.0 },
            booster_version: r.booster_version.clone(),
        })
        .collect();

    ScatterChart {
        title: "Payload Mass vs. Launch Outcome".to_string(),
        points,
    }
}
