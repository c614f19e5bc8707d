//! Launch Table Module
//! In-memory table of launch records plus the control-value domain types.

/// One row of the dataset: a single launch attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    pub flight_number: u32,
    pub site: String,
    pub payload_mass_kg: f64,
    pub success: bool,
    pub booster_version: String,
}

/// The full dataset, loaded once at startup and read-only afterwards.
///
/// Distinct sites and payload bounds are derived at construction so the
/// selector options and slider bounds never have to rescan the records.
#[derive(Debug, Clone)]
pub struct LaunchTable {
    records: Vec<LaunchRecord>,
    sites: Vec<String>,
    payload_min: f64,
    payload_max: f64,
}

impl LaunchTable {
    pub fn new(records: Vec<LaunchRecord>) -> Self {
        let mut sites: Vec<String> = records.iter().map(|r| r.site.clone()).collect();
        sites.sort();
        sites.dedup();

        let payload_min = records
            .iter()
            .map(|r| r.payload_mass_kg)
            .fold(f64::INFINITY, f64::min);
        let payload_max = records
            .iter()
            .map(|r| r.payload_mass_kg)
            .fold(f64::NEG_INFINITY, f64::max);

        Self {
            records,
            sites,
            payload_min: if payload_min.is_finite() { payload_min } else { 0.0 },
            payload_max: if payload_max.is_finite() { payload_max } else { 0.0 },
        }
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    /// Sorted distinct launch sites (selector options).
    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Observed payload bounds (slider bounds).
    pub fn payload_bounds(&self) -> (f64, f64) {
        (self.payload_min, self.payload_max)
    }
}

/// Current value of the site selector.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SiteSelection {
    /// The "All Sites" sentinel (selector default).
    #[default]
    AllSites,
    /// One literal site drawn from the distinct site set.
    Site(String),
}

impl SiteSelection {
    pub fn label(&self) -> &str {
        match self {
            SiteSelection::AllSites => "All Sites",
            SiteSelection::Site(site) => site,
        }
    }

    pub fn matches(&self, record: &LaunchRecord) -> bool {
        match self {
            SiteSelection::AllSites => true,
            SiteSelection::Site(site) => record.site == *site,
        }
    }
}

/// Closed payload-mass interval `[lo, hi]`, in kilograms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    pub lo: f64,
    pub hi: f64,
}

impl PayloadRange {
    pub fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// Inclusive on both ends; an inverted interval contains nothing.
    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        payload_mass_kg >= self.lo && payload_mass_kg <= self.hi
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(site: &str, payload: f64) -> LaunchRecord {
        LaunchRecord {
            flight_number: 1,
            site: site.to_string(),
            payload_mass_kg: payload,
            success: true,
            booster_version: "v1.0".to_string(),
        }
    }

    #[test]
    fn sites_are_sorted_and_deduplicated() {
        let table = LaunchTable::new(vec![
            record("KSC LC-39A", 100.0),
            record("CCAFS LC-40", 200.0),
            record("KSC LC-39A", 300.0),
        ]);
        assert_eq!(table.sites(), ["CCAFS LC-40", "KSC LC-39A"]);
    }

    #[test]
    fn payload_bounds_span_observed_values() {
        let table = LaunchTable::new(vec![
            record("A", 500.0),
            record("A", 9600.0),
            record("B", 2500.0),
        ]);
        assert_eq!(table.payload_bounds(), (500.0, 9600.0));
    }

    #[test]
    fn empty_table_has_zero_bounds() {
        let table = LaunchTable::new(Vec::new());
        assert!(table.is_empty());
        assert_eq!(table.payload_bounds(), (0.0, 0.0));
    }

    #[test]
    fn payload_range_is_inclusive() {
        let range = PayloadRange::new(1000.0, 2000.0);
        assert!(range.contains(1000.0));
        assert!(range.contains(2000.0));
        assert!(!range.contains(999.9));
        assert!(!range.contains(2000.1));
    }

    #[test]
    fn inverted_range_contains_nothing() {
        let range = PayloadRange::new(2000.0, 1000.0);
        assert!(!range.contains(1500.0));
    }

    #[test]
    fn site_selection_matches() {
        let rec = record("KSC LC-39A", 100.0);
        assert!(SiteSelection::AllSites.matches(&rec));
        assert!(SiteSelection::Site("KSC LC-39A".to_string()).matches(&rec));
        assert!(!SiteSelection::Site("CCAFS LC-40".to_string()).matches(&rec));
    }
}
