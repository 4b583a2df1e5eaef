//! Data module - CSV loading and the derived sector column

pub mod loader;
pub mod transform;

/// Required dataset columns, exact and case-sensitive.
pub const NAICS_CODE: &str = "2017 NAICS Code";
pub const NAICS_TITLE: &str = "2017 NAICS Title";
pub const WITH_MARGINS: &str = "Supply Chain Emission Factors with Margins";
pub const WITHOUT_MARGINS: &str = "Supply Chain Emission Factors without Margins";
pub const MARGINS: &str = "Margins of Supply Chain Emission Factors";

/// Derived column: first two characters of the NAICS code.
pub const SECTOR: &str = "Sector";

/// All columns the loader validates against the CSV header.
pub const REQUIRED_COLUMNS: [&str; 5] =
    [NAICS_CODE, NAICS_TITLE, WITH_MARGINS, WITHOUT_MARGINS, MARGINS];
