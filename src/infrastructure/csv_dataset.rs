// CSV dataset source
use crate::application::dataset_source::DatasetSource;
use crate::domain::error::DatasetError;
use crate::domain::launch::{Dataset, LaunchRecord, Outcome};
use crate::infrastructure::config::SitesConfig;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

// Column names of the source table. Unknown columns are ignored.
const SITE_COLUMN: &str = "Launch Site";
const OUTCOME_COLUMN: &str = "class";
const PAYLOAD_COLUMN: &str = "Payload Mass (kg)";
const CATEGORY_COLUMN: &str = "Booster Version Category";

#[derive(Debug, Clone)]
pub struct CsvDatasetSource {
    path: PathBuf,
}

impl CsvDatasetSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DatasetSource for CsvDatasetSource {
    fn load(&self, sites: &SitesConfig) -> Result<Dataset, DatasetError> {
        let file = File::open(&self.path)?;
        parse_dataset(BufReader::new(file), sites)
    }
}

/// Parse a comma-separated table with a named-column header row into the
/// launch dataset, validating every row against the known-site set.
pub fn parse_dataset<R: BufRead>(reader: R, sites: &SitesConfig) -> Result<Dataset, DatasetError> {
    let mut lines = reader.lines();
    let header = match lines.next() {
        Some(line) => line?,
        None => return Err(DatasetError::Empty),
    };
    let columns = ColumnIndex::resolve(&header)?;

    let mut records = Vec::new();
    for (number, line) in lines.enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        records.push(columns.parse_row(number + 1, &line, sites)?);
    }

    Dataset::from_records(records)
}

struct ColumnIndex {
    site: usize,
    outcome: usize,
    payload: usize,
    category: usize,
}

impl ColumnIndex {
    fn resolve(header: &str) -> Result<Self, DatasetError> {
        let names: Vec<&str> = header.split(',').map(str::trim).collect();
        let find = |column: &str| {
            names
                .iter()
                .position(|name| *name == column)
                .ok_or_else(|| DatasetError::MissingColumn(column.to_string()))
        };

        Ok(Self {
            site: find(SITE_COLUMN)?,
            outcome: find(OUTCOME_COLUMN)?,
            payload: find(PAYLOAD_COLUMN)?,
            category: find(CATEGORY_COLUMN)?,
        })
    }

    fn parse_row(
        &self,
        row: usize,
        line: &str,
        sites: &SitesConfig,
    ) -> Result<LaunchRecord, DatasetError> {
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        let field = |index: usize, column: &str| {
            fields
                .get(index)
                .copied()
                .filter(|value| !value.is_empty())
                .ok_or_else(|| DatasetError::MissingField {
                    row,
                    column: column.to_string(),
                })
        };

        let site = field(self.site, SITE_COLUMN)?;
        if !sites.contains(site) {
            return Err(DatasetError::UnknownSite {
                row,
                site: site.to_string(),
            });
        }

        let payload_raw = field(self.payload, PAYLOAD_COLUMN)?;
        let payload_mass_kg: f64 = payload_raw.parse().map_err(|_| DatasetError::InvalidPayload {
            row,
            value: payload_raw.to_string(),
        })?;
        if !payload_mass_kg.is_finite() || payload_mass_kg < 0.0 {
            return Err(DatasetError::InvalidPayload {
                row,
                value: payload_raw.to_string(),
            });
        }

        let outcome_raw = field(self.outcome, OUTCOME_COLUMN)?;
        let outcome = Outcome::parse(outcome_raw).ok_or_else(|| DatasetError::InvalidOutcome {
            row,
            value: outcome_raw.to_string(),
        })?;

        let category = field(self.category, CATEGORY_COLUMN)?;

        Ok(LaunchRecord::new(
            site.to_string(),
            payload_mass_kg,
            outcome,
            category.to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::SiteConfig;

    fn known_sites() -> SitesConfig {
        let ids = ["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"];
        SitesConfig {
            sites: ids
                .iter()
                .map(|id| SiteConfig {
                    id: (*id).to_string(),
                    label: (*id).to_string(),
                })
                .collect(),
        }
    }

    fn parse(data: &str) -> Result<Dataset, DatasetError> {
        parse_dataset(data.as_bytes(), &known_sites())
    }

    #[test]
    fn test_parses_rows_in_order_and_ignores_extra_columns() {
        let data = "\
Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
1,CCAFS LC-40,0,500,F9 v1.0 B0003,v1.0
2,VAFB SLC-4E,1,2000,F9 FT B1029,FT
3,KSC LC-39A,1,5300.5,F9 B4 B1039,B4
";
        let dataset = parse(data).unwrap();

        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.records()[0].site, "CCAFS LC-40");
        assert_eq!(dataset.records()[0].outcome, Outcome::Failure);
        assert_eq!(dataset.records()[2].payload_mass_kg, 5300.5);
        assert_eq!(dataset.records()[2].booster_version_category, "B4");
        assert_eq!(dataset.min_payload(), 500.0);
        assert_eq!(dataset.max_payload(), 5300.5);
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let data = "\
Launch Site,class,Payload Mass (kg),Booster Version Category
CCAFS LC-40,1,500,v1.0

KSC LC-39A,1,9000,B5
";
        let dataset = parse(data).unwrap();
        assert_eq!(dataset.len(), 2);
    }

    #[test]
    fn test_missing_column_is_rejected() {
        let data = "Launch Site,class,Booster Version Category\nCCAFS LC-40,1,v1.0\n";
        let result = parse(data);
        assert!(matches!(
            result,
            Err(DatasetError::MissingColumn(column)) if column == PAYLOAD_COLUMN
        ));
    }

    #[test]
    fn test_unknown_site_is_rejected() {
        let data = "\
Launch Site,class,Payload Mass (kg),Booster Version Category
Boca Chica,1,500,v1.0
";
        let result = parse(data);
        assert!(matches!(
            result,
            Err(DatasetError::UnknownSite { row: 1, site }) if site == "Boca Chica"
        ));
    }

    #[test]
    fn test_non_numeric_payload_is_rejected() {
        let data = "\
Launch Site,class,Payload Mass (kg),Booster Version Category
CCAFS LC-40,1,heavy,v1.0
";
        assert!(matches!(
            parse(data),
            Err(DatasetError::InvalidPayload { row: 1, .. })
        ));
    }

    #[test]
    fn test_negative_payload_is_rejected() {
        let data = "\
Launch Site,class,Payload Mass (kg),Booster Version Category
CCAFS LC-40,1,-500,v1.0
";
        assert!(matches!(
            parse(data),
            Err(DatasetError::InvalidPayload { row: 1, .. })
        ));
    }

    #[test]
    fn test_non_binary_outcome_is_rejected() {
        let data = "\
Launch Site,class,Payload Mass (kg),Booster Version Category
CCAFS LC-40,2,500,v1.0
";
        assert!(matches!(
            parse(data),
            Err(DatasetError::InvalidOutcome { row: 1, .. })
        ));
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let data = "\
Launch Site,class,Payload Mass (kg),Booster Version Category
CCAFS LC-40,1,,v1.0
";
        assert!(matches!(
            parse(data),
            Err(DatasetError::MissingField { row: 1, column }) if column == PAYLOAD_COLUMN
        ));
    }

    #[test]
    fn test_header_only_table_is_rejected() {
        let data = "Launch Site,class,Payload Mass (kg),Booster Version Category\n";
        assert!(matches!(parse(data), Err(DatasetError::Empty)));
    }
}
