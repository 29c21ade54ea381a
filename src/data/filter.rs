use super::countries::CountryIndex;
use super::model::{FilmDataset, FilmRecord};

/// Countries pre-selected for the temporal view when present in the vocabulary.
pub const DEFAULT_COUNTRY_HINTS: [&str; 6] =
    ["Spain", "France", "USA", "Italy", "United Kingdom", "Germany"];

// ---------------------------------------------------------------------------
// Filter specification
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SectionFilter {
    /// No restriction on section.
    #[default]
    All,
    Only(String),
}

/// User-selected filters.  Evaluated from scratch on every change.
///
/// `countries` does not restrict which records pass; it only chooses which
/// country columns the temporal view plots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSpec {
    pub year_min: i32,
    pub year_max: i32,
    pub section: SectionFilter,
    /// Selected vocabulary indices, sorted.
    pub countries: Vec<usize>,
}

impl FilterSpec {
    /// Initial filters: the last `recent_years` years, every section and
    /// the well-known festival countries.
    pub fn for_dataset(dataset: &FilmDataset, recent_years: u16) -> Self {
        let (min, max) = dataset.year_bounds().unwrap_or((0, 0));
        FilterSpec {
            year_min: min.max(max.saturating_sub(i32::from(recent_years))),
            year_max: max,
            section: SectionFilter::All,
            countries: default_countries(&dataset.countries),
        }
    }

    pub fn matches(&self, record: &FilmRecord) -> bool {
        if record.year < self.year_min || record.year > self.year_max {
            return false;
        }
        match &self.section {
            SectionFilter::All => true,
            SectionFilter::Only(section) => record.section.as_deref() == Some(section.as_str()),
        }
    }

    /// Add or remove one country from the selection, keeping it sorted.
    pub fn toggle_country(&mut self, country: usize) {
        match self.countries.binary_search(&country) {
            Ok(pos) => {
                self.countries.remove(pos);
            }
            Err(pos) => self.countries.insert(pos, country),
        }
    }
}

/// Vocabulary entries containing, case-insensitively, one of the hints.
pub fn default_countries(index: &CountryIndex) -> Vec<usize> {
    let hints: Vec<String> = DEFAULT_COUNTRY_HINTS
        .iter()
        .map(|h| h.to_lowercase())
        .collect();
    index
        .names()
        .iter()
        .enumerate()
        .filter(|(_, name)| {
            let name = name.to_lowercase();
            hints.iter().any(|h| name.contains(h.as_str()))
        })
        .map(|(i, _)| i)
        .collect()
}

/// Return indices of records that pass the year and section filters.
pub fn filtered_indices(dataset: &FilmDataset, spec: &FilterSpec) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, record)| spec.matches(record))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn film(year: i32, section: Option<&str>, countries: &str) -> FilmRecord {
        FilmRecord {
            year,
            section: section.map(str::to_string),
            countries_raw: Some(countries.to_string()),
            ..Default::default()
        }
    }

    fn dataset() -> FilmDataset {
        FilmDataset::from_records(
            vec![
                film(1990, Some("Competition"), "France"),
                film(2005, Some("Un Certain Regard"), "Spain, Usa"),
                film(2010, Some("Competition"), "Japan"),
                film(2015, None, "United Kingdom"),
                film(2020, Some("Competition"), "Mexico"),
            ],
            None,
            true,
        )
    }

    #[test]
    fn year_bounds_are_inclusive() {
        let ds = dataset();
        let spec = FilterSpec {
            year_min: 2005,
            year_max: 2015,
            section: SectionFilter::All,
            countries: Vec::new(),
        };
        assert_eq!(filtered_indices(&ds, &spec), vec![1, 2, 3]);
    }

    #[test]
    fn section_restricts_records() {
        let ds = dataset();
        let spec = FilterSpec {
            year_min: 1900,
            year_max: 2100,
            section: SectionFilter::Only("Competition".into()),
            countries: Vec::new(),
        };
        assert_eq!(filtered_indices(&ds, &spec), vec![0, 2, 4]);
    }

    #[test]
    fn country_selection_does_not_filter_records() {
        let ds = dataset();
        let mut spec = FilterSpec::for_dataset(&ds, 100);
        let all = filtered_indices(&ds, &spec);
        spec.countries.clear();
        assert_eq!(filtered_indices(&ds, &spec), all);
        assert_eq!(all.len(), ds.len());
    }

    #[test]
    fn defaults_cover_recent_window_and_known_countries() {
        let ds = dataset();
        let spec = FilterSpec::for_dataset(&ds, 10);
        assert_eq!((spec.year_min, spec.year_max), (2010, 2020));
        assert_eq!(spec.section, SectionFilter::All);

        let names: Vec<&str> = spec
            .countries
            .iter()
            .filter_map(|&i| ds.countries.name(i))
            .collect();
        assert_eq!(names, vec!["France", "Spain", "United Kingdom", "Usa"]);

        let wide = FilterSpec::for_dataset(&ds, 50);
        assert_eq!(wide.year_min, 1990);
    }

    #[test]
    fn year_window_is_clamped_to_dataset() {
        let ds = dataset();
        let widest = FilterSpec::for_dataset(&ds, u16::MAX);
        assert_eq!((widest.year_min, widest.year_max), (1990, 2020));

        let single = FilterSpec::for_dataset(&ds, 0);
        assert_eq!((single.year_min, single.year_max), (2020, 2020));
    }

    #[test]
    fn toggle_keeps_selection_sorted() {
        let ds = dataset();
        let mut spec = FilterSpec::for_dataset(&ds, 10);
        spec.countries = vec![1, 4];
        spec.toggle_country(2);
        assert_eq!(spec.countries, vec![1, 2, 4]);
        spec.toggle_country(1);
        assert_eq!(spec.countries, vec![2, 4]);
    }
}
