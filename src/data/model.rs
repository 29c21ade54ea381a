use std::collections::BTreeSet;
use std::fmt;

use super::countries::{self, CountryIndex};

// ---------------------------------------------------------------------------
// Cell – a single value read from the source sheet
// ---------------------------------------------------------------------------

/// A dynamically-typed spreadsheet cell, independent of the file format.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::String(s) => write!(f, "{s}"),
            Cell::Integer(i) => write!(f, "{i}"),
            Cell::Float(v) => write!(f, "{v}"),
            Cell::Bool(b) => write!(f, "{b}"),
            Cell::Null => write!(f, "<null>"),
        }
    }
}

impl Cell {
    /// Text content of the cell, `None` for null or whitespace-only strings.
    pub fn as_text(&self) -> Option<String> {
        match self {
            Cell::String(s) if s.trim().is_empty() => None,
            Cell::String(s) => Some(s.clone()),
            Cell::Null => None,
            Cell::Float(v) if v.is_nan() => None,
            other => Some(other.to_string()),
        }
    }

    /// Integer coercion used for the `year` column.
    pub fn as_year(&self) -> Option<i32> {
        let value = match self {
            Cell::Integer(i) => *i,
            Cell::Float(v) if v.is_finite() => v.trunc() as i64,
            Cell::String(s) => {
                let s = s.trim();
                match s.parse::<i64>() {
                    Ok(i) => i,
                    Err(_) => match s.parse::<f64>() {
                        Ok(v) if v.is_finite() => v.trunc() as i64,
                        _ => return None,
                    },
                }
            }
            _ => return None,
        };
        i32::try_from(value).ok()
    }
}

// ---------------------------------------------------------------------------
// ProducerColumn – which source column feeds the producer views
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProducerColumn {
    Normalized,
    Consolidated,
}

impl ProducerColumn {
    pub fn column_name(self) -> &'static str {
        match self {
            ProducerColumn::Normalized => "productoras_normalizadas",
            ProducerColumn::Consolidated => "productoras_consolidadas",
        }
    }
}

// ---------------------------------------------------------------------------
// FilmRecord – one festival entry
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct FilmRecord {
    pub title: String,
    pub director: String,
    pub year: i32,
    /// Free-text, comma-separated country list as found in the sheet.
    pub countries_raw: Option<String>,
    pub section: Option<String>,
    /// Free-text, comma-separated producer list from the canonical producer column.
    pub producers_raw: Option<String>,
    /// Indices into the dataset's country vocabulary, sorted and unique.
    pub country_ids: Vec<usize>,
}

impl FilmRecord {
    /// Number of distinct countries associated with this film.
    pub fn country_count(&self) -> usize {
        self.country_ids.len()
    }

    pub fn has_country(&self, country: usize) -> bool {
        self.country_ids.binary_search(&country).is_ok()
    }
}

// ---------------------------------------------------------------------------
// FilmDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The immutable, fully derived dataset shared by every view.
#[derive(Debug, Clone)]
pub struct FilmDataset {
    pub records: Vec<FilmRecord>,
    /// Country vocabulary and name → column index mapping.
    pub countries: CountryIndex,
    /// Source of `FilmRecord::producers_raw`, if the sheet had one.
    pub producer_column: Option<ProducerColumn>,
    /// Whether the sheet carried a `section` column.
    pub has_section: bool,
}

impl FilmDataset {
    /// Run the country expansion over the records and build the dataset.
    pub fn from_records(
        mut records: Vec<FilmRecord>,
        producer_column: Option<ProducerColumn>,
        has_section: bool,
    ) -> Self {
        let (index, memberships) =
            countries::expand(records.iter().map(|r| r.countries_raw.as_deref()));
        for (record, ids) in records.iter_mut().zip(memberships) {
            record.country_ids = ids;
        }
        FilmDataset {
            records,
            countries: index,
            producer_column,
            has_section,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Smallest and largest year, `None` on an empty dataset.
    pub fn year_bounds(&self) -> Option<(i32, i32)> {
        let min = self.records.iter().map(|r| r.year).min()?;
        let max = self.records.iter().map(|r| r.year).max()?;
        Some((min, max))
    }

    /// Sorted distinct non-empty sections.
    pub fn sections(&self) -> BTreeSet<String> {
        self.records
            .iter()
            .filter_map(|r| r.section.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_coercion_accepts_integral_forms() {
        assert_eq!(Cell::Integer(2020).as_year(), Some(2020));
        assert_eq!(Cell::Float(2019.0).as_year(), Some(2019));
        assert_eq!(Cell::Float(2019.7).as_year(), Some(2019));
        assert_eq!(Cell::String(" 2018 ".into()).as_year(), Some(2018));
        assert_eq!(Cell::String("2017.0".into()).as_year(), Some(2017));
    }

    #[test]
    fn year_coercion_rejects_non_numeric() {
        assert_eq!(Cell::Null.as_year(), None);
        assert_eq!(Cell::Float(f64::NAN).as_year(), None);
        assert_eq!(Cell::String("circa 1990".into()).as_year(), None);
        assert_eq!(Cell::Bool(true).as_year(), None);
    }

    #[test]
    fn blank_text_is_none() {
        assert_eq!(Cell::String("   ".into()).as_text(), None);
        assert_eq!(Cell::Null.as_text(), None);
        assert_eq!(Cell::Integer(3).as_text(), Some("3".to_string()));
    }

    #[test]
    fn dataset_derives_memberships_and_bounds() {
        let records = vec![
            FilmRecord {
                year: 2001,
                countries_raw: Some("france, Italy".into()),
                section: Some("Competition".into()),
                ..Default::default()
            },
            FilmRecord {
                year: 1999,
                countries_raw: None,
                ..Default::default()
            },
        ];
        let ds = FilmDataset::from_records(records, None, true);

        assert_eq!(ds.len(), 2);
        assert_eq!(ds.year_bounds(), Some((1999, 2001)));
        assert_eq!(ds.countries.names(), &["France".to_string(), "Italy".to_string()]);
        assert_eq!(ds.records[0].country_count(), 2);
        assert_eq!(ds.records[1].country_count(), 0);
        let france = ds.countries.index_of("France").unwrap();
        assert!(ds.records[0].has_country(france));
        assert!(!ds.records[1].has_country(france));
        assert_eq!(ds.sections().len(), 1);
    }
}
