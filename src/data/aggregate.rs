//! Per-view aggregations.
//!
//! Every function here is a pure function of the dataset, the indices of the
//! records that passed the filters, and its own parameters.

use std::collections::{BTreeMap, HashMap};

use super::model::FilmDataset;
use super::producers::parse_producers;

/// Size of the geographic top-N chart.
pub const DEFAULT_TOP_COUNTRIES: usize = 15;
/// Size of the producer ranking.
pub const DEFAULT_TOP_PRODUCERS: usize = 10;

/// One entry of a frequency ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranked {
    pub name: String,
    pub count: u32,
}

/// Sort by count descending, then by name ascending.
fn sort_ranking(ranking: &mut [Ranked]) {
    ranking.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
}

// ---------------------------------------------------------------------------
// Temporal
// ---------------------------------------------------------------------------

/// Films per year for each selected country.
#[derive(Debug, Clone, PartialEq)]
pub struct TemporalTable {
    /// Ascending years present in the filtered records.
    pub years: Vec<i32>,
    /// Selected vocabulary indices, one column each.
    pub countries: Vec<usize>,
    /// `counts[year_row][country_col]`
    pub counts: Vec<Vec<u32>>,
}

impl TemporalTable {
    /// Each year's row normalised to sum to 100.  Years where no selected
    /// country has a film are all zero.
    pub fn shares(&self) -> Vec<Vec<f64>> {
        self.counts
            .iter()
            .map(|row| {
                let total: u32 = row.iter().sum();
                if total == 0 {
                    vec![0.0; row.len()]
                } else {
                    row.iter()
                        .map(|&c| c as f64 / total as f64 * 100.0)
                        .collect()
                }
            })
            .collect()
    }

    /// `(year, value)` points of one column of `values`.
    pub fn column<T: Copy + Into<f64>>(&self, values: &[Vec<T>], col: usize) -> Vec<[f64; 2]> {
        self.years
            .iter()
            .zip(values)
            .filter_map(|(&year, row)| row.get(col).map(|&v| [year as f64, v.into()]))
            .collect()
    }
}

pub fn temporal(dataset: &FilmDataset, rows: &[usize], countries: &[usize]) -> TemporalTable {
    let mut by_year: BTreeMap<i32, Vec<u32>> = BTreeMap::new();
    for &idx in rows {
        let record = &dataset.records[idx];
        let counts = by_year
            .entry(record.year)
            .or_insert_with(|| vec![0; countries.len()]);
        for (col, &country) in countries.iter().enumerate() {
            if record.has_country(country) {
                counts[col] += 1;
            }
        }
    }

    let (years, counts): (Vec<i32>, Vec<Vec<u32>>) = by_year.into_iter().unzip();
    TemporalTable {
        years,
        countries: countries.to_vec(),
        counts,
    }
}

// ---------------------------------------------------------------------------
// Geographic
// ---------------------------------------------------------------------------

/// Films per country across the filtered records, highest first.
/// Countries without any film in the selection are left out.
pub fn country_ranking(dataset: &FilmDataset, rows: &[usize]) -> Vec<Ranked> {
    let mut counts = vec![0u32; dataset.countries.len()];
    for &idx in rows {
        for &country in &dataset.records[idx].country_ids {
            counts[country] += 1;
        }
    }

    let mut ranking: Vec<Ranked> = counts
        .into_iter()
        .enumerate()
        .filter(|&(_, count)| count > 0)
        .filter_map(|(i, count)| {
            dataset.countries.name(i).map(|name| Ranked {
                name: name.to_string(),
                count,
            })
        })
        .collect();
    sort_ranking(&mut ranking);
    ranking
}

/// Leading `n` entries of a ranking.
pub fn top_n(ranking: &[Ranked], n: usize) -> &[Ranked] {
    &ranking[..n.min(ranking.len())]
}

// ---------------------------------------------------------------------------
// Co-production
// ---------------------------------------------------------------------------

/// Per-year share of films that carry country data.
#[derive(Debug, Clone, PartialEq)]
pub struct YearCoverage {
    pub year: i32,
    pub total: u32,
    pub with_countries: u32,
    /// Rounded to one decimal.
    pub percent_with_data: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CoProduction {
    /// Number of countries per film → number of films.
    pub histogram: BTreeMap<usize, u32>,
    /// Mean countries per film by year, over films with at least one country.
    pub mean_by_year: Vec<(i32, f64)>,
    pub coverage: Vec<YearCoverage>,
}

pub fn coproduction(dataset: &FilmDataset, rows: &[usize]) -> CoProduction {
    let mut histogram: BTreeMap<usize, u32> = BTreeMap::new();
    // year → (films, films with countries, sum of country counts)
    let mut per_year: BTreeMap<i32, (u32, u32, usize)> = BTreeMap::new();

    for &idx in rows {
        let record = &dataset.records[idx];
        let n = record.country_count();
        *histogram.entry(n).or_default() += 1;

        let entry = per_year.entry(record.year).or_default();
        entry.0 += 1;
        if n > 0 {
            entry.1 += 1;
            entry.2 += n;
        }
    }

    let mean_by_year = per_year
        .iter()
        .filter(|(_, counts)| counts.1 > 0)
        .map(|(&year, &(_, with, sum))| (year, sum as f64 / with as f64))
        .collect();

    let coverage = per_year
        .iter()
        .map(|(&year, &(total, with, _))| YearCoverage {
            year,
            total,
            with_countries: with,
            percent_with_data: (with as f64 / total as f64 * 1000.0).round() / 10.0,
        })
        .collect();

    CoProduction {
        histogram,
        mean_by_year,
        coverage,
    }
}

// ---------------------------------------------------------------------------
// Producers
// ---------------------------------------------------------------------------

/// The `n` most frequent producers among filtered films from `country`.
/// Empty when no film matches.
pub fn top_producers(dataset: &FilmDataset, rows: &[usize], country: usize, n: usize) -> Vec<Ranked> {
    let mut counts: HashMap<String, u32> = HashMap::new();
    for &idx in rows {
        let record = &dataset.records[idx];
        if !record.has_country(country) {
            continue;
        }
        for producer in parse_producers(record.producers_raw.as_deref()) {
            *counts.entry(producer).or_default() += 1;
        }
    }

    let mut ranking: Vec<Ranked> = counts
        .into_iter()
        .map(|(name, count)| Ranked { name, count })
        .collect();
    sort_ranking(&mut ranking);
    ranking.truncate(n);
    ranking
}

// ---------------------------------------------------------------------------
// Record browser
// ---------------------------------------------------------------------------

/// Filtered records ordered by year descending, then title ascending.
pub fn browse_order(dataset: &FilmDataset, rows: &[usize]) -> Vec<usize> {
    let mut order = rows.to_vec();
    order.sort_by(|&a, &b| {
        let (ra, rb) = (&dataset.records[a], &dataset.records[b]);
        rb.year.cmp(&ra.year).then_with(|| ra.title.cmp(&rb.title))
    });
    order
}
