use std::path::Path;

use crate::color::CountryColors;
use crate::config::Config;
use crate::data::aggregate::{
    self, CoProduction, Ranked, TemporalTable, browse_order, country_ranking, coproduction,
    top_producers,
};
use crate::data::error::NoDataWarning;
use crate::data::filter::{FilterSpec, SectionFilter, filtered_indices};
use crate::data::loader::load_dataset;
use crate::data::model::FilmDataset;

// ---------------------------------------------------------------------------
// Tabs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Temporal,
    Geographic,
    Producers,
    Records,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Temporal, Tab::Geographic, Tab::Producers, Tab::Records];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Temporal => "📊 Temporal evolution",
            Tab::Geographic => "🌍 Geographic distribution",
            Tab::Producers => "🏢 Producers by country",
            Tab::Records => "📋 Films",
        }
    }
}

// ---------------------------------------------------------------------------
// Per-view results
// ---------------------------------------------------------------------------

pub type ViewResult<T> = Result<T, NoDataWarning>;

/// Aggregates for every view, recomputed together after a filter change.
#[derive(Debug, Clone)]
pub struct DashboardViews {
    pub temporal: ViewResult<TemporalTable>,
    pub ranking: ViewResult<Vec<Ranked>>,
    pub coproduction: ViewResult<CoProduction>,
    pub producers: ViewResult<Vec<Ranked>>,
    /// Filtered record indices in browsing order.
    pub records: Vec<usize>,
}

// ---------------------------------------------------------------------------
// Session – one loaded dataset and everything derived from it
// ---------------------------------------------------------------------------

pub struct Session {
    /// Loaded once, never mutated afterwards.
    pub dataset: FilmDataset,
    pub filters: FilterSpec,
    /// Country whose producers are ranked.
    pub producer_country: Option<usize>,
    pub top_producers: usize,
    pub top_countries: usize,
    pub colors: CountryColors,

    /// Indices of records passing the current filters (cached).
    pub visible_indices: Vec<usize>,
    pub views: DashboardViews,
}

impl Session {
    pub fn new(dataset: FilmDataset, config: &Config) -> Self {
        let filters = FilterSpec::for_dataset(&dataset, config.recent_years);
        let producer_country = if dataset.countries.is_empty() { None } else { Some(0) };
        let colors = CountryColors::new(dataset.countries.len());
        let visible_indices = filtered_indices(&dataset, &filters);
        let views = compute_views(
            &dataset,
            &filters,
            &visible_indices,
            producer_country,
            config.top_producers,
        );
        Session {
            dataset,
            filters,
            producer_country,
            top_producers: config.top_producers,
            top_countries: config.top_countries,
            colors,
            visible_indices,
            views,
        }
    }

    /// Recompute `visible_indices` and every view after a filter change.
    pub fn refilter(&mut self) {
        self.visible_indices = filtered_indices(&self.dataset, &self.filters);
        self.views = compute_views(
            &self.dataset,
            &self.filters,
            &self.visible_indices,
            self.producer_country,
            self.top_producers,
        );
        log::debug!(
            "Refiltered: {} of {} films visible",
            self.visible_indices.len(),
            self.dataset.len()
        );
    }

    pub fn set_year_range(&mut self, year_min: i32, year_max: i32) {
        self.filters.year_min = year_min.min(year_max);
        self.filters.year_max = year_max.max(year_min);
        self.refilter();
    }

    pub fn set_section(&mut self, section: SectionFilter) {
        self.filters.section = section;
        self.refilter();
    }

    pub fn toggle_country(&mut self, country: usize) {
        self.filters.toggle_country(country);
        self.refilter();
    }

    pub fn select_all_countries(&mut self) {
        self.filters.countries = (0..self.dataset.countries.len()).collect();
        self.refilter();
    }

    pub fn select_no_countries(&mut self) {
        self.filters.countries.clear();
        self.refilter();
    }

    pub fn set_producer_country(&mut self, country: usize) {
        self.producer_country = Some(country);
        self.views.producers = producer_view(
            &self.dataset,
            &self.visible_indices,
            self.producer_country,
            self.top_producers,
        );
    }

    /// Section choices for the selector; empty when the sheet has none.
    pub fn section_choices(&self) -> Vec<String> {
        if !self.dataset.has_section {
            return Vec::new();
        }
        self.dataset.sections().into_iter().collect()
    }
}

fn compute_views(
    dataset: &FilmDataset,
    filters: &FilterSpec,
    rows: &[usize],
    producer_country: Option<usize>,
    top_n: usize,
) -> DashboardViews {
    let temporal = if filters.countries.is_empty() {
        Err(NoDataWarning::NoCountriesSelected)
    } else if rows.is_empty() {
        Err(NoDataWarning::NoMatchingRecords)
    } else {
        Ok(aggregate::temporal(dataset, rows, &filters.countries))
    };

    let ranking = if rows.is_empty() {
        Err(NoDataWarning::NoMatchingRecords)
    } else {
        let ranking = country_ranking(dataset, rows);
        if ranking.is_empty() {
            Err(NoDataWarning::NoCountryData)
        } else {
            Ok(ranking)
        }
    };

    let coproduction = if rows.is_empty() {
        Err(NoDataWarning::NoMatchingRecords)
    } else {
        Ok(coproduction(dataset, rows))
    };

    DashboardViews {
        temporal,
        ranking,
        coproduction,
        producers: producer_view(dataset, rows, producer_country, top_n),
        records: browse_order(dataset, rows),
    }
}

fn producer_view(
    dataset: &FilmDataset,
    rows: &[usize],
    country: Option<usize>,
    top_n: usize,
) -> ViewResult<Vec<Ranked>> {
    if dataset.producer_column.is_none() {
        return Err(NoDataWarning::NoProducerColumn);
    }
    let country = country.ok_or(NoDataWarning::NoCountryData)?;
    let top = top_producers(dataset, rows, country, top_n);
    if top.is_empty() {
        return Err(NoDataWarning::NoProducersForCountry {
            country: dataset.countries.name(country).unwrap_or_default().to_string(),
        });
    }
    Ok(top)
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    pub config: Config,

    /// Active dataset session (None when loading failed).
    pub session: Option<Session>,

    /// Load error that ended the startup session, shown instead of the dashboard.
    pub load_error: Option<String>,

    /// Status / error message shown in the top bar.
    pub status_message: Option<String>,

    pub active_tab: Tab,
}

impl AppState {
    /// Load the configured dataset once for this session.
    pub fn from_config(config: Config) -> Self {
        let mut state = AppState {
            config,
            ..Default::default()
        };
        match load_dataset(&state.config.dataset) {
            Ok(dataset) => {
                state.session = Some(Session::new(dataset, &state.config));
            }
            Err(e) => {
                log::error!("Failed to load {}: {e}", state.config.dataset.display());
                state.load_error = Some(e.to_string());
            }
        }
        state
    }

    /// Replace the session with a dataset loaded from `path`.
    /// On failure the current session stays in place.
    pub fn open_file(&mut self, path: &Path) {
        match load_dataset(path) {
            Ok(dataset) => {
                log::info!("Opened {} ({} films)", path.display(), dataset.len());
                self.session = Some(Session::new(dataset, &self.config));
                self.load_error = None;
                self.status_message = None;
            }
            Err(e) => {
                log::error!("Failed to load file: {e}");
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}
