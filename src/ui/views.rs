use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::aggregate::{Ranked, top_n};
use crate::data::error::NoDataWarning;
use crate::data::model::FilmRecord;
use crate::state::Session;
use crate::ui::plot::{YearSeries, category_bars, ranking_bars, year_lines};

const ROW_HEIGHT: f32 = 18.0;
const HEADER_HEIGHT: f32 = 20.0;

fn no_data(ui: &mut Ui, warning: &NoDataWarning) {
    ui.label(RichText::new(format!("🔍 {warning}")).color(Color32::YELLOW));
}

/// Two-column table of a ranking.
fn ranking_table(ui: &mut Ui, id: &str, name_header: &str, entries: &[Ranked]) {
    ui.push_id(id, |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .max_scroll_height(400.0)
            .column(Column::remainder().at_least(120.0))
            .column(Column::auto())
            .header(HEADER_HEIGHT, |mut header| {
                header.col(|ui| {
                    ui.strong(name_header);
                });
                header.col(|ui| {
                    ui.strong("Films");
                });
            })
            .body(|body| {
                body.rows(ROW_HEIGHT, entries.len(), |mut row| {
                    let entry = &entries[row.index()];
                    row.col(|ui| {
                        ui.label(&entry.name);
                    });
                    row.col(|ui| {
                        ui.label(entry.count.to_string());
                    });
                });
            });
    });
}

// ---------------------------------------------------------------------------
// Temporal evolution
// ---------------------------------------------------------------------------

pub fn temporal(ui: &mut Ui, session: &Session) {
    ui.heading("Participation by country over time");

    let table = match &session.views.temporal {
        Ok(t) => t,
        Err(w) => return no_data(ui, w),
    };

    let shares = table.shares();
    let series = |values: &dyn Fn(usize) -> Vec<[f64; 2]>| -> Vec<YearSeries> {
        table
            .countries
            .iter()
            .enumerate()
            .map(|(col, &country)| YearSeries {
                name: session.dataset.countries.name(country).unwrap_or_default().to_string(),
                color: session.colors.color_for(country),
                points: values(col),
            })
            .collect()
    };
    let absolute = series(&|col| table.column(&table.counts, col));
    let relative = series(&|col| table.column(&shares, col));

    ui.columns(2, |cols| {
        cols[0].strong("Films per country");
        year_lines(&mut cols[0], "temporal_absolute", "Films", absolute);
        cols[1].strong("Yearly share per country");
        year_lines(&mut cols[1], "temporal_share", "Share (%)", relative);
    });
}

// ---------------------------------------------------------------------------
// Geographic distribution + co-productions
// ---------------------------------------------------------------------------

pub fn geographic(ui: &mut Ui, session: &Session) {
    let (year_min, year_max) = (session.filters.year_min, session.filters.year_max);
    ui.heading("Geographic representation");

    match &session.views.ranking {
        Ok(ranking) => {
            let top = top_n(ranking, session.top_countries);
            ui.columns(2, |cols| {
                cols[0].strong(format!("Top countries ({year_min}-{year_max})"));
                ranking_bars(&mut cols[0], "geo_top", "Films", top, Color32::LIGHT_BLUE);
                cols[1].strong("Films per country");
                ranking_table(&mut cols[1], "geo_table", "Country", ranking);
            });
        }
        Err(w) => no_data(ui, w),
    }

    ui.separator();
    ui.heading("Co-productions");

    let co = match &session.views.coproduction {
        Ok(co) => co,
        Err(w) => return no_data(ui, w),
    };

    let histogram: Vec<(usize, u32)> = co.histogram.iter().map(|(&k, &v)| (k, v)).collect();
    let mean = vec![YearSeries {
        name: "Countries per film".to_string(),
        color: Color32::LIGHT_GREEN,
        points: co.mean_by_year.iter().map(|&(y, m)| [y as f64, m]).collect(),
    }];

    ui.columns(2, |cols| {
        cols[0].strong("Distribution of co-productions");
        category_bars(&mut cols[0], "coprod_hist", "Number of countries", "Films", &histogram);
        cols[1].strong("Average countries per film");
        if co.mean_by_year.is_empty() {
            no_data(&mut cols[1], &NoDataWarning::NoCountryData);
        } else {
            year_lines(&mut cols[1], "coprod_mean", "Countries per film", mean);
        }
    });

    egui::CollapsingHeader::new("Country data coverage by year")
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            ui.push_id("coverage_table", |ui: &mut Ui| {
                TableBuilder::new(ui)
                    .striped(true)
                    .max_scroll_height(300.0)
                    .columns(Column::auto().at_least(80.0), 4)
                    .header(HEADER_HEIGHT, |mut header| {
                        for title in ["Year", "Films", "With countries", "% with data"] {
                            header.col(|ui| {
                                ui.strong(title);
                            });
                        }
                    })
                    .body(|body| {
                        body.rows(ROW_HEIGHT, co.coverage.len(), |mut row| {
                            let c = &co.coverage[row.index()];
                            row.col(|ui| {
                                ui.label(c.year.to_string());
                            });
                            row.col(|ui| {
                                ui.label(c.total.to_string());
                            });
                            row.col(|ui| {
                                ui.label(c.with_countries.to_string());
                            });
                            row.col(|ui| {
                                ui.label(format!("{:.1}", c.percent_with_data));
                            });
                        });
                    });
            });
        });
}

// ---------------------------------------------------------------------------
// Producers by country
// ---------------------------------------------------------------------------

pub fn producers(ui: &mut Ui, session: &mut Session) {
    ui.heading("Leading producers by country");

    if session.dataset.producer_column.is_none() {
        return no_data(ui, &NoDataWarning::NoProducerColumn);
    }

    let current = session
        .producer_country
        .and_then(|c| session.dataset.countries.name(c))
        .unwrap_or_default()
        .to_string();
    let mut picked = None;
    egui::ComboBox::from_label("Country")
        .selected_text(&current)
        .height(400.0)
        .show_ui(ui, |ui: &mut Ui| {
            for (idx, name) in session.dataset.countries.names().iter().enumerate() {
                if ui
                    .selectable_label(session.producer_country == Some(idx), name)
                    .clicked()
                {
                    picked = Some(idx);
                }
            }
        });
    if let Some(idx) = picked {
        session.set_producer_country(idx);
    }

    let top = match &session.views.producers {
        Ok(top) => top,
        Err(w) => return no_data(ui, w),
    };
    let color = session
        .producer_country
        .map(|c| session.colors.color_for(c))
        .unwrap_or(Color32::LIGHT_BLUE);

    ui.columns(2, |cols| {
        cols[0].strong(format!("Top producers of {current}"));
        ranking_bars(&mut cols[0], "producers_top", "Films", top, color);
        ranking_table(&mut cols[1], "producers_table", "Producer", top);
    });
}

// ---------------------------------------------------------------------------
// Record browser
// ---------------------------------------------------------------------------

fn record_title(r: &FilmRecord) -> String {
    r.title.clone()
}

fn record_director(r: &FilmRecord) -> String {
    r.director.clone()
}

fn record_year(r: &FilmRecord) -> String {
    r.year.to_string()
}

fn record_section(r: &FilmRecord) -> String {
    r.section.clone().unwrap_or_default()
}

fn record_countries(r: &FilmRecord) -> String {
    r.countries_raw.clone().unwrap_or_default()
}

fn record_producers(r: &FilmRecord) -> String {
    r.producers_raw.clone().unwrap_or_default()
}

pub fn records(ui: &mut Ui, session: &Session) {
    ui.heading("Films in the selection");

    let ds = &session.dataset;
    let mut columns: Vec<(&str, fn(&FilmRecord) -> String)> = Vec::new();
    columns.push(("Title", record_title));
    columns.push(("Director", record_director));
    columns.push(("Year", record_year));
    if ds.has_section {
        columns.push(("Section", record_section));
    }
    columns.push(("Countries", record_countries));
    if ds.producer_column.is_some() {
        columns.push(("Producers", record_producers));
    }

    let order = &session.views.records;
    if order.is_empty() {
        return no_data(ui, &NoDataWarning::NoMatchingRecords);
    }

    ui.push_id("records_table", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .columns(Column::initial(160.0).at_least(40.0).clip(true), columns.len())
            .header(HEADER_HEIGHT, |mut header| {
                for (title, _) in &columns {
                    header.col(|ui| {
                        ui.strong(*title);
                    });
                }
            })
            .body(|body| {
                body.rows(ROW_HEIGHT, order.len(), |mut row| {
                    let record = &ds.records[order[row.index()]];
                    for (_, value) in &columns {
                        row.col(|ui| {
                            ui.label(value(record));
                        });
                    }
                });
            });
    });
}
