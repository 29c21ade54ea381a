use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::filter::SectionFilter;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let session = match state.session.as_mut() {
        Some(s) => s,
        None => {
            ui.label("No dataset loaded.");
            return;
        }
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Year range ----
            if let Some((min_year, max_year)) = session.dataset.year_bounds() {
                ui.strong("Years");
                let mut from = session.filters.year_min;
                let mut to = session.filters.year_max;
                let changed_from = ui
                    .add(egui::Slider::new(&mut from, min_year..=max_year).text("from"))
                    .changed();
                let changed_to = ui
                    .add(egui::Slider::new(&mut to, min_year..=max_year).text("to"))
                    .changed();
                if changed_from || changed_to {
                    session.set_year_range(from, to);
                }
                ui.separator();
            }

            egui::CollapsingHeader::new(RichText::new("Advanced filters").strong())
                .default_open(true)
                .show(ui, |ui: &mut Ui| {
                    // ---- Section selector ----
                    let sections = session.section_choices();
                    if !sections.is_empty() {
                        let current = match &session.filters.section {
                            SectionFilter::All => "All".to_string(),
                            SectionFilter::Only(s) => s.clone(),
                        };
                        let mut picked: Option<SectionFilter> = None;
                        egui::ComboBox::from_label("Section")
                            .selected_text(current)
                            .show_ui(ui, |ui: &mut Ui| {
                                let is_all = session.filters.section == SectionFilter::All;
                                if ui.selectable_label(is_all, "All").clicked() {
                                    picked = Some(SectionFilter::All);
                                }
                                for section in &sections {
                                    let candidate = SectionFilter::Only(section.clone());
                                    let is_current = session.filters.section == candidate;
                                    if ui.selectable_label(is_current, section).clicked() {
                                        picked = Some(candidate);
                                    }
                                }
                            });
                        if let Some(section) = picked {
                            session.set_section(section);
                        }
                        ui.separator();
                    }

                    // ---- Countries plotted in the temporal view ----
                    let n_total = session.dataset.countries.len();
                    let n_selected = session.filters.countries.len();
                    ui.strong(format!("Countries  ({n_selected}/{n_total})"));
                    ui.horizontal(|ui: &mut Ui| {
                        if ui.small_button("All").clicked() {
                            session.select_all_countries();
                        }
                        if ui.small_button("None").clicked() {
                            session.select_no_countries();
                        }
                    });

                    let mut toggled = Vec::new();
                    for (idx, name) in session.dataset.countries.names().iter().enumerate() {
                        let mut checked = session.filters.countries.binary_search(&idx).is_ok();
                        let text = RichText::new(name).color(session.colors.color_for(idx));
                        if ui.checkbox(&mut checked, text).changed() {
                            toggled.push(idx);
                        }
                    }
                    for idx in toggled {
                        session.toggle_country(idx);
                    }
                });
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(session) = &state.session {
            ui.label(format!(
                "{} films loaded, {} visible",
                session.dataset.len(),
                session.visible_indices.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open festival dataset")
        .add_filter("Supported files", &["xlsx", "xls", "ods", "csv", "json", "parquet", "pq"])
        .add_filter("Spreadsheet", &["xlsx", "xls", "ods"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        state.open_file(&path);
    }
}
