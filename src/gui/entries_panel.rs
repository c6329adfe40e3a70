//! Recent entries / search result table

use eframe::egui::{self, RichText};
use weight_station::domain::model::Entry;

/// Right-hand table: the last search hit when there is one, otherwise
/// the most recent saved entries in store order.
pub fn ui(ui: &mut egui::Ui, recent: &[Entry], search_result: Option<&Entry>) {
    match search_result {
        Some(entry) => {
            ui.heading("Search Result");
            ui.separator();
            table(ui, std::slice::from_ref(entry));
        }
        None => {
            ui.heading("Recent Entries");
            ui.separator();
            if recent.is_empty() {
                ui.label(RichText::new("No entries saved yet").color(egui::Color32::GRAY));
            } else {
                table(ui, recent);
            }
        }
    }
}

fn table(ui: &mut egui::Ui, entries: &[Entry]) {
    egui::Grid::new("entries_table")
        .striped(true)
        .min_col_width(60.0)
        .show(ui, |ui| {
            for header in ["Serial", "Date", "Time", "First", "Second", "Final"] {
                ui.label(RichText::new(header).strong());
            }
            ui.end_row();

            for entry in entries {
                ui.label(&entry.serial_number);
                ui.label(&entry.date);
                ui.label(&entry.time);
                ui.label(RichText::new(format!("{}", entry.first_weight)).strong());
                ui.label(RichText::new(format!("{}", entry.second_weight)).strong());
                ui.label(RichText::new(format!("{}", entry.final_weight)).strong());
                ui.end_row();
            }
        });
}
