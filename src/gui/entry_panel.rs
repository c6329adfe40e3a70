//! Input form for the in-progress weighing

use eframe::egui::{self, RichText};
use weight_station::app::WeighingSession;

/// Left-hand form: identifying fields, the two weight readings, and the
/// derived results
pub struct EntryPanel {
    /// Editable mirror of the second weight; the session recomputes the
    /// derived fields the moment this changes
    second_weight_input: f64,
    last_serial: String,
}

impl EntryPanel {
    pub fn new() -> Self {
        Self {
            second_weight_input: 0.0,
            last_serial: String::new(),
        }
    }

    /// Render the form
    pub fn ui(&mut self, ui: &mut egui::Ui, session: &mut WeighingSession) {
        // Resync the mirror when the session was swapped under us
        // (New action or a search hit)
        if self.last_serial != session.serial_number()
            || (self.second_weight_input != session.second_weight()
                && session.second_weight() == 0.0)
        {
            self.second_weight_input = session.second_weight();
            self.last_serial = session.serial_number().to_string();
        }

        ui.label("Serial Number:");
        ui.label(RichText::new(session.serial_number()).strong().size(18.0));
        if session.is_editing() {
            ui.label(RichText::new("(editing existing entry)").small());
        }
        ui.add_space(8.0);

        ui.label("Vehicle Number:");
        if ui.text_edit_singleline(&mut session.vehicle_number).changed() {
            session.mark_filling();
        }

        ui.label("Driver/Owner Name:");
        if ui.text_edit_singleline(&mut session.driver_name).changed() {
            session.mark_filling();
        }

        ui.label("Amount:");
        if ui
            .add(egui::DragValue::new(&mut session.amount).range(0.0..=f64::MAX))
            .changed()
        {
            session.mark_filling();
        }

        ui.add_space(8.0);
        ui.label("First Weight (kg):");
        if ui
            .add(egui::DragValue::new(&mut session.first_weight).range(0.0..=f64::MAX))
            .changed()
        {
            session.mark_filling();
        }

        ui.label("Second Weight (kg):");
        if ui
            .add(egui::DragValue::new(&mut self.second_weight_input).range(0.0..=f64::MAX))
            .changed()
        {
            session.set_second_weight(self.second_weight_input);
        }

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.label("Final Weight:");
            ui.label(
                RichText::new(format!("{} kg", session.final_weight()))
                    .strong()
                    .size(18.0),
            );
        });
        ui.horizontal(|ui| {
            ui.label("Weight per 40:");
            ui.label(RichText::new(session.weight_per_40()).strong().size(18.0));
        });

        if let (Some(date), Some(time)) = (session.second_date(), session.second_time()) {
            ui.add_space(4.0);
            ui.label(format!("Second weighing: {} {}", date, time));
        }
        if !session.date().is_empty() {
            ui.label(format!(
                "First weighing: {} {}",
                session.date(),
                session.time()
            ));
        }
    }
}
