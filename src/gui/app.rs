//! Main application window: form, entry table, action buttons

use eframe::egui;
use weight_station::app::WeighingSession;
use weight_station::config::Config;
use weight_station::domain::model::Entry;
use weight_station::export::ticket;
use weight_station::store::{EntryStore, LayoutStore};

use crate::entries_panel;
use crate::entry_panel::EntryPanel;

/// Main application state
pub struct WeightStationApp {
    config: Config,
    store: EntryStore,
    layout_store: LayoutStore,
    session: WeighingSession,
    entry_panel: EntryPanel,
    /// Serial currently typed into the search box
    search_serial: String,
    /// Entry shown in the search-result table, if the last search hit
    search_result: Option<Entry>,
    /// Transient message line at the bottom of the window
    notification: String,
}

impl WeightStationApp {
    /// Create a new application instance
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut style = (*cc.egui_ctx.style()).clone();
        style.animation_time = 0.1; // Faster animations
        cc.egui_ctx.set_style(style);

        let config = Config::load().unwrap_or_default();

        let store_dir = config
            .store_dir()
            .unwrap_or_else(|_| std::env::temp_dir().join("weight-station"));
        let store = EntryStore::open(store_dir.clone()).unwrap_or_else(|_| {
            let fallback_dir = std::env::temp_dir().join("weight-station-fallback");
            EntryStore::open(fallback_dir).expect("Failed to create fallback store")
        });
        let layout_store = LayoutStore::open(store_dir).unwrap_or_else(|_| {
            let fallback_dir = std::env::temp_dir().join("weight-station-fallback");
            LayoutStore::open(fallback_dir).expect("Failed to create fallback layout store")
        });

        let session = WeighingSession::fresh(&store, config.validation);

        Self {
            config,
            store,
            layout_store,
            session,
            entry_panel: EntryPanel::new(),
            search_serial: String::new(),
            search_result: None,
            notification: String::new(),
        }
    }

    fn on_save(&mut self) {
        self.notification = match self.session.save(&mut self.store) {
            Ok(_) => "Entry saved successfully".to_string(),
            Err(e) => e.to_string(),
        };
    }

    fn on_new(&mut self) {
        self.session.start_new(&self.store);
        self.search_result = None;
        self.search_serial.clear();
        self.notification.clear();
    }

    fn on_search(&mut self) {
        let serial = self.search_serial.trim().to_string();
        if self.session.search_by_serial(&self.store, &serial) {
            self.search_result = self.store.find_by_serial(&serial).cloned();
            self.notification = "Entry found".to_string();
        } else {
            self.search_result = None;
            self.notification = "No entry found with this serial number".to_string();
        }
    }

    fn on_print(&mut self) {
        let Some(entry) = self.session.last_saved() else {
            self.notification = "Please save an entry before printing".to_string();
            return;
        };

        let path = self
            .config
            .store_dir()
            .unwrap_or_else(|_| std::env::temp_dir())
            .join(format!("ticket-{}.html", entry.serial_number));

        self.notification =
            match ticket::write_ticket(&path, entry, self.layout_store.positions()) {
                Ok(()) => format!("Ticket written to {}", path.display()),
                Err(e) => e.to_string(),
            };
    }

    /// Load a repositioning message exported by the print page
    fn on_import_layout(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .pick_file()
        else {
            return;
        };

        self.notification = match std::fs::read_to_string(&path) {
            Ok(json) => match self.layout_store.apply_json(&json) {
                Ok(()) => "Print layout updated".to_string(),
                Err(e) => format!("Layout not applied: {}", e),
            },
            Err(e) => format!("Failed to read {}: {}", path.display(), e),
        };
    }

    fn render_buttons(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("New").clicked() {
                self.on_new();
            }
            if ui.button("Save").clicked() {
                self.on_save();
            }
            if ui.button("Print").clicked() {
                self.on_print();
            }
            if ui.button("Import Layout").clicked() {
                self.on_import_layout();
            }

            ui.separator();

            ui.add(
                egui::TextEdit::singleline(&mut self.search_serial)
                    .hint_text("Enter Serial Number")
                    .desired_width(140.0),
            );
            if ui.button("Entry by Serial").clicked() {
                self.on_search();
            }
        });
    }
}

impl eframe::App for WeightStationApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Weight Station");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let now = chrono::Local::now();
                    ui.label(now.format("%Y-%m-%d %H:%M:%S").to_string());
                });
            });
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            if self.notification.is_empty() {
                ui.label("");
            } else {
                ui.colored_label(egui::Color32::from_rgb(200, 120, 0), &self.notification);
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.columns(2, |columns| {
                self.entry_panel.ui(&mut columns[0], &mut self.session);
                entries_panel::ui(
                    &mut columns[1],
                    self.store.recent(self.config.recent_rows),
                    self.search_result.as_ref(),
                );
            });

            ui.add_space(12.0);
            self.render_buttons(ui);
        });

        // Keep the header clock moving
        ctx.request_repaint_after(std::time::Duration::from_millis(500));
    }
}
