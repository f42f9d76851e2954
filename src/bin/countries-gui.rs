/*!
 * GUI application for countries-rs
 *
 * A desktop window with a search field, two buttons ("Search" and "All countries"),
 * the statistics block and the countries, regions and languages tables.
 *
 * Requests run on background threads and report back over a single channel, so
 * whichever request finishes last is what stays on screen.
 */

use countries_rs::controller::EMPTY_QUERY_ALERT;
use countries_rs::{Action, Client, Config, Controller, Outcome, Page, Surface, TableKind};
use eframe::egui;
use std::sync::mpsc;
use std::thread;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_min_inner_size([600.0, 400.0])
            .with_title("Countries - countries-rs"),
        ..Default::default()
    };

    eframe::run_native(
        "Countries",
        options,
        Box::new(|_cc| Ok(Box::new(CountriesApp::new(Config::default())))),
    )
}

/// What a background request hands back to the UI thread.
#[derive(Debug)]
struct Response {
    action: Action,
    page: Page,
    outcome: Outcome,
}

/// Main application state
struct CountriesApp {
    query: String,
    locale: String,
    client: Result<Client, String>,

    page: Page,
    /// Repeated when the locale changes so the page on screen follows it.
    last_action: Option<Action>,
    in_flight: usize,
    status_message: String,
    error_message: String,

    sender: mpsc::Sender<Response>,
    receiver: mpsc::Receiver<Response>,
}

impl CountriesApp {
    fn new(config: Config) -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            query: String::new(),
            locale: config.locale.clone(),
            client: Client::new(&config).map_err(|e| format!("{e:#}")),
            page: Page::new(),
            last_action: None,
            in_flight: 0,
            status_message: String::new(),
            error_message: String::new(),
            sender,
            receiver,
        }
    }

    fn start(&mut self, action: Action) {
        if let Action::Search(q) = &action
            && q.trim().is_empty()
        {
            self.page.alert(EMPTY_QUERY_ALERT);
            return;
        }

        let client = match &self.client {
            Ok(c) => c.clone(),
            Err(e) => {
                self.error_message = format!("HTTP client unavailable: {e}");
                return;
            }
        };

        self.last_action = Some(action.clone());
        self.in_flight += 1;
        self.error_message.clear();
        self.status_message = "Fetching data from REST Countries...".to_string();

        let sender = self.sender.clone();
        let locale = self.locale.clone();
        thread::spawn(move || {
            let controller = Controller::new(client, locale);
            let mut page = Page::new();
            let outcome = controller.run(&action, &mut page);
            let _ = sender.send(Response {
                action,
                page,
                outcome,
            });
        });
    }

    /// Apply finished requests in arrival order.
    fn check_responses(&mut self) {
        while let Ok(resp) = self.receiver.try_recv() {
            self.in_flight = self.in_flight.saturating_sub(1);
            match resp.outcome {
                Outcome::Rendered { records, .. } => {
                    self.page = resp.page;
                    self.status_message = format!("Loaded {} countries", records.len());
                    self.error_message.clear();
                }
                Outcome::NoResults => {
                    self.page = resp.page;
                    self.status_message = "No results".to_string();
                    self.error_message.clear();
                }
                Outcome::EmptyQuery => {
                    self.page.alert(EMPTY_QUERY_ALERT);
                }
                Outcome::Failed(err) => {
                    let what = match resp.action {
                        Action::ListAll => "all countries".to_string(),
                        Action::Search(q) => format!("\"{}\"", q.trim()),
                    };
                    self.error_message = format!("Failed to load {what}: {err}");
                    self.status_message.clear();
                }
            }
        }
    }

    fn show_alert(&mut self, ctx: &egui::Context) {
        let Some(message) = self.page.alert.clone() else {
            return;
        };
        egui::Window::new("Notice")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(&message);
                if ui.button("OK").clicked() {
                    self.page.take_alert();
                }
            });
    }
}

impl eframe::App for CountriesApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_responses();

        // Keep polling while requests are outstanding
        if self.in_flight > 0 {
            ctx.request_repaint();
        }

        self.show_alert(ctx);
        let blocked = self.page.alert.is_some();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!blocked, |ui| {
                ui.heading("Countries");
                ui.add_space(10.0);

                ui.horizontal(|ui| {
                    ui.label("Country name:");
                    let field = ui
                        .text_edit_singleline(&mut self.query)
                        .on_hover_text("Full or partial country name, e.g. peru");
                    let submitted =
                        field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

                    if ui.button("Search").clicked() || submitted {
                        self.start(Action::Search(self.query.clone()));
                    }
                    if ui.button("All countries").clicked() {
                        self.start(Action::ListAll);
                    }

                    let previous_locale = self.locale.clone();
                    egui::ComboBox::from_label("Locale")
                        .selected_text(&self.locale)
                        .show_ui(ui, |ui| {
                            for (tag, label) in [
                                ("en", "English (en)"),
                                ("de", "German (de)"),
                                ("fr", "French (fr)"),
                                ("es", "Spanish (es)"),
                                ("it", "Italian (it)"),
                            ] {
                                ui.selectable_value(&mut self.locale, tag.to_string(), label);
                            }
                        });
                    if self.locale != previous_locale
                        && let Some(action) = self.last_action.clone()
                    {
                        self.start(action);
                    }

                    if self.in_flight > 0 {
                        ui.spinner();
                    }
                });

                if !self.status_message.is_empty() {
                    ui.colored_label(egui::Color32::DARK_GREEN, &self.status_message);
                }
                if !self.error_message.is_empty() {
                    ui.colored_label(egui::Color32::RED, &self.error_message);
                }

                ui.separator();

                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.group(|ui| {
                        ui.label("Statistics");
                        for para in &self.page.statistics {
                            ui.add_space(4.0);
                            for line in para {
                                ui.label(line);
                            }
                        }
                    });

                    for table in TableKind::ALL {
                        ui.add_space(10.0);
                        show_table(ui, table, self.page.rows(table));
                    }
                });
            });
        });
    }
}

fn show_table(ui: &mut egui::Ui, table: TableKind, rows: &[Vec<String>]) {
    egui::CollapsingHeader::new(format!("{} ({})", table.title(), rows.len()))
        .default_open(true)
        .show(ui, |ui| {
            egui::Grid::new(table.html_id())
                .striped(true)
                .num_columns(table.headers().len())
                .show(ui, |ui| {
                    for h in table.headers() {
                        ui.strong(*h);
                    }
                    ui.end_row();
                    for row in rows {
                        for cell in row {
                            ui.label(cell);
                        }
                        ui.end_row();
                    }
                });
        });
}
