use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

use eframe::egui::{self, Color32, RichText};
use food_analyzer_common::view::{self, Emphasis};
use food_analyzer_common::{
    AnalyzerConfig, AnalyzerState, FoodDatabase, FoodRecord, ImageSelection, NutritionInfo,
};

use crate::io::load_preview;
use crate::model::UiMessage;

pub struct DesktopApp {
    config: AnalyzerConfig,
    database: FoodDatabase,
    state: AnalyzerState,
    food_name_input: String,
    preview: Option<egui::TextureHandle>,
    preview_failed: bool,
    status: String,
    tx: Sender<UiMessage>,
    rx: Receiver<UiMessage>,
}

impl DesktopApp {
    pub fn new(config: AnalyzerConfig) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            config,
            database: FoodDatabase::builtin(),
            state: AnalyzerState::new(),
            food_name_input: String::new(),
            preview: None,
            preview_failed: false,
            status: String::new(),
            tx,
            rx,
        }
    }

    fn pick_image(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Image", view::IMAGE_EXTENSIONS)
            .pick_file()
        else {
            return;
        };
        self.select_image(path);
    }

    fn select_image(&mut self, path: PathBuf) {
        let file_name = path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string();
        let preview_url = path.display().to_string();

        if let Some(old) = self.state.select_image(ImageSelection::new(file_name, preview_url.clone())) {
            log::debug!("released preview {}", old.preview_url);
        }
        self.preview = None;
        self.preview_failed = false;
        self.status.clear();

        let sender = self.tx.clone();
        std::thread::spawn(move || {
            let image = load_preview(&path).map_err(|err| format!("{err:#}"));
            let _ = sender.send(UiMessage::PreviewLoaded { preview_url, image });
        });
    }

    fn run_analyze(&mut self) {
        let Some(ticket) = self.state.begin_analysis() else {
            return;
        };

        let delay = Duration::from_millis(u64::from(self.config.analysis_delay_ms));
        let database = self.database.clone();
        let sender = self.tx.clone();
        std::thread::spawn(move || {
            std::thread::sleep(delay);
            let outcome = ticket.run(&database);
            let _ = sender.send(UiMessage::AnalyzeDone { ticket, outcome });
        });
    }

    fn poll_messages(&mut self, ctx: &egui::Context) {
        while let Ok(msg) = self.rx.try_recv() {
            match msg {
                UiMessage::AnalyzeDone { ticket, outcome } => {
                    self.state.finish_analysis(ticket, outcome);
                }
                UiMessage::PreviewLoaded { preview_url, image } => {
                    // 選び直し済みの画像は捨てる
                    if self.state.preview_url() != Some(preview_url.as_str()) {
                        continue;
                    }
                    match image {
                        Ok(image) => {
                            let color_image =
                                egui::ColorImage::from_rgba_unmultiplied(image.size, &image.pixels);
                            self.preview = Some(ctx.load_texture(
                                &preview_url,
                                color_image,
                                egui::TextureOptions::default(),
                            ));
                        }
                        Err(err) => {
                            log::warn!("preview failed: {err}");
                            self.preview_failed = true;
                            self.status = format!("Preview failed: {err}");
                        }
                    }
                }
            }
        }
    }

    /// プレビューのデコード待ち
    fn preview_pending(&self) -> bool {
        self.state.image().is_some() && self.preview.is_none() && !self.preview_failed
    }

    fn needs_repaint(&self) -> bool {
        self.state.is_loading() || self.preview_pending()
    }

    fn render_upload(&mut self, ui: &mut egui::Ui) {
        ui.label(RichText::new(view::UPLOAD_LABEL).strong());
        let frame = egui::Frame::none()
            .stroke(egui::Stroke::new(1.0, Color32::from_gray(120)))
            .rounding(egui::Rounding::same(8.0))
            .inner_margin(egui::Margin::same(12.0));

        let inner = frame.show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.vertical_centered(|ui| {
                if let Some(texture) = &self.preview {
                    ui.add(egui::Image::new(texture).max_size(egui::vec2(360.0, 220.0)));
                } else if let Some(image) = self.state.image().filter(|_| self.preview_pending()) {
                    ui.label(format!("Loading {}...", image.file_name));
                } else {
                    ui.label(RichText::new("📷").size(28.0));
                    ui.label(RichText::new(view::UPLOAD_HINT).color(Color32::from_gray(150)));
                }
            });
        });

        if inner.response.interact(egui::Sense::click()).clicked() {
            self.pick_image();
        }
    }

    fn render_result(ui: &mut egui::Ui, record: &FoodRecord) {
        let frame = egui::Frame::none()
            .stroke(egui::Stroke::new(1.0, Color32::from_gray(80)))
            .rounding(egui::Rounding::same(8.0))
            .inner_margin(egui::Margin::same(10.0));

        frame.show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.heading(&record.name);
            ui.add_space(6.0);

            ui.columns(2, |columns| {
                for (column, (label, flag)) in columns.iter_mut().zip(record.status_items()) {
                    column.label(RichText::new(label).color(Color32::from_gray(150)));
                    column.label(
                        RichText::new(flag.label())
                            .strong()
                            .color(emphasis_color(flag.emphasis())),
                    );
                }
            });

            ui.add_space(6.0);
            ui.label(RichText::new("Description:").strong());
            ui.label(&record.description);

            if let Some(warning) = &record.warning {
                ui.add_space(6.0);
                ui.label(
                    RichText::new(format!("Warning: {warning}"))
                        .color(emphasis_color(Emphasis::Caution)),
                );
            }

            if let Some(nutrition) = &record.nutrition {
                ui.add_space(6.0);
                render_nutrition(ui, nutrition);
            }

            if record.shows_nutrition_unavailable() {
                ui.add_space(6.0);
                ui.label(RichText::new(view::NUTRITION_UNAVAILABLE).italics());
            }
        });
    }
}

fn render_nutrition(ui: &mut egui::Ui, nutrition: &NutritionInfo) {
    ui.label(RichText::new("Nutritional Information:").strong());
    egui::Grid::new("nutrition_grid").striped(true).show(ui, |ui| {
        for (label, value) in nutrition.rows() {
            ui.label(RichText::new(label).color(Color32::from_gray(150)));
            ui.label(RichText::new(value).strong());
            ui.end_row();
        }
    });
    if let Some(line) = nutrition.vitamins_line() {
        ui.horizontal_wrapped(|ui| {
            ui.label(RichText::new("Vitamins & Minerals:").color(Color32::from_gray(150)));
            ui.label(RichText::new(line).strong());
        });
    }
}

fn emphasis_color(emphasis: Emphasis) -> Color32 {
    let [r, g, b] = emphasis.rgb();
    Color32::from_rgb(r, g, b)
}

impl eframe::App for DesktopApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_messages(ctx);
        if self.needs_repaint() {
            ctx.request_repaint_after(Duration::from_millis(50));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading(view::TITLE);
                    ui.label(RichText::new(view::SUBTITLE).color(Color32::from_gray(150)));
                });
                ui.add_space(12.0);

                self.render_upload(ui);
                ui.add_space(12.0);

                ui.label(RichText::new(view::FOOD_NAME_LABEL).strong());
                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.food_name_input)
                        .hint_text(view::FOOD_NAME_PLACEHOLDER)
                        .desired_width(f32::INFINITY),
                );
                if response.changed() {
                    self.state.set_food_name(self.food_name_input.clone());
                }
                ui.add_space(12.0);

                let label = view::analyze_button_label(self.state.is_loading());
                let button = egui::Button::new(label).min_size(egui::vec2(ui.available_width(), 32.0));
                if ui.add_enabled(self.state.can_analyze(), button).clicked() {
                    self.run_analyze();
                }

                if let Some(error) = self.state.error() {
                    ui.add_space(8.0);
                    ui.label(RichText::new(error).color(emphasis_color(Emphasis::Negative)));
                }

                if let Some(record) = self.state.result() {
                    ui.add_space(12.0);
                    Self::render_result(ui, record);
                }

                if !self.status.is_empty() {
                    ui.add_space(8.0);
                    ui.label(RichText::new(&self.status).color(Color32::from_gray(170)));
                }

                if self.config.show_disclaimer {
                    ui.add_space(16.0);
                    ui.label(RichText::new(view::DISCLAIMER).small().color(Color32::from_gray(140)));
                }
            });
        });
    }
}
