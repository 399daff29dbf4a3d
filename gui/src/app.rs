use ascii_ramp::config::{DEFAULT_WIDTH, MAX_UI_WIDTH, MIN_UI_WIDTH};
use ascii_ramp::{AsciiArt, ConvertConfig, ConvertError, RampPreset, convert, load_image};
use eframe::egui;
use image::{DynamicImage, RgbaImage};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Largest preview texture edge; bigger sources are downscaled for display only
const MAX_PREVIEW_SIZE: u32 = 1024;

/// Extensions offered by the open dialog
const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

/// The user-controlled conversion parameters
///
/// Treated as an immutable value: the UI builds a fresh one every frame and
/// the artifact is regenerated whenever it differs from the one last rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertParams {
    pub width: u32,
    pub preset: RampPreset,
}

impl Default for ConvertParams {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            preset: RampPreset::default(),
        }
    }
}

impl ConvertParams {
    pub fn config(&self) -> ConvertConfig {
        ConvertConfig::default()
            .with_width(self.width)
            .with_preset(self.preset)
    }
}

/// The currently selected source image, decoded once and reused on every parameter change
struct LoadedImage {
    path: PathBuf,
    image: DynamicImage,
}

enum Status {
    Info(String),
    Error(String),
}

/// Main application state for the ASCII Ramp GUI
pub struct AsciiApp {
    /// Selected source image
    source: Option<LoadedImage>,
    /// Parameters currently shown in the controls
    params: ConvertParams,
    /// Parameters the current artifact was rendered with
    rendered_params: Option<ConvertParams>,
    /// Latest conversion result
    artifact: Option<AsciiArt>,

    /// Texture handle for the source preview
    input_texture: Option<egui::TextureHandle>,

    /// Last processing time in milliseconds
    last_process_time_ms: f64,
    /// Message shown above the panels (if any)
    status: Option<Status>,
}

impl Default for AsciiApp {
    fn default() -> Self {
        Self {
            source: None,
            params: ConvertParams::default(),
            rendered_params: None,
            artifact: None,
            input_texture: None,
            last_process_time_ms: 0.0,
            status: None,
        }
    }
}

impl AsciiApp {
    /// Create a new application
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Load an image from file path
    ///
    /// On failure the previously loaded image and artifact are kept.
    pub fn load_image(&mut self, path: &Path) {
        match load_image(path) {
            Ok(image) => {
                log::info!("loaded {}", path.display());
                self.source = Some(LoadedImage {
                    path: path.to_path_buf(),
                    image,
                });
                self.input_texture = None; // Clear old texture
                self.rendered_params = None;
                self.status = None;
            }
            Err(e) => {
                log::warn!("{e}");
                self.status = Some(Status::Error(format!("Could not open image: {e}")));
            }
        }
    }

    /// Save the artifact as a UTF-8 text file
    pub fn save_output(&self, path: &Path) -> Result<(), ConvertError> {
        match &self.artifact {
            Some(art) => art.save(path),
            None => Ok(()),
        }
    }

    /// Re-run the pipeline with the current parameters and replace the artifact whole
    fn process(&mut self) {
        let Some(source) = &self.source else {
            return;
        };
        let params = self.params;
        let start = Instant::now();

        match convert(&source.image, &params.config()) {
            Ok(art) => {
                self.last_process_time_ms = start.elapsed().as_secs_f64() * 1000.0;
                self.artifact = Some(art);
                if matches!(self.status, Some(Status::Error(_))) {
                    self.status = None;
                }
            }
            Err(e) => {
                log::warn!("conversion of {} failed: {e}", source.path.display());
                self.artifact = None;
                self.status = Some(Status::Error(e.to_string()));
            }
        }
        self.rendered_params = Some(params);
    }

    fn open_dialog(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", &IMAGE_EXTENSIONS)
            .pick_file()
        {
            self.load_image(&path);
        }
    }

    fn save_dialog(&mut self) {
        if self.artifact.is_none() {
            return;
        }
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Text files", &["txt"])
            .set_file_name("ascii_art.txt")
            .save_file()
        {
            self.status = Some(match self.save_output(&path) {
                Ok(()) => Status::Info(format!("Saved to {}", path.display())),
                Err(e) => {
                    log::warn!("{e}");
                    Status::Error(e.to_string())
                }
            });
        }
    }

    fn copy_to_clipboard(&mut self, ctx: &egui::Context) {
        if let Some(art) = &self.artifact {
            ctx.copy_text(art.as_str().to_owned());
            self.status = Some(Status::Info("ASCII art copied to clipboard".to_string()));
        }
    }

    /// Render the parameter controls and return the parameters they now describe
    fn render_controls(&self, ui: &mut egui::Ui) -> ConvertParams {
        let mut width = self.params.width;
        let mut preset = self.params.preset;

        ui.add(egui::Slider::new(&mut width, MIN_UI_WIDTH..=MAX_UI_WIDTH).text("Width"))
            .on_hover_text("Output width in characters");

        ui.add_space(16.0);

        egui::ComboBox::from_label("Character set")
            .selected_text(preset.label())
            .show_ui(ui, |ui| {
                for &option in RampPreset::all() {
                    ui.selectable_value(&mut preset, option, option.label());
                }
            });

        if self.last_process_time_ms > 0.0 {
            ui.add_space(16.0);
            ui.label(format!("Last process: {:.1} ms", self.last_process_time_ms));
        }

        ConvertParams { width, preset }
    }

    /// Convert RgbaImage to egui ColorImage
    fn rgba_to_color_image(img: &RgbaImage) -> egui::ColorImage {
        let (width, height) = img.dimensions();
        let pixels = img
            .pixels()
            .map(|p| egui::Color32::from_rgba_unmultiplied(p[0], p[1], p[2], p[3]))
            .collect();

        egui::ColorImage {
            size: [width as usize, height as usize],
            source_size: egui::Vec2::new(width as f32, height as f32),
            pixels,
        }
    }

    /// Display the source image preview
    fn display_image(
        ui: &mut egui::Ui,
        source: Option<&LoadedImage>,
        texture: &mut Option<egui::TextureHandle>,
    ) {
        ui.vertical(|ui| {
            ui.heading("Source Image");

            let Some(source) = source else {
                ui.label("Your image will appear here");
                return;
            };

            // Update texture if needed
            if texture.is_none() {
                let img = &source.image;
                let preview = if img.width() > MAX_PREVIEW_SIZE || img.height() > MAX_PREVIEW_SIZE
                {
                    img.thumbnail(MAX_PREVIEW_SIZE, MAX_PREVIEW_SIZE).to_rgba8()
                } else {
                    img.to_rgba8()
                };
                *texture = Some(ui.ctx().load_texture(
                    "source",
                    Self::rgba_to_color_image(&preview),
                    egui::TextureOptions::default(),
                ));
            }

            if let Some(tex) = texture {
                let size = tex.size_vec2();
                let max_size = ui.available_size() - egui::vec2(0.0, 24.0);
                let scale = (max_size.x / size.x).min(max_size.y / size.y).min(4.0);

                ui.image((tex.id(), size * scale));
                ui.label(format!(
                    "{} ({}x{})",
                    source
                        .path
                        .file_name()
                        .map(|n| n.to_string_lossy())
                        .unwrap_or_default(),
                    source.image.width(),
                    source.image.height()
                ));
            }
        });
    }

    /// Display the artifact in a scrollable monospace view
    fn display_artifact(ui: &mut egui::Ui, artifact: Option<&AsciiArt>) {
        ui.vertical(|ui| {
            ui.heading("ASCII Art");

            match artifact {
                Some(art) => {
                    egui::ScrollArea::both()
                        .auto_shrink([false, false])
                        .show(ui, |ui| {
                            ui.add(
                                egui::Label::new(egui::RichText::new(art.as_str()).monospace())
                                    .wrap_mode(egui::TextWrapMode::Extend),
                            );
                        });
                }
                None => {
                    ui.label("Load an image to create ASCII art");
                }
            }
        });
    }
}

impl eframe::App for AsciiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Image...").clicked() {
                        self.open_dialog();
                        ui.close();
                    }

                    if ui
                        .add_enabled(self.artifact.is_some(), egui::Button::new("Save Output..."))
                        .clicked()
                    {
                        self.save_dialog();
                        ui.close();
                    }

                    ui.separator();

                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        self.status = Some(Status::Info(
                            "ASCII Ramp\nMaps pixel luminance onto a character ramp\n\nBuilt with Rust + egui".to_string(),
                        ));
                        ui.close();
                    }
                });
            });
        });

        // Toolbar: open button and conversion parameters
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                if ui.button("Open Image...").clicked() {
                    self.open_dialog();
                }

                ui.add_space(16.0);

                self.params = self.render_controls(ui);
            });
            ui.add_space(4.0);
        });

        // Bottom bar: export actions
        egui::TopBottomPanel::bottom("actions").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                let has_artifact = self.artifact.is_some();

                if ui
                    .add_enabled(has_artifact, egui::Button::new("Copy to Clipboard"))
                    .clicked()
                {
                    self.copy_to_clipboard(ctx);
                }

                if ui
                    .add_enabled(has_artifact, egui::Button::new("Save to File..."))
                    .clicked()
                {
                    self.save_dialog();
                }
            });
            ui.add_space(4.0);
        });

        // Re-render when the parameters moved since the last conversion
        if self.source.is_some() && self.rendered_params != Some(self.params) {
            self.process();
        }

        // Central panel: source preview and artifact side-by-side
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut dismiss = false;
            if let Some(status) = &self.status {
                match status {
                    Status::Info(msg) => ui.label(msg),
                    Status::Error(msg) => ui.colored_label(egui::Color32::RED, msg),
                };
                dismiss = ui.button("Dismiss").clicked();
                ui.separator();
            }
            if dismiss {
                self.status = None;
            }

            ui.horizontal(|ui| {
                let available_width = ui.available_width();
                let preview_width = available_width * 0.3 - 8.0;
                let artifact_width = available_width - preview_width - 16.0;

                ui.allocate_ui_with_layout(
                    egui::vec2(preview_width, ui.available_height()),
                    egui::Layout::top_down(egui::Align::Center),
                    |ui| {
                        Self::display_image(ui, self.source.as_ref(), &mut self.input_texture);
                    },
                );

                ui.separator();

                ui.allocate_ui_with_layout(
                    egui::vec2(artifact_width, ui.available_height()),
                    egui::Layout::top_down(egui::Align::Min),
                    |ui| {
                        Self::display_artifact(ui, self.artifact.as_ref());
                    },
                );
            });
        });
    }
}
