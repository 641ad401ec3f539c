//! Bezier-Polar-Editor.
//!
//! Interaktiver Editor für eine Bezier-Kurve und ihre Polarkurve.
//! egui für die Oberfläche, Rasterisierung per wgpu-Compute-Shader.

use bezier_polar_editor::render::{CurveRenderer, RenderError};
use bezier_polar_editor::{ui, AppController, AppIntent, AppState, EditorOptions};
use eframe::egui;
use eframe::egui_wgpu;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Bezier-Polar-Editor v{} startet...", env!("CARGO_PKG_VERSION"));

        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);
        if !config_path.exists() {
            if let Err(e) = editor_options.save_to_file(&config_path) {
                log::warn!("Standard-Optionen konnten nicht geschrieben werden: {:#}", e);
            }
        }

        let present_mode = if editor_options.vsync {
            wgpu::PresentMode::AutoVsync
        } else {
            wgpu::PresentMode::AutoNoVsync
        };

        let native_options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(editor_options.window_size)
                .with_title("Bezier-Polar-Editor"),
            renderer: eframe::Renderer::Wgpu,
            vsync: editor_options.vsync,
            wgpu_options: egui_wgpu::WgpuConfiguration {
                present_mode,
                ..Default::default()
            },
            ..Default::default()
        };

        eframe::run_native(
            "Bezier-Polar-Editor",
            native_options,
            Box::new(move |cc| {
                let render_state = cc.wgpu_render_state.as_ref().ok_or_else(|| {
                    anyhow::anyhow!(
                        "wgpu nicht verfügbar: Renderer konnte nicht initialisiert werden"
                    )
                })?;
                ui::theme::apply(&cc.egui_ctx, &editor_options);
                Ok(Box::new(EditorApp::new(render_state, editor_options)?))
            }),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    renderer: CurveRenderer,
    render_state: egui_wgpu::RenderState,
    texture_id: egui::TextureId,
}

impl EditorApp {
    fn new(
        render_state: &egui_wgpu::RenderState,
        editor_options: EditorOptions,
    ) -> anyhow::Result<Self> {
        let mut state = AppState::with_options(editor_options);
        // Erster Sync lädt alles hoch
        state.dirty.mark_all();

        let shader_path = EditorOptions::resolve_asset(&state.options.shader_path);
        let renderer = CurveRenderer::new(
            &render_state.device,
            &shader_path,
            state.view.viewport_size,
        )?;

        let texture_id = render_state.renderer.write().register_native_texture(
            &render_state.device,
            renderer.view(),
            wgpu::FilterMode::Nearest,
        );

        Ok(Self {
            state,
            controller: AppController::new(),
            renderer,
            render_state: render_state.clone(),
            texture_id,
        })
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::CursorMoved { .. }));

        self.process_events(events);

        self.sync_gpu();
        self.renderer
            .dispatch(&self.render_state.device, &self.render_state.queue);

        if has_meaningful_events || ctx.input(|i| i.pointer.is_moving()) {
            ctx.request_repaint();
        }
    }
}

impl EditorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        if ctx.input(|i| i.viewport().close_requested()) {
            events.push(AppIntent::ExitRequested);
        }

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_properties_panel(ctx, &self.state));
        events.extend(ui::render_viewport(
            ctx,
            &self.state,
            Some(self.texture_id),
        ));

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    /// Überträgt veraltete Ressourcen auf die GPU und hält die egui-Textur aktuell.
    fn sync_gpu(&mut self) {
        let device = &self.render_state.device;
        let report = match self.renderer.sync(
            device,
            &self.render_state.queue,
            &self.state.curves,
            &self.state.settings,
            self.state.view.viewport_size,
            &mut self.state.dirty,
        ) {
            Ok(report) => report,
            Err(e) => fatal_sync_error(&e),
        };

        if report.surface_recreated {
            self.render_state
                .renderer
                .write()
                .update_egui_texture_from_wgpu_texture(
                    device,
                    self.renderer.view(),
                    wgpu::FilterMode::Nearest,
                    self.texture_id,
                );
        }
    }
}

/// Fehler beim GPU-Sync sind nicht behebbar.
fn fatal_sync_error(error: &RenderError) -> ! {
    log::error!("GPU-Synchronisierung fehlgeschlagen: {}", error);
    if cfg!(debug_assertions) {
        panic!("GPU-Synchronisierung fehlgeschlagen: {error}");
    }
    std::process::exit(1);
}
