//! Main application state and UI coordination

use eframe::egui;

use crate::core::config::AppConfig;
use crate::core::editor::{reduce, Action, EditorState, Effect};
use crate::core::sink::{CharterSink, LogSink};
use crate::ui::{form::CharterForm, share_dialog::ShareDialog};

/// Main application state
pub struct TeamCharterApp {
    /// The charter being edited and its presentation mode
    pub state: EditorState,
    /// Where saved snapshots go
    pub sink: Box<dyn CharterSink>,
    /// Application configuration
    pub config: AppConfig,
    /// Share link dialog
    pub share_dialog: ShareDialog,
}

impl TeamCharterApp {
    /// Create a new application instance
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let app = Self::with_sink(config, Box::new(LogSink::new()));
        app.apply_theme(&cc.egui_ctx);
        tracing::info!("Charter session {}", app.state.charter_id);
        app
    }

    /// Create an application that saves into `sink`
    pub fn with_sink(config: AppConfig, sink: Box<dyn CharterSink>) -> Self {
        Self {
            state: EditorState::new(config.share_base_url.clone()),
            sink,
            config,
            share_dialog: ShareDialog::default(),
        }
    }

    /// Run an action through the reducer and carry out its effect.
    ///
    /// Rejected actions are logged and leave the state as it was.
    pub fn dispatch(&mut self, action: Action) {
        tracing::debug!("Dispatching {:?}", action);
        match reduce(&self.state, action) {
            Ok(outcome) => {
                self.state = outcome.state;
                if let Some(effect) = outcome.effect {
                    self.handle_effect(effect);
                }
            }
            Err(e) => {
                tracing::warn!("Ignoring edit: {}", e);
            }
        }
    }

    fn handle_effect(&mut self, effect: Effect) {
        match effect {
            Effect::Persist(charter) => {
                if let Err(e) = self.sink.persist(&charter) {
                    tracing::error!("Failed to save charter to {} sink: {:#}", self.sink.name(), e);
                }
            }
            Effect::ShowShareUrl(url) => {
                tracing::info!("Charter URL: {}", url);
                self.share_dialog.open(url);
            }
        }
    }

    fn apply_theme(&self, ctx: &egui::Context) {
        if self.config.dark_theme() {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }
    }

    fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.config.toggle_theme();
        self.apply_theme(ctx);
        if let Err(e) = self.config.save() {
            tracing::warn!("Failed to save config: {:#}", e);
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &egui::Context) -> Vec<Action> {
        let mut actions = Vec::new();
        let editing = self.state.is_editing();

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Charter", |ui| {
                    if ui.add_enabled(editing, egui::Button::new("Save")).clicked() {
                        actions.push(Action::Save);
                        ui.close();
                    }
                    if ui.add_enabled(!editing, egui::Button::new("Edit")).clicked() {
                        actions.push(Action::Edit);
                        ui.close();
                    }
                    if ui.button("Share...").clicked() {
                        actions.push(Action::Share);
                        ui.close();
                    }
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("View", |ui| {
                    let label = if self.config.dark_theme() {
                        "Light Theme"
                    } else {
                        "Dark Theme"
                    };
                    if ui.button(label).clicked() {
                        self.toggle_theme(ctx);
                        ui.close();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode = if editing { "Editing" } else { "Read-only" };
                    ui.weak(format!("{} \u{2022} {}", self.state.charter_id, mode));
                });
            });
        });

        actions
    }
}

/// Map keyboard shortcuts to actions
fn shortcut_actions(input: &egui::InputState) -> Vec<Action> {
    let mut actions = Vec::new();
    if input.modifiers.ctrl && input.key_pressed(egui::Key::S) {
        if input.modifiers.shift {
            actions.push(Action::Share);
        } else {
            actions.push(Action::Save);
        }
    }
    if input.modifiers.ctrl && input.key_pressed(egui::Key::E) {
        actions.push(Action::Edit);
    }
    actions
}

impl eframe::App for TeamCharterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut actions = ctx.input(shortcut_actions);

        actions.extend(self.render_menu_bar(ctx));

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("charter_scroll")
                .show(ui, |ui| {
                    ui.set_max_width(800.0);
                    actions.extend(CharterForm::show(ui, &self.state));
                });
        });

        self.share_dialog.show(ctx);

        for action in actions {
            self.dispatch(action);
        }
    }
}
