//! Dialog showing the charter's share link

use eframe::egui;

/// Dialog showing the charter's share link
#[derive(Debug, Default)]
pub struct ShareDialog {
    pub visible: bool,
    pub url: String,
    copied: bool,
}

impl ShareDialog {
    /// Open the dialog for `url`
    pub fn open(&mut self, url: String) {
        self.url = url;
        self.visible = true;
        self.copied = false;
    }

    pub fn close(&mut self) {
        self.visible = false;
        self.copied = false;
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        if !self.visible {
            return;
        }

        let mut close = false;
        egui::Window::new("Share Charter")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label("Charter URL:");
                ui.monospace(&self.url);
                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    let copy_label = if self.copied { "Copied" } else { "Copy" };
                    if ui.button(copy_label).clicked() {
                        ui.ctx().copy_text(self.url.clone());
                        self.copied = true;
                        tracing::debug!("Copied share URL to clipboard");
                    }
                    if ui.button("Close").clicked() {
                        close = true;
                    }
                });
            });

        if close || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.close();
        }
    }
}
