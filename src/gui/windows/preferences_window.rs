use {
    super::{WinCtx, WindowOpen},
    crate::{app::BackendCmd, config, gui::message_dialog::Icon},
};

#[derive(Default)]
pub struct PreferencesWindow {
    pub open: WindowOpen,
    tab: Tab,
}

#[derive(Default, PartialEq)]
enum Tab {
    #[default]
    Video,
    Style,
}

impl Tab {
    fn label(&self) -> &'static str {
        match self {
            Tab::Video => "Video",
            Tab::Style => "Style",
        }
    }
}

impl super::Window for PreferencesWindow {
    fn ui(&mut self, WinCtx { ui, app, gui }: WinCtx) {
        ui.horizontal(|ui| {
            ui.selectable_value(&mut self.tab, Tab::Video, Tab::Video.label());
            ui.selectable_value(&mut self.tab, Tab::Style, Tab::Style.label());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Open config dir").clicked() {
                    match config::project_dirs() {
                        Some(dirs) => {
                            if let Err(e) = open::that(dirs.config_dir()) {
                                gui.msg_dialog.open(
                                    Icon::Error,
                                    "Failed to open config dir",
                                    e.to_string(),
                                );
                            }
                        }
                        None => {
                            gui.msg_dialog.open(
                                Icon::Error,
                                "Failed to open config dir",
                                "Can't determine project dirs",
                            );
                        }
                    }
                }
            });
        });
        ui.separator();
        match self.tab {
            Tab::Video => {
                if ui.checkbox(&mut app.cfg.vsync, "Vsync").changed() {
                    app.backend_cmd.push(BackendCmd::ApplyVideoPrefs);
                }
                ui.horizontal(|ui| {
                    ui.label("FPS limit (0 = unlimited)");
                    if ui
                        .add(egui::DragValue::new(&mut app.cfg.fps_limit))
                        .changed()
                    {
                        app.backend_cmd.push(BackendCmd::ApplyVideoPrefs);
                    }
                });
            }
            Tab::Style => {
                ui.horizontal(|ui| {
                    ui.label("Background color");
                    ui.color_edit_button_rgb(&mut app.preferences.bg_color);
                });
                ui.separator();
                ui.label("Font sizes");
                let sizes = &mut app.cfg.style.font_sizes;
                let mut changed = false;
                for (label, size) in [
                    ("Heading", &mut sizes.heading),
                    ("Body", &mut sizes.body),
                    ("Monospace", &mut sizes.monospace),
                    ("Button", &mut sizes.button),
                    ("Small", &mut sizes.small),
                ] {
                    ui.horizontal(|ui| {
                        ui.label(label);
                        changed |= ui.add(egui::DragValue::new(size).range(6..=32)).changed();
                    });
                }
                if changed {
                    crate::gui::set_font_sizes_ctx(ui.ctx(), &app.cfg.style);
                }
            }
        }
    }

    fn title(&self) -> &str {
        "Preferences"
    }
}
