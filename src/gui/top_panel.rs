use {
    crate::{app::App, gui::Gui},
    egui::{Layout, Ui},
    gamedebug_core::{IMMEDIATE, PERSISTENT},
};

pub fn ui(ui: &mut Ui, gui: &mut Gui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.menu_button("File", |ui| {
            if ui.button("Quit").clicked() {
                app.quit_requested = true;
                ui.close_menu();
            }
        });
        ui.menu_button("Windows", |ui| {
            if ui.button("Switches (F5)").clicked() {
                gui.win.switches.open.toggle();
                ui.close_menu();
            }
            if ui.button("Port editor (F6)").clicked() {
                gui.win.port_edit.open.toggle();
                ui.close_menu();
            }
            if ui.button("Remote-ID decoder (F7)").clicked() {
                gui.win.decoder.open.toggle();
                ui.close_menu();
            }
            if ui.button("Preferences").clicked() {
                gui.win.preferences.open.toggle();
                ui.close_menu();
            }
        });
        ui.menu_button("Help", |ui| {
            if ui.button("Debug log (F12)").clicked() {
                IMMEDIATE.toggle();
                PERSISTENT.toggle();
                ui.close_menu();
            }
            if ui.button("About").clicked() {
                gui.win.about.open.toggle();
                ui.close_menu();
            }
        });
        ui.with_layout(Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(format!(
                "{} switches, {} ports",
                app.mappings.switches.len(),
                app.mappings.ports.len()
            ));
        });
    });
}
