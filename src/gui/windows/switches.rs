use {
    super::{WinCtx, WindowOpen},
    crate::{
        gui::message_dialog::Icon,
        hex_conv,
        mapping::{ModuleNr, SlotKey, SwitchKey},
        remote_id::Duid,
    },
    egui_extras::{Column, TableBuilder},
    egui_phosphor::regular as ic,
    itertools::Itertools as _,
};

#[derive(Default)]
pub struct SwitchesWindow {
    pub open: WindowOpen,
    pub selected: Option<SwitchKey>,
    name_buf: String,
    duid_buf: String,
    slot_nr_buf: u8,
    slot_has_modules_buf: bool,
    module_nr_buf: u8,
}

impl super::Window for SwitchesWindow {
    fn ui(&mut self, WinCtx { ui, app, gui }: WinCtx) {
        ui.style_mut().wrap_mode = Some(egui::TextWrapMode::Extend);
        ui.horizontal(|ui| {
            ui.label("Name");
            let re = ui.text_edit_singleline(&mut self.name_buf);
            if self.open.just_now() {
                re.request_focus();
            }
            ui.label("DUID");
            ui.add(
                egui::TextEdit::singleline(&mut self.duid_buf)
                    .hint_text("hex")
                    .desired_width(220.0),
            );
            if ui.button("Add switch").clicked() {
                match Duid::from_hex(self.duid_buf.trim()) {
                    Ok(duid) if duid.is_empty() => {
                        gui.msg_dialog
                            .open(Icon::Warn, "Cannot add switch", "A DUID is required");
                    }
                    Ok(duid) => {
                        match app
                            .mappings
                            .add_switch(self.name_buf.trim().to_owned(), duid)
                        {
                            Ok(key) => {
                                self.selected = Some(key);
                                self.name_buf.clear();
                                self.duid_buf.clear();
                            }
                            Err(e) => {
                                gui.msg_dialog
                                    .open(Icon::Warn, "Cannot add switch", e.to_string());
                            }
                        }
                    }
                    Err(e) => {
                        gui.msg_dialog
                            .open(Icon::Warn, "Cannot add switch", e.to_string());
                    }
                }
            }
        });
        ui.label(
            egui::RichText::new("Use 'show ipv6 dhcp' to find the switch's DUID").small(),
        );
        if app.mappings.switches.is_empty() {
            return;
        }
        ui.separator();
        self.switch_table(ui, app);
        if let Some(sw_key) = self.selected
            && app.mappings.switches.contains_key(sw_key)
        {
            ui.separator();
            self.slots_ui(ui, app, gui, sw_key);
        }
    }

    fn title(&self) -> &str {
        "Switches"
    }
}

struct SwitchRow {
    key: SwitchKey,
    name: String,
    duid: String,
    slots: usize,
    ports: usize,
}

impl SwitchesWindow {
    fn switch_table(&mut self, ui: &mut egui::Ui, app: &mut crate::app::App) {
        let rows: Vec<SwitchRow> = app
            .mappings
            .switches
            .iter()
            .map(|(key, sw)| SwitchRow {
                key,
                name: sw.name.clone(),
                duid: hex_conv::display_hex(sw.duid.as_bytes()),
                slots: app.mappings.slot_count(key),
                ports: app.mappings.port_count(key),
            })
            .sorted_by(|a, b| a.name.cmp(&b.name))
            .collect();
        let mut delete = None;
        let body_height = ui.text_style_height(&egui::TextStyle::Body);
        TableBuilder::new(ui)
            .columns(Column::auto(), 5)
            .auto_shrink([false, true])
            .striped(true)
            .header(24.0, |mut row| {
                for head in ["Name", "DUID", "Slots", "Ports", ""] {
                    row.col(|ui| {
                        ui.label(head);
                    });
                }
            })
            .body(|body| {
                body.rows(body_height + 4.0, rows.len(), |mut row| {
                    let r = &rows[row.index()];
                    if Some(r.key) == self.selected {
                        row.set_selected(true);
                    }
                    row.col(|ui| {
                        if ui.link(&r.name).on_hover_text("Show slots").clicked() {
                            self.selected = Some(r.key);
                        }
                    });
                    row.col(|ui| {
                        ui.label(&r.duid);
                    });
                    row.col(|ui| {
                        ui.label(r.slots.to_string());
                    });
                    row.col(|ui| {
                        ui.label(r.ports.to_string());
                    });
                    row.col(|ui| {
                        if ui.button(ic::TRASH).on_hover_text("Delete switch").clicked() {
                            delete = Some(r.key);
                        }
                    });
                });
            });
        if let Some(key) = delete {
            app.mappings.remove_switch(key);
            if self.selected == Some(key) {
                self.selected = None;
            }
        }
    }

    fn slots_ui(
        &mut self,
        ui: &mut egui::Ui,
        app: &mut crate::app::App,
        gui: &mut crate::gui::Gui,
        sw_key: SwitchKey,
    ) {
        ui.heading(format!("Slots of {}", app.mappings.switches[sw_key].name));
        ui.horizontal(|ui| {
            ui.label("Slot");
            ui.add(egui::DragValue::new(&mut self.slot_nr_buf));
            ui.checkbox(&mut self.slot_has_modules_buf, "has modules")
                .on_hover_text(
                    "Check this box if this slot has multiple (internal) modules. \
                     If unchecked one dummy-module will automatically be created.",
                );
            if ui.button("Add slot").clicked() {
                if let Err(e) =
                    app.mappings
                        .add_slot(sw_key, self.slot_nr_buf, self.slot_has_modules_buf)
                {
                    gui.msg_dialog
                        .open(Icon::Warn, "Cannot add slot", e.to_string());
                }
            }
        });
        let slot_keys: Vec<SlotKey> = app
            .mappings
            .slots
            .iter()
            .filter(|(_, s)| s.switch == sw_key)
            .map(|(k, _)| k)
            .sorted_by_key(|&k| app.mappings.slots[k].slot_nr)
            .collect();
        let mut delete = None;
        for slot_key in slot_keys {
            let (slot_nr, has_modules) = {
                let slot = &app.mappings.slots[slot_key];
                (slot.slot_nr, slot.has_modules)
            };
            ui.horizontal(|ui| {
                ui.label(format!("Slot {slot_nr}"));
                let mut flag = has_modules;
                if ui.checkbox(&mut flag, "has modules").changed() {
                    if let Err(e) = app.mappings.set_has_modules(slot_key, flag) {
                        gui.msg_dialog
                            .open(Icon::Warn, "Cannot change slot type", e.to_string());
                    }
                }
                let module_nrs = app
                    .mappings
                    .modules_of_slot(slot_key)
                    .iter()
                    .map(|&k| app.mappings.modules[k].module_nr.to_string())
                    .join(", ");
                ui.label(format!("modules: {module_nrs}"));
                if has_modules {
                    ui.add(
                        egui::DragValue::new(&mut self.module_nr_buf).range(0..=ModuleNr::MAX),
                    );
                    if ui.button("Add module").clicked() {
                        let result = ModuleNr::new(self.module_nr_buf)
                            .map_err(anyhow::Error::from)
                            .and_then(|nr| {
                                app.mappings
                                    .add_module(slot_key, nr)
                                    .map_err(anyhow::Error::from)
                            });
                        if let Err(e) = result {
                            gui.msg_dialog
                                .open(Icon::Warn, "Cannot add module", e.to_string());
                        }
                    }
                }
                if ui.button(ic::TRASH).on_hover_text("Delete slot").clicked() {
                    delete = Some(slot_key);
                }
            });
        }
        if let Some(key) = delete {
            app.mappings.remove_slot(key);
        }
    }
}
