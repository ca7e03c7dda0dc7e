use {
    super::{WinCtx, WindowOpen},
    crate::{
        field::HexAsciiField,
        gui::message_dialog::{Icon, MessageDialog},
        hex_conv,
        mapping::{MappingStore, ModuleKey, Port, PortKey, PortNr, VlanId},
        parse_radix::parse_guess_radix,
        remote_id::EthernetRemoteId,
    },
    anyhow::Context as _,
};

#[derive(Default)]
pub struct PortEditWindow {
    pub open: WindowOpen,
    editing: Option<PortKey>,
    module: Option<ModuleKey>,
    port_nr: u8,
    vlan: u16,
    ent_buf: String,
    remote_id: HexAsciiField,
}

impl super::Window for PortEditWindow {
    fn ui(&mut self, WinCtx { ui, app, gui }: WinCtx) {
        if app.mappings.modules.is_empty() {
            ui.label("Define a switch and a slot first (Windows ▸ Switches)");
            return;
        }
        if let Some(key) = self.module
            && !app.mappings.modules.contains_key(key)
        {
            self.module = None;
        }
        egui::ComboBox::new("module_combo", "Module")
            .selected_text(
                self.module
                    .map_or_else(|| "(pick one)".to_owned(), |k| app.mappings.module_label(k)),
            )
            .show_ui(ui, |ui| {
                let keys: Vec<ModuleKey> = app.mappings.modules.keys().collect();
                for key in keys {
                    let label = app.mappings.module_label(key);
                    ui.selectable_value(&mut self.module, Some(key), label);
                }
            });
        ui.horizontal(|ui| {
            ui.label("Port");
            ui.add(egui::DragValue::new(&mut self.port_nr).range(0..=PortNr::MAX));
            ui.label("VLAN");
            ui.add(egui::DragValue::new(&mut self.vlan).range(0..=VlanId::MAX))
                .on_hover_text("VLAN 0 is a wildcard that matches any VLAN");
        });
        ui.horizontal(|ui| {
            ui.label("New enterprise number");
            ui.add(
                egui::TextEdit::singleline(&mut self.ent_buf)
                    .hint_text("decimal or 0x hex")
                    .desired_width(120.0),
            );
        });
        ui.horizontal(|ui| {
            ui.label("New Remote-ID");
            hex_ascii_input(ui, &mut self.remote_id, &mut gui.msg_dialog);
        });
        if let Some(module_key) = self.module {
            let module = &app.mappings.modules[module_key];
            let slot = &app.mappings.slots[module.slot];
            let switch = &app.mappings.switches[slot.switch];
            let incoming = EthernetRemoteId {
                slot: slot.slot_nr,
                module: module.module_nr.get(),
                port: self.port_nr,
                vlan: self.vlan,
                duid: switch.duid.clone(),
            };
            ui.label("Matches incoming Remote-ID:");
            ui.monospace(hex_conv::encode_colons(&incoming.encode()));
        }
        ui.separator();
        ui.horizontal(|ui| {
            let verb = if self.editing.is_some() { "Save" } else { "Add" };
            if ui.button(format!("{verb} port")).clicked() {
                match self.try_save(&mut app.mappings) {
                    Ok(label) => {
                        self.reset();
                        gui.msg_dialog.open(Icon::Info, "Port saved", label);
                    }
                    Err(e) => {
                        gui.msg_dialog
                            .open(Icon::Warn, "Cannot save port", e.to_string());
                    }
                }
            }
            if self.editing.is_some() && ui.button("Cancel edit").clicked() {
                self.reset();
            }
        });
    }

    fn title(&self) -> &str {
        "Port editor"
    }
}

impl PortEditWindow {
    /// Load an existing port into the form for editing.
    pub fn load(&mut self, key: PortKey, mappings: &MappingStore) {
        let port = &mappings.ports[key];
        self.editing = Some(key);
        self.module = Some(port.module);
        self.port_nr = port.port_nr.get();
        self.vlan = port.vlan.get();
        self.ent_buf = port.new_enterprise_number.to_string();
        self.remote_id = HexAsciiField::from_bytes(&port.new_remote_id);
    }

    fn reset(&mut self) {
        self.editing = None;
        self.ent_buf.clear();
        self.remote_id = HexAsciiField::default();
    }

    fn try_save(&mut self, mappings: &mut MappingStore) -> anyhow::Result<String> {
        let module = self.module.context("No module selected")?;
        let ent = if self.ent_buf.trim().is_empty() {
            0
        } else {
            parse_guess_radix::<u32>(self.ent_buf.trim())
                .context("Invalid enterprise number")?
        };
        let port = Port {
            module,
            port_nr: PortNr::new(self.port_nr)?,
            vlan: VlanId::new(self.vlan)?,
            new_enterprise_number: ent,
            new_remote_id: self.remote_id.bytes()?,
        };
        let key = match self.editing {
            Some(key) if mappings.ports.contains_key(key) => {
                mappings.update_port(key, port)?;
                key
            }
            _ => mappings.add_port(port)?,
        };
        Ok(mappings.port_label(key))
    }
}

/// The hex/ASCII control pair: an "As ASCII" checkbox next to the text
/// input it converts. A failed conversion alerts through the message
/// dialog; the field has already snapped the checkbox back by then.
fn hex_ascii_input(ui: &mut egui::Ui, field: &mut HexAsciiField, msg: &mut MessageDialog) {
    if ui.checkbox(&mut field.as_ascii, "As ASCII").changed() {
        if let Err(e) = field.format_toggled() {
            msg.open(Icon::Warn, "Cannot convert", e.to_string());
        }
    }
    ui.add(egui::TextEdit::singleline(&mut field.text).desired_width(300.0));
}
