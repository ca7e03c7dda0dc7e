use {
    super::{WinCtx, WindowOpen},
    crate::{
        hex_conv,
        remote_id::{RemoteId, RemoteIdError},
    },
    egui::Color32,
};

/// Paste a captured Remote-ID hex string and see what it says.
#[derive(Default)]
pub struct DecoderWindow {
    pub open: WindowOpen,
    input: String,
    decoded: Option<Decoded>,
}

struct Decoded {
    normalised: String,
    result: Result<RemoteId, String>,
}

impl super::Window for DecoderWindow {
    fn ui(&mut self, WinCtx { ui, app, .. }: WinCtx) {
        ui.horizontal(|ui| {
            let re = ui.add(
                egui::TextEdit::singleline(&mut self.input)
                    .hint_text("remote-id hex")
                    .font(egui::TextStyle::Monospace)
                    .desired_width(340.0),
            );
            if self.open.just_now() {
                re.request_focus();
            }
            let go = ui.button("Decode").clicked()
                || (re.lost_focus() && ui.input(|inp| inp.key_pressed(egui::Key::Enter)));
            if go {
                self.decoded = Some(decode(&self.input));
            }
        });
        let Some(decoded) = &self.decoded else {
            return;
        };
        ui.separator();
        if !decoded.normalised.is_empty() {
            ui.horizontal(|ui| {
                ui.label("Input");
                ui.monospace(&decoded.normalised);
            });
        }
        match &decoded.result {
            Err(e) => {
                ui.label(egui::RichText::new(e).color(Color32::from_rgb(255, 32, 0)));
            }
            Ok(RemoteId::Unknown {
                remote_id_type,
                data,
            }) => {
                ui.label(format!(
                    "Unknown Remote-ID type {remote_id_type} with {} bytes of data",
                    data.len()
                ));
            }
            Ok(RemoteId::Ethernet(eth)) => {
                egui::Grid::new("decoded_grid").striped(true).show(ui, |ui| {
                    ui.label("Interface");
                    ui.label(eth.interface_label());
                    ui.end_row();
                    ui.label("Slot");
                    ui.label(eth.slot.to_string());
                    ui.end_row();
                    ui.label("Module");
                    ui.label(eth.module.to_string());
                    ui.end_row();
                    ui.label("Port");
                    ui.label(eth.port.to_string());
                    ui.end_row();
                    ui.label("VLAN");
                    ui.label(eth.vlan.to_string());
                    ui.end_row();
                    ui.label("DUID");
                    ui.monospace(eth.duid.to_string());
                    ui.end_row();
                });
                match app.mappings.lookup(eth) {
                    Some(port_key) => {
                        ui.label(format!("Maps to: {}", app.mappings.port_label(port_key)));
                        ui.monospace(format!(
                            "new remote-id: {}",
                            hex_conv::display_hex(&app.mappings.ports[port_key].new_remote_id)
                        ));
                    }
                    None => {
                        ui.label("No port mapping matches this Remote-ID");
                    }
                }
            }
        }
    }

    fn title(&self) -> &str {
        "Remote-ID decoder"
    }
}

fn decode(input: &str) -> Decoded {
    match hex_conv::parse_relaxed(input.trim()) {
        Err(e) => Decoded {
            normalised: String::new(),
            result: Err(e.to_string()),
        },
        Ok(bytes) => Decoded {
            normalised: hex_conv::encode_colons(&bytes),
            result: RemoteId::decode(&bytes).map_err(|e: RemoteIdError| e.to_string()),
        },
    }
}
