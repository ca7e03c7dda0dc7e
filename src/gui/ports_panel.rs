use {
    crate::{app::App, gui::Gui, hex_conv, mapping::PortKey},
    egui::Ui,
    egui_extras::{Column, TableBuilder},
    egui_phosphor::regular as ic,
    itertools::Itertools as _,
};

struct Row {
    key: PortKey,
    label: String,
    vlan: String,
    enterprise: String,
    new_id: String,
    incoming: String,
}

/// The central overview: every mapped port with its replacement Remote-ID
/// and the incoming Remote-ID it matches.
pub fn ui(ui: &mut Ui, gui: &mut Gui, app: &mut App) {
    if app.mappings.ports.is_empty() {
        ui.heading("No ports mapped");
        ui.label("Add switches and slots (Windows ▸ Switches), then map ports (Windows ▸ Port editor).");
        return;
    }
    let rows: Vec<Row> = app
        .mappings
        .ports
        .iter()
        .map(|(key, port)| Row {
            key,
            label: app.mappings.port_label(key),
            vlan: match port.vlan.get() {
                0 => "*".to_owned(),
                v => v.to_string(),
            },
            enterprise: port.new_enterprise_number.to_string(),
            new_id: hex_conv::display_hex(&port.new_remote_id),
            incoming: hex_conv::encode(&app.mappings.port_remote_id(key).encode()),
        })
        .sorted_by(|a, b| a.label.cmp(&b.label))
        .collect();
    let mut delete = None;
    let mut edit = None;
    let mut copy = None;
    let body_height = ui.text_style_height(&egui::TextStyle::Body);
    ui.style_mut().wrap_mode = Some(egui::TextWrapMode::Extend);
    TableBuilder::new(ui)
        .columns(Column::auto(), 6)
        .auto_shrink([false, true])
        .striped(true)
        .header(24.0, |mut row| {
            for head in [
                "Port",
                "VLAN",
                "Enterprise nr",
                "New Remote-ID",
                "Matches incoming",
                "",
            ] {
                row.col(|ui| {
                    ui.label(head);
                });
            }
        })
        .body(|body| {
            body.rows(body_height + 4.0, rows.len(), |mut row| {
                let r = &rows[row.index()];
                row.col(|ui| {
                    ui.label(&r.label);
                });
                row.col(|ui| {
                    ui.label(&r.vlan);
                });
                row.col(|ui| {
                    ui.label(&r.enterprise);
                });
                row.col(|ui| {
                    ui.label(&r.new_id);
                });
                row.col(|ui| {
                    ui.label(egui::RichText::new(&r.incoming).monospace())
                        .on_hover_text("The Remote-ID this switch port sends");
                });
                row.col(|ui| {
                    if ui.button(ic::PENCIL).on_hover_text("Edit").clicked() {
                        edit = Some(r.key);
                    }
                    if ui.button(ic::COPY).on_hover_text("Copy incoming hex").clicked() {
                        copy = Some(r.incoming.clone());
                    }
                    if ui.button(ic::TRASH).on_hover_text("Delete").clicked() {
                        delete = Some(r.key);
                    }
                });
            });
        });
    if let Some(key) = edit {
        gui.win.port_edit.load(key, &app.mappings);
        gui.win.port_edit.open.set(true);
    }
    if let Some(text) = copy {
        crate::app::set_clipboard_string(&mut app.clipboard, &mut gui.msg_dialog, &text);
    }
    if let Some(key) = delete {
        app.mappings.remove_port(key);
    }
}
