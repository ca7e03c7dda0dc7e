use {
    self::{message_dialog::MessageDialog, windows::Windows},
    crate::{app::App, config::Style},
    egui::{
        FontFamily::{self, Proportional},
        FontId,
        TextStyle::{Body, Button, Heading, Monospace, Small},
        TopBottomPanel, Window,
    },
    egui_sf2g::SfEgui,
    gamedebug_core::{IMMEDIATE, PERSISTENT},
    sf2g::graphics::RenderWindow,
};

pub mod message_dialog;
mod ports_panel;
mod top_panel;
pub mod windows;

#[derive(Default)]
pub struct Gui {
    pub msg_dialog: MessageDialog,
    pub win: Windows,
}

pub fn do_egui(
    sf_egui: &mut SfEgui,
    gui: &mut Gui,
    app: &mut App,
    rwin: &mut RenderWindow,
) -> anyhow::Result<egui_sf2g::DrawInput> {
    let di = sf_egui.run(rwin, |_rwin, ctx| {
        let mut open = IMMEDIATE.enabled() || PERSISTENT.enabled();
        let was_open = open;
        Window::new("Debug")
            .open(&mut open)
            .show(ctx, windows::debug_window::ui);
        if was_open && !open {
            IMMEDIATE.toggle();
            PERSISTENT.toggle();
        }
        gui.msg_dialog.show(ctx, &mut app.clipboard);
        Windows::update(ctx, gui, app);
        TopBottomPanel::top("top_panel").show(ctx, |ui| top_panel::ui(ui, gui, app));
        egui::CentralPanel::default().show(ctx, |ui| ports_panel::ui(ui, gui, app));
    })?;
    Ok(di)
}

pub fn set_font_sizes_ctx(ctx: &egui::Context, style: &Style) {
    let mut egui_style = (*ctx.style()).clone();
    set_font_sizes_style(&mut egui_style, style);
    ctx.set_style(egui_style);
}

pub fn set_font_sizes_style(egui_style: &mut egui::Style, style: &Style) {
    egui_style.text_styles = [
        (
            Heading,
            FontId::new(style.font_sizes.heading.into(), Proportional),
        ),
        (
            Body,
            FontId::new(style.font_sizes.body.into(), Proportional),
        ),
        (
            Monospace,
            FontId::new(style.font_sizes.monospace.into(), FontFamily::Monospace),
        ),
        (
            Button,
            FontId::new(style.font_sizes.button.into(), Proportional),
        ),
        (
            Small,
            FontId::new(style.font_sizes.small.into(), Proportional),
        ),
    ]
    .into();
}
