use {egui::Color32, std::collections::VecDeque};

/// Modal message dialog. Payloads queue up; the frontmost blocks the UI
/// until dismissed.
#[derive(Default)]
pub struct MessageDialog {
    payloads: VecDeque<Payload>,
}

pub struct Payload {
    title: String,
    desc: String,
    icon: Icon,
}

#[derive(Default)]
pub enum Icon {
    #[default]
    None,
    Info,
    Warn,
    Error,
}

// Colors and icon text are copied from egui-toast, for visual consistency
// https://github.com/urholaukkarinen/egui-toast
impl Icon {
    fn color(&self) -> Color32 {
        match self {
            Self::None => Color32::default(),
            Self::Info => Color32::from_rgb(0, 155, 255),
            Self::Warn => Color32::from_rgb(255, 212, 0),
            Self::Error => Color32::from_rgb(255, 32, 0),
        }
    }
    fn utf8(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::Info => "ℹ",
            Self::Warn => "⚠",
            Self::Error => "❗",
        }
    }
    fn hover_text(&self) -> String {
        let label = match self {
            Self::None => "",
            Self::Info => "Info",
            Self::Warn => "Warning",
            Self::Error => "Error",
        };
        format!("{label}\n\nClick to copy message to clipboard")
    }
    fn is_set(&self) -> bool {
        !matches!(self, Self::None)
    }
}

impl MessageDialog {
    pub(crate) fn open(&mut self, icon: Icon, title: impl Into<String>, desc: impl Into<String>) {
        self.payloads.push_back(Payload {
            title: title.into(),
            desc: desc.into(),
            icon,
        });
    }
    pub(crate) fn show(&mut self, ctx: &egui::Context, cb: &mut arboard::Clipboard) {
        let payloads_len = self.payloads.len();
        let Some(payload) = self.payloads.front_mut() else {
            return;
        };
        let mut close = false;
        egui::Modal::new(egui::Id::new("msg_dialog_popup")).show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(&payload.title);
                if payloads_len > 1 {
                    ui.label(format!("({} more)", payloads_len - 1));
                }
            });
            ui.vertical_centered_justified(|ui| {
                ui.horizontal(|ui| {
                    if payload.icon.is_set()
                        && ui
                            .add(
                                egui::Label::new(
                                    egui::RichText::new(payload.icon.utf8())
                                        .color(payload.icon.color())
                                        .size(32.0),
                                )
                                .sense(egui::Sense::click()),
                            )
                            .on_hover_text(payload.icon.hover_text())
                            .clicked()
                    {
                        if let Err(e) = cb.set_text(payload.desc.clone()) {
                            gamedebug_core::per!("Clipboard set error: {e:?}");
                        }
                    }
                    ui.label(&payload.desc);
                });
                let (enter_pressed, esc_pressed) = ui.input_mut(|inp| {
                    (
                        // Consume enter and escape, so the UI behind the
                        // dialog won't also receive the closing keypress.
                        inp.consume_key(egui::Modifiers::default(), egui::Key::Enter),
                        inp.consume_key(egui::Modifiers::default(), egui::Key::Escape),
                    )
                });
                if ui.button("Ok").clicked() || enter_pressed || esc_pressed {
                    close = true;
                }
            });
        });
        if close {
            self.payloads.pop_front();
        }
    }
}
