pub use self::{
    about::AboutWindow, decoder::DecoderWindow, port_edit::PortEditWindow,
    preferences_window::PreferencesWindow, switches::SwitchesWindow,
};
use crate::{app::App, gui::Gui};

mod about;
pub mod debug_window;
mod decoder;
mod port_edit;
mod preferences_window;
mod switches;

#[derive(Default)]
pub struct WindowOpen {
    open: bool,
    just_opened: bool,
}

impl WindowOpen {
    /// Open if closed, close if opened
    pub fn toggle(&mut self) {
        self.open ^= true;
        if self.open {
            self.just_opened = true;
        }
    }
    pub fn is(&self) -> bool {
        self.open
    }
    pub fn set(&mut self, open: bool) {
        if !self.open && open {
            self.just_opened = true;
        }
        self.open = open;
    }
    /// Whether the window was opened just now (this frame)
    pub fn just_now(&self) -> bool {
        self.just_opened
    }
    /// Call this at the end of your ui, where you won't query just_opened anymore
    pub fn post_ui(&mut self) {
        self.just_opened = false;
    }
}

pub struct WinCtx<'a> {
    pub ui: &'a mut egui::Ui,
    pub app: &'a mut App,
    pub gui: &'a mut Gui,
}

pub trait Window {
    fn ui(&mut self, ctx: WinCtx);
    fn title(&self) -> &str;
}

#[derive(Default)]
pub struct Windows {
    pub switches: SwitchesWindow,
    pub port_edit: PortEditWindow,
    pub decoder: DecoderWindow,
    pub preferences: PreferencesWindow,
    pub about: AboutWindow,
}

/// Each window is temporarily taken out of the gui, so its ui can freely
/// access the rest of the gui state.
macro_rules! show_windows {
    ($ctx:expr, $gui:expr, $app:expr; $($field:ident),* $(,)?) => {
        $(
            let mut wnd = std::mem::take(&mut $gui.win.$field);
            if wnd.open.is() {
                let mut open = true;
                egui::Window::new(wnd.title())
                    .open(&mut open)
                    .show($ctx, |ui| {
                        wnd.ui(WinCtx {
                            ui,
                            app: &mut *$app,
                            gui: &mut *$gui,
                        });
                    });
                if !open {
                    wnd.open.set(false);
                }
                wnd.open.post_ui();
            }
            $gui.win.$field = wnd;
        )*
    };
}

impl Windows {
    pub(crate) fn update(ctx: &egui::Context, gui: &mut Gui, app: &mut App) {
        show_windows!(ctx, gui, app; switches, port_edit, decoder, preferences, about);
    }
}
