use crate::{
    config::Config,
    gui::message_dialog::{Icon, MessageDialog},
    mapping::MappingStore,
    preferences::Preferences,
};

/// Commands that need the render window, applied by the event loop.
pub enum BackendCmd {
    ApplyVideoPrefs,
}

/// The remid application state
pub struct App {
    pub cfg: Config,
    pub preferences: Preferences,
    pub mappings: MappingStore,
    pub clipboard: arboard::Clipboard,
    pub backend_cmd: Vec<BackendCmd>,
    /// A quit was requested
    pub quit_requested: bool,
}

impl App {
    pub(crate) fn new(cfg: Config) -> anyhow::Result<Self> {
        Ok(Self {
            cfg,
            preferences: Preferences::default(),
            mappings: MappingStore::default(),
            clipboard: arboard::Clipboard::new()?,
            backend_cmd: Vec::new(),
            quit_requested: false,
        })
    }
}

pub fn set_clipboard_string(cb: &mut arboard::Clipboard, msg: &mut MessageDialog, text: &str) {
    if let Err(e) = cb.set_text(text) {
        msg.open(Icon::Error, "Clipboard error", e.to_string());
    }
}
