#[derive(Debug)]
pub struct Preferences {
    /// Background color behind the UI (mostly for fun)
    pub bg_color: [f32; 3],
}

impl Default for Preferences {
    fn default() -> Self {
        Self { bg_color: [0.0; 3] }
    }
}
