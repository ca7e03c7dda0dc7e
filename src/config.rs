use {
    anyhow::Context as _,
    directories::ProjectDirs,
    serde::{Deserialize, Serialize},
};

#[derive(Serialize, Deserialize)]
pub struct Config {
    pub style: Style,
    #[serde(default = "default_vsync")]
    pub vsync: bool,
    #[serde(default)]
    pub fps_limit: u32,
}

const fn default_vsync() -> bool {
    true
}

#[derive(Serialize, Deserialize, Default)]
pub struct Style {
    pub font_sizes: FontSizes,
}

#[derive(Serialize, Deserialize)]
pub struct FontSizes {
    pub heading: u8,
    pub body: u8,
    pub monospace: u8,
    pub button: u8,
    pub small: u8,
}

impl Default for FontSizes {
    fn default() -> Self {
        Self {
            small: 10,
            body: 14,
            button: 14,
            heading: 16,
            monospace: 14,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            style: Style::default(),
            vsync: default_vsync(),
            fps_limit: 0,
        }
    }
}

pub struct LoadedConfig {
    pub config: Config,
    /// If `Some`, saving this config file will overwrite an old one that couldn't be loaded
    pub old_config_err: Option<anyhow::Error>,
}

impl Config {
    pub fn load_or_default() -> anyhow::Result<LoadedConfig> {
        let proj_dirs = project_dirs().context("Failed to get project dirs")?;
        let cfg_dir = proj_dirs.config_dir();
        if !cfg_dir.exists() {
            std::fs::create_dir_all(cfg_dir)?;
        }
        let cfg_file = cfg_dir.join(FILENAME);
        if !cfg_file.exists() {
            return Ok(LoadedConfig {
                config: Config::default(),
                old_config_err: None,
            });
        }
        let result = (|| -> anyhow::Result<Self> {
            let cfg_bytes = std::fs::read(&cfg_file)?;
            Ok(rmp_serde::from_slice(&cfg_bytes)?)
        })();
        match result {
            Ok(cfg) => Ok(LoadedConfig {
                config: cfg,
                old_config_err: None,
            }),
            Err(e) => Ok(LoadedConfig {
                config: Config::default(),
                old_config_err: Some(e),
            }),
        }
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let bytes = rmp_serde::to_vec(self)?;
        let proj_dirs = project_dirs().context("Failed to get project dirs")?;
        let cfg_dir = proj_dirs.config_dir();
        std::fs::write(cfg_dir.join(FILENAME), bytes)?;
        Ok(())
    }
}

pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "remid")
}

const FILENAME: &str = "remid.cfg";
