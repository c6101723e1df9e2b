use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub display: DisplaySettings,
    #[serde(default)]
    pub animation: AnimationSettings,
    #[serde(default)]
    pub io: IoSettings,
}

#[derive(Debug, Default, Deserialize)]
pub struct DisplaySettings {
    pub cell_size: Option<i64>,
    pub draw_char: Option<char>,
    pub color_scheme: Option<u8>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AnimationSettings {
    pub delay_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct IoSettings {
    pub export_dir: Option<PathBuf>,  // Where exported pattern files land
}

impl Settings {
    pub fn load() -> Self {
        let path = Self::config_path();
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("termlife")
            .join("config.toml")
    }
}
