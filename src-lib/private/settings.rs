// This file is part of simple-rainbow-fill and is licenced under the GNU GPL v3.0.
// See LICENSE file for full text.
// Copyright © 2026 the simple-rainbow-fill contributors

//! Application settings, persisted as TOML in the user's config directory.

use std::path::PathBuf;
use std::{fs, io};

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

lazy_static! {
    pub static ref CONFIG_PATH: PathBuf = directories::ProjectDirs::from("dev.rainbowfill", "", "simple-rainbow-fill")
        .unwrap()
        .config_dir()
        .join("config.toml");
}

const DEFAULT_FRAMEBUFFER_DEVICE: &str = "/dev/fb0";

// needed for serde, as it can't read constants directly
fn default_framebuffer_device() -> PathBuf {
    PathBuf::from(DEFAULT_FRAMEBUFFER_DEVICE)
}

/// Which display-buffer acquisition strategy to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// try the framebuffer first, fall back to a window
    #[default]
    Auto,
    Framebuffer,
    Window,
}

#[derive(Deserialize, Serialize)]
pub struct PersistedSettings {
    #[serde(default)]
    pub backend: BackendKind,
    #[serde(default = "default_framebuffer_device")]
    pub framebuffer_device: PathBuf,
}

impl Default for PersistedSettings {
    fn default() -> Self {
        PersistedSettings {
            backend: BackendKind::default(),
            framebuffer_device: default_framebuffer_device(),
        }
    }
}

pub struct Settings {
    pub persisted: PersistedSettings,
}

impl Settings {
    pub fn load() -> io::Result<Settings> {
        fs::create_dir_all(CONFIG_PATH.as_path().parent().unwrap())?;
        fs::read_to_string(CONFIG_PATH.as_path())
            .and_then(|string| {
                toml::from_str::<PersistedSettings>(&string)
                    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
            })
            .map(|persisted| Settings { persisted })
    }

    pub fn save(&self) -> io::Result<()> {
        let serialized_config = toml::to_string(&self.persisted).expect("failed to serialize settings");
        fs::write(CONFIG_PATH.as_path(), serialized_config)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            persisted: PersistedSettings::default(),
        }
    }
}

#[cfg(test)]
mod test_settings_format {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let settings: PersistedSettings = toml::from_str("").unwrap();
        assert_eq!(settings.backend, BackendKind::Auto);
        assert_eq!(settings.framebuffer_device, PathBuf::from("/dev/fb0"));
    }

    #[test]
    fn backend_names_are_lowercase() {
        let settings: PersistedSettings = toml::from_str("backend = \"window\"").unwrap();
        assert_eq!(settings.backend, BackendKind::Window);

        let settings: PersistedSettings = toml::from_str("backend = \"framebuffer\"").unwrap();
        assert_eq!(settings.backend, BackendKind::Framebuffer);
    }

    /// what save() writes, load() must read back
    #[test]
    fn saved_settings_parse_again() {
        let settings = PersistedSettings {
            backend: BackendKind::Framebuffer,
            framebuffer_device: PathBuf::from("/dev/fb1"),
        };
        let serialized = toml::to_string(&settings).unwrap();
        let parsed: PersistedSettings = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.backend, settings.backend);
        assert_eq!(parsed.framebuffer_device, settings.framebuffer_device);
    }
}
