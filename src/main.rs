// This file is part of simple-rainbow-fill and is licenced under the GNU GPL v3.0.
// See LICENSE file for full text.
// Copyright © 2026 the simple-rainbow-fill contributors

use std::io;

use anyhow::Result;
use log::{info, warn};

use simple_rainbow_fill::private::settings::{Settings, CONFIG_PATH};

mod backend;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            // first run: leave a config file behind for the user to edit
            let settings = Settings::default();
            match settings.save() {
                Ok(()) => info!("wrote default settings to \"{}\"", CONFIG_PATH.display()),
                Err(e) => warn!("could not write default settings to \"{}\": {}", CONFIG_PATH.display(), e),
            }
            settings
        }
        Err(e) => {
            warn!(
                "error loading settings file \"{}\", using defaults: {}",
                CONFIG_PATH.display(),
                e
            );
            Settings::default()
        }
    };

    let mut backend = backend::select(&settings)?;
    info!("painting the gradient with the {} backend", backend.name());
    backend.run()
}
