use std::path::Path;
use serde::{Serialize, Deserialize, de::DeserializeOwned};

use crate::{
    log,
    save::{self, *},
};

// ----------------------------------------------
// Configs
// ----------------------------------------------

pub const CONFIGS_DIR_PATH: &str = "assets/configs";

pub trait Configs {
    fn post_load(&mut self) {
    }

    // Saves current configs to a JSON file. Creates the parent directory if needed.
    fn save_file(&self, config_json_path: &Path) -> bool
        where Self: Sized + Serialize
    {
        if let Some(parent_dir) = config_json_path.parent() {
            // Ignore any errors since this fails if any element of the path already exists.
            let _ = std::fs::create_dir_all(parent_dir);
        }

        let mut state = save::backend::new_json_save_state(true);

        if let Err(err) = state.save(self) {
            log::error!(log::channel!("config"), "Failed to save config file {config_json_path:?}: {err}");
            return false;
        }

        if let Err(err) = state.write_file(config_json_path) {
            log::error!(log::channel!("config"), "Failed to write config file {config_json_path:?}: {err}");
            return false;
        }

        true
    }

    // Either succeeds loading the config file or returns a default config.
    fn load_file(config_json_path: &Path) -> Self
        where Self: Sized + Default + DeserializeOwned
    {
        let mut state = save::backend::new_json_save_state(false);

        if let Err(err) = state.read_file(config_json_path) {
            log::error!(log::channel!("config"), "Failed to read config file from path {config_json_path:?}: {err}");
            return Self::default();
        }

        let mut configs = match state.load_new_instance::<Self>() {
            Ok(configs) => configs,
            Err(err) => {
                log::error!(log::channel!("config"), "Failed to deserialize config file from path {config_json_path:?}: {err}");
                Self::default()
            }
        };

        configs.post_load();
        configs
    }
}

// ----------------------------------------------
// EngineConfigs
// ----------------------------------------------

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)] // Missing fields in the config file get defaults from EngineConfigs::default().
pub struct EngineConfigs {
    pub log_level: log::Level,
    pub log_source_location: bool,
    pub log_tty_colors: bool,
}

impl EngineConfigs {
    // Pushes the logging settings into the global logger.
    pub fn apply(&self) {
        log::set_level(self.log_level);
        log::enable_source_location(self.log_source_location);
        log::enable_tty_colors(self.log_tty_colors);
    }
}

impl Default for EngineConfigs {
    fn default() -> Self {
        Self {
            log_level: log::Level::Info,
            log_source_location: false,
            log_tty_colors: true,
        }
    }
}
