use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};

use crate::{
    engine::config::{Configs, EngineConfigs, CONFIGS_DIR_PATH},
    utils::Size,
};

use super::ruleset::Ruleset;

// ----------------------------------------------
// GameConfigs
// ----------------------------------------------

pub const GAME_CONFIGS_FILE_NAME: &str = "game.json";

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)] // Missing fields in the config file get defaults from GameConfigs::default().
pub struct GameConfigs {
    // Low-level Engine:
    pub engine: EngineConfigs,

    // Save Games:
    pub save: SaveGameConfigs,

    // Simulation/World:
    pub sim: SimConfigs,
}

impl GameConfigs {
    pub fn default_path() -> PathBuf {
        Path::new(CONFIGS_DIR_PATH).join(GAME_CONFIGS_FILE_NAME)
    }
}

impl Configs for GameConfigs {
    fn post_load(&mut self) {
        self.sim.post_load();
    }
}

// ----------------------------------------------
// Sub Config Categories
// ----------------------------------------------

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SaveGameConfigs {
    pub save_dir: String,
    pub save_file_name: String,
}

impl SaveGameConfigs {
    pub fn save_file_path(&self) -> PathBuf {
        Path::new(&self.save_dir).join(&self.save_file_name)
    }
}

impl Default for SaveGameConfigs {
    fn default() -> Self {
        Self { save_dir: "saves".into(),
               save_file_name: "city.sav".into() }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfigs {
    pub ruleset: Ruleset,
    pub random_seed: u64,
    pub map_size: Size,
    pub start_year: i32,

    // Placement rotation only changes on hotkey presses.
    pub rotate_manually: bool,
}

impl SimConfigs {
    // Largest map whose grid offsets still fit the persisted u16.
    pub const MAX_MAP_AREA: usize = u16::MAX as usize + 1;

    fn post_load(&mut self) {
        if !self.map_size.is_valid() || self.map_size.area() > Self::MAX_MAP_AREA {
            let default_size = Self::default().map_size;
            crate::log::warn!(crate::log::channel!("config"),
                              "Invalid map size {}, using {default_size}.", self.map_size);
            self.map_size = default_size;
        }
    }
}

impl Default for SimConfigs {
    fn default() -> Self {
        Self { ruleset: Ruleset::Caesar3,
               random_seed: 0xCAFE1CAFE2CAFE3A,
               map_size: Size::new(162, 162),
               start_year: -500,
               rotate_manually: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("citysim_core_{}_{name}", std::process::id()))
            .join(GAME_CONFIGS_FILE_NAME)
    }

    #[test]
    fn test_missing_file_loads_defaults() {
        let configs = GameConfigs::load_file(&temp_config_path("missing"));
        assert_eq!(configs.sim.ruleset, Ruleset::Caesar3);
        assert_eq!(configs.sim.map_size, Size::new(162, 162));
        assert_eq!(configs.save.save_file_path(), Path::new("saves").join("city.sav"));
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let path = temp_config_path("round_trip");

        let mut configs = GameConfigs::default();
        configs.sim.ruleset = Ruleset::Pharaoh;
        configs.sim.start_year = -2850;
        configs.engine.log_level = crate::log::Level::Warn;
        assert!(configs.save_file(&path));

        let loaded = GameConfigs::load_file(&path);
        assert_eq!(loaded.sim.ruleset, Ruleset::Pharaoh);
        assert_eq!(loaded.sim.start_year, -2850);
        assert_eq!(loaded.engine.log_level, crate::log::Level::Warn);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let path = temp_config_path("partial");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, r#"{ "sim": { "ruleset": "Pharaoh", "map_size": { "width": 0, "height": 10 } } }"#).unwrap();

        let loaded = GameConfigs::load_file(&path);
        assert_eq!(loaded.sim.ruleset, Ruleset::Pharaoh);
        assert_eq!(loaded.sim.random_seed, SimConfigs::default().random_seed);
        // Invalid map sizes are replaced in post_load.
        assert_eq!(loaded.sim.map_size, Size::new(162, 162));
        assert_eq!(loaded.save.save_dir, "saves");

        let _ = std::fs::remove_file(&path);
    }
}
