use std::path::Path;

use crate::{
    log,
    tile::{CityMap, elevation::ElevationGrid},
};

pub mod building;
pub mod config;
pub mod constants;
pub mod resources;
pub mod rotation;
pub mod ruleset;
pub mod save;
pub mod time;

use building::{
    BuildingId,
    BuildingType,
    hooks::CityHooks,
    registry::BuildingRegistry,
};
use config::GameConfigs;
use rotation::BuildingRotation;
use save::{SaveGame, SaveGameMut};
use time::GameTime;


// ----------------------------------------------
// Game
// ----------------------------------------------

// Owns the simulation state and drives it one tick at a time.
// Side effects into the rest of the city go through `hooks`.
pub struct Game<H> {
    configs: GameConfigs,
    buildings: BuildingRegistry,
    map: CityMap,
    time: GameTime,
    rotation: BuildingRotation,
    hooks: H,
}

impl<H> Game<H>
    where H: CityHooks
{
    pub fn new(configs: GameConfigs, hooks: H) -> Self {
        configs.engine.apply();

        let buildings = BuildingRegistry::new(configs.sim.ruleset);
        let map = CityMap::new(configs.sim.map_size, configs.sim.random_seed);
        let time = GameTime::new(configs.sim.start_year);
        let rotation = BuildingRotation::new(configs.sim.rotate_manually);

        let game = Self { configs, buildings, map, time, rotation, hooks };

        log::info!(log::channel!("game"), "New {} game: map {}, {} building slots.",
                   game.configs.sim.ruleset, game.map.size(), game.buildings.capacity());
        game
    }

    // Starts over with an empty city at the configured start year.
    pub fn new_game(&mut self) {
        let sim = &self.configs.sim;
        self.buildings.clear_all();
        self.map.clear();
        self.map.reseed(sim.random_seed);
        self.time.init(sim.start_year);
        self.rotation.reset();

        log::info!(log::channel!("game"), "Game reset to year {}.", self.time.year());
    }

    // One simulation step. Buildings created since the previous tick
    // become VALID here, before desirability reads their state.
    pub fn tick(&mut self) {
        self.time.advance();
        self.buildings.update_state(&mut self.hooks);
        self.buildings.update_highest_id();
        self.buildings.update_desirability(&self.map);
    }

    pub fn create_building(&mut self, kind: BuildingType, x: u8, y: u8) -> Option<BuildingId> {
        self.buildings.create(kind, x, y, &self.map, &mut self.hooks)
            .map(|building| building.id)
    }

    // ----------------------
    // Accessors:
    // ----------------------

    #[inline] pub fn configs(&self) -> &GameConfigs { &self.configs }
    #[inline] pub fn buildings(&self) -> &BuildingRegistry { &self.buildings }
    #[inline] pub fn buildings_mut(&mut self) -> &mut BuildingRegistry { &mut self.buildings }
    #[inline] pub fn map(&self) -> &CityMap { &self.map }
    #[inline] pub fn map_mut(&mut self) -> &mut CityMap { &mut self.map }
    #[inline] pub fn time(&self) -> &GameTime { &self.time }
    #[inline] pub fn rotation(&self) -> &BuildingRotation { &self.rotation }
    #[inline] pub fn rotation_mut(&mut self) -> &mut BuildingRotation { &mut self.rotation }
    #[inline] pub fn hooks(&self) -> &H { &self.hooks }
    #[inline] pub fn hooks_mut(&mut self) -> &mut H { &mut self.hooks }

    // ----------------------
    // Save Game:
    // ----------------------

    pub fn save_game(&self, save_file_path: &Path) -> bool {
        log::info!(log::channel!("game"), "Save game {save_file_path:?} ...");

        if let Some(parent_dir) = save_file_path.parent() {
            // Ignore any errors since this fails if any element of the path already exists.
            let _ = std::fs::create_dir_all(parent_dir);
        }

        let save_game = SaveGame {
            ruleset: self.configs.sim.ruleset,
            time: &self.time,
            elevation: self.map.elevation(),
            buildings: &self.buildings,
        };

        if let Err(err) = save_game.write_file(save_file_path) {
            log::error!(log::channel!("game"), "Failed to save game: {err}");
            return false;
        }
        true
    }

    pub fn load_game(&mut self, save_file_path: &Path) -> bool {
        log::info!(log::channel!("game"), "Loading save game {save_file_path:?} ...");

        // Load into temporaries so that a failed load leaves the current game untouched.
        let ruleset = self.configs.sim.ruleset;
        let mut time = GameTime::default();
        let mut elevation = ElevationGrid::new(self.map.size());
        let mut buildings = BuildingRegistry::new(ruleset);

        let mut save_game = SaveGameMut {
            ruleset,
            time: &mut time,
            elevation: &mut elevation,
            buildings: &mut buildings,
        };

        if let Err(err) = save_game.read_file(save_file_path) {
            log::error!(log::channel!("game"), "Failed to load saved game from {save_file_path:?}: {err}");
            return false;
        }

        self.time = time;
        *self.map.elevation_mut() = elevation;
        self.buildings = buildings;
        true
    }
}
