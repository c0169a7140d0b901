use strum::{Display, EnumCount, EnumIter};

use super::BuildingId;

// ----------------------------------------------
// MapQuery
// ----------------------------------------------

// Read-only map terrain queries consumed by building creation and scoring.
pub trait MapQuery {
    fn grid_offset(&self, x: i32, y: i32) -> u16;

    // Deterministic per-tile random byte.
    fn random_at(&self, grid_offset: u16) -> u8;

    fn elevation_at(&self, grid_offset: u16) -> i32;

    // Highest desirability value over the `size`x`size` footprint at x,y.
    fn desirability_max(&self, x: i32, y: i32, size: i32) -> i32;

    fn is_adjacent_to_water(&self, x: i32, y: i32, size: i32) -> bool;
}

// ----------------------------------------------
// CityLandmark
// ----------------------------------------------

// City-level singleton registrations a building may hold.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display, EnumCount, EnumIter)]
pub enum CityLandmark {
    Senate,
    Dock,
    Barracks,
    DistributionCenter,
    Hippodrome,
    TriumphalArch,
}

// ----------------------------------------------
// CityHooks
// ----------------------------------------------

// Side effects the building registry triggers in other subsystems.
// Buildings are always referred to by id; implementors must resolve
// them through the registry again instead of holding on to records.
pub trait CityHooks {
    // Slot is held by an in-flight undo snapshot and must not be reused.
    fn is_reserved_by_undo(&self, _id: BuildingId) -> bool {
        false
    }

    // Opaque city-wide value stamped on every new building.
    fn unknown_value(&self) -> u8 {
        0
    }

    // Current placement rotation for orientable composites (warehouse, hippodrome).
    fn placement_rotation(&self) -> i16 {
        0
    }

    // User-visible "data limit reached" warning.
    fn show_data_limit_warning(&mut self);

    fn remove_building_tiles(&mut self, id: BuildingId, x: i32, y: i32);

    // Global map recalculations. Each runs at most once per lifecycle pass.
    fn update_all_walls(&mut self);
    fn update_all_aqueducts(&mut self);
    fn update_land_routing(&mut self);
    fn update_all_roads(&mut self);

    // Returns the occupants of a removed house to the city population pool.
    fn release_home_population(&mut self, population: i32);

    fn delete_storage(&mut self, storage_id: u8);

    fn unregister_landmark(&mut self, landmark: CityLandmark, id: BuildingId);

    fn delete_fort_legion(&mut self, fort_id: BuildingId);

    // Build menu availability changed (e.g. triumphal arch consumed).
    fn refresh_build_menu(&mut self);
}
