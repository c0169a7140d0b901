use super::{
    hooks::MapQuery,
    registry::BuildingRegistry,
};
use crate::game::constants::{ELEVATION_DESIRABILITY_BONUS, WATER_DESIRABILITY_BONUS};

// Desirability bonus for a tile at `elevation`.
#[inline]
pub fn elevation_bonus(elevation: i32) -> i32 {
    let last = ELEVATION_DESIRABILITY_BONUS.len() - 1;
    ELEVATION_DESIRABILITY_BONUS[(elevation.max(0) as usize).min(last)]
}

// Building desirability from its footprint's best map value, water
// adjacency and elevation. Saturates to the persisted i8 range.
pub fn desirability_score(footprint_max: i32, adjacent_to_water: bool, elevation: i32) -> i8 {
    let mut score = footprint_max;
    if adjacent_to_water {
        score += WATER_DESIRABILITY_BONUS;
    }
    score += elevation_bonus(elevation);
    score.clamp(i8::MIN as i32, i8::MAX as i32) as i8
}

impl BuildingRegistry {
    // Recomputes the desirability of every VALID building from the map.
    pub fn update_desirability<M>(&mut self, map: &M)
        where M: MapQuery
    {
        for building in self.iter_mut().filter(|building| building.is_valid()) {
            let footprint_max = map.desirability_max(building.x as i32, building.y as i32, building.size as i32);
            let elevation = map.elevation_at(building.grid_offset);
            building.desirability = desirability_score(footprint_max, building.is_adjacent_to_water, elevation);
        }
    }
}
