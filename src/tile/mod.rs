use bitvec::vec::BitVec;

use crate::{
    game::building::hooks::MapQuery,
    utils::{Size, coords::{Cell, Footprint}},
};

pub mod elevation;
pub mod random;

use elevation::ElevationGrid;
use random::RandomGrid;

#[cfg(test)]
mod tests;

// ----------------------------------------------
// CityMap
// ----------------------------------------------

// Per-tile terrain data for the city. Tiles are addressed either by
// cell or by grid offset (`y * width + x`).
pub struct CityMap {
    size: Size,
    elevation: ElevationGrid,
    random: RandomGrid,
    desirability: Vec<i32>,
    water: BitVec,
}

impl CityMap {
    pub fn new(size: Size, random_seed: u64) -> Self {
        // Grid offsets are persisted as u16.
        assert!(size.is_valid() && size.area() <= u16::MAX as usize + 1,
                "Invalid city map size: {size}");

        Self {
            size,
            elevation: ElevationGrid::new(size),
            random: RandomGrid::generate(size, random_seed),
            desirability: vec![0; size.area()],
            water: BitVec::repeat(false, size.area()),
        }
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    #[inline]
    pub fn offset_of(&self, cell: Cell) -> Option<usize> {
        if cell.is_inside(self.size) {
            Some((cell.y * self.size.width + cell.x) as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn elevation(&self) -> &ElevationGrid {
        &self.elevation
    }

    #[inline]
    pub fn elevation_mut(&mut self) -> &mut ElevationGrid {
        &mut self.elevation
    }

    #[inline]
    pub fn random(&self) -> &RandomGrid {
        &self.random
    }

    pub fn reseed(&mut self, random_seed: u64) {
        self.random = RandomGrid::generate(self.size, random_seed);
    }

    pub fn set_desirability(&mut self, cell: Cell, value: i32) {
        if let Some(offset) = self.offset_of(cell) {
            self.desirability[offset] = value;
        }
    }

    pub fn desirability_at(&self, cell: Cell) -> i32 {
        self.offset_of(cell)
            .map(|offset| self.desirability[offset])
            .unwrap_or(0)
    }

    pub fn set_water(&mut self, cell: Cell, is_water: bool) {
        if let Some(offset) = self.offset_of(cell) {
            self.water.set(offset, is_water);
        }
    }

    #[inline]
    pub fn is_water(&self, cell: Cell) -> bool {
        self.offset_of(cell).is_some_and(|offset| self.water[offset])
    }

    // Wipes all per-tile values except the random grid, which is derived from the seed.
    pub fn clear(&mut self) {
        self.elevation.clear();
        self.desirability.fill(0);
        self.water.fill(false);
    }
}

impl MapQuery for CityMap {
    #[inline]
    fn grid_offset(&self, x: i32, y: i32) -> u16 {
        // Out of bounds placements map to offset 0, matching an empty tile.
        self.offset_of(Cell::new(x, y)).unwrap_or(0) as u16
    }

    #[inline]
    fn random_at(&self, grid_offset: u16) -> u8 {
        self.random.at(grid_offset as usize)
    }

    #[inline]
    fn elevation_at(&self, grid_offset: u16) -> i32 {
        self.elevation.at(grid_offset as usize) as i32
    }

    fn desirability_max(&self, x: i32, y: i32, size: i32) -> i32 {
        Footprint::new(Cell::new(x, y), size.max(1))
            .cells()
            .filter_map(|cell| self.offset_of(cell))
            .map(|offset| self.desirability[offset])
            .max()
            .unwrap_or(0)
    }

    fn is_adjacent_to_water(&self, x: i32, y: i32, size: i32) -> bool {
        let footprint = Footprint::new(Cell::new(x, y), size.max(1));
        footprint.expanded(1)
            .cells()
            .filter(|cell| !footprint.contains(*cell))
            .any(|cell| self.is_water(cell))
    }
}
