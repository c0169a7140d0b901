use crate::{
    log,
    save::{Save, Load, SaveBuffer, SaveResult, LoadResult},
    utils::{Size, coords::Cell},
};

// Maximum elevation level a tile can have.
pub const MAX_ELEVATION: u8 = 5;

// ----------------------------------------------
// ElevationGrid
// ----------------------------------------------

pub struct ElevationGrid {
    size: Size,
    levels: Vec<u8>,
}

impl ElevationGrid {
    pub fn new(size: Size) -> Self {
        Self { size, levels: vec![0; size.area()] }
    }

    #[inline]
    pub fn at(&self, grid_offset: usize) -> u8 {
        self.levels.get(grid_offset).copied().unwrap_or(0)
    }

    #[inline]
    pub fn set(&mut self, grid_offset: usize, level: u8) {
        debug_assert!(level <= MAX_ELEVATION);
        if let Some(tile) = self.levels.get_mut(grid_offset) {
            *tile = level;
        }
    }

    #[inline]
    pub fn clear(&mut self) {
        self.levels.fill(0);
    }

    // Flattens cliffs: a tile is lowered by one level whenever one of its
    // direct neighbours sits at least two levels below it. Each pass can only
    // lower a tile by one, so four passes cover the full 5 level range.
    // Neighbours outside the map are ignored.
    pub fn remove_cliffs(&mut self) {
        let mut lowered_count = 0;
        for _ in 0..(MAX_ELEVATION - 1) {
            for y in 0..self.size.height {
                for x in 0..self.size.width {
                    let offset = self.offset(Cell::new(x, y));
                    let level = self.levels[offset];
                    if level > 0 && self.fix_cliff_tile(Cell::new(x, y), offset, level) {
                        lowered_count += 1;
                    }
                }
            }
        }

        log::verbose!(log::channel!("map"), "Removed cliffs: {lowered_count} tile levels lowered.");
    }

    fn fix_cliff_tile(&mut self, cell: Cell, offset: usize, level: u8) -> bool {
        let lowered = (level - 1) as i32;
        let has_drop = [(-1, 0), (0, -1), (1, 0), (0, 1)]
            .into_iter()
            .map(|(dx, dy)| cell.offset_by(dx, dy))
            .filter(|neighbor| neighbor.is_inside(self.size))
            .any(|neighbor| (self.levels[self.offset(neighbor)] as i32) < lowered);

        if has_drop {
            self.levels[offset] = lowered as u8;
        }
        has_drop
    }

    #[inline]
    fn offset(&self, cell: Cell) -> usize {
        (cell.y * self.size.width + cell.x) as usize
    }
}

// Chunk layout: width and height as i32, then one level byte per tile.
impl Save for ElevationGrid {
    fn save(&self, buf: &mut SaveBuffer) -> SaveResult {
        buf.write_i32(self.size.width);
        buf.write_i32(self.size.height);
        buf.write_raw(&self.levels);
        Ok(())
    }
}

impl Load for ElevationGrid {
    fn load(&mut self, buf: &mut SaveBuffer) -> LoadResult {
        let saved_size = Size::new(buf.read_i32()?, buf.read_i32()?);
        if saved_size != self.size {
            return Err(format!("Elevation grid size {saved_size} does not match map size {}.", self.size));
        }

        let count = self.levels.len();
        let bytes = buf.read_raw(count)?;
        self.levels.copy_from_slice(bytes);
        Ok(())
    }
}
