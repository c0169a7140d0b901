use super::Size;

// ----------------------------------------------
// Cell
// ----------------------------------------------

// X,Y position in the city map grid of tiles.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.x >= 0 && self.y >= 0
    }

    #[inline]
    pub fn is_inside(&self, size: Size) -> bool {
        self.is_valid() && self.x < size.width && self.y < size.height
    }

    #[inline]
    pub fn offset_by(self, dx: i32, dy: i32) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "[{},{}]", self.x, self.y)
    }
}

// ----------------------------------------------
// Footprint
// ----------------------------------------------

// Square block of cells covered by a building of `size` tiles,
// anchored at its top-left cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Footprint {
    pub origin: Cell,
    pub size: i32,
}

impl Footprint {
    #[inline]
    pub const fn new(origin: Cell, size: i32) -> Self {
        Self { origin, size }
    }

    // Footprint grown by `amount` tiles on every side.
    #[inline]
    pub fn expanded(self, amount: i32) -> Self {
        Self {
            origin: self.origin.offset_by(-amount, -amount),
            size: self.size + amount * 2,
        }
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= self.origin.x && cell.x < self.origin.x + self.size &&
        cell.y >= self.origin.y && cell.y < self.origin.y + self.size
    }

    pub fn cells(self) -> impl Iterator<Item = Cell> {
        let size = self.size.max(0);
        (0..size).flat_map(move |dy| {
            (0..size).map(move |dx| self.origin.offset_by(dx, dy))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footprint_cells() {
        let footprint = Footprint::new(Cell::new(2, 3), 2);
        let cells: Vec<Cell> = footprint.cells().collect();
        assert_eq!(cells, vec![Cell::new(2, 3), Cell::new(3, 3), Cell::new(2, 4), Cell::new(3, 4)]);

        let ring = footprint.expanded(1);
        assert_eq!(ring.origin, Cell::new(1, 2));
        assert_eq!(ring.size, 4);
        assert_eq!(ring.cells().count(), 16);
        assert!(ring.contains(Cell::new(4, 5)));
        assert!(!ring.contains(Cell::new(5, 5)));
    }
}
