use super::*;
use crate::save::{Save, Load, SaveBuffer};

fn make_map(width: i32, height: i32) -> CityMap {
    CityMap::new(Size::new(width, height), 0xC17)
}

#[test]
fn test_grid_offsets() {
    let map = make_map(8, 4);
    assert_eq!(map.offset_of(Cell::new(0, 0)), Some(0));
    assert_eq!(map.offset_of(Cell::new(3, 2)), Some(19));
    assert_eq!(map.offset_of(Cell::new(8, 0)), None);
    assert_eq!(map.offset_of(Cell::new(-1, 1)), None);

    assert_eq!(map.grid_offset(3, 2), 19);
    assert_eq!(map.grid_offset(100, 100), 0);
}

#[test]
fn test_random_grid_is_deterministic() {
    let a = make_map(16, 16);
    let b = make_map(16, 16);
    assert!((0..256).all(|offset| a.random_at(offset) == b.random_at(offset)));

    let mut c = make_map(16, 16);
    c.reseed(1234);
    assert_eq!(c.random().seed(), 1234);
    assert!((0..256).any(|offset| a.random_at(offset) != c.random_at(offset)));
}

#[test]
fn test_desirability_max_over_footprint() {
    let mut map = make_map(10, 10);
    map.set_desirability(Cell::new(2, 2), 4);
    map.set_desirability(Cell::new(3, 3), 9);
    map.set_desirability(Cell::new(5, 5), 50); // outside the 2x2 footprint

    assert_eq!(map.desirability_max(2, 2, 2), 9);
    assert_eq!(map.desirability_max(2, 2, 1), 4);
    assert_eq!(map.desirability_max(7, 7, 2), 0);
}

#[test]
fn test_adjacent_to_water() {
    let mut map = make_map(10, 10);
    map.set_water(Cell::new(4, 2), true);

    // 2x2 footprint at (2,2) covers x 2..=3; water at x=4 touches its edge.
    assert!(map.is_adjacent_to_water(2, 2, 2));
    // Water inside the footprint does not count as adjacency.
    assert!(!map.is_adjacent_to_water(4, 2, 1));
    assert!(!map.is_adjacent_to_water(7, 7, 1));
    // Diagonal neighbours are part of the ring.
    assert!(map.is_adjacent_to_water(5, 3, 1));
}

#[test]
fn test_remove_cliffs() {
    let size = Size::new(3, 1);
    let mut grid = ElevationGrid::new(size);
    grid.set(0, 0);
    grid.set(1, 5);
    grid.set(2, 5);

    grid.remove_cliffs();

    // Four passes: the peak next to ground level drops one level per pass.
    assert_eq!(grid.at(1), 1);
    // Its neighbour only starts dropping once the gap to it exceeds one level.
    assert_eq!(grid.at(2), 2);
}

#[test]
fn test_remove_cliffs_keeps_gentle_slopes() {
    let size = Size::new(4, 1);
    let mut grid = ElevationGrid::new(size);
    for (offset, level) in [0, 1, 2, 3].into_iter().enumerate() {
        grid.set(offset, level);
    }

    grid.remove_cliffs();

    assert_eq!([grid.at(0), grid.at(1), grid.at(2), grid.at(3)], [0, 1, 2, 3]);
}

#[test]
fn test_elevation_save_load() {
    let size = Size::new(4, 4);
    let mut grid = ElevationGrid::new(size);
    grid.set(5, 3);
    grid.set(15, 1);

    let mut buf = SaveBuffer::new();
    grid.save(&mut buf).unwrap();
    assert_eq!(buf.len(), 8 + 16);

    let mut loaded = ElevationGrid::new(size);
    loaded.load(&mut buf).unwrap();
    assert_eq!(loaded.at(5), 3);
    assert_eq!(loaded.at(15), 1);
    assert_eq!(loaded.at(0), 0);
}

#[test]
fn test_elevation_load_rejects_other_map_size() {
    let mut grid = ElevationGrid::new(Size::new(4, 4));
    grid.set(0, 2);

    let mut buf = SaveBuffer::new();
    grid.save(&mut buf).unwrap();

    // Same tile count, different shape.
    let mut loaded = ElevationGrid::new(Size::new(2, 8));
    let err = loaded.load(&mut buf).unwrap_err();
    assert!(err.contains("4x4"), "{err}");
    assert_eq!(loaded.at(0), 0);
}

#[test]
fn test_clear_keeps_random_grid() {
    let mut map = make_map(4, 4);
    let before = map.random_at(3);
    map.set_water(Cell::new(1, 1), true);
    map.elevation_mut().set(0, 2);

    map.clear();

    assert!(!map.is_water(Cell::new(1, 1)));
    assert_eq!(map.elevation_at(0), 0);
    assert_eq!(map.random_at(3), before);
}
