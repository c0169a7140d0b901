// ----------------------------------------------
// BuildingRotation
// ----------------------------------------------

// Road orientation flips automatically this often unless rotation is manual.
pub const ROAD_ORIENTATION_INTERVAL_MILLIS: u64 = 1500;

// Placement rotation state for the building construction tool.
// Rotation is a quarter turn index (0-3); road orientation alternates 1 <-> 2.
#[derive(Clone, Debug)]
pub struct BuildingRotation {
    rotation: i32,
    road_orientation: i32,
    road_last_update_millis: u64,
    rotate_manually: bool,
}

impl BuildingRotation {
    pub fn new(rotate_manually: bool) -> Self {
        Self {
            rotation: 0,
            road_orientation: 1,
            road_last_update_millis: 0,
            rotate_manually,
        }
    }

    #[inline]
    pub fn rotation(&self) -> i32 {
        self.rotation
    }

    #[inline]
    pub fn road_orientation(&self) -> i32 {
        self.road_orientation
    }

    #[inline]
    pub fn set_rotate_manually(&mut self, rotate_manually: bool) {
        self.rotate_manually = rotate_manually;
    }

    // Timed auto-rotation while placing roads.
    pub fn update_road_orientation(&mut self, now_millis: u64) {
        if !self.rotate_manually
            && now_millis.saturating_sub(self.road_last_update_millis) > ROAD_ORIENTATION_INTERVAL_MILLIS
        {
            self.road_last_update_millis = now_millis;
            self.flip_road_orientation();
            self.rotate();
        }
    }

    pub fn rotate_by_hotkey(&mut self) {
        if self.rotate_manually {
            self.rotate();
            self.flip_road_orientation();
        }
    }

    // Composites like the hippodrome only have two valid orientations.
    pub fn force_two_orientations(&mut self) {
        if self.rotation == 1 || self.rotation == 2 {
            self.rotation = 3;
        }
    }

    #[inline]
    pub fn reset(&mut self) {
        self.rotation = 0;
    }

    // Orientation of a placed building in 8-way view directions.
    #[inline]
    pub fn building_orientation(building_rotation: i32, view_orientation: i32) -> i32 {
        (2 * building_rotation + view_orientation) % 8
    }

    // Grid offset delta for moving `default_delta` tiles along the current rotation.
    pub fn delta_with_rotation(&self, default_delta: i32, grid_width: i32) -> i32 {
        let (x, y) = Self::offset_with_rotation(default_delta, self.rotation);
        y * grid_width + x
    }

    pub fn offset_with_rotation(offset: i32, rotation: i32) -> (i32, i32) {
        match rotation {
            0 => (offset, 0),
            1 => (0, -offset),
            2 => (-offset, 0),
            _ => (0, offset),
        }
    }

    // Footprint corner used as the placement anchor for a view direction.
    pub fn corner(direction: i32) -> i32 {
        match direction {
            2 => 4, // left corner
            4 => 8, // bottom corner
            6 => 5, // right corner
            _ => 0, // top corner
        }
    }

    fn rotate(&mut self) {
        self.rotation = (self.rotation + 1) % 4;
    }

    fn flip_road_orientation(&mut self) {
        self.road_orientation = if self.road_orientation == 1 { 2 } else { 1 };
    }
}

impl Default for BuildingRotation {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_road_orientation() {
        let mut rotation = BuildingRotation::new(false);
        rotation.update_road_orientation(1000);
        assert_eq!((rotation.rotation(), rotation.road_orientation()), (0, 1));

        rotation.update_road_orientation(1501);
        assert_eq!((rotation.rotation(), rotation.road_orientation()), (1, 2));

        // Hotkey is ignored unless rotation is manual.
        rotation.rotate_by_hotkey();
        assert_eq!(rotation.rotation(), 1);

        for now in [3100, 4700, 6300] {
            rotation.update_road_orientation(now);
        }
        assert_eq!(rotation.rotation(), 0);
    }

    #[test]
    fn test_manual_rotation() {
        let mut rotation = BuildingRotation::new(true);
        rotation.update_road_orientation(100_000);
        assert_eq!(rotation.rotation(), 0);

        rotation.rotate_by_hotkey();
        assert_eq!((rotation.rotation(), rotation.road_orientation()), (1, 2));

        rotation.force_two_orientations();
        assert_eq!(rotation.rotation(), 3);

        rotation.reset();
        assert_eq!(rotation.rotation(), 0);
    }

    #[test]
    fn test_orientation_helpers() {
        assert_eq!(BuildingRotation::building_orientation(3, 6), 4);
        assert_eq!(BuildingRotation::offset_with_rotation(2, 1), (0, -2));
        assert_eq!(BuildingRotation::offset_with_rotation(2, 3), (0, 2));
        assert_eq!(BuildingRotation::corner(4), 8);
        assert_eq!(BuildingRotation::corner(0), 0);

        let rotation = BuildingRotation::new(true);
        assert_eq!(rotation.delta_with_rotation(3, 100), 3);
    }
}
