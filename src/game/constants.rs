// Slot 0 of the building registry is the "no building" sentinel.
pub const SENTINEL_BUILDING_INDEX: usize = 0;

// Maximum number of hops followed when walking composite building links.
pub const MAX_COMPOSITE_HOPS: usize = 99;

// Initial happiness of a new house.
pub const INITIAL_HOUSE_HAPPINESS: i8 = 50;

// Every new building belongs to the player's faction.
pub const PLAYER_FACTION_ID: u8 = 1;

// Figure generation jitter is a 7 bit random value; the roam direction
// reuses its even bits below 8.
pub const FIGURE_DELAY_MASK: u8 = 0x7f;
pub const ROAM_DIRECTION_MASK: u8 = 6;

// Desirability bonus for buildings next to water.
pub const WATER_DESIRABILITY_BONUS: i32 = 10;

// Desirability bonus by tile elevation (levels past the end use the last entry).
pub const ELEVATION_DESIRABILITY_BONUS: [i32; 6] = [0, 10, 12, 14, 16, 18];

// Save file signature and format version.
pub const SAVE_FILE_MAGIC: [u8; 4] = *b"CSAV";
pub const SAVE_FILE_VERSION: u32 = 1;
