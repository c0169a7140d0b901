use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter};

use crate::game::ruleset::Ruleset;
use super::hooks::CityLandmark;

// ----------------------------------------------
// BuildingType
// ----------------------------------------------

// Persisted building type id. The Pharaoh ruleset reuses several Caesar III
// ids for its own buildings (e.g. 100 is a wheat farm in Caesar III and a
// barley farm in Pharaoh), so this is an open id with named constants rather
// than a closed enum. Aliases share the value of the id they stand for.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BuildingType(pub u16);

macro_rules! building_types {
    ($( $(#[$attr:meta])* $name:ident = $value:expr, )+) => {
        impl BuildingType {
            $(
                $(#[$attr])*
                pub const $name: Self = Self($value);
            )+

            // Every named id, aliases included, in declaration order.
            pub const NAMED: &'static [(&'static str, BuildingType)] = &[
                $( (stringify!($name), Self($value)), )+
            ];
        }
    };
}

building_types! {
    NONE = 0,
    MENU_FARMS = 2,
    MENU_RAW_MATERIALS = 3,
    MENU_WORKSHOPS = 4,
    ROAD = 5,
    WALL = 6,
    DRAGGABLE_RESERVOIR = 7,
    AQUEDUCT = 8,
    CLEAR_LAND = 9,
    // Houses (vacant lot is the first house level):
    HOUSE_VACANT_LOT = 10,
    HOUSE_SMALL_TENT = 10,
    HOUSE_LARGE_TENT = 11,
    HOUSE_SMALL_SHACK = 12,
    HOUSE_LARGE_SHACK = 13,
    HOUSE_SMALL_HOVEL = 14,
    HOUSE_LARGE_HOVEL = 15,
    HOUSE_SMALL_CASA = 16,
    HOUSE_LARGE_CASA = 17,
    HOUSE_SMALL_INSULA = 18,
    HOUSE_MEDIUM_INSULA = 19,
    HOUSE_LARGE_INSULA = 20,
    HOUSE_GRAND_INSULA = 21,
    HOUSE_SMALL_VILLA = 22,
    HOUSE_MEDIUM_VILLA = 23,
    HOUSE_LARGE_VILLA = 24,
    HOUSE_GRAND_VILLA = 25,
    HOUSE_SMALL_PALACE = 26,
    HOUSE_MEDIUM_PALACE = 27,
    HOUSE_LARGE_PALACE = 28,
    HOUSE_LUXURY_PALACE = 29,
    // Entertainment & beautification:
    AMPHITHEATER = 30,
    THEATER = 31,
    HIPPODROME = 32,
    COLOSSEUM = 33,
    GLADIATOR_SCHOOL = 34,
    LION_HOUSE = 35,
    ACTOR_COLONY = 36,
    CHARIOT_MAKER = 37,
    PLAZA = 38,
    GARDENS = 39,
    FORT_LEGIONARIES = 40,
    SMALL_STATUE = 41,
    MEDIUM_STATUE = 42,
    LARGE_STATUE = 43,
    FORT_JAVELIN = 44,
    FORT_MOUNTED = 45,
    // Health, education & security:
    DOCTOR = 46,
    HOSPITAL = 47,
    BATHHOUSE = 48,
    BARBER = 49,
    DISTRIBUTION_CENTER_UNUSED = 50,
    SCHOOL = 51,
    ACADEMY = 52,
    LIBRARY = 53,
    FORT_GROUND = 54,
    PREFECTURE = 55,
    TRIUMPHAL_ARCH = 56,
    FORT = 57,
    GATEHOUSE = 58,
    TOWER = 59,
    // Religion:
    SMALL_TEMPLE_CERES = 60,
    SMALL_TEMPLE_NEPTUNE = 61,
    SMALL_TEMPLE_MERCURY = 62,
    SMALL_TEMPLE_MARS = 63,
    SMALL_TEMPLE_VENUS = 64,
    LARGE_TEMPLE_CERES = 65,
    LARGE_TEMPLE_NEPTUNE = 66,
    LARGE_TEMPLE_MERCURY = 67,
    LARGE_TEMPLE_MARS = 68,
    LARGE_TEMPLE_VENUS = 69,
    // Trade & storage:
    MARKET = 70,
    GRANARY = 71,
    WAREHOUSE = 72,
    WAREHOUSE_SPACE = 73,
    SHIPYARD = 74,
    DOCK = 75,
    WHARF = 76,
    // Administration:
    GOVERNORS_HOUSE = 77,
    GOVERNORS_VILLA = 78,
    GOVERNORS_PALACE = 79,
    MISSION_POST = 80,
    ENGINEERS_POST = 81,
    LOW_BRIDGE = 82,
    SHIP_BRIDGE = 83,
    SENATE = 84,
    SENATE_UPGRADED = 85,
    FORUM = 86,
    FORUM_UPGRADED = 87,
    NATIVE_HUT = 88,
    NATIVE_MEETING = 89,
    RESERVOIR = 90,
    FOUNTAIN = 91,
    WELL = 92,
    NATIVE_CROPS = 93,
    MILITARY_ACADEMY = 94,
    BARRACKS = 95,
    MENU_SMALL_TEMPLES = 96,
    MENU_LARGE_TEMPLES = 97,
    ORACLE = 98,
    BURNING_RUIN = 99,
    // Industry (Pharaoh aliases follow their Caesar III id):
    WHEAT_FARM = 100,
    BARLEY_FARM = 100,
    VEGETABLE_FARM = 101,
    FLAX_FARM = 101,
    FRUIT_FARM = 102,
    GRAIN_FARM = 102,
    OLIVE_FARM = 103,
    LETTUCE_FARM = 103,
    VINES_FARM = 104,
    POMEGRANATES_FARM = 104,
    PIG_FARM = 105,
    CHICKPEAS_FARM = 105,
    MARBLE_QUARRY = 106,
    STONE_QUARRY = 106,
    IRON_MINE = 107,
    LIMESTONE_QUARRY = 107,
    TIMBER_YARD = 108,
    CLAY_PIT = 109,
    WINE_WORKSHOP = 110,
    BEER_WORKSHOP = 110,
    OIL_WORKSHOP = 111,
    LINEN_WORKSHOP = 111,
    WEAPONS_WORKSHOP = 112,
    FURNITURE_WORKSHOP = 113,
    JEWELS_WORKSHOP = 113,
    POTTERY_WORKSHOP = 114,
    // Pharaoh only:
    HUNTING_LODGE = 115,
    REED_GATHERER = 116,
    GOLD_MINE = 117,
    GEMSTONE_MINE = 118,
    CATTLE_RANCH = 119,
    FIGS_FARM = 120,
    PAPYRUS_WORKSHOP = 121,
    BRICKS_WORKSHOP = 122,
    CHARIOTS_WORKSHOP = 123,
    GRANITE_QUARRY = 124,
    COPPER_MINE = 125,
    SANDSTONE_QUARRY = 126,
    HENNA_FARM = 127,
    LAMP_WORKSHOP = 128,
    PAINT_WORKSHOP = 129,
    SHRINE_OSIRIS = 130,
    SHRINE_RA = 131,
    SHRINE_PTAH = 132,
    SHRINE_SETH = 133,
    SHRINE_BAST = 134,
    VILLAGE_PALACE = 135,
    TOWN_PALACE = 136,
    CITY_PALACE = 137,
    CARPENTERS_GUILD = 138,
    BRICKLAYERS_GUILD = 139,
    STONEMASONS_GUILD = 140,
    FERRY = 141,
    WALL_PH = 142,
    GATEHOUSE_PH = 143,
    TOWER_PH = 144,
}

impl BuildingType {
    // One past the highest defined id.
    pub const MAX: u16 = 145;

    #[inline]
    pub const fn raw(self) -> u16 {
        self.0
    }

    #[inline]
    pub const fn is_known(self) -> bool {
        self.0 < Self::MAX
    }

    #[inline]
    const fn in_range(self, first: Self, last: Self) -> bool {
        self.0 >= first.0 && self.0 <= last.0
    }

    // First declared name for this id (Caesar III name for shared ids).
    pub fn name(self) -> &'static str {
        Self::NAMED.iter()
            .find(|(_, kind)| *kind == self)
            .map(|(name, _)| *name)
            .unwrap_or("UNKNOWN")
    }

    // ----------------------
    // Classification:
    // ----------------------

    #[inline]
    pub const fn is_house(self) -> bool {
        self.in_range(Self::HOUSE_VACANT_LOT, Self::HOUSE_LUXURY_PALACE)
    }

    // Footprint tier (1-4) of a house type, 0 for anything else.
    pub const fn house_size(self) -> u8 {
        if self.in_range(Self::HOUSE_SMALL_TENT, Self::HOUSE_MEDIUM_INSULA) {
            1
        } else if self.in_range(Self::HOUSE_LARGE_INSULA, Self::HOUSE_MEDIUM_VILLA) {
            2
        } else if self.in_range(Self::HOUSE_LARGE_VILLA, Self::HOUSE_MEDIUM_PALACE) {
            3
        } else if self.in_range(Self::HOUSE_LARGE_PALACE, Self::HOUSE_LUXURY_PALACE) {
            4
        } else {
            0
        }
    }

    // House level offset from the vacant lot, 0 for anything else.
    pub const fn house_level(self) -> i16 {
        if self.is_house() {
            (self.0 - Self::HOUSE_VACANT_LOT.0) as i16
        } else {
            0
        }
    }

    #[inline]
    pub const fn is_fort(self) -> bool {
        matches!(self, Self::FORT_LEGIONARIES | Self::FORT_JAVELIN | Self::FORT_MOUNTED)
    }

    #[inline]
    pub const fn is_defense_ph(self) -> bool {
        matches!(self, Self::WALL_PH | Self::GATEHOUSE_PH | Self::TOWER_PH)
    }

    #[inline]
    pub const fn is_farm(self) -> bool {
        self.in_range(Self::WHEAT_FARM, Self::PIG_FARM)
            || matches!(self, Self::FIGS_FARM | Self::HENNA_FARM)
    }

    #[inline]
    pub const fn is_workshop(self) -> bool {
        self.in_range(Self::WINE_WORKSHOP, Self::POTTERY_WORKSHOP)
            || self.in_range(Self::PAPYRUS_WORKSHOP, Self::CHARIOTS_WORKSHOP)
            || matches!(self, Self::CATTLE_RANCH | Self::LAMP_WORKSHOP | Self::PAINT_WORKSHOP)
    }

    #[inline]
    pub const fn is_extractor(self) -> bool {
        self.in_range(Self::STONE_QUARRY, Self::CLAY_PIT)
            || matches!(self,
                Self::GOLD_MINE |
                Self::GEMSTONE_MINE |
                Self::COPPER_MINE |
                Self::GRANITE_QUARRY |
                Self::SANDSTONE_QUARRY |
                Self::REED_GATHERER)
    }

    // No monuments are modelled yet.
    #[inline]
    pub const fn is_monument(self) -> bool {
        false
    }

    #[inline]
    pub const fn is_senate(self) -> bool {
        self.in_range(Self::SENATE, Self::FORUM_UPGRADED)
            || self.in_range(Self::VILLAGE_PALACE, Self::CITY_PALACE)
    }

    #[inline]
    pub const fn is_temple(self) -> bool {
        self.in_range(Self::SMALL_TEMPLE_CERES, Self::SMALL_TEMPLE_VENUS)
    }

    #[inline]
    pub const fn is_large_temple(self) -> bool {
        self.in_range(Self::LARGE_TEMPLE_CERES, Self::LARGE_TEMPLE_VENUS)
    }

    #[inline]
    pub const fn is_shrine(self) -> bool {
        self.in_range(Self::SHRINE_OSIRIS, Self::SHRINE_BAST)
    }

    #[inline]
    pub const fn is_guild(self) -> bool {
        self.in_range(Self::CARPENTERS_GUILD, Self::STONEMASONS_GUILD)
    }

    #[inline]
    pub const fn is_beautification(self) -> bool {
        self.in_range(Self::SMALL_STATUE, Self::LARGE_STATUE)
            || matches!(self, Self::GARDENS | Self::PLAZA)
    }

    #[inline]
    pub const fn is_water_crossing(self) -> bool {
        matches!(self, Self::FERRY | Self::LOW_BRIDGE | Self::SHIP_BRIDGE)
    }

    // Towers and gatehouses rebuild the wall network when removed.
    #[inline]
    pub const fn is_wall_junction(self) -> bool {
        matches!(self, Self::TOWER | Self::GATEHOUSE)
    }

    #[inline]
    pub const fn is_orientable_composite(self) -> bool {
        matches!(self, Self::WAREHOUSE | Self::HIPPODROME)
    }

    // City-level registration released when a building of this type is destroyed.
    pub fn landmark(self) -> Option<CityLandmark> {
        if self.is_senate() {
            return Some(CityLandmark::Senate);
        }
        match self {
            Self::DOCK                       => Some(CityLandmark::Dock),
            Self::BARRACKS                   => Some(CityLandmark::Barracks),
            Self::DISTRIBUTION_CENTER_UNUSED => Some(CityLandmark::DistributionCenter),
            Self::HIPPODROME                 => Some(CityLandmark::Hippodrome),
            Self::TRIUMPHAL_ARCH             => Some(CityLandmark::TriumphalArch),
            _ => None,
        }
    }

    // ----------------------
    // Static properties:
    // ----------------------

    pub const fn properties(self) -> BuildingProperties {
        let house_size = self.house_size();
        if house_size != 0 {
            return BuildingProperties::new(house_size, false);
        }

        match self {
            Self::ROAD | Self::WALL | Self::AQUEDUCT | Self::PLAZA | Self::GARDENS |
            Self::SMALL_STATUE | Self::FOUNTAIN | Self::WELL | Self::LOW_BRIDGE |
            Self::SHIP_BRIDGE | Self::NATIVE_CROPS | Self::BURNING_RUIN |
            Self::WALL_PH => BuildingProperties::new(1, true),

            Self::MEDIUM_STATUE => BuildingProperties::new(2, true),
            Self::LARGE_STATUE | Self::RESERVOIR | Self::DRAGGABLE_RESERVOIR => BuildingProperties::new(3, true),

            Self::DOCTOR | Self::BARBER | Self::PREFECTURE | Self::ENGINEERS_POST |
            Self::WAREHOUSE | Self::WAREHOUSE_SPACE | Self::NATIVE_HUT |
            Self::SHRINE_OSIRIS | Self::SHRINE_RA | Self::SHRINE_PTAH |
            Self::SHRINE_SETH | Self::SHRINE_BAST => BuildingProperties::new(1, false),

            Self::THEATER | Self::BATHHOUSE | Self::SCHOOL | Self::LIBRARY |
            Self::GATEHOUSE | Self::TOWER | Self::SMALL_TEMPLE_CERES |
            Self::SMALL_TEMPLE_NEPTUNE | Self::SMALL_TEMPLE_MERCURY |
            Self::SMALL_TEMPLE_MARS | Self::SMALL_TEMPLE_VENUS | Self::MARKET |
            Self::SHIPYARD | Self::WHARF | Self::MISSION_POST | Self::FORUM |
            Self::FORUM_UPGRADED | Self::NATIVE_MEETING | Self::ORACLE |
            Self::MARBLE_QUARRY | Self::IRON_MINE | Self::TIMBER_YARD | Self::CLAY_PIT |
            Self::WINE_WORKSHOP | Self::OIL_WORKSHOP | Self::WEAPONS_WORKSHOP |
            Self::FURNITURE_WORKSHOP | Self::POTTERY_WORKSHOP | Self::HUNTING_LODGE |
            Self::REED_GATHERER | Self::GOLD_MINE | Self::GEMSTONE_MINE |
            Self::PAPYRUS_WORKSHOP | Self::BRICKS_WORKSHOP | Self::CHARIOTS_WORKSHOP |
            Self::GRANITE_QUARRY | Self::COPPER_MINE | Self::SANDSTONE_QUARRY |
            Self::LAMP_WORKSHOP | Self::PAINT_WORKSHOP | Self::CARPENTERS_GUILD |
            Self::BRICKLAYERS_GUILD | Self::STONEMASONS_GUILD | Self::FERRY |
            Self::GATEHOUSE_PH | Self::TOWER_PH => BuildingProperties::new(2, false),

            Self::AMPHITHEATER | Self::GLADIATOR_SCHOOL | Self::LION_HOUSE |
            Self::ACTOR_COLONY | Self::CHARIOT_MAKER | Self::FORT_LEGIONARIES |
            Self::FORT_JAVELIN | Self::FORT_MOUNTED | Self::FORT | Self::HOSPITAL |
            Self::ACADEMY | Self::TRIUMPHAL_ARCH | Self::LARGE_TEMPLE_CERES |
            Self::LARGE_TEMPLE_NEPTUNE | Self::LARGE_TEMPLE_MERCURY |
            Self::LARGE_TEMPLE_MARS | Self::LARGE_TEMPLE_VENUS | Self::GRANARY |
            Self::DOCK | Self::GOVERNORS_HOUSE | Self::MILITARY_ACADEMY |
            Self::BARRACKS | Self::WHEAT_FARM | Self::VEGETABLE_FARM |
            Self::FRUIT_FARM | Self::OLIVE_FARM | Self::VINES_FARM | Self::PIG_FARM |
            Self::CATTLE_RANCH | Self::FIGS_FARM | Self::HENNA_FARM => BuildingProperties::new(3, false),

            Self::FORT_GROUND | Self::GOVERNORS_VILLA | Self::VILLAGE_PALACE => BuildingProperties::new(4, false),

            Self::HIPPODROME | Self::COLOSSEUM | Self::GOVERNORS_PALACE | Self::SENATE |
            Self::SENATE_UPGRADED | Self::TOWN_PALACE | Self::CITY_PALACE => BuildingProperties::new(5, false),

            _ => BuildingProperties::new(1, false),
        }
    }
}

impl std::fmt::Display for BuildingType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}({})", self.name(), self.0)
    }
}

// ----------------------------------------------
// BuildingProperties
// ----------------------------------------------

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BuildingProperties {
    pub size: u8,
    // Cannot catch fire or collapse.
    pub fire_proof: bool,
}

impl BuildingProperties {
    #[inline]
    pub const fn new(size: u8, fire_proof: bool) -> Self {
        Self { size, fire_proof }
    }
}

// ----------------------------------------------
// WorkshopType
// ----------------------------------------------

// Raw material conversion performed by a workshop. Stored in the building subtype.
#[repr(i16)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Display, EnumCount, EnumIter)]
#[derive(num_enum::IntoPrimitive, num_enum::TryFromPrimitive)]
pub enum WorkshopType {
    #[default]
    None = 0,
    VinesToWine = 1,
    OlivesToOil = 2,
    IronToWeapons = 3,
    TimberToFurniture = 4,
    ClayToPottery = 5,
    ReedsToPapyrus = 6,
}

// ----------------------------------------------
// Floodplain farms
// ----------------------------------------------

// Farms flagged with this labor category sit on the Nile floodplain.
pub const FLOODPLAIN_LABOR_CATEGORY: u8 = 255;

#[inline]
pub fn is_floodplain_farm(ruleset: Ruleset, kind: BuildingType, labor_category: u8) -> bool {
    ruleset == Ruleset::Pharaoh
        && kind.is_farm()
        && labor_category == FLOODPLAIN_LABOR_CATEGORY
}
