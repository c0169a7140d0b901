use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter};

use crate::game::constants::SENTINEL_BUILDING_INDEX;

pub mod codec;
pub mod data;
pub mod desirability;
pub mod hooks;
pub mod kind;
pub mod lifecycle;
pub mod registry;

pub use data::{BuildingData, BuildingDataKind};
pub use kind::{BuildingType, WorkshopType};


// ----------------------------------------------
// BuildingId
// ----------------------------------------------

// Index of a slot in the building registry. Other systems keep these
// instead of references; slots are recycled, so an id must always be
// resolved through the registry again.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BuildingId(u32);

impl BuildingId {
    pub const SENTINEL: Self = Self(SENTINEL_BUILDING_INDEX as u32);

    #[inline]
    pub fn new(index: usize) -> Self {
        debug_assert!(index < u32::MAX as usize);
        Self(index as u32)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn is_sentinel(self) -> bool {
        self.0 as usize == SENTINEL_BUILDING_INDEX
    }

    // Composite part links use non-positive values for "no link".
    #[inline]
    pub fn from_link(link: i32) -> Option<Self> {
        if link > 0 { Some(Self(link as u32)) } else { None }
    }

    #[inline]
    pub const fn as_link(self) -> i32 {
        self.0 as i32
    }
}

impl std::fmt::Display for BuildingId {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// ----------------------------------------------
// BuildingState
// ----------------------------------------------

#[repr(u8)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Display, EnumCount, EnumIter)]
#[derive(num_enum::IntoPrimitive, num_enum::TryFromPrimitive)]
pub enum BuildingState {
    #[default]
    Unused = 0,
    Created = 1,
    Valid = 2,
    Rubble = 3,
    DeletedByGame = 4,
    DeletedByPlayer = 5,
    Mothballed = 6,
    Undo = 7,
}

impl BuildingState {
    // Slot holds a building that other systems can see.
    #[inline]
    pub fn is_live(self) -> bool {
        matches!(self, Self::Valid | Self::Mothballed)
    }

    // Slot is waiting to be reaped by the next lifecycle pass.
    #[inline]
    pub fn is_pending_deletion(self) -> bool {
        matches!(self, Self::Rubble | Self::DeletedByGame | Self::DeletedByPlayer | Self::Undo)
    }
}

// ----------------------------------------------
// Building
// ----------------------------------------------

// One registry slot. The layout mirrors the persisted record field by field
// (see `codec`). `kind` and `data` are kept private so the payload variant
// can never disagree with the building type.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Building {
    pub id: BuildingId,
    pub state: BuildingState,
    pub faction_id: u8,
    pub unknown_value: u8,
    pub size: u8,
    pub house_is_merged: bool,
    pub house_size: u8,
    pub x: u8,
    pub y: u8,
    pub grid_offset: u16,
    kind: BuildingType,
    // House level, workshop type, orientation or market goods, depending on `kind`.
    pub subtype: i16,
    pub road_network_id: u8,
    pub creation_sequence_index: u16,
    pub houses_covered: i16,
    pub percentage_houses_covered: i16,
    pub house_population: i16,
    pub house_population_room: i16,
    pub distance_from_entry: i16,
    pub house_highest_population: i16,
    pub house_unreachable_ticks: i16,
    pub road_access_x: u8,
    pub road_access_y: u8,
    pub figure_id: i16,
    pub figure_id2: i16, // labor seeker or market buyer
    pub immigrant_figure_id: i16,
    pub figure_id4: i16, // tower ballista or burning ruin prefect
    pub figure_spawn_delay: u8,
    pub figure_roam_direction: u8,
    pub has_water_access: bool,
    pub prev_part_building_id: i32,
    pub next_part_building_id: i32,
    pub loads_stored: i16,
    pub has_well_access: bool,
    pub num_workers: i16,
    pub labor_category: u8,
    pub output_resource_id: u8,
    pub has_road_access: bool,
    pub house_criminal_active: u8,
    pub damage_risk: i16,
    pub fire_risk: i16,
    pub fire_duration: i16,
    pub fire_proof: bool,
    pub house_figure_generation_delay: u8,
    pub house_tax_coverage: u8,
    pub formation_id: i16,
    data: BuildingData,
    pub tax_income_or_storage: i32,
    pub house_days_without_food: u8,
    pub ruin_has_plague: bool,
    pub desirability: i8,
    pub is_deleted: bool,
    pub is_adjacent_to_water: bool,
    pub storage_id: u8,
    // House happiness or native anger.
    pub sentiment: i8,
    pub show_on_problem_overlay: bool,
}

impl Building {
    #[inline]
    pub fn unused(id: BuildingId) -> Self {
        Self { id, ..Default::default() }
    }

    // Zeroes every field except the slot id.
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::unused(self.id);
    }

    #[inline]
    pub fn kind(&self) -> BuildingType {
        self.kind
    }

    // Changes the building type. The payload is reset to the empty
    // variant of the new type's category if the category changes.
    pub fn set_kind(&mut self, kind: BuildingType) {
        self.kind = kind;
        let data_kind = BuildingDataKind::for_type(kind);
        if self.data.kind() != data_kind {
            self.data = BuildingData::new(data_kind);
        }
    }

    #[inline]
    pub fn is_unused(&self) -> bool {
        self.state == BuildingState::Unused
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.state == BuildingState::Valid
    }

    #[inline]
    pub fn prev_part(&self) -> Option<BuildingId> {
        BuildingId::from_link(self.prev_part_building_id)
    }

    #[inline]
    pub fn next_part(&self) -> Option<BuildingId> {
        BuildingId::from_link(self.next_part_building_id)
    }

    // ----------------------
    // Subtype views:
    // ----------------------

    #[inline]
    pub fn house_level(&self) -> i16 {
        if self.kind.is_house() { self.subtype } else { 0 }
    }

    #[inline]
    pub fn workshop_type(&self) -> WorkshopType {
        if self.kind.is_workshop() {
            WorkshopType::try_from(self.subtype).unwrap_or_default()
        } else {
            WorkshopType::None
        }
    }

    #[inline]
    pub fn orientation(&self) -> i16 {
        if self.kind.is_orientable_composite() { self.subtype } else { 0 }
    }

    // Bitmask of goods a market refuses (0 accepts everything).
    #[inline]
    pub fn market_goods(&self) -> i16 {
        if self.kind == BuildingType::MARKET { self.subtype } else { 0 }
    }

    // ----------------------
    // Payload access:
    // ----------------------

    #[inline]
    pub fn data(&self) -> &BuildingData {
        &self.data
    }

    #[inline]
    pub fn data_kind(&self) -> BuildingDataKind {
        self.data.kind()
    }

    #[inline]
    pub fn as_dock(&self) -> &data::DockData {
        self.data.as_dock()
    }

    #[inline]
    pub fn as_dock_mut(&mut self) -> &mut data::DockData {
        self.data.as_dock_mut()
    }

    #[inline]
    pub fn as_market(&self) -> &data::MarketData {
        self.data.as_market()
    }

    #[inline]
    pub fn as_market_mut(&mut self) -> &mut data::MarketData {
        self.data.as_market_mut()
    }

    #[inline]
    pub fn as_granary(&self) -> &data::GranaryData {
        self.data.as_granary()
    }

    #[inline]
    pub fn as_granary_mut(&mut self) -> &mut data::GranaryData {
        self.data.as_granary_mut()
    }

    #[inline]
    pub fn as_industry(&self) -> &data::IndustryData {
        self.data.as_industry()
    }

    #[inline]
    pub fn as_industry_mut(&mut self) -> &mut data::IndustryData {
        self.data.as_industry_mut()
    }

    #[inline]
    pub fn as_entertainment(&self) -> &data::EntertainmentData {
        self.data.as_entertainment()
    }

    #[inline]
    pub fn as_entertainment_mut(&mut self) -> &mut data::EntertainmentData {
        self.data.as_entertainment_mut()
    }

    #[inline]
    pub fn as_house(&self) -> &data::HouseData {
        self.data.as_house()
    }

    #[inline]
    pub fn as_house_mut(&mut self) -> &mut data::HouseData {
        self.data.as_house_mut()
    }

    // Only used by the record codec, which decodes kind and payload together.
    #[inline]
    fn set_kind_and_data(&mut self, kind: BuildingType, data: BuildingData) {
        debug_assert_eq!(BuildingDataKind::for_type(kind), data.kind());
        self.kind = kind;
        self.data = data;
    }
}

impl std::fmt::Display for Building {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {} at ({}, {}) [{}]", self.kind, self.id, self.x, self.y, self.state)
    }
}
