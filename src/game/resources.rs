use strum::{Display, EnumCount, EnumIter};

// ----------------------------------------------
// Resource ids
// ----------------------------------------------

// Resource ids are ruleset specific; the same persisted byte names a
// different good in each ruleset. Stored in `Building::output_resource_id`.

#[repr(u8)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Display, EnumCount, EnumIter)]
#[derive(num_enum::IntoPrimitive, num_enum::TryFromPrimitive)]
pub enum CaesarResource {
    #[default]
    None = 0,
    Wheat = 1,
    Vegetables = 2,
    Fruit = 3,
    Olives = 4,
    Vines = 5,
    Meat = 6,
    Wine = 7,
    Oil = 8,
    Iron = 9,
    Timber = 10,
    Clay = 11,
    Marble = 12,
    Weapons = 13,
    Furniture = 14,
    Pottery = 15,
}

#[repr(u8)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Display, EnumCount, EnumIter)]
#[derive(num_enum::IntoPrimitive, num_enum::TryFromPrimitive)]
pub enum PharaohResource {
    #[default]
    None = 0,
    Grain = 1,
    Meat = 2,
    Lettuce = 3,
    Chickpeas = 4,
    Pomegranates = 5,
    Figs = 6,
    Fish = 7,
    Gamemeat = 8,
    Straw = 9,
    Weapons = 10,
    Clay = 11,
    Bricks = 12,
    Pottery = 13,
    Barley = 14,
    Beer = 15,
    Flax = 16,
    Linen = 17,
    Gems = 18,
    LuxuryGoods = 19,
    Timber = 20,
    Gold = 21,
    Reeds = 22,
    Papyrus = 23,
    Stone = 24,
    Limestone = 25,
    Granite = 26,
    Chariots = 28,
    Copper = 29,
    Sandstone = 30,
    Oil = 31,
    Henna = 32,
    Paint = 33,
    Lamps = 34,
    Marble = 35,
}

// Granary inventory slot that holds the remaining free capacity
// instead of a good (index of the "no resource" id).
pub const GRANARY_CAPACITY_SLOT: usize = 0;

// Number of granary inventory slots persisted per building.
pub const GRANARY_SLOTS: usize = 16;
