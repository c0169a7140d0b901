use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter};

use super::{
    building::kind::{BuildingType, WorkshopType},
    resources::{CaesarResource, PharaohResource},
};

// ----------------------------------------------
// Ruleset
// ----------------------------------------------

// Game variant. Selects registry capacity, the production table
// and a few creation defaults. Persisted as a single byte.
#[repr(u8)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Display, EnumCount, EnumIter, Serialize, Deserialize)]
#[derive(num_enum::IntoPrimitive, num_enum::TryFromPrimitive)]
pub enum Ruleset {
    #[default]
    Caesar3 = 0,
    Pharaoh = 1,
}

// What a building type produces under a given ruleset.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Production {
    pub output_resource_id: u8,
    pub workshop: WorkshopType,
}

impl Production {
    const NONE: Self = Self { output_resource_id: 0, workshop: WorkshopType::None };

    #[inline]
    const fn raw(resource: u8) -> Self {
        Self { output_resource_id: resource, workshop: WorkshopType::None }
    }

    #[inline]
    const fn workshop(resource: u8, workshop: WorkshopType) -> Self {
        Self { output_resource_id: resource, workshop }
    }
}

impl Ruleset {
    // Number of building slots, sentinel slot 0 included.
    #[inline]
    pub const fn max_buildings(self) -> usize {
        match self {
            Self::Caesar3 => 2000,
            Self::Pharaoh => 4000,
        }
    }

    // Initial value of the granary capacity slot.
    #[inline]
    pub const fn granary_capacity(self) -> i16 {
        match self {
            Self::Caesar3 => 2400,
            Self::Pharaoh => 3200,
        }
    }

    pub fn production(self, kind: BuildingType) -> Production {
        match self {
            Self::Caesar3 => caesar_production(kind),
            Self::Pharaoh => pharaoh_production(kind),
        }
    }
}

fn caesar_production(kind: BuildingType) -> Production {
    use CaesarResource as R;
    let r = |resource: R| u8::from(resource);

    match kind {
        BuildingType::WHEAT_FARM         => Production::raw(r(R::Wheat)),
        BuildingType::VEGETABLE_FARM     => Production::raw(r(R::Vegetables)),
        BuildingType::FRUIT_FARM         => Production::raw(r(R::Fruit)),
        BuildingType::OLIVE_FARM         => Production::raw(r(R::Olives)),
        BuildingType::VINES_FARM         => Production::raw(r(R::Vines)),
        BuildingType::PIG_FARM           => Production::raw(r(R::Meat)),
        BuildingType::MARBLE_QUARRY      => Production::raw(r(R::Marble)),
        BuildingType::IRON_MINE          => Production::raw(r(R::Iron)),
        BuildingType::TIMBER_YARD        => Production::raw(r(R::Timber)),
        BuildingType::CLAY_PIT           => Production::raw(r(R::Clay)),
        BuildingType::WINE_WORKSHOP      => Production::workshop(r(R::Wine), WorkshopType::VinesToWine),
        BuildingType::OIL_WORKSHOP       => Production::workshop(r(R::Oil), WorkshopType::OlivesToOil),
        BuildingType::WEAPONS_WORKSHOP   => Production::workshop(r(R::Weapons), WorkshopType::IronToWeapons),
        BuildingType::FURNITURE_WORKSHOP => Production::workshop(r(R::Furniture), WorkshopType::TimberToFurniture),
        BuildingType::POTTERY_WORKSHOP   => Production::workshop(r(R::Pottery), WorkshopType::ClayToPottery),
        _ => Production::NONE,
    }
}

fn pharaoh_production(kind: BuildingType) -> Production {
    use PharaohResource as R;
    let r = |resource: R| u8::from(resource);

    // Workshops without a matching conversion keep WorkshopType::None.
    match kind {
        BuildingType::BARLEY_FARM        => Production::raw(r(R::Barley)),
        BuildingType::FLAX_FARM          => Production::raw(r(R::Flax)),
        BuildingType::GRAIN_FARM         => Production::raw(r(R::Grain)),
        BuildingType::LETTUCE_FARM       => Production::raw(r(R::Lettuce)),
        BuildingType::POMEGRANATES_FARM  => Production::raw(r(R::Pomegranates)),
        BuildingType::CHICKPEAS_FARM     => Production::raw(r(R::Chickpeas)),
        BuildingType::STONE_QUARRY       => Production::raw(r(R::Stone)),
        BuildingType::LIMESTONE_QUARRY   => Production::raw(r(R::Limestone)),
        BuildingType::TIMBER_YARD        => Production::raw(r(R::Timber)),
        BuildingType::CLAY_PIT           => Production::raw(r(R::Clay)),
        BuildingType::BEER_WORKSHOP      => Production::workshop(r(R::Beer), WorkshopType::VinesToWine),
        BuildingType::LINEN_WORKSHOP     => Production::workshop(r(R::Linen), WorkshopType::OlivesToOil),
        BuildingType::WEAPONS_WORKSHOP   => Production::workshop(r(R::Weapons), WorkshopType::IronToWeapons),
        BuildingType::JEWELS_WORKSHOP    => Production::workshop(r(R::LuxuryGoods), WorkshopType::TimberToFurniture),
        BuildingType::POTTERY_WORKSHOP   => Production::workshop(r(R::Pottery), WorkshopType::ClayToPottery),
        BuildingType::HUNTING_LODGE      => Production::raw(r(R::Gamemeat)),
        BuildingType::REED_GATHERER      => Production::raw(r(R::Reeds)),
        BuildingType::GOLD_MINE          => Production::raw(r(R::Gold)),
        BuildingType::GEMSTONE_MINE      => Production::raw(r(R::Gems)),
        BuildingType::CATTLE_RANCH       => Production::raw(r(R::Meat)),
        BuildingType::FIGS_FARM          => Production::raw(r(R::Figs)),
        BuildingType::PAPYRUS_WORKSHOP   => Production::workshop(r(R::Papyrus), WorkshopType::ReedsToPapyrus),
        BuildingType::BRICKS_WORKSHOP    => Production::raw(r(R::Bricks)),
        BuildingType::CHARIOTS_WORKSHOP  => Production::raw(r(R::Chariots)),
        BuildingType::GRANITE_QUARRY     => Production::raw(r(R::Granite)),
        BuildingType::COPPER_MINE        => Production::raw(r(R::Copper)),
        BuildingType::SANDSTONE_QUARRY   => Production::raw(r(R::Sandstone)),
        BuildingType::HENNA_FARM         => Production::raw(r(R::Henna)),
        BuildingType::LAMP_WORKSHOP      => Production::raw(r(R::Lamps)),
        BuildingType::PAINT_WORKSHOP     => Production::raw(r(R::Paint)),
        _ => Production::NONE,
    }
}
