use strum::{Display, EnumCount, EnumDiscriminants, EnumIter};

use super::kind::BuildingType;
use crate::{
    game::resources::GRANARY_SLOTS,
    save::SaveBuffer,
};

// Persisted size of the payload area of a building record.
// Every variant is padded with zeros up to this size.
pub const DATA_SIZE: usize = 64;

// ----------------------------------------------
// Payload structs
// ----------------------------------------------

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DockData {
    pub queued_docker_id: i16,
    pub num_ships: u8,
    pub orientation: i8,
    pub docker_ids: [i16; 3],
    pub trade_ship_id: i16,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MarketData {
    pub inventory: [i16; 8],
    pub pottery_demand: i16,
    pub furniture_demand: i16,
    pub oil_demand: i16,
    pub wine_demand: i16,
    pub fetch_inventory_id: u8,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GranaryData {
    // Slot 0 holds the remaining free capacity.
    pub resource_stored: [i16; GRANARY_SLOTS],
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IndustryData {
    pub progress: i16,
    pub has_fish: bool,
    pub blessing_days_left: u8,
    pub orientation: u8,
    pub has_raw_materials: bool,
    pub curse_days_left: u8,
    pub fishing_boat_id: i16,
    // 0 = no laborers, 1 = present, 2 = just entered.
    pub labor_state: u8,
    pub labor_days_left: u8,
    pub worker_id: u8,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EntertainmentData {
    pub num_shows: u8,
    pub days1: u8,
    pub days2: u8,
    pub days3_or_play: u8,
    pub booth_corner_grid_offset: u16,
    pub ph_unk00: u16,
    pub ph_unk01: u16,
    pub ph_unk02: u16,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HouseData {
    pub foods_ph: [i16; 8],
    pub inventory: [i16; 8],
    // Service coverage:
    pub theater: u8,
    pub amphitheater_actor: u8,
    pub amphitheater_gladiator: u8,
    pub colosseum_gladiator: u8,
    pub magistrate: u8,
    pub hippodrome: u8,
    pub school: u8,
    pub library: u8,
    pub academy: u8,
    pub barber: u8,
    pub clinic: u8,
    pub bathhouse: u8,
    pub hospital: u8,
    pub temple_ceres: u8,
    pub temple_neptune: u8,
    pub temple_mercury: u8,
    pub temple_mars: u8,
    pub temple_venus: u8,
    // Evolution state:
    pub no_space_to_expand: u8,
    pub num_foods: u8,
    pub entertainment: u8,
    pub education: u8,
    pub health: u8,
    pub num_gods: u8,
    pub devolve_delay: u8,
    pub evolve_text_id: u8,
}

// ----------------------------------------------
// Payload codec
// ----------------------------------------------

// Flat field-by-field codec in declaration order.
macro_rules! payload_codec {
    ($name:ident { $($field:ident => $write:ident / $read:ident),+ $(,)? }) => {
        impl $name {
            fn encode(&self, buf: &mut SaveBuffer) {
                $( buf.$write(self.$field); )+
            }

            fn decode(buf: &mut SaveBuffer) -> Result<Self, String> {
                Ok(Self { $( $field: buf.$read()?, )+ })
            }
        }
    };
}

payload_codec!(DockData {
    queued_docker_id => write_i16 / read_i16,
    num_ships        => write_u8 / read_u8,
    orientation      => write_i8 / read_i8,
    docker_ids       => write_i16_array / read_i16_array,
    trade_ship_id    => write_i16 / read_i16,
});

payload_codec!(MarketData {
    inventory          => write_i16_array / read_i16_array,
    pottery_demand     => write_i16 / read_i16,
    furniture_demand   => write_i16 / read_i16,
    oil_demand         => write_i16 / read_i16,
    wine_demand        => write_i16 / read_i16,
    fetch_inventory_id => write_u8 / read_u8,
});

payload_codec!(GranaryData {
    resource_stored => write_i16_array / read_i16_array,
});

payload_codec!(IndustryData {
    progress           => write_i16 / read_i16,
    has_fish           => write_bool / read_bool,
    blessing_days_left => write_u8 / read_u8,
    orientation        => write_u8 / read_u8,
    has_raw_materials  => write_bool / read_bool,
    curse_days_left    => write_u8 / read_u8,
    fishing_boat_id    => write_i16 / read_i16,
    labor_state        => write_u8 / read_u8,
    labor_days_left    => write_u8 / read_u8,
    worker_id          => write_u8 / read_u8,
});

payload_codec!(EntertainmentData {
    num_shows                => write_u8 / read_u8,
    days1                    => write_u8 / read_u8,
    days2                    => write_u8 / read_u8,
    days3_or_play            => write_u8 / read_u8,
    booth_corner_grid_offset => write_u16 / read_u16,
    ph_unk00                 => write_u16 / read_u16,
    ph_unk01                 => write_u16 / read_u16,
    ph_unk02                 => write_u16 / read_u16,
});

payload_codec!(HouseData {
    foods_ph               => write_i16_array / read_i16_array,
    inventory              => write_i16_array / read_i16_array,
    theater                => write_u8 / read_u8,
    amphitheater_actor     => write_u8 / read_u8,
    amphitheater_gladiator => write_u8 / read_u8,
    colosseum_gladiator    => write_u8 / read_u8,
    magistrate             => write_u8 / read_u8,
    hippodrome             => write_u8 / read_u8,
    school                 => write_u8 / read_u8,
    library                => write_u8 / read_u8,
    academy                => write_u8 / read_u8,
    barber                 => write_u8 / read_u8,
    clinic                 => write_u8 / read_u8,
    bathhouse              => write_u8 / read_u8,
    hospital               => write_u8 / read_u8,
    temple_ceres           => write_u8 / read_u8,
    temple_neptune         => write_u8 / read_u8,
    temple_mercury         => write_u8 / read_u8,
    temple_mars            => write_u8 / read_u8,
    temple_venus           => write_u8 / read_u8,
    no_space_to_expand     => write_u8 / read_u8,
    num_foods              => write_u8 / read_u8,
    entertainment          => write_u8 / read_u8,
    education              => write_u8 / read_u8,
    health                 => write_u8 / read_u8,
    num_gods               => write_u8 / read_u8,
    devolve_delay          => write_u8 / read_u8,
    evolve_text_id         => write_u8 / read_u8,
});

// ----------------------------------------------
// BuildingData
// ----------------------------------------------

// Category specific state. The active variant always follows the
// building type (see `BuildingDataKind::for_type`).
#[derive(Clone, Debug, Default, PartialEq, Eq, EnumDiscriminants)]
#[strum_discriminants(name(BuildingDataKind))]
#[strum_discriminants(derive(Display, EnumCount, EnumIter, Hash))]
pub enum BuildingData {
    #[default]
    None,
    Dock(DockData),
    Market(MarketData),
    Granary(GranaryData),
    Industry(IndustryData),
    Entertainment(EntertainmentData),
    House(HouseData),
}

impl BuildingDataKind {
    pub fn for_type(kind: BuildingType) -> Self {
        if kind.is_house() {
            return Self::House;
        }

        if kind.is_farm() || kind.is_workshop() || kind.is_extractor() {
            return Self::Industry;
        }

        match kind {
            BuildingType::DOCK => Self::Dock,
            BuildingType::MARKET => Self::Market,
            BuildingType::GRANARY => Self::Granary,
            BuildingType::WHARF |
            BuildingType::SHIPYARD |
            BuildingType::HUNTING_LODGE => Self::Industry,
            BuildingType::THEATER |
            BuildingType::AMPHITHEATER |
            BuildingType::COLOSSEUM |
            BuildingType::HIPPODROME => Self::Entertainment,
            _ => Self::None,
        }
    }
}

macro_rules! data_accessors {
    ($variant:ident, $ty:ty, $as_ref:ident, $as_mut:ident, $try_ref:ident, $try_mut:ident) => {
        #[inline]
        pub fn $as_ref(&self) -> &$ty {
            match self {
                Self::$variant(state) => state,
                _ => panic!("Building data is not {}!", stringify!($variant)),
            }
        }

        #[inline]
        pub fn $as_mut(&mut self) -> &mut $ty {
            match self {
                Self::$variant(state) => state,
                _ => panic!("Building data is not {}!", stringify!($variant)),
            }
        }

        #[inline]
        pub fn $try_ref(&self) -> Option<&$ty> {
            match self {
                Self::$variant(state) => Some(state),
                _ => None,
            }
        }

        #[inline]
        pub fn $try_mut(&mut self) -> Option<&mut $ty> {
            match self {
                Self::$variant(state) => Some(state),
                _ => None,
            }
        }
    };
}

impl BuildingData {
    // Zeroed payload of the given category.
    pub fn new(kind: BuildingDataKind) -> Self {
        match kind {
            BuildingDataKind::None          => Self::None,
            BuildingDataKind::Dock          => Self::Dock(DockData::default()),
            BuildingDataKind::Market        => Self::Market(MarketData::default()),
            BuildingDataKind::Granary       => Self::Granary(GranaryData::default()),
            BuildingDataKind::Industry      => Self::Industry(IndustryData::default()),
            BuildingDataKind::Entertainment => Self::Entertainment(EntertainmentData::default()),
            BuildingDataKind::House         => Self::House(HouseData::default()),
        }
    }

    #[inline]
    pub fn kind(&self) -> BuildingDataKind {
        BuildingDataKind::from(self)
    }

    data_accessors!(Dock, DockData, as_dock, as_dock_mut, try_as_dock, try_as_dock_mut);
    data_accessors!(Market, MarketData, as_market, as_market_mut, try_as_market, try_as_market_mut);
    data_accessors!(Granary, GranaryData, as_granary, as_granary_mut, try_as_granary, try_as_granary_mut);
    data_accessors!(Industry, IndustryData, as_industry, as_industry_mut, try_as_industry, try_as_industry_mut);
    data_accessors!(Entertainment, EntertainmentData, as_entertainment, as_entertainment_mut, try_as_entertainment, try_as_entertainment_mut);
    data_accessors!(House, HouseData, as_house, as_house_mut, try_as_house, try_as_house_mut);

    // Writes exactly DATA_SIZE bytes.
    pub fn save(&self, buf: &mut SaveBuffer) {
        let mut payload = SaveBuffer::with_capacity(DATA_SIZE);
        match self {
            Self::None => {}
            Self::Dock(state) => state.encode(&mut payload),
            Self::Market(state) => state.encode(&mut payload),
            Self::Granary(state) => state.encode(&mut payload),
            Self::Industry(state) => state.encode(&mut payload),
            Self::Entertainment(state) => state.encode(&mut payload),
            Self::House(state) => state.encode(&mut payload),
        }

        debug_assert!(payload.len() <= DATA_SIZE);
        buf.write_raw(payload.as_bytes());
        buf.write_padding(DATA_SIZE - payload.len());
    }

    // Reads exactly DATA_SIZE bytes, decoding the variant for `kind`.
    pub fn load(kind: BuildingDataKind, buf: &mut SaveBuffer) -> Result<Self, String> {
        let mut payload = SaveBuffer::from_bytes(buf.read_raw(DATA_SIZE)?.to_vec());
        let data = match kind {
            BuildingDataKind::None          => Self::None,
            BuildingDataKind::Dock          => Self::Dock(DockData::decode(&mut payload)?),
            BuildingDataKind::Market        => Self::Market(MarketData::decode(&mut payload)?),
            BuildingDataKind::Granary       => Self::Granary(GranaryData::decode(&mut payload)?),
            BuildingDataKind::Industry      => Self::Industry(IndustryData::decode(&mut payload)?),
            BuildingDataKind::Entertainment => Self::Entertainment(EntertainmentData::decode(&mut payload)?),
            BuildingDataKind::House         => Self::House(HouseData::decode(&mut payload)?),
        };
        Ok(data)
    }
}
