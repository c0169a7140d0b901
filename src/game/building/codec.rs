use super::{
    Building,
    BuildingData,
    BuildingDataKind,
    BuildingId,
    BuildingState,
    BuildingType,
    data::DATA_SIZE,
    registry::BuildingRegistry,
};
use crate::{
    log,
    save::{Save, Load, SaveBuffer, SaveResult, LoadResult},
};

// Persisted size of one building record: fixed header, payload, tail.
pub const HEADER_SIZE: usize = 76;
pub const TAIL_SIZE: usize = 12;
pub const RECORD_SIZE: usize = HEADER_SIZE + DATA_SIZE + TAIL_SIZE;

// Reserved bytes written after the highest id ever counter.
const HIGHEST_ID_EVER_PADDING: usize = 4;

// ----------------------------------------------
// Building record
// ----------------------------------------------

impl Save for Building {
    fn save(&self, buf: &mut SaveBuffer) -> SaveResult {
        let start = buf.len();

        buf.write_i32(self.id.as_link());
        buf.write_u8(self.state.into());
        buf.write_u8(self.faction_id);
        buf.write_u8(self.unknown_value);
        buf.write_u8(self.size);
        buf.write_bool(self.house_is_merged);
        buf.write_u8(self.house_size);
        buf.write_u8(self.x);
        buf.write_u8(self.y);
        buf.write_u16(self.grid_offset);
        buf.write_i16(self.kind.raw() as i16);
        buf.write_i16(self.subtype);
        buf.write_u8(self.road_network_id);
        buf.write_u16(self.creation_sequence_index);
        buf.write_i16(self.houses_covered);
        buf.write_i16(self.percentage_houses_covered);
        buf.write_i16(self.house_population);
        buf.write_i16(self.house_population_room);
        buf.write_i16(self.distance_from_entry);
        buf.write_i16(self.house_highest_population);
        buf.write_i16(self.house_unreachable_ticks);
        buf.write_u8(self.road_access_x);
        buf.write_u8(self.road_access_y);
        buf.write_i16(self.figure_id);
        buf.write_i16(self.figure_id2);
        buf.write_i16(self.immigrant_figure_id);
        buf.write_i16(self.figure_id4);
        buf.write_u8(self.figure_spawn_delay);
        buf.write_u8(self.figure_roam_direction);
        buf.write_bool(self.has_water_access);
        buf.write_i32(self.prev_part_building_id);
        buf.write_i32(self.next_part_building_id);
        buf.write_i16(self.loads_stored);
        buf.write_bool(self.has_well_access);
        buf.write_i16(self.num_workers);
        buf.write_u8(self.labor_category);
        buf.write_u8(self.output_resource_id);
        buf.write_bool(self.has_road_access);
        buf.write_u8(self.house_criminal_active);
        buf.write_i16(self.damage_risk);
        buf.write_i16(self.fire_risk);
        buf.write_i16(self.fire_duration);
        buf.write_bool(self.fire_proof);
        buf.write_u8(self.house_figure_generation_delay);
        buf.write_u8(self.house_tax_coverage);
        buf.write_i16(self.formation_id);

        self.data.save(buf);

        buf.write_i32(self.tax_income_or_storage);
        buf.write_u8(self.house_days_without_food);
        buf.write_bool(self.ruin_has_plague);
        buf.write_i8(self.desirability);
        buf.write_bool(self.is_deleted);
        buf.write_bool(self.is_adjacent_to_water);
        buf.write_u8(self.storage_id);
        buf.write_i8(self.sentiment);
        buf.write_bool(self.show_on_problem_overlay);

        debug_assert_eq!(buf.len() - start, RECORD_SIZE);
        Ok(())
    }
}

impl Load for Building {
    // The persisted id is read but not trusted; the registry re-stamps it.
    fn load(&mut self, buf: &mut SaveBuffer) -> LoadResult {
        let _persisted_id = buf.read_i32()?;

        let state = buf.read_u8()?;
        self.state = BuildingState::try_from(state)
            .map_err(|_| format!("Invalid building state {state} in slot {}", self.id))?;

        self.faction_id = buf.read_u8()?;
        self.unknown_value = buf.read_u8()?;
        self.size = buf.read_u8()?;
        self.house_is_merged = buf.read_bool()?;
        self.house_size = buf.read_u8()?;
        self.x = buf.read_u8()?;
        self.y = buf.read_u8()?;
        self.grid_offset = buf.read_u16()?;

        let raw_kind = buf.read_i16()?;
        let kind = u16::try_from(raw_kind)
            .map(BuildingType)
            .ok()
            .filter(|kind| kind.is_known())
            .ok_or_else(|| format!("Invalid building type {raw_kind} in slot {}", self.id))?;

        self.subtype = buf.read_i16()?;
        self.road_network_id = buf.read_u8()?;
        self.creation_sequence_index = buf.read_u16()?;
        self.houses_covered = buf.read_i16()?;
        self.percentage_houses_covered = buf.read_i16()?;
        self.house_population = buf.read_i16()?;
        self.house_population_room = buf.read_i16()?;
        self.distance_from_entry = buf.read_i16()?;
        self.house_highest_population = buf.read_i16()?;
        self.house_unreachable_ticks = buf.read_i16()?;
        self.road_access_x = buf.read_u8()?;
        self.road_access_y = buf.read_u8()?;
        self.figure_id = buf.read_i16()?;
        self.figure_id2 = buf.read_i16()?;
        self.immigrant_figure_id = buf.read_i16()?;
        self.figure_id4 = buf.read_i16()?;
        self.figure_spawn_delay = buf.read_u8()?;
        self.figure_roam_direction = buf.read_u8()?;
        self.has_water_access = buf.read_bool()?;
        self.prev_part_building_id = buf.read_i32()?;
        self.next_part_building_id = buf.read_i32()?;
        self.loads_stored = buf.read_i16()?;
        self.has_well_access = buf.read_bool()?;
        self.num_workers = buf.read_i16()?;
        self.labor_category = buf.read_u8()?;
        self.output_resource_id = buf.read_u8()?;
        self.has_road_access = buf.read_bool()?;
        self.house_criminal_active = buf.read_u8()?;
        self.damage_risk = buf.read_i16()?;
        self.fire_risk = buf.read_i16()?;
        self.fire_duration = buf.read_i16()?;
        self.fire_proof = buf.read_bool()?;
        self.house_figure_generation_delay = buf.read_u8()?;
        self.house_tax_coverage = buf.read_u8()?;
        self.formation_id = buf.read_i16()?;

        let data = BuildingData::load(BuildingDataKind::for_type(kind), buf)?;
        self.set_kind_and_data(kind, data);

        self.tax_income_or_storage = buf.read_i32()?;
        self.house_days_without_food = buf.read_u8()?;
        self.ruin_has_plague = buf.read_bool()?;
        self.desirability = buf.read_i8()?;
        self.is_deleted = buf.read_bool()?;
        self.is_adjacent_to_water = buf.read_bool()?;
        self.storage_id = buf.read_u8()?;
        self.sentiment = buf.read_i8()?;
        self.show_on_problem_overlay = buf.read_bool()?;

        Ok(())
    }
}

// ----------------------------------------------
// Registry state
// ----------------------------------------------

impl BuildingRegistry {
    // Writes every slot (UNUSED ones included) in index order to `buf`, and
    // the two id counters to their own buffers.
    pub fn save_state(&self,
                      buf: &mut SaveBuffer,
                      highest_id: &mut SaveBuffer,
                      highest_id_ever: &mut SaveBuffer) -> SaveResult {
        for index in 0..self.capacity() {
            self.get(BuildingId::new(index)).save(buf)?;
        }

        highest_id.write_i32(self.highest_id_in_use);
        highest_id_ever.write_i32(self.highest_id_ever);
        highest_id_ever.write_padding(HIGHEST_ID_EVER_PADDING);
        Ok(())
    }

    // Mirrors `save_state`. Stops at the end of `buf` if it holds fewer
    // records than there are slots; the remaining slots are left as they
    // were. Slot ids are re-stamped from their position and the creation
    // sequence restarts at 0.
    pub fn load_state(&mut self,
                      buf: &mut SaveBuffer,
                      highest_id: &mut SaveBuffer,
                      highest_id_ever: &mut SaveBuffer) -> LoadResult {
        let capacity = self.capacity();
        let mut loaded = 0;

        for (index, building) in self.buildings_mut().iter_mut().enumerate() {
            if buf.remaining() == 0 {
                break;
            }
            if !buf.is_valid(RECORD_SIZE) {
                log::warn!(log::channel!("save"), "Discarding partial building record at slot {index} ({} bytes).",
                           buf.remaining());
                break;
            }

            building.load(buf)?;
            building.id = BuildingId::new(index);

            for link in [building.prev_part_building_id, building.next_part_building_id] {
                if link > 0 && link as usize >= capacity {
                    return Err(format!("Invalid part link {link} in building slot {index} (capacity {capacity})"));
                }
            }
            loaded += 1;
        }

        if loaded < capacity {
            log::warn!(log::channel!("save"), "Loaded {loaded} of {capacity} building slots; save data is truncated.");
        }

        self.highest_id_in_use = read_counter(highest_id, "highest id");
        self.highest_id_ever = read_counter(highest_id_ever, "highest id ever");
        if highest_id_ever.is_valid(HIGHEST_ID_EVER_PADDING) {
            highest_id_ever.skip(HIGHEST_ID_EVER_PADDING)?;
        }
        self.created_sequence = 0;
        Ok(())
    }
}

// Missing or short counter chunks read as 0.
fn read_counter(buf: &mut SaveBuffer, name: &str) -> i32 {
    match buf.read_i32() {
        Ok(value) => value,
        Err(err) => {
            log::warn!(log::channel!("save"), "Missing {name} counter ({err}); defaulting to 0.");
            0
        }
    }
}
