use std::{iter, slice};
use smallvec::SmallVec;

use super::{
    Building,
    BuildingDataKind,
    BuildingId,
    BuildingState,
    BuildingType,
    WorkshopType,
    hooks::{CityHooks, MapQuery},
};
use crate::{
    log,
    game::{constants::*, resources::GRANARY_CAPACITY_SLOT, ruleset::Ruleset},
};

// Parts of a composite building, head first.
pub type CompositeParts = SmallVec<[BuildingId; 8]>;

// ----------------------------------------------
// BuildingIter / BuildingIterMut
// ----------------------------------------------

pub struct BuildingIter<'a> {
    buildings: iter::Skip<slice::Iter<'a, Building>>,
}

pub struct BuildingIterMut<'a> {
    buildings: iter::Skip<slice::IterMut<'a, Building>>,
}

impl<'a> Iterator for BuildingIter<'a> {
    type Item = &'a Building;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        // Yields only occupied slots.
        self.buildings.by_ref().find(|building| !building.is_unused())
    }
}

impl iter::FusedIterator for BuildingIter<'_> {}

impl<'a> Iterator for BuildingIterMut<'a> {
    type Item = &'a mut Building;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        // Yields only occupied slots.
        self.buildings.by_ref().find(|building| !building.is_unused())
    }
}

impl iter::FusedIterator for BuildingIterMut<'_> {}

// ----------------------------------------------
// BuildingRegistry
// ----------------------------------------------

// Fixed capacity store of every building in the city. Slot 0 is the
// sentinel "no building" and is never handed out.
pub struct BuildingRegistry {
    ruleset: Ruleset,
    buildings: Vec<Building>,
    pub(super) highest_id_in_use: i32,
    pub(super) highest_id_ever: i32,
    // Not persisted; restarts at 0 after a load.
    pub(super) created_sequence: u16,
}

impl BuildingRegistry {
    pub fn new(ruleset: Ruleset) -> Self {
        let capacity = ruleset.max_buildings();
        Self {
            ruleset,
            buildings: (0..capacity).map(|index| Building::unused(BuildingId::new(index))).collect(),
            highest_id_in_use: 0,
            highest_id_ever: 0,
            created_sequence: 0,
        }
    }

    #[inline]
    pub fn ruleset(&self) -> Ruleset {
        self.ruleset
    }

    // Total number of slots, sentinel included.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buildings.len()
    }

    #[inline]
    pub fn created_sequence(&self) -> u16 {
        self.created_sequence
    }

    // Resets every slot to UNUSED (keeping slot ids) and all counters.
    pub fn clear_all(&mut self) {
        for building in &mut self.buildings {
            building.reset();
        }
        self.highest_id_in_use = 0;
        self.highest_id_ever = 0;
        self.created_sequence = 0;
    }

    // ----------------------
    // Lookup:
    // ----------------------

    // First VALID building of the given type. `None` stands in for the
    // sentinel slot 0 when no such building exists.
    pub fn find(&self, kind: BuildingType) -> Option<BuildingId> {
        self.buildings.iter()
            .skip(1)
            .find(|building| building.is_valid() && building.kind() == kind)
            .map(|building| building.id)
    }

    // Out of range ids are a caller bug and panic.
    #[inline]
    pub fn get(&self, id: BuildingId) -> &Building {
        &self.buildings[id.index()]
    }

    #[inline]
    pub fn get_mut(&mut self, id: BuildingId) -> &mut Building {
        &mut self.buildings[id.index()]
    }

    #[inline]
    pub fn try_get(&self, id: BuildingId) -> Option<&Building> {
        if id.is_sentinel() {
            return None;
        }
        self.buildings.get(id.index()).filter(|building| !building.is_unused())
    }

    #[inline]
    pub fn sentinel(&self) -> &Building {
        &self.buildings[SENTINEL_BUILDING_INDEX]
    }

    #[inline]
    pub fn iter(&self) -> BuildingIter<'_> {
        BuildingIter { buildings: self.buildings.iter().skip(1) }
    }

    #[inline]
    pub fn iter_mut(&mut self) -> BuildingIterMut<'_> {
        BuildingIterMut { buildings: self.buildings.iter_mut().skip(1) }
    }

    // ----------------------
    // Composite linkage:
    // ----------------------

    // Head part of the composite `id` belongs to. Falls back to the sentinel
    // if the chain does not end within MAX_COMPOSITE_HOPS or a link points
    // past the last slot (corrupted links).
    pub fn main(&self, id: BuildingId) -> BuildingId {
        let mut current = id;
        for _ in 0..MAX_COMPOSITE_HOPS {
            match self.get(current).prev_part() {
                Some(prev) if self.is_in_range(prev) => current = prev,
                Some(_) => return BuildingId::SENTINEL,
                None => return current,
            }
        }
        BuildingId::SENTINEL
    }

    // Next part in the chain, or the sentinel at the end.
    #[inline]
    pub fn next(&self, id: BuildingId) -> BuildingId {
        self.next_in_range(id).unwrap_or(BuildingId::SENTINEL)
    }

    // All parts from the head along `next` links.
    pub fn parts(&self, id: BuildingId) -> CompositeParts {
        let mut parts = CompositeParts::new();
        let head = self.main(id);
        if head.is_sentinel() {
            return parts;
        }

        let mut current = Some(head);
        while let Some(part) = current {
            if parts.len() > MAX_COMPOSITE_HOPS {
                break;
            }
            parts.push(part);
            current = self.next_in_range(part);
        }
        parts
    }

    #[inline]
    fn is_in_range(&self, id: BuildingId) -> bool {
        id.index() < self.capacity()
    }

    #[inline]
    fn next_in_range(&self, id: BuildingId) -> Option<BuildingId> {
        self.get(id).next_part().filter(|&next| self.is_in_range(next))
    }

    // Part used to anchor overlays: the one with the smallest x or y seen
    // while walking the composite from its head.
    pub fn top_xy(&self, id: BuildingId) -> BuildingId {
        let parts = self.parts(id);
        let Some((&head, rest)) = parts.split_first() else {
            return BuildingId::SENTINEL;
        };

        let mut top = head;
        let mut min_x = self.get(head).x;
        let mut min_y = self.get(head).y;

        for &part in rest {
            let building = self.get(part);
            if building.x < min_x || building.y < min_y {
                top = part;
            }
            min_x = min_x.min(building.x);
            min_y = min_y.min(building.y);
        }
        top
    }

    // ----------------------
    // Allocation:
    // ----------------------

    // Claims the first UNUSED slot not held by an undo snapshot and initializes
    // it for `kind`. When the registry is full the user is warned and `None`
    // is returned in place of the sentinel slot 0, which is never written.
    pub fn create<M, H>(&mut self, kind: BuildingType, x: u8, y: u8, map: &M, hooks: &mut H) -> Option<&mut Building>
        where M: MapQuery,
              H: CityHooks
    {
        let free_index = (1..self.capacity()).find(|&index| {
            self.buildings[index].is_unused() && !hooks.is_reserved_by_undo(BuildingId::new(index))
        });

        let Some(index) = free_index else {
            log::warn!(log::channel!("building"), "Data limit reached: cannot create {kind}, all {} slots in use.",
                       self.capacity() - 1);
            hooks.show_data_limit_warning();
            return None;
        };

        let sequence = self.created_sequence;
        self.created_sequence = self.created_sequence.wrapping_add(1);

        let ruleset = self.ruleset;
        let building = &mut self.buildings[index];
        building.reset();
        init_building(building, ruleset, kind, x, y, sequence, map, hooks);

        log::verbose!(log::channel!("building"), "Created {building}.");
        Some(building)
    }

    // ----------------------
    // Counters:
    // ----------------------

    #[inline]
    pub fn highest_id(&self) -> i32 {
        self.highest_id_in_use
    }

    #[inline]
    pub fn highest_id_ever(&self) -> i32 {
        self.highest_id_ever
    }

    pub fn update_highest_id(&mut self) {
        self.highest_id_in_use = self.buildings.iter()
            .skip(1)
            .rposition(|building| !building.is_unused())
            .map_or(0, |position| (position + 1) as i32);

        if self.highest_id_in_use > self.highest_id_ever {
            self.highest_id_ever = self.highest_id_in_use;
        }
    }

    #[inline]
    pub(super) fn buildings_mut(&mut self) -> &mut [Building] {
        &mut self.buildings
    }
}

// Type specific defaults for a freshly claimed slot.
#[allow(clippy::too_many_arguments)]
fn init_building<M, H>(building: &mut Building,
                       ruleset: Ruleset,
                       kind: BuildingType,
                       x: u8,
                       y: u8,
                       sequence: u16,
                       map: &M,
                       hooks: &H)
    where M: MapQuery,
          H: CityHooks
{
    let props = kind.properties();

    building.state = BuildingState::Created;
    building.faction_id = PLAYER_FACTION_ID;
    building.unknown_value = hooks.unknown_value();
    building.set_kind(kind);
    building.size = props.size;
    building.creation_sequence_index = sequence;
    building.sentiment = INITIAL_HOUSE_HAPPINESS;
    building.distance_from_entry = 0;

    building.house_size = kind.house_size();
    building.subtype = kind.house_level();

    let production = ruleset.production(kind);
    building.output_resource_id = production.output_resource_id;
    if production.workshop != WorkshopType::None {
        building.subtype = production.workshop.into();
    }

    match building.data_kind() {
        BuildingDataKind::Granary => {
            building.as_granary_mut().resource_stored[GRANARY_CAPACITY_SLOT] = ruleset.granary_capacity();
        }
        BuildingDataKind::Market => {
            // Accepts all goods.
            building.subtype = 0;
        }
        _ => {}
    }

    if kind.is_orientable_composite() {
        building.subtype = hooks.placement_rotation();
    }

    building.x = x;
    building.y = y;
    building.grid_offset = map.grid_offset(x as i32, y as i32);
    building.house_figure_generation_delay = map.random_at(building.grid_offset) & FIGURE_DELAY_MASK;
    building.figure_roam_direction = building.house_figure_generation_delay & ROAM_DIRECTION_MASK;
    building.fire_proof = props.fire_proof;
    building.is_adjacent_to_water = map.is_adjacent_to_water(x as i32, y as i32, props.size as i32);
}
