use super::{
    Building,
    BuildingId,
    BuildingState,
    BuildingType,
    hooks::CityHooks,
    registry::BuildingRegistry,
};
use crate::{
    bitflags_with_display,
    log,
};

// ----------------------------------------------
// MapRecalc
// ----------------------------------------------

bitflags_with_display! {
    // Global map passes requested by deletions during one lifecycle pass.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
    pub struct MapRecalc: u8 {
        const Walls     = 1 << 0;
        const Aqueducts = 1 << 1;
        const Land      = 1 << 2;
        const Roads     = 1 << 3;
    }
}

impl MapRecalc {
    // Runs each requested pass once, in dependency order.
    pub fn run<H>(self, hooks: &mut H)
        where H: CityHooks
    {
        if self.is_empty() {
            return;
        }

        log::verbose!(log::channel!("building"), "Map recalculation: {self}");

        if self.intersects(Self::Walls) {
            hooks.update_all_walls();
        }
        if self.intersects(Self::Aqueducts) {
            hooks.update_all_aqueducts();
        }
        if self.intersects(Self::Land) {
            hooks.update_land_routing();
        }
        if self.intersects(Self::Roads) {
            hooks.update_all_roads();
        }
    }

    // Passes needed after the player (or an undo) removes a building of `kind`.
    fn for_removed(kind: BuildingType) -> Self {
        let mut recalc = Self::Roads | Self::Land;
        if kind.is_wall_junction() {
            recalc |= Self::Walls;
        } else if kind == BuildingType::RESERVOIR {
            recalc |= Self::Aqueducts;
        }
        recalc
    }
}

// ----------------------------------------------
// Lifecycle
// ----------------------------------------------

impl BuildingRegistry {
    // Per tick lifecycle pass: promotes CREATED buildings to VALID and reaps
    // every slot pending deletion. Map recalculations triggered by the
    // deletions are batched and run once after the scan.
    pub fn update_state<H>(&mut self, hooks: &mut H)
        where H: CityHooks
    {
        let mut recalc = MapRecalc::empty();

        for building in self.buildings_mut().iter_mut().skip(1) {
            if building.state == BuildingState::Created {
                building.state = BuildingState::Valid;
            }

            if building.state == BuildingState::Valid && building.house_size != 0 {
                continue;
            }

            match building.state {
                BuildingState::Undo | BuildingState::DeletedByPlayer => {
                    recalc |= MapRecalc::for_removed(building.kind());
                    hooks.remove_building_tiles(building.id, building.x as i32, building.y as i32);
                    delete(building, hooks);
                }
                BuildingState::Rubble => {
                    if building.house_size != 0 {
                        hooks.release_home_population(building.house_population as i32);
                    }
                    delete(building, hooks);
                }
                BuildingState::DeletedByGame => {
                    delete(building, hooks);
                }
                _ => {}
            }
        }

        recalc.run(hooks);
    }

    // Releases city-level resources owned by the building without touching the record.
    pub fn clear_related_data<H>(&self, id: BuildingId, hooks: &mut H)
        where H: CityHooks
    {
        clear_related_data(self.get(id), hooks);
    }

    // Releases owned resources and zeroes the slot, keeping its id.
    pub fn delete<H>(&mut self, id: BuildingId, hooks: &mut H)
        where H: CityHooks
    {
        assert!(!id.is_sentinel(), "Cannot delete the sentinel building slot!");
        delete(self.get_mut(id), hooks);
    }

    // ----------------------
    // Mothballing:
    // ----------------------

    // VALID <-> MOTHBALLED. Any other state is left alone.
    pub fn mothball_toggle(&mut self, id: BuildingId) -> BuildingState {
        let building = self.get_mut(id);
        match building.state {
            BuildingState::Valid => enter_mothball(building),
            BuildingState::Mothballed => building.state = BuildingState::Valid,
            _ => {}
        }
        building.state
    }

    pub fn mothball_set(&mut self, id: BuildingId, mothball: bool) -> BuildingState {
        let building = self.get_mut(id);
        if mothball {
            if building.state == BuildingState::Valid {
                enter_mothball(building);
            }
        } else if building.state == BuildingState::Mothballed {
            building.state = BuildingState::Valid;
        }
        building.state
    }
}

#[inline]
fn enter_mothball(building: &mut Building) {
    building.state = BuildingState::Mothballed;
    building.num_workers = 0;
}

fn delete<H>(building: &mut Building, hooks: &mut H)
    where H: CityHooks
{
    log::verbose!(log::channel!("building"), "Deleting {building}.");
    clear_related_data(building, hooks);
    building.reset();
}

fn clear_related_data<H>(building: &Building, hooks: &mut H)
    where H: CityHooks
{
    if building.storage_id != 0 {
        hooks.delete_storage(building.storage_id);
    }

    let kind = building.kind();

    if let Some(landmark) = kind.landmark() {
        hooks.unregister_landmark(landmark, building.id);
        if kind == BuildingType::TRIUMPHAL_ARCH {
            hooks.refresh_build_menu();
        }
    }

    if kind == BuildingType::FORT {
        hooks.delete_fort_legion(building.id);
    }
}
