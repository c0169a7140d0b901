// NOTE: Allow these for the whole crate.
#![allow(clippy::collapsible_if)]

pub mod log;
pub mod engine;
pub mod game;
pub mod save;
pub mod tile;
pub mod utils;

pub use game::{
    Game,
    building::{
        Building,
        BuildingId,
        BuildingState,
        BuildingType,
        hooks::{CityHooks, CityLandmark, MapQuery},
        registry::BuildingRegistry,
    },
    ruleset::Ruleset,
};
