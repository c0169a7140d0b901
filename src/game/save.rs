use std::path::Path;

use crate::{
    log,
    save::{Save, Load, SaveBuffer, SaveResult, LoadResult},
    tile::elevation::ElevationGrid,
};

use super::{
    building::registry::BuildingRegistry,
    constants::{SAVE_FILE_MAGIC, SAVE_FILE_VERSION},
    ruleset::Ruleset,
    time::GameTime,
};

// ----------------------------------------------
// SaveGame
// ----------------------------------------------

// Binary save game layout:
//  magic "CSAV", version (u32), ruleset (u8), then u32 length-prefixed chunks:
//  game time, elevation, building records, highest id, highest id ever.
pub struct SaveGame<'a> {
    pub ruleset: Ruleset,
    pub time: &'a GameTime,
    pub elevation: &'a ElevationGrid,
    pub buildings: &'a BuildingRegistry,
}

// Mutable targets for a save game being loaded.
pub struct SaveGameMut<'a> {
    pub ruleset: Ruleset,
    pub time: &'a mut GameTime,
    pub elevation: &'a mut ElevationGrid,
    pub buildings: &'a mut BuildingRegistry,
}

impl SaveGame<'_> {
    pub fn encode(&self) -> Result<SaveBuffer, String> {
        let mut file = SaveBuffer::new();
        file.write_raw(&SAVE_FILE_MAGIC);
        file.write_u32(SAVE_FILE_VERSION);
        file.write_u8(self.ruleset.into());

        let mut time = SaveBuffer::new();
        self.time.save(&mut time)?;

        let mut elevation = SaveBuffer::new();
        self.elevation.save(&mut elevation)?;

        let mut buildings = SaveBuffer::new();
        let mut highest_id = SaveBuffer::new();
        let mut highest_id_ever = SaveBuffer::new();
        self.buildings.save_state(&mut buildings, &mut highest_id, &mut highest_id_ever)?;

        for chunk in [&time, &elevation, &buildings, &highest_id, &highest_id_ever] {
            file.write_chunk(chunk);
        }
        Ok(file)
    }

    pub fn write_file(&self, path: &Path) -> SaveResult {
        let file = self.encode()?;
        std::fs::write(path, file.as_bytes())
            .map_err(|err| format!("Failed to write save file {path:?}: {err}"))?;

        log::info!(log::channel!("save"), "Saved game to {path:?} ({} bytes).", file.len());
        Ok(())
    }
}

impl SaveGameMut<'_> {
    pub fn decode(&mut self, file: &mut SaveBuffer) -> LoadResult {
        let magic = file.read_raw(SAVE_FILE_MAGIC.len())?;
        if magic != SAVE_FILE_MAGIC {
            return Err("Not a save game file (bad magic).".into());
        }

        let version = file.read_u32()?;
        if version != SAVE_FILE_VERSION {
            return Err(format!("Unsupported save game version {version}, expected {SAVE_FILE_VERSION}."));
        }

        let ruleset_byte = file.read_u8()?;
        let ruleset = Ruleset::try_from(ruleset_byte)
            .map_err(|_| format!("Unknown ruleset {ruleset_byte} in save game."))?;
        if ruleset != self.ruleset {
            return Err(format!("Save game ruleset {ruleset} does not match current ruleset {}.", self.ruleset));
        }

        let mut time = file.read_chunk()?;
        let mut elevation = file.read_chunk()?;
        let mut buildings = file.read_chunk()?;
        // Counter chunks may be missing from the end of the file.
        let mut highest_id = read_trailing_chunk(file)?;
        let mut highest_id_ever = read_trailing_chunk(file)?;

        self.time.load(&mut time)?;
        self.elevation.load(&mut elevation)?;
        self.buildings.load_state(&mut buildings, &mut highest_id, &mut highest_id_ever)?;
        Ok(())
    }

    pub fn read_file(&mut self, path: &Path) -> LoadResult {
        let bytes = std::fs::read(path)
            .map_err(|err| format!("Failed to read save file {path:?}: {err}"))?;

        self.decode(&mut SaveBuffer::from_bytes(bytes))?;

        log::info!(log::channel!("save"), "Loaded game from {path:?}.");
        Ok(())
    }
}

#[inline]
fn read_trailing_chunk(file: &mut SaveBuffer) -> Result<SaveBuffer, String> {
    if file.remaining() == 0 {
        return Ok(SaveBuffer::new());
    }
    file.read_chunk()
}
