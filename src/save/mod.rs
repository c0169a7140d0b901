use std::{path::Path, fs, io};
use enum_dispatch::enum_dispatch;
use serde::{Serialize, de::DeserializeOwned};

pub mod buffer;
pub use buffer::SaveBuffer;

// ----------------------------------------------
// Save / Load Traits
// ----------------------------------------------

pub type SaveResult = Result<(), String>;
pub type LoadResult = Result<(), String>;

// Binary save chunk writer. Implementors append their state to the buffer
// in a fixed field order that must stay stable for save compatibility.
pub trait Save {
    fn save(&self, buf: &mut SaveBuffer) -> SaveResult;
}

// Binary save chunk reader, mirroring `Save`.
pub trait Load {
    fn load(&mut self, buf: &mut SaveBuffer) -> LoadResult;
}

// ----------------------------------------------
// SaveState (structured text backends)
// ----------------------------------------------

#[enum_dispatch(SaveStateImpl)]
pub trait SaveState {
    fn save<T>(&mut self, instance: &T) -> SaveResult
        where T: Serialize;

    fn load_new_instance<T>(&self) -> Result<T, String>
        where T: DeserializeOwned;

    fn read_file<P>(&mut self, path: P) -> io::Result<()>
        where P: AsRef<Path>;

    fn write_file<P>(&self, path: P) -> io::Result<()>
        where P: AsRef<Path>;
}

#[enum_dispatch]
pub enum SaveStateImpl {
    Json(backend::JsonSaveState),
}

// ----------------------------------------------
// SaveState Implementations
// ----------------------------------------------

pub mod backend {
use super::*;

// ----------------------------------------------
// JsonSaveState
// ----------------------------------------------

pub struct JsonSaveState {
    pretty: bool,
    buffer: String,
}

impl JsonSaveState {
    pub fn new(pretty_print: bool) -> Self {
        Self {
            pretty: pretty_print,
            buffer: String::new(),
        }
    }
}

impl SaveState for JsonSaveState {
    fn save<T>(&mut self, instance: &T) -> SaveResult
        where T: Serialize
    {
        let result = {
            if self.pretty {
                serde_json::to_string_pretty(instance)
            } else {
                serde_json::to_string(instance)
            }
        };

        self.buffer = result.map_err(|err| err.to_string())?;
        Ok(())
    }

    fn load_new_instance<T>(&self) -> Result<T, String>
        where T: DeserializeOwned
    {
        if self.buffer.is_empty() {
            return Err("JsonSaveState has no state to load!".into());
        }

        serde_json::from_str::<T>(&self.buffer).map_err(|err| err.to_string())
    }

    fn read_file<P>(&mut self, path: P) -> io::Result<()>
        where P: AsRef<Path>
    {
        self.buffer = fs::read_to_string(path)?;
        Ok(())
    }

    fn write_file<P>(&self, path: P) -> io::Result<()>
        where P: AsRef<Path>
    {
        fs::write(path, &self.buffer)
    }
}

#[inline]
pub fn new_json_save_state(pretty_print: bool) -> SaveStateImpl {
    SaveStateImpl::from(JsonSaveState::new(pretty_print))
}
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::backend::new_json_save_state;

    #[test]
    fn test_json_state_round_trip() {
        let mut state = new_json_save_state(false);
        assert!(state.load_new_instance::<Vec<u32>>().is_err());

        state.save(&vec![3_u32, 1, 4]).unwrap();
        let loaded: Vec<u32> = state.load_new_instance().unwrap();
        assert_eq!(loaded, [3, 1, 4]);
    }
}
