use serde::{Deserialize, Serialize};

use crate::save::{Save, Load, SaveBuffer, SaveResult, LoadResult};

pub const TICKS_PER_DAY: i32 = 50;
pub const DAYS_PER_MONTH: i32 = 16;
pub const MONTHS_PER_YEAR: i32 = 12;

// ----------------------------------------------
// GameTime
// ----------------------------------------------

// Simulation calendar. One tick is the unit of the fixed-step simulation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameTime {
    tick: i32,
    day: i32,
    month: i32,
    year: i32,
    total_days: i32,
}

impl GameTime {
    #[inline]
    pub fn new(year: i32) -> Self {
        Self { year, ..Default::default() }
    }

    // Resets to the first tick of `year`.
    #[inline]
    pub fn init(&mut self, year: i32) {
        *self = Self::new(year);
    }

    #[inline] pub fn tick(&self) -> i32 { self.tick }
    #[inline] pub fn day(&self) -> i32 { self.day }
    #[inline] pub fn month(&self) -> i32 { self.month }
    #[inline] pub fn year(&self) -> i32 { self.year }
    #[inline] pub fn total_days(&self) -> i32 { self.total_days }

    // Day within the current year.
    #[inline]
    pub fn absolute_day(&self) -> i32 {
        self.month * DAYS_PER_MONTH + self.day
    }

    // Tick within the current year.
    #[inline]
    pub fn absolute_tick(&self) -> i32 {
        self.absolute_day() * TICKS_PER_DAY + self.tick
    }

    // Returns true when the day rolls over.
    pub fn advance_tick(&mut self) -> bool {
        self.tick += 1;
        if self.tick >= TICKS_PER_DAY {
            self.tick = 0;
            return true;
        }
        false
    }

    // Returns true when the month rolls over.
    pub fn advance_day(&mut self) -> bool {
        self.total_days += 1;
        self.day += 1;
        if self.day >= DAYS_PER_MONTH {
            self.day = 0;
            return true;
        }
        false
    }

    // Returns true when the year rolls over.
    pub fn advance_month(&mut self) -> bool {
        self.month += 1;
        if self.month >= MONTHS_PER_YEAR {
            self.month = 0;
            return true;
        }
        false
    }

    #[inline]
    pub fn advance_year(&mut self) {
        self.year += 1;
    }

    // Advances one tick, cascading into days, months and years.
    pub fn advance(&mut self) {
        if self.advance_tick() && self.advance_day() && self.advance_month() {
            self.advance_year();
        }
    }
}

impl std::fmt::Display for GameTime {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "year {} month {} day {} tick {}", self.year, self.month + 1, self.day + 1, self.tick)
    }
}

impl Save for GameTime {
    fn save(&self, buf: &mut SaveBuffer) -> SaveResult {
        buf.write_i32(self.tick);
        buf.write_i32(self.day);
        buf.write_i32(self.month);
        buf.write_i32(self.year);
        buf.write_i32(self.total_days);
        Ok(())
    }
}

impl Load for GameTime {
    fn load(&mut self, buf: &mut SaveBuffer) -> LoadResult {
        self.tick = buf.read_i32()?;
        self.day = buf.read_i32()?;
        self.month = buf.read_i32()?;
        self.year = buf.read_i32()?;
        self.total_days = buf.read_i32()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_rollover_cascades() {
        let mut time = GameTime::new(-350);

        for _ in 0..TICKS_PER_DAY - 1 {
            time.advance();
        }
        assert_eq!((time.tick(), time.day()), (49, 0));

        time.advance();
        assert_eq!((time.tick(), time.day(), time.total_days()), (0, 1, 1));

        let ticks_per_year = TICKS_PER_DAY * DAYS_PER_MONTH * MONTHS_PER_YEAR;
        let mut time = GameTime::new(100);
        for _ in 0..ticks_per_year {
            time.advance();
        }
        assert_eq!(time.year(), 101);
        assert_eq!((time.month(), time.day(), time.tick()), (0, 0, 0));
        assert_eq!(time.total_days(), DAYS_PER_MONTH * MONTHS_PER_YEAR);
    }

    #[test]
    fn test_advance_results() {
        let mut time = GameTime::new(0);
        assert!(!time.advance_day());
        for _ in 0..14 {
            assert!(!time.advance_day());
        }
        assert!(time.advance_day());
        assert_eq!(time.day(), 0);
        assert_eq!(time.total_days(), 16);

        for _ in 0..11 {
            assert!(!time.advance_month());
        }
        assert!(time.advance_month());
    }

    #[test]
    fn test_absolute_values() {
        let mut time = GameTime::new(0);
        time.advance_month();
        time.advance_month();
        for _ in 0..3 {
            time.advance_day();
        }
        for _ in 0..7 {
            time.advance_tick();
        }
        assert_eq!(time.absolute_day(), 2 * 16 + 3);
        assert_eq!(time.absolute_tick(), (2 * 16 + 3) * 50 + 7);
    }

    #[test]
    fn test_save_load() {
        let mut time = GameTime::new(-44);
        for _ in 0..1234 {
            time.advance();
        }

        let mut buf = SaveBuffer::new();
        time.save(&mut buf).unwrap();
        assert_eq!(buf.len(), 5 * 4);

        let mut loaded = GameTime::default();
        loaded.load(&mut buf).unwrap();
        assert_eq!(loaded, time);
    }
}
