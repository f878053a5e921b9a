//! Sector light effects. These never retire and never own `specialdata`
//! exclusively past spawn; they just rewrite `lightlevel` on a cadence.

use crate::defs::WorldError;
use crate::env::specials::{find_max_light_surrounding, find_min_light_surrounding};
use crate::level::Level;
use crate::thinker::{Think, ThinkerData};

pub const STROBEBRIGHT: i32 = 5;
pub const FASTDARK: i32 = 15;
pub const SLOWDARK: i32 = 35;
pub const GLOWSPEED: i32 = 8;

/// Broken light, flickering at random intervals
pub struct LightFlash {
    pub(crate) sector: usize,
    pub(crate) count: i32,
    pub(crate) max_light: i32,
    pub(crate) min_light: i32,
    pub(crate) max_time: i32,
    pub(crate) min_time: i32,
}

impl Think for LightFlash {
    fn think(&mut self, level: &mut Level) -> bool {
        self.count -= 1;
        if self.count > 0 {
            return false;
        }
        let sector = &mut level.map_data.sectors[self.sector];
        if sector.lightlevel == self.max_light {
            sector.lightlevel = self.min_light;
            self.count = (level.rng.p_random() & self.min_time) + 1;
        } else {
            sector.lightlevel = self.max_light;
            self.count = (level.rng.p_random() & self.max_time) + 1;
        }
        false
    }
}

/// Regular on/off strobe
pub struct StrobeFlash {
    pub(crate) sector: usize,
    pub(crate) count: i32,
    pub(crate) min_light: i32,
    pub(crate) max_light: i32,
    pub(crate) dark_time: i32,
    pub(crate) bright_time: i32,
}

impl Think for StrobeFlash {
    fn think(&mut self, level: &mut Level) -> bool {
        self.count -= 1;
        if self.count > 0 {
            return false;
        }
        let sector = &mut level.map_data.sectors[self.sector];
        if sector.lightlevel == self.min_light {
            sector.lightlevel = self.max_light;
            self.count = self.bright_time;
        } else {
            sector.lightlevel = self.min_light;
            self.count = self.dark_time;
        }
        false
    }
}

/// Smooth pulse between the sector's own level and its darkest neighbour
pub struct Glow {
    pub(crate) sector: usize,
    pub(crate) min_light: i32,
    pub(crate) max_light: i32,
    pub(crate) direction: i32,
}

impl Think for Glow {
    fn think(&mut self, level: &mut Level) -> bool {
        let sector = &mut level.map_data.sectors[self.sector];
        if self.direction == -1 {
            sector.lightlevel -= GLOWSPEED;
            if sector.lightlevel <= self.min_light {
                sector.lightlevel = self.min_light;
                self.direction = 1;
            }
        } else {
            sector.lightlevel += GLOWSPEED;
            if sector.lightlevel >= self.max_light {
                sector.lightlevel = self.max_light;
                self.direction = -1;
            }
        }
        false
    }
}

/// Fire light, jittering downward from the sector's own level
pub struct FireFlicker {
    pub(crate) sector: usize,
    pub(crate) count: i32,
    pub(crate) max_light: i32,
    pub(crate) min_light: i32,
}

impl Think for FireFlicker {
    fn think(&mut self, level: &mut Level) -> bool {
        self.count -= 1;
        if self.count > 0 {
            return false;
        }
        let amount = (level.rng.p_random() & 3) * 16;
        let sector = &mut level.map_data.sectors[self.sector];
        if self.max_light - amount < self.min_light {
            sector.lightlevel = self.min_light;
        } else {
            sector.lightlevel = self.max_light - amount;
        }
        self.count = 4;
        false
    }
}

pub(crate) fn spawn_light_flash(sector: usize, level: &mut Level) -> Result<(), WorldError> {
    let max_light = level.map_data.sectors[sector].lightlevel;
    let min_light = find_min_light_surrounding(sector, max_light, level);
    let count = (level.rng.p_random() & 64) + 1;
    level.thinkers.push(ThinkerData::LightFlash(LightFlash {
        sector,
        count,
        max_light,
        min_light,
        max_time: 64,
        min_time: 7,
    }))?;
    Ok(())
}

pub(crate) fn spawn_strobe_flash(
    sector: usize,
    dark_time: i32,
    in_sync: bool,
    level: &mut Level,
) -> Result<(), WorldError> {
    let max_light = level.map_data.sectors[sector].lightlevel;
    let mut min_light = find_min_light_surrounding(sector, max_light, level);
    if min_light == max_light {
        min_light = 0;
    }
    let count = if in_sync {
        1
    } else {
        (level.rng.p_random() & 7) + 1
    };
    level.thinkers.push(ThinkerData::StrobeFlash(StrobeFlash {
        sector,
        count,
        min_light,
        max_light,
        dark_time,
        bright_time: STROBEBRIGHT,
    }))?;
    Ok(())
}

pub(crate) fn spawn_glow(sector: usize, level: &mut Level) -> Result<(), WorldError> {
    let max_light = level.map_data.sectors[sector].lightlevel;
    let min_light = find_min_light_surrounding(sector, max_light, level);
    level.thinkers.push(ThinkerData::Glow(Glow {
        sector,
        min_light,
        max_light,
        direction: -1,
    }))?;
    Ok(())
}

pub(crate) fn spawn_fire_flicker(sector: usize, level: &mut Level) -> Result<(), WorldError> {
    let max_light = level.map_data.sectors[sector].lightlevel;
    let min_light = find_min_light_surrounding(sector, max_light, level) + 16;
    level.thinkers.push(ThinkerData::FireFlicker(FireFlicker {
        sector,
        count: 4,
        max_light,
        min_light,
    }))?;
    Ok(())
}

/// Line trigger: start slow strobing on every tagged sector not already busy
pub(crate) fn ev_start_light_strobing(tag: i16, level: &mut Level) {
    for sector in 0..level.map_data.sectors.len() {
        if level.map_data.sectors[sector].tag != tag
            || level.map_data.sectors[sector].specialdata.is_some()
        {
            continue;
        }
        let _ = spawn_strobe_flash(sector, SLOWDARK, false, level);
    }
}

/// Line trigger: set tagged sectors to `bright`, or to their brightest
/// neighbour when `bright` is 0
pub(crate) fn ev_turn_light_on(tag: i16, bright: i32, level: &mut Level) {
    for sector in 0..level.map_data.sectors.len() {
        if level.map_data.sectors[sector].tag != tag {
            continue;
        }
        let value = if bright == 0 {
            find_max_light_surrounding(sector, 0, level)
        } else {
            bright
        };
        level.map_data.sectors[sector].lightlevel = value;
    }
}

/// Line trigger: darken tagged sectors to their darkest neighbour
pub(crate) fn ev_turn_tag_lights_off(tag: i16, level: &mut Level) {
    for sector in 0..level.map_data.sectors.len() {
        if level.map_data.sectors[sector].tag != tag {
            continue;
        }
        let own = level.map_data.sectors[sector].lightlevel;
        level.map_data.sectors[sector].lightlevel =
            find_min_light_surrounding(sector, own, level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::test_maps::two_room_map;
    use crate::level::{Level, LevelOptions};
    use crate::thinker::ThinkerAlloc;

    fn lit_level() -> Level {
        let mut raw = two_room_map();
        raw.sectors[0].lightlevel = 64;
        raw.sectors[1].lightlevel = 200;
        raw.sectors[1].tag = 2;
        let (tx, _rx) = std::sync::mpsc::channel();
        Level::new(LevelOptions::default(), raw, tx).unwrap()
    }

    #[test]
    fn lights_on_with_zero_takes_brightest_neighbour() {
        let mut level = lit_level();
        level.map_data.sectors[1].lightlevel = 10;
        ev_turn_light_on(2, 0, &mut level);
        assert_eq!(level.map_data.sectors[1].lightlevel, 64);
    }

    #[test]
    fn lights_off_takes_darkest_neighbour() {
        let mut level = lit_level();
        ev_turn_tag_lights_off(2, &mut level);
        assert_eq!(level.map_data.sectors[1].lightlevel, 64);
    }

    #[test]
    fn glow_bounces_between_neighbour_and_own_level() {
        let mut level = lit_level();
        spawn_glow(1, &mut level).unwrap();
        // down 136 units at 8 per tick, then back up
        for _ in 0..17 {
            ThinkerAlloc::run_thinkers(&mut level);
        }
        assert_eq!(level.map_data.sectors[1].lightlevel, 64);
        for _ in 0..17 {
            ThinkerAlloc::run_thinkers(&mut level);
        }
        assert_eq!(level.map_data.sectors[1].lightlevel, 200);
    }

    #[test]
    fn strobe_alternates_between_levels() {
        let mut level = lit_level();
        spawn_strobe_flash(1, FASTDARK, true, &mut level).unwrap();
        // in sync: first toggle lands on the very first tick
        ThinkerAlloc::run_thinkers(&mut level);
        assert_eq!(level.map_data.sectors[1].lightlevel, 64);
        for _ in 0..FASTDARK {
            ThinkerAlloc::run_thinkers(&mut level);
        }
        assert_eq!(level.map_data.sectors[1].lightlevel, 200);
    }
}
