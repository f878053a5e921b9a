//! Raising and lowering platforms. Unlike doors these stay registered with
//! the level while active so tagged stop/restart lines can reach them even
//! when they are sitting still.

use log::debug;
use math::Fixed;
use sound_traits::SfxName;

use crate::defs::TICRATE;
use crate::env::specials::{
    PlaneResult, find_lowest_floor_surrounding, find_next_highest_floor, move_plane, sector_sound,
};
use crate::level::Level;
use crate::thinker::{Think, ThinkerData, ThinkerId};

pub const PLATSPEED: Fixed = Fixed::ONE;
/// Seconds a platform waits at the bottom
pub const PLATWAIT: i32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatStatus {
    Up,
    Down,
    Waiting,
    InStasis,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatKind {
    PerpetualRaise,
    DownWaitUpStay,
    RaiseAndChange,
    RaiseToNearestAndChange,
    BlazeDWUS,
}

pub struct Platform {
    /// Own handle, needed to deregister from the level on completion
    pub(crate) thinker: ThinkerId,
    pub(crate) sector: usize,
    pub(crate) speed: Fixed,
    pub(crate) low: Fixed,
    pub(crate) high: Fixed,
    pub(crate) wait: i32,
    pub(crate) count: i32,
    pub(crate) status: PlatStatus,
    pub(crate) old_status: PlatStatus,
    pub(crate) crush: bool,
    pub(crate) tag: i16,
    pub(crate) kind: PlatKind,
}

impl Think for Platform {
    fn think(&mut self, level: &mut Level) -> bool {
        match self.status {
            PlatStatus::Up => {
                let res = move_plane(self.sector, self.speed, self.high, self.crush, 0, 1, level);
                if matches!(
                    self.kind,
                    PlatKind::RaiseAndChange | PlatKind::RaiseToNearestAndChange
                ) && level.level_time & 7 == 0
                {
                    sector_sound(self.sector, SfxName::Stnmov, level);
                }
                match res {
                    PlaneResult::Crushed if !self.crush => {
                        self.count = self.wait;
                        self.status = PlatStatus::Down;
                        sector_sound(self.sector, SfxName::Pstart, level);
                    }
                    PlaneResult::PastDest => {
                        self.count = self.wait;
                        self.status = PlatStatus::Waiting;
                        sector_sound(self.sector, SfxName::Pstop, level);
                        match self.kind {
                            PlatKind::BlazeDWUS
                            | PlatKind::DownWaitUpStay
                            | PlatKind::RaiseAndChange
                            | PlatKind::RaiseToNearestAndChange => {
                                // detached while thinking, so the helper
                                // cannot see our sector
                                level.map_data.sectors[self.sector].specialdata = None;
                                level.remove_active_platform(self.thinker);
                            }
                            PlatKind::PerpetualRaise => {}
                        }
                    }
                    _ => {}
                }
            }
            PlatStatus::Down => {
                let res = move_plane(self.sector, self.speed, self.low, false, 0, -1, level);
                if res == PlaneResult::PastDest {
                    self.count = self.wait;
                    self.status = PlatStatus::Waiting;
                    sector_sound(self.sector, SfxName::Pstop, level);
                }
            }
            PlatStatus::Waiting => {
                self.count -= 1;
                if self.count == 0 {
                    let floor = level.map_data.sectors[self.sector].floorheight;
                    self.status = if floor == self.low {
                        PlatStatus::Up
                    } else {
                        PlatStatus::Down
                    };
                    sector_sound(self.sector, SfxName::Pstart, level);
                }
            }
            PlatStatus::InStasis => {}
        }
        false
    }
}

/// Start platforms on every tagged sector. `amount` is the rise in map
/// units for the raise-and-change kinds.
///
/// Doom function name is `EV_DoPlat`
pub fn ev_do_platform(tag: i16, kind: PlatKind, amount: i32, level: &mut Level) -> bool {
    let mut activated = false;

    // a perpetual trigger also wakes any of its platforms put in stasis
    if kind == PlatKind::PerpetualRaise {
        level.activate_platform_in_stasis(tag);
    }

    for sector in 0..level.map_data.sectors.len() {
        if level.map_data.sectors[sector].tag != tag
            || level.map_data.sectors[sector].specialdata.is_some()
        {
            continue;
        }
        activated = true;
        debug!("{kind:?} platform on sector {sector}");

        let floor = level.map_data.sectors[sector].floorheight;
        let mut plat = Platform {
            thinker: ThinkerId::default(),
            sector,
            speed: PLATSPEED,
            low: floor,
            high: floor,
            wait: 0,
            count: 0,
            status: PlatStatus::Up,
            old_status: PlatStatus::Up,
            crush: false,
            tag,
            kind,
        };
        match kind {
            PlatKind::RaiseToNearestAndChange => {
                plat.speed = PLATSPEED / 2;
                plat.high = find_next_highest_floor(sector, floor, level);
                level.map_data.sectors[sector].special = 0;
                sector_sound(sector, SfxName::Stnmov, level);
            }
            PlatKind::RaiseAndChange => {
                plat.speed = PLATSPEED / 2;
                plat.high = floor + Fixed::from_int(amount);
                sector_sound(sector, SfxName::Stnmov, level);
            }
            PlatKind::DownWaitUpStay => {
                plat.speed = PLATSPEED * 4;
                plat.low = find_lowest_floor_surrounding(sector, level).min(floor);
                plat.wait = TICRATE * PLATWAIT;
                plat.status = PlatStatus::Down;
                sector_sound(sector, SfxName::Pstart, level);
            }
            PlatKind::BlazeDWUS => {
                plat.speed = PLATSPEED * 8;
                plat.low = find_lowest_floor_surrounding(sector, level).min(floor);
                plat.wait = TICRATE * PLATWAIT;
                plat.status = PlatStatus::Down;
                sector_sound(sector, SfxName::Pstart, level);
            }
            PlatKind::PerpetualRaise => {
                plat.low = find_lowest_floor_surrounding(sector, level).min(floor);
                plat.high = crate::env::specials::find_highest_floor_surrounding(sector, level)
                    .max(floor);
                plat.wait = TICRATE * PLATWAIT;
                plat.status = if level.rng.p_random() & 1 == 0 {
                    PlatStatus::Up
                } else {
                    PlatStatus::Down
                };
                sector_sound(sector, SfxName::Pstart, level);
            }
        }

        let Ok(id) = level.thinkers.push(ThinkerData::Platform(plat)) else {
            return activated;
        };
        if let Some(ThinkerData::Platform(plat)) = level.thinkers.get_mut(id) {
            plat.thinker = id;
        }
        level.map_data.sectors[sector].specialdata = Some(id);
        level.add_active_platform(id);
    }
    activated
}

/// Freeze tagged platforms in place. A perpetual trigger with the same tag
/// restarts them.
pub fn ev_stop_platform(tag: i16, level: &mut Level) {
    level.stop_platform(tag);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::test_maps::two_room_map;
    use crate::level::{Level, LevelOptions};
    use crate::thinker::ThinkerAlloc;

    fn plat_level() -> Level {
        let mut raw = two_room_map();
        // east room is a raised platform above the west floor
        raw.sectors[1].floorheight = 64;
        raw.sectors[1].tag = 3;
        let (tx, _rx) = std::sync::mpsc::channel();
        Level::new(LevelOptions::default(), raw, tx).unwrap()
    }

    fn run_ticks(level: &mut Level, n: usize) {
        for _ in 0..n {
            ThinkerAlloc::run_thinkers(level);
            level.level_time += 1;
        }
    }

    #[test]
    fn down_wait_up_stay_round_trip() {
        let mut level = plat_level();
        assert!(ev_do_platform(3, PlatKind::DownWaitUpStay, 0, &mut level));

        // down 64 units at speed 4
        run_ticks(&mut level, 16);
        assert_eq!(level.map_data.sectors[1].floorheight, Fixed::ZERO);

        // a tick to settle at the bottom, the pause, the ride back up,
        // and a tick to latch at the top
        run_ticks(&mut level, (TICRATE * PLATWAIT) as usize + 18);
        assert_eq!(level.map_data.sectors[1].floorheight, Fixed::from_int(64));
        // stays-up platforms deregister once home
        assert!(level.map_data.sectors[1].specialdata.is_none());
        assert!(level.active_platforms.is_empty());
    }

    #[test]
    fn stopped_platform_holds_until_reactivated() {
        let mut level = plat_level();
        assert!(ev_do_platform(3, PlatKind::PerpetualRaise, 0, &mut level));
        run_ticks(&mut level, 8);
        let mid = level.map_data.sectors[1].floorheight;
        assert_ne!(mid, Fixed::ZERO);

        ev_stop_platform(3, &mut level);
        run_ticks(&mut level, 50);
        assert_eq!(level.map_data.sectors[1].floorheight, mid);

        // perpetual triggers restart stasis platforms with the same tag
        assert!(ev_do_platform(3, PlatKind::PerpetualRaise, 0, &mut level));
        run_ticks(&mut level, 200);
        assert_ne!(level.map_data.sectors[1].floorheight, mid);
    }

    #[test]
    fn raise_and_change_lifts_by_requested_amount() {
        let mut level = plat_level();
        assert!(ev_do_platform(3, PlatKind::RaiseAndChange, 24, &mut level));
        run_ticks(&mut level, 49); // 24 units at half speed plus the arrival tick
        assert_eq!(level.map_data.sectors[1].floorheight, Fixed::from_int(88));
        assert!(level.map_data.sectors[1].specialdata.is_none());
    }
}
