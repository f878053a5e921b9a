//! Moving ceilings, mostly crushers. Like platforms these stay on the
//! level's active list so stop/restart lines can find them by tag.

use log::debug;
use math::Fixed;
use sound_traits::SfxName;

use crate::env::specials::{
    PlaneResult, find_highest_ceiling_surrounding, move_plane, sector_sound,
};
use crate::level::Level;
use crate::thinker::{Think, ThinkerData, ThinkerId};

pub const CEILSPEED: Fixed = Fixed::ONE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CeilingKind {
    LowerToFloor,
    RaiseToHighest,
    LowerAndCrush,
    CrushAndRaise,
    FastCrushAndRaise,
    SilentCrushAndRaise,
}

pub struct CeilingMove {
    /// Own handle, needed to deregister from the level on completion
    pub(crate) thinker: ThinkerId,
    pub(crate) sector: usize,
    pub(crate) kind: CeilingKind,
    pub(crate) bottomheight: Fixed,
    pub(crate) topheight: Fixed,
    pub(crate) speed: Fixed,
    pub(crate) crush: bool,
    /// 1 going up, -1 coming down
    pub(crate) direction: i32,
    pub(crate) tag: i16,
    pub(crate) in_stasis: bool,
}

impl Think for CeilingMove {
    fn think(&mut self, level: &mut Level) -> bool {
        if self.in_stasis {
            return false;
        }
        match self.direction {
            1 => {
                let res =
                    move_plane(self.sector, self.speed, self.topheight, false, 1, 1, level);
                if level.level_time & 7 == 0 && self.kind != CeilingKind::SilentCrushAndRaise {
                    sector_sound(self.sector, SfxName::Stnmov, level);
                }
                if res == PlaneResult::PastDest {
                    match self.kind {
                        CeilingKind::RaiseToHighest => {
                            // detached while thinking, so the helper
                            // cannot see our sector
                            level.map_data.sectors[self.sector].specialdata = None;
                            level.remove_active_ceiling(self.thinker);
                        }
                        CeilingKind::SilentCrushAndRaise => {
                            sector_sound(self.sector, SfxName::Pstop, level);
                            self.speed = CEILSPEED;
                            self.direction = -1;
                        }
                        CeilingKind::CrushAndRaise => {
                            self.speed = CEILSPEED;
                            self.direction = -1;
                        }
                        CeilingKind::FastCrushAndRaise => {
                            self.direction = -1;
                        }
                        _ => {}
                    }
                }
            }
            -1 => {
                let res = move_plane(
                    self.sector,
                    self.speed,
                    self.bottomheight,
                    self.crush,
                    1,
                    -1,
                    level,
                );
                if level.level_time & 7 == 0 && self.kind != CeilingKind::SilentCrushAndRaise {
                    sector_sound(self.sector, SfxName::Stnmov, level);
                }
                match res {
                    PlaneResult::PastDest => match self.kind {
                        CeilingKind::SilentCrushAndRaise => {
                            sector_sound(self.sector, SfxName::Pstop, level);
                            self.speed = CEILSPEED;
                            self.direction = 1;
                        }
                        CeilingKind::CrushAndRaise => {
                            self.speed = CEILSPEED;
                            self.direction = 1;
                        }
                        CeilingKind::FastCrushAndRaise => {
                            self.direction = 1;
                        }
                        CeilingKind::LowerAndCrush | CeilingKind::LowerToFloor => {
                            level.map_data.sectors[self.sector].specialdata = None;
                            level.remove_active_ceiling(self.thinker);
                        }
                        _ => {}
                    },
                    PlaneResult::Crushed => match self.kind {
                        // grind slowly through whatever is in the way
                        CeilingKind::SilentCrushAndRaise
                        | CeilingKind::CrushAndRaise
                        | CeilingKind::LowerAndCrush => {
                            self.speed = CEILSPEED >> 3;
                        }
                        _ => {}
                    },
                    PlaneResult::Ok => {}
                }
            }
            _ => {}
        }
        false
    }
}

/// Start ceilings on every tagged sector. Crusher kinds also restart any
/// crushers of this tag sitting in stasis.
///
/// Doom function name is `EV_DoCeiling`
pub fn ev_do_ceiling(tag: i16, kind: CeilingKind, level: &mut Level) -> bool {
    let mut activated = false;

    if matches!(
        kind,
        CeilingKind::CrushAndRaise
            | CeilingKind::FastCrushAndRaise
            | CeilingKind::SilentCrushAndRaise
    ) {
        activated |= level.activate_ceiling_in_stasis(tag);
    }

    for sector in 0..level.map_data.sectors.len() {
        if level.map_data.sectors[sector].tag != tag
            || level.map_data.sectors[sector].specialdata.is_some()
        {
            continue;
        }
        activated = true;
        debug!("{kind:?} ceiling on sector {sector}");

        let floor = level.map_data.sectors[sector].floorheight;
        let ceiling = level.map_data.sectors[sector].ceilingheight;
        let mut mover = CeilingMove {
            thinker: ThinkerId::default(),
            sector,
            kind,
            bottomheight: floor,
            topheight: ceiling,
            speed: CEILSPEED,
            crush: false,
            direction: -1,
            tag,
            in_stasis: false,
        };
        match kind {
            CeilingKind::FastCrushAndRaise => {
                mover.crush = true;
                mover.bottomheight = floor + Fixed::from_int(8);
                mover.speed = CEILSPEED * 2;
            }
            CeilingKind::SilentCrushAndRaise | CeilingKind::CrushAndRaise => {
                mover.crush = true;
                mover.bottomheight = floor + Fixed::from_int(8);
            }
            CeilingKind::LowerAndCrush => {
                mover.crush = true;
                mover.bottomheight = floor + Fixed::from_int(8);
            }
            CeilingKind::LowerToFloor => {}
            CeilingKind::RaiseToHighest => {
                mover.topheight = find_highest_ceiling_surrounding(sector, level);
                mover.direction = 1;
            }
        }

        let Ok(id) = level.thinkers.push(ThinkerData::CeilingMove(mover)) else {
            return activated;
        };
        if let Some(ThinkerData::CeilingMove(mover)) = level.thinkers.get_mut(id) {
            mover.thinker = id;
        }
        level.map_data.sectors[sector].specialdata = Some(id);
        level.add_active_ceiling(id);
    }
    activated
}

/// Pause tagged crushers in place.
pub fn ev_ceiling_crush_stop(tag: i16, level: &mut Level) -> bool {
    level.ceiling_stasis(tag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::test_maps::two_room_map;
    use crate::level::{Level, LevelOptions};
    use crate::thinker::ThinkerAlloc;

    fn crusher_level() -> Level {
        let mut raw = two_room_map();
        raw.sectors[1].tag = 6;
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
    fn crusher_cycles_between_floor_and_ceiling() {
        let mut level = crusher_level();
        assert!(ev_do_ceiling(6, CeilingKind::CrushAndRaise, &mut level));

        // down 120 units to 8 above the floor
        run_ticks(&mut level, 120);
        assert_eq!(level.map_data.sectors[1].ceilingheight, Fixed::from_int(8));

        // a tick to turn around at the bottom, then straight back up
        run_ticks(&mut level, 121);
        assert_eq!(
            level.map_data.sectors[1].ceilingheight,
            Fixed::from_int(128)
        );
        // crushers never retire on their own
        assert!(level.map_data.sectors[1].specialdata.is_some());
    }

    #[test]
    fn crush_stop_freezes_until_restarted() {
        let mut level = crusher_level();
        assert!(ev_do_ceiling(6, CeilingKind::CrushAndRaise, &mut level));
        run_ticks(&mut level, 10);
        let held = level.map_data.sectors[1].ceilingheight;

        assert!(ev_ceiling_crush_stop(6, &mut level));
        run_ticks(&mut level, 40);
        assert_eq!(level.map_data.sectors[1].ceilingheight, held);

        // restarting via a crusher trigger reports activation
        assert!(ev_do_ceiling(6, CeilingKind::CrushAndRaise, &mut level));
        run_ticks(&mut level, 10);
        assert_ne!(level.map_data.sectors[1].ceilingheight, held);
    }

    #[test]
    fn lower_to_floor_retires_when_done() {
        let mut level = crusher_level();
        assert!(ev_do_ceiling(6, CeilingKind::LowerToFloor, &mut level));
        run_ticks(&mut level, 140);
        assert_eq!(level.map_data.sectors[1].ceilingheight, Fixed::ZERO);
        assert!(level.map_data.sectors[1].specialdata.is_none());
        assert!(level.active_ceilings.is_empty());
    }
}
