//! Vertical doors: tag-triggered, manually used, locked, and the two
//! countdown variants the sector specials spawn at level start.

use log::{debug, warn};
use math::Fixed;
use sound_traits::SfxName;

use crate::defs::{Card, TICRATE, WorldError};
use crate::env::specials::{
    PlaneResult, find_lowest_ceiling_surrounding, move_plane, sector_sound,
};
use crate::lang::english::{PD_BLUEK, PD_REDK, PD_YELLOWK};
use crate::level::Level;
use crate::thing::MapObject;
use crate::thinker::{Think, ThinkerData, ThinkerId};

pub const VDOORSPEED: Fixed = Fixed::from_int(2);
pub const VDOORWAIT: i32 = 150;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoorKind {
    Normal,
    Close30ThenOpen,
    Close,
    Open,
    RaiseIn5Mins,
    BlazeRaise,
    BlazeOpen,
    BlazeClose,
}

/// One door in motion (or waiting to move). Direction 1 is opening, -1
/// closing, 0 waiting at the top, 2 waiting for the initial countdown.
pub struct VerticalDoor {
    pub(crate) sector: usize,
    pub(crate) kind: DoorKind,
    pub(crate) topheight: Fixed,
    pub(crate) speed: Fixed,
    pub(crate) direction: i32,
    /// Tics to hold the door open
    pub(crate) topwait: i32,
    pub(crate) topcountdown: i32,
}

impl Think for VerticalDoor {
    fn think(&mut self, level: &mut Level) -> bool {
        match self.direction {
            0 => {
                // holding at the top
                self.topcountdown -= 1;
                if self.topcountdown == 0 {
                    match self.kind {
                        DoorKind::BlazeRaise => {
                            self.direction = -1;
                            sector_sound(self.sector, SfxName::Dorcls, level);
                        }
                        DoorKind::Normal => {
                            self.direction = -1;
                            sector_sound(self.sector, SfxName::Dorcls, level);
                        }
                        DoorKind::Close30ThenOpen => {
                            self.direction = 1;
                            sector_sound(self.sector, SfxName::Doropn, level);
                        }
                        _ => {}
                    }
                }
            }
            2 => {
                // initial countdown before the first move
                self.topcountdown -= 1;
                if self.topcountdown == 0 && self.kind == DoorKind::RaiseIn5Mins {
                    self.direction = 1;
                    self.kind = DoorKind::Normal;
                    sector_sound(self.sector, SfxName::Doropn, level);
                }
            }
            -1 => {
                let floor = level.map_data.sectors[self.sector].floorheight;
                let res = move_plane(self.sector, self.speed, floor, false, 1, -1, level);
                match res {
                    PlaneResult::PastDest => match self.kind {
                        DoorKind::BlazeRaise | DoorKind::BlazeClose => {
                            level.map_data.sectors[self.sector].specialdata = None;
                            // the blazing close sound lands again on arrival
                            sector_sound(self.sector, SfxName::Dorcls, level);
                            return true;
                        }
                        DoorKind::Normal | DoorKind::Close => {
                            level.map_data.sectors[self.sector].specialdata = None;
                            return true;
                        }
                        DoorKind::Close30ThenOpen => {
                            self.direction = 0;
                            self.topcountdown = 30 * TICRATE;
                        }
                        _ => {}
                    },
                    PlaneResult::Crushed => {
                        // doors yield rather than crush, except the closers
                        match self.kind {
                            DoorKind::BlazeClose | DoorKind::Close => {}
                            _ => {
                                self.direction = 1;
                                sector_sound(self.sector, SfxName::Doropn, level);
                            }
                        }
                    }
                    PlaneResult::Ok => {}
                }
            }
            1 => {
                let res = move_plane(self.sector, self.speed, self.topheight, false, 1, 1, level);
                if res == PlaneResult::PastDest {
                    match self.kind {
                        DoorKind::BlazeRaise | DoorKind::Normal => {
                            self.direction = 0;
                            self.topcountdown = self.topwait;
                        }
                        DoorKind::Close30ThenOpen | DoorKind::BlazeOpen | DoorKind::Open => {
                            level.map_data.sectors[self.sector].specialdata = None;
                            return true;
                        }
                        _ => {}
                    }
                }
            }
            _ => {}
        }
        false
    }
}

fn push_door(door: VerticalDoor, level: &mut Level) -> Result<ThinkerId, WorldError> {
    let sector = door.sector;
    let id = level.thinkers.push(ThinkerData::VerticalDoor(door))?;
    level.map_data.sectors[sector].specialdata = Some(id);
    Ok(id)
}

/// Start doors on every sector with this tag.
///
/// Doom function name is `EV_DoDoor`
pub fn ev_do_door(tag: i16, kind: DoorKind, level: &mut Level) -> bool {
    let mut activated = false;
    for sector in 0..level.map_data.sectors.len() {
        if level.map_data.sectors[sector].tag != tag
            || level.map_data.sectors[sector].specialdata.is_some()
        {
            continue;
        }
        activated = true;
        debug!("{kind:?} door on sector {sector}");

        let ceiling = level.map_data.sectors[sector].ceilingheight;
        let mut door = VerticalDoor {
            sector,
            kind,
            topheight: find_lowest_ceiling_surrounding(sector, level) - Fixed::from_int(4),
            speed: VDOORSPEED,
            direction: 1,
            topwait: VDOORWAIT,
            topcountdown: 0,
        };
        match kind {
            DoorKind::Close30ThenOpen => {
                door.topheight = ceiling;
                door.direction = -1;
                sector_sound(sector, SfxName::Dorcls, level);
            }
            DoorKind::Close => {
                door.direction = -1;
                sector_sound(sector, SfxName::Dorcls, level);
            }
            DoorKind::BlazeClose => {
                door.direction = -1;
                door.speed = VDOORSPEED * 4;
                sector_sound(sector, SfxName::Dorcls, level);
            }
            DoorKind::BlazeRaise | DoorKind::BlazeOpen => {
                door.speed = VDOORSPEED * 4;
                if door.topheight != ceiling {
                    sector_sound(sector, SfxName::Doropn, level);
                }
            }
            DoorKind::Normal | DoorKind::Open => {
                if door.topheight != ceiling {
                    sector_sound(sector, SfxName::Doropn, level);
                }
            }
            DoorKind::RaiseIn5Mins => {}
        }
        if push_door(door, level).is_err() {
            return activated;
        }
    }
    activated
}

/// Open a door by using its own line, with key checks for the locked ones.
/// Reuses a door already moving on the sector: using a closing door sends
/// it back up, using an open one starts it closing.
///
/// Doom function name is `EV_VerticalDoor`
pub(crate) fn ev_vertical_door(line_num: usize, thing: &mut MapObject, level: &mut Level) {
    let special = level.map_data.linedefs[line_num].special;

    if let Some(slot) = thing.player {
        let missing = |cards: &[bool], a: Card, b: Card| !cards[a as usize] && !cards[b as usize];
        let cards = &level.players[slot].cards;
        let refused = match special {
            26 | 32 => missing(cards, Card::Bluecard, Card::Blueskull).then_some(PD_BLUEK),
            27 | 34 => missing(cards, Card::Yellowcard, Card::Yellowskull).then_some(PD_YELLOWK),
            28 | 33 => missing(cards, Card::Redcard, Card::Redskull).then_some(PD_REDK),
            _ => None,
        };
        if let Some(message) = refused {
            level.players[slot].message = Some(message);
            thing.start_sound(level, SfxName::Oof);
            return;
        }
    }

    let Some(sector) = level.map_data.linedefs[line_num].backsector else {
        warn!("one-sided line {line_num} used as a door");
        return;
    };

    // a door already moving on this sector gets redirected instead
    if let Some(id) = level.map_data.sectors[sector].specialdata {
        if let Some(ThinkerData::VerticalDoor(door)) = level.thinkers.get_mut(id) {
            if matches!(special, 1 | 26 | 27 | 28 | 117) {
                if door.direction == -1 {
                    door.direction = 1;
                } else if thing.player.is_some() {
                    // monsters never close doors on each other
                    door.direction = -1;
                }
            }
        }
        return;
    }

    let mut door = VerticalDoor {
        sector,
        kind: DoorKind::Normal,
        topheight: find_lowest_ceiling_surrounding(sector, level) - Fixed::from_int(4),
        speed: VDOORSPEED,
        direction: 1,
        topwait: VDOORWAIT,
        topcountdown: 0,
    };
    match special {
        1 | 26 | 27 | 28 => {
            sector_sound(sector, SfxName::Doropn, level);
        }
        31 | 32 | 33 | 34 => {
            door.kind = DoorKind::Open;
            level.map_data.linedefs[line_num].special = 0;
            sector_sound(sector, SfxName::Doropn, level);
        }
        117 => {
            door.kind = DoorKind::BlazeRaise;
            door.speed = VDOORSPEED * 4;
            sector_sound(sector, SfxName::Doropn, level);
        }
        118 => {
            door.kind = DoorKind::BlazeOpen;
            door.speed = VDOORSPEED * 4;
            level.map_data.linedefs[line_num].special = 0;
            sector_sound(sector, SfxName::Doropn, level);
        }
        s => {
            warn!("line {line_num} with special {s} is not a manual door");
            return;
        }
    }
    let _ = push_door(door, level);
}

/// Sector special 10: close after 30 seconds
pub(crate) fn spawn_door_close_in_30(sector: usize, level: &mut Level) -> Result<(), WorldError> {
    let door = VerticalDoor {
        sector,
        kind: DoorKind::Normal,
        topheight: level.map_data.sectors[sector].ceilingheight,
        speed: VDOORSPEED,
        direction: 0,
        topwait: VDOORWAIT,
        topcountdown: 30 * TICRATE,
    };
    push_door(door, level)?;
    level.map_data.sectors[sector].special = 0;
    Ok(())
}

/// Sector special 14: open after 5 minutes
pub(crate) fn spawn_door_raise_in_5_mins(
    sector: usize,
    level: &mut Level,
) -> Result<(), WorldError> {
    let door = VerticalDoor {
        sector,
        kind: DoorKind::RaiseIn5Mins,
        topheight: find_lowest_ceiling_surrounding(sector, level) - Fixed::from_int(4),
        speed: VDOORSPEED,
        direction: 2,
        topwait: VDOORWAIT,
        topcountdown: 5 * 60 * TICRATE,
    };
    push_door(door, level)?;
    level.map_data.sectors[sector].special = 0;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::test_maps::two_room_map;
    use crate::level::{Level, LevelOptions};
    use crate::thinker::ThinkerAlloc;

    fn door_level() -> Level {
        let mut raw = two_room_map();
        // the east room is the door track: shut, tagged
        raw.sectors[1].ceilingheight = 0;
        raw.sectors[1].tag = 9;
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
    fn tagged_door_opens_to_four_below_neighbour() {
        let mut level = door_level();
        assert!(ev_do_door(9, DoorKind::Open, &mut level));
        assert!(level.map_data.sectors[1].specialdata.is_some());

        run_ticks(&mut level, 200);
        // neighbour ceiling is 128, door stops 4 short
        assert_eq!(
            level.map_data.sectors[1].ceilingheight,
            Fixed::from_int(124)
        );
        // finished doors release the sector
        assert!(level.map_data.sectors[1].specialdata.is_none());
        assert_eq!(level.thinkers.len(), 0);
    }

    #[test]
    fn normal_door_waits_then_closes() {
        let mut level = door_level();
        assert!(ev_do_door(9, DoorKind::Normal, &mut level));

        run_ticks(&mut level, 62); // 124 units at 2/tick
        assert_eq!(
            level.map_data.sectors[1].ceilingheight,
            Fixed::from_int(124)
        );

        // still holding open partway through the wait
        run_ticks(&mut level, VDOORWAIT as usize / 2);
        assert_eq!(
            level.map_data.sectors[1].ceilingheight,
            Fixed::from_int(124)
        );

        // one tick to leave the wait, 62 coming down, one to latch shut
        run_ticks(&mut level, VDOORWAIT as usize / 2 + 64);
        assert_eq!(level.map_data.sectors[1].ceilingheight, Fixed::ZERO);
        assert!(level.map_data.sectors[1].specialdata.is_none());
    }

    #[test]
    fn blaze_door_is_four_times_faster() {
        let mut level = door_level();
        assert!(ev_do_door(9, DoorKind::BlazeOpen, &mut level));
        run_ticks(&mut level, 16); // 124 units at 8/tick
        assert_eq!(
            level.map_data.sectors[1].ceilingheight,
            Fixed::from_int(124)
        );
    }

    #[test]
    fn busy_sector_refuses_a_second_door() {
        let mut level = door_level();
        assert!(ev_do_door(9, DoorKind::Open, &mut level));
        assert!(!ev_do_door(9, DoorKind::Close, &mut level));
    }

    #[test]
    fn no_tag_match_means_no_door() {
        let mut level = door_level();
        assert!(!ev_do_door(5, DoorKind::Open, &mut level));
        assert_eq!(level.thinkers.len(), 0);
    }
}
