//! Moving floors, the stair builder and the donut. Floor movers retire as
//! soon as they arrive; nothing restarts a floor by tag.

use log::debug;
use math::Fixed;
use sound_traits::SfxName;

use crate::env::specials::{
    PlaneResult, find_highest_floor_surrounding, find_lowest_ceiling_surrounding,
    find_lowest_floor_surrounding, find_next_highest_floor, get_next_sector, move_plane,
    sector_sound,
};
use crate::level::Level;
use crate::thinker::{Think, ThinkerData};

pub const FLOORSPEED: Fixed = Fixed::ONE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloorKind {
    /// Lower to the highest surrounding floor
    LowerFloor,
    LowerFloorToLowest,
    /// Lower fast to 8 above the highest surrounding floor
    TurboLower,
    /// Raise to the lowest surrounding ceiling
    RaiseFloor,
    RaiseFloorToNearest,
    RaiseFloor24,
    RaiseFloor512,
    /// Raise to 8 below the lowest surrounding ceiling, crushing
    RaiseFloorCrush,
    RaiseFloorTurbo,
    /// Lower to the lowest surrounding floor, adopting that sector's special
    LowerAndChange,
    /// The donut ring, raised to the height of the sector beyond it
    DonutRaise,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StairKind {
    /// 8 units per step at quarter speed
    Build8,
    /// 16 units per step at four times speed
    Turbo16,
}

pub struct FloorMove {
    pub(crate) sector: usize,
    pub(crate) kind: FloorKind,
    pub(crate) speed: Fixed,
    pub(crate) crush: bool,
    pub(crate) direction: i32,
    /// Sector special to adopt on arrival, for the change kinds
    pub(crate) newspecial: i16,
    pub(crate) destheight: Fixed,
}

impl Think for FloorMove {
    fn think(&mut self, level: &mut Level) -> bool {
        let res = move_plane(
            self.sector,
            self.speed,
            self.destheight,
            self.crush,
            0,
            self.direction,
            level,
        );
        if level.level_time & 7 == 0 {
            sector_sound(self.sector, SfxName::Stnmov, level);
        }
        if res == PlaneResult::PastDest {
            if (self.direction == 1 && self.kind == FloorKind::DonutRaise)
                || (self.direction == -1 && self.kind == FloorKind::LowerAndChange)
            {
                level.map_data.sectors[self.sector].special = self.newspecial;
            }
            level.map_data.sectors[self.sector].specialdata = None;
            sector_sound(self.sector, SfxName::Pstop, level);
            return true;
        }
        false
    }
}

/// Start floor movers on every tagged sector.
///
/// Doom function name is `EV_DoFloor`
pub fn ev_do_floor(tag: i16, kind: FloorKind, level: &mut Level) -> bool {
    let mut activated = false;
    for sector in 0..level.map_data.sectors.len() {
        if level.map_data.sectors[sector].tag != tag
            || level.map_data.sectors[sector].specialdata.is_some()
        {
            continue;
        }
        activated = true;
        debug!("{kind:?} floor on sector {sector}");

        let floorheight = level.map_data.sectors[sector].floorheight;
        let mut floor = FloorMove {
            sector,
            kind,
            speed: FLOORSPEED,
            crush: false,
            direction: 1,
            newspecial: 0,
            destheight: floorheight,
        };
        match kind {
            FloorKind::LowerFloor => {
                floor.direction = -1;
                floor.destheight = find_highest_floor_surrounding(sector, level);
            }
            FloorKind::LowerFloorToLowest => {
                floor.direction = -1;
                floor.destheight = find_lowest_floor_surrounding(sector, level);
            }
            FloorKind::TurboLower => {
                floor.direction = -1;
                floor.speed = FLOORSPEED * 4;
                floor.destheight = find_highest_floor_surrounding(sector, level);
                if floor.destheight != floorheight {
                    floor.destheight = floor.destheight + Fixed::from_int(8);
                }
            }
            FloorKind::RaiseFloor => {
                floor.destheight = find_lowest_ceiling_surrounding(sector, level)
                    .min(level.map_data.sectors[sector].ceilingheight);
            }
            FloorKind::RaiseFloorCrush => {
                floor.crush = true;
                floor.destheight = find_lowest_ceiling_surrounding(sector, level)
                    .min(level.map_data.sectors[sector].ceilingheight)
                    - Fixed::from_int(8);
            }
            FloorKind::RaiseFloorTurbo => {
                floor.speed = FLOORSPEED * 4;
                floor.destheight = find_next_highest_floor(sector, floorheight, level);
            }
            FloorKind::RaiseFloorToNearest => {
                floor.destheight = find_next_highest_floor(sector, floorheight, level);
            }
            FloorKind::RaiseFloor24 => {
                floor.destheight = floorheight + Fixed::from_int(24);
            }
            FloorKind::RaiseFloor512 => {
                floor.destheight = floorheight + Fixed::from_int(512);
            }
            FloorKind::LowerAndChange => {
                floor.direction = -1;
                floor.destheight = find_lowest_floor_surrounding(sector, level);
                // adopt the special of a neighbour already at that height
                for line in level.map_data.sectors[sector].lines.clone() {
                    if let Some(other) = get_next_sector(line, sector, level) {
                        if level.map_data.sectors[other].floorheight == floor.destheight {
                            floor.newspecial = level.map_data.sectors[other].special;
                            break;
                        }
                    }
                }
            }
            FloorKind::DonutRaise => {}
        }

        let Ok(id) = level.thinkers.push(ThinkerData::FloorMove(floor)) else {
            return activated;
        };
        level.map_data.sectors[sector].specialdata = Some(id);
    }
    activated
}

/// Build a staircase out from every tagged sector, one mover per step.
/// Each step continues through two-sided lines faced by the previous step.
///
/// Doom function name is `EV_BuildStairs`
pub fn ev_build_stairs(tag: i16, kind: StairKind, level: &mut Level) -> bool {
    let (speed, stepsize) = match kind {
        StairKind::Build8 => (FLOORSPEED / 4, Fixed::from_int(8)),
        StairKind::Turbo16 => (FLOORSPEED * 4, Fixed::from_int(16)),
    };

    let mut activated = false;
    for sector in 0..level.map_data.sectors.len() {
        if level.map_data.sectors[sector].tag != tag
            || level.map_data.sectors[sector].specialdata.is_some()
        {
            continue;
        }
        activated = true;
        debug!("{kind:?} stairs from sector {sector}");

        let mut height = level.map_data.sectors[sector].floorheight + stepsize;
        if push_step(sector, speed, height, level).is_err() {
            return activated;
        }

        let mut current = sector;
        loop {
            let mut advanced = false;
            for line in level.map_data.sectors[current].lines.clone() {
                let Some(back) = level.map_data.linedefs[line].backsector else {
                    continue;
                };
                let front = level.map_data.sidedefs
                    [level.map_data.linedefs[line].front_sidedef]
                    .sector;
                if front != current {
                    continue;
                }
                let next = if back == current {
                    continue;
                } else {
                    back
                };
                if level.map_data.sectors[next].specialdata.is_some() {
                    continue;
                }
                height = height + stepsize;
                if push_step(next, speed, height, level).is_err() {
                    return activated;
                }
                current = next;
                advanced = true;
                break;
            }
            if !advanced {
                break;
            }
        }
    }
    activated
}

fn push_step(
    sector: usize,
    speed: Fixed,
    destheight: Fixed,
    level: &mut Level,
) -> Result<(), crate::defs::WorldError> {
    let floor = FloorMove {
        sector,
        kind: FloorKind::RaiseFloorToNearest,
        speed,
        crush: false,
        direction: 1,
        newspecial: 0,
        destheight,
    };
    let id = level.thinkers.push(ThinkerData::FloorMove(floor))?;
    level.map_data.sectors[sector].specialdata = Some(id);
    Ok(())
}

/// Raise the ring around a tagged pillar to the height of the sector beyond
/// it, and lower the pillar to match. Special 9.
///
/// Doom function name is `EV_DoDonut`
pub fn ev_do_donut(tag: i16, level: &mut Level) -> bool {
    let mut activated = false;
    for s1 in 0..level.map_data.sectors.len() {
        if level.map_data.sectors[s1].tag != tag
            || level.map_data.sectors[s1].specialdata.is_some()
        {
            continue;
        }
        let Some(&first_line) = level.map_data.sectors[s1].lines.first() else {
            continue;
        };
        let Some(s2) = get_next_sector(first_line, s1, level) else {
            continue;
        };

        for line in level.map_data.sectors[s2].lines.clone() {
            let Some(s3) = get_next_sector(line, s2, level) else {
                continue;
            };
            if s3 == s1 {
                continue;
            }
            activated = true;
            let dest = level.map_data.sectors[s3].floorheight;

            let ring = FloorMove {
                sector: s2,
                kind: FloorKind::DonutRaise,
                speed: FLOORSPEED / 2,
                crush: false,
                direction: 1,
                newspecial: 0,
                destheight: dest,
            };
            if let Ok(id) = level.thinkers.push(ThinkerData::FloorMove(ring)) {
                level.map_data.sectors[s2].specialdata = Some(id);
            }

            let hole = FloorMove {
                sector: s1,
                kind: FloorKind::LowerFloor,
                speed: FLOORSPEED / 2,
                crush: false,
                direction: -1,
                newspecial: 0,
                destheight: dest,
            };
            if let Ok(id) = level.thinkers.push(ThinkerData::FloorMove(hole)) {
                level.map_data.sectors[s1].specialdata = Some(id);
            }
            break;
        }
    }
    activated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::test_maps::two_room_map;
    use crate::level::{Level, LevelOptions};
    use crate::thinker::ThinkerAlloc;

    fn floor_level() -> Level {
        let mut raw = two_room_map();
        raw.sectors[1].floorheight = 64;
        raw.sectors[1].tag = 4;
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
    fn lower_floor_seeks_highest_neighbour() {
        let mut level = floor_level();
        assert!(ev_do_floor(4, FloorKind::LowerFloor, &mut level));
        run_ticks(&mut level, 70);
        // only neighbour is the west room at 0
        assert_eq!(level.map_data.sectors[1].floorheight, Fixed::ZERO);
        assert!(level.map_data.sectors[1].specialdata.is_none());
        assert_eq!(level.thinkers.len(), 0);
    }

    #[test]
    fn raise_floor_stops_at_lowest_surrounding_ceiling() {
        let mut level = floor_level();
        assert!(ev_do_floor(4, FloorKind::RaiseFloor, &mut level));
        run_ticks(&mut level, 70);
        assert_eq!(
            level.map_data.sectors[1].floorheight,
            Fixed::from_int(128)
        );
    }

    #[test]
    fn raise_24_is_relative_to_current_floor() {
        let mut level = floor_level();
        assert!(ev_do_floor(4, FloorKind::RaiseFloor24, &mut level));
        run_ticks(&mut level, 30);
        assert_eq!(level.map_data.sectors[1].floorheight, Fixed::from_int(88));
    }

    #[test]
    fn stairs_raise_the_first_step_by_stepsize() {
        let mut level = floor_level();
        assert!(ev_build_stairs(4, StairKind::Build8, &mut level));
        // quarter speed, 8 units
        run_ticks(&mut level, 40);
        assert_eq!(level.map_data.sectors[1].floorheight, Fixed::from_int(72));
        assert!(level.map_data.sectors[1].specialdata.is_none());
    }

    #[test]
    fn busy_sector_does_not_restart() {
        let mut level = floor_level();
        assert!(ev_do_floor(4, FloorKind::RaiseFloor24, &mut level));
        assert!(!ev_do_floor(4, FloorKind::RaiseFloor512, &mut level));
    }
}
