//! Line of sight checks and monster sound propagation. Sight walks the BSP
//! from shooter to target, narrowing the vertical view slot at every
//! two-sided line crossed. Sound floods outward through sector openings.

use math::{DivLine, Fixed, Vec2, intercept_vector};

use crate::level::Level;
use crate::level::map_defs::{IS_SSECTOR_MASK, LineDefFlags};
use crate::pathtrace::PortalZ;
use crate::thing::MapObject;
use crate::thinker::ThinkerId;

struct SightCheck {
    /// Eye height of the looker, world z
    sight_z_start: Fixed,
    /// Upper bound of the clear slot, as slope over distance
    top_slope: Fixed,
    /// Lower bound of the clear slot
    bottom_slope: Fixed,
    trace: DivLine,
    target: Vec2,
}

/// Can `actor` see the span from `to_z` to `to_z + to_height` at `to_xy`?
/// The eye sits at three quarters of the actor's height.
///
/// Doom function name is `P_CheckSight`
pub fn check_sight(
    actor: &MapObject,
    to_xy: Vec2,
    to_z: Fixed,
    to_height: Fixed,
    level: &mut Level,
) -> bool {
    let sight_z_start = actor.z + actor.height - (actor.height >> 2);
    let mut check = SightCheck {
        sight_z_start,
        top_slope: to_z + to_height - sight_z_start,
        bottom_slope: to_z - sight_z_start,
        trace: DivLine::from_points(actor.xy, to_xy),
        target: to_xy,
    };
    level.bump_valid_count();
    let start = level.map_data.start_node();
    check.cross_bsp_node(level, start)
}

/// Reject-table lookup first, then the BSP walk
pub fn check_sight_to(level: &mut Level, actor: &MapObject, target: ThinkerId) -> bool {
    let Some(target) = level.thinkers.mobj(target) else {
        return false;
    };
    let s1 = level.map_data.subsectors[actor.subsector].sector;
    let s2 = level.map_data.subsectors[target.subsector].sector;
    if level.map_data.rejected(s1, s2) {
        return false;
    }
    let (xy, z, height) = (target.xy, target.z, target.height);
    check_sight(actor, xy, z, height, level)
}

impl SightCheck {
    fn cross_bsp_node(&mut self, level: &mut Level, node_id: u32) -> bool {
        if node_id & IS_SSECTOR_MASK != 0 {
            return self.cross_subsector(level, (node_id & !IS_SSECTOR_MASK) as usize);
        }
        let node = level.map_data.nodes[node_id as usize];
        let side = node.point_on_side(self.trace.xy);
        if !self.cross_bsp_node(level, node.children[side]) {
            return false;
        }
        if node.point_on_side(self.target) == side {
            return true;
        }
        self.cross_bsp_node(level, node.children[side ^ 1])
    }

    fn cross_subsector(&mut self, level: &mut Level, subsector: usize) -> bool {
        let ss = level.map_data.subsectors[subsector];
        let start = ss.start_seg as usize;
        let end = start + ss.seg_count as usize;

        for seg_idx in start..end {
            let seg = level.map_data.segments[seg_idx].clone();
            let line_num = seg.linedef;
            {
                let line = &mut level.map_data.linedefs[line_num];
                if line.validcount == level.valid_count {
                    continue;
                }
                line.validcount = level.valid_count;
            }
            let line = &level.map_data.linedefs[line_num];

            // Does the trace cross this line segment at all
            if self.trace.point_on_side(line.v1) == self.trace.point_on_side(line.v2) {
                continue;
            }
            let divl = line.as_divline();
            if divl.point_on_side(self.trace.xy) == divl.point_on_side(self.target) {
                continue;
            }

            if line.flags & LineDefFlags::TwoSided as u32 == 0 {
                return false;
            }

            let front = &level.map_data.sectors[seg.frontsector];
            let back = match seg.backsector {
                Some(b) => &level.map_data.sectors[b],
                None => return false,
            };
            // No wall to step over and nothing hanging down
            if front.floorheight == back.floorheight
                && front.ceilingheight == back.ceilingheight
            {
                continue;
            }

            let opening = PortalZ::new(line, &level.map_data.sectors);
            if opening.range <= Fixed::ZERO {
                return false;
            }

            let frac = intercept_vector(self.trace, divl);
            if front.floorheight != back.floorheight {
                let slope = (opening.bottom_z - self.sight_z_start) / frac;
                if slope > self.bottom_slope {
                    self.bottom_slope = slope;
                }
            }
            if front.ceilingheight != back.ceilingheight {
                let slope = (opening.top_z - self.sight_z_start) / frac;
                if slope < self.top_slope {
                    self.top_slope = slope;
                }
            }
            if self.top_slope <= self.bottom_slope {
                return false;
            }
        }
        true
    }
}

/// Make `target` the noise maker heard throughout every sector sound can
/// reach from `emitter_sector`. Sound crosses open two-sided lines freely
/// and gets one hop through a sound-blocking line.
///
/// Doom function name is `P_NoiseAlert`
pub fn noise_alert(level: &mut Level, target: ThinkerId, emitter_sector: usize) {
    level.bump_valid_count();
    recursive_sound(level, target, emitter_sector, 0);
}

fn recursive_sound(level: &mut Level, target: ThinkerId, sector: usize, soundblocks: i32) {
    {
        let sec = &mut level.map_data.sectors[sector];
        if sec.validcount == level.valid_count && sec.soundtraversed <= soundblocks + 1 {
            return;
        }
        sec.validcount = level.valid_count;
        sec.soundtraversed = soundblocks + 1;
        sec.sound_target = Some(target);
    }

    for i in 0..level.map_data.sectors[sector].lines.len() {
        let line_num = level.map_data.sectors[sector].lines[i];
        let line = &level.map_data.linedefs[line_num];
        if line.flags & LineDefFlags::TwoSided as u32 == 0 {
            continue;
        }
        let opening = PortalZ::new(line, &level.map_data.sectors);
        if opening.range <= Fixed::ZERO {
            continue;
        }
        let other = if line.frontsector == sector {
            match line.backsector {
                Some(b) => b,
                None => continue,
            }
        } else {
            line.frontsector
        };
        if line.flags & LineDefFlags::BlockSound as u32 != 0 {
            if soundblocks == 0 {
                recursive_sound(level, target, other, 1);
            }
        } else {
            recursive_sound(level, target, other, soundblocks);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defs::ONFLOORZ;
    use crate::info::MapObjKind;
    use crate::level::map_data::RawMapData;
    use crate::level::test_maps::two_room_map;
    use crate::level::{Level, LevelOptions};
    use crate::thing::with_mobj;

    fn level_from(raw: RawMapData) -> Level {
        let (tx, _rx) = std::sync::mpsc::channel();
        Level::new(LevelOptions::default(), raw, tx).unwrap()
    }

    fn spawn_east(level: &mut Level) -> ThinkerId {
        MapObject::spawn_map_object(
            Fixed::from_int(310),
            Fixed::from_int(128),
            ONFLOORZ,
            MapObjKind::Troop,
            level,
        )
        .unwrap()
    }

    fn sees_west_room(level: &mut Level, id: ThinkerId) -> bool {
        with_mobj(level, id, |mobj, level| {
            check_sight(
                mobj,
                Vec2::from_ints(64, 128),
                Fixed::ZERO,
                Fixed::from_int(56),
                level,
            )
        })
        .unwrap()
    }

    #[test]
    fn open_rooms_are_visible_across_the_shared_line() {
        let mut level = level_from(two_room_map());
        let id = spawn_east(&mut level);
        assert!(sees_west_room(&mut level, id));
    }

    #[test]
    fn a_shut_ceiling_blocks_sight() {
        let mut raw = two_room_map();
        raw.sectors[0].ceilingheight = 0;
        let mut level = level_from(raw);
        let id = spawn_east(&mut level);
        assert!(!sees_west_room(&mut level, id));
    }

    #[test]
    fn noise_floods_into_the_next_room_through_the_opening() {
        let mut level = level_from(two_room_map());
        let id = spawn_east(&mut level);
        let east = level.map_data.subsectors[1].sector;
        noise_alert(&mut level, id, east);
        assert_eq!(level.map_data.sectors[0].sound_target, Some(id));
        assert_eq!(level.map_data.sectors[1].sound_target, Some(id));
    }

    #[test]
    fn noise_stops_at_a_shut_opening() {
        let mut raw = two_room_map();
        raw.sectors[0].ceilingheight = 0;
        let mut level = level_from(raw);
        let id = spawn_east(&mut level);
        let east = level.map_data.subsectors[1].sector;
        noise_alert(&mut level, id, east);
        assert_eq!(level.map_data.sectors[0].sound_target, None);
    }
}
