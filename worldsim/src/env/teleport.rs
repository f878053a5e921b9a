//! Teleporters. A crossed teleport line moves the thing to the landing
//! marker in the tagged sector, stomping whatever stood there.

use log::warn;
use math::{Fixed, Vec2};
use sound_traits::SfxName;

use crate::info::MapObjKind;
use crate::level::Level;
use crate::thing::{MapObjFlag, MapObject, with_mobj};

/// Doom function name is `EV_Teleport`
pub(crate) fn teleport(
    line_num: usize,
    side: usize,
    thing: &mut MapObject,
    level: &mut Level,
) -> bool {
    // missiles stay in flight, and stepping backwards out of the exit side
    // must not bounce the thing straight back
    if thing.flags & MapObjFlag::Missile as u32 != 0 || side == 1 {
        return false;
    }

    let tag = level.map_data.linedefs[line_num].tag;
    let Some(dest) = landing_spot(tag, level) else {
        warn!("teleport line {line_num} has no landing marker for tag {tag}");
        return false;
    };
    let (dest_xy, dest_z, dest_angle) = dest;

    let old_xy = thing.xy;
    let old_z = thing.z;

    if !thing.teleport_move(dest_xy, level) {
        return false;
    }
    thing.z = dest_z;
    if let Some(slot) = thing.player {
        level.players[slot].viewz = thing.z + level.players[slot].viewheight;
    }

    // fog at both ends of the trip
    spawn_fog(old_xy, old_z, level);
    let front = dest_xy + dest_angle.unit() * Fixed::from_int(20);
    spawn_fog(front, thing.z, level);

    if thing.player.is_some() {
        // freeze the player briefly so the exit is not crossed instantly
        thing.reactiontime = 18;
    }
    thing.angle = dest_angle;
    thing.momxy = Vec2::ZERO;
    thing.momz = Fixed::ZERO;
    true
}

/// Find the teleport landing in the first sector with this tag
fn landing_spot(tag: i16, level: &Level) -> Option<(Vec2, Fixed, math::Angle)> {
    for sector in 0..level.map_data.sectors.len() {
        if level.map_data.sectors[sector].tag != tag {
            continue;
        }
        for (_, data) in level.thinkers.iter() {
            let Some(mobj) = data.mobj() else {
                continue;
            };
            if mobj.kind != MapObjKind::Teleportman {
                continue;
            }
            if level.map_data.subsectors[mobj.subsector].sector != sector {
                continue;
            }
            return Some((mobj.xy, mobj.z, mobj.angle));
        }
    }
    None
}

fn spawn_fog(xy: Vec2, z: Fixed, level: &mut Level) {
    if let Ok(id) = MapObject::spawn_map_object(xy.x, xy.y, z, MapObjKind::TeleportFog, level) {
        with_mobj(level, id, |fog, level| {
            fog.start_sound(level, SfxName::Telept);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::test_maps::two_room_map;
    use crate::level::{Level, LevelOptions};

    fn teleport_level() -> Level {
        let mut raw = two_room_map();
        raw.sectors[1].tag = 97;
        raw.linedefs[6].special = 39;
        raw.linedefs[6].tag = 97;
        let (tx, _rx) = std::sync::mpsc::channel();
        let mut level = Level::new(LevelOptions::default(), raw, tx).unwrap();
        // landing marker in the middle of the east room
        MapObject::spawn_map_object(
            Fixed::from_int(384),
            Fixed::from_int(128),
            crate::defs::ONFLOORZ,
            MapObjKind::Teleportman,
            &mut level,
        )
        .unwrap();
        level
    }

    fn spawn_rider(level: &mut Level) -> crate::thinker::ThinkerId {
        MapObject::spawn_map_object(
            Fixed::from_int(128),
            Fixed::from_int(128),
            crate::defs::ONFLOORZ,
            MapObjKind::Troop,
            level,
        )
        .unwrap()
    }

    #[test]
    fn thing_lands_on_the_marker_with_cleared_momentum() {
        let mut level = teleport_level();
        let id = spawn_rider(&mut level);

        let moved = with_mobj(&mut level, id, |mobj, level| {
            mobj.momxy = Vec2::from_ints(4, 0);
            teleport(6, 0, mobj, level)
        })
        .unwrap();
        assert!(moved);

        let mobj = level.thinkers.mobj(id).unwrap();
        assert_eq!(mobj.xy, Vec2::from_ints(384, 128));
        assert!(mobj.momxy.is_zero());
    }

    #[test]
    fn back_side_crossing_does_not_teleport() {
        let mut level = teleport_level();
        let id = spawn_rider(&mut level);
        let moved =
            with_mobj(&mut level, id, |mobj, level| teleport(6, 1, mobj, level)).unwrap();
        assert!(!moved);
    }

    #[test]
    fn teleport_fails_without_a_landing() {
        let mut level = teleport_level();
        // retag the line away from any marker
        level.map_data.linedefs[6].tag = 5;
        let id = spawn_rider(&mut level);
        let moved =
            with_mobj(&mut level, id, |mobj, level| teleport(6, 0, mobj, level)).unwrap();
        assert!(!moved);
    }
}
