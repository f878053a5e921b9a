//! Shared mover machinery and the trigger dispatch tables.
//!
//! `move_plane` is the one function that actually changes a floor or
//! ceiling height; every mover thinker calls it with a direction and a
//! destination and reacts to the result. The `find_*` queries size movers
//! from the sectors around them, and `cross_special_line` /
//! `shoot_special_line` translate line special numbers into mover starts.

use log::{debug, error, trace, warn};
use math::{BBox, Fixed};
use sound_traits::SfxName;

use crate::defs::WorldError;
use crate::env::ceiling::{CeilingKind, ev_ceiling_crush_stop, ev_do_ceiling};
use crate::env::doors::{
    DoorKind, ev_do_door, spawn_door_close_in_30, spawn_door_raise_in_5_mins,
};
use crate::env::floor::{FloorKind, StairKind, ev_build_stairs, ev_do_floor};
use crate::env::lights::{
    FASTDARK, SLOWDARK, ev_start_light_strobing, ev_turn_light_on, ev_turn_tag_lights_off,
    spawn_fire_flicker, spawn_glow, spawn_light_flash, spawn_strobe_flash,
};
use crate::env::platforms::{PlatKind, ev_do_platform, ev_stop_platform};
use crate::env::switch::{ButtonWhere, change_switch_texture, start_line_sound};
use crate::env::teleport::teleport;
use crate::level::Level;
use crate::player::PlayerCheat;
use crate::thing::{MapObjFlag, MapObject, with_mobj};
use crate::thinker::ThinkerId;

/// Outcome of one `move_plane` step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PlaneResult {
    Ok,
    /// Something alive is pinched and the move was (or will be) resisted
    Crushed,
    /// The plane reached its destination this step
    PastDest,
}

/// The sector on the far side of a two-sided line, seen from `sector`
pub(crate) fn get_next_sector(line: usize, sector: usize, level: &Level) -> Option<usize> {
    let line = &level.map_data.linedefs[line];
    let back = line.backsector?;
    if line.frontsector == sector {
        Some(back)
    } else {
        Some(line.frontsector)
    }
}

pub(crate) fn find_lowest_floor_surrounding(sector: usize, level: &Level) -> Fixed {
    let mut floor = level.map_data.sectors[sector].floorheight;
    for i in 0..level.map_data.sectors[sector].lines.len() {
        let line = level.map_data.sectors[sector].lines[i];
        if let Some(other) = get_next_sector(line, sector, level) {
            floor = floor.min(level.map_data.sectors[other].floorheight);
        }
    }
    floor
}

pub(crate) fn find_highest_floor_surrounding(sector: usize, level: &Level) -> Fixed {
    let mut floor = Fixed::from_int(-500);
    for i in 0..level.map_data.sectors[sector].lines.len() {
        let line = level.map_data.sectors[sector].lines[i];
        if let Some(other) = get_next_sector(line, sector, level) {
            floor = floor.max(level.map_data.sectors[other].floorheight);
        }
    }
    floor
}

/// The lowest surrounding floor that is still above `height`, or `height`
/// when nothing around is higher
pub(crate) fn find_next_highest_floor(sector: usize, height: Fixed, level: &Level) -> Fixed {
    let mut next = Fixed::MAX;
    for i in 0..level.map_data.sectors[sector].lines.len() {
        let line = level.map_data.sectors[sector].lines[i];
        if let Some(other) = get_next_sector(line, sector, level) {
            let floor = level.map_data.sectors[other].floorheight;
            if floor > height && floor < next {
                next = floor;
            }
        }
    }
    if next == Fixed::MAX { height } else { next }
}

pub(crate) fn find_lowest_ceiling_surrounding(sector: usize, level: &Level) -> Fixed {
    let mut ceiling = Fixed::MAX;
    for i in 0..level.map_data.sectors[sector].lines.len() {
        let line = level.map_data.sectors[sector].lines[i];
        if let Some(other) = get_next_sector(line, sector, level) {
            ceiling = ceiling.min(level.map_data.sectors[other].ceilingheight);
        }
    }
    ceiling
}

pub(crate) fn find_highest_ceiling_surrounding(sector: usize, level: &Level) -> Fixed {
    let mut ceiling = Fixed::ZERO;
    for i in 0..level.map_data.sectors[sector].lines.len() {
        let line = level.map_data.sectors[sector].lines[i];
        if let Some(other) = get_next_sector(line, sector, level) {
            ceiling = ceiling.max(level.map_data.sectors[other].ceilingheight);
        }
    }
    ceiling
}

pub(crate) fn find_min_light_surrounding(sector: usize, max: i32, level: &Level) -> i32 {
    let mut min = max;
    for i in 0..level.map_data.sectors[sector].lines.len() {
        let line = level.map_data.sectors[sector].lines[i];
        if let Some(other) = get_next_sector(line, sector, level) {
            min = min.min(level.map_data.sectors[other].lightlevel);
        }
    }
    min
}

pub(crate) fn find_max_light_surrounding(sector: usize, min: i32, level: &Level) -> i32 {
    let mut max = min;
    for i in 0..level.map_data.sectors[sector].lines.len() {
        let line = level.map_data.sectors[sector].lines[i];
        if let Some(other) = get_next_sector(line, sector, level) {
            max = max.max(level.map_data.sectors[other].lightlevel);
        }
    }
    max
}

// Mover sounds are keyed per emitter; keep the synthetic uids clear of the
// thinker slot indexes that things use.
fn sector_sound_uid(sector: usize) -> usize {
    usize::MAX - sector
}

/// Start a sound at the middle of a sector's bounding box
pub(crate) fn sector_sound(sector: usize, sfx: SfxName, level: &Level) {
    let sec = &level.map_data.sectors[sector];
    if sec.lines.is_empty() {
        return;
    }
    let mut bbox = BBox::inverted();
    for &num in &sec.lines {
        let line = &level.map_data.linedefs[num];
        bbox.add(line.v1);
        bbox.add(line.v2);
    }
    let x = (bbox.left + bbox.right) >> 1;
    let y = (bbox.bottom + bbox.top) >> 1;
    level.start_sound(
        sfx,
        x.to_float() as f32,
        y.to_float() as f32,
        sector_sound_uid(sector),
    );
}

/// Re-fit every thing standing in the sector after its planes moved.
/// Returns true if anything no longer fits.
///
/// Doom function name is `P_ChangeSector`
pub(crate) fn change_sector(sector: usize, crush: bool, level: &mut Level) -> bool {
    let mut no_fit = false;
    // things may spawn blood or remove themselves while being crushed, so
    // walk a snapshot of the residency list
    let things: Vec<ThinkerId> = level.map_data.sectors[sector].thing_list.clone();
    for id in things {
        with_mobj(level, id, |thing, level| {
            thing.pit_change_sector(&mut no_fit, crush, level);
        });
    }
    no_fit
}

/// Move a floor or ceiling plane one speed step towards `dest`, crushing or
/// backing off according to what ends up pinched.
///
/// `floor_or_ceiling`: 0 moves the floor, 1 the ceiling. `direction` is -1
/// down, 1 up.
///
/// Doom function name is `T_MovePlane`
pub(crate) fn move_plane(
    sector: usize,
    speed: Fixed,
    dest: Fixed,
    crush: bool,
    floor_or_ceiling: i32,
    direction: i32,
    level: &mut Level,
) -> PlaneResult {
    let set_floor = |level: &mut Level, h: Fixed| level.map_data.sectors[sector].floorheight = h;
    let set_ceiling =
        |level: &mut Level, h: Fixed| level.map_data.sectors[sector].ceilingheight = h;

    if floor_or_ceiling == 0 {
        let last = level.map_data.sectors[sector].floorheight;
        if direction == -1 {
            if last - speed < dest {
                set_floor(level, dest);
                if change_sector(sector, crush, level) {
                    set_floor(level, last);
                    change_sector(sector, crush, level);
                }
                return PlaneResult::PastDest;
            }
            set_floor(level, last - speed);
            if change_sector(sector, crush, level) {
                set_floor(level, last);
                change_sector(sector, crush, level);
                return PlaneResult::Crushed;
            }
        } else {
            if last + speed > dest {
                set_floor(level, dest);
                if change_sector(sector, crush, level) {
                    set_floor(level, last);
                    change_sector(sector, crush, level);
                }
                return PlaneResult::PastDest;
            }
            set_floor(level, last + speed);
            if change_sector(sector, crush, level) {
                if crush {
                    return PlaneResult::Crushed;
                }
                set_floor(level, last);
                change_sector(sector, crush, level);
                return PlaneResult::Crushed;
            }
        }
    } else {
        let last = level.map_data.sectors[sector].ceilingheight;
        if direction == -1 {
            if last - speed < dest {
                set_ceiling(level, dest);
                if change_sector(sector, crush, level) {
                    set_ceiling(level, last);
                    change_sector(sector, crush, level);
                }
                return PlaneResult::PastDest;
            }
            set_ceiling(level, last - speed);
            if change_sector(sector, crush, level) {
                if crush {
                    return PlaneResult::Crushed;
                }
                set_ceiling(level, last);
                change_sector(sector, crush, level);
                return PlaneResult::Crushed;
            }
        } else {
            if last + speed > dest {
                set_ceiling(level, dest);
                if change_sector(sector, crush, level) {
                    set_ceiling(level, last);
                    change_sector(sector, crush, level);
                }
                return PlaneResult::PastDest;
            }
            set_ceiling(level, last + speed);
            change_sector(sector, crush, level);
        }
    }
    PlaneResult::Ok
}

/// A thing walked over a special line.
///
/// Doom function name is `P_CrossSpecialLine`
pub(crate) fn cross_special_line(
    old_side: usize,
    line_num: usize,
    thing: &mut MapObject,
    level: &mut Level,
) {
    let special = level.map_data.linedefs[line_num].special;
    let tag = level.map_data.linedefs[line_num].tag;

    if thing.player.is_none() {
        if thing.flags & MapObjFlag::Missile as u32 != 0 {
            return;
        }
        // monsters may only trip a handful of walk-overs
        if !matches!(special, 4 | 10 | 39 | 88 | 97 | 125 | 126) {
            return;
        }
    }

    debug!("line-cross special {special} on line {line_num}");

    // Triggers that fire once and blank the special
    let mut once = true;
    match special {
        2 => {
            ev_do_door(tag, DoorKind::Open, level);
        }
        3 => {
            ev_do_door(tag, DoorKind::Close, level);
        }
        4 => {
            ev_do_door(tag, DoorKind::Normal, level);
        }
        5 => {
            ev_do_floor(tag, FloorKind::RaiseFloor, level);
        }
        6 => {
            ev_do_ceiling(tag, CeilingKind::FastCrushAndRaise, level);
        }
        8 => {
            ev_build_stairs(tag, StairKind::Build8, level);
        }
        10 => {
            ev_do_platform(tag, PlatKind::DownWaitUpStay, 0, level);
        }
        12 => {
            ev_turn_light_on(tag, 0, level);
        }
        13 => {
            ev_turn_light_on(tag, 255, level);
        }
        16 => {
            ev_do_door(tag, DoorKind::Close30ThenOpen, level);
        }
        17 => {
            ev_start_light_strobing(tag, level);
        }
        19 => {
            ev_do_floor(tag, FloorKind::LowerFloor, level);
        }
        22 => {
            ev_do_platform(tag, PlatKind::RaiseToNearestAndChange, 0, level);
        }
        25 => {
            ev_do_ceiling(tag, CeilingKind::CrushAndRaise, level);
        }
        30 | 58 | 59 => {
            ev_do_floor(tag, FloorKind::RaiseFloor24, level);
        }
        35 => {
            ev_turn_tag_lights_off(tag, level);
        }
        36 => {
            ev_do_floor(tag, FloorKind::TurboLower, level);
        }
        37 => {
            ev_do_floor(tag, FloorKind::LowerAndChange, level);
        }
        38 => {
            ev_do_floor(tag, FloorKind::LowerFloorToLowest, level);
        }
        39 => {
            teleport(line_num, old_side, thing, level);
        }
        40 => {
            ev_do_ceiling(tag, CeilingKind::RaiseToHighest, level);
        }
        44 => {
            ev_do_ceiling(tag, CeilingKind::LowerAndCrush, level);
        }
        52 => {
            level.do_exit_level();
        }
        53 => {
            ev_do_platform(tag, PlatKind::PerpetualRaise, 0, level);
        }
        54 => {
            ev_stop_platform(tag, level);
        }
        56 => {
            ev_do_floor(tag, FloorKind::RaiseFloorCrush, level);
        }
        57 => {
            ev_ceiling_crush_stop(tag, level);
        }
        100 => {
            ev_build_stairs(tag, StairKind::Turbo16, level);
        }
        104 => {
            let min = {
                let sector = level.map_data.linedefs[line_num].frontsector;
                find_min_light_surrounding(sector, level.map_data.sectors[sector].lightlevel, level)
            };
            ev_turn_light_on(tag, min, level);
        }
        108 => {
            ev_do_door(tag, DoorKind::BlazeRaise, level);
        }
        109 => {
            ev_do_door(tag, DoorKind::BlazeOpen, level);
        }
        110 => {
            ev_do_door(tag, DoorKind::BlazeClose, level);
        }
        119 => {
            ev_do_floor(tag, FloorKind::RaiseFloorToNearest, level);
        }
        121 => {
            ev_do_platform(tag, PlatKind::BlazeDWUS, 0, level);
        }
        124 => {
            level.do_secret_exit_level();
        }
        125 => {
            if thing.player.is_none() {
                teleport(line_num, old_side, thing, level);
            }
        }
        130 => {
            ev_do_floor(tag, FloorKind::RaiseFloorTurbo, level);
        }
        141 => {
            ev_do_ceiling(tag, CeilingKind::SilentCrushAndRaise, level);
        }
        _ => once = false,
    }
    if once {
        level.map_data.linedefs[line_num].special = 0;
        return;
    }

    // Retriggerable walk-overs
    match special {
        72 => {
            ev_do_ceiling(tag, CeilingKind::LowerAndCrush, level);
        }
        73 => {
            ev_do_ceiling(tag, CeilingKind::CrushAndRaise, level);
        }
        74 => {
            ev_ceiling_crush_stop(tag, level);
        }
        75 => {
            ev_do_door(tag, DoorKind::Close, level);
        }
        76 => {
            ev_do_door(tag, DoorKind::Close30ThenOpen, level);
        }
        77 => {
            ev_do_ceiling(tag, CeilingKind::FastCrushAndRaise, level);
        }
        79 => {
            ev_turn_tag_lights_off(tag, level);
        }
        80 => {
            ev_turn_light_on(tag, 0, level);
        }
        81 => {
            ev_turn_light_on(tag, 255, level);
        }
        82 => {
            ev_do_floor(tag, FloorKind::LowerFloorToLowest, level);
        }
        83 => {
            ev_do_floor(tag, FloorKind::LowerFloor, level);
        }
        84 => {
            ev_do_floor(tag, FloorKind::LowerAndChange, level);
        }
        86 => {
            ev_do_door(tag, DoorKind::Open, level);
        }
        87 => {
            ev_do_platform(tag, PlatKind::PerpetualRaise, 0, level);
        }
        88 => {
            ev_do_platform(tag, PlatKind::DownWaitUpStay, 0, level);
        }
        89 => {
            ev_stop_platform(tag, level);
        }
        90 => {
            ev_do_door(tag, DoorKind::Normal, level);
        }
        91 => {
            ev_do_floor(tag, FloorKind::RaiseFloor, level);
        }
        92 | 93 | 96 => {
            ev_do_floor(tag, FloorKind::RaiseFloor24, level);
        }
        94 => {
            ev_do_floor(tag, FloorKind::RaiseFloorCrush, level);
        }
        95 => {
            ev_do_platform(tag, PlatKind::RaiseToNearestAndChange, 0, level);
        }
        97 => {
            teleport(line_num, old_side, thing, level);
        }
        98 => {
            ev_do_floor(tag, FloorKind::TurboLower, level);
        }
        105 => {
            ev_do_door(tag, DoorKind::BlazeRaise, level);
        }
        106 => {
            ev_do_door(tag, DoorKind::BlazeOpen, level);
        }
        107 => {
            ev_do_door(tag, DoorKind::BlazeClose, level);
        }
        120 => {
            ev_do_platform(tag, PlatKind::BlazeDWUS, 0, level);
        }
        126 => {
            if thing.player.is_none() {
                teleport(line_num, old_side, thing, level);
            }
        }
        128 => {
            ev_do_floor(tag, FloorKind::RaiseFloorToNearest, level);
        }
        129 => {
            ev_do_floor(tag, FloorKind::RaiseFloorTurbo, level);
        }
        _ => trace!("no walk-over handler for special {special}"),
    }
}

/// A shot landed on a special line.
///
/// Doom function name is `P_ShootSpecialLine`
pub(crate) fn shoot_special_line(line_num: usize, shooter: &mut MapObject, level: &mut Level) {
    let special = level.map_data.linedefs[line_num].special;
    let tag = level.map_data.linedefs[line_num].tag;

    // monsters may only shoot the door-open trigger
    if shooter.player.is_none() && special != 46 {
        return;
    }

    match special {
        24 => {
            if ev_do_floor(tag, FloorKind::RaiseFloor, level) {
                change_switch_texture(line_num, false, level);
            }
        }
        46 => {
            if ev_do_door(tag, DoorKind::Open, level) {
                change_switch_texture(line_num, true, level);
            }
        }
        47 => {
            if ev_do_platform(tag, PlatKind::RaiseToNearestAndChange, 0, level) {
                change_switch_texture(line_num, false, level);
            }
        }
        _ => {}
    }
}

/// Start the thinkers the sector specials ask for at level load.
///
/// Doom function name is `P_SpawnSpecials`
pub fn spawn_specials(level: &mut Level) -> Result<(), WorldError> {
    for i in 0..level.map_data.sectors.len() {
        let special = level.map_data.sectors[i].special;
        match special {
            0 => {}
            1 => {
                spawn_light_flash(i, level)?;
                level.map_data.sectors[i].special = 0;
            }
            2 => {
                spawn_strobe_flash(i, FASTDARK, false, level)?;
                level.map_data.sectors[i].special = 0;
            }
            3 => {
                spawn_strobe_flash(i, SLOWDARK, false, level)?;
                level.map_data.sectors[i].special = 0;
            }
            // strobes and damages at the same time, so the special stays
            4 => {
                spawn_strobe_flash(i, FASTDARK, false, level)?;
            }
            // damage floors act on whoever stands in them each tick
            5 | 7 | 11 | 16 => {}
            8 => {
                spawn_glow(i, level)?;
                level.map_data.sectors[i].special = 0;
            }
            9 => {
                level.totalsecret += 1;
            }
            10 => {
                spawn_door_close_in_30(i, level)?;
            }
            12 => {
                spawn_strobe_flash(i, SLOWDARK, true, level)?;
                level.map_data.sectors[i].special = 0;
            }
            13 => {
                spawn_strobe_flash(i, FASTDARK, true, level)?;
                level.map_data.sectors[i].special = 0;
            }
            14 => {
                spawn_door_raise_in_5_mins(i, level)?;
            }
            17 => {
                spawn_fire_flicker(i, level)?;
                level.map_data.sectors[i].special = 0;
            }
            s => {
                error!("sector {i} has unknown special {s}");
                return Err(WorldError::UnknownSectorSpecial {
                    sector: i,
                    special: s,
                });
            }
        }
    }
    Ok(())
}

/// Per-tick upkeep of the non-thinker specials: pop pressed switches back
/// out after their timer runs down.
///
/// Doom function name is `P_UpdateSpecials`
pub fn update_specials(level: &mut Level) {
    for i in 0..level.button_list.len() {
        if level.button_list[i].timer == 0 {
            continue;
        }
        level.button_list[i].timer -= 1;
        if level.button_list[i].timer > 0 {
            continue;
        }
        let button = level.button_list[i];
        let side = level.map_data.linedefs[button.line].front_sidedef;
        match button.bwhere {
            ButtonWhere::Top => level.map_data.sidedefs[side].toptexture = button.texture,
            ButtonWhere::Middle => level.map_data.sidedefs[side].midtexture = button.texture,
            ButtonWhere::Bottom => level.map_data.sidedefs[side].bottomtexture = button.texture,
        }
        start_line_sound(button.line, SfxName::Swtchn, level);
    }
}

/// Apply whatever the sector under the player's feet does to them: damage
/// floors, secret counting, and the damaging exit floor.
///
/// Doom function name is `P_PlayerInSpecialSector`
pub(crate) fn player_in_special_sector(slot: usize, level: &mut Level) {
    let Some(id) = level.players[slot].mobj else {
        return;
    };
    let (sector, z) = match level.thinkers.mobj(id) {
        Some(mobj) => (level.map_data.subsectors[mobj.subsector].sector, mobj.z),
        None => return,
    };
    if level.map_data.sectors[sector].special == 0 {
        return;
    }
    // only while actually standing on the floor
    if z != level.map_data.sectors[sector].floorheight {
        return;
    }

    let god = level.players[slot].cheats & PlayerCheat::Godmode as u32 != 0;
    let cadence = level.level_time & 0x1f == 0;
    let special = level.map_data.sectors[sector].special;
    match special {
        5 => {
            if !god && cadence {
                hurt_player(id, 10, level);
            }
        }
        7 => {
            if !god && cadence {
                hurt_player(id, 5, level);
            }
        }
        16 | 4 => {
            if !god && cadence {
                hurt_player(id, 20, level);
            }
        }
        9 => {
            level.players[slot].secretcount += 1;
            level.map_data.sectors[sector].special = 0;
        }
        11 => {
            // the exit floor revokes godhood, then ends the level
            level.players[slot].cheats &= !(PlayerCheat::Godmode as u32);
            if cadence {
                hurt_player(id, 20, level);
            }
            if level.players[slot].health <= 10 {
                level.do_exit_level();
            }
        }
        s => {
            warn!("stood in sector {sector} with unhandled special {s}");
        }
    }
}

fn hurt_player(id: ThinkerId, damage: i32, level: &mut Level) {
    with_mobj(level, id, |mobj, level| {
        mobj.take_damage(None, None, false, damage, level);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::test_maps::two_room_map;
    use crate::level::{Level, LevelOptions};

    fn level_from(raw: crate::level::map_data::RawMapData) -> Level {
        let (tx, _rx) = std::sync::mpsc::channel();
        Level::new(LevelOptions::default(), raw, tx).unwrap()
    }

    #[test]
    fn next_sector_crosses_the_shared_line() {
        let level = level_from(two_room_map());
        // line 6 is the shared two-sided line
        assert_eq!(get_next_sector(6, 0, &level), Some(1));
        assert_eq!(get_next_sector(6, 1, &level), Some(0));
        // a solid wall has no far side
        assert_eq!(get_next_sector(0, 0, &level), None);
    }

    #[test]
    fn surrounding_queries_track_neighbour_heights() {
        let mut raw = two_room_map();
        raw.sectors[1].floorheight = 64;
        raw.sectors[1].ceilingheight = 96;
        let level = level_from(raw);

        assert_eq!(
            find_highest_floor_surrounding(0, &level),
            Fixed::from_int(64)
        );
        assert_eq!(find_lowest_floor_surrounding(0, &level), Fixed::ZERO);
        assert_eq!(
            find_lowest_ceiling_surrounding(0, &level),
            Fixed::from_int(96)
        );
        assert_eq!(
            find_next_highest_floor(0, Fixed::ZERO, &level),
            Fixed::from_int(64)
        );
        // nothing above 64 around sector 0
        assert_eq!(
            find_next_highest_floor(0, Fixed::from_int(64), &level),
            Fixed::from_int(64)
        );
    }

    #[test]
    fn move_plane_stops_exactly_at_dest() {
        let mut level = level_from(two_room_map());
        let dest = Fixed::from_int(24);
        let speed = Fixed::from_int(10);
        let mut steps = 0;
        loop {
            let res = move_plane(0, speed, dest, false, 0, 1, &mut level);
            steps += 1;
            if res == PlaneResult::PastDest {
                break;
            }
            assert!(steps < 10, "mover never arrived");
        }
        assert_eq!(level.map_data.sectors[0].floorheight, dest);
        assert_eq!(steps, 3);
    }

    #[test]
    fn unknown_sector_special_is_a_setup_error() {
        let mut raw = two_room_map();
        raw.sectors[1].special = 200;
        let mut level = level_from(raw);
        assert!(spawn_specials(&mut level).is_err());
    }

    #[test]
    fn secret_sectors_are_counted_at_spawn() {
        let mut raw = two_room_map();
        raw.sectors[1].special = 9;
        let mut level = level_from(raw);
        spawn_specials(&mut level).unwrap();
        assert_eq!(level.totalsecret, 1);
    }
}
