//! Switch and button handling, plus the dispatch for lines activated by
//! pressing use on them.
//!
//! Switch faces come in texture pairs with adjacent ids, so pressing one
//! flips the lowest bit of the texture number and pressing again (or the
//! button timer) flips it back. Which ids are switch faces at all comes
//! from the registered list in [`LevelOptions`](crate::level::LevelOptions);
//! ordinary wall textures on the same sidedef are left alone.

use log::{debug, error, warn};
use sound_traits::SfxName;

use crate::defs::{BUTTONTIME, Card, MAX_BUTTONS};
use crate::env::ceiling::{CeilingKind, ev_ceiling_crush_stop, ev_do_ceiling};
use crate::env::doors::{DoorKind, ev_do_door, ev_vertical_door};
use crate::env::floor::{
    FloorKind, StairKind, ev_build_stairs, ev_do_donut, ev_do_floor,
};
use crate::env::lights::ev_turn_light_on;
use crate::env::platforms::{PlatKind, ev_do_platform};
use crate::lang::english::{PD_BLUEO, PD_REDO, PD_YELLOWO};
use crate::level::Level;
use crate::level::map_defs::LineDefFlags;
use crate::thing::MapObject;

/// Which texture slot of the front sidedef holds the switch face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonWhere {
    Top,
    Middle,
    Bottom,
}

/// A pressed switch waiting to pop back out
#[derive(Debug, Clone, Copy)]
pub struct Button {
    pub(crate) line: usize,
    pub(crate) bwhere: ButtonWhere,
    /// Texture to restore when the timer expires
    pub(crate) texture: i16,
    /// Remaining tics; 0 marks a free slot
    pub(crate) timer: i32,
}

/// Play a sound from the middle of a line
pub(crate) fn start_line_sound(line: usize, sfx: SfxName, level: &Level) {
    let l = &level.map_data.linedefs[line];
    let x = (l.v1.x + l.v2.x) >> 1;
    let y = (l.v1.y + l.v2.y) >> 1;
    level.start_sound(
        sfx,
        x.to_float() as f32,
        y.to_float() as f32,
        usize::MAX / 2 - line,
    );
}

fn start_button(line: usize, bwhere: ButtonWhere, texture: i16, level: &mut Level) {
    // already waiting to pop back out
    if level
        .button_list
        .iter()
        .any(|b| b.timer != 0 && b.line == line)
    {
        return;
    }

    let button = Button {
        line,
        bwhere,
        texture,
        timer: BUTTONTIME,
    };
    if let Some(slot) = level.button_list.iter_mut().find(|b| b.timer == 0) {
        *slot = button;
        return;
    }
    if level.button_list.len() >= MAX_BUTTONS {
        error!("No button slots left for line {line}");
        return;
    }
    level.button_list.push(button);
}

/// Flip the switch face on a line's front side. A reusable switch also
/// registers a button so the face flips back after `BUTTONTIME`.
pub(crate) fn change_switch_texture(line_num: usize, use_again: bool, level: &mut Level) {
    let mut sfx = SfxName::Swtchn;
    if !use_again {
        level.map_data.linedefs[line_num].special = 0;
        // exit switches never come back
        sfx = SfxName::Swtchx;
    }

    let side = level.map_data.linedefs[line_num].front_sidedef;
    let sidedef = &level.map_data.sidedefs[side];
    // only a registered switch face flips, whichever slot holds it
    let bwhere = if sidedef.toptexture > 0 && level.switch_list.contains(&sidedef.toptexture) {
        Some(ButtonWhere::Top)
    } else if sidedef.midtexture > 0 && level.switch_list.contains(&sidedef.midtexture) {
        Some(ButtonWhere::Middle)
    } else if sidedef.bottomtexture > 0 && level.switch_list.contains(&sidedef.bottomtexture) {
        Some(ButtonWhere::Bottom)
    } else {
        None
    };
    let flipped = bwhere.map(|bwhere| {
        let sidedef = &mut level.map_data.sidedefs[side];
        let old = match bwhere {
            ButtonWhere::Top => {
                sidedef.toptexture ^= 1;
                sidedef.toptexture ^ 1
            }
            ButtonWhere::Middle => {
                sidedef.midtexture ^= 1;
                sidedef.midtexture ^ 1
            }
            ButtonWhere::Bottom => {
                sidedef.bottomtexture ^= 1;
                sidedef.bottomtexture ^ 1
            }
        };
        (bwhere, old)
    });

    start_line_sound(line_num, sfx, level);
    match flipped {
        Some((bwhere, texture)) if use_again => {
            start_button(line_num, bwhere, texture, level);
        }
        Some(_) => {}
        None => warn!("switch line {line_num} has no registered switch face"),
    }
}

fn locked_door_switch(
    line_num: usize,
    thing: &mut MapObject,
    level: &mut Level,
) -> bool {
    let special = level.map_data.linedefs[line_num].special;
    let Some(slot) = thing.player else {
        return false;
    };

    let missing = |cards: &[bool], a: Card, b: Card| !cards[a as usize] && !cards[b as usize];
    let cards = &level.players[slot].cards;
    let refused = match special {
        99 | 133 => missing(cards, Card::Bluecard, Card::Blueskull).then_some(PD_BLUEO),
        134 | 135 => missing(cards, Card::Redcard, Card::Redskull).then_some(PD_REDO),
        136 | 137 => missing(cards, Card::Yellowcard, Card::Yellowskull).then_some(PD_YELLOWO),
        _ => return false,
    };
    if let Some(message) = refused {
        level.players[slot].message = Some(message);
        thing.start_sound(level, SfxName::Oof);
        return true;
    }

    let tag = level.map_data.linedefs[line_num].tag;
    if ev_do_door(tag, DoorKind::BlazeOpen, level) {
        // 99, 134 and 136 are the repeatable variants
        change_switch_texture(line_num, matches!(special, 99 | 134 | 136), level);
    }
    true
}

/// A use press arrived on this line. Returns true when the line did
/// something with it (including a refused locked switch).
///
/// Doom function name is `P_UseSpecialLine`
pub(crate) fn use_special_line(
    side: usize,
    line_num: usize,
    thing: &mut MapObject,
    level: &mut Level,
) -> bool {
    // the back of a switch is just wall
    if side != 0 {
        return false;
    }

    let special = level.map_data.linedefs[line_num].special;
    let tag = level.map_data.linedefs[line_num].tag;

    if thing.player.is_none() {
        // monsters only ever open the plain manual doors
        if level.map_data.linedefs[line_num].flags & LineDefFlags::Secret as u32 != 0 {
            return false;
        }
        if !matches!(special, 1 | 32 | 33 | 34) {
            return false;
        }
    }

    debug!("line {line_num} used, special {special}");
    match special {
        // doors worked directly through their own line
        1 | 26 | 27 | 28 | 31 | 32 | 33 | 34 | 117 | 118 => {
            ev_vertical_door(line_num, thing, level);
        }
        99 | 133 | 134 | 135 | 136 | 137 => {
            return locked_door_switch(line_num, thing, level);
        }

        11 => {
            change_switch_texture(line_num, false, level);
            level.do_exit_level();
        }
        51 => {
            change_switch_texture(line_num, false, level);
            level.do_secret_exit_level();
        }

        // single-use switches
        29 => {
            if ev_do_door(tag, DoorKind::Normal, level) {
                change_switch_texture(line_num, false, level);
            }
        }
        50 => {
            if ev_do_door(tag, DoorKind::Close, level) {
                change_switch_texture(line_num, false, level);
            }
        }
        103 => {
            if ev_do_door(tag, DoorKind::Open, level) {
                change_switch_texture(line_num, false, level);
            }
        }
        111 => {
            if ev_do_door(tag, DoorKind::BlazeRaise, level) {
                change_switch_texture(line_num, false, level);
            }
        }
        112 => {
            if ev_do_door(tag, DoorKind::BlazeOpen, level) {
                change_switch_texture(line_num, false, level);
            }
        }
        113 => {
            if ev_do_door(tag, DoorKind::BlazeClose, level) {
                change_switch_texture(line_num, false, level);
            }
        }
        14 => {
            if ev_do_platform(tag, PlatKind::RaiseAndChange, 32, level) {
                change_switch_texture(line_num, false, level);
            }
        }
        15 => {
            if ev_do_platform(tag, PlatKind::RaiseAndChange, 24, level) {
                change_switch_texture(line_num, false, level);
            }
        }
        20 => {
            if ev_do_platform(tag, PlatKind::RaiseToNearestAndChange, 0, level) {
                change_switch_texture(line_num, false, level);
            }
        }
        21 => {
            if ev_do_platform(tag, PlatKind::DownWaitUpStay, 0, level) {
                change_switch_texture(line_num, false, level);
            }
        }
        122 => {
            if ev_do_platform(tag, PlatKind::BlazeDWUS, 0, level) {
                change_switch_texture(line_num, false, level);
            }
        }
        18 => {
            if ev_do_floor(tag, FloorKind::RaiseFloorToNearest, level) {
                change_switch_texture(line_num, false, level);
            }
        }
        23 => {
            if ev_do_floor(tag, FloorKind::LowerFloorToLowest, level) {
                change_switch_texture(line_num, false, level);
            }
        }
        71 => {
            if ev_do_floor(tag, FloorKind::TurboLower, level) {
                change_switch_texture(line_num, false, level);
            }
        }
        55 => {
            if ev_do_floor(tag, FloorKind::RaiseFloorCrush, level) {
                change_switch_texture(line_num, false, level);
            }
        }
        101 => {
            if ev_do_floor(tag, FloorKind::RaiseFloor, level) {
                change_switch_texture(line_num, false, level);
            }
        }
        102 => {
            if ev_do_floor(tag, FloorKind::LowerFloor, level) {
                change_switch_texture(line_num, false, level);
            }
        }
        131 => {
            if ev_do_floor(tag, FloorKind::RaiseFloorTurbo, level) {
                change_switch_texture(line_num, false, level);
            }
        }
        140 => {
            if ev_do_floor(tag, FloorKind::RaiseFloor512, level) {
                change_switch_texture(line_num, false, level);
            }
        }
        41 => {
            if ev_do_ceiling(tag, CeilingKind::LowerToFloor, level) {
                change_switch_texture(line_num, false, level);
            }
        }
        49 => {
            if ev_do_ceiling(tag, CeilingKind::CrushAndRaise, level) {
                change_switch_texture(line_num, false, level);
            }
        }
        7 => {
            if ev_build_stairs(tag, StairKind::Build8, level) {
                change_switch_texture(line_num, false, level);
            }
        }
        127 => {
            if ev_build_stairs(tag, StairKind::Turbo16, level) {
                change_switch_texture(line_num, false, level);
            }
        }
        9 => {
            if ev_do_donut(tag, level) {
                change_switch_texture(line_num, false, level);
            }
        }

        // buttons, pressable again after the timer
        42 => {
            if ev_do_door(tag, DoorKind::Close, level) {
                change_switch_texture(line_num, true, level);
            }
        }
        61 => {
            if ev_do_door(tag, DoorKind::Open, level) {
                change_switch_texture(line_num, true, level);
            }
        }
        63 => {
            if ev_do_door(tag, DoorKind::Normal, level) {
                change_switch_texture(line_num, true, level);
            }
        }
        114 => {
            if ev_do_door(tag, DoorKind::BlazeRaise, level) {
                change_switch_texture(line_num, true, level);
            }
        }
        115 => {
            if ev_do_door(tag, DoorKind::BlazeOpen, level) {
                change_switch_texture(line_num, true, level);
            }
        }
        116 => {
            if ev_do_door(tag, DoorKind::BlazeClose, level) {
                change_switch_texture(line_num, true, level);
            }
        }
        62 => {
            if ev_do_platform(tag, PlatKind::DownWaitUpStay, 1, level) {
                change_switch_texture(line_num, true, level);
            }
        }
        123 => {
            if ev_do_platform(tag, PlatKind::BlazeDWUS, 0, level) {
                change_switch_texture(line_num, true, level);
            }
        }
        66 => {
            if ev_do_platform(tag, PlatKind::RaiseAndChange, 24, level) {
                change_switch_texture(line_num, true, level);
            }
        }
        67 => {
            if ev_do_platform(tag, PlatKind::RaiseAndChange, 32, level) {
                change_switch_texture(line_num, true, level);
            }
        }
        68 => {
            if ev_do_platform(tag, PlatKind::RaiseToNearestAndChange, 0, level) {
                change_switch_texture(line_num, true, level);
            }
        }
        45 => {
            if ev_do_floor(tag, FloorKind::LowerFloor, level) {
                change_switch_texture(line_num, true, level);
            }
        }
        60 => {
            if ev_do_floor(tag, FloorKind::LowerFloorToLowest, level) {
                change_switch_texture(line_num, true, level);
            }
        }
        64 => {
            if ev_do_floor(tag, FloorKind::RaiseFloor, level) {
                change_switch_texture(line_num, true, level);
            }
        }
        65 => {
            if ev_do_floor(tag, FloorKind::RaiseFloorCrush, level) {
                change_switch_texture(line_num, true, level);
            }
        }
        69 => {
            if ev_do_floor(tag, FloorKind::RaiseFloorToNearest, level) {
                change_switch_texture(line_num, true, level);
            }
        }
        70 => {
            if ev_do_floor(tag, FloorKind::TurboLower, level) {
                change_switch_texture(line_num, true, level);
            }
        }
        132 => {
            if ev_do_floor(tag, FloorKind::RaiseFloorTurbo, level) {
                change_switch_texture(line_num, true, level);
            }
        }
        43 => {
            if ev_do_ceiling(tag, CeilingKind::LowerToFloor, level) {
                change_switch_texture(line_num, true, level);
            }
        }
        138 => {
            ev_turn_light_on(tag, 255, level);
            change_switch_texture(line_num, true, level);
        }
        139 => {
            ev_turn_light_on(tag, 35, level);
            change_switch_texture(line_num, true, level);
        }

        _ => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defs::TICRATE;
    use crate::env::specials::update_specials;
    use crate::level::test_maps::two_room_map;
    use crate::level::{Level, LevelOptions};

    fn switch_level() -> Level {
        let mut raw = two_room_map();
        raw.sectors[1].tag = 1;
        // the shared line carries switch pair 2/3 on its lower slot, with
        // plain wall texture 1 in the slots above it
        raw.linedefs[6].special = 63;
        raw.linedefs[6].tag = 1;
        raw.sidedefs[7].bottomtexture = 2;
        let options = LevelOptions {
            switch_textures: vec![2],
            ..Default::default()
        };
        let (tx, _rx) = std::sync::mpsc::channel();
        Level::new(options, raw, tx).unwrap()
    }

    #[test]
    fn reusable_switch_flips_and_pops_back_out() {
        let mut level = switch_level();
        change_switch_texture(6, true, &mut level);
        let side = level.map_data.linedefs[6].front_sidedef;
        assert_eq!(level.map_data.sidedefs[side].bottomtexture, 3);

        for _ in 0..BUTTONTIME {
            update_specials(&mut level);
        }
        assert_eq!(level.map_data.sidedefs[side].bottomtexture, 2);
    }

    #[test]
    fn single_use_switch_clears_the_special() {
        let mut level = switch_level();
        change_switch_texture(6, false, &mut level);
        assert_eq!(level.map_data.linedefs[6].special, 0);
        // no button registered, the face stays flipped
        for _ in 0..TICRATE * 2 {
            update_specials(&mut level);
        }
        let side = level.map_data.linedefs[6].front_sidedef;
        assert_eq!(level.map_data.sidedefs[side].bottomtexture, 3);
    }

    #[test]
    fn only_the_registered_face_flips() {
        let mut level = switch_level();
        change_switch_texture(6, true, &mut level);
        let side = level.map_data.linedefs[6].front_sidedef;
        let sidedef = &level.map_data.sidedefs[side];
        assert_eq!(sidedef.toptexture, 1);
        assert_eq!(sidedef.midtexture, 1);
        assert_eq!(sidedef.bottomtexture, 3);
    }

    #[test]
    fn second_press_while_pending_is_ignored() {
        let mut level = switch_level();
        change_switch_texture(6, true, &mut level);
        change_switch_texture(6, true, &mut level);
        // only one pending button, so one restore
        assert_eq!(
            level.button_list.iter().filter(|b| b.timer > 0).count(),
            1
        );
    }
}
