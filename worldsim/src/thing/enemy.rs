//! Monster AI: waking up, chasing, attacking, and the handful of scripted
//! behaviours (boss brain, arch-vile resurrection, lost soul charges).
//!
//! The action functions here are dispatched from the state tables. Each
//! runs with its map object detached from thinker storage, so any other
//! thing it touches goes through the arena handle helpers.

use log::error;
use math::{ANG45, ANG90, ANG180, ANG270, Angle, FRACBITS, Fixed, Vec2, point_to_angle_2};
use sound_traits::SfxName;

use crate::defs::{FLOATSPEED, GameMode, MAXRADIUS, MISSILERANGE, SKULLSPEED, Skill};
use crate::env::doors::{DoorKind, ev_do_door};
use crate::env::floor::{FloorKind, ev_do_floor};
use crate::env::switch::use_special_line;
use crate::info::{MOBJINFO, MapObjKind, STATES, StateNum};
use crate::level::Level;
use crate::sight::{check_sight, check_sight_to};
use crate::thing::{MapObjFlag, MapObject, MoveClip, aim_line_attack, line_attack, with_mobj};
use crate::thinker::ThinkerData;

/// Compass directions for walking monsters. The discriminant order matters,
/// each step is 45 degrees anticlockwise from east.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DirType {
    East = 0,
    NorthEast,
    North,
    NorthWest,
    West,
    SouthWest,
    South,
    SouthEast,
    #[default]
    NoDir,
}

use DirType::*;

const OPPOSITE: [DirType; 9] = [
    West, SouthWest, South, SouthEast, East, NorthEast, North, NorthWest, NoDir,
];

/// Indexed by `((deltay < 0) << 1) + (deltax > 0)`
const DIAGONALS: [DirType; 4] = [NorthWest, NorthEast, SouthWest, SouthEast];

const ALL_DIRS: [DirType; 8] = [
    East, NorthEast, North, NorthWest, West, SouthWest, South, SouthEast,
];

// sin/cos of 45 degrees is 47000 in 16.16
const XSPEED: [Fixed; 8] = [
    Fixed::from_bits(0x10000),
    Fixed::from_bits(47000),
    Fixed::from_bits(0),
    Fixed::from_bits(-47000),
    Fixed::from_bits(-0x10000),
    Fixed::from_bits(-47000),
    Fixed::from_bits(0),
    Fixed::from_bits(47000),
];

const YSPEED: [Fixed; 8] = [
    Fixed::from_bits(0),
    Fixed::from_bits(47000),
    Fixed::from_bits(0x10000),
    Fixed::from_bits(47000),
    Fixed::from_bits(0),
    Fixed::from_bits(-47000),
    Fixed::from_bits(-0x10000),
    Fixed::from_bits(-47000),
];

impl MapObject {
    /// Walk one step in the current move direction, dealing with doors and
    /// float height along the way. Returns false if the step is blocked.
    ///
    /// Doom function name is `P_Move`
    fn do_move(&mut self, level: &mut Level) -> bool {
        if self.movedir == NoDir {
            return false;
        }
        let speed = self.info.speed;
        let tryxy = self.xy
            + Vec2::new(
                speed * XSPEED[self.movedir as usize],
                speed * YSPEED[self.movedir as usize],
            );

        let mut clip = MoveClip::default();
        if !self.try_move(tryxy, &mut clip, level) {
            if self.flags & MapObjFlag::Float as u32 != 0 && clip.floatok {
                // blocked by height only, so float up or down to the gap
                if self.z < clip.floorz {
                    self.z += FLOATSPEED;
                } else {
                    self.z -= FLOATSPEED;
                }
                self.flags |= MapObjFlag::Infloat as u32;
                return true;
            }

            if clip.spec_hits.is_empty() {
                return false;
            }

            // the blocking line may be a door that can be opened
            self.movedir = NoDir;
            let mut good = false;
            while let Some(num) = clip.spec_hits.pop() {
                if use_special_line(0, num, self, level) {
                    good = true;
                }
            }
            return good;
        }

        self.flags &= !(MapObjFlag::Infloat as u32);
        if self.flags & MapObjFlag::Float as u32 == 0 {
            self.z = self.floorz;
        }
        true
    }

    /// Doom function name is `P_TryWalk`
    fn try_walk(&mut self, level: &mut Level) -> bool {
        if !self.do_move(level) {
            return false;
        }
        self.movecount = level.rng.p_random() & 15;
        true
    }

    /// Pick a fresh move direction toward the target, preferring diagonals
    /// and never reversing unless everything else is blocked.
    ///
    /// Doom function name is `P_NewChaseDir`
    fn new_chase_dir(&mut self, level: &mut Level) {
        let Some(txy) = self.target.and_then(|t| level.thinkers.mobj(t)).map(|t| t.xy) else {
            error!("new_chase_dir called with no target");
            return;
        };

        let olddir = self.movedir;
        let turnaround = OPPOSITE[olddir as usize];

        let deltax = txy.x - self.xy.x;
        let deltay = txy.y - self.xy.y;

        let mut d1 = if deltax > Fixed::from_int(10) {
            East
        } else if deltax < Fixed::from_int(-10) {
            West
        } else {
            NoDir
        };
        let mut d2 = if deltay < Fixed::from_int(-10) {
            South
        } else if deltay > Fixed::from_int(10) {
            North
        } else {
            NoDir
        };

        // try direct route
        if d1 != NoDir && d2 != NoDir {
            let idx = (((deltay < Fixed::ZERO) as usize) << 1) + (deltax > Fixed::ZERO) as usize;
            let dir = DIAGONALS[idx];
            self.movedir = dir;
            if dir != turnaround && self.try_walk(level) {
                return;
            }
        }

        // try other directions
        if level.rng.p_random() > 200 || deltay.abs() > deltax.abs() {
            std::mem::swap(&mut d1, &mut d2);
        }
        if d1 == turnaround {
            d1 = NoDir;
        }
        if d2 == turnaround {
            d2 = NoDir;
        }

        if d1 != NoDir {
            self.movedir = d1;
            if self.try_walk(level) {
                return; // either moved forward or attacked
            }
        }
        if d2 != NoDir {
            self.movedir = d2;
            if self.try_walk(level) {
                return;
            }
        }

        // there is no direct path to the player, so pick another direction
        if olddir != NoDir {
            self.movedir = olddir;
            if self.try_walk(level) {
                return;
            }
        }

        // randomly determine direction of search
        if level.rng.p_random() & 1 != 0 {
            for dir in ALL_DIRS {
                if dir != turnaround {
                    self.movedir = dir;
                    if self.try_walk(level) {
                        return;
                    }
                }
            }
        } else {
            for dir in ALL_DIRS.into_iter().rev() {
                if dir != turnaround {
                    self.movedir = dir;
                    if self.try_walk(level) {
                        return;
                    }
                }
            }
        }

        if turnaround != NoDir {
            self.movedir = turnaround;
            if self.try_walk(level) {
                return;
            }
        }

        self.movedir = NoDir; // cannot move
    }
}

/// Stay in the spawn state until a player is sighted or heard.
///
/// Doom function name is `A_Look`
pub(crate) fn a_look(actor: &mut MapObject, level: &mut Level) {
    actor.threshold = 0; // any shot will wake up

    let mut found = false;
    let sector = level.map_data.subsectors[actor.subsector].sector;
    if let Some(tid) = level.map_data.sectors[sector].sound_target {
        let shootable = level
            .thinkers
            .mobj(tid)
            .map(|t| t.flags & MapObjFlag::Shootable as u32 != 0)
            .unwrap_or(false);
        if shootable {
            actor.target = Some(tid);
            if actor.flags & MapObjFlag::Ambush as u32 != 0 {
                // deaf monsters need to actually see the noise maker
                found = check_sight_to(level, actor, tid);
            } else {
                found = true;
            }
        }
    }

    if !found && !actor.look_for_players(false, level) {
        return;
    }

    let sound = match actor.info.seesound {
        SfxName::None => None,
        SfxName::Posit1 | SfxName::Posit2 | SfxName::Posit3 => {
            Some(match level.rng.p_random() % 3 {
                0 => SfxName::Posit1,
                1 => SfxName::Posit2,
                _ => SfxName::Posit3,
            })
        }
        SfxName::Bgsit1 | SfxName::Bgsit2 => Some(if level.rng.p_random() % 2 == 0 {
            SfxName::Bgsit1
        } else {
            SfxName::Bgsit2
        }),
        sound => Some(sound),
    };
    if let Some(sound) = sound {
        actor.start_sound(level, sound);
    }

    actor.set_state(actor.info.seestate, level);
}

/// Close in on the target, attacking when in range.
///
/// Doom function name is `A_Chase`
pub(crate) fn a_chase(actor: &mut MapObject, level: &mut Level) {
    if actor.reactiontime > 0 {
        actor.reactiontime -= 1;
    }

    // modify target threshold
    if actor.threshold > 0 {
        let alive = actor
            .target
            .and_then(|t| level.thinkers.mobj(t))
            .map(|t| t.health > 0)
            .unwrap_or(false);
        if alive {
            actor.threshold -= 1;
        } else {
            actor.threshold = 0;
        }
    }

    // turn towards movement direction if not there yet
    if actor.movedir != NoDir {
        actor.angle = Angle::new(actor.angle.to_bam() & (7 << 29));
        let delta = actor.angle.to_bam().wrapping_sub((actor.movedir as u32) << 29) as i32;
        if delta > 0 {
            actor.angle -= ANG45;
        } else if delta < 0 {
            actor.angle += ANG45;
        }
    }

    let target_shootable = actor
        .target
        .and_then(|t| level.thinkers.mobj(t))
        .map(|t| t.flags & MapObjFlag::Shootable as u32 != 0)
        .unwrap_or(false);
    if !target_shootable {
        // look for a new target
        if actor.look_for_players(true, level) {
            return; // got one
        }
        actor.set_state(actor.info.spawnstate, level);
        return;
    }

    // do not attack twice in a row
    if actor.flags & MapObjFlag::Justattacked as u32 != 0 {
        actor.flags &= !(MapObjFlag::Justattacked as u32);
        if level.game_skill != Skill::Nightmare {
            actor.new_chase_dir(level);
        }
        return;
    }

    // check for melee attack
    if actor.info.meleestate != StateNum::None && actor.check_melee_range(level) {
        if actor.info.attacksound != SfxName::None {
            actor.start_sound(level, actor.info.attacksound);
        }
        actor.set_state(actor.info.meleestate, level);
        return;
    }

    // check for missile attack
    if actor.info.missilestate != StateNum::None
        && (level.game_skill == Skill::Nightmare || actor.movecount == 0)
        && actor.check_missile_range(level)
    {
        actor.set_state(actor.info.missilestate, level);
        actor.flags |= MapObjFlag::Justattacked as u32;
        return;
    }

    // chase towards player
    actor.movecount -= 1;
    if actor.movecount < 0 || !actor.do_move(level) {
        actor.new_chase_dir(level);
    }

    // make active sound
    if actor.info.activesound != SfxName::None && level.rng.p_random() < 3 {
        actor.start_sound(level, actor.info.activesound);
    }
}

/// Doom function name is `A_FaceTarget`
pub(crate) fn a_facetarget(actor: &mut MapObject, level: &mut Level) {
    let Some((txy, tflags)) = actor
        .target
        .and_then(|t| level.thinkers.mobj(t))
        .map(|t| (t.xy, t.flags))
    else {
        return;
    };

    actor.flags &= !(MapObjFlag::Ambush as u32);
    actor.angle = point_to_angle_2(txy, actor.xy);
    if tflags & MapObjFlag::Shadow as u32 != 0 {
        let fuzz = (level.rng.p_random() - level.rng.p_random()) << 21;
        actor.angle += Angle::new(fuzz as u32);
    }
}

/// Doom function name is `A_PosAttack`
pub(crate) fn a_posattack(actor: &mut MapObject, level: &mut Level) {
    if actor.target.is_none() {
        return;
    }
    a_facetarget(actor, level);

    let mut angle = actor.angle;
    let aim = aim_line_attack(actor, angle, MISSILERANGE, level);
    actor.start_sound(level, SfxName::Pistol);
    angle += Angle::new(((level.rng.p_random() - level.rng.p_random()) << 20) as u32);
    let damage = (level.rng.p_random() % 5 + 1) * 3;
    line_attack(actor, damage, MISSILERANGE, angle, aim, level);
}

/// Shotgun sergeant, three pellets off one aim.
///
/// Doom function name is `A_SPosAttack`
pub(crate) fn a_sposattack(actor: &mut MapObject, level: &mut Level) {
    if actor.target.is_none() {
        return;
    }
    actor.start_sound(level, SfxName::Shotgn);
    a_facetarget(actor, level);

    let bangle = actor.angle;
    let aim = aim_line_attack(actor, bangle, MISSILERANGE, level);
    for _ in 0..3 {
        let angle =
            bangle + Angle::new(((level.rng.p_random() - level.rng.p_random()) << 20) as u32);
        let damage = (level.rng.p_random() % 5 + 1) * 3;
        line_attack(actor, damage, MISSILERANGE, angle, aim, level);
    }
}

/// Doom function name is `A_TroopAttack`
pub(crate) fn a_troopattack(actor: &mut MapObject, level: &mut Level) {
    let Some(tid) = actor.target else {
        return;
    };
    a_facetarget(actor, level);

    if actor.check_melee_range(level) {
        actor.start_sound(level, SfxName::Claw);
        let damage = (level.rng.p_random() % 8 + 1) * 3;
        with_mobj(level, tid, |target, level| {
            target.take_damage(Some(actor), Some(actor.thinker), false, damage, level);
        });
        return;
    }
    MapObject::spawn_missile(actor, tid, MapObjKind::TroopShot, level);
}

/// Doom function name is `A_SargAttack`
pub(crate) fn a_sargattack(actor: &mut MapObject, level: &mut Level) {
    let Some(tid) = actor.target else {
        return;
    };
    a_facetarget(actor, level);

    if actor.check_melee_range(level) {
        let damage = (level.rng.p_random() % 10 + 1) * 4;
        with_mobj(level, tid, |target, level| {
            target.take_damage(Some(actor), Some(actor.thinker), false, damage, level);
        });
    }
}

/// Doom function name is `A_HeadAttack`
pub(crate) fn a_headattack(actor: &mut MapObject, level: &mut Level) {
    let Some(tid) = actor.target else {
        return;
    };
    a_facetarget(actor, level);

    if actor.check_melee_range(level) {
        let damage = (level.rng.p_random() % 6 + 1) * 10;
        with_mobj(level, tid, |target, level| {
            target.take_damage(Some(actor), Some(actor.thinker), false, damage, level);
        });
        return;
    }
    MapObject::spawn_missile(actor, tid, MapObjKind::HeadShot, level);
}

/// Doom function name is `A_BruisAttack`
pub(crate) fn a_bruisattack(actor: &mut MapObject, level: &mut Level) {
    let Some(tid) = actor.target else {
        return;
    };

    if actor.check_melee_range(level) {
        actor.start_sound(level, SfxName::Claw);
        let damage = (level.rng.p_random() % 8 + 1) * 10;
        with_mobj(level, tid, |target, level| {
            target.take_damage(Some(actor), Some(actor.thinker), false, damage, level);
        });
        return;
    }
    MapObject::spawn_missile(actor, tid, MapObjKind::BruiserShot, level);
}

/// Fly straight at the target. The momentum is cleared again when the
/// charging skull hits something solid.
///
/// Doom function name is `A_SkullAttack`
pub(crate) fn a_skullattack(actor: &mut MapObject, level: &mut Level) {
    let Some((txy, tz, theight)) = actor
        .target
        .and_then(|t| level.thinkers.mobj(t))
        .map(|t| (t.xy, t.z, t.height))
    else {
        return;
    };

    actor.flags |= MapObjFlag::Skullfly as u32;
    if actor.info.attacksound != SfxName::None {
        actor.start_sound(level, actor.info.attacksound);
    }
    actor.angle = point_to_angle_2(txy, actor.xy);
    actor.momxy = actor.angle.unit() * SKULLSPEED;

    let mut dist = actor.xy.approx_distance_to(txy).to_bits() / SKULLSPEED.to_bits();
    if dist < 1 {
        dist = 1;
    }
    actor.momz = Fixed::from_bits((tz + (theight >> 1) - actor.z).to_bits() / dist);
}

/// Spawn a lost soul just outside the pain elemental and launch it.
fn pain_shoot_skull(actor: &mut MapObject, angle: Angle, level: &mut Level) {
    // cap the number of skulls loose on the level
    let mut count = 0;
    for (_, data) in level.thinkers.iter() {
        if let ThinkerData::MapObject(mobj) = data {
            if mobj.kind == MapObjKind::Skull {
                count += 1;
            }
        }
    }
    if count > 20 {
        return;
    }

    let skull_radius = MOBJINFO[MapObjKind::Skull as usize].radius;
    let prestep = Fixed::from_int(4) + (actor.info.radius + skull_radius) * 3 / 2;
    let x = actor.xy.x + prestep * angle.cos();
    let y = actor.xy.y + prestep * angle.sin();
    let z = actor.z + Fixed::from_int(8);

    let Ok(id) = MapObject::spawn_map_object(x, y, z, MapObjKind::Skull, level) else {
        return;
    };
    let parent_target = actor.target;
    with_mobj(level, id, |skull, level| {
        // if it cannot fit where it appeared, kill it on the spot
        let dest = skull.xy;
        let mut clip = MoveClip::default();
        if !skull.try_move(dest, &mut clip, level) {
            skull.take_damage(Some(actor), Some(actor.thinker), false, 10000, level);
            return;
        }
        skull.target = parent_target;
        a_skullattack(skull, level);
    });
}

/// Doom function name is `A_PainAttack`
pub(crate) fn a_painattack(actor: &mut MapObject, level: &mut Level) {
    if actor.target.is_none() {
        return;
    }
    a_facetarget(actor, level);
    let angle = actor.angle;
    pain_shoot_skull(actor, angle, level);
}

/// Doom function name is `A_PainDie`
pub(crate) fn a_paindie(actor: &mut MapObject, level: &mut Level) {
    a_fall(actor, level);
    let angle = actor.angle;
    pain_shoot_skull(actor, angle + ANG90, level);
    pain_shoot_skull(actor, angle + ANG180, level);
    pain_shoot_skull(actor, angle + ANG270, level);
}

/// Doom function name is `A_Scream`
pub(crate) fn a_scream(actor: &mut MapObject, level: &mut Level) {
    let sound = match actor.info.deathsound {
        SfxName::None => return,
        SfxName::Podth1 | SfxName::Podth2 | SfxName::Podth3 => match level.rng.p_random() % 3 {
            0 => SfxName::Podth1,
            1 => SfxName::Podth2,
            _ => SfxName::Podth3,
        },
        SfxName::Bgdth1 | SfxName::Bgdth2 => {
            if level.rng.p_random() % 2 == 0 {
                SfxName::Bgdth1
            } else {
                SfxName::Bgdth2
            }
        }
        sound => sound,
    };
    actor.start_sound(level, sound);
}

/// Doom function name is `A_XScream`
pub(crate) fn a_xscream(actor: &mut MapObject, level: &mut Level) {
    actor.start_sound(level, SfxName::Slop);
}

/// Doom function name is `A_Pain`
pub(crate) fn a_pain(actor: &mut MapObject, level: &mut Level) {
    if actor.info.painsound != SfxName::None {
        actor.start_sound(level, actor.info.painsound);
    }
}

/// A dying thing stops blocking
pub(crate) fn a_fall(actor: &mut MapObject, _level: &mut Level) {
    actor.flags &= !(MapObjFlag::Solid as u32);
}

/// Doom function name is `A_Explode`
pub(crate) fn a_explode(actor: &mut MapObject, level: &mut Level) {
    actor.radius_attack(128, level);
}

/// Doom function name is `A_PlayerScream`
pub(crate) fn a_playerscream(actor: &mut MapObject, level: &mut Level) {
    let sound = if level.game_mode == GameMode::Commercial && actor.health < -50 {
        // the dead player got crunched hard
        SfxName::Pdiehi
    } else {
        SfxName::Pldeth
    };
    actor.start_sound(level, sound);
}

/// Keep the arch-vile flame on top of its victim.
///
/// Doom function name is `A_Fire`
pub(crate) fn a_fire(actor: &mut MapObject, level: &mut Level) {
    let Some(dest_id) = actor.tracer else {
        return;
    };
    let Some(owner_id) = actor.target else {
        return;
    };
    let Some((dxy, dz, dheight, dangle)) = level
        .thinkers
        .mobj(dest_id)
        .map(|d| (d.xy, d.z, d.height, d.angle))
    else {
        return;
    };

    // don't move it if the vile lost sight
    let visible = with_mobj(level, owner_id, |owner, level| {
        check_sight(owner, dxy, dz, dheight, level)
    })
    .unwrap_or(false);
    if !visible {
        return;
    }

    actor.unset_thing_position(level);
    actor.xy = dxy + dangle.unit() * Fixed::from_int(24);
    actor.z = dz;
    actor.set_thing_position(level);
}

/// Doom function name is `A_StartFire`
pub(crate) fn a_startfire(actor: &mut MapObject, level: &mut Level) {
    actor.start_sound(level, SfxName::Flamst);
    a_fire(actor, level);
}

/// Doom function name is `A_FireCrackle`
pub(crate) fn a_firecrackle(actor: &mut MapObject, level: &mut Level) {
    actor.start_sound(level, SfxName::Flame);
    a_fire(actor, level);
}

/// Doom function name is `A_VileStart`
pub(crate) fn a_vilestart(actor: &mut MapObject, level: &mut Level) {
    actor.start_sound(level, SfxName::Vilatk);
}

/// Spawn the arch-vile fire on the victim and wire up the references so
/// `a_fire` can track it.
///
/// Doom function name is `A_VileTarget`
pub(crate) fn a_viletarget(actor: &mut MapObject, level: &mut Level) {
    let Some(tid) = actor.target else {
        return;
    };
    a_facetarget(actor, level);

    let Some((txy, tz)) = level.thinkers.mobj(tid).map(|t| (t.xy, t.z)) else {
        return;
    };
    let Ok(fog) = MapObject::spawn_map_object(txy.x, txy.y, tz, MapObjKind::Fire, level) else {
        return;
    };

    actor.tracer = Some(fog);
    let vile = actor.thinker;
    with_mobj(level, fog, |fire, level| {
        fire.target = Some(vile);
        fire.tracer = Some(tid);
        a_fire(fire, level);
    });
}

/// Doom function name is `A_VileAttack`
pub(crate) fn a_vileattack(actor: &mut MapObject, level: &mut Level) {
    let Some(tid) = actor.target else {
        return;
    };
    a_facetarget(actor, level);

    if !check_sight_to(level, actor, tid) {
        return;
    }

    actor.start_sound(level, SfxName::Barexp);
    let target_xy = with_mobj(level, tid, |target, level| {
        target.take_damage(Some(actor), Some(actor.thinker), false, 20, level);
        target.momz = Fixed::from_bits(1000 * (1 << FRACBITS) / target.info.mass);
        target.xy
    });
    let Some(txy) = target_xy else {
        return;
    };

    let Some(fire_id) = actor.tracer else {
        return;
    };
    // move the fire between the vile and the victim and blast the area
    let offset = actor.angle.unit() * Fixed::from_int(24);
    with_mobj(level, fire_id, |fire, level| {
        fire.unset_thing_position(level);
        fire.xy = txy - offset;
        fire.set_thing_position(level);
        fire.radius_attack(70, level);
    });
}

/// Chase like everything else, but raise any usable corpse passed on the way.
///
/// Doom function name is `A_VileChase`
pub(crate) fn a_vilechase(actor: &mut MapObject, level: &mut Level) {
    if actor.movedir != NoDir {
        let speed = actor.info.speed;
        let viletry = actor.xy
            + Vec2::new(
                speed * XSPEED[actor.movedir as usize],
                speed * YSPEED[actor.movedir as usize],
            );

        let bm = &level.map_data.blockmap;
        let xl = bm.block_x_raw(viletry.x - MAXRADIUS * 2).max(0);
        let xh = bm.block_x_raw(viletry.x + MAXRADIUS * 2).min(bm.width - 1);
        let yl = bm.block_y_raw(viletry.y - MAXRADIUS * 2).max(0);
        let yh = bm.block_y_raw(viletry.y + MAXRADIUS * 2).min(bm.height - 1);

        for bx in xl..=xh {
            for by in yl..=yh {
                let Some(cell) = level.map_data.blockmap.cell_index(bx, by) else {
                    continue;
                };
                let mut i = 0;
                loop {
                    let things = &level.map_data.blockmap.thing_cells[cell];
                    if i >= things.len() {
                        break;
                    }
                    let id = things[i];
                    i += 1;

                    let Some(corpse) = level.thinkers.mobj(id) else {
                        continue;
                    };
                    if corpse.flags & MapObjFlag::Corpse as u32 == 0
                        || corpse.tics != -1
                        || corpse.info.raisestate == StateNum::None
                    {
                        continue; // not a monster or not done dying
                    }
                    let maxdist = corpse.info.radius + actor.info.radius;
                    if (viletry.x - corpse.xy.x).abs() > maxdist
                        || (viletry.y - corpse.xy.y).abs() > maxdist
                    {
                        continue; // not actually touching
                    }
                    let corpse_xy = corpse.xy;

                    let fits = with_mobj(level, id, |corpse, level| {
                        let here = corpse.xy;
                        let mut clip = MoveClip::default();
                        corpse.check_position(here, &mut clip, level)
                    })
                    .unwrap_or(false);
                    if !fits {
                        continue; // doesn't fit here any more
                    }

                    // got one, time to raise it
                    actor.angle = point_to_angle_2(corpse_xy, actor.xy);
                    actor.set_state(StateNum::VILE_HEAL1, level);
                    with_mobj(level, id, |corpse, level| {
                        corpse.start_sound(level, SfxName::Slop);
                        let info = corpse.info;
                        corpse.set_state(info.raisestate, level);
                        corpse.height = corpse.height << 2;
                        corpse.flags = info.flags;
                        corpse.health = info.spawnhealth;
                        corpse.target = None;
                    });
                    return;
                }
            }
        }
    }

    a_chase(actor, level);
}

/// Doom function name is `A_BrainAwake`
pub(crate) fn a_brainawake(actor: &mut MapObject, level: &mut Level) {
    let mut targets = Vec::new();
    for (id, data) in level.thinkers.iter() {
        if let ThinkerData::MapObject(mobj) = data {
            if mobj.kind == MapObjKind::BossTarget {
                targets.push(id);
            }
        }
    }
    level.boss_targets = targets;
    level.boss_target_on = 0;
    actor.start_sound(level, SfxName::Bossit);
}

/// Doom function name is `A_BrainPain`
pub(crate) fn a_brainpain(actor: &mut MapObject, level: &mut Level) {
    actor.start_sound(level, SfxName::Bospn);
}

fn brain_explosion(x: Fixed, y: Fixed, z: Fixed, level: &mut Level) {
    let Ok(id) = MapObject::spawn_map_object(x, y, z, MapObjKind::Rocket, level) else {
        return;
    };
    let momz = level.rng.p_random() * 512;
    let fuzz = level.rng.p_random() & 7;
    if let Some(mobj) = level.thinkers.mobj_mut(id) {
        mobj.momz = Fixed::from_bits(momz);
        mobj.force_state(StateNum::EXPLODE1);
        mobj.tics -= fuzz;
        if mobj.tics < 1 {
            mobj.tics = 1;
        }
    }
}

/// A line of rocket explosions across the dying brain.
///
/// Doom function name is `A_BrainScream`
pub(crate) fn a_brainscream(actor: &mut MapObject, level: &mut Level) {
    let mut x = actor.xy.x - Fixed::from_int(196);
    let top = actor.xy.x + Fixed::from_int(320);
    let y = actor.xy.y - Fixed::from_int(320);
    while x < top {
        let z = Fixed::from_int(128 + level.rng.p_random() * 2);
        brain_explosion(x, y, z, level);
        x += Fixed::from_int(8);
    }
    actor.start_sound(level, SfxName::Bosdth);
}

/// Doom function name is `A_BrainExplode`
pub(crate) fn a_brainexplode(actor: &mut MapObject, level: &mut Level) {
    let x = actor.xy.x + Fixed::from_bits(level.rng.p_subrandom() << 11);
    let y = actor.xy.y;
    let z = Fixed::from_int(128 + level.rng.p_random() * 2);
    brain_explosion(x, y, z, level);
}

/// Doom function name is `A_BrainDie`
pub(crate) fn a_braindie(_actor: &mut MapObject, level: &mut Level) {
    level.do_exit_level();
}

/// Lob a spawn cube at the next target spot in rotation.
///
/// Doom function name is `A_BrainSpit`
pub(crate) fn a_brainspit(actor: &mut MapObject, level: &mut Level) {
    if level.boss_targets.is_empty() {
        return;
    }

    level.boss_easy = !level.boss_easy;
    if level.game_skill <= Skill::Easy && !level.boss_easy {
        return;
    }

    let targ = level.boss_targets[level.boss_target_on];
    level.boss_target_on = (level.boss_target_on + 1) % level.boss_targets.len();

    let Some(cube) = MapObject::spawn_missile(actor, targ, MapObjKind::SpawnShot, level) else {
        return;
    };
    let spit_y = actor.xy.y;
    let targ_y = level.thinkers.mobj(targ).map(|t| t.xy.y);
    with_mobj(level, cube, |cube, _| {
        cube.target = Some(targ);
        // flight time in state lengths, counted down by the flying cube
        if let Some(ty) = targ_y {
            let tics = STATES[cube.state as usize].tics.max(1);
            let count = (ty - spit_y)
                .to_bits()
                .checked_div(cube.momxy.y.to_bits())
                .unwrap_or(0);
            cube.reactiontime = count / tics;
        }
    });

    actor.start_sound(level, SfxName::Bospit);
}

/// Doom function name is `A_SpawnSound`
pub(crate) fn a_spawnsound(actor: &mut MapObject, level: &mut Level) {
    actor.start_sound(level, SfxName::Boscub);
    a_spawnfly(actor, level);
}

/// The flying spawn cube. Counts down its travel time, then materialises
/// a monster at the target spot.
///
/// Doom function name is `A_SpawnFly`
pub(crate) fn a_spawnfly(actor: &mut MapObject, level: &mut Level) {
    actor.reactiontime -= 1;
    if actor.reactiontime > 0 {
        return; // still flying
    }

    let Some((txy, tz)) = actor
        .target
        .and_then(|t| level.thinkers.mobj(t))
        .map(|t| (t.xy, t.z))
    else {
        return;
    };

    // first spawn the teleport fire
    if let Ok(fog) = MapObject::spawn_map_object(txy.x, txy.y, tz, MapObjKind::SpawnFire, level) {
        if let Some(fog) = level.thinkers.mobj(fog) {
            fog.start_sound(level, SfxName::Telept);
        }
    }

    // randomly select monster to spawn, weighted towards the weak ones
    let r = level.rng.p_random();
    let kind = if r < 50 {
        MapObjKind::Troop
    } else if r < 90 {
        MapObjKind::Sergeant
    } else if r < 120 {
        MapObjKind::Possessed
    } else if r < 130 {
        MapObjKind::Pain
    } else if r < 160 {
        MapObjKind::Head
    } else if r < 162 {
        MapObjKind::Vile
    } else if r < 172 {
        MapObjKind::Skull
    } else {
        MapObjKind::Bruiser
    };

    if let Ok(id) = MapObject::spawn_map_object(txy.x, txy.y, tz, kind, level) {
        with_mobj(level, id, |mobj, level| {
            if mobj.look_for_players(true, level) {
                mobj.set_state(mobj.info.seestate, level);
            }
            // telefrag anything in the way
            let dest = mobj.xy;
            mobj.teleport_move(dest, level);
        });
    }

    // the cube is used up
    actor.remove(level);
}

/// Last boss of the map died. Which map this is decides what opens up.
///
/// Doom function name is `A_BossDeath`
pub(crate) fn a_bossdeath(actor: &mut MapObject, level: &mut Level) {
    if level.game_mode == GameMode::Commercial {
        return;
    }
    match level.episode {
        1 => {
            if level.game_map != 8 || actor.kind != MapObjKind::Bruiser {
                return;
            }
        }
        4 => match level.game_map {
            6 | 8 => {
                if actor.kind != MapObjKind::Bruiser {
                    return;
                }
            }
            _ => return,
        },
        _ => {
            if level.game_map != 8 {
                return;
            }
        }
    }

    // make sure there is a player alive for victory
    let any_alive = level
        .player_in_game
        .iter()
        .zip(level.players.iter())
        .any(|(&in_game, player)| in_game && player.health > 0);
    if !any_alive {
        return;
    }

    // other bosses of the same kind must be dead too
    for (id, data) in level.thinkers.iter() {
        if let ThinkerData::MapObject(mobj) = data {
            if id != actor.thinker && mobj.kind == actor.kind && mobj.health > 0 {
                return;
            }
        }
    }

    match (level.episode, level.game_map) {
        (1, 8) | (4, 8) => {
            ev_do_floor(666, FloorKind::LowerFloorToLowest, level);
            return;
        }
        (4, 6) => {
            ev_do_door(666, DoorKind::BlazeOpen, level);
            return;
        }
        _ => {}
    }

    level.do_exit_level();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defs::ONFLOORZ;
    use crate::level::LevelOptions;
    use crate::level::test_maps::square_map;

    #[test]
    fn chase_turns_through_the_west_snap() {
        let (tx, _rx) = std::sync::mpsc::channel();
        let mut level = Level::new(LevelOptions::default(), square_map(), tx).unwrap();
        let id = MapObject::spawn_map_object(
            Fixed::from_int(200),
            Fixed::from_int(128),
            ONFLOORZ,
            MapObjKind::Troop,
            &mut level,
        )
        .unwrap();

        // facing due west while walking north puts the bam delta on the
        // signed wraparound boundary
        with_mobj(&mut level, id, |mobj, level| {
            mobj.angle = ANG180;
            mobj.movedir = North;
            a_chase(mobj, level);
            assert_eq!(mobj.angle, ANG180 - ANG45);
        });
    }
}
