//! The weapon overlay state machine. Each player carries two sprite slots,
//! the weapon itself and its muzzle flash, cycled through the shared state
//! table every tick. All the `a_*` functions here are actions invoked from
//! table entries.

use sound_traits::SfxName;

use math::{Angle, FINEANGLES, FINEMASK, Fixed, fine_cosine, fine_sine, point_to_angle_2};

use crate::defs::{ActFn, AmmoType, BT_ATTACK, MELEERANGE, MISSILERANGE, WEAPON_INFO, WeaponType};
use crate::info::{MapObjKind, STATES, StateNum};
use crate::level::Level;
use crate::player::{Player, PlayerState};
use crate::sight::noise_alert;
use crate::thing::{MapObject, aim_line_attack, bullet_slope, gun_shot, line_attack, with_mobj};

const LOWERSPEED: Fixed = Fixed::from_int(6);
const RAISESPEED: Fixed = Fixed::from_int(6);
pub(crate) const WEAPONBOTTOM: Fixed = Fixed::from_int(128);
pub(crate) const WEAPONTOP: Fixed = Fixed::from_int(32);

#[derive(Debug, Clone, Copy)]
pub enum PsprNum {
    Weapon,
    Flash,
    NumPSprites,
}

/// One overlay sprite slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PspDef {
    /// `None` when the slot shows nothing
    pub state: Option<StateNum>,
    pub tics: i32,
    pub sx: Fixed,
    pub sy: Fixed,
}

impl PspDef {
    pub const fn new() -> Self {
        PspDef {
            state: None,
            tics: -1,
            sx: Fixed::ZERO,
            sy: Fixed::ZERO,
        }
    }
}

impl Default for PspDef {
    fn default() -> Self {
        PspDef::new()
    }
}

/// Put a sprite slot in a state, running actions and cascading through
/// zero-tic states.
///
/// Doom function name is `P_SetPsprite`
pub(crate) fn set_psprite(player: &mut Player, pos: usize, state: StateNum, level: &mut Level) {
    let mut state = state;
    loop {
        if state == StateNum::None {
            player.psprites[pos].state = None;
            player.psprites[pos].tics = -1;
            return;
        }

        let info = &STATES[state as usize];
        player.psprites[pos].state = Some(state);
        player.psprites[pos].tics = info.tics;

        if let ActFn::P(func) = &info.action {
            // the action may redirect the slot, so work on a copy and only
            // write it back if the slot still shows this state afterwards
            let mut psp = player.psprites[pos];
            func(player, &mut psp, level);
            if player.psprites[pos].state == Some(state) {
                player.psprites[pos] = psp;
            }
            if player.psprites[pos].state.is_none() {
                return;
            }
        }

        if player.psprites[pos].tics != 0 {
            return;
        }
        let Some(current) = player.psprites[pos].state else {
            return;
        };
        state = STATES[current as usize].next_state;
    }
}

/// Tick both sprite slots, with the flash tracking the weapon sway.
///
/// Doom function name is `P_MovePsprites`
pub(crate) fn move_psprites(player: &mut Player, level: &mut Level) {
    for pos in 0..PsprNum::NumPSprites as usize {
        let Some(state) = player.psprites[pos].state else {
            continue;
        };
        // -1 tics means the state holds forever
        if player.psprites[pos].tics == -1 {
            continue;
        }
        player.psprites[pos].tics -= 1;
        if player.psprites[pos].tics == 0 {
            let next = STATES[state as usize].next_state;
            set_psprite(player, pos, next, level);
        }
    }
    player.psprites[PsprNum::Flash as usize].sx = player.psprites[PsprNum::Weapon as usize].sx;
    player.psprites[PsprNum::Flash as usize].sy = player.psprites[PsprNum::Weapon as usize].sy;
}

/// Called on spawn so the ready weapon rises into view.
///
/// Doom function name is `P_SetupPsprites`
pub(crate) fn setup_player_sprites(player: &mut Player, level: &mut Level) {
    for psp in player.psprites.iter_mut() {
        *psp = PspDef::new();
    }
    player.pendingweapon = player.readyweapon;
    bring_up_weapon(player, level);
}

/// Start raising the pending weapon from the bottom of the view.
///
/// Doom function name is `P_BringUpWeapon`
fn bring_up_weapon(player: &mut Player, level: &mut Level) {
    if player.pendingweapon == WeaponType::NoChange {
        player.pendingweapon = player.readyweapon;
    }
    let up = WEAPON_INFO[usize::from(player.pendingweapon)].upstate;
    player.pendingweapon = WeaponType::NoChange;
    player.psprites[PsprNum::Weapon as usize].sy = WEAPONBOTTOM;
    set_psprite(player, PsprNum::Weapon as usize, up, level);
}

/// True if the ready weapon can fire. Out of ammo picks the best fallback
/// and starts lowering.
///
/// Doom function name is `P_CheckAmmo`
fn check_ammo(player: &mut Player, level: &mut Level) -> bool {
    let ammo = WEAPON_INFO[usize::from(player.readyweapon)].ammo;
    if ammo == AmmoType::NoAmmo || player.ammo[ammo as usize] > 0 {
        return true;
    }

    let owned = |w: WeaponType| player.weaponowned[w as usize];
    player.pendingweapon = if owned(WeaponType::Chaingun)
        && player.ammo[AmmoType::Clip as usize] > 0
    {
        WeaponType::Chaingun
    } else if owned(WeaponType::Shotgun) && player.ammo[AmmoType::Shell as usize] > 0 {
        WeaponType::Shotgun
    } else if player.ammo[AmmoType::Clip as usize] > 0 {
        WeaponType::Pistol
    } else if owned(WeaponType::Missile) && player.ammo[AmmoType::Missile as usize] > 0 {
        WeaponType::Missile
    } else {
        WeaponType::Fist
    };

    let down = WEAPON_INFO[usize::from(player.readyweapon)].downstate;
    set_psprite(player, PsprNum::Weapon as usize, down, level);
    false
}

/// Doom function name is `P_FireWeapon`
fn fire_weapon(player: &mut Player, level: &mut Level) {
    if !check_ammo(player, level) {
        return;
    }
    if let Some(id) = player.mobj {
        with_mobj(level, id, |mobj, level| {
            mobj.set_state(StateNum::PLAY_ATK1, level);
            let sector = level.map_data.subsectors[mobj.subsector].sector;
            noise_alert(level, id, sector);
        });
    }
    let attack = WEAPON_INFO[usize::from(player.readyweapon)].atkstate;
    set_psprite(player, PsprNum::Weapon as usize, attack, level);
}

/// Lower the current weapon without switching, used on death.
///
/// Doom function name is `P_DropWeapon`
pub(crate) fn drop_weapon(player: &mut Player, level: &mut Level) {
    let down = WEAPON_INFO[usize::from(player.readyweapon)].downstate;
    set_psprite(player, PsprNum::Weapon as usize, down, level);
}

/// The idle state: sway with the walk bob, watch for fire and change.
///
/// Doom function name is `A_WeaponReady`
pub(crate) fn a_weaponready(player: &mut Player, psp: &mut PspDef, level: &mut Level) {
    if let Some(id) = player.mobj {
        with_mobj(level, id, |mobj, level| {
            if matches!(mobj.state, StateNum::PLAY_ATK1 | StateNum::PLAY_ATK2) {
                mobj.set_state(StateNum::PLAY, level);
            }
        });
    }

    if player.pendingweapon != WeaponType::NoChange || player.health <= 0 {
        let down = WEAPON_INFO[usize::from(player.readyweapon)].downstate;
        set_psprite(player, PsprNum::Weapon as usize, down, level);
        return;
    }

    if player.cmd.buttons & BT_ATTACK != 0 {
        // the rocket launcher does not autofire
        if !player.attackdown || player.readyweapon != WeaponType::Missile {
            player.attackdown = true;
            fire_weapon(player, level);
            return;
        }
    } else {
        player.attackdown = false;
    }

    let angle = (128 * level.level_time as usize) & FINEMASK;
    psp.sx = Fixed::ONE + player.bob * fine_cosine(angle);
    let angle = angle & (FINEANGLES / 2 - 1);
    psp.sy = WEAPONTOP + player.bob * fine_sine(angle);
}

/// Held trigger: keep firing unless a change is pending or ammo ran out.
///
/// Doom function name is `A_ReFire`
pub(crate) fn a_refire(player: &mut Player, _psp: &mut PspDef, level: &mut Level) {
    if player.cmd.buttons & BT_ATTACK != 0
        && player.pendingweapon == WeaponType::NoChange
        && player.health > 0
    {
        player.refire += 1;
        fire_weapon(player, level);
    } else {
        player.refire = 0;
        check_ammo(player, level);
    }
}

/// Doom function name is `A_Lower`
pub(crate) fn a_lower(player: &mut Player, psp: &mut PspDef, level: &mut Level) {
    psp.sy += LOWERSPEED;
    if psp.sy < WEAPONBOTTOM {
        return;
    }
    if player.player_state == PlayerState::Dead {
        // keep it down while the corpse settles
        psp.sy = WEAPONBOTTOM;
        return;
    }
    if player.health <= 0 {
        set_psprite(player, PsprNum::Weapon as usize, StateNum::None, level);
        return;
    }
    player.readyweapon = player.pendingweapon;
    bring_up_weapon(player, level);
}

/// Doom function name is `A_Raise`
pub(crate) fn a_raise(player: &mut Player, psp: &mut PspDef, level: &mut Level) {
    psp.sy -= RAISESPEED;
    if psp.sy > WEAPONTOP {
        return;
    }
    psp.sy = WEAPONTOP;
    // the slot is redirected below, which discards `psp`, so pin the
    // height on the slot itself
    player.psprites[PsprNum::Weapon as usize].sy = WEAPONTOP;
    let ready = WEAPON_INFO[usize::from(player.readyweapon)].readystate;
    set_psprite(player, PsprNum::Weapon as usize, ready, level);
}

/// Doom function name is `A_GunFlash`
pub(crate) fn a_gunflash(player: &mut Player, _psp: &mut PspDef, level: &mut Level) {
    if let Some(id) = player.mobj {
        with_mobj(level, id, |mobj, level| {
            mobj.set_state(StateNum::PLAY_ATK2, level);
        });
    }
    let flash = WEAPON_INFO[usize::from(player.readyweapon)].flashstate;
    set_psprite(player, PsprNum::Flash as usize, flash, level);
}

/// Doom function name is `A_Punch`
pub(crate) fn a_punch(player: &mut Player, _psp: &mut PspDef, level: &mut Level) {
    let Some(id) = player.mobj else {
        return;
    };
    with_mobj(level, id, |mobj, level| {
        let damage = (level.rng.p_random() % 10 + 1) << 1;
        let spread = Angle::new(((level.rng.p_random() - level.rng.p_random()) << 18) as u32);
        let angle = mobj.angle + spread;
        let aim = aim_line_attack(mobj, angle, MELEERANGE, level);
        line_attack(mobj, damage, MELEERANGE, angle, aim, level);

        // connecting turns the puncher to face the victim
        if let Some(aim) = aim {
            mobj.start_sound(level, SfxName::Punch);
            if let Some(txy) = level.thinkers.mobj(aim.thing).map(|t| t.xy) {
                mobj.angle = point_to_angle_2(txy, mobj.xy);
            }
        }
    });
}

/// Doom function name is `A_FirePistol`
pub(crate) fn a_firepistol(player: &mut Player, _psp: &mut PspDef, level: &mut Level) {
    let Some(id) = player.mobj else {
        return;
    };
    player.ammo[AmmoType::Clip as usize] -= 1;
    let flash = WEAPON_INFO[usize::from(player.readyweapon)].flashstate;
    set_psprite(player, PsprNum::Flash as usize, flash, level);

    let accurate = player.refire == 0;
    with_mobj(level, id, |mobj, level| {
        mobj.start_sound(level, SfxName::Pistol);
        mobj.set_state(StateNum::PLAY_ATK2, level);
        let aim = bullet_slope(mobj, level);
        gun_shot(mobj, accurate, MISSILERANGE, aim, level);
    });
}

/// Seven pellets sharing one aim slope.
///
/// Doom function name is `A_FireShotgun`
pub(crate) fn a_fireshotgun(player: &mut Player, _psp: &mut PspDef, level: &mut Level) {
    let Some(id) = player.mobj else {
        return;
    };
    player.ammo[AmmoType::Shell as usize] -= 1;
    let flash = WEAPON_INFO[usize::from(player.readyweapon)].flashstate;
    set_psprite(player, PsprNum::Flash as usize, flash, level);

    with_mobj(level, id, |mobj, level| {
        mobj.start_sound(level, SfxName::Shotgn);
        mobj.set_state(StateNum::PLAY_ATK2, level);
        let aim = bullet_slope(mobj, level);
        for _ in 0..7 {
            gun_shot(mobj, false, MISSILERANGE, aim, level);
        }
    });
}

/// Doom function name is `A_FireCGun`
pub(crate) fn a_firecgun(player: &mut Player, psp: &mut PspDef, level: &mut Level) {
    let Some(id) = player.mobj else {
        return;
    };
    if !check_ammo(player, level) {
        return;
    }
    player.ammo[AmmoType::Clip as usize] -= 1;

    // the two barrel frames alternate flashes
    let flash = if psp.state == Some(StateNum::CHAIN1) {
        StateNum::CHAINFLASH1
    } else {
        StateNum::CHAINFLASH2
    };
    set_psprite(player, PsprNum::Flash as usize, flash, level);

    let accurate = player.refire == 0;
    with_mobj(level, id, |mobj, level| {
        mobj.start_sound(level, SfxName::Pistol);
        mobj.set_state(StateNum::PLAY_ATK2, level);
        let aim = bullet_slope(mobj, level);
        gun_shot(mobj, accurate, MISSILERANGE, aim, level);
    });
}

/// Doom function name is `A_FireMissile`
pub(crate) fn a_firemissile(player: &mut Player, _psp: &mut PspDef, level: &mut Level) {
    let Some(id) = player.mobj else {
        return;
    };
    player.ammo[AmmoType::Missile as usize] -= 1;
    MapObject::spawn_player_missile(id, MapObjKind::Rocket, level);
}

pub(crate) fn a_light0(player: &mut Player, _psp: &mut PspDef, _level: &mut Level) {
    player.extralight = 0;
}

pub(crate) fn a_light1(player: &mut Player, _psp: &mut PspDef, _level: &mut Level) {
    player.extralight = 1;
}

pub(crate) fn a_light2(player: &mut Player, _psp: &mut PspDef, _level: &mut Level) {
    player.extralight = 2;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defs::Skill;
    use crate::level::test_maps::square_map;
    use crate::level::{Level, LevelOptions};

    fn bare_level() -> Level {
        let (tx, _rx) = std::sync::mpsc::channel();
        Level::new(LevelOptions::default(), square_map(), tx).unwrap()
    }

    fn armed_player() -> Player {
        let mut player = Player::new();
        player.reborn();
        player
    }

    #[test]
    fn bring_up_starts_at_the_bottom_of_the_view() {
        let mut level = bare_level();
        let mut player = armed_player();
        setup_player_sprites(&mut player, &mut level);

        let weapon = player.psprites[PsprNum::Weapon as usize];
        assert_eq!(weapon.state, Some(StateNum::PISTOLUP));
        // entering the up state runs one raise step straight away
        assert_eq!(weapon.sy, WEAPONBOTTOM - RAISESPEED);
        assert_eq!(player.pendingweapon, WeaponType::NoChange);
    }

    #[test]
    fn raise_stops_at_the_top_in_the_ready_state() {
        let mut level = bare_level();
        let mut player = armed_player();
        setup_player_sprites(&mut player, &mut level);

        // 90 units of travel left at 6 per tick
        for _ in 0..20 {
            move_psprites(&mut player, &mut level);
        }
        let weapon = player.psprites[PsprNum::Weapon as usize];
        assert_eq!(weapon.state, Some(StateNum::PISTOL));
        assert_eq!(weapon.sy, WEAPONTOP);
    }

    #[test]
    fn empty_weapon_falls_back_to_an_armed_one() {
        let mut level = bare_level();
        let mut player = armed_player();
        player.readyweapon = WeaponType::Chaingun;
        player.weaponowned[WeaponType::Chaingun as usize] = true;
        player.ammo[AmmoType::Clip as usize] = 0;
        player.ammo[AmmoType::Shell as usize] = 4;
        player.weaponowned[WeaponType::Shotgun as usize] = true;
        setup_player_sprites(&mut player, &mut level);
        // let the chaingun reach the ready position first
        for _ in 0..20 {
            move_psprites(&mut player, &mut level);
        }

        assert!(!check_ammo(&mut player, &mut level));
        assert_eq!(player.pendingweapon, WeaponType::Shotgun);
        assert_eq!(
            player.psprites[PsprNum::Weapon as usize].state,
            Some(StateNum::CHAINDOWN)
        );
    }

    #[test]
    fn fists_never_run_dry() {
        let mut level = bare_level();
        let mut player = armed_player();
        player.readyweapon = WeaponType::Fist;
        player.ammo = [0; AmmoType::NumAmmo as usize];
        assert!(check_ammo(&mut player, &mut level));
    }

    #[test]
    fn giving_ammo_on_baby_skill_feeds_the_switch() {
        let mut player = armed_player();
        player.ammo[AmmoType::Shell as usize] = 0;
        player.weaponowned[WeaponType::Shotgun as usize] = true;
        player.readyweapon = WeaponType::Fist;
        assert!(player.give_ammo(AmmoType::Shell, 1, Skill::Baby));
        assert_eq!(player.pendingweapon, WeaponType::Shotgun);
    }
}
