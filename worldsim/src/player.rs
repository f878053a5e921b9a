//! Per-player state and the per-tick player update: movement from the
//! latest command, view height bobbing, sector effects underfoot, and the
//! use and weapon-change buttons. Weapon firing itself runs through the
//! sprite state machine in `player_sprite`.

use log::info;
use math::{ANG90, Angle, FINEANGLES, FINEMASK, Fixed, fine_sine, point_to_angle_2};

use crate::defs::{
    AmmoType, BT_CHANGE, BT_USE, BT_WEAPONMASK, BT_WEAPONSHIFT, CLIP_AMMO, Card, MAXHEALTH,
    MAX_AMMO, Skill, TicCmd, VIEWHEIGHT, WeaponType,
};
use crate::env::specials::player_in_special_sector;
use crate::info::StateNum;
use crate::level::Level;
use crate::player_sprite::{PspDef, PsprNum, move_psprites};
use crate::thing::{MapObjFlag, with_mobj};
use crate::thinker::ThinkerId;

/// 16 map units of view bob at full sprint
const MAXBOB: Fixed = Fixed::from_int(16);

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    /// Playing or camping
    Live,
    /// Dead on the ground, view follows killer
    Dead,
    /// Waiting to be respawned at a player start
    #[default]
    Reborn,
}

/// Bit flags in `Player::cheats`
#[derive(Debug, Clone, Copy)]
pub enum PlayerCheat {
    /// Walk through walls
    Noclip = 1,
    /// Take no damage
    Godmode = 2,
}

/// Doom struct name is `player_t`
pub struct Player {
    /// Avatar handle, None between death and respawn
    pub mobj: Option<ThinkerId>,
    pub player_state: PlayerState,
    /// Intent for the current tick, copied in by the world update
    pub cmd: TicCmd,

    /// Focal height above the map origin
    pub viewz: Fixed,
    /// Base height of the eyes above the floor
    pub viewheight: Fixed,
    /// Squat/recover speed after landings
    pub deltaviewheight: Fixed,
    /// Bounded, scaled total momentum for view and weapon sway
    pub bob: Fixed,
    pub onground: bool,

    /// Mirrors the avatar's health while alive
    pub health: i32,
    pub armor_points: i32,
    /// 0 none, 1 green, 2 blue
    pub armor_type: i32,

    pub cards: [bool; Card::NumCards as usize],
    pub frags: i32,

    pub readyweapon: WeaponType,
    /// `WeaponType::NoChange` if not switching
    pub pendingweapon: WeaponType,
    pub weaponowned: [bool; WeaponType::NumWeapons as usize],
    pub ammo: [u32; AmmoType::NumAmmo as usize],
    pub maxammo: [u32; AmmoType::NumAmmo as usize],

    /// True if the fire button was down last tick
    pub attackdown: bool,
    pub usedown: bool,

    pub cheats: u32,
    /// Consecutive shots fired; refired shots are less accurate
    pub refire: i32,

    pub killcount: i32,
    pub itemcount: i32,
    pub secretcount: i32,

    /// Hint message for the HUD, consumed by the caller
    pub message: Option<&'static str>,

    /// Screen-flash counters for pain and pickups
    pub damagecount: i32,
    pub bonuscount: i32,

    /// Who last hurt this player, None for the environment
    pub attacker: Option<ThinkerId>,
    /// Gun flashes light up the view briefly
    pub extralight: i32,

    pub(crate) psprites: [PspDef; PsprNum::NumPSprites as usize],
}

impl Default for Player {
    fn default() -> Self {
        Player::new()
    }
}

impl Player {
    pub const fn new() -> Player {
        Player {
            mobj: None,
            player_state: PlayerState::Reborn,
            cmd: TicCmd::new(),

            viewz: Fixed::ZERO,
            viewheight: VIEWHEIGHT,
            deltaviewheight: Fixed::ZERO,
            bob: Fixed::ZERO,
            onground: true,

            health: MAXHEALTH,
            armor_points: 0,
            armor_type: 0,

            cards: [false; Card::NumCards as usize],
            frags: 0,

            readyweapon: WeaponType::Pistol,
            pendingweapon: WeaponType::NoChange,
            weaponowned: [false; WeaponType::NumWeapons as usize],
            ammo: [0; AmmoType::NumAmmo as usize],
            maxammo: [0; AmmoType::NumAmmo as usize],

            attackdown: false,
            usedown: false,

            cheats: 0,
            refire: 0,

            killcount: 0,
            itemcount: 0,
            secretcount: 0,

            message: None,
            damagecount: 0,
            bonuscount: 0,

            attacker: None,
            extralight: 0,

            psprites: [PspDef::new(), PspDef::new()],
        }
    }

    /// Fresh loadout for a (re)spawn, keeping the tally counters.
    ///
    /// Doom function name is `G_PlayerReborn`
    pub fn reborn(&mut self) {
        let killcount = self.killcount;
        let itemcount = self.itemcount;
        let secretcount = self.secretcount;
        let frags = self.frags;

        *self = Player::new();
        self.killcount = killcount;
        self.itemcount = itemcount;
        self.secretcount = secretcount;
        self.frags = frags;

        self.player_state = PlayerState::Live;
        self.readyweapon = WeaponType::Pistol;
        self.pendingweapon = WeaponType::Pistol;
        self.weaponowned[WeaponType::Fist as usize] = true;
        self.weaponowned[WeaponType::Pistol as usize] = true;
        self.ammo[AmmoType::Clip as usize] = 50;
        self.maxammo.copy_from_slice(&MAX_AMMO);
    }

    /// Strip the between-level state: keys, flashes, messages.
    ///
    /// Doom function name is `G_PlayerFinishLevel`
    pub fn finish_level(&mut self) {
        for card in self.cards.iter_mut() {
            *card = false;
        }
        self.message = None;
        self.damagecount = 0;
        self.bonuscount = 0;
        self.extralight = 0;
    }

    /// Doom function name is `P_GiveAmmo`
    pub(crate) fn give_ammo(&mut self, ammo: AmmoType, mut num: u32, skill: Skill) -> bool {
        if matches!(ammo, AmmoType::NoAmmo | AmmoType::NumAmmo) {
            return false;
        }
        if self.ammo[ammo as usize] == self.maxammo[ammo as usize] {
            return false;
        }

        if num != 0 {
            num *= CLIP_AMMO[ammo as usize];
        } else {
            // a dropped half-used clip
            num = CLIP_AMMO[ammo as usize] / 2;
        }
        if skill == Skill::Baby || skill == Skill::Nightmare {
            num <<= 1;
        }

        let old_ammo = self.ammo[ammo as usize];
        self.ammo[ammo as usize] =
            (self.ammo[ammo as usize] + num).min(self.maxammo[ammo as usize]);

        // running dry was deliberate if there was still some left
        if old_ammo != 0 {
            return true;
        }

        match ammo {
            AmmoType::Clip => {
                if self.readyweapon == WeaponType::Fist {
                    if self.weaponowned[WeaponType::Chaingun as usize] {
                        self.pendingweapon = WeaponType::Chaingun;
                    } else {
                        self.pendingweapon = WeaponType::Pistol;
                    }
                }
            }
            AmmoType::Shell => {
                if (self.readyweapon == WeaponType::Fist
                    || self.pendingweapon == WeaponType::Pistol)
                    && self.weaponowned[WeaponType::Shotgun as usize]
                {
                    self.pendingweapon = WeaponType::Shotgun;
                }
            }
            AmmoType::Missile => {
                if self.readyweapon == WeaponType::Fist
                    && self.weaponowned[WeaponType::Missile as usize]
                {
                    self.pendingweapon = WeaponType::Missile;
                }
            }
            _ => {}
        }
        true
    }

    /// Doom function name is `P_GiveWeapon`
    pub(crate) fn give_weapon(&mut self, weapon: WeaponType, dropped: bool, skill: Skill) -> bool {
        let info = &crate::defs::WEAPON_INFO[usize::from(weapon)];
        let gave_ammo = if info.ammo != AmmoType::NoAmmo {
            // dropped weapons carry less
            self.give_ammo(info.ammo, if dropped { 1 } else { 2 }, skill)
        } else {
            false
        };

        let gave_weapon = if self.weaponowned[weapon as usize] {
            false
        } else {
            self.weaponowned[weapon as usize] = true;
            self.pendingweapon = weapon;
            true
        };
        gave_weapon || gave_ammo
    }

    pub(crate) fn give_armour(&mut self, armour: i32) -> bool {
        let hits = armour * 100;
        if self.armor_points >= hits {
            return false;
        }
        self.armor_type = armour;
        self.armor_points = hits;
        true
    }

    pub(crate) fn give_key(&mut self, card: Card) {
        if self.cards[card as usize] {
            return;
        }
        self.bonuscount += crate::thing::BONUSADD;
        self.cards[card as usize] = true;
    }

    pub(crate) fn give_body(&mut self, num: i32) -> bool {
        if self.health >= MAXHEALTH {
            return false;
        }
        self.health = (self.health + num).min(MAXHEALTH);
        true
    }
}

/// One tick of player control: movement, view, sector effects, buttons,
/// then the weapon sprite state machine.
///
/// Doom function name is `P_PlayerThink`
pub(crate) fn player_think(slot: usize, level: &mut Level) {
    let Some(id) = level.players[slot].mobj else {
        return;
    };

    // the noclip cheat lives on the player but acts on the avatar
    let noclip = level.players[slot].cheats & PlayerCheat::Noclip as u32 != 0;
    with_mobj(level, id, |mobj, _| {
        if noclip {
            mobj.flags |= MapObjFlag::Noclip as u32;
        } else {
            mobj.flags &= !(MapObjFlag::Noclip as u32);
        }
    });

    if level.players[slot].player_state == PlayerState::Dead {
        death_think(slot, level);
        return;
    }

    // teleport freeze also blocks movement
    let frozen = with_mobj(level, id, |mobj, _| {
        if mobj.reactiontime > 0 {
            mobj.reactiontime -= 1;
            true
        } else {
            false
        }
    })
    .unwrap_or(true);
    if !frozen {
        move_player(slot, level);
    }
    calc_height(slot, level);
    player_in_special_sector(slot, level);

    let cmd = level.players[slot].cmd;
    if cmd.buttons & BT_CHANGE != 0 {
        let requested = match (cmd.buttons & BT_WEAPONMASK) >> BT_WEAPONSHIFT {
            0 => WeaponType::Fist,
            1 => WeaponType::Pistol,
            2 => WeaponType::Shotgun,
            3 => WeaponType::Chaingun,
            _ => WeaponType::Missile,
        };
        let player = &mut level.players[slot];
        if player.weaponowned[requested as usize] && requested != player.readyweapon {
            player.pendingweapon = requested;
        }
    }

    if cmd.buttons & BT_USE != 0 {
        if !level.players[slot].usedown {
            level.players[slot].usedown = true;
            with_mobj(level, id, |mobj, level| mobj.use_lines(level));
        }
    } else {
        level.players[slot].usedown = false;
    }

    // firing happens inside the ready-weapon action
    let mut player = std::mem::take(&mut level.players[slot]);
    move_psprites(&mut player, level);
    level.players[slot] = player;
}

/// Doom function name is `P_MovePlayer`
fn move_player(slot: usize, level: &mut Level) {
    let Some(id) = level.players[slot].mobj else {
        return;
    };
    with_mobj(level, id, |mobj, level| {
        let cmd = level.players[slot].cmd;
        if cmd.angleturn != 0 {
            mobj.angle += Angle::new(((cmd.angleturn as i32) << 16) as u32);
        }

        let onground = mobj.z <= mobj.floorz;
        level.players[slot].onground = onground;

        // moves are in 1/2048ths of a map unit of momentum
        if cmd.forwardmove != 0 && onground {
            let thrust = Fixed::from_bits(cmd.forwardmove as i32 * 2048);
            mobj.momxy += mobj.angle.unit() * thrust;
        }
        if cmd.sidemove != 0 && onground {
            let thrust = Fixed::from_bits(cmd.sidemove as i32 * 2048);
            mobj.momxy += (mobj.angle - ANG90).unit() * thrust;
        }

        if (cmd.forwardmove != 0 || cmd.sidemove != 0) && mobj.state == StateNum::PLAY {
            mobj.set_state(StateNum::PLAY_RUN1, level);
        }
    });
}

/// Walk bob and landing squat, folded into `viewz`.
///
/// Doom function name is `P_CalcHeight`
fn calc_height(slot: usize, level: &mut Level) {
    let Some(id) = level.players[slot].mobj else {
        return;
    };
    let level_time = level.level_time;
    with_mobj(level, id, |mobj, level| {
        let player = &mut level.players[slot];

        let mut bob = mobj.momxy.x * mobj.momxy.x + mobj.momxy.y * mobj.momxy.y;
        bob = bob >> 2;
        if bob > MAXBOB {
            bob = MAXBOB;
        }
        player.bob = bob;

        let ceiling_clip = mobj.ceilingz - Fixed::from_int(4);
        if !player.onground {
            player.viewz = (mobj.z + VIEWHEIGHT).min(ceiling_clip);
            return;
        }

        let angle = (FINEANGLES / 20 * level_time as usize) & FINEMASK;
        let bob = (player.bob / 2) * fine_sine(angle);

        if player.player_state == PlayerState::Live {
            player.viewheight += player.deltaviewheight;
            if player.viewheight > VIEWHEIGHT {
                player.viewheight = VIEWHEIGHT;
                player.deltaviewheight = Fixed::ZERO;
            }
            if player.viewheight < VIEWHEIGHT / 2 {
                player.viewheight = VIEWHEIGHT / 2;
                if player.deltaviewheight <= Fixed::ZERO {
                    player.deltaviewheight = Fixed::from_bits(1);
                }
            }
            if player.deltaviewheight != Fixed::ZERO {
                // recover speed ramps up
                player.deltaviewheight += Fixed::ONE / 4;
                if player.deltaviewheight == Fixed::ZERO {
                    player.deltaviewheight = Fixed::from_bits(1);
                }
            }
        }

        player.viewz = (mobj.z + player.viewheight + bob).min(ceiling_clip);
    });
}

/// Sink the view, track the killer, wait for the use button.
///
/// Doom function name is `P_DeathThink`
fn death_think(slot: usize, level: &mut Level) {
    let mut player = std::mem::take(&mut level.players[slot]);
    move_psprites(&mut player, level);
    level.players[slot] = player;

    let Some(id) = level.players[slot].mobj else {
        return;
    };

    with_mobj(level, id, |mobj, level| {
        let player = &mut level.players[slot];
        if player.viewheight > Fixed::from_int(6) {
            player.viewheight -= Fixed::ONE;
        }
        if player.viewheight < Fixed::from_int(6) {
            player.viewheight = Fixed::from_int(6);
        }
        player.deltaviewheight = Fixed::ZERO;
        player.onground = mobj.z <= mobj.floorz;
        player.viewz = mobj.z + player.viewheight;

        // keep the view on whoever did it
        if let Some(att) = player.attacker.filter(|a| *a != id) {
            if let Some(axy) = level.thinkers.mobj(att).map(|a| a.xy) {
                mobj.angle = point_to_angle_2(axy, mobj.xy);
            }
        } else if level.players[slot].damagecount > 0 {
            level.players[slot].damagecount -= 1;
        }
    });

    if level.players[slot].cmd.buttons & BT_USE != 0 {
        if !level.players[slot].usedown {
            level.players[slot].usedown = true;
            level.players[slot].player_state = PlayerState::Reborn;
            info!("Player {slot} respawning");
        }
    } else {
        level.players[slot].usedown = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reborn_keeps_tallies_and_resets_loadout() {
        let mut player = Player::new();
        player.killcount = 7;
        player.secretcount = 2;
        player.cards[Card::Bluecard as usize] = true;
        player.ammo[AmmoType::Shell as usize] = 10;

        player.reborn();
        assert_eq!(player.killcount, 7);
        assert_eq!(player.secretcount, 2);
        assert!(!player.cards[Card::Bluecard as usize]);
        assert_eq!(player.ammo[AmmoType::Clip as usize], 50);
        assert_eq!(player.ammo[AmmoType::Shell as usize], 0);
        assert!(player.weaponowned[WeaponType::Pistol as usize]);
        assert_eq!(player.player_state, PlayerState::Live);
    }

    #[test]
    fn ammo_is_doubled_on_the_outer_skills() {
        let mut easy = Player::new();
        easy.reborn();
        easy.ammo[AmmoType::Clip as usize] = 0;
        assert!(easy.give_ammo(AmmoType::Clip, 1, Skill::Baby));
        assert_eq!(easy.ammo[AmmoType::Clip as usize], 20);

        let mut medium = Player::new();
        medium.reborn();
        medium.ammo[AmmoType::Clip as usize] = 0;
        assert!(medium.give_ammo(AmmoType::Clip, 1, Skill::Medium));
        assert_eq!(medium.ammo[AmmoType::Clip as usize], 10);
    }

    #[test]
    fn full_ammo_refuses_pickup() {
        let mut player = Player::new();
        player.reborn();
        player.ammo[AmmoType::Clip as usize] = MAX_AMMO[AmmoType::Clip as usize];
        assert!(!player.give_ammo(AmmoType::Clip, 1, Skill::Medium));
    }

    #[test]
    fn new_weapon_switches_to_it() {
        let mut player = Player::new();
        player.reborn();
        assert!(player.give_weapon(WeaponType::Shotgun, false, Skill::Medium));
        assert_eq!(player.pendingweapon, WeaponType::Shotgun);
        assert!(player.weaponowned[WeaponType::Shotgun as usize]);

        // owning it already only scavenges the ammo
        player.pendingweapon = WeaponType::NoChange;
        assert!(player.give_weapon(WeaponType::Shotgun, false, Skill::Medium));
        assert_eq!(player.pendingweapon, WeaponType::NoChange);
    }

    #[test]
    fn better_armour_replaces_worse() {
        let mut player = Player::new();
        assert!(player.give_armour(1));
        assert_eq!(player.armor_points, 100);
        assert!(!player.give_armour(1));
        assert!(player.give_armour(2));
        assert_eq!(player.armor_points, 200);
        assert_eq!(player.armor_type, 2);
    }
}
