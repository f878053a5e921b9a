//! Damage, death, and pickups. Everything that changes a thing's health or
//! a player's inventory goes through here.

use log::{debug, info, warn};
use math::{ANG180, FRACBITS, Fixed, Vec2, point_to_angle_2};
use sound_traits::SfxName;

use crate::defs::{AmmoType, BASETHRESHOLD, Card, ONFLOORZ, Skill, WeaponType};
use crate::info::{MapObjKind, SpriteNum, StateNum};
use crate::lang::english::*;
use crate::level::Level;
use crate::player::{PlayerCheat, PlayerState};
use crate::player_sprite::drop_weapon;
use crate::thing::{MapObjFlag, MapObject, with_mobj};
use crate::thinker::ThinkerId;

/// Screen flash added per pickup
pub const BONUSADD: i32 = 6;

impl MapObject {
    /// Deal damage to self.
    ///
    /// - `inflictor` is the thing doing the hitting, a missile or a melee
    ///   attacker. `None` for damage floors and crushers.
    /// - `source` is the thing to blame and retaliate against. `None` for
    ///   environmental damage.
    /// - `source_is_inflictor` lets the thrust come from the source's
    ///   position when no inflictor reference is available.
    ///
    /// Doom function name is `P_DamageMobj`
    pub(crate) fn take_damage(
        &mut self,
        inflictor: Option<&MapObject>,
        source: Option<ThinkerId>,
        source_is_inflictor: bool,
        mut damage: i32,
        level: &mut Level,
    ) {
        if self.flags & MapObjFlag::Shootable as u32 == 0 {
            return;
        }
        if self.health <= 0 {
            return;
        }

        if self.flags & MapObjFlag::Skullfly as u32 != 0 {
            self.momxy = Vec2::ZERO;
            self.momz = Fixed::ZERO;
            self.flags &= !(MapObjFlag::Skullfly as u32);
            self.set_state(self.info.spawnstate, level);
        }

        if self.player.is_some() && level.game_skill == Skill::Baby {
            damage >>= 1; // take half damage in trainer mode
        }

        // kick away from whatever did the hitting
        let thrust_from = inflictor.map(|i| (i.xy, i.z)).or_else(|| {
            if source_is_inflictor {
                source
                    .and_then(|s| level.thinkers.mobj(s))
                    .map(|m| (m.xy, m.z))
            } else {
                None
            }
        });
        if let Some((ixy, iz)) = thrust_from {
            if self.flags & MapObjFlag::Noclip as u32 == 0 {
                let mut angle = point_to_angle_2(self.xy, ixy);
                let mut thrust = Fixed::from_bits(
                    (damage as i64 * (1 << (FRACBITS - 3)) * 100 / self.info.mass as i64) as i32,
                );

                // fall forwards sometimes when the blow is a finisher
                if damage < 40
                    && damage > self.health
                    && self.z - iz > Fixed::from_int(64)
                    && level.rng.p_random() & 1 != 0
                {
                    angle += ANG180;
                    thrust = thrust * 4;
                }

                self.momxy += angle.unit() * thrust;
            }
        }

        if let Some(slot) = self.player {
            let sector = level.map_data.subsectors[self.subsector].sector;
            // the exit-floor special kills the level, not the player
            if level.map_data.sectors[sector].special == 11 && damage >= self.health {
                damage = self.health - 1;
            }

            let player = &mut level.players[slot];
            if player.cheats & PlayerCheat::Godmode as u32 != 0 && damage < 1000 {
                return;
            }
            if player.armor_type != 0 {
                let mut saved = if player.armor_type == 1 {
                    damage / 3
                } else {
                    damage / 2
                };
                if player.armor_points <= saved {
                    // armour is used up
                    saved = player.armor_points;
                    player.armor_type = 0;
                }
                player.armor_points -= saved;
                damage -= saved;
            }

            player.health = (player.health - damage).max(0);
            if source.is_some() {
                player.attacker = source;
            }
            // teleport stomps would flash for minutes otherwise
            player.damagecount = (player.damagecount + damage).min(100);
        }

        debug!("{} takes {damage} damage", self.thinker);
        self.health -= damage;
        if self.health <= 0 {
            let killer_player = source.and_then(|sid| {
                level
                    .thinkers
                    .mobj(sid)
                    .and_then(|m| m.player)
                    .or_else(|| inflictor.filter(|i| i.thinker == sid).and_then(|i| i.player))
            });
            self.kill(killer_player, level);
            return;
        }

        if level.rng.p_random() < self.info.painchance
            && self.flags & MapObjFlag::Skullfly as u32 == 0
        {
            self.flags |= MapObjFlag::Justhit as u32;
            if !self.set_state(self.info.painstate, level) {
                return;
            }
        }

        self.reactiontime = 0; // awake and ready

        if self.threshold == 0 || self.kind == MapObjKind::Vile {
            if let Some(sid) = source {
                if sid != self.thinker {
                    // the detached attacker resolves through the inflictor
                    let source_kind = level
                        .thinkers
                        .mobj(sid)
                        .map(|m| m.kind)
                        .or_else(|| inflictor.filter(|i| i.thinker == sid).map(|i| i.kind));
                    if source_kind.is_some() && source_kind != Some(MapObjKind::Vile) {
                        self.target = Some(sid);
                        self.threshold = BASETHRESHOLD;
                        if self.state == self.info.spawnstate
                            && self.info.seestate != StateNum::None
                        {
                            self.set_state(self.info.seestate, level);
                        }
                    }
                }
            }
        }
    }

    /// Doom function name is `P_KillMobj`
    fn kill(&mut self, killer_player: Option<usize>, level: &mut Level) {
        self.flags &= !(MapObjFlag::Shootable as u32
            | MapObjFlag::Float as u32
            | MapObjFlag::Skullfly as u32);
        if self.kind != MapObjKind::Skull {
            self.flags &= !(MapObjFlag::Nogravity as u32);
        }
        self.flags |= MapObjFlag::Corpse as u32 | MapObjFlag::Dropoff as u32;
        self.height = self.height >> 2;

        if let Some(slot) = killer_player {
            if self.flags & MapObjFlag::Countkill as u32 != 0 {
                level.players[slot].killcount += 1;
            }
            if self.player.is_some() {
                level.players[slot].frags += 1;
            }
        } else if self.flags & MapObjFlag::Countkill as u32 != 0 {
            // environment kills still count towards the tally
            level.players[0].killcount += 1;
        }

        if let Some(slot) = self.player {
            info!("Player {slot} died");
            self.flags &= !(MapObjFlag::Solid as u32);
            let mut player = std::mem::take(&mut level.players[slot]);
            player.player_state = PlayerState::Dead;
            if killer_player.is_none() {
                // environment kills count against you
                player.frags += 1;
            }
            drop_weapon(&mut player, level);
            level.players[slot] = player;
        }

        if self.health < -self.info.spawnhealth && self.info.xdeathstate != StateNum::None {
            self.set_state(self.info.xdeathstate, level);
        } else {
            self.set_state(self.info.deathstate, level);
        }

        self.tics -= level.rng.p_random() & 3;
        if self.tics < 1 {
            self.tics = 1;
        }

        // ammo and weapon drops
        let item = match self.kind {
            MapObjKind::Possessed => MapObjKind::Clip,
            MapObjKind::Shotguy => MapObjKind::Shotgun,
            _ => return,
        };
        if let Ok(id) = MapObject::spawn_map_object(self.xy.x, self.xy.y, ONFLOORZ, item, level) {
            with_mobj(level, id, |mobj, _| {
                mobj.flags |= MapObjFlag::Dropped as u32;
            });
        }
    }

    /// Doom function name is `P_ExplodeMissile`
    pub(crate) fn explode_missile(&mut self, level: &mut Level) {
        self.momxy = Vec2::ZERO;
        self.momz = Fixed::ZERO;
        if !self.set_state(self.info.deathstate, level) {
            return;
        }

        self.tics -= level.rng.p_random() & 3;
        if self.tics < 1 {
            self.tics = 1;
        }

        self.flags &= !(MapObjFlag::Missile as u32);

        if self.info.deathsound != SfxName::None {
            self.start_sound(level, self.info.deathsound);
        }
    }

    /// Walked over a pickup. The pickup removes itself once granted.
    ///
    /// Doom function name is `P_TouchSpecialThing`
    pub(crate) fn touch_special_thing(&mut self, special: &mut MapObject, level: &mut Level) {
        let delta = special.z - self.z;
        if delta > self.height || delta < -Fixed::from_int(8) {
            // out of reach, the map is 2D but pickups are not
            return;
        }

        let Some(slot) = self.player else {
            return;
        };
        if self.health <= 0 {
            return; // dead things pick nothing up
        }

        let mut sound = SfxName::Itemup;
        let skill = level.game_skill;
        let dropped = special.flags & MapObjFlag::Dropped as u32 != 0;
        let player = &mut level.players[slot];

        match special.sprite {
            SpriteNum::ARM1 => {
                if !player.give_armour(1) {
                    return;
                }
                player.message = Some(GOTARMOR);
            }

            SpriteNum::BKEY => {
                if !player.cards[Card::Bluecard as usize] {
                    player.message = Some(GOTBLUECARD);
                }
                player.give_key(Card::Bluecard);
            }
            SpriteNum::YKEY => {
                if !player.cards[Card::Yellowcard as usize] {
                    player.message = Some(GOTYELWCARD);
                }
                player.give_key(Card::Yellowcard);
            }
            SpriteNum::RKEY => {
                if !player.cards[Card::Redcard as usize] {
                    player.message = Some(GOTREDCARD);
                }
                player.give_key(Card::Redcard);
            }

            SpriteNum::STIM => {
                if !player.give_body(10) {
                    return;
                }
                player.message = Some(GOTSTIM);
            }
            SpriteNum::MEDI => {
                if !player.give_body(25) {
                    return;
                }
                if player.health < 25 {
                    player.message = Some(GOTMEDINEED);
                } else {
                    player.message = Some(GOTMEDIKIT);
                }
            }

            SpriteNum::CLIP => {
                if dropped {
                    if !player.give_ammo(AmmoType::Clip, 0, skill) {
                        return;
                    }
                } else if !player.give_ammo(AmmoType::Clip, 1, skill) {
                    return;
                }
                player.message = Some(GOTCLIP);
            }
            SpriteNum::SHEL => {
                if !player.give_ammo(AmmoType::Shell, 1, skill) {
                    return;
                }
                player.message = Some(GOTSHELLS);
            }
            SpriteNum::ROCK => {
                if !player.give_ammo(AmmoType::Missile, 1, skill) {
                    return;
                }
                player.message = Some(GOTROCKET);
            }

            SpriteNum::SHOT => {
                if !player.give_weapon(WeaponType::Shotgun, dropped, skill) {
                    return;
                }
                player.message = Some(GOTSHOTGUN);
                sound = SfxName::Wpnup;
            }
            SpriteNum::MGUN => {
                if !player.give_weapon(WeaponType::Chaingun, dropped, skill) {
                    return;
                }
                player.message = Some(GOTCHAINGUN);
                sound = SfxName::Wpnup;
            }
            SpriteNum::LAUN => {
                if !player.give_weapon(WeaponType::Missile, false, skill) {
                    return;
                }
                player.message = Some(GOTLAUNCHER);
                sound = SfxName::Wpnup;
            }

            _ => {
                warn!("Unknown gettable: {:?}", special.sprite);
                return;
            }
        }

        // keep the avatar's health in step with the player's
        self.health = player.health;
        if special.flags & MapObjFlag::Countitem as u32 != 0 {
            player.itemcount += 1;
        }
        player.bonuscount += BONUSADD;

        special.remove(level);
        self.start_sound(level, sound);
    }
}
