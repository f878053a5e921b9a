//! The bulk of map entities: monsters, projectiles, puffs and blood,
//! pickups, the player avatar. Everything here is a `MapObject` driven by
//! the shared state tables.

pub(crate) mod enemy;
mod interact;
pub use interact::*;
mod movement;
pub use movement::*;
mod shooting;
pub use shooting::*;

use std::fmt::Debug;

use log::{debug, error, warn};
use math::{Angle, Fixed, Vec2, point_to_angle_2};
use sound_traits::SfxName;

use crate::defs::{
    MAXPLAYERS, MELEERANGE, MISSILERANGE, MTF_AMBUSH, MTF_NET_ONLY, ONCEILINGZ, ONFLOORZ,
    Skill, TICRATE, VIEWHEIGHT, WorldError,
};
use crate::defs::ActFn;
use crate::info::{MOBJINFO, MapObjInfo, MapObjKind, STATES, SpriteNum, StateNum};
use crate::level::Level;
use crate::level::map_defs::MapThing;
use crate::player::PlayerState;
use crate::player_sprite::setup_player_sprites;
use crate::thing::enemy::DirType;
use crate::thinker::{Think, ThinkerData, ThinkerId};

#[derive(Debug, PartialEq)]
pub enum MapObjFlag {
    /// Call the touch handler when touched.
    Special = 1,
    /// Blocks.
    Solid = 2,
    /// Can be hit.
    Shootable = 4,
    /// Don't use the sector links (invisible but touchable).
    Nosector = 8,
    /// Don't use the block links (inert but displayable)
    Noblockmap = 16,
    /// Not to be activated by sound, deaf monster.
    Ambush = 32,
    /// Will try to attack right back.
    Justhit = 64,
    /// Will take at least one step before attacking.
    Justattacked = 128,
    /// On level spawning (initial position), hang from ceiling instead of
    /// stand on floor.
    Spawnceiling = 256,
    /// Don't apply gravity (every tic), that is, object will float, keeping
    /// current height or changing it actively.
    Nogravity = 512,
    /// This allows jumps from high places.
    Dropoff = 0x400,
    /// For players, will pick up items.
    Pickup = 0x800,
    /// Ignores all line and thing collision.
    Noclip = 0x1000,
    /// Player: keep info about sliding along walls.
    Slide = 0x2000,
    /// Allow moves to any height, no gravity. For active floaters.
    Float = 0x4000,
    /// Don't cross lines or look at heights on teleport.
    Teleport = 0x8000,
    /// Don't hit same species, explode on block.
    Missile = 0x10000,
    /// Dropped by a dying monster, not level spawned.
    Dropped = 0x20000,
    /// Use fuzzy draw (spectres), temporary player invisibility powerup.
    Shadow = 0x40000,
    /// Don't bleed when shot (use puff).
    Noblood = 0x80000,
    /// Don't stop moving halfway off a step.
    Corpse = 0x100000,
    /// Floating to a height for a move, don't auto float to target's height.
    Infloat = 0x200000,
    /// On kill, count towards the kill total.
    Countkill = 0x400000,
    /// On pickup, count towards the item total.
    Countitem = 0x800000,
    /// Special handling: skull in flight.
    Skullfly = 0x1000000,
    /// Don't spawn this object in death match mode (e.g. key cards).
    Notdmatch = 0x2000000,
}

pub struct MapObject {
    /// This object's own handle in the thinker arena. Set right after push.
    pub(crate) thinker: ThinkerId,
    pub xy: Vec2,
    pub z: Fixed,
    /// orientation
    pub angle: Angle,
    /// used to pick the image to draw
    pub sprite: SpriteNum,
    /// might be ORed with FF_FULLBRIGHT
    pub frame: u32,
    /// The subsector this object's centre is in, refreshed on every move
    pub subsector: usize,
    /// The closest interval over all contacted sectors.
    pub(crate) floorz: Fixed,
    pub(crate) ceilingz: Fixed,
    /// For movement checking.
    pub(crate) radius: Fixed,
    pub(crate) height: Fixed,
    /// Momentum, used to update position.
    pub(crate) momxy: Vec2,
    pub(crate) momz: Fixed,
    /// If == validcount, already checked.
    pub(crate) validcount: usize,
    pub(crate) kind: MapObjKind,
    pub(crate) info: MapObjInfo,
    /// State tic counter, -1 means never advance
    pub(crate) tics: i32,
    pub state: StateNum,
    pub flags: u32,
    pub health: i32,
    /// Movement direction for zig-zagging monsters
    pub(crate) movedir: DirType,
    /// When 0, select a new dir
    pub(crate) movecount: i32,
    /// Thing being chased/attacked, also the originator for missiles
    pub(crate) target: Option<ThinkerId>,
    pub(crate) tracer: Option<ThinkerId>,
    /// If non 0, don't attack yet. Also freezes players after teleporting.
    pub(crate) reactiontime: i32,
    /// If >0, the target will be chased no matter what (even if shot)
    pub(crate) threshold: i32,
    /// Player slot if this is an avatar
    pub(crate) player: Option<usize>,
    /// Player number last looked for
    pub(crate) lastlook: i32,
    /// For nightmare respawn
    pub(crate) spawnpoint: MapThing,
}

impl Debug for MapObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapObject")
            .field("kind", &self.kind)
            .field("xy", &self.xy)
            .field("z", &self.z)
            .field("angle", &self.angle)
            .field("health", &self.health)
            .field("state", &self.state)
            .field("flags", &self.flags)
            .field("tics", &self.tics)
            .finish_non_exhaustive()
    }
}

/// Detach a map object from the arena, run `f` with it and the level, then
/// reattach. Returns None if the handle is stale or not a map object.
pub(crate) fn with_mobj<R>(
    level: &mut Level,
    id: ThinkerId,
    f: impl FnOnce(&mut MapObject, &mut Level) -> R,
) -> Option<R> {
    let mut data = level.thinkers.take(id)?;
    let result = data.mobj_mut().map(|mobj| f(mobj, level));
    level.thinkers.restore(id, data);
    result
}

impl MapObject {
    /// Spawn and fully link a map object. The z argument may be a real
    /// height or one of the `ONFLOORZ`/`ONCEILINGZ` markers.
    ///
    /// Doom function name is `P_SpawnMobj`
    pub(crate) fn spawn_map_object(
        x: Fixed,
        y: Fixed,
        z: Fixed,
        kind: MapObjKind,
        level: &mut Level,
    ) -> Result<ThinkerId, WorldError> {
        let info = MOBJINFO[kind as usize];
        let reactiontime = if level.game_skill == Skill::Nightmare {
            0
        } else {
            info.reactiontime
        };
        // Do not use set_state here, action routines can not be called yet
        let state = &STATES[info.spawnstate as usize];
        let lastlook = level.rng.p_random() % MAXPLAYERS as i32;

        let xy = Vec2::new(x, y);
        let subsector = level.map_data.point_in_subsector(xy);
        let sector = level.map_data.subsectors[subsector].sector;
        let floorz = level.map_data.sectors[sector].floorheight;
        let ceilingz = level.map_data.sectors[sector].ceilingheight;
        let z = if z == ONFLOORZ {
            floorz
        } else if z == ONCEILINGZ {
            ceilingz - info.height
        } else {
            z
        };

        let mobj = MapObject {
            thinker: ThinkerId::default(),
            xy,
            z,
            angle: Angle::ZERO,
            sprite: state.sprite,
            frame: state.frame,
            subsector,
            floorz,
            ceilingz,
            radius: info.radius,
            height: info.height,
            momxy: Vec2::ZERO,
            momz: Fixed::ZERO,
            validcount: 0,
            kind,
            info,
            tics: state.tics,
            state: info.spawnstate,
            flags: info.flags,
            health: info.spawnhealth,
            movedir: DirType::East,
            movecount: 0,
            target: None,
            tracer: None,
            reactiontime,
            threshold: 0,
            player: None,
            lastlook,
            spawnpoint: MapThing::default(),
        };

        let id = level.thinkers.push(ThinkerData::MapObject(mobj))?;
        if let Some(thing) = level.thinkers.mobj_mut(id) {
            thing.thinker = id;
        }
        if info.flags & MapObjFlag::Nosector as u32 == 0 {
            level.map_data.sectors[sector].add_thing(id);
        }
        if info.flags & MapObjFlag::Noblockmap as u32 == 0 {
            let bx = level.map_data.blockmap.block_x_raw(x);
            let by = level.map_data.blockmap.block_y_raw(y);
            level.map_data.blockmap.add_thing(bx, by, id);
        }
        Ok(id)
    }

    /// Spawn one thing record, honouring skill filtering and spawn flags.
    ///
    /// Doom function name is `P_SpawnMapThing`
    pub fn spawn_map_thing(mthing: MapThing, level: &mut Level) -> Result<(), WorldError> {
        // check for players specially
        if mthing.kind >= 1 && mthing.kind <= 4 {
            MapObject::spawn_player(&mthing, level)?;
            return Ok(());
        }

        if mthing.options & MTF_NET_ONLY != 0 {
            return Ok(());
        }
        // check for appropriate skill level
        let bit = match level.game_skill {
            Skill::Baby => 1,
            Skill::Nightmare => 4,
            skill => 1 << (skill as i16 - 1),
        };
        if mthing.options & bit == 0 {
            return Ok(());
        }

        let Some(kind) = MapObjKind::from_doomednum(mthing.kind) else {
            error!(
                "Unknown thing type {} at ({}, {})",
                mthing.kind, mthing.pos.x, mthing.pos.y
            );
            return Ok(());
        };

        let info = &MOBJINFO[kind as usize];
        if level.no_monsters
            && (kind == MapObjKind::Skull || info.flags & MapObjFlag::Countkill as u32 != 0)
        {
            return Ok(());
        }

        let z = if info.flags & MapObjFlag::Spawnceiling as u32 != 0 {
            ONCEILINGZ
        } else {
            ONFLOORZ
        };
        let id = MapObject::spawn_map_object(mthing.pos.x, mthing.pos.y, z, kind, level)?;

        let rand = level.rng.p_random();
        if let Some(mobj) = level.thinkers.mobj_mut(id) {
            if mobj.tics > 0 {
                mobj.tics = 1 + (rand % mobj.tics);
            }
            mobj.angle = Angle::from_degrees(mthing.angle);
            if mthing.options & MTF_AMBUSH != 0 {
                mobj.flags |= MapObjFlag::Ambush as u32;
            }
            mobj.spawnpoint = mthing;

            if mobj.flags & MapObjFlag::Countkill as u32 != 0 {
                level.totalkills += 1;
            }
            if mobj.flags & MapObjFlag::Countitem as u32 != 0 {
                level.totalitems += 1;
            }
        }
        Ok(())
    }

    /// Called when a player start is found. Most of the player structure
    /// stays unchanged between levels.
    ///
    /// Doom function name is `P_SpawnPlayer`
    fn spawn_player(mthing: &MapThing, level: &mut Level) -> Result<(), WorldError> {
        let slot = (mthing.kind - 1) as usize;
        if !level.player_in_game[slot] {
            return Ok(());
        }

        if level.players[slot].player_state == PlayerState::Reborn {
            level.players[slot].reborn();
        }

        let id = MapObject::spawn_map_object(
            mthing.pos.x,
            mthing.pos.y,
            ONFLOORZ,
            MapObjKind::Player,
            level,
        )?;

        let health = level.players[slot].health;
        if let Some(mobj) = level.thinkers.mobj_mut(id) {
            mobj.angle = Angle::from_degrees(mthing.angle);
            mobj.health = health;
            mobj.player = Some(slot);
        }

        let mut player = std::mem::take(&mut level.players[slot]);
        player.mobj = Some(id);
        player.player_state = PlayerState::Live;
        player.refire = 0;
        player.message = None;
        player.damagecount = 0;
        player.bonuscount = 0;
        player.extralight = 0;
        player.viewheight = VIEWHEIGHT;
        setup_player_sprites(&mut player, level);
        level.players[slot] = player;
        Ok(())
    }

    /// A thinker for metal spark/puff, typically used for gun-strikes
    /// against walls or non-fleshy things.
    pub(crate) fn spawn_puff(x: Fixed, y: Fixed, z: Fixed, attack_range: Fixed, level: &mut Level) {
        let z = z + Fixed::from_bits((level.rng.p_random() - level.rng.p_random()) << 10);
        let Ok(id) = MapObject::spawn_map_object(x, y, z, MapObjKind::Puff, level) else {
            return;
        };
        let rand = level.rng.p_random();
        if let Some(mobj) = level.thinkers.mobj_mut(id) {
            mobj.momz = Fixed::ONE;
            mobj.tics -= rand & 3;
            if mobj.tics < 1 {
                mobj.tics = 1;
            }
            // Don't make punches spark on the wall
            if attack_range == MELEERANGE {
                mobj.force_state(StateNum::PUFF3);
            }
        }
    }

    pub(crate) fn spawn_blood(x: Fixed, y: Fixed, z: Fixed, damage: i32, level: &mut Level) {
        let z = z + Fixed::from_bits((level.rng.p_random() - level.rng.p_random()) << 10);
        let Ok(id) = MapObject::spawn_map_object(x, y, z, MapObjKind::Blood, level) else {
            return;
        };
        let rand = level.rng.p_random();
        if let Some(mobj) = level.thinkers.mobj_mut(id) {
            mobj.momz = Fixed::from_int(2);
            mobj.tics -= rand & 3;
            if mobj.tics < 1 {
                mobj.tics = 1;
            }
            if (9..=12).contains(&damage) {
                mobj.force_state(StateNum::BLOOD2);
            } else if damage < 9 {
                mobj.force_state(StateNum::BLOOD3);
            }
        }
    }

    /// Launch a missile from `source` at the thing behind `target`.
    ///
    /// Doom function name is `P_SpawnMissile`
    pub(crate) fn spawn_missile(
        source: &mut MapObject,
        target: ThinkerId,
        kind: MapObjKind,
        level: &mut Level,
    ) -> Option<ThinkerId> {
        let (target_xy, target_z, target_flags) = {
            let t = level.thinkers.mobj(target)?;
            (t.xy, t.z, t.flags)
        };
        let id = MapObject::spawn_map_object(
            source.xy.x,
            source.xy.y,
            source.z + Fixed::from_int(32),
            kind,
            level,
        )
        .ok()?;

        let source_id = source.thinker;
        let source_xy = source.xy;
        let source_z = source.z;
        with_mobj(level, id, |mobj, level| {
            if mobj.info.seesound != SfxName::None {
                mobj.start_sound(level, mobj.info.seesound);
            }
            mobj.target = Some(source_id);
            mobj.angle = point_to_angle_2(target_xy, source_xy);
            // fuzzy player
            if target_flags & MapObjFlag::Shadow as u32 != 0 {
                let fuzz = (level.rng.p_random() - level.rng.p_random()) << 20;
                mobj.angle += Angle::new(fuzz as u32);
            }
            mobj.momxy = mobj.angle.unit() * mobj.info.speed;

            // Tic count to reach the target, for a straight-line z approach
            let dist = source_xy.approx_distance_to(target_xy);
            let mut count = dist.to_bits() / mobj.info.speed.to_bits();
            if count < 1 {
                count = 1;
            }
            mobj.momz = Fixed::from_bits((target_z - source_z).to_bits() / count);
            mobj.check_missile_spawn(level);
        });
        Some(id)
    }

    /// Launch a missile straight ahead of a player, auto-aiming up or down
    /// a little to either side if nothing is on the crosshair.
    ///
    /// Doom function name is `P_SpawnPlayerMissile`
    pub(crate) fn spawn_player_missile(source: ThinkerId, kind: MapObjKind, level: &mut Level) {
        let Some(mut data) = level.thinkers.take(source) else {
            return;
        };
        if let Some(src) = data.mobj_mut() {
            let mut angle = src.angle;
            let mut aim = aim_line_attack(src, angle, MISSILERANGE, level);
            if aim.is_none() {
                angle += Angle::new(1 << 26);
                aim = aim_line_attack(src, angle, MISSILERANGE, level);
                if aim.is_none() {
                    angle -= Angle::new(2 << 26);
                    aim = aim_line_attack(src, angle, MISSILERANGE, level);
                }
                if aim.is_none() {
                    angle = src.angle;
                }
            }
            let slope = aim.map(|a| a.aimslope).unwrap_or(Fixed::ZERO);

            if let Ok(id) = MapObject::spawn_map_object(
                src.xy.x,
                src.xy.y,
                src.z + Fixed::from_int(32),
                kind,
                level,
            ) {
                with_mobj(level, id, |mobj, level| {
                    if mobj.info.seesound != SfxName::None {
                        mobj.start_sound(level, mobj.info.seesound);
                    }
                    mobj.target = Some(source);
                    mobj.angle = angle;
                    mobj.momxy = angle.unit() * mobj.info.speed;
                    mobj.momz = mobj.info.speed * slope;
                    mobj.check_missile_spawn(level);
                });
            }
        }
        level.thinkers.restore(source, data);
    }

    /// Move the fresh missile a half step and explode it at once if that
    /// already hits something.
    fn check_missile_spawn(&mut self, level: &mut Level) {
        self.tics -= level.rng.p_random() & 3;
        if self.tics < 1 {
            self.tics = 1;
        }

        let half = Vec2::new(self.momxy.x >> 1, self.momxy.y >> 1);
        self.xy += half;
        self.z += self.momz >> 1;

        let dest = self.xy;
        let mut clip = MoveClip::default();
        if !self.try_move(dest, &mut clip, level) {
            self.explode_missile(level);
        }
    }

    /// Jump to a state. Zero length states chain immediately, running each
    /// action on the way. Returns false if the object removed itself.
    ///
    /// Doom function name is `P_SetMobjState`
    pub(crate) fn set_state(&mut self, state: StateNum, level: &mut Level) -> bool {
        let mut state = state;
        let mut cycle = 0;
        loop {
            if state == StateNum::None {
                self.state = StateNum::None;
                self.remove(level);
                return false;
            }

            let st = &STATES[state as usize];
            self.state = state;
            self.tics = st.tics;
            self.sprite = st.sprite;
            self.frame = st.frame;

            if let ActFn::A(f) = st.action {
                f(self, level);
                if level.thinkers.pending_removal(self.thinker) {
                    return false;
                }
            }

            if self.tics != 0 {
                return true;
            }
            state = st.next_state;
            cycle += 1;
            if cycle > STATES.len() {
                error!("State cycle detected starting from {:?}", self.state);
                return true;
            }
        }
    }

    /// Set state fields without running the action, for fresh decorations
    fn force_state(&mut self, state: StateNum) {
        let st = &STATES[state as usize];
        self.state = state;
        self.tics = st.tics;
        self.sprite = st.sprite;
        self.frame = st.frame;
    }

    /// Unlink the thing from its sector and blockmap cell. Call before
    /// changing `xy`, then `set_thing_position` after.
    ///
    /// Doom function name is `P_UnsetThingPosition`
    pub(crate) fn unset_thing_position(&mut self, level: &mut Level) {
        if self.flags & MapObjFlag::Nosector as u32 == 0 {
            let sector = level.map_data.subsectors[self.subsector].sector;
            level.map_data.sectors[sector].remove_thing(self.thinker);
        }
        if self.flags & MapObjFlag::Noblockmap as u32 == 0 {
            let bx = level.map_data.blockmap.block_x_raw(self.xy.x);
            let by = level.map_data.blockmap.block_y_raw(self.xy.y);
            level.map_data.blockmap.remove_thing(bx, by, self.thinker);
        }
    }

    /// Doom function name is `P_SetThingPosition`
    pub(crate) fn set_thing_position(&mut self, level: &mut Level) {
        self.subsector = level.map_data.point_in_subsector(self.xy);
        if self.flags & MapObjFlag::Nosector as u32 == 0 {
            let sector = level.map_data.subsectors[self.subsector].sector;
            level.map_data.sectors[sector].add_thing(self.thinker);
        }
        if self.flags & MapObjFlag::Noblockmap as u32 == 0 {
            let bx = level.map_data.blockmap.block_x_raw(self.xy.x);
            let by = level.map_data.blockmap.block_y_raw(self.xy.y);
            level.map_data.blockmap.add_thing(bx, by, self.thinker);
        }
    }

    /// Doom function name is `P_RemoveMobj`
    pub(crate) fn remove(&mut self, level: &mut Level) {
        self.unset_thing_position(level);
        level.thinkers.remove(self.thinker);
    }

    /// Adjust floorz/ceilingz/z after the sector around this thing moved.
    /// Returns false if the thing no longer fits.
    ///
    /// Doom function name is `P_ThingHeightClip`
    fn height_clip(&mut self, level: &mut Level) -> bool {
        let mut clip = MoveClip::default();
        let xy = self.xy;
        self.check_position(xy, &mut clip, level);
        let on_floor = self.z == self.floorz;
        self.floorz = clip.floorz;
        self.ceilingz = clip.ceilingz;

        if on_floor {
            // walking monsters rise and fall with the floor
            self.z = self.floorz;
        } else if self.z + self.height > self.ceilingz {
            self.z = self.ceilingz - self.height;
        }

        self.ceilingz - self.floorz >= self.height
    }

    /// One thing caught inside a moving sector. Gib crushed corpses, crunch
    /// dropped items, and periodically damage anything alive that no longer
    /// fits. Returns true to keep checking other things.
    ///
    /// Doom function name is `PIT_ChangeSector`
    pub(crate) fn pit_change_sector(
        &mut self,
        no_fit: &mut bool,
        crush_change: bool,
        level: &mut Level,
    ) -> bool {
        if self.height_clip(level) {
            return true;
        }

        if self.health <= 0 {
            self.force_state(StateNum::GIBS);
            self.flags &= !(MapObjFlag::Solid as u32);
            self.height = Fixed::ZERO;
            self.radius = Fixed::ZERO;
            return true;
        }

        // crunch dropped items
        if self.flags & MapObjFlag::Dropped as u32 != 0 {
            self.remove(level);
            return true;
        }

        if self.flags & MapObjFlag::Shootable as u32 == 0 {
            // assume it is bloody gibs or something
            return true;
        }

        *no_fit = true;

        if crush_change && level.level_time & 3 == 0 {
            debug!("Crushing {:?}", self.kind);
            self.take_damage(None, None, false, 10, level);
            let mid_z = self.z + (self.height >> 1);
            if let Ok(id) =
                MapObject::spawn_map_object(self.xy.x, self.xy.y, mid_z, MapObjKind::Blood, level)
            {
                let mx = Fixed::from_bits(level.rng.p_subrandom() << 12);
                let my = Fixed::from_bits(level.rng.p_subrandom() << 12);
                if let Some(blood) = level.thinkers.mobj_mut(id) {
                    blood.momxy = Vec2::new(mx, my);
                }
            }
        }

        true
    }

    pub(crate) fn start_sound(&self, level: &Level, sfx: SfxName) {
        level.start_sound(
            sfx,
            self.xy.x.to_float() as f32,
            self.xy.y.to_float() as f32,
            self.thinker.index(),
        );
    }

    /// Doom function name is `P_NightmareRespawn`
    pub fn nightmare_respawn(&mut self, level: &mut Level) {
        let spawn_xy = self.spawnpoint.pos;
        let mut clip = MoveClip::default();
        // somebody is standing on the spot
        if !self.check_position(spawn_xy, &mut clip, level) {
            return;
        }

        // fog at the old spot
        if let Ok(fog) =
            MapObject::spawn_map_object(self.xy.x, self.xy.y, self.floorz, MapObjKind::TeleportFog, level)
        {
            if let Some(fog) = level.thinkers.mobj(fog) {
                fog.start_sound(level, SfxName::Telept);
            }
        }

        // fog at the new spot
        let new_floor = {
            let sector = level.map_data.sector_at(spawn_xy);
            level.map_data.sectors[sector].floorheight
        };
        if let Ok(fog) = MapObject::spawn_map_object(
            spawn_xy.x,
            spawn_xy.y,
            new_floor,
            MapObjKind::TeleportFog,
            level,
        ) {
            if let Some(fog) = level.thinkers.mobj(fog) {
                fog.start_sound(level, SfxName::Telept);
            }
        }

        let mthing = self.spawnpoint;
        let z = if self.info.flags & MapObjFlag::Spawnceiling as u32 != 0 {
            ONCEILINGZ
        } else {
            ONFLOORZ
        };
        match MapObject::spawn_map_object(spawn_xy.x, spawn_xy.y, z, self.kind, level) {
            Ok(id) => {
                if let Some(thing) = level.thinkers.mobj_mut(id) {
                    thing.angle = Angle::from_degrees(mthing.angle);
                    thing.spawnpoint = mthing;
                    thing.reactiontime = 18;
                    if mthing.options & MTF_AMBUSH != 0 {
                        thing.flags |= MapObjFlag::Ambush as u32;
                    }
                }
                // the old monster goes away
                self.remove(level);
            }
            Err(e) => warn!("Respawn of {:?} failed: {e}", self.kind),
        }
    }
}

impl Think for MapObject {
    fn think(&mut self, level: &mut Level) -> bool {
        if !self.momxy.is_zero() || self.flags & MapObjFlag::Skullfly as u32 != 0 {
            self.xy_movement(level);
            if level.thinkers.pending_removal(self.thinker) {
                return true;
            }
        }

        if self.z != self.floorz || self.momz != Fixed::ZERO {
            self.z_movement(level);
            if level.thinkers.pending_removal(self.thinker) {
                return true;
            }
        }

        // cycle through states, calling action functions at transitions
        if self.tics != -1 {
            self.tics -= 1;
            if self.tics <= 0 {
                let next = STATES[self.state as usize].next_state;
                if !self.set_state(next, level) {
                    return true; // freed itself
                }
            }
        } else {
            // check for nightmare respawn
            if self.flags & MapObjFlag::Countkill as u32 == 0 {
                return false;
            }
            if !level.respawn_monsters {
                return false;
            }
            self.movecount += 1;
            if self.movecount < 12 * TICRATE {
                return false;
            }
            if level.level_time & 31 != 0 {
                return false;
            }
            if level.rng.p_random() > 4 {
                return false;
            }
            self.nightmare_respawn(level);
            if level.thinkers.pending_removal(self.thinker) {
                return true;
            }
        }
        false
    }
}
