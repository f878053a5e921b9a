//! Static definition tables for every thing the simulation can host, and the
//! state machine frames they cycle through. All behaviour is data-driven from
//! these tables; the action functions they reference live in `thing` and
//! `player_sprite`.

mod map_object_info;
mod states;

pub use map_object_info::MOBJINFO;
pub use states::STATES;

use math::Fixed;
use sound_traits::SfxName;

use crate::defs::ActFn;

/// Sprite frame can be ORed with this to render at full brightness
pub const FF_FULLBRIGHT: u32 = 0x8000;
pub const FF_FRAMEMASK: u32 = 0x7FFF;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SpriteNum {
    #[default]
    TROO,
    SHTG,
    PUNG,
    PISG,
    PISF,
    SHTF,
    CHGG,
    CHGF,
    MISG,
    MISF,
    BLUD,
    PUFF,
    BAL1,
    BAL2,
    BAL7,
    MISL,
    PLAY,
    POSS,
    SPOS,
    VILE,
    FIRE,
    SARG,
    HEAD,
    BOSS,
    SKUL,
    PAIN,
    BBRN,
    BOSF,
    ARM1,
    BKEY,
    YKEY,
    RKEY,
    STIM,
    MEDI,
    CLIP,
    SHEL,
    ROCK,
    SHOT,
    MGUN,
    LAUN,
    BAR1,
    BEXP,
    TFOG,
    IFOG,
    POL5,
    NumSprites,
}

/// Indexes into `MOBJINFO`. The order here is the table order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MapObjKind {
    #[default]
    Player,
    Possessed,
    Shotguy,
    Vile,
    Fire,
    Troop,
    Sergeant,
    Head,
    Bruiser,
    BruiserShot,
    Skull,
    Pain,
    Barrel,
    TroopShot,
    HeadShot,
    Rocket,
    Puff,
    Blood,
    TeleportFog,
    RespawnFog,
    Teleportman,
    BossBrain,
    BossSpit,
    BossTarget,
    SpawnShot,
    SpawnFire,
    Clip,
    ShellAmmo,
    RocketAmmo,
    Stimpack,
    Medikit,
    GreenArmor,
    BlueCard,
    YellowCard,
    RedCard,
    Shotgun,
    Chaingun,
    RocketLauncher,
    NumTypes,
}

impl MapObjKind {
    /// Match a map-thing editor number to a kind
    pub fn from_doomednum(num: i16) -> Option<Self> {
        let count = MapObjKind::NumTypes as usize;
        (0..count)
            .find(|&i| MOBJINFO[i].doomednum == num as i32)
            .map(|i| unsafe { std::mem::transmute::<u8, MapObjKind>(i as u8) })
    }
}

/// Indexes into `STATES`. The order here is the table order.
#[rustfmt::skip]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[allow(non_camel_case_types)]
pub enum StateNum {
    #[default]
    None,
    // Weapon sprites
    LIGHTDONE,
    PUNCH, PUNCHDOWN, PUNCHUP, PUNCH1, PUNCH2, PUNCH3, PUNCH4, PUNCH5,
    PISTOL, PISTOLDOWN, PISTOLUP, PISTOL1, PISTOL2, PISTOL3, PISTOL4, PISTOLFLASH,
    SGUN, SGUNDOWN, SGUNUP, SGUN1, SGUN2, SGUN3, SGUN4, SGUN5, SGUN6, SGUN7, SGUN8, SGUN9,
    SGUNFLASH1, SGUNFLASH2,
    CHAIN, CHAINDOWN, CHAINUP, CHAIN1, CHAIN2, CHAIN3, CHAINFLASH1, CHAINFLASH2,
    MISSILE, MISSILEDOWN, MISSILEUP, MISSILE1, MISSILE2, MISSILE3,
    MISSILEFLASH1, MISSILEFLASH2, MISSILEFLASH3, MISSILEFLASH4,
    // Effects
    BLOOD1, BLOOD2, BLOOD3,
    PUFF1, PUFF2, PUFF3, PUFF4,
    TBALL1, TBALL2, TBALLX1, TBALLX2, TBALLX3,
    RBALL1, RBALL2, RBALLX1, RBALLX2, RBALLX3,
    BRBALL1, BRBALL2, BRBALLX1, BRBALLX2, BRBALLX3,
    ROCKET, EXPLODE1, EXPLODE2, EXPLODE3,
    TFOG, TFOG01, TFOG02, TFOG2, TFOG3, TFOG4, TFOG5, TFOG6, TFOG7, TFOG8, TFOG9, TFOG10,
    IFOG, IFOG01, IFOG02, IFOG2, IFOG3, IFOG4, IFOG5,
    // Player body
    PLAY, PLAY_RUN1, PLAY_RUN2, PLAY_RUN3, PLAY_RUN4, PLAY_ATK1, PLAY_ATK2,
    PLAY_PAIN, PLAY_PAIN2,
    PLAY_DIE1, PLAY_DIE2, PLAY_DIE3, PLAY_DIE4, PLAY_DIE5, PLAY_DIE6, PLAY_DIE7,
    PLAY_XDIE1, PLAY_XDIE2, PLAY_XDIE3, PLAY_XDIE4, PLAY_XDIE5, PLAY_XDIE6, PLAY_XDIE7,
    PLAY_XDIE8, PLAY_XDIE9,
    // Zombieman
    POSS_STND, POSS_STND2,
    POSS_RUN1, POSS_RUN2, POSS_RUN3, POSS_RUN4, POSS_RUN5, POSS_RUN6, POSS_RUN7, POSS_RUN8,
    POSS_ATK1, POSS_ATK2, POSS_ATK3, POSS_PAIN, POSS_PAIN2,
    POSS_DIE1, POSS_DIE2, POSS_DIE3, POSS_DIE4, POSS_DIE5,
    POSS_XDIE1, POSS_XDIE2, POSS_XDIE3, POSS_XDIE4, POSS_XDIE5, POSS_XDIE6, POSS_XDIE7,
    POSS_XDIE8, POSS_XDIE9,
    POSS_RAISE1, POSS_RAISE2, POSS_RAISE3, POSS_RAISE4,
    // Shotgun guy
    SPOS_STND, SPOS_STND2,
    SPOS_RUN1, SPOS_RUN2, SPOS_RUN3, SPOS_RUN4, SPOS_RUN5, SPOS_RUN6, SPOS_RUN7, SPOS_RUN8,
    SPOS_ATK1, SPOS_ATK2, SPOS_ATK3, SPOS_PAIN, SPOS_PAIN2,
    SPOS_DIE1, SPOS_DIE2, SPOS_DIE3, SPOS_DIE4, SPOS_DIE5,
    SPOS_XDIE1, SPOS_XDIE2, SPOS_XDIE3, SPOS_XDIE4, SPOS_XDIE5, SPOS_XDIE6, SPOS_XDIE7,
    SPOS_XDIE8, SPOS_XDIE9,
    SPOS_RAISE1, SPOS_RAISE2, SPOS_RAISE3, SPOS_RAISE4, SPOS_RAISE5,
    // Arch-vile
    VILE_STND, VILE_STND2,
    VILE_RUN1, VILE_RUN2, VILE_RUN3, VILE_RUN4, VILE_RUN5, VILE_RUN6, VILE_RUN7, VILE_RUN8,
    VILE_RUN9, VILE_RUN10, VILE_RUN11, VILE_RUN12,
    VILE_ATK1, VILE_ATK2, VILE_ATK3, VILE_ATK4, VILE_ATK5, VILE_ATK6, VILE_ATK7, VILE_ATK8,
    VILE_ATK9, VILE_ATK10, VILE_ATK11,
    VILE_HEAL1, VILE_HEAL2, VILE_HEAL3,
    VILE_PAIN, VILE_PAIN2,
    VILE_DIE1, VILE_DIE2, VILE_DIE3, VILE_DIE4, VILE_DIE5, VILE_DIE6, VILE_DIE7, VILE_DIE8,
    VILE_DIE9, VILE_DIE10,
    // Arch-vile fire
    FIRE1, FIRE2, FIRE3, FIRE4, FIRE5, FIRE6, FIRE7, FIRE8,
    // Imp
    TROO_STND, TROO_STND2,
    TROO_RUN1, TROO_RUN2, TROO_RUN3, TROO_RUN4, TROO_RUN5, TROO_RUN6, TROO_RUN7, TROO_RUN8,
    TROO_ATK1, TROO_ATK2, TROO_ATK3, TROO_PAIN, TROO_PAIN2,
    TROO_DIE1, TROO_DIE2, TROO_DIE3, TROO_DIE4, TROO_DIE5,
    TROO_XDIE1, TROO_XDIE2, TROO_XDIE3, TROO_XDIE4, TROO_XDIE5, TROO_XDIE6, TROO_XDIE7,
    TROO_XDIE8,
    TROO_RAISE1, TROO_RAISE2, TROO_RAISE3, TROO_RAISE4, TROO_RAISE5,
    // Demon
    SARG_STND, SARG_STND2,
    SARG_RUN1, SARG_RUN2, SARG_RUN3, SARG_RUN4, SARG_RUN5, SARG_RUN6, SARG_RUN7, SARG_RUN8,
    SARG_ATK1, SARG_ATK2, SARG_ATK3, SARG_PAIN, SARG_PAIN2,
    SARG_DIE1, SARG_DIE2, SARG_DIE3, SARG_DIE4, SARG_DIE5, SARG_DIE6,
    SARG_RAISE1, SARG_RAISE2, SARG_RAISE3, SARG_RAISE4, SARG_RAISE5, SARG_RAISE6,
    // Cacodemon
    HEAD_STND,
    HEAD_RUN1,
    HEAD_ATK1, HEAD_ATK2, HEAD_ATK3, HEAD_PAIN, HEAD_PAIN2, HEAD_PAIN3,
    HEAD_DIE1, HEAD_DIE2, HEAD_DIE3, HEAD_DIE4, HEAD_DIE5, HEAD_DIE6,
    HEAD_RAISE1, HEAD_RAISE2, HEAD_RAISE3, HEAD_RAISE4, HEAD_RAISE5, HEAD_RAISE6,
    // Baron of hell
    BOSS_STND, BOSS_STND2,
    BOSS_RUN1, BOSS_RUN2, BOSS_RUN3, BOSS_RUN4, BOSS_RUN5, BOSS_RUN6, BOSS_RUN7, BOSS_RUN8,
    BOSS_ATK1, BOSS_ATK2, BOSS_ATK3, BOSS_PAIN, BOSS_PAIN2,
    BOSS_DIE1, BOSS_DIE2, BOSS_DIE3, BOSS_DIE4, BOSS_DIE5, BOSS_DIE6, BOSS_DIE7,
    BOSS_RAISE1, BOSS_RAISE2, BOSS_RAISE3, BOSS_RAISE4, BOSS_RAISE5, BOSS_RAISE6, BOSS_RAISE7,
    // Lost soul
    SKULL_STND, SKULL_STND2,
    SKULL_RUN1, SKULL_RUN2,
    SKULL_ATK1, SKULL_ATK2, SKULL_ATK3, SKULL_ATK4,
    SKULL_PAIN, SKULL_PAIN2,
    SKULL_DIE1, SKULL_DIE2, SKULL_DIE3, SKULL_DIE4, SKULL_DIE5, SKULL_DIE6,
    // Pain elemental
    PAIN_STND,
    PAIN_RUN1, PAIN_RUN2, PAIN_RUN3, PAIN_RUN4, PAIN_RUN5, PAIN_RUN6,
    PAIN_ATK1, PAIN_ATK2, PAIN_ATK3, PAIN_ATK4,
    PAIN_PAIN, PAIN_PAIN2,
    PAIN_DIE1, PAIN_DIE2, PAIN_DIE3, PAIN_DIE4, PAIN_DIE5, PAIN_DIE6,
    PAIN_RAISE1, PAIN_RAISE2, PAIN_RAISE3, PAIN_RAISE4, PAIN_RAISE5, PAIN_RAISE6,
    // Boss brain
    BRAIN, BRAIN_PAIN, BRAIN_DIE1, BRAIN_DIE2, BRAIN_DIE3, BRAIN_DIE4,
    BRAINEYE, BRAINEYESEE, BRAINEYE1,
    SPAWN1, SPAWN2, SPAWN3, SPAWN4,
    SPAWNFIRE1, SPAWNFIRE2, SPAWNFIRE3, SPAWNFIRE4, SPAWNFIRE5, SPAWNFIRE6, SPAWNFIRE7,
    SPAWNFIRE8,
    // Barrel
    BAR1, BAR2, BEXP, BEXP2, BEXP3, BEXP4, BEXP5,
    // Pickups
    ARM1, ARM1A,
    BKEY, BKEY2,
    YKEY, YKEY2,
    RKEY, RKEY2,
    STIM, MEDI, CLIP, SHEL, ROCK, SHOT, MGUN, LAUN,
    // Crushed corpse
    GIBS,
    NumStates,
}

/// One frame of a thing or weapon-sprite state machine
#[derive(Debug)]
pub struct State {
    /// Sprite to use
    pub sprite: SpriteNum,
    /// The frame for the sprite, may be ORed with `FF_FULLBRIGHT`
    pub frame: u32,
    /// How many tics this state takes. On -1 never changes
    pub tics: i32,
    pub action: ActFn,
    pub next_state: StateNum,
}

impl State {
    pub const fn new(
        sprite: SpriteNum,
        frame: u32,
        tics: i32,
        action: ActFn,
        next_state: StateNum,
    ) -> Self {
        Self {
            sprite,
            frame,
            tics,
            action,
            next_state,
        }
    }
}

/// The definition of a thing kind. Copied on to each spawned `MapObject`.
#[derive(Debug, Clone, Copy)]
pub struct MapObjInfo {
    pub doomednum: i32,
    pub spawnstate: StateNum,
    pub spawnhealth: i32,
    pub seestate: StateNum,
    pub seesound: SfxName,
    pub reactiontime: i32,
    pub attacksound: SfxName,
    pub painstate: StateNum,
    pub painchance: i32,
    pub painsound: SfxName,
    pub meleestate: StateNum,
    pub missilestate: StateNum,
    pub deathstate: StateNum,
    pub xdeathstate: StateNum,
    pub deathsound: SfxName,
    pub speed: Fixed,
    pub radius: Fixed,
    pub height: Fixed,
    pub mass: i32,
    pub damage: i32,
    pub activesound: SfxName,
    pub flags: u32,
    pub raisestate: StateNum,
}

impl MapObjInfo {
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        doomednum: i32,
        spawnstate: StateNum,
        spawnhealth: i32,
        seestate: StateNum,
        seesound: SfxName,
        reactiontime: i32,
        attacksound: SfxName,
        painstate: StateNum,
        painchance: i32,
        painsound: SfxName,
        meleestate: StateNum,
        missilestate: StateNum,
        deathstate: StateNum,
        xdeathstate: StateNum,
        deathsound: SfxName,
        speed: Fixed,
        radius: Fixed,
        height: Fixed,
        mass: i32,
        damage: i32,
        activesound: SfxName,
        flags: u32,
        raisestate: StateNum,
    ) -> Self {
        Self {
            doomednum,
            spawnstate,
            spawnhealth,
            seestate,
            seesound,
            reactiontime,
            attacksound,
            painstate,
            painchance,
            painsound,
            meleestate,
            missilestate,
            deathstate,
            xdeathstate,
            deathsound,
            speed,
            radius,
            height,
            mass,
            damage,
            activesound,
            flags,
            raisestate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_line_up_with_enums() {
        assert_eq!(STATES.len(), StateNum::NumStates as usize);
        assert_eq!(MOBJINFO.len(), MapObjKind::NumTypes as usize);
    }

    #[test]
    fn doomednum_lookup() {
        assert_eq!(MapObjKind::from_doomednum(3004), Some(MapObjKind::Possessed));
        assert_eq!(MapObjKind::from_doomednum(2035), Some(MapObjKind::Barrel));
        assert_eq!(MapObjKind::from_doomednum(12345), None);
    }

    #[test]
    fn spawn_states_resolve() {
        for info in MOBJINFO.iter() {
            let state = &STATES[info.spawnstate as usize];
            assert!((state.frame & FF_FRAMEMASK) < 30);
        }
    }
}
