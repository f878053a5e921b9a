//! Thing definitions. Entry order must match `MapObjKind`; the enum is the
//! table index.

use math::Fixed;
use sound_traits::SfxName;

use crate::info::{MapObjInfo, MapObjKind, StateNum};
use crate::thing::MapObjFlag;

const NUM_CATEGORIES: usize = MapObjKind::NumTypes as usize;

#[rustfmt::skip]
pub const MOBJINFO: [MapObjInfo; NUM_CATEGORIES] = [
    // Player
    MapObjInfo::new(
        -1,                     // doomednum
        StateNum::PLAY,         // spawnstate
        100,                    // spawnhealth
        StateNum::PLAY_RUN1,    // seestate
        SfxName::None,          // seesound
        0,                      // reactiontime
        SfxName::None,          // attacksound
        StateNum::PLAY_PAIN,    // painstate
        255,                    // painchance
        SfxName::Plpain,        // painsound
        StateNum::None,         // meleestate
        StateNum::PLAY_ATK1,    // missilestate
        StateNum::PLAY_DIE1,    // deathstate
        StateNum::PLAY_XDIE1,   // xdeathstate
        SfxName::Pldeth,        // deathsound
        Fixed::ZERO,            // speed
        Fixed::from_int(16),    // radius
        Fixed::from_int(56),    // height
        100,                    // mass
        0,                      // damage
        SfxName::None,          // activesound
        MapObjFlag::Solid as u32
            | MapObjFlag::Shootable as u32
            | MapObjFlag::Dropoff as u32
            | MapObjFlag::Pickup as u32
            | MapObjFlag::Notdmatch as u32,
        StateNum::None,         // raisestate
    ),
    // Possessed
    MapObjInfo::new(
        3004,
        StateNum::POSS_STND,
        20,
        StateNum::POSS_RUN1,
        SfxName::Posit1,
        8,
        SfxName::Pistol,
        StateNum::POSS_PAIN,
        200,
        SfxName::Popain,
        StateNum::None,
        StateNum::POSS_ATK1,
        StateNum::POSS_DIE1,
        StateNum::POSS_XDIE1,
        SfxName::Podth1,
        Fixed::from_int(8),
        Fixed::from_int(20),
        Fixed::from_int(56),
        100,
        0,
        SfxName::Posact,
        MapObjFlag::Solid as u32
            | MapObjFlag::Shootable as u32
            | MapObjFlag::Countkill as u32,
        StateNum::POSS_RAISE1,
    ),
    // Shotguy
    MapObjInfo::new(
        9,
        StateNum::SPOS_STND,
        30,
        StateNum::SPOS_RUN1,
        SfxName::Posit2,
        8,
        SfxName::None,
        StateNum::SPOS_PAIN,
        170,
        SfxName::Popain,
        StateNum::None,
        StateNum::SPOS_ATK1,
        StateNum::SPOS_DIE1,
        StateNum::SPOS_XDIE1,
        SfxName::Podth2,
        Fixed::from_int(8),
        Fixed::from_int(20),
        Fixed::from_int(56),
        100,
        0,
        SfxName::Posact,
        MapObjFlag::Solid as u32
            | MapObjFlag::Shootable as u32
            | MapObjFlag::Countkill as u32,
        StateNum::SPOS_RAISE1,
    ),
    // Vile
    MapObjInfo::new(
        64,
        StateNum::VILE_STND,
        700,
        StateNum::VILE_RUN1,
        SfxName::Vilsit,
        8,
        SfxName::None,
        StateNum::VILE_PAIN,
        10,
        SfxName::Vipain,
        StateNum::None,
        StateNum::VILE_ATK1,
        StateNum::VILE_DIE1,
        StateNum::None,
        SfxName::Vildth,
        Fixed::from_int(15),
        Fixed::from_int(20),
        Fixed::from_int(56),
        500,
        0,
        SfxName::Vilact,
        MapObjFlag::Solid as u32
            | MapObjFlag::Shootable as u32
            | MapObjFlag::Countkill as u32,
        StateNum::None,
    ),
    // Fire
    MapObjInfo::new(
        -1,
        StateNum::FIRE1,
        1000,
        StateNum::None,
        SfxName::None,
        8,
        SfxName::None,
        StateNum::None,
        0,
        SfxName::None,
        StateNum::None,
        StateNum::None,
        StateNum::None,
        StateNum::None,
        SfxName::None,
        Fixed::ZERO,
        Fixed::from_int(20),
        Fixed::from_int(16),
        100,
        0,
        SfxName::None,
        MapObjFlag::Noblockmap as u32 | MapObjFlag::Nogravity as u32,
        StateNum::None,
    ),
    // Troop
    MapObjInfo::new(
        3001,
        StateNum::TROO_STND,
        60,
        StateNum::TROO_RUN1,
        SfxName::Bgsit1,
        8,
        SfxName::None,
        StateNum::TROO_PAIN,
        200,
        SfxName::Popain,
        StateNum::TROO_ATK1,
        StateNum::TROO_ATK1,
        StateNum::TROO_DIE1,
        StateNum::TROO_XDIE1,
        SfxName::Bgdth1,
        Fixed::from_int(8),
        Fixed::from_int(20),
        Fixed::from_int(56),
        100,
        0,
        SfxName::Bgact,
        MapObjFlag::Solid as u32
            | MapObjFlag::Shootable as u32
            | MapObjFlag::Countkill as u32,
        StateNum::TROO_RAISE1,
    ),
    // Sergeant
    MapObjInfo::new(
        3002,
        StateNum::SARG_STND,
        150,
        StateNum::SARG_RUN1,
        SfxName::Sgtsit,
        8,
        SfxName::Sgtatk,
        StateNum::SARG_PAIN,
        180,
        SfxName::Dmpain,
        StateNum::SARG_ATK1,
        StateNum::None,
        StateNum::SARG_DIE1,
        StateNum::None,
        SfxName::Sgtdth,
        Fixed::from_int(10),
        Fixed::from_int(30),
        Fixed::from_int(56),
        400,
        0,
        SfxName::Dmact,
        MapObjFlag::Solid as u32
            | MapObjFlag::Shootable as u32
            | MapObjFlag::Countkill as u32,
        StateNum::SARG_RAISE1,
    ),
    // Head
    MapObjInfo::new(
        3005,
        StateNum::HEAD_STND,
        400,
        StateNum::HEAD_RUN1,
        SfxName::Cacsit,
        8,
        SfxName::None,
        StateNum::HEAD_PAIN,
        128,
        SfxName::Dmpain,
        StateNum::None,
        StateNum::HEAD_ATK1,
        StateNum::HEAD_DIE1,
        StateNum::None,
        SfxName::Cacdth,
        Fixed::from_int(8),
        Fixed::from_int(31),
        Fixed::from_int(56),
        400,
        0,
        SfxName::Dmact,
        MapObjFlag::Solid as u32
            | MapObjFlag::Shootable as u32
            | MapObjFlag::Countkill as u32
            | MapObjFlag::Float as u32
            | MapObjFlag::Nogravity as u32,
        StateNum::HEAD_RAISE1,
    ),
    // Bruiser
    MapObjInfo::new(
        3003,
        StateNum::BOSS_STND,
        1000,
        StateNum::BOSS_RUN1,
        SfxName::Brssit,
        8,
        SfxName::None,
        StateNum::BOSS_PAIN,
        50,
        SfxName::Dmpain,
        StateNum::BOSS_ATK1,
        StateNum::BOSS_ATK1,
        StateNum::BOSS_DIE1,
        StateNum::None,
        SfxName::Brsdth,
        Fixed::from_int(8),
        Fixed::from_int(24),
        Fixed::from_int(64),
        1000,
        0,
        SfxName::Dmact,
        MapObjFlag::Solid as u32
            | MapObjFlag::Shootable as u32
            | MapObjFlag::Countkill as u32,
        StateNum::BOSS_RAISE1,
    ),
    // BruiserShot
    MapObjInfo::new(
        -1,
        StateNum::BRBALL1,
        1000,
        StateNum::None,
        SfxName::Firsht,
        8,
        SfxName::None,
        StateNum::None,
        0,
        SfxName::None,
        StateNum::None,
        StateNum::None,
        StateNum::BRBALLX1,
        StateNum::None,
        SfxName::Firxpl,
        Fixed::from_int(15),
        Fixed::from_int(6),
        Fixed::from_int(8),
        100,
        8,
        SfxName::None,
        MapObjFlag::Noblockmap as u32
            | MapObjFlag::Missile as u32
            | MapObjFlag::Dropoff as u32
            | MapObjFlag::Nogravity as u32,
        StateNum::None,
    ),
    // Skull
    MapObjInfo::new(
        3006,
        StateNum::SKULL_STND,
        100,
        StateNum::SKULL_RUN1,
        SfxName::None,
        8,
        SfxName::Sklatk,
        StateNum::SKULL_PAIN,
        256,
        SfxName::Dmpain,
        StateNum::None,
        StateNum::SKULL_ATK1,
        StateNum::SKULL_DIE1,
        StateNum::None,
        SfxName::Firxpl,
        Fixed::from_int(8),
        Fixed::from_int(16),
        Fixed::from_int(56),
        50,
        3,
        SfxName::Dmact,
        MapObjFlag::Solid as u32
            | MapObjFlag::Shootable as u32
            | MapObjFlag::Float as u32
            | MapObjFlag::Nogravity as u32,
        StateNum::None,
    ),
    // Pain
    MapObjInfo::new(
        71,
        StateNum::PAIN_STND,
        400,
        StateNum::PAIN_RUN1,
        SfxName::Pesit,
        8,
        SfxName::None,
        StateNum::PAIN_PAIN,
        128,
        SfxName::Pepain,
        StateNum::None,
        StateNum::PAIN_ATK1,
        StateNum::PAIN_DIE1,
        StateNum::None,
        SfxName::Pedth,
        Fixed::from_int(8),
        Fixed::from_int(31),
        Fixed::from_int(56),
        400,
        0,
        SfxName::Dmact,
        MapObjFlag::Solid as u32
            | MapObjFlag::Shootable as u32
            | MapObjFlag::Countkill as u32
            | MapObjFlag::Float as u32
            | MapObjFlag::Nogravity as u32,
        StateNum::PAIN_RAISE1,
    ),
    // Barrel
    MapObjInfo::new(
        2035,
        StateNum::BAR1,
        20,
        StateNum::None,
        SfxName::None,
        8,
        SfxName::None,
        StateNum::None,
        0,
        SfxName::None,
        StateNum::None,
        StateNum::None,
        StateNum::BEXP,
        StateNum::None,
        SfxName::Barexp,
        Fixed::ZERO,
        Fixed::from_int(10),
        Fixed::from_int(42),
        100,
        0,
        SfxName::None,
        MapObjFlag::Solid as u32
            | MapObjFlag::Shootable as u32
            | MapObjFlag::Noblood as u32,
        StateNum::None,
    ),
    // TroopShot
    MapObjInfo::new(
        -1,
        StateNum::TBALL1,
        1000,
        StateNum::None,
        SfxName::Firsht,
        8,
        SfxName::None,
        StateNum::None,
        0,
        SfxName::None,
        StateNum::None,
        StateNum::None,
        StateNum::TBALLX1,
        StateNum::None,
        SfxName::Firxpl,
        Fixed::from_int(10),
        Fixed::from_int(6),
        Fixed::from_int(8),
        100,
        3,
        SfxName::None,
        MapObjFlag::Noblockmap as u32
            | MapObjFlag::Missile as u32
            | MapObjFlag::Dropoff as u32
            | MapObjFlag::Nogravity as u32,
        StateNum::None,
    ),
    // HeadShot
    MapObjInfo::new(
        -1,
        StateNum::RBALL1,
        1000,
        StateNum::None,
        SfxName::Firsht,
        8,
        SfxName::None,
        StateNum::None,
        0,
        SfxName::None,
        StateNum::None,
        StateNum::None,
        StateNum::RBALLX1,
        StateNum::None,
        SfxName::Firxpl,
        Fixed::from_int(10),
        Fixed::from_int(6),
        Fixed::from_int(8),
        100,
        5,
        SfxName::None,
        MapObjFlag::Noblockmap as u32
            | MapObjFlag::Missile as u32
            | MapObjFlag::Dropoff as u32
            | MapObjFlag::Nogravity as u32,
        StateNum::None,
    ),
    // Rocket
    MapObjInfo::new(
        -1,
        StateNum::ROCKET,
        1000,
        StateNum::None,
        SfxName::Rlaunc,
        8,
        SfxName::None,
        StateNum::None,
        0,
        SfxName::None,
        StateNum::None,
        StateNum::None,
        StateNum::EXPLODE1,
        StateNum::None,
        SfxName::Barexp,
        Fixed::from_int(20),
        Fixed::from_int(11),
        Fixed::from_int(8),
        100,
        20,
        SfxName::None,
        MapObjFlag::Noblockmap as u32
            | MapObjFlag::Missile as u32
            | MapObjFlag::Dropoff as u32
            | MapObjFlag::Nogravity as u32,
        StateNum::None,
    ),
    // Puff
    MapObjInfo::new(
        -1,
        StateNum::PUFF1,
        1000,
        StateNum::None,
        SfxName::None,
        8,
        SfxName::None,
        StateNum::None,
        0,
        SfxName::None,
        StateNum::None,
        StateNum::None,
        StateNum::None,
        StateNum::None,
        SfxName::None,
        Fixed::ZERO,
        Fixed::from_int(20),
        Fixed::from_int(16),
        100,
        0,
        SfxName::None,
        MapObjFlag::Noblockmap as u32 | MapObjFlag::Nogravity as u32,
        StateNum::None,
    ),
    // Blood
    MapObjInfo::new(
        -1,
        StateNum::BLOOD1,
        1000,
        StateNum::None,
        SfxName::None,
        8,
        SfxName::None,
        StateNum::None,
        0,
        SfxName::None,
        StateNum::None,
        StateNum::None,
        StateNum::None,
        StateNum::None,
        SfxName::None,
        Fixed::ZERO,
        Fixed::from_int(20),
        Fixed::from_int(16),
        100,
        0,
        SfxName::None,
        MapObjFlag::Noblockmap as u32,
        StateNum::None,
    ),
    // TeleportFog
    MapObjInfo::new(
        -1,
        StateNum::TFOG,
        1000,
        StateNum::None,
        SfxName::None,
        8,
        SfxName::None,
        StateNum::None,
        0,
        SfxName::None,
        StateNum::None,
        StateNum::None,
        StateNum::None,
        StateNum::None,
        SfxName::None,
        Fixed::ZERO,
        Fixed::from_int(20),
        Fixed::from_int(16),
        100,
        0,
        SfxName::None,
        MapObjFlag::Noblockmap as u32 | MapObjFlag::Nogravity as u32,
        StateNum::None,
    ),
    // RespawnFog
    MapObjInfo::new(
        -1,
        StateNum::IFOG,
        1000,
        StateNum::None,
        SfxName::None,
        8,
        SfxName::None,
        StateNum::None,
        0,
        SfxName::None,
        StateNum::None,
        StateNum::None,
        StateNum::None,
        StateNum::None,
        SfxName::None,
        Fixed::ZERO,
        Fixed::from_int(20),
        Fixed::from_int(16),
        100,
        0,
        SfxName::None,
        MapObjFlag::Noblockmap as u32 | MapObjFlag::Nogravity as u32,
        StateNum::None,
    ),
    // Teleportman
    MapObjInfo::new(
        14,
        StateNum::None,
        1000,
        StateNum::None,
        SfxName::None,
        8,
        SfxName::None,
        StateNum::None,
        0,
        SfxName::None,
        StateNum::None,
        StateNum::None,
        StateNum::None,
        StateNum::None,
        SfxName::None,
        Fixed::ZERO,
        Fixed::from_int(20),
        Fixed::from_int(16),
        100,
        0,
        SfxName::None,
        MapObjFlag::Noblockmap as u32 | MapObjFlag::Nosector as u32,
        StateNum::None,
    ),
    // BossBrain
    MapObjInfo::new(
        88,
        StateNum::BRAIN,
        250,
        StateNum::None,
        SfxName::None,
        8,
        SfxName::None,
        StateNum::BRAIN_PAIN,
        255,
        SfxName::Bospn,
        StateNum::None,
        StateNum::None,
        StateNum::BRAIN_DIE1,
        StateNum::None,
        SfxName::Bosdth,
        Fixed::ZERO,
        Fixed::from_int(16),
        Fixed::from_int(16),
        10000000,
        0,
        SfxName::None,
        MapObjFlag::Solid as u32 | MapObjFlag::Shootable as u32,
        StateNum::None,
    ),
    // BossSpit
    MapObjInfo::new(
        89,
        StateNum::BRAINEYE,
        1000,
        StateNum::BRAINEYESEE,
        SfxName::None,
        8,
        SfxName::None,
        StateNum::None,
        0,
        SfxName::None,
        StateNum::None,
        StateNum::None,
        StateNum::None,
        StateNum::None,
        SfxName::None,
        Fixed::ZERO,
        Fixed::from_int(20),
        Fixed::from_int(32),
        100,
        0,
        SfxName::None,
        MapObjFlag::Noblockmap as u32 | MapObjFlag::Nosector as u32,
        StateNum::None,
    ),
    // BossTarget
    MapObjInfo::new(
        87,
        StateNum::None,
        1000,
        StateNum::None,
        SfxName::None,
        8,
        SfxName::None,
        StateNum::None,
        0,
        SfxName::None,
        StateNum::None,
        StateNum::None,
        StateNum::None,
        StateNum::None,
        SfxName::None,
        Fixed::ZERO,
        Fixed::from_int(20),
        Fixed::from_int(32),
        100,
        0,
        SfxName::None,
        MapObjFlag::Noblockmap as u32 | MapObjFlag::Nosector as u32,
        StateNum::None,
    ),
    // SpawnShot
    MapObjInfo::new(
        -1,
        StateNum::SPAWN1,
        1000,
        StateNum::None,
        SfxName::Bospit,
        8,
        SfxName::None,
        StateNum::None,
        0,
        SfxName::None,
        StateNum::None,
        StateNum::None,
        StateNum::None,
        StateNum::None,
        SfxName::Firxpl,
        Fixed::from_int(10),
        Fixed::from_int(6),
        Fixed::from_int(32),
        100,
        3,
        SfxName::None,
        MapObjFlag::Noblockmap as u32
            | MapObjFlag::Missile as u32
            | MapObjFlag::Dropoff as u32
            | MapObjFlag::Nogravity as u32
            | MapObjFlag::Noclip as u32,
        StateNum::None,
    ),
    // SpawnFire
    MapObjInfo::new(
        -1,
        StateNum::SPAWNFIRE1,
        1000,
        StateNum::None,
        SfxName::None,
        8,
        SfxName::None,
        StateNum::None,
        0,
        SfxName::None,
        StateNum::None,
        StateNum::None,
        StateNum::None,
        StateNum::None,
        SfxName::None,
        Fixed::ZERO,
        Fixed::from_int(20),
        Fixed::from_int(16),
        100,
        0,
        SfxName::None,
        MapObjFlag::Noblockmap as u32 | MapObjFlag::Nogravity as u32,
        StateNum::None,
    ),
    // Clip
    MapObjInfo::new(
        2007,
        StateNum::CLIP,
        1000,
        StateNum::None,
        SfxName::None,
        8,
        SfxName::None,
        StateNum::None,
        0,
        SfxName::None,
        StateNum::None,
        StateNum::None,
        StateNum::None,
        StateNum::None,
        SfxName::None,
        Fixed::ZERO,
        Fixed::from_int(20),
        Fixed::from_int(16),
        100,
        0,
        SfxName::None,
        MapObjFlag::Special as u32,
        StateNum::None,
    ),
    // ShellAmmo
    MapObjInfo::new(
        2008,
        StateNum::SHEL,
        1000,
        StateNum::None,
        SfxName::None,
        8,
        SfxName::None,
        StateNum::None,
        0,
        SfxName::None,
        StateNum::None,
        StateNum::None,
        StateNum::None,
        StateNum::None,
        SfxName::None,
        Fixed::ZERO,
        Fixed::from_int(20),
        Fixed::from_int(16),
        100,
        0,
        SfxName::None,
        MapObjFlag::Special as u32,
        StateNum::None,
    ),
    // RocketAmmo
    MapObjInfo::new(
        2010,
        StateNum::ROCK,
        1000,
        StateNum::None,
        SfxName::None,
        8,
        SfxName::None,
        StateNum::None,
        0,
        SfxName::None,
        StateNum::None,
        StateNum::None,
        StateNum::None,
        StateNum::None,
        SfxName::None,
        Fixed::ZERO,
        Fixed::from_int(20),
        Fixed::from_int(16),
        100,
        0,
        SfxName::None,
        MapObjFlag::Special as u32,
        StateNum::None,
    ),
    // Stimpack
    MapObjInfo::new(
        2011,
        StateNum::STIM,
        1000,
        StateNum::None,
        SfxName::None,
        8,
        SfxName::None,
        StateNum::None,
        0,
        SfxName::None,
        StateNum::None,
        StateNum::None,
        StateNum::None,
        StateNum::None,
        SfxName::None,
        Fixed::ZERO,
        Fixed::from_int(20),
        Fixed::from_int(16),
        100,
        0,
        SfxName::None,
        MapObjFlag::Special as u32,
        StateNum::None,
    ),
    // Medikit
    MapObjInfo::new(
        2012,
        StateNum::MEDI,
        1000,
        StateNum::None,
        SfxName::None,
        8,
        SfxName::None,
        StateNum::None,
        0,
        SfxName::None,
        StateNum::None,
        StateNum::None,
        StateNum::None,
        StateNum::None,
        SfxName::None,
        Fixed::ZERO,
        Fixed::from_int(20),
        Fixed::from_int(16),
        100,
        0,
        SfxName::None,
        MapObjFlag::Special as u32,
        StateNum::None,
    ),
    // GreenArmor
    MapObjInfo::new(
        2018,
        StateNum::ARM1,
        1000,
        StateNum::None,
        SfxName::None,
        8,
        SfxName::None,
        StateNum::None,
        0,
        SfxName::None,
        StateNum::None,
        StateNum::None,
        StateNum::None,
        StateNum::None,
        SfxName::None,
        Fixed::ZERO,
        Fixed::from_int(20),
        Fixed::from_int(16),
        100,
        0,
        SfxName::None,
        MapObjFlag::Special as u32,
        StateNum::None,
    ),
    // BlueCard
    MapObjInfo::new(
        5,
        StateNum::BKEY,
        1000,
        StateNum::None,
        SfxName::None,
        8,
        SfxName::None,
        StateNum::None,
        0,
        SfxName::None,
        StateNum::None,
        StateNum::None,
        StateNum::None,
        StateNum::None,
        SfxName::None,
        Fixed::ZERO,
        Fixed::from_int(20),
        Fixed::from_int(16),
        100,
        0,
        SfxName::None,
        MapObjFlag::Special as u32 | MapObjFlag::Notdmatch as u32,
        StateNum::None,
    ),
    // YellowCard
    MapObjInfo::new(
        6,
        StateNum::YKEY,
        1000,
        StateNum::None,
        SfxName::None,
        8,
        SfxName::None,
        StateNum::None,
        0,
        SfxName::None,
        StateNum::None,
        StateNum::None,
        StateNum::None,
        StateNum::None,
        SfxName::None,
        Fixed::ZERO,
        Fixed::from_int(20),
        Fixed::from_int(16),
        100,
        0,
        SfxName::None,
        MapObjFlag::Special as u32 | MapObjFlag::Notdmatch as u32,
        StateNum::None,
    ),
    // RedCard
    MapObjInfo::new(
        13,
        StateNum::RKEY,
        1000,
        StateNum::None,
        SfxName::None,
        8,
        SfxName::None,
        StateNum::None,
        0,
        SfxName::None,
        StateNum::None,
        StateNum::None,
        StateNum::None,
        StateNum::None,
        SfxName::None,
        Fixed::ZERO,
        Fixed::from_int(20),
        Fixed::from_int(16),
        100,
        0,
        SfxName::None,
        MapObjFlag::Special as u32 | MapObjFlag::Notdmatch as u32,
        StateNum::None,
    ),
    // Shotgun
    MapObjInfo::new(
        2001,
        StateNum::SHOT,
        1000,
        StateNum::None,
        SfxName::None,
        8,
        SfxName::None,
        StateNum::None,
        0,
        SfxName::None,
        StateNum::None,
        StateNum::None,
        StateNum::None,
        StateNum::None,
        SfxName::None,
        Fixed::ZERO,
        Fixed::from_int(20),
        Fixed::from_int(16),
        100,
        0,
        SfxName::None,
        MapObjFlag::Special as u32,
        StateNum::None,
    ),
    // Chaingun
    MapObjInfo::new(
        2002,
        StateNum::MGUN,
        1000,
        StateNum::None,
        SfxName::None,
        8,
        SfxName::None,
        StateNum::None,
        0,
        SfxName::None,
        StateNum::None,
        StateNum::None,
        StateNum::None,
        StateNum::None,
        SfxName::None,
        Fixed::ZERO,
        Fixed::from_int(20),
        Fixed::from_int(16),
        100,
        0,
        SfxName::None,
        MapObjFlag::Special as u32,
        StateNum::None,
    ),
    // RocketLauncher
    MapObjInfo::new(
        2003,
        StateNum::LAUN,
        1000,
        StateNum::None,
        SfxName::None,
        8,
        SfxName::None,
        StateNum::None,
        0,
        SfxName::None,
        StateNum::None,
        StateNum::None,
        StateNum::None,
        StateNum::None,
        SfxName::None,
        Fixed::ZERO,
        Fixed::from_int(20),
        Fixed::from_int(16),
        100,
        0,
        SfxName::None,
        MapObjFlag::Special as u32,
        StateNum::None,
    ),
];
