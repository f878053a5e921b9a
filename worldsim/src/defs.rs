//! Constants, shared enums and the per-tick command format. The numeric
//! values here are load-bearing: changing any of them changes the simulation
//! outcome for identical inputs.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use math::Fixed;

use crate::info::StateNum;
use crate::level::Level;
use crate::player::Player;
use crate::player_sprite::PspDef;
use crate::thing::MapObject;

/// Simulation ticks per second
pub const TICRATE: i32 = 35;

pub const MELEERANGE: Fixed = Fixed::from_int(64);
pub const MISSILERANGE: Fixed = Fixed::from_int(32 * 64);
pub const USERANGE: Fixed = Fixed::from_int(64);
pub const SKULLSPEED: Fixed = Fixed::from_int(20);
pub const FLOATSPEED: Fixed = Fixed::from_int(4);

/// Largest thing radius; blockmap queries pad by this so nothing is missed
pub const MAXRADIUS: Fixed = Fixed::from_int(32);
/// Momentum clamp per axis per tick
pub const MAXMOVE: Fixed = Fixed::from_int(30);
/// Map units of fall per tick per tick
pub const GRAVITY: Fixed = Fixed::ONE;

/// Spawn-height request markers, resolved against the sector at spawn time
pub const ONFLOORZ: Fixed = Fixed::MIN;
pub const ONCEILINGZ: Fixed = Fixed::MAX;

pub const MAXHEALTH: i32 = 100;
pub const VIEWHEIGHT: Fixed = Fixed::from_int(41);
/// Chase-target lock duration after taking damage
pub const BASETHRESHOLD: i32 = 100;

pub const MAXPLAYERS: usize = 4;

/// Deaf monsters do not react to sound
pub const MTF_AMBUSH: i16 = 8;
/// Thing spawns only in multiplayer games
pub const MTF_NET_ONLY: i16 = 16;

/// Hard cap on intercepts gathered by one trace
pub const MAX_INTERCEPTS: usize = 256;
/// Hard cap on special lines crossed by one move
pub const MAX_SPECIAL_CROSS: usize = 20;
/// Hard cap on concurrently tracked platforms
pub const MAX_PLATFORMS: usize = 60;
/// Hard cap on concurrently tracked crushers
pub const MAX_CEILINGS: usize = 30;
/// Hard cap on pressed switches awaiting reset
pub const MAX_BUTTONS: usize = 32;
/// Ticks before a pressed switch pops back out
pub const BUTTONTIME: i32 = TICRATE;

#[derive(Debug)]
pub enum WorldError {
    InvalidSkill(String),
    /// A map lump referenced an entity that does not exist
    BadMapReference {
        kind: &'static str,
        index: usize,
        limit: usize,
    },
    /// The map has no geometry to simulate
    EmptyMap,
    NoPlayerStart(usize),
    ThinkerCapacity(usize),
    /// A sector asked for a behaviour the simulation does not know
    UnknownSectorSpecial { sector: usize, special: i16 },
}

impl Error for WorldError {}

impl fmt::Display for WorldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorldError::InvalidSkill(m) => write!(f, "{}", m),
            WorldError::BadMapReference { kind, index, limit } => {
                write!(f, "{} reference {} out of range (have {})", kind, index, limit)
            }
            WorldError::EmptyMap => write!(f, "map has no sectors or lines"),
            WorldError::NoPlayerStart(p) => write!(f, "no start spot for player {}", p + 1),
            WorldError::ThinkerCapacity(cap) => {
                write!(f, "thinker storage exhausted at {}", cap)
            }
            WorldError::UnknownSectorSpecial { sector, special } => {
                write!(f, "sector {} has unknown special {}", sector, special)
            }
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub enum Skill {
    Baby = 0,
    Easy = 1,
    Medium = 2,
    Hard = 3,
    Nightmare = 4,
}

impl Default for Skill {
    fn default() -> Self {
        Skill::Medium
    }
}

impl FromStr for Skill {
    type Err = WorldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "0" => Ok(Skill::Baby),
            "1" => Ok(Skill::Easy),
            "2" => Ok(Skill::Medium),
            "3" => Ok(Skill::Hard),
            "4" => Ok(Skill::Nightmare),
            _ => Err(WorldError::InvalidSkill("Invalid arg".to_owned())),
        }
    }
}

/// Identify game release for the handful of behaviours that differ between them
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum GameMode {
    Shareware,
    Registered,
    Commercial,
    Retail,
}

/// Requested by the simulation, actioned by whatever is driving it
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub enum GameAction {
    #[default]
    Nothing,
    LoadLevel,
    NewGame,
    CompletedLevel,
    WorldDone,
}

/// Outcome of one `World::update` call
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum TickResult {
    None,
    /// Display should run a screen transition
    NeedWipe,
    /// Level exit was triggered this tick
    Completed,
}

/// Key cards.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Card {
    Bluecard,
    Yellowcard,
    Redcard,
    Blueskull,
    Yellowskull,
    Redskull,
    NumCards,
}

/// The defined weapons, including a marker indicating user has not changed weapon.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub enum WeaponType {
    Fist,
    Pistol,
    Shotgun,
    Chaingun,
    Missile,
    NumWeapons,
    // No pending weapon change.
    NoChange,
}

impl From<WeaponType> for usize {
    fn from(w: WeaponType) -> Self {
        match w {
            WeaponType::Fist => 0,
            WeaponType::Pistol => 1,
            WeaponType::Shotgun => 2,
            WeaponType::Chaingun => 3,
            WeaponType::Missile => 4,
            _ => 0,
        }
    }
}

impl Default for WeaponType {
    fn default() -> Self {
        Self::Pistol
    }
}

pub const MAX_AMMO: [u32; 4] = [200, 50, 300, 50];
pub const CLIP_AMMO: [u32; 4] = [10, 4, 20, 1];

/// Ammunition types defined.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AmmoType {
    /// Pistol / chaingun ammo.
    Clip,
    /// Shotgun.
    Shell,
    /// Unused slot kept so ammo indices line up with pickup data.
    Cell,
    /// Missile launcher.
    Missile,
    NumAmmo,
    /// Unlimited for fist.
    NoAmmo,
}

/// Definition for player sprites (HUD weapon) actions
pub struct WeaponInfo {
    /// Ammo type required
    pub ammo: AmmoType,
    /// The starting state for bringing the weapon up
    pub upstate: StateNum,
    /// The state for putting weapon down
    pub downstate: StateNum,
    /// State for when weapon is *ready to fire*
    pub readystate: StateNum,
    /// State for weapon is firing
    pub atkstate: StateNum,
    /// Muzzle flashes
    pub flashstate: StateNum,
}

pub const WEAPON_INFO: [WeaponInfo; 5] = [
    // fist
    WeaponInfo {
        ammo: AmmoType::NoAmmo,
        upstate: StateNum::PUNCHUP,
        downstate: StateNum::PUNCHDOWN,
        readystate: StateNum::PUNCH,
        atkstate: StateNum::PUNCH1,
        flashstate: StateNum::None,
    },
    // pistol
    WeaponInfo {
        ammo: AmmoType::Clip,
        upstate: StateNum::PISTOLUP,
        downstate: StateNum::PISTOLDOWN,
        readystate: StateNum::PISTOL,
        atkstate: StateNum::PISTOL1,
        flashstate: StateNum::PISTOLFLASH,
    },
    // shotgun
    WeaponInfo {
        ammo: AmmoType::Shell,
        upstate: StateNum::SGUNUP,
        downstate: StateNum::SGUNDOWN,
        readystate: StateNum::SGUN,
        atkstate: StateNum::SGUN1,
        flashstate: StateNum::SGUNFLASH1,
    },
    // chaingun
    WeaponInfo {
        ammo: AmmoType::Clip,
        upstate: StateNum::CHAINUP,
        downstate: StateNum::CHAINDOWN,
        readystate: StateNum::CHAIN,
        atkstate: StateNum::CHAIN1,
        flashstate: StateNum::CHAINFLASH1,
    },
    // missile launcher
    WeaponInfo {
        ammo: AmmoType::Missile,
        upstate: StateNum::MISSILEUP,
        downstate: StateNum::MISSILEDOWN,
        readystate: StateNum::MISSILE,
        atkstate: StateNum::MISSILE1,
        flashstate: StateNum::MISSILEFLASH1,
    },
];

/// State actions, dispatched by variant so the state tables stay plain data
#[derive(Clone)]
pub enum ActFn {
    /// Operates on a `MapObject` detached from thinker storage for the call
    A(fn(&mut MapObject, &mut Level)),
    /// Operates on the `Player` and the sprite definition being cycled
    P(fn(&mut Player, &mut PspDef, &mut Level)),
    /// For a state with no action
    N,
}

impl fmt::Debug for ActFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActFn::N => f.debug_struct("None").finish(),
            ActFn::A(_) => f.debug_struct("Actor").finish(),
            ActFn::P(_) => f.debug_struct("Player").finish(),
        }
    }
}

pub const BT_ATTACK: u8 = 1;
pub const BT_USE: u8 = 2;
/// Weapon change requested; new weapon in the mask bits
pub const BT_CHANGE: u8 = 4;
pub const BT_WEAPONMASK: u8 = 8 + 16 + 32;
pub const BT_WEAPONSHIFT: u8 = 3;

/// One tick of player intent. A recorded stream of these plus the level seed
/// replays the entire simulation.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct TicCmd {
    /// Forward/backward push, positive is forward
    pub forwardmove: i8,
    /// Strafe push, positive is right
    pub sidemove: i8,
    /// BAM angle delta >> 16
    pub angleturn: i16,
    pub buttons: u8,
}

impl TicCmd {
    pub const fn new() -> Self {
        Self {
            forwardmove: 0,
            sidemove: 0,
            angleturn: 0,
            buttons: 0,
        }
    }
}
