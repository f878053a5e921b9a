//! A deterministic, fixed-timestep world simulator. One `World` owns a
//! loaded level and everything alive in it; `update()` advances exactly one
//! tick of 1/35th of a second. Given the same map, seed and command stream
//! the simulation replays bit-identically.
//!
//! Map data comes in as plain decoded arrays, sound goes out as messages on
//! an `mpsc` channel, and rendering is somebody else's problem: the host is
//! expected to read the sector and thing state between ticks.

pub mod defs;
pub mod env;
#[rustfmt::skip]
pub mod info;
pub mod lang;
pub mod level;
pub(crate) mod pathtrace;
pub mod player;
pub mod player_sprite;
pub(crate) mod random;
pub(crate) mod sight;
pub mod thing;
pub mod thinker;

use std::sync::mpsc::Sender;

use log::{error, info};
use sound_traits::{SfxName, SoundAction};

pub use defs::{
    GameAction, GameMode, Skill, TicCmd, TickResult, WeaponType, WorldError, MAXPLAYERS, TICRATE,
};
pub use env::specials::{spawn_specials, update_specials};
pub use lang::english;
pub use level::map_data::{MapData, RawMapData};
pub use level::map_defs::{LineDefFlags, Sector};
pub use level::{Level, LevelOptions};
pub use log;
pub use math;
pub use sound_traits;
pub use player::{Player, PlayerCheat, PlayerState};
pub use player_sprite::PspDef;
pub use thing::{MapObjFlag, MapObject};

use crate::player::player_think;
use crate::thinker::ThinkerAlloc;

/// Out-of-band input, not part of the per-tick command stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorldEvent {
    ToggleAutomap,
    ToggleGodMode(usize),
    ToggleNoclip(usize),
}

/// The whole simulation. Owns the level and drives it a tick at a time.
pub struct World {
    level: Level,
    automap_active: bool,
}

impl World {
    /// Load a level and populate it: spawn every map thing the skill allows,
    /// place the active players at their starts, then arm the sector
    /// specials.
    pub fn new(
        options: LevelOptions,
        raw: RawMapData,
        player_in_game: [bool; MAXPLAYERS],
        snd_command: Sender<SoundAction<SfxName>>,
    ) -> Result<World, WorldError> {
        let mut level = Level::new(options, raw, snd_command)?;
        level.player_in_game = player_in_game;

        let things = level.map_data.things.clone();
        for thing in things {
            MapObject::spawn_map_thing(thing, &mut level)?;
        }
        for slot in 0..MAXPLAYERS {
            if level.player_in_game[slot] && level.players[slot].mobj.is_none() {
                return Err(WorldError::NoPlayerStart(slot));
            }
        }

        spawn_specials(&mut level)?;
        info!(
            "Level E{}M{} up, {} thinkers",
            level.episode,
            level.game_map,
            level.thinkers.len()
        );

        Ok(World {
            level,
            automap_active: false,
        })
    }

    /// Advance one tick.
    ///
    /// Doom function name is `P_Ticker`
    pub fn update(&mut self, cmds: [TicCmd; MAXPLAYERS]) -> TickResult {
        let mut result = TickResult::None;

        for slot in 0..MAXPLAYERS {
            if !self.level.player_in_game[slot] {
                continue;
            }
            self.level.players[slot].cmd = cmds[slot];
            if self.level.players[slot].player_state == PlayerState::Reborn {
                if self.respawn_player(slot) {
                    result = TickResult::NeedWipe;
                }
            }
        }

        for slot in 0..MAXPLAYERS {
            if self.level.player_in_game[slot] {
                player_think(slot, &mut self.level);
            }
        }

        ThinkerAlloc::run_thinkers(&mut self.level);
        update_specials(&mut self.level);
        self.level.level_time += 1;

        if self.level.game_action == GameAction::CompletedLevel {
            return TickResult::Completed;
        }
        result
    }

    /// Put a reborn player back on their start spot. The old body stays as
    /// a corpse but no longer belongs to anyone.
    fn respawn_player(&mut self, slot: usize) -> bool {
        if let Some(id) = self.level.players[slot].mobj.take() {
            if let Some(corpse) = self.level.thinkers.mobj_mut(id) {
                corpse.player = None;
            }
        }

        let start = self
            .level
            .map_data
            .things
            .iter()
            .copied()
            .find(|t| t.kind as usize == slot + 1);
        let Some(start) = start else {
            error!("No start spot to respawn player {slot}");
            return false;
        };
        match MapObject::spawn_map_thing(start, &mut self.level) {
            Ok(()) => true,
            Err(e) => {
                error!("Respawning player {slot} failed: {e}");
                false
            }
        }
    }

    /// UI-side input: automap and cheat toggles. Returns true if the event
    /// was consumed.
    pub fn do_event(&mut self, ev: WorldEvent) -> bool {
        match ev {
            WorldEvent::ToggleAutomap => {
                self.automap_active = !self.automap_active;
                true
            }
            WorldEvent::ToggleGodMode(slot) => {
                if slot >= MAXPLAYERS || !self.level.player_in_game[slot] {
                    return false;
                }
                let player = &mut self.level.players[slot];
                player.cheats ^= PlayerCheat::Godmode as u32;
                player.message = if player.cheats & PlayerCheat::Godmode as u32 != 0 {
                    Some(english::STSTR_DQDON)
                } else {
                    Some(english::STSTR_DQDOFF)
                };
                true
            }
            WorldEvent::ToggleNoclip(slot) => {
                if slot >= MAXPLAYERS || !self.level.player_in_game[slot] {
                    return false;
                }
                let player = &mut self.level.players[slot];
                player.cheats ^= PlayerCheat::Noclip as u32;
                player.message = if player.cheats & PlayerCheat::Noclip as u32 != 0 {
                    Some(english::STSTR_NCON)
                } else {
                    Some(english::STSTR_NCOFF)
                };
                true
            }
        }
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn level_mut(&mut self) -> &mut Level {
        &mut self.level
    }

    pub fn sectors(&self) -> &[Sector] {
        &self.level.map_data.sectors
    }

    /// Every live map object, in thinker run order
    pub fn things(&self) -> impl Iterator<Item = &MapObject> {
        self.level.thinkers.iter().filter_map(|(_, d)| d.mobj())
    }

    pub fn player(&self, slot: usize) -> &Player {
        &self.level.players[slot]
    }

    pub fn level_time(&self) -> u32 {
        self.level.level_time
    }

    pub fn secret_exit(&self) -> bool {
        self.level.secret_exit
    }

    pub fn automap_active(&self) -> bool {
        self.automap_active
    }
}

impl std::fmt::Debug for World {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("World")
            .field("level", &self.level)
            .field("automap_active", &self.automap_active)
            .finish()
    }
}
