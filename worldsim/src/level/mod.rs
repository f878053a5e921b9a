//! The data that makes up an entire level, along with the accessors the
//! thinkers and specials use to reach shared state.

pub mod map_data;
pub mod map_defs;
pub mod test_maps;

use std::sync::mpsc::Sender;

use log::{error, info};
use sound_traits::{SfxName, SoundAction};

use crate::defs::{
    GameAction, GameMode, Skill, WorldError, MAXPLAYERS, MAX_CEILINGS, MAX_PLATFORMS,
};
use crate::env::platforms::PlatStatus;
use crate::env::switch::Button;
use crate::level::map_data::{MapData, RawMapData};
use crate::player::Player;
use crate::random::Random;
use crate::thinker::{ThinkerAlloc, ThinkerData, ThinkerId};

/// Everything that shapes a fresh level besides the map itself
#[derive(Debug, Clone)]
pub struct LevelOptions {
    pub skill: Skill,
    pub episode: i32,
    pub map: i32,
    pub game_mode: GameMode,
    /// Skip monster spawns entirely
    pub no_monsters: bool,
    /// Texture ids that are switch faces. Registering either member of a
    /// pair is enough, the partner is the id with the lowest bit flipped.
    pub switch_textures: Vec<i16>,
    /// Seed for the deterministic random stream
    pub rng_seed: u8,
}

impl Default for LevelOptions {
    fn default() -> Self {
        Self {
            skill: Skill::Medium,
            episode: 1,
            map: 1,
            game_mode: GameMode::Commercial,
            no_monsters: false,
            switch_textures: Vec::new(),
            rng_seed: 0,
        }
    }
}

/// One loaded level and every bit of live state in it. All thinkers and
/// specials take `&mut Level` so the whole simulation shares this view.
pub struct Level {
    pub map_data: MapData,
    pub thinkers: ThinkerAlloc,
    pub players: [Player; MAXPLAYERS],
    pub player_in_game: [bool; MAXPLAYERS],
    pub game_skill: Skill,
    pub respawn_monsters: bool,
    pub level_time: u32,
    /// Required for the boss checks
    pub episode: i32,
    /// Required for the boss checks
    pub game_map: i32,
    /// for intermission
    pub totalkills: i32,
    /// for intermission
    pub totalitems: i32,
    /// for intermission
    pub totalsecret: i32,
    /// To change the game state via switches and exits in the level
    pub game_action: GameAction,
    /// Record how the level was exited
    pub secret_exit: bool,
    /// Marker count for lines checked
    pub(crate) valid_count: usize,
    /// Switches waiting to flip their texture back
    pub(crate) button_list: Vec<Button>,
    /// Both members of every registered switch texture pair
    pub(crate) switch_list: Vec<i16>,
    /// Some stuff needs to know the game mode (e.g, boss rules)
    pub(crate) game_mode: GameMode,
    /// Provides ability for things to start a sound
    pub(crate) snd_command: Sender<SoundAction<SfxName>>,
    pub(crate) no_monsters: bool,
    pub(crate) rng: Random,
    pub(crate) active_platforms: Vec<ThinkerId>,
    pub(crate) active_ceilings: Vec<ThinkerId>,
    /// Spawn-cube landing spots, gathered at level start
    pub(crate) boss_targets: Vec<ThinkerId>,
    pub(crate) boss_target_on: usize,
    /// Toggles each spit so low skills get every other cube
    pub(crate) boss_easy: bool,
}

impl Level {
    /// Build the containers for a level from raw map data. Things and
    /// specials are not spawned yet; the world setup does that next.
    ///
    /// Doom method name is `P_SetupLevel`
    pub fn new(
        options: LevelOptions,
        raw: RawMapData,
        snd_command: Sender<SoundAction<SfxName>>,
    ) -> Result<Self, WorldError> {
        let respawn_monsters = matches!(options.skill, Skill::Nightmare);
        let map_data = MapData::new(raw)?;
        let thinkers = ThinkerAlloc::new(map_data.things.len() + 500);

        let mut switch_list = Vec::with_capacity(options.switch_textures.len() * 2);
        for &tex in &options.switch_textures {
            switch_list.push(tex);
            switch_list.push(tex ^ 1);
        }

        Ok(Level {
            map_data,
            thinkers,
            players: Default::default(),
            player_in_game: [false; MAXPLAYERS],
            game_skill: options.skill,
            respawn_monsters,
            level_time: 0,
            episode: options.episode,
            game_map: options.map,
            totalkills: 0,
            totalitems: 0,
            totalsecret: 0,
            game_action: GameAction::Nothing,
            secret_exit: false,
            valid_count: 0,
            button_list: Vec::new(),
            switch_list,
            game_mode: options.game_mode,
            snd_command,
            no_monsters: options.no_monsters,
            rng: Random::new(options.rng_seed),
            active_platforms: Vec::with_capacity(MAX_PLATFORMS),
            active_ceilings: Vec::with_capacity(MAX_CEILINGS),
            boss_targets: Vec::new(),
            boss_target_on: 0,
            boss_easy: false,
        })
    }

    pub(crate) fn bump_valid_count(&mut self) -> usize {
        self.valid_count += 1;
        self.valid_count
    }

    pub(crate) fn add_active_platform(&mut self, id: ThinkerId) {
        if self.active_platforms.len() >= MAX_PLATFORMS {
            error!("Too many active platforms, dropping {id}");
            self.thinkers.remove(id);
            return;
        }
        self.active_platforms.push(id);
    }

    pub(crate) fn remove_active_platform(&mut self, id: ThinkerId) {
        if let Some(pos) = self.active_platforms.iter().position(|p| *p == id) {
            self.active_platforms.remove(pos);
        }
        if let Some(ThinkerData::Platform(plat)) = self.thinkers.get(id) {
            self.map_data.sectors[plat.sector].specialdata = None;
        }
        self.thinkers.remove(id);
    }

    pub(crate) fn stop_platform(&mut self, tag: i16) {
        for i in 0..self.active_platforms.len() {
            let id = self.active_platforms[i];
            if let Some(ThinkerData::Platform(plat)) = self.thinkers.get_mut(id) {
                if plat.tag == tag && plat.status != PlatStatus::InStasis {
                    plat.old_status = plat.status;
                    plat.status = PlatStatus::InStasis;
                }
            }
        }
    }

    pub(crate) fn activate_platform_in_stasis(&mut self, tag: i16) {
        for i in 0..self.active_platforms.len() {
            let id = self.active_platforms[i];
            if let Some(ThinkerData::Platform(plat)) = self.thinkers.get_mut(id) {
                if plat.tag == tag && plat.status == PlatStatus::InStasis {
                    plat.status = plat.old_status;
                }
            }
        }
    }

    pub(crate) fn add_active_ceiling(&mut self, id: ThinkerId) {
        if self.active_ceilings.len() >= MAX_CEILINGS {
            error!("Too many active ceilings, dropping {id}");
            self.thinkers.remove(id);
            return;
        }
        self.active_ceilings.push(id);
    }

    pub(crate) fn remove_active_ceiling(&mut self, id: ThinkerId) {
        if let Some(pos) = self.active_ceilings.iter().position(|c| *c == id) {
            self.active_ceilings.remove(pos);
        }
        if let Some(ThinkerData::CeilingMove(ceiling)) = self.thinkers.get(id) {
            self.map_data.sectors[ceiling.sector].specialdata = None;
        }
        self.thinkers.remove(id);
    }

    /// Restart stopped crushers with this tag. Returns true if any restarted.
    pub(crate) fn activate_ceiling_in_stasis(&mut self, tag: i16) -> bool {
        let mut found = false;
        for i in 0..self.active_ceilings.len() {
            let id = self.active_ceilings[i];
            if let Some(ThinkerData::CeilingMove(ceiling)) = self.thinkers.get_mut(id) {
                if ceiling.tag == tag && ceiling.in_stasis {
                    ceiling.in_stasis = false;
                    found = true;
                }
            }
        }
        found
    }

    /// Pause crushers with this tag. Returns true if any paused.
    pub(crate) fn ceiling_stasis(&mut self, tag: i16) -> bool {
        let mut found = false;
        for i in 0..self.active_ceilings.len() {
            let id = self.active_ceilings[i];
            if let Some(ThinkerData::CeilingMove(ceiling)) = self.thinkers.get_mut(id) {
                if ceiling.tag == tag && !ceiling.in_stasis {
                    ceiling.in_stasis = true;
                    found = true;
                }
            }
        }
        found
    }

    pub(crate) fn do_exit_level(&mut self) {
        info!("Exited level");
        self.secret_exit = false;
        self.game_action = GameAction::CompletedLevel;
    }

    pub(crate) fn do_secret_exit_level(&mut self) {
        info!("Secret exited level");
        self.secret_exit = true;
        self.game_action = GameAction::CompletedLevel;
    }

    pub(crate) fn start_sound(&self, sfx: SfxName, x: f32, y: f32, uid: usize) {
        // The receiver dropping just means nothing is listening
        let _ = self.snd_command.send(SoundAction::StartSfx { uid, sfx, x, y });
    }
}

impl std::fmt::Debug for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Level")
            .field("game_map", &self.game_map)
            .field("level_time", &self.level_time)
            .field("thinkers", &self.thinkers.len())
            .finish_non_exhaustive()
    }
}
