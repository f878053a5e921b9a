//! The frame table. Entry order must match `StateNum` exactly; the enum is
//! the index. Tics of -1 mean the state never advances.

use crate::defs::ActFn;
use crate::info::{SpriteNum, State, StateNum, FF_FULLBRIGHT};
use crate::player_sprite::{
    a_firecgun, a_firemissile, a_firepistol, a_fireshotgun, a_gunflash, a_light0, a_light1,
    a_light2, a_lower, a_punch, a_raise, a_refire, a_weaponready,
};
use crate::thing::enemy::{
    a_bossdeath, a_brainawake, a_braindie, a_brainexplode, a_brainpain, a_brainscream,
    a_brainspit, a_bruisattack, a_chase, a_explode, a_facetarget, a_fall, a_fire, a_firecrackle,
    a_headattack, a_look, a_pain, a_painattack, a_paindie, a_playerscream, a_posattack,
    a_sargattack, a_scream, a_skullattack, a_spawnfly, a_spawnsound, a_sposattack, a_startfire,
    a_troopattack, a_vileattack, a_vilechase, a_vilestart, a_viletarget, a_xscream,
};

const FF: u32 = FF_FULLBRIGHT;

use ActFn::{A, N, P};
use SpriteNum::*;
use StateNum as S;

#[rustfmt::skip]
pub const STATES: [State; StateNum::NumStates as usize] = [
    // None. Things parked here are never advanced or drawn
    State::new(TROO, 0, -1, N, S::None),
    State::new(SHTG, 4, 0, P(a_light0), S::None),                 // LIGHTDONE
    // Fist
    State::new(PUNG, 0, 1, P(a_weaponready), S::PUNCH),           // PUNCH
    State::new(PUNG, 0, 1, P(a_lower), S::PUNCHDOWN),             // PUNCHDOWN
    State::new(PUNG, 0, 1, P(a_raise), S::PUNCHUP),               // PUNCHUP
    State::new(PUNG, 1, 4, N, S::PUNCH2),                         // PUNCH1
    State::new(PUNG, 2, 4, P(a_punch), S::PUNCH3),                // PUNCH2
    State::new(PUNG, 3, 5, N, S::PUNCH4),                         // PUNCH3
    State::new(PUNG, 2, 4, N, S::PUNCH5),                         // PUNCH4
    State::new(PUNG, 1, 5, P(a_refire), S::PUNCH),                // PUNCH5
    // Pistol
    State::new(PISG, 0, 1, P(a_weaponready), S::PISTOL),          // PISTOL
    State::new(PISG, 0, 1, P(a_lower), S::PISTOLDOWN),            // PISTOLDOWN
    State::new(PISG, 0, 1, P(a_raise), S::PISTOLUP),              // PISTOLUP
    State::new(PISG, 0, 4, N, S::PISTOL2),                        // PISTOL1
    State::new(PISG, 1, 6, P(a_firepistol), S::PISTOL3),          // PISTOL2
    State::new(PISG, 2, 4, N, S::PISTOL4),                        // PISTOL3
    State::new(PISG, 1, 5, P(a_refire), S::PISTOL),               // PISTOL4
    State::new(PISF, FF, 7, P(a_light1), S::LIGHTDONE),           // PISTOLFLASH
    // Shotgun
    State::new(SHTG, 0, 1, P(a_weaponready), S::SGUN),            // SGUN
    State::new(SHTG, 0, 1, P(a_lower), S::SGUNDOWN),              // SGUNDOWN
    State::new(SHTG, 0, 1, P(a_raise), S::SGUNUP),                // SGUNUP
    State::new(SHTG, 0, 3, N, S::SGUN2),                          // SGUN1
    State::new(SHTG, 0, 7, P(a_fireshotgun), S::SGUN3),           // SGUN2
    State::new(SHTG, 1, 5, N, S::SGUN4),                          // SGUN3
    State::new(SHTG, 2, 5, N, S::SGUN5),                          // SGUN4
    State::new(SHTG, 3, 4, N, S::SGUN6),                          // SGUN5
    State::new(SHTG, 2, 5, N, S::SGUN7),                          // SGUN6
    State::new(SHTG, 1, 5, N, S::SGUN8),                          // SGUN7
    State::new(SHTG, 0, 3, N, S::SGUN9),                          // SGUN8
    State::new(SHTG, 0, 7, P(a_refire), S::SGUN),                 // SGUN9
    State::new(SHTF, FF, 4, P(a_light1), S::SGUNFLASH2),          // SGUNFLASH1
    State::new(SHTF, FF | 1, 3, P(a_light2), S::LIGHTDONE),       // SGUNFLASH2
    // Chaingun
    State::new(CHGG, 0, 1, P(a_weaponready), S::CHAIN),           // CHAIN
    State::new(CHGG, 0, 1, P(a_lower), S::CHAINDOWN),             // CHAINDOWN
    State::new(CHGG, 0, 1, P(a_raise), S::CHAINUP),               // CHAINUP
    State::new(CHGG, 0, 4, P(a_firecgun), S::CHAIN2),             // CHAIN1
    State::new(CHGG, 1, 4, P(a_firecgun), S::CHAIN3),             // CHAIN2
    State::new(CHGG, 1, 0, P(a_refire), S::CHAIN),                // CHAIN3
    State::new(CHGF, FF, 5, P(a_light1), S::CHAINFLASH2),         // CHAINFLASH1
    State::new(CHGF, FF | 1, 5, P(a_light2), S::LIGHTDONE),       // CHAINFLASH2
    // Rocket launcher
    State::new(MISG, 0, 1, P(a_weaponready), S::MISSILE),         // MISSILE
    State::new(MISG, 0, 1, P(a_lower), S::MISSILEDOWN),           // MISSILEDOWN
    State::new(MISG, 0, 1, P(a_raise), S::MISSILEUP),             // MISSILEUP
    State::new(MISG, 1, 8, P(a_gunflash), S::MISSILE2),           // MISSILE1
    State::new(MISG, 1, 12, P(a_firemissile), S::MISSILE3),       // MISSILE2
    State::new(MISG, 1, 0, P(a_refire), S::MISSILE),              // MISSILE3
    State::new(MISF, FF, 3, P(a_light1), S::MISSILEFLASH2),       // MISSILEFLASH1
    State::new(MISF, FF | 1, 4, N, S::MISSILEFLASH3),             // MISSILEFLASH2
    State::new(MISF, FF | 2, 4, P(a_light2), S::MISSILEFLASH4),   // MISSILEFLASH3
    State::new(MISF, FF | 3, 4, P(a_light2), S::LIGHTDONE),       // MISSILEFLASH4
    // Blood
    State::new(BLUD, 2, 8, N, S::BLOOD2),                         // BLOOD1
    State::new(BLUD, 1, 8, N, S::BLOOD3),                         // BLOOD2
    State::new(BLUD, 0, 8, N, S::None),                           // BLOOD3
    // Bullet puff
    State::new(PUFF, FF, 4, N, S::PUFF2),                         // PUFF1
    State::new(PUFF, 1, 4, N, S::PUFF3),                          // PUFF2
    State::new(PUFF, 2, 4, N, S::PUFF4),                          // PUFF3
    State::new(PUFF, 3, 4, N, S::None),                           // PUFF4
    // Imp fireball
    State::new(BAL1, FF, 4, N, S::TBALL2),                        // TBALL1
    State::new(BAL1, FF | 1, 4, N, S::TBALL1),                    // TBALL2
    State::new(BAL1, FF | 2, 6, N, S::TBALLX2),                   // TBALLX1
    State::new(BAL1, FF | 3, 6, N, S::TBALLX3),                   // TBALLX2
    State::new(BAL1, FF | 4, 6, N, S::None),                      // TBALLX3
    // Cacodemon fireball
    State::new(BAL2, FF, 4, N, S::RBALL2),                        // RBALL1
    State::new(BAL2, FF | 1, 4, N, S::RBALL1),                    // RBALL2
    State::new(BAL2, FF | 2, 6, N, S::RBALLX2),                   // RBALLX1
    State::new(BAL2, FF | 3, 6, N, S::RBALLX3),                   // RBALLX2
    State::new(BAL2, FF | 4, 6, N, S::None),                      // RBALLX3
    // Baron fireball
    State::new(BAL7, FF, 4, N, S::BRBALL2),                       // BRBALL1
    State::new(BAL7, FF | 1, 4, N, S::BRBALL1),                   // BRBALL2
    State::new(BAL7, FF | 2, 6, N, S::BRBALLX2),                  // BRBALLX1
    State::new(BAL7, FF | 3, 6, N, S::BRBALLX3),                  // BRBALLX2
    State::new(BAL7, FF | 4, 6, N, S::None),                      // BRBALLX3
    // Rocket in flight and explosion
    State::new(MISL, FF, 1, N, S::ROCKET),                        // ROCKET
    State::new(MISL, FF | 1, 8, A(a_explode), S::EXPLODE2),       // EXPLODE1
    State::new(MISL, FF | 2, 6, N, S::EXPLODE3),                  // EXPLODE2
    State::new(MISL, FF | 3, 4, N, S::None),                      // EXPLODE3
    // Teleport fog
    State::new(TFOG, FF, 6, N, S::TFOG01),                        // TFOG
    State::new(TFOG, FF | 1, 6, N, S::TFOG02),                    // TFOG01
    State::new(TFOG, FF, 6, N, S::TFOG2),                         // TFOG02
    State::new(TFOG, FF | 1, 6, N, S::TFOG3),                     // TFOG2
    State::new(TFOG, FF | 2, 6, N, S::TFOG4),                     // TFOG3
    State::new(TFOG, FF | 3, 6, N, S::TFOG5),                     // TFOG4
    State::new(TFOG, FF | 4, 6, N, S::TFOG6),                     // TFOG5
    State::new(TFOG, FF | 5, 6, N, S::TFOG7),                     // TFOG6
    State::new(TFOG, FF | 6, 6, N, S::TFOG8),                     // TFOG7
    State::new(TFOG, FF | 7, 6, N, S::TFOG9),                     // TFOG8
    State::new(TFOG, FF | 8, 6, N, S::TFOG10),                    // TFOG9
    State::new(TFOG, FF | 9, 6, N, S::None),                      // TFOG10
    // Item respawn fog
    State::new(IFOG, FF, 6, N, S::IFOG01),                        // IFOG
    State::new(IFOG, FF | 1, 6, N, S::IFOG02),                    // IFOG01
    State::new(IFOG, FF, 6, N, S::IFOG2),                         // IFOG02
    State::new(IFOG, FF | 1, 6, N, S::IFOG3),                     // IFOG2
    State::new(IFOG, FF | 2, 6, N, S::IFOG4),                     // IFOG3
    State::new(IFOG, FF | 3, 6, N, S::IFOG5),                     // IFOG4
    State::new(IFOG, FF | 4, 6, N, S::None),                      // IFOG5
    // Player body
    State::new(PLAY, 0, -1, N, S::None),                          // PLAY
    State::new(PLAY, 0, 4, N, S::PLAY_RUN2),                      // PLAY_RUN1
    State::new(PLAY, 1, 4, N, S::PLAY_RUN3),                      // PLAY_RUN2
    State::new(PLAY, 2, 4, N, S::PLAY_RUN4),                      // PLAY_RUN3
    State::new(PLAY, 3, 4, N, S::PLAY_RUN1),                      // PLAY_RUN4
    State::new(PLAY, 4, 12, N, S::PLAY),                          // PLAY_ATK1
    State::new(PLAY, FF | 5, 6, N, S::PLAY_ATK1),                 // PLAY_ATK2
    State::new(PLAY, 6, 4, N, S::PLAY_PAIN2),                     // PLAY_PAIN
    State::new(PLAY, 6, 4, A(a_pain), S::PLAY),                   // PLAY_PAIN2
    State::new(PLAY, 7, 10, N, S::PLAY_DIE2),                     // PLAY_DIE1
    State::new(PLAY, 8, 10, A(a_playerscream), S::PLAY_DIE3),     // PLAY_DIE2
    State::new(PLAY, 9, 10, A(a_fall), S::PLAY_DIE4),             // PLAY_DIE3
    State::new(PLAY, 10, 10, N, S::PLAY_DIE5),                    // PLAY_DIE4
    State::new(PLAY, 11, 10, N, S::PLAY_DIE6),                    // PLAY_DIE5
    State::new(PLAY, 12, 10, N, S::PLAY_DIE7),                    // PLAY_DIE6
    State::new(PLAY, 13, -1, N, S::None),                         // PLAY_DIE7
    State::new(PLAY, 14, 5, N, S::PLAY_XDIE2),                    // PLAY_XDIE1
    State::new(PLAY, 15, 5, A(a_xscream), S::PLAY_XDIE3),         // PLAY_XDIE2
    State::new(PLAY, 16, 5, A(a_fall), S::PLAY_XDIE4),            // PLAY_XDIE3
    State::new(PLAY, 17, 5, N, S::PLAY_XDIE5),                    // PLAY_XDIE4
    State::new(PLAY, 18, 5, N, S::PLAY_XDIE6),                    // PLAY_XDIE5
    State::new(PLAY, 19, 5, N, S::PLAY_XDIE7),                    // PLAY_XDIE6
    State::new(PLAY, 20, 5, N, S::PLAY_XDIE8),                    // PLAY_XDIE7
    State::new(PLAY, 21, 5, N, S::PLAY_XDIE9),                    // PLAY_XDIE8
    State::new(PLAY, 22, -1, N, S::None),                         // PLAY_XDIE9
    // Zombieman
    State::new(POSS, 0, 10, A(a_look), S::POSS_STND2),            // POSS_STND
    State::new(POSS, 1, 10, A(a_look), S::POSS_STND),             // POSS_STND2
    State::new(POSS, 0, 4, A(a_chase), S::POSS_RUN2),             // POSS_RUN1
    State::new(POSS, 0, 4, A(a_chase), S::POSS_RUN3),             // POSS_RUN2
    State::new(POSS, 1, 4, A(a_chase), S::POSS_RUN4),             // POSS_RUN3
    State::new(POSS, 1, 4, A(a_chase), S::POSS_RUN5),             // POSS_RUN4
    State::new(POSS, 2, 4, A(a_chase), S::POSS_RUN6),             // POSS_RUN5
    State::new(POSS, 2, 4, A(a_chase), S::POSS_RUN7),             // POSS_RUN6
    State::new(POSS, 3, 4, A(a_chase), S::POSS_RUN8),             // POSS_RUN7
    State::new(POSS, 3, 4, A(a_chase), S::POSS_RUN1),             // POSS_RUN8
    State::new(POSS, 4, 10, A(a_facetarget), S::POSS_ATK2),       // POSS_ATK1
    State::new(POSS, 5, 8, A(a_posattack), S::POSS_ATK3),         // POSS_ATK2
    State::new(POSS, 4, 8, N, S::POSS_RUN1),                      // POSS_ATK3
    State::new(POSS, 6, 3, N, S::POSS_PAIN2),                     // POSS_PAIN
    State::new(POSS, 6, 3, A(a_pain), S::POSS_RUN1),              // POSS_PAIN2
    State::new(POSS, 7, 5, N, S::POSS_DIE2),                      // POSS_DIE1
    State::new(POSS, 8, 5, A(a_scream), S::POSS_DIE3),            // POSS_DIE2
    State::new(POSS, 9, 5, A(a_fall), S::POSS_DIE4),              // POSS_DIE3
    State::new(POSS, 10, 5, N, S::POSS_DIE5),                     // POSS_DIE4
    State::new(POSS, 11, -1, N, S::None),                         // POSS_DIE5
    State::new(POSS, 12, 5, N, S::POSS_XDIE2),                    // POSS_XDIE1
    State::new(POSS, 13, 5, A(a_xscream), S::POSS_XDIE3),         // POSS_XDIE2
    State::new(POSS, 14, 5, A(a_fall), S::POSS_XDIE4),            // POSS_XDIE3
    State::new(POSS, 15, 5, N, S::POSS_XDIE5),                    // POSS_XDIE4
    State::new(POSS, 16, 5, N, S::POSS_XDIE6),                    // POSS_XDIE5
    State::new(POSS, 17, 5, N, S::POSS_XDIE7),                    // POSS_XDIE6
    State::new(POSS, 18, 5, N, S::POSS_XDIE8),                    // POSS_XDIE7
    State::new(POSS, 19, 5, N, S::POSS_XDIE9),                    // POSS_XDIE8
    State::new(POSS, 20, -1, N, S::None),                         // POSS_XDIE9
    State::new(POSS, 10, 5, N, S::POSS_RAISE2),                   // POSS_RAISE1
    State::new(POSS, 9, 5, N, S::POSS_RAISE3),                    // POSS_RAISE2
    State::new(POSS, 8, 5, N, S::POSS_RAISE4),                    // POSS_RAISE3
    State::new(POSS, 7, 5, N, S::POSS_RUN1),                      // POSS_RAISE4
    // Shotgun guy
    State::new(SPOS, 0, 10, A(a_look), S::SPOS_STND2),            // SPOS_STND
    State::new(SPOS, 1, 10, A(a_look), S::SPOS_STND),             // SPOS_STND2
    State::new(SPOS, 0, 3, A(a_chase), S::SPOS_RUN2),             // SPOS_RUN1
    State::new(SPOS, 0, 3, A(a_chase), S::SPOS_RUN3),             // SPOS_RUN2
    State::new(SPOS, 1, 3, A(a_chase), S::SPOS_RUN4),             // SPOS_RUN3
    State::new(SPOS, 1, 3, A(a_chase), S::SPOS_RUN5),             // SPOS_RUN4
    State::new(SPOS, 2, 3, A(a_chase), S::SPOS_RUN6),             // SPOS_RUN5
    State::new(SPOS, 2, 3, A(a_chase), S::SPOS_RUN7),             // SPOS_RUN6
    State::new(SPOS, 3, 3, A(a_chase), S::SPOS_RUN8),             // SPOS_RUN7
    State::new(SPOS, 3, 3, A(a_chase), S::SPOS_RUN1),             // SPOS_RUN8
    State::new(SPOS, 4, 10, A(a_facetarget), S::SPOS_ATK2),       // SPOS_ATK1
    State::new(SPOS, FF | 5, 10, A(a_sposattack), S::SPOS_ATK3),  // SPOS_ATK2
    State::new(SPOS, 4, 10, N, S::SPOS_RUN1),                     // SPOS_ATK3
    State::new(SPOS, 6, 3, N, S::SPOS_PAIN2),                     // SPOS_PAIN
    State::new(SPOS, 6, 3, A(a_pain), S::SPOS_RUN1),              // SPOS_PAIN2
    State::new(SPOS, 7, 5, N, S::SPOS_DIE2),                      // SPOS_DIE1
    State::new(SPOS, 8, 5, A(a_scream), S::SPOS_DIE3),            // SPOS_DIE2
    State::new(SPOS, 9, 5, A(a_fall), S::SPOS_DIE4),              // SPOS_DIE3
    State::new(SPOS, 10, 5, N, S::SPOS_DIE5),                     // SPOS_DIE4
    State::new(SPOS, 11, -1, N, S::None),                         // SPOS_DIE5
    State::new(SPOS, 12, 5, N, S::SPOS_XDIE2),                    // SPOS_XDIE1
    State::new(SPOS, 13, 5, A(a_xscream), S::SPOS_XDIE3),         // SPOS_XDIE2
    State::new(SPOS, 14, 5, A(a_fall), S::SPOS_XDIE4),            // SPOS_XDIE3
    State::new(SPOS, 15, 5, N, S::SPOS_XDIE5),                    // SPOS_XDIE4
    State::new(SPOS, 16, 5, N, S::SPOS_XDIE6),                    // SPOS_XDIE5
    State::new(SPOS, 17, 5, N, S::SPOS_XDIE7),                    // SPOS_XDIE6
    State::new(SPOS, 18, 5, N, S::SPOS_XDIE8),                    // SPOS_XDIE7
    State::new(SPOS, 19, 5, N, S::SPOS_XDIE9),                    // SPOS_XDIE8
    State::new(SPOS, 20, -1, N, S::None),                         // SPOS_XDIE9
    State::new(SPOS, 11, 5, N, S::SPOS_RAISE2),                   // SPOS_RAISE1
    State::new(SPOS, 10, 5, N, S::SPOS_RAISE3),                   // SPOS_RAISE2
    State::new(SPOS, 9, 5, N, S::SPOS_RAISE4),                    // SPOS_RAISE3
    State::new(SPOS, 8, 5, N, S::SPOS_RAISE5),                    // SPOS_RAISE4
    State::new(SPOS, 7, 5, N, S::SPOS_RUN1),                      // SPOS_RAISE5
    // Arch-vile
    State::new(VILE, 0, 10, A(a_look), S::VILE_STND2),            // VILE_STND
    State::new(VILE, 1, 10, A(a_look), S::VILE_STND),             // VILE_STND2
    State::new(VILE, 0, 2, A(a_vilechase), S::VILE_RUN2),         // VILE_RUN1
    State::new(VILE, 0, 2, A(a_vilechase), S::VILE_RUN3),         // VILE_RUN2
    State::new(VILE, 1, 2, A(a_vilechase), S::VILE_RUN4),         // VILE_RUN3
    State::new(VILE, 1, 2, A(a_vilechase), S::VILE_RUN5),         // VILE_RUN4
    State::new(VILE, 2, 2, A(a_vilechase), S::VILE_RUN6),         // VILE_RUN5
    State::new(VILE, 2, 2, A(a_vilechase), S::VILE_RUN7),         // VILE_RUN6
    State::new(VILE, 3, 2, A(a_vilechase), S::VILE_RUN8),         // VILE_RUN7
    State::new(VILE, 3, 2, A(a_vilechase), S::VILE_RUN9),         // VILE_RUN8
    State::new(VILE, 4, 2, A(a_vilechase), S::VILE_RUN10),        // VILE_RUN9
    State::new(VILE, 4, 2, A(a_vilechase), S::VILE_RUN11),        // VILE_RUN10
    State::new(VILE, 5, 2, A(a_vilechase), S::VILE_RUN12),        // VILE_RUN11
    State::new(VILE, 5, 2, A(a_vilechase), S::VILE_RUN1),         // VILE_RUN12
    State::new(VILE, FF | 6, 0, A(a_vilestart), S::VILE_ATK2),    // VILE_ATK1
    State::new(VILE, FF | 6, 10, A(a_facetarget), S::VILE_ATK3),  // VILE_ATK2
    State::new(VILE, FF | 7, 8, A(a_viletarget), S::VILE_ATK4),   // VILE_ATK3
    State::new(VILE, FF | 8, 8, A(a_facetarget), S::VILE_ATK5),   // VILE_ATK4
    State::new(VILE, FF | 9, 8, A(a_facetarget), S::VILE_ATK6),   // VILE_ATK5
    State::new(VILE, FF | 10, 8, A(a_facetarget), S::VILE_ATK7),  // VILE_ATK6
    State::new(VILE, FF | 11, 8, A(a_facetarget), S::VILE_ATK8),  // VILE_ATK7
    State::new(VILE, FF | 12, 8, A(a_facetarget), S::VILE_ATK9),  // VILE_ATK8
    State::new(VILE, FF | 13, 8, A(a_facetarget), S::VILE_ATK10), // VILE_ATK9
    State::new(VILE, FF | 14, 8, A(a_vileattack), S::VILE_ATK11), // VILE_ATK10
    State::new(VILE, FF | 15, 20, N, S::VILE_RUN1),               // VILE_ATK11
    State::new(VILE, FF | 26, 10, N, S::VILE_HEAL2),              // VILE_HEAL1
    State::new(VILE, FF | 27, 10, N, S::VILE_HEAL3),              // VILE_HEAL2
    State::new(VILE, FF | 28, 10, N, S::VILE_RUN1),               // VILE_HEAL3
    State::new(VILE, 16, 5, N, S::VILE_PAIN2),                    // VILE_PAIN
    State::new(VILE, 16, 5, A(a_pain), S::VILE_RUN1),             // VILE_PAIN2
    State::new(VILE, 16, 7, N, S::VILE_DIE2),                     // VILE_DIE1
    State::new(VILE, 17, 7, A(a_scream), S::VILE_DIE3),           // VILE_DIE2
    State::new(VILE, 18, 7, A(a_fall), S::VILE_DIE4),             // VILE_DIE3
    State::new(VILE, 19, 7, N, S::VILE_DIE5),                     // VILE_DIE4
    State::new(VILE, 20, 7, N, S::VILE_DIE6),                     // VILE_DIE5
    State::new(VILE, 21, 7, N, S::VILE_DIE7),                     // VILE_DIE6
    State::new(VILE, 22, 7, N, S::VILE_DIE8),                     // VILE_DIE7
    State::new(VILE, 23, 5, N, S::VILE_DIE9),                     // VILE_DIE8
    State::new(VILE, 24, 5, N, S::VILE_DIE10),                    // VILE_DIE9
    State::new(VILE, 25, -1, N, S::None),                         // VILE_DIE10
    // Arch-vile fire
    State::new(FIRE, FF, 2, A(a_startfire), S::FIRE2),            // FIRE1
    State::new(FIRE, FF | 1, 2, A(a_fire), S::FIRE3),             // FIRE2
    State::new(FIRE, FF, 2, A(a_fire), S::FIRE4),                 // FIRE3
    State::new(FIRE, FF | 1, 2, A(a_fire), S::FIRE5),             // FIRE4
    State::new(FIRE, FF | 2, 2, A(a_firecrackle), S::FIRE6),      // FIRE5
    State::new(FIRE, FF | 3, 2, A(a_fire), S::FIRE7),             // FIRE6
    State::new(FIRE, FF | 4, 2, A(a_fire), S::FIRE8),             // FIRE7
    State::new(FIRE, FF | 5, 2, A(a_fire), S::None),              // FIRE8
    // Imp
    State::new(TROO, 0, 10, A(a_look), S::TROO_STND2),            // TROO_STND
    State::new(TROO, 1, 10, A(a_look), S::TROO_STND),             // TROO_STND2
    State::new(TROO, 0, 3, A(a_chase), S::TROO_RUN2),             // TROO_RUN1
    State::new(TROO, 0, 3, A(a_chase), S::TROO_RUN3),             // TROO_RUN2
    State::new(TROO, 1, 3, A(a_chase), S::TROO_RUN4),             // TROO_RUN3
    State::new(TROO, 1, 3, A(a_chase), S::TROO_RUN5),             // TROO_RUN4
    State::new(TROO, 2, 3, A(a_chase), S::TROO_RUN6),             // TROO_RUN5
    State::new(TROO, 2, 3, A(a_chase), S::TROO_RUN7),             // TROO_RUN6
    State::new(TROO, 3, 3, A(a_chase), S::TROO_RUN8),             // TROO_RUN7
    State::new(TROO, 3, 3, A(a_chase), S::TROO_RUN1),             // TROO_RUN8
    State::new(TROO, 4, 8, A(a_facetarget), S::TROO_ATK2),        // TROO_ATK1
    State::new(TROO, 5, 8, A(a_facetarget), S::TROO_ATK3),        // TROO_ATK2
    State::new(TROO, 6, 6, A(a_troopattack), S::TROO_RUN1),       // TROO_ATK3
    State::new(TROO, 7, 2, N, S::TROO_PAIN2),                     // TROO_PAIN
    State::new(TROO, 7, 2, A(a_pain), S::TROO_RUN1),              // TROO_PAIN2
    State::new(TROO, 8, 8, N, S::TROO_DIE2),                      // TROO_DIE1
    State::new(TROO, 9, 8, A(a_scream), S::TROO_DIE3),            // TROO_DIE2
    State::new(TROO, 10, 6, N, S::TROO_DIE4),                     // TROO_DIE3
    State::new(TROO, 11, 6, A(a_fall), S::TROO_DIE5),             // TROO_DIE4
    State::new(TROO, 12, -1, N, S::None),                         // TROO_DIE5
    State::new(TROO, 13, 5, N, S::TROO_XDIE2),                    // TROO_XDIE1
    State::new(TROO, 14, 5, A(a_xscream), S::TROO_XDIE3),         // TROO_XDIE2
    State::new(TROO, 15, 5, N, S::TROO_XDIE4),                    // TROO_XDIE3
    State::new(TROO, 16, 5, A(a_fall), S::TROO_XDIE5),            // TROO_XDIE4
    State::new(TROO, 17, 5, N, S::TROO_XDIE6),                    // TROO_XDIE5
    State::new(TROO, 18, 5, N, S::TROO_XDIE7),                    // TROO_XDIE6
    State::new(TROO, 19, 5, N, S::TROO_XDIE8),                    // TROO_XDIE7
    State::new(TROO, 20, -1, N, S::None),                         // TROO_XDIE8
    State::new(TROO, 12, 8, N, S::TROO_RAISE2),                   // TROO_RAISE1
    State::new(TROO, 11, 8, N, S::TROO_RAISE3),                   // TROO_RAISE2
    State::new(TROO, 10, 6, N, S::TROO_RAISE4),                   // TROO_RAISE3
    State::new(TROO, 9, 6, N, S::TROO_RAISE5),                    // TROO_RAISE4
    State::new(TROO, 8, 6, N, S::TROO_RUN1),                      // TROO_RAISE5
    // Demon
    State::new(SARG, 0, 10, A(a_look), S::SARG_STND2),            // SARG_STND
    State::new(SARG, 1, 10, A(a_look), S::SARG_STND),             // SARG_STND2
    State::new(SARG, 0, 2, A(a_chase), S::SARG_RUN2),             // SARG_RUN1
    State::new(SARG, 0, 2, A(a_chase), S::SARG_RUN3),             // SARG_RUN2
    State::new(SARG, 1, 2, A(a_chase), S::SARG_RUN4),             // SARG_RUN3
    State::new(SARG, 1, 2, A(a_chase), S::SARG_RUN5),             // SARG_RUN4
    State::new(SARG, 2, 2, A(a_chase), S::SARG_RUN6),             // SARG_RUN5
    State::new(SARG, 2, 2, A(a_chase), S::SARG_RUN7),             // SARG_RUN6
    State::new(SARG, 3, 2, A(a_chase), S::SARG_RUN8),             // SARG_RUN7
    State::new(SARG, 3, 2, A(a_chase), S::SARG_RUN1),             // SARG_RUN8
    State::new(SARG, 4, 8, A(a_facetarget), S::SARG_ATK2),        // SARG_ATK1
    State::new(SARG, 5, 8, A(a_facetarget), S::SARG_ATK3),        // SARG_ATK2
    State::new(SARG, 6, 8, A(a_sargattack), S::SARG_RUN1),        // SARG_ATK3
    State::new(SARG, 7, 2, N, S::SARG_PAIN2),                     // SARG_PAIN
    State::new(SARG, 7, 2, A(a_pain), S::SARG_RUN1),              // SARG_PAIN2
    State::new(SARG, 8, 8, N, S::SARG_DIE2),                      // SARG_DIE1
    State::new(SARG, 9, 8, A(a_scream), S::SARG_DIE3),            // SARG_DIE2
    State::new(SARG, 10, 4, N, S::SARG_DIE4),                     // SARG_DIE3
    State::new(SARG, 11, 4, A(a_fall), S::SARG_DIE5),             // SARG_DIE4
    State::new(SARG, 12, 4, N, S::SARG_DIE6),                     // SARG_DIE5
    State::new(SARG, 13, -1, N, S::None),                         // SARG_DIE6
    State::new(SARG, 13, 5, N, S::SARG_RAISE2),                   // SARG_RAISE1
    State::new(SARG, 12, 5, N, S::SARG_RAISE3),                   // SARG_RAISE2
    State::new(SARG, 11, 5, N, S::SARG_RAISE4),                   // SARG_RAISE3
    State::new(SARG, 10, 5, N, S::SARG_RAISE5),                   // SARG_RAISE4
    State::new(SARG, 9, 5, N, S::SARG_RAISE6),                    // SARG_RAISE5
    State::new(SARG, 8, 5, N, S::SARG_RUN1),                      // SARG_RAISE6
    // Cacodemon
    State::new(HEAD, 0, 10, A(a_look), S::HEAD_STND),             // HEAD_STND
    State::new(HEAD, 0, 3, A(a_chase), S::HEAD_RUN1),             // HEAD_RUN1
    State::new(HEAD, 1, 5, A(a_facetarget), S::HEAD_ATK2),        // HEAD_ATK1
    State::new(HEAD, 2, 5, A(a_facetarget), S::HEAD_ATK3),        // HEAD_ATK2
    State::new(HEAD, FF | 3, 5, A(a_headattack), S::HEAD_RUN1),   // HEAD_ATK3
    State::new(HEAD, 4, 3, N, S::HEAD_PAIN2),                     // HEAD_PAIN
    State::new(HEAD, 4, 3, A(a_pain), S::HEAD_PAIN3),             // HEAD_PAIN2
    State::new(HEAD, 5, 6, N, S::HEAD_RUN1),                      // HEAD_PAIN3
    State::new(HEAD, 6, 8, N, S::HEAD_DIE2),                      // HEAD_DIE1
    State::new(HEAD, 7, 8, A(a_scream), S::HEAD_DIE3),            // HEAD_DIE2
    State::new(HEAD, 8, 8, N, S::HEAD_DIE4),                      // HEAD_DIE3
    State::new(HEAD, 9, 8, N, S::HEAD_DIE5),                      // HEAD_DIE4
    State::new(HEAD, 10, 8, A(a_fall), S::HEAD_DIE6),             // HEAD_DIE5
    State::new(HEAD, 11, -1, N, S::None),                         // HEAD_DIE6
    State::new(HEAD, 11, 8, N, S::HEAD_RAISE2),                   // HEAD_RAISE1
    State::new(HEAD, 10, 8, N, S::HEAD_RAISE3),                   // HEAD_RAISE2
    State::new(HEAD, 9, 8, N, S::HEAD_RAISE4),                    // HEAD_RAISE3
    State::new(HEAD, 8, 8, N, S::HEAD_RAISE5),                    // HEAD_RAISE4
    State::new(HEAD, 7, 8, N, S::HEAD_RAISE6),                    // HEAD_RAISE5
    State::new(HEAD, 6, 8, N, S::HEAD_RUN1),                      // HEAD_RAISE6
    // Baron of hell
    State::new(BOSS, 0, 10, A(a_look), S::BOSS_STND2),            // BOSS_STND
    State::new(BOSS, 1, 10, A(a_look), S::BOSS_STND),             // BOSS_STND2
    State::new(BOSS, 0, 3, A(a_chase), S::BOSS_RUN2),             // BOSS_RUN1
    State::new(BOSS, 0, 3, A(a_chase), S::BOSS_RUN3),             // BOSS_RUN2
    State::new(BOSS, 1, 3, A(a_chase), S::BOSS_RUN4),             // BOSS_RUN3
    State::new(BOSS, 1, 3, A(a_chase), S::BOSS_RUN5),             // BOSS_RUN4
    State::new(BOSS, 2, 3, A(a_chase), S::BOSS_RUN6),             // BOSS_RUN5
    State::new(BOSS, 2, 3, A(a_chase), S::BOSS_RUN7),             // BOSS_RUN6
    State::new(BOSS, 3, 3, A(a_chase), S::BOSS_RUN8),             // BOSS_RUN7
    State::new(BOSS, 3, 3, A(a_chase), S::BOSS_RUN1),             // BOSS_RUN8
    State::new(BOSS, 4, 8, A(a_facetarget), S::BOSS_ATK2),        // BOSS_ATK1
    State::new(BOSS, 5, 8, A(a_facetarget), S::BOSS_ATK3),        // BOSS_ATK2
    State::new(BOSS, 6, 8, A(a_bruisattack), S::BOSS_RUN1),       // BOSS_ATK3
    State::new(BOSS, 7, 2, N, S::BOSS_PAIN2),                     // BOSS_PAIN
    State::new(BOSS, 7, 2, A(a_pain), S::BOSS_RUN1),              // BOSS_PAIN2
    State::new(BOSS, 8, 8, N, S::BOSS_DIE2),                      // BOSS_DIE1
    State::new(BOSS, 9, 8, A(a_scream), S::BOSS_DIE3),            // BOSS_DIE2
    State::new(BOSS, 10, 8, N, S::BOSS_DIE4),                     // BOSS_DIE3
    State::new(BOSS, 11, 8, A(a_fall), S::BOSS_DIE5),             // BOSS_DIE4
    State::new(BOSS, 12, 8, N, S::BOSS_DIE6),                     // BOSS_DIE5
    State::new(BOSS, 13, 8, A(a_bossdeath), S::BOSS_DIE7),        // BOSS_DIE6
    State::new(BOSS, 14, -1, N, S::None),                         // BOSS_DIE7
    State::new(BOSS, 14, 8, N, S::BOSS_RAISE2),                   // BOSS_RAISE1
    State::new(BOSS, 13, 8, N, S::BOSS_RAISE3),                   // BOSS_RAISE2
    State::new(BOSS, 12, 8, N, S::BOSS_RAISE4),                   // BOSS_RAISE3
    State::new(BOSS, 11, 8, N, S::BOSS_RAISE5),                   // BOSS_RAISE4
    State::new(BOSS, 10, 8, N, S::BOSS_RAISE6),                   // BOSS_RAISE5
    State::new(BOSS, 9, 8, N, S::BOSS_RAISE7),                    // BOSS_RAISE6
    State::new(BOSS, 8, 8, N, S::BOSS_RUN1),                      // BOSS_RAISE7
    // Lost soul
    State::new(SKUL, FF, 10, A(a_look), S::SKULL_STND2),          // SKULL_STND
    State::new(SKUL, FF | 1, 10, A(a_look), S::SKULL_STND),       // SKULL_STND2
    State::new(SKUL, FF, 6, A(a_chase), S::SKULL_RUN2),           // SKULL_RUN1
    State::new(SKUL, FF | 1, 6, A(a_chase), S::SKULL_RUN1),       // SKULL_RUN2
    State::new(SKUL, FF | 2, 10, A(a_facetarget), S::SKULL_ATK2), // SKULL_ATK1
    State::new(SKUL, FF | 3, 4, A(a_skullattack), S::SKULL_ATK3), // SKULL_ATK2
    State::new(SKUL, FF | 2, 4, N, S::SKULL_ATK4),                // SKULL_ATK3
    State::new(SKUL, FF | 3, 4, N, S::SKULL_ATK3),                // SKULL_ATK4
    State::new(SKUL, FF | 4, 3, N, S::SKULL_PAIN2),               // SKULL_PAIN
    State::new(SKUL, FF | 4, 3, A(a_pain), S::SKULL_RUN1),        // SKULL_PAIN2
    State::new(SKUL, FF | 5, 6, N, S::SKULL_DIE2),                // SKULL_DIE1
    State::new(SKUL, FF | 6, 6, A(a_scream), S::SKULL_DIE3),      // SKULL_DIE2
    State::new(SKUL, FF | 7, 6, N, S::SKULL_DIE4),                // SKULL_DIE3
    State::new(SKUL, FF | 8, 6, A(a_fall), S::SKULL_DIE5),        // SKULL_DIE4
    State::new(SKUL, 9, 6, N, S::SKULL_DIE6),                     // SKULL_DIE5
    State::new(SKUL, 10, 6, N, S::None),                          // SKULL_DIE6
    // Pain elemental
    State::new(PAIN, 0, 10, A(a_look), S::PAIN_STND),             // PAIN_STND
    State::new(PAIN, 0, 3, A(a_chase), S::PAIN_RUN2),             // PAIN_RUN1
    State::new(PAIN, 0, 3, A(a_chase), S::PAIN_RUN3),             // PAIN_RUN2
    State::new(PAIN, 1, 3, A(a_chase), S::PAIN_RUN4),             // PAIN_RUN3
    State::new(PAIN, 1, 3, A(a_chase), S::PAIN_RUN5),             // PAIN_RUN4
    State::new(PAIN, 2, 3, A(a_chase), S::PAIN_RUN6),             // PAIN_RUN5
    State::new(PAIN, 2, 3, A(a_chase), S::PAIN_RUN1),             // PAIN_RUN6
    State::new(PAIN, 3, 5, A(a_facetarget), S::PAIN_ATK2),        // PAIN_ATK1
    State::new(PAIN, 4, 5, A(a_facetarget), S::PAIN_ATK3),        // PAIN_ATK2
    State::new(PAIN, FF | 5, 5, A(a_facetarget), S::PAIN_ATK4),   // PAIN_ATK3
    State::new(PAIN, FF | 5, 0, A(a_painattack), S::PAIN_RUN1),   // PAIN_ATK4
    State::new(PAIN, 6, 6, N, S::PAIN_PAIN2),                     // PAIN_PAIN
    State::new(PAIN, 6, 6, A(a_pain), S::PAIN_RUN1),              // PAIN_PAIN2
    State::new(PAIN, FF | 7, 8, N, S::PAIN_DIE2),                 // PAIN_DIE1
    State::new(PAIN, FF | 8, 8, A(a_scream), S::PAIN_DIE3),       // PAIN_DIE2
    State::new(PAIN, FF | 9, 8, N, S::PAIN_DIE4),                 // PAIN_DIE3
    State::new(PAIN, FF | 10, 8, N, S::PAIN_DIE5),                // PAIN_DIE4
    State::new(PAIN, FF | 11, 8, A(a_paindie), S::PAIN_DIE6),     // PAIN_DIE5
    State::new(PAIN, FF | 12, 8, N, S::None),                     // PAIN_DIE6
    State::new(PAIN, 12, 8, N, S::PAIN_RAISE2),                   // PAIN_RAISE1
    State::new(PAIN, 11, 8, N, S::PAIN_RAISE3),                   // PAIN_RAISE2
    State::new(PAIN, 10, 8, N, S::PAIN_RAISE4),                   // PAIN_RAISE3
    State::new(PAIN, 9, 8, N, S::PAIN_RAISE5),                    // PAIN_RAISE4
    State::new(PAIN, 8, 8, N, S::PAIN_RAISE6),                    // PAIN_RAISE5
    State::new(PAIN, 7, 8, N, S::PAIN_RUN1),                      // PAIN_RAISE6
    // Boss brain
    State::new(BBRN, 0, -1, N, S::None),                          // BRAIN
    State::new(BBRN, FF | 1, 36, A(a_brainpain), S::BRAIN),       // BRAIN_PAIN
    State::new(BBRN, 0, 100, A(a_brainscream), S::BRAIN_DIE2),    // BRAIN_DIE1
    State::new(BBRN, 0, 10, N, S::BRAIN_DIE3),                    // BRAIN_DIE2
    State::new(BBRN, 0, 10, N, S::BRAIN_DIE4),                    // BRAIN_DIE3
    State::new(BBRN, 0, -1, A(a_braindie), S::None),              // BRAIN_DIE4
    State::new(TROO, 0, 10, A(a_look), S::BRAINEYE),              // BRAINEYE
    State::new(TROO, 0, 181, A(a_brainawake), S::BRAINEYE1),      // BRAINEYESEE
    State::new(TROO, 0, 150, A(a_brainspit), S::BRAINEYE1),       // BRAINEYE1
    State::new(BOSF, FF, 3, A(a_spawnsound), S::SPAWN2),          // SPAWN1
    State::new(BOSF, FF | 1, 3, A(a_spawnfly), S::SPAWN3),        // SPAWN2
    State::new(BOSF, FF | 2, 3, A(a_spawnfly), S::SPAWN4),        // SPAWN3
    State::new(BOSF, FF | 3, 3, A(a_spawnfly), S::SPAWN1),        // SPAWN4
    State::new(FIRE, FF, 4, A(a_fire), S::SPAWNFIRE2),            // SPAWNFIRE1
    State::new(FIRE, FF | 1, 4, A(a_fire), S::SPAWNFIRE3),        // SPAWNFIRE2
    State::new(FIRE, FF | 2, 4, A(a_fire), S::SPAWNFIRE4),        // SPAWNFIRE3
    State::new(FIRE, FF | 3, 4, A(a_fire), S::SPAWNFIRE5),        // SPAWNFIRE4
    State::new(FIRE, FF | 4, 4, A(a_fire), S::SPAWNFIRE6),        // SPAWNFIRE5
    State::new(FIRE, FF | 5, 4, A(a_fire), S::SPAWNFIRE7),        // SPAWNFIRE6
    State::new(FIRE, FF | 6, 4, A(a_fire), S::SPAWNFIRE8),        // SPAWNFIRE7
    State::new(FIRE, FF | 7, 4, A(a_fire), S::None),              // SPAWNFIRE8
    // Barrel
    State::new(BAR1, 0, 6, N, S::BAR2),                           // BAR1
    State::new(BAR1, 1, 6, N, S::BAR1),                           // BAR2
    State::new(BEXP, FF, 5, N, S::BEXP2),                         // BEXP
    State::new(BEXP, FF | 1, 5, A(a_scream), S::BEXP3),           // BEXP2
    State::new(BEXP, FF | 2, 5, N, S::BEXP4),                     // BEXP3
    State::new(BEXP, FF | 3, 10, A(a_explode), S::BEXP5),         // BEXP4
    State::new(BEXP, FF | 4, 10, N, S::None),                     // BEXP5
    // Pickups
    State::new(ARM1, 0, 6, N, S::ARM1A),                          // ARM1
    State::new(ARM1, FF | 1, 7, N, S::ARM1),                      // ARM1A
    State::new(BKEY, 0, 10, N, S::BKEY2),                         // BKEY
    State::new(BKEY, FF | 1, 10, N, S::BKEY),                     // BKEY2
    State::new(YKEY, 0, 10, N, S::YKEY2),                         // YKEY
    State::new(YKEY, FF | 1, 10, N, S::YKEY),                     // YKEY2
    State::new(RKEY, 0, 10, N, S::RKEY2),                         // RKEY
    State::new(RKEY, FF | 1, 10, N, S::RKEY),                     // RKEY2
    State::new(STIM, 0, -1, N, S::None),                          // STIM
    State::new(MEDI, 0, -1, N, S::None),                          // MEDI
    State::new(CLIP, 0, -1, N, S::None),                          // CLIP
    State::new(SHEL, 0, -1, N, S::None),                          // SHEL
    State::new(ROCK, 0, -1, N, S::None),                          // ROCK
    State::new(SHOT, 0, -1, N, S::None),                          // SHOT
    State::new(MGUN, 0, -1, N, S::None),                          // MGUN
    State::new(LAUN, 0, -1, N, S::None),                          // LAUN
    // Crushed corpse
    State::new(POL5, 0, -1, N, S::None),                          // GIBS
];
