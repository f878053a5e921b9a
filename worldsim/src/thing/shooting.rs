//! Aiming and hitscan attacks, splash damage, and the range checks monster
//! AI runs before committing to an attack state.

use math::{ANG90, ANG270, Angle, FRACBITS, Fixed, Vec2, point_to_angle_2};

use crate::defs::{MAXPLAYERS, MAXRADIUS, MELEERANGE, MISSILERANGE};
use crate::env::specials::shoot_special_line;
use crate::info::{MapObjKind, StateNum};
use crate::level::Level;
use crate::level::map_defs::LineDefFlags;
use crate::pathtrace::{Intercept, PT_ADD_LINES, PT_ADD_THINGS, PortalZ, path_traverse};
use crate::sight::{check_sight, check_sight_to};
use crate::thing::{MapObjFlag, MapObject, with_mobj};
use crate::thinker::ThinkerId;

/// Widest the vertical aim cone opens, 100/160 as a slope
const AIM_SLOPE_RANGE: Fixed = Fixed::from_bits(100 * (1 << FRACBITS) / 160);

/// The result of a successful vertical aim scan
#[derive(Debug, Clone, Copy)]
pub(crate) struct Aim {
    pub aimslope: Fixed,
    /// The thing the aim settled on
    pub thing: ThinkerId,
}

/// Scan along a sight line, narrowing the vertical cone at every two-sided
/// line, until a shootable thing falls inside the cone.
///
/// Doom function name is `P_AimLineAttack`
pub(crate) fn aim_line_attack(
    shooter: &mut MapObject,
    angle: Angle,
    distance: Fixed,
    level: &mut Level,
) -> Option<Aim> {
    let origin = shooter.xy;
    let endpoint = origin + angle.unit() * distance;
    let mut traverse = AimTraverse {
        top_slope: AIM_SLOPE_RANGE,
        bottom_slope: -AIM_SLOPE_RANGE,
        attack_range: distance,
        shootz: shooter.z + (shooter.height >> 1) + Fixed::from_int(8),
        shooter: shooter.thinker,
        result: None,
    };

    path_traverse(
        origin,
        endpoint,
        PT_ADD_LINES | PT_ADD_THINGS,
        level,
        |level, intercept| traverse.check_aim(intercept, level),
    );
    traverse.result
}

/// Fire a hitscan along the aimed slope: damage the first thing hit, or
/// spatter the wall that stopped the trace.
///
/// Doom function name is `P_LineAttack`
pub(crate) fn line_attack(
    shooter: &mut MapObject,
    damage: i32,
    distance: Fixed,
    angle: Angle,
    aim: Option<Aim>,
    level: &mut Level,
) {
    let origin = shooter.xy;
    let endpoint = origin + angle.unit() * distance;
    let mut traverse = ShootTraverse {
        aimslope: aim.map(|a| a.aimslope).unwrap_or(Fixed::ZERO),
        attack_range: distance,
        damage,
        shootz: shooter.z + (shooter.height >> 1) + Fixed::from_int(8),
        trace_xy: origin,
        trace_dxy: endpoint - origin,
        shooter: shooter.thinker,
    };

    path_traverse(
        origin,
        endpoint,
        PT_ADD_LINES | PT_ADD_THINGS,
        level,
        |level, intercept| traverse.resolve(shooter, intercept, level),
    );
}

/// Aim ahead, re-aiming a step left then right when nothing is on the
/// crosshair. Shared by the pistol, shotgun and chaingun.
pub(crate) fn bullet_slope(shooter: &mut MapObject, level: &mut Level) -> Option<Aim> {
    let angle = shooter.angle;
    let mut aim = aim_line_attack(shooter, angle, MISSILERANGE, level);
    if aim.is_none() {
        aim = aim_line_attack(shooter, angle + Angle::new(1 << 26), MISSILERANGE, level);
        if aim.is_none() {
            aim = aim_line_attack(shooter, angle - Angle::new(1 << 26), MISSILERANGE, level);
        }
    }
    aim
}

/// One bullet. Inaccurate shots spread around the facing angle.
pub(crate) fn gun_shot(
    shooter: &mut MapObject,
    accurate: bool,
    distance: Fixed,
    aim: Option<Aim>,
    level: &mut Level,
) {
    let damage = 5 * (level.rng.p_random() % 3 + 1);
    let mut angle = shooter.angle;
    if !accurate {
        angle += Angle::new(((level.rng.p_random() - level.rng.p_random()) << 18) as u32);
    }
    line_attack(shooter, damage, distance, angle, aim, level);
}

struct AimTraverse {
    top_slope: Fixed,
    bottom_slope: Fixed,
    attack_range: Fixed,
    shootz: Fixed,
    shooter: ThinkerId,
    result: Option<Aim>,
}

impl AimTraverse {
    fn check_aim(&mut self, intercept: &Intercept, level: &mut Level) -> bool {
        if let Some(num) = intercept.line {
            let line = &level.map_data.linedefs[num];
            if line.flags & LineDefFlags::TwoSided as u32 == 0 {
                return false;
            }
            let Some(back) = line.backsector else {
                return false;
            };

            let portal = PortalZ::new(line, &level.map_data.sectors);
            if portal.bottom_z >= portal.top_z {
                return false;
            }

            let dist = self.attack_range * intercept.frac;
            let front = line.frontsector;
            if level.map_data.sectors[front].floorheight
                != level.map_data.sectors[back].floorheight
            {
                let slope = (portal.bottom_z - self.shootz) / dist;
                if slope > self.bottom_slope {
                    self.bottom_slope = slope;
                }
            }
            if level.map_data.sectors[front].ceilingheight
                != level.map_data.sectors[back].ceilingheight
            {
                let slope = (portal.top_z - self.shootz) / dist;
                if slope < self.top_slope {
                    self.top_slope = slope;
                }
            }

            if self.top_slope <= self.bottom_slope {
                return false; // the cone pinched shut
            }
            return true;
        }

        if let Some(id) = intercept.thing {
            if id == self.shooter {
                return true;
            }
            let Some(thing) = level.thinkers.mobj(id) else {
                return true;
            };
            if thing.flags & MapObjFlag::Shootable as u32 == 0 {
                return true; // corpse or something
            }

            let dist = self.attack_range * intercept.frac;
            let mut thing_top = (thing.z + thing.height - self.shootz) / dist;
            if thing_top < self.bottom_slope {
                return true; // shot over
            }
            let mut thing_bottom = (thing.z - self.shootz) / dist;
            if thing_bottom > self.top_slope {
                return true; // shot under
            }

            thing_top = thing_top.min(self.top_slope);
            thing_bottom = thing_bottom.max(self.bottom_slope);

            self.result = Some(Aim {
                aimslope: (thing_top + thing_bottom) / 2,
                thing: id,
            });
            return false;
        }
        true
    }
}

struct ShootTraverse {
    aimslope: Fixed,
    attack_range: Fixed,
    damage: i32,
    shootz: Fixed,
    trace_xy: Vec2,
    trace_dxy: Vec2,
    shooter: ThinkerId,
}

impl ShootTraverse {
    /// Spatter the wall, unless the shot left through a sky ceiling
    fn hit_line(&self, frac: Fixed, line_num: usize, level: &mut Level) {
        // back up a little so the puff isn't inside the wall
        let frac = frac - Fixed::from_int(4) / self.attack_range;
        let x = self.trace_xy.x + self.trace_dxy.x * frac;
        let y = self.trace_xy.y + self.trace_dxy.y * frac;
        let z = self.shootz + self.aimslope * (frac * self.attack_range);

        let line = &level.map_data.linedefs[line_num];
        let front = &level.map_data.sectors[line.frontsector];
        if front.sky_ceiling {
            if z > front.ceilingheight {
                return;
            }
            if let Some(back) = line.backsector {
                if z > level.map_data.sectors[back].ceilingheight {
                    return;
                }
            }
        }

        MapObject::spawn_puff(x, y, z, self.attack_range, level);
    }

    fn resolve(&mut self, shooter: &mut MapObject, intercept: &Intercept, level: &mut Level) -> bool {
        if let Some(num) = intercept.line {
            if level.map_data.linedefs[num].special != 0 {
                shoot_special_line(num, shooter, level);
            }

            let line = &level.map_data.linedefs[num];
            if line.flags & LineDefFlags::TwoSided as u32 == 0 {
                self.hit_line(intercept.frac, num, level);
                return false;
            }
            let Some(back) = line.backsector else {
                self.hit_line(intercept.frac, num, level);
                return false;
            };

            let portal = PortalZ::new(line, &level.map_data.sectors);
            let dist = self.attack_range * intercept.frac;
            let front = line.frontsector;

            if level.map_data.sectors[front].floorheight
                != level.map_data.sectors[back].floorheight
            {
                let slope = (portal.bottom_z - self.shootz) / dist;
                if slope > self.aimslope {
                    self.hit_line(intercept.frac, num, level);
                    return false;
                }
            }
            if level.map_data.sectors[front].ceilingheight
                != level.map_data.sectors[back].ceilingheight
            {
                let slope = (portal.top_z - self.shootz) / dist;
                if slope < self.aimslope {
                    self.hit_line(intercept.frac, num, level);
                    return false;
                }
            }
            return true; // shot continues through the opening
        }

        if let Some(id) = intercept.thing {
            if id == self.shooter {
                return true;
            }
            let Some(thing) = level.thinkers.mobj(id) else {
                return true;
            };
            if thing.flags & MapObjFlag::Shootable as u32 == 0 {
                return true;
            }

            let dist = self.attack_range * intercept.frac;
            let thing_top = (thing.z + thing.height - self.shootz) / dist;
            if thing_top < self.aimslope {
                return true; // shot over
            }
            let thing_bottom = (thing.z - self.shootz) / dist;
            if thing_bottom > self.aimslope {
                return true; // shot under
            }
            let noblood = thing.flags & MapObjFlag::Noblood as u32 != 0;

            let frac = intercept.frac - Fixed::from_int(10) / self.attack_range;
            let x = self.trace_xy.x + self.trace_dxy.x * frac;
            let y = self.trace_xy.y + self.trace_dxy.y * frac;
            let z = self.shootz + self.aimslope * (frac * self.attack_range);

            if noblood {
                MapObject::spawn_puff(x, y, z, self.attack_range, level);
            } else {
                MapObject::spawn_blood(x, y, z, self.damage, level);
            }

            if self.damage > 0 {
                let damage = self.damage;
                with_mobj(level, id, |thing, level| {
                    thing.take_damage(Some(shooter), Some(shooter.thinker), false, damage, level);
                });
            }
            return false;
        }
        true
    }
}

impl MapObject {
    /// Splash damage around self, falling off by distance. The source of
    /// the blast (for blame) is whatever this thing targets.
    ///
    /// Doom function name is `P_RadiusAttack`
    pub(crate) fn radius_attack(&mut self, damage: i32, level: &mut Level) {
        let dist = Fixed::from_int(damage) + MAXRADIUS;
        let bm = &level.map_data.blockmap;
        let bx1 = bm.block_x_raw(self.xy.x - dist).max(0);
        let bx2 = bm.block_x_raw(self.xy.x + dist).min(bm.width - 1);
        let by1 = bm.block_y_raw(self.xy.y - dist).max(0);
        let by2 = bm.block_y_raw(self.xy.y + dist).min(bm.height - 1);

        level.bump_valid_count();
        for by in by1..=by2 {
            for bx in bx1..=bx2 {
                let Some(cell) = level.map_data.blockmap.cell_index(bx, by) else {
                    continue;
                };
                for i in 0..level.map_data.blockmap.thing_cells[cell].len() {
                    let id = level.map_data.blockmap.thing_cells[cell][i];
                    if id == self.thinker {
                        continue;
                    }
                    with_mobj(level, id, |other, level| {
                        if other.validcount == level.valid_count {
                            return;
                        }
                        other.validcount = level.valid_count;
                        self.radius_damage_other(other, damage, level);
                    });
                }
            }
        }
    }

    fn radius_damage_other(&self, other: &mut MapObject, damage: i32, level: &mut Level) {
        if other.flags & MapObjFlag::Shootable as u32 == 0 {
            return;
        }

        let dx = (other.xy.x - self.xy.x).abs();
        let dy = (other.xy.y - self.xy.y).abs();
        let dist = ((dx.max(dy) - other.radius).to_bits() >> FRACBITS).max(0);
        if dist >= damage {
            return; // out of range
        }

        let (xy, z, height) = (self.xy, self.z, self.height);
        if check_sight(other, xy, z, height, level) {
            // must be in direct view of the blast
            other.take_damage(Some(self), self.target, false, damage - dist, level);
        }
    }

    /// Close enough for a bite or punch, with nothing in the way.
    ///
    /// Doom function name is `P_CheckMeleeRange`
    pub(crate) fn check_melee_range(&self, level: &mut Level) -> bool {
        let Some(tid) = self.target else {
            return false;
        };
        let Some(target) = level.thinkers.mobj(tid) else {
            return false;
        };

        let dist = self.xy.approx_distance_to(target.xy);
        if dist >= MELEERANGE - Fixed::from_int(20) + target.radius {
            return false;
        }

        let (xy, z, height) = (target.xy, target.z, target.height);
        check_sight(self, xy, z, height, level)
    }

    /// Chance of opening fire, rising as the target gets closer.
    ///
    /// Doom function name is `P_CheckMissileRange`
    pub(crate) fn check_missile_range(&mut self, level: &mut Level) -> bool {
        let Some(tid) = self.target else {
            return false;
        };
        if !check_sight_to(level, self, tid) {
            return false;
        }

        if self.flags & MapObjFlag::Justhit as u32 != 0 {
            // was just hit, fight back
            self.flags &= !(MapObjFlag::Justhit as u32);
            return true;
        }
        if self.reactiontime > 0 {
            return false; // don't attack yet
        }

        let Some(target) = level.thinkers.mobj(tid) else {
            return false;
        };
        let mut dist =
            (self.xy.approx_distance_to(target.xy) - Fixed::from_int(64)).to_bits() >> FRACBITS;

        if self.info.meleestate == StateNum::None {
            dist -= 128; // no melee attack, so fire more
        }
        if self.kind == MapObjKind::Vile && dist > 14 * 64 {
            return false; // too far away
        }
        if self.kind == MapObjKind::Skull {
            dist >>= 1;
        }
        if dist > 200 {
            dist = 200;
        }

        level.rng.p_random() >= dist
    }

    /// Rotate through the player slots looking for a live target, two slots
    /// per call. Without `all_around`, players behind the looker are only
    /// noticed at melee range.
    ///
    /// Doom function name is `P_LookForPlayers`
    pub(crate) fn look_for_players(&mut self, all_around: bool, level: &mut Level) -> bool {
        let stop = (self.lastlook - 1) & 3;
        let mut seen = 0;

        // bounded for the degenerate no-players-in-game case
        for _ in 0..(2 * MAXPLAYERS) {
            let idx = (self.lastlook & 3) as usize;
            if !level.player_in_game[idx] {
                self.lastlook = (self.lastlook + 1) & 3;
                continue;
            }
            if seen == 2 || self.lastlook == stop {
                return false; // done looking
            }
            seen += 1;

            if level.players[idx].health > 0 {
                if let Some(pm) = level.players[idx].mobj {
                    let pos = level.thinkers.mobj(pm).map(|m| (m.xy, m.z, m.height));
                    if let Some((pxy, pz, pheight)) = pos {
                        if check_sight(self, pxy, pz, pheight, level) {
                            let mut noticed = true;
                            if !all_around {
                                let an = point_to_angle_2(pxy, self.xy) - self.angle;
                                if an.to_bam() > ANG90.to_bam()
                                    && an.to_bam() < ANG270.to_bam()
                                    && self.xy.approx_distance_to(pxy) > MELEERANGE
                                {
                                    noticed = false; // behind the back
                                }
                            }
                            if noticed {
                                self.target = Some(pm);
                                return true;
                            }
                        }
                    }
                }
            }

            self.lastlook = (self.lastlook + 1) & 3;
        }
        false
    }
}
