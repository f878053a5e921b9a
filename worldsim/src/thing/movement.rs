//! Movement and collision handling. Almost everything here is on
//! `MapObject`: momentum application, position checks against lines and
//! things, wall sliding, and the walk attempts monsters use.

use log::debug;
use math::{Angle, BBox, Fixed, Vec2, point_to_angle_2, ANG180};
use sound_traits::SfxName;

use crate::defs::{FLOATSPEED, MAXMOVE, MAX_SPECIAL_CROSS, MAXRADIUS, USERANGE, VIEWHEIGHT};
use crate::env::specials::cross_special_line;
use crate::env::switch::use_special_line;
use crate::info::{MapObjKind, StateNum};
use crate::level::Level;
use crate::level::map_defs::LineDefFlags;
use crate::pathtrace::{Intercept, PT_ADD_LINES, PortalZ, path_traverse};
use crate::thing::{MapObjFlag, MapObject, with_mobj};

pub const STOPSPEED: Fixed = Fixed::from_bits(0x1000);
pub const FRICTION: Fixed = Fixed::from_bits(0xe800);
/// Corpses slide until slower than this
const QUARTER_UNIT: Fixed = Fixed::from_bits(0x4000);
/// Slide fraction backed off before each slide attempt
const SLIDE_FUDGE: Fixed = Fixed::from_bits(0x800);
/// Highest step a mover can climb without jumping
const MAXSTEP: Fixed = Fixed::from_int(24);

/// Scratch state for one position check: the tightest opening over every
/// line contacted, plus the special lines the move would cross.
#[derive(Debug, Default)]
pub struct MoveClip {
    /// If true, the move would be ok if within `floorz - ceilingz`
    pub(crate) floatok: bool,
    pub(crate) floorz: Fixed,
    pub(crate) ceilingz: Fixed,
    pub(crate) dropoffz: Fixed,
    /// The line that lowered the ceiling, for the sky-exit missile check
    pub(crate) ceiling_line: Option<usize>,
    /// Special lines the move box touched, in contact order
    pub(crate) spec_hits: Vec<usize>,
}

#[derive(Debug)]
struct BestSlide {
    frac: Fixed,
    line: Option<usize>,
}

impl BestSlide {
    fn new() -> Self {
        BestSlide {
            frac: Fixed::ONE,
            line: None,
        }
    }
}

impl MapObject {
    /// Doom function name is `P_ZMovement`
    pub(crate) fn z_movement(&mut self, level: &mut Level) {
        if let Some(slot) = self.player {
            if self.z < self.floorz {
                let player = &mut level.players[slot];
                player.viewheight -= self.floorz - self.z;
                player.deltaviewheight = (VIEWHEIGHT - player.viewheight) >> 3;
            }
        }

        self.z += self.momz;

        if self.flags & MapObjFlag::Float as u32 != 0
            && self.flags & MapObjFlag::Skullfly as u32 == 0
            && self.flags & MapObjFlag::Infloat as u32 == 0
        {
            // float down towards target if too close
            if let Some(target) = self.target.and_then(|t| level.thinkers.mobj(t)) {
                let dist = self.xy.approx_distance_to(target.xy);
                let delta = target.z + (self.height >> 1) - self.z;
                if delta < Fixed::ZERO && dist < -(delta * 3) {
                    self.z -= FLOATSPEED;
                } else if delta > Fixed::ZERO && dist < delta * 3 {
                    self.z += FLOATSPEED;
                }
            }
        }

        if self.z <= self.floorz {
            // hit the floor
            if self.flags & MapObjFlag::Skullfly as u32 != 0 {
                // the skull slammed into something
                self.momz = -self.momz;
            }

            if self.momz < Fixed::ZERO {
                if let Some(slot) = self.player {
                    if self.momz < -Fixed::from_int(8) {
                        // Squat down and grunt after hitting the ground hard
                        let player = &mut level.players[slot];
                        player.deltaviewheight = self.momz >> 3;
                        self.start_sound(level, SfxName::Oof);
                    }
                }
                self.momz = Fixed::ZERO;
            }
            self.z = self.floorz;

            if self.flags & MapObjFlag::Missile as u32 != 0
                && self.flags & MapObjFlag::Noclip as u32 == 0
            {
                self.explode_missile(level);
                return;
            }
        } else if self.flags & MapObjFlag::Nogravity as u32 == 0 {
            // falling starts at double gravity so jumps over ledges read well
            if self.momz == Fixed::ZERO {
                self.momz = -(Fixed::ONE * 2);
            } else {
                self.momz -= Fixed::ONE;
            }
        }

        if self.z + self.height > self.ceilingz {
            // hit the ceiling
            if self.momz > Fixed::ZERO {
                self.momz = Fixed::ZERO;
            }
            self.z = self.ceilingz - self.height;

            if self.flags & MapObjFlag::Skullfly as u32 != 0 {
                self.momz = -self.momz;
            }

            if self.flags & MapObjFlag::Missile as u32 != 0
                && self.flags & MapObjFlag::Noclip as u32 == 0
            {
                self.explode_missile(level);
            }
        }
    }

    /// Doom function name is `P_XYMovement`
    pub(crate) fn xy_movement(&mut self, level: &mut Level) {
        if self.momxy.is_zero() {
            if self.flags & MapObjFlag::Skullfly as u32 != 0 {
                // the skull slammed into something
                self.flags &= !(MapObjFlag::Skullfly as u32);
                self.momz = Fixed::ZERO;
                self.set_state(self.info.spawnstate, level);
            }
            return;
        }

        self.momxy.x = self.momxy.x.clamp(-MAXMOVE, MAXMOVE);
        self.momxy.y = self.momxy.y.clamp(-MAXMOVE, MAXMOVE);

        // Split long moves so a fast mover can't hop a whole wall in one step
        let mut xmove = self.momxy.x;
        let mut ymove = self.momxy.y;
        loop {
            let ptry;
            if xmove > MAXMOVE >> 1 || ymove > MAXMOVE >> 1 {
                ptry = Vec2::new(self.xy.x + (xmove >> 1), self.xy.y + (ymove >> 1));
                xmove = xmove >> 1;
                ymove = ymove >> 1;
            } else {
                ptry = Vec2::new(self.xy.x + xmove, self.xy.y + ymove);
                xmove = Fixed::ZERO;
                ymove = Fixed::ZERO;
            }

            let mut clip = MoveClip::default();
            if !self.try_move(ptry, &mut clip, level) {
                // blocked move
                if self.player.is_some() {
                    self.slide_move(level);
                } else if self.flags & MapObjFlag::Missile as u32 != 0 {
                    // explode, unless it left through the open sky
                    if let Some(line) = clip.ceiling_line {
                        let line = &level.map_data.linedefs[line];
                        let sky = level.map_data.sectors[line.frontsector].sky_ceiling
                            || line
                                .backsector
                                .map(|b| level.map_data.sectors[b].sky_ceiling)
                                .unwrap_or(false);
                        if sky {
                            self.remove(level);
                            return;
                        }
                    }
                    self.explode_missile(level);
                    return;
                } else {
                    self.momxy = Vec2::ZERO;
                }
            }
            if level.thinkers.pending_removal(self.thinker) {
                return;
            }

            if xmove == Fixed::ZERO && ymove == Fixed::ZERO {
                break;
            }
        }

        // slow down
        if self.flags & (MapObjFlag::Missile as u32 | MapObjFlag::Skullfly as u32) != 0 {
            return; // no friction for missiles ever
        }
        if self.z > self.floorz {
            return; // no friction when airborne
        }

        if self.flags & MapObjFlag::Corpse as u32 != 0 {
            // do not stop sliding if halfway off a step with some momentum
            let sector = level.map_data.subsectors[self.subsector].sector;
            if (self.momxy.x.abs() > QUARTER_UNIT || self.momxy.y.abs() > QUARTER_UNIT)
                && self.floorz != level.map_data.sectors[sector].floorheight
            {
                return;
            }
        }

        if self.momxy.x.abs() < STOPSPEED && self.momxy.y.abs() < STOPSPEED {
            let standing = match self.player {
                Some(slot) => {
                    let cmd = &level.players[slot].cmd;
                    cmd.forwardmove == 0 && cmd.sidemove == 0
                }
                None => true,
            };
            if standing {
                // back to an idle frame if mid run cycle
                if self.player.is_some()
                    && matches!(
                        self.state,
                        StateNum::PLAY_RUN1
                            | StateNum::PLAY_RUN2
                            | StateNum::PLAY_RUN3
                            | StateNum::PLAY_RUN4
                    )
                {
                    self.set_state(StateNum::PLAY, level);
                }
                self.momxy = Vec2::ZERO;
            } else {
                self.momxy = Vec2::new(self.momxy.x * FRICTION, self.momxy.y * FRICTION);
            }
        } else {
            self.momxy = Vec2::new(self.momxy.x * FRICTION, self.momxy.y * FRICTION);
        }
    }

    /// Attempt to move to a point, stepping up and triggering crossed
    /// specials if the move succeeds.
    ///
    /// Doom function name is `P_TryMove`
    pub(crate) fn try_move(&mut self, ptry: Vec2, clip: &mut MoveClip, level: &mut Level) -> bool {
        clip.floatok = false;
        if !self.check_position(ptry, clip, level) {
            return false;
        }

        if self.flags & MapObjFlag::Noclip as u32 == 0 {
            if clip.ceilingz - clip.floorz < self.height {
                return false; // doesn't fit
            }
            clip.floatok = true;

            if self.flags & MapObjFlag::Teleport as u32 == 0
                && clip.ceilingz - self.z < self.height
            {
                return false; // must lower itself to fit
            }
            if self.flags & MapObjFlag::Teleport as u32 == 0 && clip.floorz - self.z > MAXSTEP {
                return false; // too big a step up
            }
            if self.flags & (MapObjFlag::Dropoff as u32 | MapObjFlag::Float as u32) == 0
                && clip.floorz - clip.dropoffz > MAXSTEP
            {
                return false; // don't stand over a dropoff
            }
        }

        // the move is ok, so link the thing into its new position
        self.unset_thing_position(level);
        let old_xy = self.xy;
        self.floorz = clip.floorz;
        self.ceilingz = clip.ceilingz;
        self.xy = ptry;
        self.set_thing_position(level);

        if self.flags & (MapObjFlag::Teleport as u32 | MapObjFlag::Noclip as u32) == 0 {
            for i in 0..clip.spec_hits.len() {
                let num = clip.spec_hits[i];
                let line = &level.map_data.linedefs[num];
                // see if the line was crossed
                let side = line.point_on_side(self.xy);
                let old_side = line.point_on_side(old_xy);
                if side != old_side && line.special != 0 {
                    cross_special_line(old_side, num, self, level);
                }
            }
        }
        true
    }

    /// Fill `clip` with the floor/ceiling interval at `endpoint` and bail
    /// out early on any hard contact.
    ///
    /// Doom function name is `P_CheckPosition`
    pub(crate) fn check_position(
        &mut self,
        endpoint: Vec2,
        clip: &mut MoveClip,
        level: &mut Level,
    ) -> bool {
        let tmbbox = BBox::from_radius(endpoint, self.radius);

        let sector = level.map_data.sector_at(endpoint);
        // The base floor / ceiling is from the subsector that contains the
        // point. Any contacted lines the step closer together will adjust them.
        clip.floorz = level.map_data.sectors[sector].floorheight;
        clip.dropoffz = clip.floorz;
        clip.ceilingz = level.map_data.sectors[sector].ceilingheight;

        if self.flags & MapObjFlag::Noclip as u32 != 0 {
            return true;
        }

        level.bump_valid_count();

        // Things first: the blockmap cell span has to cover anything whose
        // centre sits in a neighbouring cell but overlaps this box
        let bm = &level.map_data.blockmap;
        let bx1 = bm.block_x_raw(tmbbox.left - MAXRADIUS).max(0);
        let bx2 = bm.block_x_raw(tmbbox.right + MAXRADIUS).min(bm.width - 1);
        let by1 = bm.block_y_raw(tmbbox.bottom - MAXRADIUS).max(0);
        let by2 = bm.block_y_raw(tmbbox.top + MAXRADIUS).min(bm.height - 1);

        for by in by1..=by2 {
            for bx in bx1..=bx2 {
                let Some(cell) = level.map_data.blockmap.cell_index(bx, by) else {
                    continue;
                };
                // touched pickups unlink themselves from this cell mid-scan,
                // so walk a snapshot of it
                let cell_things = level.map_data.blockmap.thing_cells[cell].clone();
                for id in cell_things {
                    if id == self.thinker {
                        continue;
                    }
                    let keep_going =
                        with_mobj(level, id, |other, level| {
                            self.pit_check_thing(other, endpoint, clip, level)
                        })
                        .unwrap_or(true);
                    if !keep_going {
                        return false;
                    }
                }
            }
        }

        // Now the lines
        let bm = &level.map_data.blockmap;
        let bx1 = bm.block_x_raw(tmbbox.left).max(0);
        let bx2 = bm.block_x_raw(tmbbox.right).min(bm.width - 1);
        let by1 = bm.block_y_raw(tmbbox.bottom).max(0);
        let by2 = bm.block_y_raw(tmbbox.top).min(bm.height - 1);

        for by in by1..=by2 {
            for bx in bx1..=bx2 {
                let Some(cell) = level.map_data.blockmap.cell_index(bx, by) else {
                    continue;
                };
                for i in 0..level.map_data.blockmap.line_cells[cell].len() {
                    let num = level.map_data.blockmap.line_cells[cell][i];
                    if level.map_data.linedefs[num].validcount == level.valid_count {
                        continue;
                    }
                    level.map_data.linedefs[num].validcount = level.valid_count;
                    if !self.pit_check_line(&tmbbox, clip, num, level) {
                        return false;
                    }
                }
            }
        }
        true
    }

    /// Doom function name is `PIT_CheckThing`
    fn pit_check_thing(
        &mut self,
        other: &mut MapObject,
        endpoint: Vec2,
        clip: &mut MoveClip,
        level: &mut Level,
    ) -> bool {
        if other.flags
            & (MapObjFlag::Solid as u32 | MapObjFlag::Special as u32 | MapObjFlag::Shootable as u32)
            == 0
        {
            return true;
        }

        let dist = other.radius + self.radius;
        if (other.xy.x - endpoint.x).abs() >= dist || (other.xy.y - endpoint.y).abs() >= dist {
            return true; // didn't hit it
        }

        if self.flags & MapObjFlag::Skullfly as u32 != 0 {
            let damage = ((level.rng.p_random() % 8) + 1) * self.info.damage;
            other.take_damage(Some(self), Some(self.thinker), true, damage, level);

            self.flags &= !(MapObjFlag::Skullfly as u32);
            self.momxy = Vec2::ZERO;
            self.momz = Fixed::ZERO;
            self.set_state(self.info.spawnstate, level);
            return false; // stop moving
        }

        // missiles can hit other things
        if self.flags & MapObjFlag::Missile as u32 != 0 {
            if self.z > other.z + other.height {
                return true; // went over
            }
            if self.z + self.height < other.z {
                return true; // went under
            }

            if let Some(shooter) = self.target {
                if shooter == other.thinker {
                    return true; // don't hit the thing that fired it
                }
                let shooter_kind = level.thinkers.mobj(shooter).map(|m| m.kind);
                if shooter_kind == Some(other.kind) && other.kind != MapObjKind::Player {
                    // don't let monsters damage their own kind, but still
                    // stop the missile
                    return false;
                }
            }

            if other.flags & MapObjFlag::Shootable as u32 == 0 {
                return other.flags & MapObjFlag::Solid as u32 == 0;
            }

            let damage = ((level.rng.p_random() % 8) + 1) * self.info.damage;
            let source = self.target;
            other.take_damage(Some(self), source, false, damage, level);
            return false; // don't traverse any more
        }

        // check for special pickup
        if other.flags & MapObjFlag::Special as u32 != 0 {
            let solid = other.flags & MapObjFlag::Solid as u32 != 0;
            if self.flags & MapObjFlag::Pickup as u32 != 0 {
                self.touch_special_thing(other, level);
            }
            return !solid;
        }

        if other.flags & MapObjFlag::Solid as u32 != 0 {
            if self.z >= other.z + other.height {
                if other.z + other.height - self.z > MAXSTEP {
                    return false;
                }
                clip.floorz = clip.floorz.max(other.z + other.height);
                return true; // walked on top of it
            }
            if self.z + self.height <= other.z {
                return true; // under it
            }
            return false;
        }
        true
    }

    /// Adjusts the clip interval as lines are contacted.
    ///
    /// Doom function name is `PIT_CheckLine`
    fn pit_check_line(
        &mut self,
        tmbbox: &BBox,
        clip: &mut MoveClip,
        line_num: usize,
        level: &mut Level,
    ) -> bool {
        let line = &level.map_data.linedefs[line_num];
        if !tmbbox.overlaps(&line.bbox) {
            return true;
        }
        if line.box_on_side(tmbbox) != -1 {
            return true;
        }

        // A line has two sides, a hit from either matters here

        if line.backsector.is_none() {
            return false; // one sided line, always a wall
        }

        if self.flags & MapObjFlag::Missile as u32 == 0 {
            if line.flags & LineDefFlags::Blocking as u32 != 0 {
                return false; // explicitly blocking everything
            }
            if self.player.is_none() && line.flags & LineDefFlags::BlockMonsters as u32 != 0 {
                return false; // block monsters only
            }
        }

        let portal = PortalZ::new(line, &level.map_data.sectors);
        if portal.top_z < clip.ceilingz {
            clip.ceilingz = portal.top_z;
            clip.ceiling_line = Some(line_num);
        }
        if portal.bottom_z > clip.floorz {
            clip.floorz = portal.bottom_z;
        }
        if portal.lowest_z < clip.dropoffz {
            clip.dropoffz = portal.lowest_z;
        }

        // remember any special lines for later crossing checks
        if line.special != 0
            && clip.spec_hits.len() < MAX_SPECIAL_CROSS
            && !clip.spec_hits.contains(&line_num)
        {
            clip.spec_hits.push(line_num);
        }
        true
    }

    /// The momentum has hit a wall: take progressively smaller slides along
    /// it until the move works or degrades into an axis-aligned stair step.
    ///
    /// Doom function name is `P_SlideMove`
    fn slide_move(&mut self, level: &mut Level) {
        let mut hitcount = 0;

        loop {
            if hitcount == 3 {
                self.stair_step(level);
                return;
            }
            hitcount += 1;

            // trace along the three leading corners
            let lead_x = if self.momxy.x > Fixed::ZERO {
                self.xy.x + self.radius
            } else {
                self.xy.x - self.radius
            };
            let trail_x = if self.momxy.x > Fixed::ZERO {
                self.xy.x - self.radius
            } else {
                self.xy.x + self.radius
            };
            let lead_y = if self.momxy.y > Fixed::ZERO {
                self.xy.y + self.radius
            } else {
                self.xy.y - self.radius
            };
            let trail_y = if self.momxy.y > Fixed::ZERO {
                self.xy.y - self.radius
            } else {
                self.xy.y + self.radius
            };

            let mut best = BestSlide::new();
            best.frac = Fixed::ONE + Fixed::from_bits(1);
            for start in [
                Vec2::new(lead_x, lead_y),
                Vec2::new(trail_x, lead_y),
                Vec2::new(lead_x, trail_y),
            ] {
                let this = &*self;
                path_traverse(
                    start,
                    start + self.momxy,
                    PT_ADD_LINES,
                    level,
                    |level, intercept| this.slide_traverse(&mut best, intercept, level),
                );
            }

            if best.frac > Fixed::ONE {
                // the move must have hit the middle, so stairstep
                self.stair_step(level);
                return;
            }

            // fudge a bit to make sure it doesn't hit
            best.frac -= SLIDE_FUDGE;
            if best.frac > Fixed::ZERO {
                let slide = self.momxy * best.frac;
                let dest = self.xy + slide;
                if !self.try_move(dest, &mut MoveClip::default(), level) {
                    self.stair_step(level);
                    return;
                }
            }

            // now continue along the wall with the remainder
            best.frac = Fixed::ONE - (best.frac + SLIDE_FUDGE);
            if best.frac > Fixed::ONE {
                best.frac = Fixed::ONE;
            }
            if best.frac <= Fixed::ZERO {
                return;
            }

            let mut slide = self.momxy * best.frac;
            if let Some(line) = best.line {
                self.hit_slide_line(&mut slide, line, level);
            }
            self.momxy = slide;

            let dest = self.xy + slide;
            if self.try_move(dest, &mut MoveClip::default(), level) {
                return;
            }
        }
    }

    /// Doom function name is `PTR_SlideTraverse`
    fn slide_traverse(&self, best: &mut BestSlide, intercept: &Intercept, level: &Level) -> bool {
        let Some(line_num) = intercept.line else {
            return true;
        };
        let line = &level.map_data.linedefs[line_num];

        let blocking = |best: &mut BestSlide| {
            if intercept.frac < best.frac {
                best.frac = intercept.frac;
                best.line = Some(line_num);
            }
        };

        if line.flags & LineDefFlags::TwoSided as u32 == 0 {
            if line.point_on_side(self.xy) != 0 {
                return true; // don't hit the back side
            }
            blocking(best);
            return false;
        }

        let portal = PortalZ::new(line, &level.map_data.sectors);
        if portal.range < self.height
            || portal.top_z - self.z < self.height
            || portal.bottom_z - self.z > MAXSTEP
        {
            blocking(best);
            return false;
        }
        // this line doesn't block movement
        true
    }

    /// Try each axis alone, the classic zig up a staircase move
    fn stair_step(&mut self, level: &mut Level) {
        let up = Vec2::new(self.xy.x, self.xy.y + self.momxy.y);
        if !self.try_move(up, &mut MoveClip::default(), level) {
            let across = Vec2::new(self.xy.x + self.momxy.x, self.xy.y);
            self.try_move(across, &mut MoveClip::default(), level);
        }
    }

    /// Rotate the leftover momentum to run parallel with the blocking line.
    ///
    /// Doom function name is `P_HitSlideLine`
    fn hit_slide_line(&self, slide: &mut Vec2, line_num: usize, level: &Level) {
        use crate::level::map_defs::SlopeType;
        let line = &level.map_data.linedefs[line_num];
        match line.slopetype {
            SlopeType::Horizontal => {
                slide.y = Fixed::ZERO;
                return;
            }
            SlopeType::Vertical => {
                slide.x = Fixed::ZERO;
                return;
            }
            _ => {}
        }

        let side = line.point_on_side(self.xy);
        let mut line_angle = point_to_angle_2(line.delta, Vec2::ZERO);
        if side == 1 {
            line_angle += ANG180;
        }
        let move_angle = point_to_angle_2(*slide, Vec2::ZERO);
        let delta_angle = move_angle - line_angle;

        let move_len = Vec2::ZERO.approx_distance_to(*slide);
        let new_len = move_len * delta_angle.cos();
        *slide = line_angle.unit() * new_len;
    }

    /// Look for special lines in front of the player to activate.
    ///
    /// Doom function name is `P_UseLines`
    pub(crate) fn use_lines(&mut self, level: &mut Level) {
        let origin = self.xy;
        let endpoint = origin + (self.angle.unit() * USERANGE);
        debug!("Use line scan from {origin} to {endpoint}");

        path_traverse(origin, endpoint, PT_ADD_LINES, level, |level, intercept| {
            self.use_traverse(intercept, level)
        });
    }

    /// Doom function name is `PTR_UseTraverse`
    fn use_traverse(&mut self, intercept: &Intercept, level: &mut Level) -> bool {
        let Some(line_num) = intercept.line else {
            return true;
        };
        let line = &level.map_data.linedefs[line_num];

        if line.special == 0 {
            let portal = PortalZ::new(line, &level.map_data.sectors);
            if portal.range <= Fixed::ZERO {
                self.start_sound(level, SfxName::Noway);
                return false; // can't use through a wall
            }
            return true; // not a special line, keep checking
        }

        let side = line.point_on_side(self.xy);
        use_special_line(side, line_num, self, level);
        // can't use more than one special line in a row
        false
    }

    /// Movement finished this tick but something large might still be due:
    /// missiles colliding use this after a teleport style position set.
    ///
    /// Doom function name is `P_TeleportMove` (the stomp variant lives in
    /// `env::teleport`)
    pub(crate) fn teleport_move(&mut self, dest: Vec2, level: &mut Level) -> bool {
        if !self.stomp_position(dest, level) {
            return false;
        }

        self.unset_thing_position(level);
        let sector = level.map_data.sector_at(dest);
        self.floorz = level.map_data.sectors[sector].floorheight;
        self.ceilingz = level.map_data.sectors[sector].ceilingheight;
        self.xy = dest;
        self.set_thing_position(level);
        true
    }

    /// Kill anything occupying the destination, when allowed to.
    ///
    /// Doom function name is `PIT_StompThing` (looped over the target spot)
    fn stomp_position(&mut self, dest: Vec2, level: &mut Level) -> bool {
        let bm = &level.map_data.blockmap;
        let bbox = BBox::from_radius(dest, self.radius);
        let bx1 = bm.block_x_raw(bbox.left - MAXRADIUS).max(0);
        let bx2 = bm.block_x_raw(bbox.right + MAXRADIUS).min(bm.width - 1);
        let by1 = bm.block_y_raw(bbox.bottom - MAXRADIUS).max(0);
        let by2 = bm.block_y_raw(bbox.top + MAXRADIUS).min(bm.height - 1);

        // monsters don't stomp things except on the final boss map
        let can_stomp = self.player.is_some() || level.game_map == 30;

        for by in by1..=by2 {
            for bx in bx1..=bx2 {
                let Some(cell) = level.map_data.blockmap.cell_index(bx, by) else {
                    continue;
                };
                // stomped things can drop out of this cell mid-scan, so walk
                // a snapshot of it
                let cell_things = level.map_data.blockmap.thing_cells[cell].clone();
                for id in cell_things {
                    if id == self.thinker {
                        continue;
                    }
                    let blocked = with_mobj(level, id, |other, level| {
                        if other.flags & MapObjFlag::Shootable as u32 == 0 {
                            return false;
                        }
                        let dist = other.radius + self.radius;
                        if (other.xy.x - dest.x).abs() >= dist
                            || (other.xy.y - dest.y).abs() >= dist
                        {
                            return false; // didn't hit it
                        }
                        if !can_stomp {
                            return true;
                        }
                        other.take_damage(Some(self), Some(self.thinker), false, 10000, level);
                        false
                    })
                    .unwrap_or(false);
                    if blocked {
                        return false;
                    }
                }
            }
        }
        true
    }
}
