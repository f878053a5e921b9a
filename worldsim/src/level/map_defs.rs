//! The geometry the simulation runs on. Everything is indexed: sectors,
//! sides, lines, segs, subsectors and nodes refer to each other by position
//! in the level arrays, and things are referenced by thinker handle.

use math::{BBox, DivLine, Fixed, Vec2, FRACBITS};

use crate::thinker::ThinkerId;

pub const BOXTOP: usize = 0;
pub const BOXBOTTOM: usize = 1;
pub const BOXLEFT: usize = 2;
pub const BOXRIGHT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::upper_case_acronyms)]
pub enum LineDefFlags {
    /// Blocks everything
    Blocking = 1,
    /// Blocks monsters only
    BlockMonsters = 2,
    /// Has a back side
    TwoSided = 4,
    UnpegTop = 8,
    UnpegBottom = 16,
    /// Shown as one-sided on automap
    Secret = 32,
    /// Monster sound propagation stops here
    BlockSound = 64,
    Hidden = 128,
    Mapped = 256,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlopeType {
    Horizontal,
    Vertical,
    Positive,
    Negative,
}

/// A thing record from map data, also kept on spawned objects for respawning
#[derive(Debug, Default, Clone, Copy)]
pub struct MapThing {
    pub pos: Vec2,
    /// Whole degrees
    pub angle: i32,
    /// Editor number identifying the kind
    pub kind: i16,
    pub options: i16,
}

#[derive(Debug)]
pub struct Sector {
    pub floorheight: Fixed,
    pub ceilingheight: Fixed,
    /// The ceiling is open sky. Missiles leaving through it vanish silently.
    pub sky_ceiling: bool,
    pub lightlevel: i32,
    pub special: i16,
    pub tag: i16,
    /// 0 = untraversed, 1,2 = sound entered via one or two line hops
    pub soundtraversed: i32,
    /// The noise maker monsters in here will wake to
    pub sound_target: Option<ThinkerId>,
    /// Blockmap cell bounds of this sector, for height-change rechecks
    pub blockbox: [i32; 4],
    pub validcount: usize,
    /// Every thing whose centre is in this sector
    pub thing_list: Vec<ThinkerId>,
    /// The door/plat/floor/ceiling currently operating on this sector
    pub specialdata: Option<ThinkerId>,
    /// Indices of all lines touching this sector
    pub lines: Vec<usize>,
}

impl Sector {
    pub fn add_thing(&mut self, id: ThinkerId) {
        self.thing_list.push(id);
    }

    pub fn remove_thing(&mut self, id: ThinkerId) {
        if let Some(pos) = self.thing_list.iter().position(|t| *t == id) {
            self.thing_list.swap_remove(pos);
        }
    }
}

#[derive(Debug, Clone)]
pub struct SideDef {
    pub toptexture: i16,
    pub bottomtexture: i16,
    pub midtexture: i16,
    pub sector: usize,
}

#[derive(Debug)]
pub struct LineDef {
    pub v1: Vec2,
    pub v2: Vec2,
    /// v2 - v1, precalculated for side checks
    pub delta: Vec2,
    pub flags: u32,
    pub special: i16,
    pub tag: i16,
    pub bbox: BBox,
    pub slopetype: SlopeType,
    pub front_sidedef: usize,
    pub back_sidedef: Option<usize>,
    pub frontsector: usize,
    pub backsector: Option<usize>,
    pub validcount: usize,
}

impl LineDef {
    #[inline]
    pub fn two_sided(&self) -> bool {
        self.backsector.is_some()
    }

    /// 0 = front, 1 = back
    pub fn point_on_side(&self, v: Vec2) -> usize {
        let dx = (v.x - self.v1.x).to_bits() as i64;
        let dy = (v.y - self.v1.y).to_bits() as i64;
        let left = self.delta.y.to_bits() as i64 * dx;
        let right = dy * self.delta.x.to_bits() as i64;
        if right < left {
            0
        } else {
            1
        }
    }

    /// Which side of this line a box is on: 0 front, 1 back, -1 straddling
    pub fn box_on_side(&self, tmbox: &BBox) -> i32 {
        let (p1, p2) = match self.slopetype {
            SlopeType::Horizontal => {
                let mut p1 = (tmbox.top > self.v1.y) as usize;
                let mut p2 = (tmbox.bottom > self.v1.y) as usize;
                if self.delta.x.is_negative() {
                    p1 ^= 1;
                    p2 ^= 1;
                }
                (p1, p2)
            }
            SlopeType::Vertical => {
                let mut p1 = (tmbox.right < self.v1.x) as usize;
                let mut p2 = (tmbox.left < self.v1.x) as usize;
                if self.delta.y.is_negative() {
                    p1 ^= 1;
                    p2 ^= 1;
                }
                (p1, p2)
            }
            SlopeType::Positive => (
                self.point_on_side(Vec2::new(tmbox.left, tmbox.top)),
                self.point_on_side(Vec2::new(tmbox.right, tmbox.bottom)),
            ),
            SlopeType::Negative => (
                self.point_on_side(Vec2::new(tmbox.right, tmbox.top)),
                self.point_on_side(Vec2::new(tmbox.left, tmbox.bottom)),
            ),
        };
        if p1 == p2 {
            return p1 as i32;
        }
        -1
    }

    pub fn as_divline(&self) -> DivLine {
        DivLine::new(self.v1, self.delta)
    }
}

/// A section of a linedef bounding a subsector
#[derive(Debug, Clone)]
pub struct Segment {
    pub v1: Vec2,
    pub v2: Vec2,
    pub linedef: usize,
    /// 0 = front side of the linedef, 1 = back
    pub side: usize,
    pub frontsector: usize,
    pub backsector: Option<usize>,
}

#[derive(Debug, Clone, Copy)]
pub struct SubSector {
    pub sector: usize,
    pub start_seg: u32,
    pub seg_count: u32,
}

pub const IS_SSECTOR_MASK: u32 = 0x8000_0000;

/// BSP node. Child indices with the high bit set are subsector numbers.
#[derive(Debug, Clone, Copy)]
pub struct Node {
    pub xy: Vec2,
    pub dxy: Vec2,
    /// Bounding boxes of the front (0) and back (1) children
    pub bboxes: [BBox; 2],
    pub children: [u32; 2],
}

impl Node {
    /// 0 = front, 1 = back
    pub fn point_on_side(&self, v: Vec2) -> usize {
        let dx = (v.x - self.xy.x).to_bits() as i64;
        let dy = (v.y - self.xy.y).to_bits() as i64;
        let left = self.dxy.y.to_bits() as i64 * dx;
        let right = dy * self.dxy.x.to_bits() as i64;
        if right < left {
            0
        } else {
            1
        }
    }

    /// Which side the divider puts a box on, conservatively: -1 if it cuts it
    pub fn box_on_side(&self, bbox: &BBox) -> i32 {
        // All four corners
        let corners = [
            Vec2::new(bbox.left, bbox.top),
            Vec2::new(bbox.right, bbox.top),
            Vec2::new(bbox.left, bbox.bottom),
            Vec2::new(bbox.right, bbox.bottom),
        ];
        let first = self.point_on_side(corners[0]);
        for c in &corners[1..] {
            if self.point_on_side(*c) != first {
                return -1;
            }
        }
        first as i32
    }
}

/// Blockmap cells are 128 map units square
pub const MAPBLOCKUNITS: i32 = 128;
/// World coordinate bits to shift away to get a blockmap cell ordinate
pub const MAPBLOCKSHIFT: i32 = FRACBITS + 7;

#[cfg(test)]
mod tests {
    use super::*;
    use math::Fixed;

    fn line(v1: Vec2, v2: Vec2) -> LineDef {
        let delta = v2 - v1;
        let slopetype = if delta.x == Fixed::ZERO {
            SlopeType::Vertical
        } else if delta.y == Fixed::ZERO {
            SlopeType::Horizontal
        } else if delta.y.is_positive() == delta.x.is_positive() {
            SlopeType::Positive
        } else {
            SlopeType::Negative
        };
        LineDef {
            v1,
            v2,
            delta,
            flags: 0,
            special: 0,
            tag: 0,
            bbox: BBox::new(v1, v2),
            slopetype,
            front_sidedef: 0,
            back_sidedef: None,
            frontsector: 0,
            backsector: None,
            validcount: 0,
        }
    }

    #[test]
    fn point_sides() {
        // side 0 is to the right of the direction of travel
        let l = line(Vec2::ZERO, Vec2::from_ints(0, 128));
        assert_eq!(l.point_on_side(Vec2::from_ints(16, 64)), 0);
        assert_eq!(l.point_on_side(Vec2::from_ints(-16, 64)), 1);
    }

    #[test]
    fn box_sides() {
        let l = line(Vec2::ZERO, Vec2::from_ints(0, 128));
        let front = BBox::from_radius(Vec2::from_ints(32, 64), Fixed::from_int(8));
        let back = BBox::from_radius(Vec2::from_ints(-32, 64), Fixed::from_int(8));
        let straddle = BBox::from_radius(Vec2::from_ints(0, 64), Fixed::from_int(8));
        assert_eq!(l.box_on_side(&front), 0);
        assert_eq!(l.box_on_side(&back), 1);
        assert_eq!(l.box_on_side(&straddle), -1);
    }
}
