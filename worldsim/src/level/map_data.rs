//! Validated, cross-linked level geometry plus the two spatial indexes the
//! simulation queries every tick: the blockmap grid and the BSP tree.
//!
//! Input arrives as plain index-based records; `MapData::new` checks every
//! reference and computes the derived data (line slopes and boxes, sector
//! line lists and block boxes, the blockmap itself).

use log::info;
use math::{BBox, Fixed, Vec2};

use crate::defs::{WorldError, MAXRADIUS};
use crate::level::map_defs::{
    LineDef, LineDefFlags, MapThing, Node, Sector, SideDef, SlopeType, SubSector, Segment,
    BOXBOTTOM, BOXLEFT, BOXRIGHT, BOXTOP, IS_SSECTOR_MASK, MAPBLOCKSHIFT, MAPBLOCKUNITS,
};
use crate::thinker::ThinkerId;

#[derive(Debug, Clone)]
pub struct RawSector {
    pub floorheight: i32,
    pub ceilingheight: i32,
    pub sky_ceiling: bool,
    pub lightlevel: i32,
    pub special: i16,
    pub tag: i16,
}

#[derive(Debug, Clone)]
pub struct RawSideDef {
    pub toptexture: i16,
    pub bottomtexture: i16,
    pub midtexture: i16,
    pub sector: usize,
}

#[derive(Debug, Clone)]
pub struct RawLineDef {
    pub v1: usize,
    pub v2: usize,
    pub flags: u32,
    pub special: i16,
    pub tag: i16,
    pub front_sidedef: usize,
    pub back_sidedef: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct RawSegment {
    pub v1: usize,
    pub v2: usize,
    pub linedef: usize,
    pub side: usize,
}

#[derive(Debug, Clone)]
pub struct RawSubSector {
    pub start_seg: u32,
    pub seg_count: u32,
}

#[derive(Debug, Clone)]
pub struct RawNode {
    pub xy: Vec2,
    pub dxy: Vec2,
    pub bboxes: [BBox; 2],
    pub children: [u32; 2],
}

/// Everything needed to build a level. Vertices are in map units.
#[derive(Debug, Default, Clone)]
pub struct RawMapData {
    pub vertices: Vec<Vec2>,
    pub sectors: Vec<RawSector>,
    pub sidedefs: Vec<RawSideDef>,
    pub linedefs: Vec<RawLineDef>,
    pub segments: Vec<RawSegment>,
    pub subsectors: Vec<RawSubSector>,
    pub nodes: Vec<RawNode>,
    pub things: Vec<MapThing>,
    /// Sector-to-sector visibility bits, row-major, bit set = hidden.
    /// Empty means everything is potentially visible.
    pub reject: Vec<u8>,
}

impl Default for RawSector {
    fn default() -> Self {
        Self {
            floorheight: 0,
            ceilingheight: 128,
            sky_ceiling: false,
            lightlevel: 160,
            special: 0,
            tag: 0,
        }
    }
}

/// The blockmap: one cell per 128x128 map units, listing the lines crossing
/// each cell and the solid things currently inside it.
#[derive(Debug, Default)]
pub struct BlockMap {
    pub origin: Vec2,
    pub width: i32,
    pub height: i32,
    pub line_cells: Vec<Vec<usize>>,
    pub thing_cells: Vec<Vec<ThinkerId>>,
}

impl BlockMap {
    /// Cell ordinate for a world coordinate, or None outside the grid
    #[inline]
    pub fn block_x(&self, x: Fixed) -> Option<i32> {
        let bx = (x - self.origin.x).to_bits() >> MAPBLOCKSHIFT;
        (bx >= 0 && bx < self.width).then_some(bx)
    }

    #[inline]
    pub fn block_y(&self, y: Fixed) -> Option<i32> {
        let by = (y - self.origin.y).to_bits() >> MAPBLOCKSHIFT;
        (by >= 0 && by < self.height).then_some(by)
    }

    /// Unclamped cell ordinates, for callers that clamp ranges themselves
    #[inline]
    pub fn block_x_raw(&self, x: Fixed) -> i32 {
        (x - self.origin.x).to_bits() >> MAPBLOCKSHIFT
    }

    #[inline]
    pub fn block_y_raw(&self, y: Fixed) -> i32 {
        (y - self.origin.y).to_bits() >> MAPBLOCKSHIFT
    }

    #[inline]
    pub fn cell_index(&self, bx: i32, by: i32) -> Option<usize> {
        if bx < 0 || bx >= self.width || by < 0 || by >= self.height {
            return None;
        }
        Some((by * self.width + bx) as usize)
    }

    pub fn add_thing(&mut self, bx: i32, by: i32, id: ThinkerId) {
        if let Some(cell) = self.cell_index(bx, by) {
            self.thing_cells[cell].push(id);
        }
    }

    pub fn remove_thing(&mut self, bx: i32, by: i32, id: ThinkerId) {
        if let Some(cell) = self.cell_index(bx, by) {
            let things = &mut self.thing_cells[cell];
            if let Some(pos) = things.iter().position(|t| *t == id) {
                things.swap_remove(pos);
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct MapData {
    pub sectors: Vec<Sector>,
    pub sidedefs: Vec<SideDef>,
    pub linedefs: Vec<LineDef>,
    pub segments: Vec<Segment>,
    pub subsectors: Vec<SubSector>,
    pub nodes: Vec<Node>,
    pub things: Vec<MapThing>,
    pub blockmap: BlockMap,
    reject: Vec<u8>,
    start_node: u32,
}

impl MapData {
    pub fn new(raw: RawMapData) -> Result<MapData, WorldError> {
        if raw.sectors.is_empty() || raw.linedefs.is_empty() {
            return Err(WorldError::EmptyMap);
        }

        let vert = |i: usize| -> Result<Vec2, WorldError> {
            raw.vertices
                .get(i)
                .copied()
                .ok_or(WorldError::BadMapReference {
                    kind: "vertex",
                    index: i,
                    limit: raw.vertices.len(),
                })
        };
        let check = |kind: &'static str, i: usize, limit: usize| -> Result<(), WorldError> {
            if i >= limit {
                return Err(WorldError::BadMapReference { kind, index: i, limit });
            }
            Ok(())
        };

        let mut sectors: Vec<Sector> = raw
            .sectors
            .iter()
            .map(|s| Sector {
                floorheight: Fixed::from_int(s.floorheight),
                ceilingheight: Fixed::from_int(s.ceilingheight),
                sky_ceiling: s.sky_ceiling,
                lightlevel: s.lightlevel,
                special: s.special,
                tag: s.tag,
                soundtraversed: 0,
                sound_target: None,
                blockbox: [0; 4],
                validcount: 0,
                thing_list: Vec::new(),
                specialdata: None,
                lines: Vec::new(),
            })
            .collect();

        let mut sidedefs = Vec::with_capacity(raw.sidedefs.len());
        for s in &raw.sidedefs {
            check("sidedef sector", s.sector, sectors.len())?;
            sidedefs.push(SideDef {
                toptexture: s.toptexture,
                bottomtexture: s.bottomtexture,
                midtexture: s.midtexture,
                sector: s.sector,
            });
        }

        let mut linedefs = Vec::with_capacity(raw.linedefs.len());
        for (num, l) in raw.linedefs.iter().enumerate() {
            let v1 = vert(l.v1)?;
            let v2 = vert(l.v2)?;
            check("linedef front side", l.front_sidedef, sidedefs.len())?;
            if let Some(back) = l.back_sidedef {
                check("linedef back side", back, sidedefs.len())?;
            }
            let delta = v2 - v1;
            let slopetype = if delta.x == Fixed::ZERO {
                SlopeType::Vertical
            } else if delta.y == Fixed::ZERO {
                SlopeType::Horizontal
            } else if (delta.y.to_bits() ^ delta.x.to_bits()) >= 0 {
                SlopeType::Positive
            } else {
                SlopeType::Negative
            };
            let frontsector = sidedefs[l.front_sidedef].sector;
            let backsector = l.back_sidedef.map(|b| sidedefs[b].sector);

            sectors[frontsector].lines.push(num);
            if let Some(back) = backsector {
                if back != frontsector {
                    sectors[back].lines.push(num);
                }
            }

            let mut flags = l.flags;
            if l.back_sidedef.is_some() {
                flags |= LineDefFlags::TwoSided as u32;
            }

            linedefs.push(LineDef {
                v1,
                v2,
                delta,
                flags,
                special: l.special,
                tag: l.tag,
                bbox: BBox::new(v1, v2),
                slopetype,
                front_sidedef: l.front_sidedef,
                back_sidedef: l.back_sidedef,
                frontsector,
                backsector,
                validcount: 0,
            });
        }

        let mut segments = Vec::with_capacity(raw.segments.len());
        for s in &raw.segments {
            check("segment linedef", s.linedef, linedefs.len())?;
            let line = &linedefs[s.linedef];
            let (frontsector, backsector) = if s.side == 0 {
                (line.frontsector, line.backsector)
            } else {
                (
                    line.backsector.ok_or(WorldError::BadMapReference {
                        kind: "segment back side",
                        index: s.linedef,
                        limit: linedefs.len(),
                    })?,
                    Some(line.frontsector),
                )
            };
            segments.push(Segment {
                v1: vert(s.v1)?,
                v2: vert(s.v2)?,
                linedef: s.linedef,
                side: s.side,
                frontsector,
                backsector,
            });
        }

        let mut subsectors = Vec::with_capacity(raw.subsectors.len());
        for ss in &raw.subsectors {
            let start = ss.start_seg as usize;
            let end = start + ss.seg_count as usize;
            check("subsector segs", end.saturating_sub(1), segments.len())?;
            if ss.seg_count == 0 {
                return Err(WorldError::BadMapReference {
                    kind: "subsector segs",
                    index: start,
                    limit: segments.len(),
                });
            }
            subsectors.push(SubSector {
                sector: segments[start].frontsector,
                start_seg: ss.start_seg,
                seg_count: ss.seg_count,
            });
        }

        let nodes: Vec<Node> = raw
            .nodes
            .iter()
            .map(|n| Node {
                xy: n.xy,
                dxy: n.dxy,
                bboxes: n.bboxes,
                children: n.children,
            })
            .collect();
        for n in &nodes {
            for child in n.children {
                if child & IS_SSECTOR_MASK != 0 {
                    check(
                        "node subsector child",
                        (child & !IS_SSECTOR_MASK) as usize,
                        subsectors.len(),
                    )?;
                } else {
                    check("node child", child as usize, nodes.len())?;
                }
            }
        }
        let start_node = if nodes.is_empty() {
            if subsectors.is_empty() {
                return Err(WorldError::EmptyMap);
            }
            IS_SSECTOR_MASK
        } else {
            (nodes.len() - 1) as u32
        };

        let blockmap = build_blockmap(&raw.vertices, &linedefs);
        compute_sector_blockboxes(&mut sectors, &linedefs, &blockmap);

        info!(
            "map: {} sectors, {} lines, {}x{} blockmap",
            sectors.len(),
            linedefs.len(),
            blockmap.width,
            blockmap.height
        );

        Ok(MapData {
            sectors,
            sidedefs,
            linedefs,
            segments,
            subsectors,
            nodes,
            things: raw.things,
            blockmap,
            reject: raw.reject,
            start_node,
        })
    }

    pub const fn start_node(&self) -> u32 {
        self.start_node
    }

    /// Descend the BSP to the subsector containing the point. Always
    /// terminates with a valid index because leaf children were validated.
    pub fn point_in_subsector(&self, v: Vec2) -> usize {
        let mut node_id = self.start_node;
        while node_id & IS_SSECTOR_MASK == 0 {
            let node = &self.nodes[node_id as usize];
            let side = node.point_on_side(v);
            node_id = node.children[side];
        }
        (node_id & !IS_SSECTOR_MASK) as usize
    }

    pub fn sector_at(&self, v: Vec2) -> usize {
        self.subsectors[self.point_in_subsector(v)].sector
    }

    /// True if the reject table says these sectors can never see each other
    pub fn rejected(&self, s1: usize, s2: usize) -> bool {
        if self.reject.is_empty() {
            return false;
        }
        let pnum = s1 * self.sectors.len() + s2;
        let byte = pnum >> 3;
        if byte >= self.reject.len() {
            return false;
        }
        self.reject[byte] & (1 << (pnum & 7)) != 0
    }
}

fn build_blockmap(vertices: &[Vec2], linedefs: &[LineDef]) -> BlockMap {
    let mut bounds = BBox::inverted();
    for v in vertices {
        bounds.add(*v);
    }
    // Pad so things near the edge still land in a cell
    let pad = MAXRADIUS + Fixed::from_int(MAPBLOCKUNITS);
    let origin = Vec2::new(bounds.left - pad, bounds.bottom - pad);
    let width = ((bounds.right + pad - origin.x).to_bits() >> MAPBLOCKSHIFT) + 1;
    let height = ((bounds.top + pad - origin.y).to_bits() >> MAPBLOCKSHIFT) + 1;

    let mut map = BlockMap {
        origin,
        width,
        height,
        line_cells: vec![Vec::new(); (width * height) as usize],
        thing_cells: vec![Vec::new(); (width * height) as usize],
    };

    for (num, line) in linedefs.iter().enumerate() {
        let x1 = map.block_x_raw(line.bbox.left).clamp(0, width - 1);
        let x2 = map.block_x_raw(line.bbox.right).clamp(0, width - 1);
        let y1 = map.block_y_raw(line.bbox.bottom).clamp(0, height - 1);
        let y2 = map.block_y_raw(line.bbox.top).clamp(0, height - 1);
        for by in y1..=y2 {
            for bx in x1..=x2 {
                let cell_box = BBox {
                    left: origin.x + Fixed::from_int(bx * MAPBLOCKUNITS),
                    bottom: origin.y + Fixed::from_int(by * MAPBLOCKUNITS),
                    right: origin.x + Fixed::from_int((bx + 1) * MAPBLOCKUNITS),
                    top: origin.y + Fixed::from_int((by + 1) * MAPBLOCKUNITS),
                };
                if line.box_on_side(&cell_box) == -1 {
                    let cell = (by * width + bx) as usize;
                    map.line_cells[cell].push(num);
                }
            }
        }
    }
    map
}

fn compute_sector_blockboxes(sectors: &mut [Sector], linedefs: &[LineDef], map: &BlockMap) {
    for (num, sector) in sectors.iter_mut().enumerate() {
        let mut bounds = BBox::inverted();
        for &line in &sector.lines {
            let line = &linedefs[line];
            if line.frontsector == num || line.backsector == Some(num) {
                bounds.add(line.v1);
                bounds.add(line.v2);
            }
        }
        if sector.lines.is_empty() {
            continue;
        }
        // Expand by the largest thing radius so height changes re-check
        // everything that could overlap the sector edge
        sector.blockbox[BOXLEFT] = map.block_x_raw(bounds.left - MAXRADIUS).max(0);
        sector.blockbox[BOXRIGHT] = map.block_x_raw(bounds.right + MAXRADIUS).min(map.width - 1);
        sector.blockbox[BOXBOTTOM] = map.block_y_raw(bounds.bottom - MAXRADIUS).max(0);
        sector.blockbox[BOXTOP] = map.block_y_raw(bounds.top + MAXRADIUS).min(map.height - 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::test_maps::square_map;

    #[test]
    fn rejects_bad_sidedef_sector() {
        let mut raw = square_map();
        raw.sidedefs[0].sector = 99;
        assert!(MapData::new(raw).is_err());
    }

    #[test]
    fn rejects_empty() {
        assert!(MapData::new(RawMapData::default()).is_err());
    }

    #[test]
    fn square_map_builds() {
        let map = MapData::new(square_map()).unwrap();
        assert_eq!(map.sectors.len(), 1);
        assert_eq!(map.sectors[0].lines.len(), 4);
        // Centre of the square resolves to its only sector
        assert_eq!(map.sector_at(Vec2::from_ints(128, 128)), 0);
    }

    #[test]
    fn blockmap_lists_boundary_lines() {
        let map = MapData::new(square_map()).unwrap();
        let bx = map.blockmap.block_x(Fixed::from_int(0)).unwrap();
        let by = map.blockmap.block_y(Fixed::from_int(128)).unwrap();
        let cell = map.blockmap.cell_index(bx, by).unwrap();
        // The west wall passes through this cell
        assert!(!map.blockmap.line_cells[cell].is_empty());
    }
}
