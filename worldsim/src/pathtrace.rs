//! Helpers for traversing the map along a line: gathering the lines and
//! things a trace crosses, in near-to-far order, and measuring the vertical
//! opening of two-sided lines.

use log::error;
use math::{DivLine, Fixed, Vec2, intercept_vector, FRACBITS};

use crate::defs::MAX_INTERCEPTS;
use crate::level::Level;
use crate::level::map_defs::{LineDef, MAPBLOCKSHIFT, Sector};
use crate::thinker::ThinkerId;

pub const PT_ADD_LINES: i32 = 1;
pub const PT_ADD_THINGS: i32 = 2;
pub const PT_EARLY_OUT: i32 = 4;

/// Fixed bits left after converting a world coordinate to block units
const MAPBTOFRAC: i32 = MAPBLOCKSHIFT - FRACBITS;

/// One crossing found along a trace. Exactly one of `line`/`thing` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Intercept {
    /// How far along the trace the crossing is, 0 to 1 in fixed point
    pub frac: Fixed,
    pub line: Option<usize>,
    pub thing: Option<ThinkerId>,
}

/// Functions like `P_LineOpening`
#[derive(Debug, Default, Clone, Copy)]
pub struct PortalZ {
    /// The lowest ceiling of the portal line
    pub top_z: Fixed,
    /// The highest floor of the portal line
    pub bottom_z: Fixed,
    /// Range between `bottom_z` and `top_z`
    pub range: Fixed,
    /// The lowest floor of the portal line
    pub lowest_z: Fixed,
}

impl PortalZ {
    pub fn new(line: &LineDef, sectors: &[Sector]) -> Self {
        let Some(back) = line.backsector else {
            return Self::default();
        };
        let front = &sectors[line.frontsector];
        let back = &sectors[back];

        let top_z = front.ceilingheight.min(back.ceilingheight);
        let (bottom_z, lowest_z) = if front.floorheight > back.floorheight {
            (front.floorheight, back.floorheight)
        } else {
            (back.floorheight, front.floorheight)
        };

        PortalZ {
            top_z,
            bottom_z,
            range: top_z - bottom_z,
            lowest_z,
        }
    }
}

/// Walk the blockmap cells from `origin` to `endpoint`, collect every line
/// and/or thing crossing, then call `trav` on each in order of increasing
/// distance. `trav` returning false stops the walk and returns false.
///
/// Doom function name is `P_PathTraverse`
pub fn path_traverse(
    origin: Vec2,
    endpoint: Vec2,
    flags: i32,
    level: &mut Level,
    mut trav: impl FnMut(&mut Level, &Intercept) -> bool,
) -> bool {
    let earlyout = flags & PT_EARLY_OUT != 0;
    let mut intercepts: Vec<Intercept> = Vec::with_capacity(MAX_INTERCEPTS);
    level.bump_valid_count();

    let bm_origin = level.map_data.blockmap.origin;
    let block_mask = (1 << MAPBLOCKSHIFT) - 1;

    let mut xy1 = origin;
    let xy2 = endpoint;
    // Don't sit exactly on a cell boundary
    if (xy1.x - bm_origin.x).to_bits() & block_mask == 0 {
        xy1.x += Fixed::ONE;
    }
    if (xy1.y - bm_origin.y).to_bits() & block_mask == 0 {
        xy1.y += Fixed::ONE;
    }

    let trace = DivLine::new(xy1, xy2 - xy1);

    let x1 = (xy1.x - bm_origin.x).to_bits();
    let y1 = (xy1.y - bm_origin.y).to_bits();
    let x2 = (xy2.x - bm_origin.x).to_bits();
    let y2 = (xy2.y - bm_origin.y).to_bits();
    let xt1 = x1 >> MAPBLOCKSHIFT;
    let yt1 = y1 >> MAPBLOCKSHIFT;
    let xt2 = x2 >> MAPBLOCKSHIFT;
    let yt2 = y2 >> MAPBLOCKSHIFT;

    let (mapxstep, xpartial, ystep) = if xt2 > xt1 {
        (
            1,
            Fixed::from_bits(Fixed::ONE.to_bits() - ((x1 >> MAPBTOFRAC) & (Fixed::ONE.to_bits() - 1))),
            (xy2.y - xy1.y) / (xy2.x - xy1.x).abs(),
        )
    } else if xt2 < xt1 {
        (
            -1,
            Fixed::from_bits((x1 >> MAPBTOFRAC) & (Fixed::ONE.to_bits() - 1)),
            (xy2.y - xy1.y) / (xy2.x - xy1.x).abs(),
        )
    } else {
        (0, Fixed::ONE, Fixed::from_int(256))
    };
    let mut yintercept = Fixed::from_bits(y1 >> MAPBTOFRAC) + xpartial * ystep;

    let (mapystep, ypartial, xstep) = if yt2 > yt1 {
        (
            1,
            Fixed::from_bits(Fixed::ONE.to_bits() - ((y1 >> MAPBTOFRAC) & (Fixed::ONE.to_bits() - 1))),
            (xy2.x - xy1.x) / (xy2.y - xy1.y).abs(),
        )
    } else if yt2 < yt1 {
        (
            -1,
            Fixed::from_bits((y1 >> MAPBTOFRAC) & (Fixed::ONE.to_bits() - 1)),
            (xy2.x - xy1.x) / (xy2.y - xy1.y).abs(),
        )
    } else {
        (0, Fixed::ONE, Fixed::from_int(256))
    };
    let mut xintercept = Fixed::from_bits(x1 >> MAPBTOFRAC) + ypartial * xstep;

    let mut mapx = xt1;
    let mut mapy = yt1;
    for _ in 0..64 {
        if !add_cell_intercepts(level, mapx, mapy, trace, flags, earlyout, &mut intercepts) {
            return false;
        }
        if mapx == xt2 && mapy == yt2 {
            break;
        }
        if yintercept.to_bits() >> FRACBITS == mapy {
            yintercept += ystep;
            mapx += mapxstep;
        } else if xintercept.to_bits() >> FRACBITS == mapx {
            xintercept += xstep;
            mapy += mapystep;
        }
    }

    intercepts.sort_unstable_by_key(|i| i.frac);

    for intercept in &intercepts {
        if intercept.frac > Fixed::ONE {
            return true;
        }
        if !trav(level, intercept) {
            return false;
        }
    }
    true
}

/// Gather intercepts from one blockmap cell. Returns false on early out.
fn add_cell_intercepts(
    level: &mut Level,
    mapx: i32,
    mapy: i32,
    trace: DivLine,
    flags: i32,
    earlyout: bool,
    intercepts: &mut Vec<Intercept>,
) -> bool {
    let Some(cell) = level.map_data.blockmap.cell_index(mapx, mapy) else {
        return true;
    };

    if flags & PT_ADD_LINES != 0 {
        for i in 0..level.map_data.blockmap.line_cells[cell].len() {
            let num = level.map_data.blockmap.line_cells[cell][i];
            let line = &mut level.map_data.linedefs[num];
            if line.validcount == level.valid_count {
                continue;
            }
            line.validcount = level.valid_count;

            let s1 = trace.point_on_side(line.v1);
            let s2 = trace.point_on_side(line.v2);
            if s1 == s2 {
                continue;
            }
            let frac = intercept_vector(trace, line.as_divline());
            if frac.is_negative() {
                continue;
            }
            if earlyout && frac < Fixed::ONE && line.backsector.is_none() {
                return false;
            }
            push_intercept(
                intercepts,
                Intercept {
                    frac,
                    line: Some(num),
                    thing: None,
                },
            );
        }
    }

    if flags & PT_ADD_THINGS != 0 {
        for i in 0..level.map_data.blockmap.thing_cells[cell].len() {
            let id = level.map_data.blockmap.thing_cells[cell][i];
            let valid_count = level.valid_count;
            let Some(thing) = level.thinkers.mobj_mut(id) else {
                continue;
            };
            if thing.validcount == valid_count {
                continue;
            }
            thing.validcount = valid_count;

            // A diagonal across the thing, leaning against the trace
            // direction so crossing tests catch clips on either side
            let r = thing.radius;
            let positive = (trace.dxy.x.to_bits() ^ trace.dxy.y.to_bits()) > 0;
            let (v1, v2) = if positive {
                (
                    Vec2::new(thing.xy.x - r, thing.xy.y + r),
                    Vec2::new(thing.xy.x + r, thing.xy.y - r),
                )
            } else {
                (
                    Vec2::new(thing.xy.x - r, thing.xy.y - r),
                    Vec2::new(thing.xy.x + r, thing.xy.y + r),
                )
            };
            if trace.point_on_side(v1) == trace.point_on_side(v2) {
                continue;
            }
            let frac = intercept_vector(trace, DivLine::from_points(v1, v2));
            if frac.is_negative() {
                continue;
            }
            push_intercept(
                intercepts,
                Intercept {
                    frac,
                    line: None,
                    thing: Some(id),
                },
            );
        }
    }
    true
}

fn push_intercept(intercepts: &mut Vec<Intercept>, intercept: Intercept) {
    if intercepts.len() >= MAX_INTERCEPTS {
        error!("Intercept overflow, dropping crossing at {:?}", intercept.frac);
        return;
    }
    intercepts.push(intercept);
}
