//! Small hand-built maps for the test suite. Real levels come from the
//! caller; these only need to be just big enough to exercise movement,
//! sector actions and sight checks.

use math::{BBox, Vec2};

use crate::level::map_data::{
    RawLineDef, RawMapData, RawNode, RawSector, RawSegment, RawSideDef, RawSubSector,
};
use crate::level::map_defs::{IS_SSECTOR_MASK, MapThing};

fn v(x: i32, y: i32) -> Vec2 {
    Vec2::from_ints(x, y)
}

fn side(sector: usize) -> RawSideDef {
    RawSideDef {
        toptexture: 1,
        bottomtexture: 1,
        midtexture: 1,
        sector,
    }
}

fn wall(v1: usize, v2: usize, front_sidedef: usize) -> RawLineDef {
    RawLineDef {
        v1,
        v2,
        flags: crate::level::map_defs::LineDefFlags::Blocking as u32,
        special: 0,
        tag: 0,
        front_sidedef,
        back_sidedef: None,
    }
}

pub fn player_start(x: i32, y: i32) -> MapThing {
    MapThing {
        pos: v(x, y),
        angle: 0,
        kind: 1,
        options: 7,
    }
}

/// A single 256x256 room with a player start in the middle. One subsector,
/// no nodes. Walls run anticlockwise so their fronts face inward.
pub fn square_map() -> RawMapData {
    RawMapData {
        vertices: vec![v(0, 0), v(256, 0), v(256, 256), v(0, 256)],
        sectors: vec![RawSector::default()],
        sidedefs: vec![side(0), side(0), side(0), side(0)],
        linedefs: vec![wall(0, 1, 0), wall(1, 2, 1), wall(2, 3, 2), wall(3, 0, 3)],
        segments: vec![
            RawSegment { v1: 0, v2: 1, linedef: 0, side: 0 },
            RawSegment { v1: 1, v2: 2, linedef: 1, side: 0 },
            RawSegment { v1: 2, v2: 3, linedef: 2, side: 0 },
            RawSegment { v1: 3, v2: 0, linedef: 3, side: 0 },
        ],
        subsectors: vec![RawSubSector { start_seg: 0, seg_count: 4 }],
        nodes: vec![],
        things: vec![player_start(128, 128)],
        reject: vec![],
    }
}

/// Two 256x256 rooms side by side sharing a two-sided line at x=256, with a
/// single BSP node splitting on it. Sector 0 is the west room, sector 1 the
/// east room. The player starts in the west room. Tests set specials and
/// tags on the returned data as needed.
pub fn two_room_map() -> RawMapData {
    let vertices = vec![
        v(0, 0),    // 0
        v(256, 0),  // 1
        v(512, 0),  // 2
        v(512, 256), // 3
        v(256, 256), // 4
        v(0, 256),  // 5
    ];
    let sidedefs = vec![
        side(0), // 0 west room south wall
        side(0), // 1 west room north wall
        side(0), // 2 west room west wall
        side(1), // 3 east room south wall
        side(1), // 4 east room east wall
        side(1), // 5 east room north wall
        side(0), // 6 shared line, west face
        side(1), // 7 shared line, east face
    ];
    // Front of the shared line faces east, so crossing west-to-east goes
    // back-to-front
    let shared = RawLineDef {
        v1: 1,
        v2: 4,
        flags: 0,
        special: 0,
        tag: 0,
        front_sidedef: 7,
        back_sidedef: Some(6),
    };
    let linedefs = vec![
        wall(0, 1, 0),
        wall(4, 5, 1),
        wall(5, 0, 2),
        wall(1, 2, 3),
        wall(2, 3, 4),
        wall(3, 4, 5),
        shared,
    ];
    let segments = vec![
        // West room (subsector 0)
        RawSegment { v1: 0, v2: 1, linedef: 0, side: 0 },
        RawSegment { v1: 4, v2: 5, linedef: 1, side: 0 },
        RawSegment { v1: 5, v2: 0, linedef: 2, side: 0 },
        RawSegment { v1: 4, v2: 1, linedef: 6, side: 1 },
        // East room (subsector 1)
        RawSegment { v1: 1, v2: 2, linedef: 3, side: 0 },
        RawSegment { v1: 2, v2: 3, linedef: 4, side: 0 },
        RawSegment { v1: 3, v2: 4, linedef: 5, side: 0 },
        RawSegment { v1: 1, v2: 4, linedef: 6, side: 0 },
    ];
    let subsectors = vec![
        RawSubSector { start_seg: 0, seg_count: 4 },
        RawSubSector { start_seg: 4, seg_count: 4 },
    ];
    // Divider at x=256 pointing north: east is front, west is back
    let nodes = vec![RawNode {
        xy: v(256, 0),
        dxy: v(0, 256),
        bboxes: [
            BBox::new(v(256, 0), v(512, 256)),
            BBox::new(v(0, 0), v(256, 256)),
        ],
        children: [1 | IS_SSECTOR_MASK, IS_SSECTOR_MASK],
    }];

    RawMapData {
        vertices,
        sectors: vec![RawSector::default(), RawSector::default()],
        sidedefs,
        linedefs,
        segments,
        subsectors,
        nodes,
        things: vec![player_start(128, 128)],
        reject: vec![],
    }
}
