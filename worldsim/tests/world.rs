//! Whole-world ticks driven through the public API: scripted commands in,
//! sector and thing state out.

use std::sync::mpsc::channel;

use worldsim::defs::{BT_ATTACK, BT_USE, Card};
use worldsim::level::map_defs::MapThing;
use worldsim::level::test_maps::{square_map, two_room_map};
use worldsim::math::{Fixed, Vec2};
use worldsim::{
    LevelOptions, MAXPLAYERS, PlayerCheat, RawMapData, TICRATE, TicCmd, TickResult, World,
    WorldEvent,
};

fn no_cmds() -> [TicCmd; MAXPLAYERS] {
    [TicCmd::new(); MAXPLAYERS]
}

fn single_player() -> [bool; MAXPLAYERS] {
    let mut active = [false; MAXPLAYERS];
    active[0] = true;
    active
}

fn world_from(raw: RawMapData) -> World {
    let (tx, _rx) = channel();
    World::new(LevelOptions::default(), raw, single_player(), tx).unwrap()
}

/// Player in the east room facing west, with the west room set up as a
/// manual door sitting closed on the shared line.
fn door_map() -> RawMapData {
    let mut raw = two_room_map();
    raw.sectors[0].ceilingheight = 0;
    raw.linedefs[6].special = 1;
    raw.things[0].pos = Vec2::from_ints(310, 128);
    raw.things[0].angle = 180;
    raw
}

#[test]
fn use_opens_a_door_and_it_closes_again() {
    let mut world = world_from(door_map());

    let mut cmds = no_cmds();
    cmds[0].buttons = BT_USE;
    world.update(cmds);
    cmds[0].buttons = 0;

    // 124 units at 2 per tick, one step taken on the press tick
    for _ in 0..61 {
        world.update(cmds);
    }
    assert_eq!(world.sectors()[0].ceilingheight, Fixed::from_int(124));

    // stays up for 150 tics, then one tick to start down and 62 moving
    for _ in 0..150 {
        world.update(cmds);
    }
    assert_eq!(world.sectors()[0].ceilingheight, Fixed::from_int(124));
    for _ in 0..63 {
        world.update(cmds);
    }
    assert_eq!(world.sectors()[0].ceilingheight, Fixed::ZERO);
}

#[test]
fn switch_texture_pops_back_out_after_buttontime() {
    let mut raw = door_map();
    // tag-addressed door switch instead of a manual door
    raw.linedefs[6].special = 63;
    raw.linedefs[6].tag = 9;
    raw.sectors[0].tag = 9;
    raw.sidedefs[7].bottomtexture = 2;
    let options = LevelOptions {
        switch_textures: vec![2],
        ..Default::default()
    };
    let (tx, _rx) = channel();
    let mut world = World::new(options, raw, single_player(), tx).unwrap();

    let mut cmds = no_cmds();
    cmds[0].buttons = BT_USE;
    world.update(cmds);
    cmds[0].buttons = 0;
    assert_eq!(world.level().map_data.sidedefs[7].bottomtexture, 3);

    for _ in 0..TICRATE - 2 {
        world.update(cmds);
    }
    assert_eq!(world.level().map_data.sidedefs[7].bottomtexture, 3);
    world.update(cmds);
    assert_eq!(world.level().map_data.sidedefs[7].bottomtexture, 2);
}

#[test]
fn exit_switch_completes_the_level() {
    let mut raw = door_map();
    raw.linedefs[6].special = 11;
    raw.sidedefs[7].midtexture = 4;
    let options = LevelOptions {
        switch_textures: vec![4],
        ..Default::default()
    };
    let (tx, _rx) = channel();
    let mut world = World::new(options, raw, single_player(), tx).unwrap();

    let mut cmds = no_cmds();
    assert_eq!(world.update(cmds), TickResult::None);
    cmds[0].buttons = BT_USE;
    assert_eq!(world.update(cmds), TickResult::Completed);
    assert!(!world.secret_exit());
}

#[test]
fn pickups_sharing_a_blockmap_cell_all_collect() {
    let mut raw = square_map();
    raw.things.push(MapThing {
        pos: Vec2::from_ints(150, 132),
        angle: 0,
        kind: 5, // blue keycard
        options: 7,
    });
    raw.things.push(MapThing {
        pos: Vec2::from_ints(158, 136),
        angle: 0,
        kind: 13, // red keycard
        options: 7,
    });
    let mut world = world_from(raw);

    let mut cmds = no_cmds();
    cmds[0].forwardmove = 50;
    for _ in 0..TICRATE as usize {
        world.update(cmds);
    }

    let player = world.player(0);
    assert!(player.cards[Card::Bluecard as usize]);
    assert!(player.cards[Card::Redcard as usize]);
    // only the player is left standing
    assert_eq!(world.things().count(), 1);
}

#[test]
fn walls_stop_a_walking_player() {
    let mut world = world_from(square_map());

    // sprint east from the middle of the room into the wall at x=256
    let mut cmds = no_cmds();
    cmds[0].forwardmove = 50;
    for _ in 0..4 * TICRATE as usize {
        world.update(cmds);
    }

    let player = world.things().next().unwrap();
    assert!(player.xy.x > Fixed::from_int(200));
    assert!(player.xy.x <= Fixed::from_int(240));
    assert_eq!(player.xy.y, Fixed::from_int(128));
}

#[test]
fn cheat_toggles_report_and_latch() {
    let mut world = world_from(door_map());

    assert!(world.do_event(WorldEvent::ToggleGodMode(0)));
    assert!(world.player(0).cheats & PlayerCheat::Godmode as u32 != 0);
    assert!(world.do_event(WorldEvent::ToggleGodMode(0)));
    assert!(world.player(0).cheats & PlayerCheat::Godmode as u32 == 0);

    // slot 1 is not in the game
    assert!(!world.do_event(WorldEvent::ToggleNoclip(1)));

    assert!(world.do_event(WorldEvent::ToggleAutomap));
    assert!(world.automap_active());
}

/// A fixed command script with movement, turning and shooting, on a map
/// with a monster so the AI consumes random numbers too.
fn scripted_run(ticks: usize) -> Vec<(u32, Vec2, Fixed, i32)> {
    let mut raw = two_room_map();
    raw.things.push(MapThing {
        pos: Vec2::from_ints(384, 128),
        angle: 180,
        kind: 3001,
        options: 7,
    });
    let mut world = world_from(raw);

    let mut snapshots = Vec::new();
    for tick in 0..ticks {
        let mut cmds = no_cmds();
        cmds[0].forwardmove = if tick % 3 == 0 { 25 } else { 0 };
        cmds[0].angleturn = if tick % 7 == 0 { 640 } else { 0 };
        if tick % 11 == 0 {
            cmds[0].buttons = BT_ATTACK;
        }
        world.update(cmds);

        for thing in world.things() {
            snapshots.push((world.level_time(), thing.xy, thing.z, thing.health));
        }
    }
    snapshots
}

#[test]
fn identical_seeds_and_commands_replay_identically() {
    let first = scripted_run(4 * TICRATE as usize);
    let second = scripted_run(4 * TICRATE as usize);
    assert_eq!(first, second);
}

#[test]
fn level_time_advances_once_per_update() {
    let mut world = world_from(door_map());
    assert_eq!(world.level_time(), 0);
    for _ in 0..5 {
        world.update(no_cmds());
    }
    assert_eq!(world.level_time(), 5);
}
