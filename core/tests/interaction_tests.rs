// SPDX-License-Identifier: MIT OR Apache-2.0

use rand::Rng;
use scrabble_core::{
    layout::BoardLayout, InteractionController, Point, PointerButton, PointerEvent, Scene, Size,
    Tile, TileState,
};

const BUTTON: PointerButton = PointerButton::Primary;

fn down(x: f32, y: f32) -> PointerEvent {
    PointerEvent::Down { pos: Point::new(x, y), button: BUTTON }
}

fn drag(x: f32, y: f32) -> PointerEvent {
    PointerEvent::Move { pos: Point::new(x, y), button: BUTTON }
}

fn up(x: f32, y: f32) -> PointerEvent {
    PointerEvent::Up { pos: Point::new(x, y), button: BUTTON }
}

#[test]
fn overlapping_tiles_are_all_grabbed_and_converge() {
    let size = Size::splat(36.0);
    let mut tiles = vec![
        Tile::new(Point::new(10.0, 10.0), size, "a"),
        Tile::new(Point::new(30.0, 30.0), size, "b"),
        Tile::new(Point::new(500.0, 500.0), size, "c"),
    ];
    let mut controller = InteractionController::new();

    // P lies inside the first two tiles
    let grabbed = controller.handle(down(40.0, 40.0), &mut tiles);
    assert_eq!(grabbed, 2);
    assert_eq!(TileState::of(&tiles[0]), TileState::Dragging);
    assert_eq!(TileState::of(&tiles[1]), TileState::Dragging);
    assert_eq!(TileState::of(&tiles[2]), TileState::Idle);

    let q = Point::new(300.0, 250.0);
    assert_eq!(controller.handle(PointerEvent::Move { pos: q, button: BUTTON }, &mut tiles), 2);
    assert_eq!(tiles[0].center(), q);
    assert_eq!(tiles[1].center(), q);

    // release somewhere else: no snapping, no extra move
    assert_eq!(controller.handle(up(700.0, 20.0), &mut tiles), 2);
    assert!(tiles.iter().all(|t| !t.is_selected()));
    assert_eq!(tiles[0].center(), q);
    assert_eq!(tiles[1].center(), q);
    assert_eq!(tiles[2].bounds().min, Point::new(500.0, 500.0));
}

#[test]
fn release_deselects_every_tile() {
    let size = Size::splat(36.0);
    let mut tiles = vec![
        Tile::new(Point::new(0.0, 0.0), size, "x"),
        Tile::new(Point::new(100.0, 0.0), size, "y"),
    ];
    tiles[1].select();
    let mut controller = InteractionController::new();

    controller.handle(down(10.0, 10.0), &mut tiles);
    controller.handle(up(900.0, 900.0), &mut tiles);

    assert!(tiles.iter().all(|t| TileState::of(t) == TileState::Idle));
}

#[test]
fn idle_tiles_never_move() {
    let mut rng = rand::thread_rng();
    let layout = BoardLayout::default();
    let mut scene = Scene::with_demo_tile(&layout, "c").unwrap();
    let start = scene.tiles()[0].bounds();

    for _ in 0..500 {
        let x = rng.gen_range(-100.0..1000.0);
        let y = rng.gen_range(-100.0..700.0);
        let moved = scene.handle(drag(x, y));

        assert_eq!(moved, 0);
        assert_eq!(scene.tiles()[0].bounds(), start);
    }
}

#[test]
fn moves_after_release_are_ignored() {
    let mut scene = Scene::with_demo_tile(&BoardLayout::default(), "c").unwrap();

    scene.handle(down(20.0, 20.0));
    scene.handle(drag(200.0, 200.0));
    scene.handle(up(200.0, 200.0));
    scene.handle(drag(400.0, 400.0));

    assert_eq!(scene.tiles()[0].center(), Point::new(200.0, 200.0));
}

#[test]
fn tile_can_be_dropped_anywhere_over_the_board() {
    let layout = BoardLayout::default();
    let mut scene = Scene::with_demo_tile(&layout, "c").unwrap();

    // drop slightly off a cell center: the tile stays put, it does not snap
    let target = scene.board().cell(7, 7).unwrap().center();
    let off_center = Point::new(target.x + 5.0, target.y - 7.0);

    scene.handle(down(20.0, 20.0));
    scene.handle(PointerEvent::Move { pos: off_center, button: BUTTON });
    scene.handle(PointerEvent::Up { pos: off_center, button: BUTTON });

    assert_eq!(scene.tiles()[0].center(), off_center);
    assert_ne!(scene.tiles()[0].center(), target);
}

#[test]
fn tiles_can_be_regrabbed_after_a_drop() {
    let mut scene = Scene::with_demo_tile(&BoardLayout::default(), "c").unwrap();

    scene.handle(down(20.0, 20.0));
    scene.handle(drag(300.0, 300.0));
    scene.handle(up(300.0, 300.0));

    // the old spot is empty now
    assert_eq!(scene.handle(down(20.0, 20.0)), 0);
    scene.handle(up(20.0, 20.0));

    assert_eq!(scene.handle(down(310.0, 290.0)), 1);
    scene.handle(drag(50.0, 60.0));
    assert_eq!(scene.tiles()[0].center(), Point::new(50.0, 60.0));
}
