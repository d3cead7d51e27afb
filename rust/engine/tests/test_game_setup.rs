use ratongato_engine::engine::Engine;
use ratongato_engine::errors::JoinError;
use ratongato_engine::game::{Status, START_CATS, START_MOUSE};
use ratongato_engine::player::{PlayerId, Role};

#[test]
fn new_game_has_canonical_layout_and_waits_for_mouse() {
    let engine = Engine::default();
    let game = engine.new_game("alice".into());

    assert_eq!(game.cat_positions().to_array(), [0, 2, 4, 6]);
    assert_eq!(game.cat_positions().to_array(), START_CATS);
    assert_eq!(game.mouse_position(), 59);
    assert_eq!(game.mouse_position(), START_MOUSE);
    assert_eq!(game.turn(), Role::Cat);
    assert_eq!(game.status(), Status::Created);
    assert_eq!(game.seats().cat(), &PlayerId::from("alice"));
}

#[test]
fn activate_opens_game_without_touching_pieces() {
    let engine = Engine::default();
    let created = engine.new_game("alice".into());
    let active = engine.activate(&created, "bob".into()).expect("activate ok");

    assert_eq!(active.status(), Status::Active);
    assert_eq!(active.cat_positions(), created.cat_positions());
    assert_eq!(active.mouse_position(), created.mouse_position());
    assert_eq!(active.turn(), Role::Cat);
    // the input state is a value and stays as it was
    assert_eq!(created.status(), Status::Created);
}

#[test]
fn activate_twice_fails() {
    let engine = Engine::default();
    let game = engine.new_game("alice".into());
    let game = engine.activate(&game, "bob".into()).unwrap();
    match engine.activate(&game, "carol".into()) {
        Err(JoinError::NotJoinable { status }) => assert_eq!(status, Status::Active),
        other => panic!("expected NotJoinable, got {:?}", other),
    }
}
