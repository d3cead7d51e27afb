use ratongato_engine::engine::Engine;
use ratongato_engine::errors::RejectionReason;
use ratongato_engine::game::{GameState, Status};
use ratongato_engine::player::{Role, Seats};

fn started() -> (Engine, GameState) {
    let engine = Engine::default();
    let game = engine.new_game("alice".into());
    let game = engine.activate(&game, "bob".into()).unwrap();
    (engine, game)
}

#[test]
fn moves_before_activation_are_rejected() {
    let engine = Engine::default();
    let game = engine.new_game("alice".into());
    assert_eq!(
        engine.apply_move(&game, Role::Cat, 0, 9),
        Err(RejectionReason::GameNotActive)
    );
}

#[test]
fn cat_corner_wrap_is_not_adjacent() {
    let (engine, game) = started();
    let err = engine.apply_move(&game, Role::Cat, 0, 7).unwrap_err();
    assert_eq!(err, RejectionReason::NotAdjacentDiagonal);
}

#[test]
fn cat_down_right_is_accepted() {
    let (engine, game) = started();
    let next = engine.apply_move(&game, Role::Cat, 0, 9).expect("legal move");
    assert_eq!(next.cat_positions().to_array(), [2, 4, 6, 9]);
    assert_eq!(next.mouse_position(), 59);
    assert_eq!(next.turn(), Role::Mouse);
    assert_eq!(next.status(), Status::Active);
}

#[test]
fn wrong_side_is_not_your_turn_and_state_is_unchanged() {
    let (engine, game) = started();
    let before = game.clone();
    let err = engine.apply_move(&game, Role::Mouse, 59, 50).unwrap_err();
    assert_eq!(err, RejectionReason::NotYourTurn);
    assert_eq!(game, before);
    assert_eq!(game.turn(), Role::Cat);
}

#[test]
fn target_with_cat_is_occupied() {
    let engine = Engine::default();
    let game = GameState::from_layout(
        Seats::with_mouse("alice".into(), "bob".into()),
        [0, 2, 4, 9],
        59,
        Role::Cat,
        Status::Active,
    );
    assert_eq!(
        engine.apply_move(&game, Role::Cat, 0, 9),
        Err(RejectionReason::TargetOccupied)
    );
    assert_eq!(
        engine.apply_move(&game, Role::Cat, 2, 9),
        Err(RejectionReason::TargetOccupied)
    );
}

#[test]
fn target_with_mouse_is_occupied() {
    let engine = Engine::default();
    let game = GameState::from_layout(
        Seats::with_mouse("alice".into(), "bob".into()),
        [0, 2, 4, 6],
        15,
        Role::Cat,
        Status::Active,
    );
    assert_eq!(
        engine.apply_move(&game, Role::Cat, 6, 15),
        Err(RejectionReason::TargetOccupied)
    );
}

#[test]
fn cat_moving_up_is_illegal_direction() {
    let engine = Engine::default();
    let game = GameState::from_layout(
        Seats::with_mouse("alice".into(), "bob".into()),
        [27, 2, 4, 6],
        59,
        Role::Cat,
        Status::Active,
    );
    assert_eq!(
        engine.apply_move(&game, Role::Cat, 27, 18),
        Err(RejectionReason::IllegalDirectionForRole)
    );
    assert_eq!(
        engine.apply_move(&game, Role::Cat, 27, 20),
        Err(RejectionReason::IllegalDirectionForRole)
    );
}

#[test]
fn mouse_may_move_up_and_down() {
    let (engine, game) = started();
    let game = engine.apply_move(&game, Role::Cat, 0, 9).unwrap();
    let game = engine.apply_move(&game, Role::Mouse, 59, 50).unwrap();
    let game = engine.apply_move(&game, Role::Cat, 2, 11).unwrap();
    let game = engine.apply_move(&game, Role::Mouse, 50, 59).unwrap();
    assert_eq!(game.mouse_position(), 59);
    assert_eq!(game.turn(), Role::Cat);
}

#[test]
fn malformed_cells_are_rejected() {
    let (engine, game) = started();
    for (origin, target) in [(0, 64), (64, 9), (255, 0), (1, 10)] {
        assert_eq!(
            engine.apply_move(&game, Role::Cat, origin, target),
            Err(RejectionReason::OffBoardOrUnplayableCell),
            "{} -> {}",
            origin,
            target
        );
    }
}

#[test]
fn game_not_active_wins_over_other_reasons() {
    let engine = Engine::default();
    let game = engine.new_game("alice".into());
    assert_eq!(
        engine.apply_move(&game, Role::Mouse, 200, 0),
        Err(RejectionReason::GameNotActive)
    );
}

fn mouse_to_move_at(mouse: u8) -> GameState {
    GameState::from_layout(
        Seats::with_mouse("alice".into(), "bob".into()),
        [0, 2, 4, 6],
        mouse,
        Role::Mouse,
        Status::Active,
    )
}

#[test]
fn mouse_on_left_edge_cannot_wrap_to_previous_row() {
    let engine = Engine::default();
    let game = mouse_to_move_at(16);
    for target in [7, 23] {
        assert_eq!(
            engine.apply_move(&game, Role::Mouse, 16, target),
            Err(RejectionReason::NotAdjacentDiagonal),
            "16 -> {}",
            target
        );
    }
    let next = engine.apply_move(&game, Role::Mouse, 16, 25).expect("legal move");
    assert_eq!(next.mouse_position(), 25);
}

#[test]
fn mouse_on_right_edge_cannot_wrap_to_next_row() {
    let engine = Engine::default();
    let game = mouse_to_move_at(47);
    for target in [40, 56] {
        assert_eq!(
            engine.apply_move(&game, Role::Mouse, 47, target),
            Err(RejectionReason::NotAdjacentDiagonal),
            "47 -> {}",
            target
        );
    }
    let next = engine.apply_move(&game, Role::Mouse, 47, 38).expect("legal move");
    assert_eq!(next.mouse_position(), 38);
    assert_eq!(next.turn(), Role::Cat);
}
