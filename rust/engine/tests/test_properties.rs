use proptest::prelude::*;
use ratongato_engine::board::Board;
use ratongato_engine::engine::Engine;
use ratongato_engine::game::{GameState, Status};
use ratongato_engine::player::Role;
use ratongato_engine::rules::Move;

#[derive(Debug, Clone)]
enum Step {
    /// Pick one of the currently legal moves
    Legal(usize),
    /// Arbitrary, usually illegal, attempt
    Raw(bool, u8, u8),
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        3 => any::<usize>().prop_map(Step::Legal),
        1 => (any::<bool>(), 0u8..70, 0u8..70).prop_map(|(cat, o, t)| Step::Raw(cat, o, t)),
    ]
}

fn status_rank(status: Status) -> u8 {
    match status {
        Status::Created => 0,
        Status::Active => 1,
        Status::Finished => 2,
    }
}

fn placement_holds(state: &GameState) -> bool {
    let board = Board::new();
    let mut cells: Vec<u8> = state.cat_positions().iter().collect();
    cells.push(state.mouse_position());
    let all_playable = cells.iter().all(|&c| board.is_playable(c));
    cells.sort_unstable();
    cells.dedup();
    all_playable && cells.len() == 5
}

proptest! {
    #[test]
    fn random_play_keeps_every_invariant(steps in prop::collection::vec(step(), 0..120)) {
        let engine = Engine::default();
        let game = engine.new_game("alice".into());
        let mut game = engine.activate(&game, "bob".into()).unwrap();

        for step in steps {
            let before = game.clone();
            let legal = engine.legal_moves(&before, before.turn());
            let attempt = match step {
                Step::Legal(i) => {
                    if legal.is_empty() {
                        continue;
                    }
                    legal[i % legal.len()]
                }
                Step::Raw(cat, origin, target) => Move {
                    role: if cat { Role::Cat } else { Role::Mouse },
                    origin,
                    target,
                },
            };

            match engine.apply_move(&before, attempt.role, attempt.origin, attempt.target) {
                Ok(next) => {
                    prop_assert!(legal.contains(&attempt));
                    prop_assert!(placement_holds(&next));
                    prop_assert_eq!(next.turn(), before.turn().opponent());
                    prop_assert!(status_rank(next.status()) >= status_rank(before.status()));
                    prop_assert_eq!(next.move_count(), before.move_count() + 1);
                    if attempt.role == Role::Mouse {
                        // the square the mouse just left is always an exit
                        prop_assert_eq!(next.status(), Status::Active);
                    }
                    game = next;
                }
                Err(_) => {
                    prop_assert!(!legal.contains(&attempt));
                    prop_assert_eq!(&game, &before);
                }
            }
        }

        prop_assert!(placement_holds(&game));
    }

    #[test]
    fn finished_games_reject_everything(steps in prop::collection::vec(any::<usize>(), 0..200)) {
        let engine = Engine::default();
        let game = engine.new_game("alice".into());
        let mut game = engine.activate(&game, "bob".into()).unwrap();

        for i in steps {
            let legal = engine.legal_moves(&game, game.turn());
            if legal.is_empty() {
                break;
            }
            let m = legal[i % legal.len()];
            game = engine.apply_move(&game, m.role, m.origin, m.target).unwrap();
        }

        if game.status() == Status::Finished {
            prop_assert!(engine.is_mouse_trapped(&game));
            for role in [Role::Cat, Role::Mouse] {
                prop_assert!(engine.legal_moves(&game, role).is_empty());
            }
        } else {
            prop_assert!(!engine.is_mouse_trapped(&game));
        }
    }
}
