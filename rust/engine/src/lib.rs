//! # ratongato-engine: Cats vs. Mouse Rule Engine
//!
//! A pure, synchronous rule engine for the asymmetric "cats vs. mouse" board
//! game played on the 32 dark squares of an 8x8 checkerboard. Four cats start
//! on row 0 and may only advance; the single mouse starts on row 7 and may step
//! in any diagonal direction. The game ends when the mouse cannot move.
//!
//! The engine knows nothing about storage, sessions or transport. A host
//! creates a game, activates it when the second player arrives, and then calls
//! [`engine::Engine::apply_move`] once per move attempt.
//!
//! ## Core Modules
//!
//! - [`board`] - Static topology: playable cells and diagonal neighbors
//! - [`game`] - Game state, status lifecycle and cat position set
//! - [`player`] - Roles, player identities and seat assignment
//! - [`rules`] - Move validation, legal move generation and the trap rule
//! - [`engine`] - State transitions: create, activate, apply move
//! - [`errors`] - Rejection reasons and construction errors
//!
//! ## Quick Start
//!
//! ```rust
//! use ratongato_engine::engine::Engine;
//! use ratongato_engine::errors::RejectionReason;
//! use ratongato_engine::player::Role;
//!
//! let engine = Engine::default();
//! let game = engine.new_game("alice".into());
//! let game = engine.activate(&game, "bob".into()).unwrap();
//!
//! // Cats only move downward
//! let next = engine.apply_move(&game, Role::Cat, 2, 11).unwrap();
//! assert_eq!(next.turn(), Role::Mouse);
//!
//! // A rejected move leaves the state untouched
//! let err = engine.apply_move(&next, Role::Cat, 4, 13).unwrap_err();
//! assert_eq!(err, RejectionReason::NotYourTurn);
//! ```

pub mod board;
pub mod engine;
pub mod errors;
pub mod game;
pub mod player;
pub mod rules;
