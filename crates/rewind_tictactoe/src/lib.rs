//! Rewindable tic-tac-toe game logic.
//!
//! This library implements a 3x3 tic-tac-toe session whose every move is
//! recorded as an immutable board snapshot. The user can jump back to any
//! prior snapshot and resume play from there; playing from a rewound
//! position discards the abandoned future (undo-then-diverge, not a
//! branching tree).
//!
//! # Architecture
//!
//! - **Rules**: pure win/draw detection over a board snapshot
//! - **Session**: the one stateful owner of history, cursor and move-list
//!   display order
//! - **View**: per-render data derived fresh from the session for a
//!   presentation layer (board, winning cells, status, move descriptions)
//! - **Invariants**: first-class, testable properties of a well-formed
//!   session, checked in debug builds
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameSession, Position, Status};
//!
//! let mut session = GameSession::new();
//! session.play_at(Position::TopLeft);
//! session.play_at(Position::Center);
//!
//! // Rewind to the start and diverge: the two moves above are discarded.
//! session.jump_to(0);
//! session.play_at(Position::BottomRight);
//! assert_eq!(session.history().len(), 2);
//!
//! let view = session.view();
//! assert!(matches!(view.status, Status::NextPlayer(_)));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod position;
mod session;
mod types;
mod view;

// Public rule and invariant modules
pub mod invariants;
pub mod rules;

// Crate-level exports - board and mark types
pub use types::{Board, Mark, Square};

// Crate-level exports - positions and winning lines
pub use position::Position;
pub use rules::win::Line;

// Crate-level exports - session and derived view
pub use session::GameSession;
pub use view::{GameView, MoveEntry, Status};
