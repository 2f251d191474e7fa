//! Alternating mark invariant: recorded moves alternate X, O, X, O, ...

use super::Invariant;
use crate::session::GameSession;
use crate::types::{Mark, Square};

/// Invariant: the marks added along the history alternate.
///
/// The move producing entry n carries X when n is odd and O when n is even;
/// the first move is always X. Together with cursor parity this guarantees
/// the derived turn owner is always consistent with the history.
pub struct AlternatingMarkInvariant;

impl Invariant<GameSession> for AlternatingMarkInvariant {
    fn holds(session: &GameSession) -> bool {
        for (idx, pair) in session.history().windows(2).enumerate() {
            let step = idx + 1;
            let expected = if step % 2 == 1 { Mark::X } else { Mark::O };

            let Some(pos) = pair[1].diff(&pair[0]) else {
                return false;
            };

            if pair[1].get(pos) != Square::Occupied(expected) {
                return false;
            }
        }

        true
    }

    fn description() -> &'static str {
        "Recorded moves alternate marks, starting with X"
    }
}
