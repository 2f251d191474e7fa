//! Single-step invariant: adjacent snapshots differ in exactly one cell.

use super::Invariant;
use crate::position::Position;
use crate::session::GameSession;
use crate::types::Square;

/// Invariant: every snapshot extends its predecessor by one move.
///
/// For each history entry n >= 1, exactly one cell differs from entry n-1,
/// and that cell goes from empty to occupied. Squares are never overwritten
/// or cleared between snapshots.
pub struct SingleStepInvariant;

impl Invariant<GameSession> for SingleStepInvariant {
    fn holds(session: &GameSession) -> bool {
        session.history().windows(2).all(|pair| {
            let (prev, next) = (&pair[0], &pair[1]);

            let mut changed = 0;
            for pos in Position::ALL {
                if prev.get(pos) == next.get(pos) {
                    continue;
                }
                changed += 1;
                let filled = prev.get(pos) == Square::Empty
                    && matches!(next.get(pos), Square::Occupied(_));
                if !filled {
                    return false;
                }
            }

            changed == 1
        })
    }

    fn description() -> &'static str {
        "Adjacent snapshots differ in exactly one cell, empty to occupied"
    }
}
