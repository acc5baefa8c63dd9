use crate::moves::move_rules::{MovementRule, DIAGONAL_RAYS};

/// Bishops slide diagonally on their own face. A diagonal has no single
/// continuation across a cube edge, so the walk ends at the face border.
pub const BISHOP_RULE: MovementRule = MovementRule {
    rays: &DIAGONAL_RAYS,
    sliding: true,
};
