use crate::moves::move_rules::{MovementRule, Ray};

/// One step in any of the eight directions, same face only.
pub const KING_RULE: MovementRule = MovementRule {
    rays: &[
        Ray::Offset(-1, -1),
        Ray::Offset(-1, 0),
        Ray::Offset(-1, 1),
        Ray::Offset(0, -1),
        Ray::Offset(0, 1),
        Ray::Offset(1, -1),
        Ray::Offset(1, 0),
        Ray::Offset(1, 1),
    ],
    sliding: false,
};
