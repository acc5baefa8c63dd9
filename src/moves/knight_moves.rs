use crate::moves::move_rules::{MovementRule, Ray};

/// Knight jumps. An L-shaped jump can cross two edges at once, so jumps
/// leaving the face are not generated.
pub const KNIGHT_RULE: MovementRule = MovementRule {
    rays: &[
        Ray::Offset(-2, -1),
        Ray::Offset(-2, 1),
        Ray::Offset(-1, -2),
        Ray::Offset(-1, 2),
        Ray::Offset(1, -2),
        Ray::Offset(1, 2),
        Ray::Offset(2, -1),
        Ray::Offset(2, 1),
    ],
    sliding: false,
};
