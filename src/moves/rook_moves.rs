use crate::moves::move_rules::{MovementRule, ORTHOGONAL_RAYS};

/// Rooks slide along the four orthogonal lines, wrapping over face edges.
pub const ROOK_RULE: MovementRule = MovementRule {
    rays: &ORTHOGONAL_RAYS,
    sliding: true,
};
