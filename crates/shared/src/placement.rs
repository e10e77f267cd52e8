//! Fixed placement rules for the cuboids in the scene.

use crate::BoxDimensions;

/// Center of a cuboid in scene coordinates
pub type Position = [f64; 3];

pub const OUTER_POSITION: Position = [0.0, 0.0, 0.0];

/// Offset of the secondary cuboid along -X from the outer cuboid's right face.
const SECONDARY_X_OFFSET: f64 = 5.0;

/// Where the inner cuboid is placed relative to the outer one: flush with
/// the outer cuboid's +X face, entirely below its center plane, centered on Z.
pub fn anchor_inner(inner: &BoxDimensions, outer: &BoxDimensions) -> Position {
    [outer.width / 2.0 - inner.width / 2.0, -inner.height, 0.0]
}

/// Placement of the secondary cuboid. Computed once at startup against the
/// initial inner cuboid.
pub fn secondary_position(
    secondary: &BoxDimensions,
    outer: &BoxDimensions,
    inner: &BoxDimensions,
) -> Position {
    [
        outer.width / 2.0 - secondary.width / 2.0 - SECONDARY_X_OFFSET,
        inner.height + secondary.height / 2.0,
        0.0,
    ]
}
