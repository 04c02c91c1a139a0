use waygrid_core::Coord;

/// Manhattan (L1) distance between two coordinates.
///
/// Admissible and consistent for unit-cost 4-directional movement.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> i32 {
    (a.row - b.row).abs() + (a.column - b.column).abs()
}
