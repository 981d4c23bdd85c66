use serde::Serialize;

/// Integer pixel translation between two equally sized images.
///
/// Coordinates are the raw peak indices of the correlation surface, so a
/// shift past the half extent shows up as the wrapped positive index;
/// callers that want signed displacements subtract the extent where
/// `dx > w / 2` (likewise for `dy`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Translation {
    pub dx: i32,
    pub dy: i32,
}
