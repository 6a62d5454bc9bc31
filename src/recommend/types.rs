/// Outcome of a recommendation pass.
///
/// Either exactly one unvisited book id, or the signal that the session
/// has covered the whole catalog. There is no other shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    /// The smallest-numbered book not present in the recent history.
    Next(u32),
    /// Every book in the catalog appears in the recent history.
    AllVisited,
}
