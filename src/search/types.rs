/// A catalog entry matched by an exact-term lookup, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchMatch {
    pub book_id: u32,
    pub title: String,
}
