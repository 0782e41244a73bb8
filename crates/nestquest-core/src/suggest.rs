//! Suggestion index — narrows a static place-name list as the user types.
//!
//! Selecting a suggestion is a caller-side action: assign the chosen place
//! to `query.location` verbatim and stop offering suggestions.

/// Case-insensitive substring lookup over a fixed list of place names.
#[derive(Debug, Clone)]
pub struct SuggestionIndex {
    places: Vec<String>,
}

impl SuggestionIndex {
    pub fn new<I, S>(places: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            places: places.into_iter().map(Into::into).collect(),
        }
    }

    /// Every place containing `partial` as a case-insensitive substring, in
    /// original list order.
    ///
    /// An empty `partial` returns nothing: suggestions stay suppressed
    /// until the user has typed at least one character.
    pub fn suggest(&self, partial: &str) -> Vec<String> {
        if partial.is_empty() {
            return Vec::new();
        }
        let needle = partial.to_lowercase();
        self.places
            .iter()
            .filter(|place| place.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// The full place list, in order.
    pub fn places(&self) -> &[String] {
        &self.places
    }
}
