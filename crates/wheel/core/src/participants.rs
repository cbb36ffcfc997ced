//! Ordered participant names, one slice each.

/// Ordered list of participant names.
///
/// Order defines slice positions: entry `i` owns the slice starting at
/// `i × slice_angle`. Duplicates are kept; lookups by name resolve to the
/// first occurrence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParticipantList {
    names: Vec<String>,
}

impl ParticipantList {
    /// Build a list from names, dropping entries that are blank.
    ///
    /// Kept entries are stored as given (no trimming).
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names
                .into_iter()
                .map(Into::into)
                .filter(|name| !name.trim().is_empty())
                .collect(),
        }
    }

    /// Parse multi-line text, one name per line.
    pub fn from_text(text: &str) -> Self {
        Self::new(text.lines())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Index of the first entry equal to `name`.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|entry| entry == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Indices of every entry not equal to `name`.
    pub fn indices_excluding<'a>(&'a self, name: &'a str) -> impl Iterator<Item = usize> + 'a {
        self.names
            .iter()
            .enumerate()
            .filter(move |(_, entry)| entry.as_str() != name)
            .map(|(index, _)| index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.names
    }

    /// Render back to the one-name-per-line text form.
    pub fn to_text(&self) -> String {
        self.names.join("\n")
    }
}

impl<S: Into<String>> FromIterator<S> for ParticipantList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
