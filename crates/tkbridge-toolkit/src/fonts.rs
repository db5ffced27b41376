//! Font table

/// Faces every installation provides, in index order
pub const STANDARD_FONTS: [&str; 16] = [
    "Helvetica",
    "Helvetica Bold",
    "Helvetica Italic",
    "Helvetica Bold Italic",
    "Courier",
    "Courier Bold",
    "Courier Italic",
    "Courier Bold Italic",
    "Times",
    "Times Bold",
    "Times Italic",
    "Times Bold Italic",
    "Symbol",
    "Screen",
    "Screen Bold",
    "Zapf Dingbats",
];

/// Indexed font names
#[derive(Debug, Clone)]
pub struct FontTable {
    names: Vec<String>,
}

impl FontTable {
    /// Table holding the standard faces
    pub fn new() -> Self {
        Self {
            names: STANDARD_FONTS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Add every candidate matching `pattern` that is not already present.
    /// Wildcards (`*`) and dashes are ignored; an empty pattern matches
    /// everything; otherwise matching is a case-insensitive substring test.
    /// Returns the new table size.
    pub fn load<'a>(&mut self, pattern: &str, candidates: impl IntoIterator<Item = &'a str>) -> usize {
        let needle: String = pattern
            .chars()
            .filter(|c| *c != '*' && *c != '-')
            .collect::<String>()
            .to_lowercase();
        for name in candidates {
            if !needle.is_empty() && !name.to_lowercase().contains(&needle) {
                continue;
            }
            if !self.names.iter().any(|known| known == name) {
                self.names.push(name.to_string());
            }
        }
        self.names.len()
    }

    /// Font name by index
    pub fn name(&self, index: i64) -> Option<&str> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.names.get(i))
            .map(String::as_str)
    }

    /// Number of fonts
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for FontTable {
    fn default() -> Self {
        Self::new()
    }
}
