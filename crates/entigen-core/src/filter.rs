use std::collections::BTreeSet;

/// Ignore-list of table names excluded from generation.
///
/// Matching is exact and case-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableFilter {
    ignored: BTreeSet<String>,
}

impl TableFilter {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut filter = Self::default();
        filter.extend(names);
        filter
    }

    pub fn extend<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignored.extend(
            names
                .into_iter()
                .map(Into::<String>::into)
                .filter(|name| !name.is_empty()),
        );
    }

    pub fn is_ignored(&self, table: &str) -> bool {
        self.ignored.contains(table)
    }
}
