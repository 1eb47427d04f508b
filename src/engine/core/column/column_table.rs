use indexmap::IndexSet;

use crate::engine::errors::MarshalError;

/// Declared column names of a result, in ordinal order.
#[derive(Clone, Debug, Default)]
pub struct ColumnTable {
    names: IndexSet<String>,
}

impl ColumnTable {
    pub fn new<I, S>(names: I) -> Result<Self, MarshalError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let iter = names.into_iter();
        let mut set = IndexSet::with_capacity(iter.size_hint().0);
        for name in iter {
            let name = name.into();
            if set.contains(&name) {
                return Err(MarshalError::DuplicateColumn(name));
            }
            set.insert(name);
        }
        Ok(Self { names: set })
    }

    /// Case-sensitive exact match.
    pub fn resolve_ordinal(&self, name: &str) -> Result<usize, MarshalError> {
        self.names
            .get_index_of(name)
            .ok_or_else(|| MarshalError::UnknownColumn(name.to_string()))
    }

    pub fn name(&self, ordinal: usize) -> Option<&str> {
        self.names.get_index(ordinal).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.names.iter().enumerate().map(|(i, n)| (i, n.as_str()))
    }
}
