//! Symbol tables with an explicit collision policy.

use indexmap::IndexMap;

/// Two distinct keys that normalized to the same member name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolCollision {
    /// The shared member name
    pub symbol: String,
    /// Key whose entry was replaced
    pub previous: String,
    /// Key whose entry replaced it
    pub replacement: String,
}

/// Insertion-ordered map from member name to entry.
///
/// Policy: last write wins. Re-inserting a symbol replaces the entry in place,
/// so the member keeps the position of its first occurrence (the same order a
/// JavaScript object literal would end up with). Each replacement by a
/// different source key is recorded as a [`SymbolCollision`].
#[derive(Debug, Clone)]
pub struct SymbolTable<V> {
    entries: IndexMap<String, (String, V)>,
    collisions: Vec<SymbolCollision>,
}

impl<V> Default for SymbolTable<V> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
            collisions: Vec::new(),
        }
    }
}

impl<V> SymbolTable<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `value` under `symbol`, recording which `source` key produced it.
    pub fn insert(&mut self, symbol: impl Into<String>, source: impl Into<String>, value: V) {
        let symbol = symbol.into();
        let source = source.into();

        if let Some((previous, _)) = self.entries.get(&symbol)
            && *previous != source
        {
            self.collisions.push(SymbolCollision {
                symbol: symbol.clone(),
                previous: previous.clone(),
                replacement: source.clone(),
            });
        }
        self.entries.insert(symbol, (source, value));
    }

    /// Entries in member order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries
            .iter()
            .map(|(symbol, (_, value))| (symbol.as_str(), value))
    }

    /// Collisions recorded so far, in the order they happened.
    pub fn collisions(&self) -> &[SymbolCollision] {
        &self.collisions
    }
}
