//! Immutable country graph and alias table

use std::collections::BTreeMap;

/// Neighbor -> edge weight in kilometers
pub type Neighbors = BTreeMap<String, u32>;

/// Lookup from short country codes (e.g. `FRN`) to display names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    entries: BTreeMap<String, String>,
}

impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a code. A later insert for the same code replaces the earlier name.
    pub fn insert(&mut self, code: impl Into<String>, name: impl Into<String>) {
        self.entries.insert(code.into(), name.into());
    }

    /// Decode a country code to its display name
    pub fn decode(&self, code: &str) -> Option<&str> {
        self.entries.get(code).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AliasTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = AliasTable::new();
        for (code, name) in iter {
            table.insert(code, name);
        }
        table
    }
}

/// Weighted, undirected graph of countries.
///
/// Built once through [`GraphBuilder`] or [`CountryGraph::from_parts`] and
/// read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct CountryGraph {
    adjacency: BTreeMap<String, Neighbors>,
    aliases: AliasTable,
}

impl CountryGraph {
    /// Take ownership of an already-assembled adjacency map.
    ///
    /// The map is authoritative per direction: no mirror edges are added and
    /// neighbors without a top-level entry are kept as-is. Use
    /// [`CountryGraph::validate`] to list such inconsistencies.
    pub fn from_parts(adjacency: BTreeMap<String, Neighbors>, aliases: AliasTable) -> Self {
        Self { adjacency, aliases }
    }

    pub fn contains(&self, country: &str) -> bool {
        self.adjacency.contains_key(country)
    }

    /// Outgoing edges of a country; `None` for keys with no top-level entry
    pub fn neighbors(&self, country: &str) -> Option<&Neighbors> {
        self.adjacency.get(country)
    }

    pub fn edge_weight(&self, from: &str, to: &str) -> Option<u32> {
        self.adjacency.get(from)?.get(to).copied()
    }

    /// Node keys in sorted order
    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of directed adjacency entries (an undirected border counts twice)
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeMap::len).sum()
    }

    pub(crate) fn adjacency(&self) -> &BTreeMap<String, Neighbors> {
        &self.adjacency
    }
}

/// Assembles a [`CountryGraph`], keeping every edge mirrored.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    adjacency: BTreeMap<String, Neighbors>,
    aliases: AliasTable,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_aliases(aliases: AliasTable) -> Self {
        Self {
            adjacency: BTreeMap::new(),
            aliases,
        }
    }

    pub fn alias(&mut self, code: impl Into<String>, name: impl Into<String>) -> &mut Self {
        self.aliases.insert(code, name);
        self
    }

    /// Register a country, with or without borders
    pub fn add_country(&mut self, country: impl Into<String>) -> &mut Self {
        self.adjacency.entry(country.into()).or_default();
        self
    }

    /// Add an undirected border. Both endpoints become nodes; self-loops are ignored.
    pub fn add_border(&mut self, a: &str, b: &str, km: u32) -> &mut Self {
        self.add_country(a);
        self.add_country(b);
        if a != b {
            self.insert_directed(a, b, km);
            self.insert_directed(b, a, km);
        }
        self
    }

    /// Replace the weight of an existing border in both directions.
    ///
    /// Returns `false` (and changes nothing) when `a` and `b` do not border.
    pub fn set_distance(&mut self, a: &str, b: &str, km: u32) -> bool {
        let borders = self
            .adjacency
            .get(a)
            .is_some_and(|neighbors| neighbors.contains_key(b));
        if !borders {
            return false;
        }
        self.insert_directed(a, b, km);
        self.insert_directed(b, a, km);
        true
    }

    pub fn build(self) -> CountryGraph {
        tracing::debug!(
            nodes = self.adjacency.len(),
            aliases = self.aliases.len(),
            "graph_built"
        );
        CountryGraph {
            adjacency: self.adjacency,
            aliases: self.aliases,
        }
    }

    fn insert_directed(&mut self, from: &str, to: &str, km: u32) {
        self.adjacency
            .entry(from.to_string())
            .or_default()
            .insert(to.to_string(), km);
    }
}
