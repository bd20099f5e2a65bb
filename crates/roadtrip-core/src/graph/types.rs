use serde::Serialize;

/// Accumulated travel distance in kilometers.
///
/// Edge weights are stored as `u32`; sums along a path are widened to
/// `u64` so long routes cannot overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Distance(u64);

impl Distance {
    pub const ZERO: Distance = Distance(0);

    pub fn new(km: u64) -> Self {
        Distance(km)
    }

    pub fn km(&self) -> u64 {
        self.0
    }
}

impl std::ops::Add<u32> for Distance {
    type Output = Self;

    fn add(self, weight: u32) -> Self {
        Distance(self.0.saturating_add(u64::from(weight)))
    }
}

impl From<u32> for Distance {
    fn from(km: u32) -> Self {
        Distance(u64::from(km))
    }
}

impl std::fmt::Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} km", self.0)
    }
}

/// How a free-form input was matched to a graph key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// Input is exactly a node key
    Exact,
    /// Input contains, or is contained in, a node key
    Substring,
    /// Input is a country code from the alias table
    Alias,
}

/// Outcome of resolving a user-supplied country name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Canonical node key
    pub key: String,
    pub matched_by: MatchKind,
}

/// Distance query result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistanceReport {
    pub from: String,
    pub to: String,
    pub distance_km: Distance,
}

/// Route query result
///
/// `route` is a minimum-hop sequence and may differ from the
/// minimum-distance path reported by a distance query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteReport {
    pub from: String,
    pub to: String,
    pub found: bool,
    pub route: Vec<String>,
    pub hops: usize,
}
