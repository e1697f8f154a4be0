//! Sparse directed travel-time index.

use std::collections::HashMap;

use crate::models::Connection;

/// Travel-time lookup between location ids over a directed network.
///
/// Built once from a sequence of [`Connection`]s and read-only afterwards,
/// so an index can be shared freely across concurrent selection calls.
/// Lookups are directional exact matches on a single edge; there is no
/// path search across multiple connections.
///
/// When the input contains duplicate edges for the same ordered pair, the
/// first connection in load order wins.
///
/// # Examples
///
/// ```
/// use u_dispatch::distance::TravelTimes;
/// use u_dispatch::models::Connection;
///
/// let travel = TravelTimes::from_connections(vec![
///     Connection::new("A", "B", 10),
///     Connection::new("B", "C", 25),
/// ]);
/// assert_eq!(travel.time_between("A", "B"), Some(10));
/// assert_eq!(travel.time_between("B", "A"), None);
/// assert_eq!(travel.time_between("A", "C"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TravelTimes {
    minutes: HashMap<String, HashMap<String, u32>>,
    len: usize,
}

impl TravelTimes {
    /// Builds an index from connections in load order.
    pub fn from_connections<I>(connections: I) -> Self
    where
        I: IntoIterator<Item = Connection>,
    {
        let mut minutes: HashMap<String, HashMap<String, u32>> = HashMap::new();
        let mut len = 0;
        for connection in connections {
            let destinations = minutes.entry(connection.origin().to_string()).or_default();
            // First edge per ordered pair wins.
            destinations
                .entry(connection.destination().to_string())
                .or_insert_with(|| {
                    len += 1;
                    connection.minutes()
                });
        }
        Self { minutes, len }
    }

    /// Returns the travel time in minutes from `origin` to `destination`,
    /// or `None` if no such connection exists.
    pub fn time_between(&self, origin: &str, destination: &str) -> Option<u32> {
        self.minutes.get(origin)?.get(destination).copied()
    }

    /// Number of distinct directed edges in the index.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the index holds no connections.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
