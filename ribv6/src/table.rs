use bit_trie::{Key, Trie, TrieAttr, TrieError, Walk};
use ipnet::Ipv6Net;
use serde::Serialize;
use tracing::{debug, warn};

use crate::Route;

/// Keys routes by address and mask length; walking prints each route.
#[derive(Debug, Default, Clone, Copy)]
pub struct RouteAttr;

impl TrieAttr<Route> for RouteAttr {
    fn key<'a>(&self, route: &'a Route) -> Key<'a> {
        route.key()
    }

    fn walk(&self, route: &Route) {
        println!("{}", route);
    }
}

/// What happened to a route offered to the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// No route at the same prefix yet.
    Added,
    /// Replaced a route with a worse metric.
    Replaced { previous: u32 },
    /// A route with an equal or better metric is already installed.
    Skipped { existing: u32 },
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    pub added: usize,
    pub replaced: usize,
    pub skipped: usize,
    pub rejected: usize,
}

pub struct RouteTable {
    routes: Vec<Route>,
    trie: Trie<Route, RouteAttr>,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self {
            routes: Vec::new(),
            trie: Trie::new(RouteAttr),
        }
    }
}

fn prefix_octets(prefix: &Ipv6Net) -> [u8; 16] {
    prefix.addr().octets()
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every route handed to the table, installed or not, in arrival order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Number of installed routes.
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    /// Installs `route` unless a route for the same address and mask length
    /// with an equal or lower metric is already present.
    pub fn add(&mut self, route: Route) -> Result<Verdict, TrieError> {
        self.routes.push(route);

        let existing = match self.trie.search(&route.key()) {
            Ok(node) => node.record().map(Route::metric),
            Err(TrieError::NotFound) => None,
            Err(err) => return Err(err),
        };

        match existing {
            Some(existing) if existing <= route.metric() => {
                debug!(
                    addr = %route.addr(),
                    len = route.mask_len(),
                    metric = route.metric(),
                    existing,
                    "skipping route"
                );
                Ok(Verdict::Skipped { existing })
            }
            Some(previous) => {
                self.trie.insert(route)?;
                debug!(
                    addr = %route.addr(),
                    len = route.mask_len(),
                    metric = route.metric(),
                    previous,
                    "replacing route"
                );
                Ok(Verdict::Replaced { previous })
            }
            None => {
                self.trie.insert(route)?;
                debug!(
                    addr = %route.addr(),
                    len = route.mask_len(),
                    metric = route.metric(),
                    "inserting route"
                );
                Ok(Verdict::Added)
            }
        }
    }

    /// Offers every route to the table in order. Routes with an unusable key
    /// are logged and counted; allocation failure stops the load.
    pub fn load(
        &mut self,
        routes: impl IntoIterator<Item = Route>,
    ) -> Result<LoadSummary, TrieError> {
        let mut summary = LoadSummary::default();
        for route in routes {
            match self.add(route) {
                Ok(Verdict::Added) => summary.added += 1,
                Ok(Verdict::Replaced { .. }) => summary.replaced += 1,
                Ok(Verdict::Skipped { .. }) => summary.skipped += 1,
                Err(err @ TrieError::InvalidKey { .. }) => {
                    warn!(
                        addr = %route.addr(),
                        len = route.mask_len(),
                        metric = route.metric(),
                        "failed to add route: {}",
                        err
                    );
                    summary.rejected += 1;
                }
                Err(err) => return Err(err),
            }
        }
        Ok(summary)
    }

    /// Installed route at exactly `prefix`.
    pub fn lookup(&self, prefix: &Ipv6Net) -> Option<&Route> {
        let octets = prefix_octets(prefix);
        self.trie
            .get(&Key::new(&octets, prefix.prefix_len() as usize))
    }

    /// Installed routes, more specific before less specific.
    pub fn iter(&self) -> Walk<'_, Route> {
        self.trie.walk()
    }

    /// Installed routes at or below `prefix`. Empty unless a route is
    /// installed at exactly `prefix`.
    pub fn subtree(&self, prefix: &Ipv6Net) -> Walk<'_, Route> {
        let octets = prefix_octets(prefix);
        self.trie
            .subtree(&Key::new(&octets, prefix.prefix_len() as usize))
    }

    /// Prints every installed route.
    pub fn show(&self) {
        self.trie.show();
    }

    /// Prints the installed routes at or below `prefix`.
    pub fn subtree_show(&self, prefix: &Ipv6Net) {
        let octets = prefix_octets(prefix);
        self.trie
            .subtree_show(&Key::new(&octets, prefix.prefix_len() as usize));
    }
}

impl<'a> IntoIterator for &'a RouteTable {
    type Item = &'a Route;

    type IntoIter = Walk<'a, Route>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn route(s: &str, metric: u32) -> Route {
        Route::from_prefix(s.parse().unwrap(), metric)
    }

    fn net(s: &str) -> Ipv6Net {
        s.parse().unwrap()
    }

    #[test]
    fn add_policy() {
        let mut table = RouteTable::new();
        assert_eq!(table.add(route("2001:db8::/32", 10)), Ok(Verdict::Added));
        assert_eq!(
            table.add(route("2001:db8::/32", 20)),
            Ok(Verdict::Skipped { existing: 10 })
        );
        assert_eq!(
            table.add(route("2001:db8::/32", 10)),
            Ok(Verdict::Skipped { existing: 10 })
        );
        assert_eq!(
            table.add(route("2001:db8::/32", 5)),
            Ok(Verdict::Replaced { previous: 10 })
        );
        assert_eq!(table.len(), 1);
        assert_eq!(table.routes().len(), 4);
        assert_eq!(
            table.lookup(&net("2001:db8::/32")).map(Route::metric),
            Some(5)
        );
    }

    #[test]
    fn different_lengths_do_not_compete() {
        let mut table = RouteTable::new();
        assert_eq!(table.add(route("2001:db8::/32", 10)), Ok(Verdict::Added));
        assert_eq!(table.add(route("2001:db8::/48", 50)), Ok(Verdict::Added));
        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup(&net("2001:db8::/32")).map(Route::metric), Some(10));
        assert_eq!(table.lookup(&net("2001:db8::/48")).map(Route::metric), Some(50));
        assert!(table.lookup(&net("2001:db8::/40")).is_none());
    }

    #[test]
    fn default_route_rejected() {
        let mut table = RouteTable::new();
        assert_eq!(
            table.add(route("::/0", 1)),
            Err(TrieError::InvalidKey { bits: 0, bytes: 16 })
        );
        let summary = table
            .load(vec![route("::/0", 1), route("2001:db8::/32", 1)])
            .unwrap();
        assert_eq!(
            summary,
            LoadSummary {
                added: 1,
                rejected: 1,
                ..Default::default()
            }
        );
    }

    #[test]
    fn iter_order() {
        let mut table = RouteTable::new();
        table
            .load(vec![
                route("2001:db8::/32", 1),
                route("2001:db8:1::/48", 2),
                route("2001:db8::/48", 3),
                route("fd00::/8", 4),
            ])
            .unwrap();
        let metrics: Vec<u32> = table.iter().map(Route::metric).collect();
        assert_eq!(metrics, vec![3, 2, 1, 4]);

        let metrics: Vec<u32> = table
            .subtree(&net("2001:db8::/32"))
            .map(Route::metric)
            .collect();
        assert_eq!(metrics, vec![3, 2, 1]);
        assert_eq!(table.subtree(&net("2001:db8::/33")).count(), 0);
    }
}
