//! # Dependency Tracker
//!
//! A breadth-first reachability engine over an abstract node type. Callers
//! seed entry points, and a [`TrackStrategy`] decides which nodes are in scope
//! and which edges leave each node. Every in-scope node gets exactly one
//! [`TrackedIdentity`], in first-visit order.
//!
//! The engine knows nothing about types. [`TypeTrackStrategy`] plugs it into
//! type metadata; tests drive it over plain string graphs.
//!
//! ```rust
//! use std::collections::HashMap;
//! use typegraph::tracker::{DependencyTracker, TrackStrategy};
//!
//! struct Graph(HashMap<&'static str, Vec<&'static str>>);
//!
//! impl TrackStrategy<&'static str> for Graph {
//!     fn should_track(&self, node: &&'static str) -> bool {
//!         self.0.contains_key(node)
//!     }
//!     fn dependencies_of(&self, node: &&'static str) -> Vec<&'static str> {
//!         self.0.get(node).cloned().unwrap_or_default()
//!     }
//! }
//!
//! let graph = Graph(HashMap::from([("a", vec!["b", "a"]), ("b", vec!["a"])]));
//! let mut tracker = DependencyTracker::new(graph);
//! tracker.add_entry_point("a");
//! let ids = tracker.collect();
//! assert_eq!(ids.len(), 2);
//! ```

mod type_strategy;


pub use type_strategy::{ModuleScope, TypeTrackStrategy};

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;
use std::hash::Hash;

/// Stable integer identity of a tracked node. Assigned once, never reused.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TrackedIdentity(u32);

impl TrackedIdentity {
    pub fn new(value: u32) -> Self {
        TrackedIdentity(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for TrackedIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Scope and edge policy for a node type.
pub trait TrackStrategy<T> {
    /// Whether `node` belongs in the graph at all.
    fn should_track(&self, node: &T) -> bool;

    /// Direct dependencies of `node`, in a deterministic order.
    fn dependencies_of(&self, node: &T) -> Vec<T>;
}

impl<T, S: TrackStrategy<T> + ?Sized> TrackStrategy<T> for &S {
    fn should_track(&self, node: &T) -> bool {
        (**self).should_track(node)
    }

    fn dependencies_of(&self, node: &T) -> Vec<T> {
        (**self).dependencies_of(node)
    }
}

/// Identities assigned by [`DependencyTracker::collect`], in assignment order.
#[derive(Debug, Clone)]
pub struct IdentityMap<T> {
    ids: HashMap<T, TrackedIdentity>,
    order: Vec<T>,
}

impl<T> Default for IdentityMap<T> {
    fn default() -> Self {
        IdentityMap {
            ids: HashMap::new(),
            order: Vec::new(),
        }
    }
}

impl<T: Eq + Hash + Clone> IdentityMap<T> {
    pub fn identity_of(&self, node: &T) -> Option<TrackedIdentity> {
        self.ids.get(node).copied()
    }

    pub fn contains(&self, node: &T) -> bool {
        self.ids.contains_key(node)
    }

    pub fn node(&self, id: TrackedIdentity) -> Option<&T> {
        self.order.get(id.0 as usize)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Nodes paired with their identity, lowest identity first.
    pub fn iter(&self) -> impl Iterator<Item = (TrackedIdentity, &T)> {
        self.order
            .iter()
            .enumerate()
            .map(|(idx, node)| (TrackedIdentity(idx as u32), node))
    }

    fn assign(&mut self, node: T) -> TrackedIdentity {
        let id = TrackedIdentity(self.order.len() as u32);
        self.ids.insert(node.clone(), id);
        self.order.push(node);
        id
    }
}

/// Breadth-first dependency tracker.
///
/// Each candidate is examined at most once: tracked nodes are skipped on
/// re-discovery and out-of-scope nodes are remembered as rejected so the
/// strategy is never asked about them again.
pub struct DependencyTracker<T, S> {
    strategy: S,
    queue: VecDeque<T>,
    seeded: HashSet<T>,
    rejected: HashSet<T>,
    identities: IdentityMap<T>,
}

impl<T, S> DependencyTracker<T, S>
where
    T: Eq + Hash + Clone + fmt::Debug,
    S: TrackStrategy<T>,
{
    pub fn new(strategy: S) -> Self {
        DependencyTracker {
            strategy,
            queue: VecDeque::new(),
            seeded: HashSet::new(),
            rejected: HashSet::new(),
            identities: IdentityMap::default(),
        }
    }

    /// Seed `node`. Adding the same entry point twice has no effect.
    pub fn add_entry_point(&mut self, node: T) {
        if self.seeded.insert(node.clone()) {
            self.queue.push_back(node);
        }
    }

    /// Drain the queue, assigning identities in first-visit order.
    ///
    /// Calling `collect` again after seeding more entry points continues the
    /// numbering where the previous call stopped.
    pub fn collect(&mut self) -> &IdentityMap<T> {
        while let Some(candidate) = self.queue.pop_front() {
            if self.identities.contains(&candidate) || self.rejected.contains(&candidate) {
                continue;
            }
            if !self.strategy.should_track(&candidate) {
                tracing::trace!(node = ?candidate, "out of scope");
                self.rejected.insert(candidate);
                continue;
            }

            let id = self.identities.assign(candidate.clone());
            tracing::trace!(node = ?candidate, %id, "tracked");

            for dep in self.strategy.dependencies_of(&candidate) {
                if !self.identities.contains(&dep) && !self.rejected.contains(&dep) {
                    self.queue.push_back(dep);
                }
            }
        }
        &self.identities
    }

    pub fn identities(&self) -> &IdentityMap<T> {
        &self.identities
    }

    pub fn into_identities(self) -> IdentityMap<T> {
        self.identities
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Number of distinct nodes found out of scope so far.
    pub fn rejected_count(&self) -> usize {
        self.rejected.len()
    }
}
