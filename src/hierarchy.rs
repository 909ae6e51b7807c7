use std::collections::HashMap;

use tracing::{
    debug,
    warn,
};

use crate::{
    error::HierarchyError,
    Kind,
    MetadataType,
};

// =============================================================================
// ChildOf
// =============================================================================

/// Declares that instances of a metadata type are children of `P`-typed
/// entities.
///
/// The marker carries no behaviour. Its only runtime use is gating
/// [`Hierarchy::register`].
pub trait ChildOf<P>: MetadataType
where
    P: MetadataType,
{
}

// =============================================================================
// Edge
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    pub child: Kind,
    pub parent: Kind,
}

impl Edge {
    #[must_use]
    pub fn of<C, P>() -> Self
    where
        C: ChildOf<P>,
        P: MetadataType,
    {
        Self {
            child: C::kind(),
            parent: P::kind(),
        }
    }
}

// =============================================================================
// Options
// =============================================================================

/// What to do when a type is registered under a second, different parent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Conflict {
    #[default]
    Error,
    Replace,
    Keep,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Options {
    conflict: Conflict,
}

impl Options {
    #[must_use]
    pub const fn create(conflict: Conflict) -> Self {
        Self { conflict }
    }

    #[must_use]
    pub const fn conflict(self) -> Conflict {
        self.conflict
    }
}

// =============================================================================
// Hierarchy
// =============================================================================

/// Registry of declared child -> parent edges between metadata types.
///
/// Each type has at most one parent and the edges never form a cycle.
#[derive(Clone, Debug, Default)]
pub struct Hierarchy {
    options: Options,
    parents: HashMap<Kind, Kind>,
}

// -----------------------------------------------------------------------------
// Hierarchy - Create
// -----------------------------------------------------------------------------

impl Hierarchy {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_options(options: Options) -> Self {
        Self {
            options,
            parents: HashMap::new(),
        }
    }

    #[must_use]
    pub const fn options(&self) -> Options {
        self.options
    }
}

// -----------------------------------------------------------------------------
// Hierarchy - Register
// -----------------------------------------------------------------------------

impl Hierarchy {
    #[tracing::instrument(skip_all, fields(child = C::NAME, parent = P::NAME))]
    pub fn register<C, P>(&mut self) -> Result<&mut Self, HierarchyError>
    where
        C: ChildOf<P>,
        P: MetadataType,
    {
        self.insert(Edge::of::<C, P>())?;

        Ok(self)
    }

    fn insert(&mut self, edge: Edge) -> Result<(), HierarchyError> {
        let Edge { child, parent } = edge;

        if child == parent || self.ancestors(parent).contains(&child) {
            return Err(HierarchyError::Cycle { child, parent });
        }

        match self.parents.get(&child).copied() {
            Some(existing) if existing == parent => {
                debug!("edge already registered");
                Ok(())
            }
            Some(existing) => match self.options.conflict {
                Conflict::Error => Err(HierarchyError::Conflict {
                    child,
                    existing,
                    parent,
                }),
                Conflict::Replace => {
                    warn!(%existing, "replacing registered parent");
                    self.parents.insert(child, parent);
                    Ok(())
                }
                Conflict::Keep => {
                    warn!(%existing, "keeping registered parent");
                    Ok(())
                }
            },
            None => {
                debug!("edge registered");
                self.parents.insert(child, parent);
                Ok(())
            }
        }
    }
}

// -----------------------------------------------------------------------------
// Hierarchy - Query
// -----------------------------------------------------------------------------

impl Hierarchy {
    #[must_use]
    pub fn parent_of(&self, kind: Kind) -> Option<Kind> {
        self.parents.get(&kind).copied()
    }

    #[must_use]
    pub fn parent<C>(&self) -> Option<Kind>
    where
        C: MetadataType,
    {
        self.parent_of(C::kind())
    }

    /// Direct children of `kind`, in [`Kind`] order.
    #[must_use]
    pub fn children_of(&self, kind: Kind) -> Vec<Kind> {
        let mut children = self
            .parents
            .iter()
            .filter(|(_, parent)| **parent == kind)
            .map(|(child, _)| *child)
            .collect::<Vec<_>>();

        children.sort();
        children
    }

    /// Ancestors of `kind`, nearest first.
    #[must_use]
    pub fn ancestors(&self, kind: Kind) -> Vec<Kind> {
        let mut ancestors = Vec::new();
        let mut current = kind;

        while let Some(parent) = self.parent_of(current) {
            ancestors.push(parent);
            current = parent;
        }

        ancestors
    }

    #[must_use]
    pub fn is_child_of<C, P>(&self) -> bool
    where
        C: MetadataType,
        P: MetadataType,
    {
        self.parent::<C>() == Some(P::kind())
    }

    #[must_use]
    pub fn contains(&self, kind: Kind) -> bool {
        self.parents
            .iter()
            .any(|(child, parent)| *child == kind || *parent == kind)
    }

    /// All edges, in [`Kind`] order of the child.
    #[must_use]
    pub fn edges(&self) -> Vec<Edge> {
        let mut edges = self
            .parents
            .iter()
            .map(|(child, parent)| Edge {
                child: *child,
                parent: *parent,
            })
            .collect::<Vec<_>>();

        edges.sort_by_key(|edge| edge.child);
        edges
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }
}

#[cfg(test)]
mod register_tests {
    use super::{
        ChildOf,
        Conflict,
        Hierarchy,
        Options,
    };
    use crate::{
        error::HierarchyError,
        LabelValue,
        Labeled,
        MetadataType,
    };

    macro_rules! record {
        ($name:ident) => {
            record!($name, stringify!($name));
        };
        ($name:ident, $label:expr) => {
            #[allow(dead_code)]
            #[derive(Debug, Default)]
            struct $name;

            impl Labeled for $name {
                const LABELS: &'static [&'static str] = &[];

                fn labeled(&self, _label: &str) -> Option<LabelValue> {
                    None
                }
            }

            impl MetadataType for $name {
                const NAME: &'static str = $label;
            }
        };
    }

    record!(Server);
    record!(Database);
    record!(Login);
    record!(Primary, "Replica");
    record!(Standby, "Replica");

    impl ChildOf<Server> for Database {}
    impl ChildOf<Database> for Server {}
    impl ChildOf<Server> for Login {}
    impl ChildOf<Database> for Login {}
    impl ChildOf<Login> for Login {}
    impl ChildOf<Server> for Primary {}
    impl ChildOf<Server> for Standby {}

    #[test]
    fn register_and_query() {
        let mut hierarchy = Hierarchy::new();

        hierarchy
            .register::<Database, Server>()
            .and_then(|hierarchy| hierarchy.register::<Login, Server>())
            .expect("acyclic");

        assert_eq!(hierarchy.len(), 2);
        assert_eq!(hierarchy.parent::<Database>(), Some(Server::kind()));
        assert_eq!(hierarchy.parent::<Server>(), None);
        assert_eq!(
            hierarchy.children_of(Server::kind()),
            [Database::kind(), Login::kind()]
        );
        assert!(hierarchy.is_child_of::<Login, Server>());
        assert!(!hierarchy.is_child_of::<Login, Database>());
        assert!(hierarchy.contains(Server::kind()));
    }

    #[test]
    fn register_same_edge_twice() {
        let mut hierarchy = Hierarchy::new();

        hierarchy.register::<Database, Server>().expect("acyclic");
        hierarchy.register::<Database, Server>().expect("idempotent");

        assert_eq!(hierarchy.len(), 1);
    }

    #[test]
    fn register_self_cycle() {
        let mut hierarchy = Hierarchy::new();

        assert_eq!(
            hierarchy.register::<Login, Login>().err(),
            Some(HierarchyError::Cycle {
                child: Login::kind(),
                parent: Login::kind(),
            })
        );
        assert!(hierarchy.is_empty());
    }

    #[test]
    fn register_indirect_cycle() {
        let mut hierarchy = Hierarchy::new();

        hierarchy.register::<Database, Server>().expect("acyclic");

        assert!(matches!(
            hierarchy.register::<Server, Database>(),
            Err(HierarchyError::Cycle { .. })
        ));
        assert_eq!(hierarchy.ancestors(Database::kind()), [Server::kind()]);
    }

    #[test]
    fn conflict_error() {
        let mut hierarchy = Hierarchy::new();

        hierarchy.register::<Login, Server>().expect("acyclic");

        assert_eq!(
            hierarchy.register::<Login, Database>().err(),
            Some(HierarchyError::Conflict {
                child: Login::kind(),
                existing: Server::kind(),
                parent: Database::kind(),
            })
        );
        assert_eq!(hierarchy.parent::<Login>(), Some(Server::kind()));
    }

    #[test]
    fn conflict_replace() {
        let mut hierarchy = Hierarchy::with_options(Options::create(Conflict::Replace));

        hierarchy.register::<Login, Server>().expect("acyclic");
        hierarchy.register::<Login, Database>().expect("replaced");

        assert_eq!(hierarchy.parent::<Login>(), Some(Database::kind()));
        assert!(hierarchy.children_of(Server::kind()).is_empty());
    }

    #[test]
    fn conflict_keep() {
        let mut hierarchy = Hierarchy::with_options(Options::create(Conflict::Keep));

        hierarchy.register::<Login, Server>().expect("acyclic");
        hierarchy.register::<Login, Database>().expect("kept");

        assert_eq!(hierarchy.options().conflict(), Conflict::Keep);
        assert_eq!(hierarchy.parent::<Login>(), Some(Server::kind()));
    }

    #[test]
    fn shared_names_order_deterministically() {
        let mut forward = Hierarchy::new();
        let mut backward = Hierarchy::new();

        forward
            .register::<Primary, Server>()
            .and_then(|hierarchy| hierarchy.register::<Standby, Server>())
            .expect("acyclic");
        backward
            .register::<Standby, Server>()
            .and_then(|hierarchy| hierarchy.register::<Primary, Server>())
            .expect("acyclic");

        let children = forward.children_of(Server::kind());

        assert_eq!(children.len(), 2);
        assert_ne!(children[0], children[1]);
        assert_eq!(children, backward.children_of(Server::kind()));
        assert_eq!(forward.edges(), backward.edges());
    }
}
