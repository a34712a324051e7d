//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Projects, milestones and invoices are entities: two records with the same
/// id describe the same thing even if a later fetch changed their fields.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

/// Find an entity by id in a fetched collection.
pub fn find_by_id<'a, E: Entity>(items: &'a [E], id: &E::Id) -> Option<&'a E> {
    items.iter().find(|item| item.id() == id)
}
