//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values; two
/// `Money` amounts of 1200.00 are the same amount no matter which invoice
/// they came from. Contrast with [`crate::Entity`], where identity matters.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
