//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity**: two instances with the same attribute values
/// are the same value. They are immutable; "changing" one means building a new one.
///
/// - **Value Object**: `Text("Chair")` equals any other `Text("Chair")`
/// - **Entity**: two products with the same `EntityId` are the same product, even
///   if their names differ
///
/// The trait requires:
/// - **Clone**: values are copied, not shared
/// - **PartialEq**: values are compared by their attributes
/// - **Debug**: values show up in test failures and logs
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
