/// Opaque external values.
///
/// Defines the `Parcel` type, which lets command modules such as turtle
/// graphics hand objects through the interpreter without the core ever
/// looking inside them.
pub mod parcel;

pub mod core;
