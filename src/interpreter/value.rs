/// The runtime value type.
///
/// Defines the `Value` enum with its two kinds of data, integers and booleans,
/// plus the `Undefined` poison value produced by failed operations.
pub mod core;
