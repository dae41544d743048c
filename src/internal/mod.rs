/// Module that provides the format dispatcher.
pub(crate) mod dispatch;

/// Module that provides functions and types related to the `find_refs` function.
pub(crate) mod find_refs_impl;

/// Module with the handle scanner.
mod handle;

/// Module with the literals of the supported formats.
mod literal;

/// Module with the marker search.
mod marker;

/// Module with the decimal number scanner.
mod numeric;
