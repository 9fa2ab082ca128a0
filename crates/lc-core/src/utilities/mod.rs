//! Miscellaneous utilities.

/// Wire date-string parsing helpers.
pub mod data_parsers;
