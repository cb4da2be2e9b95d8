//! Miscellaneous math functions for general use

/// Free functions for normalizing angles and comparing directions.
pub mod angular;
