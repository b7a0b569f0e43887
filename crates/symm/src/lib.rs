//! Representation data for the abelian point groups used by ASTRA
//! close-coupling calculations: generators, irreducible representations,
//! multiplication tables, and dipole components, all as static lookups.

pub use irrep::*;
pub use point_group::*;
use serde::{Deserialize, Serialize};
use std::{error::Error, fmt::Display};

#[cfg(test)]
mod tests;

pub mod irrep;
pub mod point_group;

#[derive(Debug, PartialEq, Eq)]
pub enum SymmetryError {
    /// the label is not one of the selectable point groups
    InvalidGroup(String),
    /// the irrep label is not a member of the queried group
    UnknownIrrep(String),
}

impl Display for SymmetryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SymmetryError::InvalidGroup(s) => {
                write!(f, "invalid symmetry group: {s}")
            }
            SymmetryError::UnknownIrrep(s) => {
                write!(f, "unknown irrep: {s}")
            }
        }
    }
}

impl Error for SymmetryError {}

/// A group generator, named by the Cartesian axes it involves. Every group
/// element can be recovered from these by composition (see
/// [PointGroup::symmetry_elements]).
#[derive(Debug, PartialEq, Eq, Copy, Clone, Serialize, Deserialize)]
pub enum Generator {
    X,
    Y,
    Z,
    Xy,
    Xz,
    Yz,
    Xyz,
}

impl Generator {
    /// the axis letters making up `self`
    pub fn letters(&self) -> &'static str {
        match self {
            Generator::X => "X",
            Generator::Y => "Y",
            Generator::Z => "Z",
            Generator::Xy => "XY",
            Generator::Xz => "XZ",
            Generator::Yz => "YZ",
            Generator::Xyz => "XYZ",
        }
    }
}

impl Display for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.letters())
    }
}
