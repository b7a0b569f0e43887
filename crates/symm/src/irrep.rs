use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::SymmetryError;

#[derive(
    Debug, Deserialize, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Serialize,
)]
pub enum Irrep {
    // C1, C2, D2
    A,
    B,
    // Cs - p = prime
    Ap,
    App,
    // C2v
    A1,
    A2,
    B1,
    B2,
    // D2
    B3,
    // Ci, C2h
    Ag,
    Au,
    Bg,
    Bu,
    // D2h
    B1g,
    B2g,
    B3g,
    B1u,
    B2u,
    B3u,
}

impl Display for Irrep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            Irrep::A => "A",
            Irrep::B => "B",
            Irrep::Ap => "A'",
            Irrep::App => "A''",
            Irrep::A1 => "A1",
            Irrep::A2 => "A2",
            Irrep::B1 => "B1",
            Irrep::B2 => "B2",
            Irrep::B3 => "B3",
            Irrep::Ag => "Ag",
            Irrep::Au => "Au",
            Irrep::Bg => "Bg",
            Irrep::Bu => "Bu",
            Irrep::B1g => "B1g",
            Irrep::B2g => "B2g",
            Irrep::B3g => "B3g",
            Irrep::B1u => "B1u",
            Irrep::B2u => "B2u",
            Irrep::B3u => "B3u",
        })
    }
}

impl FromStr for Irrep {
    type Err = SymmetryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" | "a" => Ok(Irrep::A),
            "B" | "b" => Ok(Irrep::B),
            "A'" | "a'" => Ok(Irrep::Ap),
            "A''" | "a''" => Ok(Irrep::App),
            "A1" | "a1" => Ok(Irrep::A1),
            "A2" | "a2" => Ok(Irrep::A2),
            "B1" | "b1" => Ok(Irrep::B1),
            "B2" | "b2" => Ok(Irrep::B2),
            "B3" | "b3" => Ok(Irrep::B3),
            "Ag" | "ag" => Ok(Irrep::Ag),
            "Au" | "au" => Ok(Irrep::Au),
            "Bg" | "bg" => Ok(Irrep::Bg),
            "Bu" | "bu" => Ok(Irrep::Bu),
            "B1g" | "b1g" => Ok(Irrep::B1g),
            "B2g" | "b2g" => Ok(Irrep::B2g),
            "B3g" | "b3g" => Ok(Irrep::B3g),
            "B1u" | "b1u" => Ok(Irrep::B1u),
            "B2u" | "b2u" => Ok(Irrep::B2u),
            "B3u" | "b3u" => Ok(Irrep::B3u),
            _ => Err(SymmetryError::UnknownIrrep(s.to_owned())),
        }
    }
}

/// A representation label as presented to the user: either the synthetic
/// `ALL` sentinel standing for every irrep at once, or a true [Irrep].
/// [crate::PointGroup::reps] always puts the sentinel first.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Serialize, Deserialize)]
pub enum Rep {
    All,
    Irrep(Irrep),
}

impl Display for Rep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rep::All => f.pad("ALL"),
            Rep::Irrep(ir) => ir.fmt(f),
        }
    }
}
