use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Generator, Irrep, Rep, SymmetryError};

use Generator as G;
use Irrep::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointGroup {
    C1,
    Cs,
    C2,
    Ci,
    C2v,
    C2h,
    D2,
    D2h,
}

// multiplication tables, indexed in the order of [PointGroup::irreps]. each
// table is symmetric with the identity irrep down the diagonal.
//
// the D2 B1 row and the D2h Ag row both had copying errors in the upstream
// GUI tables (a missing entry and a repeated B3u); the rows here are the
// completions forced by closure. see the table tests.

const C1_TABLE: &[&[Irrep]] = &[&[A]];

const CS_TABLE: &[&[Irrep]] = &[&[Ap, App], &[App, Ap]];

const C2_TABLE: &[&[Irrep]] = &[&[A, B], &[B, A]];

const CI_TABLE: &[&[Irrep]] = &[&[Ag, Au], &[Au, Ag]];

const C2V_TABLE: &[&[Irrep]] = &[
    &[A1, B1, B2, A2],
    &[B1, A1, A2, B2],
    &[B2, A2, A1, B1],
    &[A2, B2, B1, A1],
];

const C2H_TABLE: &[&[Irrep]] = &[
    &[Ag, Au, Bu, Bg],
    &[Au, Ag, Bg, Bu],
    &[Bu, Bg, Ag, Au],
    &[Bg, Bu, Au, Ag],
];

const D2_TABLE: &[&[Irrep]] = &[
    &[A, B3, B2, B1],
    &[B3, A, B1, B2],
    &[B2, B1, A, B3],
    &[B1, B2, B3, A],
];

const D2H_TABLE: &[&[Irrep]] = &[
    &[Ag, B3u, B2u, B1g, B1u, B2g, B3g, Au],
    &[B3u, Ag, B1g, B2u, B2g, B1u, Au, B3g],
    &[B2u, B1g, Ag, B3u, B3g, Au, B1u, B2g],
    &[B1g, B2u, B3u, Ag, Au, B3g, B2g, B1u],
    &[B1u, B2g, B3g, Au, Ag, B3u, B2u, B1g],
    &[B2g, B1u, Au, B3g, B3u, Ag, B1g, B2u],
    &[B3g, Au, B1u, B2g, B2u, B1g, Ag, B3u],
    &[Au, B3g, B2g, B1u, B1g, B2u, B3u, Ag],
];

impl PointGroup {
    /// the groups selectable by the user. C2h keeps its data below but is
    /// deliberately left out of the active set upstream, so lookups reject
    /// it.
    pub const ACTIVE: [PointGroup; 7] = [
        PointGroup::C1,
        PointGroup::Cs,
        PointGroup::C2,
        PointGroup::Ci,
        PointGroup::C2v,
        PointGroup::D2,
        PointGroup::D2h,
    ];

    pub fn generators(&self) -> &'static [Generator] {
        match self {
            PointGroup::C1 => &[],
            PointGroup::Cs => &[G::Z],
            PointGroup::C2 => &[G::Xy],
            PointGroup::Ci => &[G::Xyz],
            PointGroup::C2v => &[G::X, G::Y],
            PointGroup::C2h => &[G::Z, G::Xy],
            PointGroup::D2 => &[G::Xz, G::Yz],
            PointGroup::D2h => &[G::X, G::Y, G::Z],
        }
    }

    /// the true irreps of `self` in multiplication-table order. the first
    /// entry is the totally-symmetric (identity) irrep
    pub fn irreps(&self) -> &'static [Irrep] {
        match self {
            PointGroup::C1 => &[A],
            PointGroup::Cs => &[Ap, App],
            PointGroup::C2 => &[A, B],
            PointGroup::Ci => &[Ag, Au],
            PointGroup::C2v => &[A1, B1, B2, A2],
            PointGroup::C2h => &[Ag, Au, Bu, Bg],
            PointGroup::D2 => &[A, B3, B2, B1],
            PointGroup::D2h => &[Ag, B3u, B2u, B1g, B1u, B2g, B3g, Au],
        }
    }

    /// the user-facing representation list: the `ALL` sentinel followed by
    /// [Self::irreps]
    pub fn reps(&self) -> Vec<Rep> {
        std::iter::once(Rep::All)
            .chain(self.irreps().iter().copied().map(Rep::Irrep))
            .collect()
    }

    pub fn mult_table(&self) -> &'static [&'static [Irrep]] {
        match self {
            PointGroup::C1 => C1_TABLE,
            PointGroup::Cs => CS_TABLE,
            PointGroup::C2 => C2_TABLE,
            PointGroup::Ci => CI_TABLE,
            PointGroup::C2v => C2V_TABLE,
            PointGroup::C2h => C2H_TABLE,
            PointGroup::D2 => D2_TABLE,
            PointGroup::D2h => D2H_TABLE,
        }
    }

    /// irreps of the x, y, and z dipole components
    pub fn dipole(&self) -> [Irrep; 3] {
        match self {
            PointGroup::C1 => [A, A, A],
            PointGroup::Cs => [Ap, Ap, App],
            PointGroup::C2 => [B, B, A],
            PointGroup::Ci => [Au, Au, Au],
            PointGroup::C2v => [B1, B2, A1],
            PointGroup::C2h => [Bu, Bu, Au],
            PointGroup::D2 => [B3, B2, B1],
            PointGroup::D2h => [B3u, B2u, B1u],
        }
    }

    /// compose two irreps under the group's multiplication table. fails if
    /// either irrep is not a member of `self`
    pub fn mult(&self, a: Irrep, b: Irrep) -> Result<Irrep, SymmetryError> {
        let pos = |ir: Irrep| {
            self.irreps()
                .iter()
                .position(|&x| x == ir)
                .ok_or_else(|| SymmetryError::UnknownIrrep(ir.to_string()))
        };
        Ok(self.mult_table()[pos(a)?][pos(b)?])
    }

    /// reconstruct the full set of symmetry elements from the generators:
    /// for every non-empty generator subset, in order of increasing subset
    /// size, compose the subset by canceling any axis letter appearing an
    /// even number of times across it. surviving letters keep their
    /// first-appearance order
    pub fn symmetry_elements(&self) -> Vec<String> {
        let gens = self.generators();
        let mut elements = Vec::new();
        for r in 1..=gens.len() {
            for comb in combinations(gens, r) {
                let joined: String =
                    comb.iter().map(|g| g.letters()).collect();
                let mut element = String::new();
                for c in joined.chars() {
                    if element.contains(c) {
                        continue;
                    }
                    if joined.chars().filter(|&d| d == c).count() % 2 == 1 {
                        element.push(c);
                    }
                }
                elements.push(element);
            }
        }
        elements
    }

    /// one human-readable line per active group, naming its generators
    pub fn catalog() -> Vec<String> {
        Self::ACTIVE
            .iter()
            .map(|g| {
                let gens = g.generators();
                if gens.is_empty() {
                    format!("{g} (no generators)")
                } else {
                    let gens = gens
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(" ");
                    format!("{g} ({gens})")
                }
            })
            .collect()
    }
}

/// all `r`-combinations of `items` in lexicographic index order
fn combinations<T: Copy>(items: &[T], r: usize) -> Vec<Vec<T>> {
    let n = items.len();
    if r == 0 || r > n {
        return Vec::new();
    }
    let mut idx: Vec<usize> = (0..r).collect();
    let mut out = vec![idx.iter().map(|&i| items[i]).collect::<Vec<_>>()];
    loop {
        let mut i = r;
        loop {
            if i == 0 {
                return out;
            }
            i -= 1;
            if idx[i] != i + n - r {
                break;
            }
            if i == 0 {
                return out;
            }
        }
        idx[i] += 1;
        for j in i + 1..r {
            idx[j] = idx[j - 1] + 1;
        }
        out.push(idx.iter().map(|&i| items[i]).collect());
    }
}

impl Display for PointGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            PointGroup::C1 => "C1",
            PointGroup::Cs => "Cs",
            PointGroup::C2 => "C2",
            PointGroup::Ci => "Ci",
            PointGroup::C2v => "C2v",
            PointGroup::C2h => "C2h",
            PointGroup::D2 => "D2",
            PointGroup::D2h => "D2h",
        })
    }
}

impl FromStr for PointGroup {
    type Err = SymmetryError;

    /// case-normalized lookup among the active groups: the first letter is
    /// uppercased and the rest lowercased before matching, so `c2v`, `C2v`,
    /// and `C2V` all name the same group. `C2h` is rejected even though its
    /// data is defined
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let norm = match chars.next() {
            Some(c) => {
                c.to_uppercase().collect::<String>()
                    + &chars.as_str().to_lowercase()
            }
            None => String::new(),
        };
        Self::ACTIVE
            .iter()
            .copied()
            .find(|g| g.to_string() == norm)
            .ok_or_else(|| SymmetryError::InvalidGroup(s.to_owned()))
    }
}
