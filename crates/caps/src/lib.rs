//! CAP (complex absorbing potential) strengths recovered from ASTRA run
//! directories: filename extraction, display formatting, and regrouping by
//! computed-state symmetry.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

pub use scan::*;

pub mod scan;


/// Mapping from a computed-state symmetry label (e.g. `1A1`, or the
/// synthetic `1ALL`) to the strength records found for it. `T` is either
/// [Cap] for float comparison or a rendered `[String; 2]` pair; the two are
/// never mixed within one grouping call.
pub type CapStrengths<T> = FxHashMap<String, Vec<T>>;

/// One CAP strength as encoded in an output filename: the real and
/// imaginary parts of the absorbing-potential tuning parameter.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cap {
    pub re: f64,
    pub im: f64,
}

impl Cap {
    pub fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// both parts rendered with [fmt_strength]
    pub fn display_pair(&self) -> [String; 2] {
        [fmt_strength(self.re), fmt_strength(self.im)]
    }
}

/// render a strength for display and comparison: the literal `0` for exactly
/// zero, otherwise scientific notation with one digit on either side of the
/// decimal point
pub fn fmt_strength(v: f64) -> String {
    if v == 0.0 {
        String::from("0")
    } else {
        format!("{v:.1e}")
    }
}

/// render every record in `caps` with [fmt_strength], for callers comparing
/// strengths by their canonical display form
pub fn to_display(caps: &CapStrengths<Cap>) -> CapStrengths<[String; 2]> {
    caps.iter()
        .map(|(sym, recs)| {
            (sym.clone(), recs.iter().map(Cap::display_pair).collect())
        })
        .collect()
}

/// Regroup per-symmetry strength records so that a record present (by value
/// equality) in every symmetry's list collapses into a single synthetic
/// `{mult}ALL` bucket, while records missing from at least one other
/// symmetry stay keyed by their own symmetry, first-seen order, without
/// duplicates. An empty input yields just the empty `ALL` bucket; with a
/// single symmetry every record is vacuously shared.
///
/// The membership scans make this quadratic in the total record count,
/// which is fine at the expected scale (tens of records per run).
pub fn group_by_sym<T>(caps: &CapStrengths<T>, mult: char) -> CapStrengths<T>
where
    T: PartialEq + Clone,
{
    let mut all = Vec::new();
    let mut others: CapStrengths<T> = FxHashMap::default();

    for (i_sym, i_recs) in caps {
        for rec in i_recs {
            let mut shared = true;
            for (j_sym, j_recs) in caps {
                if i_sym == j_sym {
                    continue;
                }
                if !j_recs.contains(rec) {
                    shared = false;
                    let bucket = others.entry(i_sym.clone()).or_default();
                    if !bucket.contains(rec) {
                        bucket.push(rec.clone());
                    }
                }
            }
            if shared && !all.contains(rec) {
                all.push(rec.clone());
            }
        }
    }

    let mut grouped = FxHashMap::default();
    grouped.insert(format!("{mult}ALL"), all);
    // per-symmetry buckets win if an input label ever collides with the
    // synthetic key
    grouped.extend(others);
    grouped
}
