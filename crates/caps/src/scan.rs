use std::{fs, path::Path, sync::OnceLock};

use regex::Regex;

use crate::{Cap, CapStrengths};

/// paths containing any of these markers are derived plots or cropped
/// variants, not primary CAP output, and are dropped before pattern matching
const EXCLUDED: [&str; 5] =
    ["MinImag", "MaxImag", "MinReal", "MaxReal", "cropped"];

static PATTERN: OnceLock<Regex> = OnceLock::new();

/// the strength pair is encoded in Fortran D-exponent notation, e.g.
/// `zH_Fullc_Fullc_eval1.0D-02-2.0D-03`
fn pattern() -> &'static Regex {
    PATTERN.get_or_init(|| {
        Regex::new(
            r"zH_Fullc_Fullc_eval([-+]?\d*\.\d+D[-+]?\d+)-([-+]?\d*\.\d+D[-+]?\d+)",
        )
        .unwrap()
    })
}

/// extract the CAP strength pair encoded in `path`. excluded, non-matching,
/// and non-parsing paths all yield None so that one bad filename never
/// aborts scanning a run
pub fn parse_path(path: &str) -> Option<Cap> {
    let path = path.trim();
    if EXCLUDED.iter().any(|s| path.contains(s)) {
        return None;
    }
    let m = pattern().captures(path)?;
    let number = |s: &str| s.replace('D', "e").parse::<f64>().ok();
    Some(Cap::new(number(&m[1])?, number(&m[2])?))
}

/// Collect the CAP strengths computed for each symmetry in `syms` under the
/// ASTRA run layout `<run_dir>/store/CloseCoupling/<sym>/Full/`. A missing
/// or unreadable per-symmetry directory is logged and skipped; partial
/// results from a long-running computation are still worth reporting.
pub fn scan(run_dir: &Path, syms: &[String]) -> CapStrengths<Cap> {
    let mut found: CapStrengths<Cap> = Default::default();
    for sym in syms {
        let dir =
            run_dir.join("store/CloseCoupling").join(sym).join("Full");
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("skipping {}: {e}", dir.display());
                continue;
            }
        };
        for entry in entries.flatten() {
            if let Some(cap) = parse_path(&entry.path().to_string_lossy()) {
                found.entry(sym.clone()).or_default().push(cap);
            }
        }
    }
    found
}
