//! Support tools for ASTRA close-coupling runs: point-group lookups and
//! CAP-strength reporting over a run directory.

use std::fmt::Write;

use caps::CapStrengths;

pub mod config;

use config::Config;

#[cfg(test)]
mod tests;

/// print a message to stderr and exit the process. for unrecoverable user
/// errors in the binary only
#[macro_export]
macro_rules! die {
    ($($t:tt)*) => {{
        eprintln!($($t)*);
        std::process::exit(1);
    }};
}

/// Collect the CAP strengths for `config`'s run directory and render them
/// for display, grouped by symmetry when `config.group_syms` is set. With
/// `as_float` the grouping compares raw floats before rendering; otherwise
/// it compares the rendered form, which is also what the output shows.
pub fn cap_strengths(config: &Config) -> CapStrengths<[String; 2]> {
    let found = caps::scan(&config.run_directory, &config.computed_syms);
    log::debug!("found strengths for {} symmetries", found.len());

    if !config.group_syms {
        return caps::to_display(&found);
    }

    let Some(mult) =
        config.computed_syms.first().and_then(|s| s.chars().next())
    else {
        return Default::default();
    };

    if config.as_float {
        caps::to_display(&caps::group_by_sym(&found, mult))
    } else {
        caps::group_by_sym(&caps::to_display(&found), mult)
    }
}

/// render the per-symmetry strength table with the shared ALL bucket first
pub fn render_table(table: &CapStrengths<[String; 2]>) -> String {
    let mut keys: Vec<_> = table.keys().collect();
    keys.sort();
    keys.sort_by_key(|k| !k.ends_with("ALL"));

    let mut out = String::new();
    for key in keys {
        let _ = writeln!(out, "{key}:");
        for [re, im] in &table[key] {
            let _ = writeln!(out, "    {re:>10} {im:>10}");
        }
    }
    out
}
