//! Run configuration for the ASTRA support tools

use std::{
    error::Error,
    fmt::Display,
    fs::read_to_string,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use symm::{PointGroup, SymmetryError};

#[cfg(test)]
mod tests;

#[derive(Deserialize, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    /// The ASTRA run directory holding the store/CloseCoupling tree.
    run_directory: PathBuf,

    /// The molecular point group of the run. Case-insensitive; must be one
    /// of the selectable groups (C1, Cs, C2, Ci, C2v, D2, D2h).
    symmetry: String,

    /// The computed-state symmetry labels to scan for CAP strengths, e.g.
    /// ["1A1", "1B1"]. The first character of the first label is taken as
    /// the multiplicity prefix for the shared-strengths bucket.
    computed_syms: Vec<String>,

    /// Compare strengths as raw floats instead of their rendered scientific
    /// form when grouping. Defaults to false: the rendered form is the
    /// canonical one, so near-duplicates differing only below the displayed
    /// precision collapse together.
    as_float: Option<bool>,

    /// Whether to consolidate strengths shared by every symmetry into the
    /// synthetic ALL bucket. Defaults to true.
    group_syms: Option<bool>,
}

#[derive(Debug, PartialEq)]
pub enum ConfigError {
    Read(PathBuf, std::io::ErrorKind),
    Parse(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Read(path, kind) => {
                write!(f, "failed to read {}: {kind}", path.display())
            }
            ConfigError::Parse(e) => write!(f, "failed to parse config: {e}"),
        }
    }
}

impl Error for ConfigError {}

/// Construct a full `Config` with [Config::load] on a TOML file
#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
#[serde(try_from = "RawConfig")]
pub struct Config {
    /// the ASTRA run directory
    pub run_directory: PathBuf,

    /// the point group of the run, validated against the selectable set
    pub symmetry: PointGroup,

    /// computed-state symmetry labels to scan
    pub computed_syms: Vec<String>,

    /// compare strengths as floats rather than rendered strings
    pub as_float: bool,

    /// consolidate fully-shared strengths into the ALL bucket
    pub group_syms: bool,
}

impl TryFrom<RawConfig> for Config {
    type Error = SymmetryError;

    fn try_from(rc: RawConfig) -> Result<Self, Self::Error> {
        Ok(Self {
            run_directory: rc.run_directory,
            symmetry: rc.symmetry.parse()?,
            computed_syms: rc.computed_syms,
            as_float: rc.as_float.unwrap_or(false),
            group_syms: rc.group_syms.unwrap_or(true),
        })
    }
}

impl Config {
    /// load a [Config] from the TOML file at `path`
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = read_to_string(path)
            .map_err(|e| ConfigError::Read(path.to_owned(), e.kind()))?;
        toml::from_str(&contents)
            .map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

impl Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Config {
            run_directory,
            symmetry,
            computed_syms,
            as_float,
            group_syms,
        } = self;
        write!(
            f,
            "
Configuration Options:
run_directory = {}
symmetry = {symmetry}
computed_syms = {computed_syms:?}
as_float = {as_float}
group_syms = {group_syms}
",
            run_directory.display(),
        )
    }
}
