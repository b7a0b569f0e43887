use astra::{cap_strengths, config::Config, die, render_table};
use clap::{Parser, Subcommand};
use symm::{Irrep, PointGroup};

/// support tools for ASTRA close-coupling runs
#[derive(Parser, Debug)]
#[command(author, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the selectable point groups and their generators
    Groups,

    /// Show the symmetry elements generated by a point group
    Elements {
        /// point group label, e.g. C2v
        group: String,
    },

    /// Multiply two irreps in a point group
    Mult {
        /// point group label, e.g. C2v
        group: String,
        /// first irrep, e.g. B1
        a: String,
        /// second irrep, e.g. B2
        b: String,
    },

    /// Report the CAP strengths found in the configured run directory
    Caps {
        /// config file
        #[arg(short, long, default_value_t = String::from("astra.toml"))]
        config: String,
    },
}

fn parse_group(s: &str) -> PointGroup {
    match s.parse() {
        Ok(pg) => pg,
        Err(e) => die!("{e}"),
    }
}

fn parse_irrep(s: &str) -> Irrep {
    match s.parse() {
        Ok(ir) => ir,
        Err(e) => die!("{e}"),
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    match args.command {
        Command::Groups => {
            for line in PointGroup::catalog() {
                println!("{line}");
            }
        }
        Command::Elements { group } => {
            let pg = parse_group(&group);
            for element in pg.symmetry_elements() {
                println!("{element}");
            }
        }
        Command::Mult { group, a, b } => {
            let pg = parse_group(&group);
            let (a, b) = (parse_irrep(&a), parse_irrep(&b));
            match pg.mult(a, b) {
                Ok(ir) => println!("{a} x {b} = {ir} in {pg}"),
                Err(e) => die!("{e}"),
            }
        }
        Command::Caps { config } => {
            let config = match Config::load(&config) {
                Ok(config) => config,
                Err(e) => die!("{e}"),
            };
            print!("{}", render_table(&cap_strengths(&config)));
        }
    }
}
