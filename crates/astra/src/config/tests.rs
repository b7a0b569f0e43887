use super::*;

#[test]
fn config() {
    let got = Config::load("testfiles/test.toml").unwrap();
    let want = Config {
        run_directory: PathBuf::from("/home/astra/runs/n2"),
        symmetry: PointGroup::C2v,
        computed_syms: vec!["1A1".to_string(), "1B1".to_string()],
        as_float: false,
        group_syms: true,
    };
    assert_eq!(got, want);
}

#[test]
fn disabled_group_is_rejected() {
    let got = toml::from_str::<Config>(
        r#"
run_directory = "/tmp/run"
symmetry = "C2h"
computed_syms = ["1Ag"]
"#,
    );
    assert!(got.is_err());
}

#[test]
fn unknown_fields_are_rejected() {
    let got = toml::from_str::<Config>(
        r#"
run_directory = "/tmp/run"
symmetry = "C1"
computed_syms = []
job_limit = 128
"#,
    );
    assert!(got.is_err());
}

#[test]
fn missing_file() {
    assert!(matches!(
        Config::load("testfiles/nonexistent.toml"),
        Err(ConfigError::Read(..))
    ));
}
