use std::path::PathBuf;

use symm::PointGroup;

use crate::{cap_strengths, config::Config, render_table};

fn write_run(dir: &std::path::Path, sym: &str, names: &[&str]) {
    let full = dir.join("store/CloseCoupling").join(sym).join("Full");
    std::fs::create_dir_all(&full).unwrap();
    for name in names {
        std::fs::File::create(full.join(name)).unwrap();
    }
}

#[test]
fn caps_end_to_end() {
    let tmp = tempfile::tempdir().unwrap();
    write_run(
        tmp.path(),
        "1A1",
        &[
            "zH_Fullc_Fullc_eval1.0D-02-2.0D-03",
            "zH_Fullc_Fullc_eval9.0D-04-0.0D+00",
        ],
    );
    write_run(tmp.path(), "1B1", &["zH_Fullc_Fullc_eval1.0D-02-2.0D-03"]);

    let config = Config {
        run_directory: PathBuf::from(tmp.path()),
        symmetry: PointGroup::C2v,
        computed_syms: vec!["1A1".to_string(), "1B1".to_string()],
        as_float: false,
        group_syms: true,
    };

    let table = cap_strengths(&config);
    assert_eq!(table.len(), 2);
    assert_eq!(
        table["1ALL"],
        vec![["1.0e-2".to_string(), "2.0e-3".to_string()]]
    );
    assert_eq!(
        table["1A1"],
        vec![["9.0e-4".to_string(), "0".to_string()]]
    );

    let rendered = render_table(&table);
    let mut lines = rendered.lines();
    assert_eq!(lines.next(), Some("1ALL:"));
}

#[test]
fn no_computed_syms_yields_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    let config = Config {
        run_directory: PathBuf::from(tmp.path()),
        symmetry: PointGroup::C1,
        computed_syms: vec![],
        as_float: false,
        group_syms: true,
    };
    assert!(cap_strengths(&config).is_empty());
}

#[test]
fn ungrouped_report_keeps_original_keys() {
    let tmp = tempfile::tempdir().unwrap();
    write_run(tmp.path(), "2B2", &["zH_Fullc_Fullc_eval5.0D-03-0.0D+00"]);

    let config = Config {
        run_directory: PathBuf::from(tmp.path()),
        symmetry: PointGroup::C2v,
        computed_syms: vec!["2B2".to_string()],
        as_float: false,
        group_syms: false,
    };

    let table = cap_strengths(&config);
    assert_eq!(
        table["2B2"],
        vec![["5.0e-3".to_string(), "0".to_string()]]
    );
}
