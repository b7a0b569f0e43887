use test_case::test_case;

use crate::{Generator, Irrep::*, PointGroup, Rep, SymmetryError};

const ALL_GROUPS: [PointGroup; 8] = [
    PointGroup::C1,
    PointGroup::Cs,
    PointGroup::C2,
    PointGroup::Ci,
    PointGroup::C2v,
    PointGroup::C2h,
    PointGroup::D2,
    PointGroup::D2h,
];

#[test_case(PointGroup::C1; "c1")]
#[test_case(PointGroup::Cs; "cs")]
#[test_case(PointGroup::C2; "c2")]
#[test_case(PointGroup::Ci; "ci")]
#[test_case(PointGroup::C2v; "c2v")]
#[test_case(PointGroup::C2h; "c2h")]
#[test_case(PointGroup::D2; "d2")]
#[test_case(PointGroup::D2h; "d2h")]
fn table_is_a_group(pg: PointGroup) {
    let irreps = pg.irreps();
    let table = pg.mult_table();
    let n = irreps.len();
    assert_eq!(table.len(), n);
    for (i, row) in table.iter().enumerate() {
        assert_eq!(row.len(), n, "{pg} row {i} has the wrong length");
        // every row is a permutation of the irreps
        let mut sorted = row.to_vec();
        sorted.sort();
        let mut want = irreps.to_vec();
        want.sort();
        assert_eq!(sorted, want, "{pg} row {i} is not a permutation");
        // identity down the diagonal
        assert_eq!(row[i], irreps[0], "{pg} diagonal {i}");
        // abelian, so the table is symmetric
        for (j, ir) in row.iter().enumerate() {
            assert_eq!(*ir, table[j][i], "{pg} asymmetric at ({i}, {j})");
        }
    }
}

/// the rows that were garbled in the upstream GUI tables: D2's B1 row was
/// truncated before its final entry and D2h's Ag row repeated B3u where
/// closure requires B3g
#[test]
fn corrected_table_entries() {
    assert_eq!(PointGroup::D2.mult(B1, B1), Ok(A));
    assert_eq!(PointGroup::D2h.mult(Ag, B3g), Ok(B3g));
}

#[test_case(PointGroup::C1; "c1")]
#[test_case(PointGroup::Cs; "cs")]
#[test_case(PointGroup::C2; "c2")]
#[test_case(PointGroup::Ci; "ci")]
#[test_case(PointGroup::C2v; "c2v")]
#[test_case(PointGroup::C2h; "c2h")]
#[test_case(PointGroup::D2; "d2")]
#[test_case(PointGroup::D2h; "d2h")]
fn reps_count_matches_generators(pg: PointGroup) {
    let reps = pg.reps();
    assert_eq!(reps[0], Rep::All);
    assert_eq!(reps.len() - 1, 1usize << pg.generators().len());
}

#[test]
fn mult_commutes_with_identity() {
    for pg in ALL_GROUPS {
        let irreps = pg.irreps();
        let e = irreps[0];
        for &a in irreps {
            assert_eq!(pg.mult(e, a), Ok(a));
            assert_eq!(pg.mult(a, e), Ok(a));
            for &b in irreps {
                assert_eq!(pg.mult(a, b), pg.mult(b, a), "{pg} {a} {b}");
            }
        }
    }
}

#[test]
fn mult_rejects_foreign_irreps() {
    assert_eq!(
        PointGroup::C2v.mult(Ag, A1),
        Err(SymmetryError::UnknownIrrep("Ag".to_owned()))
    );
    assert_eq!(
        PointGroup::D2h.mult(Ag, B),
        Err(SymmetryError::UnknownIrrep("B".to_owned()))
    );
}

#[test]
fn lookup_normalizes_case() {
    let want = Ok(PointGroup::C2v);
    assert_eq!("c2v".parse::<PointGroup>(), want);
    assert_eq!("C2v".parse::<PointGroup>(), want);
    assert_eq!("C2V".parse::<PointGroup>(), want);
    assert_eq!("d2h".parse::<PointGroup>(), Ok(PointGroup::D2h));
}

#[test]
fn lookup_rejects_disabled_and_unknown() {
    // C2h has data but is deliberately not selectable
    assert_eq!(
        "C2h".parse::<PointGroup>(),
        Err(SymmetryError::InvalidGroup("C2h".to_owned()))
    );
    assert_eq!(
        "C3v".parse::<PointGroup>(),
        Err(SymmetryError::InvalidGroup("C3v".to_owned()))
    );
    assert!("".parse::<PointGroup>().is_err());
}

#[test_case(PointGroup::C1, &[]; "c1")]
#[test_case(PointGroup::Cs, &["Z"]; "cs")]
#[test_case(PointGroup::C2, &["XY"]; "c2")]
#[test_case(PointGroup::Ci, &["XYZ"]; "ci")]
#[test_case(PointGroup::C2v, &["X", "Y", "XY"]; "c2v")]
#[test_case(PointGroup::C2h, &["Z", "XY", "ZXY"]; "c2h")]
#[test_case(PointGroup::D2, &["XZ", "YZ", "XY"]; "d2")]
#[test_case(
    PointGroup::D2h,
    &["X", "Y", "Z", "XY", "XZ", "YZ", "XYZ"];
    "d2h"
)]
fn symmetry_elements(pg: PointGroup, want: &[&str]) {
    assert_eq!(pg.symmetry_elements(), want);
}

#[test]
fn catalog() {
    assert_eq!(
        PointGroup::catalog(),
        vec![
            "C1 (no generators)",
            "Cs (Z)",
            "C2 (XY)",
            "Ci (XYZ)",
            "C2v (X Y)",
            "D2 (XZ YZ)",
            "D2h (X Y Z)",
        ]
    );
}

#[test]
fn dipole_irreps_belong_to_the_group() {
    for pg in ALL_GROUPS {
        for ir in pg.dipole() {
            assert!(
                pg.irreps().contains(&ir),
                "{pg} dipole component {ir} not in {:?}",
                pg.irreps()
            );
        }
    }
}

#[test]
fn generator_display() {
    assert_eq!(Generator::Xyz.to_string(), "XYZ");
    assert_eq!(format!("{:>4}", Generator::Xy), "  XY");
}
