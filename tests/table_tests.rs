//! Fidelity and structural checks for the marching-cubes lookup tables.
//!
//! The tables are fixed combinatorial data; these tests pin them against the
//! published values and the invariants the extractor relies on for
//! termination.

use intersurf::isosurface::{CORNER_BITS, EDGE_CORNERS, EDGE_TABLE, TRI_TABLE};

#[test]
fn edge_table_pins_published_values() {
    // First and last configurations are empty: all corners on one side.
    assert_eq!(EDGE_TABLE[0], 0x000);
    assert_eq!(EDGE_TABLE[255], 0x000);
    // Single-corner configurations from the published table.
    assert_eq!(EDGE_TABLE[1], 0x109);
    assert_eq!(EDGE_TABLE[2], 0x203);
    assert_eq!(EDGE_TABLE[4], 0x406);
    assert_eq!(EDGE_TABLE[8], 0x80c);
    assert_eq!(EDGE_TABLE[16], 0x190);
    assert_eq!(EDGE_TABLE[128], 0x8c0);
    // A well-known interior row.
    assert_eq!(EDGE_TABLE[0x33], 0xaa);
}

#[test]
fn tri_table_pins_published_values() {
    assert_eq!(&TRI_TABLE[0][..3], &[-1, -1, -1]);
    assert_eq!(&TRI_TABLE[1][..4], &[0, 8, 3, -1]);
    assert_eq!(&TRI_TABLE[2][..4], &[0, 1, 9, -1]);
    assert_eq!(&TRI_TABLE[3][..7], &[1, 8, 3, 9, 8, 1, -1]);
    assert_eq!(&TRI_TABLE[7][..10], &[2, 8, 3, 2, 10, 8, 10, 9, 8, -1]);
    assert_eq!(&TRI_TABLE[254][..4], &[0, 3, 8, -1]);
    assert_eq!(&TRI_TABLE[255][..3], &[-1, -1, -1]);
}

/// FNV-1a over a byte stream; enough to pin fixed table data.
fn fnv1a(bytes: impl IntoIterator<Item = u8>) -> u64 {
    bytes.into_iter().fold(0xcbf2_9ce4_8422_2325, |hash, byte| {
        (hash ^ u64::from(byte)).wrapping_mul(0x0000_0100_0000_01b3)
    })
}

#[test]
fn tables_match_published_data_in_full() {
    // Digests of the published tables, computed independently from the
    // canonical data. Structural invariants alone would miss a single
    // swapped edge index deep in the table; these cover every entry of
    // all 256 configurations.
    let tri_digest = fnv1a(
        TRI_TABLE
            .iter()
            .flat_map(|row| row.iter().map(|&entry| entry as u8)),
    );
    assert_eq!(tri_digest, 0x80f8_d9fe_0cb5_8c05, "TRI_TABLE diverges");

    let edge_digest = fnv1a(EDGE_TABLE.iter().flat_map(|&mask| mask.to_le_bytes()));
    assert_eq!(edge_digest, 0x9b9c_f2d9_176b_3265, "EDGE_TABLE diverges");
}

#[test]
fn edge_table_is_complement_symmetric() {
    // Inverting inside/outside flips no crossed edge.
    for configuration in 0..256 {
        assert_eq!(
            EDGE_TABLE[configuration],
            EDGE_TABLE[255 - configuration],
            "complement symmetry broken at {configuration}"
        );
    }
}

#[test]
fn every_row_terminates_within_five_triangles() {
    for (configuration, row) in TRI_TABLE.iter().enumerate() {
        let terminator = row
            .iter()
            .position(|&entry| entry == -1)
            .unwrap_or_else(|| panic!("row {configuration} has no -1 terminator"));
        assert!(
            terminator % 3 == 0 && terminator <= 15,
            "row {configuration} does not hold whole triangles"
        );
        assert!(
            row[terminator..].iter().all(|&entry| entry == -1),
            "row {configuration} has entries after its terminator"
        );
        assert!(
            terminator / 3 <= 5,
            "row {configuration} exceeds five triangles"
        );
    }
}

#[test]
fn tri_table_references_only_crossed_edges() {
    for (configuration, row) in TRI_TABLE.iter().enumerate() {
        for &entry in row.iter().take_while(|&&entry| entry != -1) {
            assert!(
                (0..12).contains(&entry),
                "row {configuration} references invalid edge {entry}"
            );
            assert!(
                EDGE_TABLE[configuration] & (1 << entry) != 0,
                "row {configuration} uses edge {entry} not flagged in EDGE_TABLE"
            );
        }
    }
}

#[test]
fn crossed_edges_straddle_the_configuration() {
    // An edge is crossed exactly when its two endpoint corners lie on
    // opposite sides of the isolevel; EDGE_TABLE must agree with the
    // corner-bit mapping for all 256 configurations.
    for configuration in 0..256usize {
        for (edge, &(a, b)) in EDGE_CORNERS.iter().enumerate() {
            let inside_a = configuration & CORNER_BITS[a] as usize != 0;
            let inside_b = configuration & CORNER_BITS[b] as usize != 0;
            let crossed = EDGE_TABLE[configuration] & (1 << edge) != 0;
            assert_eq!(
                crossed,
                inside_a != inside_b,
                "configuration {configuration}, edge {edge}"
            );
        }
    }
}
