//! Piece tests - occupancy matrices and rotation behavior

use gestris::core::{spawn_shape, Shape};
use gestris::types::PieceKind;

fn matrix(shape: &Shape) -> Vec<Vec<u8>> {
    (0..shape.rows())
        .map(|r| {
            (0..shape.cols())
                .map(|c| shape.filled(r, c) as u8)
                .collect()
        })
        .collect()
}

#[test]
fn test_spawn_matrices() {
    assert_eq!(matrix(&spawn_shape(PieceKind::I)), vec![vec![1, 1, 1, 1]]);
    assert_eq!(
        matrix(&spawn_shape(PieceKind::O)),
        vec![vec![1, 1], vec![1, 1]]
    );
    assert_eq!(
        matrix(&spawn_shape(PieceKind::T)),
        vec![vec![1, 1, 1], vec![0, 1, 0]]
    );
    assert_eq!(
        matrix(&spawn_shape(PieceKind::L)),
        vec![vec![1, 1, 1], vec![1, 0, 0]]
    );
    assert_eq!(
        matrix(&spawn_shape(PieceKind::J)),
        vec![vec![1, 1, 1], vec![0, 0, 1]]
    );
    assert_eq!(
        matrix(&spawn_shape(PieceKind::S)),
        vec![vec![1, 1, 0], vec![0, 1, 1]]
    );
    assert_eq!(
        matrix(&spawn_shape(PieceKind::Z)),
        vec![vec![0, 1, 1], vec![1, 1, 0]]
    );
}

#[test]
fn test_rotation_is_transpose_of_reversed_rows() {
    // [[1,1,1],[1,0,0]] -> [[1,1],[0,1],[0,1]]
    let rotated = spawn_shape(PieceKind::L).rotated_cw();
    assert_eq!(matrix(&rotated), vec![vec![1, 1], vec![0, 1], vec![0, 1]]);
}

#[test]
fn test_rotation_returns_new_value() {
    let shape = spawn_shape(PieceKind::S);
    let rotated = shape.rotated_cw();
    // The source shape is untouched.
    assert_eq!(shape, spawn_shape(PieceKind::S));
    assert_ne!(rotated, shape);
}

#[test]
fn test_o_piece_rotation_never_changes_occupancy() {
    let mut shape = spawn_shape(PieceKind::O);
    for _ in 0..8 {
        shape = shape.rotated_cw();
        assert_eq!(shape, spawn_shape(PieceKind::O));
    }
}

#[test]
fn test_four_rotations_are_identity_for_all_variants() {
    for kind in PieceKind::ALL {
        let spawn = spawn_shape(kind);
        let mut shape = spawn;
        for _ in 0..4 {
            shape = shape.rotated_cw();
        }
        assert_eq!(shape, spawn, "{:?}", kind);
    }
}

#[test]
fn test_rotation_preserves_four_cells() {
    for kind in PieceKind::ALL {
        let mut shape = spawn_shape(kind);
        for step in 0..4 {
            shape = shape.rotated_cw();
            assert_eq!(shape.cells().len(), 4, "{:?} after {} turns", kind, step + 1);
        }
    }
}
