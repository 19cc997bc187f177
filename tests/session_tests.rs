//! Grid session behaviour: bounded edits, resizing and re-evaluation
use magic_box::core::session::{DEFAULT_SIZE, SUPPORTED_SIZES};
use magic_box::{CellBounds, Grid, Session, SessionError};

fn session() -> Session {
    Session::new(DEFAULT_SIZE, CellBounds::default()).expect("create session")
}

#[test]
fn test_supported_sizes_start_uniform() {
    for size in SUPPORTED_SIZES {
        let session = Session::new(size, CellBounds::default()).unwrap();
        assert_eq!(session.size(), size);
        assert!(session.grid().cells().iter().all(|&v| v == 1));
        assert!(session.result().is_magic());
        assert_eq!(session.result().target(), size as i128);
    }
}

#[test]
fn test_every_edit_is_reevaluated() {
    let mut session = session();

    let result = session.set_cell(2, 2, 2).unwrap();
    assert!(!result.is_magic());
    assert_eq!(result.rows(), &[true, true, false]);

    let result = session.set_cell(2, 2, 1).unwrap();
    assert!(result.is_magic());
}

#[test]
fn test_reaching_lo_shu_cell_by_cell() {
    let mut session = session();
    let lo_shu = [[2, 7, 6], [9, 5, 1], [4, 3, 8]];

    for (row, values) in lo_shu.iter().enumerate() {
        for (col, &value) in values.iter().enumerate() {
            session.set_cell(row, col, value).unwrap();
        }
    }

    assert!(session.result().is_magic());
    assert_eq!(session.result().target(), 15);
}

#[test]
fn test_rejected_value_leaves_grid_unchanged() {
    let mut session = session();
    session.set_cell(0, 0, 5).unwrap();
    let before = session.grid().clone();

    assert_eq!(
        session.set_cell(0, 1, 10).unwrap_err(),
        SessionError::OutOfRange {
            row: 0,
            col: 1,
            value: 10,
            min: 1,
            max: 9
        }
    );
    assert_eq!(
        session.set_cell(3, 0, 5).unwrap_err(),
        SessionError::CellOutOfBounds {
            row: 3,
            col: 0,
            size: 3
        }
    );
    assert_eq!(session.grid(), &before);
}

#[test]
fn test_resize_keeps_overlapping_cells() {
    let mut session = session();
    session.set_cell(0, 0, 9).unwrap();
    session.set_cell(2, 2, 7).unwrap();

    session.resize(5).unwrap();
    assert_eq!(session.size(), 5);
    assert_eq!(session.grid().get(0, 0), Some(9));
    assert_eq!(session.grid().get(2, 2), Some(7));
    assert_eq!(session.grid().get(4, 4), Some(1));

    session.resize(4).unwrap();
    assert_eq!(session.grid().get(0, 0), Some(9));
    assert_eq!(session.result().size(), 4);
}

#[test]
fn test_resize_rejects_unsupported_size() {
    let mut session = session();
    assert_eq!(
        session.resize(6).unwrap_err(),
        SessionError::UnsupportedSize { size: 6 }
    );
    assert_eq!(session.size(), 3);
}

#[test]
fn test_reset() {
    let mut session = session();
    session.set_cell(1, 1, 8).unwrap();
    assert!(!session.result().is_magic());

    assert!(session.reset().is_magic());
    assert_eq!(session.grid(), &Grid::filled(3, 1).unwrap());
}

#[test]
fn test_load_checks_size_and_bounds() {
    let mut session = session();

    let lo_shu = Grid::from_rows(&[[2i64, 7, 6], [9, 5, 1], [4, 3, 8]]).unwrap();
    assert!(session.load(lo_shu).unwrap().is_magic());

    let too_small = Grid::filled(2, 1).unwrap();
    assert_eq!(
        session.load(too_small).unwrap_err(),
        SessionError::UnsupportedSize { size: 2 }
    );

    let out_of_range = Grid::filled(3, 0).unwrap();
    assert!(matches!(
        session.load(out_of_range),
        Err(SessionError::OutOfRange { value: 0, .. })
    ));
    assert_eq!(session.result().target(), 15);
}

#[test]
fn test_custom_bounds() {
    let mut session = Session::new(4, CellBounds { min: 1, max: 16 }).unwrap();
    assert!(session.set_cell(0, 0, 16).is_ok());
    assert!(session.set_cell(0, 1, 17).is_err());
}
