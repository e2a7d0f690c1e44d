//! Text I/O tests: what `write_to` emits must read back into an equal container
//! of the same, externally known, dimension.

use std::io::Cursor;

use tmatrix::{DynamicMatrix, DynamicVector, TmError};

#[test]
fn vector_write_read() {
    let v = DynamicVector::try_from(vec![3, -1, 4, 1, 5]).unwrap();
    let mut buf = Vec::new();
    v.write_to(&mut buf).unwrap();
    let back = DynamicVector::<i32>::read_sized(5, Cursor::new(buf)).unwrap();
    assert_eq!(back, v);
}

#[test]
fn matrix_write_read() {
    let m = DynamicMatrix::from_fn(4, |i, j| (i * 4 + j) as f64 / 2.0).unwrap();
    let mut buf = Vec::new();
    m.write_to(&mut buf).unwrap();
    let text = String::from_utf8(buf.clone()).unwrap();
    assert_eq!(text.lines().count(), 4);
    assert!(text.lines().all(|l| l.split_whitespace().count() == 4));
    let back = DynamicMatrix::<f64>::read_sized(4, Cursor::new(buf)).unwrap();
    assert_eq!(back, m);
}

/// The stream carries no length prefix, so layout across lines is irrelevant.
#[test]
fn matrix_reads_free_form_layout() {
    let mut m = DynamicMatrix::<i32>::new(2).unwrap();
    m.read_from("1\n2 3\n\n 4 extra".as_bytes()).unwrap();
    assert_eq!(m, DynamicMatrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap());
}

#[test]
fn bad_input_is_reported() {
    let mut v = DynamicVector::<u8>::new(2).unwrap();
    assert!(matches!(v.read_from("1 300".as_bytes()), Err(TmError::Parse { token }) if token == "300"));
    let mut shell_src = DynamicVector::<u8>::new(1).unwrap();
    let _moved = shell_src.take();
    assert!(matches!(shell_src.read_from("1".as_bytes()), Err(TmError::UseAfterMove)));
    let mut out = Vec::new();
    assert!(matches!(shell_src.write_to(&mut out), Err(TmError::UseAfterMove)));
}
