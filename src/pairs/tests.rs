use super::*;
use std::io::Write;

#[test]
fn test_label_conversion() {
    assert_eq!(Label::try_from(0), Ok(Label::Different));
    assert_eq!(Label::try_from(1), Ok(Label::Same));
    assert_eq!(Label::try_from(2), Err(2));
    assert!(Label::Same.is_positive());
    assert!(!Label::Different.is_positive());
}

#[test]
fn test_from_rows_preserves_order() {
    let list = PairList::from_rows(&[[4, 5, 0], [0, 1, 1], [2, 3, 1]]).expect("valid rows");

    assert_eq!(list.len(), 3);
    assert_eq!(list.as_slice()[0], Pair::new(4, 5, Label::Different));
    assert_eq!(list.as_slice()[1], Pair::new(0, 1, Label::Same));
    assert_eq!(
        list.labels(),
        vec![Label::Different, Label::Same, Label::Same]
    );
    assert_eq!(list.positives(), 2);
}

#[test]
fn test_from_rows_rejects_bad_label() {
    let err = PairList::from_rows(&[[0, 1, 1], [2, 3, 7]]).unwrap_err();
    assert!(matches!(err, PairError::InvalidLabel { row: 1, value: 7 }));
}

#[test]
fn test_from_rows_rejects_negative_index() {
    let err = PairList::from_rows(&[[0, -1, 1]]).unwrap_err();
    assert!(matches!(err, PairError::NegativeIndex { row: 0, value: -1 }));
}

#[test]
fn test_parse_skips_blank_and_comment_lines() {
    let text = "# index_a index_b label\n0 1 1\n\n  2\t3   0  \n";
    let list = PairList::parse(text).expect("should parse");

    assert_eq!(
        list.as_slice(),
        &[Pair::new(0, 1, Label::Same), Pair::new(2, 3, Label::Different)]
    );
}

#[test]
fn test_parse_wrong_column_count() {
    let err = PairList::parse("0 1 1\n2 3\n").unwrap_err();
    assert!(matches!(
        err,
        PairError::WrongColumnCount { line: 2, found: 2 }
    ));
}

#[test]
fn test_parse_invalid_integer() {
    let err = PairList::parse("0 x 1\n").unwrap_err();
    match err {
        PairError::InvalidInteger { line, value, .. } => {
            assert_eq!(line, 1);
            assert_eq!(value, "x");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_parse_empty_text() {
    let list = PairList::parse("").expect("empty is valid");
    assert!(list.is_empty());
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "0 1 1").unwrap();
    writeln!(file, "1 2 0").unwrap();

    let list = PairList::load(file.path()).expect("should load");
    assert_eq!(list.len(), 2);
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = PairList::load(dir.path().join("missing.txt")).unwrap_err();
    assert!(matches!(err, PairError::Io { .. }));
}

#[test]
fn test_fingerprint_tracks_content() {
    let a = PairList::from_rows(&[[0, 1, 1], [2, 3, 0]]).unwrap();
    let b = PairList::from_rows(&[[0, 1, 1], [2, 3, 0]]).unwrap();
    let c = PairList::from_rows(&[[0, 1, 1], [2, 4, 0]]).unwrap();

    assert_eq!(a.fingerprint(), b.fingerprint());
    assert_ne!(a.fingerprint(), c.fingerprint());
}
