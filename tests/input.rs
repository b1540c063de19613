use std::{fs, io::Cursor};

use dynvar::{
    bridge::{deserialize::deserialize_bytes, serialize::serialize},
    value::core::Value,
};
use walkdir::WalkDir;

/// Every line of `tests/inputs/<kind>.txt` must classify as `<kind>` and
/// survive the trip through a flat blob.
#[test]
fn input_lines_classify_by_file() {
    let mut count = 0;

    for entry in WalkDir::new("tests/inputs").into_iter()
                                             .filter_map(Result::ok)
                                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "txt"))
    {
        let path = entry.path();
        let expected = path.file_stem()
                           .and_then(|stem| stem.to_str())
                           .unwrap_or_else(|| panic!("Unnamed fixture {path:?}"));
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        let mut reader = Cursor::new(content.as_bytes());
        while let Some(value) = Value::read_line(&mut reader).unwrap() {
            count += 1;
            assert_eq!(value.kind().name(),
                       expected,
                       "{value:?} in {path:?} classified as {}",
                       value.kind());

            let bytes = serialize(&value).unwrap().to_bytes();
            let rebuilt = deserialize_bytes(&bytes).unwrap();
            assert_eq!(rebuilt, value, "{value:?} in {path:?} did not survive its blob");
        }
    }

    assert!(count > 0, "No input lines found in tests/inputs");
}

#[test]
fn classification_keeps_the_text() {
    assert_eq!(Value::parse_input(" 7"), Value::from(" 7"));
    assert_eq!(Value::parse_input("--1\r\n"), Value::from("--1"));
    assert_eq!(Value::parse_input(""), Value::from(""));
    assert_eq!(Value::parse_input("3."), Value::Float(3.0));
    assert_eq!(Value::parse_input("-.5"), Value::Float(-0.5));
    assert_eq!(Value::parse_input("99999999999999999999"), Value::Float(1e20));
    assert_eq!(Value::parse_input("-9223372036854775808"), Value::Integer(i64::MIN));
}
