use dynvar::{
    array,
    bridge::{deserialize::deserialize_record, describe::Describer, trim::trim},
    error::ValueError,
    object,
    value::{
        core::{UNDEFINED, Value, ValueResult},
        kind::Kind,
    },
};

fn assert_value(result: ValueResult<Value>, expected: &Value) {
    match result {
        Ok(value) => assert_eq!(&value, expected, "unexpected result"),
        Err(e) => panic!("Operation failed: {e}"),
    }
}

fn assert_failure(result: ValueResult<Value>) -> ValueError {
    match result {
        Ok(value) => panic!("Operation succeeded with {value} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn number_plus_string_concatenates() {
    let x = Value::from(5);

    assert_value(&x + &Value::from("3"), &Value::from("53"));
    assert_value(&Value::from("3") + &x, &Value::from("35"));
    assert_value(x.add(&Value::from(3)), &Value::from(8));
}

#[test]
fn array_length_and_indexing() {
    let arr = array![1, "two", 3.0];

    assert_value(arr.length(), &Value::from(3));
    assert_eq!(arr.index(1).unwrap(), &Value::from("two"));
    assert_eq!(arr.index(2).unwrap().kind(), Kind::Float);
    assert_eq!(arr.to_string(), "[1, 'two', 3]");
}

#[test]
fn object_lookup_and_missing_key() {
    let obj = object! { "name" => "Max", "age" => 23 };

    assert_eq!(obj.get("age").unwrap(), &Value::from(23));
    assert_eq!(obj.get("name").unwrap(), &Value::from("Max"));
    assert!(std::ptr::eq(obj.get("missing").unwrap(), &UNDEFINED));
    assert_value(obj.keys(), &array!["name", "age"]);
}

#[test]
fn record_survives_describe_trim_and_deserialize() {
    let record = object! { "num" => 5, "str" => "mama" };

    let described = Describer::new().describe_record(&record).unwrap();
    let blobs = trim(described).unwrap();
    let rebuilt = deserialize_record(&blobs).unwrap();

    assert_eq!(rebuilt, record);
    assert_eq!(rebuilt.get("num").unwrap(), &Value::Integer(5));
    assert_eq!(rebuilt.get("str").unwrap(), &Value::from("mama"));
}

#[test]
fn remainder_for_integers_and_floats() {
    assert_value(&Value::from(10) % &Value::from(3), &Value::Integer(1));
    assert_value(&Value::from(10.5) % &Value::from(3), &Value::Float(1.5));
}

#[test]
fn failing_operators_produce_no_result() {
    assert!(assert_failure(&Value::from("a") - &Value::from(1)).is_type_error());
    assert!(assert_failure(&Value::Null + &Value::from(1)).is_type_error());
    assert!(assert_failure(&array![1] + &Value::from(1)).is_type_error());
    assert!(assert_failure(&Value::from("a") * &Value::from(0)).is_domain_error());
    assert_eq!(assert_failure(&Value::from(1) / &Value::from(0)), ValueError::DivisionByZero);
}
