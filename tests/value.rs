use std::cmp::Ordering;

use dynvar::{
    array,
    error::ValueError,
    object,
    value::{
        core::{NAN, UNDEFINED, Value},
        from::{Null, Undefined},
        function::Function,
        kind::Kind,
        object::Object,
    },
};

#[test]
fn construction_normalizes_kinds() {
    assert_eq!(Value::from(Undefined).kind(), Kind::Undefined);
    assert_eq!(Value::from(Null).kind(), Kind::Null);
    assert_eq!(Value::from(7u8), Value::Integer(7));
    assert_eq!(Value::from(-7i16), Value::Integer(-7));
    assert_eq!(Value::from(u32::MAX), Value::Integer(i64::from(u32::MAX)));
    assert_eq!(Value::from(1.5f32), Value::Float(1.5));
    assert_eq!(Value::from('x'), Value::from("x"));
    assert_eq!(Value::from(String::from("s")), Value::from("s"));
    assert_eq!(Value::from(None::<i32>), Value::Null);
    assert_eq!(Value::from(Some(3)), Value::Integer(3));
    assert_eq!(Value::default(), Value::Undefined);
}

#[test]
fn wide_integers_convert_only_when_they_fit() {
    assert_eq!(Value::try_from(42u64).unwrap(), Value::Integer(42));
    assert_eq!(Value::try_from(-1isize).unwrap(), Value::Integer(-1));
    assert!(matches!(Value::try_from(u64::MAX), Err(ValueError::OutOfRange { .. })));
    assert!(Value::try_from(i128::MAX).is_err());
}

#[test]
fn native_round_trips() {
    assert_eq!(Value::from(-12i32).to::<i32>().unwrap(), -12);
    assert_eq!(Value::from(200u8).to::<u8>().unwrap(), 200);
    assert_eq!(Value::from(2.25).to::<f64>().unwrap(), 2.25);
    assert_eq!(Value::from(0.5f32).to::<f32>().unwrap(), 0.5);
    assert!(Value::from(true).to::<bool>().unwrap());
    assert_eq!(Value::from("text").to::<String>().unwrap(), "text");
    assert_eq!(String::try_from(Value::from("owned")).unwrap(), "owned");
}

#[test]
fn conversions_fail_where_defined() {
    assert!(Value::from("5").to::<i64>().is_err());
    assert!(Value::from(5).to::<String>().is_err());
    assert!(Value::Undefined.to::<i64>().is_err());
    assert!(array![1].to::<bool>().is_err());
    assert!(object! { "a" => 1 }.to::<f64>().is_err());
    assert!(matches!(Value::from(2.5).to::<i64>(), Err(ValueError::Fractional { .. })));
    assert!(matches!(Value::from(300).to::<u8>(), Err(ValueError::OutOfRange { .. })));

    assert_eq!(Value::Null.to::<i64>().unwrap(), 0);
    assert!(!Value::Null.to::<bool>().unwrap());
    assert_eq!(Value::from(true).to::<i32>().unwrap(), 1);
    assert_eq!(Value::from(4.0).to::<i64>().unwrap(), 4);
}

#[test]
fn assignment_follows_construction() {
    let mut variable = Value::default();

    variable.assign(3u16);
    assert_eq!(variable, Value::Integer(3));
    variable.assign("now a string");
    assert_eq!(variable.kind(), Kind::String);
    variable.assign(Null);
    assert!(variable.is_null());
}

#[test]
fn truthiness() {
    assert!(!Value::Undefined.truthy());
    assert!(!Value::from(0).truthy());
    assert!(!NAN.truthy());
    assert!(!Value::from("").truthy());
    assert!(Value::from("0").truthy());
    assert!(array![].truthy());
    assert!(object! {}.truthy());
}

#[test]
fn display_forms() {
    assert_eq!(Value::Undefined.to_string(), "undefined");
    assert_eq!(Value::Null.to_string(), "null");
    assert_eq!(Value::from(-3).to_string(), "-3");
    assert_eq!(Value::from(2.5).to_string(), "2.5");
    assert_eq!(NAN.to_string(), "NaN");
    assert_eq!(Value::from(f64::NEG_INFINITY).to_string(), "-Infinity");
    assert_eq!(Value::from(false).to_string(), "false");
    assert_eq!(Value::from("raw").to_string(), "raw");
    assert_eq!(array![1, array!["a", Null], 2.5].to_string(), "[1, ['a', null], 2.5]");
    assert_eq!(object! { "a" => 1 }.to_string(), "object");
    assert_eq!(Value::from(Function::new(|_| Ok(Value::Null))).to_string(), "function");
}

#[test]
fn type_of_labels() {
    assert_eq!(Value::from(1).type_of(), "number");
    assert_eq!(Value::from("s").type_of(), "string");
    assert_eq!(Value::Null.type_of(), "object");
    assert_eq!(array![].type_of(), "object");
    assert_eq!(Value::from(Function::new(|_| Ok(Value::Null))).type_of(), "function");
}

#[test]
fn negative_positions_resolve_from_the_end() {
    let arr = array![10, 20, 30];
    let len = 3;

    assert_eq!(arr.at(-1).unwrap(), arr.at(len - 1).unwrap());
    assert_eq!(arr.at(-3).unwrap(), &Value::from(10));
    assert!(std::ptr::eq(arr.at(-(len + 1)).unwrap(), &UNDEFINED));
    assert!(std::ptr::eq(arr.at(len).unwrap(), &UNDEFINED));
    assert!(std::ptr::eq(arr.index(99).unwrap(), &UNDEFINED));
}

#[test]
fn mutable_access_never_exposes_the_sentinel() {
    let mut arr = array![1, 2];

    *arr.at_mut(-1).unwrap().unwrap() = Value::from("last");
    assert_eq!(arr, array![1, "last"]);
    assert!(arr.index_mut(5).unwrap().is_none());

    arr.push(3).unwrap();
    assert_eq!(arr.length().unwrap(), Value::from(3));

    let mut obj = object! { "a" => 1 };
    obj.get_mut("a").unwrap().unwrap().assign(2);
    assert_eq!(obj.get("a").unwrap(), &Value::from(2));
    assert!(obj.get_mut("b").unwrap().is_none());
    assert!(UNDEFINED.is_undefined());
}

#[test]
fn first_matching_field_wins() {
    let obj = Value::from(Object::from([("a", 1), ("a", 2)]));

    assert_eq!(obj.get("a").unwrap(), &Value::from(1));
}

#[test]
fn set_replaces_the_first_match_or_appends() {
    let mut record = Object::from([("a", 1), ("b", 2), ("a", 3)]);

    assert_eq!(record.set("a", "first"), Some(Value::from(1)));
    assert_eq!(record.iter().collect::<Vec<_>>(),
               [("a", &Value::from("first")), ("b", &Value::from(2)), ("a", &Value::from(3))]);

    assert_eq!(record.set("c", 4.5), None);
    assert_eq!(record.len(), 4);
    assert_eq!(record.names().collect::<Vec<_>>(), ["a", "b", "a", "c"]);
    assert_eq!(record.get("c"), Some(&Value::from(4.5)));
}

#[test]
fn lookups_on_the_wrong_kind_are_type_errors() {
    assert!(Value::from(1).get("a").unwrap_err().is_type_error());
    assert!(object! {}.index(0).unwrap_err().is_type_error());
    assert!(Value::from(1.5).length().unwrap_err().is_type_error());
    assert!(array![].keys().unwrap_err().is_type_error());
    assert!(Value::from(1).push(2).is_err());
}

#[test]
fn calling_functions() {
    let double = Value::from(Function::new(|args| {
                                 let x = args.get("x").cloned().unwrap_or_default();
                                 x.mul(&Value::from(2))
                             }));

    let args = Object::from([("x", 21)]);
    assert_eq!(double.call(&args).unwrap(), Value::from(42));
    assert!(double.call(&Object::new()).is_err());
    assert_eq!(Value::from("f").call(&args).unwrap_err(),
               ValueError::NotCallable { kind: Kind::String });
}

#[test]
fn strict_equality() {
    assert_ne!(Value::from(1), Value::from(1.0));
    assert_ne!(Value::from(1), Value::from(true));
    assert_ne!(NAN, NAN);
    assert_eq!(array![1, "a"], array![1, "a"]);
    assert!(Value::Null.strict_eq(&Value::Null));
    assert!(!Value::Null.strict_eq(&Value::Undefined));

    let f = Function::new(|_| Ok(Value::Null));
    assert_eq!(Value::from(f.clone()), Value::from(f));
    assert_ne!(Value::from(Function::new(|_| Ok(Value::Null))),
               Value::from(Function::new(|_| Ok(Value::Null))));
}

#[test]
fn loose_equality() {
    assert!(Value::from(1).loose_eq(&Value::from(1.0)));
    assert!(Value::from(2).loose_eq(&Value::from(" 2 ")));
    assert!(Value::from(0).loose_eq(&Value::from("")));
    assert!(Value::from(1.5).loose_eq(&Value::from("1.5")));
    assert!(Value::from(false).loose_eq(&Value::from(0)));
    assert!(Value::from(true).loose_eq(&Value::from("1")));
    assert!(Value::Undefined.loose_eq(&Value::Null));
    assert!(!Value::Undefined.loose_eq(&Value::from(0)));
    assert!(!Value::from(1).loose_eq(&Value::from("one")));
    assert!(!Value::from("a").loose_eq(&Value::from("b")));
    assert!(!NAN.loose_eq(&NAN));
    assert!(!array![1].loose_eq(&Value::from(1)));
}

#[test]
fn ordering_is_total_and_value_aware() {
    let mut values = vec![Value::from("b"),
                          NAN,
                          Value::from(3),
                          Value::Null,
                          Value::from(1.5),
                          Value::from("a"),
                          Value::from(true),
                          Value::Undefined];
    values.sort_by(Value::compare);

    assert_eq!(values[0], Value::Undefined);
    assert_eq!(values[1], Value::Null);
    assert_eq!(values[2], Value::from(true));
    assert_eq!(values[3], Value::from(1.5));
    assert_eq!(values[4], Value::from(3));
    assert!(values[5].is_nan());
    assert_eq!(values[6], Value::from("a"));
    assert_eq!(values[7], Value::from("b"));

    assert_eq!(Value::from(1).compare(&Value::from(1.0)), Ordering::Less);
    assert!(Value::from(2) < Value::from(2.5));
    assert_eq!(NAN.partial_cmp(&NAN), None);
    assert_eq!(array![1, 2].partial_cmp(&array![1, 2]), Some(Ordering::Equal));
}
