use dynvar::{
    array,
    error::{ConstEvalError, ValueError},
    object,
    operator::core::BinaryOperator,
    value::{
        constant::{ConstValue, const_unwrap},
        core::{NAN, Value},
        function::Function,
        kind::Kind,
    },
};

const OPERATORS: [BinaryOperator; 5] = [BinaryOperator::Add,
                                        BinaryOperator::Sub,
                                        BinaryOperator::Mul,
                                        BinaryOperator::Div,
                                        BinaryOperator::Rem];

fn samples() -> Vec<Value> {
    vec![Value::Undefined,
         Value::Null,
         Value::from(6),
         Value::from(2.5),
         Value::from(true),
         Value::from("ab"),
         array![1],
         object! { "a" => 1 },
         Value::from(Function::new(|_| Ok(Value::Null)))]
}

#[test]
fn every_pairing_has_a_rule() {
    for op in OPERATORS {
        for left in samples() {
            for right in samples() {
                let result = left.binary(op, &right);
                let touches_container = [&left, &right].iter().any(|v| {
                                                                  matches!(v.kind(),
                                                                           Kind::Undefined
                                                                           | Kind::Null
                                                                           | Kind::Array
                                                                           | Kind::Object
                                                                           | Kind::Function)
                                                              });

                if touches_container {
                    let error = result.expect_err("pairing should be rejected");
                    assert_eq!(error, ValueError::operands(op.symbol(), left.kind(), right.kind()));
                } else if left.is_numeric() && right.is_numeric() {
                    assert!(result.is_ok(), "{left} {op} {right} failed");
                }
            }
        }
    }
}

#[test]
fn integer_arithmetic_is_checked() {
    let a = Value::from(7);
    let b = Value::from(2);

    assert_eq!(a.add(&b).unwrap(), Value::Integer(9));
    assert_eq!(a.sub(&b).unwrap(), Value::Integer(5));
    assert_eq!(a.mul(&b).unwrap(), Value::Integer(14));
    assert_eq!(a.div(&b).unwrap(), Value::Integer(3));
    assert_eq!(Value::from(-7).rem(&b).unwrap(), Value::Integer(-1));

    assert_eq!(Value::from(i64::MAX).add(&Value::from(1)), Err(ValueError::Overflow));
    assert_eq!(Value::from(i64::MIN).div(&Value::from(-1)), Err(ValueError::Overflow));
    assert_eq!(Value::from(i64::MIN).rem(&Value::from(-1)).unwrap(), Value::Integer(0));
    assert_eq!(a.rem(&Value::from(0)), Err(ValueError::DivisionByZero));
    assert_eq!(a.div(&Value::from(false)), Err(ValueError::DivisionByZero));
}

#[test]
fn booleans_count_as_integers() {
    assert_eq!(Value::from(true).add(&Value::from(true)).unwrap(), Value::Integer(2));
    assert_eq!(Value::from(3).mul(&Value::from(false)).unwrap(), Value::Integer(0));
    assert_eq!(Value::from(true).add(&Value::from(0.5)).unwrap(), Value::Float(1.5));
}

#[test]
fn float_arithmetic_follows_ieee() {
    assert_eq!(Value::from(1).div(&Value::from(0.0)).unwrap(), Value::from(f64::INFINITY));
    assert!(Value::from(0.0).div(&Value::from(0)).unwrap().is_nan());
    assert!(NAN.add(&Value::from(1)).unwrap().is_nan());
    assert_eq!(Value::from(7.5).rem(&Value::from(2)).unwrap(), Value::Float(1.5));
    assert_eq!(Value::from(1).add(&Value::from(0.25)).unwrap(), Value::Float(1.25));
}

#[test]
fn concatenation_renders_the_other_side() {
    let text = Value::from("x=");

    assert_eq!(text.add(&Value::from(1.5)).unwrap(), Value::from("x=1.5"));
    assert_eq!(text.add(&Value::from(false)).unwrap(), Value::from("x=false"));
    assert_eq!(text.add(&NAN).unwrap(), Value::from("x=NaN"));
    assert_eq!(Value::from(1).add(&Value::from("0")).unwrap(), Value::from("10"));
    assert_eq!(text.add(&text).unwrap(), Value::from("x=x="));
    assert!(text.add(&Value::Null).unwrap_err().is_type_error());
    assert!(text.sub(&Value::from(1)).unwrap_err().is_type_error());
    assert!(text.div(&text).unwrap_err().is_type_error());
}

#[test]
fn repetition_matches_repeated_concatenation() {
    let s = Value::from("ab");

    for n in 1..=5 {
        let mut concatenated = s.clone();
        for _ in 1..n {
            concatenated = concatenated.add(&s).unwrap();
        }

        assert_eq!(s.mul(&Value::from(n)).unwrap(), concatenated);
        assert_eq!(Value::from(n).mul(&s).unwrap(), concatenated);
    }

    assert_eq!(s.mul(&Value::from(true)).unwrap(), s);
}

#[test]
fn repetition_rejects_non_positive_counts() {
    let s = Value::from("ab");

    for n in [0, -1, i64::MIN] {
        let error = s.mul(&Value::from(n)).unwrap_err();
        assert!(error.is_domain_error(), "{error}");
    }
    assert!(s.mul(&Value::from(false)).unwrap_err().is_domain_error());
    assert!(s.mul(&Value::from(2.0)).unwrap_err().is_type_error());
    assert!(s.mul(&s).unwrap_err().is_type_error());
}

#[test]
fn repetition_too_large_to_allocate_overflows() {
    let s = Value::from("ab");

    assert_eq!(s.mul(&Value::from(i64::MAX)), Err(ValueError::Overflow));
    assert_eq!(Value::from(i64::MAX).mul(&s), Err(ValueError::Overflow));

    let mut text = s.clone();
    assert_eq!(text.mul_assign(&Value::from(i64::MAX)), Err(ValueError::Overflow));
    assert_eq!(text, s);

    assert_eq!(Value::from("").mul(&Value::from(i64::MAX)).unwrap(), Value::from(""));
}

#[test]
fn compound_assignment() {
    let mut x = Value::from(2);
    x.add_assign(&Value::from(3)).unwrap();
    assert_eq!(x, Value::from(5));
    x.sub_assign(&Value::from(1)).unwrap();
    assert_eq!(x, Value::from(4));
    x.mul_assign(&Value::from(2.5)).unwrap();
    assert_eq!(x, Value::from(10.0));
    x.div_assign(&Value::from(4)).unwrap();
    assert_eq!(x, Value::from(2.5));
    x.rem_assign(&Value::from(1)).unwrap();
    assert_eq!(x, Value::from(0.5));

    let mut text = Value::from("ab");
    text.add_assign(&Value::from(1)).unwrap();
    assert_eq!(text, Value::from("ab1"));
    text.mul_assign(&Value::from(2)).unwrap();
    assert_eq!(text, Value::from("ab1ab1"));
    assert!(text.mul_assign(&Value::from(0)).is_err());
    assert_eq!(text, Value::from("ab1ab1"));

    let mut count = Value::from(2);
    count.mul_assign(&Value::from("xy")).unwrap();
    assert_eq!(count, Value::from("xyxy"));

    let mut missing = Value::Undefined;
    assert!(missing.add_assign(&Value::from(1)).is_err());
    assert!(missing.is_undefined());
}

#[test]
fn std_operators_on_references() {
    let a = Value::from(9);
    let b = Value::from(4);

    assert_eq!((&a + &b).unwrap(), Value::from(13));
    assert_eq!((&a - &b).unwrap(), Value::from(5));
    assert_eq!((&a * &b).unwrap(), Value::from(36));
    assert_eq!((&a / &b).unwrap(), Value::from(2));
    assert_eq!((&a % &b).unwrap(), Value::from(1));
}

#[test]
fn operator_symbols() {
    let symbols: Vec<String> = OPERATORS.iter().map(ToString::to_string).collect();
    assert_eq!(symbols, ["+", "-", "*", "/", "%"]);
}

static SEVEN: ConstValue = const_unwrap(ConstValue::integer(3).add(ConstValue::integer(4)));
static HALF: ConstValue = const_unwrap(ConstValue::integer(1).div(ConstValue::float(2.0)));

#[test]
fn compile_time_subset() {
    assert_eq!(SEVEN, ConstValue::Integer(7));
    assert_eq!(HALF, ConstValue::Float(0.5));
    assert_eq!(Value::from(SEVEN), Value::from(7));

    assert_eq!(ConstValue::float(10.5).rem(ConstValue::integer(3)),
               Err(ConstEvalError::FloatRemainder));
    assert_eq!(ConstValue::integer(1).div(ConstValue::integer(0)),
               Err(ConstEvalError::DivisionByZero));
    assert_eq!(ConstValue::integer(i64::MAX).mul(ConstValue::integer(2)),
               Err(ConstEvalError::Overflow));
    assert!(matches!(ConstValue::str("a").add(ConstValue::integer(1)),
                     Err(ConstEvalError::StringOperation { .. })));
    assert!(matches!(ConstValue::str("a").mul(ConstValue::integer(2)),
                     Err(ConstEvalError::StringOperation { .. })));
    assert!(matches!(ConstValue::Null.sub(ConstValue::integer(1)),
                     Err(ConstEvalError::UnsupportedOperands { .. })));
}

#[test]
fn run_time_remainder_accepts_what_the_compile_time_subset_refuses() {
    assert_eq!(Value::from(ConstValue::float(10.5)).rem(&Value::from(3)).unwrap(),
               Value::Float(1.5));
}
