use dynvar::{
    array,
    bridge::{
        constant::{bool_blob, float_blob, integer_blob, string_blob, string_blob_size},
        core::{Blob, DATA_FIELD, LEN_FIELD, TYPE_FIELD},
        deserialize::{deserialize, deserialize_bytes, deserialize_descriptor, deserialize_record},
        describe::Describer,
        serialize::serialize,
        trim::trim,
    },
    descriptor::{
        buffer::Buffer,
        core::{ArrayDescriptor, ObjectDescriptor},
        data_type::DataType,
        element::Element,
    },
    error::BridgeError,
    object,
    value::{core::Value, function::Function},
};

fn scalars() -> Vec<Value> {
    vec![Value::from(0),
         Value::from(-42),
         Value::from(i64::MAX),
         Value::from(i64::MIN),
         Value::from(10.5),
         Value::from(-0.0),
         Value::from(f64::INFINITY),
         Value::from(true),
         Value::from(false),
         Value::from(""),
         Value::from("mama"),
         Value::from("ünïcødé"),
         Value::Null,
         Value::Undefined]
}

fn round_trip(value: &Value) -> Value {
    let blob = serialize(value).unwrap_or_else(|e| panic!("serializing {value} failed: {e}"));
    deserialize(&blob).unwrap_or_else(|e| panic!("deserializing {value} failed: {e}"))
}

#[test]
fn scalars_survive_serialization() {
    for value in scalars() {
        let rebuilt = round_trip(&value);
        assert_eq!(rebuilt.kind(), value.kind());
        assert_eq!(rebuilt, value);
    }
}

#[test]
fn nan_keeps_its_bit_pattern() {
    let nan = f64::from_bits(0x7ff8_0000_0000_0001);

    match round_trip(&Value::from(nan)) {
        Value::Float(f) => assert_eq!(f.to_bits(), nan.to_bits()),
        other => panic!("expected a float, got {other}"),
    }
}

#[test]
fn flat_layout() {
    assert_eq!(serialize(&Value::from(1)).unwrap().to_bytes(),
               [3, 1, 0, 0, 0, 0, 0, 0, 0]);
    assert_eq!(serialize(&Value::from(-1)).unwrap().to_bytes(), [3, 255, 255, 255, 255, 255, 255, 255, 255]);
    assert_eq!(serialize(&Value::from(false)).unwrap().to_bytes(), [5, 0]);
    assert_eq!(serialize(&Value::from("ab")).unwrap().to_bytes(), [6, b'a', b'b', 0]);
    assert_eq!(serialize(&Value::Null).unwrap().to_bytes(), [1]);
    assert_eq!(serialize(&Value::Undefined).unwrap().to_bytes(), [2]);

    let mut float = vec![4];
    float.extend_from_slice(&2.5f64.to_le_bytes());
    assert_eq!(serialize(&Value::from(2.5)).unwrap().to_bytes(), float);
}

#[test]
fn containers_serialize_as_bare_tags() {
    let function = Value::from(Function::new(|_| Ok(Value::Null)));

    for (value, data_type) in [(array![1, 2], DataType::Array),
                               (object! { "a" => 1 }, DataType::Object),
                               (function, DataType::Function)]
    {
        let blob = serialize(&value).unwrap();
        assert_eq!(blob.data_type(), data_type);
        assert!(blob.data().is_empty());
        assert_eq!(deserialize(&blob), Err(BridgeError::ReconstructionUnsupported { data_type }));
    }
}

#[test]
fn encode_requires_the_exact_size() {
    let value = Value::from("abc");
    assert_eq!(value.required_size(), 4);

    let mut short = [0; 3];
    assert_eq!(value.encode(&mut short), Err(BridgeError::SizeMismatch { expected: 4, found: 3 }));

    let mut exact = [0xff; 4];
    value.encode(&mut exact).unwrap();
    assert_eq!(exact, *b"abc\0");
}

#[test]
fn describe_then_trim_matches_serialize() {
    for value in scalars() {
        let described = Describer::with_capacity(64).describe(&value).unwrap();

        assert_eq!(described.field_at(0).unwrap().name(), TYPE_FIELD);
        assert_eq!(described.field_at(1).unwrap().name(), DATA_FIELD);
        assert_eq!(described.field_at(2).unwrap().name(), LEN_FIELD);
        assert_eq!(described.get(LEN_FIELD).unwrap(), &Element::Size(value.required_size()));

        let trimmed = trim(described).unwrap();
        assert_eq!(trimmed.len(), 2);
        assert_eq!(Blob::from_descriptor(&trimmed).unwrap(), serialize(&value).unwrap());
        assert_eq!(deserialize_descriptor(&trimmed).unwrap(), value);
    }
}

#[test]
fn describe_respects_capacity() {
    let text = Value::from("x".repeat(10));

    assert_eq!(Describer::with_capacity(10).describe(&text),
               Err(BridgeError::CapacityExceeded { size: 11, capacity: 10 }));
    assert!(Describer::with_capacity(11).describe(&text).is_ok());
    assert!(Describer::with_capacity(0).describe(&Value::Null).is_ok());
    assert_eq!(Describer::default().capacity(), Describer::new().capacity());
}

#[test]
fn trim_needs_a_size_after_every_buffer() {
    let missing = ObjectDescriptor::new().with(TYPE_FIELD, DataType::Integer)
                                         .with(DATA_FIELD, Buffer::zeroed(16));
    assert_eq!(trim(missing), Err(BridgeError::BufferWithoutSize { field: DATA_FIELD.to_string() }));

    let wrong = ObjectDescriptor::new().with(DATA_FIELD, Buffer::zeroed(16))
                                       .with(LEN_FIELD, 8i64);
    assert!(matches!(trim(wrong), Err(BridgeError::BufferWithoutSize { .. })));

    let oversized = ObjectDescriptor::new().with(DATA_FIELD, Buffer::zeroed(4))
                                           .with(LEN_FIELD, Element::Size(5));
    assert_eq!(trim(oversized),
               Err(BridgeError::SizeExceedsCapacity { field:    DATA_FIELD.to_string(),
                                                      size:     5,
                                                      capacity: 4, }));
}

#[test]
fn trim_leaves_other_fields_alone() {
    let descriptor = ObjectDescriptor::new().with("note", "kept")
                                            .with(DATA_FIELD, Buffer::from(vec![1, 2, 3, 4]))
                                            .with(LEN_FIELD, Element::Size(2))
                                            .with("flag", true);
    let trimmed = trim(descriptor).unwrap();

    assert_eq!(trimmed.len(), 3);
    assert_eq!(trimmed.get("note").unwrap(), &Element::from("kept"));
    assert_eq!(trimmed.get(DATA_FIELD).unwrap().as_buffer().unwrap().as_bytes(), &[1, 2]);
    assert!(trimmed.get(LEN_FIELD).is_err());
    assert_eq!(trimmed.get("flag").unwrap(), &Element::Bool(true));
}

#[test]
fn trim_descends_into_arrays() {
    let values = [Value::from(5), Value::from("mama")];
    let described: ArrayDescriptor = values.iter().map(|v| Describer::new().describe(v).unwrap()).collect();
    let raw = ArrayDescriptor::new().with(Buffer::from(vec![7, 8, 9]))
                                    .with(Element::Size(1))
                                    .with("kept");
    let descriptor = ObjectDescriptor::new().with("values", described).with("raw", raw);

    let trimmed = trim(descriptor).unwrap();

    let Element::Array(trimmed_values) = trimmed.get("values").unwrap() else { panic!("values should stay an array") };
    let rebuilt: Vec<Value> = trimmed_values.elements()
                                    .map(|e| deserialize_descriptor(e.as_object().unwrap()).unwrap())
                                    .collect();
    assert_eq!(rebuilt, values);

    let Element::Array(raw) = trimmed.get("raw").unwrap() else { panic!("raw should stay an array") };
    assert_eq!(raw.len(), 2);
    assert_eq!(raw.get_at(0).unwrap().as_buffer().unwrap().as_bytes(), &[7]);
    assert_eq!(raw.get_at(1).unwrap(), &Element::from("kept"));
}

#[test]
fn trim_names_array_entries_by_index() {
    let missing = ObjectDescriptor::new().with("items", ArrayDescriptor::new().with(1i64).with(Buffer::zeroed(4)));
    assert_eq!(trim(missing), Err(BridgeError::BufferWithoutSize { field: "[1]".to_string() }));

    let oversized = ObjectDescriptor::new().with("items",
                                                 ArrayDescriptor::new().with(Buffer::zeroed(2)).with(Element::Size(3)));
    assert_eq!(trim(oversized),
               Err(BridgeError::SizeExceedsCapacity { field:    "[0]".to_string(),
                                                      size:     3,
                                                      capacity: 2, }));
}

#[test]
fn records_cross_the_bridge() {
    let record = object! { "num" => 5, "pi" => 3.25, "yes" => true, "str" => "mama", "none" => Value::Null };

    let described = Describer::new().describe_record(&record).unwrap();
    assert_eq!(described.len(), 5);

    let blobs = trim(described).unwrap();
    let num = Blob::try_from(blobs.get("num").unwrap().as_object().unwrap()).unwrap();
    assert_eq!(num.data(), &5i64.to_le_bytes());

    assert_eq!(deserialize_record(&blobs).unwrap(), record);
    assert!(Describer::new().describe_record(&Value::from(1)).is_err());
}

#[test]
fn record_fields_must_be_blobs() {
    let record = ObjectDescriptor::new().with("n", 1i64);

    assert_eq!(deserialize_record(&record),
               Err(BridgeError::UnexpectedElement { field:    "n".to_string(),
                                                    expected: DataType::Object,
                                                    found:    DataType::Integer, }));

    let untrimmed = Describer::new().describe_record(&object! { "n" => 1 }).unwrap();
    assert!(matches!(deserialize_record(&untrimmed), Err(BridgeError::MalformedBlob { .. })));
}

#[test]
fn blob_descriptors_are_strict() {
    let blob = serialize(&Value::from(7)).unwrap();
    let descriptor = ObjectDescriptor::from(blob.clone());
    assert_eq!(Blob::from_descriptor(&descriptor).unwrap(), blob);

    let swapped = ObjectDescriptor::new().with(DATA_FIELD, Buffer::zeroed(8))
                                         .with(TYPE_FIELD, DataType::Integer);
    let untagged = ObjectDescriptor::new().with(TYPE_FIELD, 3i64)
                                          .with(DATA_FIELD, Buffer::zeroed(8));
    let extra = descriptor.clone().with("extra", Element::Null);

    for bad in [swapped, untagged, extra, ObjectDescriptor::new()] {
        assert!(matches!(Blob::from_descriptor(&bad), Err(BridgeError::MalformedBlob { .. })));
    }
}

#[test]
fn invalid_blobs_are_rejected() {
    assert_eq!(deserialize_bytes(&[42, 0]), Err(BridgeError::UnknownTypeTag { tag: 42 }));
    assert!(matches!(deserialize_bytes(&[]), Err(BridgeError::MalformedBlob { .. })));

    for bytes in [&[3, 1, 2][..], &[4][..], &[5, 2][..], &[5, 1, 1][..], &[6, b'a'][..], &[6, 0xff, 0][..], &[1, 0][..]] {
        assert!(matches!(deserialize_bytes(bytes), Err(BridgeError::InvalidPayload { .. })),
                "{bytes:?} should be rejected");
    }

    for tag in [DataType::None, DataType::Native] {
        assert_eq!(deserialize_bytes(&[tag.tag()]),
                   Err(BridgeError::ReconstructionUnsupported { data_type: tag }));
    }
}

#[test]
fn only_the_final_terminator_is_stripped() {
    assert_eq!(deserialize_bytes(&[6, b'a', 0, b'b', 0]).unwrap(), Value::from("a\0b"));
    assert_eq!(round_trip(&Value::from("x\0")), Value::from("x\0"));
    assert_eq!(deserialize_bytes(&[6, 0]).unwrap(), Value::from(""));
}

static ANSWER: [u8; 9] = integer_blob(42);
static HALF: [u8; 9] = float_blob(0.5);
static YES: [u8; 2] = bool_blob(true);
const WORD: &str = "mama";
static WORD_BLOB: [u8; string_blob_size(WORD)] = string_blob(WORD);

#[test]
fn compile_time_blobs_match_run_time_blobs() {
    assert_eq!(ANSWER.to_vec(), serialize(&Value::from(42)).unwrap().to_bytes());
    assert_eq!(HALF.to_vec(), serialize(&Value::from(0.5)).unwrap().to_bytes());
    assert_eq!(YES.to_vec(), serialize(&Value::from(true)).unwrap().to_bytes());
    assert_eq!(WORD_BLOB.to_vec(), serialize(&Value::from(WORD)).unwrap().to_bytes());

    assert_eq!(deserialize_bytes(&WORD_BLOB).unwrap(), Value::from("mama"));
    assert_eq!(deserialize_bytes(&ANSWER).unwrap(), Value::from(42));
}
