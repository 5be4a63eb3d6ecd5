//! Every adapter accepts every generated record, and rejects the same
//! obviously malformed ones.

use bench_core::Shape;
use bench_generator::DataGenerator;
use bench_schemas::{build_all, Library, Validator};
use serde_json::{json, Value};

fn all_validators(shape: Shape) -> Vec<Box<dyn Validator>> {
    build_all(&Library::ALL, shape).unwrap()
}

#[test]
fn test_generated_simple_records_pass_every_adapter() {
    let dataset = DataGenerator::new(Some(42))
        .dataset(Shape::Simple, 200)
        .unwrap();

    for validator in all_validators(Shape::Simple) {
        for (index, record) in dataset.values().iter().enumerate() {
            if let Err(e) = validator.validate(record) {
                panic!("{} rejected record {index}: {e}", validator.name());
            }
        }
    }
}

#[test]
fn test_generated_event_records_pass_every_adapter() {
    for seed in [1, 2, 3] {
        let dataset = DataGenerator::new(Some(seed))
            .dataset(Shape::Event, 100)
            .unwrap();

        for validator in all_validators(Shape::Event) {
            for (index, record) in dataset.values().iter().enumerate() {
                if let Err(e) = validator.validate(record) {
                    panic!(
                        "{} rejected record {index} (seed {seed}): {e}\n{record:#}",
                        validator.name()
                    );
                }
            }
        }
    }
}

#[test]
fn test_unseeded_records_pass_every_adapter() {
    let mut generator = DataGenerator::new(None);
    let simple = generator.dataset(Shape::Simple, 50).unwrap();
    let event = generator.dataset(Shape::Event, 50).unwrap();

    for (shape, dataset) in [(Shape::Simple, simple), (Shape::Event, event)] {
        for validator in all_validators(shape) {
            assert!(dataset.values().iter().all(|r| validator.validate(r).is_ok()));
        }
    }
}

#[test]
fn test_validation_is_idempotent_and_non_mutating() {
    let dataset = DataGenerator::new(Some(5))
        .dataset(Shape::Event, 10)
        .unwrap();
    let mut malformed = dataset.values()[0].clone();
    malformed["connection_type"] = json!("5g");

    for validator in all_validators(Shape::Event) {
        for record in dataset.values().iter().chain(std::iter::once(&malformed)) {
            let before = record.clone();
            let first = validator.validate(record);
            let second = validator.validate(record);
            assert_eq!(first, second);
            assert_eq!(&before, record);
        }
    }
}

fn event_with(field: &str, value: Value) -> Value {
    let mut record = DataGenerator::new(Some(11))
        .dataset(Shape::Event, 1)
        .unwrap()
        .values()[0]
        .clone();
    record[field] = value;
    record
}

#[test]
fn test_every_adapter_rejects_unknown_enum_value() {
    let record = event_with("connection_type", json!("5g"));

    for validator in all_validators(Shape::Event) {
        let err = validator.validate(&record).unwrap_err();
        assert_eq!(err.library, validator.library());
        assert_eq!(err.shape, Shape::Event);
    }
}

#[test]
fn test_every_adapter_rejects_out_of_range_number() {
    let record = event_with("screen_width", json!(10));

    for validator in all_validators(Shape::Event) {
        assert!(
            validator.validate(&record).is_err(),
            "{} accepted screen_width 10",
            validator.name()
        );
    }
}

#[test]
fn test_every_adapter_rejects_wrong_property_count() {
    let record = event_with("properties", json!({"only": true}));

    for validator in all_validators(Shape::Event) {
        assert!(validator.validate(&record).is_err());
    }
}

#[test]
fn test_every_adapter_rejects_missing_field() {
    for validator in all_validators(Shape::Simple) {
        assert!(validator.validate(&json!({"name": "Ada"})).is_err());
    }
}
