use phyloxml_writer::model::{AttributeColumn, Value, ValueKind};
use phyloxml_writer::phyloxml::{
    EmissionTracker, PropertyDescriptor, PropertyTarget, map_datatype,
};

// --- TESTS DATATYPE MAPPING ---
#[test]
fn test_datatype_table() {
    let table = [
        (ValueKind::Short, "xsd:short"),
        (ValueKind::Long, "xsd:long"),
        (ValueKind::Float, "xsd:float"),
        (ValueKind::Double, "xsd:double"),
        (ValueKind::Int, "xsd:integer"),
        (ValueKind::Bool, "xsd:boolean"),
        (ValueKind::Char, "xsd:byte"),
        (ValueKind::SignedChar, "xsd:byte"),
        (ValueKind::UnsignedChar, "xsd:unsignedByte"),
        (ValueKind::UnsignedShort, "xsd:unsignedShort"),
        (ValueKind::UnsignedInt, "xsd:unsignedInt"),
        (ValueKind::UnsignedLong, "xsd:unsignedLong"),
        (ValueKind::UnsignedInt64, "xsd:unsignedLong"),
        (ValueKind::IdType, "xsd:unsignedLong"),
        (ValueKind::Int64, "xsd:long"),
        (ValueKind::String, "xsd:string"),
        (ValueKind::Unknown, "xsd:string"),
    ];

    for (kind, datatype) in table {
        assert_eq!(map_datatype(kind), datatype, "datatype of {kind:?}");
    }
}

#[test]
fn test_value_kinds_from_primitives() {
    assert_eq!(Value::from(true).kind(), ValueKind::Bool);
    assert_eq!(Value::from(-3i8).kind(), ValueKind::SignedChar);
    assert_eq!(Value::from(3u8).kind(), ValueKind::UnsignedChar);
    assert_eq!(Value::from(3i16).kind(), ValueKind::Short);
    assert_eq!(Value::from(3u16).kind(), ValueKind::UnsignedShort);
    assert_eq!(Value::from(3i32).kind(), ValueKind::Int);
    assert_eq!(Value::from(3u32).kind(), ValueKind::UnsignedInt);
    assert_eq!(Value::from(3i64).kind(), ValueKind::Int64);
    assert_eq!(Value::from(3u64).kind(), ValueKind::UnsignedInt64);
    assert_eq!(Value::from(3.0f32).kind(), ValueKind::Float);
    assert_eq!(Value::from(3.0f64).kind(), ValueKind::Double);
    assert_eq!(Value::from("kea").kind(), ValueKind::String);
    assert_eq!(ValueKind::of(None), ValueKind::Unknown);
}

#[test]
fn test_value_string_forms() {
    assert_eq!(Value::Double(2.0).to_string(), "2.0");
    assert_eq!(Value::Double(1.5).to_string(), "1.5");
    assert_eq!(Value::Float(0.25).to_string(), "0.25");
    assert_eq!(Value::Int(-42).to_string(), "-42");
    assert_eq!(Value::UnsignedChar(255).to_string(), "255");
    assert_eq!(Value::Bool(false).to_string(), "false");
    assert_eq!(Value::IdType(7).to_string(), "7");
    assert_eq!(Value::from("Tui").to_string(), "Tui");
    assert_eq!(Value::Double(f64::INFINITY).to_string(), "INF");
    assert_eq!(Value::Double(f64::NEG_INFINITY).to_string(), "-INF");
    assert_eq!(Value::Float(f32::NEG_INFINITY).to_string(), "-INF");
    assert_eq!(Value::Double(f64::NAN).to_string(), "NaN");
}

#[test]
fn test_value_to_f64() {
    assert_eq!(Value::Int(3).to_f64(), 3.0);
    assert_eq!(Value::Bool(true).to_f64(), 1.0);
    assert_eq!(Value::from(" 0.5 ").to_f64(), 0.5);
    assert_eq!(Value::from("not a number").to_f64(), 0.0);
}

// --- TESTS PROPERTY RESOLUTION ---
#[test]
fn test_resolve_defaults() {
    let column = AttributeColumn::new("habitat", vec!["alpine", "forest"]);
    let mut tracker = EmissionTracker::new();
    let property = PropertyDescriptor::resolve(&column, PropertyTarget::Vertex(1), &mut tracker);

    assert_eq!(
        property,
        PropertyDescriptor {
            reference: "VTK:habitat".to_string(),
            applies_to: "clade".to_string(),
            unit: None,
            datatype: "xsd:string",
            value: "forest".to_string(),
        }
    );
    assert!(tracker.is_empty());
}

#[test]
fn test_resolve_with_metadata() {
    let column = AttributeColumn::new("property.mass", vec![2.5f32])
        .with_metadata("authority", "BIO")
        .with_metadata("applies_to", "node")
        .with_metadata("unit", "kg");
    let mut tracker = EmissionTracker::new();
    let property = PropertyDescriptor::resolve(&column, PropertyTarget::Vertex(0), &mut tracker);

    assert_eq!(property.reference, "BIO:mass");
    assert_eq!(property.applies_to, "node");
    assert_eq!(property.unit.as_deref(), Some("kg"));
    assert_eq!(property.datatype, "xsd:float");
    assert_eq!(property.value, "2.5");
}

#[test]
fn test_resolve_empty_metadata_uses_defaults() {
    let column = AttributeColumn::new("mass", vec![1u16])
        .with_metadata("authority", "")
        .with_metadata("applies_to", "")
        .with_metadata("unit", "");
    let mut tracker = EmissionTracker::new();
    let property = PropertyDescriptor::resolve(&column, PropertyTarget::Vertex(0), &mut tracker);

    assert_eq!(property.reference, "VTK:mass");
    assert_eq!(property.applies_to, "clade");
    assert_eq!(property.unit, None);
    assert_eq!(property.datatype, "xsd:unsignedShort");
}

#[test]
fn test_resolve_strips_up_to_first_marker() {
    let mut tracker = EmissionTracker::new();

    let tree_level = AttributeColumn::new("phylogeny.property.clock", vec!["strict"]);
    let property = PropertyDescriptor::resolve(&tree_level, PropertyTarget::Tree, &mut tracker);
    assert_eq!(property.reference, "VTK:clock");

    let nested = AttributeColumn::new("property.property.x", vec![1]);
    let property = PropertyDescriptor::resolve(&nested, PropertyTarget::Vertex(0), &mut tracker);
    assert_eq!(property.reference, "VTK:property.x");

    let plain = AttributeColumn::new("my_property", vec![1]);
    let property = PropertyDescriptor::resolve(&plain, PropertyTarget::Vertex(0), &mut tracker);
    assert_eq!(property.reference, "VTK:my_property");
}

#[test]
fn test_resolve_tree_level_marks_column() {
    let column = AttributeColumn::new("phylogeny.property.age", vec![66i64, 0]);
    let mut tracker = EmissionTracker::new();
    let property = PropertyDescriptor::resolve(&column, PropertyTarget::Tree, &mut tracker);

    assert_eq!(property.value, "66");
    assert_eq!(property.datatype, "xsd:long");
    assert!(tracker.contains("phylogeny.property.age"));
}

#[test]
fn test_resolve_tree_level_of_empty_column() {
    let column = AttributeColumn::new("phylogeny.property.none", Vec::<f64>::new());
    let mut tracker = EmissionTracker::new();
    let property = PropertyDescriptor::resolve(&column, PropertyTarget::Tree, &mut tracker);

    assert_eq!(property.value, "");
    assert_eq!(property.datatype, "xsd:string");
    assert!(tracker.contains("phylogeny.property.none"));
}

#[test]
fn test_property_element() {
    let column = AttributeColumn::new("length", vec![12.0]).with_metadata("unit", "cm");
    let mut tracker = EmissionTracker::new();
    let element =
        PropertyDescriptor::resolve(&column, PropertyTarget::Vertex(0), &mut tracker).to_element();

    assert_eq!(element.name(), "property");
    let names: Vec<&str> = element.attributes().iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(names, vec!["datatype", "ref", "applies_to", "unit"]);
    assert_eq!(element.character_data(), Some("12.0"));
}

// --- TESTS EMISSION TRACKER ---
#[test]
fn test_tracker() {
    let mut tracker = EmissionTracker::new();
    assert!(tracker.is_empty());
    assert!(!tracker.contains("color"));

    assert!(tracker.mark("color"));
    assert!(!tracker.mark("color"));
    assert!(tracker.contains("color"));
    assert_eq!(tracker.len(), 1);
}
