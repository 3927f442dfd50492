//! Mapping of value kinds to XML schema datatypes.

use crate::model::ValueKind;

/// Returns the XML schema datatype tag for values of `kind`.
///
/// Total: kinds without a dedicated schema type, including strings and
/// unknown values, map to `xsd:string`.
///
/// # Examples
/// ```
/// # use phyloxml_writer::model::ValueKind;
/// # use phyloxml_writer::phyloxml::map_datatype;
/// assert_eq!(map_datatype(ValueKind::Int), "xsd:integer");
/// assert_eq!(map_datatype(ValueKind::UnsignedInt), "xsd:unsignedInt");
/// assert_eq!(map_datatype(ValueKind::Unknown), "xsd:string");
/// ```
pub fn map_datatype(kind: ValueKind) -> &'static str {
    match kind {
        ValueKind::Short => "xsd:short",
        ValueKind::Long => "xsd:long",
        ValueKind::Float => "xsd:float",
        ValueKind::Double => "xsd:double",
        ValueKind::Int => "xsd:integer",
        ValueKind::Bool => "xsd:boolean",
        ValueKind::Char | ValueKind::SignedChar => "xsd:byte",
        ValueKind::UnsignedChar => "xsd:unsignedByte",
        ValueKind::UnsignedShort => "xsd:unsignedShort",
        ValueKind::UnsignedInt => "xsd:unsignedInt",
        ValueKind::UnsignedLong | ValueKind::UnsignedInt64 | ValueKind::IdType => {
            "xsd:unsignedLong"
        }
        ValueKind::Int64 => "xsd:long",
        ValueKind::String | ValueKind::Unknown => "xsd:string",
    }
}
