//! Minimal XML element builder and printer.
//!
//! [XmlElement] holds a tag name, ordered attributes, optional character
//! data and nested elements. [XmlElement::print_xml] writes such a tree as
//! indented text with proper escaping to any [std::io::Write].

mod element;
mod printer;

pub use element::XmlElement;
pub use printer::{escape_attribute, escape_text};
