//! In-memory XML element tree.

use crate::model::value::format_double;

// =#========================================================================#=
// XML ELEMENT
// =#========================================================================€=
/// A single XML element with attributes, optional character data and
/// nested child elements.
///
/// Attributes keep the order in which they were first set.
///
/// # Example
/// ```
/// use phyloxml_writer::xml::XmlElement;
///
/// let mut clade = XmlElement::new("clade");
/// clade.set_double_attribute("branch_length", 0.5);
/// let mut name = XmlElement::new("name");
/// name.set_character_data("Kea");
/// clade.add_nested(name);
///
/// assert_eq!(clade.attribute("branch_length"), Some("0.5"));
/// assert_eq!(clade.find_nested("name").unwrap().character_data(), Some("Kea"));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct XmlElement {
    name: String,
    attributes: Vec<(String, String)>,
    character_data: Option<String>,
    nested: Vec<XmlElement>,
}

impl XmlElement {
    /// Creates a new element with tag `name`.
    pub fn new<S: Into<String>>(name: S) -> Self {
        XmlElement {
            name: name.into(),
            attributes: Vec::new(),
            character_data: None,
            nested: Vec::new(),
        }
    }

    /// Sets attribute `name` to `value`, replacing any previous value.
    pub fn set_attribute<K: Into<String>, V: Into<String>>(&mut self, name: K, value: V) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| *k == name) {
            Some((_, v)) => *v = value,
            None => self.attributes.push((name, value)),
        }
    }

    /// Sets attribute `name` to the textual form of a double.
    pub fn set_double_attribute<K: Into<String>>(&mut self, name: K, value: f64) {
        self.set_attribute(name, format_double(value));
    }

    /// Sets the character data (text content) of this element.
    pub fn set_character_data<S: Into<String>>(&mut self, data: S) {
        self.character_data = Some(data.into());
    }

    /// Appends `child` as the last nested element.
    pub fn add_nested(&mut self, child: XmlElement) {
        self.nested.push(child);
    }

    /// Returns the tag name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the value of attribute `name`, or `None`.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns all attributes in order.
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Returns the character data, or `None` if never set.
    pub fn character_data(&self) -> Option<&str> {
        self.character_data.as_deref()
    }

    /// Returns the nested elements in order.
    pub fn nested(&self) -> &[XmlElement] {
        &self.nested
    }

    /// Returns the first nested element with tag `name`, or `None`.
    pub fn find_nested(&self, name: &str) -> Option<&XmlElement> {
        self.nested.iter().find(|e| e.name == name)
    }

    /// Iterates over all nested elements with tag `name`.
    pub fn find_all_nested<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> {
        self.nested.iter().filter(move |e| e.name == name)
    }
}

impl Drop for XmlElement {
    /// Releases nested elements iteratively, so dropping a deep element tree
    /// does not recurse once per level.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.nested);
        while let Some(mut element) = pending.pop() {
            pending.append(&mut element.nested);
        }
    }
}
