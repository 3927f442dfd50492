//! Serialization of [XmlElement] trees as indented XML text.

use crate::xml::element::XmlElement;
use std::borrow::Cow;
use std::io::{self, Write};

/// Pending work of [XmlElement::print_xml]: an element with its level.
enum PrintStep<'a> {
    Open(&'a XmlElement, usize),
    Close(&'a XmlElement, usize),
}

impl XmlElement {
    /// Writes this element and all nested elements to `writer`.
    ///
    /// Elements are written one per line, indented by `level * indent_width`
    /// spaces. An element with character data but no nested elements is
    /// written on a single line, an element with neither is self-closed.
    ///
    /// # Arguments
    /// * `writer` - Destination of the text
    /// * `level` - Nesting level of this element
    /// * `indent_width` - Spaces per nesting level
    ///
    /// # Errors
    /// Returns an I/O error if writing fails.
    pub fn print_xml<W: Write + ?Sized>(
        &self,
        writer: &mut W,
        level: usize,
        indent_width: usize,
    ) -> io::Result<()> {
        let mut stack = vec![PrintStep::Open(self, level)];
        while let Some(step) = stack.pop() {
            match step {
                PrintStep::Open(element, level) => {
                    if element.print_open(writer, level, indent_width)? {
                        stack.push(PrintStep::Close(element, level));
                        stack.extend(
                            element.nested().iter().rev().map(|child| PrintStep::Open(child, level + 1)),
                        );
                    }
                }
                PrintStep::Close(element, level) => {
                    let indent = " ".repeat(level * indent_width);
                    writeln!(writer, "{indent}</{}>", element.name())?;
                }
            }
        }

        Ok(())
    }

    /// Writes the start tag of this element, and its character data.
    ///
    /// # Returns
    /// `true` if nested elements and the end tag still have to follow,
    /// `false` if the element is already complete.
    fn print_open<W: Write + ?Sized>(
        &self,
        writer: &mut W,
        level: usize,
        indent_width: usize,
    ) -> io::Result<bool> {
        let indent = " ".repeat(level * indent_width);

        // "<name a="v""
        write!(writer, "{indent}<{}", self.name())?;
        for (key, value) in self.attributes() {
            write!(writer, " {key}=\"{}\"", escape_attribute(value))?;
        }

        let text = self.character_data().filter(|t| !t.is_empty());
        match (text, self.nested().is_empty()) {
            (None, true) => {
                writeln!(writer, "/>")?;
                Ok(false)
            }
            (Some(text), true) => {
                writeln!(writer, ">{}</{}>", escape_text(text), self.name())?;
                Ok(false)
            }
            (text, false) => {
                writeln!(writer, ">")?;
                if let Some(text) = text {
                    let inner = " ".repeat((level + 1) * indent_width);
                    writeln!(writer, "{inner}{}", escape_text(text))?;
                }
                Ok(true)
            }
        }
    }

    /// Returns the XML text of this element and all nested elements.
    pub fn to_xml_string(&self, indent_width: usize) -> String {
        let mut buffer = Vec::new();
        self.print_xml(&mut buffer, 0, indent_width)
            .expect("writing to Vec<u8> cannot fail");
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

/// Escapes character data: `&`, `<` and `>`.
///
/// # Examples
/// ```
/// # use phyloxml_writer::xml::escape_text;
/// assert_eq!(escape_text("Kea"), "Kea");
/// assert_eq!(escape_text("a<b & c"), "a&lt;b &amp; c");
/// ```
pub fn escape_text(text: &str) -> Cow<'_, str> {
    if !text.chars().any(|c| matches!(c, '&' | '<' | '>')) {
        return Cow::Borrowed(text);
    }

    // '&' first, so produced entities are not escaped again
    Cow::Owned(
        text.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;"),
    )
}

/// Escapes an attribute value: `&`, `<`, `>`, `"` and `'`.
///
/// # Examples
/// ```
/// # use phyloxml_writer::xml::escape_attribute;
/// assert_eq!(escape_attribute("bootstrap"), "bootstrap");
/// assert_eq!(escape_attribute("\"x\" & 'y'"), "&quot;x&quot; &amp; &apos;y&apos;");
/// ```
pub fn escape_attribute(value: &str) -> Cow<'_, str> {
    if !value.chars().any(|c| matches!(c, '&' | '<' | '>' | '"' | '\'')) {
        return Cow::Borrowed(value);
    }

    Cow::Owned(
        escape_text(value)
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    )
}
