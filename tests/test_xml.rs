use phyloxml_writer::xml::{XmlElement, escape_attribute, escape_text};

#[test]
fn test_element_attributes() {
    let mut element = XmlElement::new("property");
    element.set_attribute("ref", "VTK:a");
    element.set_attribute("datatype", "xsd:string");
    element.set_attribute("ref", "VTK:b");

    // Replaced in place, order of first insertion kept
    assert_eq!(
        element.attributes(),
        &[
            ("ref".to_string(), "VTK:b".to_string()),
            ("datatype".to_string(), "xsd:string".to_string()),
        ]
    );
    assert_eq!(element.attribute("ref"), Some("VTK:b"));
    assert_eq!(element.attribute("unit"), None);
}

#[test]
fn test_double_attribute() {
    let mut element = XmlElement::new("clade");
    element.set_double_attribute("branch_length", 2.0);
    assert_eq!(element.attribute("branch_length"), Some("2.0"));

    element.set_double_attribute("branch_length", 0.125);
    assert_eq!(element.attribute("branch_length"), Some("0.125"));
}

#[test]
fn test_print_nested() {
    let mut color = XmlElement::new("color");
    for (channel, value) in [("red", "1"), ("green", "2"), ("blue", "3")] {
        let mut element = XmlElement::new(channel);
        element.set_character_data(value);
        color.add_nested(element);
    }
    let mut clade = XmlElement::new("clade");
    clade.set_double_attribute("branch_length", 0.5);
    clade.add_nested(color);
    clade.add_nested(XmlElement::new("clade"));

    let expected = concat!(
        "<clade branch_length=\"0.5\">\n",
        "  <color>\n",
        "    <red>1</red>\n",
        "    <green>2</green>\n",
        "    <blue>3</blue>\n",
        "  </color>\n",
        "  <clade/>\n",
        "</clade>\n",
    );
    assert_eq!(clade.to_xml_string(2), expected);
}

#[test]
fn test_print_level_and_width() {
    let mut phylogeny = XmlElement::new("phylogeny");
    phylogeny.add_nested(XmlElement::new("clade"));

    let mut buffer = Vec::new();
    phylogeny.print_xml(&mut buffer, 1, 4).unwrap();

    assert_eq!(
        String::from_utf8(buffer).unwrap(),
        "    <phylogeny>\n        <clade/>\n    </phylogeny>\n"
    );
}

#[test]
fn test_print_text_and_nested() {
    let mut element = XmlElement::new("description");
    element.set_character_data("mixed");
    element.add_nested(XmlElement::new("note"));

    assert_eq!(
        element.to_xml_string(2),
        "<description>\n  mixed\n  <note/>\n</description>\n"
    );
}

#[test]
fn test_print_escapes() {
    let mut element = XmlElement::new("name");
    element.set_attribute("note", "say \"hi\"");
    element.set_character_data("Tom & <Jerry>");

    assert_eq!(
        element.to_xml_string(2),
        "<name note=\"say &quot;hi&quot;\">Tom &amp; &lt;Jerry&gt;</name>\n"
    );
}

#[test]
fn test_escape_functions() {
    assert_eq!(escape_text("plain"), "plain");
    assert_eq!(escape_text("&amp;"), "&amp;amp;");
    assert_eq!(escape_attribute("it's"), "it&apos;s");
    assert_eq!(escape_attribute("a<b>"), "a&lt;b&gt;");
}

#[test]
fn test_find_nested() {
    let mut clade = XmlElement::new("clade");
    clade.add_nested(XmlElement::new("name"));
    clade.add_nested(XmlElement::new("clade"));
    clade.add_nested(XmlElement::new("clade"));

    assert_eq!(clade.find_nested("name").unwrap().name(), "name");
    assert!(clade.find_nested("color").is_none());
    assert_eq!(clade.find_all_nested("clade").count(), 2);
    assert_eq!(clade.nested().len(), 3);
}
