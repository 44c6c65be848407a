use quick_xml::Writer;
use quick_xml::events::{BytesCData, BytesEnd, BytesStart, BytesText, Event};
use rust_decimal::Decimal;
use std::io::Cursor;

use crate::core::{RejestrError, format_amount};

pub type XmlResult = Result<String, RejestrError>;

fn xml_io(e: std::io::Error) -> RejestrError {
    RejestrError::Template(format!("XML write error: {e}"))
}

pub struct XmlWriter {
    writer: Writer<Cursor<Vec<u8>>>,
}

impl XmlWriter {
    pub fn new() -> Result<Self, RejestrError> {
        let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);
        writer
            .write_event(Event::Decl(quick_xml::events::BytesDecl::new(
                "1.0",
                Some("UTF-8"),
                None,
            )))
            .map_err(xml_io)?;
        Ok(Self { writer })
    }

    pub fn into_string(self) -> Result<String, RejestrError> {
        let buf = self.writer.into_inner().into_inner();
        String::from_utf8(buf).map_err(|e| RejestrError::Template(format!("XML UTF-8 error: {e}")))
    }

    pub fn start_element(&mut self, name: &str) -> Result<&mut Self, RejestrError> {
        let elem = BytesStart::new(name);
        self.writer
            .write_event(Event::Start(elem))
            .map_err(xml_io)?;
        Ok(self)
    }

    pub fn start_element_with_attrs(
        &mut self,
        name: &str,
        attrs: &[(&str, &str)],
    ) -> Result<&mut Self, RejestrError> {
        let mut elem = BytesStart::new(name);
        for (k, v) in attrs {
            elem.push_attribute((*k, *v));
        }
        self.writer
            .write_event(Event::Start(elem))
            .map_err(xml_io)?;
        Ok(self)
    }

    pub fn end_element(&mut self, name: &str) -> Result<&mut Self, RejestrError> {
        self.writer
            .write_event(Event::End(BytesEnd::new(name)))
            .map_err(xml_io)?;
        Ok(self)
    }

    /// Write `<name/>`.
    pub fn empty_element(&mut self, name: &str) -> Result<&mut Self, RejestrError> {
        self.writer
            .write_event(Event::Empty(BytesStart::new(name)))
            .map_err(xml_io)?;
        Ok(self)
    }

    /// Write an element whose body gets entity-escaped on the way out.
    pub fn text_element(&mut self, name: &str, text: &str) -> Result<&mut Self, RejestrError> {
        self.start_element(name)?;
        self.writer
            .write_event(Event::Text(BytesText::new(text)))
            .map_err(xml_io)?;
        self.end_element(name)
    }

    /// Write an element whose body is already escaped and must pass through
    /// verbatim.
    pub fn escaped_text_element(
        &mut self,
        name: &str,
        text: &str,
    ) -> Result<&mut Self, RejestrError> {
        self.start_element(name)?;
        self.writer
            .write_event(Event::Text(BytesText::from_escaped(text)))
            .map_err(xml_io)?;
        self.end_element(name)
    }

    /// Write an element whose body is wrapped in a CDATA section, verbatim.
    pub fn cdata_element(&mut self, name: &str, text: &str) -> Result<&mut Self, RejestrError> {
        self.start_element(name)?;
        self.writer
            .write_event(Event::CData(BytesCData::new(text)))
            .map_err(xml_io)?;
        self.end_element(name)
    }

    /// Write a monetary amount with exactly two decimal places.
    pub fn amount_element(
        &mut self,
        name: &str,
        amount: Decimal,
    ) -> Result<&mut Self, RejestrError> {
        let text = format_amount(amount);
        self.escaped_text_element(name, &text)
    }
}
