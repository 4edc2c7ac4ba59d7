//! Markup writing helpers over `quick_xml::Writer`.
//!
//! Every document, head and landing fragment is written through an
//! [`XmlWriter`] so attribute values and text are escaped in one place.

use anyhow::Result;
use quick_xml::{
    Writer,
    events::{BytesEnd, BytesStart, BytesText, Event},
};
use std::io::{Cursor, Write};

pub type XmlWriter = Writer<Cursor<Vec<u8>>>;

/// Create an empty in-memory writer.
#[inline]
pub fn new_writer() -> XmlWriter {
    Writer::new(Cursor::new(Vec::with_capacity(8192)))
}

/// Consume the writer and return the markup as a `String`.
pub fn into_string(writer: XmlWriter) -> Result<String> {
    Ok(String::from_utf8(writer.into_inner().into_inner())?)
}

/// Build a start tag with attributes.
fn start_elem<'a>(tag: &'a str, attrs: &[(&str, &str)]) -> BytesStart<'a> {
    let mut elem = BytesStart::new(tag);
    for (k, v) in attrs {
        elem.push_attribute((*k, *v));
    }
    elem
}

/// Write `<tag attr1="val1" ...>`.
#[inline]
pub fn write_start(writer: &mut XmlWriter, tag: &str, attrs: &[(&str, &str)]) -> Result<()> {
    writer.write_event(Event::Start(start_elem(tag, attrs)))?;
    Ok(())
}

/// Write `</tag>`.
#[inline]
pub fn write_end(writer: &mut XmlWriter, tag: &str) -> Result<()> {
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

/// Write escaped text content.
#[inline]
pub fn write_text(writer: &mut XmlWriter, text: &str) -> Result<()> {
    writer.write_event(Event::Text(BytesText::new(text)))?;
    Ok(())
}

/// Write a text element: `<tag attrs>text</tag>`.
#[inline]
pub fn write_text_element(
    writer: &mut XmlWriter,
    tag: &str,
    attrs: &[(&str, &str)],
    text: &str,
) -> Result<()> {
    write_start(writer, tag, attrs)?;
    write_text(writer, text)?;
    write_end(writer, tag)
}

/// Write an element with no children as `<tag attrs></tag>`.
///
/// HTML only allows the self-closing form on void elements, so `div`/`span`
/// placeholders must go through here instead of [`write_void_elem`].
#[inline]
pub fn write_empty_elem(writer: &mut XmlWriter, tag: &str, attrs: &[(&str, &str)]) -> Result<()> {
    write_start(writer, tag, attrs)?;
    write_end(writer, tag)
}

/// Write a void element with attributes: `<tag attr1="val1" ... />`.
#[inline]
pub fn write_void_elem(writer: &mut XmlWriter, tag: &str, attrs: &[(&str, &str)]) -> Result<()> {
    writer.write_event(Event::Empty(start_elem(tag, attrs)))?;
    Ok(())
}

/// Write trusted bytes without escaping.
#[inline]
pub fn write_raw(writer: &mut XmlWriter, raw: &str) -> Result<()> {
    writer.get_mut().write_all(raw.as_bytes())?;
    Ok(())
}
