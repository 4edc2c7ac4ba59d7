//! Full HTML document assembly.

use super::{Body, Route, landing};
use crate::meta::head::write_head;
use crate::utils::xml::{
    XmlWriter, into_string, new_writer, write_empty_elem, write_end, write_raw, write_start,
    write_void_elem,
};
use anyhow::Result;

pub const FAVICON: &str = "/favicon.png";

/// Render `route` as a standalone HTML document.
pub fn render_document(route: &Route) -> Result<String> {
    let mut w = new_writer();
    write_raw(&mut w, "<!DOCTYPE html>")?;
    write_start(&mut w, "html", &[("lang", "en")])?;

    write_start(&mut w, "head", &[])?;
    write_void_elem(&mut w, "meta", &[("charset", "utf-8")])?;
    write_void_elem(
        &mut w,
        "meta",
        &[("name", "viewport"), ("content", "width=device-width, initial-scale=1")],
    )?;
    write_void_elem(&mut w, "link", &[("rel", "icon"), ("href", FAVICON)])?;
    write_head(&mut w, &route.resolved_metadata())?;
    write_end(&mut w, "head")?;

    write_start(&mut w, "body", &[])?;
    write_body(&mut w, route.body)?;
    write_end(&mut w, "body")?;

    write_end(&mut w, "html")?;
    into_string(w)
}

fn write_body(w: &mut XmlWriter, body: Body) -> Result<()> {
    match body {
        Body::Landing => landing::write(w),
        Body::Shell => write_empty_elem(w, "main", &[("id", "app")]),
    }
}
