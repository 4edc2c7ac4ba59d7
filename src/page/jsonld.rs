//! schema.org structured data for the landing page.
//!
//! Field names and nesting follow the vocabulary exactly; serde emits fields
//! in declaration order, which keeps the serialized blocks stable.

use crate::utils::xml::{XmlWriter, write_end, write_raw, write_start};
use anyhow::Result;
use serde::Serialize;

pub const SCHEMA_CONTEXT: &str = "https://schema.org";

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: &'static str,
    pub alternate_name: &'static [&'static str],
    pub url: &'static str,
    pub logo: &'static str,
    pub same_as: &'static [&'static str],
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreadcrumbList {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub item_list_element: &'static [ListItem],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ListItem {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub position: u32,
    pub name: &'static str,
    pub item: &'static str,
}

/// The product organization as search engines should see it.
pub const ORGANIZATION: Organization = Organization {
    context: SCHEMA_CONTEXT,
    kind: "Organization",
    name: "Otto",
    alternate_name: &["Otto", "Ottolabs", "Otto AI"],
    url: "https://app.otto.lk",
    logo: "https://app.otto.lk/favicon.png",
    same_as: &[
        "https://github.com/OttolabsAI",
        "https://x.com/OttolabsAI",
        "https://linkedin.com/company/ottolabs",
    ],
    description: "Otto is an open source generalist AI Agent Orchestrator that helps you \
                  accomplish real-world tasks through natural conversation.",
};

/// Home → Otto trail for the landing page.
pub const BREADCRUMBS: BreadcrumbList = BreadcrumbList {
    context: SCHEMA_CONTEXT,
    kind: "BreadcrumbList",
    item_list_element: &[
        ListItem {
            kind: "ListItem",
            position: 1,
            name: "Home",
            item: "https://app.otto.lk",
        },
        ListItem {
            kind: "ListItem",
            position: 2,
            name: "Otto",
            item: "https://app.otto.lk",
        },
    ],
};

/// Serialize `data` and escape `</` so the payload cannot close the
/// surrounding `<script>` element.
pub fn to_script_json<T: Serialize>(data: &T) -> Result<String> {
    Ok(serde_json::to_string(data)?.replace("</", "<\\/"))
}

/// Write `<script type="application/ld+json">…</script>`.
pub fn write_json_ld<T: Serialize>(writer: &mut XmlWriter, data: &T) -> Result<()> {
    write_start(writer, "script", &[("type", "application/ld+json")])?;
    write_raw(writer, &to_script_json(data)?)?;
    write_end(writer, "script")
}
