//! Inline stroke icons used by the call-to-action buttons.

use crate::utils::xml::{XmlWriter, write_end, write_start, write_void_elem};
use anyhow::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    ArrowRight,
    Github,
}

impl Icon {
    const fn name(self) -> &'static str {
        match self {
            Self::ArrowRight => "arrow-right",
            Self::Github => "github",
        }
    }

    const fn paths(self) -> &'static [&'static str] {
        match self {
            Self::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
            Self::Github => &[
                "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 \
                 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 \
                 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4",
                "M9 18c-4.51 2-5-2-5-2",
            ],
        }
    }

    /// Write the icon as an inline `<svg>`; `class` is appended to the icon's own class.
    pub fn write(self, writer: &mut XmlWriter, class: &str) -> Result<()> {
        let class = format!("icon icon-{} {class}", self.name());
        write_start(
            writer,
            "svg",
            &[
                ("xmlns", "http://www.w3.org/2000/svg"),
                ("width", "24"),
                ("height", "24"),
                ("viewBox", "0 0 24 24"),
                ("fill", "none"),
                ("stroke", "currentColor"),
                ("stroke-width", "2"),
                ("stroke-linecap", "round"),
                ("stroke-linejoin", "round"),
                ("class", class.trim_end()),
                ("aria-hidden", "true"),
            ],
        )?;
        for d in self.paths() {
            write_void_elem(writer, "path", &[("d", d)])?;
        }
        write_end(writer, "svg")
    }
}
