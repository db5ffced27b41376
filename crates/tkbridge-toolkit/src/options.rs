//! Toolkit options

use serde::Deserialize;

/// Options for [`crate::Toolkit::new`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ToolkitOptions {
    /// Installed font names offered to `set_fonts`
    pub system_fonts: Vec<String>,
}
