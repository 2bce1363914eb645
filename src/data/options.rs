//! Options controlling one export.

use serde::Deserialize;

/// Immutable option bundle threaded through the whole export.
///
/// Every field may be left out of a JSON description; missing fields take
/// the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EmissionOptions {
    /// Wrap the output in a full standalone document
    pub standalone: bool,
    /// Emit only bare path statements; wins over `standalone`
    pub code_only: bool,
    /// Add `draw` to every path
    pub draw_curve: bool,
    /// Add `fill` to closed paths
    pub fill_closed_curve: bool,
    /// Emit shift, rotate and scale options from the object transform
    pub transform_curve: bool,
    /// Use `plot coordinates` for polylines
    pub use_plotpath: bool,
    /// Resolve and emit materials
    pub export_materials: bool,
    /// Export markers as named coordinates
    pub empties: bool,
    /// Global default for dropping the derived material color
    pub only_properties: bool,
    /// Soft-wrap long path output
    pub wrap_lines: bool,
    /// Write to the clipboard instead of a file
    pub clipboard_output: bool,
}

impl Default for EmissionOptions {
    fn default() -> Self {
        Self {
            standalone: true,
            code_only: false,
            draw_curve: true,
            fill_closed_curve: false,
            transform_curve: false,
            use_plotpath: false,
            export_materials: false,
            empties: false,
            only_properties: false,
            wrap_lines: true,
            clipboard_output: false,
        }
    }
}
