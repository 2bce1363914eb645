//! Formatting constants shared by the exporter.

/// Generator name written in the output file header.
pub const GENERATOR_NAME: &str = env!("CARGO_PKG_NAME");

/// Generator version written in the output file header.
pub const GENERATOR_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Column at which wrapped path output is broken.
pub const WRAP_WIDTH: usize = 80;

/// Indentation of continuation lines.
pub const CONTINUATION_INDENT: &str = "  ";

/// Maximum number of `--` segments on one wrapped polyline line.
pub const SEGMENTS_PER_LINE: usize = 2;

/// Option strings longer than this put the path on its own line.
pub const INLINE_OPTIONS_MAX_LEN: usize = 50;

/// Marker TikZ uses to close a path.
pub const CYCLE: &str = "cycle";

// property names looked up on objects, materials and the scene
pub const STYLE_PROPERTY: &str = "style";
pub const PLOTSTYLE_PROPERTY: &str = "plotstyle";
pub const PREAMBLE_PROPERTY: &str = "preamble";
pub const ONLY_PROPERTIES_PROPERTY: &str = "onlyproperties";
