//! Path statements and the document templates that wrap them.

use crate::constants::INLINE_OPTIONS_MAX_LEN;
use crate::data::{EmissionOptions, Point, SceneObject};
use crate::modules::export::materials::tikzify;

/// The document layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    /// Complete LaTeX document
    Standalone,
    /// Material definitions and a `tikzpicture` environment
    Fragment,
    /// Path statements only
    CodeOnly,
}

impl Template {
    /// `code_only` wins over `standalone`
    pub fn select(options: &EmissionOptions) -> Self {
        if options.code_only {
            Self::CodeOnly
        } else if options.standalone {
            Self::Standalone
        } else {
            Self::Fragment
        }
    }
}

/// Wrap path statements and material definitions in the selected template
pub fn assemble(
    path_code: &str,
    materials: &str,
    preamble: Option<&str>,
    options: &EmissionOptions,
) -> String {
    match Template::select(options) {
        Template::Standalone => format!(
            "\\documentclass{{article}}\n\
             \\usepackage{{tikz}}\n\
             {}\n\
             {}\n\
             \\begin{{document}}\n\
             \\begin{{tikzpicture}}\n\
             {}\n\
             \\end{{tikzpicture}}\n\
             \\end{{document}}\n",
            preamble.unwrap_or_default(),
            materials,
            path_code
        ),
        Template::Fragment => format!(
            "{}\n\
             \\begin{{tikzpicture}}\n\
             {}\n\
             \\end{{tikzpicture}}\n",
            materials, path_code
        ),
        Template::CodeOnly => path_code.to_string(),
    }
}

/// One `\path` statement, preceded by a comment naming the object.
///
/// The path goes on its own line when the joined options are longer than
/// [`INLINE_OPTIONS_MAX_LEN`] or when marker anchors have to be placed before
/// it. Otherwise the first path line follows `\path[...]` directly, so the
/// wrap width of the path does not count that prefix.
pub fn path_statement(name: &str, options: &[String], anchors: &[String], path: &str) -> String {
    let optstr = options.join(",");
    let long_options = optstr.len() > INLINE_OPTIONS_MAX_LEN;

    let mut statement = format!("% {}\n\\path", name);
    if !optstr.is_empty() {
        statement.push_str(&format!("[{}]", optstr));
    }
    if long_options || !anchors.is_empty() {
        statement.push('\n');
        for anchor in anchors {
            statement.push_str(&format!("  {}\n", anchor));
        }
        statement.push_str(&format!("  {};\n", path.trim_end()));
    } else {
        statement.push_str(&format!(" {};\n", path.trim_end()));
    }
    statement
}

/// Named coordinate for a marker inside its parent curve's path.
///
/// The marker's world location is expressed in the curve's local frame, the
/// frame the path coordinates are written in.
pub fn anchor(curve: &SceneObject, marker: &SceneObject) -> String {
    let world = marker.transform.location;
    let local = match curve.transform.to_local(world) {
        Some(local) => Point::new(local.x, local.y),
        None => {
            log::warn!(
                "{}: transform is not invertible, placing {} by translation only",
                curve.name,
                marker.name
            );
            let origin = curve.transform.location;
            Point::new(world[0] - origin[0], world[1] - origin[1])
        }
    };
    format!("{} coordinate ({})", local, tikzify(&marker.name))
}

/// `\coordinate` statement for a marker without a parent
pub fn coordinate_statement(marker: &SceneObject) -> String {
    let [x, y, _] = marker.transform.location;
    format!(
        "\\coordinate ({}) at {};\n",
        tikzify(&marker.name),
        Point::new(x, y)
    )
}
