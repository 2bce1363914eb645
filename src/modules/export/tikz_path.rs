//! TikZ path expressions for splines
//!
//! Bezier splines become chains of `.. controls (a) and (b) .. (knot)`
//! segments. Polylines are written either as explicit `--` joins or, in plot
//! mode, as a single `plot coordinates {...}` expression. Closed splines end
//! with `-- cycle`.
//!
//! # Examples
//!
//! ```rust
//! use curve_tikz::modules::export::tikz_path::{PathSettings, ToTikzPath};
//! use curve_tikz::poly;
//!
//! let triangle = poly!(cyclic [(0, 0), (1, 0), (1, 1)]);
//! let settings = PathSettings {
//!     wrap_lines: false,
//!     ..PathSettings::default()
//! };
//!
//! assert_eq!(
//!     triangle.to_tikz_path(&settings),
//!     "(+0.0000,+0.0000) -- (+1.0000,+0.0000) -- (+1.0000,+1.0000) -- (+0.0000,+0.0000) -- cycle"
//! );
//! ```

use crate::constants::{
    CONTINUATION_INDENT, CYCLE, PLOTSTYLE_PROPERTY, SEGMENTS_PER_LINE, WRAP_WIDTH,
};
use crate::data::{ControlPoint, EmissionOptions, Point, SceneObject, Spline};

/// How spline paths are laid out
#[derive(Debug, Clone, Default)]
pub struct PathSettings<'a> {
    /// Write polylines as `plot coordinates`
    pub plot_path: bool,
    /// Break long output over several lines
    pub wrap_lines: bool,
    /// Options for `plot[...]`
    pub plot_options: Vec<&'a str>,
}

/// Trait for types that can be written as a TikZ path expression
pub trait ToTikzPath {
    /// Path expression, or an empty string if there is nothing to draw
    fn to_tikz_path(&self, settings: &PathSettings) -> String;
}

impl ToTikzPath for Spline {
    fn to_tikz_path(&self, settings: &PathSettings) -> String {
        match self {
            Spline::Bezier { points, cyclic } => bezier_path(points, *cyclic),
            Spline::Poly { points, cyclic } if settings.plot_path => {
                plot_path(points, *cyclic, settings)
            }
            Spline::Poly { points, cyclic } => line_path(points, *cyclic, settings.wrap_lines),
            Spline::Unsupported => String::new(),
        }
    }
}

/// Path expression for all splines of a curve object.
///
/// Returns an empty string when no spline produced any output.
pub fn serialize_curve(curve: &SceneObject, options: &EmissionOptions) -> String {
    let settings = PathSettings {
        plot_path: options.use_plotpath,
        wrap_lines: options.wrap_lines,
        plot_options: curve.properties.tokens(PLOTSTYLE_PROPERTY),
    };

    let mut fragments = Vec::new();
    for (index, spline) in curve.splines.iter().enumerate() {
        let fragment = spline.to_tikz_path(&settings);
        if fragment.is_empty() {
            log::debug!("{}: spline {} has nothing to export", curve.name, index);
            continue;
        }
        fragments.push(fragment);
    }

    // each spline starts a new subpath
    let path = fragments.join("\n");
    if options.wrap_lines {
        path.trim_end().to_string()
    } else {
        path.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

fn bezier_segment(from: &ControlPoint, to: &ControlPoint) -> String {
    format!(
        "\n{}.. controls {} and {} .. {}",
        CONTINUATION_INDENT, from.handle_right, to.handle_left, to.co
    )
}

fn bezier_path(points: &[ControlPoint], cyclic: bool) -> String {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return String::new();
    };

    // only the handles facing into a segment are used, so an open spline
    // ignores the left handle of its first knot and the right handle of its last
    let mut path = first.co.to_string();
    for pair in points.windows(2) {
        path.push_str(&bezier_segment(&pair[0], &pair[1]));
    }
    if cyclic {
        path.push_str(&bezier_segment(last, first));
        path.push_str(&format!("\n{}-- {}", CONTINUATION_INDENT, CYCLE));
    }
    path
}

fn line_path(points: &[Point], cyclic: bool, wrap_lines: bool) -> String {
    let Some(first) = points.first() else {
        return String::new();
    };

    let mut targets: Vec<String> = points[1..].iter().map(Point::to_string).collect();
    if cyclic {
        targets.push(first.to_string());
        targets.push(CYCLE.to_string());
    }
    let segments = targets.iter().map(|target| format!("-- {}", target));

    if wrap_lines {
        wrap_segments(&first.to_string(), segments)
    } else {
        std::iter::once(first.to_string())
            .chain(segments)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn plot_path(points: &[Point], cyclic: bool, settings: &PathSettings) -> String {
    if points.is_empty() {
        return String::new();
    }

    let plot_options = if settings.plot_options.is_empty() {
        String::new()
    } else {
        format!("[{}]", settings.plot_options.join(","))
    };
    let coordinates: Vec<String> = points.iter().map(Point::to_string).collect();

    let mut path = format!("plot{} coordinates {{{}}}", plot_options, coordinates.join(" "));
    if cyclic {
        path.push_str(&format!(" -- {}", CYCLE));
    }

    if settings.wrap_lines {
        wrap_words(&path, WRAP_WIDTH, CONTINUATION_INDENT)
    } else {
        path
    }
}

/// Lay out `head` followed by `--` segments, at most
/// [`SEGMENTS_PER_LINE`] segments per line and breaking before [`WRAP_WIDTH`].
///
/// The width counts the path text only, not the `\path[...]` prefix the
/// first line is later printed after.
fn wrap_segments(head: &str, segments: impl IntoIterator<Item = String>) -> String {
    let mut out = head.to_string();
    let mut line_len = head.len();
    let mut on_line = 0;

    for segment in segments {
        if on_line == SEGMENTS_PER_LINE || line_len + 1 + segment.len() > WRAP_WIDTH {
            out.push('\n');
            out.push_str(CONTINUATION_INDENT);
            line_len = CONTINUATION_INDENT.len();
            on_line = 0;
        } else {
            out.push(' ');
            line_len += 1;
        }
        out.push_str(&segment);
        line_len += segment.len();
        on_line += 1;
    }
    out
}

/// Greedy word wrap. Words longer than `width` are never split.
pub fn wrap_words(text: &str, width: usize, indent: &str) -> String {
    let mut out = String::new();
    let mut line_len = 0;

    for word in text.split_whitespace() {
        if out.is_empty() {
            out.push_str(word);
            line_len = word.len();
        } else if line_len + 1 + word.len() > width {
            out.push('\n');
            out.push_str(indent);
            out.push_str(word);
            line_len = indent.len() + word.len();
        } else {
            out.push(' ');
            out.push_str(word);
            line_len += 1 + word.len();
        }
    }
    out
}
