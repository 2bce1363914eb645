//! Materials used during one export, and their TikZ definitions.

use crate::data::Material;
use indexmap::IndexMap;

/// Make a name safe for use as a TikZ style or color name.
///
/// ```
/// use curve_tikz::modules::export::materials::tikzify;
///
/// assert_eq!(tikzify("Material.001"), "Material*001");
/// assert_eq!(tikzify(r"a\b,c:d"), "a-b+c_d");
/// assert_eq!(tikzify("   "), "");
/// ```
pub fn tikzify(name: &str) -> String {
    if name.trim().is_empty() {
        return String::new();
    }
    name.chars()
        .map(|c| match c {
            '\\' => '-',
            ',' => '+',
            ':' => '_',
            '.' => '*',
            other => other,
        })
        .collect()
}

/// Deduplicated materials in first-registered order
#[derive(Debug, Default)]
pub struct MaterialTable {
    entries: IndexMap<String, Material>,
}

impl MaterialTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a material and return the style name that refers to it.
    ///
    /// Materials are keyed by their transliterated name; the first material
    /// registered under a name is the one that gets defined. A material whose
    /// name is blank cannot be referenced and is not recorded.
    pub fn register(&mut self, material: &Material) -> String {
        let name = tikzify(&material.name);
        if name.is_empty() {
            log::warn!("material with a blank name left out of the definitions");
            return name;
        }
        self.entries
            .entry(name.clone())
            .or_insert_with(|| material.clone());
        name
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Color and style definitions for every registered material.
    ///
    /// The derived color is left out when only-properties applies to a
    /// material that has its own style; a material's `onlyproperties`
    /// property overrides `only_properties_default`. An empty table renders
    /// as an empty string.
    pub fn render_all(&self, only_properties_default: bool) -> String {
        if self.entries.is_empty() {
            return String::new();
        }

        let mut code = String::from("% Materials section\n");
        for (name, material) in &self.entries {
            let style = material.style_override();
            let only_properties = material
                .only_properties()
                .unwrap_or(only_properties_default);

            let mut options = Vec::new();
            if !(only_properties && style.is_some()) {
                let [r, g, b] = material.color;
                code.push_str(&format!(
                    "\\definecolor{{{name}_col}}{{rgb}}{{{r:.4},{g:.4},{b:.4}}}\n"
                ));
                options.push(format!("{name}_col"));
                if material.alpha < 1.0 {
                    options.push(format!("opacity={:.4}", material.alpha));
                }
            }
            if let Some(style) = style {
                options.push(style.to_string());
            }
            code.push_str(&format!("\\tikzstyle{{{name}}}= [{}]\n", options.join(",")));
        }
        code
    }
}
