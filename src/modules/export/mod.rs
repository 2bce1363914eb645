//! Export scene curves to TikZ
//!
//! The export runs as one pass: select and order the objects, serialize
//! each curve's splines to a path expression, compose its options, collect
//! the materials used, and wrap everything in a document template.
//!
//! - [tikz_path](tikz_path/index.html) - spline path expressions
//! - [style](style/index.html) - option lists for path statements
//! - [materials](materials/index.html) - material table and definitions
//! - [document](document/index.html) - statements and templates
//! - [sink](sink/index.html) - file and clipboard output
//!
//! # Example
//!
//! ```rust
//! use curve_tikz::{generate, poly, EmissionOptions, Scene, SceneObject};
//!
//! let scene = Scene::new(vec![SceneObject::curve(
//!     "Triangle",
//!     vec![poly!(cyclic [(0, 0), (1, 0), (1, 1)])],
//! )]);
//! let options = EmissionOptions {
//!     code_only: true,
//!     wrap_lines: false,
//!     ..EmissionOptions::default()
//! };
//!
//! let code = generate(&scene, &options).unwrap();
//! assert_eq!(
//!     code,
//!     "% Triangle\n\\path[draw] (+0.0000,+0.0000) -- (+1.0000,+0.0000) \
//!      -- (+1.0000,+1.0000) -- (+0.0000,+0.0000) -- cycle;\n"
//! );
//! ```

pub mod document;
pub mod materials;
pub mod sink;
pub mod style;
pub mod tikz_path;

use crate::constants::{GENERATOR_NAME, GENERATOR_VERSION};
use crate::data::{EmissionOptions, Scene, SceneObject};
use crate::error::{TikzError, TikzResult};
use crate::modules::select::{select_and_order, DrawOrder};
use materials::MaterialTable;
use sink::Clipboard;
use std::path::Path;

/// First line of every written file
pub fn header() -> String {
    format!("% Generated by {} v {}\n", GENERATOR_NAME, GENERATOR_VERSION)
}

/// Generate the document for the selected objects of a scene
pub fn generate(scene: &Scene, options: &EmissionOptions) -> TikzResult<String> {
    let order = select_and_order(scene.selected(), options)?;
    let mut materials = MaterialTable::new();

    let mut path_code = String::new();
    for object in order.objects() {
        if object.is_curve() {
            if let Some(statement) = write_curve(object, &order, scene, options, &mut materials) {
                path_code.push_str(&statement);
            }
        } else {
            path_code.push_str(&document::coordinate_statement(object));
        }
    }

    let material_code = if options.export_materials {
        materials.render_all(options.only_properties)
    } else {
        String::new()
    };

    Ok(document::assemble(
        &path_code,
        &material_code,
        scene.preamble(),
        options,
    ))
}

fn write_curve(
    curve: &SceneObject,
    order: &DrawOrder,
    scene: &Scene,
    options: &EmissionOptions,
    materials: &mut MaterialTable,
) -> Option<String> {
    let path = tikz_path::serialize_curve(curve, options);
    if path.is_empty() {
        log::debug!("{}: nothing to draw, skipped", curve.name);
        return None;
    }

    let style = style::compose_options(curve, &path, scene, options, materials);
    let anchors: Vec<String> = if options.empties {
        order
            .markers_of(curve)
            .iter()
            .map(|marker| document::anchor(curve, marker))
            .collect()
    } else {
        Vec::new()
    };

    log::debug!("{}: options {:?}", curve.name, style);
    Some(document::path_statement(&curve.name, &style, &anchors, &path))
}

/// Generate the document and write it to the sink chosen by
/// `options.clipboard_output`, returning a success message.
///
/// Files start with the [`header`] line; clipboard text does not.
pub fn export(
    scene: &Scene,
    options: &EmissionOptions,
    path: &Path,
    clipboard: Option<&mut dyn Clipboard>,
) -> TikzResult<String> {
    let code = generate(scene, options)?;

    if options.clipboard_output {
        let clipboard = clipboard.ok_or(TikzError::ClipboardUnavailable)?;
        if !clipboard.copy(&code) {
            return Err(TikzError::Clipboard);
        }
        Ok("Code copied to clipboard".to_string())
    } else {
        sink::write_file(path, &format!("{}{}", header(), code))?;
        Ok(format!("Code written to {}", path.display()))
    }
}

/// Run an export and report its outcome as a single status message.
///
/// Failures are logged and returned as their message; nothing is retried.
pub fn write_tex(
    scene: &Scene,
    options: &EmissionOptions,
    path: &Path,
    clipboard: Option<&mut dyn Clipboard>,
) -> String {
    match export(scene, options, path, clipboard) {
        Ok(status) => {
            log::info!("{}", status);
            status
        }
        Err(err) => {
            log::error!("{}", err);
            err.to_string()
        }
    }
}
