//! Option lists for path statements.

use crate::constants::{CYCLE, STYLE_PROPERTY};
use crate::data::{EmissionOptions, Material, Scene, SceneObject, Transform};
use crate::modules::export::materials::MaterialTable;

/// Options for the `\path[...]` statement of a curve.
///
/// Order: `draw`, `fill` (closed paths only), non-identity transform
/// options, the material style, then the object's own `style` tokens. The
/// chosen material is registered in `materials`.
pub fn compose_options(
    curve: &SceneObject,
    path: &str,
    scene: &Scene,
    options: &EmissionOptions,
    materials: &mut MaterialTable,
) -> Vec<String> {
    let mut style = Vec::new();

    if options.draw_curve {
        style.push("draw".to_string());
    }
    if options.fill_closed_curve && path.contains(CYCLE) {
        style.push("fill".to_string());
    }
    if options.transform_curve {
        style.extend(transform_options(&curve.transform));
    }
    if options.export_materials {
        if let Some(material) = first_material(curve, scene) {
            let name = materials.register(material);
            if !name.is_empty() {
                style.push(name);
            }
        }
    }
    style.extend(
        curve
            .properties
            .tokens(STYLE_PROPERTY)
            .into_iter()
            .map(String::from),
    );

    style
}

fn transform_options(transform: &Transform) -> Vec<String> {
    let [x, y, _] = transform.location;
    let [scale_x, scale_y, _] = transform.scale;
    let rotation = transform.rotation[2].to_degrees();

    let mut options = Vec::new();
    if x != 0.0 {
        options.push(format!("xshift={:.4}cm", x));
    }
    if y != 0.0 {
        options.push(format!("yshift={:.4}cm", y));
    }
    if rotation != 0.0 {
        options.push(format!("rotate={:.4}", rotation));
    }
    if scale_x != 1.0 {
        options.push(format!("xscale={:.4}", scale_x));
    }
    if scale_y != 1.0 {
        options.push(format!("yscale={:.4}", scale_y));
    }
    options
}

/// First slot that names a material known to the scene
fn first_material<'a>(curve: &SceneObject, scene: &'a Scene) -> Option<&'a Material> {
    curve.material_slots.iter().flatten().find_map(|name| {
        let material = scene.material(name);
        if material.is_none() {
            log::warn!("{}: unknown material {:?}, slot ignored", curve.name, name);
        }
        material
    })
}
