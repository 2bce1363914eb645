//! Read-only view of a scene: objects, their transforms and materials.

use crate::constants::PREAMBLE_PROPERTY;
use crate::data::material::Material;
use crate::data::properties::{Properties, PropertyValue};
use crate::data::spline::Spline;
use nalgebra::{Matrix4, Point3, Rotation3, Vector3};
use serde::Deserialize;

/// World-space placement of an object
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Transform {
    pub location: [f64; 3],
    /// Euler XYZ rotation in radians
    pub rotation: [f64; 3],
    pub scale: [f64; 3],
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            location: [0.0; 3],
            rotation: [0.0; 3],
            scale: [1.0; 3],
        }
    }
}

impl Transform {
    /// Coordinate used for draw order; larger values draw on top
    pub fn depth(&self) -> f64 {
        self.location[2]
    }

    /// World matrix: translation, then XYZ rotation, then scale
    pub fn matrix(&self) -> Matrix4<f64> {
        let [rx, ry, rz] = self.rotation;
        Matrix4::new_translation(&Vector3::from(self.location))
            * Rotation3::from_euler_angles(rx, ry, rz).to_homogeneous()
            * Matrix4::new_nonuniform_scaling(&Vector3::from(self.scale))
    }

    /// Express a world position in this transform's local frame.
    ///
    /// Returns `None` when the transform cannot be inverted (zero scale).
    pub fn to_local(&self, world: [f64; 3]) -> Option<Point3<f64>> {
        let inverse = self.matrix().try_inverse()?;
        Some(inverse.transform_point(&Point3::from(world)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    Curve,
    Marker,
}

/// An exportable object of the scene
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SceneObject {
    pub name: String,
    pub kind: ObjectKind,
    #[serde(default)]
    pub transform: Transform,
    /// Name of the parent object
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default = "default_selected")]
    pub selected: bool,
    #[serde(default)]
    pub properties: Properties,
    #[serde(default)]
    pub splines: Vec<Spline>,
    /// Material names per slot; empty slots are `null`
    #[serde(default)]
    pub material_slots: Vec<Option<String>>,
}

fn default_selected() -> bool {
    true
}

impl SceneObject {
    fn new(name: &str, kind: ObjectKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
            transform: Transform::default(),
            parent: None,
            selected: true,
            properties: Properties::new(),
            splines: Vec::new(),
            material_slots: Vec::new(),
        }
    }

    pub fn curve(name: &str, splines: Vec<Spline>) -> Self {
        Self {
            splines,
            ..Self::new(name, ObjectKind::Curve)
        }
    }

    pub fn marker(name: &str) -> Self {
        Self::new(name, ObjectKind::Marker)
    }

    pub fn with_location(mut self, x: f64, y: f64, z: f64) -> Self {
        self.transform.location = [x, y, z];
        self
    }

    pub fn with_rotation(mut self, x: f64, y: f64, z: f64) -> Self {
        self.transform.rotation = [x, y, z];
        self
    }

    pub fn with_scale(mut self, x: f64, y: f64, z: f64) -> Self {
        self.transform.scale = [x, y, z];
        self
    }

    pub fn with_parent(mut self, parent: &str) -> Self {
        self.parent = Some(parent.to_string());
        self
    }

    pub fn with_material_slot(mut self, material: Option<&str>) -> Self {
        self.material_slots.push(material.map(String::from));
        self
    }

    pub fn with_property(mut self, name: &str, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(name, value);
        self
    }

    pub fn deselected(mut self) -> Self {
        self.selected = false;
        self
    }

    pub fn is_curve(&self) -> bool {
        self.kind == ObjectKind::Curve
    }

    pub fn is_marker(&self) -> bool {
        self.kind == ObjectKind::Marker
    }
}

/// A scene: its objects in selection order, its materials and its own properties
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Scene {
    pub objects: Vec<SceneObject>,
    pub materials: Vec<Material>,
    pub properties: Properties,
}

impl Scene {
    pub fn new(objects: Vec<SceneObject>) -> Self {
        Self {
            objects,
            ..Self::default()
        }
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.materials.push(material);
        self
    }

    pub fn with_property(mut self, name: &str, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(name, value);
        self
    }

    /// Selected objects, in selection order
    pub fn selected(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects.iter().filter(|object| object.selected)
    }

    /// Look up a material by name
    pub fn material(&self, name: &str) -> Option<&Material> {
        self.materials.iter().find(|material| material.name == name)
    }

    /// Text inserted into the standalone document preamble
    pub fn preamble(&self) -> Option<&str> {
        self.properties.text(PREAMBLE_PROPERTY)
    }
}
