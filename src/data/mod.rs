//! Scene data read by the exporter.

pub mod macros;
pub mod material;
pub mod options;
pub mod point;
pub mod properties;
pub mod scene;
pub mod spline;

pub use material::Material;
pub use options::EmissionOptions;
pub use point::Point;
pub use properties::{Properties, PropertyValue};
pub use scene::{ObjectKind, Scene, SceneObject, Transform};
pub use spline::{ControlPoint, Spline};
