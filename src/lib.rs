// Module definitions
pub mod constants;
pub mod data;
pub mod error;
pub mod modules;

// export the core data structure at crate level
pub use data::material::Material;
pub use data::options::EmissionOptions;
pub use data::point::Point;
pub use data::properties::{Properties, PropertyValue};
pub use data::scene::{ObjectKind, Scene, SceneObject, Transform};
pub use data::spline::{ControlPoint, Spline};
pub use error::{TikzError, TikzResult};
pub use modules::export::{export, generate, write_tex};
