//! Parsing module for scene descriptions
//!
//! Now supported format:
//! - JSON:
//!     a scene with its `objects`, `materials` and `properties`, and the
//!     emission options. See the `json` module for the loader.

pub mod json;
