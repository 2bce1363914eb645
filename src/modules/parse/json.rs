use crate::data::{EmissionOptions, Scene};
use crate::error::{TikzError, TikzResult};
use std::fs;
use std::path::Path;

/// Parse a value from its JSON description
pub trait FromJson: Sized {
    /// Parse from a JSON string
    fn from_json(data: &str) -> TikzResult<Self>;

    /// Read and parse a JSON file
    fn from_json_file(path: &Path) -> TikzResult<Self> {
        let data = fs::read_to_string(path).map_err(|source| TikzError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&data)
    }
}

impl FromJson for Scene {
    fn from_json(data: &str) -> TikzResult<Self> {
        let scene: Scene = serde_json::from_str(data)?;
        log::debug!(
            "loaded scene: {} objects, {} materials",
            scene.objects.len(),
            scene.materials.len()
        );
        Ok(scene)
    }
}

impl FromJson for EmissionOptions {
    fn from_json(data: &str) -> TikzResult<Self> {
        Ok(serde_json::from_str(data)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{ObjectKind, PropertyValue, Spline};

    const SCENE: &str = r#"{
        "properties": {"preamble": "\\usetikzlibrary{arrows}"},
        "materials": [
            {"name": "Red", "color": [1, 0, 0], "alpha": 0.5, "properties": {"style": "thick"}}
        ],
        "objects": [
            {
                "name": "Path",
                "kind": "curve",
                "transform": {"location": [0, 0, 1]},
                "material_slots": [null, "Red"],
                "properties": {"style": "dashed", "plotstyle": 12},
                "splines": [
                    {"type": "poly", "cyclic": true, "points": [{"x": 0, "y": 0}, {"x": 1, "y": 0}]},
                    {"type": "nurbs", "points": []}
                ]
            },
            {"name": "A", "kind": "marker", "parent": "Path", "selected": false}
        ]
    }"#;

    #[test]
    fn test_parse_scene() {
        let scene = Scene::from_json(SCENE).unwrap();

        assert_eq!(scene.preamble(), Some("\\usetikzlibrary{arrows}"));
        assert_eq!(scene.material("Red").map(|m| m.alpha), Some(0.5));
        assert_eq!(scene.material("Red").and_then(|m| m.style_override()), Some("thick"));

        let path = &scene.objects[0];
        assert_eq!(path.kind, ObjectKind::Curve);
        assert_eq!(path.transform.depth(), 1.0);
        assert_eq!(path.transform.scale, [1.0, 1.0, 1.0]);
        assert_eq!(path.material_slots, vec![None, Some("Red".to_string())]);
        assert_eq!(path.splines.len(), 2);
        assert!(path.splines[0].is_cyclic());
        assert_eq!(path.splines[1], Spline::Unsupported);

        // malformed properties read as absent
        assert!(matches!(path.properties.get("plotstyle"), Some(PropertyValue::Int(12))));
        assert!(path.properties.tokens("plotstyle").is_empty());

        assert_eq!(scene.selected().count(), 1);
    }

    #[test]
    fn test_parse_invalid_scene() {
        assert!(matches!(
            Scene::from_json(r#"{"objects": [{"name": "x"}]}"#),
            Err(TikzError::Json(_))
        ));
        assert!(Scene::from_json("not json").is_err());
    }

    #[test]
    fn test_parse_options() {
        let options = EmissionOptions::from_json(r#"{"empties": true}"#).unwrap();
        assert!(options.empties);
        assert!(options.wrap_lines);
        assert_eq!(EmissionOptions::from_json("{}").unwrap(), EmissionOptions::default());
    }

    #[test]
    fn test_missing_file() {
        let err = Scene::from_json_file(Path::new("/nonexistent/scene.json")).unwrap_err();
        assert!(matches!(err, TikzError::Read { .. }));
    }
}
