//! Selection filtering and draw ordering.
//!
//! TikZ draws later paths on top of earlier ones, so objects are ordered by
//! their depth coordinate, farthest first. Markers with a parent are not
//! statements of their own; they are grouped under the parent curve and
//! written as named coordinates inside its path.

use crate::data::{EmissionOptions, SceneObject};
use crate::error::{TikzError, TikzResult};
use std::collections::HashMap;

/// Objects to export in draw order, with markers grouped by parent
#[derive(Debug)]
pub struct DrawOrder<'a> {
    objects: Vec<&'a SceneObject>,
    markers: HashMap<&'a str, Vec<&'a SceneObject>>,
}

impl<'a> DrawOrder<'a> {
    /// Curves and top-level markers, farthest to nearest
    pub fn objects(&self) -> &[&'a SceneObject] {
        &self.objects
    }

    /// Markers parented to the given curve, in selection order
    pub fn markers_of(&self, curve: &SceneObject) -> &[&'a SceneObject] {
        self.markers
            .get(curve.name.as_str())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Filter a selection to exportable objects and sort them by depth.
///
/// Curves are always exported; markers without a parent only when
/// `options.empties` is set. The sort is stable, so objects at equal depth
/// keep their selection order.
pub fn select_and_order<'a>(
    selection: impl IntoIterator<Item = &'a SceneObject>,
    options: &EmissionOptions,
) -> TikzResult<DrawOrder<'a>> {
    let selection: Vec<&SceneObject> = selection.into_iter().collect();
    if selection.is_empty() {
        return Err(TikzError::EmptySelection);
    }

    let mut markers: HashMap<&str, Vec<&SceneObject>> = HashMap::new();
    for &object in &selection {
        if !object.is_marker() {
            continue;
        }
        if let Some(parent) = object.parent.as_deref() {
            markers.entry(parent).or_default().push(object);
        }
    }

    let mut objects: Vec<&SceneObject> = selection
        .into_iter()
        .filter(|object| {
            object.is_curve() || (options.empties && object.is_marker() && object.parent.is_none())
        })
        .collect();
    if objects.is_empty() {
        return Err(TikzError::EmptySelection);
    }

    objects.sort_by(|a, b| a.transform.depth().total_cmp(&b.transform.depth()));
    log::debug!("draw order: {} objects", objects.len());

    Ok(DrawOrder { objects, markers })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names<'a>(order: &DrawOrder<'a>) -> Vec<&'a str> {
        order.objects().iter().map(|o| o.name.as_str()).collect()
    }

    #[test]
    fn test_depth_order_farthest_first() {
        let objects = [
            SceneObject::curve("middle", vec![]).with_location(0.0, 0.0, 0.5),
            SceneObject::curve("far", vec![]).with_location(0.0, 0.0, -1.0),
            SceneObject::curve("near", vec![]).with_location(0.0, 0.0, 2.0),
        ];
        let order = select_and_order(&objects, &EmissionOptions::default()).unwrap();
        assert_eq!(names(&order), vec!["far", "middle", "near"]);
    }

    #[test]
    fn test_ties_keep_selection_order() {
        let objects = [
            SceneObject::curve("b", vec![]),
            SceneObject::curve("a", vec![]),
            SceneObject::curve("c", vec![]).with_location(0.0, 0.0, -3.0),
            SceneObject::curve("d", vec![]),
        ];
        let order = select_and_order(&objects, &EmissionOptions::default()).unwrap();
        assert_eq!(names(&order), vec!["c", "b", "a", "d"]);
    }

    #[test]
    fn test_markers() {
        let objects = [
            SceneObject::marker("top").with_location(0.0, 0.0, 1.0),
            SceneObject::curve("path", vec![]),
            SceneObject::marker("a").with_parent("path"),
            SceneObject::marker("b").with_parent("path"),
            SceneObject::marker("orphan").with_parent("elsewhere"),
        ];

        let without = select_and_order(&objects, &EmissionOptions::default()).unwrap();
        assert_eq!(names(&without), vec!["path"]);

        let options = EmissionOptions {
            empties: true,
            ..EmissionOptions::default()
        };
        let with = select_and_order(&objects, &options).unwrap();
        assert_eq!(names(&with), vec!["path", "top"]);

        let children: Vec<_> = with
            .markers_of(&objects[1])
            .iter()
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(children, vec!["a", "b"]);
        assert!(with.markers_of(&objects[0]).is_empty());
    }

    #[test]
    fn test_empty_selection() {
        let nothing: [SceneObject; 0] = [];
        assert!(matches!(
            select_and_order(&nothing, &EmissionOptions::default()),
            Err(TikzError::EmptySelection)
        ));

        let only_markers = [SceneObject::marker("lonely")];
        assert!(matches!(
            select_and_order(&only_markers, &EmissionOptions::default()),
            Err(TikzError::EmptySelection)
        ));
    }
}
