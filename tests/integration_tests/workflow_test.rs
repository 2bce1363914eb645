use curve_tikz::modules::export::header;
use curve_tikz::modules::parse::json::FromJson;
use curve_tikz::{
    export, generate, knot, poly, write_tex, ControlPoint, EmissionOptions, Material, Point,
    Scene, SceneObject, Spline,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs;
use std::path::PathBuf;

const DEMO_SCENE: &str = include_str!("../../demos/scene.json");

fn random_point(rng: &mut StdRng) -> Point {
    Point::new(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0))
}

fn random_scene(seed: u64) -> Scene {
    let mut rng = StdRng::seed_from_u64(seed);
    let palette = ["Red", "Green.001", "Blue:dark"];

    let mut objects = Vec::new();
    for i in 0..12 {
        let spline = match rng.gen_range(0..3) {
            0 => Spline::poly(
                (0..rng.gen_range(1..8)).map(|_| random_point(&mut rng)).collect(),
                rng.gen_bool(0.5),
            ),
            1 => Spline::bezier(
                (0..rng.gen_range(1..6))
                    .map(|_| {
                        ControlPoint::new(
                            random_point(&mut rng),
                            random_point(&mut rng),
                            random_point(&mut rng),
                        )
                    })
                    .collect(),
                rng.gen_bool(0.5),
            ),
            _ => Spline::Unsupported,
        };
        let material = palette[rng.gen_range(0..palette.len())];
        // only a few distinct depths so that ties occur
        let depth = rng.gen_range(0..4) as f64;
        objects.push(
            SceneObject::curve(&format!("curve{i}"), vec![spline])
                .with_location(rng.gen_range(-1.0..1.0), 0.0, depth)
                .with_material_slot(Some(material)),
        );
        if rng.gen_bool(0.3) {
            objects.push(
                SceneObject::marker(&format!("anchor{i}"))
                    .with_parent(&format!("curve{i}"))
                    .with_location(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0), 0.0),
            );
        }
    }

    let mut scene = Scene::new(objects);
    for name in palette {
        scene = scene.with_material(Material::new(name, [0.2, 0.4, 0.6]).with_alpha(0.75));
    }
    scene
}

fn all_features() -> EmissionOptions {
    EmissionOptions {
        fill_closed_curve: true,
        transform_curve: true,
        export_materials: true,
        empties: true,
        ..EmissionOptions::default()
    }
}

#[test]
fn test_export_is_deterministic() {
    for seed in 0..5 {
        let scene = random_scene(seed);
        let first = generate(&scene, &all_features()).unwrap();
        let second = generate(&scene.clone(), &all_features()).unwrap();
        assert_eq!(first, second, "seed {seed}");

        // every used material is defined exactly once
        for name in ["Red", "Green*001", "Blue_dark"] {
            let definitions = first.matches(&format!("\\tikzstyle{{{name}}}")).count();
            assert!(definitions <= 1, "seed {seed}: {name} defined {definitions} times");
        }
    }
}

#[test]
fn test_statements_follow_depth() {
    let line = || vec![poly!([(0, 0), (1, 1)])];
    let scene = Scene::new(vec![
        SceneObject::curve("half", line()).with_location(0.0, 0.0, 0.5),
        SceneObject::curve("below", line()).with_location(0.0, 0.0, -1.0),
        SceneObject::curve("above", line()).with_location(0.0, 0.0, 2.0),
    ]);

    let code = generate(&scene, &EmissionOptions::default()).unwrap();
    let below = code.find("% below").unwrap();
    let half = code.find("% half").unwrap();
    let above = code.find("% above").unwrap();
    assert!(below < half && half < above);
}

#[test]
fn test_closed_polyline_without_wrapping() {
    let scene = Scene::new(vec![SceneObject::curve(
        "triangle",
        vec![poly!(cyclic [(0, 0), (1, 0), (1, 1)])],
    )]);
    let options = EmissionOptions {
        wrap_lines: false,
        use_plotpath: false,
        ..EmissionOptions::default()
    };

    let code = generate(&scene, &options).unwrap();
    assert!(code.contains(
        "(+0.0000,+0.0000) -- (+1.0000,+0.0000) -- (+1.0000,+1.0000) -- (+0.0000,+0.0000) -- cycle"
    ));
}

#[test]
fn test_code_only_overrides_standalone() {
    let scene = Scene::new(vec![SceneObject::curve(
        "open",
        vec![Spline::bezier(
            vec![
                knot!((0, 0), (0, 0), (1, 1)),
                knot!((3, 0), (2, 1), (3, 0)),
            ],
            false,
        )],
    )]);
    let options = EmissionOptions {
        standalone: true,
        code_only: true,
        ..EmissionOptions::default()
    };

    let code = generate(&scene, &options).unwrap();
    assert!(code.starts_with("% open\n\\path[draw]"));
    assert!(!code.contains("\\documentclass"));
    assert!(!code.contains("\\begin{tikzpicture}"));
    assert!(!code.contains("cycle"));
}

#[test]
fn test_unsupported_spline_is_silently_skipped() {
    let scene = Scene::new(vec![
        SceneObject::curve("nurbs", vec![Spline::Unsupported]),
        SceneObject::curve("line", vec![poly!([(0, 0), (1, 0)])]),
    ]);
    let code = generate(&scene, &EmissionOptions::default()).unwrap();
    assert!(!code.contains("nurbs"));
    assert_eq!(code.matches("\\path").count(), 1);
}

#[test]
fn test_demo_scene_to_file() {
    let scene = Scene::from_json(DEMO_SCENE).unwrap();
    let options = EmissionOptions::from_json(
        r#"{"export_materials": true, "empties": true, "fill_closed_curve": true}"#,
    )
    .unwrap();

    let dir = std::env::temp_dir().join(format!("curve-tikz-workflow-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path: PathBuf = dir.join("demo.tex");

    let status = write_tex(&scene, &options, &path, None);
    assert_eq!(status, format!("Code written to {}", path.display()));

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.starts_with(&header()));
    assert!(written.contains("\\documentclass{article}"));
    assert!(written.contains("\\usetikzlibrary{arrows}"));
    assert!(written.contains("% Materials section"));
    assert!(written.contains("\\tikzstyle{Ink*Blue}"));
    assert!(written.contains("coordinate (apex)"));
    assert!(written.contains("\\coordinate (origin) at (+0.0000,+0.0000);"));
    assert!(written.ends_with("\\end{document}\n"));

    // writing the same scene again gives the same bytes
    export(&scene, &options, &path, None).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), written);

    fs::remove_dir_all(&dir).unwrap();
}
