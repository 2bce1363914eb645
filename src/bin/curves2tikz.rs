//! Export the curves of a JSON scene description as TikZ.
//!
//! Usage:
//!   curves2tikz scene.json              Write scene.tex
//!   curves2tikz scene.json out.tex      Write out.tex
//!   curves2tikz --clipboard scene.json  Copy the code to the clipboard

use std::{
    env,
    path::{Path, PathBuf},
    process::ExitCode,
};

use curve_tikz::modules::export::{export, sink::SystemClipboard};
use curve_tikz::modules::parse::json::FromJson;
use curve_tikz::{EmissionOptions, Scene, TikzResult};

const USAGE: &str = "\
Usage: curves2tikz [OPTIONS] <SCENE> [OUTPUT]

Arguments:
  <SCENE>   JSON scene description
  [OUTPUT]  Output file [default: SCENE with a .tex extension]

Options:
  --options <FILE>   JSON file with emission options
  --fragment         Output a tikzpicture instead of a standalone document
  --code-only        Output path code only
  --no-draw          Do not draw curves
  --fill             Fill closed curves
  --transform        Apply object transformations
  --plot-paths       Use plot paths for polylines
  --materials        Export materials
  --empties          Export markers as coordinates
  --only-properties  Use only the style property of materials that set one
  --no-wrap          Do not wrap long lines
  --clipboard        Copy the code to the clipboard
  -h, --help         Print this help message";

struct Invocation {
    scene: PathBuf,
    output: PathBuf,
    options: EmissionOptions,
}

enum Action {
    Export(Invocation),
    Help,
}

fn parse_args() -> Result<Action, String> {
    let mut args = env::args().skip(1);
    let mut options_file = None;
    let mut flags = Vec::new();
    let mut positional = Vec::new();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Action::Help),
            "--options" => {
                options_file = Some(args.next().ok_or("--options requires a file")?);
            }
            flag if flag.starts_with("--") => flags.push(flag.to_string()),
            other => positional.push(PathBuf::from(other)),
        }
    }

    let mut options = match options_file {
        Some(file) => {
            EmissionOptions::from_json_file(Path::new(&file)).map_err(|e| e.to_string())?
        }
        None => EmissionOptions::default(),
    };
    for flag in &flags {
        apply_flag(&mut options, flag)?;
    }

    let (scene, output) = match positional.as_slice() {
        [scene] => (scene.clone(), scene.with_extension("tex")),
        [scene, output] => (scene.clone(), output.clone()),
        _ => return Err(USAGE.into()),
    };

    Ok(Action::Export(Invocation {
        scene,
        output,
        options,
    }))
}

fn apply_flag(options: &mut EmissionOptions, flag: &str) -> Result<(), String> {
    match flag {
        "--fragment" => options.standalone = false,
        "--code-only" => options.code_only = true,
        "--no-draw" => options.draw_curve = false,
        "--fill" => options.fill_closed_curve = true,
        "--transform" => options.transform_curve = true,
        "--plot-paths" => options.use_plotpath = true,
        "--materials" => options.export_materials = true,
        "--empties" => options.empties = true,
        "--only-properties" => options.only_properties = true,
        "--no-wrap" => options.wrap_lines = false,
        "--clipboard" => options.clipboard_output = true,
        _ => return Err(format!("unknown option {flag}\n\n{USAGE}")),
    }
    Ok(())
}

fn run(invocation: &Invocation) -> TikzResult<String> {
    let scene = Scene::from_json_file(&invocation.scene)?;
    let mut clipboard = SystemClipboard;
    export(
        &scene,
        &invocation.options,
        &invocation.output,
        Some(&mut clipboard),
    )
}

fn main() -> ExitCode {
    env_logger::init();

    match parse_args() {
        Ok(Action::Help) => {
            println!("{USAGE}");
            ExitCode::SUCCESS
        }
        Ok(Action::Export(invocation)) => match run(&invocation) {
            Ok(status) => {
                println!("{status}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
