use line_graph::core::{DataSeries, SurfaceSize};
use line_graph::render::RecordingSurface;
use line_graph::{GraphConfig, LineGraph};
use std::fs;
use std::path::PathBuf;

const USAGE: &str = "usage: render_graph_svg [--count <n>] [--width <px>] [--height <px>] [--config <path>] [--output <path>]";

#[derive(Debug)]
struct CliArgs {
    count: usize,
    width: f64,
    height: f64,
    config: Option<PathBuf>,
    output: Option<PathBuf>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let _ = line_graph::telemetry::init_default_tracing();
    let args = parse_args()?;

    let config = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
            GraphConfig::from_json_str(&raw).map_err(|e| e.to_string())?
        }
        None => GraphConfig::default(),
    };

    let series = DataSeries::random_counts(args.count, &mut rand::rng());
    let surface = RecordingSurface::new(SurfaceSize::new(args.width, args.height));
    let mut graph = LineGraph::new(surface, series, config);
    graph.initialize().map_err(|e| e.to_string())?;
    graph.on_tick().map_err(|e| e.to_string())?;
    graph.teardown();

    let svg = graph.into_surface().to_svg();
    match &args.output {
        Some(path) => fs::write(path, svg)
            .map_err(|e| format!("failed to write {}: {e}", path.display())),
        None => {
            print!("{svg}");
            Ok(())
        }
    }
}

fn parse_args() -> Result<CliArgs, String> {
    let mut parsed = CliArgs {
        count: 7,
        width: 600.0,
        height: 300.0,
        config: None,
        output: None,
    };

    let mut args = std::env::args().skip(1);
    while let Some(flag) = args.next() {
        let mut value = || {
            args.next()
                .ok_or_else(|| format!("missing value for {flag}"))
        };
        match flag.as_str() {
            "--count" => {
                parsed.count = value()?
                    .parse()
                    .map_err(|e| format!("invalid --count: {e}"))?;
            }
            "--width" => {
                parsed.width = value()?
                    .parse()
                    .map_err(|e| format!("invalid --width: {e}"))?;
            }
            "--height" => {
                parsed.height = value()?
                    .parse()
                    .map_err(|e| format!("invalid --height: {e}"))?;
            }
            "--config" => parsed.config = Some(PathBuf::from(value()?)),
            "--output" => parsed.output = Some(PathBuf::from(value()?)),
            "--help" | "-h" => return Err(USAGE.to_owned()),
            other => return Err(format!("unknown argument `{other}`\n{USAGE}")),
        }
    }

    Ok(parsed)
}
