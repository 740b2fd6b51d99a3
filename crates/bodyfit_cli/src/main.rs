use anyhow::{bail, Context, Result};
use bodyfit_core::{
    MeasurementResponse, MeasurementSet, SceneComposer, SceneConfig, Vertex,
};
use bodyfit_math::{CameraUniform, OrbitCamera};
use std::path::PathBuf;

const USAGE: &str = "\
Usage: bodyfit <body.obj> --height <cm> (--measurements <file.json> | --chest <cm> --waist <cm> --hips <cm>)
               [--garment <file.obj>] [--config <file.json>]";

/// Where the circumferences come from
#[derive(Debug, PartialEq)]
enum Source {
    /// Measurement service response saved to disk
    Response(PathBuf),
    Manual { chest: f32, waist: f32, hips: f32 },
}

#[derive(Debug, PartialEq)]
struct Args {
    body: PathBuf,
    height: f32,
    source: Source,
    garment: Option<PathBuf>,
    config: Option<PathBuf>,
}

fn parse_cm(flag: &str, value: Option<String>) -> Result<f32> {
    let value = value.with_context(|| format!("{} needs a value", flag))?;
    value
        .parse::<f32>()
        .with_context(|| format!("{} expects a number of centimeters, got '{}'", flag, value))
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Args> {
    let mut body = None;
    let mut height = None;
    let mut response = None;
    let (mut chest, mut waist, mut hips) = (None, None, None);
    let mut garment = None;
    let mut config = None;

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--height" => height = Some(parse_cm("--height", args.next())?),
            "--chest" => chest = Some(parse_cm("--chest", args.next())?),
            "--waist" => waist = Some(parse_cm("--waist", args.next())?),
            "--hips" => hips = Some(parse_cm("--hips", args.next())?),
            "--measurements" => {
                response = Some(PathBuf::from(args.next().context("--measurements needs a path")?))
            }
            "--garment" => garment = Some(PathBuf::from(args.next().context("--garment needs a path")?)),
            "--config" => config = Some(PathBuf::from(args.next().context("--config needs a path")?)),
            flag if flag.starts_with("--") => bail!("Unknown option {}\n{}", flag, USAGE),
            _ if body.is_none() => body = Some(PathBuf::from(&arg)),
            _ => bail!("Unexpected argument '{}'\n{}", arg, USAGE),
        }
    }

    let source = match (response, chest, waist, hips) {
        (Some(path), None, None, None) => Source::Response(path),
        (None, Some(chest), Some(waist), Some(hips)) => Source::Manual { chest, waist, hips },
        (Some(_), ..) => bail!("--measurements cannot be combined with --chest/--waist/--hips"),
        _ => bail!("Need either --measurements or all of --chest, --waist and --hips\n{}", USAGE),
    };

    Ok(Args {
        body: body.with_context(|| format!("Missing body mesh\n{}", USAGE))?,
        height: height.with_context(|| format!("Missing --height\n{}", USAGE))?,
        source,
        garment,
        config,
    })
}

fn measurements(args: &Args) -> Result<MeasurementSet> {
    let set = match &args.source {
        Source::Response(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let response = MeasurementResponse::from_json(&json)
                .with_context(|| format!("Failed to parse {}", path.display()))?;
            if let (Some(top), Some(bottom)) = (&response.top_size_eu, &response.bottom_size_eu) {
                log::info!("Suggested sizes: top {} / bottom {}", top, bottom);
            }
            response.to_measurement_set(args.height)?
        }
        Source::Manual { chest, waist, hips } => {
            MeasurementSet::new(args.height, *chest, *waist, *hips)
        }
    };
    set.validate()?;
    Ok(set)
}

fn run(args: Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => SceneConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => SceneConfig::default(),
    };
    let measurements = measurements(&args)?;

    let mut scene = SceneComposer::new(config).context("Failed to build scene")?;
    if !scene.load_body(&args.body)? {
        log::warn!("Continuing with overlays only");
    }
    if let Some(garment) = &args.garment {
        if !scene.load_garment(garment)? {
            log::warn!("Garment {} not loaded", garment.display());
        }
    }

    scene
        .apply_measurements(&measurements)
        .context("Failed to apply measurements")?;

    println!("=== BodyFit ===");
    println!(
        "Measurements: height {:.1} cm, chest {:.1} cm, waist {:.1} cm, hips {:.1} cm",
        measurements.height_cm, measurements.chest_cm, measurements.waist_cm, measurements.hips_cm
    );

    println!("\n--- Nodes ---");
    for node in scene.nodes() {
        let bounds = node.world_bounds();
        println!(
            "  {:<14} {:>7} vertices {:>7} triangles  y {:.2}..{:.2}",
            node.name,
            node.mesh.vertex_count(),
            node.mesh.triangle_count(),
            bounds.y.min,
            bounds.y.max
        );
    }

    println!("\n--- Rings ---");
    for ring in scene.rings() {
        println!(
            "  {:<6} y = {:.2} cm  radius = {:.2} cm",
            ring.band.name(),
            ring.y,
            ring.radius
        );
    }

    let vertex_bytes: usize = scene
        .nodes()
        .iter()
        .map(|node| node.mesh.vertex_count() * std::mem::size_of::<Vertex>())
        .sum();
    println!("\nTotal triangles: {}", scene.total_triangle_count());
    println!("Vertex buffer size: {} bytes", vertex_bytes);

    let orbit = OrbitCamera::default();
    let camera = orbit.camera(16.0 / 9.0);
    let uniform = CameraUniform::from_camera(&camera);
    let eye = orbit.eye();
    println!(
        "Default camera eye: ({:.1}, {:.1}, {:.1}), uniform {} bytes",
        eye.x,
        eye.y,
        eye.z,
        std::mem::size_of_val(&uniform)
    );

    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = parse_args(std::env::args().skip(1))?;
    log::info!("Starting BodyFit for {}", args.body.display());
    run(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(line: &str) -> Result<Args> {
        parse_args(line.split_whitespace().map(String::from))
    }

    #[test]
    fn test_parse_manual_measurements() {
        let parsed = args("body.obj --height 175 --chest 98 --waist 87.5 --hips 101.5").unwrap();

        assert_eq!(parsed.body, PathBuf::from("body.obj"));
        assert_eq!(parsed.height, 175.0);
        assert_eq!(
            parsed.source,
            Source::Manual {
                chest: 98.0,
                waist: 87.5,
                hips: 101.5
            }
        );
        assert_eq!(parsed.garment, None);
    }

    #[test]
    fn test_parse_response_file_and_options() {
        let parsed =
            args("--height 180 --measurements m.json body.obj --garment shorts.obj --config c.json")
                .unwrap();

        assert_eq!(parsed.source, Source::Response(PathBuf::from("m.json")));
        assert_eq!(parsed.garment, Some(PathBuf::from("shorts.obj")));
        assert_eq!(parsed.config, Some(PathBuf::from("c.json")));
    }

    #[test]
    fn test_parse_rejects_incomplete() {
        assert!(args("body.obj --chest 98 --waist 80 --hips 100").is_err());
        assert!(args("body.obj --height 175 --chest 98 --waist 80").is_err());
        assert!(args("body.obj --height 175 --measurements m.json --chest 98").is_err());
        assert!(args("body.obj --height tall --chest 98 --waist 80 --hips 90").is_err());
        assert!(args("body.obj other.obj --height 175").is_err());
        assert!(args("body.obj --height 175 --verbose").is_err());
    }

    #[test]
    fn test_manual_measurements_validated() {
        let parsed = args("body.obj --height 175 --chest 98 --waist 0 --hips 100").unwrap();
        assert!(measurements(&parsed).is_err());
    }

    #[test]
    fn test_response_file_measurements() {
        let path = std::env::temp_dir().join(format!("bodyfit_cli_resp_{}.json", std::process::id()));
        std::fs::write(&path, r#"{"chest": 98, "waist": 87.5, "hips": 101.5, "topSize": "M"}"#).unwrap();

        let parsed = Args {
            body: PathBuf::from("body.obj"),
            height: 175.0,
            source: Source::Response(path.clone()),
            garment: None,
            config: None,
        };
        let set = measurements(&parsed);
        std::fs::remove_file(&path).ok();

        assert_eq!(set.unwrap(), MeasurementSet::new(175.0, 98.0, 87.5, 101.5));
    }
}
