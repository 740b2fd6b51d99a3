//! Example: Morph an OBJ body to a measurement set and inspect the result.
//!
//! Run with: cargo run --example morph_obj -- assets/mannequin.obj 175 98 87.5 101.5

use std::env;

use bodyfit_core::{load_obj, MeasurementSet, MorphEngine};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 6 {
        println!("Usage: morph_obj <path-to-obj> <height> <chest> <waist> <hips>");
        println!("\nExample:");
        println!("  cargo run --example morph_obj -- assets/mannequin.obj 175 98 87.5 101.5");
        return;
    }

    let values: Result<Vec<f32>, _> = args[2..6].iter().map(|s| s.parse::<f32>()).collect();
    let Ok(values) = values else {
        eprintln!("Measurements must be numbers");
        std::process::exit(1);
    };
    let measurements = MeasurementSet::new(values[0], values[1], values[2], values[3]);

    let path = &args[1];
    println!("Loading OBJ file: {}", path);

    let base = match load_obj(path) {
        Ok(mesh) => mesh,
        Err(e) => {
            eprintln!("Failed to load OBJ: {}", e);
            std::process::exit(1);
        }
    };

    let engine = MorphEngine::default();
    match engine.morph(&base, &measurements) {
        Ok(morphed) => {
            println!("\n=== Morph ===");
            println!("Vertices: {}", morphed.vertex_count());
            println!("Triangles: {}", morphed.triangle_count());
            for (label, mesh) in [("Base", &base), ("Morphed", &morphed)] {
                let b = &mesh.bounds;
                println!(
                    "{:>8} bounds: ({:.2}, {:.2}, {:.2}) to ({:.2}, {:.2}, {:.2})",
                    label, b.x.min, b.y.min, b.z.min, b.x.max, b.y.max, b.z.max
                );
            }

            let c = engine.calibration();
            println!("\n--- Bands ---");
            for (name, fraction) in [
                ("chest", c.chest.fraction),
                ("waist", c.waist.fraction),
                ("hips", c.hips.fraction),
            ] {
                println!("  {:<6} y = {:.2}", name, base.bounds.y.at(fraction));
            }
        }
        Err(e) => {
            eprintln!("Failed to morph: {}", e);
            std::process::exit(1);
        }
    }
}
