use std::env;
use std::fs;

use catalog::EntityCatalog;
use foundation::bounds::Aabb2;
use foundation::math::Vec2;
use hierarchy::{BarParams, Hierarchy, bar_spans};
use tracing::info;
use tracing_subscriber::EnvFilter;
use viewport::{FitParams, Region, ScaleRange, fit};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(e) = real_main() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn real_main() -> Result<(), String> {
    let mut args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        return Err(usage());
    }

    let cmd = args[1].clone();
    args.drain(0..2);

    match cmd.as_str() {
        "tree" => cmd_tree(args),
        "bar" => cmd_bar(args),
        "fit" => cmd_fit(args),
        _ => Err(usage()),
    }
}

fn load_hierarchy(path: &str) -> Result<Hierarchy, String> {
    let bytes = fs::read(path).map_err(|e| format!("read {path}: {e}"))?;
    let catalog = EntityCatalog::from_json_slice(&bytes).map_err(|e| e.to_string())?;
    info!(records = catalog.len(), "loaded catalog");
    Hierarchy::build(&catalog).map_err(|e| e.to_string())
}

fn cmd_tree(args: Vec<String>) -> Result<(), String> {
    // choroview tree <records.json>
    let [path] = args.as_slice() else {
        return Err(usage());
    };

    let hierarchy = load_hierarchy(path)?;
    println!("total aggregate: {}", hierarchy.total_aggregate());
    for node_id in hierarchy.descendants() {
        let node = hierarchy.node(node_id);
        let record = node.record.as_ref().expect("descendants carry records");
        let indent = "  ".repeat(node.depth as usize);
        println!(
            "{indent}{} ({}) aggregate={} interval=[{}, {}]",
            record.id, record.name, node.aggregate_value, node.interval.start, node.interval.end
        );
    }
    Ok(())
}

fn cmd_bar(args: Vec<String>) -> Result<(), String> {
    // choroview bar <records.json> [--width W] [--padding P]
    if args.is_empty() {
        return Err(usage());
    }
    let path = args[0].clone();
    let mut params = BarParams::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--width" => {
                params.width_px = parse_flag_value(&args, &mut i, "--width")?;
            }
            "--padding" => {
                params.padding_px = parse_flag_value(&args, &mut i, "--padding")?;
            }
            other => {
                return Err(format!("unknown arg: {other}\n\n{}", usage()));
            }
        }
        i += 1;
    }

    let hierarchy = load_hierarchy(&path)?;
    for span in bar_spans(&hierarchy, &params) {
        println!(
            "{}\t[{:.2}, {:.2}]\t{}\t{}",
            span.id,
            span.start_px,
            span.end_px,
            span.percent_label(),
            if span.left_justified { "left" } else { "right" }
        );
    }
    Ok(())
}

fn cmd_fit(args: Vec<String>) -> Result<(), String> {
    // choroview fit <min_x> <min_y> <max_x> <max_y>
    //   [--viewport W H] [--margin M] [--scale-range MIN MAX]
    if args.len() < 4 {
        return Err(usage());
    }
    let mut coords = [0.0f64; 4];
    for (slot, raw) in coords.iter_mut().zip(&args[..4]) {
        *slot = raw
            .parse()
            .map_err(|e| format!("invalid coordinate {raw}: {e}"))?;
    }
    let bounds = Aabb2::new(Vec2::new(coords[0], coords[1]), Vec2::new(coords[2], coords[3]));

    let mut viewport = Vec2::new(960.0, 500.0);
    let mut margin = 0.9;
    let mut scale_range = ScaleRange::default();

    let mut i = 4;
    while i < args.len() {
        match args[i].as_str() {
            "--viewport" => {
                viewport.x = parse_flag_value(&args, &mut i, "--viewport")?;
                viewport.y = parse_flag_value(&args, &mut i, "--viewport")?;
            }
            "--margin" => {
                margin = parse_flag_value(&args, &mut i, "--margin")?;
            }
            "--scale-range" => {
                scale_range.min = parse_flag_value(&args, &mut i, "--scale-range")?;
                scale_range.max = parse_flag_value(&args, &mut i, "--scale-range")?;
            }
            other => {
                return Err(format!("unknown arg: {other}\n\n{}", usage()));
            }
        }
        i += 1;
    }

    let mut params = FitParams::new(viewport, bounds);
    params.margin = margin;
    params.scale_range = scale_range;

    let camera = fit(&Region::Bounds(bounds), &params);
    let payload = serde_json::json!({
        "scale": camera.scale,
        "translate": [camera.translate.x, camera.translate.y],
    });
    println!("{payload}");
    Ok(())
}

fn parse_flag_value(args: &[String], i: &mut usize, flag: &str) -> Result<f64, String> {
    *i += 1;
    let Some(raw) = args.get(*i) else {
        return Err(format!("{flag} requires a value"));
    };
    raw.parse().map_err(|e| format!("invalid {flag} value {raw}: {e}"))
}

fn usage() -> String {
    let exe = env::args().next().unwrap_or_else(|| "choroview".to_string());
    format!(
        "Usage:\n  {exe} tree <records.json>\n  {exe} bar <records.json> [--width W] [--padding P]\n  {exe} fit <min_x> <min_y> <max_x> <max_y> [--viewport W H] [--margin M] [--scale-range MIN MAX]\n\nNotes:\n- Records are a JSON array; `iso`/`emissions`/`parentId` field names are accepted.\n- `bar` prints leaf segments left to right with their percent labels.\n- `fit` prints the camera transform framing the bounding box.\n"
    )
}
