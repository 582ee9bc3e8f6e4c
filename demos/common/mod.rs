use std::env;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use chartive::Render;
use chartive::style::palette;

#[derive(Debug, Clone, Default)]
struct Args {
    png: Option<PathBuf>,
    palette: Option<palette::Builtin>,
}

fn parse_args() -> Args {
    let mut args = Args::default();

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "default" => args.palette = Some(palette::Builtin::Default),
            "alternate" => args.palette = Some(palette::Builtin::Alternate),
            _ if arg.starts_with("png=") => {
                let filename = arg.trim_start_matches("png=");
                args.png = Some(PathBuf::from(filename));
            }
            _ => {
                eprintln!("Unknown argument: {}", arg);
            }
        }
    }

    args
}

/// Palette selected on the command line, if any
#[allow(dead_code)]
pub fn palette() -> Option<palette::Builtin> {
    parse_args().palette
}

/// Renders `chart` to a PNG file named after the command line, or `default_name.png`
pub fn save_chart<C: Render>(chart: &C, default_name: &str) {
    let args = parse_args();
    let path = args
        .png
        .unwrap_or_else(|| PathBuf::from(format!("{}.png", default_name)));

    let file = File::create(&path).unwrap();
    let mut out = BufWriter::new(file);
    chart.render(chartive_pxl::png, &mut out).unwrap();
    println!("saved {}", path.display());
}
