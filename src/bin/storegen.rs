use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "storegen", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a store icon as a PNG.
    Icon(IconArgs),
    /// Render the 1024x500 promotional feature graphic as a PNG.
    Feature(FeatureArgs),
    /// Render an arbitrary graphic described by a JSON file.
    Compose(ComposeArgs),
}

#[derive(Parser, Debug)]
struct IconArgs {
    /// Icon rendition to draw.
    #[arg(long, value_enum, default_value_t = PresetChoice::VectorExact)]
    preset: PresetChoice,

    /// Square output size in pixels.
    #[arg(long, default_value_t = 512)]
    size: u32,

    /// Output PNG path.
    #[arg(long, default_value = "playstore_icon_512.png")]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct FeatureArgs {
    /// Output PNG path.
    #[arg(long, default_value = "playstore_feature_graphic.png")]
    out: PathBuf,

    /// Font file used for all text (falls back to system fonts).
    #[arg(long)]
    font: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ComposeArgs {
    /// Input graphic JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PresetChoice {
    /// Faithful projection of the launcher vector, highlight included.
    VectorExact,
    /// Proportional full-square redesign.
    #[value(name = "guidelines-2025")]
    Guidelines2025,
}

impl From<PresetChoice> for storegen::IconPreset {
    fn from(choice: PresetChoice) -> Self {
        match choice {
            PresetChoice::VectorExact => storegen::IconPreset::VectorExact,
            PresetChoice::Guidelines2025 => storegen::IconPreset::Guidelines2025,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Icon(args) => cmd_icon(args),
        Command::Feature(args) => cmd_feature(args),
        Command::Compose(args) => cmd_compose(args),
    }
}

fn cmd_icon(args: IconArgs) -> anyhow::Result<()> {
    let graphic = storegen::icon(args.preset.into(), args.size)?;
    render_and_write(&graphic, &args.out)
}

fn cmd_feature(args: FeatureArgs) -> anyhow::Result<()> {
    let mut spec = storegen::FeatureGraphicSpec::default();
    if let Some(font) = &args.font {
        spec.font_source = Some(font.display().to_string());
    }
    let graphic = storegen::feature_graphic(&spec)?;
    render_and_write(&graphic, &args.out)
}

fn cmd_compose(args: ComposeArgs) -> anyhow::Result<()> {
    let graphic = read_graphic_json(&args.in_path)?;
    graphic.validate()?;
    render_and_write(&graphic, &args.out)
}

fn read_graphic_json(path: &Path) -> anyhow::Result<storegen::Graphic> {
    let f = File::open(path).with_context(|| format!("open graphic '{}'", path.display()))?;
    let r = BufReader::new(f);
    let graphic: storegen::Graphic =
        serde_json::from_reader(r).with_context(|| "parse graphic JSON")?;
    Ok(graphic)
}

fn render_and_write(graphic: &storegen::Graphic, out: &Path) -> anyhow::Result<()> {
    let mut fonts = storegen::TextEngine::new();
    let frame = storegen::compose(graphic, &mut fonts)?;
    let bytes = storegen::write_png(&frame, out)?;

    println!("✓ wrote {}", out.display());
    println!("  {}x{} pixels", frame.width, frame.height);
    println!("  file size: {:.1} KB", bytes as f64 / 1024.0);
    Ok(())
}
