use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "gridgif", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Render the full animation: a folder of stills plus the GIF.
    Render(RenderArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input animation config JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Frame position (1-based).
    #[arg(long)]
    frame: usize,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input animation config JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Directory to create the output folder under.
    #[arg(long, default_value = ".")]
    root: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Render(args) => cmd_render(args),
    }
}

fn read_config(path: &Path) -> anyhow::Result<gridgif::GifConfig> {
    let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
    let r = BufReader::new(f);
    let config: gridgif::GifConfig =
        serde_json::from_reader(r).with_context(|| "parse config JSON")?;
    Ok(config)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let config = read_config(&args.in_path)?;
    config.validate()?;

    if args.frame == 0 || args.frame > config.frames as usize {
        anyhow::bail!("frame position must be in 1..={}", config.frames);
    }

    // The painter carries state across frames, so everything up to the
    // requested position is filled before the still is taken.
    let mut painter = config.build_painter();
    let frames = (0..args.frame)
        .map(|_| gridgif::Frame::new(config.canvas.width, config.canvas.height))
        .collect();
    let mut seq = gridgif::FrameSequence::from_frames(frames);
    seq.fill(
        config.cell.width,
        config.cell.height,
        painter.as_mut(),
        &[],
    )?;

    let frame = seq
        .get(args.frame - 1)
        .context("frame position out of range after fill (bug)")?;

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer(
        &args.out,
        frame.data(),
        frame.width(),
        frame.height(),
        image::ExtendedColorType::Rgb8,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let config = read_config(&args.in_path)?;
    let mut painter = config.build_painter();

    let dir = gridgif::render_gif(&config, painter.as_mut(), &args.root)?;

    eprintln!("wrote {}", dir.display());
    Ok(())
}
