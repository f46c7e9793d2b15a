use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "imgrom", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,

    /// Log per-frame progress.
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encode a single still image as a 200x150 ROM.
    Image(ImageArgs),
    /// Encode frames from a video or a directory of stills as a multi-frame ROM.
    Video(VideoArgs),
}

#[derive(Parser, Debug)]
struct OutputArgs {
    /// Output Verilog path.
    #[arg(long, default_value = imgrom::DEFAULT_OUT_PATH)]
    out: PathBuf,

    /// Name of the generated Verilog module.
    #[arg(long = "module", default_value = imgrom::DEFAULT_MODULE_NAME)]
    module_name: String,
}

#[derive(Parser, Debug)]
struct ImageArgs {
    /// Input image. A synthetic gradient is used if it cannot be opened.
    #[arg(default_value = imgrom::DEFAULT_IMAGE_INPUT)]
    input: PathBuf,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Parser, Debug)]
struct VideoArgs {
    /// Video file (mp4/avi/mov/mkv, needs `ffmpeg` on PATH) or a directory of png/jpg frames.
    #[arg(default_value = imgrom::DEFAULT_VIDEO_INPUT)]
    input: PathBuf,

    /// Number of frames stored in the ROM; missing frames are synthesized.
    #[arg(
        default_value_t = imgrom::DEFAULT_VIDEO_FRAMES,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    num_frames: u32,

    #[command(flatten)]
    output: OutputArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Image(args) => cmd_image(args),
        Command::Video(args) => cmd_video(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_image(args: ImageArgs) -> anyhow::Result<()> {
    let cfg = imgrom::RomConfig::still()
        .with_out_path(args.output.out)
        .with_module_name(args.output.module_name);
    let decoder = imgrom::ImageFileDecoder::for_config(&cfg);
    let frame = imgrom::load_still(&args.input, &cfg, &decoder);
    write(&cfg, &[frame])
}

fn cmd_video(args: VideoArgs) -> anyhow::Result<()> {
    let cfg = imgrom::RomConfig::video(args.num_frames)
        .with_out_path(args.output.out)
        .with_module_name(args.output.module_name);
    let decoder = imgrom::ImageFileDecoder::for_config(&cfg);
    let frames = imgrom::load_sequence(&args.input, &cfg, &decoder);
    write(&cfg, &frames)
}

fn write(cfg: &imgrom::RomConfig, frames: &[imgrom::FrameRgb]) -> anyhow::Result<()> {
    let summary = imgrom::write_rom_file(cfg, frames)
        .with_context(|| format!("write rom '{}'", cfg.out_path.display()))?;
    eprintln!(
        "wrote {} ({} entries, {}-bit address)",
        summary.out_path.display(),
        summary.entries,
        summary.addr_bits
    );
    Ok(())
}
