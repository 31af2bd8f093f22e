use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use genart::params::presets::{apply_theme, art_themes, builtin_presets, preset};
use genart::{
    HeadlessContainer, ImageFormat, RenderParameters, RenderSession, SessionOpts, export,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "genart", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame as PNG or SVG.
    Frame(FrameArgs),
    /// Render an animated PNG sequence.
    Animate(AnimateArgs),
    /// Print built-in presets and art themes as JSON.
    Presets,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatChoice {
    Png,
    Svg,
}

#[derive(Parser, Debug)]
struct SourceArgs {
    /// Parameters JSON. Defaults are used when omitted.
    #[arg(long)]
    params: Option<PathBuf>,

    /// Start from a built-in preset instead of a parameters file.
    #[arg(long, conflicts_with = "params")]
    preset: Option<String>,

    /// Art theme applied over the parameters.
    #[arg(long)]
    theme: Option<String>,

    /// Fixed random seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Container width in pixels; the height follows the 3:4 rule.
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Force the canvas height instead of deriving it.
    #[arg(long)]
    height: Option<u32>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Output path.
    #[arg(long)]
    out: PathBuf,

    /// Output format. Inferred from the extension when omitted.
    #[arg(long, value_enum)]
    format: Option<FormatChoice>,
}

#[derive(Parser, Debug)]
struct AnimateArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Output directory for `frame_NNNN.png` files.
    #[arg(long)]
    out_dir: PathBuf,

    /// Number of frames.
    #[arg(long, default_value_t = 30)]
    frames: u32,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Animate(args) => cmd_animate(args),
        Command::Presets => cmd_presets(),
    }
}

fn load_params(source: &SourceArgs) -> anyhow::Result<RenderParameters> {
    let params = match (&source.params, &source.preset) {
        (Some(path), _) => RenderParameters::from_path(path)
            .with_context(|| format!("load parameters '{}'", path.display()))?,
        (None, Some(id)) => {
            preset(id)
                .with_context(|| format!("unknown preset '{id}'"))?
                .settings
        }
        (None, None) => RenderParameters::default(),
    };
    Ok(match &source.theme {
        Some(id) => {
            anyhow::ensure!(
                art_themes().iter().any(|t| &t.id == id),
                "unknown theme '{id}'"
            );
            apply_theme(&params, id)
        }
        None => params,
    })
}

fn open_session(source: &SourceArgs, params: RenderParameters) -> anyhow::Result<RenderSession> {
    let mut opts = SessionOpts {
        seed: source.seed,
        ..SessionOpts::default()
    };
    if let Some(h) = source.height {
        opts.min_height = h;
        opts.max_height = h;
    }
    let host = Rc::new(HeadlessContainer::new(source.width, 0));
    RenderSession::initialize(host, params, opts).context("initialize render session")
}

fn ensure_parent(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let format = match args.format {
        Some(FormatChoice::Png) => ImageFormat::Png,
        Some(FormatChoice::Svg) => ImageFormat::Svg,
        None => ImageFormat::from_path(&args.out).unwrap_or(ImageFormat::Png),
    };
    let params = load_params(&args.source)?;
    let session = open_session(&args.source, params)?;

    let bytes = match format {
        ImageFormat::Png => {
            let frame = session.frame().context("session produced no frame")?;
            export::encode_png(&frame)?
        }
        ImageFormat::Svg => export::svg_document(&session.plan()).into_bytes(),
    };

    ensure_parent(&args.out)?;
    std::fs::write(&args.out, bytes)
        .with_context(|| format!("write {} '{}'", format.id(), args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_animate(args: AnimateArgs) -> anyhow::Result<()> {
    let mut params = load_params(&args.source)?;
    if !params.animated {
        tracing::info!("parameters are static; enabling animation for the sequence");
        params.animated = true;
    }
    let mut session = open_session(&args.source, params)?;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let frame_ms = 1000.0 / 60.0;
    for i in 0..args.frames {
        session.tick(f64::from(i) * frame_ms);
        let frame = session.frame().context("session produced no frame")?;
        let path = args.out_dir.join(format!("frame_{i:04}.png"));
        std::fs::write(&path, export::encode_png(&frame)?)
            .with_context(|| format!("write png '{}'", path.display()))?;
    }

    session.destroy();
    eprintln!("wrote {} frames to {}", args.frames, args.out_dir.display());
    Ok(())
}

fn cmd_presets() -> anyhow::Result<()> {
    let out = serde_json::json!({
        "presets": builtin_presets(),
        "themes": art_themes(),
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
