use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};

use yulescape::RenderBackend as _;

#[derive(Parser, Debug)]
#[command(name = "yulescape", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Write a single frame as an SVG document.
    Svg(FrameArgs),
    /// Render a numbered PNG sequence into a directory.
    Sequence(SequenceArgs),
    /// Print the draw commands of a frame as JSON.
    Dump(DumpArgs),
}

#[derive(Args, Debug)]
struct SceneArgs {
    /// Viewport width in pixels.
    #[arg(long, default_value_t = 1080.0)]
    width: f64,

    /// Viewport height in pixels.
    #[arg(long, default_value_t = 1920.0)]
    height: f64,

    /// Scene time in milliseconds; the first frame's time for `sequence`.
    #[arg(long, default_value_t = 0)]
    elapsed_ms: u64,

    /// Initial light mode.
    #[arg(long, value_enum, default_value_t = ModeChoice::Rainbow)]
    mode: ModeChoice,

    /// Taps applied to the light mode before rendering.
    #[arg(long, default_value_t = 0)]
    taps: u32,

    /// Sky theme; overrides the config file.
    #[arg(long, value_enum)]
    theme: Option<ThemeChoice>,

    /// Scene config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// TTF/OTF font for text shaping and raster output.
    #[arg(long)]
    font: Option<PathBuf>,

    /// Output pixels per viewport pixel.
    #[arg(long, default_value_t = 1.0)]
    scale: f64,

    /// Log at debug level.
    #[arg(long, default_value_t = false)]
    verbose: bool,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Output path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct SequenceArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Output directory.
    #[arg(long)]
    out: PathBuf,

    /// Number of frames.
    #[arg(long, default_value_t = 60)]
    frames: u64,

    /// Frames per second.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Enable frame-level parallelism.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Frames composed per chunk.
    #[arg(long, default_value_t = 64)]
    chunk_size: usize,

    /// Copy frames whose draw commands repeat an earlier frame.
    #[arg(long, default_value_t = false)]
    static_frame_elision: bool,
}

#[derive(Args, Debug)]
struct DumpArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Output JSON path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeChoice {
    Rainbow,
    Original,
    Off,
}

impl From<ModeChoice> for yulescape::LightMode {
    fn from(m: ModeChoice) -> Self {
        match m {
            ModeChoice::Rainbow => Self::Rainbow,
            ModeChoice::Original => Self::Original,
            ModeChoice::Off => Self::Off,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ThemeChoice {
    NightSky,
    WinterMorning,
}

impl From<ThemeChoice> for yulescape::SkyTheme {
    fn from(t: ThemeChoice) -> Self {
        match t {
            ThemeChoice::NightSky => Self::NightSky,
            ThemeChoice::WinterMorning => Self::WinterMorning,
        }
    }
}

/// Everything resolved from [`SceneArgs`] before rendering.
struct Prepared {
    scene: yulescape::Scene,
    size: yulescape::ViewportSize,
    mode: yulescape::LightMode,
    settings: yulescape::RenderSettings,
    font_bytes: Option<Vec<u8>>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Svg(args) => cmd_svg(args),
        Command::Sequence(args) => cmd_sequence(args),
        Command::Dump(args) => cmd_dump(args),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn prepare(args: &SceneArgs) -> anyhow::Result<Prepared> {
    init_logging(args.verbose);

    let mut config = match &args.config {
        Some(path) => yulescape::SceneConfig::from_path(path)
            .with_context(|| format!("load scene config '{}'", path.display()))?,
        None => yulescape::SceneConfig::default(),
    };
    if let Some(theme) = args.theme {
        config.theme = theme.into();
    }

    let font_bytes = match &args.font {
        Some(path) => Some(
            std::fs::read(path).with_context(|| format!("read font '{}'", path.display()))?,
        ),
        None => None,
    };

    let mut scene = yulescape::Scene::new(config)?;
    if let Some(bytes) = &font_bytes {
        let shaper = yulescape::TextShaper::from_font_bytes(bytes.clone())
            .context("register font for text metrics")?;
        scene = scene.with_metrics(yulescape::ParleyMetrics::new(shaper));
    }

    let mut mode = yulescape::LightMode::from(args.mode);
    for _ in 0..args.taps {
        mode = yulescape::on_tap(mode, yulescape::Point::ORIGIN);
    }

    Ok(Prepared {
        scene,
        size: yulescape::ViewportSize::new(args.width, args.height)?,
        mode,
        settings: yulescape::RenderSettings {
            scale: args.scale,
            clear_rgba: None,
        },
        font_bytes,
    })
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
    let p = prepare(&args.scene)?;
    let mut backend = yulescape::CpuBackend::new(p.settings.clone());
    if let Some(bytes) = p.font_bytes {
        backend = backend.with_font_bytes(bytes)?;
    }

    let list = p.scene.render(p.size, args.scene.elapsed_ms, p.mode);
    let frame = backend.render(&list, p.size)?;
    yulescape::write_png(&frame, &args.out)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_svg(args: FrameArgs) -> anyhow::Result<()> {
    let p = prepare(&args.scene)?;
    let mut backend = yulescape::SvgBackend::new(p.settings.clone());
    if let Some(bytes) = p.font_bytes {
        let shaper = yulescape::TextShaper::from_font_bytes(bytes)?;
        backend = backend.with_font_family(shaper.family());
    }

    let list = p.scene.render(p.size, args.scene.elapsed_ms, p.mode);
    let svg = backend.document(&list, p.size)?;
    ensure_parent(&args.out)?;
    std::fs::write(&args.out, svg)
        .with_context(|| format!("write svg '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_sequence(args: SequenceArgs) -> anyhow::Result<()> {
    let p = prepare(&args.scene)?;
    let spec = yulescape::SequenceSpec {
        frames: args.frames,
        fps: args.fps,
        start_ms: args.scene.elapsed_ms,
        size: p.size,
        mode: p.mode,
    };
    let threading = yulescape::RenderThreading {
        parallel: args.parallel,
        chunk_size: args.chunk_size,
        threads: args.threads,
        static_frame_elision: args.static_frame_elision,
    };

    let out = yulescape::render_sequence(
        &p.scene,
        &spec,
        &p.settings,
        p.font_bytes.as_deref(),
        &args.out,
        &threading,
    )
    .with_context(|| format!("render sequence into '{}'", args.out.display()))?;

    eprintln!(
        "wrote {} frames to {} ({} rendered, {} elided)",
        out.stats.frames_total,
        args.out.display(),
        out.stats.frames_rendered,
        out.stats.frames_elided
    );
    Ok(())
}

fn cmd_dump(args: DumpArgs) -> anyhow::Result<()> {
    let p = prepare(&args.scene)?;
    let list = p.scene.render(p.size, args.scene.elapsed_ms, p.mode);
    let json = serde_json::to_string_pretty(list.commands()).context("serialize draw list")?;

    match &args.out {
        Some(path) => {
            ensure_parent(path)?;
            std::fs::write(path, json).with_context(|| format!("write '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
