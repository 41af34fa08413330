use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::Context as _;
use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "loopsmith", version, about = "Turn an animated GIF into a seamless loop")]
struct Cli {
    /// Input GIF.
    input: PathBuf,

    /// Output GIF (defaults to `<input>.loop.gif`).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Decode the input and exit.
    #[arg(long)]
    check: bool,

    /// Print the input frame count and exit.
    #[arg(long)]
    get_frames: bool,

    /// JSON file with base edit options; flags given here override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the resolved options as JSON and exit.
    #[arg(long)]
    print_config: bool,

    /// Keep transparency instead of flattening onto an opaque canvas.
    #[arg(long)]
    transparent: bool,

    /// Frames dropped from both ends.
    #[arg(long, allow_negative_numbers = true)]
    trim_edges: Option<i64>,

    #[arg(long, allow_negative_numbers = true)]
    trim_start: Option<i64>,

    #[arg(long, allow_negative_numbers = true)]
    trim_end: Option<i64>,

    /// Drop every nth frame (0 disables).
    #[arg(long, allow_negative_numbers = true)]
    cut_interval: Option<i64>,

    /// Fixed length after trimming (0 disables).
    #[arg(long, allow_negative_numbers = true)]
    window: Option<i64>,

    /// Rotate the loop start by this many positions.
    #[arg(long, allow_negative_numbers = true)]
    shift: Option<i64>,

    /// None, Mirror, FlipH, FlipV, Shuffle, PanH or PanV.
    #[arg(long)]
    stitch: Option<String>,

    /// Fade toward this RRGGBB color around the seam.
    #[arg(long)]
    fade_color: Option<String>,

    #[arg(long, allow_negative_numbers = true)]
    fade_rate: Option<f64>,

    /// Delay multiplier; negative plays the source backwards.
    #[arg(long, allow_negative_numbers = true, conflicts_with = "speed")]
    scale_delay: Option<f64>,

    /// Playback speed multiplier, the inverse of --scale-delay.
    #[arg(long, allow_negative_numbers = true)]
    speed: Option<f64>,

    /// Pixels per frame for PanH and PanV.
    #[arg(long, allow_negative_numbers = true)]
    pan_velocity: Option<f64>,

    /// -1 plays once, 0 loops forever, N repeats N times.
    #[arg(long, allow_negative_numbers = true)]
    loop_count: Option<i64>,

    #[arg(long, value_enum, default_value_t = QuantizerChoice::Neuquant)]
    quantizer: QuantizerChoice,

    /// Log pipeline stages to stderr.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum QuantizerChoice {
    Neuquant,
    Exact,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let opts = resolve_options(&cli)?;
    let config = opts.validate()?;
    if cli.print_config {
        println!(
            "{}",
            serde_json::to_string_pretty(&opts).context("serialize options")?
        );
        return Ok(());
    }

    if cli.check || cli.get_frames {
        let anim = loopsmith::decode_file(&cli.input)?;
        if cli.get_frames {
            println!("{}", anim.frame_count());
        }
        return Ok(());
    }

    let quantizer: Box<dyn loopsmith::Quantizer> = match cli.quantizer {
        QuantizerChoice::Neuquant => Box::new(loopsmith::NeuQuantizer::default()),
        QuantizerChoice::Exact => Box::new(loopsmith::ExactQuantizer),
    };
    let editor = loopsmith::Editor::new(config).with_quantizer(quantizer);

    let source = loopsmith::decode_file(&cli.input)?;
    let edited = editor.edit(&source)?;

    let out = cli.out.clone().unwrap_or_else(|| default_out_path(&cli.input));
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    loopsmith::encode_file(&out, &edited)?;

    eprintln!("wrote {} ({} frames)", out.display(), edited.frame_count());
    Ok(())
}

fn read_options_json(path: &Path) -> anyhow::Result<loopsmith::EditOptions> {
    let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
    let r = BufReader::new(f);
    let opts: loopsmith::EditOptions =
        serde_json::from_reader(r).with_context(|| "parse config JSON")?;
    Ok(opts)
}

/// Config file first, then any flag given on the command line.
fn resolve_options(cli: &Cli) -> anyhow::Result<loopsmith::EditOptions> {
    let mut opts = match &cli.config {
        Some(path) => read_options_json(path)?,
        None => loopsmith::EditOptions::default(),
    };

    opts.transparent |= cli.transparent;
    if let Some(v) = cli.trim_edges {
        opts.trim_edges = v;
    }
    if let Some(v) = cli.trim_start {
        opts.trim_start = v;
    }
    if let Some(v) = cli.trim_end {
        opts.trim_end = v;
    }
    if let Some(v) = cli.cut_interval {
        opts.cut_interval = v;
    }
    if let Some(v) = cli.window {
        opts.window = v;
    }
    if let Some(v) = cli.shift {
        opts.shift = v;
    }
    if let Some(v) = &cli.stitch {
        opts.stitch = v.clone();
    }
    if let Some(v) = &cli.fade_color {
        opts.fade_color = Some(v.clone());
    }
    if let Some(v) = cli.fade_rate {
        opts.fade_rate = v;
    }
    if let Some(v) = cli.scale_delay {
        opts.scale_delay = v;
    }
    if let Some(s) = cli.speed {
        opts.scale_delay = 1.0 / s;
    }
    if let Some(v) = cli.pan_velocity {
        opts.pan_velocity = v;
    }
    if let Some(v) = cli.loop_count {
        opts.loop_count = v;
    }
    Ok(opts)
}

fn default_out_path(input: &Path) -> PathBuf {
    input.with_extension("loop.gif")
}
