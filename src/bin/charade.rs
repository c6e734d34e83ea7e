use std::io::{BufRead as _, Write as _};
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use charade::{
    CATEGORIES, CpuSurface, FallbackSource, FrameClock as _, InstructionSource, LinesSource,
    ManualClock, Millis, SessionId, ShapeGrammar, SketchOpts, SketchSession, SystemClock,
};

#[derive(Parser, Debug)]
#[command(name = "charade", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the built-in categories.
    Categories,
    /// Print cleaned instructions and the shape extracted from each.
    Instructions(InstructionsArgs),
    /// Render a finished sketch (and optionally every animation frame) as PNG.
    Render(RenderArgs),
    /// Animate a sketch in real time and guess what it is.
    Play(PlayArgs),
}

#[derive(Parser, Debug)]
struct SourceArgs {
    /// Category to draw.
    #[arg(long)]
    category: Option<String>,

    /// Read instruction lines from a text file instead of the built-in table.
    #[arg(long = "instructions")]
    instructions: Option<PathBuf>,

    /// Options JSON (canvas, colors, timing, shape defaults).
    #[arg(long)]
    opts: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct InstructionsArgs {
    #[command(flatten)]
    source: SourceArgs,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Output PNG path for the finished sketch.
    #[arg(long)]
    out: PathBuf,

    /// Also write every animation frame into this directory.
    #[arg(long)]
    frames_dir: Option<PathBuf>,

    /// Frame rate used for `--frames-dir`.
    #[arg(long, default_value_t = 30)]
    fps: u32,
}

#[derive(Parser, Debug)]
struct PlayArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Seed for picking a category when none is given.
    #[arg(long)]
    seed: Option<u64>,

    /// Output PNG path for the finished sketch.
    #[arg(long, default_value = "charade.png")]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Categories => {
            for c in CATEGORIES {
                println!("{c}");
            }
            Ok(())
        }
        Command::Instructions(args) => cmd_instructions(args),
        Command::Render(args) => cmd_render(args),
        Command::Play(args) => cmd_play(args),
    }
}

fn load_opts(path: Option<&Path>) -> anyhow::Result<SketchOpts> {
    match path {
        Some(p) => SketchOpts::from_path(p).with_context(|| format!("load opts '{}'", p.display())),
        None => Ok(SketchOpts::default()),
    }
}

fn instruction_source(path: Option<&Path>) -> Box<dyn InstructionSource> {
    match path {
        Some(p) => Box::new(LinesSource::new(p)),
        None => Box::new(FallbackSource),
    }
}

fn new_session(category: &str, opts: SketchOpts) -> anyhow::Result<SketchSession<CpuSurface>> {
    let surface = CpuSurface::new(opts.canvas, opts.background, opts.cursor)
        .context("create drawing surface")?;
    Ok(SketchSession::new(SessionId(1), category, surface, opts))
}

fn cmd_instructions(args: InstructionsArgs) -> anyhow::Result<()> {
    let opts = load_opts(args.source.opts.as_deref())?;
    let category = args.source.category.as_deref().unwrap_or("cat");
    let lines = instruction_source(args.source.instructions.as_deref())
        .fetch(category)
        .with_context(|| format!("fetch instructions for '{category}'"))?;

    let grammar = ShapeGrammar::new(opts.shape_defaults);
    for instruction in charade::parse_instructions(&lines) {
        let shape = match grammar.extract(&instruction) {
            Some(s) => serde_json::to_string(&s).context("serialize shape")?,
            None => "-".to_owned(),
        };
        println!("{instruction}\t{shape}");
    }
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.fps > 0, "fps must be > 0");
    let opts = load_opts(args.source.opts.as_deref())?;
    let category = args.source.category.as_deref().unwrap_or("cat");
    let source = instruction_source(args.source.instructions.as_deref());

    let clock = ManualClock::new(Millis::ZERO);
    let mut session = new_session(category, opts)?;
    session.run(source.as_ref(), clock.now());

    let step = Millis(u64::from((1000 / args.fps).max(1)));
    let mut frame_index = 0u64;
    loop {
        if let Some(dir) = &args.frames_dir {
            let path = dir.join(format!("frame_{frame_index:05}.png"));
            session.surface().render(session.cursor())?.write_png(&path)?;
        }
        if session.next_deadline().is_none() {
            break;
        }
        clock.advance(step);
        session.tick_with(&clock);
        frame_index += 1;
    }

    session.surface().render(None)?.write_png(&args.out)?;
    eprintln!(
        "wrote {} ({} strokes, {} frames)",
        args.out.display(),
        session.stroke_count(),
        frame_index + 1
    );
    Ok(())
}

fn cmd_play(args: PlayArgs) -> anyhow::Result<()> {
    let opts = load_opts(args.source.opts.as_deref())?;
    let category = match args.source.category {
        Some(c) => c,
        None => {
            let seed = args.seed.unwrap_or_else(|| {
                std::time::SystemTime::now()
                    .duration_since(std::time::UNIX_EPOCH)
                    .map_or(0, |d| d.as_secs())
            });
            charade::pick_category(&[], seed)
                .context("no category available")?
                .to_owned()
        }
    };
    let source = instruction_source(args.source.instructions.as_deref());

    let clock = SystemClock::start();
    let mut session = new_session(&category, opts)?;
    eprintln!("the AI is drawing...");
    session.run(source.as_ref(), clock.now());

    while let Some(deadline) = session.next_deadline() {
        let wait = deadline.since(clock.now()).min(Millis(16));
        std::thread::sleep(std::time::Duration::from_millis(wait.0));
        session.tick_with(&clock);
    }

    session.surface().render(None)?.write_png(&args.out)?;
    eprintln!("sketch saved to {}", args.out.display());

    let guess = read_guess()?;
    let guess = session.submit_guess(&guess)?;
    if session.is_correct(&guess) {
        println!("correct! it was {category}");
    } else {
        println!("nope, it was {category}");
    }
    Ok(())
}

/// Prompt on stderr until a non-blank line arrives on stdin.
fn read_guess() -> anyhow::Result<String> {
    let mut stdin = std::io::stdin().lock();
    loop {
        eprint!("your guess: ");
        std::io::stderr().flush().context("flush prompt")?;
        let mut line = String::new();
        let n = stdin.read_line(&mut line).context("read guess")?;
        anyhow::ensure!(n > 0, "no guess entered");
        if !line.trim().is_empty() {
            return Ok(line);
        }
    }
}
