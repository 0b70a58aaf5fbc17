use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

use keepsake::{Evaluator, Millis, Platform, SafeAreaInsets, Screen, Viewport};

#[derive(Parser, Debug)]
#[command(name = "keepsake", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate the screen at a timestamp and print the frame as JSON.
    Frame(FrameArgs),
    /// Print the mounted screen model as JSON.
    Model(ModelArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Viewport width in points.
    #[arg(long, default_value_t = 800.0)]
    width: f64,

    /// Viewport height in points.
    #[arg(long, default_value_t = 1600.0)]
    height: f64,

    /// Timestamp in milliseconds since mount.
    #[arg(long)]
    at: u64,

    /// Particle RNG seed; omit for a fresh random mount.
    #[arg(long)]
    seed: Option<u64>,

    /// Host platform.
    #[arg(long, value_enum, default_value_t = PlatformChoice::Ios)]
    platform: PlatformChoice,
}

#[derive(Parser, Debug)]
struct ModelArgs {
    /// Viewport width in points.
    #[arg(long, default_value_t = 800.0)]
    width: f64,

    /// Viewport height in points.
    #[arg(long, default_value_t = 1600.0)]
    height: f64,

    /// Particle RNG seed; omit for a fresh random mount.
    #[arg(long)]
    seed: Option<u64>,

    /// Host platform.
    #[arg(long, value_enum, default_value_t = PlatformChoice::Ios)]
    platform: PlatformChoice,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PlatformChoice {
    Ios,
    Android,
    Web,
}

impl From<PlatformChoice> for Platform {
    fn from(choice: PlatformChoice) -> Self {
        match choice {
            PlatformChoice::Ios => Platform::Ios,
            PlatformChoice::Android => Platform::Android,
            PlatformChoice::Web => Platform::Web,
        }
    }
}

fn mount(width: f64, height: f64, seed: Option<u64>, platform: PlatformChoice) -> anyhow::Result<Screen> {
    let viewport = Viewport::new(width, height).context("invalid viewport")?;
    let mut builder = Screen::builder(viewport)
        .insets(SafeAreaInsets::default())
        .platform(platform.into());
    if let Some(seed) = seed {
        builder = builder.seed(seed);
    }
    builder.build().context("failed to mount screen")
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => {
            let screen = mount(args.width, args.height, args.seed, args.platform)?;
            let frame = Evaluator::eval_frame(&screen, Millis(args.at))
                .context("failed to evaluate frame")?;
            println!("{}", serde_json::to_string_pretty(&frame)?);
        }
        Command::Model(args) => {
            let screen = mount(args.width, args.height, args.seed, args.platform)?;
            println!("{}", serde_json::to_string_pretty(&screen)?);
        }
    }
    Ok(())
}
