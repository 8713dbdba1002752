use clap::{Parser, Subcommand};
use plutchik::color::to_hex;
use plutchik::config;
use plutchik::dyad::score_description;
use plutchik::{DyadCategory, EmotionId, IntensityLevel, Reading, Wheel};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "plutchik", version, about, long_about = None)]
struct Cli {
    /// Read the wheel layout from this file instead of the user config
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Find the emotion and ring under a point, given as an offset from the wheel center
    Locate {
        #[arg(allow_hyphen_values = true)]
        x: f64,
        #[arg(allow_hyphen_values = true)]
        y: f64,
    },
    /// Print the angular span of an emotion's segment
    Span { emotion: EmotionId },
    /// Print the ring radii
    Rings,
    /// Look up the dyad formed by two emotions
    Dyad {
        first: EmotionId,
        second: EmotionId,
        /// Intensity of the first emotion
        #[arg(long, default_value = "medium")]
        first_intensity: IntensityLevel,
        /// Intensity of the second emotion
        #[arg(long, default_value = "medium")]
        second_intensity: IntensityLevel,
    },
    /// List dyads, optionally only one category
    List {
        #[arg(long)]
        category: Option<DyadCategory>,
    },
    /// Write the default config file if none exists
    InitConfig,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if matches!(cli.command, Commands::InitConfig) {
        let path = config::write_default_config()?;
        println!("{}", path.display());
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => config::load_from(path)?,
        None => config::load_or_default(),
    };
    let wheel = Wheel::new(&config.wheel)?;

    match cli.command {
        Commands::Locate { x, y } => locate(&wheel, x, y),
        Commands::Span { emotion } => {
            let span = wheel.geometry().segment_span(emotion);
            println!("{}: {} .. {}", emotion, span.start, span.end);
        }
        Commands::Rings => rings(&wheel),
        Commands::Dyad {
            first,
            second,
            first_intensity,
            second_intensity,
        } => dyad(&wheel, [(first, first_intensity), (second, second_intensity)]),
        Commands::List { category } => list(&wheel, category),
        Commands::InitConfig => {}
    }

    Ok(())
}

fn locate(wheel: &Wheel, x: f64, y: f64) {
    match wheel.geometry().locate(x, y) {
        Some((emotion, level)) => {
            let label = &wheel.catalog().emotion(emotion).tier(level).label;
            println!("{} {} ({})", emotion, level, label);
        }
        None => println!("outside the wheel"),
    }
}

fn rings(wheel: &Wheel) {
    let rings = wheel.geometry().ring_boundaries();
    for level in [IntensityLevel::Strong, IntensityLevel::Medium, IntensityLevel::Mild] {
        let (inner, outer) = rings.ring(level);
        println!("{:<6} {} .. {}", level, inner, outer);
    }
    println!("labels {}", wheel.geometry().label_radius());
    println!("canvas {}", wheel.geometry().canvas_size());
}

fn dyad(wheel: &Wheel, picks: [(EmotionId, IntensityLevel); 2]) {
    let reading = wheel.reading_for(picks);
    let [a, b] = reading.emotions();
    let stops: Vec<_> = reading.gradient().into_iter().map(to_hex).collect();

    match reading {
        Reading::Dyad { dyad, score, .. } => {
            println!("{} ({} dyad, {})", dyad.name, dyad.category, dyad.intensity);
            println!("{} + {}", a, b);
            println!("score {}/6: {}", score, score_description(score));
            println!("colors {}", stops.join(" "));
            println!();
            println!("{}", dyad.description);
            println!();
            println!("{}", dyad.explanation);
        }
        Reading::Custom { .. } => {
            println!("{} + {} (custom blend)", a, b);
            println!("colors {}", stops.join(" "));
        }
    }

    for emotion in std::iter::once(a).chain((a != b).then_some(b)) {
        println!(
            "{}: {}",
            emotion,
            wheel.catalog().emotion(emotion).description
        );
    }
}

fn list(wheel: &Wheel, category: Option<DyadCategory>) {
    for dyad in wheel
        .catalog()
        .dyads()
        .iter()
        .filter(|d| category.is_none_or(|c| d.category == c))
    {
        let [a, b] = dyad.emotions;
        println!("{:<16} {:<10} {} + {}", dyad.name.as_str(), dyad.category, a, b);
    }
}
