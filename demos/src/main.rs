mod tests;

use anyhow::Result;
use clap::{Parser, ValueEnum};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Scenario {
    /// Walk a closed chain of bones and print every joint.
    BoneChain,
    /// Interpolate between two orientations.
    Interpolate,
    /// Convert a transform to the other handedness and back.
    Handedness,
    /// Serialize a transform to JSON.
    #[cfg(feature = "serde")]
    Serialize,
}

#[derive(Parser, Debug)]
#[command(version, about = "mathing demos")]
struct Args {
    /// Scenario to run. Every scenario runs when omitted.
    #[arg(value_enum)]
    scenario: Option<Scenario>,

    /// Number of bones of the chain.
    #[arg(long, default_value_t = 6)]
    bones: usize,

    /// Number of interpolation steps.
    #[arg(long, default_value_t = 8)]
    steps: usize,

    /// Maximum log level.
    #[arg(long, default_value_t = tracing::Level::INFO)]
    log_level: tracing::Level,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .init();

    let scenarios = match args.scenario {
        Some(s) => vec![s],
        None => Scenario::value_variants().to_vec(),
    };

    scenarios.into_iter().try_for_each(|s| {
        tracing::info!("======== {:?} ========", s);
        match s {
            Scenario::BoneChain => tests::bone_chain(args.bones),
            Scenario::Interpolate => tests::interpolate(args.steps),
            Scenario::Handedness => tests::handedness(),
            #[cfg(feature = "serde")]
            Scenario::Serialize => tests::serialize(),
        }
    })
}
