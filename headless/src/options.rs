use clap::Parser;

/// Headless Pong: the simulation core driven by a scripted player
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "pong-headless")]
#[command(author, version, about)]
pub struct Options {
    /// Seed for the serve generator (drawn from OS entropy when absent)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of matches to play
    #[arg(long, default_value = "1")]
    pub matches: u32,

    /// Run without frame pacing or pauses
    #[arg(long)]
    pub fast: bool,

    /// Give up on a match after this many frames (default: an hour at 60 Hz)
    #[arg(long, default_value = "216000")]
    pub max_frames: u64,
}
