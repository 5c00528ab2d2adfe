use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[clap(author, version)]
#[clap(name = "mancala")]
#[clap(about = "Records self-play mancala games into a value table and plays against it", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Record(RecordCommand),
    Match(MatchCommand),
    Stat(StatCommand),
    Replay(ReplayCommand),
}

/// Plays batches of random games and folds them into the value table.
#[derive(Args)]
pub struct RecordCommand {
    /// Number of batches to play.
    pub cycles: usize,

    /// Path of the value table.
    pub db: String,

    #[clap(short, long, default_value_t = String::from("mancala.conf"))]
    pub config: String,

    /// Also save every batch as a game log in this directory.
    #[clap(short, long)]
    pub games_dir: Option<String>,
}

/// Plays the value table as player A against a random player B.
#[derive(Args)]
pub struct MatchCommand {
    /// Number of games to play.
    pub cycles: usize,

    /// Path of the value table.
    pub db: String,

    #[clap(short, long, default_value_t = String::from("mancala.conf"))]
    pub config: String,
}

/// Prints the size of the value table and how often its moves were observed.
#[derive(Args)]
pub struct StatCommand {
    pub db: String,
}

/// Rebuilds or extends the value table from saved game logs.
#[derive(Args)]
pub struct ReplayCommand {
    pub games_dir: String,

    pub db: String,
}
