use clap::Parser;

#[derive(Parser)]
#[command(
    name = "ytapi",
    about = "HTTP service exposing YouTube transcripts",
    version = env!("GIT_DESCRIBE"),
)]
pub struct Cli {
    /// Address to bind (default 0.0.0.0)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (default 8000)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Default caption language, repeat to set fallback order (default: de, en)
    #[arg(short, long = "lang")]
    pub langs: Vec<String>,

    /// Print effective settings on startup
    #[arg(short, long)]
    pub verbose: bool,
}
