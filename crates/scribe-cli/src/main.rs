mod cmd_archive;
mod cmd_init;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "scribe", version, about = "Session activity archiver")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Initialize a new .scribe/ workspace
    Init,
    /// Reconstruct, classify, and archive the session's activity
    Archive {
        /// Session start as RFC 3339; falls back to $SCRIBE_SESSION_START,
        /// then to "now" (reported as a near-zero session)
        #[arg(long)]
        since: Option<String>,
        /// Project root (defaults to the enclosing .scribe/ workspace, then cwd)
        #[arg(long)]
        root: Option<String>,
        /// Task snapshot JSON (defaults to .scribe/tasks.json)
        #[arg(long)]
        tasks: Option<String>,
        /// Worklist configuration YAML (defaults to .scribe/worklist.yaml)
        #[arg(long)]
        config: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("SCRIBE_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cwd = std::env::current_dir()?;

    match cli.cmd {
        Command::Init => cmd_init::execute(&cwd),
        Command::Archive {
            since,
            root,
            tasks,
            config,
        } => cmd_archive::execute(&cmd_archive::ArchiveParams {
            cwd: &cwd,
            since: since.as_deref(),
            root: root.as_deref(),
            tasks: tasks.as_deref(),
            config: config.as_deref(),
        }),
    }
}
