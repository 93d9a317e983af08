//! Trendkit CLI - GitHub trending discovery and README retrieval

mod mcp;

use clap::{Parser, Subcommand};
use std::io::{self, Write};
use trendkit::{ReadmeRequest, Tool, TrendingRequest, TOOL_LLMTXT};

/// Trendkit - GitHub trending tools for AI assistants
#[derive(Parser, Debug)]
#[command(name = "trendkit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Print full tool documentation (llmtxt)
    #[arg(long)]
    llmtxt: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run as MCP (Model Context Protocol) server over stdio
    Mcp,
    /// List trending repositories
    Trending {
        /// Time window: daily, weekly, or monthly
        #[arg(long, default_value = "daily")]
        since: String,

        /// Programming language filter, e.g. "rust"
        #[arg(long, default_value = "")]
        language: String,
    },
    /// Fetch README documentation for repositories
    Readme {
        /// Repositories in owner/name form
        repositories: Vec<String>,
    },
}

#[tokio::main]
async fn main() {
    // Logs go to stderr so the MCP stdio channel stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.llmtxt {
        writeln_safe(TOOL_LLMTXT);
        std::process::exit(0);
    }

    match cli.command {
        Some(Commands::Mcp) => {
            mcp::run_server().await;
        }
        Some(Commands::Trending { since, language }) => {
            let tool = Tool::default();
            let report = tool
                .get_github_trending(TrendingRequest { since, language })
                .await;
            writeln_safe(&report);
        }
        Some(Commands::Readme { repositories }) => {
            let tool = Tool::default();
            let report = tool
                .get_repository_readme(ReadmeRequest { repositories })
                .await;
            writeln_safe(&report);
        }
        None => {
            eprintln!("Usage: trendkit trending [--since daily|weekly|monthly] [--language LANG]");
            eprintln!("   or: trendkit readme <OWNER/REPO>...");
            eprintln!("   or: trendkit mcp");
            eprintln!("   or: trendkit --help");
            std::process::exit(1);
        }
    }
}

/// Write to stdout, exit silently on broken pipe
fn writeln_safe(s: &str) {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(e) = writeln!(handle, "{}", s) {
        if e.kind() == io::ErrorKind::BrokenPipe {
            std::process::exit(0);
        }
        eprintln!("Error writing to stdout: {}", e);
        std::process::exit(1);
    }
}
