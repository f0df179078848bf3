use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use sporlyze::{
    cli::{self, OutputOptions},
    config, error,
    report::FileOutput,
    spotify::SpotifyClient,
    utils, warning,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Analyse one or more playlists
    Analyse(AnalyseOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct AnalyseOptions {
    /// Playlist id, or several ids separated by commas
    input: String,

    /// Print the report to the terminal
    #[clap(short, long)]
    verbose: bool,

    /// Report depth: 0 summary, 1 breakdowns, 2 raw audio features
    #[clap(short, long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=2))]
    depth: u8,

    /// Directory to write the reports to
    #[clap(short, long)]
    output: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Analyse(opt) => {
            let ids = utils::parse_playlist_ids(&opt.input);
            if ids.is_empty() {
                error!("No playlist id given");
            }

            let file_output = match opt.output.as_deref().map(FileOutput::new) {
                Some(Ok(output)) => Some(output),
                Some(Err(e)) => {
                    warning!("{}. Reports will not be written to disk.", e);
                    None
                }
                None => None,
            };
            if file_output.is_none() && !opt.verbose {
                error!("No output enabled. Use --verbose or a valid --output directory.");
            }

            let client = match SpotifyClient::from_env() {
                Ok(client) => client,
                Err(e) => error!("{}", e),
            };

            let options = OutputOptions {
                verbose: opt.verbose,
                depth: opt.depth,
                file_output,
            };
            if cli::analyse(&client, &ids, &options).await == 0 {
                std::process::exit(1);
            }
        }
        Command::Completions(opt) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
