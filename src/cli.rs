use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "WBC stats chart backend")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the backend server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long)]
        port: Option<u16>,
        /// Directory holding pools.json, teams.json, ...
        #[arg(short, long)]
        data_dir: Option<PathBuf>,
    },
    /// Print the render plan of a page (home, pool <key>, player <id>)
    Render {
        page: String,
        key: Option<String>,
        /// Only keep plots of this chart kind
        #[arg(short, long)]
        kind: Option<String>,
        #[arg(short, long)]
        data_dir: Option<PathBuf>,
    },
    /// Predict a head-to-head matchup
    Predict {
        team_a: String,
        team_b: String,
        #[arg(short, long)]
        data_dir: Option<PathBuf>,
    },
    /// Generate shell completions
    Completions {
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_port_is_optional() {
        let cli = Cli::try_parse_from(["wbc_stats", "serve"]).unwrap();
        assert_eq!(cli.command, Command::Serve { port: None, data_dir: None });

        let cli = Cli::try_parse_from(["wbc_stats", "serve", "--port", "8080"]).unwrap();
        assert_eq!(cli.command, Command::Serve { port: Some(8080), data_dir: None });
    }
}
