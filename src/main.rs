use clap::{Parser, Subcommand};
use marksheet_finder::{Config, LookupService, SearchParams, app};

#[derive(Parser)]
#[command(name = "marksheet-finder", version, about = "Check marksheet availability from a spreadsheet")]
struct Cli {
    #[command(flatten)]
    config: Config,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the web server (default)
    Serve,
    /// Run one lookup and print the JSON result
    Lookup {
        #[arg(long)]
        roll_number: Option<String>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        course: Option<String>,
    },
}

/// Main entry point for the web application
///
/// Loads `.env` if present, sets up logging (`RUST_LOG`, default `info`),
/// then either serves the search page and API or runs a single lookup.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let service = LookupService::new(cli.config.data_source()?);

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => app::run(&cli.config.bind_addr(), service).await,
        Command::Lookup {
            roll_number,
            name,
            course,
        } => {
            let params = SearchParams {
                roll_number,
                name,
                course,
            };
            match service.lookup(params).await {
                Ok(result) => {
                    println!("{}", serde_json::to_string_pretty(&result)?);
                    Ok(())
                }
                Err(e) => {
                    eprintln!("{}", e);
                    std::process::exit(1);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_flags_accepted_after_subcommand() {
        let cli = Cli::try_parse_from([
            "marksheet-finder",
            "lookup",
            "--roll-number",
            "R1",
            "--csv",
            "students.csv",
        ])
        .unwrap();

        assert_eq!(cli.config.csv, Some("students.csv".into()));
        match cli.command {
            Some(Command::Lookup { roll_number, .. }) => assert_eq!(roll_number.as_deref(), Some("R1")),
            _ => panic!("expected lookup subcommand"),
        }
    }

    #[test]
    fn test_config_flags_accepted_before_subcommand() {
        let cli = Cli::try_parse_from(["marksheet-finder", "--port", "8081", "serve"]).unwrap();

        assert_eq!(cli.config.port, 8081);
        assert!(matches!(cli.command, Some(Command::Serve)));
    }
}
