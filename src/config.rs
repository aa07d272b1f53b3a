use std::path::PathBuf;

use clap::Args;
use thiserror::Error;

use crate::sheets::google::DEFAULT_TOKEN_URI;
use crate::sheets::{CsvFile, DataSource, GoogleSheets, ServiceAccount};

/// Server and data source settings
///
/// Every option can also come from the environment (and so from a `.env`
/// file loaded before parsing), and may be given before or after a
/// subcommand.
#[derive(Args, Clone, Debug)]
pub struct Config {
    /// Address to listen on
    #[arg(long, global = true, env = "MARKSHEET_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(long, global = true, env = "MARKSHEET_PORT", default_value_t = 3000)]
    pub port: u16,

    /// Spreadsheet ID from the sheet's URL
    #[arg(long, global = true, env = "GOOGLE_SHEET_ID")]
    pub sheet_id: Option<String>,

    /// Range to read, usually just the sheet name
    #[arg(long, global = true, env = "GOOGLE_SHEET_RANGE", default_value = "Sheet1")]
    pub range: String,

    /// Service account email
    #[arg(long, global = true, env = "GOOGLE_CLIENT_EMAIL")]
    pub client_email: Option<String>,

    /// Service account private key (PEM, `\n` escapes allowed)
    #[arg(long, global = true, env = "GOOGLE_PRIVATE_KEY", hide_env_values = true)]
    pub private_key: Option<String>,

    /// OAuth token endpoint
    #[arg(long, global = true, env = "GOOGLE_TOKEN_URI", default_value = DEFAULT_TOKEN_URI)]
    pub token_uri: String,

    /// Read a local CSV export instead of Google Sheets
    #[arg(long, global = true, env = "MARKSHEET_CSV")]
    pub csv: Option<PathBuf>,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required setting --{flag} (or {env})")]
    Missing {
        flag: &'static str,
        env: &'static str,
    },
}

impl Config {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Build the configured data source
    ///
    /// `--csv` wins when given; otherwise the Google Sheets settings must all
    /// be present and non-empty.
    pub fn data_source(&self) -> Result<DataSource, ConfigError> {
        if let Some(path) = &self.csv {
            return Ok(DataSource::Csv(CsvFile::new(path)));
        }

        let sheet_id = required(&self.sheet_id, "sheet-id", "GOOGLE_SHEET_ID")?;
        let client_email = required(&self.client_email, "client-email", "GOOGLE_CLIENT_EMAIL")?;
        let private_key = required(&self.private_key, "private-key", "GOOGLE_PRIVATE_KEY")?;

        let account = ServiceAccount::new(client_email, private_key, self.token_uri.as_str());
        Ok(DataSource::Google(GoogleSheets::new(
            account,
            sheet_id,
            self.range.as_str(),
        )))
    }
}

fn required<'a>(
    value: &'a Option<String>,
    flag: &'static str,
    env: &'static str,
) -> Result<&'a str, ConfigError> {
    value
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::Missing { flag, env })
}
