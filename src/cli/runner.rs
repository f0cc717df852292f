//! CLI runner - executes commands

use crate::catalog::{self, Action, Dispatcher, Navigator, Section};
use crate::cli::commands::{parse_arg, Cli, Commands, SettingsAction};
use crate::error::{Error, Result};
use crate::github::GitHubClient;
use crate::http::HttpClientConfig;
use crate::logging::LogConfig;
use crate::output::export_csv;
use crate::response::ApiResponse;
use crate::settings::SettingsStore;
use std::io::Write;
use std::path::Path;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, warn};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Logging options taken from the global flags
    pub fn log_config(&self) -> LogConfig {
        LogConfig::new(self.cli.verbose, self.cli.log_file.clone())
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::List => {
                print!("{}", render_catalog());
                Ok(())
            }
            Commands::Run {
                operation,
                args,
                fields,
                csv,
            } => {
                self.run_operation(operation, args, fields, csv.as_deref())
                    .await
            }
            Commands::Interactive => self.interactive().await,
            Commands::Settings { action } => self.settings(action),
        }
    }

    fn store(&self) -> SettingsStore {
        SettingsStore::new(&self.cli.settings)
    }

    /// Fails on a missing token before any request is made
    fn client(&self) -> Result<GitHubClient> {
        GitHubClient::from_env(HttpClientConfig::default())
    }

    async fn run_operation(
        &self,
        name: &str,
        raw_args: &[String],
        fields: &[String],
        csv: Option<&Path>,
    ) -> Result<()> {
        let op = catalog::find(name)?;
        let settings = self.store().load()?;
        let args = op.resolve_args(split_args(raw_args)?, &settings)?;
        let client = self.client()?;

        let response = Dispatcher::new(&client, &settings)
            .with_concurrency(self.cli.concurrency)
            .execute(op, &args)
            .await?;
        let response = project(&response, fields);

        match csv {
            Some(path) => {
                let rows = export_csv(&response, fields, path)?;
                println!("Wrote {rows} rows to {}", path.display());
            }
            None => println!("{response}"),
        }
        Ok(())
    }

    async fn interactive(&self) -> Result<()> {
        let settings = self.store().load()?;
        let client = self.client()?;
        let dispatcher =
            Dispatcher::new(&client, &settings).with_concurrency(self.cli.concurrency);

        let stdin = BufReader::new(tokio::io::stdin());
        interact(
            Navigator::new(&settings),
            &dispatcher,
            stdin,
            std::io::stdout(),
        )
        .await
    }

    fn settings(&self, action: &SettingsAction) -> Result<()> {
        let store = self.store();
        match action {
            SettingsAction::Show => {
                let settings = store.load()?;
                print!("{}", serde_yaml::to_string(&settings)?);
            }
            SettingsAction::Set { key, value } => {
                store.update(key, value)?;
                println!("{key} = {value}");
            }
        }
        Ok(())
    }
}

/// Drive the navigator from `input` until it quits or input ends
///
/// Errors from a single operation or a bad answer are printed and the
/// session continues; configuration errors end it.
pub async fn interact<R, W>(
    mut navigator: Navigator<'_>,
    dispatcher: &Dispatcher<'_>,
    input: R,
    mut output: W,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    loop {
        write!(output, "{}", navigator.prompt())?;
        output.flush()?;

        let Some(line) = lines.next_line().await? else {
            debug!("Input closed");
            return Ok(());
        };

        let action = match navigator.submit(&line) {
            Ok(action) => action,
            Err(e) => {
                writeln!(output, "Invalid input: {e}")?;
                continue;
            }
        };

        match action {
            Action::Continue => {}
            Action::Quit => return Ok(()),
            Action::Run(op, args) => match dispatcher.execute(op, &args).await {
                Ok(response) => writeln!(output, "{response}")?,
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    warn!("{} failed: {e}", op.name);
                    writeln!(output, "Error: {e}")?;
                }
            },
        }
    }
}

/// Catalog listing grouped by section
pub fn render_catalog() -> String {
    let mut out = String::new();
    for section in Section::ALL {
        out.push_str(&format!("{section}\n"));
        for op in catalog::in_section(section) {
            let params: Vec<String> = op
                .params
                .iter()
                .map(|p| match p.default {
                    catalog::ParamDefault::Required => format!("<{}>", p.name),
                    _ => format!("[{}]", p.name),
                })
                .collect();
            out.push_str(&format!(
                "  {:<20} {:<40} {}\n",
                op.name,
                params.join(" "),
                op.summary
            ));
        }
    }
    out
}

/// Keep only `fields` of the result; no fields keeps everything
pub fn project(response: &ApiResponse, fields: &[String]) -> ApiResponse {
    if fields.is_empty() {
        response.clone()
    } else {
        response.get_fields(fields)
    }
}

fn split_args(raw: &[String]) -> Result<Vec<(&str, &str)>> {
    raw.iter()
        .map(|arg| {
            parse_arg(arg).ok_or_else(|| {
                Error::invalid_argument(arg.as_str(), "expected name=value")
            })
        })
        .collect()
}
