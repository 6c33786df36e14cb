use std::{io, path::PathBuf, time::Duration};

use anyhow::{Context, Result};
use clap::Parser;
use client_core::{FormTableController, FormView, StudentsClient};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod view;

use commands::{parse_command, ConsoleCommand, HELP};
use view::TerminalView;

#[derive(Parser, Debug)]
#[command(name = "students", about = "Terminal client for the student records service")]
struct Args {
    /// Base URL of the student records backend.
    #[arg(long)]
    server_url: Option<String>,
    #[arg(long, default_value = "students.toml")]
    config: PathBuf,
    /// Form without a semester selector.
    #[arg(long)]
    no_semester: bool,
    /// Free-text course input instead of the multi-select.
    #[arg(long)]
    text_course: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut settings = config::load_settings(&args.config)?;
    if let Some(server_url) = args.server_url {
        settings.server_url = server_url;
    }
    if args.no_semester {
        settings.semester_select = false;
    }
    if args.text_course {
        settings.course_multi_select = false;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.log_level.as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(settings.request_timeout_secs))
        .build()
        .context("failed to build http client")?;
    let api = StudentsClient::with_http(http, &settings.server_url)
        .with_context(|| format!("invalid server url '{}'", settings.server_url))?;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to build runtime")?;

    tracing::info!(
        server_url = %api.base_url(),
        capabilities = ?settings.capabilities(),
        "starting student records console"
    );

    let view = TerminalView::new(io::stdin().lock(), io::stdout());
    let mut controller = FormTableController::new(api, view, settings.capabilities());
    runtime.block_on(controller.load());
    controller.view_mut().print("type 'help' for commands");

    while let Some(line) = controller
        .view_mut()
        .prompt_line("> ")
        .context("failed to read from stdin")?
    {
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                controller.view_mut().print(&message);
                continue;
            }
        };

        match command {
            ConsoleCommand::Form(event) => {
                if let Err(err) = runtime.block_on(controller.dispatch(event)) {
                    tracing::debug!("action ended early: {err}");
                }
            }
            ConsoleCommand::Refresh => runtime.block_on(controller.refresh_list()),
            ConsoleCommand::Show => {
                let form = controller.form().clone();
                controller.view_mut().render_form(&form);
            }
            ConsoleCommand::Help => controller.view_mut().print(HELP),
            ConsoleCommand::Quit => break,
        }
    }

    Ok(())
}
