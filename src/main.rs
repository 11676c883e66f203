//! Bloodwork
//!
//! Uploads a lab report to the analysis backend, writes the rendered page to
//! the output directory and then chats about the report on stdin.

use std::path::{Path, PathBuf};

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use bloodwork::api::{HttpBackend, UploadFile};
use bloodwork::build_info;
use bloodwork::ui::{HtmlSurface, KeyEvent, Surface, Tab, UiEvent};
use bloodwork::{App, Config};

#[derive(Debug, Parser)]
#[command(name = "bloodwork", version, about = "Blood report viewer and chat client")]
struct Cli {
    /// Report file to upload (PDF or image)
    file: Option<PathBuf>,

    /// Backend root URL
    #[arg(long)]
    base_url: Option<String>,

    /// Directory for index.html and downloads
    #[arg(long)]
    out: Option<PathBuf>,

    /// Chat role sent with each message
    #[arg(long)]
    role: Option<String>,
}

type ViewerApp = App<HttpBackend, HtmlSurface>;

/// Write the page and print any alerts raised by the last event
fn flush(app: &mut ViewerApp, out: &Path) -> Result<(), Box<dyn std::error::Error>> {
    for alert in app.surface_mut().take_alerts() {
        eprintln!("! {}", alert);
    }
    let page = app.surface_mut().write_to(out)?;
    tracing::debug!(path = %page.display(), "page updated");
    Ok(())
}

fn print_new_messages(app: &ViewerApp, seen: &mut usize) {
    let history = app.session().chat_history();
    for message in &history[(*seen).min(history.len())..] {
        println!("[{}] {}:\n{}\n", message.time_label(), message.sender.display_name(), message.content);
    }
    *seen = history.len();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("bloodwork=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();

    let cli = Cli::parse();
    let mut config = Config::from_env()?;
    if let Some(url) = cli.base_url {
        config.base_url = url;
    }
    if let Some(out) = cli.out {
        config.output_dir = out;
    }
    if let Some(role) = cli.role {
        config.role = role;
    }

    eprintln!("Backend: {}", config.base_url);
    eprintln!("Output directory: {}", config.output_dir.display());

    let backend = HttpBackend::new(&config.base_url)?;
    let surface = HtmlSurface::new(config.role.clone());
    let mut app = App::new(backend, surface, &config);
    let out = config.output_dir.clone();

    let file = match &cli.file {
        Some(path) => Some(UploadFile::from_path(path).await?),
        None => None,
    };
    let outcome = app.handle(UiEvent::UploadSubmitted(file)).await;
    tracing::info!(?outcome, "upload finished");
    flush(&mut app, &out)?;

    eprintln!("Session: {}", app.session().session_id());
    eprintln!("Type a message and press Enter. End a line with \\ to continue it.");
    eprintln!("Commands: :download, :tab <report|plots|insights|chat>, :quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut seen = 0;
    let mut draft = String::new();

    while let Some(line) = lines.next_line().await? {
        if draft.is_empty() {
            match line.trim() {
                ":quit" | ":q" => break,
                ":download" => {
                    app.handle(UiEvent::DownloadClicked).await;
                    flush(&mut app, &out)?;
                    continue;
                }
                cmd if cmd.starts_with(":tab") => {
                    match Tab::from_name(cmd.trim_start_matches(":tab")) {
                        Some(tab) => {
                            app.handle(UiEvent::TabClicked(tab)).await;
                            flush(&mut app, &out)?;
                        }
                        None => eprintln!("! Unknown tab"),
                    }
                    continue;
                }
                _ => {}
            }
        }

        // A trailing backslash behaves like Shift+Enter
        if let Some(partial) = line.strip_suffix('\\') {
            draft.push_str(partial);
            draft.push('\n');
            app.surface_mut().set_message_input(&draft);
            app.handle(UiEvent::KeyPressed(KeyEvent::shift_enter())).await;
            continue;
        }

        draft.push_str(&line);
        app.surface_mut().set_message_input(&draft);
        draft.clear();

        app.handle(UiEvent::KeyPressed(KeyEvent::enter())).await;
        print_new_messages(&app, &mut seen);
        flush(&mut app, &out)?;
    }

    Ok(())
}
