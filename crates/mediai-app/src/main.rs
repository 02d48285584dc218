//! Console front-end for the Medi AI core.
//!
//! Reads one line at a time: slash commands drive the session and the
//! analysis flow, anything else goes to the health assistant.

use std::sync::Arc;

use eyre::Result;
use mediai_analysis::upload::FileKind;
use mediai_app::commands;
use mediai_app::config::{self, AppConfig, LogFormat};
use mediai_app::notify::ChannelObserver;
use mediai_app::state::AppState;
use mediai_auth::session::SessionState;
use mediai_core::models::chat::{ChatMessage, ChatSender};
use mediai_core::models::notice::{Notice, NoticeLevel};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::UnboundedReceiver;

const HELP: &str = "\
commands:
  /login                 sign in with the demo account
  /logout                sign out
  /whoami                show the current session
  /upload <kind> <file>  queue a file (kind: report, xray, mri, scan)
  /files                 list queued files
  /remove <id>           drop a queued file
  /analyze               analyze queued files
  /help                  show this help
  /quit                  exit
anything else is sent to the health assistant (try 'tip')";

fn init_tracing(config: &AppConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_filter));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match config.log_format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let config = config::load_config()?;
    init_tracing(&config);

    let (observer, mut notices) = ChannelObserver::new();
    let state = AppState::from_config(config, Arc::new(observer))?;

    match commands::restore_session(&state).await.map_err(|e| eyre::eyre!(e))? {
        SessionState::SignedIn(user) => println!(
            "Welcome back, {}.",
            user.display_name.as_deref().unwrap_or(user.id.as_str())
        ),
        SessionState::SignedOut => println!("You are signed out. Type /login to sign in."),
    }
    for message in commands::chat_messages(&state).await.map_err(|e| eyre::eyre!(e))? {
        print_message(&message);
    }
    drain_notices(&mut notices);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim_end();
        if line == "/quit" {
            break;
        }
        if let Err(e) = handle_line(&state, line).await {
            println!("error: {e}");
        }
        drain_notices(&mut notices);
    }

    Ok(())
}

async fn handle_line(state: &AppState, line: &str) -> Result<(), String> {
    let mut parts = line.splitn(3, ' ');
    match parts.next().unwrap_or_default() {
        "/help" => println!("{HELP}"),
        "/login" => {
            commands::sign_in(state).await?;
        }
        "/logout" => commands::sign_out(state).await?,
        "/whoami" => match commands::current_session(state).await? {
            SessionState::SignedIn(user) => println!(
                "{} <{}> ({})",
                user.display_name.as_deref().unwrap_or("unnamed"),
                user.email.as_deref().unwrap_or("no email"),
                user.id
            ),
            SessionState::SignedOut => println!("signed out"),
        },
        "/upload" => {
            let kind = parse_kind(parts.next().unwrap_or_default())?;
            let name = parts
                .next()
                .ok_or_else(|| "usage: /upload <kind> <file>".to_string())?;
            let file =
                commands::add_upload(state, name.to_string(), kind, guess_content_type(name))
                    .await?;
            println!("queued {} as {} ({})", file.name, file.kind, file.id);
        }
        "/files" => {
            let files = commands::list_uploads(state).await?;
            if files.is_empty() {
                println!("no files queued");
            }
            for file in files {
                println!("{}  {:<14} {}", file.id, file.kind.label(), file.name);
            }
        }
        "/remove" => {
            let id = parts
                .next()
                .unwrap_or_default()
                .parse()
                .map_err(|e| format!("invalid file id: {e}"))?;
            if !commands::remove_upload(state, id).await? {
                println!("no such file");
            }
        }
        "/analyze" => {
            println!("Analyzing...");
            let report = commands::start_analysis(state).await?;
            println!(
                "{}: {} severity, {}% confidence, risk {}",
                report.condition,
                report.severity.label(),
                report.confidence,
                report.risk_level.label()
            );
            println!("{}", report.description);
            for indicator in &report.key_indicators {
                println!("  - {indicator}");
            }
            for rec in &report.recommendations {
                println!("  * {}: {}", rec.title, rec.description);
            }
            println!("Seek medical attention for: {}", report.warning_signs.join(", "));
        }
        _ => {
            if let Some(reply) = commands::send_chat_message(state, line.to_string()).await? {
                print_message(&reply);
            }
        }
    }
    Ok(())
}

fn parse_kind(raw: &str) -> Result<FileKind, String> {
    serde_json::from_value(serde_json::Value::String(raw.to_lowercase()))
        .map_err(|_| format!("unknown file kind '{raw}' (expected report, xray, mri, scan)"))
}

fn guess_content_type(name: &str) -> Option<String> {
    let lower = name.to_lowercase();
    let ext = lower.rsplit_once('.').map(|(_, ext)| ext)?;
    let content_type = match ext {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "pdf" => "application/pdf",
        "txt" => "text/plain",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "dicom" => "application/dicom",
        _ => return None,
    };
    Some(content_type.to_string())
}

fn print_message(message: &ChatMessage) {
    let local = message.timestamp.to_zoned(jiff::tz::TimeZone::system());
    let time = local.strftime("%H:%M");
    let who = match message.sender {
        ChatSender::User => "you",
        ChatSender::Assistant => "assistant",
    };
    println!("[{time}] {who}: {}", message.text);
}

fn drain_notices(notices: &mut UnboundedReceiver<Notice>) {
    while let Ok(notice) = notices.try_recv() {
        let marker = match notice.level {
            NoticeLevel::Info => "",
            NoticeLevel::Warning => "warning: ",
            NoticeLevel::Error => "error: ",
        };
        println!("{marker}{}: {}", notice.title, notice.description);
    }
}
