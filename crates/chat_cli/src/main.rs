use clap::Parser;
use colored::Colorize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast::error::RecvError;

use chat_core::samples::sample_prompt;
use chat_core::Config;
use chat_session::{ChatSession, ChatWidget, SessionEvent, SubmitOutcome};

mod commands;
mod render;

use commands::{parse_command, Command, HELP};

#[derive(Parser)]
#[command(name = "menu-chat")]
#[command(about = "Terminal shell for the menu chat widget")]
#[command(version)]
struct Cli {
    /// Chat backend base URL (overrides config and CHAT_API_BASE)
    #[arg(long)]
    api_base: Option<String>,

    /// Seconds to wait for a reply before giving up
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Enable debug mode
    #[arg(long, short, default_value = "false")]
    debug: bool,
}

fn default_log_level(debug: bool) -> &'static str {
    if debug {
        "debug"
    } else {
        "info"
    }
}

/// `RUST_LOG` wins when set.
fn init_logging(debug: bool) {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_log_level(debug)),
    )
    .try_init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let mut config = Config::load();
    if let Some(api_base) = cli.api_base {
        config.api_base = api_base;
    }
    if let Some(timeout_secs) = cli.timeout_secs {
        config.request_timeout_secs = timeout_secs;
    }
    log::debug!("Chat endpoint: {}", config.endpoint_url());

    let widget = ChatWidget::new(ChatSession::connect(&config)?);

    render::print_header();
    render::print_thread(&widget.messages());

    let renderer = tokio::spawn(render_events(widget.clone()));
    let result = read_input(&widget).await;
    renderer.abort();
    result
}

/// Print whatever the session announces. Closed widgets stay silent.
async fn render_events(widget: ChatWidget) {
    let mut events = widget.subscribe();
    loop {
        match events.recv().await {
            Ok(SessionEvent::MessageAppended { message, .. }) => {
                if widget.is_open() {
                    println!("{}", render::format_message(&message));
                }
            }
            Ok(SessionEvent::BusyChanged(true)) => {
                if widget.is_open() {
                    println!("{}", "Bot is typing...".dimmed().italic());
                }
            }
            Ok(SessionEvent::VisibilityChanged(true)) => {
                println!("{}", "-- chat opened --".dimmed());
                render::print_thread(&widget.messages());
            }
            Ok(SessionEvent::VisibilityChanged(false)) => {
                println!("{}", "-- chat collapsed, /toggle to reopen --".dimmed());
            }
            Ok(_) => {}
            Err(RecvError::Lagged(skipped)) => {
                log::debug!("Renderer skipped {} events, redrawing", skipped);
                if widget.is_open() {
                    render::print_thread(&widget.messages());
                }
            }
            Err(RecvError::Closed) => break,
        }
    }
}

async fn read_input(widget: &ChatWidget) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        match parse_command(&line) {
            Command::Quit => break,
            Command::Help => println!("{}", HELP),
            Command::Samples => render::print_samples(),
            Command::Toggle => {
                widget.toggle();
            }
            Command::Cancel => {
                if !widget.session().cancel() {
                    println!("{}", "Nothing to cancel.".yellow());
                }
            }
            Command::Sample(position) => {
                if let Some(prompt) = sample_prompt(position) {
                    spawn_submission(widget, |w| async move { w.submit_sample(prompt).await });
                }
            }
            Command::Say(text) => {
                widget.set_pending_input(text.clone());
                spawn_submission(widget, |w| async move { w.submit(&text).await });
            }
            Command::Unknown(input) => {
                println!("{} {}", "Unknown command:".yellow(), input);
            }
        }
    }

    Ok(())
}

/// Run a submission without blocking the input loop; report rejections.
fn spawn_submission<F, Fut>(widget: &ChatWidget, submit: F)
where
    F: FnOnce(ChatWidget) -> Fut,
    Fut: std::future::Future<Output = SubmitOutcome> + Send + 'static,
{
    let fut = submit(widget.clone());
    tokio::spawn(async move {
        if fut.await == SubmitOutcome::Busy {
            println!("{}", "Still waiting for the previous reply.".yellow());
        }
    });
}
