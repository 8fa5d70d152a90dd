//! slirc - terminal front end for the slirc-client engine.
//!
//! Reads commands from stdin and prints chat to stdout. Logs go to stderr.
//!
//! ```text
//! /list               refresh the channel list
//! /join #channel      join and switch to a channel
//! /leave              leave every channel
//! /names              refresh the roster
//! /kick nick [reason]
//! /ban nick
//! /raw VERB params    send a raw command
//! /quit
//! anything else       say it in the current channel
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Local;
use slirc_client::config::{self, Config};
use slirc_client::{Channel, Presenter, Session, SessionHandle, SessionResult};
use slirc_proto::{Member, irc_eq};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// How many catalogue rows to print.
const CATALOGUE_ROWS: usize = 20;

struct TerminalPresenter;

impl TerminalPresenter {
    fn print(line: &str) {
        println!("[{}] {}", Local::now().format("%H:%M:%S"), line);
    }
}

#[async_trait]
impl Presenter for TerminalPresenter {
    async fn on_catalogue_updated(&self, channels: Vec<Channel>) {
        Self::print(&format!("*** {} channels", channels.len()));
        for channel in channels.iter().take(CATALOGUE_ROWS) {
            Self::print(&format!(
                "    {:<24} {:>6}  {}",
                channel.name, channel.client_count, channel.topic
            ));
        }
    }

    async fn on_roster_updated(&self, members: Vec<Member>) {
        let names: Vec<String> = members.iter().map(Member::display_name).collect();
        Self::print(&format!("*** Members ({}): {}", names.len(), names.join(" ")));
    }

    async fn on_display_line(&self, line: String) {
        Self::print(&line);
    }
}

/// False when the roster shows our own rank is too low to kick or ban.
/// An unknown rank lets the server decide.
fn may_moderate(handle: &SessionHandle) -> bool {
    let me = handle.nick();
    handle
        .roster()
        .iter()
        .find(|member| irc_eq(&member.nick, &me))
        .is_none_or(|member| member.rank.can_moderate())
}

/// Outcome of one line of user input.
enum Input {
    Continue,
    Quit,
}

async fn handle_input(handle: &SessionHandle, line: &str) -> SessionResult<Input> {
    let Some(command) = line.strip_prefix('/') else {
        handle.send_message(line).await?;
        return Ok(Input::Continue);
    };

    let (verb, rest) = command.split_once(' ').unwrap_or((command, ""));
    let rest = rest.trim();
    match verb.to_ascii_lowercase().as_str() {
        "list" => handle.request_catalogue(),
        "join" => handle.join(rest)?,
        "leave" | "part" => handle.leave(),
        "names" => handle.request_roster()?,
        "kick" | "ban" if !may_moderate(handle) => {
            TerminalPresenter::print("*** You need halfop or above to do that");
        }
        "kick" => {
            let (nick, reason) = rest.split_once(' ').unwrap_or((rest, ""));
            handle.kick(nick, reason.trim())?;
        }
        "ban" => handle.ban(rest)?,
        "raw" | "quote" => handle.execute_raw(rest)?,
        "quit" => {
            handle.close();
            return Ok(Input::Quit);
        }
        _ => handle.execute_raw(command)?,
    }
    Ok(Input::Continue)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Stdout belongs to the chat window
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.toml".to_string());

    let config = Config::load(&config_path).map_err(|e| {
        error!(path = %config_path, error = %e, "Failed to load config");
        e
    })?;

    if let Err(errors) = config::validate(&config) {
        for e in &errors {
            error!(error = %e, "Invalid configuration");
        }
        anyhow::bail!("{} configuration error(s) in {}", errors.len(), config_path);
    }

    info!(
        host = %config.server.host,
        port = config.server.port,
        nick = %config.identity.nick,
        "Starting slirc"
    );

    let session = Session::connect(&config, Arc::new(TerminalPresenter)).await?;
    let handle = session.handle();
    let mut session_task = tokio::spawn(session.run());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            finished = &mut session_task => {
                finished??;
                return Ok(());
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    // Stdin closed
                    handle.close();
                    break;
                };
                let line = line.trim_end();
                if line.is_empty() {
                    continue;
                }
                match handle_input(&handle, line).await {
                    Ok(Input::Continue) => {}
                    Ok(Input::Quit) => break,
                    Err(e) if e.is_local() => TerminalPresenter::print(&format!("*** {e}")),
                    Err(e) => return Err(e.into()),
                }
            }
        }
    }

    session_task.await??;
    Ok(())
}
