use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use clap::{CommandFactory, Parser, Subcommand};

use crate::config::{AppConfig, default_config_path};
use crate::domain::format_created_timestamp;
use crate::tmux::{SystemTmuxAdapter, TmuxAdapter, is_valid_session_name};
use crate::tui::run_tui;

#[derive(Debug, Parser)]
#[command(
    name = "muxmenu",
    about = "Inspect and control tmux sessions from a menu-style terminal UI"
)]
struct Cli {
    #[arg(long, global = true, env = "MUXMENU_TMUX_SOCKET")]
    tmux_socket: Option<String>,
    #[arg(long, global = true, env = "MUXMENU_CONFIG")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Open the interactive session menu
    Tui,
    /// Print the current session list
    Sessions,
    /// Create a detached session, optionally named
    New { name: Option<String> },
    /// Rename a session
    Rename { current: String, new_name: String },
    /// Kill a session (asks for confirmation unless --yes)
    Kill {
        name: String,
        #[arg(long)]
        yes: bool,
    },
    /// Open the terminal application and attach to a session
    Attach { name: String },
}

pub fn run() -> i32 {
    match Cli::try_parse() {
        Ok(cli) => run_command(cli),
        Err(err) => {
            let code = err.exit_code();
            let _ = err.print();
            code
        }
    }
}

fn run_command(cli: Cli) -> i32 {
    let config_path = cli.config.unwrap_or_else(default_config_path);
    let config = load_config_or_default(&config_path);
    let adapter = SystemTmuxAdapter::from_config(cli.tmux_socket.clone(), &config);
    match cli.command {
        Some(Commands::Tui) => run_tui_command(cli.tmux_socket, config),
        Some(Commands::Sessions) => run_sessions(&adapter),
        Some(Commands::New { name }) => run_new(&adapter, name.as_deref()),
        Some(Commands::Rename { current, new_name }) => run_rename(&adapter, &current, &new_name),
        Some(Commands::Kill { name, yes }) => run_kill(&adapter, &name, yes),
        Some(Commands::Attach { name }) => run_attach(&adapter, &name),
        None => {
            let mut command = Cli::command();
            let _ = command.print_help();
            println!();
            0
        }
    }
}

fn load_config_or_default(path: &Path) -> AppConfig {
    match AppConfig::load_from_path(path) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("warning: {err}");
            AppConfig::default()
        }
    }
}

fn run_tui_command(socket: Option<String>, config: AppConfig) -> i32 {
    match run_tui(socket, config) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("{err}");
            1
        }
    }
}

fn run_sessions(adapter: &SystemTmuxAdapter) -> i32 {
    if !adapter.tmux_available() {
        println!("tmux not found");
        return 0;
    }
    let sessions = match adapter.list_sessions() {
        Ok(sessions) => sessions,
        Err(err) => {
            eprintln!("failed to list tmux sessions: {err}");
            return 1;
        }
    };
    if sessions.is_empty() {
        println!("no sessions running");
        return 0;
    }
    for session in sessions {
        println!(
            "{}\t{} pane{}\t{}\tcreated {}",
            session.name,
            session.pane_count,
            if session.pane_count == 1 { "" } else { "s" },
            if session.attached { "attached" } else { "detached" },
            format_created_timestamp(&session.created_at)
        );
    }
    0
}

fn run_new(adapter: &SystemTmuxAdapter, name: Option<&str>) -> i32 {
    if let Some(name) = name
        && !is_valid_session_name(name)
    {
        eprintln!("invalid session name: {}", name_rules());
        return 1;
    }
    match adapter.create_session(name) {
        Ok(()) => {
            println!("created session {}", name.unwrap_or("(unnamed)"));
            0
        }
        Err(err) => {
            eprintln!("failed to create session: {err}");
            1
        }
    }
}

fn run_rename(adapter: &SystemTmuxAdapter, current: &str, new_name: &str) -> i32 {
    if !is_valid_session_name(new_name) {
        eprintln!("invalid session name: {}", name_rules());
        return 1;
    }
    match adapter.rename_session(current, new_name) {
        Ok(()) => {
            println!("renamed {current} to {new_name}");
            0
        }
        Err(err) => {
            eprintln!("failed to rename session: {err}");
            1
        }
    }
}

fn run_kill(adapter: &SystemTmuxAdapter, name: &str, yes: bool) -> i32 {
    if !yes && !confirm_kill(name) {
        println!("aborted");
        return 0;
    }
    match adapter.kill_session(name) {
        Ok(()) => {
            println!("killed session {name}");
            0
        }
        Err(err) => {
            eprintln!("failed to kill session: {err}");
            1
        }
    }
}

fn run_attach(adapter: &SystemTmuxAdapter, name: &str) -> i32 {
    match adapter.attach_session(name) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("failed to attach session: {err}");
            1
        }
    }
}

fn confirm_kill(name: &str) -> bool {
    print!("kill session '{name}'? this cannot be undone [y/N]: ");
    let _ = io::stdout().flush();
    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

pub(crate) fn name_rules() -> &'static str {
    "session names may contain letters, digits, dashes, and underscores"
}
