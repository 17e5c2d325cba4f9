use std::process::Command;

use super::discovery::subprocess_path_env;

const OSASCRIPT_PATH: &str = "/usr/bin/osascript";

/// Escapes a session name for substitution into the single-quoted shell
/// command inside an AppleScript string literal: backslashes and double
/// quotes for the AppleScript layer, single quotes for the shell layer.
pub fn shell_safe_name(name: &str) -> String {
    name.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\'', "'\\''")
}

/// Builds the automation script that activates the terminal application and
/// runs `tmux attach` for the named session inside it.
pub fn attach_script(terminal_app: &str, socket_name: Option<&str>, name: &str) -> String {
    let safe_name = shell_safe_name(name);
    let attach_command = match socket_name {
        Some(socket) => format!("tmux -L {socket} attach -t '{safe_name}'"),
        None => format!("tmux attach -t '{safe_name}'"),
    };
    format!(
        "tell application \"{}\"\n    activate\n    do script \"{}\"\nend tell",
        applescript_literal(terminal_app),
        attach_command
    )
}

fn applescript_literal(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Runs the attach script through osascript, which inherits the user's
/// existing automation permissions.
pub(super) fn open_in_terminal(
    terminal_app: &str,
    socket_name: Option<&str>,
    name: &str,
) -> Result<(), String> {
    let script = attach_script(terminal_app, socket_name, name);
    let output = Command::new(OSASCRIPT_PATH)
        .args(["-e", &script])
        .env("PATH", subprocess_path_env())
        .output()
        .map_err(|err| format!("failed to run osascript: {err}"))?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(format!("osascript attach failed: {}", stderr.trim()));
    }
    Ok(())
}
