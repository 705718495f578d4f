//! Headless host: JSON commands in, JSON snapshots out, one per line.

use std::io::{BufRead, Write};

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::SessionError;
use crate::game::{Command, GameController};

#[derive(Serialize)]
struct ErrorLine<'a> {
    error: &'a str,
}

/// Run commands from `input` against `controller` until end of input.
///
/// Each non-blank line must hold one [`Command`]. The reply is the resulting
/// state, or an `{"error": ...}` object when the line cannot be parsed or the
/// command is rejected; the game state is untouched in that case. Only I/O
/// failures end the session early.
pub fn run<R: BufRead, W: Write>(
    controller: &mut GameController,
    input: R,
    mut output: W,
) -> Result<(), SessionError> {
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let reply = match serde_json::from_str::<Command>(line) {
            Ok(command) => {
                debug!(?command, "command received");
                match controller.dispatch(command) {
                    Ok(state) => serde_json::to_string(state)?,
                    Err(err) => {
                        warn!(%err, "command rejected");
                        error_line(&err.to_string())?
                    }
                }
            }
            Err(err) => {
                warn!(%err, "unparseable command");
                error_line(&format!("invalid command: {err}"))?
            }
        };

        writeln!(output, "{reply}")?;
    }

    output.flush()?;
    Ok(())
}

fn error_line(message: &str) -> Result<String, SessionError> {
    Ok(serde_json::to_string(&ErrorLine { error: message })?)
}
