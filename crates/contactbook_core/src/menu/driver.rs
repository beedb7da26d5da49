//! Prompt/read/transition loop.

use super::page::{transition, Action, InputError, Page};
use super::session::{Outcome, Session};
use log::{debug, error, warn};
use std::io::{self, BufRead, Write};

/// Runs the menu until `quit` or end of input.
///
/// End of input behaves like `quit`: contacts are flushed and the loop ends,
/// discarding any flow in progress. A line that is not valid UTF-8 is
/// rejected and the same page is prompted again.
///
/// # Errors
/// - Only console read/write failures are returned. Contacts are flushed
///   before a read failure is returned.
pub fn run(
    session: &mut Session,
    mut input: impl BufRead,
    mut output: impl Write,
) -> io::Result<()> {
    if let Some(reason) = session.degraded_reason() {
        writeln!(
            output,
            "warning: saved contacts could not be loaded ({reason}); changes will not be saved"
        )?;
    }

    let mut buffer = Vec::new();
    let mut page = Page::Home;

    while page != Page::Exit {
        write!(output, "{}", page.prompt())?;
        output.flush()?;

        buffer.clear();
        let read = match input.read_until(b'\n', &mut buffer) {
            Ok(read) => read,
            Err(err) => {
                error!("event=input_read module=menu status=error error={err}");
                session.apply(Action::Quit, &mut output)?;
                return Err(err);
            }
        };
        if read == 0 {
            debug!("event=input_eof module=menu status=ok");
            session.apply(Action::Quit, &mut output)?;
            break;
        }

        let step = std::str::from_utf8(&buffer)
            .map_err(|_| InputError::NotText)
            .and_then(|line| transition(&page, line));

        match step {
            Ok(step) => {
                page = step.next;
                if let Some(action) = step.action {
                    if session.apply(action, &mut output)? == Outcome::Abort {
                        page = Page::Home;
                    }
                }
            }
            Err(err) => {
                warn!("event=input_rejected module=menu status=error error={err}");
                writeln!(output, "{err}")?;
            }
        }
    }

    output.flush()
}
