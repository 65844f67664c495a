use anyhow::{Context as _, Result};
use std::io::{BufRead, Write};
use tracing::debug;

use crate::commands::{dispatch, message_for, parse_input, Outcome, Session};

#[derive(Debug, Clone)]
pub struct ReplOptions<'a> {
    pub prompt: &'a str,
    pub greeting: &'a str,
}

/// Reads commands line by line until `exit`/`close` or end of input.
pub fn run<R, W>(
    session: &mut Session,
    options: &ReplOptions<'_>,
    input: R,
    mut output: W,
) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", options.greeting).with_context(|| "write greeting")?;

    let mut lines = input.lines();
    loop {
        write!(output, "{}", options.prompt).with_context(|| "write prompt")?;
        output.flush().with_context(|| "flush prompt")?;

        let line = match lines.next() {
            Some(line) => line.with_context(|| "read command")?,
            None => {
                debug!("end of input");
                writeln!(output).with_context(|| "write output")?;
                return Ok(());
            }
        };

        let Some((name, args)) = parse_input(&line) else {
            continue;
        };

        match dispatch(session, name, &args) {
            Ok(Outcome::Continue(reply)) => {
                writeln!(output, "{}", reply).with_context(|| "write output")?;
            }
            Ok(Outcome::Exit(reply)) => {
                writeln!(output, "{}", reply).with_context(|| "write output")?;
                return Ok(());
            }
            Err(err) => {
                debug!(error = %err, "command failed");
                writeln!(output, "{}", message_for(&err)).with_context(|| "write output")?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{run, ReplOptions};
    use crate::commands::Session;
    use chrono::NaiveDate;

    fn transcript(script: &str) -> String {
        let mut session = Session::new(7, false, NaiveDate::from_ymd_opt(2024, 6, 13));
        let options = ReplOptions {
            prompt: "> ",
            greeting: "hi",
        };
        let mut output = Vec::new();
        run(&mut session, &options, script.as_bytes(), &mut output).expect("repl");
        String::from_utf8(output).expect("utf8")
    }

    #[test]
    fn session_stops_at_exit() {
        let out = transcript("hello\nexit\nhello\n");
        assert_eq!(out, "hi\n> How can I help you?\n> Good bye\n");
    }

    #[test]
    fn blank_lines_and_errors_keep_the_loop_running() {
        let out = transcript("\n   \nnope\nphone Ada\nclose\n");
        assert_eq!(
            out,
            "hi\n> > > Invalid command\n> Contact not found\n> Good bye\n"
        );
    }

    #[test]
    fn end_of_input_ends_session() {
        let out = transcript("add Ada 0501234567");
        assert_eq!(out, "hi\n> Contact added\n> \n");
    }
}
