use std::io::Write;

use command::DateCommand;

/// Sink for generated command text. Nothing reaches a submitter until
/// validation and generation have both finished.
pub trait Submitter {
    fn submit(&mut self, command: &str) -> ::Result<()>;

    fn submit_all(&mut self, command: &DateCommand) -> ::Result<()> {
        self.submit(&command.date)?;
        if let Some(ref followup) = command.year_format {
            self.submit(followup)?;
        }
        Ok(())
    }
}

/// Writes one command per line, for piping into the host processor.
pub struct WriterSubmitter<W: Write> {
    out: W,
}

impl<W: Write> WriterSubmitter<W> {
    pub fn new(out: W) -> WriterSubmitter<W> {
        WriterSubmitter { out: out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Submitter for WriterSubmitter<W> {
    fn submit(&mut self, command: &str) -> ::Result<()> {
        info!("submitting: {}", command);
        writeln!(self.out, "{}", command)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use command::DateCommand;

    #[test]
    fn writes_main_then_followup() {
        let mut submitter = WriterSubmitter::new(Vec::new());
        let cmd = DateCommand {
            date: "DATE y 2020 by 1".to_string(),
            year_format: Some("FORMAT YEAR_ (N4)".to_string()),
        };
        submitter.submit_all(&cmd).unwrap();
        let out = String::from_utf8(submitter.into_inner()).unwrap();
        assert_eq!(out, "DATE y 2020 by 1\nFORMAT YEAR_ (N4)\n");
    }

    #[test]
    fn no_followup_without_year() {
        let mut submitter = WriterSubmitter::new(Vec::new());
        let cmd = DateCommand {
            date: "DATE q 2 by 1".to_string(),
            year_format: None,
        };
        submitter.submit_all(&cmd).unwrap();
        let out = String::from_utf8(submitter.into_inner()).unwrap();
        assert_eq!(out, "DATE q 2 by 1\n");
    }
}
