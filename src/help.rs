use url::Url;

use std::path::PathBuf;

use errors::Error;

pub const HELPTEXT: &'static str = r#"data-date define --data <file> --date-var <name> --structure <codes>
    [--week-period <n>] [--by <n>]

Build the host DATE command taking the starting date from the data.

Example:
data-date define --data cases.json --date-var datevar --structure ym
constructs the starting date from variable datevar and assigns a period of 12.

--date-var names the date variable whose first value seeds the command.

--structure gives the date/time structure as a string of letters drawn from
y q m w d h i s with no spaces in between. The abbreviations are the same as
for the DATE command except that minute is i rather than mi; cycle and obs
are not supported.

--week-period applies only to w (week). The other periods are assumed to
have their natural periodicity. w defaults to 7 but might usefully be set
to 5. The starting week is always calculated from the first date value
based on a 7-day week where week 1 begins on January 1.

--by gives the increment between observations and defaults to 1. With
--structure ym, for example, --by 2 means the data are monthly but only
observed every other month.

data-date manual shows this text (or the configured help document) and does
nothing else."#;

/// Where the `manual` subcommand sends the user. Picked once at
/// startup from the config; never swapped at runtime.
pub trait HelpProvider {
    fn show(&self) -> ::Result<()>;
}

/// Prints the built-in help text.
pub struct TextHelp;

impl HelpProvider for TextHelp {
    fn show(&self) -> ::Result<()> {
        println!("{}", HELPTEXT);
        Ok(())
    }
}

/// Points the user at a local help document instead.
pub struct FileHelp {
    path: PathBuf,
}

impl FileHelp {
    pub fn new<P: Into<PathBuf>>(path: P) -> FileHelp {
        FileHelp { path: path.into() }
    }
}

impl HelpProvider for FileHelp {
    fn show(&self) -> ::Result<()> {
        if !self.path.exists() {
            return Err(Error::HelpFile(self.path.display().to_string()));
        }
        let spec = Url::from_file_path(&self.path)
            .map_err(|_| Error::HelpFile(self.path.display().to_string()))?;
        println!("Open this URL in your browser:\n{}\n", spec);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_help_file_is_an_error() {
        let help = FileHelp::new("/definitely/not/here/markdown.html");
        assert!(help.show().is_err());
    }

    #[test]
    fn builtin_text_always_shows() {
        assert!(TextHelp.show().is_ok());
    }
}
