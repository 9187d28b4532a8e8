use serde_json::{self, Value};

use std::fs::File;
use std::path::{Path, PathBuf};

use date::Date;
use errors::Error;

/// Supplies the anchor date: the value of one variable in the first
/// case of the data.
pub trait DateSource {
    /// `Ok(None)` means the first case exists but the value is missing.
    fn first_case(&self, variable: &str) -> ::Result<Option<Date>>;
}

/// A dataset stored as a JSON array of case objects, date values as
/// strings. Only the first case is ever consulted; the file handle is
/// released as soon as the read completes.
pub struct JsonDataset {
    path: PathBuf,
}

impl JsonDataset {
    pub fn open<P: AsRef<Path>>(path: P) -> JsonDataset {
        JsonDataset {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl DateSource for JsonDataset {
    fn first_case(&self, variable: &str) -> ::Result<Option<Date>> {
        let file = File::open(&self.path)?;
        let cases: Vec<Value> = serde_json::from_reader(file)?;

        let first = match cases.first() {
            Some(case) => case,
            None => {
                return Err(Error::Dataset(format!(
                    "dataset has no cases: {}",
                    self.path.display()
                )))
            }
        };

        match first.get(variable) {
            None | Some(&Value::Null) => Ok(None),
            Some(&Value::String(ref s)) => s.parse().map(Some),
            Some(other) => Err(Error::Dataset(format!(
                "{} is not a date value: {}",
                variable, other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::env;
    use std::fs::File;
    use std::io::Write;
    use std::path::PathBuf;

    fn write_dataset(name: &str, body: &str) -> PathBuf {
        let path = env::temp_dir().join(name);
        let mut f = File::create(&path).unwrap();
        f.write_all(body.as_bytes()).unwrap();
        path
    }

    #[test]
    fn reads_first_case_only() {
        let path = write_dataset(
            "data_date_first.json",
            r#"[{"datevar": "2020-03-15"}, {"datevar": "2021-07-01"}]"#,
        );
        let anchor = JsonDataset::open(&path).first_case("datevar").unwrap();
        assert_eq!(anchor.unwrap().to_string(), "2020-03-15 00:00:00");
    }

    #[test]
    fn null_value_is_missing() {
        let path = write_dataset("data_date_null.json", r#"[{"datevar": null}]"#);
        let anchor = JsonDataset::open(&path).first_case("datevar").unwrap();
        assert!(anchor.is_none());
    }

    #[test]
    fn absent_variable_is_missing() {
        let path = write_dataset("data_date_absent.json", r#"[{"other": 1}]"#);
        let anchor = JsonDataset::open(&path).first_case("datevar").unwrap();
        assert!(anchor.is_none());
    }

    #[test]
    fn empty_dataset_is_an_error() {
        let path = write_dataset("data_date_empty.json", "[]");
        assert!(JsonDataset::open(&path).first_case("datevar").is_err());
    }

    #[test]
    fn non_string_value_is_an_error() {
        let path = write_dataset("data_date_nonstr.json", r#"[{"datevar": 42}]"#);
        assert!(JsonDataset::open(&path).first_case("datevar").is_err());
    }
}
