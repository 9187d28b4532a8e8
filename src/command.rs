use date::Date;
use errors::Error;
use structure::{Accessor, DateField, DateStructure, Periodicity};

/// The generated command text. `year_format` carries the follow-up
/// command that widens the year display to four digits; it must be
/// submitted after the main command whenever `y` was in the structure.
#[derive(Debug, Clone, PartialEq)]
pub struct DateCommand {
    pub date: String,
    pub year_format: Option<String>,
}

/// Validate `structure` and derive the DATE command anchored at the
/// first observed value of `variable`. Structure validation runs before
/// the anchor is looked at, so a bad structure is reported even when
/// the data has no usable date.
pub fn build_command(
    anchor: Option<Date>,
    variable: &str,
    structure: &str,
    week_period: Option<u32>,
    by: u32,
) -> ::Result<DateCommand> {
    let structure: DateStructure = structure.parse()?;

    let anchor = match anchor {
        Some(date) => date,
        None => return Err(Error::MissingAnchor(variable.to_string())),
    };

    let mut cmd = vec!["DATE".to_string()];
    for term in structure.terms() {
        match term.accessor() {
            Accessor::Field(field) => {
                cmd.push(format!("{} {}", term.keyword(), field_value(&anchor, field)));
            }
            Accessor::Quarter => {
                // quarter boundaries fall after months 3, 7 and 11 under
                // this arithmetic; it matches the host DATE setup
                cmd.push(format!("{} {}", term.keyword(), anchor.month() / 4 + 1));
            }
            Accessor::Week => {
                // the starting week always comes from a 7-day week where
                // week 1 begins on January 1; the override only changes
                // the period going forward
                let week = (anchor.day_of_year() - 1) / 7 + 1;
                match week_period {
                    Some(period) => {
                        cmd.push(format!("{} {} {}", term.keyword(), week, period));
                    }
                    None => cmd.push(format!("{} {}", term.keyword(), week)),
                }
            }
        }
    }
    cmd.push(format!("by {}", by));

    // DATE leaves YEAR_ at two digits otherwise
    let year_format = if structure.contains(Periodicity::Year) {
        Some("FORMAT YEAR_ (N4)".to_string())
    } else {
        None
    };

    let command = DateCommand {
        date: cmd.join(" "),
        year_format: year_format,
    };
    debug!("generated: {}", command.date);
    Ok(command)
}

fn field_value(anchor: &Date, field: DateField) -> i64 {
    match field {
        DateField::Year => i64::from(anchor.year()),
        DateField::Month => i64::from(anchor.month()),
        DateField::Day => i64::from(anchor.day()),
        DateField::Hour => i64::from(anchor.hour()),
        DateField::Minute => i64::from(anchor.minute()),
        DateField::Second => i64::from(anchor.second()),
    }
}
