use std::collections::HashSet;
use std::str::FromStr;

use errors::Error;

/// One letter of a date structure string. The codes are the same as the
/// keywords of the host DATE command except that minute is `i` rather
/// than `mi`; cycle and obs are not supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Periodicity {
    Year,
    Quarter,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    Second,
}

/// Coarse (yearly-family) versus fine (sub-weekly) granularities. A
/// structure may not mix the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Class {
    Long,
    Short,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

/// How a periodicity gets its value from the anchor date. Quarter and
/// week have no direct calendar field and are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accessor {
    Field(DateField),
    Quarter,
    Week,
}

impl Periodicity {
    pub fn from_code(code: char) -> Option<Periodicity> {
        match code {
            'y' => Some(Periodicity::Year),
            'q' => Some(Periodicity::Quarter),
            'm' => Some(Periodicity::Month),
            'w' => Some(Periodicity::Week),
            'd' => Some(Periodicity::Day),
            'h' => Some(Periodicity::Hour),
            'i' => Some(Periodicity::Minute),
            's' => Some(Periodicity::Second),
            _ => None,
        }
    }

    /// Keyword emitted into the generated DATE command.
    pub fn keyword(&self) -> &'static str {
        match *self {
            Periodicity::Year => "y",
            Periodicity::Quarter => "q",
            Periodicity::Month => "m",
            Periodicity::Week => "w",
            Periodicity::Day => "d",
            Periodicity::Hour => "h",
            Periodicity::Minute => "mi",
            Periodicity::Second => "s",
        }
    }

    pub fn name(&self) -> &'static str {
        match *self {
            Periodicity::Year => "year",
            Periodicity::Quarter => "quarter",
            Periodicity::Month => "month",
            Periodicity::Week => "week",
            Periodicity::Day => "day",
            Periodicity::Hour => "hour",
            Periodicity::Minute => "minute",
            Periodicity::Second => "second",
        }
    }

    pub fn class(&self) -> Class {
        match *self {
            Periodicity::Year | Periodicity::Quarter | Periodicity::Month => Class::Long,
            _ => Class::Short,
        }
    }

    pub fn accessor(&self) -> Accessor {
        match *self {
            Periodicity::Year => Accessor::Field(DateField::Year),
            Periodicity::Month => Accessor::Field(DateField::Month),
            Periodicity::Day => Accessor::Field(DateField::Day),
            Periodicity::Hour => Accessor::Field(DateField::Hour),
            Periodicity::Minute => Accessor::Field(DateField::Minute),
            Periodicity::Second => Accessor::Field(DateField::Second),
            Periodicity::Quarter => Accessor::Quarter,
            Periodicity::Week => Accessor::Week,
        }
    }
}

/// An ordered, duplicate-free sequence of periodicity codes. The empty
/// structure is valid and produces a command with only the `by` term.
#[derive(Debug, Clone, PartialEq)]
pub struct DateStructure(Vec<Periodicity>);

impl DateStructure {
    pub fn terms(&self) -> &[Periodicity] {
        &self.0
    }

    pub fn contains(&self, term: Periodicity) -> bool {
        self.0.contains(&term)
    }
}

impl FromStr for DateStructure {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // the host uppercases keyword values
        let lowered = s.to_lowercase();
        let codes: Vec<char> = lowered.chars().collect();

        let unique: HashSet<char> = codes.iter().cloned().collect();
        if unique.len() != codes.len() {
            return Err(Error::DuplicateCode(s.to_string()));
        }

        let bad: Vec<String> = codes
            .iter()
            .filter(|c| Periodicity::from_code(**c).is_none())
            .map(|c| c.to_string())
            .collect();
        if !bad.is_empty() {
            return Err(Error::UnknownCode(bad.join(" ")));
        }

        let terms: Vec<Periodicity> = codes
            .iter()
            .filter_map(|c| Periodicity::from_code(*c))
            .collect();

        let has_long = terms.iter().any(|t| t.class() == Class::Long);
        let has_short = terms.iter().any(|t| t.class() == Class::Short);
        if has_long && has_short {
            let names: Vec<&str> = terms.iter().map(|t| t.name()).collect();
            return Err(Error::MixedClass(names.join(" ")));
        }

        Ok(DateStructure(terms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use errors::Error;

    #[test]
    fn terms_keep_input_order() {
        let s: DateStructure = "ym".parse().unwrap();
        assert_eq!(s.terms(), &[Periodicity::Year, Periodicity::Month]);
    }

    #[test]
    fn uppercase_input_is_folded() {
        let s: DateStructure = "YM".parse().unwrap();
        assert_eq!(s.terms(), &[Periodicity::Year, Periodicity::Month]);
    }

    #[test]
    fn duplicate_code_rejected() {
        match "yy".parse::<DateStructure>() {
            Err(Error::DuplicateCode(ref s)) => assert_eq!(s, "yy"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn unknown_code_rejected() {
        match "ymx".parse::<DateStructure>() {
            Err(Error::UnknownCode(ref s)) => assert_eq!(s, "x"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn mixed_classes_rejected_with_names() {
        match "yw".parse::<DateStructure>() {
            Err(Error::MixedClass(ref names)) => assert_eq!(names, "year week"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn empty_structure_is_valid() {
        let s: DateStructure = "".parse().unwrap();
        assert!(s.terms().is_empty());
    }

    #[test]
    fn minute_keyword_is_mi() {
        assert_eq!(Periodicity::Minute.keyword(), "mi");
    }

    #[test]
    fn all_short_codes_accepted_together() {
        let s: DateStructure = "wdhis".parse().unwrap();
        assert_eq!(s.terms().len(), 5);
    }
}
