use std::fmt;
use std::io::{self, Write};

use serde_jsonlines::JsonLinesWriter;

use crate::models::Vacancy;

const NOT_SPECIFIED: &str = "not specified";

struct OrUnspecified<'a, T>(&'a Option<T>);

impl<T: fmt::Display> fmt::Display for OrUnspecified<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => value.fmt(f),
            None => f.write_str(NOT_SPECIFIED),
        }
    }
}

impl fmt::Display for Vacancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Title: {}", self.title)?;
        writeln!(f, "Employer: {}", self.employer)?;
        writeln!(f, "Link: {}", self.url)?;
        writeln!(f, "Description: {}", OrUnspecified(&self.description))?;
        writeln!(f, "Currency: {}", OrUnspecified(&self.currency))?;
        writeln!(f, "Salary from: {}", OrUnspecified(&self.salary_from))?;
        writeln!(f, "Salary to: {}", OrUnspecified(&self.salary_to))?;
        writeln!(f, "{}", "-".repeat(30))
    }
}

pub fn print_vacancies<W: Write>(out: &mut W, vacancies: &[Vacancy]) -> io::Result<()> {
    for vacancy in vacancies {
        writeln!(out, "{vacancy}")?;
    }
    out.flush()
}

/// One JSON object per line, in the same field order as [`Vacancy`].
pub fn write_jsonl<W: Write>(out: W, vacancies: &[Vacancy]) -> io::Result<()> {
    let mut writer = JsonLinesWriter::new(out);
    writer.write_all(vacancies)?;
    writer.flush()
}
