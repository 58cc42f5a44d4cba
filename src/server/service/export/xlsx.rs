//! Rendering of a [`Roster`] into an xlsx workbook.
//!
//! One worksheet per job. A header row names the helper columns, then every shift gets a
//! bold row with its times followed by one row per registered helper.

use std::collections::HashSet;

use chrono::NaiveDateTime;
use rust_xlsxwriter::{DocProperties, ExcelDateTime, Format, Workbook, Worksheet, XlsxError};

use crate::server::service::export::{Roster, RosterJob};

/// Excel's limit for worksheet names
const MAX_SHEET_NAME_LENGTH: usize = 31;

const ILLEGAL_SHEET_CHARS: &[char] = &['[', ']', ':', '*', '?', '/', '\\'];

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

const HELPER_COLUMNS: [&str; 5] = ["Surname", "Prename", "E-Mail", "Phone", "Comment"];

/// Renders the roster into the bytes of an xlsx file
///
/// The document creation time is the roster's `created_at`, rendering the same roster twice
/// yields the same document properties.
pub fn render(roster: &Roster) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();

    let created = ExcelDateTime::from_timestamp(roster.created_at.and_utc().timestamp())?;
    let properties = DocProperties::new()
        .set_title(&roster.title)
        .set_creation_datetime(&created);
    workbook.set_properties(&properties);

    let names: Vec<&str> = roster.jobs.iter().map(|job| job.name.as_str()).collect();
    let sheet_names = sheet_names(&names);

    for (job, sheet_name) in roster.jobs.iter().zip(sheet_names) {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&sheet_name)?;
        write_job(worksheet, job)?;
    }

    // A workbook needs at least one sheet
    if roster.jobs.is_empty() {
        workbook.add_worksheet();
    }

    workbook.save_to_buffer()
}

fn write_job(worksheet: &mut Worksheet, job: &RosterJob) -> Result<(), XlsxError> {
    let bold = Format::new().set_bold();

    worksheet.write_string_with_format(0, 0, &job.name, &bold)?;
    for (col, title) in HELPER_COLUMNS.iter().enumerate() {
        worksheet.write_string_with_format(1, col as u16, *title, &bold)?;
    }

    let mut row: u32 = 3;
    for shift in &job.shifts {
        worksheet.write_string_with_format(row, 0, format_datetime(shift.begin), &bold)?;
        worksheet.write_string_with_format(row, 1, format_datetime(shift.end), &bold)?;
        if shift.number > 0 {
            worksheet.write_string_with_format(
                row,
                2,
                format!("{}/{}", shift.helpers.len(), shift.number),
                &bold,
            )?;
        }
        row += 1;

        for helper in &shift.helpers {
            worksheet.write_string(row, 0, &helper.surname)?;
            worksheet.write_string(row, 1, &helper.prename)?;
            worksheet.write_string(row, 2, &helper.email)?;
            worksheet.write_string(row, 3, &helper.phone)?;
            worksheet.write_string(row, 4, &helper.comment)?;
            row += 1;
        }

        row += 1;
    }

    worksheet.set_column_width(0, 20)?;
    worksheet.set_column_width(1, 20)?;
    worksheet.set_column_width(2, 30)?;

    Ok(())
}

fn format_datetime(datetime: NaiveDateTime) -> String {
    datetime.format(DATETIME_FORMAT).to_string()
}

/// Valid and unique worksheet names for the given job names, in order
///
/// Illegal characters are removed, names are cut to 31 characters and duplicates get a
/// numeric suffix. Uniqueness is case-insensitive like in Excel.
pub fn sheet_names(job_names: &[&str]) -> Vec<String> {
    let mut used: HashSet<String> = HashSet::new();

    job_names
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let cleaned: String = name
                .chars()
                .filter(|c| !ILLEGAL_SHEET_CHARS.contains(c) && !c.is_control())
                .collect();
            let cleaned = cleaned.trim().trim_matches('\'').trim().to_string();

            let base = if cleaned.is_empty() {
                format!("Job {}", index + 1)
            } else {
                cleaned
            };

            let mut candidate = truncate(&base, MAX_SHEET_NAME_LENGTH);
            let mut suffix = 2;
            while used.contains(&candidate.to_lowercase()) {
                let tail = format!(" ({})", suffix);
                candidate = format!(
                    "{}{}",
                    truncate(&base, MAX_SHEET_NAME_LENGTH - tail.chars().count()),
                    tail
                );
                suffix += 1;
            }

            used.insert(candidate.to_lowercase());
            candidate
        })
        .collect()
}

/// Cuts to `max_chars`, sheet names may not end with whitespace or an apostrophe
fn truncate(value: &str, max_chars: usize) -> String {
    value
        .chars()
        .take(max_chars)
        .collect::<String>()
        .trim_end_matches(|c: char| c.is_whitespace() || c == '\'')
        .to_string()
}
