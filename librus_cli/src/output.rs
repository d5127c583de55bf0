use librus_api::HomeworkEntry;
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Longest content snippet shown in a table cell.
const CONTENT_WIDTH: usize = 60;

#[derive(Clone, Debug, PartialEq)]
pub enum OutputFormat {
    Table,
    Json,
    Markdown,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Self {
        match value {
            "json" => OutputFormat::Json,
            "markdown" => OutputFormat::Markdown,
            _ => OutputFormat::Table,
        }
    }
}

#[derive(Tabled)]
struct HomeworkRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Lesson")]
    lesson: String,
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "Subject")]
    subject: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Teacher")]
    creator: String,
    #[tabled(rename = "Content")]
    content: String,
}

// -- Row builders --

fn build_homework_rows(entries: &[HomeworkEntry]) -> Vec<HomeworkRow> {
    entries
        .iter()
        .map(|e| HomeworkRow {
            date: e.date.clone(),
            lesson: e.lesson_no.clone().unwrap_or_else(|| "-".to_string()),
            time: format_time_range(e.time_from.as_deref(), e.time_to.as_deref()),
            subject: e.subject.clone(),
            category: e.category.clone(),
            creator: e.creator.clone(),
            content: shorten(e.content.as_deref().unwrap_or_default(), CONTENT_WIDTH),
        })
        .collect()
}

// -- Table output --

pub fn print_homework_table(entries: &[HomeworkEntry]) {
    println!("{}", Table::new(build_homework_rows(entries)));
}

pub fn print_homework_markdown(entries: &[HomeworkEntry]) {
    let mut table = Table::new(build_homework_rows(entries));
    table.with(Style::markdown());
    println!("{}", table);
}

pub fn print_homework(entries: &[HomeworkEntry], format: &OutputFormat) {
    match format {
        OutputFormat::Table => print_homework_table(entries),
        OutputFormat::Markdown => print_homework_markdown(entries),
        OutputFormat::Json => print_json(&entries),
    }
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

/// "07:45:00" + "08:30:00" -> "07:45-08:30".
fn format_time_range(from: Option<&str>, to: Option<&str>) -> String {
    match (from, to) {
        (Some(from), Some(to)) => format!("{}-{}", hh_mm(from), hh_mm(to)),
        (Some(from), None) => format!("{}-", hh_mm(from)),
        (None, Some(to)) => format!("-{}", hh_mm(to)),
        (None, None) => "-".to_string(),
    }
}

fn hh_mm(time: &str) -> &str {
    match time.char_indices().nth(5) {
        Some((idx, _)) if time.matches(':').count() == 2 => &time[..idx],
        _ => time,
    }
}

fn shorten(text: &str, max_chars: usize) -> String {
    let single_line = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if single_line.chars().count() <= max_chars {
        single_line
    } else {
        let cut: String = single_line.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", cut.trim_end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(lesson_no: Option<&str>, content: Option<&str>) -> HomeworkEntry {
        HomeworkEntry {
            id: 6671271,
            date: "2026-02-20".to_string(),
            subject: "Historia".to_string(),
            creator: "Krzysztof Krupa".to_string(),
            category: "inne wydarzenia".to_string(),
            lesson_no: lesson_no.map(str::to_string),
            time_from: Some("07:45:00".to_string()),
            time_to: Some("08:30:00".to_string()),
            content: content.map(str::to_string),
            add_date: None,
        }
    }

    // -- format helpers --

    #[test]
    fn test_format_time_range() {
        assert_eq!(format_time_range(Some("07:45:00"), Some("08:30:00")), "07:45-08:30");
        assert_eq!(format_time_range(Some("07:45"), None), "07:45-");
        assert_eq!(format_time_range(None, Some("08:30:00")), "-08:30");
        assert_eq!(format_time_range(None, None), "-");
    }

    #[test]
    fn test_shorten() {
        assert_eq!(shorten("Kartkówka z chronologii", 60), "Kartkówka z chronologii");
        assert_eq!(shorten("line one\nline two", 60), "line one line two");
        assert_eq!(shorten("abcdefghij", 8), "abcde...");
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!(OutputFormat::parse("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("markdown"), OutputFormat::Markdown);
        assert_eq!(OutputFormat::parse("table"), OutputFormat::Table);
        assert_eq!(OutputFormat::parse("anything"), OutputFormat::Table);
    }

    // -- Row builder tests --

    #[test]
    fn test_build_homework_rows_mapping() {
        let rows = build_homework_rows(&[entry(Some("1"), Some("Kartkówka z chronologii"))]);
        assert_eq!(rows.len(), 1);

        let row = &rows[0];
        assert_eq!(row.date, "2026-02-20");
        assert_eq!(row.lesson, "1");
        assert_eq!(row.time, "07:45-08:30");
        assert_eq!(row.subject, "Historia");
        assert_eq!(row.category, "inne wydarzenia");
        assert_eq!(row.creator, "Krzysztof Krupa");
        assert_eq!(row.content, "Kartkówka z chronologii");
    }

    #[test]
    fn test_build_homework_rows_missing_optionals() {
        let rows = build_homework_rows(&[entry(None, None)]);
        assert_eq!(rows[0].lesson, "-");
        assert_eq!(rows[0].content, "");
    }

    #[test]
    fn test_table_contains_headers() {
        let table = Table::new(build_homework_rows(&[entry(Some("1"), None)])).to_string();
        assert!(table.contains("Subject"));
        assert!(table.contains("Teacher"));
        assert!(table.contains("Historia"));
    }
}
