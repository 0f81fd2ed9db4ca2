use anyhow::Result;
use insights_highlights::{highlight_pages, DigestIssue, ParseReport};
use serde_json::json;

pub fn render_text(report: &ParseReport, include_issues: bool) -> String {
    let pages = highlight_pages(&report.highlights);

    let mut out = String::new();
    if pages.is_empty() {
        out.push_str("No career highlights\n");
    }
    for (i, page) in pages.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&page.to_string());
    }

    if include_issues && !report.issues.is_empty() {
        out.push_str("\nIssues:\n");
        for reported in &report.issues {
            out.push_str(&format!(
                "  #{} {}: {}\n",
                reported.index,
                describe_issue(&reported.issue),
                truncate_one_line(&reported.entry, 80)
            ));
        }
    }

    // print_stdout appends the final newline
    out.truncate(out.trim_end().len());
    out
}

pub fn render_json(report: &ParseReport, include_issues: bool) -> Result<String> {
    let value = if include_issues {
        serde_json::to_value(report)?
    } else {
        json!({ "highlights": report.highlights })
    };
    Ok(serde_json::to_string_pretty(&value)?)
}

fn describe_issue(issue: &DigestIssue) -> String {
    match issue {
        DigestIssue::UnparseableEntry => "no year".to_string(),
        DigestIssue::StaleEntry { year, minimum_year } => {
            format!("{year} is before {minimum_year}")
        }
        DigestIssue::FutureEntry {
            year,
            reference_year,
        } => format!("{year} is after {reference_year}"),
        DigestIssue::EmptyBody { year } => format!("{year} has no venue"),
        DigestIssue::UnknownCategory { year, title } => {
            format!("{year} has unknown label {title:?}")
        }
    }
}

fn truncate_one_line(text: &str, max_chars: usize) -> String {
    let line = text.trim().replace(['\n', '\r'], " ");
    if line.chars().count() <= max_chars {
        return line;
    }
    let mut truncated: String = line.chars().take(max_chars.saturating_sub(1)).collect();
    truncated.push('…');
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;
    use insights_highlights::DigestParser;

    fn report(digest: &str) -> ParseReport {
        DigestParser::default().parse_year_with_report(digest, 2024)
    }

    #[test]
    fn text_lists_pages_then_issues() {
        let text = render_text(&report("2021Solo Show@MoMA;2010Solo Show@Old;2022Fair@Basel"), true);
        assert_eq!(
            text,
            "2021 Career Highlights\n  Solo show at a major institution\n    MoMA\n\n\
             2022 Career Highlights\n  (Unknown)\n    Basel\n\n\
             Issues:\n  #1 2010 is before 2016: 2010Solo Show@Old\n  #2 2022 has unknown label \"Fair\": 2022Fair@Basel"
        );
    }

    #[test]
    fn text_for_empty_digest() {
        assert_eq!(render_text(&report(""), true), "No career highlights");
    }

    #[test]
    fn json_omits_issues_unless_requested() {
        let parsed = report("2021Group Show@Tate;nothing");
        let plain: serde_json::Value =
            serde_json::from_str(&render_json(&parsed, false).unwrap()).unwrap();
        assert_eq!(plain, json!({ "highlights": { "2021": { "Group Show": ["Tate"] } } }));

        let full: serde_json::Value =
            serde_json::from_str(&render_json(&parsed, true).unwrap()).unwrap();
        assert_eq!(full["issues"][0]["issue"]["kind"], "unparseable_entry");
    }

    #[test]
    fn truncates_long_entries() {
        assert_eq!(truncate_one_line("a\nb", 10), "a b");
        assert_eq!(truncate_one_line("abcdef", 4), "abc…");
    }
}
