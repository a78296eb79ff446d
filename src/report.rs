// Report output.
// Prints one line per selected extension followed by the total count.

use std::io::Write;

use crate::catalog::Extension;
use crate::error::Result;
use crate::filter::{MatchKind, Matcher};

/// Counts from a written report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReportSummary {
    pub total: usize,
    pub matched: usize,
}

/// Format the report line for the record at `index`, if it is selected.
///
/// Layout: `<index> [*]<creator> <uuid> [old]`, where `*` marks a creator
/// match. The old flag is empty when the record supports the current
/// version, which leaves a trailing space.
pub fn format_line(index: usize, extension: &Extension, matcher: &Matcher) -> Option<String> {
    let kind = matcher.classify(extension)?;
    let marker = match kind {
        MatchKind::Creator => "*",
        MatchKind::Keyword => "",
    };
    let flag = if matcher.is_old(extension) { "[old]" } else { "" };

    Some(format!(
        "{} {}{} {} {}",
        index,
        marker,
        extension.creator().unwrap_or_default(),
        extension.uuid().unwrap_or_default(),
        flag
    ))
}

/// Final line of a report.
pub fn format_total(total: usize) -> String {
    format!("{} [last]", total)
}

/// Write the report for all extensions in their original order.
pub fn write_report<W: Write>(
    extensions: &[Extension],
    matcher: &Matcher,
    mut out: W,
) -> Result<ReportSummary> {
    let mut summary = ReportSummary {
        total: extensions.len(),
        matched: 0,
    };

    for (i, extension) in extensions.iter().enumerate() {
        if let Some(line) = format_line(i, extension, matcher) {
            writeln!(out, "{}", line)?;
            summary.matched += 1;
        }
    }
    writeln!(out, "{}", format_total(summary.total))?;
    out.flush()?;

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn matcher() -> Matcher {
        Matcher::new("Deminder", "Shutdown|OSD", "43").unwrap()
    }

    fn extensions(value: serde_json::Value) -> Vec<Extension> {
        serde_json::from_value(value).unwrap()
    }

    fn render(extensions: &[Extension]) -> (String, ReportSummary) {
        let mut out = Vec::new();
        let summary = write_report(extensions, &matcher(), &mut out).unwrap();
        (String::from_utf8(out).unwrap(), summary)
    }

    #[test]
    fn test_three_record_report() {
        let data = extensions(json!([
            {"creator": "a", "uuid": "dock@a", "name": "Dock", "description": "",
             "shell_version_map": {"43": {}}},
            {"creator": "Deminder", "uuid": "ShutdownTimer@deminder", "name": "Shutdown Timer",
             "description": "", "shell_version_map": {"43": {}, "44": {}}},
            {"creator": "b", "uuid": "clock@b", "name": "Clock", "description": "",
             "shell_version_map": {"40": {}}}
        ]));

        let (output, summary) = render(&data);
        assert_eq!(output, "1 *Deminder ShutdownTimer@deminder \n3 [last]\n");
        assert_eq!(summary, ReportSummary { total: 3, matched: 1 });
    }

    #[test]
    fn test_keyword_and_old_flags() {
        let data = extensions(json!([
            {"creator": "b", "uuid": "osd@b", "name": "Better OSD", "description": "",
             "shell_version_map": {"42": {}}},
            {"creator": "Deminder", "uuid": "x@deminder", "name": "X", "description": ""}
        ]));

        let (output, summary) = render(&data);
        assert_eq!(
            output,
            "0 b osd@b [old]\n1 *Deminder x@deminder [old]\n2 [last]\n"
        );
        assert_eq!(summary.matched, 2);
    }

    #[test]
    fn test_empty_list() {
        let (output, summary) = render(&[]);
        assert_eq!(output, "0 [last]\n");
        assert_eq!(summary, ReportSummary::default());
    }

    #[test]
    fn test_missing_fields_print_empty() {
        let data = extensions(json!([{"name": "OSD"}]));
        let line = format_line(0, &data[0], &matcher()).unwrap();
        assert_eq!(line, "0   [old]");
    }

    #[test]
    fn test_report_is_deterministic() {
        let data = extensions(json!([
            {"creator": "Deminder", "uuid": "a", "name": "A"},
            {"creator": "c", "uuid": "b", "name": "shutdown helper"}
        ]));
        assert_eq!(render(&data), render(&data));
    }
}
