//! Changelog block rendering and prepending.

use chrono::NaiveDate;

use crate::fragment::Fragment;

/// One version's worth of aggregated fragment messages, dated by the
/// latest fragment rather than the wall clock.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub version: String,
    pub date: NaiveDate,
    pub messages: Vec<String>,
}

impl Block {
    /// Build a block from fragments already sorted ascending by datetime.
    /// The release date is the UTC calendar date of the last fragment.
    /// Returns `None` for an empty fragment list.
    pub fn from_fragments(
        version: &str,
        fragments: &[Fragment],
    ) -> Option<Self> {
        let latest = fragments.last()?;

        Some(Self {
            version: version.to_string(),
            date: latest.datetime.date_naive(),
            messages: fragments.iter().map(|f| f.message.clone()).collect(),
        })
    }

    /// Render the Markdown block:
    ///
    /// ```text
    /// ## {version} - {YYYY-MM-DD}
    ///
    /// - {message 1}
    /// - {message 2}
    /// ```
    pub fn render(&self) -> String {
        let lines = self
            .messages
            .iter()
            .map(|message| format!("- {}", message))
            .collect::<Vec<String>>()
            .join("\n");

        format!(
            "## {} - {}\n\n{}",
            self.version,
            self.date.format("%Y-%m-%d"),
            lines
        )
    }
}

/// Put a new block above any existing changelog content, separated by a
/// blank line. Existing history is never reordered or dropped; the final
/// content is trimmed of leading and trailing whitespace.
pub fn prepend(existing: &str, block: &str) -> String {
    let existing = existing.trim();

    if existing.is_empty() {
        return block.trim().to_string();
    }

    format!("{}\n\n{}", block.trim(), existing)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragment(message: &str, datetime: &str) -> Fragment {
        serde_json::from_str(&format!(
            r#"{{ "message": "{}", "datetime": "{}" }}"#,
            message, datetime
        ))
        .unwrap()
    }

    #[test]
    fn renders_versioned_dated_block() {
        let fragments = vec![
            fragment("b", "2022-12-18T00:00:00Z"),
            fragment("a", "2022-12-18T01:00:00Z"),
        ];
        let block = Block::from_fragments("0.0.1", &fragments).unwrap();

        assert_eq!(block.render(), "## 0.0.1 - 2022-12-18\n\n- b\n- a");
    }

    #[test]
    fn date_comes_from_latest_fragment() {
        let fragments = vec![
            fragment("old", "2022-12-17T23:59:59Z"),
            fragment("new", "2022-12-19T00:00:01Z"),
        ];
        let block = Block::from_fragments("1.0.1", &fragments).unwrap();

        assert_eq!(block.date.to_string(), "2022-12-19");
    }

    #[test]
    fn empty_fragment_list_yields_no_block() {
        assert!(Block::from_fragments("1.0.0", &[]).is_none());
    }

    #[test]
    fn prepend_to_empty_content_is_block_alone() {
        assert_eq!(prepend("", "## 0.0.1 - 2022-12-18\n\n- a"), "## 0.0.1 - 2022-12-18\n\n- a");
        assert_eq!(prepend("  \n", "block"), "block");
    }

    #[test]
    fn prepend_separates_with_blank_line() {
        let existing = "## 0.0.1 - 2022-12-18\n\n- a";
        let block = "## 0.0.2 - 2022-12-19\n\n- b";

        assert_eq!(
            prepend(existing, block),
            "## 0.0.2 - 2022-12-19\n\n- b\n\n## 0.0.1 - 2022-12-18\n\n- a"
        );
    }

    #[test]
    fn prepend_keeps_history_verbatim() {
        let existing = "## 1.0.0 - 2022-01-01\n\n- first\n\n## 0.9.0 - 2021-12-01\n\n- earlier";
        let result = prepend(existing, "## 1.0.1 - 2022-02-01\n\n- fix");

        assert!(result.ends_with(existing));
        assert!(result.starts_with("## 1.0.1 - 2022-02-01"));
    }
}
