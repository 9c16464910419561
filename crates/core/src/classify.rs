//! Content block classifier: turns a slide's raw content lines into
//! [`MarkupBlock`]s.
//!
//! Lines are tested in a fixed priority order: list marker, `## ` subheading,
//! `# ` heading (skipped), then plain paragraph. Consecutive list-marked
//! lines collect into one list, even when unordered and ordered markers are
//! mixed; the list takes its `ordered` flag from the line that opened it.

use crate::markers;
use crate::MarkupBlock;

/// Classify raw content lines into markup blocks in document order.
pub fn classify<S: AsRef<str>>(lines: &[S]) -> Vec<MarkupBlock> {
    lines
        .iter()
        .map(|line| line.as_ref())
        .fold(ClassifyState::default(), ClassifyState::step)
        .finish()
}

/// A list that is still accepting items.
#[derive(Debug)]
struct OpenList {
    items: Vec<String>,
    ordered: bool,
}

/// Left-fold state: emitted blocks plus the open list, if any.
#[derive(Debug, Default)]
struct ClassifyState {
    blocks: Vec<MarkupBlock>,
    open_list: Option<OpenList>,
}

impl ClassifyState {
    fn step(mut self, line: &str) -> Self {
        if let Some((item, ordered)) = markers::list_item(line) {
            self.open_list
                .get_or_insert_with(|| OpenList {
                    items: Vec::new(),
                    ordered,
                })
                .items
                .push(item.to_string());
        } else if let Some(text) = markers::secondary_heading(line) {
            self.close_list();
            self.blocks.push(MarkupBlock::Subheading(text.to_string()));
        } else if markers::primary_heading(line).is_some() {
            // Slide titles are consumed by the parser; a stray one is dropped.
            log::debug!("Skipping heading line inside slide content: {line}");
        } else if !markers::is_blank(line) {
            self.close_list();
            self.blocks.push(MarkupBlock::Paragraph(line.trim().to_string()));
        }
        self
    }

    fn close_list(&mut self) {
        if let Some(list) = self.open_list.take() {
            self.blocks.push(MarkupBlock::List {
                items: list.items,
                ordered: list.ordered,
            });
        }
    }

    fn finish(mut self) -> Vec<MarkupBlock> {
        self.close_list();
        self.blocks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(items: &[&str], ordered: bool) -> MarkupBlock {
        MarkupBlock::List {
            items: items.iter().map(|s| s.to_string()).collect(),
            ordered,
        }
    }

    fn paragraph(text: &str) -> MarkupBlock {
        MarkupBlock::Paragraph(text.to_string())
    }

    #[test]
    fn test_empty_content() {
        let lines: [&str; 0] = [];
        assert!(classify(&lines).is_empty());
    }

    #[test]
    fn test_lists_split_by_paragraph() {
        let blocks = classify(&["- a", "- b", "plain", "1. c"]);

        assert_eq!(
            blocks,
            vec![list(&["a", "b"], false), paragraph("plain"), list(&["c"], true)]
        );
    }

    #[test]
    fn test_mixed_markers_share_one_list() {
        let blocks = classify(&["1. first", "- second", "* third", "2. fourth"]);

        assert_eq!(
            blocks,
            vec![list(&["first", "second", "third", "fourth"], true)]
        );
    }

    #[test]
    fn test_subheading_closes_list() {
        let blocks = classify(&["- a", "## Section", "- b"]);

        assert_eq!(
            blocks,
            vec![
                list(&["a"], false),
                MarkupBlock::Subheading("Section".to_string()),
                list(&["b"], false),
            ]
        );
    }

    #[test]
    fn test_primary_heading_is_skipped() {
        let blocks = classify(&["- a", "# Stray", "- b"]);

        // The skipped heading neither emits a block nor closes the list.
        assert_eq!(blocks, vec![list(&["a", "b"], false)]);
    }

    #[test]
    fn test_paragraphs_are_not_merged() {
        let blocks = classify(&["one", "two"]);

        assert_eq!(blocks, vec![paragraph("one"), paragraph("two")]);
    }

    #[test]
    fn test_list_count_matches_marker_runs() {
        let lines = ["- a", "text", "* b", "2. c", "## H", "3. d", "more", "- e"];
        let blocks = classify(&lines);
        let lists = blocks
            .iter()
            .filter(|b| matches!(b, MarkupBlock::List { .. }))
            .count();

        assert_eq!(lists, 4);
        for block in &blocks {
            if let MarkupBlock::List { items, .. } = block {
                assert!(!items.is_empty());
            }
        }
    }

    #[test]
    fn test_accepts_owned_lines() {
        let lines = vec!["- x".to_string(), "y".to_string()];

        assert_eq!(classify(&lines), vec![list(&["x"], false), paragraph("y")]);
    }
}
