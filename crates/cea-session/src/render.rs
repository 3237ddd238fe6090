//! Text layout for the terminal

use cea_record::Document;

/// Horizontal rule between documents
pub(crate) const DOC_RULE: char = '-';

/// Horizontal rule around examples and decisions
pub(crate) const SECTION_RULE: char = '=';

const RULE_WIDTH: usize = 100;

pub(crate) fn rule(ch: char) -> String {
    ch.to_string().repeat(RULE_WIDTH)
}

/// Greedy word wrap; words longer than `width` get a line of their own
pub(crate) fn wrap(text: &str, width: usize) -> String {
    let width = width.max(1);
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let len = word.chars().count();
        if current_len > 0 && current_len + 1 + len > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += len;
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines.join("\n")
}

/// Identifying fields and snippet of one document
pub(crate) fn document(doc: &Document, width: usize) -> String {
    let mut out = format!(
        "[{}] {}",
        doc.doc_id,
        doc.display_title().unwrap_or("(no title)")
    );
    if let Some(url) = doc.display_url() {
        out.push('\n');
        out.push_str(url);
    }
    if let Some(date) = doc.display_date() {
        out.push_str("\ndate: ");
        out.push_str(date);
    }
    out.push('\n');
    match doc.display_snippet() {
        Some(snippet) => out.push_str(&wrap(snippet, width)),
        None => out.push_str("(no snippet)"),
    }
    out
}
