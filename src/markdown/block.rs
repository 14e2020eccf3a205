//! Line-oriented block tokenizer.
//!
//! A single forward scan classifies each source line into a structural block.
//! The only carried state is whether the scan is inside a fenced code block;
//! fence content is accumulated verbatim and never touched by the inline
//! pipeline. Grouping runs of list items and prose lines into wrapper
//! elements is the assembler's job (see [`super::render`]).

use std::sync::LazyLock;

use regex::Regex;

pub(super) static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{2,3})\s+(.+)$").unwrap());
static FENCE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^```(\w+)?\s*$").unwrap());
static UNORDERED_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[*-]\s+(.+)$").unwrap());
static ORDERED_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.\s+(.+)$").unwrap());
static QUOTE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^>\s+(.+)$").unwrap());

/// One structural unit of a document body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Section heading, level 2 or 3. A `# ` line is prose; the page title
    /// comes from front-matter, not the body.
    Heading { level: u8, text: String },
    /// Single list item. Runs of the same orderedness share one wrapper.
    ListItem { ordered: bool, text: String },
    /// Single-line blockquote. No continuation merging.
    Quote(String),
    /// Horizontal rule (`---` or `***` on its own line).
    Rule,
    /// Fenced code block, kept verbatim.
    Code { lang: Option<String>, code: String },
    /// A line of running text.
    Prose(String),
    /// Blank source line; terminates the current paragraph or list group.
    Blank,
}

/// Tokenize a document body into blocks.
///
/// Never fails: every line is *some* block, and an unterminated fence at end
/// of input is closed implicitly rather than poisoning the whole document.
pub fn tokenize(body: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut in_fence = false;
    let mut fence_lang: Option<String> = None;
    let mut fence_lines: Vec<&str> = Vec::new();

    for line in body.lines() {
        if in_fence {
            if FENCE_RE.is_match(line) {
                blocks.push(Block::Code {
                    lang: fence_lang.take(),
                    code: fence_lines.join("\n"),
                });
                fence_lines.clear();
                in_fence = false;
            } else {
                fence_lines.push(line);
            }
            continue;
        }

        if let Some(caps) = FENCE_RE.captures(line) {
            in_fence = true;
            fence_lang = caps.get(1).map(|m| m.as_str().to_string());
            continue;
        }

        blocks.push(classify(line));
    }

    // Unterminated fence at end of input: close it implicitly.
    if in_fence {
        blocks.push(Block::Code {
            lang: fence_lang.take(),
            code: fence_lines.join("\n"),
        });
    }

    blocks
}

fn classify(line: &str) -> Block {
    if let Some(caps) = HEADING_RE.captures(line) {
        return Block::Heading {
            level: caps[1].len() as u8,
            text: caps[2].to_string(),
        };
    }
    if line == "---" || line == "***" {
        return Block::Rule;
    }
    if let Some(caps) = UNORDERED_RE.captures(line) {
        return Block::ListItem {
            ordered: false,
            text: caps[1].to_string(),
        };
    }
    if let Some(caps) = ORDERED_RE.captures(line) {
        return Block::ListItem {
            ordered: true,
            text: caps[1].to_string(),
        };
    }
    if let Some(caps) = QUOTE_RE.captures(line) {
        return Block::Quote(caps[1].to_string());
    }
    if line.trim().is_empty() {
        return Block::Blank;
    }
    Block::Prose(line.to_string())
}
