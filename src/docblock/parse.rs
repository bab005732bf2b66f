//! Reading existing docblock text back into a [`DocComment`].
//!
//! The reader is line based and deliberately forgiving.  Only lines whose
//! first whitespace-separated token is a lone `*` are looked at, which
//! covers the body of every block [`DocComment::to_source`] produces:
//!
//! ```text
//!  * Some description
//!  * @param int $id the widget id
//! ```
//!
//! Tags outside [`TagKind`] are dropped.  A known tag that lacks required
//! fields is an error for [`DocComment::from_string`], and is skipped by
//! [`DocComment::from_string_lenient`].

use std::str::FromStr;

use super::DocComment;
use crate::error::{ParseError, Result};
use crate::types::{
    AccessTag, AnnotationEntry, AuthorTag, LicenseTag, PackageTag, ParamTag, ReturnTag, TagKind,
    ThrowsTag, VarTag,
};
use crate::util::{join_words, split_lines};

/// What one `*` line of a docblock contributes.
enum Line {
    Description(String),
    Tag(Result<AnnotationEntry>),
}

impl DocComment {
    /// Parse docblock text, failing on the first malformed tag.
    ///
    /// Non-tag `*` lines become description lines, kept whole with their
    /// words joined by single spaces.  Empty input gives an empty comment.
    pub fn from_string(raw: &str) -> Result<Self> {
        let mut comment = DocComment::default();
        for line in scan(raw) {
            match line {
                Line::Description(text) => comment.description.push(text),
                Line::Tag(entry) => comment.insert(entry?),
            }
        }
        Ok(comment)
    }

    /// Parse docblock text like [`DocComment::from_string`], but skip
    /// malformed tags instead of failing.
    pub fn from_string_lenient(raw: &str) -> Self {
        let mut comment = DocComment::default();
        for line in scan(raw) {
            match line {
                Line::Description(text) => comment.description.push(text),
                Line::Tag(Ok(entry)) => comment.insert(entry),
                Line::Tag(Err(err)) => tracing::debug!("skipping: {err}"),
            }
        }
        comment
    }
}

impl FromStr for DocComment {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        DocComment::from_string(s)
    }
}

/// Classify every line of `raw`, dropping the ones that carry nothing.
fn scan(raw: &str) -> impl Iterator<Item = Line> + '_ {
    split_lines(raw)
        .into_iter()
        .enumerate()
        .filter_map(|(idx, line)| scan_line(idx + 1, line))
}

fn scan_line(line_no: usize, line: &str) -> Option<Line> {
    let words: Vec<&str> = line.split_whitespace().collect();
    if words.len() < 2 || words[0] != "*" {
        return None;
    }

    let Some(tag_name) = words[1].strip_prefix('@') else {
        return Some(Line::Description(join_words(&words[1..])));
    };

    let Some(kind) = TagKind::from_name(tag_name) else {
        tracing::debug!(
            tag = tag_name,
            line = line_no,
            "ignoring unsupported docblock tag"
        );
        return None;
    };

    Some(Line::Tag(parse_tag(kind, &words, line_no)))
}

/// Minimum token count (including the leading `*` and the tag itself)
/// for each kind.
fn required_tokens(kind: TagKind) -> usize {
    match kind {
        TagKind::Var | TagKind::Param => 4,
        TagKind::Return | TagKind::Throws | TagKind::Access => 3,
        TagKind::Author | TagKind::License | TagKind::Package => 2,
    }
}

/// Build the entry for one tag line.  `words[0]` is `*` and `words[1]` the
/// tag.
fn parse_tag(kind: TagKind, words: &[&str], line: usize) -> Result<AnnotationEntry> {
    let expected = required_tokens(kind);
    if words.len() < expected {
        return Err(ParseError::MalformedAnnotationLine {
            line,
            tag: kind,
            expected,
            found: words.len(),
        });
    }

    let rest = |from: usize| join_words(&words[from..]);

    let entry = match kind {
        TagKind::Var => VarTag::new(words[2], words[3], &rest(4)).map(AnnotationEntry::from),
        TagKind::Param => ParamTag::new(words[2], words[3], &rest(4)).map(AnnotationEntry::from),
        TagKind::Return => ReturnTag::new(words[2], &rest(3)).map(AnnotationEntry::from),
        TagKind::Throws => ThrowsTag::new(words[2], &rest(3)).map(AnnotationEntry::from),
        TagKind::Author => Ok(AuthorTag::new(&rest(2)).into()),
        TagKind::License => Ok(LicenseTag::new(&rest(2)).into()),
        TagKind::Package => Ok(PackageTag::new(&rest(2)).into()),
        TagKind::Access => AccessTag::new(words[2]).map(AnnotationEntry::from),
    };
    entry.map_err(|source| ParseError::InvalidAnnotation { line, source })
}
