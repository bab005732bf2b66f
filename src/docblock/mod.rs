//! PHPDoc comment blocks.
//!
//! A [`DocComment`] is the structured form of a `/** ... */` block: a
//! free-text description plus the tags from
//! [`TagKind`](crate::types::TagKind).  Singular tags (`@var`, `@return`,
//! `@package`, `@author`, `@license`, `@access`) live in one slot each and
//! are overwritten by their setter; `@param` and `@throws` are kept in
//! insertion order and only ever appended to.
//!
//! Each slot is typed by its tag struct, so a `@param` can only ever land in
//! the param list and a `@var` only in the var slot.
//!
//! # Submodules
//!
//! - [`render`]: canonical text output ([`DocComment::to_source`]).
//! - [`parse`]: best-effort reading of existing comment text
//!   ([`DocComment::from_string`] and [`DocComment::from_string_lenient`]).

mod parse;
mod render;

use serde::Serialize;

use crate::types::{
    AccessTag, AnnotationEntry, AuthorTag, LicenseTag, PackageTag, ParamTag, ReturnTag, ThrowsTag,
    VarTag,
};
use crate::util::split_lines;

/// A docblock under construction or read back from text.
///
/// Slots only accept the tag struct of their own kind:
///
/// ```compile_fail
/// use phpdoc_source::{DocComment, ParamTag};
///
/// let mut doc = DocComment::default();
/// doc.set_var(ParamTag::new("int", "id", "").unwrap());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DocComment {
    /// Description text, one entry per line.
    description: Vec<String>,
    var: Option<VarTag>,
    #[serde(rename = "return")]
    return_tag: Option<ReturnTag>,
    package: Option<PackageTag>,
    author: Option<AuthorTag>,
    license: Option<LicenseTag>,
    access: Option<AccessTag>,
    params: Vec<ParamTag>,
    throws: Vec<ThrowsTag>,
}

impl DocComment {
    /// Create a comment with the given description and no tags.
    pub fn new(description: &str) -> Self {
        let mut comment = Self::default();
        comment.set_description(description);
        comment
    }

    // ─── Description ────────────────────────────────────────────────────────

    /// Replace the description.  `text` is split on CR, LF and CRLF.
    pub fn set_description(&mut self, text: &str) {
        self.description = split_lines(text).into_iter().map(str::to_string).collect();
    }

    /// The description lines joined with `\n`.
    pub fn description(&self) -> String {
        self.description.join("\n")
    }

    pub fn description_lines(&self) -> &[String] {
        &self.description
    }

    // ─── Singular slots ─────────────────────────────────────────────────────

    pub fn set_var(&mut self, tag: VarTag) {
        self.var = Some(tag);
    }

    pub fn set_return(&mut self, tag: ReturnTag) {
        self.return_tag = Some(tag);
    }

    pub fn set_package(&mut self, tag: PackageTag) {
        self.package = Some(tag);
    }

    pub fn set_author(&mut self, tag: AuthorTag) {
        self.author = Some(tag);
    }

    /// Store a `@license` tag.  The slot is kept but never rendered.
    pub fn set_license(&mut self, tag: LicenseTag) {
        self.license = Some(tag);
    }

    pub fn set_access(&mut self, tag: AccessTag) {
        self.access = Some(tag);
    }

    pub fn var(&self) -> Option<&VarTag> {
        self.var.as_ref()
    }

    pub fn return_tag(&self) -> Option<&ReturnTag> {
        self.return_tag.as_ref()
    }

    pub fn package(&self) -> Option<&PackageTag> {
        self.package.as_ref()
    }

    pub fn author(&self) -> Option<&AuthorTag> {
        self.author.as_ref()
    }

    pub fn license(&self) -> Option<&LicenseTag> {
        self.license.as_ref()
    }

    pub fn access(&self) -> Option<&AccessTag> {
        self.access.as_ref()
    }

    // ─── Repeatable tags ────────────────────────────────────────────────────

    pub fn add_param(&mut self, tag: ParamTag) {
        self.params.push(tag);
    }

    pub fn add_throws(&mut self, tag: ThrowsTag) {
        self.throws.push(tag);
    }

    /// `@param` tags in insertion order.
    pub fn params(&self) -> &[ParamTag] {
        &self.params
    }

    /// `@throws` tags in insertion order.
    pub fn throws(&self) -> &[ThrowsTag] {
        &self.throws
    }

    /// Store `entry` in the slot its kind belongs to: repeatable kinds are
    /// appended, singular kinds overwrite.
    pub fn insert(&mut self, entry: impl Into<AnnotationEntry>) {
        match entry.into() {
            AnnotationEntry::Var(tag) => self.set_var(tag),
            AnnotationEntry::Param(tag) => self.add_param(tag),
            AnnotationEntry::Return(tag) => self.set_return(tag),
            AnnotationEntry::Throws(tag) => self.add_throws(tag),
            AnnotationEntry::Author(tag) => self.set_author(tag),
            AnnotationEntry::License(tag) => self.set_license(tag),
            AnnotationEntry::Package(tag) => self.set_package(tag),
            AnnotationEntry::Access(tag) => self.set_access(tag),
        }
    }

    /// True when there is no description and no tag at all.
    pub fn is_empty(&self) -> bool {
        self.description.iter().all(|l| l.trim().is_empty())
            && self.var.is_none()
            && self.return_tag.is_none()
            && self.package.is_none()
            && self.author.is_none()
            && self.license.is_none()
            && self.access.is_none()
            && self.params.is_empty()
            && self.throws.is_empty()
    }
}
