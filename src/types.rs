//! Data types for PHPDoc annotations.
//!
//! This module holds the closed set of tag kinds the crate understands
//! ([`TagKind`]), one validated struct per kind ([`VarTag`], [`ParamTag`],
//! …) and the [`AnnotationEntry`] sum type over them.
//!
//! Every tag struct is built through its `new` constructor, which trims and
//! checks the fields.  A tag that exists is therefore one the docblock
//! parser can read back from its rendered line: types, variable names and
//! access levels are single non-empty words, and free text has its runs of
//! whitespace (line breaks included) collapsed to single spaces.

use std::fmt;

use serde::Serialize;

use crate::error::EntryError;

/// The PHPDoc tags that can be stored on a docblock.
///
/// Any other tag (`@see`, `@deprecated`, `@todo`, …) is not representable
/// and is dropped by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TagKind {
    Var,
    Param,
    Return,
    Throws,
    Author,
    License,
    Package,
    Access,
}

impl TagKind {
    /// The tag name as written after `@` (e.g. `"param"`).
    pub fn name(self) -> &'static str {
        match self {
            TagKind::Var => "var",
            TagKind::Param => "param",
            TagKind::Return => "return",
            TagKind::Throws => "throws",
            TagKind::Author => "author",
            TagKind::License => "license",
            TagKind::Package => "package",
            TagKind::Access => "access",
        }
    }

    /// Look up a tag by its name (without the leading `@`).
    ///
    /// Both `license` and the British `licence` map to [`TagKind::License`].
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "var" => Some(TagKind::Var),
            "param" => Some(TagKind::Param),
            "return" => Some(TagKind::Return),
            "throws" => Some(TagKind::Throws),
            "author" => Some(TagKind::Author),
            "license" | "licence" => Some(TagKind::License),
            "package" => Some(TagKind::Package),
            "access" => Some(TagKind::Access),
            _ => None,
        }
    }

    /// Whether a docblock may carry several tags of this kind.
    pub fn is_repeatable(self) -> bool {
        matches!(self, TagKind::Param | TagKind::Throws)
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.name())
    }
}

// ─── Field normalisation ────────────────────────────────────────────────────

/// A required single-word field (type, access level).
fn word(tag: TagKind, field: &'static str, value: &str) -> Result<String, EntryError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(EntryError::MissingField { tag, field });
    }
    if value.contains(char::is_whitespace) {
        return Err(EntryError::MultiWordField {
            tag,
            field,
            value: value.to_string(),
        });
    }
    Ok(value.to_string())
}

/// A required variable name, stored without one leading `$`.
fn variable(tag: TagKind, value: &str) -> Result<String, EntryError> {
    let value = value.trim();
    word(tag, "variable name", value.strip_prefix('$').unwrap_or(value))
}

/// Free text: whitespace runs collapse to one space.
fn text(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Write ` * @<tag>` followed by every non-empty field.
fn write_tag(f: &mut fmt::Formatter<'_>, kind: TagKind, fields: &[&str]) -> fmt::Result {
    write!(f, " * {kind}")?;
    for field in fields.iter().filter(|s| !s.is_empty()) {
        write!(f, " {field}")?;
    }
    Ok(())
}

// ─── Tag structs ────────────────────────────────────────────────────────────

/// `@var <type> $<name> [description]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VarTag {
    type_name: String,
    /// Variable name WITHOUT the `$` prefix.
    name: String,
    description: String,
}

impl VarTag {
    pub fn new(type_name: &str, name: &str, description: &str) -> Result<Self, EntryError> {
        Ok(Self {
            type_name: word(TagKind::Var, "type", type_name)?,
            name: variable(TagKind::Var, name)?,
            description: text(description),
        })
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// The variable name without `$` (e.g. `"count"`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The variable name as PHP spells it (e.g. `"$count"`).
    pub fn variable(&self) -> String {
        format!("${}", self.name)
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Display for VarTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tag(
            f,
            TagKind::Var,
            &[
                self.type_name.as_str(),
                self.variable().as_str(),
                self.description.as_str(),
            ],
        )
    }
}

/// `@param <type> $<name> [description]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParamTag {
    type_name: String,
    name: String,
    description: String,
}

impl ParamTag {
    pub fn new(type_name: &str, name: &str, description: &str) -> Result<Self, EntryError> {
        Ok(Self {
            type_name: word(TagKind::Param, "type", type_name)?,
            name: variable(TagKind::Param, name)?,
            description: text(description),
        })
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn variable(&self) -> String {
        format!("${}", self.name)
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Display for ParamTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tag(
            f,
            TagKind::Param,
            &[
                self.type_name.as_str(),
                self.variable().as_str(),
                self.description.as_str(),
            ],
        )
    }
}

/// `@return <type> [description]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReturnTag {
    type_name: String,
    description: String,
}

impl ReturnTag {
    pub fn new(type_name: &str, description: &str) -> Result<Self, EntryError> {
        Ok(Self {
            type_name: word(TagKind::Return, "type", type_name)?,
            description: text(description),
        })
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Display for ReturnTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tag(f, TagKind::Return, &[self.type_name.as_str(), self.description.as_str()])
    }
}

/// `@throws <type> [description]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThrowsTag {
    type_name: String,
    description: String,
}

impl ThrowsTag {
    pub fn new(type_name: &str, description: &str) -> Result<Self, EntryError> {
        Ok(Self {
            type_name: word(TagKind::Throws, "type", type_name)?,
            description: text(description),
        })
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Display for ThrowsTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tag(f, TagKind::Throws, &[self.type_name.as_str(), self.description.as_str()])
    }
}

/// `@author [value]`; an empty value renders a bare `@author`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorTag {
    value: String,
}

impl AuthorTag {
    pub fn new(value: &str) -> Self {
        Self { value: text(value) }
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for AuthorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tag(f, TagKind::Author, &[self.value.as_str()])
    }
}

/// `@license [value]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LicenseTag {
    value: String,
}

impl LicenseTag {
    pub fn new(value: &str) -> Self {
        Self { value: text(value) }
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for LicenseTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tag(f, TagKind::License, &[self.value.as_str()])
    }
}

/// `@package [value]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageTag {
    value: String,
}

impl PackageTag {
    pub fn new(value: &str) -> Self {
        Self { value: text(value) }
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for PackageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tag(f, TagKind::Package, &[self.value.as_str()])
    }
}

/// `@access <level>`, e.g. `private`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessTag {
    level: String,
}

impl AccessTag {
    pub fn new(level: &str) -> Result<Self, EntryError> {
        Ok(Self {
            level: word(TagKind::Access, "level", level)?,
        })
    }

    pub fn level(&self) -> &str {
        &self.level
    }
}

impl fmt::Display for AccessTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tag(f, TagKind::Access, &[self.level.as_str()])
    }
}

// ─── AnnotationEntry ────────────────────────────────────────────────────────

/// Any one of the supported tags.
///
/// [`DocComment::insert`](crate::docblock::DocComment::insert) files an
/// entry into the slot its variant belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AnnotationEntry {
    Var(VarTag),
    Param(ParamTag),
    Return(ReturnTag),
    Throws(ThrowsTag),
    Author(AuthorTag),
    License(LicenseTag),
    Package(PackageTag),
    Access(AccessTag),
}

impl AnnotationEntry {
    pub fn kind(&self) -> TagKind {
        match self {
            AnnotationEntry::Var(_) => TagKind::Var,
            AnnotationEntry::Param(_) => TagKind::Param,
            AnnotationEntry::Return(_) => TagKind::Return,
            AnnotationEntry::Throws(_) => TagKind::Throws,
            AnnotationEntry::Author(_) => TagKind::Author,
            AnnotationEntry::License(_) => TagKind::License,
            AnnotationEntry::Package(_) => TagKind::Package,
            AnnotationEntry::Access(_) => TagKind::Access,
        }
    }

    /// Render the tag as one docblock line, including the trailing `\n`.
    ///
    /// Empty fields are left out, so a `@return int` without description
    /// renders as ` * @return int`.
    pub fn render(&self) -> String {
        format!("{self}\n")
    }
}

impl fmt::Display for AnnotationEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnnotationEntry::Var(tag) => fmt::Display::fmt(tag, f),
            AnnotationEntry::Param(tag) => fmt::Display::fmt(tag, f),
            AnnotationEntry::Return(tag) => fmt::Display::fmt(tag, f),
            AnnotationEntry::Throws(tag) => fmt::Display::fmt(tag, f),
            AnnotationEntry::Author(tag) => fmt::Display::fmt(tag, f),
            AnnotationEntry::License(tag) => fmt::Display::fmt(tag, f),
            AnnotationEntry::Package(tag) => fmt::Display::fmt(tag, f),
            AnnotationEntry::Access(tag) => fmt::Display::fmt(tag, f),
        }
    }
}

impl From<VarTag> for AnnotationEntry {
    fn from(tag: VarTag) -> Self {
        AnnotationEntry::Var(tag)
    }
}

impl From<ParamTag> for AnnotationEntry {
    fn from(tag: ParamTag) -> Self {
        AnnotationEntry::Param(tag)
    }
}

impl From<ReturnTag> for AnnotationEntry {
    fn from(tag: ReturnTag) -> Self {
        AnnotationEntry::Return(tag)
    }
}

impl From<ThrowsTag> for AnnotationEntry {
    fn from(tag: ThrowsTag) -> Self {
        AnnotationEntry::Throws(tag)
    }
}

impl From<AuthorTag> for AnnotationEntry {
    fn from(tag: AuthorTag) -> Self {
        AnnotationEntry::Author(tag)
    }
}

impl From<LicenseTag> for AnnotationEntry {
    fn from(tag: LicenseTag) -> Self {
        AnnotationEntry::License(tag)
    }
}

impl From<PackageTag> for AnnotationEntry {
    fn from(tag: PackageTag) -> Self {
        AnnotationEntry::Package(tag)
    }
}

impl From<AccessTag> for AnnotationEntry {
    fn from(tag: AccessTag) -> Self {
        AnnotationEntry::Access(tag)
    }
}
