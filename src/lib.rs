//! Build, render and read back PHPDoc comment blocks.
//!
//! A code generator describes the documentation for a class, method or
//! property as a [`DocComment`]: a free-text description plus typed tags
//! ([`VarTag`], [`ParamTag`], … or any of them as an [`AnnotationEntry`]).
//! [`DocComment::to_source`] turns that into a canonical `/** ... */`
//! block, and [`DocComment::from_string`] reads such a block (generated or
//! hand-written) back into the structured form.
//!
//! ```
//! use phpdoc_source::{DocComment, ParamTag, ReturnTag};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut doc = DocComment::new("Fetch a widget");
//! doc.add_param(ParamTag::new("int", "$id", "the widget id")?);
//! doc.set_return(ReturnTag::new("Widget", "the widget")?);
//!
//! let source = doc.to_source();
//! assert!(source.contains(" * @param int $id the widget id\n"));
//!
//! let read_back = DocComment::from_string(&source)?;
//! assert_eq!(read_back.params(), doc.params());
//! # Ok(())
//! # }
//! ```

pub mod docblock;
pub mod error;
pub mod types;
pub mod util;

pub use docblock::DocComment;
pub use error::{EntryError, ParseError, Result};
pub use types::{
    AccessTag, AnnotationEntry, AuthorTag, LicenseTag, PackageTag, ParamTag, ReturnTag, TagKind,
    ThrowsTag, VarTag,
};
