//! Canonical text output for [`DocComment`].

use std::fmt;

use super::DocComment;
use crate::util::split_lines;

impl DocComment {
    /// Render the comment as PHP source.
    ///
    /// The block has the shape:
    ///
    /// ```text
    ///
    /// /**
    ///  * Description line
    ///  *
    ///  * @param int $id
    ///  * @return Widget
    ///  */
    /// ```
    ///
    /// Tags always come out as: every `@param`, every `@throws`, then
    /// `@var`, `@package`, `@author`, `@access`, `@return`.  `@license` is
    /// never written.  A comment with nothing to render yields `""` rather
    /// than an empty `/** */`.
    pub fn to_source(&self) -> String {
        let description = self.render_description();

        let mut tags = String::new();
        let mut push = |tag: &dyn fmt::Display| {
            tags.push_str(&tag.to_string());
            tags.push('\n');
        };
        self.params.iter().for_each(|tag| push(tag));
        self.throws.iter().for_each(|tag| push(tag));
        self.var.iter().for_each(|tag| push(tag));
        self.package.iter().for_each(|tag| push(tag));
        self.author.iter().for_each(|tag| push(tag));
        self.access.iter().for_each(|tag| push(tag));
        self.return_tag.iter().for_each(|tag| push(tag));

        let mut body = description;
        if !body.is_empty() && !tags.is_empty() {
            body.push_str(" *\n");
        }
        body.push_str(&tags);

        if body.is_empty() {
            return body;
        }

        tracing::trace!(
            params = self.params.len(),
            throws = self.throws.len(),
            "rendered docblock"
        );
        format!("\n/**\n{body} */\n")
    }

    fn render_description(&self) -> String {
        let joined = self.description.join("\n");
        let trimmed = joined.trim();
        if trimmed.is_empty() {
            return String::new();
        }

        let mut out = String::new();
        for line in split_lines(trimmed) {
            let line = line.trim();
            if line.is_empty() {
                out.push_str(" *\n");
            } else {
                out.push_str(" * ");
                out.push_str(line);
                out.push('\n');
            }
        }
        out
    }
}
