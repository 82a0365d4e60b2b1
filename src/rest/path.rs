//! URL templates for SmartFile resource families.
//!
//! Each resource family is addressed by a static [`PathTemplate`]: an
//! ordered list of literal segments and positional placeholders. Resolving a
//! template against a base URL fills the placeholders from the caller's
//! arguments in order and appends any extra arguments as further segments.
//!
//! # Joining rules
//!
//! - Leading `/` characters are stripped from every segment, so an
//!   absolute-looking path argument never produces `//`.
//! - A segment that is empty after stripping (such as a literal `/`) only
//!   guarantees that the URL ends with a separator.
//! - Exactly one `/` separates two segments; runs of `/` inside a segment
//!   collapse to one.
//! - `?` and `#` in placeholder arguments are percent-encoded so a file name
//!   cannot turn into a query string or fragment.
//! - Too few arguments is a [`TemplatingError`], never a truncated URL.
//!
//! # Example
//!
//! ```rust
//! use smartfile::rest::{PathTemplate, Segment};
//!
//! const USER: PathTemplate = PathTemplate::new(&[
//!     Segment::Literal("user/"),
//!     Segment::Placeholder("id"),
//!     Segment::Literal("/"),
//! ]);
//!
//! let url = USER.resolve(&["bobafett"], "http://host/api/2/").unwrap();
//! assert_eq!(url, "http://host/api/2/user/bobafett/");
//!
//! assert!(USER.resolve::<&str>(&[], "http://host/api/2/").is_err());
//! ```

use std::borrow::Cow;
use std::fmt;

use crate::clients::TemplatingError;

/// One segment of a [`PathTemplate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    /// Text appended as-is.
    Literal(&'static str),
    /// A position filled by the next positional argument. The name is only
    /// used for display.
    Placeholder(&'static str),
}

/// A static URL template for one resource family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathTemplate {
    segments: &'static [Segment],
}

impl PathTemplate {
    /// Creates a template from its segments.
    ///
    /// This is a `const fn` so templates can be declared as constants.
    #[must_use]
    pub const fn new(segments: &'static [Segment]) -> Self {
        Self { segments }
    }

    /// Returns the segments in order.
    #[must_use]
    pub const fn segments(&self) -> &'static [Segment] {
        self.segments
    }

    /// Returns the number of placeholders.
    #[must_use]
    pub fn placeholder_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, Segment::Placeholder(_)))
            .count()
    }

    /// Resolves the template against `base_url`.
    ///
    /// Placeholders consume `args` in order; arguments left over once every
    /// placeholder is filled are appended as additional segments.
    ///
    /// # Errors
    ///
    /// Returns [`TemplatingError`] if `args` runs out before every
    /// placeholder is filled.
    pub fn resolve<S: AsRef<str>>(
        &self,
        args: &[S],
        base_url: &str,
    ) -> Result<String, TemplatingError> {
        let expected = self.placeholder_count();
        if args.len() < expected {
            return Err(TemplatingError {
                template: self.to_string(),
                expected,
                supplied: args.len(),
            });
        }

        let mut url = base_url.to_string();
        let mut args = args.iter();
        for segment in self.segments {
            match segment {
                Segment::Literal(text) => join_segment(&mut url, text),
                Segment::Placeholder(_) => {
                    // Counted above, so the iterator cannot be exhausted here.
                    if let Some(arg) = args.next() {
                        join_segment(&mut url, &escape_delimiters(arg.as_ref()));
                    }
                }
            }
        }
        for extra in args {
            join_segment(&mut url, extra.as_ref());
        }

        Ok(url)
    }

    /// Resolves the literal prefix before the first placeholder.
    ///
    /// This addresses the collection a family's instances live in, e.g.
    /// `user/` for `user/{id}/`.
    #[must_use]
    pub fn resolve_collection(&self, base_url: &str) -> String {
        let mut url = base_url.to_string();
        for segment in self.segments {
            match segment {
                Segment::Literal(text) => join_segment(&mut url, text),
                Segment::Placeholder(_) => break,
            }
        }
        url
    }
}

impl fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in self.segments {
            match segment {
                Segment::Literal(text) => f.write_str(text)?,
                Segment::Placeholder(name) => write!(f, "{{{name}}}")?,
            }
        }
        Ok(())
    }
}

/// Appends `segment` to `url` following the joining rules above.
pub fn join_segment(url: &mut String, segment: &str) {
    let segment = segment.trim_start_matches('/');
    if !url.ends_with('/') {
        url.push('/');
    }

    let mut after_separator = true;
    for c in segment.chars() {
        if c == '/' && after_separator {
            continue;
        }
        after_separator = c == '/';
        url.push(c);
    }
}

/// Percent-encodes the characters that would end the path part of a URL.
fn escape_delimiters(arg: &str) -> Cow<'_, str> {
    if !arg.contains(['?', '#']) {
        return Cow::Borrowed(arg);
    }
    let mut escaped = String::with_capacity(arg.len() + 4);
    for c in arg.chars() {
        match c {
            '?' => escaped.push_str("%3F"),
            '#' => escaped.push_str("%23"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Segment>();
    assert_send_sync::<PathTemplate>();
};
