//! Frontmatter header parsing.
//!
//! A context file may begin with a YAML frontmatter block bounded by `---`
//! delimiter lines. The block declares at most one parent file (`extends`)
//! and an ordered list of peer files (`includes`). Everything after the
//! closing delimiter is the file body.

use serde::Deserialize;

/// The frontmatter delimiter line.
///
/// A file has a header if and only if its very first line equals this
/// marker after trimming surrounding whitespace.
pub const DELIMITER: &str = "---";

/// Parsed frontmatter of a single context file.
///
/// Absent keys and explicitly empty values are equivalent: both mean
/// "no parent" / "no peers". Unrecognized keys are ignored so that files
/// remain readable by older versions of the tool.
///
/// # Examples
///
/// ```
/// use fusectx::header;
///
/// let text = "---\nextends: base.md\n---\n# Body";
/// let (header, body) = header::parse(text).unwrap();
/// assert_eq!(header.parent(), Some("base.md"));
/// assert_eq!(body, "# Body");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Header {
    /// Parent file whose resolved content precedes this file's content.
    #[serde(default)]
    pub extends: Option<String>,

    /// Peer files resolved in declared order, after the parent and before
    /// this file's own body.
    #[serde(default)]
    pub includes: Vec<String>,
}

impl Header {
    /// Returns the parent reference, if any.
    ///
    /// An explicitly empty `extends:` value is treated the same as an
    /// absent key.
    #[must_use]
    pub fn parent(&self) -> Option<&str> {
        self.extends.as_deref().filter(|s| !s.is_empty())
    }

    /// Returns the peer references in declared order.
    #[must_use]
    pub fn peers(&self) -> &[String] {
        &self.includes
    }

    /// Returns true if the header declares no references at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent().is_none() && self.includes.is_empty()
    }
}

/// Splits raw file text into a [`Header`] and the remaining body.
///
/// The header block is recognized only when the very first line is the
/// delimiter; otherwise the whole text is body and the header defaults to
/// no parent and no peers. An empty block (`---` immediately followed by
/// `---`) is valid and yields the default header. An unterminated block
/// consumes the rest of the file as header text, matching the line
/// discipline of the original format.
///
/// Body lines are joined with `\n` and returned untrimmed; whitespace
/// trimming of the final concatenation is the resolver's job.
///
/// # Errors
///
/// Returns the underlying YAML diagnostic if the block is present but
/// malformed. Callers tag the error with the file path.
///
/// # Examples
///
/// ```
/// use fusectx::header;
///
/// // No leading delimiter: everything is body.
/// let (header, body) = header::parse("# Title\ntext").unwrap();
/// assert!(header.is_empty());
/// assert_eq!(body, "# Title\ntext");
///
/// // Empty header block.
/// let (header, body) = header::parse("---\n---\nbody").unwrap();
/// assert!(header.is_empty());
/// assert_eq!(body, "body");
/// ```
pub fn parse(text: &str) -> Result<(Header, String), serde_yaml::Error> {
    let mut header_lines: Vec<&str> = Vec::new();
    let mut body_lines: Vec<&str> = Vec::new();
    let mut in_header = false;

    for (index, line) in text.lines().enumerate() {
        if index == 0 && line.trim() == DELIMITER {
            in_header = true;
            continue;
        }

        if in_header {
            if line.trim() == DELIMITER {
                in_header = false;
            } else {
                header_lines.push(line);
            }
        } else {
            body_lines.push(line);
        }
    }

    let header = if header_lines.is_empty() || header_lines.join("\n").trim().is_empty() {
        Header::default()
    } else {
        serde_yaml::from_str(&header_lines.join("\n"))?
    };

    Ok((header, body_lines.join("\n")))
}
