//! Recursive dependency-chain resolution.
//!
//! Given an entry file, the resolver walks the graph implied by its
//! frontmatter references depth-first: the `extends` parent first, then
//! each `includes` peer in declared order, then the file's own body.
//! Non-empty segments are joined by exactly one blank line and the final
//! result is trimmed.
//!
//! Cycles are detected with a [`ResolutionContext`], the set of absolute
//! paths currently active on the call stack. A path is removed from the
//! context on every exit from its resolution frame, success or failure,
//! so a file may appear in several independent branches of one resolution
//! without being flagged as circular.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::header;
use crate::path::{normalize, resolve_reference};

/// Separator between resolved segments: exactly one blank line.
const SEGMENT_SEPARATOR: &str = "\n\n";

/// The set of file paths active as ancestors in an in-progress resolution.
///
/// A path is a member if and only if it is an ancestor of the current call
/// in the recursion tree. Each top-level resolution owns its own context;
/// contexts are never shared across independent resolutions.
///
/// # Examples
///
/// ```
/// use fusectx::ResolutionContext;
///
/// let context = ResolutionContext::new();
/// assert!(context.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct ResolutionContext {
    active: HashSet<PathBuf>,
}

impl ResolutionContext {
    /// Creates an empty resolution context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the given absolute path is an active ancestor.
    #[must_use]
    pub fn is_active(&self, path: &Path) -> bool {
        self.active.contains(path)
    }

    /// Returns true if no resolution frame is active.
    ///
    /// After any top-level call returns, the context is empty again,
    /// whether the call succeeded or failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

/// Scoped membership of one path in a [`ResolutionContext`].
///
/// Dropping the guard removes the path, which is what guarantees the
/// context is unwound on every exit path of a resolution frame.
struct VisitGuard<'a> {
    context: &'a mut ResolutionContext,
    path: PathBuf,
}

impl<'a> VisitGuard<'a> {
    /// Marks `path` active, failing if it already is (a cycle).
    fn enter(context: &'a mut ResolutionContext, path: PathBuf) -> Result<Self> {
        if context.is_active(&path) {
            return Err(Error::CircularDependency { path });
        }
        context.active.insert(path.clone());
        Ok(Self { context, path })
    }

    /// Reborrows the context for recursive calls within this frame.
    fn context(&mut self) -> &mut ResolutionContext {
        &mut *self.context
    }
}

impl Drop for VisitGuard<'_> {
    fn drop(&mut self) {
        self.context.active.remove(&self.path);
    }
}

/// Reads and splits one file, tagging errors with its path.
fn read_file(path: &Path) -> Result<(header::Header, String)> {
    let text = fs::read_to_string(path).map_err(|source| Error::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    header::parse(&text).map_err(|source| Error::HeaderParse {
        path: path.to_path_buf(),
        source,
    })
}

/// The directory a file's relative references resolve against.
fn base_dir(path: &Path) -> Result<&Path> {
    path.parent().ok_or_else(|| Error::PathResolution {
        path: path.to_path_buf(),
        reason: "path has no parent directory".to_string(),
    })
}

/// Resolves the full dependency chain of `path` into concatenated text,
/// using a fresh context.
///
/// The output contains the fully resolved parent text, then all peer texts
/// in declared order, then the file's own body, each non-empty pair
/// separated by exactly one blank line, with surrounding whitespace
/// trimmed.
///
/// # Errors
///
/// Fails fast on the first error anywhere in the chain: path resolution,
/// circular dependency, file access, or frontmatter parse failure.
///
/// # Examples
///
/// ```no_run
/// use fusectx::resolver;
/// use std::path::Path;
///
/// let content = resolver::resolve(Path::new("fusectx.md")).unwrap();
/// println!("{content}");
/// ```
pub fn resolve(path: &Path) -> Result<String> {
    resolve_with_context(path, &mut ResolutionContext::new())
}

/// Resolves `path` within an explicit context.
///
/// The context is left clean (no active entries from this call) whether
/// the resolution succeeds or fails, so a caller handling the error may
/// reuse it.
///
/// # Errors
///
/// See [`resolve`].
pub fn resolve_with_context(path: &Path, context: &mut ResolutionContext) -> Result<String> {
    let abs = normalize(path)?;
    log::debug!("resolving {}", abs.display());

    let mut guard = VisitGuard::enter(context, abs.clone())?;
    let (header, body) = read_file(&abs)?;
    let dir = base_dir(&abs)?.to_path_buf();

    let mut result = String::new();

    if let Some(parent) = header.parent() {
        let parent_path = resolve_reference(parent, &dir)?;
        let parent_text = resolve_with_context(&parent_path, guard.context())?;
        if !parent_text.is_empty() {
            result.push_str(&parent_text);
            result.push_str(SEGMENT_SEPARATOR);
        }
    }

    for peer in header.peers() {
        let peer_path = resolve_reference(peer, &dir)?;
        let peer_text = resolve_with_context(&peer_path, guard.context())?;
        if !peer_text.is_empty() {
            result.push_str(&peer_text);
            result.push_str(SEGMENT_SEPARATOR);
        }
    }

    result.push_str(&body);

    Ok(result.trim().to_string())
}

/// Checks the entire dependency chain of `path` without producing output.
///
/// Equivalent to [`resolve`] with the text discarded.
///
/// # Errors
///
/// See [`resolve`].
pub fn validate(path: &Path) -> Result<()> {
    resolve(path).map(|_| ())
}

/// Returns the traversal order of the dependency chain rooted at `path`,
/// using a fresh context.
///
/// The parent chain precedes the file itself; peer chains follow it in
/// declared order. The listing is diagnostic output for human inspection,
/// not an input to content resolution.
///
/// # Errors
///
/// Same cycle-detection and propagation discipline as [`resolve`].
pub fn dependency_chain(path: &Path) -> Result<Vec<PathBuf>> {
    dependency_chain_with_context(path, &mut ResolutionContext::new())
}

/// Returns the traversal order of the chain within an explicit context.
///
/// # Errors
///
/// See [`dependency_chain`].
pub fn dependency_chain_with_context(
    path: &Path,
    context: &mut ResolutionContext,
) -> Result<Vec<PathBuf>> {
    let abs = normalize(path)?;

    let mut guard = VisitGuard::enter(context, abs.clone())?;
    let (header, _) = read_file(&abs)?;
    let dir = base_dir(&abs)?.to_path_buf();

    let mut chain = vec![abs.clone()];

    if let Some(parent) = header.parent() {
        let parent_path = resolve_reference(parent, &dir)?;
        let mut parent_chain = dependency_chain_with_context(&parent_path, guard.context())?;
        parent_chain.append(&mut chain);
        chain = parent_chain;
    }

    for peer in header.peers() {
        let peer_path = resolve_reference(peer, &dir)?;
        chain.extend(dependency_chain_with_context(&peer_path, guard.context())?);
    }

    Ok(chain)
}
