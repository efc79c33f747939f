//! Path normalization and decomposition functions
//!
//! Turns whatever the caller typed (relative path, `~/...`, `$VAR/...`,
//! `file://` URI, forward or back slashes) into one absolute, host-separated
//! name and splits that name into its parts.

use crate::error::{PathError, Result};
use std::borrow::Cow;
use std::env;
use std::path::{Component, Path, PathBuf, MAIN_SEPARATOR};
use url::Url;

/// Returns true if the input is written as a URI (contains `://`)
pub fn is_uri(input: &str) -> bool {
    input.contains("://")
}

/// Returns true if the input is a `file://` URI
pub fn is_file_uri(input: &str) -> bool {
    input
        .get(..7)
        .is_some_and(|scheme| scheme.eq_ignore_ascii_case("file://"))
}

/// Rewrite every `/` and `\` as the host separator
///
/// Both conventions are accepted on every host, so a name typed on Windows
/// decomposes the same way on Linux and the other way around.
///
/// # Examples
/// ```
/// use path_handle::normalize_separators;
/// use std::path::MAIN_SEPARATOR;
///
/// let expected = format!("a{0}b{0}c", MAIN_SEPARATOR);
/// assert_eq!(normalize_separators("a/b\\c"), expected);
/// ```
pub fn normalize_separators(path: &str) -> String {
    path.chars()
        .map(|c| if c == '/' || c == '\\' { MAIN_SEPARATOR } else { c })
        .collect()
}

/// Expand `$VAR` and `${VAR}` references from the process environment
///
/// Undefined variables are left exactly as written.
pub fn expand_env_vars(input: &str) -> Cow<'_, str> {
    shellexpand::env_with_context_no_errors(input, |name| env::var(name).ok())
}

/// Expand a leading `~` or `~/` to the home directory
///
/// `~user` is not supported and is left unchanged, as is everything when the
/// home directory cannot be determined. Fold separators first so that `~\`
/// is expanded too.
///
/// # Examples
/// ```
/// use path_handle::expand_home;
///
/// assert_eq!(expand_home("/absolute"), "/absolute");
/// assert_eq!(expand_home("~user/x"), "~user/x");
/// ```
pub fn expand_home(input: &str) -> Cow<'_, str> {
    shellexpand::tilde_with_context(input, || {
        let home = home::home_dir().and_then(|p| p.into_os_string().into_string().ok());
        if home.is_none() {
            tracing::debug!(input = %input, "home directory unavailable, leaving '~' unexpanded");
        }
        home
    })
}

/// Resolve `.` and `..` components in an absolute path
///
/// `..` at the root stays at the root, the same way `cd /..` does.
///
/// # Examples
/// ```
/// use path_handle::resolve_components;
/// use std::path::{Path, PathBuf};
///
/// # #[cfg(unix)]
/// # {
/// assert_eq!(resolve_components(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
/// assert_eq!(resolve_components(Path::new("/a/../../c")), PathBuf::from("/c"));
/// # }
/// ```
pub fn resolve_components(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();

    for component in path.components() {
        match component {
            Component::Prefix(prefix) => result.push(prefix.as_os_str()),
            Component::RootDir => result.push(Component::RootDir),
            Component::Normal(part) => result.push(part),
            Component::CurDir => {}
            Component::ParentDir => {
                // Never pops past the root
                if result.parent().is_some() {
                    result.pop();
                }
            }
        }
    }

    result
}

/// Make a path absolute against the current working directory
pub fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = env::current_dir().map_err(|e| PathError::io(".", e))?;
    Ok(cwd.join(path))
}

/// Extract the local path named by a `file://` URI
///
/// The host part is ignored: `file://server/share/x.txt` names
/// `/share/x.txt`.
///
/// # Examples
/// ```
/// use path_handle::path_from_file_uri;
/// use std::path::PathBuf;
///
/// # #[cfg(unix)]
/// # {
/// assert_eq!(
///     path_from_file_uri("file:///a/b/big%20file.dat").unwrap(),
///     PathBuf::from("/a/b/big file.dat")
/// );
/// # }
/// ```
pub fn path_from_file_uri(input: &str) -> Result<PathBuf> {
    let url = Url::parse(input)
        .map_err(|e| PathError::invalid(format!("malformed URI {}: {}", input, e)))?;
    if url.scheme() != "file" {
        return Err(PathError::invalid(format!("not a file URI: {}", input)));
    }
    if let Ok(path) = url.to_file_path() {
        return Ok(path);
    }

    tracing::debug!(uri = %input, host = ?url.host_str(), "ignoring host of file URI");
    let mut local = url;
    local
        .set_host(None)
        .map_err(|e| PathError::invalid(format!("cannot drop host of {}: {}", input, e)))?;
    local
        .to_file_path()
        .map_err(|()| PathError::invalid(format!("URI does not name a path: {}", input)))
}

/// Produce the fully qualified name for a path string or `file://` URI
///
/// Plain paths get environment variables expanded first, then `~`, then are
/// made absolute and have `.`/`..` collapsed. `file://` URIs skip both
/// expansions but still have their separators folded. Non-`file` URIs are
/// treated as plain strings.
pub fn fully_qualify(input: &str) -> Result<String> {
    let source = if is_file_uri(input) {
        let decoded = path_from_file_uri(input)?;
        let decoded = decoded
            .to_str()
            .ok_or_else(|| PathError::invalid(format!("URI path is not valid UTF-8: {}", input)))?;
        normalize_separators(decoded)
    } else {
        let expanded = normalize_separators(&expand_env_vars(input));
        expand_home(&expanded).into_owned()
    };

    let absolute = absolutize(Path::new(&source))?;
    resolve_components(&absolute)
        .into_os_string()
        .into_string()
        .map_err(|raw| PathError::invalid(format!("resolved path is not valid UTF-8: {:?}", raw)))
}

/// Split a fully qualified name at its last host separator
///
/// The separator itself belongs to neither side, so
/// `directory + SEP + file_name` always rebuilds the input.
pub fn split_directory(fqn: &str) -> (&str, &str) {
    match fqn.rfind(MAIN_SEPARATOR) {
        Some(index) => (&fqn[..index], &fqn[index + MAIN_SEPARATOR.len_utf8()..]),
        None => ("", fqn),
    }
}

/// Split a file name into stem and extension
///
/// Leading dots never start an extension, and a trailing dot does not make
/// an empty one, so `stem + "." + extension` (or just `stem`) is the name.
///
/// # Examples
/// ```
/// use path_handle::split_extension;
///
/// assert_eq!(split_extension("big.file.dat"), ("big.file", "dat"));
/// assert_eq!(split_extension(".bashrc"), (".bashrc", ""));
/// assert_eq!(split_extension(".config.toml"), (".config", "toml"));
/// assert_eq!(split_extension("file."), ("file.", ""));
/// ```
pub fn split_extension(file_name: &str) -> (&str, &str) {
    let body_start = file_name.len() - file_name.trim_start_matches('.').len();
    match file_name[body_start..].rfind('.') {
        Some(dot) if body_start + dot + 1 < file_name.len() => {
            let dot = body_start + dot;
            (&file_name[..dot], &file_name[dot + 1..])
        }
        _ => (file_name, ""),
    }
}
