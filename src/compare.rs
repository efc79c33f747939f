//! Equality and ordering of path handles
//!
//! Handles compare by fully qualified name, against each other and against
//! plain strings. [`Operand`] makes the accepted operand types explicit for
//! callers that only know what they hold at run time.

use crate::error::{PathError, Result};
use crate::handle::PathHandle;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Right-hand side of a run-time comparison
#[derive(Debug, Clone, Copy)]
pub enum Operand<'a> {
    Handle(&'a PathHandle),
    Text(&'a str),
    /// Anything else, carried by type name only
    Other(&'static str),
}

impl Operand<'_> {
    /// Operand standing for a value of type `T` that handles cannot compare against
    ///
    /// # Examples
    /// ```
    /// use path_handle::{Operand, PathHandle, PathError};
    ///
    /// let f = PathHandle::new("notes.txt").unwrap();
    /// assert!(matches!(
    ///     f.equals(Operand::other::<u32>()),
    ///     Err(PathError::TypeUnsupported { .. })
    /// ));
    /// ```
    pub fn other<T: ?Sized>() -> Self {
        Operand::Other(std::any::type_name::<T>())
    }

    fn type_name(&self) -> &'static str {
        match self {
            Operand::Handle(_) => "PathHandle",
            Operand::Text(_) => "str",
            Operand::Other(name) => name,
        }
    }
}

impl<'a> From<&'a PathHandle> for Operand<'a> {
    fn from(handle: &'a PathHandle) -> Self {
        Operand::Handle(handle)
    }
}

impl<'a> From<&'a str> for Operand<'a> {
    fn from(text: &'a str) -> Self {
        Operand::Text(text)
    }
}

impl<'a> From<&'a String> for Operand<'a> {
    fn from(text: &'a String) -> Self {
        Operand::Text(text.as_str())
    }
}

impl PathHandle {
    /// Order this handle against a handle or a string by fully qualified name
    pub fn compare<'a>(&self, other: impl Into<Operand<'a>>) -> Result<Ordering> {
        match other.into() {
            Operand::Handle(handle) => Ok(self.fqn().cmp(handle.fqn())),
            Operand::Text(text) => Ok(self.fqn().cmp(text)),
            unsupported => Err(PathError::TypeUnsupported {
                operation: "comparison",
                operand: unsupported.type_name().to_string(),
            }),
        }
    }

    /// Equality by fully qualified name against a handle or a string
    pub fn equals<'a>(&self, other: impl Into<Operand<'a>>) -> Result<bool> {
        self.compare(other).map(Ordering::is_eq)
    }

    /// Content comparison, defined only between two handles
    pub fn same_content_with<'a>(&self, other: impl Into<Operand<'a>>) -> Result<bool> {
        match other.into() {
            Operand::Handle(handle) => self.same_content_as(handle),
            unsupported => Err(PathError::TypeUnsupported {
                operation: "content comparison",
                operand: unsupported.type_name().to_string(),
            }),
        }
    }
}

impl PartialEq for PathHandle {
    fn eq(&self, other: &Self) -> bool {
        self.fqn() == other.fqn()
    }
}

impl Eq for PathHandle {}

impl PartialOrd for PathHandle {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PathHandle {
    fn cmp(&self, other: &Self) -> Ordering {
        self.fqn().cmp(other.fqn())
    }
}

impl Hash for PathHandle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.fqn().hash(state);
    }
}

macro_rules! impl_text_comparisons {
    ($($text:ty),*) => {
        $(
            impl PartialEq<$text> for PathHandle {
                fn eq(&self, other: &$text) -> bool {
                    self.fqn() == AsRef::<str>::as_ref(other)
                }
            }

            impl PartialEq<PathHandle> for $text {
                fn eq(&self, other: &PathHandle) -> bool {
                    AsRef::<str>::as_ref(self) == other.fqn()
                }
            }

            impl PartialOrd<$text> for PathHandle {
                fn partial_cmp(&self, other: &$text) -> Option<Ordering> {
                    Some(self.fqn().cmp(AsRef::<str>::as_ref(other)))
                }
            }

            impl PartialOrd<PathHandle> for $text {
                fn partial_cmp(&self, other: &PathHandle) -> Option<Ordering> {
                    Some(AsRef::<str>::as_ref(self).cmp(other.fqn()))
                }
            }
        )*
    };
}

impl_text_comparisons!(str, &str, String);
