//! Property test generators for path handles
//!
//! Strategies produce the kinds of names callers actually pass in: relative
//! and absolute paths, either separator, `.`/`..` segments, dot-files and
//! names with several dots. None of them contain `$` or a leading `~`, so
//! results do not depend on the environment.

use proptest::prelude::*;

/// Generators for path testing scenarios
pub struct PathGenerators;

impl PathGenerators {
    /// Generate file name bodies (no separators, no leading dot)
    pub fn filename_component() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9_][a-zA-Z0-9_. -]{0,20}[a-zA-Z0-9_]"
    }

    /// Generate file extensions, including none
    pub fn file_extension() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("rs".to_string()),
            Just("dat".to_string()),
            Just("txt".to_string()),
            Just("tar.gz".to_string()),
            Just("json".to_string()),
            Just("".to_string()), // Files without extension
        ]
    }

    /// Generate a complete file name with extension
    pub fn filename() -> impl Strategy<Value = String> {
        (Self::filename_component(), Self::file_extension()).prop_map(|(name, ext)| {
            if ext.is_empty() {
                name
            } else {
                format!("{}.{}", name, ext)
            }
        })
    }

    /// Generate names that stress the extension rules
    pub fn edge_case_filename() -> impl Strategy<Value = String> {
        prop_oneof![
            Just(".hidden".to_string()),
            Just("..hidden".to_string()),
            Just(".config.toml".to_string()),
            Just("file.".to_string()),
            Just("a..b".to_string()),
            Just("file.with.dots.extension".to_string()),
            Just("file with spaces.txt".to_string()),
            Just("файл.txt".to_string()),
            Just("文件.txt".to_string()),
        ]
    }

    /// Generate directory names
    pub fn directory_name() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9_][a-zA-Z0-9_-]{0,12}"
    }

    /// Generate directory segments, occasionally `.` or `..`
    pub fn directory_segment() -> impl Strategy<Value = String> {
        prop_oneof![
            6 => Self::directory_name(),
            1 => Just(".".to_string()),
            1 => Just("..".to_string()),
        ]
    }

    /// Generate relative paths joined with `/`
    pub fn relative_path() -> impl Strategy<Value = String> {
        (
            prop::collection::vec(Self::directory_segment(), 0..=4),
            prop_oneof![4 => Self::filename(), 1 => Self::edge_case_filename()],
        )
            .prop_map(|(mut parts, filename)| {
                parts.push(filename);
                parts.join("/")
            })
    }

    /// Generate absolute paths
    pub fn absolute_path() -> impl Strategy<Value = String> {
        Self::relative_path().prop_map(|path| format!("/{}", path))
    }

    /// Generate Windows-style paths
    pub fn windows_path() -> impl Strategy<Value = String> {
        Self::relative_path().prop_map(|path| path.replace('/', "\\"))
    }

    /// Generate paths with mixed and doubled separators
    pub fn path_with_mixed_separators() -> impl Strategy<Value = String> {
        (
            prop::collection::vec(Self::directory_name(), 1..=4),
            Self::filename(),
            prop::collection::vec(prop_oneof![Just("/"), Just("\\"), Just("//")], 4),
        )
            .prop_map(|(dirs, filename, seps)| {
                let mut result = String::new();
                for (i, dir) in dirs.iter().enumerate() {
                    result.push_str(dir);
                    result.push_str(seps[i % seps.len()]);
                }
                result.push_str(&filename);
                result
            })
    }

    /// Generate all types of paths for comprehensive testing
    pub fn any_path() -> impl Strategy<Value = String> {
        prop_oneof![
            3 => Self::relative_path(),
            3 => Self::absolute_path(),
            2 => Self::windows_path(),
            2 => Self::path_with_mixed_separators(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn generated_paths_are_usable(path in PathGenerators::any_path()) {
            prop_assert!(!path.is_empty());
            prop_assert!(!path.contains('\0'));
            prop_assert!(!path.contains('$'));
            prop_assert!(!path.starts_with('~'));
        }

        #[test]
        fn filenames_have_no_separators(name in PathGenerators::filename()) {
            prop_assert!(!name.contains('/'));
            prop_assert!(!name.contains('\\'));
            prop_assert!(!name.starts_with('.'));
        }
    }
}
