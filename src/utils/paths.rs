//! Path normalization

use std::path::Path;

/// Render a relative path with `/` separators regardless of platform.
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Strip `.{ext}` from the end of a file name or relative path.
pub fn strip_extension<'a>(name: &'a str, ext: &str) -> Option<&'a str> {
    name.strip_suffix(ext).and_then(|rest| rest.strip_suffix('.'))
}
