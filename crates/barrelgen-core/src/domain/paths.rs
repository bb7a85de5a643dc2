//! Path conventions for generated barrel files.
//!
//! Three conventions live here, shared by the classifier, renderer, and
//! writer:
//!
//! 1. A candidate directory's importable file shares the directory's own
//!    basename (`widgets/` imports `widgets/widgets.tsx`).
//! 2. The generated file for extension `.ext` is named `<basename>.ext`,
//!    except `.json`, which becomes `<basename>.generate.json` so the
//!    partition resolver never consumes its own output as a manifest.
//! 3. The per-root manifest is `<basename>.json`.

use std::path::Path;

/// Extension reserved for the manifest file and the `.generate.json` rename.
pub const JSON_EXT: &str = ".json";

/// Extract a file's extension, including the leading dot.
///
/// Returns `None` for files without an extension (including dotfiles like
/// `.gitignore`, which carry no import signal).
pub fn file_extension(name: &str) -> Option<String> {
    Path::new(name)
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
}

/// Whether `name` is the reserved manifest file for `basename`.
///
/// True only when the extension is `.json` AND the stem equals `basename`.
/// `index.json` is a manifest when basename is `index`; `data.json` is an
/// ordinary candidate file.
pub fn is_manifest_file(name: &str, basename: &str) -> bool {
    let path = Path::new(name);
    file_extension(name).as_deref() == Some(JSON_EXT)
        && path.file_stem().is_some_and(|stem| stem == basename)
}

/// The manifest file name for a given basename: `<basename>.json`.
pub fn manifest_file_name(basename: &str) -> String {
    format!("{basename}{JSON_EXT}")
}

/// Destination file name for one extension's rendered text.
///
/// `.json` output is renamed to keep it distinct from the input manifest.
pub fn output_file_name(basename: &str, ext: &str) -> String {
    if ext == JSON_EXT {
        format!("{basename}.generate{JSON_EXT}")
    } else {
        format!("{basename}{ext}")
    }
}

/// Canonical importable file path for a candidate directory.
///
/// By convention the importable file shares its directory's basename:
/// `<dir>/<basename-of-dir>[.ext]`. The extension is appended unless
/// `without_ext` is set (some bundler loaders resolve extensions themselves).
pub fn canonical_import_path(dir: &Path, ext: &str, without_ext: bool) -> String {
    let name = dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut import_path = dir.join(name).to_string_lossy().into_owned();
    if !without_ext {
        import_path.push_str(ext);
    }
    import_path
}
