//! Text rendering: `ImportMap` + `GeneratorMap` -> one text blob per
//! extension.
//!
//! Pure and deterministic: rendering the same map twice produces identical
//! text. The renderer iterates *registered* extensions, not observed ones -
//! classified extensions without a generator are silently ignored, and a
//! registered extension with no candidates still yields an (empty) entry so
//! the writer can uphold the always-present file contract.

use indexmap::IndexMap;

use crate::domain::{
    config::GeneratorMap,
    import_map::ImportMap,
    paths::canonical_import_path,
};

/// Render one text blob per registered extension.
///
/// Candidates are deduplicated by directory with first-occurrence order
/// preserved, mapped to their canonical import path, passed through the
/// extension's generator, and concatenated. Generators own their separators.
pub fn render_import_texts(
    map: &ImportMap,
    generators: &GeneratorMap,
    without_ext: bool,
) -> IndexMap<String, String> {
    let mut texts = IndexMap::with_capacity(generators.len());

    for (ext, generate) in generators.iter() {
        let mut text = String::new();
        for dir in map.unique_candidates(ext) {
            let import_path = canonical_import_path(dir, ext, without_ext);
            text.push_str(&generate(&import_path));
        }
        texts.insert(ext.to_string(), text);
    }

    texts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tsx_generators() -> GeneratorMap {
        let mut generators = GeneratorMap::new();
        generators.register(".tsx", |path| format!("import './{path}';\n"));
        generators
    }

    #[test]
    fn renders_one_line_per_unique_candidate() {
        let mut map = ImportMap::new();
        map.record(".tsx", "/a/widgets");
        map.record(".tsx", "/b/gadgets");

        let texts = render_import_texts(&map, &tsx_generators(), false);
        assert_eq!(
            texts[".tsx"],
            "import './/a/widgets/widgets.tsx';\nimport './/b/gadgets/gadgets.tsx';\n"
        );
    }

    #[test]
    fn dedup_is_by_directory_not_by_file() {
        // Two files with the same extension in one directory record the
        // directory twice; the rendered output mentions it once.
        let mut map = ImportMap::new();
        map.record(".tsx", "/a/widgets");
        map.record(".tsx", "/a/widgets");

        let texts = render_import_texts(&map, &tsx_generators(), false);
        assert_eq!(texts[".tsx"].matches("widgets").count(), 2); // dir + file stem
        assert_eq!(texts[".tsx"].lines().count(), 1);
    }

    #[test]
    fn rendering_is_idempotent() {
        let mut map = ImportMap::new();
        map.record(".tsx", "/b/gadgets");
        map.record(".tsx", "/a/widgets");
        map.record(".tsx", "/b/gadgets");

        let generators = tsx_generators();
        let first = render_import_texts(&map, &generators, false);
        let second = render_import_texts(&map, &generators, false);
        assert_eq!(first, second);
    }

    #[test]
    fn unregistered_extensions_are_ignored() {
        let mut map = ImportMap::new();
        map.record(".scss", "/a/widgets");

        let texts = render_import_texts(&map, &tsx_generators(), false);
        assert!(!texts.contains_key(".scss"));
    }

    #[test]
    fn registered_extension_with_no_candidates_yields_empty_entry() {
        let texts = render_import_texts(&ImportMap::new(), &tsx_generators(), false);
        assert_eq!(texts[".tsx"], "");
    }

    #[test]
    fn without_ext_omits_extension_from_import_paths() {
        let mut map = ImportMap::new();
        map.record(".tsx", "/a/widgets");

        let texts = render_import_texts(&map, &tsx_generators(), true);
        assert_eq!(texts[".tsx"], "import './/a/widgets/widgets';\n");
    }
}
