//! Artifact checks over a build snapshot.
//!
//! Each check is independent and order-insensitive: it reads the snapshot
//! (or the filesystem, for the CSS bundle) and either passes or fails with
//! an error naming every offending identity it found.

use std::collections::HashSet;
use std::path::PathBuf;

use rayon::prelude::*;

use galley_frontmatter::extract_frontmatter;

use crate::config::HarnessConfig;
use crate::error::VerifyError;
use crate::hash;
use crate::snapshot::{read_text, BuildSnapshot};

/// Basenames of the given paths, as a membership set.
///
/// Comparison across trees is by basename only; directory layout on either
/// side is irrelevant.
fn basenames(files: &[PathBuf]) -> HashSet<String> {
    files
        .iter()
        .filter_map(|p| p.file_name().and_then(|n| n.to_str()))
        .map(str::to_string)
        .collect()
}

/// The build output directory exists and is a directory.
pub fn output_dir_exists(config: &HarnessConfig) -> Result<(), VerifyError> {
    if config.output_dir.is_dir() {
        Ok(())
    } else {
        Err(VerifyError::MissingOutput(config.output_dir.clone()))
    }
}

/// Every source document has a generated counterpart named `{id}.html`.
///
/// All missing ids are collected into a single failure rather than stopping
/// at the first one.
pub fn documents_generated(snapshot: &BuildSnapshot) -> Result<(), VerifyError> {
    let produced = basenames(&snapshot.output_docs);
    let mut missing = Vec::new();

    for doc in &snapshot.source_docs {
        let content = read_text(doc)?;
        let (frontmatter, _body) = extract_frontmatter(&content).map_err(|source| {
            VerifyError::Frontmatter {
                file: doc.clone(),
                source,
            }
        })?;

        if !produced.contains(&format!("{}.html", frontmatter.id)) {
            missing.push(frontmatter.id);
        }
    }

    if missing.is_empty() {
        Ok(())
    } else {
        missing.sort();
        Err(VerifyError::MissingOutputDocument { ids: missing })
    }
}

/// No generated document still contains the placeholder token.
pub fn placeholders_resolved(snapshot: &BuildSnapshot, token: &str) -> Result<(), VerifyError> {
    for file in &snapshot.output_docs {
        let content = read_text(file)?;
        if content.contains(token) {
            return Err(VerifyError::UnresolvedPlaceholder {
                file: file.clone(),
                token: token.to_string(),
            });
        }
    }

    Ok(())
}

/// The content-addressed CSS bundle exists and contains every input
/// stylesheet's minified rules.
///
/// The digest is recomputed locally from the same inputs the generator
/// hashed; the bundle must exist under exactly that name. Per-file rule
/// checks are independent and run in parallel.
pub fn css_bundle(config: &HarnessConfig) -> Result<(), VerifyError> {
    let digest = hash::bundle_digest(&config.baseline_css, &config.static_css_dir)?;
    let bundle_path = config.css_dir().join(format!("main.{digest}.css"));

    if !bundle_path.is_file() {
        return Err(VerifyError::HashMismatch {
            digest,
            expected: bundle_path,
        });
    }

    let bundle = read_text(&bundle_path)?;
    let inputs = hash::user_stylesheets(&config.static_css_dir)?;

    inputs.par_iter().try_for_each(|file| {
        let minified = minify_css(&read_text(file)?).map_err(|message| VerifyError::Css {
            file: file.clone(),
            message,
        })?;

        if bundle.contains(&minified) {
            Ok(())
        } else {
            Err(VerifyError::MissingRule(file.clone()))
        }
    })
}

/// Minify CSS using lightningcss.
///
/// Minified printing only, no structural transforms: the bundle is the
/// concatenation of its minified inputs, so each input's minified form must
/// survive as a contiguous substring.
pub fn minify_css(css: &str) -> Result<String, String> {
    use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

    let stylesheet = StyleSheet::parse(css, ParserOptions::default())
        .map_err(|e| format!("CSS parse error: {}", e))?;

    let minified = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..Default::default()
        })
        .map_err(|e| format!("CSS minify error: {}", e))?;

    Ok(minified.code)
}

/// Every source asset was copied into the output image directory.
pub fn assets_copied(snapshot: &BuildSnapshot) -> Result<(), VerifyError> {
    let produced = basenames(&snapshot.output_assets);

    let mut missing: Vec<String> = snapshot
        .source_assets
        .iter()
        .filter_map(|p| p.file_name().and_then(|n| n.to_str()))
        .filter(|name| !produced.contains(*name))
        .map(str::to_string)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        missing.sort();
        Err(VerifyError::MissingAsset { names: missing })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn snapshot_with(
        source_docs: Vec<PathBuf>,
        output_docs: Vec<PathBuf>,
        source_assets: Vec<PathBuf>,
        output_assets: Vec<PathBuf>,
    ) -> BuildSnapshot {
        BuildSnapshot {
            source_docs,
            output_docs,
            source_assets,
            output_assets,
        }
    }

    #[test]
    fn passes_when_every_document_is_generated() {
        let temp = tempdir().unwrap();
        let doc = temp.path().join("getting-started.md");
        fs::write(&doc, "---\nid: getting-started\n---\n# Hi\n").unwrap();

        let snapshot = snapshot_with(
            vec![doc],
            vec![PathBuf::from("build/site/docs/getting-started.html")],
            vec![],
            vec![],
        );

        documents_generated(&snapshot).unwrap();
    }

    #[test]
    fn reports_every_missing_document_id() {
        let temp = tempdir().unwrap();
        let intro = temp.path().join("intro.md");
        let setup = temp.path().join("setup.md");
        let faq = temp.path().join("faq.md");
        fs::write(&intro, "---\nid: intro\n---\n").unwrap();
        fs::write(&setup, "---\nid: setup\n---\n").unwrap();
        fs::write(&faq, "---\nid: faq\n---\n").unwrap();

        let snapshot = snapshot_with(
            vec![intro, setup, faq],
            vec![PathBuf::from("build/site/docs/setup.html")],
            vec![],
            vec![],
        );

        let err = documents_generated(&snapshot).unwrap_err();

        match err {
            VerifyError::MissingOutputDocument { ids } => {
                assert_eq!(ids, vec!["faq".to_string(), "intro".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn document_without_frontmatter_fails() {
        let temp = tempdir().unwrap();
        let doc = temp.path().join("orphan.md");
        fs::write(&doc, "# No front-matter\n").unwrap();

        let snapshot = snapshot_with(vec![doc], vec![], vec![], vec![]);

        let err = documents_generated(&snapshot).unwrap_err();

        assert!(matches!(err, VerifyError::Frontmatter { .. }));
    }

    #[test]
    fn detects_unresolved_placeholder() {
        let temp = tempdir().unwrap();
        let page = temp.path().join("intro.html");
        fs::write(
            &page,
            "<html><AUTOGENERATED_TABLE_OF_CONTENTS></html>",
        )
        .unwrap();

        let snapshot = snapshot_with(vec![], vec![page.clone()], vec![], vec![]);

        let err =
            placeholders_resolved(&snapshot, "<AUTOGENERATED_TABLE_OF_CONTENTS>").unwrap_err();

        match err {
            VerifyError::UnresolvedPlaceholder { file, .. } => assert_eq!(file, page),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn passes_when_placeholders_were_substituted() {
        let temp = tempdir().unwrap();
        let page = temp.path().join("intro.html");
        fs::write(&page, "<html><ul><li>Section</li></ul></html>").unwrap();

        let snapshot = snapshot_with(vec![], vec![page], vec![], vec![]);

        placeholders_resolved(&snapshot, "<AUTOGENERATED_TABLE_OF_CONTENTS>").unwrap();
    }

    #[test]
    fn minifies_css() {
        let css = r#"
.button {
    background-color: blue;
    padding: 10px;
}
        "#;

        let minified = minify_css(css).unwrap();

        assert!(!minified.contains('\n'));
        assert!(minified.contains(".button"));
    }

    fn write_css_fixture(root: &std::path::Path) -> HarnessConfig {
        let css_dir = root.join("static/css");
        fs::create_dir_all(&css_dir).unwrap();
        fs::write(css_dir.join("main.css"), "body { margin: 0; }\n").unwrap();
        fs::write(
            css_dir.join("custom.css"),
            ".hero {\n  color: red;\n}\n",
        )
        .unwrap();

        HarnessConfig {
            output_dir: root.join("build"),
            project_name: "site".to_string(),
            static_css_dir: css_dir.clone(),
            baseline_css: css_dir.join("main.css"),
            ..Default::default()
        }
    }

    #[test]
    fn finds_bundle_named_with_recomputed_digest() {
        let temp = tempdir().unwrap();
        let config = write_css_fixture(temp.path());

        let digest =
            hash::bundle_digest(&config.baseline_css, &config.static_css_dir).unwrap();
        let css_dir = config.css_dir();
        fs::create_dir_all(&css_dir).unwrap();

        // Bundle as the generator would emit it: each input minified, in
        // digest order.
        let mut bundle = String::new();
        for file in hash::user_stylesheets(&config.static_css_dir).unwrap() {
            bundle.push_str(&minify_css(&fs::read_to_string(&file).unwrap()).unwrap());
        }
        fs::write(css_dir.join(format!("main.{digest}.css")), bundle).unwrap();

        css_bundle(&config).unwrap();
    }

    #[test]
    fn missing_bundle_reports_the_computed_digest() {
        let temp = tempdir().unwrap();
        let config = write_css_fixture(temp.path());
        fs::create_dir_all(config.css_dir()).unwrap();

        let err = css_bundle(&config).unwrap_err();

        match err {
            VerifyError::HashMismatch { digest, expected } => {
                assert_eq!(digest.len(), 40);
                assert!(expected.ends_with(format!("main.{digest}.css")));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn bundle_missing_an_input_rule_fails() {
        let temp = tempdir().unwrap();
        let config = write_css_fixture(temp.path());

        let digest =
            hash::bundle_digest(&config.baseline_css, &config.static_css_dir).unwrap();
        let css_dir = config.css_dir();
        fs::create_dir_all(&css_dir).unwrap();

        // Only the baseline made it into the bundle.
        let bundle = minify_css("body { margin: 0; }").unwrap();
        fs::write(css_dir.join(format!("main.{digest}.css")), bundle).unwrap();

        let err = css_bundle(&config).unwrap_err();

        match err {
            VerifyError::MissingRule(file) => assert!(file.ends_with("custom.css")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn passes_when_every_asset_is_copied() {
        let snapshot = snapshot_with(
            vec![],
            vec![],
            vec![PathBuf::from("docs/assets/logo.png")],
            vec![PathBuf::from("build/site/img/logo.png")],
        );

        assets_copied(&snapshot).unwrap();
    }

    #[test]
    fn reports_every_missing_asset() {
        let snapshot = snapshot_with(
            vec![],
            vec![],
            vec![
                PathBuf::from("docs/assets/logo.png"),
                PathBuf::from("docs/assets/diagram.svg"),
                PathBuf::from("docs/assets/icon.ico"),
            ],
            vec![PathBuf::from("build/site/img/icon.ico")],
        );

        let err = assets_copied(&snapshot).unwrap_err();

        match err {
            VerifyError::MissingAsset { names } => {
                assert_eq!(
                    names,
                    vec!["diagram.svg".to_string(), "logo.png".to_string()]
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_output_dir_fails_the_existence_check() {
        let temp = tempdir().unwrap();
        let config = HarnessConfig {
            output_dir: temp.path().join("never-built"),
            ..Default::default()
        };

        let err = output_dir_exists(&config).unwrap_err();

        assert!(matches!(err, VerifyError::MissingOutput(_)));
    }
}
