//! Harness configuration.

use std::path::PathBuf;

/// Configuration for a verification run.
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// Directory the generator command runs in
    pub site_dir: PathBuf,

    /// Project name; parameterizes the output subpaths
    pub project_name: String,

    /// External generator command line (program followed by arguments)
    pub build_command: Vec<String>,

    /// Source documents directory (searched recursively)
    pub docs_dir: PathBuf,

    /// Source assets directory (flat)
    pub assets_dir: PathBuf,

    /// Generator output root
    pub output_dir: PathBuf,

    /// User stylesheet directory feeding the bundle hash
    pub static_css_dir: PathBuf,

    /// Baseline stylesheet hashed ahead of the user stylesheets
    pub baseline_css: PathBuf,

    /// Literal token the generator must have substituted in every document
    pub placeholder: String,

    /// Leave the output directory in place after the run
    pub keep_output: bool,
}

/// The token the generator replaces with a rendered table of contents.
pub const DEFAULT_PLACEHOLDER: &str = "<AUTOGENERATED_TABLE_OF_CONTENTS>";

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            site_dir: PathBuf::from("website"),
            project_name: "site".to_string(),
            build_command: vec!["yarn".to_string(), "build".to_string()],
            docs_dir: PathBuf::from("docs"),
            assets_dir: PathBuf::from("docs/assets"),
            output_dir: PathBuf::from("website/build"),
            static_css_dir: PathBuf::from("website/static/css"),
            baseline_css: PathBuf::from("website/static/css/main.css"),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            keep_output: false,
        }
    }
}

impl HarnessConfig {
    /// Directory holding the generated HTML documents.
    pub fn html_dir(&self) -> PathBuf {
        self.output_dir.join(&self.project_name).join("docs")
    }

    /// Directory holding the copied assets.
    pub fn img_dir(&self) -> PathBuf {
        self.output_dir.join(&self.project_name).join("img")
    }

    /// Directory holding the content-addressed CSS bundle.
    pub fn css_dir(&self) -> PathBuf {
        self.output_dir.join(&self.project_name).join("css")
    }
}
