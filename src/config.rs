use std::path::Path;

use anyhow::anyhow;
use config::{Config, File};
use serde::Deserialize;

/// Runtime configuration, layered from `~/.config/dialogue-ls/settings` and
/// a workspace-root `.dialogue-ls` file. Missing files and missing keys fall
/// back to defaults.
#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    /// Hover documentation for BBCode tags and domain keywords
    pub hover: bool,
    /// Diagnostics for BBCode tags not in the catalogue
    pub tag_diagnostics: bool,
    /// Expand control-flow keywords into structural snippets on completion
    pub keyword_snippets: bool,
}

impl Settings {
    pub fn new(root_dir: &Path) -> anyhow::Result<Settings> {
        let expanded = shellexpand::tilde("~/.config/dialogue-ls/settings");
        let settings = Config::builder()
            .add_source(File::with_name(&expanded).required(false))
            .add_source(
                File::with_name(&format!(
                    "{}/.dialogue-ls",
                    root_dir
                        .to_str()
                        .ok_or(anyhow!("Can't convert root_dir to str"))?
                ))
                .required(false),
            )
            .set_default("hover", true)?
            .set_default("tag_diagnostics", true)?
            .set_default("keyword_snippets", true)?
            .build()
            .map_err(|err| anyhow!("Build err: {err}"))?;

        let settings = settings.try_deserialize::<Settings>()?;

        anyhow::Ok(settings)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            hover: true,
            tag_diagnostics: true,
            keyword_snippets: true,
        }
    }
}
