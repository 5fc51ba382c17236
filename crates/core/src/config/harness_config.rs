use crate::{
    command::HarnessCommand,
    error::{Error, Result},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".validation-harness.json";

const BACKEND_QUERY: &str =
    "import cudaq; print(' '.join(target.name for target in cudaq.get_targets()))";

/// Where the external collaborators live and how to call them.
///
/// Every field has a default so an empty `{}` file is valid. The list of
/// compiled tests and the per-test timeout are intentionally not
/// configurable here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct HarnessConfig {
    /// Configured build tree holding the compiled examples
    pub build_dir: PathBuf,
    /// File whose presence proves `build_dir` has been configured
    pub build_marker: String,
    pub test_tool: String,

    pub python: String,
    pub runtime_module: String,
    /// Python source printing whitespace separated backend names
    pub backend_query: String,
    pub default_backend: String,

    pub notebook_tool: String,
    pub notebook_tool_probe_args: Vec<String>,
    /// Defaults to `<python> -m pip install notebook nbconvert`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notebook_tool_install: Option<HarnessCommand>,
    pub notebook_validator: PathBuf,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            build_dir: PathBuf::from("build"),
            build_marker: "CMakeCache.txt".to_string(),
            test_tool: "ctest".to_string(),
            python: "python3".to_string(),
            runtime_module: "cudaq".to_string(),
            backend_query: BACKEND_QUERY.to_string(),
            default_backend: "qpp-cpu".to_string(),
            notebook_tool: "jupyter".to_string(),
            notebook_tool_probe_args: vec!["nbconvert".to_string(), "--version".to_string()],
            notebook_tool_install: None,
            notebook_validator: PathBuf::from("docs/notebook_validation.py"),
        }
    }
}

impl HarnessConfig {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents).map_err(|e| {
            Error::Configuration(format!("Failed to parse {}: {e}", path.display()))
        })?;
        Ok(config)
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path;

        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Some(config_path);
            }

            current = current.parent()?;
        }
    }

    /// An explicit path must exist; otherwise search upwards from `cwd` and
    /// fall back to the defaults.
    ///
    /// Relative paths inside a config file are rooted at the directory that
    /// holds the file. Defaults are rooted at `cwd`.
    pub fn resolve(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        let path = match explicit {
            Some(path) => {
                let path = cwd.join(path);
                if !path.exists() {
                    return Err(Error::Configuration(format!(
                        "config file {} does not exist",
                        path.display()
                    )));
                }
                path
            }
            None => match Self::find_config_file(cwd) {
                Some(path) => path,
                None => return Ok(Self::default().rooted_at(cwd)),
            },
        };

        tracing::debug!("Using config file {}", path.display());
        let base = path.parent().unwrap_or(cwd);
        Ok(Self::load_from_file(&path)?.rooted_at(base))
    }

    /// Relative paths are taken relative to `base`.
    pub fn rooted_at(mut self, base: &Path) -> Self {
        if self.build_dir.is_relative() {
            self.build_dir = base.join(&self.build_dir);
        }
        if self.notebook_validator.is_relative() {
            self.notebook_validator = base.join(&self.notebook_validator);
        }
        self
    }

    pub fn build_marker_path(&self) -> PathBuf {
        self.build_dir.join(&self.build_marker)
    }

    /// One-shot installer for the notebook tool, using the configured
    /// interpreter unless an explicit command was given.
    pub fn notebook_install_command(&self) -> HarnessCommand {
        self.notebook_tool_install.clone().unwrap_or_else(|| {
            HarnessCommand::new(self.python.as_str())
                .args(["-m", "pip", "install", "notebook", "nbconvert"])
        })
    }
}
