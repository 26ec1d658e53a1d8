use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use interop_export::styles::DocumentStyles;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 2;

const APP_DIR: &str = "interop-worksheet";
const DEFAULT_FILE_NAME: &str = "Interoperability_Template_with_Selections.docx";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorksheetConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// Where exports go when no explicit output path is given.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default = "default_file_name")]
    pub file_name: String,
    /// Append the all-options table unless overridden per export.
    #[serde(default)]
    pub include_appendix: bool,
    /// Added in v2; older configs get the default styles.
    #[serde(default)]
    pub styles: DocumentStyles,
}

impl Default for WorksheetConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            output_dir: default_output_dir(),
            file_name: default_file_name(),
            include_appendix: false,
            styles: DocumentStyles::default(),
        }
    }
}

impl WorksheetConfig {
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.file_name)
    }
}

fn default_output_dir() -> PathBuf {
    dirs::document_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

fn default_file_name() -> String {
    DEFAULT_FILE_NAME.to_string()
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join(APP_DIR))
}

pub fn default_config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// Load the config at `path`, or defaults when the file does not exist.
pub fn load_config(path: &Path) -> eyre::Result<WorksheetConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(WorksheetConfig::default());
    }

    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = config_version(&json)?;
    let migrated = migrate(json, on_disk_version)?;
    let config: WorksheetConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Schema version recorded in a raw config. Missing = 0; values that do
/// not fit a `u32` are rejected rather than wrapped.
pub fn config_version(json: &serde_json::Value) -> eyre::Result<u32> {
    match json.get("config_version").and_then(|v| v.as_u64()) {
        None => Ok(0),
        Some(v) => u32::try_from(v).map_err(|_| {
            eyre::eyre!(
                "config_version {v} is newer than this build supports ({CURRENT_VERSION}). \
                 Please update interop-worksheet."
            )
        }),
    }
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
pub fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update interop-worksheet."
        ));
    }

    let obj = json
        .as_object_mut()
        .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;

    // v0 → v1: single `output` path split into `output_dir` + `file_name`
    if from_version < 1 {
        let output = obj
            .remove("output")
            .and_then(|v| v.as_str().map(PathBuf::from));
        if let Some(output) = output {
            let dir = output.parent().map(Path::to_path_buf).unwrap_or_default();
            let name = output
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| DEFAULT_FILE_NAME.to_string());
            obj.insert("output_dir".to_string(), serde_json::json!(dir));
            obj.insert("file_name".to_string(), serde_json::json!(name));
        }
        tracing::info!("migrated config v0 → v1 (split output path)");
    }

    // v1 → v2: add document styles
    if from_version < 2 {
        obj.entry("styles")
            .or_insert_with(|| serde_json::json!(DocumentStyles::default()));
        tracing::info!("migrated config v1 → v2 (added styles)");
    }

    obj.insert(
        "config_version".to_string(),
        serde_json::Value::Number(CURRENT_VERSION.into()),
    );
    Ok(json)
}

pub fn save_config(config: &WorksheetConfig, path: &Path) -> eyre::Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| eyre::eyre!("config path {} has no parent", path.display()))?;
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;
    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
