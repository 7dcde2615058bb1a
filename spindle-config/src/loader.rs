use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::{debug, info};

use crate::{
    models::CarouselSettings,
    util::{non_empty_var, parse_override},
    validation::{self, SettingsGuardRailError, SettingsWarnings},
};

pub const CONFIG_PATH_VAR: &str = "SPINDLE_CONFIG_PATH";
pub const CONFIG_JSON_VAR: &str = "SPINDLE_CONFIG_JSON";
pub const SCALE_FACTOR_VAR: &str = "SPINDLE_SCALE_FACTOR";
pub const MAX_ITEM_SIZE_VAR: &str = "SPINDLE_MAX_ITEM_SIZE";
pub const DEFAULT_INDEX_VAR: &str = "SPINDLE_DEFAULT_INDEX";
pub const SNAP_STRATEGY_VAR: &str = "SPINDLE_SNAP_STRATEGY";
pub const SNAP_DURATION_VAR: &str = "SPINDLE_SNAP_DURATION_MS";

const DEFAULT_CANDIDATES: &[&str] = &[
    "spindle.toml",
    "spindle.json",
    "config/spindle.toml",
    "config/spindle.json",
];

/// Where the base settings came from, before env overrides.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SettingsSource {
    #[default]
    Default,
    Explicit(PathBuf),
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

impl fmt::Display for SettingsSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => write!(f, "built-in defaults"),
            Self::Explicit(path) => write!(f, "{}", path.display()),
            Self::EnvPath(path) => {
                write!(f, "{} (from {CONFIG_PATH_VAR})", path.display())
            }
            Self::EnvInline => write!(f, "{CONFIG_JSON_VAR}"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Snapshot of the `SPINDLE_*` variables a load consults.
#[derive(Debug, Clone, Default)]
pub struct EnvSettings {
    pub config_path: Option<PathBuf>,
    pub config_json: Option<String>,
    pub scale_factor: Option<String>,
    pub max_item_size: Option<String>,
    pub default_index: Option<String>,
    pub snap_strategy: Option<String>,
    pub snap_duration_ms: Option<String>,
}

impl EnvSettings {
    pub fn gather() -> Self {
        Self {
            config_path: non_empty_var(CONFIG_PATH_VAR).map(PathBuf::from),
            config_json: non_empty_var(CONFIG_JSON_VAR),
            scale_factor: non_empty_var(SCALE_FACTOR_VAR),
            max_item_size: non_empty_var(MAX_ITEM_SIZE_VAR),
            default_index: non_empty_var(DEFAULT_INDEX_VAR),
            snap_strategy: non_empty_var(SNAP_STRATEGY_VAR),
            snap_duration_ms: non_empty_var(SNAP_DURATION_VAR),
        }
    }

    fn apply_overrides(
        &self,
        settings: &mut CarouselSettings,
    ) -> Result<usize, SettingsLoadError> {
        let mut applied = 0;
        if let Some(raw) = &self.scale_factor {
            settings.carousel.scale_factor = parse_var(SCALE_FACTOR_VAR, raw)?;
            applied += 1;
        }
        if let Some(raw) = &self.max_item_size {
            settings.carousel.max_item_size = parse_var(MAX_ITEM_SIZE_VAR, raw)?;
            applied += 1;
        }
        if let Some(raw) = &self.default_index {
            settings.carousel.default_index = parse_var(DEFAULT_INDEX_VAR, raw)?;
            applied += 1;
        }
        if let Some(raw) = &self.snap_strategy {
            settings.snap.strategy = parse_var(SNAP_STRATEGY_VAR, raw)?;
            applied += 1;
        }
        if let Some(raw) = &self.snap_duration_ms {
            settings.snap.duration_ms = parse_var(SNAP_DURATION_VAR, raw)?;
            applied += 1;
        }
        Ok(applied)
    }
}

fn parse_var<T: std::str::FromStr>(
    name: &'static str,
    raw: &str,
) -> Result<T, SettingsLoadError> {
    parse_override(raw)
        .map_err(|value| SettingsLoadError::InvalidOverride { name, value })
}

#[derive(Debug, Default, Clone)]
pub struct SettingsLoaderOptions {
    pub config_path: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
    /// Directory the default candidates are resolved against; the working
    /// directory when unset.
    pub search_root: Option<PathBuf>,
}

#[derive(Debug, Default)]
pub struct SettingsLoader {
    options: SettingsLoaderOptions,
}

#[derive(Debug, Clone)]
pub struct SettingsLoad {
    pub settings: CarouselSettings,
    pub source: SettingsSource,
    pub warnings: SettingsWarnings,
    pub env_file_loaded: bool,
}

impl SettingsLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: SettingsLoaderOptions) -> Self {
        Self { options }
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.env_file = Some(path.into());
        self
    }

    pub fn with_search_root<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.search_root = Some(path.into());
        self
    }

    /// Load the env file (if any), snapshot the process environment and
    /// resolve settings from it.
    pub fn load(&self) -> Result<SettingsLoad, SettingsLoadError> {
        let env_file_loaded = match &self.options.env_file {
            Some(path) => dotenvy::from_path(path).map(|_| true).or_else(
                |err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                },
            )?,
            None => false,
        };

        let mut load = self.load_with_env(&EnvSettings::gather())?;
        load.env_file_loaded = env_file_loaded;
        Ok(load)
    }

    /// Resolve settings against an explicit environment snapshot.
    pub fn load_with_env(
        &self,
        env: &EnvSettings,
    ) -> Result<SettingsLoad, SettingsLoadError> {
        let (mut settings, source) = self.load_base(env)?;
        debug!(%source, "settings source resolved");

        let overrides = env.apply_overrides(&mut settings)?;
        if overrides > 0 {
            debug!(overrides, "environment overrides applied");
        }

        let mut warnings = SettingsWarnings::default();
        if source == SettingsSource::Default && overrides == 0 {
            warnings.push_with_hint(
                "No spindle settings file detected; using built-in defaults",
                "Create spindle.toml or set SPINDLE_CONFIG_PATH",
            );
        }
        warnings.extend(validation::apply_guard_rails(&settings)?);

        info!(%source, warnings = warnings.len(), "settings loaded");
        Ok(SettingsLoad {
            settings,
            source,
            warnings,
            env_file_loaded: false,
        })
    }

    fn load_base(
        &self,
        env: &EnvSettings,
    ) -> Result<(CarouselSettings, SettingsSource), SettingsLoadError> {
        if let Some(path) = &self.options.config_path {
            let settings = load_from_file(path)?;
            return Ok((settings, SettingsSource::Explicit(path.clone())));
        }

        if let Some(path) = &env.config_path {
            let settings = load_from_file(path)?;
            return Ok((settings, SettingsSource::EnvPath(path.clone())));
        }

        if let Some(raw) = &env.config_json {
            let settings = serde_json::from_str(raw).map_err(|source| {
                SettingsLoadError::ParseJson {
                    origin: CONFIG_JSON_VAR.to_string(),
                    source,
                }
            })?;
            return Ok((settings, SettingsSource::EnvInline));
        }

        if let Some(path) = self.find_default_file() {
            let settings = load_from_file(&path)?;
            return Ok((settings, SettingsSource::File(path)));
        }

        Ok((CarouselSettings::default(), SettingsSource::Default))
    }

    fn find_default_file(&self) -> Option<PathBuf> {
        let root = self
            .options
            .search_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        DEFAULT_CANDIDATES
            .iter()
            .map(|candidate| root.join(candidate))
            .find(|path| path.exists())
    }
}

/// Parse a settings file: `.json` as JSON, `.toml` as TOML, anything else
/// TOML first and then JSON.
pub fn load_from_file(path: &Path) -> Result<CarouselSettings, SettingsLoadError> {
    if !path.exists() {
        return Err(SettingsLoadError::MissingConfig {
            path: path.to_path_buf(),
        });
    }
    let contents =
        fs::read_to_string(path).map_err(|source| SettingsLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(&contents).map_err(|source| {
            SettingsLoadError::ParseJson {
                origin: path.display().to_string(),
                source,
            }
        }),
        Some("toml") | Some("tml") => {
            toml::from_str(&contents).map_err(|source| {
                SettingsLoadError::ParseToml {
                    path: path.to_path_buf(),
                    source,
                }
            })
        }
        _ => toml::from_str(&contents).or_else(|toml_err| {
            serde_json::from_str(&contents).map_err(|json_err| {
                SettingsLoadError::Unrecognized {
                    path: path.to_path_buf(),
                    toml: toml_err.to_string(),
                    json: json_err.to_string(),
                }
            })
        }),
    }
}

#[derive(Debug, Error)]
pub enum SettingsLoadError {
    #[error("settings file missing: {path}")]
    MissingConfig { path: PathBuf },
    #[error("failed to read settings {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings {path}")]
    ParseToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to parse settings {origin}")]
    ParseJson {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
    #[error(
        "failed to parse settings {path}: toml error: {toml}; json error: {json}"
    )]
    Unrecognized {
        path: PathBuf,
        toml: String,
        json: String,
    },
    #[error("invalid value '{value}' for {name}")]
    InvalidOverride { name: &'static str, value: String },
    #[error(transparent)]
    GuardRail(#[from] SettingsGuardRailError),
    #[error(transparent)]
    EnvFile(#[from] dotenvy::Error),
}
