use std::path::{Path, PathBuf};
use std::sync::Arc;

use arc_swap::ArcSwap;
use figment::{
    Figment,
    providers::{Format, Json, Serialized},
};
use messenger_chat::{ChatFilter, ThreadMode};
use serde::{Deserialize, Serialize};
use snafu::{ResultExt, Snafu};

pub const SETTINGS_DIRECTORY_NAME: &str = "messenger";
pub const SETTINGS_FILE_NAME: &str = "settings.json";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MessengerSettings {
    #[serde(default)]
    pub thread_mode: ThreadMode,
    /// JSON seed replacing the built-in demo directory.
    #[serde(default)]
    pub seed_path: Option<PathBuf>,
    #[serde(default)]
    pub initial_filter: ChatFilter,
}

impl MessengerSettings {
    pub fn normalized(mut self) -> Self {
        // A blank seed path means "use the built-in seed".
        self.seed_path = self
            .seed_path
            .filter(|path| !path.as_os_str().is_empty());
        self
    }
}

pub struct SettingsStore {
    settings: Arc<ArcSwap<MessengerSettings>>,
    config_path: PathBuf,
}

impl SettingsStore {
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .map(|path| path.join(SETTINGS_DIRECTORY_NAME))
            .unwrap_or_else(|| PathBuf::from(".messenger"))
    }

    pub fn default_config_path() -> PathBuf {
        Self::default_config_dir().join(SETTINGS_FILE_NAME)
    }

    pub fn new(config_path: PathBuf) -> Self {
        let settings = Self::load_from_disk(&config_path);
        Self {
            settings: Arc::new(ArcSwap::from_pointee(settings)),
            config_path,
        }
    }

    pub fn load() -> Self {
        Self::new(Self::default_config_path())
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn settings(&self) -> Arc<MessengerSettings> {
        self.settings.load_full()
    }

    pub fn update(&self, settings: MessengerSettings) -> Result<(), SettingsError> {
        let normalized_settings = settings.normalized();
        self.persist(&normalized_settings)?;
        self.settings.store(Arc::new(normalized_settings));
        Ok(())
    }

    fn load_from_disk(path: &Path) -> MessengerSettings {
        if !path.exists() {
            tracing::info!("settings file not found at {:?}, using defaults", path);
            return MessengerSettings::default();
        }

        let figment = Figment::from(Serialized::defaults(MessengerSettings::default()))
            .merge(Json::file(path));

        match figment.extract::<MessengerSettings>() {
            Ok(settings) => settings.normalized(),
            Err(error) => {
                tracing::warn!(
                    "failed to parse settings from {:?}: {}. using defaults",
                    path,
                    error
                );
                MessengerSettings::default()
            }
        }
    }

    /// Stages `settings` beside the live file and renames it into place.
    fn persist(&self, settings: &MessengerSettings) -> Result<(), SettingsError> {
        if let Some(parent) = self.config_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).context(ConfigDirSnafu {
                stage: "prepare-messenger-config-dir",
                path: parent.to_path_buf(),
            })?;
        }

        let encoded = serde_json::to_vec_pretty(settings).context(EncodeSettingsSnafu {
            stage: "encode-messenger-settings",
        })?;

        let staged_path = self.config_path.with_extension("json.tmp");
        std::fs::write(&staged_path, encoded).context(StageSettingsSnafu {
            stage: "stage-messenger-settings",
            path: staged_path.clone(),
        })?;

        std::fs::rename(&staged_path, &self.config_path).context(CommitSettingsSnafu {
            stage: "commit-messenger-settings",
            staged: staged_path,
            target: self.config_path.clone(),
        })?;

        tracing::info!(
            "messenger settings saved (thread mode {}, filter {}) to {:?}",
            settings.thread_mode,
            settings.initial_filter,
            self.config_path
        );
        Ok(())
    }
}

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum SettingsError {
    #[snafu(display("cannot create messenger config directory {path:?}: {source}"))]
    ConfigDir {
        stage: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("cannot encode messenger settings as JSON: {source}"))]
    EncodeSettings {
        stage: &'static str,
        source: serde_json::Error,
    },
    #[snafu(display("cannot write staged messenger settings to {path:?}: {source}"))]
    StageSettings {
        stage: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("cannot move staged settings {staged:?} over {target:?}: {source}"))]
    CommitSettings {
        stage: &'static str,
        staged: PathBuf,
        target: PathBuf,
        source: std::io::Error,
    },
}
