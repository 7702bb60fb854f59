use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use directories::BaseDirs;

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".kinobaza";
/// SQLite file name stored inside the application data directory.
const DB_FILE_NAME: &str = "kinobaza.sqlite";

/// Runtime settings. The catalog has no flags or config file, so the only
/// thing to settle is where the database lives.
#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: PathBuf,
}

impl Config {
    /// Resolve the default location inside the user's home directory.
    pub fn from_home() -> Result<Self> {
        let base_dirs =
            BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
        Ok(Self::under_home(base_dirs.home_dir()))
    }

    /// Default layout relative to a given home directory.
    pub fn under_home(home: &Path) -> Self {
        Self::with_db_path(home.join(DATA_DIR_NAME).join(DB_FILE_NAME))
    }

    pub fn with_db_path(path: impl AsRef<Path>) -> Self {
        Self {
            db_path: path.as_ref().to_path_buf(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_is_kept_verbatim() {
        let config = Config::with_db_path("/tmp/films/catalog.sqlite");
        assert_eq!(config.db_path, PathBuf::from("/tmp/films/catalog.sqlite"));
    }

    #[test]
    fn home_layout_nests_data_dir_and_file() {
        let config = Config::under_home(Path::new("/home/viewer"));
        assert_eq!(
            config.db_path,
            PathBuf::from("/home/viewer/.kinobaza/kinobaza.sqlite")
        );
    }
}
