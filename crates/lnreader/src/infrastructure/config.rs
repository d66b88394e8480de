use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Config {
    #[serde(skip)]
    path: PathBuf,
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: lnreader_home().join("config.yml"),
            api_url: default_api_url(),
        }
    }
}

fn lnreader_home() -> PathBuf {
    match std::env::var("LNREADER_HOME") {
        Ok(path) => PathBuf::from(path),
        Err(_) => dirs::home_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join(".lnreader"),
    }
}

fn default_api_url() -> String {
    lnreader_client::DEFAULT_API_URL.to_string()
}

impl Config {
    pub fn open<P: AsRef<Path>>(path: Option<P>) -> Result<Config, anyhow::Error> {
        let config_path = match path {
            Some(p) => PathBuf::new().join(p),
            None => lnreader_home().join("config.yml"),
        };

        match std::fs::File::open(&config_path) {
            Ok(file) => {
                info!("Open config from {:?}", config_path);
                let mut cfg: Self = serde_yml::from_reader(file)?;
                cfg.path = config_path;
                Ok(cfg)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let cfg = Config {
                    path: config_path,
                    ..Default::default()
                };
                cfg.save()?;
                info!("Write default config at {:?}", cfg.path);
                Ok(cfg)
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self) -> Result<(), anyhow::Error> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_yml::to_string(&self)?)?;

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_open_writes_default_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yml");

        let cfg = Config::open(Some(&path)).unwrap();

        assert_eq!(cfg.api_url, lnreader_client::DEFAULT_API_URL);
        assert_eq!(cfg.path(), path.as_path());
        assert!(path.exists());
    }

    #[test]
    fn test_open_reads_existing_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yml");
        std::fs::write(&path, "api_url: http://localhost:3000\n").unwrap();

        let cfg = Config::open(Some(&path)).unwrap();

        assert_eq!(cfg.api_url, "http://localhost:3000");
    }

    #[test]
    fn test_open_fills_missing_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yml");
        std::fs::write(&path, "{}\n").unwrap();

        let cfg = Config::open(Some(&path)).unwrap();

        assert_eq!(cfg.api_url, lnreader_client::DEFAULT_API_URL);
    }

    #[test]
    fn test_open_error_other_than_missing_is_returned() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("config.yml");
        std::fs::write(&file, "api_url: http://localhost:3000\n").unwrap();

        let res = Config::open(Some(file.join("config.yml")));

        assert!(res.is_err());
        assert_eq!(
            std::fs::read_to_string(&file).unwrap(),
            "api_url: http://localhost:3000\n"
        );
    }
}
