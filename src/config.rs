use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub data_dir: PathBuf,
    pub static_dir: PathBuf,
    pub participants_file: String,
    pub students_file: String,
}

impl Config {
    /// Reads settings from the environment (and `.env`, once loaded by the
    /// caller), falling back to the defaults for anything unset or invalid.
    pub fn from_env() -> Self {
        let var = |key: &str, default: &str| env::var(key).unwrap_or_else(|_| default.to_string());

        Self {
            host: var("HOST", "127.0.0.1"),
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8000),
            data_dir: PathBuf::from(var("DATA_DIR", ".")),
            static_dir: PathBuf::from(var("STATIC_DIR", "static")),
            participants_file: var("PARTICIPANTS_FILE", "results.txt"),
            students_file: var("STUDENTS_FILE", "students.csv"),
        }
    }

    /// Port tried when `port` is taken; none once `port` is the last one.
    pub fn fallback_port(&self) -> Option<u16> {
        self.port.checked_add(1)
    }

    pub fn participants_path(&self) -> PathBuf {
        self.data_dir.join(&self.participants_file)
    }

    pub fn students_path(&self) -> PathBuf {
        self.data_dir.join(&self.students_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(port: u16) -> Config {
        Config {
            host: "127.0.0.1".to_string(),
            port,
            data_dir: PathBuf::from("data"),
            static_dir: PathBuf::from("static"),
            participants_file: "results.txt".to_string(),
            students_file: "students.csv".to_string(),
        }
    }

    #[test]
    fn fallback_is_next_port() {
        assert_eq!(config(8000).fallback_port(), Some(8001));
    }

    #[test]
    fn no_fallback_past_last_port() {
        assert_eq!(config(u16::MAX).fallback_port(), None);
    }

    #[test]
    fn record_files_live_in_data_dir() {
        let config = config(8000);
        assert_eq!(config.participants_path(), PathBuf::from("data/results.txt"));
        assert_eq!(config.students_path(), PathBuf::from("data/students.csv"));
    }
}
