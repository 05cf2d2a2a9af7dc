//! INI file configuration adapter.

use crate::ports::config_port::ConfigPort;
use configparser::ini::Ini;
use std::path::Path;

pub struct FileConfigAdapter {
    config: Ini,
}

impl FileConfigAdapter {
    pub fn from_file<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let mut config = Ini::new();
        config.load(path).map_err(std::io::Error::other)?;
        Ok(Self { config })
    }

    pub fn from_string(content: &str) -> Result<Self, String> {
        let mut config = Ini::new();
        config.read(content.to_string())?;
        Ok(Self { config })
    }
}

impl ConfigPort for FileConfigAdapter {
    fn get_string(&self, section: &str, key: &str) -> Option<String> {
        self.config.get(section, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn from_string_parses_config() {
        let content = r#"
[portfolio]
currency = USD
names = Total Market, Bonds
targets = 0.6, 0.4
"#;
        let adapter = FileConfigAdapter::from_string(content).unwrap();
        assert_eq!(
            adapter.get_string("portfolio", "currency"),
            Some("USD".to_string())
        );
        assert_eq!(
            adapter.get_string("portfolio", "names"),
            Some("Total Market, Bonds".to_string())
        );
    }

    #[test]
    fn get_string_returns_none_for_missing_key() {
        let adapter = FileConfigAdapter::from_string("[portfolio]\nprecision = 2\n").unwrap();
        assert_eq!(adapter.get_string("portfolio", "missing"), None);
        assert_eq!(adapter.get_string("missing_section", "key"), None);
    }

    #[test]
    fn get_list_splits_and_trims() {
        let adapter =
            FileConfigAdapter::from_string("[portfolio]\ntargets = 0.5 ,0.25,  0.25\n").unwrap();
        assert_eq!(
            adapter.get_list("portfolio", "targets"),
            Some(vec!["0.5".to_string(), "0.25".to_string(), "0.25".to_string()])
        );
        assert_eq!(adapter.get_list("portfolio", "names"), None);
    }

    #[test]
    fn from_file_reads_config() {
        let content = "[portfolio]\nnames = A, B\ntargets = 0.5, 0.5\n";
        let file = create_temp_config(content);
        let adapter = FileConfigAdapter::from_file(file.path()).unwrap();
        assert_eq!(
            adapter.get_list("portfolio", "names"),
            Some(vec!["A".to_string(), "B".to_string()])
        );
    }

    #[test]
    fn from_file_returns_error_for_missing_file() {
        let result = FileConfigAdapter::from_file("/nonexistent/path/portfolio.ini");
        assert!(result.is_err());
    }
}
