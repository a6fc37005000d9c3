//! YAML record loading adapter

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde_json::Value;

use crate::application::ports::outbound::{LoadError, RecordLoaderPort};

/// Decodes a YAML file into the neutral value tree the pipeline consumes
#[derive(Debug, Default)]
pub struct YamlRecordLoader;

impl YamlRecordLoader {
    pub fn new() -> Self {
        Self
    }
}

impl RecordLoaderPort for YamlRecordLoader {
    fn load(&self, path: &Path) -> Result<Value, LoadError> {
        let file =
            File::open(path).map_err(|e| LoadError::Io(format!("{}: {}", path.display(), e)))?;
        serde_yaml::from_reader(BufReader::new(file))
            .map_err(|e| LoadError::Decode(format!("{}: {}", path.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use serde_json::json;

    #[test]
    fn test_loads_yaml_into_value_tree() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "game:\n  name: Call of Cthulhu 7th Ed\n  character:\n    age: 42"
        )
        .unwrap();

        let tree = YamlRecordLoader::new().load(file.path()).unwrap();
        assert_eq!(tree["game"]["name"], json!("Call of Cthulhu 7th Ed"));
        assert_eq!(tree["game"]["character"]["age"], json!(42));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = YamlRecordLoader::new()
            .load(Path::new("/nonexistent/harvey.yaml"))
            .unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }

    #[test]
    fn test_malformed_yaml_is_decode_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "game: [unterminated").unwrap();

        let err = YamlRecordLoader::new().load(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Decode(_)));
    }
}
