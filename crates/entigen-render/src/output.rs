use std::fs::{self, create_dir_all};
use std::path::PathBuf;

use crate::errors::RenderError;

/// Writes rendered classes as `<out_dir>/<ClassName>.php`.
#[derive(Debug, Clone)]
pub struct EntityWriter {
    out_dir: PathBuf,
    dry_run: bool,
}

impl EntityWriter {
    pub fn new(out_dir: impl Into<PathBuf>, dry_run: bool) -> Self {
        Self {
            out_dir: out_dir.into(),
            dry_run,
        }
    }

    pub fn path_for(&self, class_name: &str) -> Result<PathBuf, RenderError> {
        if !is_valid_file_stem(class_name) {
            return Err(RenderError::InvalidClassName(class_name.to_string()));
        }
        Ok(self.out_dir.join(format!("{class_name}.php")))
    }

    /// Write (or, in dry-run mode, only resolve) the file of a class.
    ///
    /// Existing files are overwritten.
    pub fn write(&self, class_name: &str, contents: &str) -> Result<PathBuf, RenderError> {
        let path = self.path_for(class_name)?;
        if self.dry_run {
            return Ok(path);
        }

        if !self.out_dir.as_os_str().is_empty() {
            create_dir_all(&self.out_dir)?;
        }
        fs::write(&path, contents)?;
        Ok(path)
    }
}

fn is_valid_file_stem(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\', '\0'])
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    fn temp_dir() -> PathBuf {
        std::env::temp_dir().join(format!("entigen_writer_{}", uuid::Uuid::new_v4()))
    }

    #[test]
    fn creates_directory_and_overwrites() {
        let dir = temp_dir().join("src").join("Entity");
        let writer = EntityWriter::new(&dir, false);

        let path = writer.write("User", "first").expect("first write");
        assert_eq!(path, dir.join("User.php"));
        writer.write("User", "second").expect("second write");
        assert_eq!(fs::read_to_string(&path).expect("read back"), "second");

        let _ = fs::remove_dir_all(dir.parent().and_then(Path::parent).expect("root"));
    }

    #[test]
    fn dry_run_touches_nothing() {
        let dir = temp_dir();
        let writer = EntityWriter::new(&dir, true);
        let path = writer.write("User", "contents").expect("dry run");
        assert_eq!(path, dir.join("User.php"));
        assert!(!dir.exists());
    }

    #[test]
    fn rejects_names_escaping_the_directory() {
        let writer = EntityWriter::new("out", true);
        assert!(matches!(
            writer.path_for("../User"),
            Err(RenderError::InvalidClassName(_))
        ));
        assert!(writer.path_for("").is_err());
    }
}
