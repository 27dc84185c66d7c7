/// The parts of the filesystem configuration loading needs, behind a trait so tests can swap in
/// an in-memory version
pub trait FilesystemTrait {
    fn is_file(&self, path: &str) -> bool;
    fn read_to_string(&self, path: &str) -> std::io::Result<String>;
}

pub type Filesystem = Box<dyn FilesystemTrait>;

pub fn real_filesystem() -> Filesystem {
    Box::new(RealFilesystem)
}

struct RealFilesystem;

impl FilesystemTrait for RealFilesystem {
    fn is_file(&self, path: &str) -> bool {
        std::path::Path::new(path).is_file()
    }

    fn read_to_string(&self, path: &str) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest_path(name: &str) -> String {
        let mut buf = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        buf.push(name);
        buf.to_str().unwrap().to_string()
    }

    #[test]
    fn manifest_is_file() {
        assert!(real_filesystem().is_file(&manifest_path("Cargo.toml")));
    }

    #[test]
    fn directory_is_not_file() {
        assert!(!real_filesystem().is_file(&manifest_path("src")));
    }

    #[test]
    fn reads_manifest() {
        let contents = real_filesystem()
            .read_to_string(&manifest_path("Cargo.toml"))
            .unwrap();
        assert!(contents.contains("weak-events"));
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = real_filesystem()
            .read_to_string(&manifest_path("not-a-file.toml"))
            .unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }
}
