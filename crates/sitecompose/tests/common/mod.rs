use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestSite {
    pub root: TempDir,
}

impl TestSite {
    pub fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        Self { root }
    }

    /// nginx のバージョンと TLS ポリシーを持つ設定ファイルを書く
    pub fn write_config(&self, ssl_policy: &str) -> PathBuf {
        let path = self.root.path().join("sitecompose.yml");
        fs::write(
            &path,
            format!("ssl_policy: {ssl_policy}\nimage_versions:\n  easyengine/nginx: v4.1.0\n"),
        )
        .unwrap();
        path
    }

    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    pub fn path(&self) -> PathBuf {
        self.root.path().to_path_buf()
    }
}
