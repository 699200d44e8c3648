#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub root: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = tmp.path().join("tree");
        fs::create_dir_all(&root).expect("create tree root");
        Self { _tmp: tmp, root }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("filetree");
        cmd.env_remove("RUST_LOG");
        cmd
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.root.join(rel)
    }

    pub fn dir(&self, rel: &str) -> PathBuf {
        let p = self.path(rel);
        fs::create_dir_all(&p).expect("create fixture dir");
        p
    }

    pub fn file(&self, rel: &str) -> PathBuf {
        let p = self.path(rel);
        if let Some(parent) = p.parent() {
            fs::create_dir_all(parent).expect("create fixture parent");
        }
        fs::write(&p, "fixture\n").expect("write fixture file");
        p
    }

    /// stdout of `getMaxDepth <path>`, which must succeed.
    pub fn depth_output(&self, path: &Path) -> String {
        let out = self
            .cmd()
            .arg("getMaxDepth")
            .arg(path)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        String::from_utf8(out).expect("utf8 stdout")
    }

    pub fn depth_of(&self, path: &Path) -> usize {
        let stdout = self.depth_output(path);
        stdout
            .lines()
            .last()
            .expect("depth line")
            .parse()
            .expect("integer depth")
    }
}
