//! Root directory resolution through `CNSIR_ROOT_DIR`.
#![allow(unsafe_code)]

use std::fs;
use std::path::{Path, PathBuf};

use cnsir_config::{PackageConfig, ROOT_DIR_ENV_VAR};
use serial_test::serial;

fn with_root_dir<T>(root: &Path, f: impl FnOnce() -> T) -> T {
    unsafe { std::env::set_var(ROOT_DIR_ENV_VAR, root) };
    let result = f();
    unsafe { std::env::remove_var(ROOT_DIR_ENV_VAR) };
    result
}

#[test]
#[serial]
fn env_var_moves_root_and_user_settings() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("config")).unwrap();
    fs::write(
        dir.path().join("config/cnsir_settings.toml"),
        concat!(
            "[folders]\ncleaned = \"tidy\"\n",
            "[online_dirs]\nmirror = \"https://mirror.example.org/cnsir\"\n",
        ),
    )
    .unwrap();

    let (config, root, user_config) = with_root_dir(dir.path(), || {
        let config = PackageConfig::load().unwrap();
        let root = config.root_dir();
        let user_config = config.user_config_path();
        (config, root, user_config)
    });

    assert_eq!(root, dir.path());
    assert_eq!(user_config, dir.path().join("config/cnsir_settings.toml"));
    assert_eq!(config.defaults.folders.cleaned, PathBuf::from("tidy"));
    assert_eq!(
        config.defaults.online_dirs.mirror,
        "https://mirror.example.org/cnsir"
    );
    let packaged = PackageConfig::packaged().unwrap();
    assert_eq!(config.defaults.online_dirs.original, packaged.defaults.online_dirs.original);
    assert_eq!(config.defaults.folders.maps, packaged.defaults.folders.maps);
}

#[test]
#[serial]
fn without_user_settings_load_is_packaged() {
    let dir = tempfile::tempdir().unwrap();

    let config = with_root_dir(dir.path(), || PackageConfig::load().unwrap());

    assert_eq!(config, PackageConfig::packaged().unwrap());
}

#[test]
#[serial]
fn root_falls_back_to_packaged_name() {
    unsafe { std::env::remove_var(ROOT_DIR_ENV_VAR) };
    let config = PackageConfig::packaged().unwrap();
    assert_eq!(config.root_dir(), PathBuf::from("CNSIR_data"));
    assert_eq!(
        config.user_config_path(),
        PathBuf::from("CNSIR_data/config/cnsir_settings.toml")
    );
}
