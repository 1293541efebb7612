use promptlib_core::config::loader::ConfigLoader;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn write_file(path: &PathBuf, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn load_default_profile_ok() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    let toml = r#"
version = 1
profile = "default"

[profiles.default]
data_dir = "/tmp/prompts"
"#;

    write_file(&cfg_path, toml);

    let rc = ConfigLoader::load(Some(&cfg_path), None).expect("should load");
    assert_eq!(rc.active_profile, "default");
    assert_eq!(rc.data_dir.display().to_string(), "/tmp/prompts");
    assert_eq!(rc.library_file.display().to_string(), "/tmp/prompts/library.json");
    assert_eq!(rc.page_size, 10);
    assert_eq!(rc.history_limit, 50);
    assert_eq!(rc.logging.level, "warn");
    assert!(rc.logging.file.is_none());
}

#[test]
fn load_with_profile_override_ok() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("promptlib/config.toml");
    let toml = r#"
version = 1
profile = "default"

[profiles.default]
data_dir = "/tmp/default"

[profiles.work]
data_dir = "/tmp/work"
library_file = "{{data_dir}}/team/prompts.json"

[library]
page_size = 4

[diagnostics]
history_limit = 7

[logging]
level = "debug"
file = "{{data_dir}}/plib.log"
"#;
    write_file(&cfg_path, toml);

    let rc = ConfigLoader::load(Some(&cfg_path), Some("work")).expect("should load");
    assert_eq!(rc.active_profile, "work");
    assert_eq!(rc.library_file.display().to_string(), "/tmp/work/team/prompts.json");
    assert_eq!(rc.page_size, 4);
    assert_eq!(rc.history_limit, 7);
    assert_eq!(rc.logging.level, "debug");
    assert_eq!(rc.logging.file.unwrap().display().to_string(), "/tmp/work/plib.log");
}

#[test]
fn zero_limits_are_clamped() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    let toml = r#"
version = 1
[profiles.default]
data_dir = "/tmp/p"

[library]
page_size = 0

[diagnostics]
history_limit = 0
"#;
    write_file(&cfg_path, toml);

    let rc = ConfigLoader::load(Some(&cfg_path), None).expect("should load");
    assert_eq!(rc.page_size, 1);
    assert_eq!(rc.history_limit, 1);
}
