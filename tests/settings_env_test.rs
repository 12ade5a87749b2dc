use crawl_seed::canonicalizer::GroupingScope;
use crawl_seed::settings::load;
use std::fs;
use tempfile::tempdir;

// Kept as the only test in this binary: it mutates the process environment.
#[test]
fn test_environment_overrides_file() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("seed.toml");
    fs::write(
        &config,
        "workers = 2\nmax_stem_segments = 1\nretained_extensions = [\".asp\"]\n",
    )
    .unwrap();

    let vars = [
        ("CRAWL_SEED_WORKERS", "6"),
        ("CRAWL_SEED_GROUPING_SCOPE", "origin"),
        ("CRAWL_SEED_RETAINED_EXTENSIONS", ".json,.php"),
        ("CRAWL_SEED_VERSION_MARKERS", "rev="),
    ];
    for (key, value) in vars {
        std::env::set_var(key, value);
    }
    let settings = load(Some(&config));
    for (key, _) in vars {
        std::env::remove_var(key);
    }
    let settings = settings.unwrap();

    assert_eq!(settings.workers, 6);
    assert_eq!(settings.max_stem_segments, 1);
    assert_eq!(settings.grouping_scope, GroupingScope::Origin);
    assert_eq!(settings.retained_extensions, vec![".json", ".php"]);
    assert_eq!(settings.version_markers, vec!["rev="]);
    // non-list keys keep their scalar form
    assert!(settings.emit_host_root);
}
