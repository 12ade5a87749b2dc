use anyhow::Result;
use clap::Parser;
use crawl_seed::cli::{run, Cli};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn cli_for(input: &Path, output: &Path) -> Cli {
    Cli::try_parse_from([
        "crawl_seed",
        "-l",
        input.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
    ])
    .unwrap()
}

#[test]
fn test_missing_arguments_are_usage_errors() {
    assert!(Cli::try_parse_from(["crawl_seed"]).is_err());
    assert!(Cli::try_parse_from(["crawl_seed", "-l", "in.txt"]).is_err());
    assert!(Cli::try_parse_from(["crawl_seed", "-o", "out.txt"]).is_err());
}

#[test]
fn test_parse_all_arguments() {
    let cli = Cli::try_parse_from([
        "crawl_seed", "-l", "in.txt", "-o", "out.txt", "-c", "seed.toml", "-w", "4", "--log-dir",
        "logs",
    ])
    .unwrap();

    assert_eq!(cli.input.to_str(), Some("in.txt"));
    assert_eq!(cli.output.to_str(), Some("out.txt"));
    assert_eq!(cli.config.as_deref().and_then(|p| p.to_str()), Some("seed.toml"));
    assert_eq!(cli.workers, Some(4));
    assert_eq!(cli.log_dir.as_deref().and_then(|p| p.to_str()), Some("logs"));
}

#[tokio::test]
async fn test_end_to_end() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("urls.txt");
    let output = dir.path().join("seeds.txt");
    fs::write(
        &input,
        concat!(
            "  http://x.com/a/b/c.php?id=1\r\n\n",
            "http://x.com/a/b/c.php?id=2\n",
            "not a url\n",
            "http://x.com/img.png?t=1\n",
        ),
    )?;

    let cli = Cli::try_parse_from([
        "crawl_seed",
        "-l",
        input.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
        "-w",
        "2",
    ])?;
    let report = run(&cli).await?;

    assert_eq!(
        fs::read_to_string(&output)?,
        "http://x.com/\nhttp://x.com/a/\nhttp://x.com/a/b/\nhttp://x.com/a/b/c.php?id=1\n"
    );
    assert_eq!(report.lines, 4);
    assert_eq!(report.rejected, 1);
    assert!(report.timings.get("read").is_some());
    assert!(report.timings.get("write").is_some());

    // no temp file left behind
    let leftovers: Vec<_> = fs::read_dir(dir.path())?
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_output_is_replaced_not_appended() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("urls.txt");
    let output = dir.path().join("seeds.txt");
    fs::write(&input, "http://h/a/\n")?;
    fs::write(&output, "stale\nlines\n")?;

    let cli = cli_for(&input, &output);
    run(&cli).await?;

    assert_eq!(fs::read_to_string(&output)?, "http://h/\nhttp://h/a/\n");
    Ok(())
}

#[tokio::test]
async fn test_missing_input_is_fatal() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("missing.txt");
    let output = dir.path().join("seeds.txt");

    let cli = cli_for(&input, &output);
    let err = run(&cli).await.unwrap_err();

    assert!(format!("{:#}", err).contains("missing.txt"));
    assert!(!output.exists());
}

#[tokio::test]
async fn test_unwritable_output_is_fatal() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("urls.txt");
    fs::write(&input, "http://h/a/\n").unwrap();
    let output = dir.path().join("no_such_dir").join("seeds.txt");

    let cli = cli_for(&input, &output);
    let err = run(&cli).await.unwrap_err();

    assert!(format!("{:#}", err).contains("Failed to write output file"));
}

#[tokio::test]
async fn test_config_file_changes_policy() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("urls.txt");
    let output = dir.path().join("seeds.txt");
    let config = dir.path().join("seed.toml");
    fs::write(&input, "http://h/a/b/data.json?page=2\nhttp://h/a/b/page.php?id=1\n")?;
    fs::write(
        &config,
        "retained_extensions = [\".json\"]\nmax_stem_segments = 1\nemit_host_root = false\n",
    )?;

    let cli = Cli::try_parse_from([
        "crawl_seed",
        "-l",
        input.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
        "-c",
        config.to_str().unwrap(),
    ])?;
    run(&cli).await?;

    assert_eq!(
        fs::read_to_string(&output)?,
        "http://h/a/\nhttp://h/a/b/\nhttp://h/a/b/data.json?page=2\n"
    );
    Ok(())
}
