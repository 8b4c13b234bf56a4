use std::fs;
use std::path::Path;

use deno_release_core::{ConventionalCommit, RepositoryRef};
use deno_release_strategy::providers::Git2ContentSource;
use deno_release_strategy::traits::ContentSource;
use deno_release_strategy::{
    BuildUpdatesOptions, DenoStrategy, ReleaseConfig, StrategyConfig, StrategyError,
    StrategyOptions, build_change_set,
};
use semver::Version;
use serde_json::Value;
use tempfile::TempDir;

fn init_repo() -> anyhow::Result<TempDir> {
    let dir = TempDir::new()?;
    let repo = git2::Repository::init(dir.path())?;

    let mut config = repo.config()?;
    config.set_str("user.name", "Test")?;
    config.set_str("user.email", "test@example.com")?;
    repo.remote("origin", "https://github.com/courier-health/deno-test-repo.git")?;

    Ok(dir)
}

fn commit_files(dir: &Path, files: &[(&str, &str)]) -> anyhow::Result<()> {
    let repo = git2::Repository::open(dir)?;
    let mut index = repo.index()?;

    for (path, content) in files {
        let absolute = dir.join(path);
        if let Some(parent) = absolute.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&absolute, content)?;
        index.add_path(Path::new(path))?;
    }
    index.write()?;

    let sig = git2::Signature::now("Test", "test@example.com")?;
    let tree = repo.find_tree(index.write_tree()?)?;
    let parents = match repo.head() {
        Ok(head) => vec![head.peel_to_commit()?],
        Err(_) => Vec::new(),
    };
    let parents: Vec<&git2::Commit<'_>> = parents.iter().collect();
    repo.commit(Some("HEAD"), &sig, &sig, "chore: fixture", &tree, &parents)?;

    Ok(())
}

fn strategy_for(
    source: &Git2ContentSource,
    config: StrategyConfig,
) -> anyhow::Result<DenoStrategy<&Git2ContentSource>> {
    let branch = source.current_branch()?;
    let repository = source
        .repository_ref()?
        .unwrap_or_else(|| RepositoryRef::new("courier-health", "deno-test-repo"));
    let options = StrategyOptions::new(branch, repository).with_config(config);
    Ok(DenoStrategy::new(options, source))
}

fn release_options() -> anyhow::Result<BuildUpdatesOptions> {
    let commit = ConventionalCommit::parse("abc123", "fix: handle missing lockfile (#42)")
        .ok_or_else(|| anyhow::anyhow!("fixture commit should parse"))?;
    Ok(BuildUpdatesOptions::new(Version::new(1, 1, 0))
        .with_changelog_entry("## 1.1.0\n\n### Bug Fixes\n\n* handle missing lockfile (#42)")
        .with_commits(vec![commit]))
}

#[test]
fn package_json_repository_produces_full_update_set() -> anyhow::Result<()> {
    let dir = init_repo()?;
    commit_files(
        dir.path(),
        &[("package.json", "{\"name\":\"deno-test-repo-pkg\"}\n")],
    )?;
    let source = Git2ContentSource::new(dir.path());
    let mut strategy = strategy_for(&source, StrategyConfig::default())?;

    let updates = strategy.build_updates(&release_options()?)?;

    let paths: Vec<&str> = updates.iter().map(|u| u.path.as_str()).collect();
    assert_eq!(
        paths,
        vec![
            "package-lock.json",
            "npm-shrinkwrap.json",
            "samples/package.json",
            "package.json",
            "CHANGELOG.md",
            "changelog.json",
        ]
    );
    Ok(())
}

#[test]
fn change_set_applies_updates_to_committed_files() -> anyhow::Result<()> {
    let dir = init_repo()?;
    commit_files(
        dir.path(),
        &[
            (
                "deno.json",
                "{\n    \"name\": \"@acme/tool\",\n    \"version\": \"1.0.0\"\n}\n",
            ),
            (
                "package-lock.json",
                r#"{
  "name": "@acme/tool",
  "version": "1.0.0",
  "lockfileVersion": 3,
  "packages": {
    "": {
      "name": "@acme/tool",
      "version": "1.0.0"
    }
  }
}
"#,
            ),
            (
                "samples/package.json",
                r#"{
  "name": "samples",
  "dependencies": {
    "@acme/tool": "^1.0.0"
  }
}
"#,
            ),
            ("CHANGELOG.md", "# Changelog\n\n## 1.0.0\n\n* initial release\n"),
        ],
    )?;
    let source = Git2ContentSource::new(dir.path());
    let branch = source.current_branch()?;
    let mut strategy = strategy_for(&source, StrategyConfig::default())?;

    let updates = strategy.build_updates(&release_options()?)?;
    let changes = build_change_set(&updates, &source, &branch)?;

    let paths: Vec<&str> = changes.keys().map(String::as_str).collect();
    assert_eq!(
        paths,
        vec![
            "package-lock.json",
            "samples/package.json",
            "deno.json",
            "CHANGELOG.md",
        ]
    );

    let manifest = &changes["deno.json"];
    assert_eq!(
        manifest.content,
        "{\n    \"name\": \"@acme/tool\",\n    \"version\": \"1.1.0\"\n}\n"
    );
    assert_eq!(manifest.mode, "100644");

    let lock: Value = serde_json::from_str(&changes["package-lock.json"].content)?;
    assert_eq!(lock["version"], "1.1.0");
    assert_eq!(lock["packages"][""]["version"], "1.1.0");

    let samples: Value = serde_json::from_str(&changes["samples/package.json"].content)?;
    assert_eq!(samples["dependencies"]["@acme/tool"], "^1.1.0");

    let changelog = &changes["CHANGELOG.md"].content;
    let new_entry = changelog.find("## 1.1.0").expect("new entry");
    let old_entry = changelog.find("## 1.0.0").expect("old entry");
    assert!(new_entry < old_entry);
    Ok(())
}

#[test]
fn deno_json_takes_precedence_over_package_json() -> anyhow::Result<()> {
    let dir = init_repo()?;
    commit_files(
        dir.path(),
        &[
            ("package.json", r#"{"name":"from-package-json"}"#),
            ("deno.json", r#"{"name":"@acme/from-deno-json"}"#),
        ],
    )?;
    let source = Git2ContentSource::new(dir.path());
    let mut strategy = strategy_for(&source, StrategyConfig::default())?;

    assert_eq!(
        strategy.default_package_name()?,
        Some("@acme/from-deno-json".to_string())
    );
    assert_eq!(strategy.component()?, "from-deno-json");
    assert_eq!(
        strategy.resolved_manifest().map(|m| m.path.as_str()),
        Some("deno.json")
    );
    Ok(())
}

#[test]
fn missing_manifest_reports_expected_path() -> anyhow::Result<()> {
    let dir = init_repo()?;
    commit_files(dir.path(), &[("README.md", "# nothing to release\n")])?;
    let source = Git2ContentSource::new(dir.path());
    let mut strategy = strategy_for(&source, StrategyConfig::default().with_path("packages/api"))?;

    let result = strategy.build_updates(&release_options()?);

    match result {
        Err(StrategyError::MissingRequiredManifest {
            expected,
            repository,
        }) => {
            assert_eq!(expected, "packages/api/deno.json");
            assert_eq!(repository.to_string(), "courier-health/deno-test-repo");
        }
        other => panic!("expected MissingRequiredManifest, got {other:?}"),
    }
    Ok(())
}

#[test]
fn git_source_distinguishes_missing_files() -> anyhow::Result<()> {
    let dir = init_repo()?;
    commit_files(dir.path(), &[("deno.json", "{}")])?;
    let source = Git2ContentSource::new(dir.path());
    let branch = source.current_branch()?;

    let missing = source.file_contents_on_branch("deno.jsonc", &branch);
    assert!(matches!(missing, Err(StrategyError::FileNotFound { .. })));

    let bad_branch = source.file_contents_on_branch("deno.json", "no-such-branch");
    assert!(matches!(bad_branch, Err(StrategyError::Git(_))));
    Ok(())
}

#[test]
fn release_config_drives_component_strategies() -> anyhow::Result<()> {
    let dir = init_repo()?;
    commit_files(
        dir.path(),
        &[
            ("packages/api/deno.jsonc", r#"{"name":"@acme/api"}"#),
            ("packages/web/package.json", r#"{"name":"@acme/web"}"#),
        ],
    )?;
    let config_path = dir.path().join("release-please-config.json");
    fs::write(
        &config_path,
        r#"{
  "packages": {
    "packages/api": { "skip-changelog": true },
    "packages/web": { "changelog-path": "HISTORY.md" }
  }
}"#,
    )?;
    let config = ReleaseConfig::from_file(&config_path)?;
    let source = Git2ContentSource::new(dir.path());

    let mut api = strategy_for(&source, config.packages["packages/api"].clone())?;
    let api_updates = api.build_updates(&release_options()?)?;
    let api_paths: Vec<&str> = api_updates.iter().map(|u| u.path.as_str()).collect();
    assert_eq!(
        api_paths,
        vec![
            "packages/api/package-lock.json",
            "packages/api/npm-shrinkwrap.json",
            "packages/api/samples/package.json",
            "packages/api/deno.jsonc",
        ]
    );

    let mut web = strategy_for(&source, config.packages["packages/web"].clone())?;
    let web_updates = web.build_updates(&release_options()?)?;
    let web_paths: Vec<&str> = web_updates.iter().map(|u| u.path.as_str()).collect();
    assert_eq!(
        web_paths,
        vec![
            "packages/web/package-lock.json",
            "packages/web/npm-shrinkwrap.json",
            "packages/web/samples/package.json",
            "packages/web/package.json",
            "packages/web/HISTORY.md",
            "changelog.json",
        ]
    );
    Ok(())
}
