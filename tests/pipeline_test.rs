// tests/pipeline_test.rs
//
// End-to-end component publishing over real temporary git repositories.

use std::fs;
use std::path::Path;

use git2::Repository;
use tempfile::TempDir;

use docs_publish::config::{ComponentConfig, SelectionConfig};
use docs_publish::git::{Git2Repository, SourceControl};
use docs_publish::hugo::HugoClient;
use docs_publish::pipeline::{publish_component, resolve_component_versions};

/// Stage the whole working tree and commit it, returning the commit id.
fn commit_all(repo: &Repository, message: &str) -> git2::Oid {
    let mut index = repo.index().expect("Could not get index");
    index
        .add_all(["*"].iter(), git2::IndexAddOption::DEFAULT, None)
        .expect("Could not stage files");
    index.write().expect("Could not write index");

    let tree_id = index.write_tree().expect("Could not write tree");
    let tree = repo.find_tree(tree_id).expect("Could not find tree");
    let sig = repo.signature().expect("Could not get sig");

    let parent = repo
        .head()
        .ok()
        .and_then(|head| head.peel_to_commit().ok());
    let parents: Vec<&git2::Commit> = parent.iter().collect();

    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
        .expect("Could not create commit")
}

/// Set up a component repository with two tagged releases and an
/// in-development state on the default branch.
///
/// - tag 0.1.0: docs for the first release, VERSION 0.2.0-dev
/// - tag 0.2.0: reworked docs, VERSION 0.3.0-dev
/// - branch head == 0.2.0
fn setup_component_repo(dir: &Path) -> String {
    let repo = Repository::init(dir).expect("Could not init git repo");

    {
        let mut config = repo.config().expect("Could not get config");
        config
            .set_str("user.name", "Test User")
            .expect("Could not set user.name");
        config
            .set_str("user.email", "test@example.com")
            .expect("Could not set user.email");
    }

    fs::create_dir_all(dir.join("docs")).expect("Could not create docs dir");
    fs::write(dir.join("docs/_index.md"), "# Hub 0.1.0\n").unwrap();
    fs::write(dir.join("VERSION"), "0.2.0-dev\n").unwrap();
    let first = commit_all(&repo, "release 0.1.0");
    repo.tag_lightweight("0.1.0", &repo.find_object(first, None).unwrap(), false)
        .expect("Could not create tag");

    fs::write(dir.join("docs/_index.md"), "# Hub 0.2.0\n").unwrap();
    fs::write(dir.join("docs/upgrade.md"), "upgrade notes\n").unwrap();
    fs::write(dir.join("VERSION"), "0.3.0-dev\n").unwrap();
    let second = commit_all(&repo, "release 0.2.0");
    repo.tag_lightweight("0.2.0", &repo.find_object(second, None).unwrap(), false)
        .expect("Could not create tag");

    // The default branch name depends on the environment; report what
    // libgit2 actually created.
    let branch = repo
        .head()
        .unwrap()
        .shorthand()
        .expect("HEAD has no name")
        .to_string();
    branch
}

fn component_config(dir: &Path, branch: String) -> ComponentConfig {
    ComponentConfig {
        name: "hub".to_string(),
        repo: dir.to_path_buf(),
        branch,
        version_file: "VERSION".to_string(),
        docs_dir: "docs".to_string(),
    }
}

#[test]
fn test_derived_window_over_real_repository() {
    let temp = TempDir::new().unwrap();
    let branch = setup_component_repo(temp.path());

    let repo = Git2Repository::open(temp.path()).unwrap();
    let component = component_config(temp.path(), branch);
    let selection = SelectionConfig::default();

    let versions =
        resolve_component_versions(&repo, Path::new("/nonexistent"), &component, &selection)
            .unwrap();

    assert_eq!(versions, vec!["0.1.0", "0.2.0", "0.3.0-dev"]);
}

#[test]
fn test_publish_component_checks_out_each_revision() {
    let temp = TempDir::new().unwrap();
    let component_dir = temp.path().join("hub");
    let site_dir = temp.path().join("website");
    fs::create_dir_all(&component_dir).unwrap();
    let branch = setup_component_repo(&component_dir);

    let repo = Git2Repository::open(&component_dir).unwrap();
    let component = component_config(&component_dir, branch);
    let hugo = HugoClient::new(&site_dir, &temp.path().join("out"), "hugo");

    let versions = vec![
        "0.1.0".to_string(),
        "0.2.0".to_string(),
        "0.3.0-dev".to_string(),
    ];
    let outcome = publish_component(&repo, &component, &versions, &hugo).unwrap();

    assert_eq!(outcome.published.len(), 3);
    assert!(outcome.skipped.is_empty());

    // Each content directory holds the docs as of that revision.
    let archived = fs::read_to_string(site_dir.join("hugo/content/hub-docs-0.1.0/_index.md"))
        .expect("archived docs should be published");
    assert!(archived.contains("0.1.0"));
    assert!(!site_dir
        .join("hugo/content/hub-docs-0.1.0/upgrade.md")
        .exists());

    let current = fs::read_to_string(site_dir.join("hugo/content/hub-docs/_index.md"))
        .expect("current docs should be published");
    assert!(current.contains("0.2.0"));
    assert!(site_dir.join("hugo/content/hub-docs/upgrade.md").is_file());

    let data = fs::read_to_string(site_dir.join("hugo/data/hub-revisions.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&data).unwrap();
    assert_eq!(parsed[2]["version"], "0.3.0-dev");
    assert_eq!(parsed[2]["url"], "/hub-docs");
}

#[test]
fn test_tag_listing_includes_all_tags() {
    let temp = TempDir::new().unwrap();
    setup_component_repo(temp.path());

    let repo = Git2Repository::open(temp.path()).unwrap();
    let mut tags = repo.list_tags().unwrap();
    tags.sort();
    assert_eq!(tags, vec!["0.1.0", "0.2.0"]);
}

#[test]
fn test_add_all_and_commit_on_publishing_repo() {
    let temp = TempDir::new().unwrap();
    setup_component_repo(temp.path());

    let repo = Git2Repository::open(temp.path()).unwrap();
    let before = repo.head_hash().unwrap();

    fs::write(temp.path().join("docs/new-page.md"), "generated\n").unwrap();
    repo.add_all_and_commit("updates website").unwrap();

    let after = repo.head_hash().unwrap();
    assert_ne!(before, after);

    let raw = Repository::open(temp.path()).unwrap();
    let head = raw.head().unwrap().peel_to_commit().unwrap();
    assert_eq!(head.message().unwrap(), "updates website");
}

#[test]
fn test_checkout_unknown_ref_fails() {
    let temp = TempDir::new().unwrap();
    setup_component_repo(temp.path());

    let repo = Git2Repository::open(temp.path()).unwrap();
    assert!(repo.checkout("9.9.9").is_err());
}
