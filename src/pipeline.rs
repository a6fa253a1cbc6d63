//! Publish workflow orchestration
//!
//! Ties the pieces together: version selection per component, checkout
//! and copy of each selected docs tree into the site's content
//! directory, revision metadata for the templating layer, the site
//! build, and the commit to the publishing repository.
//!
//! Checkouts of a component's working copy are strictly sequential; a
//! working copy is never shared between components.

use std::fs;
use std::path::Path;

use crate::config::{ComponentConfig, Config, SelectionConfig, SelectionModeConfig};
use crate::domain::{build_revisions, Revision};
use crate::error::{DocsPublishError, Result};
use crate::git::{Git2Repository, SourceControl};
use crate::hugo::HugoClient;
use crate::selector::{self, SelectionMode};
use crate::ui;

/// Arguments for a pipeline run
///
/// Mirrors the CLI Args but in a format suitable for orchestration
/// logic, so the workflow can be called without depending on clap.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PipelineArgs {
    /// Restrict the run to a single named component
    pub component: Option<String>,

    /// Select and report only; no copy, build, or commit
    pub dry_run: bool,

    /// Build the site but leave the publishing repository uncommitted
    pub skip_commit: bool,
}

/// Per-component result of a pipeline run
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentOutcome {
    pub name: String,

    /// Revisions whose docs tree was published, in publish order
    pub published: Vec<Revision>,

    /// Versions skipped because their checkout had no docs tree
    pub skipped: Vec<String>,
}

/// Result of a whole pipeline run
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutcome {
    pub components: Vec<ComponentOutcome>,

    /// Whether the publishing repository was committed
    pub committed: bool,
}

/// Resolve the publishable versions for one component.
///
/// In derived-window mode the set comes from the repository's tags,
/// with the in-development version (read from the component's version
/// file on its development branch) appended last. In explicit-list mode
/// the set is read verbatim from `{component}-doc-versions.txt` in the
/// generator repository.
pub fn resolve_component_versions<S: SourceControl>(
    repo: &S,
    generator_repo: &Path,
    component: &ComponentConfig,
    selection: &SelectionConfig,
) -> Result<Vec<String>> {
    match selection.mode {
        SelectionModeConfig::DerivedWindow => {
            let tags = repo.list_tags()?;
            let mode = SelectionMode::DerivedWindow {
                window_size: selection.window_size,
            };
            let mut versions = mode.publishable_versions(&tags)?;

            repo.checkout(&component.branch)?;
            let version_file = component.repo.join(&component.version_file);
            let contents = fs::read_to_string(&version_file).map_err(|e| {
                DocsPublishError::config(format!(
                    "cannot read version file {}: {}",
                    version_file.display(),
                    e
                ))
            })?;
            versions.push(selector::resolve_current_development_version(&contents)?);

            Ok(versions)
        }
        SelectionModeConfig::ExplicitList => {
            let list_path = generator_repo.join(format!("{}-doc-versions.txt", component.name));
            let contents = fs::read_to_string(&list_path).map_err(|e| {
                DocsPublishError::config(format!(
                    "cannot read version list {}: {}",
                    list_path.display(),
                    e
                ))
            })?;
            let versions: Vec<String> = contents
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(str::to_string)
                .collect();

            SelectionMode::ExplicitList { versions }.publishable_versions(&[])
        }
    }
}

/// Publish one component: check out each selected revision and copy its
/// docs tree into the site content directory, then write the revision
/// metadata the templates consume.
///
/// Revisions whose checkout carries no `docs_dir` or no `_index.md`
/// inside it are skipped with a notice and left out of the metadata, so
/// the data layer never points at unpublished content.
pub fn publish_component<S: SourceControl>(
    repo: &S,
    component: &ComponentConfig,
    versions: &[String],
    hugo: &HugoClient,
) -> Result<ComponentOutcome> {
    ui::display_status(&format!("copy docs for {}", component.name));

    let revisions = build_revisions(&component.name, versions);
    let mut published = Vec::new();
    let mut skipped = Vec::new();

    let last_index = revisions.len().saturating_sub(1);
    for (i, revision) in revisions.iter().enumerate() {
        // Released revisions check out their tag; the current entry has
        // no tag yet and checks out the development branch.
        let refname = if i == last_index {
            component.branch.as_str()
        } else {
            revision.version.as_str()
        };
        repo.checkout(refname)?;

        let src_dir = component.repo.join(&component.docs_dir);
        if !src_dir.is_dir() {
            ui::display_skip(&format!(
                "version {}: {} doesn't exist",
                revision.version,
                src_dir.display()
            ));
            skipped.push(revision.version.clone());
            continue;
        }
        if !src_dir.join("_index.md").is_file() {
            ui::display_skip(&format!(
                "version {}: {}/_index.md doesn't exist",
                revision.version,
                src_dir.display()
            ));
            skipped.push(revision.version.clone());
            continue;
        }

        ui::display_status(&format!("copy version {}", revision.version));
        let dst_dir = hugo.content_dir().join(&revision.dir_path);
        copy_dir_recursive(&src_dir, &dst_dir)?;
        published.push(revision.clone());
    }

    write_revision_data(&component.name, &published, &hugo.data_dir())?;

    Ok(ComponentOutcome {
        name: component.name.clone(),
        published,
        skipped,
    })
}

/// Serialize a component's published revisions for the site generator's
/// data layer.
fn write_revision_data(component: &str, revisions: &[Revision], data_dir: &Path) -> Result<()> {
    fs::create_dir_all(data_dir)?;
    let data_path = data_dir.join(format!("{}-revisions.json", component));
    let json = serde_json::to_string(revisions)
        .map_err(|e| DocsPublishError::publish(format!("cannot serialize revisions: {}", e)))?;
    fs::write(&data_path, json)?;
    Ok(())
}

/// Copy a directory subtree, creating missing destination directories.
/// Existing destination files are overwritten.
fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<()> {
    fs::create_dir_all(dst)?;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let target = dst.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir_recursive(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}

/// Run the whole pipeline: publish every configured component, build
/// the site, and commit the publishing repository.
///
/// A component that fails leaves nothing half-published: the error
/// aborts the run before the build and commit steps.
pub fn run_publish_pipeline(config: &Config, args: &PipelineArgs) -> Result<PipelineOutcome> {
    let components: Vec<&ComponentConfig> = match &args.component {
        Some(name) => {
            let found: Vec<_> = config
                .components
                .iter()
                .filter(|c| &c.name == name)
                .collect();
            if found.is_empty() {
                return Err(DocsPublishError::config(format!(
                    "component '{}' is not configured",
                    name
                )));
            }
            found
        }
        None => config.components.iter().collect(),
    };

    if components.is_empty() {
        return Err(DocsPublishError::config("no components configured"));
    }

    let hugo = HugoClient::new(
        &config.site.generator_repo,
        &config.site.output_repo,
        config.site.hugo_bin.clone(),
    );
    if !args.dry_run {
        hugo.locate()?;
    }

    let mut outcomes = Vec::new();
    for component in components {
        let repo = Git2Repository::open(&component.repo)?;
        let versions = resolve_component_versions(
            &repo,
            &config.site.generator_repo,
            component,
            &config.selection,
        )?;

        if args.dry_run {
            let revisions = build_revisions(&component.name, &versions);
            let listing: Vec<(String, String)> = revisions
                .iter()
                .map(|r| (r.version.clone(), r.dir_path.clone()))
                .collect();
            ui::display_selected_revisions(&component.name, &listing);
            outcomes.push(ComponentOutcome {
                name: component.name.clone(),
                published: revisions,
                skipped: Vec::new(),
            });
            continue;
        }

        outcomes.push(publish_component(&repo, component, &versions, &hugo)?);
    }

    if args.dry_run {
        return Ok(PipelineOutcome {
            components: outcomes,
            committed: false,
        });
    }

    ui::display_status("starting hugo build");
    hugo.build()?;
    ui::display_success("hugo build finished");

    let committed = if args.skip_commit {
        false
    } else {
        ui::display_status(&format!(
            "committing changes to {}",
            config.site.output_repo.display()
        ));
        let output_repo = Git2Repository::open(&config.site.output_repo)?;
        output_repo.add_all_and_commit(&config.site.commit_message)?;
        ui::display_success(&format!("committed {}", output_repo.head_hash()?));
        true
    };

    Ok(PipelineOutcome {
        components: outcomes,
        committed,
    })
}
