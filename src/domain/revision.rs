use serde::Serialize;

/// One published documentation snapshot: a selected version together with
/// the content directory it is copied to and the URL it is served under.
///
/// Serialized as-is into the site generator's data layer, so field names
/// match what the templates expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Revision {
    pub version: String,
    #[serde(rename = "dirPath")]
    pub dir_path: String,
    pub url: String,
}

impl Revision {
    /// Revision for the newest (current) version of a component.
    /// Maps into the unversioned `{component}-docs` directory.
    pub fn current(component: &str, version: impl Into<String>) -> Self {
        let dir_path = format!("{}-docs", component);
        Revision {
            version: version.into(),
            url: format!("/{}", dir_path),
            dir_path,
        }
    }

    /// Revision for an older kept version of a component.
    /// Maps into `{component}-docs-{version}`.
    pub fn archived(component: &str, version: impl Into<String>) -> Self {
        let version = version.into();
        let dir_path = format!("{}-docs-{}", component, version);
        Revision {
            version,
            url: format!("/{}", dir_path),
            dir_path,
        }
    }
}

/// Build revision records for a component from the selector's output.
///
/// `versions` must be in publish order: oldest kept first, the current
/// (development) version last. Every entry but the last maps to a
/// versioned directory; the last one takes the component's unversioned
/// docs directory.
pub fn build_revisions(component: &str, versions: &[String]) -> Vec<Revision> {
    let mut revisions = Vec::with_capacity(versions.len());

    if let Some((current, older)) = versions.split_last() {
        for version in older {
            revisions.push(Revision::archived(component, version.clone()));
        }
        revisions.push(Revision::current(component, current.clone()));
    }

    revisions
}
