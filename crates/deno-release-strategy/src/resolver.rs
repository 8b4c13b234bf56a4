use deno_release_core::{ComponentPath, RepositoryRef};
use tracing::{debug, error, warn};

use crate::manifest::{
    DEFAULT_MANIFEST_FILE, DENO_CONFIG_FILES, PackageDescriptor, ResolvedManifest,
};
use crate::traits::ContentSource;
use crate::{Result, StrategyError};

/// Finds the authoritative manifest of a component and derives its package name.
///
/// Resolution runs at most once per resolver; the result is cached for the
/// lifetime of the instance.
#[derive(Debug, Clone)]
pub struct ManifestResolver {
    candidates: Vec<String>,
    path: ComponentPath,
    branch: String,
    repository: RepositoryRef,
    resolved: Option<ResolvedManifest>,
}

impl ManifestResolver {
    #[must_use]
    pub fn new(
        path: ComponentPath,
        branch: impl Into<String>,
        repository: RepositoryRef,
    ) -> Self {
        Self {
            candidates: DENO_CONFIG_FILES.iter().map(ToString::to_string).collect(),
            path,
            branch: branch.into(),
            repository,
            resolved: None,
        }
    }

    #[must_use]
    pub fn with_candidates<I, T>(mut self, candidates: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.candidates = candidates.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    #[must_use]
    pub fn resolved(&self) -> Option<&ResolvedManifest> {
        self.resolved.as_ref()
    }

    /// Returns the first candidate that exists on the branch.
    ///
    /// # Errors
    ///
    /// Returns [`StrategyError::MissingRequiredManifest`] if no candidate
    /// exists. Any source error other than
    /// [`StrategyError::FileNotFound`] is returned as is and stops the scan.
    pub fn resolve<S>(&mut self, source: &S) -> Result<&ResolvedManifest>
    where
        S: ContentSource + ?Sized,
    {
        let manifest = match self.resolved.take() {
            Some(manifest) => manifest,
            None => self.locate(source)?,
        };
        let manifest: &ResolvedManifest = self.resolved.insert(manifest);
        Ok(manifest)
    }

    /// Package name declared by the resolved manifest.
    ///
    /// A manifest that is not valid JSON, or not a JSON object, yields `None`
    /// with a warning instead of an error.
    ///
    /// # Errors
    ///
    /// Returns an error only if resolution itself fails.
    pub fn package_name<S>(&mut self, source: &S) -> Result<Option<String>>
    where
        S: ContentSource + ?Sized,
    {
        let manifest = self.resolve(source)?;

        match PackageDescriptor::parse(&manifest.contents.content) {
            Ok(descriptor) => Ok(descriptor.name),
            Err(e) => {
                warn!(
                    manifest = %manifest.path,
                    error = %e,
                    "failed to parse {}",
                    manifest.file_name
                );
                Ok(None)
            }
        }
    }

    fn locate<S>(&self, source: &S) -> Result<ResolvedManifest>
    where
        S: ContentSource + ?Sized,
    {
        for candidate in &self.candidates {
            let path = self.path.add_path(candidate);
            match source.file_contents_on_branch(&path, &self.branch) {
                Ok(contents) => {
                    debug!(manifest = %path, branch = %self.branch, "resolved manifest");
                    return Ok(ResolvedManifest {
                        file_name: candidate.clone(),
                        path,
                        contents,
                    });
                }
                Err(StrategyError::FileNotFound { .. }) => {
                    debug!(candidate = %path, "manifest candidate not found");
                }
                Err(e) => return Err(e),
            }
        }

        error!(
            candidates = %self.candidates.join(", "),
            repository = %self.repository,
            "no manifest found in the repository"
        );
        let expected = self
            .candidates
            .first()
            .map_or(DEFAULT_MANIFEST_FILE, String::as_str);
        Err(StrategyError::MissingRequiredManifest {
            expected: self.path.add_path(expected),
            repository: self.repository.clone(),
        })
    }
}
