use deno_release_core::RepositoryRef;

use crate::{Repository, Result};

impl Repository {
    /// # Errors
    ///
    /// Returns an error if the remote lookup fails.
    pub fn remote_url(&self) -> Result<Option<String>> {
        let Ok(remote) = self.inner.find_remote("origin") else {
            return Ok(None);
        };

        Ok(remote.url().map(String::from))
    }

    /// Owner and name of the `origin` remote, when it has a recognizable URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the remote lookup fails.
    pub fn repository_ref(&self) -> Result<Option<RepositoryRef>> {
        Ok(self
            .remote_url()?
            .and_then(|url| RepositoryRef::from_remote_url(&url).ok()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::tests::setup_test_repo;

    #[test]
    fn remote_url_returns_none_when_no_remote() -> anyhow::Result<()> {
        let (_dir, repo) = setup_test_repo()?;

        assert!(repo.remote_url()?.is_none());
        assert!(repo.repository_ref()?.is_none());

        Ok(())
    }

    #[test]
    fn repository_ref_from_origin() -> anyhow::Result<()> {
        let (dir, repo) = setup_test_repo()?;

        repo.inner
            .remote("origin", "git@github.com:courier-health/deno-test-repo.git")?;

        let repository = Repository::open(dir.path())?;

        assert_eq!(
            repository.remote_url()?.as_deref(),
            Some("git@github.com:courier-health/deno-test-repo.git")
        );
        assert_eq!(
            repository.repository_ref()?,
            Some(RepositoryRef::new("courier-health", "deno-test-repo"))
        );

        Ok(())
    }
}
