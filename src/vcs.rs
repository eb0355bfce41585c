//! Version-control access for the packager.
//!
//! The packager only needs four capabilities from the enclosing repository:
//! query the dirty state, stage everything, commit, and push. They are
//! modeled as the [`Vcs`] trait so the packaging pipeline can run against a
//! fake repository in tests; [`GitClient`] is the git2-backed implementation
//! used by the CLI.

use std::path::Path;

use git2::{IndexAddOption, ObjectType, Repository, StatusOptions};
use tracing::debug;

use crate::core::errors::{PackError, Result};

/// Version-control capabilities required by the packager.
pub trait Vcs {
    /// Whether the working tree has uncommitted changes to tracked files.
    /// Untracked files do not count as dirty.
    fn is_dirty(&self) -> Result<bool>;

    /// Stage all working-tree changes, including deletions (`git add -A`).
    fn stage_all(&mut self) -> Result<()>;

    /// Commit the staged tree with the given message.
    fn commit(&mut self, message: &str) -> Result<()>;

    /// Push the current branch to the named remote.
    fn push(&mut self, remote: &str) -> Result<()>;
}

/// Git repository client backed by git2.
pub struct GitClient {
    repo: Repository,
}

impl GitClient {
    /// Open the repository enclosing the given path.
    pub fn open(root: &Path) -> Result<Self> {
        let repo = Repository::discover(root).map_err(|err| {
            PackError::git(
                format!("no git repository found at {}", root.display()),
                err,
            )
        })?;
        debug!(repo = %root.display(), "opened repository");
        Ok(Self { repo })
    }

    /// Name of the branch HEAD currently points at.
    fn current_branch(&self) -> Result<String> {
        let head = self.repo.head()?;
        head.shorthand()
            .map(str::to_string)
            .ok_or_else(|| PackError::internal("HEAD does not point at a named branch"))
    }
}

impl Vcs for GitClient {
    fn is_dirty(&self) -> Result<bool> {
        let mut opts = StatusOptions::new();
        opts.include_untracked(false).include_ignored(false);
        let statuses = self
            .repo
            .statuses(Some(&mut opts))
            .map_err(|err| PackError::git("failed to read repository status", err))?;
        Ok(!statuses.is_empty())
    }

    fn stage_all(&mut self) -> Result<()> {
        let mut index = self.repo.index()?;
        index.add_all(["*"], IndexAddOption::DEFAULT, None)?;
        // add_all does not drop deleted files from the index; update_all does.
        index.update_all(["*"], None)?;
        index.write()?;
        debug!("staged all working-tree changes");
        Ok(())
    }

    fn commit(&mut self, message: &str) -> Result<()> {
        let mut index = self.repo.index()?;
        let tree_oid = index.write_tree()?;
        let tree = self.repo.find_tree(tree_oid)?;

        let signature = self
            .repo
            .signature()
            .map_err(|err| PackError::git("no committer identity configured", err))?;

        let head_obj = self.repo.head()?.resolve()?.peel(ObjectType::Commit)?;
        let parent = head_obj
            .into_commit()
            .map_err(|_| PackError::internal("HEAD does not point at a commit"))?;

        let oid = self.repo.commit(
            Some("HEAD"),
            &signature,
            &signature,
            message,
            &tree,
            &[&parent],
        )?;
        debug!(%oid, "created commit");
        Ok(())
    }

    fn push(&mut self, remote: &str) -> Result<()> {
        let branch = self.current_branch()?;
        let mut remote = self
            .repo
            .find_remote(remote)
            .map_err(|err| PackError::git(format!("remote '{remote}' not configured"), err))?;

        let refspec = format!("refs/heads/{branch}:refs/heads/{branch}");
        remote
            .push(&[refspec.as_str()], None)
            .map_err(|err| PackError::git(format!("failed to push branch '{branch}'"), err))?;
        debug!(%branch, "pushed to remote");
        Ok(())
    }
}
