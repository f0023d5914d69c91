use crate::error::Result;
use crate::git::CommitHistorySource;
use git2::{ErrorCode, Oid, Reference, Repository, Sort};
use std::path::Path;

/// Commit history read from a git repository through `git2`
pub struct Git2History {
    repo: Repository,
}

impl Git2History {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path)?;

        Ok(Git2History { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Repository) -> Self {
        Git2History { repo }
    }

    /// Resolve a tag to the commit it marks. Annotated tags are peeled.
    ///
    /// A tag name that is not a valid ref name cannot exist and resolves to `None`.
    fn tag_commit(&self, tag: &str) -> Result<Option<Oid>> {
        let refname = format!("refs/tags/{}", tag);
        if !Reference::is_valid_name(&refname) {
            log::debug!("'{}' is not a valid ref name", refname);
            return Ok(None);
        }

        match self.repo.find_reference(&refname) {
            Ok(reference) => Ok(Some(reference.peel_to_commit()?.id())),
            Err(e) if matches!(e.code(), ErrorCode::NotFound | ErrorCode::InvalidSpec) => {
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}

impl CommitHistorySource for Git2History {
    fn tag_exists(&self, tag: &str) -> Result<bool> {
        Ok(self.tag_commit(tag)?.is_some())
    }

    fn oneline_log(&self, tag: &str) -> Result<Vec<String>> {
        let Some(tag_oid) = self.tag_commit(tag)? else {
            log::debug!("tag {} not found, history is empty", tag);
            return Ok(Vec::new());
        };

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TIME)?;
        revwalk.push_head()?;
        revwalk.hide(tag_oid)?;

        let mut lines = Vec::new();
        for oid in revwalk {
            let commit = self.repo.find_commit(oid?)?;
            let short_id = commit.as_object().short_id()?;
            let summary = commit.summary().unwrap_or("");

            lines.push(format!("{} {}", short_id.as_str().unwrap_or(""), summary));
        }

        log::debug!("{} commits since {}", lines.len(), tag);
        Ok(lines)
    }
}
