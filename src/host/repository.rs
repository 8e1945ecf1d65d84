use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::{prefix::PrefixError, tools::cli::CliExecutor};

/// Name of the file git keeps the pending commit message in
static COMMIT_MESSAGE_FILE: &str = "COMMIT_EDITMSG";

/// A repository exposing its pending commit message
pub trait Repository {
    fn commit_message(&self) -> &str;
    fn set_commit_message(&mut self, message: String) -> Result<(), PrefixError>;
}

/// The pending commit message of a git repository, backed by a message file.
///
/// Git comment lines and the blank lines before them are kept apart as a trailer, so only the
/// message text is exposed and the comments are written back unchanged.
#[derive(Debug)]
pub struct GitRepository {
    message_file: PathBuf,
    message: String,
    trailer: String,
}

impl GitRepository {
    /// Find the repository containing `dir`; `None` when `dir` is not inside one.
    pub async fn discover(dir: impl AsRef<Path>) -> Result<Option<Self>, PrefixError> {
        let dir = dir.as_ref();
        let git_dir = match CliExecutor::in_dir(dir)
            .execute("git", &["rev-parse", "--absolute-git-dir"])
            .await
        {
            Ok(git_dir) if !git_dir.is_empty() => PathBuf::from(git_dir),
            Ok(_) => return Ok(None),
            Err(e) => {
                debug!(?dir, %e, "No git repository found");
                return Ok(None);
            }
        };

        debug!(?git_dir, "Repository found");
        Self::from_message_file(git_dir.join(COMMIT_MESSAGE_FILE)).map(Some)
    }

    /// Open a commit message file directly, as passed to the `prepare-commit-msg` hook
    pub fn from_message_file(path: impl Into<PathBuf>) -> Result<Self, PrefixError> {
        let message_file = path.into();
        let content = if message_file.exists() {
            std::fs::read_to_string(&message_file)?
        } else {
            debug!(?message_file, "Commit message file not found, starting empty");
            String::new()
        };

        let (message, trailer) = split_trailer(&content);
        Ok(Self {
            message: message.to_string(),
            trailer: trailer.to_string(),
            message_file,
        })
    }

    pub fn message_file(&self) -> &Path {
        &self.message_file
    }
}

impl Repository for GitRepository {
    fn commit_message(&self) -> &str {
        &self.message
    }

    fn set_commit_message(&mut self, message: String) -> Result<(), PrefixError> {
        let content = if self.trailer.is_empty() {
            format!("{}\n", message)
        } else if self.trailer.starts_with('\n') {
            format!("{}{}", message, self.trailer)
        } else {
            // The comments start on the first line, keep them off the subject
            format!("{}\n{}", message, self.trailer)
        };

        std::fs::write(&self.message_file, content)?;
        info!(file = ?self.message_file, "Commit message updated");
        self.message = message;
        Ok(())
    }
}

/// Split the file content into the message and the comment trailer, such that
/// `message + trailer == content`.
fn split_trailer(content: &str) -> (&str, &str) {
    let mut offset = 0;
    for line in content.split_inclusive('\n') {
        if line.starts_with('#') {
            break;
        }
        offset += line.len();
    }

    let message = content[..offset].trim_end();
    (message, &content[message.len()..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_trailer() {
        let content = "fix: bug\n\nbody\n\n# Please enter the commit message\n# Lines starting\n";
        let (message, trailer) = split_trailer(content);

        assert_eq!(message, "fix: bug\n\nbody");
        assert_eq!(trailer, "\n\n# Please enter the commit message\n# Lines starting\n");
        assert_eq!(format!("{message}{trailer}"), content);
    }

    #[test]
    fn test_split_without_comments() {
        assert_eq!(split_trailer("fix: bug\n"), ("fix: bug", "\n"));
        assert_eq!(split_trailer(""), ("", ""));
        assert_eq!(split_trailer("\n# only comments\n"), ("", "\n# only comments\n"));
    }

    #[test]
    fn test_message_file_round_trip() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("COMMIT_EDITMSG");
        std::fs::write(&path, "old bug\n\n# comment\n").expect("write message");

        let mut repository = GitRepository::from_message_file(&path).expect("open message file");
        assert_eq!(repository.commit_message(), "old bug");

        repository
            .set_commit_message("fix: old bug".to_string())
            .expect("write message");

        assert_eq!(
            std::fs::read_to_string(&path).expect("read message"),
            "fix: old bug\n\n# comment\n"
        );
        assert_eq!(repository.commit_message(), "fix: old bug");
    }

    #[test]
    fn test_message_file_starting_with_comments() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("COMMIT_EDITMSG");
        std::fs::write(&path, "# Please enter the commit message\n# second\n")
            .expect("write message");

        let mut repository = GitRepository::from_message_file(&path).expect("open message file");
        assert_eq!(repository.commit_message(), "");

        repository
            .set_commit_message("feat:".to_string())
            .expect("write message");

        assert_eq!(
            std::fs::read_to_string(&path).expect("read message"),
            "feat:\n# Please enter the commit message\n# second\n"
        );
    }

    #[test]
    fn test_missing_message_file_is_empty() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("COMMIT_EDITMSG");

        let mut repository = GitRepository::from_message_file(&path).expect("open message file");
        assert_eq!(repository.commit_message(), "");

        repository
            .set_commit_message("feat:".to_string())
            .expect("write message");
        assert_eq!(std::fs::read_to_string(&path).expect("read message"), "feat:\n");
    }

    #[tokio::test]
    async fn test_discover_outside_repository() {
        let dir = tempfile::tempdir().expect("temp dir");

        let repository = GitRepository::discover(dir.path())
            .await
            .expect("discover repository");

        assert!(repository.is_none());
    }

    #[tokio::test]
    async fn test_discover_repository() {
        let dir = tempfile::tempdir().expect("temp dir");
        if CliExecutor::in_dir(dir.path())
            .execute("git", &["init", "-q"])
            .await
            .is_err()
        {
            // git is not installed
            return;
        }

        let repository = GitRepository::discover(dir.path())
            .await
            .expect("discover repository")
            .expect("repository found");

        assert!(repository.message_file().ends_with(".git/COMMIT_EDITMSG"));
        assert_eq!(repository.commit_message(), "");
    }
}
