//! Integration tests for the guidepack CLI
//!
//! These tests drive the binary end to end against real temporary git
//! repositories with a local bare `origin` remote, covering the
//! confirmation gate, the dirty-repository abort, and the full
//! package-commit-push sequence.

use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use git2::{IndexAddOption, Repository};
use predicates::prelude::*;
use tempfile::TempDir;
use zip::ZipArchive;

/// Test helper to get the CLI binary
fn guidepack_cmd() -> Command {
    Command::cargo_bin("guidepack").unwrap()
}

/// A tutorial repository on disk: `<root>/LICENSE.md`,
/// `<root>/code/chapter-<N>/UntitledGuiGuide_1.1.<N>/`, one initial commit,
/// and a local bare repository registered as `origin`.
struct Fixture {
    _temp: TempDir,
    root: PathBuf,
    work_dir: PathBuf,
    remote_dir: PathBuf,
}

impl Fixture {
    fn new(chapters: &[&str]) -> Self {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("tutorial");
        let work_dir = root.join("code");
        fs::create_dir_all(&work_dir).unwrap();
        fs::write(root.join("LICENSE.md"), "MIT License\n").unwrap();

        for number in chapters {
            let code_folder = work_dir
                .join(format!("chapter-{number}"))
                .join(format!("UntitledGuiGuide_1.1.{number}"));
            fs::create_dir_all(&code_folder).unwrap();
            fs::write(
                code_folder.join("main.swift"),
                format!("// example code for chapter {number}\n"),
            )
            .unwrap();
        }

        let repo = Repository::init(&root).unwrap();
        {
            let mut config = repo.config().unwrap();
            config.set_str("user.name", "Test Author").unwrap();
            config.set_str("user.email", "author@example.com").unwrap();
        }
        commit_everything(&repo, "initial import");

        let remote_dir = temp.path().join("origin.git");
        Repository::init_bare(&remote_dir).unwrap();
        repo.remote("origin", remote_dir.to_str().unwrap()).unwrap();

        Self {
            _temp: temp,
            root,
            work_dir,
            remote_dir,
        }
    }

    fn zip_path(&self, number: &str) -> PathBuf {
        self.work_dir
            .join(format!("chapter-{number}"))
            .join(format!("UntitledGuiGuide_1.1.{number}.zip"))
    }

    fn code_folder(&self, number: &str) -> PathBuf {
        self.work_dir
            .join(format!("chapter-{number}"))
            .join(format!("UntitledGuiGuide_1.1.{number}"))
    }

    /// Message of the tip commit on the remote's branch.
    fn remote_head_message(&self) -> Option<String> {
        let local = Repository::open(&self.root).unwrap();
        let branch = local.head().unwrap().shorthand().unwrap().to_string();
        let remote = Repository::open_bare(&self.remote_dir).unwrap();
        let branch = remote.find_branch(&branch, git2::BranchType::Local).ok()?;
        let commit = branch.get().peel_to_commit().unwrap();
        Some(commit.message().unwrap().to_string())
    }
}

fn commit_everything(repo: &Repository, message: &str) {
    let mut index = repo.index().unwrap();
    index.add_all(["*"], IndexAddOption::DEFAULT, None).unwrap();
    index.write().unwrap();
    let tree = repo.find_tree(index.write_tree().unwrap()).unwrap();
    let signature = repo.signature().unwrap();
    let parents = match repo.head() {
        Ok(head) => vec![head.peel_to_commit().unwrap()],
        Err(_) => vec![],
    };
    let parent_refs: Vec<_> = parents.iter().collect();
    repo.commit(Some("HEAD"), &signature, &signature, message, &tree, &parent_refs)
        .unwrap();
}

fn zip_entry_names(path: &Path) -> Vec<String> {
    let mut archive = ZipArchive::new(File::open(path).unwrap()).unwrap();
    (0..archive.len())
        .map(|i| archive.by_index(i).unwrap().name().to_string())
        .collect()
}

#[test]
fn test_declined_confirmation_does_nothing() {
    let fixture = Fixture::new(&["1"]);

    guidepack_cmd()
        .current_dir(&fixture.work_dir)
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("packaged").not());

    assert!(!fixture.zip_path("1").exists());
    assert!(fixture.remote_head_message().is_none());
}

#[test]
fn test_non_y_answer_aborts() {
    let fixture = Fixture::new(&["1"]);

    // Anything other than exactly "y" declines, including "yes".
    guidepack_cmd()
        .current_dir(&fixture.work_dir)
        .write_stdin("yes\n")
        .assert()
        .success();

    assert!(!fixture.zip_path("1").exists());
}

#[test]
fn test_dirty_repository_aborts_before_packaging() {
    let fixture = Fixture::new(&["1"]);
    fs::write(fixture.root.join("LICENSE.md"), "MIT License, amended\n").unwrap();

    guidepack_cmd()
        .current_dir(&fixture.work_dir)
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("repository is dirty, aborting"));

    assert!(!fixture.zip_path("1").exists());
    assert!(fixture.remote_head_message().is_none());
}

#[test]
fn test_full_run_packages_commits_and_pushes() {
    let fixture = Fixture::new(&["1", "2"]);

    guidepack_cmd()
        .current_dir(&fixture.work_dir)
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Chapter 1 packaged")
                .and(predicate::str::contains("Chapter 2 packaged"))
                .and(predicate::str::contains("Pushing changes ..."))
                .and(predicate::str::contains("done")),
        );

    for number in ["1", "2"] {
        let zip_path = fixture.zip_path(number);
        assert!(zip_path.exists(), "missing archive for chapter {number}");

        let names = zip_entry_names(&zip_path);
        let prefix = format!("UntitledGuiGuide_1.1.{number}/");
        assert!(names.iter().all(|name| name.starts_with(&prefix)));
        assert!(names.contains(&format!("{prefix}LICENSE.md")));
        assert!(names.contains(&format!("{prefix}main.swift")));

        // The temporary license copy must not survive the run.
        assert!(!fixture.code_folder(number).join("LICENSE.md").exists());
    }

    assert_eq!(
        fixture.remote_head_message().as_deref(),
        Some("Repackage example code")
    );
}

#[test]
fn test_yes_flag_skips_prompt() {
    let fixture = Fixture::new(&["5"]);

    guidepack_cmd()
        .current_dir(&fixture.work_dir)
        .arg("--yes")
        .assert()
        .success()
        .stdout(predicate::str::contains("Chapter 5 packaged"));

    assert!(fixture.zip_path("5").exists());
}

#[test]
fn test_archived_license_matches_root_license() {
    let fixture = Fixture::new(&["1"]);

    guidepack_cmd()
        .current_dir(&fixture.work_dir)
        .arg("--yes")
        .assert()
        .success();

    let mut archive = ZipArchive::new(File::open(fixture.zip_path("1")).unwrap()).unwrap();
    let mut entry = archive.by_name("UntitledGuiGuide_1.1.1/LICENSE.md").unwrap();
    let mut contents = String::new();
    entry.read_to_string(&mut contents).unwrap();
    assert_eq!(contents, "MIT License\n");
}

#[test]
fn test_missing_code_folder_fails_the_run() {
    let fixture = Fixture::new(&["1"]);
    // A chapter with no code folder inside it, committed so the tree is clean.
    fs::create_dir(fixture.work_dir.join("chapter-9")).unwrap();
    fs::write(
        fixture.work_dir.join("chapter-9").join(".gitkeep"),
        "",
    )
    .unwrap();
    let repo = Repository::open(&fixture.root).unwrap();
    commit_everything(&repo, "add empty chapter");

    guidepack_cmd()
        .current_dir(&fixture.work_dir)
        .arg("--yes")
        .assert()
        .failure();

    // Nothing was committed or pushed.
    assert!(fixture.remote_head_message().is_none());
}
