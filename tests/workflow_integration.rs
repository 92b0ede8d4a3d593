//! Integration tests for the interactive workflow, driven by canned answers.

use std::collections::VecDeque;
use std::fs;
use std::io;

use micoo::interactive::{MemoryLog, PromptOutcome, Prompter, Severity};
use micoo::{Repository, RunOutcome, Workflow};
use tempfile::TempDir;

/// Answers prompts from a script; panics if asked more than scripted.
#[derive(Default)]
struct Answers {
    selects: VecDeque<PromptOutcome<usize>>,
    confirms: VecDeque<PromptOutcome<bool>>,
    menus: Vec<Vec<String>>,
}

impl Prompter for Answers {
    fn select(&mut self, _message: &str, items: &[String]) -> io::Result<PromptOutcome<usize>> {
        self.menus.push(items.to_vec());
        Ok(self.selects.pop_front().expect("no scripted answer for select"))
    }

    fn confirm(&mut self, _message: &str, _default: bool) -> io::Result<PromptOutcome<bool>> {
        Ok(self.confirms.pop_front().expect("no scripted answer for confirm"))
    }
}

/// Prompter whose terminal has gone away.
struct Broken;

impl Prompter for Broken {
    fn select(&mut self, _message: &str, _items: &[String]) -> io::Result<PromptOutcome<usize>> {
        Err(io::Error::new(io::ErrorKind::NotConnected, "not a terminal"))
    }

    fn confirm(&mut self, _message: &str, _default: bool) -> io::Result<PromptOutcome<bool>> {
        Err(io::Error::new(io::ErrorKind::NotConnected, "not a terminal"))
    }
}

fn repository_with(temp: &TempDir, files: &[(&str, &str)]) -> Repository {
    let root = temp.path().join("cookbooks");
    for (rel, content) in files {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
    Repository::new(root, ".toml.tmpl")
}

#[test]
fn test_template_suffix_cookbook_lands_in_local_config() {
    let temp = TempDir::new().unwrap();
    let repository = repository_with(&temp, &[("foo.toml.tmpl", "root = true\n")]);
    let project = temp.path().join("project");

    let mut answers = Answers {
        selects: VecDeque::from([PromptOutcome::Answered(0), PromptOutcome::Answered(1)]),
        confirms: VecDeque::from([PromptOutcome::Answered(true)]),
        ..Answers::default()
    };
    let log = MemoryLog::new();

    let outcome = Workflow::new(&repository, &mut answers, &log, io::sink())
        .with_base_dir(&project)
        .run()
        .unwrap();

    assert!(outcome.is_generated());
    assert_eq!(fs::read_to_string(project.join("mise.local.toml")).unwrap(), "root = true\n");
    assert_eq!(answers.menus[0], vec!["foo"]);
    assert_eq!(answers.menus[1].len(), 6);
    assert!(answers.menus[1][1].starts_with("mise.local.toml - "));
    assert!(log.contains(Severity::Info, "Interactive mode completed"));
}

#[test]
fn test_nested_cookbook_is_listed_and_copied() {
    let temp = TempDir::new().unwrap();
    let repository = repository_with(
        &temp,
        &[("a/alpha.toml.tmpl", "alpha = 1\n"), ("b/c/beta.toml.tmpl", "beta = 2\n")],
    );
    let project = temp.path().join("project");

    let mut answers = Answers {
        selects: VecDeque::from([PromptOutcome::Answered(1), PromptOutcome::Answered(2)]),
        confirms: VecDeque::from([PromptOutcome::Answered(true)]),
        ..Answers::default()
    };
    let log = MemoryLog::new();

    let outcome = Workflow::new(&repository, &mut answers, &log, io::sink())
        .with_base_dir(&project)
        .run()
        .unwrap();

    assert_eq!(
        outcome,
        RunOutcome::Generated {
            cookbook: "beta".to_string(),
            output: project.join("mise/config.toml"),
        }
    );
    assert_eq!(fs::read_to_string(project.join("mise/config.toml")).unwrap(), "beta = 2\n");
}

#[test]
fn test_cancel_at_selection_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let repository = repository_with(&temp, &[("foo.toml.tmpl", "root = true\n")]);
    let project = temp.path().join("project");

    let mut answers = Answers {
        selects: VecDeque::from([PromptOutcome::Cancelled]),
        ..Answers::default()
    };
    let log = MemoryLog::new();

    let outcome = Workflow::new(&repository, &mut answers, &log, io::sink())
        .with_base_dir(&project)
        .run()
        .unwrap();

    assert_eq!(outcome, RunOutcome::SelectionCancelled);
    assert!(!project.exists());
    assert!(log.contains(Severity::Info, "cancelled"));
}

#[test]
fn test_missing_repository_never_prompts() {
    let temp = TempDir::new().unwrap();
    let repository = Repository::new(temp.path().join("absent"), ".toml");

    let mut answers = Answers::default();
    let log = MemoryLog::new();
    let mut out = Vec::new();

    let outcome = Workflow::new(&repository, &mut answers, &log, &mut out).run().unwrap();

    assert_eq!(outcome, RunOutcome::NoCookbooks);
    assert!(answers.menus.is_empty());
    assert!(String::from_utf8(out).unwrap().contains("No cookbooks found"));
}

#[test]
fn test_broken_terminal_is_an_error() {
    let temp = TempDir::new().unwrap();
    let repository = repository_with(&temp, &[("foo.toml.tmpl", "root = true\n")]);
    let log = MemoryLog::new();

    let result = Workflow::new(&repository, Broken, &log, io::sink())
        .with_base_dir(temp.path().join("project"))
        .run();

    let err = result.unwrap_err();
    assert!(format!("{err:#}").contains("not a terminal"));
}

#[test]
fn test_double_dot_cookbook_name_generates() {
    let temp = TempDir::new().unwrap();
    let repository = repository_with(&temp, &[("node..lts.toml.tmpl", "node = \"lts\"\n")]);
    let project = temp.path().join("project");

    let mut answers = Answers {
        selects: VecDeque::from([PromptOutcome::Answered(0), PromptOutcome::Answered(0)]),
        confirms: VecDeque::from([PromptOutcome::Answered(true)]),
        ..Answers::default()
    };
    let log = MemoryLog::new();

    let outcome = Workflow::new(&repository, &mut answers, &log, io::sink())
        .with_base_dir(&project)
        .run()
        .unwrap();

    assert_eq!(answers.menus[0], vec!["node..lts"]);
    assert_eq!(
        outcome,
        RunOutcome::Generated { cookbook: "node..lts".to_string(), output: project.join("mise.toml") }
    );
    assert_eq!(fs::read_to_string(project.join("mise.toml")).unwrap(), "node = \"lts\"\n");
}
