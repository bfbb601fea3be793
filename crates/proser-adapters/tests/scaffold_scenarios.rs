//! End-to-end pipeline runs with the built-in project types.

use std::path::Path;
use std::sync::Arc;

use proser_adapters::{LocalStorage, MemoryStorage, builtin_registry, project_types};
use proser_core::application::{DEFAULT_MAX_DEPTH, DirectoryScanner, ScaffoldService, Storage};
use proser_core::domain::{Answers, Permissions, ProjectConfig, Question, SkipList};
use tempfile::TempDir;

fn registry() -> proser_core::application::ProjectTypeRegistry {
    builtin_registry(DEFAULT_MAX_DEPTH, SkipList::default()).unwrap()
}

fn memory_root(dirs: &[&str]) -> MemoryStorage {
    let storage = MemoryStorage::new();
    storage
        .create_dir_all(Path::new("/proj"), Permissions::directory())
        .unwrap();
    for d in dirs {
        storage
            .create_dir_all(&Path::new("/proj").join(d), Permissions::directory())
            .unwrap();
    }
    storage
}

fn answers_for(type_name: &str, overrides: &[(&str, &str)]) -> Answers {
    let reg = registry();
    let mut answers = Question::defaults(reg.get(type_name).unwrap().questions());
    for (k, v) in overrides {
        answers.insert(k.to_string(), v.to_string());
    }
    answers
}

#[test]
fn scanner_scenario_prunes_deep_and_skipped() {
    let storage = memory_root(&["a/b/c/d", "node_modules"]);
    let found = DirectoryScanner::new(3, SkipList::default())
        .scan(&storage, Path::new("/proj"))
        .unwrap();
    let rel: Vec<_> = found
        .iter()
        .map(|p| p.strip_prefix("/proj").unwrap().to_path_buf())
        .collect();
    assert_eq!(rel, [Path::new("a"), Path::new("a/b"), Path::new("a/b/c")]);
}

#[test]
fn backend_go_without_frontend() {
    let storage = Arc::new(memory_root(&["cmd", "internal/api"]));
    let reg = registry();
    let backend = reg.get(project_types::BACKEND).unwrap();
    let config = ProjectConfig::from_answers(&answers_for(
        project_types::BACKEND,
        &[("backend_language", "go")],
    ));
    assert!(!config.has_frontend());

    let service = ScaffoldService::new(storage.clone());
    let report = service.run(backend, config, Path::new("/proj")).unwrap();
    assert!(!report.has_warnings());

    let files = storage.list_files();
    assert!(files.contains(&Path::new("/proj/.github/instructions/backend.instructions.md").to_path_buf()));
    assert!(!files.iter().any(|p| p.to_string_lossy().contains("frontend")));

    let agents_md = storage.read_to_string("/proj/AGENTS.md").unwrap();
    assert!(agents_md.contains("**Backend**: go"));
    assert!(!agents_md.contains("**Frontend**"));
    assert!(!agents_md.contains("JavaScript"));

    assert!(storage.read_to_string("/proj/internal/api/AGENT.md").is_some());
    assert!(storage.read_to_string("/proj/.github/AGENT.md").is_none());
}

#[test]
fn fullstack_without_frontend_answer_emits_no_frontend_paths() {
    let storage = Arc::new(memory_root(&["web"]));
    let reg = registry();
    let config = ProjectConfig::from_answers(&answers_for(
        project_types::FULLSTACK,
        &[("frontend_language", "skip")],
    ));

    let planned = ScaffoldService::new(storage)
        .plan(reg.get(project_types::FULLSTACK).unwrap(), config, Path::new("/proj"))
        .unwrap();
    let paths: Vec<String> = planned
        .iter()
        .flat_map(|p| p.files.paths().map(|path| path.to_string()))
        .collect();
    assert!(paths.contains(&".github/instructions/backend.instructions.md".to_string()));
    assert!(!paths.iter().any(|p| p.contains("frontend") || p.contains("component.spec")));
}

#[test]
fn rerun_is_idempotent_on_disk() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    std::fs::create_dir_all(root.join("src/handlers")).unwrap();

    let reg = registry();
    let fullstack = reg.default_type().unwrap();
    let config = ProjectConfig::from_answers(&Question::defaults(fullstack.questions()));
    let service = ScaffoldService::new(Arc::new(LocalStorage::new()));

    let first = service.run(fullstack, config.clone(), root).unwrap();
    let snapshot: Vec<_> = first
        .generators
        .iter()
        .flat_map(|g| g.written.iter())
        .map(|p| (p.clone(), std::fs::read(p).unwrap()))
        .collect();

    let second = service.run(fullstack, config, root).unwrap();
    assert_eq!(first.files_written(), second.files_written());
    for (path, content) in snapshot {
        assert_eq!(std::fs::read(&path).unwrap(), content, "{}", path.display());
    }
    assert!(root.join(".github/copilot-instructions.md").is_file());
    assert!(root.join("src/handlers/AGENT.md").is_file());
}

#[test]
fn missing_root_fails_before_writing() {
    let storage = Arc::new(MemoryStorage::new());
    let reg = registry();
    let err = ScaffoldService::new(storage.clone())
        .run(
            reg.default_type().unwrap(),
            ProjectConfig::default(),
            Path::new("/absent"),
        )
        .unwrap_err();
    assert!(err.to_string().contains("/absent"), "{err}");
    assert!(storage.list_files().is_empty());
}
