//! Pipeline behaviour against mocked generators.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use mockall::{Sequence, mock};
use proser_core::application::{
    ApplicationError, EntryInfo, GenerateContext, Generator, ProjectType, ScaffoldService,
    Storage, WalkVisitor, WritePolicy,
};
use proser_core::domain::{GeneratedFiles, OutputNamespace, Permissions, ProjectConfig, RelativePath};
use proser_core::error::{ProserError, ProserResult};

mock! {
    pub Gen {}
    impl Generator for Gen {
        fn name(&self) -> &'static str;
        fn namespace(&self) -> OutputNamespace;
        fn write_policy(&self) -> WritePolicy;
        fn generate(&self, ctx: &GenerateContext) -> ProserResult<GeneratedFiles>;
    }
}

/// Accepts every write and remembers the order.
#[derive(Default)]
struct RecordingStorage {
    writes: Mutex<Vec<PathBuf>>,
}

impl Storage for RecordingStorage {
    fn write_file(&self, path: &Path, _: &[u8], _: Permissions) -> ProserResult<()> {
        self.writes.lock().unwrap().push(path.to_path_buf());
        Ok(())
    }

    fn create_dir_all(&self, _: &Path, _: Permissions) -> ProserResult<()> {
        Ok(())
    }

    fn walk(&self, _: &Path, _: &mut WalkVisitor<'_>) -> ProserResult<()> {
        Ok(())
    }

    fn metadata(&self, _: &Path) -> ProserResult<EntryInfo> {
        Ok(EntryInfo::directory())
    }

    fn read_file(&self, path: &Path) -> ProserResult<Vec<u8>> {
        Err(ApplicationError::not_found(path, "read").into())
    }
}

fn mock_generator(name: &'static str, file: &'static str) -> MockGen {
    let mut generator = MockGen::new();
    generator.expect_name().return_const(name);
    generator
        .expect_namespace()
        .returning(move || OutputNamespace::file(file));
    generator
        .expect_write_policy()
        .return_const(WritePolicy::Strict);
    generator
}

#[test]
fn generators_are_invoked_once_each_in_order() {
    let mut seq = Sequence::new();

    let mut first = mock_generator("first", "FIRST.md");
    first
        .expect_generate()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| GeneratedFiles::new().with_file(RelativePath::new("FIRST.md"), "1").map_err(Into::into));

    let mut second = mock_generator("second", "SECOND.md");
    second
        .expect_generate()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|ctx| {
            assert_eq!(ctx.root(), Path::new("/work"));
            GeneratedFiles::new()
                .with_file(RelativePath::new("SECOND.md"), ctx.config().general.project_name.clone())
                .map_err(Into::into)
        });

    let project_type = ProjectType::builder("mocked")
        .generator(first)
        .generator(second)
        .build()
        .unwrap();

    let storage = Arc::new(RecordingStorage::default());
    let report = ScaffoldService::new(storage.clone())
        .run(&project_type, ProjectConfig::default(), Path::new("/work"))
        .unwrap();

    assert_eq!(report.files_written(), 2);
    assert_eq!(
        *storage.writes.lock().unwrap(),
        vec![PathBuf::from("/work/FIRST.md"), PathBuf::from("/work/SECOND.md")]
    );
}

#[test]
fn failing_generator_stops_the_run() {
    let mut broken = mock_generator("broken", "BROKEN.md");
    broken
        .expect_generate()
        .times(1)
        .returning(|_| Err(ProserError::configuration("no template")));

    let mut never = mock_generator("never", "NEVER.md");
    never.expect_generate().never();

    let project_type = ProjectType::builder("mocked")
        .generator(broken)
        .generator(never)
        .build()
        .unwrap();

    let storage = Arc::new(RecordingStorage::default());
    let err = ScaffoldService::new(storage.clone())
        .run(&project_type, ProjectConfig::default(), Path::new("/work"))
        .unwrap_err();

    match err {
        ProserError::Application(ApplicationError::GeneratorFailed { generator, .. }) => {
            assert_eq!(generator, "broken");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(storage.writes.lock().unwrap().is_empty());
}

#[test]
fn overlapping_mocks_cannot_share_a_project_type() {
    let a = mock_generator("a", "SAME.md");
    let b = mock_generator("b", "SAME.md");

    let result = ProjectType::builder("clash").generator(a).generator(b).build();
    assert!(result.is_err());
}
