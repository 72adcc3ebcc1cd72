//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the entire scaffolding workflow:
//! 1. Compose the artifact pair from the request
//! 2. Check for collisions under the output directory
//! 3. Write both files, rolling the header back if the source fails
//!
//! It implements the driving port (incoming) and uses the driven
//! [`Filesystem`] port (outgoing).

use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{ArtifactPair, ScaffoldRequest, compose_pair},
    error::HalgenResult,
};

/// Where the two artifacts landed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldOutcome {
    pub header_path: PathBuf,
    pub source_path: PathBuf,
}

/// Main scaffolding service.
///
/// Composition itself is pure (see [`crate::domain::compose`]); this type
/// owns the single side effect of the whole program, placing the pair on
/// disk through the injected filesystem.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given filesystem adapter.
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Compose the pair without touching the filesystem.
    ///
    /// This is the dry-run path; it cannot fail.
    pub fn compose(&self, request: &ScaffoldRequest) -> ArtifactPair {
        compose_pair(request)
    }

    /// Scaffold a component pair under `output_dir`.
    ///
    /// Either both files land or neither does. The one exception is reported
    /// as [`ApplicationError::PartialArtifactSet`]: the source write failed
    /// and the already-written header could not be removed again.
    #[instrument(
        skip_all,
        fields(
            request = %request,
            output_dir = %output_dir.display(),
            force = force,
        )
    )]
    pub fn scaffold(
        &self,
        request: &ScaffoldRequest,
        output_dir: &Path,
        force: bool,
    ) -> HalgenResult<ScaffoldOutcome> {
        // 1. Compose both documents up front; a failure past this point can
        //    only come from the filesystem
        let pair = compose_pair(request);
        info!(
            header = %pair.header.file_name,
            source = %pair.source.file_name,
            "Artifact pair composed"
        );

        let header_path = output_dir.join(&pair.header.file_name);
        let source_path = output_dir.join(&pair.source.file_name);

        // 2. Refuse to clobber unless forced
        if !force {
            for path in [&header_path, &source_path] {
                if self.filesystem.exists(path) {
                    return Err(ApplicationError::ArtifactExists { path: path.clone() }.into());
                }
            }
        }

        // 3. Write the pair
        self.filesystem.create_dir_all(output_dir)?;
        self.write_pair(&pair, &header_path, &source_path)?;

        info!("Scaffold completed successfully");
        Ok(ScaffoldOutcome {
            header_path,
            source_path,
        })
    }

    /// Write both artifacts, removing the header again if the source fails.
    fn write_pair(
        &self,
        pair: &ArtifactPair,
        header_path: &Path,
        source_path: &Path,
    ) -> HalgenResult<()> {
        self.filesystem
            .write_file(header_path, &pair.header.content)?;

        if let Err(source_err) = self.filesystem.write_file(source_path, &pair.source.content) {
            warn!("Source write failed, removing the header again");

            if let Err(rollback_err) = self.filesystem.remove_file(header_path) {
                warn!(
                    error = %rollback_err,
                    path = %header_path.display(),
                    "Rollback failed"
                );
                return Err(ApplicationError::PartialArtifactSet {
                    kept: header_path.to_path_buf(),
                    failed: source_path.to_path_buf(),
                    reason: source_err.to_string(),
                }
                .into());
            }

            info!("Rollback successful");
            return Err(source_err);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockFilesystem;
    use crate::domain::{Dialect, Stamp};
    use crate::error::HalgenError;

    fn request() -> ScaffoldRequest {
        ScaffoldRequest::new(Dialect::Cpp, "MEM", "Flash", "Flash driver", Stamp::none()).unwrap()
    }

    #[test]
    fn writes_both_artifacts_under_the_output_dir() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().times(2).returning(|_| false);
        fs.expect_create_dir_all()
            .withf(|path| path == Path::new("out"))
            .times(1)
            .returning(|_| Ok(()));
        fs.expect_write_file()
            .withf(|path, content| {
                path == Path::new("out/mem_flash.hpp") && content.contains("class mem_flash")
            })
            .times(1)
            .returning(|_, _| Ok(()));
        fs.expect_write_file()
            .withf(|path, content| {
                path == Path::new("out/mem_flash.cpp")
                    && content.contains("mem_flash::mem_flash()")
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let service = ScaffoldService::new(Box::new(fs));
        let outcome = service
            .scaffold(&request(), Path::new("out"), false)
            .unwrap();

        assert_eq!(outcome.header_path, Path::new("out/mem_flash.hpp"));
        assert_eq!(outcome.source_path, Path::new("out/mem_flash.cpp"));
    }

    #[test]
    fn refuses_to_clobber_an_existing_artifact() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .returning(|path| path.ends_with("mem_flash.hpp"));

        let service = ScaffoldService::new(Box::new(fs));
        let err = service
            .scaffold(&request(), Path::new("out"), false)
            .unwrap_err();

        assert!(matches!(
            err,
            HalgenError::Application(ApplicationError::ArtifactExists { .. })
        ));
    }

    #[test]
    fn force_skips_the_existence_check() {
        let mut fs = MockFilesystem::new();
        // No `exists` expectation: a call would fail the test.
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().times(2).returning(|_, _| Ok(()));

        let service = ScaffoldService::new(Box::new(fs));
        assert!(service.scaffold(&request(), Path::new("out"), true).is_ok());
    }

    #[test]
    fn failed_source_write_removes_the_header_again() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().times(2).returning(|_| false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file()
            .withf(|path, _| path.extension().is_some_and(|e| e == "hpp"))
            .times(1)
            .returning(|_, _| Ok(()));
        fs.expect_write_file()
            .withf(|path, _| path.extension().is_some_and(|e| e == "cpp"))
            .times(1)
            .returning(|path, _| {
                Err(ApplicationError::WriteFailed {
                    path: path.to_path_buf(),
                    reason: "disk full".into(),
                }
                .into())
            });
        fs.expect_remove_file()
            .withf(|path| path.extension().is_some_and(|e| e == "hpp"))
            .times(1)
            .returning(|_| Ok(()));

        let service = ScaffoldService::new(Box::new(fs));
        let err = service
            .scaffold(&request(), Path::new("out"), false)
            .unwrap_err();

        assert!(matches!(
            err,
            HalgenError::Application(ApplicationError::WriteFailed { .. })
        ));
    }

    #[test]
    fn failed_rollback_reports_the_partial_pair() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().times(2).returning(|_| false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file()
            .withf(|path, _| path.extension().is_some_and(|e| e == "hpp"))
            .returning(|_, _| Ok(()));
        fs.expect_write_file()
            .withf(|path, _| path.extension().is_some_and(|e| e == "cpp"))
            .returning(|path, _| {
                Err(ApplicationError::WriteFailed {
                    path: path.to_path_buf(),
                    reason: "disk full".into(),
                }
                .into())
            });
        fs.expect_remove_file().returning(|path| {
            Err(ApplicationError::WriteFailed {
                path: path.to_path_buf(),
                reason: "permission denied".into(),
            }
            .into())
        });

        let service = ScaffoldService::new(Box::new(fs));
        let err = service
            .scaffold(&request(), Path::new("out"), false)
            .unwrap_err();

        match err {
            HalgenError::Application(ApplicationError::PartialArtifactSet {
                kept, failed, ..
            }) => {
                assert_eq!(kept, Path::new("out/mem_flash.hpp"));
                assert_eq!(failed, Path::new("out/mem_flash.cpp"));
            }
            other => panic!("expected PartialArtifactSet, got {other:?}"),
        }
    }

    #[test]
    fn compose_never_touches_the_filesystem() {
        // Any filesystem call would fail the test: no expectations are set.
        let service = ScaffoldService::new(Box::new(MockFilesystem::new()));
        let pair = service.compose(&request());

        assert_eq!(pair.header.file_name, "mem_flash.hpp");
        assert_eq!(pair.source.file_name, "mem_flash.cpp");
    }
}
