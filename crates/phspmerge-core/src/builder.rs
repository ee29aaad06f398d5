//! CMake build orchestration for the merger project
//!
//! The project directory is assumed to contain a CMakeLists.txt. Building
//! runs two sequential external commands in a `build` subdirectory:
//! `cmake ..` to configure, then `make` to compile. A non-zero exit from
//! either step is returned as an error; errors reach the process boundary
//! only in the CLI.

use camino::{Utf8Path, Utf8PathBuf};

use crate::config::BuildConfig;
use crate::runner::CommandRunner;
use crate::{Error, Result};

/// Builder for the merger project
pub struct ProjectBuilder<'a> {
    runner: &'a dyn CommandRunner,
    config: &'a BuildConfig,
}

impl<'a> ProjectBuilder<'a> {
    /// Create a builder using the given runner and build settings
    pub fn new(runner: &'a dyn CommandRunner, config: &'a BuildConfig) -> Self {
        Self { runner, config }
    }

    /// Build the project at `project_dir`, returning the build directory.
    ///
    /// The build directory is created if absent and reused otherwise. No
    /// cleanup is performed on failure; partial build artifacts are left in
    /// place for the build system to reuse.
    pub fn build(&self, project_dir: &Utf8Path) -> Result<Utf8PathBuf> {
        let build_dir = project_dir.join(&self.config.build_dir);
        std::fs::create_dir_all(&build_dir)?;

        self.configure(&build_dir)?;
        self.compile(&build_dir)?;

        Ok(build_dir)
    }

    /// Run the CMake configure step, targeting the parent project directory
    fn configure(&self, build_dir: &Utf8Path) -> Result<()> {
        let mut cmake_args = vec!["..".to_string()];
        cmake_args.extend(self.config.cmake_args.clone());

        tracing::info!("Running CMake configuration...");
        let status = self.runner.run("cmake", &cmake_args, Some(build_dir))?;

        if !status.success {
            return Err(Error::build(
                "CMake configuration failed",
                format!(
                    "cmake exited with status {:?} in {}",
                    status.code, build_dir
                ),
            ));
        }

        Ok(())
    }

    /// Run the Make compile step in the configured build directory
    fn compile(&self, build_dir: &Utf8Path) -> Result<()> {
        tracing::info!("Building the project with Make...");
        let status = self.runner.run("make", &[], Some(build_dir))?;

        if !status.success {
            return Err(Error::build(
                "Building the project failed",
                format!(
                    "make exited with status {:?} in {}",
                    status.code, build_dir
                ),
            ));
        }

        Ok(())
    }
}
