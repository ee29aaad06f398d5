//! Merge pipeline
//!
//! Top-level orchestration: resolve the merger executable (building the
//! project if needed), discover input headers, derive the merger command
//! line, and run it. All steps return `Result` values; the CLI boundary is
//! the only place that maps failures to a process exit.

use camino::{Utf8Path, Utf8PathBuf};

use crate::builder::ProjectBuilder;
use crate::config::Config;
use crate::discover::{find_files, strip_suffix};
use crate::runner::CommandRunner;
use crate::{Error, Result};

/// A fully assembled merger invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergePlan {
    /// Path to the merger executable
    pub program: Utf8PathBuf,

    /// Input file stems, in discovery order, suffix stripped
    pub inputs: Vec<String>,

    /// Output path passed as the last argument
    pub output: String,
}

impl MergePlan {
    /// Arguments passed to the merger: input stems followed by the output
    pub fn args(&self) -> Vec<String> {
        let mut args = self.inputs.clone();
        args.push(self.output.clone());
        args
    }

    /// Full command line (program plus arguments) for display
    pub fn command_line(&self) -> String {
        let mut parts = vec![self.program.to_string()];
        parts.extend(self.args());
        parts.join(" ")
    }
}

/// Merge pipeline over a configuration and an external command runner
pub struct MergePipeline<'a> {
    config: &'a Config,
    runner: &'a dyn CommandRunner,
}

impl<'a> MergePipeline<'a> {
    /// Create a pipeline using the given configuration and runner
    pub fn new(config: &'a Config, runner: &'a dyn CommandRunner) -> Self {
        Self { config, runner }
    }

    /// Expected merger executable path inside `project_dir`, derived from
    /// the configuration without touching the filesystem.
    pub fn expected_executable(&self, project_dir: &Utf8Path) -> Utf8PathBuf {
        project_dir
            .join(&self.config.build.build_dir)
            .join(&self.config.merger.executable)
    }

    /// Resolve the merger executable inside `project_dir`, building the
    /// project if the executable is missing or not marked executable.
    pub fn resolve_executable(&self, project_dir: &Utf8Path) -> Result<Utf8PathBuf> {
        let program = self.expected_executable(project_dir);

        if is_executable(&program) {
            tracing::info!("Found existing built executable at {}", program);
            return Ok(program);
        }

        tracing::info!("Executable not found or not executable, initiating build process");
        let build_dir = ProjectBuilder::new(self.runner, &self.config.build).build(project_dir)?;
        let program = build_dir.join(&self.config.merger.executable);

        if !is_executable(&program) {
            return Err(Error::build(
                "Built executable not found after build process",
                format!(
                    "Expected {} to exist with execute permission; check the \
                     project's CMake target name",
                    program
                ),
            ));
        }

        Ok(program)
    }

    /// Discover input headers under `search_dir` and assemble the merger
    /// command. An empty discovery result is an error.
    pub fn plan(&self, program: Utf8PathBuf, search_dir: &Utf8Path) -> Result<MergePlan> {
        let suffix = &self.config.merger.header_suffix;
        let headers: Vec<Utf8PathBuf> = find_files(search_dir, suffix).collect();

        if headers.is_empty() {
            return Err(Error::no_inputs(
                format!("No files found with extension {}", suffix),
                format!("Searched recursively under {}", search_dir),
            ));
        }

        tracing::debug!("Discovered {} header file(s)", headers.len());

        let inputs = headers
            .iter()
            .map(|path| strip_suffix(path.as_str(), suffix).to_string())
            .collect();

        Ok(MergePlan {
            program,
            inputs,
            output: self.config.merger.output.clone(),
        })
    }

    /// Run the assembled merger command, blocking until it terminates.
    ///
    /// A non-zero exit from the merger is an error, so the program's own
    /// exit status reflects merge failure.
    pub fn execute(&self, plan: &MergePlan) -> Result<()> {
        tracing::info!("Executing command: {}", plan.command_line());

        let status = self.runner.run(plan.program.as_str(), &plan.args(), None)?;

        if !status.success {
            return Err(Error::merge(
                "Merger exited with failure",
                format!("{} exited with status {:?}", plan.program, status.code),
            ));
        }

        tracing::info!("Merge completed successfully");
        Ok(())
    }

    /// Assemble the merger command without building or executing anything.
    ///
    /// Uses the expected executable path whether or not it exists, so a
    /// dry run never spawns external commands or creates a build
    /// directory.
    pub fn dry_run(&self, project_dir: &Utf8Path, search_dir: &Utf8Path) -> Result<MergePlan> {
        let program = self.expected_executable(project_dir);
        self.plan(program, search_dir)
    }

    /// Full pipeline: resolve or build the executable, discover inputs,
    /// and invoke the merger.
    pub fn run(&self, project_dir: &Utf8Path, search_dir: &Utf8Path) -> Result<()> {
        let program = self.resolve_executable(project_dir)?;
        let plan = self.plan(program, search_dir)?;
        self.execute(&plan)
    }
}

/// Check that `path` is a regular file with an execute bit set
pub fn is_executable(path: &Utf8Path) -> bool {
    let Ok(metadata) = std::fs::metadata(path) else {
        return false;
    };

    if !metadata.is_file() {
        return false;
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        metadata.permissions().mode() & 0o111 != 0
    }

    #[cfg(not(unix))]
    {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_args_end_with_output() {
        let plan = MergePlan {
            program: Utf8PathBuf::from("/opt/merger"),
            inputs: vec!["a".to_string(), "sub/b".to_string()],
            output: "merged".to_string(),
        };

        assert_eq!(plan.args(), vec!["a", "sub/b", "merged"]);
        assert_eq!(plan.command_line(), "/opt/merger a sub/b merged");
    }

    #[cfg(unix)]
    #[test]
    fn test_is_executable_requires_execute_bit() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = tempfile::tempdir().unwrap();
        let root = Utf8Path::from_path(temp_dir.path()).unwrap();

        let plain = root.join("plain");
        std::fs::write(&plain, "").unwrap();
        assert!(!is_executable(&plain));

        let exe = root.join("exe");
        std::fs::write(&exe, "").unwrap();
        let mut perms = std::fs::metadata(&exe).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&exe, perms).unwrap();
        assert!(is_executable(&exe));

        assert!(!is_executable(&root.join("missing")));
        assert!(!is_executable(root));
    }
}
