//! Entry-point detection
//!
//! Decides whether the running binary was launched as this program. Three
//! independent launch styles count as "the one that was run":
//! - direct execution, where `argv[0]` is the executable path
//! - same file name reached through a different directory or `PATH` lookup
//! - an installed or symlinked launcher whose path embeds the binary name
//!
//! The last check is a plain substring match. It is good enough for a CLI
//! self-check and must not be used for identity decisions that matter.

use crate::config::PACKAGE;
use std::path::Path;

const FILE_URL_SCHEME: &str = "file://";

/// Returns true if `module_identity` is the entry point for `invocation_path`
///
/// # Arguments
///
/// * `invocation_path` - The path the process was invoked with (`argv[0]`)
/// * `module_identity` - `file://` URL of the running module
/// * `package_binary_name` - Declared binary name of the package
pub fn is_main_module(
    invocation_path: &str,
    module_identity: &str,
    package_binary_name: &str,
) -> bool {
    if invocation_path.is_empty() {
        return false;
    }

    if module_identity
        .strip_prefix(FILE_URL_SCHEME)
        .is_some_and(|path| path == invocation_path)
    {
        return true;
    }

    let file_name = invocation_path.rsplit('/').next().unwrap_or_default();
    if !file_name.is_empty() && module_identity.ends_with(file_name) {
        return true;
    }

    invocation_path.contains(package_binary_name)
}

/// Builds the `file://` identity for an executable path
pub fn module_url(path: &Path) -> String {
    format!("{}{}", FILE_URL_SCHEME, path.display())
}

/// The inputs to [`is_main_module`] for one process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryPoint {
    pub invocation_path: String,
    pub module_identity: String,
    pub binary_name: String,
}

impl EntryPoint {
    /// Captures the entry-point inputs of the running process
    ///
    /// A missing `argv[0]` or an unresolvable executable path become empty
    /// strings, which the detector treats as "not the entry point".
    pub fn current() -> Self {
        let invocation_path = std::env::args_os()
            .next()
            .map(|arg| arg.to_string_lossy().into_owned())
            .unwrap_or_default();
        let module_identity = std::env::current_exe()
            .map(|exe| module_url(&exe))
            .unwrap_or_default();

        EntryPoint {
            invocation_path,
            module_identity,
            binary_name: PACKAGE.name.to_string(),
        }
    }

    pub fn is_main_module(&self) -> bool {
        is_main_module(
            &self.invocation_path,
            &self.module_identity,
            &self.binary_name,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_path_match() {
        assert!(is_main_module(
            "/path/to/src/index",
            "file:///path/to/src/index",
            "unrelated"
        ));
    }

    #[test]
    fn test_exact_match_requires_file_scheme() {
        // Without the scheme only the file-name rule can match
        assert!(!is_main_module("/a/b/tool", "/a/b/tool-x", "unrelated"));
    }

    #[test]
    fn test_same_file_name_other_directory() {
        assert!(is_main_module(
            "/elsewhere/bin/runner",
            "file:///opt/app/runner",
            "unrelated"
        ));
    }

    #[test]
    fn test_bare_command_name() {
        assert!(is_main_module(
            "cli-starter",
            "file:///usr/local/lib/cli-starter",
            "cli-starter"
        ));
    }

    #[test]
    fn test_symlinked_binary() {
        assert!(is_main_module(
            "/usr/local/bin/mytool",
            "file:///home/dev/project/target/release/app",
            "mytool"
        ));
    }

    #[test]
    fn test_binary_name_substring_is_loose() {
        assert!(is_main_module(
            "/home/mytool-backup/other",
            "file:///opt/app/main",
            "mytool"
        ));
    }

    #[test]
    fn test_imported_from_other_file() {
        assert!(!is_main_module(
            "/path/to/another/file.js",
            "file:///path/to/src/utils.ts",
            "cli-starter"
        ));
    }

    #[test]
    fn test_empty_invocation_path() {
        assert!(!is_main_module("", "file:///anything", "cli-starter"));
        assert!(!is_main_module("", "", ""));
        assert!(!is_main_module("", "file://", "cli-starter"));
    }

    #[test]
    fn test_trailing_slash_skips_file_name_rule() {
        assert!(!is_main_module("/opt/app/", "file:///srv/main", "tool"));
    }

    #[test]
    fn test_idempotent() {
        let inputs = ("/usr/bin/other", "file:///opt/other", "cli-starter");
        let first = is_main_module(inputs.0, inputs.1, inputs.2);
        let second = is_main_module(inputs.0, inputs.1, inputs.2);
        assert_eq!(first, second);
    }

    #[test]
    fn test_module_url() {
        assert_eq!(
            module_url(Path::new("/usr/local/bin/cli-starter")),
            "file:///usr/local/bin/cli-starter"
        );
    }

    #[test]
    fn test_entry_point_struct_delegates() {
        let entry = EntryPoint {
            invocation_path: "/tmp/x/cli-starter".to_string(),
            module_identity: module_url(Path::new("/tmp/x/cli-starter")),
            binary_name: "cli-starter".to_string(),
        };
        assert!(entry.is_main_module());

        let foreign = EntryPoint {
            invocation_path: "/tmp/x/alias".to_string(),
            module_identity: module_url(Path::new("/tmp/y/cli-starter")),
            binary_name: "cli-starter".to_string(),
        };
        assert!(!foreign.is_main_module());
    }
}
