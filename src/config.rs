//! Package metadata baked in from the crate manifest

/// Static description of this package
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackageInfo {
    /// Binary and package name
    pub name: &'static str,
    /// Name rendered in the welcome banner
    pub display_name: &'static str,
    pub description: &'static str,
    pub version: &'static str,
    pub homepage: &'static str,
}

/// Metadata for the running build
pub const PACKAGE: PackageInfo = PackageInfo {
    name: env!("CARGO_PKG_NAME"),
    display_name: "CLI Starter",
    description: env!("CARGO_PKG_DESCRIPTION"),
    version: env!("CARGO_PKG_VERSION"),
    homepage: env!("CARGO_PKG_HOMEPAGE"),
};
