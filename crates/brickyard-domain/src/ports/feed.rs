//! Metadata Feed Port
//!
//! Source of the installed packages and the class metadata they carry.

use std::path::PathBuf;

use crate::metadata::ClassMetadata;

/// Kind of an installed package
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageKind {
    /// Extension package contributing services
    Brick,
    /// Any other dependency
    Library,
}

/// One installed package
#[derive(Debug, Clone)]
pub struct PackageMetadata {
    /// Package name
    pub name: String,
    /// Package root directory
    pub path: PathBuf,
    /// Package kind
    pub kind: PackageKind,
    /// Installed only as a development requirement
    pub dev_requirement: bool,
    /// Classes declared by the package
    pub classes: Vec<ClassMetadata>,
}

impl PackageMetadata {
    /// A runtime brick package
    pub fn brick(name: impl Into<String>, path: impl Into<PathBuf>, classes: Vec<ClassMetadata>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            kind: PackageKind::Brick,
            dev_requirement: false,
            classes,
        }
    }

    /// Change the package kind
    pub fn with_kind(mut self, kind: PackageKind) -> Self {
        self.kind = kind;
        self
    }

    /// Mark as a development requirement
    pub fn dev(mut self) -> Self {
        self.dev_requirement = true;
        self
    }
}

/// Metadata Feed Port
pub trait MetadataFeed {
    /// Name of the hosting application's own package
    fn root_package_name(&self) -> Option<String>;

    /// Every installed package, in installation order
    fn installed_packages(&self) -> Vec<PackageMetadata>;
}
