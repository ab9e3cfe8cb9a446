//! Brick Registry
//!
//! Bricks linked into the binary register themselves here.

use crate::metadata::ClassMetadata;
use crate::ports::feed::{PackageKind, PackageMetadata};

/// Registry entry for a linked brick
pub struct BrickEntry {
    /// Package name (e.g. "acme/mailer")
    pub name: &'static str,
    /// Package kind
    pub kind: PackageKind,
    /// Linked only for development builds
    pub dev_requirement: bool,
    /// Package root directory, usually `env!("CARGO_MANIFEST_DIR")`
    pub path: &'static str,
    /// Produces the class metadata of the package
    pub classes: fn() -> Vec<ClassMetadata>,
}

impl BrickEntry {
    /// Materialise the package metadata
    pub fn to_package(&self) -> PackageMetadata {
        PackageMetadata {
            name: self.name.to_string(),
            path: self.path.into(),
            kind: self.kind,
            dev_requirement: self.dev_requirement,
            classes: (self.classes)(),
        }
    }
}

#[linkme::distributed_slice]
pub static BRICKS: [BrickEntry] = [..];

/// Package metadata of every linked brick, in link order
pub fn linked_bricks() -> Vec<PackageMetadata> {
    BRICKS.iter().map(BrickEntry::to_package).collect()
}
