//! Service Catalog Builder
//!
//! Turns the packages reported by a [`MetadataFeed`] into
//! [`BrickRepresentation`]s.
//!
//! ```text
//! MetadataFeed ──► installed packages ──► filter ──► classes with the
//!                                         │          service marker
//!                                         │                │
//!                  dev, non-brick,        │                ▼
//!                  duplicate, root ◄──────┘       ServiceRepresentation
//! ```

use std::collections::HashSet;
use std::path::Path;
use std::rc::Rc;

use brickyard_domain::error::{Error, Result};
use brickyard_domain::ports::{MetadataFeed, PackageKind, PackageMetadata};
use brickyard_domain::registry::linked_bricks;
use brickyard_domain::{BrickRepresentation, ClassMetadata, ServiceRepresentation};
use tracing::{debug, info};

/// Catalog building options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogOptions {
    /// Treat the hosting application's own package as a brick
    pub include_root_package: bool,
}

/// Feed over the bricks linked into the current binary
#[derive(Debug, Clone, Default)]
pub struct LinkedBricksFeed {
    root_package: Option<String>,
}

impl LinkedBricksFeed {
    /// Feed without a root package
    pub fn new() -> Self {
        Self::default()
    }

    /// Name the hosting application's package
    pub fn with_root_package(mut self, name: impl Into<String>) -> Self {
        self.root_package = Some(name.into());
        self
    }
}

impl MetadataFeed for LinkedBricksFeed {
    fn root_package_name(&self) -> Option<String> {
        self.root_package.clone()
    }

    fn installed_packages(&self) -> Vec<PackageMetadata> {
        linked_bricks()
    }
}

/// Feed over an explicit package list
#[derive(Debug, Clone, Default)]
pub struct StaticFeed {
    root_package: Option<String>,
    packages: Vec<PackageMetadata>,
}

impl StaticFeed {
    /// Feed over `packages`
    pub fn new(packages: Vec<PackageMetadata>) -> Self {
        Self {
            root_package: None,
            packages,
        }
    }

    /// Name the hosting application's package
    pub fn with_root_package(mut self, name: impl Into<String>) -> Self {
        self.root_package = Some(name.into());
        self
    }

    /// Append a package
    pub fn with_package(mut self, package: PackageMetadata) -> Self {
        self.packages.push(package);
        self
    }
}

impl MetadataFeed for StaticFeed {
    fn root_package_name(&self) -> Option<String> {
        self.root_package.clone()
    }

    fn installed_packages(&self) -> Vec<PackageMetadata> {
        self.packages.clone()
    }
}

/// Build the brick catalog from `feed`
///
/// Packages are visited in feed order; a repeated package name is ignored.
/// Development requirements and packages that are not bricks are skipped.
/// The root package is included only when
/// [`CatalogOptions::include_root_package`] is set, whatever its kind.
pub fn build_catalog(
    feed: &dyn MetadataFeed,
    options: CatalogOptions,
) -> Result<Vec<BrickRepresentation>> {
    let root = feed.root_package_name();
    let mut seen = HashSet::new();
    let mut bricks = Vec::new();

    for package in feed.installed_packages() {
        if !seen.insert(package.name.clone()) {
            debug!(brick = %package.name, "Skipping duplicate package");
            continue;
        }

        let is_root = root.as_deref() == Some(package.name.as_str());
        if is_root {
            if !options.include_root_package {
                debug!(brick = %package.name, "Skipping root package");
                continue;
            }
        } else if package.dev_requirement {
            debug!(brick = %package.name, "Skipping development requirement");
            continue;
        } else if package.kind != PackageKind::Brick {
            debug!(brick = %package.name, "Skipping non-brick package");
            continue;
        }

        bricks.push(build_brick(package)?);
    }

    info!(
        bricks = bricks.len(),
        services = bricks.iter().map(|b| b.services().len()).sum::<usize>(),
        "Brick catalog built"
    );
    Ok(bricks)
}

fn build_brick(package: PackageMetadata) -> Result<BrickRepresentation> {
    let PackageMetadata {
        name,
        path,
        classes,
        ..
    } = package;

    let mut services = Vec::new();
    for class in classes {
        if let Some(service) = build_service(class, &path)? {
            services.push(service);
        }
    }
    debug!(brick = %name, services = services.len(), "Brick loaded");
    Ok(BrickRepresentation::new(name, path, services))
}

fn build_service(class: ClassMetadata, package_path: &Path) -> Result<Option<ServiceRepresentation>> {
    let Some(attribute) = class.service().cloned() else {
        return Ok(None);
    };

    if let Some(configuration) = attribute.configuration() {
        if !configuration.is_marked() {
            return Err(Error::not_a_service_configuration(
                configuration.ty().name(),
                class.ty().name(),
            ));
        }
    }

    Ok(Some(ServiceRepresentation::new(
        Rc::new(class),
        attribute,
        package_path,
    )))
}
