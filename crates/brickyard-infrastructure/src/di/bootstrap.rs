//! Composition root
//!
//! [`Core`] wires the runtime at process start:
//!
//! ```text
//! install root ──► Environment ──► RuntimeSettings ──► cache provider
//!                                        │
//!                                        ▼
//!                  ServiceRegistry ◄── built-ins (locator, environment, event bus, cache)
//!                        │
//!   Core::load():  catalog ──► eager bootstrap ──► listener table
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let mut core = Core::builder().install_root("/srv/app").build()?;
//! core.load()?;
//!
//! let mailer: Option<Rc<dyn Notifier>> = core.services().get();
//! core.events().dispatch(UserCreated { id: 7 })?;
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use brickyard_domain::error::Result;
use brickyard_domain::ports::{CacheProvider, EnvironmentService, EventDispatcher, MetadataFeed};
use brickyard_domain::{BrickRepresentation, ClassMetadata, ServiceRepresentation};
use tracing::{debug, info};

use super::catalog::{build_catalog, CatalogOptions, LinkedBricksFeed};
use super::registry::ServiceRegistry;
use crate::cache::{create_cache, SharedCache};
use crate::config::{Environment, RuntimeSettings, ServiceConfigurationLoader};
use crate::error_ext::ErrorContext;
use crate::events::EventBus;

/// Builder for [`Core`]
pub struct CoreBuilder {
    install_root: Option<PathBuf>,
    environment: Option<Environment>,
    feed: Box<dyn MetadataFeed>,
    options: CatalogOptions,
}

impl Default for CoreBuilder {
    fn default() -> Self {
        Self {
            install_root: None,
            environment: None,
            feed: Box::new(LinkedBricksFeed::new()),
            options: CatalogOptions::default(),
        }
    }
}

impl CoreBuilder {
    /// Application root; defaults to the current directory
    pub fn install_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.install_root = Some(root.into());
        self
    }

    /// Environment to read; defaults to `.env.toml` under the install root
    /// merged with the process environment
    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Metadata feed; defaults to the bricks linked into the binary
    pub fn feed(mut self, feed: impl MetadataFeed + 'static) -> Self {
        self.feed = Box::new(feed);
        self
    }

    /// Catalog options
    pub fn catalog_options(mut self, options: CatalogOptions) -> Self {
        self.options = options;
        self
    }

    /// Create the registry and its built-in services
    pub fn build(self) -> Result<Core> {
        let install_root = match self.install_root {
            Some(root) => root,
            None => std::env::current_dir().io_context("Failed to read the current directory")?,
        };
        let environment = Rc::new(
            self.environment
                .unwrap_or_else(|| Environment::load(&install_root)),
        );
        let settings = RuntimeSettings::from_environment(environment.as_ref());
        debug!(root = %install_root.display(), settings = ?settings, "Building core");

        let loader = ServiceConfigurationLoader::new(&install_root, settings.config_dir.as_deref());
        let registry = ServiceRegistry::shared(loader);

        let events = Rc::new(EventBus::new(&registry));
        let cache = Rc::new(SharedCache::new(create_cache(&settings, &install_root)?));

        registry.add_instance(
            Rc::clone(&environment),
            ClassMetadata::of::<Environment>()
                .provides::<dyn EnvironmentService>(|environment| environment as Rc<dyn EnvironmentService>)
                .build(),
        );
        registry.add_instance(
            Rc::clone(&events),
            ClassMetadata::of::<EventBus>()
                .provides::<dyn EventDispatcher>(|bus| bus as Rc<dyn EventDispatcher>)
                .build(),
        );
        registry.add_instance(
            Rc::clone(&cache),
            ClassMetadata::of::<SharedCache>()
                .provides::<dyn CacheProvider>(|cache| cache as Rc<dyn CacheProvider>)
                .build(),
        );

        Ok(Core {
            install_root,
            settings,
            environment,
            registry,
            events,
            cache,
            feed: self.feed,
            options: self.options,
            bricks: Vec::new(),
            loaded: false,
        })
    }
}

/// Runtime composition root
pub struct Core {
    install_root: PathBuf,
    settings: RuntimeSettings,
    environment: Rc<Environment>,
    registry: Rc<ServiceRegistry>,
    events: Rc<EventBus>,
    cache: Rc<SharedCache>,
    feed: Box<dyn MetadataFeed>,
    options: CatalogOptions,
    bricks: Vec<BrickRepresentation>,
    loaded: bool,
}

impl Core {
    /// Start building a core
    pub fn builder() -> CoreBuilder {
        CoreBuilder::default()
    }

    /// Build the catalog, instantiate every service and register listeners
    ///
    /// Runs once; later calls are no-ops.
    pub fn load(&mut self) -> Result<()> {
        if self.loaded {
            debug!("Core already loaded");
            return Ok(());
        }

        let bricks = build_catalog(self.feed.as_ref(), self.options)?;
        let services: Vec<ServiceRepresentation> = bricks
            .iter()
            .flat_map(|brick| brick.services().iter().cloned())
            .collect();

        self.registry.bootstrap(&services)?;
        self.events.load_listeners(&self.registry.materialized())?;

        info!(
            bricks = bricks.len(),
            services = services.len(),
            listeners = self.events.listener_count(),
            "Core loaded"
        );
        self.bricks = bricks;
        self.loaded = true;
        Ok(())
    }

    /// Service registry
    pub fn services(&self) -> &Rc<ServiceRegistry> {
        &self.registry
    }

    /// Event bus
    pub fn events(&self) -> &Rc<EventBus> {
        &self.events
    }

    /// Mode-selected cache
    pub fn cache(&self) -> &Rc<SharedCache> {
        &self.cache
    }

    /// Environment the core was built from
    pub fn environment(&self) -> &Rc<Environment> {
        &self.environment
    }

    /// Runtime settings read from the environment
    pub fn settings(&self) -> &RuntimeSettings {
        &self.settings
    }

    /// Application root directory
    pub fn install_root(&self) -> &Path {
        &self.install_root
    }

    /// Bricks found by the last [`Core::load`]
    pub fn bricks(&self) -> &[BrickRepresentation] {
        &self.bricks
    }

    /// Whether [`Core::load`] completed
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Drop every service instance
    pub fn shutdown(&mut self) {
        self.registry.shutdown();
        self.bricks.clear();
        self.loaded = false;
        info!("Core shut down");
    }
}

impl fmt::Debug for Core {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Core")
            .field("install_root", &self.install_root)
            .field("settings", &self.settings)
            .field("registry", &self.registry)
            .field("bricks", &self.bricks.len())
            .field("loaded", &self.loaded)
            .finish_non_exhaustive()
    }
}
