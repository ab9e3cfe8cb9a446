//! Class metadata records
//!
//! A [`ClassMetadata`] is everything the runtime knows about one type: its
//! identity, the optional service marker, how to instantiate it, which types
//! it can be viewed as and which of its methods listen to events. Bricks
//! produce these records with [`ClassBuilder`]:
//!
//! ```ignore
//! ClassMetadata::of::<Mailer>()
//!     .service()
//!     .configured::<MailerConfig>()
//!     .constructor(
//!         vec![Parameter::named::<dyn Transport>("transport"), Parameter::named::<MailerConfig>("config")],
//!         |args| Ok(Mailer::new(args.service::<dyn Transport>()?, args.configuration()?)),
//!     )
//!     .provides::<dyn Notifier>(|mailer| mailer as Rc<dyn Notifier>)
//!     .listener::<UserCreated>("on_user_created", Mailer::on_user_created)
//!     .build()
//! ```

use std::any::Any;
use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

use super::configuration::{ConfigurationClass, ServiceAttribute, ServiceConfiguration};
use super::instance::{Arguments, ConstructionError, Instance, Upcast};
use super::parameter::Parameter;
use crate::value_objects::TypeKey;

type ConstructorFn = dyn Fn(&mut Arguments) -> Result<Instance, ConstructionError>;
type ListenerFn = dyn Fn(&dyn Any, &mut dyn Any);

/// How a type is instantiated
#[derive(Clone)]
pub enum Instantiation {
    /// No declared constructor
    Direct(Rc<dyn Fn() -> Instance>),
    /// Constructor taking the listed parameters
    Constructor {
        /// Parameters in declaration order
        parameters: Vec<Parameter>,
        /// Invoked with one resolved argument per parameter
        invoke: Rc<ConstructorFn>,
    },
    /// Cannot be instantiated
    Abstract,
}

impl fmt::Debug for Instantiation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Direct(_) => f.write_str("Direct"),
            Self::Constructor { parameters, .. } => f
                .debug_struct("Constructor")
                .field("parameters", parameters)
                .finish_non_exhaustive(),
            Self::Abstract => f.write_str("Abstract"),
        }
    }
}

/// A method of a class, as seen by the event bus
#[derive(Clone)]
pub struct MethodMetadata {
    name: &'static str,
    parameters: Vec<Parameter>,
    listening: bool,
    invoke: Rc<ListenerFn>,
}

impl MethodMetadata {
    /// Raw method record; invoking it does nothing
    pub fn new(name: &'static str, parameters: Vec<Parameter>, listening: bool) -> Self {
        Self {
            name,
            parameters,
            listening,
            invoke: Rc::new(|_: &dyn Any, _: &mut dyn Any| {}),
        }
    }

    /// Event listener taking `&mut E` on a service of type `S`
    pub fn listener<S: 'static, E: 'static>(name: &'static str, handler: fn(&S, &mut E)) -> Self {
        Self {
            name,
            parameters: vec![Parameter::named::<E>("event")],
            listening: true,
            invoke: Rc::new(move |service: &dyn Any, event: &mut dyn Any| {
                if let (Some(service), Some(event)) =
                    (service.downcast_ref::<S>(), event.downcast_mut::<E>())
                {
                    handler(service, event);
                }
            }),
        }
    }

    /// Method name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Declared parameters
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Whether the method carries the listener marker
    pub fn is_listener(&self) -> bool {
        self.listening
    }

    /// Call the method on `service` with `event`
    pub fn invoke(&self, service: &dyn Any, event: &mut dyn Any) {
        (self.invoke)(service, event);
    }
}

impl fmt::Debug for MethodMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodMetadata")
            .field("name", &self.name)
            .field("parameters", &self.parameters)
            .field("listening", &self.listening)
            .finish_non_exhaustive()
    }
}

/// Everything known about one type
#[derive(Debug, Clone)]
pub struct ClassMetadata {
    ty: TypeKey,
    service: Option<ServiceAttribute>,
    instantiation: Instantiation,
    upcasts: Vec<Upcast>,
    methods: Vec<MethodMetadata>,
}

impl ClassMetadata {
    /// Start describing `T`
    pub fn of<T: 'static>() -> ClassBuilder<T> {
        ClassBuilder {
            metadata: Self {
                ty: TypeKey::of::<T>(),
                service: None,
                instantiation: Instantiation::Abstract,
                upcasts: vec![Upcast::identity::<T>()],
                methods: Vec::new(),
            },
            marker: PhantomData,
        }
    }

    /// Type identity
    pub fn ty(&self) -> TypeKey {
        self.ty
    }

    /// Service marker, if the type is a service
    pub fn service(&self) -> Option<&ServiceAttribute> {
        self.service.as_ref()
    }

    /// Instantiation strategy
    pub fn instantiation(&self) -> &Instantiation {
        &self.instantiation
    }

    /// Types an instance can be viewed as, its own type first
    pub fn upcasts(&self) -> &[Upcast] {
        &self.upcasts
    }

    /// Declared methods in discovery order
    pub fn methods(&self) -> &[MethodMetadata] {
        &self.methods
    }

    /// Whether an instance can be viewed as `key`
    pub fn provides(&self, key: TypeKey) -> bool {
        self.upcasts.iter().any(|upcast| upcast.target() == key)
    }

    /// View `instance` as `key`; the result holds an `Rc` of the target type
    pub fn upcast(&self, key: TypeKey, instance: &Instance) -> Option<Box<dyn Any>> {
        self.upcasts
            .iter()
            .find(|upcast| upcast.target() == key)
            .and_then(|upcast| upcast.apply(instance))
    }
}

/// Typed builder for [`ClassMetadata`]
pub struct ClassBuilder<T> {
    metadata: ClassMetadata,
    marker: PhantomData<fn() -> T>,
}

impl<T: 'static> ClassBuilder<T> {
    /// Mark the type as a service
    pub fn service(mut self) -> Self {
        self.metadata.service.get_or_insert_with(ServiceAttribute::new);
        self
    }

    /// Mark the type as a service with an explicit attribute
    pub fn service_attribute(mut self, attribute: ServiceAttribute) -> Self {
        self.metadata.service = Some(attribute);
        self
    }

    /// Declare the service configuration type
    pub fn configured<C: ServiceConfiguration>(self) -> Self {
        self.with_attribute(|attribute| {
            attribute.with_configuration(ConfigurationClass::of::<C>())
        })
    }

    /// Override the configuration filename
    pub fn configuration_filename<S: Into<String>>(self, filename: S) -> Self {
        self.with_attribute(|attribute| attribute.with_configuration_filename(filename))
    }

    fn with_attribute(mut self, update: impl FnOnce(ServiceAttribute) -> ServiceAttribute) -> Self {
        let attribute = self.metadata.service.take().unwrap_or_default();
        self.metadata.service = Some(update(attribute));
        self
    }

    /// Instantiate with `T::default()`
    pub fn direct(self) -> Self
    where
        T: Default,
    {
        self.factory(T::default)
    }

    /// Instantiate without arguments through `factory`
    pub fn factory(mut self, factory: fn() -> T) -> Self {
        self.metadata.instantiation =
            Instantiation::Direct(Rc::new(move || Rc::new(factory()) as Instance));
        self
    }

    /// Instantiate through a constructor taking `parameters`
    pub fn constructor<F>(mut self, parameters: Vec<Parameter>, constructor: F) -> Self
    where
        F: Fn(&mut Arguments) -> Result<T, ConstructionError> + 'static,
    {
        self.metadata.instantiation = Instantiation::Constructor {
            parameters,
            invoke: Rc::new(move |arguments: &mut Arguments| {
                constructor(arguments).map(|value| Rc::new(value) as Instance)
            }),
        };
        self
    }

    /// The type cannot be instantiated
    pub fn abstract_class(mut self) -> Self {
        self.metadata.instantiation = Instantiation::Abstract;
        self
    }

    /// Declare an interface the type implements
    pub fn provides<I: ?Sized + 'static>(mut self, convert: fn(Rc<T>) -> Rc<I>) -> Self {
        self.metadata.upcasts.push(Upcast::to::<T, I>(convert));
        self
    }

    /// Declare an event listener method
    pub fn listener<E: 'static>(mut self, name: &'static str, handler: fn(&T, &mut E)) -> Self {
        self.metadata
            .methods
            .push(MethodMetadata::listener::<T, E>(name, handler));
        self
    }

    /// Declare an arbitrary method
    pub fn method(mut self, method: MethodMetadata) -> Self {
        self.metadata.methods.push(method);
        self
    }

    /// Finish the record
    pub fn build(self) -> ClassMetadata {
        self.metadata
    }
}
