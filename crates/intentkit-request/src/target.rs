//! Destination identity
//!
//! A request's [`Target`] is fixed when the builder is created. Destinations
//! are named by a [`DestinationDescriptor`], which a [`Context`] resolves
//! into a concrete [`ComponentName`].

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Host object that owns a package namespace
///
/// Descriptors are resolved against the context's package, the same way a
/// host application scopes its own screens.
pub trait Context {
    /// Package the context belongs to
    fn package_name(&self) -> &str;
}

impl<C: Context + ?Sized> Context for &C {
    fn package_name(&self) -> &str {
        (**self).package_name()
    }
}

/// A navigable destination type
///
/// The default descriptor is the Rust type name; hosts override
/// [`Destination::descriptor`] to publish a stable name instead. Through the
/// [`DestinationInstance`] supertrait a `&dyn Destination` still reports the
/// descriptor of its concrete type.
pub trait Destination: DestinationInstance {
    /// Descriptor of the destination type
    fn descriptor() -> DestinationDescriptor
    where
        Self: Sized,
    {
        DestinationDescriptor::new(std::any::type_name::<Self>())
    }
}

/// Descriptor lookup on a live destination, usable behind `dyn`
///
/// Implemented for every sized [`Destination`]; there is no need to
/// implement it by hand.
pub trait DestinationInstance {
    /// Descriptor of the instance's concrete destination type
    fn instance_descriptor(&self) -> DestinationDescriptor;
}

impl<D: Destination> DestinationInstance for D {
    fn instance_descriptor(&self) -> DestinationDescriptor {
        D::descriptor()
    }
}

/// Stable type identity of a destination
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DestinationDescriptor {
    class_name: String,
}

impl DestinationDescriptor {
    /// Descriptor from an explicit class name
    #[inline]
    #[must_use]
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
        }
    }

    /// Descriptor of destination type `D`
    #[inline]
    #[must_use]
    pub fn of<D: Destination>() -> Self {
        D::descriptor()
    }

    /// Descriptor of a live destination instance
    #[inline]
    #[must_use]
    pub fn of_instance<D: Destination + ?Sized>(instance: &D) -> Self {
        instance.instance_descriptor()
    }

    /// Class name carried by the descriptor
    #[inline]
    #[must_use]
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Resolve against a context's package
    #[must_use]
    pub fn resolve<C: Context + ?Sized>(&self, context: &C) -> ComponentName {
        ComponentName::new(context.package_name(), self.class_name.clone())
    }
}

impl Display for DestinationDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.class_name)
    }
}

/// Fully resolved destination: package plus class
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ComponentName {
    package: String,
    class: String,
}

impl ComponentName {
    /// Create a component name
    #[inline]
    #[must_use]
    pub fn new(package: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            class: class.into(),
        }
    }

    /// Owning package
    #[inline]
    #[must_use]
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Destination class name
    #[inline]
    #[must_use]
    pub fn class(&self) -> &str {
        &self.class
    }

    /// Check if this component names the destination behind `descriptor`
    #[inline]
    #[must_use]
    pub fn matches(&self, descriptor: &DestinationDescriptor) -> bool {
        self.class == descriptor.class_name()
    }
}

/// Flattened as `package/class`
impl Display for ComponentName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.package, self.class)
    }
}

/// Resource locator attached to an action
///
/// Stored verbatim; parsing is lenient and never fails.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locator(String);

impl Locator {
    /// Wrap a locator string
    #[inline]
    #[must_use]
    pub fn new(locator: impl Into<String>) -> Self {
        Self(locator.into())
    }

    /// Raw locator text
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Scheme prefix (`https`, `tel`, ...), if the locator has one
    #[must_use]
    pub fn scheme(&self) -> Option<&str> {
        let (scheme, _) = self.0.split_once(':')?;
        let mut chars = scheme.chars();
        let first = chars.next()?;
        let valid = first.is_ascii_alphabetic()
            && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
        valid.then_some(scheme)
    }
}

impl Display for Locator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Locator {
    fn from(locator: &str) -> Self {
        Self(locator.to_owned())
    }
}

impl From<String> for Locator {
    fn from(locator: String) -> Self {
        Self(locator)
    }
}

/// Destination identity of a request
///
/// Exactly one discriminant is active. It is chosen by the builder
/// constructor and never changes afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Target {
    /// No destination; resolution is left to the host at dispatch time
    #[default]
    Unset,
    /// Resolved destination
    Component(ComponentName),
    /// Action applied to a resource locator, optionally pinned to a component
    Locator {
        /// Resource the action applies to
        locator: Locator,
        /// Explicit component, when one was supplied
        component: Option<ComponentName>,
    },
}

impl Target {
    /// Check if no destination is set
    #[inline]
    #[must_use]
    pub fn is_unset(&self) -> bool {
        matches!(self, Target::Unset)
    }

    /// Explicit component, if any
    #[must_use]
    pub fn component(&self) -> Option<&ComponentName> {
        match self {
            Target::Component(component) => Some(component),
            Target::Locator { component, .. } => component.as_ref(),
            Target::Unset => None,
        }
    }

    /// Resource locator, if any
    #[must_use]
    pub fn locator(&self) -> Option<&Locator> {
        match self {
            Target::Locator { locator, .. } => Some(locator),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct App;

    impl Context for App {
        fn package_name(&self) -> &str {
            "com.example.app"
        }
    }

    struct Inbox;
    impl Destination for Inbox {}

    struct Settings;
    impl Destination for Settings {
        fn descriptor() -> DestinationDescriptor {
            DestinationDescriptor::new("com.example.app.Settings")
        }
    }

    #[test]
    fn default_descriptor_uses_type_name() {
        let descriptor = DestinationDescriptor::of::<Inbox>();
        assert!(descriptor.class_name().ends_with("Inbox"));
        assert_eq!(DestinationDescriptor::of_instance(&Inbox), descriptor);
    }

    #[test]
    fn overridden_descriptor_is_used_for_instances() {
        assert_eq!(
            DestinationDescriptor::of_instance(&Settings).class_name(),
            "com.example.app.Settings"
        );
    }

    #[test]
    fn trait_objects_report_their_concrete_descriptor() {
        let screens: Vec<Box<dyn Destination>> = vec![Box::new(Inbox), Box::new(Settings)];
        let names: Vec<_> = screens
            .iter()
            .map(|screen| DestinationDescriptor::of_instance(screen.as_ref()))
            .collect();

        assert_eq!(names[0], DestinationDescriptor::of::<Inbox>());
        assert_eq!(names[1].class_name(), "com.example.app.Settings");

        let dynamic: &dyn Destination = &Settings;
        assert_eq!(dynamic.instance_descriptor(), Settings::descriptor());
    }

    #[test]
    fn descriptor_resolves_against_context_package() {
        let component = DestinationDescriptor::of::<Settings>().resolve(&App);
        assert_eq!(component.package(), "com.example.app");
        assert_eq!(component.class(), "com.example.app.Settings");
        assert_eq!(component.to_string(), "com.example.app/com.example.app.Settings");
        assert!(component.matches(&Settings::descriptor()));
    }

    #[test]
    fn locator_scheme() {
        assert_eq!(Locator::new("https://example.com").scheme(), Some("https"));
        assert_eq!(Locator::new("tel:555-0100").scheme(), Some("tel"));
        assert_eq!(Locator::new("no scheme here").scheme(), None);
        assert_eq!(Locator::new(":empty").scheme(), None);
        assert_eq!(Locator::new("1http:x").scheme(), None);
    }

    #[test]
    fn target_accessors() {
        let component = ComponentName::new("pkg", "Cls");
        let pinned = Target::Locator {
            locator: Locator::new("content://items/1"),
            component: Some(component.clone()),
        };

        assert!(Target::default().is_unset());
        assert_eq!(Target::Component(component.clone()).component(), Some(&component));
        assert_eq!(pinned.component(), Some(&component));
        assert_eq!(pinned.locator().map(Locator::as_str), Some("content://items/1"));
        assert_eq!(Target::Unset.locator(), None);
    }
}
