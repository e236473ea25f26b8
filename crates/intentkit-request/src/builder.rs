//! Request Builder
//!
//! The only way to assemble a [`Request`]. The constructor fixes the
//! destination identity, `with_*` calls accumulate everything else, and
//! [`RequestBuilder::build`] consumes the builder.

use crate::extra::ExtraValue;
use crate::extras::Extras;
use crate::flags::Flags;
use crate::request::Request;
use crate::target::{Context, Destination, DestinationDescriptor, Locator, Target};
use tracing::trace;

/// Builder for navigation requests
///
/// Usage:
/// ```rust,ignore
/// let request = RequestBuilder::for_destination(&context, DestinationDescriptor::of::<Detail>())
///     .with_extra("key", "value")
///     .with_flags(Flags::NEW_TASK)
///     .build();
/// ```
///
/// No call ever fails. Combinations that make no sense to a host (an unset
/// target, say) are still legal requests; the host rejects them at dispatch.
#[derive(Debug, Clone, Default)]
#[must_use = "a builder does nothing until `build` is called"]
pub struct RequestBuilder {
    request: Request,
}

impl RequestBuilder {
    /// Builder with no target, action or payload
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder seeded with an action only
    pub fn for_action(action: impl Into<String>) -> Self {
        Self::new().with_action(action)
    }

    /// Builder targeting the type of a live destination
    pub fn for_instance<C, D>(context: &C, destination: &D) -> Self
    where
        C: Context + ?Sized,
        D: Destination + ?Sized,
    {
        Self::for_destination(context, DestinationDescriptor::of_instance(destination))
    }

    /// Builder targeting a destination descriptor
    pub fn for_destination<C>(context: &C, descriptor: DestinationDescriptor) -> Self
    where
        C: Context + ?Sized,
    {
        Self::targeting(Target::Component(descriptor.resolve(context)))
    }

    /// Builder for an action applied to a resource locator
    pub fn for_locator(action: impl Into<String>, locator: impl Into<Locator>) -> Self {
        Self::targeting(Target::Locator {
            locator: locator.into(),
            component: None,
        })
        .with_action(action)
    }

    /// Builder for an action on a locator, pinned to a destination
    pub fn for_locator_in<C>(
        action: impl Into<String>,
        locator: impl Into<Locator>,
        context: &C,
        descriptor: DestinationDescriptor,
    ) -> Self
    where
        C: Context + ?Sized,
    {
        Self::targeting(Target::Locator {
            locator: locator.into(),
            component: Some(descriptor.resolve(context)),
        })
        .with_action(action)
    }

    fn targeting(target: Target) -> Self {
        Self {
            request: Request {
                target,
                ..Request::default()
            },
        }
    }

    /// Insert or overwrite one payload entry
    ///
    /// The kind tag follows the Rust type of `value`.
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<ExtraValue>) -> Self {
        self.request.extras.insert(key, value);
        self
    }

    /// Copy every entry of `extras` into the payload
    pub fn with_extras(mut self, extras: Extras) -> Self {
        self.request.extras.merge(extras);
        self
    }

    /// Drop one payload entry, if present
    pub fn without_extra(mut self, key: &str) -> Self {
        self.request.extras.remove(key);
        self
    }

    /// Replace the flags
    pub fn with_flags(mut self, flags: impl Into<Flags>) -> Self {
        self.request.flags = flags.into();
        self
    }

    /// Set additional flags on top of the current ones
    pub fn add_flags(mut self, flags: impl Into<Flags>) -> Self {
        self.request.flags |= flags.into();
        self
    }

    /// Replace the action
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.request.action = Some(action.into());
        self
    }

    /// Replace the MIME type
    pub fn with_type(mut self, mime_type: impl Into<String>) -> Self {
        self.request.mime_type = Some(mime_type.into());
        self
    }

    /// Destination identity the builder was created with
    #[must_use]
    pub fn target(&self) -> &Target {
        &self.request.target
    }

    /// Number of payload entries so far
    #[must_use]
    pub fn extra_count(&self) -> usize {
        self.request.extras.len()
    }

    /// Finish the request
    ///
    /// Consumes the builder, so nothing can reach the request afterwards:
    ///
    /// ```compile_fail
    /// use intentkit_request::RequestBuilder;
    ///
    /// let builder = RequestBuilder::for_action("VIEW");
    /// let _request = builder.build();
    /// let _again = builder.with_extra("late", 1_i32);
    /// ```
    ///
    /// Clone the builder first to build more than one request from it.
    #[must_use]
    pub fn build(self) -> Request {
        trace!(
            target_unset = self.request.target.is_unset(),
            action = self.request.action.as_deref(),
            flags = %self.request.flags,
            extras = self.request.extras.len(),
            "built request"
        );
        self.request
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extra::{CharSequence, ExtraKind};
    use crate::target::ComponentName;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    struct TestContext;

    impl Context for TestContext {
        fn package_name(&self) -> &str {
            "com.example.test"
        }
    }

    struct DestB;

    impl Destination for DestB {
        fn descriptor() -> DestinationDescriptor {
            DestinationDescriptor::new("DestB")
        }
    }

    #[test]
    fn test_default_builder_is_empty() {
        let request = RequestBuilder::new().build();

        assert!(request.target().is_unset());
        assert_eq!(request.action(), None);
        assert_eq!(request.mime_type(), None);
        assert!(request.flags().is_empty());
        assert!(request.extras().is_empty());
    }

    #[test]
    fn test_action_only_leaves_target_unset() {
        let request = RequestBuilder::for_action("VIEW").build();

        assert!(request.target().is_unset());
        assert_eq!(request.action(), Some("VIEW"));
        assert!(request.extras().is_empty());
        assert_eq!(request.flags(), Flags::default());
    }

    #[test]
    fn test_destination_constructors_agree() {
        let by_type = RequestBuilder::for_destination(&TestContext, DestB::descriptor()).build();
        let by_instance = RequestBuilder::for_instance(&TestContext, &DestB).build();

        assert_eq!(by_type, by_instance);
        assert_eq!(
            by_type.component(),
            Some(&ComponentName::new("com.example.test", "DestB"))
        );
        assert_eq!(by_type.action(), None);
        assert_eq!(by_type.locator(), None);
        for request in [&by_type, &by_instance] {
            assert!(request.extras().is_empty());
            assert_eq!(request.flags(), Flags::default());
            assert_eq!(request.mime_type(), None);
        }
    }

    #[test]
    fn test_instance_constructor_accepts_trait_objects() {
        let live: &dyn Destination = &DestB;
        let request = RequestBuilder::for_instance(&TestContext, live).build();
        assert_eq!(request.component().map(ComponentName::class), Some("DestB"));
    }

    #[test]
    fn test_locator_constructors() {
        let plain = RequestBuilder::for_locator("VIEW", "https://example.com").build();
        assert_eq!(plain.action(), Some("VIEW"));
        assert_eq!(plain.locator().map(Locator::as_str), Some("https://example.com"));
        assert_eq!(plain.component(), None);

        let pinned = RequestBuilder::for_locator_in(
            "VIEW",
            "https://example.com",
            &TestContext,
            DestB::descriptor(),
        )
        .build();
        assert_eq!(pinned.locator(), plain.locator());
        assert_eq!(pinned.component().map(ComponentName::class), Some("DestB"));
        assert_eq!(pinned.action(), Some("VIEW"));

        for request in [&plain, &pinned] {
            assert!(request.extras().is_empty());
            assert_eq!(request.flags(), Flags::default());
            assert_eq!(request.mime_type(), None);
        }
    }

    #[test]
    fn test_non_finite_extras_round_trip_through_json() {
        let request = RequestBuilder::new()
            .with_extra("ratio", f64::NAN)
            .with_extra("inf", f32::INFINITY)
            .build();

        let encoded = serde_json::to_string(&request).unwrap();
        let decoded: Request = serde_json::from_str(&encoded).unwrap();

        assert!(decoded.extras().get_as::<f64>("ratio").unwrap().unwrap().is_nan());
        assert_eq!(decoded.extras().get_as::<f32>("inf").unwrap(), Some(f32::INFINITY));
        assert_eq!(decoded.target(), request.target());
    }

    #[test]
    fn test_example_scenario() {
        let request = RequestBuilder::for_destination(&TestContext, DestB::descriptor())
            .with_extra("k", "v")
            .with_flags(0x4000_0000_u32)
            .build();

        assert_eq!(
            request.target(),
            &Target::Component(ComponentName::new("com.example.test", "DestB"))
        );
        assert_eq!(request.extras().len(), 1);
        assert_eq!(request.extras().get("k"), Some(&ExtraValue::String("v".into())));
        assert_eq!(request.flags().bits(), 0x4000_0000);
        assert_eq!(request.action(), None);
    }

    #[test]
    fn test_every_kind_is_tagged() {
        let request = RequestBuilder::new()
            .with_extra("string", "s")
            .with_extra("int", 1_i32)
            .with_extra("boolean", true)
            .with_extra("double", 1.0_f64)
            .with_extra("float", 1.0_f32)
            .with_extra("long", 1_i64)
            .with_extra("char", 'c')
            .with_extra("short", 1_i16)
            .with_extra("byte", 1_i8)
            .with_extra("serializable", json!([1, 2, 3]))
            .with_extra("char_sequence", CharSequence::new("seq"))
            .build();

        for (key, value) in request.extras().iter() {
            assert_eq!(value.kind().as_str(), key);
        }
        assert_eq!(request.extras().len(), ExtraKind::ALL.len());
    }

    #[test]
    fn test_flags_replace_not_accumulate() {
        let request = RequestBuilder::new().with_flags(0b01_u32).with_flags(0b10_u32).build();
        assert_eq!(request.flags().bits(), 0b10);
    }

    #[test]
    fn test_add_flags_accumulates() {
        let request = RequestBuilder::new()
            .with_flags(Flags::NEW_TASK)
            .add_flags(Flags::CLEAR_TOP)
            .build();
        assert_eq!(request.flags(), Flags::NEW_TASK | Flags::CLEAR_TOP);
    }

    #[test]
    fn test_action_and_type_last_write_wins() {
        let request = RequestBuilder::for_action("MAIN")
            .with_type("text/plain")
            .with_action("SEND")
            .with_type("image/png")
            .build();

        assert_eq!(request.action(), Some("SEND"));
        assert_eq!(request.mime_type(), Some("image/png"));
    }

    #[test]
    fn test_action_setter_keeps_target() {
        let request = RequestBuilder::for_destination(&TestContext, DestB::descriptor())
            .with_action("EDIT")
            .build();
        assert!(request.component().is_some());
        assert_eq!(request.action(), Some("EDIT"));
    }

    #[test]
    fn test_extras_merge_and_remove() {
        let extras: Extras = [("a", 1_i32), ("b", 2)].into_iter().collect();
        let request = RequestBuilder::new()
            .with_extra("b", "first")
            .with_extras(extras)
            .with_extra("c", 'c')
            .without_extra("a")
            .build();

        assert_eq!(request.extras().keys().collect::<Vec<_>>(), vec!["b", "c"]);
        assert_eq!(request.extras().get_as::<i32>("b").unwrap(), Some(2));
        assert!(!request.has_extra("a"));
    }

    #[test]
    fn test_builder_peeks() {
        let builder = RequestBuilder::for_destination(&TestContext, DestB::descriptor())
            .with_extra("one", 1_i32);
        assert!(!builder.target().is_unset());
        assert_eq!(builder.extra_count(), 1);
    }

    #[test]
    fn test_cloned_builder_does_not_alias_built_request() {
        let builder = RequestBuilder::new().with_extra("k", "v");
        let first = builder.clone().build();
        let second = builder.with_extra("k", "changed").with_flags(1_u32).build();

        assert_eq!(first.extras().get_str("k"), Some("v"));
        assert!(first.flags().is_empty());
        assert_eq!(second.extras().get_str("k"), Some("changed"));
    }
}
