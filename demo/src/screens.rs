//! The two demo screens
//!
//! The main screen is a live source: it borrows the host and navigates on its
//! behalf. The second screen only reads what it was sent.

use crate::host::{HostError, ScreenHost};
use intentkit_dispatch::{Dispatcher, Navigator};
use intentkit_request::{
    Context, Destination, DestinationDescriptor, Flags, Request, RequestBuilder,
};

/// Entry screen
#[derive(Debug, Clone, Copy)]
pub struct MainScreen<'h> {
    host: &'h ScreenHost,
}

impl<'h> MainScreen<'h> {
    /// Main screen running inside `host`
    #[must_use]
    pub fn new(host: &'h ScreenHost) -> Self {
        Self { host }
    }

    /// Navigate to the second screen with no payload
    ///
    /// # Errors
    ///
    /// Propagates the host's [`HostError`].
    pub fn open_second(&self) -> Result<(), HostError> {
        Dispatcher::go::<SecondScreen, _>(self)
    }

    /// Request carrying `text` to the second screen
    #[must_use]
    pub fn second_with_text(&self, text: &str, flags: Flags) -> Request {
        RequestBuilder::for_instance(self, &SecondScreen)
            .with_extra(SecondScreen::EXTRA_TEXT, text)
            .with_flags(flags)
            .build()
    }

    /// Navigate to the second screen carrying `text`
    ///
    /// # Errors
    ///
    /// Propagates the host's [`HostError`].
    pub fn open_second_with_text(&self, text: &str, flags: Flags) -> Result<(), HostError> {
        Dispatcher::dispatch(self, self.second_with_text(text, flags))
    }
}

impl Destination for MainScreen<'_> {
    fn descriptor() -> DestinationDescriptor {
        DestinationDescriptor::new("MainScreen")
    }
}

impl Context for MainScreen<'_> {
    fn package_name(&self) -> &str {
        self.host.package_name()
    }
}

impl Navigator for MainScreen<'_> {
    type Error = HostError;

    fn start(&self, request: Request) -> Result<(), HostError> {
        self.host.start(request)
    }
}

/// Screen that displays the text it was sent
#[derive(Debug, Clone, Copy, Default)]
pub struct SecondScreen;

impl SecondScreen {
    /// Key of the text payload
    pub const EXTRA_TEXT: &'static str = "extra_text";

    /// Label shown when the request carries no text
    pub const PLACEHOLDER: &'static str = "Second screen (no extra text)";

    /// Label the screen shows for `request`
    #[must_use]
    pub fn render(request: &Request) -> String {
        request
            .extras()
            .get_str(Self::EXTRA_TEXT)
            .unwrap_or(Self::PLACEHOLDER)
            .to_owned()
    }
}

impl Destination for SecondScreen {
    fn descriptor() -> DestinationDescriptor {
        DestinationDescriptor::new("SecondScreen")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn host() -> ScreenHost {
        ScreenHost::new("demo")
            .register::<MainScreen<'static>>()
            .register::<SecondScreen>()
    }

    #[test]
    fn plain_navigation_shows_placeholder() {
        let host = host();
        MainScreen::new(&host).open_second().unwrap();

        let shown = host.current().unwrap();
        assert_eq!(SecondScreen::render(&shown), SecondScreen::PLACEHOLDER);
    }

    #[test]
    fn navigation_with_text_shows_text() {
        let host = host();
        MainScreen::new(&host)
            .open_second_with_text("Hello from MainScreen", Flags::NEW_TASK)
            .unwrap();

        let shown = host.current().unwrap();
        assert_eq!(SecondScreen::render(&shown), "Hello from MainScreen");
        assert_eq!(shown.flags(), Flags::NEW_TASK);
    }

    #[test]
    fn main_screen_is_a_live_source() {
        let host = host();
        let main = MainScreen::new(&host);
        let request = main.second_with_text("x", Flags::NONE);

        assert_eq!(main.package_name(), "demo");
        assert_eq!(request.component().map(|c| c.class()), Some("SecondScreen"));
    }
}
