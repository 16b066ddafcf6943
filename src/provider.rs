use crate::vendor::VendorDescriptor;
use crate::{Error, GenerationRequest};

/// Progress sink, called with the full accumulated text after every delta.
pub type ProgressFn<'a> = &'a mut (dyn FnMut(&str) + Send);

/// A vendor backend that can stream a game generation.
#[async_trait::async_trait]
pub trait GameGenerator: Send + Sync {
    /// Stream a generation and return the final accumulated text.
    ///
    /// `on_progress` receives the cumulative text, not just the latest delta.
    async fn generate(
        &self,
        request: &GenerationRequest,
        on_progress: Option<ProgressFn<'_>>,
    ) -> Result<String, Error>;

    /// Replace the default credential used when a request carries none.
    fn set_credential(&mut self, api_key: String);

    /// The static descriptor of the vendor this generator talks to.
    fn vendor(&self) -> &'static VendorDescriptor;
}
