use crate::api::LoadsClient;
use crate::config::Config;
use dioxus::prelude::*;

/// Provider component that makes the app [`Config`] and the shared
/// [`LoadsClient`] available to the whole component tree.
#[component]
pub fn ApiProvider(children: Element) -> Element {
    let config = use_context_provider(Config::load);
    use_context_provider(move || LoadsClient::new(config.api_base_url.clone()));

    rsx! {
        {children}
    }
}

/// Hook to access the loads API client
pub fn use_loads_client() -> LoadsClient {
    use_context::<LoadsClient>()
}
