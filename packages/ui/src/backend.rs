//! Remote API context.

use api::HttpBackend;
use dioxus::prelude::*;
use store::ClientConfig;

use crate::components::{Alert, AlertKind};

/// Get the shared API client.
pub fn use_backend() -> HttpBackend {
    use_context::<HttpBackend>()
}

/// Provider component that builds the API client from the [`ClientConfig`] in context.
#[component]
pub fn BackendProvider(children: Element) -> Element {
    let config = use_context::<ClientConfig>();
    let backend = use_hook(|| {
        HttpBackend::new(config.api.clone()).map_err(|e| {
            tracing::error!("Failed to build API client: {e}");
            e.to_string()
        })
    });

    match backend {
        Ok(backend) => rsx! {
            ProvideBackend { backend, {children} }
        },
        Err(_) => rsx! {
            Alert { message: "حدث خطأ ما", kind: AlertKind::Error }
        },
    }
}

#[component]
fn ProvideBackend(backend: HttpBackend, children: Element) -> Element {
    use_context_provider(|| backend);
    rsx! {
        {children}
    }
}
