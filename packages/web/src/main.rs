use dioxus::prelude::*;

use store::ClientConfig;
use ui::{AuthProvider, BackendProvider};
use views::{Contact, Home, Layout, Login, NotFound, Register, Schools};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Layout)]
        #[route("/")]
        Home {},
        #[route("/form")]
        Register {},
        #[route("/login")]
        Login {},
        #[route("/schools")]
        Schools {},
        #[route("/contact")]
        Contact {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Compiled-in client configuration.
const CONFIG: &str = include_str!("../evaaz.toml");

fn main() {
    dioxus::launch(App);
}

fn load_config() -> ClientConfig {
    match ClientConfig::from_toml(CONFIG) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Invalid {}, using defaults: {e}", ClientConfig::filename());
            ClientConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    use_context_provider(load_config);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        BackendProvider {
            AuthProvider {
                Router::<Route> {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_config_parses() {
        let config = ClientConfig::from_toml(CONFIG).unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_routes() {
        assert_eq!(Route::Register {}.to_string(), "/form");
        assert_eq!(Route::Schools {}.to_string(), store::SCHOOLS_PATH);
        assert_eq!(Route::Login {}.to_string(), store::LOGIN_PATH);
        assert_eq!(
            "/no/such/page".parse::<Route>().ok(),
            Some(Route::NotFound {
                segments: vec!["no".to_string(), "such".to_string(), "page".to_string()]
            })
        );
    }
}
