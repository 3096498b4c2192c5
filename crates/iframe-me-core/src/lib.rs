pub mod config;
pub mod error;
pub mod http;
pub mod logging;
pub mod markup;
pub mod reachability;
pub mod renderer;

pub use error::{ConfigurationError, RenderError, RequestError};
pub use http::{CurlClient, HttpClient, HttpResponse, TransportError};
pub use markup::EmbedAttributes;
pub use reachability::Reachability;
pub use renderer::{render, Renderer};
