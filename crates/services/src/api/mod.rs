//! HTTP helper: every backend call goes through [`ApiClient`].

mod client;
mod scripted;
mod transport;

pub use client::ApiClient;
pub use scripted::ScriptedTransport;
pub use transport::{ApiRequest, ApiResponse, HttpMethod, HttpTransport, ReqwestTransport};
