pub mod api;
pub mod lookup;
pub mod transport;

pub use lookup::{LookupError, WordLookup};
pub use reqwest::StatusCode;
pub use transport::{HttpTransport, Transport, TransportError};
