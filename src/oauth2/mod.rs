//! OAuth 2.0 message types.
//!
//! Plain value types modeling the [Authorization Code grant][code] and the
//! [token endpoint][token] exchange, as defined in [RFC 6749][rfc6749]. They
//! carry no HTTP wiring: send them with a [`Client`](crate::Client), for
//! instance through [`Client::post_form`](crate::Client::post_form), or decode
//! them from its responses.
//!
//! [rfc6749]: https://datatracker.ietf.org/doc/html/rfc6749
//! [code]: https://datatracker.ietf.org/doc/html/rfc6749#section-4.1
//! [token]: https://datatracker.ietf.org/doc/html/rfc6749#section-3.2
mod authorization;
mod error;
mod token;

pub use authorization::*;
pub use error::*;
pub use token::*;
