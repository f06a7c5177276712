//! Blocking client for the MusicBrainz WS2 search API.
//!
//! ```no_run
//! use musicbrainz_ws2::{Ws2Client, OMIT_PARAM};
//!
//! let client = Ws2Client::new(
//!     "https://musicbrainz.org/ws/2",
//!     "myapp",
//!     "0.1.0",
//!     "me@example.com",
//! )?;
//! let response = client.search_artist("Nirvana", 5, OMIT_PARAM)?;
//! for (artist, score) in response.scored() {
//!     println!("{score:>3} {}", artist.name);
//! }
//! # Ok::<(), musicbrainz_ws2::Ws2Error>(())
//! ```
//!
//! Search terms use the Lucene syntax understood by the MusicBrainz search
//! server. `limit` and `offset` set to [`OMIT_PARAM`] are left out of the
//! request.

pub mod client;
pub mod config;
pub mod entity;
pub mod error;
pub mod query;
pub mod response;
pub mod xml;

pub use client::Ws2Client;
pub use config::{ClientConfig, ClientInfo, HttpConfig, DEFAULT_ROOT_URL};
pub use entity::{EntityKind, SearchEntity};
pub use error::{DecodeError, Result, Ws2Error};
pub use query::{SearchParams, OMIT_PARAM};
pub use response::{ListHeader, Scored, ScoredList, SearchResponse};
