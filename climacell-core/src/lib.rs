//! Typed client for the ClimaCell weather API.
//!
//! This crate defines:
//! - The catalog of queryable fields and unit systems
//! - Argument validation and request building for the realtime and nowcast endpoints
//! - Classification of API error responses
//! - Response models with optional, unit-tagged values
//! - On-disk configuration used by `climacell-cli`
//!
//! ```no_run
//! # async fn run() -> climacell_core::Result<()> {
//! use climacell_core::{Client, Field, Unit};
//!
//! let client = Client::new("my-api-key")?;
//! let data = client.realtime(52.37, 4.90, Unit::Si, &[Field::Temperature]).await?;
//!
//! if let Some(temp) = data.core.temperature {
//!     println!("temperature: {temp}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod field;
pub mod layer;
pub mod model;
pub mod request;
pub mod transport;
pub mod unit;
pub mod validate;

pub use client::{Client, ClientBuilder, DEFAULT_BASE_URL};
pub use config::{Config, client_from_config};
pub use endpoint::Endpoint;
pub use error::{ConfigError, Error, HttpError, HttpErrorKind, Result, ValidationError};
pub use field::Field;
pub use model::{FloatData, IntData, Measurement, NowcastData, RealtimeData, TextData, TimeData};
pub use request::{NowcastWindow, QueryParams};
pub use transport::{HttpTransport, RawResponse, ReqwestTransport};
pub use unit::Unit;
