//! Voxrelay Core - relay layer over an upstream text-to-speech API
//!
//! This crate implements the single hop the relay performs: validate an
//! inbound synthesis request, translate it into the upstream API's
//! form-encoded shape, perform the call, and hand back either the full
//! audio body or an incremental byte stream.
//!
//! # Example
//!
//! ```ignore
//! use voxrelay_core::{RelayConfig, RelayService, SynthesisRequest};
//!
//! let relay = RelayService::new(&RelayConfig::default())?;
//! let request = SynthesisRequest::new("Hello, world!")?;
//! let audio = relay.generate_buffered(&request).await?;
//! ```

pub mod config;
pub mod error;
pub mod relay;
pub mod request;
pub mod upstream;

pub use config::{Config, DeliveryMode, RelayConfig, ServerConfig};
pub use error::{Error, Result};
pub use relay::{AudioStream, RelayService};
pub use request::{SynthesisRequest, DEFAULT_VIBE, DEFAULT_VOICE, STYLE_PROMPT};
pub use upstream::UpstreamClient;
