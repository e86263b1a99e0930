//! Host-independent logic for the portfolio site: content, card views,
//! scroll and reveal tracking, the animated backgrounds, and the contact
//! form state machine. The browser glue lives in `portfolio-wasm`.

pub mod cards;
pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod markup;
pub mod reveal;
pub mod scene;
pub mod scroll;
pub mod timeline;

pub use config::SiteConfig;
pub use content::Portfolio;
pub use error::{ConfigError, ContentError, DeliveryError, RenderingUnavailable, ValidationError};
