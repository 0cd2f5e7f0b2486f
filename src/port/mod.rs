//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! The application layer drives three external collaborators through
//! these traits, so the pipeline and the command poller can run against
//! scripted fakes in tests.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │      Application        │
//!     ┌──────────────┤  pipeline + poller      ├──────────────┐
//!     │              └─────────────────────────┘              │
//!     ▼                         ▼                             ▼
//! ┌─────────┐            ┌─────────────┐              ┌───────────┐
//! │  Page   │            │    Bot      │              │   Delay   │
//! │ Fetcher │            │  Transport  │              │           │
//! └─────────┘            └─────────────┘              └───────────┘
//! ```

pub mod outbound;

pub use outbound::delay::Delay;
pub use outbound::fetch::PageFetcher;
pub use outbound::transport::{BotTransport, InboundUpdate};
