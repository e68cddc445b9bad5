//! `[serve]`: how `vitae serve` previews the built page.
//!
//! The server only ever reads `[build].output`; everything it serves is
//! produced by the same `build_site` pass as `vitae build`.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// Preview server settings.
///
/// ```toml
/// [serve]
/// interface = "0.0.0.0"  # reachable from a phone on the same network
/// port = 5277            # the next free port is used when taken
/// watch = false          # serve a fixed build
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ServeConfig {
    /// Address to listen on. Loopback by default, so the preview is private
    /// unless opted in.
    #[serde(default = "defaults::serve::interface")]
    #[educe(Default = defaults::serve::interface())]
    pub interface: String,

    /// First port tried. Up to nine following ports are attempted when it is
    /// in use.
    #[serde(default = "defaults::serve::port")]
    #[educe(Default = defaults::serve::port())]
    pub port: u16,

    /// Watch `vitae.toml`, `resume.toml` and `assets/` and rebuild the page
    /// on change. Edits to `vitae.toml` are hot-reloaded before the rebuild.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub watch: bool,
}
