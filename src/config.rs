//! Widget configuration with defaults and host-element overrides.
//!
//! SYSTEM CONTEXT
//! ==============
//! The widget is mounted into markup owned by the host page. Everything the
//! page may want to tune (endpoint, CSRF names, accepted file types) is read
//! from `data-*` attributes on the mount element; anything absent falls back
//! to the defaults below.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_CHAT_ENDPOINT: &str = "/chat/";
pub const DEFAULT_CSRF_COOKIE: &str = "csrftoken";
pub const DEFAULT_CSRF_HEADER: &str = "X-CSRFToken";
pub const DEFAULT_ACCEPT: &str = "image/*";

pub const QUOTA_EXCEEDED_ERROR: &str = "API quota exceeded. Please try again later.";
pub const BUSY_FALLBACK: &str = "The service is currently busy. Please try again in a few minutes.";
pub const GENERIC_FALLBACK: &str = "Sorry, something went wrong. Please try again.";

/// User-facing texts shown in place of a failed reply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FallbackMessages {
    /// Application error string that marks a quota-exceeded condition.
    pub quota_error: String,
    /// Shown when the server reports `quota_error`.
    pub busy: String,
    /// Shown for every other failure.
    pub generic: String,
}

impl Default for FallbackMessages {
    fn default() -> Self {
        Self {
            quota_error: QUOTA_EXCEEDED_ERROR.to_owned(),
            busy: BUSY_FALLBACK.to_owned(),
            generic: GENERIC_FALLBACK.to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetConfig {
    pub endpoint: String,
    pub csrf_cookie: String,
    pub csrf_header: String,
    /// Value for the file input's `accept` attribute.
    pub accept: String,
    pub log_level: log::Level,
    pub fallbacks: FallbackMessages,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_CHAT_ENDPOINT.to_owned(),
            csrf_cookie: DEFAULT_CSRF_COOKIE.to_owned(),
            csrf_header: DEFAULT_CSRF_HEADER.to_owned(),
            accept: DEFAULT_ACCEPT.to_owned(),
            log_level: log::Level::Info,
            fallbacks: FallbackMessages::default(),
        }
    }
}

impl WidgetConfig {
    /// Build config from attribute lookups on the mount element.
    ///
    /// Recognised attributes:
    /// - `data-endpoint`: chat endpoint URL (default `/chat/`)
    /// - `data-csrf-cookie`: cookie holding the CSRF token (default `csrftoken`)
    /// - `data-csrf-header`: header carrying the token (default `X-CSRFToken`)
    /// - `data-accept`: file input `accept` filter (default `image/*`)
    /// - `data-log-level`: `error`, `warn`, `info`, `debug` or `trace`
    ///
    /// Blank values are treated as absent. An unparseable log level keeps the
    /// default.
    pub fn from_attributes<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let attr = |name: &str| lookup(name).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        Self {
            endpoint: attr("data-endpoint").unwrap_or(defaults.endpoint),
            csrf_cookie: attr("data-csrf-cookie").unwrap_or(defaults.csrf_cookie),
            csrf_header: attr("data-csrf-header").unwrap_or(defaults.csrf_header),
            accept: attr("data-accept").unwrap_or(defaults.accept),
            log_level: attr("data-log-level")
                .and_then(|v| v.parse::<log::Level>().ok())
                .unwrap_or(defaults.log_level),
            fallbacks: defaults.fallbacks,
        }
    }

    /// Read overrides from the `data-*` attributes of `element`.
    #[cfg(feature = "csr")]
    pub fn from_element(element: &web_sys::Element) -> Self {
        Self::from_attributes(|name| element.get_attribute(name))
    }
}
