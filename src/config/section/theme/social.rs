//! Social links (icon + external URL).

use super::checked_link;
use crate::config::ConfigDiagnostics;
use serde::{Deserialize, Serialize};

/// Icon names the site theme ships artwork for.
pub const KNOWN_ICONS: &[&str] = &[
    "discord",
    "facebook",
    "github",
    "instagram",
    "linkedin",
    "mastodon",
    "npm",
    "slack",
    "twitter",
    "x",
    "youtube",
];

/// Social link as written in the file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSocialLink {
    pub icon: Option<String>,
    pub link: Option<String>,
    #[serde(alias = "ariaLabel")]
    pub aria_label: Option<String>,
}

/// Icon identifier. Unknown names are kept (the theme may be extended) but warned about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SocialIcon(String);

impl SocialIcon {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_known(&self) -> bool {
        KNOWN_ICONS.contains(&self.0.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub icon: SocialIcon,
    pub link: String,

    /// Accessible label; themes fall back to the icon name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aria_label: Option<String>,
}

impl RawSocialLink {
    pub fn build(&self, path: &str, diag: &mut ConfigDiagnostics) -> Option<SocialLink> {
        let icon = match self.icon.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => {
                let icon = SocialIcon::new(name);
                if !icon.is_known() {
                    diag.warn_with_hint(
                        format!("{path}.icon"),
                        format!("unknown icon `{name}`"),
                        format!("known icons: {}", KNOWN_ICONS.join(", ")),
                    );
                }
                Some(icon)
            }
            _ => {
                diag.error_with_hint(
                    format!("{path}.icon"),
                    "missing required field `icon`",
                    "e.g. icon = \"github\"",
                );
                None
            }
        };

        let link = match self.link.as_deref() {
            Some(link) => checked_link(link, path, diag),
            None => {
                diag.error(format!("{path}.link"), "missing required field `link`");
                None
            }
        };

        if let Some(link) = &link {
            check_external_url(link, path, diag);
        }

        Some(SocialLink {
            icon: icon?,
            link: link?,
            aria_label: self.aria_label.clone(),
        })
    }
}

/// Social links point off-site; anything but an absolute http(s) URL is suspicious.
fn check_external_url(link: &str, path: &str, diag: &mut ConfigDiagnostics) {
    let hint = "use format like https://github.com/someone";
    match url::Url::parse(link) {
        Ok(parsed) if !matches!(parsed.scheme(), "http" | "https") => diag.warn_with_hint(
            format!("{path}.link"),
            format!("scheme '{}' is unusual for a social link", parsed.scheme()),
            hint,
        ),
        Ok(parsed) if parsed.host_str().is_none() => {
            diag.warn_with_hint(format!("{path}.link"), "URL has no host", hint)
        }
        Ok(_) => {}
        Err(e) => diag.warn_with_hint(format!("{path}.link"), format!("invalid URL: {e}"), hint),
    }
}
