//! Skin rendering via the public, sessionless renderer

use std::fmt;
use url::Url;

use crate::client::api::WolfyClient;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkinFormat {
    Png,
    Svg,
}

impl SkinFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SkinProfile {
    /// Whole skin
    #[default]
    Full,
    /// Face, centered
    Center,
    /// Face, right-facing
    Right,
}

impl SkinProfile {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

/// Render size, only honored for PNG
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SkinSize {
    #[default]
    Default,
    Large,
    Small,
}

impl SkinSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "",
            Self::Large => "large",
            Self::Small => "small",
        }
    }
}

impl fmt::Display for SkinFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for SkinProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Renderer URL for a user's skin.
///
/// `profile` is omitted for the full render, and `size` is only sent for
/// PNG with a non-default size.
pub fn skin_render_url(
    media_base: &Url,
    user_id: &str,
    format: SkinFormat,
    profile: SkinProfile,
    size: SkinSize,
) -> Result<Url> {
    let file = format!("user.{}", format.as_str());
    let mut url = media_base
        .join(&file)
        .map_err(|e| Error::malformed_path(file.as_str(), e))?;

    {
        let mut query = url.query_pairs_mut();
        query.append_pair("id", user_id);
        if profile != SkinProfile::Full {
            query.append_pair("profile", profile.as_str());
        }
        if format == SkinFormat::Png && size != SkinSize::Default {
            query.append_pair("size", size.as_str());
        }
    }
    Ok(url)
}

impl WolfyClient {
    /// Fetch the rendered skin image of a user as raw bytes.
    ///
    /// The renderer is public; this request never carries the session.
    pub async fn skin_image(
        &self,
        user_id: &str,
        format: SkinFormat,
        profile: SkinProfile,
        size: SkinSize,
    ) -> Result<Vec<u8>> {
        let url = skin_render_url(self.media_url(), user_id, format, profile, size)?;
        self.fetch_media(url).await
    }
}
