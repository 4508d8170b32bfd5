use tracing::debug;

use crate::contracts::Avatar;

pub trait AvatarProvider {
    fn avatar(&self, seed: &str, display_name: &str) -> Option<Avatar>;
}

/// Builds avatars from the initials of the display name. Names without any
/// alphanumeric word produce nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct InitialsAvatarProvider;

impl AvatarProvider for InitialsAvatarProvider {
    fn avatar(&self, seed: &str, display_name: &str) -> Option<Avatar> {
        let initials: String = display_name
            .split_whitespace()
            .filter(|word| !word.ends_with('.'))
            .filter_map(|word| word.chars().find(|ch| ch.is_alphanumeric()))
            .flat_map(char::to_uppercase)
            .take(2)
            .collect();
        if initials.is_empty() {
            return None;
        }
        Some(Avatar {
            seed: seed.to_string(),
            initials,
            image_url: None,
        })
    }
}

/// Attaches a hosted image URL on top of another provider's avatar.
#[derive(Debug, Clone)]
pub struct HostedAvatarProvider<P> {
    base_url: String,
    inner: P,
}

impl<P: AvatarProvider> HostedAvatarProvider<P> {
    pub fn new(base_url: impl Into<String>, inner: P) -> Self {
        Self {
            base_url: base_url.into(),
            inner,
        }
    }
}

impl<P: AvatarProvider> AvatarProvider for HostedAvatarProvider<P> {
    fn avatar(&self, seed: &str, display_name: &str) -> Option<Avatar> {
        if seed.trim().is_empty() {
            return None;
        }
        let mut avatar = self.inner.avatar(seed, display_name)?;
        avatar.image_url = Some(format!("{}?seed={}", self.base_url, seed));
        Some(avatar)
    }
}

pub const DICEBEAR_BASE_URL: &str = "https://api.dicebear.com/7.x/avataaars/svg";

/// Failure is never surfaced; callers always get something to draw.
pub fn avatar_or_placeholder(
    provider: &dyn AvatarProvider,
    seed: &str,
    display_name: &str,
) -> Avatar {
    provider.avatar(seed, display_name).unwrap_or_else(|| {
        debug!(seed, "avatar unavailable, using placeholder");
        Avatar::placeholder(seed)
    })
}
