use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

use crate::{KeyValueStore, THEME_KEY};

#[derive(
    EnumString,
    Display,
    VariantArray,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn from_preference(prefers_dark: bool) -> Self {
        if prefers_dark { Theme::Dark } else { Theme::Light }
    }
}

/// Returns the stored theme. Unreadable storage and unknown values count as
/// no choice.
pub async fn saved_theme(store: &dyn KeyValueStore) -> Option<Theme> {
    match store.get(THEME_KEY).await {
        Ok(value) => value.and_then(|v| Theme::from_str(&v).ok()),
        Err(err) => {
            tracing::warn!(error = %err, "theme storage unavailable");
            None
        }
    }
}

pub async fn save_theme(store: &dyn KeyValueStore, theme: Theme) {
    if let Err(err) = store.set(THEME_KEY, theme.as_ref()).await {
        tracing::warn!(error = %err, %theme, "failed to persist theme");
    }
}

/// Saved theme, or the system preference when nothing is stored.
pub async fn resolve(store: &dyn KeyValueStore, prefers_dark: bool) -> Theme {
    saved_theme(store)
        .await
        .unwrap_or_else(|| Theme::from_preference(prefers_dark))
}

/// Same as [`resolve`], and persists the result.
pub async fn init(store: &dyn KeyValueStore, prefers_dark: bool) -> Theme {
    let theme = resolve(store, prefers_dark).await;
    save_theme(store, theme).await;

    theme
}

pub async fn toggle(store: &dyn KeyValueStore, current: Theme) -> Theme {
    let theme = current.toggled();
    save_theme(store, theme).await;

    theme
}
