//! UI-free core of SimpleQR.
//!
//! Everything here can be driven without a window: the [`Controller`] owns the
//! form state and the current output, and the shell feeds it [`Event`]s and
//! executes the [`Effect`]s it returns.

mod analytics;
mod config;
mod controller;
mod encoder;
mod error;
mod filename;
mod settings;
mod status;
mod theme;

pub use analytics::{Analytics, AnalyticsEvent, LogAnalytics, TriggerSource};
pub use config::{AppConfig, ConfigError};
pub use controller::{ButtonStates, Controller, Effect, Event, OutputView, UiState};
pub use encoder::{Encoder, RenderedCode};
pub use error::{CopyError, EncodeError, SaveError};
pub use filename::{DEFAULT_FILENAME, download_filename, sanitize_filename};
pub use settings::{
    DefaultSettings, ErrorCorrectionLevel, MAX_SIZE, MIN_SIZE, ParseLevelError, RenderSettings,
    SIZE_CHOICES, clamp_size,
};
pub use status::{Status, StatusKind, messages};
pub use theme::{Palette, THEME_STORAGE_KEY, Theme};
