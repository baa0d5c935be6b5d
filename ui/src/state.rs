use flume::{Receiver, Sender};
use simpleqr_business::{AppConfig, Controller, LogAnalytics, Theme};

use crate::utils::clipboard::CopyResult;
use crate::utils::qr::QrEncoder;

/// The main application state.
///
/// Note: We manually implement Default because the copy result channel
/// doesn't implement Default.
pub struct State {
    /// Owns the form values and the rendered output.
    pub controller: Controller,
    /// Sender handed to clipboard writers.
    pub copy_result_sender: Sender<CopyResult>,
    /// Receiver drained once per frame.
    pub copy_result_receiver: Receiver<CopyResult>,
}

impl Default for State {
    fn default() -> Self {
        Self::new(&AppConfig::default(), Theme::default())
    }
}

impl State {
    pub fn new(config: &AppConfig, theme: Theme) -> Self {
        let analytics: Option<Box<dyn simpleqr_business::Analytics>> = if config.analytics {
            Some(Box::new(LogAnalytics))
        } else {
            None
        };
        let controller = Controller::new(
            theme,
            config.defaults.clone(),
            Some(Box::new(QrEncoder)),
            analytics,
        );
        let (copy_result_sender, copy_result_receiver) = flume::unbounded();

        Self {
            controller,
            copy_result_sender,
            copy_result_receiver,
        }
    }

    /// State with analytics disabled and the given theme.
    pub fn test(theme: Theme) -> Self {
        let config = AppConfig {
            analytics: false,
            ..AppConfig::default()
        };
        Self::new(&config, theme)
    }

    /// Collects finished copies without blocking.
    pub fn poll_copy_results(&self) -> Vec<CopyResult> {
        self.copy_result_receiver.try_iter().collect()
    }
}
