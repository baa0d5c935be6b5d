//! QR code generation utilities.

use egui::ColorImage;
use qrcode::types::QrError;
use qrcode::{EcLevel, QrCode};
use simpleqr_business::{EncodeError, Encoder, ErrorCorrectionLevel, RenderSettings, RenderedCode};

/// Light modules drawn around the symbol on every side.
pub const QUIET_ZONE: usize = 4;

/// [`Encoder`] backed by the `qrcode` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct QrEncoder;

impl Encoder for QrEncoder {
    fn encode(&self, settings: &RenderSettings) -> Result<RenderedCode, EncodeError> {
        let code = QrCode::with_error_correction_level(
            settings.text.as_bytes(),
            ec_level(settings.level),
        )
        .map_err(|err| match err {
            QrError::DataTooLong => EncodeError::DataTooLong(settings.level),
            other => EncodeError::Invalid(other.to_string()),
        })?;

        let qr_width = code.width();
        let modules = qr_width + 2 * QUIET_ZONE;

        // Calculate scale factor to fit the desired size (minimum scale of 1)
        let scale = (settings.size as usize / modules).max(1);
        let actual_size = modules * scale;

        let dark = settings.foreground.to_srgba_unmultiplied();
        let light = settings.background.to_srgba_unmultiplied();
        let colors = code.to_colors();

        let mut rgba = Vec::with_capacity(actual_size * actual_size * 4);
        for py in 0..actual_size {
            let my = py / scale;
            for px in 0..actual_size {
                let mx = px / scale;
                let is_dark = (QUIET_ZONE..QUIET_ZONE + qr_width).contains(&mx)
                    && (QUIET_ZONE..QUIET_ZONE + qr_width).contains(&my)
                    && colors[(my - QUIET_ZONE) * qr_width + (mx - QUIET_ZONE)]
                        == qrcode::Color::Dark;
                rgba.extend_from_slice(if is_dark { &dark } else { &light });
            }
        }

        RenderedCode::new(actual_size, actual_size, rgba)
    }
}

fn ec_level(level: ErrorCorrectionLevel) -> EcLevel {
    match level {
        ErrorCorrectionLevel::Low => EcLevel::L,
        ErrorCorrectionLevel::Medium => EcLevel::M,
        ErrorCorrectionLevel::Quartile => EcLevel::Q,
        ErrorCorrectionLevel::High => EcLevel::H,
    }
}

/// Converts a rendered code into an image egui can upload as a texture.
pub fn to_color_image(code: &RenderedCode) -> ColorImage {
    ColorImage::from_rgba_unmultiplied([code.width(), code.height()], code.rgba())
}
