//! Saving the rendered code as a PNG file.
//!
//! - **Native**: a save dialog via `rfd`, then a plain file write.
//! - **Web (WASM)**: a synthesized anchor download of a Blob URL.

use simpleqr_business::SaveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    Cancelled,
}

/// Trait for saving PNG bytes, enabling mock implementations for testing.
pub trait PngSaver {
    fn save_png(&self, filename: &str, png: &[u8]) -> Result<SaveOutcome, SaveError>;
}

/// Default saver for the current platform.
#[derive(Debug, Default)]
pub struct SystemSaver;

#[cfg(not(target_arch = "wasm32"))]
impl PngSaver for SystemSaver {
    fn save_png(&self, filename: &str, png: &[u8]) -> Result<SaveOutcome, SaveError> {
        use rfd::FileDialog;

        let Some(path) = FileDialog::new()
            .add_filter("PNG image", &["png"])
            .set_file_name(filename)
            .set_title("Save QR code")
            .save_file()
        else {
            log::debug!("Save dialog cancelled");
            return Ok(SaveOutcome::Cancelled);
        };

        std::fs::write(&path, png).map_err(|e| {
            log::warn!("Failed to write {}: {e}", path.display());
            SaveError::Io(e.to_string())
        })?;
        log::info!("Saved QR code to {}", path.display());
        Ok(SaveOutcome::Saved)
    }
}

#[cfg(target_arch = "wasm32")]
impl PngSaver for SystemSaver {
    fn save_png(&self, filename: &str, png: &[u8]) -> Result<SaveOutcome, SaveError> {
        use wasm_bindgen::JsCast as _;
        use web_sys::js_sys::{Array, Uint8Array};
        use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

        let js_err = |err: wasm_bindgen::JsValue| SaveError::Platform(format!("{err:?}"));
        let no_document = || SaveError::Platform("no document".to_owned());

        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(no_document)?;

        let parts = Array::of1(&Uint8Array::from(png));
        let options = BlobPropertyBag::new();
        options.set_type(super::png::PNG_MIME);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_err)?;
        let url = Url::create_object_url_with_blob(&blob).map_err(js_err)?;

        let anchor = document
            .create_element("a")
            .map_err(js_err)?
            .dyn_into::<HtmlAnchorElement>()
            .map_err(|_| SaveError::Platform("anchor element".to_owned()))?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.click();

        Url::revoke_object_url(&url).map_err(js_err)?;
        Ok(SaveOutcome::Saved)
    }
}
