//! Clipboard handling for copying the rendered code.
//!
//! Copies run off the UI thread; the result comes back through a `flume`
//! channel that the app drains every frame.

use flume::Sender;
use simpleqr_business::{CopyError, RenderedCode};

pub type CopyResult = Result<(), CopyError>;

/// Trait for writing an image to the clipboard, enabling mock implementations for testing.
pub trait ClipboardSink {
    /// Starts copying `code`; exactly one result must be sent on `done`.
    fn copy_image(&self, code: RenderedCode, done: Sender<CopyResult>);
}

fn report(done: &Sender<CopyResult>, result: CopyResult) {
    if done.send(result).is_err() {
        log::debug!("Copy finished after the app went away");
    }
}

#[cfg(not(target_arch = "wasm32"))]
type CopyJob = (RenderedCode, Sender<CopyResult>);

/// Default clipboard sink using the system clipboard.
///
/// On native targets one worker thread owns the `arboard::Clipboard` for the
/// lifetime of the app. X11 and Wayland only serve clipboard contents while
/// the owning handle is alive, so the handle must outlive each copy.
#[derive(Debug, Default)]
pub struct SystemClipboard {
    #[cfg(not(target_arch = "wasm32"))]
    worker: std::cell::OnceCell<Sender<CopyJob>>,
}

#[cfg(not(target_arch = "wasm32"))]
impl ClipboardSink for SystemClipboard {
    fn copy_image(&self, code: RenderedCode, done: Sender<CopyResult>) {
        let worker = self.worker.get_or_init(spawn_worker);
        if let Err(flume::SendError((_, done))) = worker.send((code, done)) {
            log::warn!("Clipboard worker is not running");
            report(
                &done,
                Err(CopyError::Unavailable("clipboard worker stopped".to_owned())),
            );
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn spawn_worker() -> Sender<CopyJob> {
    let (jobs, queue) = flume::unbounded::<CopyJob>();
    let spawned = std::thread::Builder::new()
        .name("simpleqr-clipboard".to_owned())
        .spawn(move || {
            let mut clipboard = None;
            for (code, done) in queue.iter() {
                report(&done, write_image(&mut clipboard, &code));
            }
            log::debug!("Clipboard worker stopped");
        });
    if let Err(e) = spawned {
        log::warn!("Failed to start clipboard worker: {e}");
    }
    jobs
}

/// Writes the image through arboard, which publishes it as `image/png`.
///
/// The handle is created on first use and kept in `slot`; a failed write
/// drops it so the next copy reconnects.
#[cfg(not(target_arch = "wasm32"))]
fn write_image(slot: &mut Option<arboard::Clipboard>, code: &RenderedCode) -> CopyResult {
    use std::borrow::Cow;

    use arboard::{Clipboard, ImageData};

    if slot.is_none() {
        let clipboard = Clipboard::new().map_err(|e| {
            log::warn!("Failed to access clipboard: {e}");
            CopyError::Unavailable(e.to_string())
        })?;
        *slot = Some(clipboard);
    }
    let Some(clipboard) = slot.as_mut() else {
        return Err(CopyError::Unavailable("no clipboard handle".to_owned()));
    };

    let written = clipboard.set_image(ImageData {
        width: code.width(),
        height: code.height(),
        bytes: Cow::Borrowed(code.rgba()),
    });
    if let Err(e) = written {
        log::warn!("Failed to write clipboard image: {e}");
        *slot = None;
        return Err(CopyError::Rejected(e.to_string()));
    }

    log::info!(
        "Copied QR code to clipboard: width={}, height={}",
        code.width(),
        code.height()
    );
    Ok(())
}

/// Writes a PNG `ClipboardItem` through the async Clipboard API.
///
/// Browsers without `navigator.clipboard` (insecure contexts, old engines)
/// report [`CopyError::Unsupported`].
#[cfg(target_arch = "wasm32")]
impl ClipboardSink for SystemClipboard {
    fn copy_image(&self, code: RenderedCode, done: Sender<CopyResult>) {
        let write = match start_web_copy(&code) {
            Ok(write) => write,
            Err(e) => {
                log::warn!("Clipboard copy could not start: {e}");
                report(&done, Err(e));
                return;
            }
        };

        wasm_bindgen_futures::spawn_local(async move {
            let result = wasm_bindgen_futures::JsFuture::from(write)
                .await
                .map(|_| {
                    log::info!(
                        "Copied QR code to clipboard: width={}, height={}",
                        code.width(),
                        code.height()
                    );
                })
                .map_err(|e| {
                    log::warn!("Clipboard rejected the image: {e:?}");
                    CopyError::Rejected(format!("{e:?}"))
                });
            report(&done, result);
        });
    }
}

#[cfg(target_arch = "wasm32")]
fn start_web_copy(code: &RenderedCode) -> Result<web_sys::js_sys::Promise, CopyError> {
    use wasm_bindgen::JsValue;
    use web_sys::js_sys::{Array, Object, Reflect, Uint8Array};
    use web_sys::{Blob, BlobPropertyBag, ClipboardItem};

    use super::png::{PNG_MIME, encode_png};

    let js_err = |err: JsValue| CopyError::Rejected(format!("{err:?}"));

    let navigator = web_sys::window()
        .ok_or(CopyError::Unsupported)?
        .navigator();
    if !Reflect::has(&navigator, &JsValue::from_str("clipboard")).unwrap_or(false) {
        return Err(CopyError::Unsupported);
    }

    let png = encode_png(code).map_err(|e| {
        log::warn!("Failed to encode PNG for clipboard: {e}");
        CopyError::NoImage
    })?;
    let parts = Array::of1(&Uint8Array::from(png.as_slice()));
    let options = BlobPropertyBag::new();
    options.set_type(PNG_MIME);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_err)?;

    let record = Object::new();
    Reflect::set(&record, &JsValue::from_str(PNG_MIME), &blob).map_err(js_err)?;
    let item = ClipboardItem::new_with_record_from_str_to_blob_promise(&record).map_err(js_err)?;

    Ok(navigator.clipboard().write(&Array::of1(&item)))
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use std::time::Duration;

    use super::*;

    fn code() -> RenderedCode {
        RenderedCode::new(2, 2, vec![255; 16]).expect("valid buffer")
    }

    #[test]
    fn test_one_worker_answers_every_copy() {
        let clipboard = SystemClipboard::default();
        let (done, results) = flume::unbounded();

        clipboard.copy_image(code(), done.clone());
        clipboard.copy_image(code(), done);

        // Headless runners have no clipboard; either way each copy gets one answer.
        for _ in 0..2 {
            results
                .recv_timeout(Duration::from_secs(10))
                .expect("copy result");
        }
        assert!(clipboard.worker.get().is_some());
        assert!(results.try_recv().is_err());
    }

    #[test]
    fn test_stopped_worker_reports_unavailable() {
        let clipboard = SystemClipboard::default();
        let (jobs, queue) = flume::unbounded::<CopyJob>();
        drop(queue);
        assert!(clipboard.worker.set(jobs).is_ok());
        let (done, results) = flume::unbounded();

        clipboard.copy_image(code(), done);

        assert!(matches!(
            results.try_recv(),
            Ok(Err(CopyError::Unavailable(_)))
        ));
    }
}
