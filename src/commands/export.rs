//! Image Exporter
//!
//! Captures the preview card as PNG and hands it to the browser as a
//! download.

use dom_snapshot::{CaptureOptions, Readiness, SnapshotError};

use crate::error::ExportError;

pub const NOT_READY_NOTICE: &str = "Still loading... please try again in a second!";
pub const FAILED_NOTICE: &str = "Download failed. Try again!";
pub const FILENAME_FALLBACK: &str = "info-card";

/// Turns the rendered card into a PNG data URL
pub trait Rasterizer {
    async fn capture(&self) -> Result<String, SnapshotError>;
}

/// User-facing side of an export
pub trait ExportSink {
    /// Blocking notice
    fn notify(&self, message: &str);
    fn save(&self, data_url: &str, filename: &str) -> Result<(), SnapshotError>;
}

/// html2canvas capture of one element
pub struct CardRasterizer {
    pub node: web_sys::HtmlElement,
    pub global: String,
    pub options: CaptureOptions,
}

impl Rasterizer for CardRasterizer {
    async fn capture(&self) -> Result<String, SnapshotError> {
        dom_snapshot::capture_png(&self.node, &self.global, &self.options).await
    }
}

/// `alert()` plus anchor download
pub struct BrowserSink;

impl ExportSink for BrowserSink {
    fn notify(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    fn save(&self, data_url: &str, filename: &str) -> Result<(), SnapshotError> {
        dom_snapshot::save_data_url(data_url, filename)
    }
}

/// `<name-or-info-card>-<unix millis>.png`
pub fn export_filename(place_name: Option<&str>, millis: u64) -> String {
    format!("{}-{}.png", place_name.unwrap_or(FILENAME_FALLBACK), millis)
}

/// Run one export. Returns the saved filename.
///
/// `rasterizer` is `None` when the card node is not mounted; that is
/// treated like the library still loading.
pub async fn export_card<R: Rasterizer, S: ExportSink>(
    readiness: &Readiness,
    rasterizer: Option<&R>,
    sink: &S,
    place_name: Option<&str>,
    millis: u64,
) -> Result<String, ExportError> {
    let rasterizer = match rasterizer {
        Some(r) if readiness.is_ready() => r,
        _ => {
            tracing::warn!(?readiness, "export requested before capture was ready");
            sink.notify(NOT_READY_NOTICE);
            return Err(ExportError::NotReady);
        }
    };

    let saved = async {
        let data_url = rasterizer.capture().await?;
        let filename = export_filename(place_name, millis);
        sink.save(&data_url, &filename)?;
        Ok::<_, SnapshotError>(filename)
    }
    .await;

    saved.map_err(|e| {
        tracing::error!("card export failed: {}", e);
        sink.notify(FAILED_NOTICE);
        ExportError::from(e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;

    struct FakeRasterizer(Result<String, SnapshotError>);

    impl Rasterizer for FakeRasterizer {
        async fn capture(&self) -> Result<String, SnapshotError> {
            self.0.clone()
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        notices: RefCell<Vec<String>>,
        saved: RefCell<Vec<(String, String)>>,
    }

    impl ExportSink for RecordingSink {
        fn notify(&self, message: &str) {
            self.notices.borrow_mut().push(message.to_string());
        }

        fn save(&self, data_url: &str, filename: &str) -> Result<(), SnapshotError> {
            self.saved
                .borrow_mut()
                .push((data_url.to_string(), filename.to_string()));
            Ok(())
        }
    }

    const PNG: &str = "data:image/png;base64,iVBORw0KGgo=";

    #[test]
    fn test_filename() {
        assert_eq!(export_filename(Some("Gwangjang Market"), 1700000000000), "Gwangjang Market-1700000000000.png");
        assert_eq!(export_filename(None, 42), "info-card-42.png");
    }

    #[test]
    fn test_not_loaded_shows_notice_and_saves_nothing() {
        let sink = RecordingSink::default();
        let rasterizer = FakeRasterizer(Ok(PNG.into()));

        let result = block_on(export_card(&Readiness::Pending, Some(&rasterizer), &sink, Some("Cafe"), 1));

        assert_eq!(result, Err(ExportError::NotReady));
        assert_eq!(*sink.notices.borrow(), vec![NOT_READY_NOTICE.to_string()]);
        assert!(sink.saved.borrow().is_empty());
    }

    #[test]
    fn test_missing_node_counts_as_not_ready() {
        let sink = RecordingSink::default();
        let result = block_on(export_card::<FakeRasterizer, _>(&Readiness::Ready, None, &sink, None, 1));
        assert_eq!(result, Err(ExportError::NotReady));
        assert!(sink.saved.borrow().is_empty());
    }

    #[test]
    fn test_failed_load_is_not_ready() {
        let sink = RecordingSink::default();
        let rasterizer = FakeRasterizer(Ok(PNG.into()));
        let readiness = Readiness::Failed("blocked".into());

        let result = block_on(export_card(&readiness, Some(&rasterizer), &sink, None, 1));
        assert_eq!(result, Err(ExportError::NotReady));
    }

    #[test]
    fn test_successful_export_saves_png() {
        let sink = RecordingSink::default();
        let rasterizer = FakeRasterizer(Ok(PNG.into()));

        let result = block_on(export_card(&Readiness::Ready, Some(&rasterizer), &sink, Some("N Seoul Tower"), 99));

        assert_eq!(result.unwrap(), "N Seoul Tower-99.png");
        assert_eq!(
            *sink.saved.borrow(),
            vec![(PNG.to_string(), "N Seoul Tower-99.png".to_string())]
        );
        assert!(sink.notices.borrow().is_empty());
    }

    #[test]
    fn test_capture_failure_shows_generic_notice() {
        let sink = RecordingSink::default();
        let rasterizer = FakeRasterizer(Err(SnapshotError::Capture("tainted canvas".into())));

        let result = block_on(export_card(&Readiness::Ready, Some(&rasterizer), &sink, None, 1));

        assert_eq!(
            result,
            Err(ExportError::Capture(SnapshotError::Capture("tainted canvas".into())))
        );
        assert_eq!(*sink.notices.borrow(), vec![FAILED_NOTICE.to_string()]);
        assert!(sink.saved.borrow().is_empty());
    }
}
