use crate::formats::Layout;
use crate::header::populate;
use crate::{ImageInfo, Report, make_stub_report};

/// Build a report for an in-memory image.
///
/// An image without a usable header still yields a report: `image` and
/// `header` stay empty and `unofficial_reason` explains why. Header
/// unavailability is never an error at this level.
pub fn inspect_image(input_path: &str, image: &[u8], hint: Option<Layout>) -> Report {
    let mut report = make_stub_report(input_path, image.len() as u64);
    match populate(image, hint) {
        Ok(header) => {
            report.image = Some(ImageInfo {
                layout: header.layout(),
                subvariant: header.subvariant(),
            });
            report.header = Some(header.to_reports());
        }
        Err(err) => {
            tracing::debug!(error = %err, "unofficial image");
            report.unofficial_reason = Some(err.to_string());
        }
    }
    report
}
