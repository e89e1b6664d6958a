//! Textual metadata fields embedded in exported tiles

use crate::io::configuration::{CREATION_TIME_FORMAT, SOFTWARE_NAME};
use crate::model::license::LicenseInfo;
use chrono::{DateTime, Utc};

/// Build the (keyword, value) text fields for a tile written at `created`
///
/// Empty license fields are omitted. The author keyword is "Original
/// Author" on purpose: the exporting tool must not present itself as the
/// artwork's creator.
pub fn text_fields(license: &LicenseInfo, created: DateTime<Utc>) -> Vec<(String, String)> {
    let mut fields = vec![
        ("Software".to_string(), SOFTWARE_NAME.to_string()),
        (
            "Creation Time".to_string(),
            created.format(CREATION_TIME_FORMAT).to_string(),
        ),
    ];

    if !license.license_text.is_empty() {
        fields.push(("License".to_string(), license.license_text.clone()));
    }
    if !license.license_url.is_empty() {
        fields.push(("License URL".to_string(), license.license_url.clone()));
    }
    if !license.author.is_empty() {
        fields.push(("Original Author".to_string(), license.author.clone()));
    }
    if !license.source_url.is_empty() {
        fields.push(("Source".to_string(), license.source_url.clone()));
    }
    if let Some(name) = &license.normalized_name {
        fields.push(("Copyright".to_string(), name.clone()));
    }

    fields
}
