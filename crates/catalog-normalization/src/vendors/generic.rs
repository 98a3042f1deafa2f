use catalog_model::Delimiter;

use super::{SourceFormat, VendorProfile};

/// Any header-first delimited file, exported under its own header.
pub(super) fn profile() -> VendorProfile {
    VendorProfile {
        key: "generic".to_string(),
        display_name: "Generic delimited text".to_string(),
        source: SourceFormat::HeaderText,
        default_delimiter: Delimiter::Tab,
        rules: None,
        export_file_name: "converted_data.csv".to_string(),
    }
}
