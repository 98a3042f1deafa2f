use catalog_model::Delimiter;

use super::{SourceFormat, VendorProfile};
use crate::error::Result;
use crate::types::{FieldRule, RuleSet};

pub(super) fn profile() -> Result<VendorProfile> {
    let rules = RuleSet::new(
        "Uneek",
        vec![
            // Descriptions read "Range - Category - Product"
            FieldRule::last_segment("ProductName", "Description", " - "),
            FieldRule::blank("ProductDescription"),
            FieldRule::constant("Brand", "Uneek"),
            FieldRule::constant("DNProductType", "Apparel"),
            FieldRule::copy("VendorProductCode", "ProductCode"),
            FieldRule::copy("VendorSkuCode", "ItemNo"),
            FieldRule::copy("Groupname", "Groupname"),
            FieldRule::copy("ColorName", "ColourDesc"),
            FieldRule::copy("SizeCode", "SizeCode"),
            FieldRule::copy("SizeName", "SizeDesc"),
            FieldRule::copy("ShippingWeight", "Weight"),
            FieldRule::copy("Weightgsm", "Weightgsm"),
            FieldRule::copy("Picture_url", "Picture_url"),
            FieldRule::copy("VendorCost", "Price"),
        ],
    )?;

    Ok(VendorProfile {
        key: "uneek".to_string(),
        display_name: "Uneek".to_string(),
        source: SourceFormat::SheetRecords,
        default_delimiter: Delimiter::Comma,
        rules: Some(rules),
        export_file_name: "uneek_parsed_data.csv".to_string(),
    })
}
