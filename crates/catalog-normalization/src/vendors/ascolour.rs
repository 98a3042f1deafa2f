use catalog_model::Delimiter;

use super::{SourceFormat, VendorProfile};
use crate::error::Result;
use crate::types::{FieldRule, RuleSet};

pub(super) fn profile() -> Result<VendorProfile> {
    // Groupname carries "<style code> <style name>", e.g. "5001 Staple Tee".
    let rules = RuleSet::new(
        "AS Colour",
        vec![
            FieldRule::name_after_code("ProductName", "Groupname"),
            FieldRule::blank("ProductDescription"),
            FieldRule::constant("Brand", "AS Colour (AUS)"),
            FieldRule::copy("VendorSkuCode", "Stockcode"),
            FieldRule::leading_code("VendorProductCode", "Groupname"),
            FieldRule::copy("ColorName", "Colourname"),
            FieldRule::copy("SizeCode", "Sizename"),
            FieldRule::copy("SizeName", "Sizename"),
            FieldRule::copy("LifestyleImage", "Picture_url"),
            FieldRule::copy("PiecePrice", "Price"),
        ],
    )?;

    Ok(VendorProfile {
        key: "ascolour".to_string(),
        display_name: "AS Colour".to_string(),
        source: SourceFormat::SheetRecords,
        default_delimiter: Delimiter::Comma,
        rules: Some(rules),
        export_file_name: "ascolour_parsed_data.csv".to_string(),
    })
}
