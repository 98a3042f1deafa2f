use catalog_model::{Delimiter, PositionalColumn, PositionalLayout};

use super::{SourceFormat, VendorProfile};
use crate::error::Result;
use crate::types::{FieldRule, RuleSet};

/// Column layout of the header-less price file.
///
/// Placeholders keep columns the downstream import expects but the file does
/// not carry.
fn layout() -> Result<PositionalLayout> {
    let layout = PositionalLayout::new(vec![
        PositionalColumn::at("Item Number", 0),
        PositionalColumn::at("Style", 1),
        PositionalColumn::at("Mill", 2),
        PositionalColumn::at("Color Code", 3),
        PositionalColumn::at("Size Code", 4),
        PositionalColumn::at("Pieces per Case", 5),
        PositionalColumn::at("Manufacturer", 6),
        PositionalColumn::placeholder(""),
        PositionalColumn::at("Case Wt.", 7),
        PositionalColumn::placeholder(" "),
        PositionalColumn::at("Regular Piece Price", 8),
        PositionalColumn::at("Regular Dozen Price", 9),
        PositionalColumn::at("Regular Case Price", 10),
        PositionalColumn::at("Currency", 11),
        PositionalColumn::at("Retail A Pricing", 12),
        PositionalColumn::at("Color Category", 13),
        PositionalColumn::at("Color Description", 14),
        PositionalColumn::placeholder("Closeout"),
        PositionalColumn::at("Style Description", 15),
        PositionalColumn::at("Shipping Warehouse", 16),
        PositionalColumn::at("Piece Cube/Inches", 17),
        PositionalColumn::at("Piece Weight", 18),
        PositionalColumn::at("Inventory Pieces", 19),
        PositionalColumn::at("Customer Sale Piece Price", 20),
        PositionalColumn::at("Customer Sale Dozen Price", 21),
        PositionalColumn::placeholder("Customer Sale Case Price"),
        PositionalColumn::at("Sale End Date", 22),
        PositionalColumn::at("GTIN#", 23),
        PositionalColumn::at("Mill Discontinued", 24),
        PositionalColumn::placeholder("Web Color Description"),
        PositionalColumn::at("Brand", 25),
    ])?;
    Ok(layout)
}

pub(super) fn profile() -> Result<VendorProfile> {
    let rules = RuleSet::new(
        "Carolina Made",
        vec![
            FieldRule::copy("ProductName", "Style Description"),
            FieldRule::blank("ProductDescription"),
            FieldRule::copy("BrandName", "Brand"),
            FieldRule::copy("VendorProductCode", "Style"),
            FieldRule::copy("VendorSkuCode", "Item Number"),
            FieldRule::copy("ColorName", "Color Description"),
            FieldRule::copy("SizeCode", "Size Code"),
            FieldRule::copy("SizeName", "Size Code"),
            FieldRule::copy("PiecePrice", "Regular Piece Price"),
            FieldRule::copy("DuzenPrice", "Regular Dozen Price"),
            FieldRule::copy("CasePrice", "Regular Case Price"),
            FieldRule::copy("CasePriceQTY", "Pieces per Case"),
        ],
    )?;

    Ok(VendorProfile {
        key: "carolinamade".to_string(),
        display_name: "Carolina Made".to_string(),
        source: SourceFormat::PositionalText(layout()?),
        default_delimiter: Delimiter::Comma,
        rules: Some(rules),
        export_file_name: "carolinamade_parsed_data.csv".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_has_thirty_one_columns() {
        let layout = layout().unwrap();
        assert_eq!(layout.columns().len(), 31);
        assert_eq!(layout.max_index(), Some(25));
        assert_eq!(
            layout.columns().iter().filter(|c| c.is_placeholder()).count(),
            5
        );
    }

    #[test]
    fn test_rules_only_read_layout_fields() {
        let profile = profile().unwrap();
        let SourceFormat::PositionalText(layout) = &profile.source else {
            panic!("expected positional source");
        };
        let rules = profile.rules.as_ref().unwrap();
        for source in rules.source_fields() {
            assert!(layout.schema().contains(source), "{source} not in layout");
        }
    }
}
