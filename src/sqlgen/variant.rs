//! Static descriptors for the three target listing schemas.
//!
//! Table and column names reproduce the marketplace schema exactly,
//! including its casing inconsistencies (the auction tag-link columns are
//! PascalCase, the rental image URL column is `Url`). The derived-column
//! templates are the only place the three near-duplicate insert
//! statements differ; one shared emitter routine consumes them.

/// Immutable description of one target listing schema.
///
/// Constructed once as a static, read-only thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaVariant {
    /// Variant identifier used in output file names.
    pub id: &'static str,
    /// Auto-incrementing product table the staged rows move into.
    pub product_table: &'static str,
    pub image_table: &'static str,
    pub image_product_column: &'static str,
    pub image_url_column: &'static str,
    pub tag_table: &'static str,
    pub tag_product_column: &'static str,
    pub tag_tag_column: &'static str,
    /// The variant-specific price-like column the sampled price lands in.
    pub price_column: &'static str,
    /// Column list of the set-based move into `product_table`.
    pub insert_columns: &'static str,
    /// Select expressions paired with `insert_columns`; `t` is the
    /// staging table alias.
    pub select_exprs: &'static str,
    /// Extra FROM-clause text (e.g. a CROSS APPLY deriving per-row
    /// values); empty when the variant needs none.
    pub extra_from: &'static str,
}

/// Pseudo-random seller id in [1, 10], computed in SQL at insertion
/// time. Every variant's select expressions embed this; the source data
/// carries no real seller.
pub const SELLER_EXPR: &str = "(ABS(CHECKSUM(NEWID())) % 10) + 1";

pub static BUY: SchemaVariant = SchemaVariant {
    id: "buy_products",
    product_table: "BuyProducts",
    image_table: "BuyProductImages",
    image_product_column: "product_id",
    image_url_column: "url",
    tag_table: "BuyProductProductTags",
    tag_product_column: "product_id",
    tag_tag_column: "tag_id",
    price_column: "price",
    insert_columns: "title, description, seller_id, condition_id, category_id, price, stock",
    select_exprs: "t.Title, t.Description, (ABS(CHECKSUM(NEWID())) % 10) + 1, t.ConditionId, \
                   t.CategoryId, t.Price, t.Stock",
    extra_from: "",
};

pub static BORROW: SchemaVariant = SchemaVariant {
    id: "borrow_products",
    product_table: "BorrowProducts",
    image_table: "BorrowProductImages",
    image_product_column: "product_id",
    image_url_column: "Url",
    tag_table: "BorrowProductProductTags",
    tag_product_column: "product_id",
    tag_tag_column: "tag_id",
    price_column: "daily_rate",
    // 30-day rental ceiling: time_limit and the end of the date window
    // both sit 30 days out from "now"; is_borrowed starts false.
    insert_columns: "title, description, seller_id, condition_id, category_id, daily_rate, \
                     time_limit, start_date, end_date, is_borrowed, stock",
    select_exprs: "t.Title, t.Description, (ABS(CHECKSUM(NEWID())) % 10) + 1, t.ConditionId, \
                   t.CategoryId, t.Price, DATEADD(DAY, 30, GETDATE()), GETDATE(), \
                   DATEADD(DAY, 30, GETDATE()), 0, t.Stock",
    extra_from: "",
};

pub static AUCTION: SchemaVariant = SchemaVariant {
    id: "auction_products",
    product_table: "AuctionProducts",
    image_table: "AuctionProductsImages",
    image_product_column: "product_id",
    image_url_column: "url",
    tag_table: "AuctionProductProductTags",
    tag_product_column: "ProductId",
    tag_tag_column: "TagId",
    price_column: "starting_price",
    // The sampled price is the starting price and is mirrored into
    // current_price and the flat price column at insertion time. Start is
    // random within the next 7 days (10080 minutes); end is 7-21 days
    // after start.
    insert_columns: "title, description, seller_id, condition_id, category_id, start_datetime, \
                     end_datetime, starting_price, current_price, price, stock",
    select_exprs: "t.Title, t.Description, (ABS(CHECKSUM(NEWID())) % 10) + 1, t.ConditionId, \
                   t.CategoryId, w.StartDt, DATEADD(DAY, 7 + ABS(CHECKSUM(NEWID())) % 15, \
                   w.StartDt), t.Price, t.Price, t.Price, t.Stock",
    extra_from: "CROSS APPLY (SELECT DATEADD(MINUTE, ABS(CHECKSUM(NEWID())) % 10080, GETDATE()) \
                 AS StartDt) w",
};

/// The three variants in generation order.
pub static ALL_VARIANTS: [&SchemaVariant; 3] = [&BUY, &BORROW, &AUCTION];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_link_column_casing_is_exact() {
        // The schema is inconsistent on purpose; generated SQL must
        // reproduce it verbatim.
        assert_eq!(BUY.tag_product_column, "product_id");
        assert_eq!(BUY.tag_tag_column, "tag_id");
        assert_eq!(BORROW.tag_product_column, "product_id");
        assert_eq!(BORROW.tag_tag_column, "tag_id");
        assert_eq!(AUCTION.tag_product_column, "ProductId");
        assert_eq!(AUCTION.tag_tag_column, "TagId");
    }

    #[test]
    fn test_image_table_names_are_exact() {
        assert_eq!(BUY.image_table, "BuyProductImages");
        assert_eq!(BORROW.image_table, "BorrowProductImages");
        assert_eq!(BORROW.image_url_column, "Url");
        // Note the extra "s": AuctionProductsImages, not AuctionProductImages
        assert_eq!(AUCTION.image_table, "AuctionProductsImages");
    }

    #[test]
    fn test_variant_ids_are_distinct() {
        let ids: Vec<&str> = ALL_VARIANTS.iter().map(|v| v.id).collect();
        assert_eq!(ids, vec!["buy_products", "borrow_products", "auction_products"]);
    }

    #[test]
    fn test_every_variant_assigns_a_seller() {
        for variant in ALL_VARIANTS {
            assert!(variant.insert_columns.contains("seller_id"));
            assert!(variant.select_exprs.contains(SELLER_EXPR));
        }
    }

    #[test]
    fn test_price_columns() {
        assert_eq!(BUY.price_column, "price");
        assert_eq!(BORROW.price_column, "daily_rate");
        assert_eq!(AUCTION.price_column, "starting_price");
        // Auction mirrors the sampled price three times
        assert_eq!(AUCTION.select_exprs.matches("t.Price").count(), 3);
    }
}
