//! Batch script emission.
//!
//! One call produces one self-contained T-SQL script for a (batch,
//! variant) pair: staging-table declaration, chunked bulk loads, a
//! set-based move into the variant's product table, an identity-range
//! fan-out of image and tag-link rows, and staging disposal. Nothing is
//! shared between scripts; every section is regenerated per call.

use crate::catalog::types::ProductRecord;
use crate::sqlgen::batch::Batch;
use crate::sqlgen::literal::{escape_literal, price_literal, tag_list};
use crate::sqlgen::variant::SchemaVariant;
use std::io::{self, Write};

/// Default maximum rows per bulk INSERT statement. Independent of the
/// outer batch size; bounds the textual length of a single statement.
pub const DEFAULT_CHUNK_SIZE: usize = 1000;

/// Session-scoped staging table name. The leading `#` makes it invisible
/// to concurrent sessions, so parallel script executions can't collide
/// on staging.
pub const STAGING_TABLE: &str = "#TempProducts";

/// Write one complete batch script for `variant` to `writer`.
pub fn write_batch_script<W: Write>(
    writer: &mut W,
    batch: &Batch,
    variant: &SchemaVariant,
    chunk_size: usize,
) -> io::Result<()> {
    write_header(writer, batch, variant)?;
    write_staging_table(writer, variant)?;
    write_bulk_loads(writer, batch.records, chunk_size)?;
    write_product_move(writer, variant)?;
    write_fan_out(writer, variant)?;

    writeln!(writer, "-- Clean up")?;
    writeln!(writer, "DROP TABLE {};", STAGING_TABLE)?;

    Ok(())
}

/// Leading comment block: batch label plus the execution contract the
/// identity-range recovery depends on. The generator cannot enforce the
/// contract; it can only state it where operators will see it.
fn write_header<W: Write>(writer: &mut W, batch: &Batch, variant: &SchemaVariant) -> io::Result<()> {
    writeln!(
        writer,
        "-- Batch {} for {} ({} products)",
        batch.index,
        variant.product_table,
        batch.records.len()
    )?;
    writeln!(writer, "--")?;
    writeln!(
        writer,
        "-- EXECUTION CONTRACT: run this script as a single uninterrupted unit"
    )?;
    writeln!(
        writer,
        "-- (one transaction or one exclusive session). The fan-out below"
    )?;
    writeln!(
        writer,
        "-- reconstructs the identity range of the bulk insert from"
    )?;
    writeln!(
        writer,
        "-- SCOPE_IDENTITY() and @@ROWCOUNT; any concurrent insert into"
    )?;
    writeln!(
        writer,
        "-- {} between the move and that read corrupts the range.",
        variant.product_table
    )?;
    writeln!(writer)?;
    Ok(())
}

fn write_staging_table<W: Write>(writer: &mut W, variant: &SchemaVariant) -> io::Result<()> {
    writeln!(writer, "-- Staging table for bulk operations")?;
    writeln!(writer, "CREATE TABLE {} (", STAGING_TABLE)?;
    writeln!(writer, "    TempId INT IDENTITY(1,1),")?;
    writeln!(writer, "    Title NVARCHAR(500),")?;
    writeln!(writer, "    Description NVARCHAR(2000),")?;
    writeln!(writer, "    ImageUrl NVARCHAR(1000),")?;
    writeln!(writer, "    ConditionId INT,")?;
    writeln!(writer, "    CategoryId INT,")?;
    writeln!(writer, "    Price DECIMAL(10,2), -- becomes {}", variant.price_column)?;
    writeln!(writer, "    Stock INT,")?;
    writeln!(writer, "    TagIds NVARCHAR(50) -- comma-joined, split during fan-out")?;
    writeln!(writer, ");")?;
    writeln!(writer)?;
    Ok(())
}

/// Bulk-load the staging table, at most `chunk_size` rows per statement.
fn write_bulk_loads<W: Write>(
    writer: &mut W,
    records: &[ProductRecord],
    chunk_size: usize,
) -> io::Result<()> {
    for chunk in records.chunks(chunk_size.max(1)) {
        writeln!(
            writer,
            "INSERT INTO {} (Title, Description, ImageUrl, ConditionId, CategoryId, Price, Stock, TagIds) VALUES",
            STAGING_TABLE
        )?;
        for (i, record) in chunk.iter().enumerate() {
            let terminator = if i + 1 == chunk.len() { ";" } else { "," };
            writeln!(
                writer,
                "('{}', '{}', '{}', {}, {}, {}, {}, '{}'){}",
                escape_literal(&record.title),
                escape_literal(&record.description),
                escape_literal(&record.image_url),
                record.condition_id,
                record.category_id,
                price_literal(record.price),
                record.stock,
                tag_list(&record.tag_ids),
                terminator
            )?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

/// Set-based move of every staging row into the variant's product table.
///
/// ORDER BY TempId pins identity assignment to staging order, which the
/// fan-out's id-to-row pairing depends on.
fn write_product_move<W: Write>(writer: &mut W, variant: &SchemaVariant) -> io::Result<()> {
    writeln!(
        writer,
        "-- Move staged rows into {}",
        variant.product_table
    )?;
    writeln!(
        writer,
        "INSERT INTO {} ({})",
        variant.product_table, variant.insert_columns
    )?;
    writeln!(writer, "SELECT {}", variant.select_exprs)?;
    writeln!(writer, "FROM {} t", STAGING_TABLE)?;
    if !variant.extra_from.is_empty() {
        writeln!(writer, "{}", variant.extra_from)?;
    }
    writeln!(writer, "ORDER BY t.TempId;")?;
    writeln!(writer)?;
    Ok(())
}

/// Recover the contiguous identity range of the move, then walk ids and
/// staging rows in lockstep emitting dependent rows per product.
fn write_fan_out<W: Write>(writer: &mut W, variant: &SchemaVariant) -> io::Result<()> {
    writeln!(writer, "-- Recover the identity range of the rows just inserted")?;
    writeln!(
        writer,
        "DECLARE @FirstProductId INT = SCOPE_IDENTITY() - @@ROWCOUNT + 1;"
    )?;
    writeln!(writer, "DECLARE @LastProductId INT = SCOPE_IDENTITY();")?;
    writeln!(writer)?;
    writeln!(writer, "DECLARE @CurrentId INT = @FirstProductId;")?;
    writeln!(writer, "DECLARE @TempId INT = 1;")?;
    writeln!(writer)?;
    writeln!(writer, "WHILE @CurrentId <= @LastProductId")?;
    writeln!(writer, "BEGIN")?;
    writeln!(
        writer,
        "    -- Image row (skipped when the staged URL is empty)"
    )?;
    writeln!(
        writer,
        "    INSERT INTO {} ({}, {})",
        variant.image_table, variant.image_product_column, variant.image_url_column
    )?;
    writeln!(writer, "    SELECT @CurrentId, ImageUrl")?;
    writeln!(writer, "    FROM {}", STAGING_TABLE)?;
    writeln!(writer, "    WHERE TempId = @TempId AND ImageUrl <> '';")?;
    writeln!(writer)?;
    writeln!(writer, "    -- One tag-link row per staged tag id")?;
    writeln!(
        writer,
        "    INSERT INTO {} ({}, {})",
        variant.tag_table, variant.tag_product_column, variant.tag_tag_column
    )?;
    writeln!(writer, "    SELECT @CurrentId, CAST(value AS INT)")?;
    writeln!(writer, "    FROM {}", STAGING_TABLE)?;
    writeln!(writer, "    CROSS APPLY STRING_SPLIT(TagIds, ',')")?;
    writeln!(writer, "    WHERE TempId = @TempId;")?;
    writeln!(writer)?;
    writeln!(writer, "    SET @CurrentId = @CurrentId + 1;")?;
    writeln!(writer, "    SET @TempId = @TempId + 1;")?;
    writeln!(writer, "END;")?;
    writeln!(writer)?;
    Ok(())
}
