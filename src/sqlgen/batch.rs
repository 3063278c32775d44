//! Size-bounded, order-preserving batching of normalized records.

use crate::catalog::types::ProductRecord;

/// Default maximum number of products per generated script.
pub const DEFAULT_BATCH_SIZE: usize = 5000;

/// One batch of records, borrowing a slice of the shuffled pool.
///
/// The index is 1-based and used only for human-readable labels and file
/// names; batch boundaries carry no semantic meaning beyond bounding the
/// generated statement size.
#[derive(Debug, Clone, Copy)]
pub struct Batch<'a> {
    pub index: usize,
    pub records: &'a [ProductRecord],
}

/// Split records into batches of at most `batch_size`.
///
/// Concatenating the batches in order reproduces the input exactly; only
/// the final batch may be short; empty input yields zero batches. A
/// `batch_size` of zero is treated as one.
pub fn split_batches(records: &[ProductRecord], batch_size: usize) -> Vec<Batch<'_>> {
    records
        .chunks(batch_size.max(1))
        .enumerate()
        .map(|(i, chunk)| Batch {
            index: i + 1,
            records: chunk,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::types::SourceTag;

    fn record(title: &str) -> ProductRecord {
        ProductRecord {
            title: title.to_string(),
            description: "d".to_string(),
            image_url: String::new(),
            condition_id: 9,
            price: 1.00,
            stock: 1,
            category_id: 1,
            tag_ids: vec![1, 2],
            source: SourceTag::Ranked,
        }
    }

    fn records(n: usize) -> Vec<ProductRecord> {
        (0..n).map(|i| record(&format!("p{}", i))).collect()
    }

    #[test]
    fn test_empty_input_yields_zero_batches() {
        assert!(split_batches(&[], 5000).is_empty());
    }

    #[test]
    fn test_exact_maximum_yields_one_batch() {
        let pool = records(5);
        let batches = split_batches(&pool, 5);
        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].index, 1);
        assert_eq!(batches[0].records.len(), 5);
    }

    #[test]
    fn test_only_last_batch_may_be_short() {
        let pool = records(12);
        let batches = split_batches(&pool, 5);
        assert_eq!(batches.len(), 3);
        assert_eq!(batches[0].records.len(), 5);
        assert_eq!(batches[1].records.len(), 5);
        assert_eq!(batches[2].records.len(), 2);
        assert_eq!(batches[2].index, 3);
    }

    #[test]
    fn test_concatenation_reproduces_input_order() {
        let pool = records(12);
        let batches = split_batches(&pool, 5);
        let titles: Vec<&str> = batches
            .iter()
            .flat_map(|b| b.records.iter().map(|r| r.title.as_str()))
            .collect();
        let expected: Vec<String> = (0..12).map(|i| format!("p{}", i)).collect();
        assert_eq!(titles, expected.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn test_zero_batch_size_treated_as_one() {
        let pool = records(3);
        assert_eq!(split_batches(&pool, 0).len(), 3);
    }
}
