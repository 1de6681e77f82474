//! CSV export of a filtered, sorted transaction sequence.
//!
//! Write-only format for spreadsheet use: localized type labels, raw
//! category ids, plain decimal amounts, tags joined into one field. Fields
//! containing the delimiter are quoted by the writer.

use csv::WriterBuilder;

use crate::errors::{Result, StorageError};
use crate::transactions::Transaction;

/// Fixed column order of the export.
pub const CSV_HEADERS: [&str; 6] = ["Data", "Tipo", "Categoria", "Descrição", "Valor", "Tags"];

/// Renders the given transactions as a CSV document, one row per
/// transaction in the given order.
pub fn transactions_to_csv(transactions: &[Transaction]) -> Result<String> {
    let mut writer = WriterBuilder::new().from_writer(Vec::new());
    writer
        .write_record(CSV_HEADERS)
        .map_err(|err| StorageError::Serialization(err.to_string()))?;

    for transaction in transactions {
        writer
            .write_record(&[
                transaction.date.to_string(),
                transaction.kind.label().to_string(),
                transaction.category.clone(),
                transaction.description.clone(),
                transaction.amount.to_string(),
                transaction.tags.join(", "),
            ])
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| StorageError::Serialization(err.to_string()))?;
    String::from_utf8(bytes).map_err(|err| StorageError::Serialization(err.to_string()).into())
}
