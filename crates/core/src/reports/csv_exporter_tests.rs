//! Tests for the CSV export format.

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    use crate::reports::transactions_to_csv;
    use crate::transactions::{Transaction, TransactionType};

    fn transaction() -> Transaction {
        Transaction {
            id: "t1".to_string(),
            kind: TransactionType::Expense,
            amount: dec!(1234.56),
            category: "food".to_string(),
            description: "Mercado".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 8, 3).unwrap(),
            tags: vec!["casa".to_string(), "urgente".to_string()],
            user_id: "user-1".to_string(),
            recurring: None,
        }
    }

    #[test]
    fn test_header_row_comes_first() {
        let csv = transactions_to_csv(&[]).unwrap();
        assert_eq!(csv.trim_end(), "Data,Tipo,Categoria,Descrição,Valor,Tags");
    }

    #[test]
    fn test_row_renders_localized_type_and_plain_amount() {
        let csv = transactions_to_csv(&[transaction()]).unwrap();
        let row = csv.lines().nth(1).unwrap();
        assert_eq!(row, "2026-08-03,Despesa,food,Mercado,1234.56,\"casa, urgente\"");
    }

    #[test]
    fn test_income_uses_receita_label() {
        let mut t = transaction();
        t.kind = TransactionType::Income;
        t.tags = Vec::new();

        let csv = transactions_to_csv(&[t]).unwrap();
        let row = csv.lines().nth(1).unwrap();
        assert!(row.contains(",Receita,"));
        assert!(row.ends_with(','));
    }

    #[test]
    fn test_description_with_comma_is_quoted() {
        let mut t = transaction();
        t.description = "Compras, mercado e padaria".to_string();
        t.tags = Vec::new();

        let csv = transactions_to_csv(&[t]).unwrap();
        assert!(csv.contains("\"Compras, mercado e padaria\""));
    }

    #[test]
    fn test_one_row_per_transaction_in_given_order() {
        let mut first = transaction();
        first.id = "a".to_string();
        first.description = "Primeiro".to_string();
        let mut second = transaction();
        second.id = "b".to_string();
        second.description = "Segundo".to_string();

        let csv = transactions_to_csv(&[first, second]).unwrap();
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("Primeiro"));
        assert!(lines[2].contains("Segundo"));
    }
}
