//! Table data extraction

use scraper::{Html, Selector};

use super::TableMatrix;

/// Extract cell matrices for every table matched by `selector`.
///
/// Each matched table yields one matrix: rows from its `tr` descendants,
/// cells from each row's `td`/`th` descendants, cell text trimmed.
pub fn table_data(document: &Html, selector: &str) -> Vec<TableMatrix> {
    let table_selector = match Selector::parse(selector) {
        Ok(s) => s,
        Err(_) => return vec![],
    };
    let row_selector = match Selector::parse("tr") {
        Ok(s) => s,
        Err(_) => return vec![],
    };
    let cell_selector = match Selector::parse("td, th") {
        Ok(s) => s,
        Err(_) => return vec![],
    };

    document
        .select(&table_selector)
        .map(|table| {
            table
                .select(&row_selector)
                .map(|row| {
                    row.select(&cell_selector)
                        .map(|cell| cell.text().collect::<String>().trim().to_string())
                        .collect()
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_round_trip() {
        let html = r#"
        <html>
        <body>
            <table>
                <tr><th>Name</th><th>Age</th></tr>
                <tr><td> Alice </td><td>25</td></tr>
                <tr><td>Bob</td><td>30</td></tr>
            </table>
        </body>
        </html>
        "#;

        let document = Html::parse_document(html);
        let matrices = table_data(&document, "table");

        assert_eq!(
            matrices,
            vec![vec![
                vec!["Name".to_string(), "Age".to_string()],
                vec!["Alice".to_string(), "25".to_string()],
                vec!["Bob".to_string(), "30".to_string()],
            ]]
        );
    }

    #[test]
    fn test_multiple_tables_yield_sibling_matrices() {
        let html = r#"
        <table class="data"><tr><td>a</td></tr></table>
        <table class="data"><tr><td>b</td></tr></table>
        "#;

        let document = Html::parse_document(html);
        let matrices = table_data(&document, "table.data");

        assert_eq!(matrices.len(), 2);
        assert_eq!(matrices[0], vec![vec!["a".to_string()]]);
        assert_eq!(matrices[1], vec![vec!["b".to_string()]]);
    }

    #[test]
    fn test_no_match_is_empty() {
        let document = Html::parse_document("<html><body></body></html>");
        assert!(table_data(&document, "table").is_empty());
        assert!(table_data(&document, ":::bad:::").is_empty());
    }
}
