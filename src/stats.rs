// stats.rs: Token frequency/length table

use std::collections::HashMap;

/// Tokens at least this long are formatting debris, not words.
pub const MAX_TOKEN_LENGTH: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRow {
    pub token: String,
    pub frequency: usize,
    /// Length in Unicode scalar values.
    pub length: usize,
}

/// Count tokens and rank them by descending frequency.
///
/// Equal frequencies keep the order in which tokens were first seen. Rows
/// whose token is `MAX_TOKEN_LENGTH` characters or longer are dropped.
pub fn build_table<S: AsRef<str>>(tokens: &[S]) -> Vec<TokenRow> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut rows: Vec<TokenRow> = Vec::new();

    for token in tokens {
        let token = token.as_ref();
        match index.get(token) {
            Some(&i) => rows[i].frequency += 1,
            None => {
                index.insert(token, rows.len());
                rows.push(TokenRow {
                    token: token.to_string(),
                    frequency: 1,
                    length: token.chars().count(),
                });
            }
        }
    }

    // stable: ties stay in first-seen order
    rows.sort_by(|a, b| b.frequency.cmp(&a.frequency));
    rows.retain(|row| row.length < MAX_TOKEN_LENGTH);
    rows
}
