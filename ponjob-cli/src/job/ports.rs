//! Compact strand-notation expansion

use calamine::Data;

/// Expand "12-15/20/22-23" style strand notation into individual ports.
///
/// Tokens are slash-separated; each is a single integer or an inclusive
/// range enumerated ascending. Listed order and duplicates are preserved.
/// A non-string cell, or any token that fails to parse, yields no ports at
/// all: the row simply contributes no iOLM records. A range with start > end
/// is empty rather than an error, consistent with ascending enumeration.
pub fn expand_ports(cell: &Data) -> Vec<i64> {
    let Data::String(text) = cell else {
        return Vec::new();
    };
    parse_port_list(text).unwrap_or_default()
}

fn parse_port_list(text: &str) -> Option<Vec<i64>> {
    let mut ports = Vec::new();
    for token in text.split('/') {
        let token = token.trim();
        match token.split_once('-') {
            Some((start, end)) => {
                let start: i64 = start.trim().parse().ok()?;
                let end: i64 = end.trim().parse().ok()?;
                ports.extend(start..=end);
            }
            None => ports.push(token.parse().ok()?),
        }
    }
    Some(ports)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(text: &str) -> Vec<i64> {
        expand_ports(&Data::String(text.to_string()))
    }

    #[test]
    fn test_expand_mixed_ranges_and_singles() {
        assert_eq!(expand("12-15/20/22-23"), vec![12, 13, 14, 15, 20, 22, 23]);
    }

    #[test]
    fn test_expand_single_port() {
        assert_eq!(expand("5"), vec![5]);
    }

    #[test]
    fn test_expand_preserves_order_and_duplicates() {
        assert_eq!(expand("20/5/5-6"), vec![20, 5, 5, 6]);
    }

    #[test]
    fn test_expand_tolerates_whitespace() {
        assert_eq!(expand(" 3 - 4 / 9 "), vec![3, 4, 9]);
    }

    #[test]
    fn test_expand_descending_range_is_empty() {
        assert_eq!(expand("7-5"), Vec::<i64>::new());
        assert_eq!(expand("1/7-5/9"), vec![1, 9]);
    }

    #[test]
    fn test_expand_non_string_cell() {
        assert_eq!(expand_ports(&Data::Int(9)), Vec::<i64>::new());
        assert_eq!(expand_ports(&Data::Float(9.0)), Vec::<i64>::new());
        assert_eq!(expand_ports(&Data::Empty), Vec::<i64>::new());
    }

    #[test]
    fn test_expand_unparsable_token_discards_whole_value() {
        assert_eq!(expand("12-15/x"), Vec::<i64>::new());
        assert_eq!(expand(""), Vec::<i64>::new());
    }
}
