pub fn num_without_zeroes(val: f64) -> String {
    let mut val = format!("{val:.2}");
    val = val.trim_end_matches('0').trim_end_matches('.').to_string();
    val
}

/// Collapse runs of whitespace into single spaces and trim the ends
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_num_without_zeroes() {
        assert_eq!(num_without_zeroes(175.0), "175");
        assert_eq!(num_without_zeroes(1.5), "1.5");
        assert_eq!(num_without_zeroes(453.592), "453.59");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  Jasmine \t  Rice "), "Jasmine Rice");
        assert_eq!(collapse_whitespace(""), "");
    }
}
