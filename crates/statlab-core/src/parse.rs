//! Text input parsing
//!
//! Tokens that do not parse as finite numbers are dropped without error.

fn parse_token(token: &str) -> Option<f64> {
    token.trim().parse::<f64>().ok().filter(|x| x.is_finite())
}

fn parse_line(line: &str) -> Vec<f64> {
    line.split(',').filter_map(parse_token).collect()
}

/// Comma- and/or newline-separated numbers
pub fn parse_sample(text: &str) -> Vec<f64> {
    text.split([',', '\n']).filter_map(parse_token).collect()
}

/// One group per line; lines with no numbers are skipped
pub fn parse_groups(text: &str) -> Vec<Vec<f64>> {
    text.lines()
        .map(parse_line)
        .filter(|group| !group.is_empty())
        .collect()
}

/// One contingency-table row per line
pub fn parse_matrix(text: &str) -> Vec<Vec<f64>> {
    parse_groups(text)
}

/// Hypothesised mean; blank or non-numeric input is treated as missing
pub fn parse_population_mean(text: &str) -> Option<f64> {
    parse_token(text)
}
