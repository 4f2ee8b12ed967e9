use std::collections::HashSet;

use crate::domain::AssetRef;

/// Split newline-delimited asset text into external asset references.
///
/// Lines are trimmed of surrounding whitespace (carriage returns included)
/// and blank lines are dropped. Assets are keyed by URL in the written
/// document, so a repeated URL keeps only its first occurrence.
pub fn parse_asset_lines(text: &str) -> Vec<AssetRef> {
    let mut seen = HashSet::new();
    text.lines()
        .map(|line| line.trim_matches(|c: char| c == '\r' || c.is_whitespace()))
        .filter(|line| !line.is_empty() && seen.insert(*line))
        .map(AssetRef::external)
        .collect()
}
