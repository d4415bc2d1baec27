//! Range specifications: `"1,2,5:8,9"` style index lists
//!
//! A specification is a comma separated list of tokens. A token is either a
//! single index (`"7"`) or an inclusive span (`"5:8"`). Whitespace around
//! tokens and span bounds is ignored. The parsed result is the sorted,
//! deduplicated union of every token.

use std::collections::BTreeSet;
use std::str::FromStr;

use sheet_splice_core::MAX_ROWS;

use crate::error::{Error, Result};

/// Ordered, duplicate-free list of 0-based indices
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RangeSpec {
    indices: Vec<u32>,
}

impl RangeSpec {
    /// Parse a range specification.
    ///
    /// A blank string yields an empty spec; callers decide what "no indices"
    /// means for their axis.
    pub fn parse(spec: &str) -> Result<Self> {
        if spec.trim().is_empty() {
            return Ok(Self::default());
        }

        let mut indices = BTreeSet::new();
        for token in spec.split(',').map(str::trim) {
            match token.split_once(':') {
                Some((start, end)) => {
                    let start = parse_bound(spec, start)?;
                    let end = parse_bound(spec, end)?;
                    if start > end {
                        return Err(Error::invalid_range(
                            spec,
                            format!("span '{}' starts after it ends", token),
                        ));
                    }
                    indices.extend(start..=end);
                }
                None => {
                    indices.insert(parse_bound(spec, token)?);
                }
            }
        }

        Ok(Self {
            indices: indices.into_iter().collect(),
        })
    }

    /// Build a spec from arbitrary indices (sorted and deduplicated)
    pub fn from_indices<I: IntoIterator<Item = u32>>(indices: I) -> Self {
        let set: BTreeSet<u32> = indices.into_iter().collect();
        Self {
            indices: set.into_iter().collect(),
        }
    }

    /// `count` consecutive indices starting at `start`
    pub fn contiguous(start: u32, count: usize) -> Self {
        let count = u32::try_from(count).unwrap_or(u32::MAX);
        Self {
            indices: (start..start.saturating_add(count)).collect(),
        }
    }

    /// Every index shifted up by `by`
    pub fn offset(&self, by: u32) -> Self {
        Self {
            indices: self.indices.iter().map(|i| i.saturating_add(by)).collect(),
        }
    }

    /// Maximal runs of consecutive indices as `(first, length)` pairs
    pub fn runs(&self) -> Vec<(u32, u32)> {
        let mut runs: Vec<(u32, u32)> = Vec::new();
        for &index in &self.indices {
            match runs.last_mut() {
                Some((first, len)) if *first + *len == index => *len += 1,
                _ => runs.push((index, 1)),
            }
        }
        runs
    }

    /// Indices in ascending order
    pub fn as_slice(&self) -> &[u32] {
        &self.indices
    }

    /// Iterate over indices in ascending order
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.indices.iter().copied()
    }

    /// The i-th index
    pub fn get(&self, position: usize) -> Option<u32> {
        self.indices.get(position).copied()
    }

    /// Number of indices
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Check if there are no indices
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Render back to `"a:b,c"` form, collapsing runs
    pub fn to_spec_string(&self) -> String {
        self.runs()
            .into_iter()
            .map(|(first, len)| match len {
                1 => first.to_string(),
                _ => format!("{}:{}", first, first + len - 1),
            })
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl FromStr for RangeSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

fn parse_bound(spec: &str, raw: &str) -> Result<u32> {
    let raw = raw.trim();
    let index: u32 = raw.parse().map_err(|_| {
        Error::invalid_range(spec, format!("'{}' is not a non-negative integer", raw))
    })?;
    if index >= MAX_ROWS {
        return Err(Error::invalid_range(
            spec,
            format!("index {} exceeds the sheet limit of {}", index, MAX_ROWS - 1),
        ));
    }
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_mixed_tokens() {
        let spec = RangeSpec::parse("1,2,5:8,9").unwrap();
        assert_eq!(spec.as_slice(), &[1, 2, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_parse_ignores_whitespace() {
        let spec = RangeSpec::parse("1,2 , 5 : 8,9").unwrap();
        assert_eq!(spec.as_slice(), &[1, 2, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_parse_blank_is_empty() {
        assert!(RangeSpec::parse("").unwrap().is_empty());
        assert!(RangeSpec::parse("   ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_single_span() {
        assert_eq!(RangeSpec::parse("0:1").unwrap().as_slice(), &[0, 1]);
    }

    #[test]
    fn test_parse_sorts_and_dedups() {
        let spec = RangeSpec::parse("9,3:5,4,1").unwrap();
        assert_eq!(spec.as_slice(), &[1, 3, 4, 5, 9]);
    }

    #[test]
    fn test_reversed_span_fails() {
        let err = RangeSpec::parse("8:5").unwrap_err();
        assert!(matches!(err, Error::InvalidRange { .. }));
    }

    #[test]
    fn test_bad_tokens_fail() {
        for spec in ["a", "1,,2", "-1", "1:x", "1:2:3", "2.5"] {
            assert!(
                matches!(RangeSpec::parse(spec), Err(Error::InvalidRange { .. })),
                "{spec} should be rejected"
            );
        }
    }

    #[test]
    fn test_index_beyond_sheet_fails() {
        assert!(RangeSpec::parse("0:2000000").is_err());
    }

    #[test]
    fn test_parse_is_pure() {
        let a: RangeSpec = "4, 0:2".parse().unwrap();
        let b: RangeSpec = "4, 0:2".parse().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_runs() {
        let spec = RangeSpec::from_indices([0, 1, 5, 6, 7, 8, 9, 12]);
        assert_eq!(spec.runs(), vec![(0, 2), (5, 5), (12, 1)]);
        assert!(RangeSpec::default().runs().is_empty());
    }

    #[test]
    fn test_contiguous_and_offset() {
        assert_eq!(RangeSpec::contiguous(2, 3).as_slice(), &[2, 3, 4]);
        assert!(RangeSpec::contiguous(2, 0).is_empty());
        assert_eq!(
            RangeSpec::from_indices([1, 5]).offset(1).as_slice(),
            &[2, 6]
        );
    }

    #[test]
    fn test_to_spec_string() {
        let spec = RangeSpec::parse("9,1,2,3,7").unwrap();
        assert_eq!(spec.to_spec_string(), "1:3,7,9");
    }
}
