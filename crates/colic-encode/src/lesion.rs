//! Lesion code decoding.

use serde::Serialize;

use colic_standards::{LesionTables, NONE_LABEL, lookup};

/// Site codes that occupy two digits.
const TWO_DIGIT_SITES: [&str; 2] = ["00", "11"];

/// The four labels packed into one lesion code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DecodedLesion {
    pub site: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub subtype: &'static str,
    pub specific: &'static str,
}

impl DecodedLesion {
    pub const NONE: DecodedLesion = DecodedLesion {
        site: NONE_LABEL,
        kind: NONE_LABEL,
        subtype: NONE_LABEL,
        specific: NONE_LABEL,
    };

    /// Labels in `(site, type, subtype, specific)` order.
    pub fn labels(&self) -> [&'static str; 4] {
        [self.site, self.kind, self.subtype, self.specific]
    }

    pub fn is_none(&self) -> bool {
        self.labels().iter().all(|label| *label == NONE_LABEL)
    }
}

/// Splits a lesion code into its four sub-codes and resolves each one.
///
/// Parsing, in order, after trimming surrounding whitespace:
///
/// 1. a code holding anything but ASCII digits decodes to four `none` labels;
/// 2. a `00` or `11` prefix is a two-digit site, followed by one type digit,
///    one subtype digit and the remaining specific code;
/// 3. any other code starting with `0` decodes to four `none` labels;
/// 4. otherwise site, type and subtype are one digit each and the specific
///    code is the remainder.
///
/// Sub-codes past the end of a short code are empty and resolve to `none`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LesionCodeDecoder {
    tables: LesionTables,
}

impl LesionCodeDecoder {
    pub fn new(tables: LesionTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &LesionTables {
        &self.tables
    }

    pub fn decode(&self, code: &str) -> DecodedLesion {
        let code = code.trim();
        if !code.bytes().all(|byte| byte.is_ascii_digit()) {
            return DecodedLesion::NONE;
        }
        let prefix = part(code, 0, Some(2));
        let (site, kind, subtype, specific) = if TWO_DIGIT_SITES.contains(&prefix) {
            (
                prefix,
                part(code, 2, Some(3)),
                part(code, 3, Some(4)),
                part(code, 4, None),
            )
        } else if code.starts_with('0') {
            return DecodedLesion::NONE;
        } else {
            (
                part(code, 0, Some(1)),
                part(code, 1, Some(2)),
                part(code, 2, Some(3)),
                part(code, 3, None),
            )
        };

        DecodedLesion {
            site: lookup(self.tables.site, site),
            kind: lookup(self.tables.kind, kind),
            subtype: lookup(self.tables.subtype, subtype),
            specific: lookup(self.tables.specific, specific),
        }
    }
}

/// Slice `start..end` of an all-digit `code`, empty when out of range.
fn part(code: &str, start: usize, end: Option<usize>) -> &str {
    let end = end.map_or(code.len(), |end| end.min(code.len()));
    if start >= end {
        return "";
    }
    code.get(start..end).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(code: &str) -> [&'static str; 4] {
        LesionCodeDecoder::default().decode(code).labels()
    }

    #[test]
    fn decodes_single_digit_site() {
        assert_eq!(
            decode("2209"),
            ["sm_intestine", "strangulation", "none", "lipoma/splenic_incarceration"]
        );
        assert_eq!(
            decode("3111"),
            ["lg_colon", "simple", "mechanical", "obturation"]
        );
    }

    #[test]
    fn decodes_two_digit_specific_code() {
        assert_eq!(
            decode("31110"),
            ["lg_colon", "simple", "mechanical", "displacement"]
        );
    }

    #[test]
    fn decodes_two_digit_sites() {
        assert_eq!(
            decode("11300"),
            ["all_intestinal_sites", "inflammation", "none", "none"]
        );
        assert_eq!(decode("00400"), ["none", "other", "none", "none"]);
    }

    #[test]
    fn leading_zero_is_no_lesion() {
        assert!(LesionCodeDecoder::default().decode("0").is_none());
        assert!(LesionCodeDecoder::default().decode("0512").is_none());
    }

    #[test]
    fn short_and_malformed_codes_do_not_panic() {
        assert_eq!(decode(""), ["none"; 4]);
        assert_eq!(decode("5"), ["cecum", "none", "none", "none"]);
        assert_eq!(decode("11"), ["all_intestinal_sites", "none", "none", "none"]);
        assert_eq!(decode("abc"), ["none"; 4]);
    }

    #[test]
    fn non_digit_codes_are_no_lesion() {
        assert!(LesionCodeDecoder::default().decode("2é9").is_none());
        assert!(LesionCodeDecoder::default().decode("22-09").is_none());
        assert!(LesionCodeDecoder::default().decode("2209.5").is_none());
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(decode(" 2209 "), decode("2209"));
        assert_eq!(
            decode("\t31110\n"),
            ["lg_colon", "simple", "mechanical", "displacement"]
        );
        assert_eq!(decode("   "), ["none"; 4]);
    }

    #[test]
    fn unmapped_sub_codes_fall_back_to_none() {
        assert_eq!(decode("2999"), ["sm_intestine", "none", "none", "lipoma/splenic_incarceration"]);
        assert_eq!(decode("41299"), ["lg_colon_and_cecum", "simple", "paralytic", "none"]);
    }
}
