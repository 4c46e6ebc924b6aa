use indexmap::IndexMap;

/// Literal marker meaning "value not applicable". It maps to code 0 instead
/// of participating in occurrence-based numbering, but it still occupies a
/// slot in the distinct-value ordering.
pub const NA: &str = "NA";

/// Zero-pads a code to `width` digits. Codes whose natural decimal length
/// exceeds the width are returned untruncated, so the rendered string is
/// simply wider than nominal.
pub fn pad(code: usize, width: usize) -> String {
    format!("{code:0width$}")
}

/// Ordered mapping from raw column value to assigned code, built by a single
/// left-to-right pass over the column.
#[derive(Debug, Clone, Default)]
pub struct CodeBook {
    codes: IndexMap<String, usize>,
}

impl CodeBook {
    /// Scans a column top to bottom and numbers distinct raw values in
    /// first-occurrence order, starting at 1.
    pub fn from_column<'a, I>(values: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut codes = IndexMap::new();
        for value in values {
            let next = codes.len() + 1;
            codes.entry(value.to_string()).or_insert(next);
        }
        CodeBook { codes }
    }

    /// Renders the zero-padded code for a raw value. The NA sentinel always
    /// maps to code 0; values never seen during the scan also fall back to
    /// the sentinel code.
    pub fn code(&self, raw: &str, width: usize) -> String {
        if raw == NA {
            return pad(0, width);
        }
        match self.codes.get(raw) {
            Some(&code) => pad(code, width),
            None => pad(0, width),
        }
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_follow_first_occurrence_order() {
        let book = CodeBook::from_column(["X", "Y", "X", "Z"]);
        assert_eq!(book.code("X", 2), "01");
        assert_eq!(book.code("Y", 2), "02");
        assert_eq!(book.code("Z", 2), "03");
        assert_eq!(book.len(), 3);
    }

    #[test]
    fn na_maps_to_sentinel_regardless_of_position() {
        let book = CodeBook::from_column(["NA", "X", "NA", "Y"]);
        assert_eq!(book.code("NA", 3), "000");
    }

    #[test]
    fn na_occupies_a_slot_in_the_ordering() {
        // NA is part of the distinct-value ordering, so values after it
        // are shifted even though NA itself renders as the sentinel.
        let book = CodeBook::from_column(["X", "NA", "Y"]);
        assert_eq!(book.code("X", 2), "01");
        assert_eq!(book.code("Y", 2), "03");
    }

    #[test]
    fn overflowing_codes_widen_instead_of_truncating() {
        let values: Vec<String> = (0..120).map(|i| format!("v{i}")).collect();
        let book = CodeBook::from_column(values.iter().map(String::as_str));
        assert_eq!(book.code("v0", 2), "01");
        assert_eq!(book.code("v119", 2), "120");
    }

    #[test]
    fn pad_is_decimal_left_padding() {
        assert_eq!(pad(7, 4), "0007");
        assert_eq!(pad(0, 2), "00");
        assert_eq!(pad(12345, 3), "12345");
    }
}
