use std::collections::{BTreeMap, BTreeSet};

// ---------------------------------------------------------------------------
// Country parsing
// ---------------------------------------------------------------------------

/// Word-wise capitalisation: a letter following another letter is lowered,
/// every other letter is raised. `"united kingdom"` → `"United Kingdom"`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_letter = false;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if prev_is_letter {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(ch);
            prev_is_letter = false;
        }
    }
    out
}

/// Split a raw countries field into its set of normalized names.
///
/// Blank or absent fields yield the empty set; repeated names collapse.
pub fn parse_countries(raw: Option<&str>) -> BTreeSet<String> {
    let Some(raw) = raw else {
        return BTreeSet::new();
    };
    raw.split(',')
        .map(str::trim)
        .filter(|tok| !tok.is_empty())
        .map(title_case)
        .collect()
}

// ---------------------------------------------------------------------------
// CountryIndex – vocabulary + name → column mapping
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct CountryIndex {
    names: Vec<String>,
    by_name: BTreeMap<String, usize>,
}

impl CountryIndex {
    pub fn from_names(names: BTreeSet<String>) -> Self {
        let names: Vec<String> = names.into_iter().collect();
        let by_name = names
            .iter()
            .enumerate()
            .map(|(i, n)| (n.clone(), i))
            .collect();
        CountryIndex { names, by_name }
    }

    /// Sorted vocabulary.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn name(&self, idx: usize) -> Option<&str> {
        self.names.get(idx).map(String::as_str)
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Country expansion over every record's raw field.
///
/// Returns the vocabulary (union of all per-record sets) and, per record,
/// the sorted vocabulary indices it belongs to.
pub fn expand<'a>(fields: impl Iterator<Item = Option<&'a str>>) -> (CountryIndex, Vec<Vec<usize>>) {
    let per_record: Vec<BTreeSet<String>> = fields.map(parse_countries).collect();

    let vocabulary: BTreeSet<String> = per_record.iter().flatten().cloned().collect();
    let index = CountryIndex::from_names(vocabulary);

    let memberships = per_record
        .iter()
        .map(|set| {
            // BTreeSet iteration is sorted and the vocabulary is sorted,
            // so the resulting ids are sorted too.
            set.iter().filter_map(|name| index.index_of(name)).collect()
        })
        .collect();

    (index, memberships)
}
