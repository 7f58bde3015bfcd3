use std::collections::BTreeMap;
use std::fmt;

// ---------------------------------------------------------------------------
// CellValue – a single raw spreadsheet cell
// ---------------------------------------------------------------------------

/// An untyped cell as read from the workbook, before any narrowing.
///
/// Every reader (xlsx, csv) lowers its native cell type into this union so
/// the table builder only ever deals with three cases.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Empty,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Number(v) => write!(f, "{v}"),
            CellValue::Empty => write!(f, "<empty>"),
        }
    }
}

impl CellValue {
    /// Narrow to a contaminant name: trimmed, non-empty text.
    ///
    /// Numeric cells are rendered as text so a numeric identifier still
    /// produces a key.
    pub fn as_name(&self) -> Option<String> {
        let name = match self {
            CellValue::Text(s) => s.trim().to_string(),
            CellValue::Number(v) if v.is_finite() => v.to_string(),
            _ => return None,
        };
        if name.is_empty() { None } else { Some(name) }
    }

    /// Narrow to a reference dose. Only finite numeric cells qualify;
    /// text such as `"NA"` is absent, never zero.
    pub fn as_dose(&self) -> Option<f64> {
        match self {
            CellValue::Number(v) if v.is_finite() => Some(*v),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// ReferenceTable – contaminant name → RfD
// ---------------------------------------------------------------------------

/// Oral reference dose for one contaminant, in mg/(kg·day).
/// `None` when the source row carried no numeric value.
pub type ReferenceDose = Option<f64>;

/// Result of looking a contaminant up in the table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lookup {
    /// Present with a dose that can divide an intake (finite, > 0).
    Usable(f64),
    /// Present, but the dose is missing, zero or negative.
    Unusable,
    /// No row carried this name.
    NotFound,
}

/// Immutable contaminant → reference dose mapping, built once per load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceTable {
    entries: BTreeMap<String, ReferenceDose>,
}

impl ReferenceTable {
    /// Build from `(name, dose)` pairs. Later pairs overwrite earlier ones.
    ///
    /// Names are trimmed; pairs whose name is blank are dropped.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, ReferenceDose)>,
    {
        ReferenceTable {
            entries: entries
                .into_iter()
                .filter_map(|(name, dose)| {
                    let name = name.trim();
                    (!name.is_empty()).then(|| (name.to_string(), dose))
                })
                .collect(),
        }
    }

    /// Raw stored dose. `None` when the name is unknown,
    /// `Some(None)` when it is known but has no numeric dose.
    pub fn get(&self, name: &str) -> Option<ReferenceDose> {
        self.entries.get(name).copied()
    }

    /// Case-sensitive lookup classified for calculation.
    pub fn lookup(&self, name: &str) -> Lookup {
        match self.entries.get(name) {
            None => Lookup::NotFound,
            Some(Some(dose)) if dose.is_finite() && *dose > 0.0 => Lookup::Usable(*dose),
            Some(_) => Lookup::Unusable,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Contaminant names in sorted order, e.g. for a selection list.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, ReferenceDose)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Number of entries whose dose can feed a calculation.
    pub fn usable_count(&self) -> usize {
        self.entries
            .keys()
            .filter(|name| matches!(self.lookup(name), Lookup::Usable(_)))
            .count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
