//! Lesion code lookup tables.
//!
//! A lesion code packs four independent findings into one digit string:
//!
//! ```text
//! 2 2 0 9
//! │ │ │ └── specific code  (9  -> lipoma/splenic_incarceration)
//! │ │ └──── subtype        (0  -> none)
//! │ └────── type           (2  -> strangulation)
//! └──────── site           (2  -> sm_intestine)
//! ```
//!
//! Site codes `00` and `11` take two digits, and specific code `10` takes two
//! digits; the decoder in `colic-encode` handles the offsets.

/// Label used for every sub-code that is absent from its table.
pub const NONE_LABEL: &str = "none";

/// Code-to-label table for one sub-code position.
pub type LookupTable = &'static [(&'static str, &'static str)];

// =============================================================================
// Sub-code tables
// =============================================================================

/// Lesion site (first one or two digits).
pub const LESION_SITES: LookupTable = &[
    ("1", "gastric"),
    ("2", "sm_intestine"),
    ("3", "lg_colon"),
    ("4", "lg_colon_and_cecum"),
    ("5", "cecum"),
    ("6", "transverse_colon"),
    ("7", "retum/descending_colon"),
    ("8", "uterus"),
    ("9", "bladder"),
    ("11", "all_intestinal_sites"),
    ("00", NONE_LABEL),
];

/// Lesion type.
pub const LESION_TYPES: LookupTable = &[
    ("1", "simple"),
    ("2", "strangulation"),
    ("3", "inflammation"),
    ("4", "other"),
    ("0", NONE_LABEL),
];

/// Lesion subtype.
pub const LESION_SUBTYPES: LookupTable = &[
    ("1", "mechanical"),
    ("2", "paralytic"),
    ("0", NONE_LABEL),
];

/// Lesion specific code (remaining digits).
pub const LESION_SPECIFIC_CODES: LookupTable = &[
    ("1", "obturation"),
    ("2", "intrinsic"),
    ("3", "extrinsic"),
    ("4", "adynamic"),
    ("5", "volvulus/torsion"),
    ("6", "intussuption"),
    ("7", "thromboembolic"),
    ("8", "hernia"),
    ("9", "lipoma/splenic_incarceration"),
    ("10", "displacement"),
    ("0", NONE_LABEL),
];

// =============================================================================
// Encoded lesion domain
// =============================================================================

/// Lesion segment labels in vector order: every non-`none` label of the four
/// tables, site first.
pub const LESION_LABELS: [&str; 26] = [
    "gastric",
    "sm_intestine",
    "lg_colon",
    "lg_colon_and_cecum",
    "cecum",
    "transverse_colon",
    "retum/descending_colon",
    "uterus",
    "bladder",
    "all_intestinal_sites",
    "simple",
    "strangulation",
    "inflammation",
    "other",
    "mechanical",
    "paralytic",
    "obturation",
    "intrinsic",
    "extrinsic",
    "adynamic",
    "volvulus/torsion",
    "intussuption",
    "thromboembolic",
    "hernia",
    "lipoma/splenic_incarceration",
    "displacement",
];

/// The four tables, in decoding order.
#[derive(Debug, Clone, Copy)]
pub struct LesionTables {
    pub site: LookupTable,
    pub kind: LookupTable,
    pub subtype: LookupTable,
    pub specific: LookupTable,
}

impl LesionTables {
    /// The tables the reference model was trained with.
    pub const REFERENCE: LesionTables = LesionTables {
        site: LESION_SITES,
        kind: LESION_TYPES,
        subtype: LESION_SUBTYPES,
        specific: LESION_SPECIFIC_CODES,
    };

    /// Every table, site first.
    pub fn all(&self) -> [LookupTable; 4] {
        [self.site, self.kind, self.subtype, self.specific]
    }
}

impl Default for LesionTables {
    fn default() -> Self {
        Self::REFERENCE
    }
}

/// Look a sub-code up, falling back to [`NONE_LABEL`].
pub fn lookup(table: LookupTable, code: &str) -> &'static str {
    table
        .iter()
        .find(|(key, _)| *key == code)
        .map_or(NONE_LABEL, |&(_, label)| label)
}
