//! Guidance text keyed by (stem, transformation, house).
//!
//! The engine never owns the text. Callers supply any [`ExplanationLookup`];
//! [`GuidanceTable`] is the in-memory version loaded from config rows.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ZiweiError;
use crate::ganzhi::Stem;
use crate::palace::HouseName;
use crate::sihua::TransformationRecord;
use crate::star::Transformation;

/// Free-text guidance for one transformation landing in one house.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Guidance {
    pub phenomenon: String,
    pub tendency: String,
    pub events: String,
    pub hint: String,
    pub advice: String,
}

impl Guidance {
    /// Generic text used when no row matches.
    pub fn fallback(kind: Transformation, house: HouseName) -> Self {
        let k = kind.glyph();
        let h = house.full_name();
        Self {
            phenomenon: format!("{k}星在{h}，帶來相關的能量與變化。"),
            tendency: "需要特別關注這個領域的發展。".to_string(),
            events: "此宮位可能有相關的機會或挑戰。".to_string(),
            hint: format!("多留意{h}相關的事務。"),
            advice: format!("善用{k}的能量在{h}上。"),
        }
    }
}

/// Read-only guidance source.
pub trait ExplanationLookup: Send + Sync {
    fn lookup(&self, stem: Stem, kind: Transformation, house: HouseName) -> Option<Guidance>;
}

/// One configured text row. Glyph fields are parsed by [`GuidanceTable::from_rows`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuidanceRow {
    pub stem: String,
    /// `祿`/`權`/`科`/`忌`, with or without the `化` prefix.
    pub kind: String,
    /// Short or 宮-suffixed house name; 僕役 is accepted for 交友.
    pub house: String,
    #[serde(flatten)]
    pub guidance: Guidance,
}

/// In-memory guidance rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuidanceTable {
    rows: HashMap<(Stem, Transformation, HouseName), Guidance>,
}

impl GuidanceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse every row; the first row with an unknown glyph fails the table.
    pub fn from_rows(rows: &[GuidanceRow]) -> Result<Self, ZiweiError> {
        let mut table = Self::new();
        for row in rows {
            let stem: Stem = row.stem.parse()?;
            let kind = Transformation::from_glyph(&row.kind)
                .ok_or_else(|| ZiweiError::InvalidTransformation(row.kind.clone()))?;
            let house: HouseName = row.house.parse()?;
            table.insert(stem, kind, house, row.guidance.clone());
        }
        Ok(table)
    }

    pub fn insert(&mut self, stem: Stem, kind: Transformation, house: HouseName, g: Guidance) {
        self.rows.insert((stem, kind, house), g);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl ExplanationLookup for GuidanceTable {
    fn lookup(&self, stem: Stem, kind: Transformation, house: HouseName) -> Option<Guidance> {
        self.rows.get(&(stem, kind, house)).cloned()
    }
}

/// A found transformation paired with its guidance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExplainedRecord {
    pub record: TransformationRecord,
    pub house: HouseName,
    pub guidance: Guidance,
    /// False when [`Guidance::fallback`] text was substituted.
    pub from_table: bool,
}

/// Pair every found record with guidance. Records whose star is not on the
/// ring are skipped.
pub fn explain_records(
    records: &[TransformationRecord],
    lookup: &dyn ExplanationLookup,
) -> Vec<ExplainedRecord> {
    records
        .iter()
        .filter_map(|r| {
            let house = r.house()?;
            let (guidance, from_table) = match lookup.lookup(r.stem, r.kind, house) {
                Some(g) => (g, true),
                None => {
                    warn!(
                        stem = r.stem.glyph(),
                        kind = r.kind.glyph(),
                        house = house.glyph(),
                        "no guidance row, using default text"
                    );
                    (Guidance::fallback(r.kind, house), false)
                }
            };
            Some(ExplainedRecord {
                record: *r,
                house,
                guidance,
                from_table,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ganzhi::Branch;
    use crate::sihua::Placement;
    use crate::star::StarName;

    fn row(house: &str) -> GuidanceRow {
        GuidanceRow {
            stem: "甲".into(),
            kind: "化祿".into(),
            house: house.into(),
            guidance: Guidance {
                phenomenon: "財源廣進".into(),
                ..Guidance::default()
            },
        }
    }

    fn record(placement: Placement) -> TransformationRecord {
        TransformationRecord {
            stem: Stem::Jia,
            kind: Transformation::Lu,
            star: StarName::LianZhen,
            placement,
        }
    }

    #[test]
    fn rows_parse_and_match_by_canonical_house() {
        let table = GuidanceTable::from_rows(&[row("財帛宮")]).unwrap();
        assert_eq!(table.len(), 1);
        let g = table
            .lookup(Stem::Jia, Transformation::Lu, HouseName::Wealth)
            .unwrap();
        assert_eq!(g.phenomenon, "財源廣進");
    }

    #[test]
    fn friends_alias() {
        let table = GuidanceTable::from_rows(&[row("僕役")]).unwrap();
        assert!(
            table
                .lookup(Stem::Jia, Transformation::Lu, HouseName::Friends)
                .is_some()
        );
    }

    #[test]
    fn bad_row_fails() {
        assert!(GuidanceTable::from_rows(&[row("不存在")]).is_err());
    }

    #[test]
    fn found_records_get_text_missing_ones_are_skipped() {
        let table = GuidanceTable::from_rows(&[row("財帛")]).unwrap();
        let records = [
            record(Placement::Found {
                house: HouseName::Wealth,
                branch: Branch::Xu,
            }),
            record(Placement::NotFound),
            record(Placement::Found {
                house: HouseName::Life,
                branch: Branch::Yin,
            }),
        ];
        let out = explain_records(&records, &table);
        assert_eq!(out.len(), 2);
        assert!(out[0].from_table);
        assert_eq!(out[0].guidance.phenomenon, "財源廣進");
        assert!(!out[1].from_table);
        assert_eq!(out[1].guidance.hint, "多留意命宮相關的事務。");
    }

    #[test]
    fn guidance_row_reads_flat_json() {
        let r: GuidanceRow = serde_json::from_str(
            r#"{"stem":"乙","kind":"忌","house":"夫妻","hint":"慎言"}"#,
        )
        .unwrap();
        assert_eq!(r.guidance.hint, "慎言");
        assert!(r.guidance.advice.is_empty());
    }
}
