//! Reconciliation of FERC 1 plant names against the plant mapping sheet.
//!
//! Plants reported on FERC 1 but missing from `plants_ferc1` never receive a
//! PUDL plant id. The audit lists them with the closest mapped name of the same
//! respondent, so the sheet can be fixed by hand. It never changes loaded data.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use pudl_core::{DataFrame, FrameError, FrameExt, Value};
use serde::Serialize;
use strsim::jaro_winkler;

#[derive(Debug, Clone, Copy)]
pub struct AuditConfig {
    pub auto_match_threshold: f64,
    pub review_threshold: f64,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            auto_match_threshold: 0.95,
            review_threshold: 0.85,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    LikelyMatch,
    NeedsReview,
    Unmatched,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnmappedPlant {
    pub respondent_id: i64,
    pub plant_name: String,
    /// FERC 1 tables the plant appears in.
    pub tables: Vec<String>,
    pub best_match: Option<String>,
    pub score: f64,
    pub status: MatchStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AuditReport {
    /// Distinct (respondent, plant name) pairs seen in the extract.
    pub checked: usize,
    pub unmapped: Vec<UnmappedPlant>,
}

/// Headline numbers of an [`AuditReport`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AuditCounts {
    pub checked: usize,
    pub likely_matches: usize,
    pub needs_review: usize,
    pub unmatched: usize,
}

impl AuditReport {
    pub fn counts(&self) -> AuditCounts {
        AuditCounts {
            checked: self.checked,
            likely_matches: self.likely_matches(),
            needs_review: self.needs_review(),
            unmatched: self.unmatched(),
        }
    }

    fn count(&self, status: MatchStatus) -> usize {
        self.unmapped.iter().filter(|p| p.status == status).count()
    }

    pub fn likely_matches(&self) -> usize {
        self.count(MatchStatus::LikelyMatch)
    }

    pub fn needs_review(&self) -> usize {
        self.count(MatchStatus::NeedsReview)
    }

    pub fn unmatched(&self) -> usize {
        self.count(MatchStatus::Unmatched)
    }
}

type PlantKey = (i64, String);

fn plant_key(respondent: &Value, name: &Value) -> Option<PlantKey> {
    let respondent = respondent.as_i64()?;
    let name = name.as_str().map(str::trim).filter(|n| !n.is_empty())?;
    Some((respondent, name.to_string()))
}

/// Every usable plant key of a frame; empty when it lacks either column.
fn plant_keys(frame: &DataFrame) -> Result<Vec<PlantKey>, FrameError> {
    if !frame.has_column("respondent_id") || !frame.has_column("plant_name") {
        return Ok(Vec::new());
    }
    let respondents = frame.values("respondent_id")?;
    let names = frame.values("plant_name")?;
    Ok(respondents
        .iter()
        .zip(&names)
        .filter_map(|(respondent, name)| plant_key(respondent, name))
        .collect())
}

/// Collects FERC 1 plants table by table, then compares them with the
/// mapping in [`PlantAudit::finish`].
pub struct PlantAudit {
    config: AuditConfig,
    seen: BTreeMap<PlantKey, BTreeSet<String>>,
}

impl PlantAudit {
    pub fn new(config: AuditConfig) -> Self {
        Self {
            config,
            seen: BTreeMap::new(),
        }
    }

    pub fn normalize_name(input: &str) -> String {
        input
            .to_ascii_lowercase()
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { ' ' })
            .collect::<String>()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn similarity(a: &str, b: &str) -> f64 {
        jaro_winkler(&Self::normalize_name(a), &Self::normalize_name(b))
    }

    /// Records the plants of a transformed FERC 1 table. Tables without
    /// plant names are ignored.
    pub fn observe(&mut self, table: &str, frame: &DataFrame) -> Result<(), FrameError> {
        for key in plant_keys(frame)? {
            self.seen.entry(key).or_default().insert(table.to_string());
        }
        Ok(())
    }

    fn classify(&self, score: f64) -> MatchStatus {
        if score >= self.config.auto_match_threshold {
            MatchStatus::LikelyMatch
        } else if score >= self.config.review_threshold {
            MatchStatus::NeedsReview
        } else {
            MatchStatus::Unmatched
        }
    }

    /// Compares everything observed with `plants_ferc1` as loaded (columns
    /// `respondent_id` and `plant_name`).
    pub fn finish(self, plants_ferc1: &DataFrame) -> Result<AuditReport, FrameError> {
        let mapped: HashSet<PlantKey> = plant_keys(plants_ferc1)?.into_iter().collect();
        let mut by_respondent: BTreeMap<i64, Vec<&str>> = BTreeMap::new();
        for (respondent, name) in &mapped {
            by_respondent.entry(*respondent).or_default().push(name);
        }

        let mut unmapped = Vec::new();
        for ((respondent_id, plant_name), tables) in &self.seen {
            if mapped.contains(&(*respondent_id, plant_name.clone())) {
                continue;
            }
            let best = by_respondent
                .get(respondent_id)
                .into_iter()
                .flatten()
                .map(|candidate| (*candidate, Self::similarity(plant_name, candidate)))
                .max_by(|a, b| a.1.total_cmp(&b.1).then_with(|| b.0.cmp(a.0)));
            let (best_match, score) = match best {
                Some((name, score)) => (Some(name.to_string()), score),
                None => (None, 0.0),
            };
            unmapped.push(UnmappedPlant {
                respondent_id: *respondent_id,
                plant_name: plant_name.clone(),
                tables: tables.iter().cloned().collect(),
                best_match,
                score,
                status: self.classify(score),
            });
        }

        Ok(AuditReport {
            checked: self.seen.len(),
            unmapped,
        })
    }
}
