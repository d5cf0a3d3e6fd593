use crate::config::{Affix, AffixTargets, Combination, Field, RuleConfig};
use crate::error::{Error, Result};
use crate::profile::{NormalizedProfile, PersonalData};
use crate::rules::{affixed, apply_transform, capitalize, leetspeak};
use std::collections::BTreeSet;
use std::panic::{self, AssertUnwindSafe};
use tracing::debug;

#[derive(Debug, Default)]
struct CandidateSet {
    inner: BTreeSet<String>,
}

impl CandidateSet {
    fn insert(&mut self, candidate: String) {
        if !candidate.is_empty() {
            self.inner.insert(candidate);
        }
    }

    fn extend(&mut self, candidates: impl IntoIterator<Item = String>) {
        for candidate in candidates {
            self.insert(candidate);
        }
    }

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn into_sorted(self, min_length: usize) -> Vec<String> {
        self.inner
            .into_iter()
            .filter(|c| c.chars().count() >= min_length)
            .collect()
    }
}

/// Concatenates the parts of a combination, or `None` if any part is empty.
fn build(profile: &NormalizedProfile, combination: &Combination) -> Option<String> {
    let mut out = String::new();
    for part in combination.0 {
        let value = profile.field(part.field);
        if value.is_empty() {
            return None;
        }
        out.push_str(&apply_transform(value, part.transform));
    }
    (!out.is_empty()).then_some(out)
}

fn build_all(profile: &NormalizedProfile, combinations: &[Combination]) -> Vec<String> {
    combinations
        .iter()
        .filter_map(|c| build(profile, c))
        .collect()
}

pub fn generate(data: &PersonalData, config: &RuleConfig) -> Vec<String> {
    let profile = NormalizedProfile::from_data(data, config);
    if profile.is_empty() {
        debug!("all fields empty after normalization");
        return Vec::new();
    }

    let mut candidates = CandidateSet::default();

    let base = build_all(&profile, config.base);
    candidates.extend(base.iter().cloned());
    debug!(base = base.len(), "built base combinations");

    if config.include_case_rule {
        candidates.extend(base.iter().map(|b| capitalize(b)));
    }

    candidates.extend(base.iter().map(|b| leetspeak(b)));

    for rule in config.affixes {
        let targets: Vec<&str> = match rule.targets {
            AffixTargets::Base => base.iter().map(String::as_str).collect(),
            AffixTargets::Fields(fields) => fields.iter().map(|f| profile.field(*f)).collect(),
        };

        for affix in rule.affixes {
            let affix = match affix {
                Affix::Literal(s) => *s,
                Affix::Year => profile.field(Field::Year),
            };
            for target in &targets {
                candidates.extend(affixed(target, affix, rule.prepend));
            }
        }
    }
    debug!(total = candidates.len(), "applied case, leetspeak and affix rules");

    candidates.extend(build_all(&profile, config.initials));
    candidates.extend(build_all(&profile, config.trailing_digits));
    candidates.extend(build_all(&profile, config.auxiliary));

    let total = candidates.len();
    let result = candidates.into_sorted(config.min_length);
    debug!(
        total,
        kept = result.len(),
        min_length = config.min_length,
        "filtered candidates"
    );

    result
}

/// Runs [`generate`] and turns an unexpected panic into
/// [`Error::Internal`] instead of unwinding into the caller.
pub fn generate_checked(data: &PersonalData, config: &RuleConfig) -> Result<Vec<String>> {
    panic::catch_unwind(AssertUnwindSafe(|| generate(data, config))).map_err(|payload| {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown failure".to_string());
        Error::internal(message)
    })
}
