use std::collections::{BTreeMap, BTreeSet, HashMap};

use canonical::{fuzzy_match, fuzzy_partial_match, normalize_role};
use tracing::{debug, info, warn};

use crate::types::{
    MatchConfig, MatchError, MatchKind, MatchResult, RoleResolution, RECOMMENDED_MIN_THRESHOLD,
};


/// Normalized key -> first-seen XML spelling.
///
/// Built once per comparison. Later XML roles that normalize to a key already
/// present are ignored for direct matching; they still take part in the fuzzy
/// tier, which scans the raw XML list.
#[derive(Debug)]
pub(crate) struct XmlRoleIndex<'a> {
    by_key: HashMap<String, &'a str>,
}

impl<'a> XmlRoleIndex<'a> {
    pub(crate) fn build<S: AsRef<str>>(xml_roles: &'a [S]) -> Self {
        let mut by_key = HashMap::with_capacity(xml_roles.len());
        for role in xml_roles {
            let role = role.as_ref();
            by_key.entry(normalize_role(role)).or_insert(role);
        }
        Self { by_key }
    }

    pub(crate) fn lookup(&self, key: &str) -> Option<&'a str> {
        self.by_key.get(key).copied()
    }

    pub(crate) fn len(&self) -> usize {
        self.by_key.len()
    }
}

/// Reconciles PDF-extracted role titles against the canonical XML role set.
///
/// Three tiers run in strict order and the first one that resolves a PDF role
/// wins:
///
/// 1. **Direct**: normalized keys are equal.
/// 2. **Fuzzy / partial**: XML roles are scanned in input order and the first
///    candidate whose raw-string `ratio` or `partial_ratio` clears the
///    threshold is taken. This is first-fit, not best-fit: XML order is the
///    tie-break.
/// 3. **Unmatched**: everything left is reported as incorrect.
///
/// The matcher holds only its configuration, so one instance can be shared
/// across threads and calls.
#[derive(Debug, Clone)]
pub struct RoleMatcher {
    config: MatchConfig,
}

impl RoleMatcher {
    /// Construct a matcher, rejecting invalid thresholds.
    pub fn new(config: MatchConfig) -> Result<Self, MatchError> {
        config.validate()?;
        if config.fuzzy_threshold < RECOMMENDED_MIN_THRESHOLD {
            warn!(
                fuzzy_threshold = config.fuzzy_threshold,
                recommended_min = RECOMMENDED_MIN_THRESHOLD,
                "fuzzy threshold below recommended range; unrelated roles may match"
            );
        }
        Ok(Self { config })
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Compare PDF roles against XML roles.
    ///
    /// Total over any two inputs: empty PDF input yields an empty, passing
    /// result; empty XML input marks every PDF role incorrect.
    pub fn compare<S, T>(&self, xml_roles: &[S], pdf_roles: &[T]) -> MatchResult
    where
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let index = XmlRoleIndex::build(xml_roles);

        let mut matched: BTreeSet<String> = BTreeSet::new();
        let mut incorrect: BTreeSet<String> = BTreeSet::new();
        let mut fuzzy_matches: BTreeMap<String, String> = BTreeMap::new();
        let mut resolutions: Vec<RoleResolution> = pdf_roles
            .iter()
            .map(|role| RoleResolution {
                pdf_role: role.as_ref().to_string(),
                xml_role: None,
                kind: MatchKind::Unmatched,
            })
            .collect();

        // Direct pass.
        let mut pending = Vec::new();
        for (pos, pdf_role) in pdf_roles.iter().enumerate() {
            let pdf_role = pdf_role.as_ref();
            match index.lookup(&normalize_role(pdf_role)) {
                Some(xml_role) => {
                    debug!(pdf_role, xml_role, "direct match");
                    matched.insert(xml_role.to_string());
                    resolutions[pos].xml_role = Some(xml_role.to_string());
                    resolutions[pos].kind = MatchKind::Direct;
                }
                None => pending.push(pos),
            }
        }

        // Fuzzy pass over whatever the direct pass left.
        for pos in pending {
            let pdf_role = pdf_roles[pos].as_ref();
            match self.resolve_fuzzy(pdf_role, xml_roles) {
                Some((xml_role, kind)) => {
                    debug!(pdf_role, xml_role, ?kind, "fuzzy match");
                    matched.insert(xml_role.to_string());
                    fuzzy_matches.insert(pdf_role.to_string(), xml_role.to_string());
                    resolutions[pos].xml_role = Some(xml_role.to_string());
                    resolutions[pos].kind = kind;
                }
                None => {
                    debug!(pdf_role, "no match");
                    incorrect.insert(pdf_role.to_string());
                }
            }
        }

        let result = MatchResult {
            is_incorrect: !incorrect.is_empty(),
            matched_xml_roles: matched.into_iter().collect(),
            incorrect_pdf_roles: incorrect.into_iter().collect(),
            fuzzy_matches,
            resolutions,
        };

        info!(
            xml_roles = xml_roles.len(),
            xml_keys = index.len(),
            pdf_roles = pdf_roles.len(),
            matched = result.matched_xml_roles.len(),
            fuzzy_matched = result.fuzzy_matches.len(),
            incorrect = result.incorrect_pdf_roles.len(),
            fuzzy_threshold = self.config.fuzzy_threshold,
            "role comparison complete"
        );

        result
    }

    /// First XML role (in input order) that clears the whole-string test or,
    /// failing that, the partial test.
    fn resolve_fuzzy<'x, S: AsRef<str>>(
        &self,
        pdf_role: &str,
        xml_roles: &'x [S],
    ) -> Option<(&'x str, MatchKind)> {
        let threshold = self.config.fuzzy_threshold;
        xml_roles.iter().map(|role| role.as_ref()).find_map(|xml_role| {
            if fuzzy_match(pdf_role, xml_role, threshold) {
                Some((xml_role, MatchKind::Fuzzy))
            } else if fuzzy_partial_match(pdf_role, xml_role, threshold) {
                Some((xml_role, MatchKind::Partial))
            } else {
                None
            }
        })
    }
}

impl Default for RoleMatcher {
    fn default() -> Self {
        Self {
            config: MatchConfig::default(),
        }
    }
}

/// One-shot comparison with an explicit threshold.
pub fn compare_roles<S, T>(
    xml_roles: &[S],
    pdf_roles: &[T],
    fuzzy_threshold: u8,
) -> Result<MatchResult, MatchError>
where
    S: AsRef<str>,
    T: AsRef<str>,
{
    let matcher = RoleMatcher::new(MatchConfig::with_threshold(fuzzy_threshold))?;
    Ok(matcher.compare(xml_roles, pdf_roles))
}
