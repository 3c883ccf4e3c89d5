use std::fmt;

use serde::Serialize;

/// The seven dimensions of the motivation model, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Component {
    DigitalTechnologies,
    IndividualProfile,
    Diagnostics,
    ExternalAgents,
    BasicNeeds,
    SelfRegulation,
    EvaluationCorrection,
}

pub const COMPONENT_COUNT: usize = 7;

impl Component {
    pub const ALL: [Component; COMPONENT_COUNT] = [
        Component::DigitalTechnologies,
        Component::IndividualProfile,
        Component::Diagnostics,
        Component::ExternalAgents,
        Component::BasicNeeds,
        Component::SelfRegulation,
        Component::EvaluationCorrection,
    ];

    /// Position in `ALL`; used to index per-component arrays.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Human-readable name, as written in exports and chart labels.
    pub fn name(self) -> &'static str {
        match self {
            Component::DigitalTechnologies => "Digital technologies",
            Component::IndividualProfile => "Individual profile",
            Component::Diagnostics => "Diagnostics",
            Component::ExternalAgents => "External agents",
            Component::BasicNeeds => "Basic needs",
            Component::SelfRegulation => "Self-regulation skills",
            Component::EvaluationCorrection => "Evaluation & correction",
        }
    }

    /// Short key used for CLI flags and JSON output.
    pub fn key(self) -> &'static str {
        match self {
            Component::DigitalTechnologies => "digital",
            Component::IndividualProfile => "profile",
            Component::Diagnostics => "diagnostics",
            Component::ExternalAgents => "agents",
            Component::BasicNeeds => "needs",
            Component::SelfRegulation => "selfreg",
            Component::EvaluationCorrection => "eval",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Component::DigitalTechnologies => "diaries, sensors, video, training platforms",
            Component::IndividualProfile => "the athlete's individual motivational profile",
            Component::Diagnostics => {
                "motivation, anxiety, attitude to training, sociometry and related measures"
            }
            Component::ExternalAgents => "coach, parents, group climate, incentives",
            Component::BasicNeeds => "autonomy, competence, social belonging",
            Component::SelfRegulation => "goal setting, self-analysis, volitional behaviour",
            Component::EvaluationCorrection => "data analysis and feedback",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(key))
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_position_in_all() {
        for (i, c) in Component::ALL.iter().enumerate() {
            assert_eq!(c.index(), i);
        }
    }

    #[test]
    fn test_from_key_is_case_insensitive() {
        assert_eq!(Component::from_key("SelfReg"), Some(Component::SelfRegulation));
        assert_eq!(Component::from_key(" eval "), Some(Component::EvaluationCorrection));
        assert_eq!(Component::from_key("motivation"), None);
    }

    #[test]
    fn test_keys_are_unique() {
        let mut keys: Vec<_> = Component::ALL.iter().map(|c| c.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), COMPONENT_COUNT);
    }
}
