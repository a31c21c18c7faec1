use serde::{Deserialize, Serialize};

/// The list-valued profile fields that support toggle editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    Interests,
    PersonalityTraits,
    WorkEnvironment,
    Values,
}

/// The user's personal-preference profile, built up across wizard steps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalProfile {
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub personality_traits: Vec<String>,
    #[serde(default)]
    pub work_environment: Vec<String>,
    #[serde(default)]
    pub values: Vec<String>,
    #[serde(default)]
    pub career_goals: String,
    #[serde(default)]
    pub additional_info: String,
}

impl PersonalProfile {
    pub fn list(&self, field: ProfileField) -> &[String] {
        match field {
            ProfileField::Interests => &self.interests,
            ProfileField::PersonalityTraits => &self.personality_traits,
            ProfileField::WorkEnvironment => &self.work_environment,
            ProfileField::Values => &self.values,
        }
    }

    fn list_mut(&mut self, field: ProfileField) -> &mut Vec<String> {
        match field {
            ProfileField::Interests => &mut self.interests,
            ProfileField::PersonalityTraits => &mut self.personality_traits,
            ProfileField::WorkEnvironment => &mut self.work_environment,
            ProfileField::Values => &mut self.values,
        }
    }

    /// Returns a copy with `value` removed from `field` if present, appended otherwise.
    pub fn toggle(&self, field: ProfileField, value: &str) -> Self {
        let mut next = self.clone();
        let list = next.list_mut(field);
        if let Some(pos) = list.iter().position(|v| v == value) {
            list.remove(pos);
        } else {
            list.push(value.to_string());
        }
        next
    }

    pub fn with_career_goals(&self, career_goals: impl Into<String>) -> Self {
        Self {
            career_goals: career_goals.into(),
            ..self.clone()
        }
    }

    pub fn with_additional_info(&self, additional_info: impl Into<String>) -> Self {
        Self {
            additional_info: additional_info.into(),
            ..self.clone()
        }
    }
}

/// Option vocabularies offered by the profile wizard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileOptions {
    pub interests: Vec<String>,
    pub personality_traits: Vec<String>,
    pub work_environments: Vec<String>,
    pub values: Vec<String>,
}

impl ProfileOptions {
    pub fn is_empty(&self) -> bool {
        self.interests.is_empty()
            && self.personality_traits.is_empty()
            && self.work_environments.is_empty()
            && self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_then_removes() {
        let profile = PersonalProfile::default();
        let added = profile.toggle(ProfileField::Interests, "Robotics");
        assert_eq!(added.interests, vec!["Robotics"]);

        let removed = added.toggle(ProfileField::Interests, "Robotics");
        assert!(removed.interests.is_empty());
        // earlier snapshot untouched
        assert_eq!(added.interests, vec!["Robotics"]);
    }

    #[test]
    fn test_toggle_preserves_insertion_order_and_other_fields() {
        let profile = PersonalProfile::default()
            .toggle(ProfileField::Values, "Autonomy")
            .toggle(ProfileField::Values, "Stability")
            .toggle(ProfileField::Values, "Impact")
            .toggle(ProfileField::Values, "Stability")
            .with_career_goals("Build satellites");
        assert_eq!(profile.values, vec!["Autonomy", "Impact"]);
        assert!(profile.interests.is_empty());
        assert_eq!(profile.career_goals, "Build satellites");
    }

    #[test]
    fn test_profile_deserializes_with_missing_fields() {
        let profile: PersonalProfile =
            serde_json::from_str(r#"{"interests": ["Music"]}"#).unwrap();
        assert_eq!(profile.list(ProfileField::Interests), ["Music".to_string()]);
        assert!(profile.additional_info.is_empty());
    }

    #[test]
    fn test_profile_options_decode_camel_case() {
        let json = r#"{"interests":["Art"],"personalityTraits":["Curious"],
            "workEnvironments":["Remote"],"values":[]}"#;
        let options: ProfileOptions = serde_json::from_str(json).unwrap();
        assert_eq!(options.work_environments, vec!["Remote"]);
        assert!(!options.is_empty());
        assert!(ProfileOptions::default().is_empty());
    }
}
