//! Window match rules.
//!
//! The host evaluates these against window metadata at creation time to
//! decide whether a window floats. Evaluation is first-match-wins over the
//! rule list.

use serde::{Deserialize, Serialize};

/// A predicate on window class and/or title. Every field that is present
/// must match; a rule with no fields matches nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl MatchRule {
    pub fn class(class: impl Into<String>) -> Self {
        Self {
            class: Some(class.into()),
            ..Default::default()
        }
    }

    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn matches(&self, meta: &WindowMeta) -> bool {
        if self.class.is_none() && self.title.is_none() {
            return false;
        }

        let class_matches = self.class.as_ref().is_none_or(|class| *class == meta.class);
        let title_matches = self.title.as_ref().is_none_or(|title| *title == meta.title);

        class_matches && title_matches
    }
}

/// The window metadata the host captures when a window is created.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WindowMeta {
    pub class: String,
    pub title: String,
}

impl WindowMeta {
    pub fn new(class: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            title: title.into(),
        }
    }
}

/// Returns the first rule matching `meta`, if any.
pub fn first_match<'a>(rules: &'a [MatchRule], meta: &WindowMeta) -> Option<&'a MatchRule> {
    rules.iter().find(|rule| rule.matches(meta))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_and_title_must_both_match_when_present() {
        let rule = MatchRule {
            class: Some("gitk".into()),
            title: Some("branchdialog".into()),
        };

        assert!(rule.matches(&WindowMeta::new("gitk", "branchdialog")));
        assert!(!rule.matches(&WindowMeta::new("gitk", "other")));
        assert!(!rule.matches(&WindowMeta::new("other", "branchdialog")));
    }

    #[test]
    fn empty_rule_matches_nothing() {
        let rule = MatchRule::default();
        assert!(!rule.matches(&WindowMeta::new("any", "any")));
    }

    #[test]
    fn first_match_wins() {
        let rules = vec![
            MatchRule::class("pinentry"),
            MatchRule::title("pinentry"),
            MatchRule::class("ssh-askpass"),
        ];

        let meta = WindowMeta::new("pinentry", "pinentry");
        assert_eq!(first_match(&rules, &meta), Some(&rules[0]));

        let meta = WindowMeta::new("gcr-prompter", "pinentry");
        assert_eq!(first_match(&rules, &meta), Some(&rules[1]));

        let meta = WindowMeta::new("terminal", "shell");
        assert_eq!(first_match(&rules, &meta), None);
    }
}
