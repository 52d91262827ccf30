use crate::club::{PlayerSkills, SkillType};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerSkillsHistory {
    items: Vec<PlayerSkillsSnapshot>,
}

impl PlayerSkillsHistory {
    pub fn new() -> Self {
        PlayerSkillsHistory { items: Vec::new() }
    }

    pub fn add(&mut self, date: NaiveDate, skills: PlayerSkills) {
        self.items.push(PlayerSkillsSnapshot { date, skills });
    }

    pub fn items(&self) -> &[PlayerSkillsSnapshot] {
        &self.items
    }

    pub fn latest(&self) -> Option<&PlayerSkillsSnapshot> {
        self.items.last()
    }

    /// Changes between the two most recent snapshots.
    pub fn latest_changes(&self) -> Vec<SkillChange> {
        match self.items.as_slice() {
            [.., previous, last] => Self::compare(&previous.skills, &last.skills),
            _ => Vec::new(),
        }
    }

    /// Attributes whose value differs between `from` and `to`, in `SkillType` order.
    pub fn compare(from: &PlayerSkills, to: &PlayerSkills) -> Vec<SkillChange> {
        SkillType::ALL
            .iter()
            .filter_map(|&skill| {
                let before = from.get(skill);
                let after = to.get(skill);

                (before != after).then_some(SkillChange {
                    skill,
                    before,
                    after,
                })
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSkillsSnapshot {
    pub date: NaiveDate,
    pub skills: PlayerSkills,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct SkillChange {
    pub skill: SkillType,
    pub before: u8,
    pub after: u8,
}

impl SkillChange {
    pub fn delta(&self) -> i16 {
        self.after as i16 - self.before as i16
    }

    pub fn is_improvement(&self) -> bool {
        self.after > self.before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 8, day).unwrap()
    }

    #[test]
    fn test_compare_reports_only_changed_skills() {
        let mut before = PlayerSkills::default();
        before.set(SkillType::Pace, 14);
        before.set(SkillType::Finishing, 12);

        let mut after = before;
        after.set(SkillType::Finishing, 15);
        after.set(SkillType::Stamina, 9);

        let changes = PlayerSkillsHistory::compare(&before, &after);

        assert_eq!(
            changes,
            vec![
                SkillChange { skill: SkillType::Finishing, before: 12, after: 15 },
                SkillChange { skill: SkillType::Stamina, before: 0, after: 9 },
            ]
        );
        assert_eq!(changes[0].delta(), 3);
        assert!(changes[1].is_improvement());
    }

    #[test]
    fn test_latest_changes_needs_two_snapshots() {
        let mut history = PlayerSkillsHistory::new();
        assert!(history.latest_changes().is_empty());

        let mut skills = PlayerSkills::default();
        skills.set(SkillType::Marking, 11);
        history.add(date(1), skills);
        assert!(history.latest_changes().is_empty());

        skills.set(SkillType::Marking, 10);
        history.add(date(20), skills);

        let changes = history.latest_changes();
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].delta(), -1);
        assert!(!changes[0].is_improvement());
        assert_eq!(history.latest().map(|s| s.date), Some(date(20)));
    }

    #[test]
    fn test_identical_snapshots_have_no_changes() {
        let skills = PlayerSkills::default();

        assert!(PlayerSkillsHistory::compare(&skills, &skills).is_empty());
    }
}
