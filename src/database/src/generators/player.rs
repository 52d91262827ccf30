use engine::{
    Player, PlayerPositionType, PlayerSkills, RandomSource, SKILL_MAX_VALUE, SKILL_MIN_VALUE, SkillType,
    group_skills,
};

pub struct PeopleNameGeneratorData {
    pub first_names: Vec<String>,
    pub last_names: Vec<String>,
}

impl Default for PeopleNameGeneratorData {
    fn default() -> Self {
        let to_strings = |names: &[&str]| -> Vec<String> { names.iter().map(|name| name.to_string()).collect() };

        PeopleNameGeneratorData {
            first_names: to_strings(&[
                "Alex", "Bruno", "Carlos", "Daniel", "Erik", "Filip", "Goran", "Hugo", "Ivan", "Jonas",
                "Karim", "Luca", "Marco", "Nikola", "Oscar", "Pavel", "Rafael", "Sven", "Tomas", "Viktor",
            ]),
            last_names: to_strings(&[
                "Andersen", "Barros", "Costa", "Dvorak", "Eriksen", "Fischer", "Garcia", "Horvat",
                "Ivanov", "Jansen", "Kovac", "Lindqvist", "Moreau", "Novak", "Olsen", "Petrov",
                "Rossi", "Schmidt", "Tanaka", "Varga",
            ]),
        }
    }
}

pub struct PlayerGenerator {
    people_names_data: PeopleNameGeneratorData,
    next_id: u32,
}

impl Default for PlayerGenerator {
    fn default() -> Self {
        Self::with_people_names(PeopleNameGeneratorData::default())
    }
}

impl PlayerGenerator {
    pub fn with_people_names(people_names: PeopleNameGeneratorData) -> Self {
        PlayerGenerator {
            people_names_data: people_names,
            next_id: 1,
        }
    }

    /// Generates a player whose attributes for `position` sit around `level` (1-20).
    pub fn generate<R: RandomSource + ?Sized>(
        &mut self,
        random: &mut R,
        position: PlayerPositionType,
        level: u8,
    ) -> Player {
        let id = self.next_id;
        self.next_id += 1;

        let full_name = format!(
            "{} {}",
            Self::pick_name(&self.people_names_data.first_names, random),
            Self::pick_name(&self.people_names_data.last_names, random)
        );

        Player::new(id, full_name, position).with_skills(Self::generate_skills(random, position, level))
    }

    fn generate_skills<R: RandomSource + ?Sized>(
        random: &mut R,
        position: PlayerPositionType,
        level: u8,
    ) -> PlayerSkills {
        let level = level.clamp(SKILL_MIN_VALUE, SKILL_MAX_VALUE) as i32;
        let mut skills = PlayerSkills::default();

        for skill in SkillType::ALL {
            let key_skill = position
                .position_groups()
                .iter()
                .any(|&group| group_skills(group).contains(&skill));

            let (min, max) = if key_skill {
                (level - 3, level + 3)
            } else if is_keeper_only(skill) {
                (1, 5)
            } else {
                (level - 8, level - 2)
            };

            let min = min.clamp(SKILL_MIN_VALUE as i32, SKILL_MAX_VALUE as i32) as u32;
            let max = max.clamp(min as i32, SKILL_MAX_VALUE as i32) as u32;

            skills.set(skill, random.next_range(min, max) as u8);
        }

        skills
    }

    fn pick_name<'a, R: RandomSource + ?Sized>(names: &'a [String], random: &mut R) -> &'a str {
        if names.is_empty() {
            return "Unknown";
        }

        names[random.next_index(names.len())].as_str()
    }
}

fn is_keeper_only(skill: SkillType) -> bool {
    matches!(
        skill,
        SkillType::AerialReach
            | SkillType::CommandOfArea
            | SkillType::Communication
            | SkillType::Eccentricity
            | SkillType::Handling
            | SkillType::Kicking
            | SkillType::OneOnOnes
            | SkillType::Punching
            | SkillType::Reflexes
            | SkillType::RushingOut
            | SkillType::Throwing
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::{GOALKEEPING_SKILLS, SeededRandom};

    #[test]
    fn test_generated_skills_are_in_range() {
        let mut generator = PlayerGenerator::default();
        let mut random = SeededRandom::new(1);

        for position in PlayerPositionType::ALL {
            for level in [1, 10, 20] {
                let player = generator.generate(&mut random, position, level);
                let skills = player.skills.unwrap();

                for skill in SkillType::ALL {
                    assert!((1..=20).contains(&skills.get(skill)), "{} {}", position, skill);
                }
            }
        }
    }

    #[test]
    fn test_ids_are_sequential() {
        let mut generator = PlayerGenerator::default();
        let mut random = SeededRandom::new(2);

        let first = generator.generate(&mut random, PlayerPositionType::Striker, 12);
        let second = generator.generate(&mut random, PlayerPositionType::Striker, 12);

        assert_eq!(first.id + 1, second.id);
    }

    #[test]
    fn test_keeper_is_better_in_goal_than_striker() {
        let mut generator = PlayerGenerator::default();
        let mut random = SeededRandom::new(3);

        let keeper = generator.generate(&mut random, PlayerPositionType::Goalkeeper, 16);
        let striker = generator.generate(&mut random, PlayerPositionType::Striker, 16);

        let keeping = |player: &Player| player.skills.unwrap().average_of(GOALKEEPING_SKILLS);

        assert!(keeping(&keeper) > keeping(&striker));
    }

    #[test]
    fn test_empty_name_lists_fall_back() {
        let mut generator = PlayerGenerator::with_people_names(PeopleNameGeneratorData {
            first_names: Vec::new(),
            last_names: Vec::new(),
        });

        let player = generator.generate(&mut SeededRandom::new(4), PlayerPositionType::DefenderLeft, 8);

        assert_eq!(player.full_name, "Unknown Unknown");
    }
}
