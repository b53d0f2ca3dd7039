use crate::player::player::PlayerRecord;

// Builder for PlayerRecord
#[derive(Default)]
pub struct PlayerBuilder {
    name: Option<String>,
    team: Option<String>,
    position: Option<String>,
    age: Option<u32>,
    years_experience: Option<u32>,
    colleges: Vec<String>,
    draft: Option<(u32, i32)>,
    draft_year: Option<i32>,
    games_played: u32,
    games_started: u32,
    pro_bowls: u32,
    all_pros: u32,
    awards: Vec<String>,
    difficulty_score: Option<f64>,
}

impl PlayerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn team(mut self, team: &str) -> Self {
        self.team = Some(team.to_string());
        self
    }

    pub fn position(mut self, position: &str) -> Self {
        self.position = Some(position.to_string());
        self
    }

    pub fn age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn years_experience(mut self, years: u32) -> Self {
        self.years_experience = Some(years);
        self
    }

    pub fn college(mut self, college: &str) -> Self {
        self.colleges.push(college.to_string());
        self
    }

    pub fn drafted(mut self, round: u32, year: i32) -> Self {
        self.draft = Some((round, year));
        self
    }

    pub fn undrafted(mut self, year: i32) -> Self {
        self.draft = None;
        self.draft_year = Some(year);
        self
    }

    pub fn games(mut self, played: u32, started: u32) -> Self {
        self.games_played = played;
        self.games_started = started;
        self
    }

    pub fn pro_bowls(mut self, count: u32) -> Self {
        self.pro_bowls = count;
        self
    }

    pub fn all_pros(mut self, count: u32) -> Self {
        self.all_pros = count;
        self
    }

    pub fn award(mut self, award: &str) -> Self {
        self.awards.push(award.to_string());
        self
    }

    pub fn difficulty_score(mut self, score: f64) -> Self {
        self.difficulty_score = Some(score);
        self
    }

    pub fn build(self) -> Result<PlayerRecord, String> {
        let (undrafted, draft_round, draft_year) = match self.draft {
            Some((round, year)) => (false, Some(round), Some(year)),
            None => (true, None, self.draft_year),
        };

        let colleges = if self.colleges.is_empty() {
            vec![String::from("Unknown")]
        } else {
            self.colleges
        };

        let player = PlayerRecord {
            player_name: self.name.ok_or("name is required")?,
            team: self.team.unwrap_or_else(|| String::from("FA")),
            position: self.position.unwrap_or_else(|| String::from("LB")),
            age: self.age,
            years_experience: self.years_experience.unwrap_or_default(),
            college: colleges,
            player_url: None,
            draft_year,
            draft_round,
            undrafted,
            games_played: self.games_played,
            games_started: self.games_started,
            pro_bowls: self.pro_bowls,
            all_pros: self.all_pros,
            awards: self.awards,
            difficulty_score: self.difficulty_score,
        };

        player.validate()?;

        Ok(player)
    }
}
