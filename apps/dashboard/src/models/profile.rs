use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::errors::StoreError;

pub const PERSONAL_INFO: &str = "personalInfo";
pub const STATS: &str = "stats";
pub const EDUCATION: &str = "education";
pub const SKILLS: &str = "skills";
pub const EXPERIENCE: &str = "experience";
pub const RESUME: &str = "resume";

// ────────────────────────────────────────────────────────────────────────────
// Typed views
// ────────────────────────────────────────────────────────────────────────────

/// Flat personal details. Every field is optional because a shallow update
/// may replace the whole object with a partial one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Display string, e.g. "January 15, 1998". Never parsed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Avatar initials.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification: Option<String>,
}

/// Dashboard counters. Independent values: nothing ties `applications` to the
/// length of any list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applications: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jobs_applied: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booked_hostels: Option<i64>,
    /// 0–100, unvalidated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_score: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub id: i64,
    pub degree: String,
    pub institution: String,
    pub dates: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillEntry {
    pub name: String,
    /// 0–100, unvalidated.
    pub level: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub id: i64,
    pub title: String,
    pub company: String,
    pub dates: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeInfo {
    pub name: String,
    pub uploaded: bool,
}

/// A fully typed profile. Used to build the seed record; the live record is a
/// [`ProfileRecord`] document so unknown keys survive updates and loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileData {
    pub personal_info: PersonalInfo,
    pub stats: Stats,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<SkillEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub resume: ResumeInfo,
}

impl ProfileData {
    /// Sample profile every fresh store starts from.
    pub fn sample() -> Self {
        ProfileData {
            personal_info: PersonalInfo {
                full_name: Some("Muhammad Khan".to_string()),
                title: Some("Web Developer Student".to_string()),
                email: Some("muhammad.khan@example.com".to_string()),
                phone: Some("+92 300 1234567".to_string()),
                dob: Some("January 15, 1998".to_string()),
                address: Some("123 Main Street, Lahore, Punjab".to_string()),
                city: Some("Lahore".to_string()),
                avatar: Some("MK".to_string()),
                verification: Some("TEVTA Verified".to_string()),
            },
            stats: Stats {
                applications: Some(24),
                jobs_applied: Some(8),
                booked_hostels: Some(3),
                match_score: Some(95),
            },
            education: vec![
                EducationEntry {
                    id: 1,
                    degree: "DAE Electrical Engineering".to_string(),
                    institution: "Government Technical Institute, Lahore".to_string(),
                    dates: "2022 - 2024".to_string(),
                    description: "Completed DAE in Electrical Engineering with distinction"
                        .to_string(),
                },
                EducationEntry {
                    id: 2,
                    degree: "Intermediate (Pre-Engineering)".to_string(),
                    institution: "Government College, Lahore".to_string(),
                    dates: "2020 - 2022".to_string(),
                    description: "Completed intermediate in pre-engineering".to_string(),
                },
                EducationEntry {
                    id: 3,
                    degree: "Matriculation".to_string(),
                    institution: "Government High School, Lahore".to_string(),
                    dates: "2018 - 2020".to_string(),
                    description: "Completed matriculation with science subjects".to_string(),
                },
            ],
            skills: vec![
                skill("HTML/CSS", 90),
                skill("JavaScript", 85),
                skill("React", 75),
                skill("Node.js", 70),
                skill("Database Management", 80),
            ],
            experience: vec![
                ExperienceEntry {
                    id: 1,
                    title: "Web Development Intern".to_string(),
                    company: "TechCorp Solutions, Lahore".to_string(),
                    dates: "Jan 2024 - Present".to_string(),
                    description: "Working as a web development intern, building responsive websites and learning modern development practices.".to_string(),
                },
                ExperienceEntry {
                    id: 2,
                    title: "Freelance Web Developer".to_string(),
                    company: "Self-employed".to_string(),
                    dates: "Jun 2023 - Dec 2023".to_string(),
                    description: "Developed multiple client websites using HTML, CSS, and JavaScript. Gained experience in responsive design and client communication.".to_string(),
                },
                ExperienceEntry {
                    id: 3,
                    title: "Part-time Tutor".to_string(),
                    company: "Lahore Education Center".to_string(),
                    dates: "Jan 2023 - May 2023".to_string(),
                    description: "Taught programming basics to students and helped them with their technical projects.".to_string(),
                },
            ],
            resume: ResumeInfo {
                name: "Muhammad_Khan_Resume.pdf".to_string(),
                uploaded: true,
            },
        }
    }
}

fn skill(name: &str, level: i64) -> SkillEntry {
    SkillEntry {
        name: name.to_string(),
        level,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// ProfileRecord document
// ────────────────────────────────────────────────────────────────────────────

/// The live profile: a JSON object document.
///
/// Shape is not enforced. Typed accessors return `None` when a key is missing
/// or no longer matches the expected shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileRecord(Map<String, Value>);

impl ProfileRecord {
    pub fn from_map(map: Map<String, Value>) -> Self {
        ProfileRecord(map)
    }

    /// Parses a persisted slot value. Anything other than a JSON object is
    /// rejected.
    pub fn from_json(key: &str, raw: &str) -> Result<Self, StoreError> {
        match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(map)) => Ok(ProfileRecord(map)),
            Ok(other) => Err(StoreError::corrupt(
                key,
                format!("expected a JSON object, found {}", json_kind(&other)),
            )),
            Err(e) => Err(StoreError::corrupt(key, e)),
        }
    }

    pub fn to_json(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string(&self.0)?)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub(crate) fn as_map_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    pub fn personal_info(&self) -> Option<PersonalInfo> {
        self.view(PERSONAL_INFO)
    }

    pub fn stats(&self) -> Option<Stats> {
        self.view(STATS)
    }

    pub fn education(&self) -> Option<Vec<EducationEntry>> {
        self.view(EDUCATION)
    }

    pub fn skills(&self) -> Option<Vec<SkillEntry>> {
        self.view(SKILLS)
    }

    pub fn experience(&self) -> Option<Vec<ExperienceEntry>> {
        self.view(EXPERIENCE)
    }

    pub fn resume(&self) -> Option<ResumeInfo> {
        self.view(RESUME)
    }

    fn view<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.0
            .get(key)
            .and_then(|v| T::deserialize(v).ok())
    }
}

impl Default for ProfileRecord {
    fn default() -> Self {
        ProfileData::sample().into()
    }
}

impl From<ProfileData> for ProfileRecord {
    fn from(data: ProfileData) -> Self {
        let mut map = Map::new();
        map.insert(PERSONAL_INFO.to_string(), json!(data.personal_info));
        map.insert(STATS.to_string(), json!(data.stats));
        map.insert(EDUCATION.to_string(), json!(data.education));
        map.insert(SKILLS.to_string(), json!(data.skills));
        map.insert(EXPERIENCE.to_string(), json!(data.experience));
        map.insert(RESUME.to_string(), json!(data.resume));
        ProfileRecord(map)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ────────────────────────────────────────────────────────────────────────────
// ProfilePatch
// ────────────────────────────────────────────────────────────────────────────

/// Top-level keys to merge into the record. Any key is accepted, including
/// ones outside the profile shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfilePatch(Map<String, Value>);

impl ProfilePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn personal_info(self, info: PersonalInfo) -> Self {
        self.set(PERSONAL_INFO, json!(info))
    }

    pub fn stats(self, stats: Stats) -> Self {
        self.set(STATS, json!(stats))
    }

    pub fn education(self, entries: Vec<EducationEntry>) -> Self {
        self.set(EDUCATION, json!(entries))
    }

    pub fn skills(self, skills: Vec<SkillEntry>) -> Self {
        self.set(SKILLS, json!(skills))
    }

    pub fn experience(self, entries: Vec<ExperienceEntry>) -> Self {
        self.set(EXPERIENCE, json!(entries))
    }

    pub fn resume(self, resume: ResumeInfo) -> Self {
        self.set(RESUME, json!(resume))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for ProfilePatch {
    fn from(map: Map<String, Value>) -> Self {
        ProfilePatch(map)
    }
}

impl TryFrom<Value> for ProfilePatch {
    type Error = StoreError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(ProfilePatch(map)),
            other => Err(StoreError::InvalidPatch(format!(
                "expected a JSON object, found {}",
                json_kind(&other)
            ))),
        }
    }
}
