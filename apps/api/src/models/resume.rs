use serde::{Deserialize, Deserializer, Serialize};

/// A resume as submitted by the builder UI.
///
/// Every field is optional on the wire; missing keys fall back to their
/// defaults so scoring never fails on a partially filled form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub personal: PersonalInfo,
    #[serde(deserialize_with = "null_as_default")]
    pub experience: Vec<ExperienceEntry>,
    #[serde(deserialize_with = "null_as_default")]
    pub education: Vec<EducationEntry>,
    #[serde(deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub linkedin: Option<String>,
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceEntry {
    pub position: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub current: bool,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub field: Option<String>,
    pub location: Option<String>,
    pub graduation_date: Option<String>,
    #[serde(deserialize_with = "text_or_number")]
    pub gpa: Option<String>,
}

/// Treats an explicit `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(serde_json::Number),
}

/// Accepts `"3.8"` or `3.8`, keeping the value as text.
fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        Option::<TextOrNumber>::deserialize(deserializer)?.map(|value| match value {
            TextOrNumber::Text(text) => text,
            TextOrNumber::Number(number) => number.to_string(),
        }),
    )
}

/// Returns the field text when it is set and non-empty.
pub fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// Character count of a field, 0 when absent.
pub fn char_len(field: &Option<String>) -> usize {
    present(field).map(|s| s.chars().count()).unwrap_or(0)
}

impl ResumeRecord {
    /// Flattens every searchable field into one lower-cased string.
    ///
    /// Order: summary, experience (position, company, description), skills,
    /// education (degree, field, institution). Each piece is followed by a
    /// single space so adjacent fields never fuse into a false keyword hit.
    pub fn searchable_text(&self) -> String {
        let mut text = String::new();

        if let Some(summary) = present(&self.personal.summary) {
            text.push_str(summary);
            text.push(' ');
        }

        for exp in &self.experience {
            text.push_str(&format!(
                "{} {} {} ",
                or_empty(&exp.position),
                or_empty(&exp.company),
                or_empty(&exp.description)
            ));
        }

        if !self.skills.is_empty() {
            text.push_str(&self.skills.join(" "));
            text.push(' ');
        }

        for edu in &self.education {
            text.push_str(&format!(
                "{} {} {} ",
                or_empty(&edu.degree),
                or_empty(&edu.field),
                or_empty(&edu.institution)
            ));
        }

        text.to_lowercase()
    }
}

fn or_empty(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or("")
}
