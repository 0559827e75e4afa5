use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};

/// A class joined with the teacher who offers it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, sqlx::FromRow, ToSchema)]
pub struct ClassListing {
    pub id: i64,
    #[schema(example = "Math")]
    pub subject: String,
    #[schema(example = 80.0)]
    pub cost: f64,
    pub user_id: i64,
    pub name: String,
    pub avatar: String,
    pub whatsapp: String,
    pub bio: String,
}

/// Raw query string of `GET /classes`. Every field is optional here so a
/// missing filter is reported by the handler instead of the extractor.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ClassesQuery {
    /// Day of the week, 0 (Sunday) to 6
    #[param(example = "1")]
    pub week_day: Option<String>,
    /// Exact subject name
    #[param(example = "Math")]
    pub subject: Option<String>,
    /// Time of day as HH:MM
    #[param(example = "08:30")]
    pub time: Option<String>,
}

/// Week days arrive either as JSON numbers or as the numeric strings a form
/// select produces.
fn deserialize_week_day<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrInt {
        String(String),
        Int(i64),
    }

    match StringOrInt::deserialize(deserializer)? {
        StringOrInt::String(s) => s.trim().parse::<i64>().map_err(D::Error::custom),
        StringOrInt::Int(i) => Ok(i),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ScheduleItem {
    #[serde(deserialize_with = "deserialize_week_day")]
    #[schema(example = 1)]
    pub week_day: i64,
    #[schema(example = "08:00")]
    pub from: String,
    #[schema(example = "12:00")]
    pub to: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NewClass {
    pub name: String,
    pub avatar: String,
    pub whatsapp: String,
    pub bio: String,
    pub subject: String,
    pub cost: f64,
    pub schedule: Vec<ScheduleItem>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    #[schema(example = "Missing filters to search classes")]
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_item_week_day_number_or_string() {
        let numeric: ScheduleItem =
            serde_json::from_str(r#"{"week_day":3,"from":"08:00","to":"09:00"}"#).unwrap();
        let text: ScheduleItem =
            serde_json::from_str(r#"{"week_day":"3","from":"08:00","to":"09:00"}"#).unwrap();
        assert_eq!(numeric.week_day, 3);
        assert_eq!(text.week_day, 3);
    }

    #[test]
    fn test_schedule_item_week_day_not_numeric() {
        let result = serde_json::from_str::<ScheduleItem>(
            r#"{"week_day":"monday","from":"08:00","to":"09:00"}"#,
        );
        assert!(result.is_err());
    }
}
