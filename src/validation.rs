use crate::error::ApiError;
use crate::models::ClassesQuery;
use crate::time::to_minutes;

/// Search filters after presence and format checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListFilters {
    pub week_day: i64,
    pub subject: String,
    pub minutes: u32,
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

pub fn validate_filters(query: ClassesQuery) -> Result<ListFilters, ApiError> {
    let (Some(week_day), Some(subject), Some(time)) = (
        present(query.week_day),
        present(query.subject),
        present(query.time),
    ) else {
        return Err(ApiError::MissingFilter);
    };

    let week_day = week_day
        .trim()
        .parse::<i64>()
        .map_err(|_| ApiError::InvalidFilter)?;
    let minutes = to_minutes(&time).map_err(|_| ApiError::InvalidFilter)?;

    Ok(ListFilters {
        week_day,
        subject,
        minutes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(week_day: Option<&str>, subject: Option<&str>, time: Option<&str>) -> ClassesQuery {
        ClassesQuery {
            week_day: week_day.map(str::to_string),
            subject: subject.map(str::to_string),
            time: time.map(str::to_string),
        }
    }

    #[test]
    fn test_validate_filters() {
        let filters = validate_filters(query(Some("1"), Some("Math"), Some("08:30"))).unwrap();
        assert_eq!(
            filters,
            ListFilters {
                week_day: 1,
                subject: "Math".to_string(),
                minutes: 510,
            }
        );
    }

    #[test]
    fn test_validate_filters_missing() {
        assert!(matches!(
            validate_filters(query(None, Some("Math"), Some("08:30"))),
            Err(ApiError::MissingFilter)
        ));
        assert!(matches!(
            validate_filters(query(Some("1"), None, Some("08:30"))),
            Err(ApiError::MissingFilter)
        ));
        assert!(matches!(
            validate_filters(query(Some("1"), Some("Math"), Some(""))),
            Err(ApiError::MissingFilter)
        ));
    }

    #[test]
    fn test_validate_filters_invalid() {
        assert!(matches!(
            validate_filters(query(Some("monday"), Some("Math"), Some("08:30"))),
            Err(ApiError::InvalidFilter)
        ));
        assert!(matches!(
            validate_filters(query(Some("1"), Some("Math"), Some("8h30"))),
            Err(ApiError::InvalidFilter)
        ));
    }
}
