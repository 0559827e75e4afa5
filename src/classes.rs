use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use thiserror::Error;
use tracing::debug;

use crate::models::{ClassListing, NewClass};
use crate::time::{TimeError, to_minutes};
use crate::validation::ListFilters;

#[derive(Debug, Error)]
pub enum ClassesError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error(transparent)]
    Time(#[from] TimeError),
}

/// A schedule entry with its bounds already encoded as minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ScheduleSlot {
    week_day: i64,
    from: u32,
    to: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreatedClass {
    pub user_id: i64,
    pub class_id: i64,
}

#[derive(Clone)]
pub struct ClassesService {
    pool: SqlitePool,
}

impl ClassesService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Classes teaching `subject` that own at least one slot on `week_day`
    /// with `from <= minutes < to`, each joined with its teacher.
    pub async fn list(&self, filters: &ListFilters) -> Result<Vec<ClassListing>, ClassesError> {
        let mut query: QueryBuilder<Sqlite> = QueryBuilder::new(
            r#"SELECT classes.id, classes.subject, classes.cost, classes.user_id,
                users.name, users.avatar, users.whatsapp, users.bio
            FROM classes
            JOIN users ON classes.user_id = users.id
            WHERE classes.subject = "#,
        );
        query.push_bind(&filters.subject);
        query.push(
            r#" AND EXISTS (
                SELECT 1 FROM class_schedule
                WHERE class_schedule.class_id = classes.id
                AND class_schedule.week_day = "#,
        );
        query.push_bind(filters.week_day);
        query.push(r#" AND class_schedule."from" <= "#);
        query.push_bind(filters.minutes);
        query.push(r#" AND class_schedule."to" > "#);
        query.push_bind(filters.minutes);
        query.push(")");

        let classes = query
            .build_query_as::<ClassListing>()
            .fetch_all(&self.pool)
            .await?;
        debug!(
            subject = %filters.subject,
            week_day = filters.week_day,
            minutes = filters.minutes,
            found = classes.len(),
            "Listed classes"
        );
        Ok(classes)
    }

    /// Registers the teacher, the class and its schedule in one transaction.
    /// Nothing is persisted unless every insert succeeds.
    pub async fn create(&self, new_class: &NewClass) -> Result<CreatedClass, ClassesError> {
        let mut tx = self.pool.begin().await?;

        let user_id = sqlx::query(
            "INSERT INTO users (name, avatar, whatsapp, bio) VALUES (?, ?, ?, ?)",
        )
        .bind(&new_class.name)
        .bind(&new_class.avatar)
        .bind(&new_class.whatsapp)
        .bind(&new_class.bio)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

        let class_id = sqlx::query("INSERT INTO classes (subject, cost, user_id) VALUES (?, ?, ?)")
            .bind(&new_class.subject)
            .bind(new_class.cost)
            .bind(user_id)
            .execute(&mut *tx)
            .await?
            .last_insert_rowid();

        let slots = new_class
            .schedule
            .iter()
            .map(|item| {
                Ok(ScheduleSlot {
                    week_day: item.week_day,
                    from: to_minutes(&item.from)?,
                    to: to_minutes(&item.to)?,
                })
            })
            .collect::<Result<Vec<_>, TimeError>>()?;

        if !slots.is_empty() {
            let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(
                r#"INSERT INTO class_schedule (class_id, week_day, "from", "to") "#,
            );
            builder.push_values(slots.iter(), |mut b, slot| {
                b.push_bind(class_id)
                    .push_bind(slot.week_day)
                    .push_bind(slot.from)
                    .push_bind(slot.to);
            });
            builder.build().execute(&mut *tx).await?;
        }

        tx.commit().await?;
        debug!(user_id, class_id, slots = slots.len(), "Created class");

        Ok(CreatedClass { user_id, class_id })
    }
}
