// ABOUTME: Health assessment database operations
// ABOUTME: Stores questionnaires with their computed risk and serves history and stats

use super::Database;
use crate::errors::AppError;
use crate::logging::AppLogger;
use crate::models::{
    AssessmentRecord, ExerciseLevel, Gender, HealthMetrics, RiskAssessment, RiskLevel,
    SmokingStatus, UserAssessmentStats,
};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use std::time::Instant;
use uuid::Uuid;

const ASSESSMENT_COLUMNS: &str = r"
    id, user_id, age, gender, height, weight, blood_pressure, blood_sugar,
    cholesterol, heart_rate, smoking, exercise, medical_history, medications,
    risk_score, risk_level, bmi, recommendations, created_at
";

impl Database {
    /// Create the health assessments table
    pub(super) async fn migrate_assessments(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS health_assessments (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
                age INTEGER NOT NULL,
                gender TEXT NOT NULL,
                height INTEGER NOT NULL,
                weight INTEGER NOT NULL,
                blood_pressure TEXT NOT NULL,
                blood_sugar INTEGER NOT NULL,
                cholesterol INTEGER NOT NULL,
                heart_rate INTEGER NOT NULL,
                smoking TEXT NOT NULL,
                exercise TEXT NOT NULL,
                medical_history TEXT NOT NULL DEFAULT '',
                medications TEXT NOT NULL DEFAULT '',
                risk_score INTEGER NOT NULL,
                risk_level TEXT NOT NULL CHECK (risk_level IN ('low', 'medium', 'high')),
                bmi REAL NOT NULL,
                recommendations TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_health_assessments_user_id ON health_assessments(user_id)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Store a questionnaire together with the assessment computed for it
    ///
    /// # Errors
    ///
    /// Returns an error if the user does not exist or the insert fails
    pub async fn create_assessment(
        &self,
        user_id: Uuid,
        metrics: &HealthMetrics,
        assessment: &RiskAssessment,
    ) -> Result<AssessmentRecord> {
        let record = AssessmentRecord {
            id: Uuid::new_v4(),
            user_id,
            metrics: metrics.clone(),
            assessment: assessment.clone(),
            created_at: Utc::now(),
        };
        let recommendations = serde_json::to_string(&assessment.recommendations)
            .context("Failed to serialize recommendations")?;

        let started = Instant::now();
        let result = sqlx::query(
            r"
            INSERT INTO health_assessments (
                id, user_id, age, gender, height, weight, blood_pressure, blood_sugar,
                cholesterol, heart_rate, smoking, exercise, medical_history, medications,
                risk_score, risk_level, bmi, recommendations, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18, $19)
            ",
        )
        .bind(record.id.to_string())
        .bind(user_id.to_string())
        .bind(metrics.age)
        .bind(metrics.gender.as_str())
        .bind(metrics.height)
        .bind(metrics.weight)
        .bind(&metrics.blood_pressure)
        .bind(metrics.blood_sugar)
        .bind(metrics.cholesterol)
        .bind(metrics.heart_rate)
        .bind(metrics.smoking.as_str())
        .bind(metrics.exercise.as_str())
        .bind(&metrics.medical_history)
        .bind(&metrics.medications)
        .bind(i64::from(assessment.score))
        .bind(assessment.level.as_str())
        .bind(assessment.bmi)
        .bind(recommendations)
        .bind(record.created_at)
        .execute(&self.pool)
        .await;

        let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        AppLogger::log_database_operation("insert", "health_assessments", result.is_ok(), duration_ms);
        result?;

        Ok(record)
    }

    /// Get an assessment by ID
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails or a stored row is corrupt
    pub async fn get_assessment(&self, assessment_id: Uuid) -> Result<Option<AssessmentRecord>> {
        let row = sqlx::query(&format!(
            "SELECT {ASSESSMENT_COLUMNS} FROM health_assessments WHERE id = $1"
        ))
        .bind(assessment_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(Self::row_to_assessment).transpose()
    }

    /// List one user's assessments, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails or a stored row is corrupt
    pub async fn list_assessments_for_user(&self, user_id: Uuid) -> Result<Vec<AssessmentRecord>> {
        let rows = sqlx::query(&format!(
            "SELECT {ASSESSMENT_COLUMNS} FROM health_assessments WHERE user_id = $1 \
             ORDER BY created_at DESC, rowid DESC"
        ))
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::row_to_assessment).collect()
    }

    /// List every stored assessment, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails or a stored row is corrupt
    pub async fn list_all_assessments(&self) -> Result<Vec<AssessmentRecord>> {
        let rows = sqlx::query(&format!(
            "SELECT {ASSESSMENT_COLUMNS} FROM health_assessments ORDER BY created_at DESC, rowid DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::row_to_assessment).collect()
    }

    /// Delete an assessment owned by `user_id`
    ///
    /// Returns `false` when no such assessment exists for that user.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn delete_assessment(&self, assessment_id: Uuid, user_id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM health_assessments WHERE id = $1 AND user_id = $2")
            .bind(assessment_id.to_string())
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Aggregate statistics over one user's assessments
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn get_user_stats(&self, user_id: Uuid) -> Result<UserAssessmentStats> {
        let row = sqlx::query(
            r"
            SELECT COUNT(*) AS total,
                   AVG(risk_score) AS avg_score,
                   MAX(created_at) AS last_created
            FROM health_assessments
            WHERE user_id = $1
            ",
        )
        .bind(user_id.to_string())
        .fetch_one(&self.pool)
        .await?;

        let last_created: Option<String> = row.get("last_created");
        let last_assessment = last_created
            .map(|ts| DateTime::parse_from_rfc3339(&ts).map(|dt| dt.with_timezone(&Utc)))
            .transpose()
            .context("Invalid assessment timestamp")?;

        Ok(UserAssessmentStats {
            total_assessments: row.get("total"),
            avg_risk_score: row.get("avg_score"),
            last_assessment,
        })
    }

    /// Convert a database row to an `AssessmentRecord`
    fn row_to_assessment(row: &SqliteRow) -> Result<AssessmentRecord> {
        let id: String = row.get("id");
        let user_id: String = row.get("user_id");
        let gender: String = row.get("gender");
        let smoking: String = row.get("smoking");
        let exercise: String = row.get("exercise");
        let risk_score: i64 = row.get("risk_score");
        let risk_level: String = row.get("risk_level");
        let recommendations: String = row.get("recommendations");

        let metrics = HealthMetrics {
            age: row.get("age"),
            gender: gender.parse::<Gender>()?,
            height: row.get("height"),
            weight: row.get("weight"),
            blood_pressure: row.get("blood_pressure"),
            blood_sugar: row.get("blood_sugar"),
            cholesterol: row.get("cholesterol"),
            heart_rate: row.get("heart_rate"),
            smoking: smoking.parse::<SmokingStatus>()?,
            exercise: exercise.parse::<ExerciseLevel>()?,
            medical_history: row.get("medical_history"),
            medications: row.get("medications"),
        };

        let assessment = RiskAssessment {
            score: u32::try_from(risk_score)
                .map_err(|_| AppError::database(format!("Invalid stored risk score {risk_score}")))?,
            level: risk_level.parse::<RiskLevel>()?,
            bmi: row.get("bmi"),
            recommendations: serde_json::from_str(&recommendations)
                .context("Invalid stored recommendations")?,
        };

        Ok(AssessmentRecord {
            id: Uuid::parse_str(&id)?,
            user_id: Uuid::parse_str(&user_id)?,
            metrics,
            assessment,
            created_at: row.get("created_at"),
        })
    }
}
