//! ScyllaDB schema creation

use scylla::Session;
use crate::error::PersistenceError;

/// Create the keyspace if it doesn't exist
pub async fn create_keyspace(session: &Session, keyspace: &str, replication_factor: u8) -> Result<(), PersistenceError> {
    let query = format!(
        "CREATE KEYSPACE IF NOT EXISTS {} WITH replication = {{'class': 'SimpleStrategy', 'replication_factor': {}}}",
        keyspace, replication_factor
    );

    session.query_unpaged(query, &[]).await
        .map_err(|e| PersistenceError::Schema(format!("failed to create keyspace: {}", e)))?;

    Ok(())
}

/// Create all required tables
pub async fn create_tables(session: &Session, keyspace: &str) -> Result<(), PersistenceError> {
    let interviews_table = format!(r#"
        CREATE TABLE IF NOT EXISTS {}.interviews (
            id TEXT,
            user_id TEXT,
            resume_id TEXT,
            interview_type TEXT,
            status TEXT,
            difficulty TEXT,
            total_questions INT,
            answered_questions INT,
            scheduled_at TIMESTAMP,
            started_at TIMESTAMP,
            completed_at TIMESTAMP,
            duration_minutes DOUBLE,
            overall_score DOUBLE,
            content_score DOUBLE,
            clarity_score DOUBLE,
            fluency_score DOUBLE,
            confidence_score DOUBLE,
            emotion_score DOUBLE,
            weak_areas_json TEXT,
            strong_areas_json TEXT,
            feedback TEXT,
            recommendations_json TEXT,
            PRIMARY KEY (id)
        )
    "#, keyspace);

    session.query_unpaged(interviews_table, &[]).await
        .map_err(|e| PersistenceError::Schema(format!("failed to create interviews table: {}", e)))?;

    let responses_table = format!(r#"
        CREATE TABLE IF NOT EXISTS {}.responses (
            interview_id TEXT,
            id TEXT,
            question_id TEXT,
            text_response TEXT,
            audio_ref TEXT,
            video_ref TEXT,
            content_score DOUBLE,
            relevance_score DOUBLE,
            clarity_score DOUBLE,
            fluency_score DOUBLE,
            confidence_score DOUBLE,
            response_time_seconds DOUBLE,
            thinking_time_seconds DOUBLE,
            feedback TEXT,
            improvement_suggestions_json TEXT,
            created_at TIMESTAMP,
            PRIMARY KEY ((interview_id), id)
        ) WITH CLUSTERING ORDER BY (id ASC)
    "#, keyspace);

    session.query_unpaged(responses_table, &[]).await
        .map_err(|e| PersistenceError::Schema(format!("failed to create responses table: {}", e)))?;

    let performance_metrics_table = format!(r#"
        CREATE TABLE IF NOT EXISTS {}.performance_metrics (
            user_id TEXT,
            total_interviews INT,
            average_score DOUBLE,
            improvement_rate DOUBLE,
            general_avg_score DOUBLE,
            technical_avg_score DOUBLE,
            hr_avg_score DOUBLE,
            communication_score DOUBLE,
            technical_knowledge_score DOUBLE,
            problem_solving_score DOUBLE,
            confidence_score DOUBLE,
            skill_gaps_json TEXT,
            learning_path_json TEXT,
            next_focus_areas_json TEXT,
            last_updated TIMESTAMP,
            PRIMARY KEY (user_id)
        )
    "#, keyspace);

    session.query_unpaged(performance_metrics_table, &[]).await
        .map_err(|e| PersistenceError::Schema(format!("failed to create performance_metrics table: {}", e)))?;

    let adaptive_profiles_table = format!(r#"
        CREATE TABLE IF NOT EXISTS {}.adaptive_profiles (
            user_id TEXT,
            learning_pace TEXT,
            preferred_difficulty TEXT,
            strong_topics_json TEXT,
            weak_topics_json TEXT,
            avg_response_time DOUBLE,
            consistency_score DOUBLE,
            stress_indicators_json TEXT,
            question_difficulty_multiplier DOUBLE,
            focus_areas_json TEXT,
            recommended_practice_json TEXT,
            updated_at TIMESTAMP,
            PRIMARY KEY (user_id)
        )
    "#, keyspace);

    session.query_unpaged(adaptive_profiles_table, &[]).await
        .map_err(|e| PersistenceError::Schema(format!("failed to create adaptive_profiles table: {}", e)))?;

    tracing::info!("all tables created successfully");
    Ok(())
}
