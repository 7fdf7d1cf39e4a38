use bp_tracker_data::models::{NewReading, ReadingType, UserId};
use bp_tracker_data::repository::{InMemoryReadingRepository, ReadingRepositoryTrait, RepositoryError};
use bp_tracker_data::TimeRange;
use bp_tracker_domain::services::summarize;
use bp_tracker_domain::{ParseFailure, ParserConfig, Reading, VoiceParser};
use chrono::{DateTime, NaiveDateTime, Utc};
use thiserror::Error;
use tracing::{error, info, warn};
use validator::{Validate, ValidationErrors};

use crate::conversions;
use crate::entities::{
    CreateReadingRequest, GraphPointResponse, ParsedReadingResponse, ReadingResponse,
    SummaryResponse, VoiceInputRequest,
};

/// Accepted format for `recorded_at` on manual readings
const RECORDED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Reading service errors
#[derive(Debug, Error)]
pub enum ReadingServiceError {
    /// The request payload failed validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Voice text could not be turned into a reading
    #[error("{0}")]
    VoiceParse(ParseFailure),

    /// Repository error
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Reading service wiring the parser and summary engine to a repository
pub struct ReadingService<R: ReadingRepositoryTrait> {
    repository: R,
    parser: VoiceParser,
}

impl<R: ReadingRepositoryTrait> ReadingService<R> {
    /// Create a new reading service
    pub fn new(repository: R, parser: VoiceParser) -> Self {
        Self { repository, parser }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Store a manually entered reading
    pub async fn save_reading(
        &self,
        user_id: &UserId,
        request: CreateReadingRequest,
    ) -> Result<ReadingResponse, ReadingServiceError> {
        request
            .validate()
            .map_err(|errors| ReadingServiceError::Validation(validation_message(&errors)))?;

        let reading = NewReading {
            systolic: request.systolic,
            diastolic: request.diastolic,
            pulse: request.pulse,
            notes: request.notes,
            reading_type: parse_reading_type(request.reading_type.as_deref()),
            recorded_at: parse_recorded_at(request.recorded_at.as_deref()),
        };

        self.store(user_id, reading).await
    }

    /// Parse voice text without storing anything
    pub fn parse_voice_text(&self, text: &str) -> ParsedReadingResponse {
        conversions::convert_to_parsed_response(&self.parser.parse(text))
    }

    /// Parse voice text and store the resulting reading
    pub async fn save_from_voice(
        &self,
        user_id: &UserId,
        request: VoiceInputRequest,
    ) -> Result<ReadingResponse, ReadingServiceError> {
        let reading = self
            .parser
            .parse(&request.text)
            .into_result()
            .map_err(ReadingServiceError::VoiceParse)?;

        self.store(user_id, voice_reading(&reading, &request.text)).await
    }

    /// Parse voice text once, storing the reading when it parses
    ///
    /// A rejected parse is reported in the returned `ParsedReadingResponse`
    /// rather than as an error, and nothing is stored for it.
    pub async fn record_voice(
        &self,
        user_id: &UserId,
        request: VoiceInputRequest,
    ) -> Result<(ParsedReadingResponse, Option<ReadingResponse>), ReadingServiceError> {
        let outcome = self.parser.parse(&request.text);
        let parsed = conversions::convert_to_parsed_response(&outcome);

        let saved = match outcome.reading() {
            Some(reading) => Some(self.store(user_id, voice_reading(reading, &request.text)).await?),
            None => None,
        };

        Ok((parsed, saved))
    }

    /// Readings inside the range window, oldest first
    pub async fn get_readings(
        &self,
        user_id: &UserId,
        range: &str,
    ) -> Result<Vec<ReadingResponse>, ReadingServiceError> {
        let readings = self.find_in_range(user_id, range).await?;
        Ok(readings.iter().map(conversions::convert_to_reading_response).collect())
    }

    /// Every reading of the user, newest first
    pub async fn get_all_readings(&self, user_id: &UserId) -> Result<Vec<ReadingResponse>, ReadingServiceError> {
        let readings = self.repository.find_all(user_id).await.map_err(|e| {
            error!("Failed to load readings for {}: {}", user_id, e);
            ReadingServiceError::from(e)
        })?;
        Ok(readings.iter().map(conversions::convert_to_reading_response).collect())
    }

    /// Chart points for readings inside the range window
    pub async fn get_graph_data(
        &self,
        user_id: &UserId,
        range: &str,
    ) -> Result<Vec<GraphPointResponse>, ReadingServiceError> {
        let readings = self.find_in_range(user_id, range).await?;
        Ok(readings.iter().map(conversions::convert_to_graph_point).collect())
    }

    /// Summary of readings inside the range window
    pub async fn get_summary(&self, user_id: &UserId, range: &str) -> Result<SummaryResponse, ReadingServiceError> {
        let readings: Vec<_> = self
            .find_in_range(user_id, range)
            .await?
            .iter()
            .map(conversions::convert_to_domain_reading)
            .collect();

        let summary = summarize(&readings, range);
        Ok(conversions::convert_to_summary_response(&summary))
    }

    /// Delete a reading owned by the user
    ///
    /// Returns `false` when the reading does not exist or belongs to someone else.
    pub async fn delete_reading(&self, user_id: &UserId, id: &str) -> Result<bool, ReadingServiceError> {
        let id = conversions::parse_string_to_uuid(id).map_err(ReadingServiceError::Validation)?;

        match self.repository.get_by_id(id).await? {
            Some(reading) if &reading.user_id == user_id => {
                let deleted = self.repository.delete(id).await?;
                info!("Deleted reading {} for {}", id, user_id);
                Ok(deleted)
            }
            _ => Ok(false),
        }
    }

    async fn store(&self, user_id: &UserId, reading: NewReading) -> Result<ReadingResponse, ReadingServiceError> {
        let stored = self.repository.create(user_id, reading).await.map_err(|e| {
            error!("Failed to store reading for {}: {}", user_id, e);
            ReadingServiceError::from(e)
        })?;

        info!(
            "Stored {} reading {} ({}/{})",
            stored.reading_type, stored.id, stored.systolic, stored.diastolic
        );
        Ok(conversions::convert_to_reading_response(&stored))
    }

    async fn find_in_range(
        &self,
        user_id: &UserId,
        range: &str,
    ) -> Result<Vec<bp_tracker_data::models::StoredReading>, ReadingServiceError> {
        let since = TimeRange::from_label(range).since(Utc::now());
        self.repository.find_since(user_id, since).await.map_err(|e| {
            error!("Failed to load readings since {} for {}: {}", since, user_id, e);
            ReadingServiceError::from(e)
        })
    }
}

/// Create a reading service backed by in-memory storage
pub fn create_in_memory_reading_service(config: ParserConfig) -> ReadingService<InMemoryReadingRepository> {
    ReadingService::new(InMemoryReadingRepository::new(), VoiceParser::new(config))
}

fn voice_reading(reading: &Reading, text: &str) -> NewReading {
    NewReading {
        systolic: reading.systolic,
        diastolic: reading.diastolic,
        pulse: reading.pulse,
        notes: Some(format!("Voice: {}", text)),
        reading_type: conversions::convert_to_data_reading_type(reading.source),
        recorded_at: reading.recorded_at,
    }
}

/// Flatten validator errors into one message, fields in name order
fn validation_message(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(b.0));

    fields
        .iter()
        .map(|(field, errors)| {
            let messages: Vec<String> = errors
                .iter()
                .map(|err| match &err.message {
                    Some(msg) => msg.to_string(),
                    None => format!("Invalid {}", field),
                })
                .collect();
            format!("{}: {}", field, messages.join(", "))
        })
        .collect::<Vec<String>>()
        .join("; ")
}

fn parse_reading_type(value: Option<&str>) -> ReadingType {
    match value {
        Some(value) => value.parse().unwrap_or_else(|e| {
            warn!("{}, defaulting to MANUAL", e);
            ReadingType::Manual
        }),
        None => ReadingType::Manual,
    }
}

fn parse_recorded_at(value: Option<&str>) -> DateTime<Utc> {
    match value.filter(|v| !v.is_empty()) {
        Some(value) => match NaiveDateTime::parse_from_str(value, RECORDED_AT_FORMAT) {
            Ok(naive) => naive.and_utc(),
            Err(e) => {
                warn!("Unparseable recorded_at '{}' ({}), using current time", value, e);
                Utc::now()
            }
        },
        None => Utc::now(),
    }
}
