use utoipa::OpenApi;

/// Render the API documentation as pretty JSON
pub fn openapi_json() -> Result<String, serde_json::Error> {
    ApiDoc::openapi().to_pretty_json()
}

// API Documentation
#[derive(OpenApi)]
#[openapi(
    components(
        schemas(
            // Requests
            crate::entities::readings::CreateReadingRequest,
            crate::entities::readings::VoiceInputRequest,

            // Responses
            crate::entities::readings::ReadingResponse,
            crate::entities::readings::ParsedReadingResponse,
            crate::entities::readings::GraphPointResponse,
            crate::entities::summary::SummaryResponse,
            crate::entities::common::PublicErrorResponse
        )
    ),
    tags(
        (name = "readings", description = "Blood pressure reading capture and history"),
        (name = "summary", description = "Summaries, categories and alerts")
    ),
    info(
        title = "BP Tracker API",
        version = "0.1.0",
        description = "Payloads for logging blood pressure readings and summarizing them",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        ),
    )
)]
pub struct ApiDoc;
