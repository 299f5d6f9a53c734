use crate::{
    api::models::*,
    core::{
        models::{AppLog, Event, EventOverview, Expense},
        services::AsadoService,
    },
    infrastructure::{
        cache::in_memory::InMemoryCache, export::csv::export_file_name, logging::in_memory::InMemoryLogging,
        storage::in_memory::InMemoryStorage,
    },
    visualization::Visualization,
};
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use http::header;
use log::debug;
use std::sync::Arc;

pub type AppService = AsadoService<InMemoryLogging, InMemoryStorage, InMemoryCache>;

// Define API routes
pub fn api_routes(service: Arc<AppService>) -> Router {
    Router::new()
        .route(
            "/events",
            axum::routing::post(create_event).get(list_events),
        )
        .route("/events/{event}", axum::routing::delete(delete_event))
        .route(
            "/events/{event}/participants",
            axum::routing::post(add_participant).get(list_participants),
        )
        .route(
            "/events/{event}/participants/{participant}",
            axum::routing::delete(remove_participant),
        )
        .route(
            "/events/{event}/expenses",
            axum::routing::post(add_expense).get(list_expenses),
        )
        .route("/expenses/{expense_id}", axum::routing::delete(remove_expense))
        .route("/events/{event}/summary", axum::routing::get(get_summary))
        .route("/events/{event}/charts", axum::routing::get(get_charts))
        .route("/events/{event}/export", axum::routing::get(export_expenses))
        .route(
            "/categories",
            axum::routing::get(list_categories).post(add_category),
        )
        .route("/categories/{category}", axum::routing::delete(remove_category))
        .route("/reset", axum::routing::post(reset_all))
        .route("/logs", axum::routing::get(get_app_logs))
        .with_state(service)
}

#[utoipa::path(
    post,
    path = "/api/events",
    request_body = CreateEventRequest,
    responses(
        (status = 201, description = "Event created successfully", body = Event),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 409, description = "Event already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn create_event(
    State(service): State<Arc<AppService>>,
    Json(req): Json<CreateEventRequest>,
) -> Result<(StatusCode, Json<Event>), ApiError> {
    let event = service.create_event(&req.name).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

#[utoipa::path(
    get,
    path = "/api/events",
    responses(
        (status = 200, description = "Events retrieved successfully", body = Vec<EventOverview>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn list_events(State(service): State<Arc<AppService>>) -> Result<Json<Vec<EventOverview>>, ApiError> {
    let events = service.list_events().await?;
    Ok(Json(events))
}

#[utoipa::path(
    delete,
    path = "/api/events/{event}",
    params(
        ("event" = String, Path, description = "Name of the event")
    ),
    responses(
        (status = 204, description = "Event and its data deleted"),
        (status = 404, description = "Event not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn delete_event(
    State(service): State<Arc<AppService>>,
    Path(event): Path<String>,
) -> Result<StatusCode, ApiError> {
    service.delete_event(&event).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/events/{event}/participants",
    params(
        ("event" = String, Path, description = "Name of the event")
    ),
    request_body = AddParticipantRequest,
    responses(
        (status = 201, description = "Participant added", body = ParticipantResponse),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 404, description = "Event not found", body = ErrorResponse),
        (status = 409, description = "Participant already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn add_participant(
    State(service): State<Arc<AppService>>,
    Path(event): Path<String>,
    Json(req): Json<AddParticipantRequest>,
) -> Result<(StatusCode, Json<ParticipantResponse>), ApiError> {
    let name = service.add_participant(&event, &req.name).await?;
    Ok((StatusCode::CREATED, Json(ParticipantResponse { name })))
}

#[utoipa::path(
    get,
    path = "/api/events/{event}/participants",
    params(
        ("event" = String, Path, description = "Name of the event")
    ),
    responses(
        (status = 200, description = "Participants in the order they joined", body = Vec<String>),
        (status = 404, description = "Event not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn list_participants(
    State(service): State<Arc<AppService>>,
    Path(event): Path<String>,
) -> Result<Json<Vec<String>>, ApiError> {
    let participants = service.list_participants(&event).await?;
    Ok(Json(participants))
}

#[utoipa::path(
    delete,
    path = "/api/events/{event}/participants/{participant}",
    params(
        ("event" = String, Path, description = "Name of the event"),
        ("participant" = String, Path, description = "Name of the participant")
    ),
    responses(
        (status = 204, description = "Participant and their expenses removed"),
        (status = 404, description = "Event or participant not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn remove_participant(
    State(service): State<Arc<AppService>>,
    Path((event, participant)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    service.remove_participant(&event, &participant).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/events/{event}/expenses",
    params(
        ("event" = String, Path, description = "Name of the event")
    ),
    request_body = AddExpenseRequest,
    responses(
        (status = 201, description = "Expense recorded", body = Expense),
        (status = 400, description = "Invalid amount or input", body = ErrorResponse),
        (status = 404, description = "Event, participant or category not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn add_expense(
    State(service): State<Arc<AppService>>,
    Path(event): Path<String>,
    Json(req): Json<AddExpenseRequest>,
) -> Result<(StatusCode, Json<Expense>), ApiError> {
    let expense = service
        .add_expense(
            &event,
            &req.participant,
            &req.category,
            req.amount,
            req.description.as_deref().unwrap_or_default(),
        )
        .await?;
    Ok((StatusCode::CREATED, Json(expense)))
}

#[utoipa::path(
    get,
    path = "/api/events/{event}/expenses",
    params(
        ("event" = String, Path, description = "Name of the event")
    ),
    responses(
        (status = 200, description = "Expenses in the order they were recorded", body = Vec<Expense>),
        (status = 404, description = "Event not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn list_expenses(
    State(service): State<Arc<AppService>>,
    Path(event): Path<String>,
) -> Result<Json<Vec<Expense>>, ApiError> {
    let expenses = service.list_expenses(&event).await?;
    Ok(Json(expenses))
}

#[utoipa::path(
    delete,
    path = "/api/expenses/{expense_id}",
    params(
        ("expense_id" = String, Path, description = "ID of the expense")
    ),
    responses(
        (status = 204, description = "Expense removed"),
        (status = 404, description = "Expense not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn remove_expense(
    State(service): State<Arc<AppService>>,
    Path(expense_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    service.remove_expense(&expense_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/events/{event}/summary",
    params(
        ("event" = String, Path, description = "Name of the event")
    ),
    responses(
        (status = 200, description = "Summary, or an empty state when there is nothing to settle yet", body = SummaryResponse),
        (status = 404, description = "Event not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn get_summary(
    State(service): State<Arc<AppService>>,
    Path(event): Path<String>,
) -> Result<Json<SummaryResponse>, ApiError> {
    match service.event_summary(&event).await {
        Ok(summary) => Ok(Json(SummaryResponse::ready(summary, service.settlement_epsilon()))),
        Err(err) if err.is_empty_state() => {
            debug!("Nothing to summarize for event {}: {}", event, err);
            Ok(Json(SummaryResponse::empty(&err)))
        }
        Err(err) => Err(err.into()),
    }
}

#[utoipa::path(
    get,
    path = "/api/events/{event}/charts",
    params(
        ("event" = String, Path, description = "Name of the event")
    ),
    responses(
        (status = 200, description = "Chart.js configurations", body = ChartsResponse),
        (status = 404, description = "Event not found", body = ErrorResponse),
        (status = 422, description = "Nothing to chart yet", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn get_charts(
    State(service): State<Arc<AppService>>,
    Path(event): Path<String>,
) -> Result<Json<ChartsResponse>, ApiError> {
    let summary = service.event_summary(&event).await?;
    Ok(Json(ChartsResponse {
        category: Visualization::category_pie_chart(&summary)?,
        participant: Visualization::participant_bar_chart(&summary)?,
    }))
}

#[utoipa::path(
    get,
    path = "/api/events/{event}/export",
    params(
        ("event" = String, Path, description = "Name of the event")
    ),
    responses(
        (status = 200, description = "CSV file with the event's expenses", content_type = "text/csv", body = String),
        (status = 404, description = "Event not found", body = ErrorResponse),
        (status = 422, description = "No expenses to export", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn export_expenses(
    State(service): State<Arc<AppService>>,
    Path(event): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let csv = service.export_expenses_csv(&event).await?;
    let file_name = export_file_name(&event, chrono::Utc::now());
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file_name),
            ),
        ],
        csv,
    ))
}

#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "Default and custom categories, sorted", body = Vec<String>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn list_categories(State(service): State<Arc<AppService>>) -> Result<Json<Vec<String>>, ApiError> {
    let categories = service.list_categories().await?;
    Ok(Json(categories))
}

#[utoipa::path(
    post,
    path = "/api/categories",
    request_body = AddCategoryRequest,
    responses(
        (status = 201, description = "Custom category added", body = CategoryResponse),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 409, description = "Category already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn add_category(
    State(service): State<Arc<AppService>>,
    Json(req): Json<AddCategoryRequest>,
) -> Result<(StatusCode, Json<CategoryResponse>), ApiError> {
    let name = service.add_custom_category(&req.name).await?;
    Ok((StatusCode::CREATED, Json(CategoryResponse { name })))
}

#[utoipa::path(
    delete,
    path = "/api/categories/{category}",
    params(
        ("category" = String, Path, description = "Name of the custom category")
    ),
    responses(
        (status = 204, description = "Custom category removed"),
        (status = 404, description = "Custom category not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn remove_category(
    State(service): State<Arc<AppService>>,
    Path(category): Path<String>,
) -> Result<StatusCode, ApiError> {
    service.remove_custom_category(&category).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/reset",
    responses(
        (status = 204, description = "All events and custom categories deleted"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn reset_all(State(service): State<Arc<AppService>>) -> Result<StatusCode, ApiError> {
    service.reset_all().await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/logs",
    responses(
        (status = 200, description = "Application logs retrieved successfully", body = Vec<AppLog>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn get_app_logs(State(service): State<Arc<AppService>>) -> Result<Json<Vec<AppLog>>, ApiError> {
    let logs = service.get_app_logs().await?;
    Ok(Json(logs))
}
