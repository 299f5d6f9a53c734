use utoipa::OpenApi;

use crate::{
    api::models::{
        AddCategoryRequest, AddExpenseRequest, AddParticipantRequest, BalanceView, CategoryResponse, ChartsResponse,
        CreateEventRequest, ErrorResponse, ParticipantResponse, SummaryResponse, SummaryStatus,
    },
    core::models::{
        AppLog, Balance, CategoryStats, Event, EventOverview, EventSummary, Expense, Standing, Transfer,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::create_event,
        super::handlers::list_events,
        super::handlers::delete_event,
        super::handlers::add_participant,
        super::handlers::list_participants,
        super::handlers::remove_participant,
        super::handlers::add_expense,
        super::handlers::list_expenses,
        super::handlers::remove_expense,
        super::handlers::get_summary,
        super::handlers::get_charts,
        super::handlers::export_expenses,
        super::handlers::list_categories,
        super::handlers::add_category,
        super::handlers::remove_category,
        super::handlers::reset_all,
        super::handlers::get_app_logs
    ),
    components(schemas(
        CreateEventRequest,
        AddParticipantRequest,
        AddExpenseRequest,
        AddCategoryRequest,
        ParticipantResponse,
        CategoryResponse,
        BalanceView,
        SummaryStatus,
        SummaryResponse,
        ChartsResponse,
        ErrorResponse,
        Event,
        EventOverview,
        Expense,
        Balance,
        Standing,
        Transfer,
        CategoryStats,
        EventSummary,
        AppLog
    )),
    info(
        title = "Asado API",
        description = "API for splitting cookout expenses and settling who pays whom",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
