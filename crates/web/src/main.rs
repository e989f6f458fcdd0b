use std::sync::Arc;

use anyhow::Context;
use axum::{Router, middleware as axum_middleware};
use storage::Database;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod mailer;
mod middleware;
mod state;

use config::Config;
use mailer::{LogMailer, Mailer, SmtpMailer};
use middleware::auth::{ADMIN_COOKIE, AdminTokens, require_admin};
use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::applications::handlers::submit_application,
        features::applications::handlers::active_application,
        features::applications::handlers::list_applications,
        features::applications::handlers::get_application,
        features::applications::handlers::update_application_status,
        features::applications::handlers::delete_application,
        features::cards::handlers::get_participant_card,
        features::events::handlers::list_events,
        features::events::handlers::get_active_event,
        features::events::handlers::get_event,
        features::events::handlers::list_all_events,
        features::events::handlers::create_event,
        features::events::handlers::update_event,
        features::events::handlers::activate_event,
        features::events::handlers::delete_event,
        features::messages::handlers::submit_message,
        features::messages::handlers::list_messages,
        features::messages::handlers::get_message,
        features::messages::handlers::mark_read,
        features::messages::handlers::move_message,
        features::messages::handlers::reply_to_message,
        features::messages::handlers::delete_message,
        features::cms::handlers::list_news,
        features::cms::handlers::get_news,
        features::cms::handlers::list_all_news,
        features::cms::handlers::create_news,
        features::cms::handlers::update_news,
        features::cms::handlers::delete_news,
        features::cms::handlers::list_sponsors,
        features::cms::handlers::create_sponsor,
        features::cms::handlers::delete_sponsor,
        features::cms::handlers::list_testimonials,
        features::cms::handlers::create_testimonial,
        features::cms::handlers::delete_testimonial,
        features::content::handlers::list_content,
        features::content::handlers::upsert_content,
        features::content::handlers::list_images,
        features::content::handlers::upsert_image,
        features::content::handlers::list_sections,
        features::content::handlers::upsert_section,
        features::content::handlers::get_hero,
        features::content::handlers::upsert_hero,
        features::analytics::handlers::dashboard,
        features::analytics::handlers::applications_per_event,
    ),
    components(
        schemas(
            storage::dto::application::CreateApplicationRequest,
            storage::dto::application::UpdateStatusRequest,
            storage::dto::application::StatusDecision,
            storage::dto::application::ApplicationResponse,
            storage::dto::application::ActiveApplicationResponse,
            storage::dto::application::ParticipantCardResponse,
            storage::dto::event::CreateEventRequest,
            storage::dto::event::UpdateEventRequest,
            storage::dto::event::EventResponse,
            storage::dto::message::CreateMessageRequest,
            storage::dto::message::MoveMessageRequest,
            storage::dto::message::ReplyRequest,
            storage::dto::message::MessageResponse,
            storage::dto::message::ReplyResponse,
            storage::dto::content::CreateNewsRequest,
            storage::dto::content::UpdateNewsRequest,
            storage::dto::content::CreateSponsorRequest,
            storage::dto::content::CreateTestimonialRequest,
            storage::dto::content::UpsertContentRequest,
            storage::dto::content::UpsertImageRequest,
            storage::dto::content::UpsertSectionRequest,
            storage::dto::content::UpsertHeroRequest,
            storage::models::Application,
            storage::models::ApplicationStatus,
            storage::models::RaceCategory,
            storage::models::Event,
            storage::models::EventStatus,
            storage::models::ContactMessage,
            storage::models::MessageReply,
            storage::models::MessageFolder,
            storage::models::NewsPost,
            storage::models::Sponsor,
            storage::models::Testimonial,
            storage::models::SiteContent,
            storage::models::SiteImage,
            storage::models::SectionSetting,
            storage::models::HeroContent,
            storage::repository::analytics::DashboardCounts,
            storage::repository::analytics::EventApplicationCount,
        )
    ),
    tags(
        (name = "applications", description = "Registration submission and admin decisions"),
        (name = "cards", description = "Participant card material"),
        (name = "events", description = "Race event catalogue"),
        (name = "messages", description = "Contact form and admin inbox"),
        (name = "cms", description = "News, sponsors and testimonials"),
        (name = "content", description = "Editable site content slots"),
        (name = "analytics", description = "Admin dashboard counts"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "admin_session",
                utoipa::openapi::security::SecurityScheme::ApiKey(
                    utoipa::openapi::security::ApiKey::Cookie(
                        utoipa::openapi::security::ApiKeyValue::new(ADMIN_COOKIE),
                    ),
                ),
            )
        }
    }
}

fn public_router() -> Router<AppState> {
    Router::new()
        .nest("/applications", features::applications::routes::public_routes())
        .nest("/events", features::events::routes::public_routes())
        .nest("/messages", features::messages::routes::public_routes())
        .merge(features::cms::routes::public_routes())
        .merge(features::content::routes::public_routes())
}

fn admin_router(admin_tokens: AdminTokens) -> Router<AppState> {
    Router::new()
        .nest(
            "/applications",
            features::applications::routes::admin_routes()
                .merge(features::cards::routes::admin_routes()),
        )
        .nest("/events", features::events::routes::admin_routes())
        .nest("/messages", features::messages::routes::admin_routes())
        .nest("/analytics", features::analytics::routes::admin_routes())
        .merge(features::cms::routes::admin_routes())
        .merge(features::content::routes::admin_routes())
        .route_layer(axum_middleware::from_fn_with_state(
            admin_tokens,
            require_admin,
        ))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting Gran Fondo API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed");

    let mailer: Arc<dyn Mailer> = match &config.smtp {
        Some(smtp) => {
            tracing::info!(server = %smtp.server, "SMTP dispatch enabled");
            Arc::new(SmtpMailer::new(smtp))
        }
        None => {
            tracing::warn!("SMTP not configured, notifications will only be logged");
            Arc::new(LogMailer)
        }
    };

    let admin_tokens = AdminTokens::from_comma_separated(&config.admin_session_tokens);
    let state = AppState::new(db, mailer);

    let app = Router::new()
        .nest("/api", public_router())
        .nest("/api/admin", admin_router(admin_tokens))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", bind_address);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .context("Failed to bind listener")?;
    axum::serve(listener, app).await?;

    Ok(())
}
