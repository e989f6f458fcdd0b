use sqlx::PgPool;
use storage::{
    dto::application::ParticipantCardResponse,
    error::Result,
    repository::application::ApplicationRepository,
    services::participant_card::{self, EVENT_TAG},
};
use uuid::Uuid;

/// Third-party QR rendering endpoint. We only hand it the payload; the
/// returned image is never fetched or validated here.
const QR_RENDER_ENDPOINT: &str = "https://api.qrserver.com/v1/create-qr-code/";

/// Assemble the printable card for an application. Everything on the
/// card is derived on the fly, so reprinting needs no stored state.
pub async fn participant_card(pool: &PgPool, id: Uuid) -> Result<ParticipantCardResponse> {
    let application = ApplicationRepository::new(pool).find_by_id(id).await?;

    let participant_id = application.application_id.to_string();
    let bib_number = participant_card::bib_number(&participant_id);
    let qr_payload =
        participant_card::qr_payload(EVENT_TAG, &participant_id, &bib_number, &application.full_name);
    let qr_image_url = qr_image_url(&qr_payload);

    Ok(ParticipantCardResponse {
        application_id: application.application_id,
        full_name: application.full_name,
        category: application.category,
        bib_number,
        qr_payload,
        qr_image_url,
    })
}

pub fn qr_image_url(payload: &str) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("size", "300x300")
        .append_pair("data", payload)
        .finish();

    format!("{QR_RENDER_ENDPOINT}?{query}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_url_query_encodes_the_payload() {
        let url = qr_image_url("GRANFONDO2026|p1|1001|Ada Lovelace");
        assert!(url.starts_with(QR_RENDER_ENDPOINT));
        assert!(url.contains("data=GRANFONDO2026%7Cp1%7C1001%7CAda+Lovelace"));
    }
}
