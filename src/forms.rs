use crate::errors::FormReadError;
use crate::setup::Settings;
use actix_multipart::{Multipart, MultipartError};
use actix_web::{get, http::StatusCode, post, web, HttpResponse};
use futures::TryStreamExt;
use models::{File, FormData, FormValue};
use services::ParseOutcome;

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(index).service(parse_form);
}

#[get("/")]
async fn index() -> &'static str {
    "Hello, safe-formdata!"
}

#[post("/forms")]
async fn parse_form(
    mut payload: Multipart,
    settings: web::Data<Settings>,
) -> Result<HttpResponse, FormReadError> {
    let form = match read_form(&mut payload, settings.max_form_bytes).await {
        Ok(form) => form,
        Err(e) => {
            tracing::warn!(error = %e, "unreadable form body");
            return Err(e);
        }
    };

    let outcome = services::parse(&form);
    let status = match &outcome {
        ParseOutcome::Success(data) => {
            tracing::info!(fields = data.len(), "form accepted");
            StatusCode::OK
        }
        ParseOutcome::Failure(issues) => {
            tracing::warn!(
                issues = issues.len(),
                first_code = %issues.first().code(),
                "form rejected"
            );
            StatusCode::BAD_REQUEST
        }
    };

    Ok(HttpResponse::build(status).json(&outcome))
}

/// Reads every part of a multipart body into ordered form entries.
///
/// Parts with a filename become files, the rest become text. A part whose
/// `Content-Disposition` has no `name` never gets here: actix-multipart fails
/// the stream first, so the request is answered with a 400 multipart error.
/// An explicit `name=""` is read as the empty key and reported by `parse`.
pub async fn read_form(
    payload: &mut Multipart,
    limit: usize,
) -> Result<FormData, FormReadError> {
    let mut form = FormData::new();
    let mut total = 0usize;

    loop {
        let mut field = match payload.try_next().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            // An empty form is nothing but the closing boundary
            Err(MultipartError::Incomplete) if form.is_empty() => break,
            Err(e) => return Err(e.into()),
        };

        let key = field.name().unwrap_or_default().to_string();
        let filename = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(str::to_string);
        let content_type = field.content_type().cloned();

        let mut buf = web::BytesMut::new();
        while let Some(chunk) = field.try_next().await? {
            total += chunk.len();
            if total > limit {
                return Err(FormReadError::TooLarge { limit });
            }
            buf.extend_from_slice(&chunk);
        }

        let value = match filename {
            Some(name) => FormValue::File(File::new(name, content_type, buf.freeze())),
            None => FormValue::Text(String::from_utf8_lossy(&buf).into_owned()),
        };
        form.append(key, value);
    }

    Ok(form)
}
