// POST /analyze-image handler

use std::convert::Infallible;
use std::sync::Arc;

use bytes::BufMut;
use futures_util::TryStreamExt;
use warp::http::StatusCode;
use warp::multipart::FormData;

use super::{error_reply, success_reply};
use crate::state::AppState;
use crate::upload::TransientUpload;

const VISION_MODEL_UNAVAILABLE: &str = "Vision model is not available.";
const NO_IMAGE_PROVIDED: &str = "No image provided.";
const NO_SELECTED_FILE: &str = "No selected file.";
const ANALYSIS_FAILED: &str = "Sorry, I couldn't analyze the image.";

/// Fixed instruction sent with every uploaded image. Safety-relevant
/// constant: the reply must stay non-diagnostic and carry the disclaimer.
const IMAGE_ANALYSIS_PROMPT: &str = "Analyze this medical report or injury image and provide a \
     helpful but non-diagnostic explanation. Disclaimer: you are an AI and not a medical \
     professional.";

/// The `image` field extracted from the multipart form
struct UploadedImage {
    filename: String,
    mime_type: String,
    data: Vec<u8>,
}

/// Outcome of scanning the form for the `image` file field
enum ImageField {
    Missing,
    EmptyFilename,
    File(UploadedImage),
}

/// Handles image analysis requests
pub async fn analyze_image_handler(
    form: FormData,
    state: Arc<AppState>,
) -> Result<impl warp::Reply, Infallible> {
    let model = match state.vision_model.as_ref() {
        Some(model) => model,
        None => {
            return Ok(error_reply(
                StatusCode::INTERNAL_SERVER_ERROR,
                VISION_MODEL_UNAVAILABLE,
            ))
        }
    };

    let image = match read_image_field(form).await {
        ImageField::File(image) => image,
        ImageField::Missing => {
            return Ok(error_reply(StatusCode::BAD_REQUEST, NO_IMAGE_PROVIDED))
        }
        ImageField::EmptyFilename => {
            return Ok(error_reply(StatusCode::BAD_REQUEST, NO_SELECTED_FILE))
        }
    };

    // Transient file; removed when `upload` drops, on every path out of here
    let upload = match TransientUpload::write(&state.upload_dir, &image.filename, &image.data).await
    {
        Ok(upload) => upload,
        Err(e) => {
            tracing::error!(error = %e, "Failed to write upload file");
            return Ok(error_reply(
                StatusCode::INTERNAL_SERVER_ERROR,
                ANALYSIS_FAILED,
            ));
        }
    };

    // Read back once so the relayed bytes are exactly what landed on disk
    let bytes = match tokio::fs::read(upload.path()).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read upload file back");
            return Ok(error_reply(
                StatusCode::INTERNAL_SERVER_ERROR,
                ANALYSIS_FAILED,
            ));
        }
    };

    match model
        .generate_with_image(IMAGE_ANALYSIS_PROMPT, &bytes, &image.mime_type)
        .await
    {
        Ok(text) => Ok(success_reply(text)),
        Err(e) => {
            tracing::error!(error = %e, "Error during image analysis");
            Ok(error_reply(
                StatusCode::INTERNAL_SERVER_ERROR,
                ANALYSIS_FAILED,
            ))
        }
    }
}

/// Scan the form for a file field named `image` and drain its bytes
///
/// Value fields named `image` (no filename) are skipped: only a file field
/// counts. A file field with an empty filename is reported differently from
/// a missing field.
async fn read_image_field(mut form: FormData) -> ImageField {
    while let Ok(Some(part)) = form.try_next().await {
        if part.name() != "image" {
            continue;
        }

        let filename = match part.filename() {
            Some(name) => name.to_string(),
            None => continue,
        };
        if filename.is_empty() {
            return ImageField::EmptyFilename;
        }

        let mime_type = part
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();

        let data = match part
            .stream()
            .try_fold(Vec::new(), |mut acc, buf| async move {
                acc.put(buf);
                Ok(acc)
            })
            .await
        {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read multipart image field");
                return ImageField::Missing;
            }
        };

        return ImageField::File(UploadedImage {
            filename,
            mime_type,
            data,
        });
    }

    ImageField::Missing
}
