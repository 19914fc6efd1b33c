use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, web};
use futures_util::TryStreamExt;
use uuid::Uuid;

use crate::api::{error, success};
use crate::middlewares::get_claims;
use crate::modules::file::{
    model::{
        FileListResult, FileQuery, FileQueryModel, InitBucketModel, SignedUrlQuery,
        SignedUrlResponse, StorageStats, UpdateFileModel, UploadOptions,
    },
    repository::FileRepository,
    schema::{FileCategory, FileEntity},
    service::FileService,
    storage::ObjectStorage,
};
use crate::utils::{ValidatedJson, ValidatedQuery};

fn parse_category(value: &str) -> Result<FileCategory, error::Error> {
    serde_json::from_value(serde_json::Value::String(value.to_string()))
        .map_err(|_| error::Error::bad_request(format!("Unknown category: {}", value)))
}

async fn read_field_bytes(field: &mut actix_multipart::Field) -> Result<Vec<u8>, error::Error> {
    let mut bytes = Vec::new();
    while let Some(chunk) = field.try_next().await.map_err(|_| error::Error::InternalServer)? {
        bytes.extend_from_slice(&chunk);
    }
    Ok(bytes)
}

async fn read_field_text(field: &mut actix_multipart::Field) -> Result<String, error::Error> {
    let bytes = read_field_bytes(field).await?;
    String::from_utf8(bytes).map_err(|_| error::Error::bad_request("Form field is not valid UTF-8"))
}

/// Multipart upload: a `file` part plus optional category / description /
/// tags (comma-separated) / folder text parts.
pub async fn upload_file<R, S>(
    mut payload: Multipart,
    req: HttpRequest,
    service: web::Data<FileService<R, S>>,
) -> Result<success::Success<FileEntity>, error::Error>
where
    R: FileRepository + Send + Sync + 'static,
    S: ObjectStorage + Send + Sync + 'static,
{
    let uploaded_by = get_claims(&req)?.sub;

    let mut file_part: Option<(String, String, Vec<u8>)> = None;
    let mut category = None;
    let mut description = None;
    let mut tags = None;
    let mut folder = None;

    while let Some(mut field) = payload.try_next().await.map_err(|_| error::Error::InternalServer)?
    {
        let Some(name) = field.name().map(|n| n.to_string()) else {
            continue;
        };

        match name.as_str() {
            "file" => {
                let filename = field
                    .content_disposition()
                    .and_then(|cd| cd.get_filename())
                    .ok_or_else(|| error::Error::bad_request("Missing filename"))?
                    .to_string();

                let mime_type = field.content_type().map(|m| m.to_string()).unwrap_or_else(|| {
                    mime_guess::from_path(&filename).first_or_octet_stream().to_string()
                });

                let bytes = read_field_bytes(&mut field).await?;
                file_part = Some((filename, mime_type, bytes));
            }
            "category" => {
                category = Some(parse_category(&read_field_text(&mut field).await?)?);
            }
            "description" => {
                description = Some(read_field_text(&mut field).await?);
            }
            "tags" => {
                let raw = read_field_text(&mut field).await?;
                tags = Some(
                    raw.split(',')
                        .map(|t| t.trim().to_string())
                        .filter(|t| !t.is_empty())
                        .collect::<Vec<_>>(),
                );
            }
            "folder" => {
                folder = Some(read_field_text(&mut field).await?);
            }
            _ => {}
        }
    }

    let Some((filename, mime_type, bytes)) = file_part else {
        return Err(error::Error::bad_request("No file found in request"));
    };

    let options = UploadOptions {
        size: bytes.len(),
        filename,
        mime_type,
        bytes,
        category,
        description,
        tags,
        folder,
        uploaded_by: Some(uploaded_by),
    };

    let file = service.upload_file(options, None).await?;
    Ok(success::Success::created(Some(file)).message("File uploaded successfully"))
}

pub async fn get_file<R, S>(
    file_id: web::Path<Uuid>,
    service: web::Data<FileService<R, S>>,
) -> Result<success::Success<FileEntity>, error::Error>
where
    R: FileRepository + Send + Sync + 'static,
    S: ObjectStorage + Send + Sync + 'static,
{
    match service.get_by_id(&file_id.into_inner()).await? {
        Some(file) => Ok(success::Success::ok(Some(file))),
        None => Err(error::Error::not_found("File not found")),
    }
}

/// Makes a user-supplied filename safe to embed in a quoted
/// Content-Disposition value. Quotes and backslashes would end the quoted
/// string early and control characters are invalid in header values.
fn attachment_filename(name: &str) -> String {
    name.chars()
        .map(|c| if c == '"' || c == '\\' || c.is_control() { '_' } else { c })
        .collect()
}

pub async fn download_file<R, S>(
    file_id: web::Path<Uuid>,
    service: web::Data<FileService<R, S>>,
) -> Result<HttpResponse, error::Error>
where
    R: FileRepository + Send + Sync + 'static,
    S: ObjectStorage + Send + Sync + 'static,
{
    let Some((bytes, metadata)) = service.download(&file_id.into_inner()).await? else {
        return Err(error::Error::not_found("File not found"));
    };

    Ok(HttpResponse::Ok()
        .insert_header(("Content-Type", metadata.mime_type))
        .insert_header((
            "Content-Disposition",
            format!("attachment; filename=\"{}\"", attachment_filename(&metadata.original_name)),
        ))
        .body(bytes))
}

pub async fn get_signed_url<R, S>(
    file_id: web::Path<Uuid>,
    query: ValidatedQuery<SignedUrlQuery>,
    service: web::Data<FileService<R, S>>,
) -> Result<success::Success<SignedUrlResponse>, error::Error>
where
    R: FileRepository + Send + Sync + 'static,
    S: ObjectStorage + Send + Sync + 'static,
{
    let expires_in = query.0.expires_in;
    match service.get_signed_url(&file_id.into_inner(), expires_in).await? {
        Some(url) => Ok(success::Success::ok(Some(SignedUrlResponse {
            url,
            expires_in: expires_in.unwrap_or(3600),
        }))),
        None => Err(error::Error::not_found("File not found")),
    }
}

pub async fn list_files<R, S>(
    query: ValidatedQuery<FileQueryModel>,
    service: web::Data<FileService<R, S>>,
) -> Result<success::Success<FileListResult>, error::Error>
where
    R: FileRepository + Send + Sync + 'static,
    S: ObjectStorage + Send + Sync + 'static,
{
    let result = service.list_files(FileQuery::from(query.0)).await?;
    Ok(success::Success::ok(Some(result)))
}

pub async fn list_by_category<R, S>(
    category: web::Path<String>,
    query: ValidatedQuery<FileQueryModel>,
    service: web::Data<FileService<R, S>>,
) -> Result<success::Success<FileListResult>, error::Error>
where
    R: FileRepository + Send + Sync + 'static,
    S: ObjectStorage + Send + Sync + 'static,
{
    let mut file_query = FileQuery::from(query.0);
    file_query.category = Some(parse_category(&category.into_inner())?);
    let result = service.list_files(file_query).await?;
    Ok(success::Success::ok(Some(result)))
}

pub async fn list_by_folder<R, S>(
    folder: web::Path<String>,
    query: ValidatedQuery<FileQueryModel>,
    service: web::Data<FileService<R, S>>,
) -> Result<success::Success<FileListResult>, error::Error>
where
    R: FileRepository + Send + Sync + 'static,
    S: ObjectStorage + Send + Sync + 'static,
{
    let mut file_query = FileQuery::from(query.0);
    file_query.folder = Some(folder.into_inner());
    let result = service.list_files(file_query).await?;
    Ok(success::Success::ok(Some(result)))
}

pub async fn update_file<R, S>(
    file_id: web::Path<Uuid>,
    updates: ValidatedJson<UpdateFileModel>,
    service: web::Data<FileService<R, S>>,
) -> Result<success::Success<FileEntity>, error::Error>
where
    R: FileRepository + Send + Sync + 'static,
    S: ObjectStorage + Send + Sync + 'static,
{
    match service.update_metadata(&file_id.into_inner(), updates.0).await? {
        Some(file) => Ok(success::Success::ok(Some(file)).message("File updated successfully")),
        None => Err(error::Error::not_found("File not found")),
    }
}

pub async fn delete_file<R, S>(
    file_id: web::Path<Uuid>,
    service: web::Data<FileService<R, S>>,
) -> Result<success::Success<()>, error::Error>
where
    R: FileRepository + Send + Sync + 'static,
    S: ObjectStorage + Send + Sync + 'static,
{
    service.delete_file(&file_id.into_inner()).await?;
    Ok(success::Success::ok(None).message("File deleted successfully"))
}

pub async fn storage_stats<R, S>(
    service: web::Data<FileService<R, S>>,
) -> Result<success::Success<StorageStats>, error::Error>
where
    R: FileRepository + Send + Sync + 'static,
    S: ObjectStorage + Send + Sync + 'static,
{
    let stats = service.storage_stats().await?;
    Ok(success::Success::ok(Some(stats)))
}

pub async fn init_bucket<R, S>(
    body: ValidatedJson<InitBucketModel>,
    service: web::Data<FileService<R, S>>,
) -> Result<success::Success<()>, error::Error>
where
    R: FileRepository + Send + Sync + 'static,
    S: ObjectStorage + Send + Sync + 'static,
{
    service.ensure_bucket(body.0.bucket_name.as_deref()).await;
    Ok(success::Success::ok(None).message("Bucket initialized"))
}

#[cfg(test)]
mod tests {
    use super::attachment_filename;

    #[test]
    fn attachment_filename_neutralizes_header_breaking_characters() {
        assert_eq!(attachment_filename("bad\"name.pdf"), "bad_name.pdf");
        assert_eq!(attachment_filename("evil\r\nX-Injected: 1.pdf"), "evil__X-Injected: 1.pdf");
        assert_eq!(attachment_filename("back\\slash.txt"), "back_slash.txt");
        assert_eq!(attachment_filename("plain report.pdf"), "plain report.pdf");
    }
}
