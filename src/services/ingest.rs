//! Mediainläsning
//!
//! Tar emot användarvalda filer och producerar lagringsbara poster:
//! bilder avkodas, skalas ned till en maxdimension och kodas om som
//! JPEG innan de bäddas in som data-URL; övriga filer (video) passerar
//! oförändrade och får en statisk platshållarminiatyr.
//!
//! Batchuppladdningar behandlar filerna parallellt och oberoende av
//! varandra: en korrupt fil eller en kvotsmäll fäller aldrig syskonen,
//! utan räknas i slutsummeringen.

use std::io::Cursor;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::imageops::FilterType;
use rayon::prelude::*;

use crate::db::Database;
use crate::models::{Media, MediaType, VIDEO_THUMBNAIL};
use crate::utils::error::{AppError, AppResult};

/// Längsta tillåtna sida på en lagrad bild, i pixlar
pub const MAX_DIMENSION: u32 = 800;

/// JPEG-kvalitet vid omkodning (0-100)
pub const JPEG_QUALITY: u8 = 70;

#[derive(Debug, Clone, Copy)]
pub struct IngestOptions {
    pub max_dimension: u32,
    pub jpeg_quality: u8,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            max_dimension: MAX_DIMENSION,
            jpeg_quality: JPEG_QUALITY,
        }
    }
}

/// En fil som användaren valt för uppladdning
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub filename: String,
    /// Deklarerad MIME-typ; prefixet avgör om filen behandlas som bild
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// Färdigbehandlad nyttolast, redo att lagras som mediapost
#[derive(Debug, Clone)]
pub struct ProcessedUpload {
    pub media_type: MediaType,
    pub url: String,
    pub thumbnail: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// Utfall för en batchuppladdning. Batchen är klar först när varje fil
/// rapporterat, och summan `succeeded + failed` är alltid antalet filer.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub succeeded: usize,
    pub failed: usize,
    pub errors: Vec<String>,
}

impl BatchOutcome {
    pub fn summary(&self) -> String {
        format!("{} uppladdade, {} misslyckade", self.succeeded, self.failed)
    }

    pub fn all_ok(&self) -> bool {
        self.failed == 0
    }
}

/// Behandla en enskild fil till en lagringsbar representation.
/// Resultatet är alltid en komplett, direkt visningsbar nyttolast.
pub fn process_file(file: &UploadFile, opts: &IngestOptions) -> AppResult<ProcessedUpload> {
    if !file.mime.starts_with("image/") {
        // Icke-bild: passera oförändrad med platshållarminiatyr
        let url = format!("data:{};base64,{}", file.mime, STANDARD.encode(&file.bytes));
        return Ok(ProcessedUpload {
            media_type: MediaType::Video,
            url,
            thumbnail: VIDEO_THUMBNAIL.to_string(),
            width: None,
            height: None,
        });
    }

    let img = image::load_from_memory(&file.bytes)?;
    let (width, height) = (img.width(), img.height());

    let img = if width.max(height) > opts.max_dimension {
        let scale = opts.max_dimension as f64 / width.max(height) as f64;
        // Kortsidan kan avrundas till noll vid extrema proportioner;
        // en rastersida får aldrig understiga en pixel
        let new_width = ((width as f64 * scale).round() as u32).max(1);
        let new_height = ((height as f64 * scale).round() as u32).max(1);
        img.resize_exact(new_width, new_height, FilterType::Lanczos3)
    } else {
        img
    };

    let rgb = img.to_rgb8();
    let mut encoded = Vec::new();
    image::codecs::jpeg::JpegEncoder::new_with_quality(&mut Cursor::new(&mut encoded), opts.jpeg_quality)
        .encode_image(&rgb)
        .map_err(AppError::Image)?;

    let url = format!("data:image/jpeg;base64,{}", STANDARD.encode(&encoded));
    Ok(ProcessedUpload {
        media_type: MediaType::Photo,
        thumbnail: url.clone(),
        url,
        width: Some(rgb.width()),
        height: Some(rgb.height()),
    })
}

/// Ladda upp en batch filer till ett album.
///
/// Filerna behandlas parallellt; lagringen sker sedan i indataordning
/// så att första lyckade foto blir albumomslag. Varje fil lyckas eller
/// misslyckas för sig och batchen summeras när samtliga rapporterat.
pub fn upload_batch(
    db: &Database,
    album_id: &str,
    files: &[UploadFile],
    opts: &IngestOptions,
) -> AppResult<BatchOutcome> {
    let albums = db.albums();
    if albums.find_by_id(album_id)?.is_none() {
        return Err(AppError::not_found(format!("Album {} finns inte", album_id)));
    }

    let processed: Vec<(String, AppResult<ProcessedUpload>)> = files
        .par_iter()
        .map(|file| (file.filename.clone(), process_file(file, opts)))
        .collect();

    let mut outcome = BatchOutcome::default();
    for (filename, result) in processed {
        let upload = match result {
            Ok(upload) => upload,
            Err(e) => {
                outcome.failed += 1;
                outcome.errors.push(format!("{}: {}", filename, e));
                tracing::warn!(file = %filename, error = %e, "Fil kunde inte behandlas");
                continue;
            }
        };

        let mut media = Media::new(
            album_id.to_string(),
            upload.media_type,
            upload.url,
            upload.thumbnail,
        );
        media.title = Some(filename.clone());

        match albums.add_media(&mut media) {
            Ok(_) => outcome.succeeded += 1,
            Err(e) => {
                outcome.failed += 1;
                outcome.errors.push(format!("{}: {}", filename, e));
                tracing::warn!(file = %filename, error = %e, "Fil kunde inte lagras");
            }
        }
    }

    tracing::info!(album = %album_id, "Batchuppladdning klar: {}", outcome.summary());
    Ok(outcome)
}
