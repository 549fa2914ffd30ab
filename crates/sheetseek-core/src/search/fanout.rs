use super::file::{FileResult, search_file};
use super::options::FileErrorPolicy;
use crate::decode::WorkbookDecoder;
use crate::error::{Result, SearchError};
use crate::upload::UploadedFile;
use rayon::prelude::*;
use sheetseek_engine::engine::Query;
use tracing::warn;

/// Search every file of a submission concurrently.
///
/// Files are decoded and scanned in parallel; the returned results are in
/// submission order (`result[i]` belongs to `files[i]`) regardless of which
/// file finished first. Nothing is returned until every file is done.
pub fn search_files<D>(
    decoder: &D,
    files: &[UploadedFile],
    query: &Query,
    policy: FileErrorPolicy,
) -> Result<Vec<FileResult>>
where
    D: WorkbookDecoder + ?Sized,
{
    let outcomes: Vec<_> = files
        .par_iter()
        .map(|file| search_file(decoder, file, query))
        .collect();

    outcomes
        .into_iter()
        .zip(files)
        .map(|(outcome, file)| match (outcome, policy) {
            (Ok(result), _) => Ok(result),
            (Err(source), FileErrorPolicy::AbortAll) => Err(SearchError::Decode {
                file: file.name.clone(),
                source,
            }),
            (Err(source), FileErrorPolicy::SkipFile) => {
                warn!(file = %file.name, error = %source, "skipping file that failed to decode");
                Ok(FileResult::empty(&file.name))
            }
        })
        .collect()
}
