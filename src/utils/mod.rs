// image-ripper/src/utils/mod.rs
use std::path::PathBuf;

pub const SIZE_TOKEN: &str = "{size}";
pub const FILE_TOKEN: &str = "{file}";

/// Input suffixes the batch picks up. Matching is case-sensitive.
const IMAGE_SUFFIXES: [&str; 2] = [".png", ".jpg"];

/// Expands `template` for one size bucket and appends the file name.
///
/// Each token is replaced at most once, `{size}` first. A template
/// without tokens is a plain output directory.
pub fn expand(template: &str, size_name: &str, file_base_name: &str) -> PathBuf {
    let dir = template
        .replacen(SIZE_TOKEN, size_name, 1)
        .replacen(FILE_TOKEN, file_base_name, 1);
    PathBuf::from(dir).join(file_base_name)
}

/// Everything after the last path separator, or the whole input.
pub fn file_base_name(input: &str) -> &str {
    match input.rfind(std::path::is_separator) {
        Some(idx) => &input[idx + 1..],
        None => input,
    }
}

pub fn is_image_path(input: &str) -> bool {
    IMAGE_SUFFIXES.iter().any(|suffix| input.ends_with(suffix))
}
