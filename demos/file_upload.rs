//! File values: narrowing to a file, then size and type checks.

use models::{File, FormData};
use services::parse;

const MAX_SIZE_IN_BYTES: usize = 2 * 1024 * 1024;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut form = FormData::new();
    // Usually this comes from a multipart/form-data request
    form.append(
        "avatar",
        File::new("avatar.png", Some(mime::IMAGE_PNG), b"dummy image data".to_vec()),
    );

    let data = parse(form).into_result()?;

    let avatar = data
        .get("avatar")
        .and_then(|v| v.as_file())
        .ok_or("expected avatar to be a file")?;

    if avatar.size() > MAX_SIZE_IN_BYTES {
        return Err("file is too large".into());
    }
    if avatar.content_type() != Some(&mime::IMAGE_PNG) {
        return Err("unsupported file type".into());
    }

    println!("accepted {} ({} bytes)", avatar.name(), avatar.size());
    Ok(())
}
