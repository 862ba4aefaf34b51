//! Browser-side registry of files selected for upload.
//!
//! `web_sys::File` handles are not `Send`, so they cannot sit inside a
//! signal. The form keeps a [`PendingImage`] (name + blob preview URL) and
//! this registry maps the preview URL back to the file until it is uploaded
//! or removed.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::net::api::{BackendClient, image_object_path};
use crate::net::error::ApiError;
use crate::state::object_form::PendingImage;

thread_local! {
    static FILES: RefCell<HashMap<String, web_sys::File>> = RefCell::new(HashMap::new());
}

/// Collect the files of an `<input type="file">` change event.
pub fn files_from_input(ev: &leptos::ev::Event) -> Vec<web_sys::File> {
    use wasm_bindgen::JsCast;

    let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
        return Vec::new();
    };
    let files = input.files();
    // Reset so selecting the same file again still fires `change`.
    input.set_value("");
    let Some(files) = files else {
        return Vec::new();
    };
    (0..files.length()).filter_map(|i| files.get(i)).collect()
}

/// Register files and return their form entries.
pub fn register(files: Vec<web_sys::File>) -> Vec<PendingImage> {
    files
        .into_iter()
        .filter_map(|file| {
            let preview_url = match web_sys::Url::create_object_url_with_blob(&file) {
                Ok(url) => url,
                Err(e) => {
                    leptos::logging::warn!("preview url failed for {}: {e:?}", file.name());
                    return None;
                }
            };
            let entry = PendingImage { name: file.name(), preview_url: preview_url.clone() };
            FILES.with(|f| f.borrow_mut().insert(preview_url, file));
            Some(entry)
        })
        .collect()
}

/// Forget a file and revoke its preview URL.
pub fn release(image: &PendingImage) {
    FILES.with(|f| f.borrow_mut().remove(&image.preview_url));
    let _ = web_sys::Url::revoke_object_url(&image.preview_url);
}

pub fn release_all(images: &[PendingImage]) {
    for image in images {
        release(image);
    }
}

/// Upload every pending image under `<user_id>/<uuid>.<ext>` and return the
/// public URLs in the same order.
///
/// # Errors
///
/// Stops at the first failed upload. Files already uploaded stay in storage.
pub async fn upload_all(
    client: &BackendClient,
    user_id: &str,
    images: &[PendingImage],
) -> Result<Vec<String>, ApiError> {
    let mut urls = Vec::with_capacity(images.len());
    for image in images {
        let file = FILES
            .with(|f| f.borrow().get(&image.preview_url).cloned())
            .ok_or_else(|| ApiError::Request(format!("arquivo {} não está mais disponível", image.name)))?;
        let path = image_object_path(user_id, &image.name, &uuid::Uuid::new_v4().to_string());
        urls.push(client.upload_image(&path, &file).await?);
    }
    Ok(urls)
}
