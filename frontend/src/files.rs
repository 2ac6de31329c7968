use std::cell::RefCell;
use std::rc::Rc;
use tokio::sync::oneshot;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Event, File, FileReader, HtmlInputElement, HtmlVideoElement, Url};

/// First file selected in an `<input type="file">` change event.
pub fn selected_file(e: &Event) -> Option<File> {
    let input = e.target()?.dyn_into::<HtmlInputElement>().ok()?;
    input.files()?.get(0)
}

/// Reads a file into a self-contained `data:` URL.
pub async fn read_as_data_url(file: &File) -> Result<String, String> {
    let reader = FileReader::new().map_err(|_| "FileReader is not available".to_string())?;
    let (tx, rx) = oneshot::channel::<()>();

    let on_load_end = Closure::once(move || {
        let _ = tx.send(());
    });
    reader.set_onloadend(Some(on_load_end.as_ref().unchecked_ref()));
    reader
        .read_as_data_url(file)
        .map_err(|_| format!("Failed to read '{}'", file.name()))?;

    rx.await
        .map_err(|_| format!("Reading '{}' was interrupted", file.name()))?;
    reader.set_onloadend(None);

    reader
        .result()
        .ok()
        .and_then(|value| value.as_string())
        .ok_or_else(|| format!("Failed to read '{}'", file.name()))
}

/// Running time of a media file in seconds, taken from its metadata.
pub async fn probe_duration(file: &File) -> Result<f64, String> {
    let document = window()
        .and_then(|w| w.document())
        .ok_or_else(|| "No document in this context".to_string())?;
    let video = document
        .create_element("video")
        .map_err(|_| "Failed to create video element".to_string())?
        .dyn_into::<HtmlVideoElement>()
        .map_err(|_| "Failed to create video element".to_string())?;
    video.set_preload("metadata");

    let url = Url::create_object_url_with_blob(file)
        .map_err(|_| format!("Failed to open '{}'", file.name()))?;

    let (tx, rx) = oneshot::channel::<bool>();
    let tx = Rc::new(RefCell::new(Some(tx)));
    let notify = |loaded: bool| {
        let tx = tx.clone();
        Closure::<dyn FnMut()>::new(move || {
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(loaded);
            }
        })
    };
    let on_loaded = notify(true);
    let on_error = notify(false);
    video.set_onloadedmetadata(Some(on_loaded.as_ref().unchecked_ref()));
    video.set_onerror(Some(on_error.as_ref().unchecked_ref()));
    video.set_src(&url);

    let loaded = rx.await.unwrap_or(false);
    video.set_onloadedmetadata(None);
    video.set_onerror(None);
    let _ = Url::revoke_object_url(&url);

    if loaded {
        Ok(video.duration())
    } else {
        Err(format!("Could not read media metadata of '{}'", file.name()))
    }
}
