//! Camera and file capture glue.
//!
//! Frames are grabbed from a live `<video>` element into a hidden
//! `<canvas>`, encoded as JPEG and handed over as raw bytes so the API
//! layer can post them as multipart uploads.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Blob, CanvasRenderingContext2d, File, HtmlCanvasElement, HtmlInputElement, HtmlVideoElement,
    MediaStream, MediaStreamConstraints, MediaStreamTrack,
};

use crate::config::CAMERA_WARM_UP_MS;
use crate::utils::timers::sleep_ms;

const JPEG_MIME: &str = "image/jpeg";
const JPEG_QUALITY: f64 = 0.8;
const FRAME_FILE_NAME: &str = "face.jpg";
// readyState >= HAVE_METADATA means videoWidth/videoHeight are known.
const HAVE_METADATA: u16 = 1;
const METADATA_POLL_MS: u32 = 50;
const METADATA_MAX_POLLS: u32 = 200;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaptureError {
    #[error("No browser window available")]
    NoWindow,
    #[error("Could not access camera. Please check permissions.")]
    CameraUnavailable,
    #[error("Failed to capture image - video not ready")]
    VideoNotReady,
    #[error("Failed to capture image")]
    Encode,
    #[error("Could not read the selected photo")]
    FileRead,
}

/// An image ready to be uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub mime: String,
}

impl ImageUpload {
    pub fn jpeg_frame(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            file_name: FRAME_FILE_NAME.to_string(),
            mime: JPEG_MIME.to_string(),
        }
    }

    pub fn from_parts(bytes: Vec<u8>, file_name: &str, mime: &str) -> Self {
        let file_name = if file_name.trim().is_empty() {
            FRAME_FILE_NAME.to_string()
        } else {
            file_name.to_string()
        };
        let mime = if mime.trim().is_empty() {
            JPEG_MIME.to_string()
        } else {
            mime.to_string()
        };
        Self {
            bytes,
            file_name,
            mime,
        }
    }
}

/// A live camera stream bound to a video element.
#[derive(Clone)]
pub struct CameraStream {
    stream: MediaStream,
}

impl CameraStream {
    pub fn stop(&self, video: Option<&HtmlVideoElement>) {
        for track in self.stream.get_tracks().iter() {
            match track.dyn_into::<MediaStreamTrack>() {
                Ok(track) => track.stop(),
                Err(_) => log::warn!("Skipping non-track entry in media stream"),
            }
        }
        if let Some(video) = video {
            video.set_src_object(None);
        }
    }
}

pub async fn open_camera(video: &HtmlVideoElement) -> Result<CameraStream, CaptureError> {
    let window = web_sys::window().ok_or(CaptureError::NoWindow)?;
    let devices = window
        .navigator()
        .media_devices()
        .map_err(|_| CaptureError::CameraUnavailable)?;
    let constraints = MediaStreamConstraints::new();
    constraints.set_video(&JsValue::TRUE);
    let promise = devices
        .get_user_media_with_constraints(&constraints)
        .map_err(|_| CaptureError::CameraUnavailable)?;
    let stream = JsFuture::from(promise)
        .await
        .map_err(|err| {
            log::error!("getUserMedia rejected: {:?}", err);
            CaptureError::CameraUnavailable
        })?
        .dyn_into::<MediaStream>()
        .map_err(|_| CaptureError::CameraUnavailable)?;
    video.set_src_object(Some(&stream));
    Ok(CameraStream { stream })
}

/// Waits for the stream metadata, then for `warm_up_ms` more so the
/// first frames are exposed properly.
pub async fn wait_until_ready(video: &HtmlVideoElement, warm_up_ms: u32) {
    let mut polls = 0;
    while video.ready_state() < HAVE_METADATA && polls < METADATA_MAX_POLLS {
        sleep_ms(METADATA_POLL_MS).await;
        polls += 1;
    }
    sleep_ms(warm_up_ms).await;
}

pub async fn capture_frame(
    video: &HtmlVideoElement,
    canvas: &HtmlCanvasElement,
) -> Result<ImageUpload, CaptureError> {
    let (width, height) = (video.video_width(), video.video_height());
    if !frame_is_ready(width, height) {
        return Err(CaptureError::VideoNotReady);
    }
    canvas.set_width(width);
    canvas.set_height(height);
    let context = canvas
        .get_context("2d")
        .map_err(|_| CaptureError::Encode)?
        .ok_or(CaptureError::Encode)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| CaptureError::Encode)?;
    context
        .draw_image_with_html_video_element(video, 0.0, 0.0)
        .map_err(|_| CaptureError::Encode)?;

    let blob = canvas_to_jpeg(canvas).await?;
    let bytes = blob_bytes(&blob).await.map_err(|_| CaptureError::Encode)?;
    Ok(ImageUpload::jpeg_frame(bytes))
}

/// Opens the camera, lets it settle for `delay_ms` after warm-up, grabs
/// one frame and releases the camera whatever the outcome.
pub async fn capture_with_camera(
    video: &HtmlVideoElement,
    canvas: &HtmlCanvasElement,
    delay_ms: u32,
) -> Result<ImageUpload, CaptureError> {
    let stream = open_camera(video).await?;
    wait_until_ready(video, CAMERA_WARM_UP_MS).await;
    sleep_ms(delay_ms).await;
    let frame = capture_frame(video, canvas).await;
    stream.stop(Some(video));
    frame
}

pub async fn read_file(file: &File) -> Result<ImageUpload, CaptureError> {
    let bytes = blob_bytes(file).await.map_err(|_| CaptureError::FileRead)?;
    Ok(ImageUpload::from_parts(bytes, &file.name(), &file.type_()))
}

/// Takes the chosen file and clears the input, so picking the same photo
/// again still fires `change`.
pub fn take_file(input: &HtmlInputElement) -> Option<File> {
    let file = input.files().and_then(|files| files.get(0));
    input.set_value("");
    file
}

pub fn frame_is_ready(width: u32, height: u32) -> bool {
    width > 0 && height > 0
}

async fn canvas_to_jpeg(canvas: &HtmlCanvasElement) -> Result<Blob, CaptureError> {
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        let callback = wasm_bindgen::closure::Closure::once_into_js(move |blob: JsValue| {
            let _ = resolve.call1(&JsValue::NULL, &blob);
        });
        if canvas
            .to_blob_with_type_and_encoder_options(
                callback.unchecked_ref(),
                JPEG_MIME,
                &JsValue::from_f64(JPEG_QUALITY),
            )
            .is_err()
        {
            let _ = reject.call0(&JsValue::NULL);
        }
    });
    JsFuture::from(promise)
        .await
        .map_err(|_| CaptureError::Encode)?
        .dyn_into::<Blob>()
        .map_err(|_| CaptureError::Encode)
}

async fn blob_bytes(blob: &Blob) -> Result<Vec<u8>, JsValue> {
    let buffer = JsFuture::from(blob.array_buffer()).await?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;
    use web_sys::DataTransfer;

    wasm_bindgen_test_configure!(run_in_browser);

    fn file_input() -> HtmlInputElement {
        let input = web_sys::window()
            .and_then(|w| w.document())
            .unwrap()
            .create_element("input")
            .unwrap()
            .dyn_into::<HtmlInputElement>()
            .unwrap();
        input.set_type("file");
        input
    }

    #[wasm_bindgen_test]
    fn taking_a_file_clears_the_input() {
        let input = file_input();
        let photo = File::new_with_str_sequence(
            &js_sys::Array::of1(&JsValue::from_str("jpeg")),
            "face.jpg",
        )
        .unwrap();
        let transfer = DataTransfer::new().unwrap();
        transfer.items().add_with_file(&photo).unwrap();
        input.set_files(transfer.files().as_ref());

        let taken = take_file(&input).unwrap();
        assert_eq!(taken.name(), "face.jpg");
        assert_eq!(input.value(), "");
        assert_eq!(input.files().map(|files| files.length()), Some(0));
        assert!(take_file(&input).is_none());
    }
}
