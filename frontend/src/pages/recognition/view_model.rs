use super::utils::{scan_result_from_response, RecognitionStatus, ScanOutcome, ScanResult};
use crate::api::{ApiClient, ApiError};
use crate::config::{self, CAMERA_WARM_UP_MS};
use crate::utils::media::{capture_frame, open_camera, wait_until_ready, CameraStream};
use crate::utils::time::local_time_label;
use crate::utils::timers::sleep_ms;
use leptos::{html, *};
use web_sys::{HtmlCanvasElement, HtmlVideoElement};

#[derive(Clone, Copy)]
pub struct RecognitionViewModel {
    pub status: RwSignal<RecognitionStatus>,
    pub outcome: RwSignal<Option<ScanOutcome>>,
    pub video_ref: NodeRef<html::Video>,
    pub canvas_ref: NodeRef<html::Canvas>,
    api: StoredValue<ApiClient>,
    // Bumped on every start/stop; a scan only reports if its run is still current.
    run: StoredValue<u32>,
    stream: StoredValue<Option<(u32, CameraStream)>>,
}

impl RecognitionViewModel {
    pub fn is_scanning(&self) -> bool {
        self.status.get() == RecognitionStatus::Scanning
    }

    pub fn start(&self) {
        if self.status.get_untracked() == RecognitionStatus::Scanning {
            return;
        }
        let (Some(video), Some(canvas)) =
            (self.video_ref.get_untracked(), self.canvas_ref.get_untracked())
        else {
            self.finish(ScanResult::Failed("Camera preview is not ready".into()));
            return;
        };
        let run = self.next_run();
        self.outcome.set(None);
        self.status.set(RecognitionStatus::Scanning);

        let vm = *self;
        spawn_local(async move {
            let result = vm.scan(run, &video, &canvas).await;
            vm.release_camera(Some(run));
            if let Some(result) = result.filter(|_| vm.is_current(run)) {
                vm.finish(result);
            }
        });
    }

    pub fn stop(&self) {
        self.next_run();
        self.release_camera(None);
        self.status.set(RecognitionStatus::Idle);
    }

    pub fn reset(&self) {
        self.stop();
        self.outcome.set(None);
    }

    fn finish(&self, result: ScanResult) {
        self.outcome.set(Some(ScanOutcome {
            result,
            timestamp: local_time_label(),
        }));
        self.status.set(RecognitionStatus::Done);
    }

    fn next_run(&self) -> u32 {
        self.run.update_value(|run| *run = run.wrapping_add(1));
        self.run.get_value()
    }

    fn is_current(&self, run: u32) -> bool {
        self.run.try_get_value() == Some(run)
    }

    /// `None` releases whichever stream is open.
    fn release_camera(&self, run: Option<u32>) {
        let taken = self
            .stream
            .try_update_value(|slot| match (slot.as_ref(), run) {
                (Some((owner, _)), Some(run)) if *owner != run => None,
                _ => slot.take(),
            })
            .flatten();
        if let Some((_, stream)) = taken {
            let video = self.video_ref.get_untracked();
            stream.stop(video.as_deref());
        }
    }

    async fn scan(
        &self,
        run: u32,
        video: &HtmlVideoElement,
        canvas: &HtmlCanvasElement,
    ) -> Option<ScanResult> {
        let stream = match open_camera(video).await {
            Ok(stream) => stream,
            Err(err) => return Some(ScanResult::Failed(err.to_string())),
        };
        if !self.is_current(run) {
            stream.stop(Some(video));
            return None;
        }
        self.stream.set_value(Some((run, stream)));

        wait_until_ready(video, CAMERA_WARM_UP_MS).await;
        sleep_ms(config::timings().recognition_delay_ms).await;
        if !self.is_current(run) {
            return None;
        }

        let frame = match capture_frame(video, canvas).await {
            Ok(frame) => frame,
            Err(err) => return Some(ScanResult::Failed(ApiError::from(err).error)),
        };
        let response = self.api.get_value().recognize_face(frame).await;
        if let Err(err) = &response {
            log::warn!("Recognition request failed: {}", err);
        }
        Some(scan_result_from_response(response))
    }
}

pub fn use_recognition_view_model() -> RecognitionViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let vm = RecognitionViewModel {
        status: create_rw_signal(RecognitionStatus::Idle),
        outcome: create_rw_signal(None),
        video_ref: create_node_ref::<html::Video>(),
        canvas_ref: create_node_ref::<html::Canvas>(),
        api: store_value(api),
        run: store_value(0),
        stream: store_value(None),
    };
    on_cleanup(move || {
        if let Some(Some((_, stream))) = vm.stream.try_update_value(Option::take) {
            stream.stop(None);
        }
    });
    vm
}
