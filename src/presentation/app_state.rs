// Application state for HTTP handlers
use crate::application::scale_service::ScaleService;
use chrono::FixedOffset;

#[derive(Clone)]
pub struct AppState {
    pub scale_service: ScaleService,
    pub reference_offset: FixedOffset,
}
