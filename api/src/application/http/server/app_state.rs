use std::sync::Arc;

use krishiseer_core::application::KrishiSeerService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: KrishiSeerService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: KrishiSeerService) -> Self {
        Self { args, service }
    }
}
