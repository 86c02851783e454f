use std::sync::Arc;

use crate::server::util::gemini::GenerativeModel;

#[derive(Clone)]
pub struct AppState {
    pub model: Arc<dyn GenerativeModel>,
}
