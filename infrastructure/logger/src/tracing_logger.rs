use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "Inventory -- ", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "Inventory -- ", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "Inventory -- ", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "Inventory -- ", "{}", message);
    }
}
