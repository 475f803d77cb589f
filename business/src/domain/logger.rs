/// Logging port for the business layer. The cart store reports degraded
/// persistence through `warn` instead of surfacing errors to callers.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
