/// Source of one formatted reading per call.
///
/// Values come back as text so the table never depends on locale-specific
/// number formatting.
#[cfg_attr(test, mockall::automock)]
pub trait ValueGenerator: Send + Sync {
    fn generate(&self) -> String;
}
