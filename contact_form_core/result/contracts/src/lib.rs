use contact_form_models::{contact::SubmittedRecord, view::DisplayPayload};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ResultView: Send + Sync + 'static {
    /// Project a submitted record onto the values shown in the result area.
    fn project(&self, record: &SubmittedRecord) -> DisplayPayload;
}

#[cfg(feature = "mock")]
impl MockResultView {
    pub fn with_project(mut self, record: SubmittedRecord, result: DisplayPayload) -> Self {
        self.expect_project()
            .once()
            .with(mockall::predicate::eq(record))
            .return_const(result);
        self
    }
}
