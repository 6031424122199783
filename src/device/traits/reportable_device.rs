use crate::device::structs::shadow_document::ShadowDocument;
use serde::Serialize;
use std::time::Duration;

/// A device that can describe its current state as a shadow report.
pub trait ReportableDevice {
    type Snapshot: Serialize;

    fn thing_name(&self) -> &str;

    /// How often the device wants its state reported.
    fn report_interval(&self) -> Duration;

    /// Captures the reportable properties at the moment of the call.
    fn snapshot(&self) -> Self::Snapshot;

    /// Renders `{"state":{"reported":<snapshot>}}`.
    fn report(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&ShadowDocument::reported(self.snapshot()))
    }
}
