use crate::areas::comparator::Comparator;
use crate::artifacts::diff::policy::AlignmentPolicy;
use crate::artifacts::report::summary::Report;
use anyhow::Context;
use std::io::Write;

impl Comparator {
    pub fn compare(&self, policy: AlignmentPolicy) -> anyhow::Result<Report> {
        let old = self
            .old()
            .load()
            .with_context(|| format!("failed to load old version {}", self.old().name()))?;
        let new = self
            .new_source()
            .load()
            .with_context(|| format!("failed to load new version {}", self.new_source().name()))?;

        tracing::info!(
            old = old.name(),
            new = new.name(),
            old_lines = old.len(),
            new_lines = new.len(),
            %policy,
            "aligning sources"
        );

        let alignment = policy.align(&old, &new);
        let report = Report::summarize(&alignment, old.name(), new.name());

        tracing::debug!(
            unchanged = report.tally().unchanged,
            added = report.tally().added,
            removed = report.tally().removed,
            modified = ?report.modified(),
            "alignment finished"
        );

        report.render(&mut **self.writer())?;
        self.writer().flush()?;

        Ok(report)
    }
}
