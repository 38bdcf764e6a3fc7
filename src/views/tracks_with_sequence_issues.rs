//! Report: releases with track number issues

use crate::components::{ReportHeader, release_list, report_layout};
use crate::i18n::Translator;
use crate::markup::Node;
use crate::model::{EntityType, ReportPage, ReportRelease};

pub const TITLE: &str = "Releases with track number issues";

pub const DESCRIPTION: &str = "This report lists all releases where the track numbers are not \
     continuous (e.g. there is no \"track 2\"), or with duplicated track numbers \
     (e.g. there are two \"track 4\"s).";

/// Report page listing releases whose track numbering has gaps or duplicates
pub fn tracks_with_sequence_issues(
    page: &ReportPage<ReportRelease>,
    i18n: &dyn Translator,
) -> Node {
    let header = ReportHeader {
        title: TITLE,
        description: DESCRIPTION,
        entity_type: EntityType::Release,
        total_entries: page.total_entries(),
        generated: &page.generated,
        filtered: page.filtered,
        can_be_filtered: page.can_be_filtered,
    };
    report_layout(&header, release_list(&page.items, &page.pager, i18n), i18n)
}
