//! Result ordering / 结果排序

use std::cmp::Ordering;

use super::schema::ScoredRecord;

/// Final score desc, matched keywords desc, name asc (natural order), then id.
///
/// Natural order compares digit runs by value. Han characters compare by code point,
/// not by pinyin or stroke count.
pub fn compare(a: &ScoredRecord, b: &ScoredRecord) -> Ordering {
    b.final_score
        .total_cmp(&a.final_score)
        .then_with(|| b.matched_keyword_count.cmp(&a.matched_keyword_count))
        .then_with(|| natord::compare(&a.record.name, &b.record.name))
        .then_with(|| a.record.name.cmp(&b.record.name))
        .then_with(|| a.record.id.cmp(&b.record.id))
}

/// Sort scored records into ranking order / 排序
pub fn rank(mut records: Vec<ScoredRecord>) -> Vec<ScoredRecord> {
    records.sort_by(compare);
    records
}
