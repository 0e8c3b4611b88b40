use super::*;

#[test]
fn push_appends_newest_last() {
    let mut queue = NoticeQueue::default();
    queue.push(NoticeKind::Success, "Issue moved successfully");
    queue.push(NoticeKind::Error, "Failed to move issue");

    let texts: Vec<&str> = queue.items().iter().map(|n| n.text.as_str()).collect();
    assert_eq!(texts, vec!["Issue moved successfully", "Failed to move issue"]);
    assert_eq!(queue.items()[1].kind, NoticeKind::Error);
}

#[test]
fn dismiss_removes_only_that_notice() {
    let mut queue = NoticeQueue::default();
    let first = queue.push(NoticeKind::Info, "one");
    let second = queue.push(NoticeKind::Info, "two");

    queue.dismiss(first);
    assert_eq!(queue.len(), 1);
    assert_eq!(queue.items()[0].id, second);

    queue.dismiss(first);
    assert_eq!(queue.len(), 1);
}

#[test]
fn queue_is_capped_dropping_oldest() {
    let mut queue = NoticeQueue::default();
    for i in 0..(MAX_VISIBLE_NOTICES + 2) {
        queue.push(NoticeKind::Info, format!("n{i}"));
    }
    assert_eq!(queue.len(), MAX_VISIBLE_NOTICES);
    assert_eq!(queue.items()[0].text, "n2");
}

#[test]
fn kinds_map_to_distinct_classes() {
    assert_ne!(NoticeKind::Success.css_class(), NoticeKind::Error.css_class());
    assert_ne!(NoticeKind::Error.css_class(), NoticeKind::Info.css_class());
}
